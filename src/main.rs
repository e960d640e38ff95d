//! Ricochet Face entry point
//!
//! Stands in for the watch host: a 1 Hz tick timer drives the watchface and
//! stdin lines play the part of the button/tap events. The composited frame
//! is logged rather than drawn; a display renderer would consume the same
//! placement list.

use std::io::BufRead;
use std::time::Duration;

use crossbeam_channel::{Receiver, select, unbounded};

use ricochet_face::Watchface;
use ricochet_face::face::BatteryReading;
use ricochet_face::settings::Settings;

/// Input events from the host
#[derive(Debug, Clone, Copy)]
enum Command {
    ToggleClockMode,
    ToggleDateOrder,
    ToggleNight,
    Select,
    Tap,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "d" => Some(Command::ToggleClockMode),
        "u" => Some(Command::ToggleDateOrder),
        "n" => Some(Command::ToggleNight),
        "s" => Some(Command::Select),
        "t" => Some(Command::Tap),
        "q" => Some(Command::Quit),
        _ => None,
    }
}

fn spawn_input() -> Receiver<Command> {
    let (tx, rx) = unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(cmd) = parse_command(&line) {
                let quit = matches!(cmd, Command::Quit);
                if tx.send(cmd).is_err() || quit {
                    break;
                }
            }
        }
    });
    rx
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let mut face = Watchface::new(settings, rand::random());

    let seconds = crossbeam_channel::tick(Duration::from_secs(1));
    let input = spawn_input();

    log::info!("ricochet-face: d=clock mode, u=date order, n=night, s=select, t=tap, q=quit");

    loop {
        select! {
            recv(seconds) -> _ => {
                face.second_tick();

                let now = chrono::Local::now().naive_local();
                // No battery service on this host; report a full charge.
                let battery = BatteryReading { charge_percent: 100, charging: false };
                let frame = face.frame(&now, battery);
                let (time_pos, date_pos) = face.motion.positions();
                log::info!(
                    "{} [{:?}] time@({:>3},{:>3}) date@({:>3},{:>3})",
                    now.format("%H:%M:%S"),
                    face.phase(),
                    time_pos.x, time_pos.y,
                    date_pos.x, date_pos.y,
                );
                log::debug!("{} glyphs composited", frame.len());
            }
            recv(input) -> msg => {
                match msg {
                    Ok(Command::Quit) | Err(_) => break,
                    Ok(Command::ToggleClockMode) => {
                        face.toggle_clock_mode();
                        face.settings.save();
                    }
                    Ok(Command::ToggleDateOrder) => {
                        face.toggle_date_order();
                        face.settings.save();
                    }
                    Ok(Command::ToggleNight) => {
                        face.toggle_night();
                        face.settings.save();
                    }
                    Ok(Command::Select) => {
                        face.select_press();
                        face.settings.save();
                    }
                    Ok(Command::Tap) => face.tap(),
                }
            }
        }
    }

    face.settings.save();
}
