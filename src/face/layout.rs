//! Row layout for the time and date blocks
//!
//! All offsets are relative to the block origin handed in from the motion
//! engine and match the fixed glyph widths of the bitmap assets: large digits
//! on a 21 px grid with a 9 px colon, small digits on a 13 px grid.

use chrono::{Datelike, NaiveDate};
use glam::IVec2;

use super::glyphs::{BatteryReading, Glyph, Placement};

/// Lay out the time block: hour digits, colon, minute digits and the mode
/// marker. Always six placements.
///
/// In 12-hour mode the tens digit is blanked below 10 o'clock and midnight
/// reads "12"; in 24-hour mode the leading zero is kept and the AM/PM slot
/// holds a blank.
pub fn time_row(hour: u32, minute: u32, clock_24h: bool, origin: IVec2, inverted: bool) -> Vec<Placement> {
    let mut row = Vec::with_capacity(6);
    let mut put = |glyph: Glyph, dx: i32| {
        row.push(Placement {
            glyph,
            origin: origin + IVec2::new(dx, 0),
            inverted,
        });
    };

    if clock_24h {
        put(Glyph::LargeDigit((hour / 10) as u8), 0);
        put(Glyph::LargeDigit((hour % 10) as u8), 21);
        put(Glyph::ModeBlank, 93);
    } else {
        put(if hour >= 12 { Glyph::Pm } else { Glyph::Am }, 93);

        let display = hour % 12;
        if display == 0 {
            // Midnight and noon read "12"
            put(Glyph::LargeDigit(1), 0);
            put(Glyph::LargeDigit(2), 21);
        } else {
            if display < 10 {
                put(Glyph::LargeBlank, 0);
            } else {
                put(Glyph::LargeDigit(1), 0);
            }
            put(Glyph::LargeDigit((display % 10) as u8), 21);
        }
    }

    put(Glyph::Colon, 42);
    put(Glyph::LargeDigit((minute / 10) as u8), 51);
    put(Glyph::LargeDigit((minute % 10) as u8), 72);

    row
}

/// Lay out the date block: weekday and battery cluster on the first line,
/// the slash-separated date on a second line 23 px below. Always thirteen
/// placements.
///
/// The battery's leading slot shows "1" only at a full charge and a plus sign
/// while charging; the tens digit is blanked below 10 percent. A full charge
/// therefore reads "1", blank, "0" - same as the original assets.
pub fn date_row(
    date: NaiveDate,
    month_first: bool,
    battery: BatteryReading,
    origin: IVec2,
    inverted: bool,
) -> Vec<Placement> {
    let mut row = Vec::with_capacity(13);
    let mut put = |glyph: Glyph, dx: i32, dy: i32| {
        row.push(Placement {
            glyph,
            origin: origin + IVec2::new(dx, dy),
            inverted,
        });
    };

    put(Glyph::Day(date.weekday()), 0, 0);

    let mut charge = battery.charge_percent.min(100);
    if charge == 100 {
        put(Glyph::SmallDigit(1), 52, 0);
    } else if battery.charging {
        put(Glyph::Plus, 52, 0);
    } else {
        put(Glyph::SmallBlank, 52, 0);
    }
    charge %= 100;
    if charge < 10 {
        put(Glyph::SmallBlank, 65, 0);
    } else {
        put(Glyph::SmallDigit(charge / 10), 65, 0);
    }
    put(Glyph::SmallDigit(charge % 10), 78, 0);
    put(Glyph::Percent, 91, 0);

    let month = date.month() as u8;
    let day = date.day() as u8;
    let (first, second) = if month_first { (month, day) } else { (day, month) };
    put(Glyph::SmallDigit(first / 10), 0, 23);
    put(Glyph::SmallDigit(first % 10), 13, 23);
    put(Glyph::Slash, 26, 23);
    put(Glyph::SmallDigit(second / 10), 39, 23);
    put(Glyph::SmallDigit(second % 10), 52, 23);
    put(Glyph::Slash, 65, 23);

    let year = (date.year().rem_euclid(100)) as u8;
    put(Glyph::SmallDigit(year / 10), 78, 23);
    put(Glyph::SmallDigit(year % 10), 91, 23);

    row
}
