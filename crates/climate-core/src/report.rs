//! Summary report rendering
//!
//! Reproduces the report layout of the original NOAA climate analyzer:
//! a line listing the state codes found, then one block per state in
//! first-seen order.

use std::fmt::Display;
use std::fmt::Write;

use chrono::TimeZone;

use crate::aggregate::{StateStats, StateTable};
use crate::types::Timestamp;

/// ctime-style layout for extrema timestamps, e.g. "Mon Aug  3 11:00:00 2015".
const TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Render the final report.
///
/// The timezone is a parameter so the CLI can print local times while
/// tests pin UTC.
pub fn render_report<Tz>(table: &StateTable, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    out.push_str("States found:\n");
    for code in table.codes() {
        out.push_str(code);
        out.push(' ');
    }
    out.push('\n');

    for stats in table.iter() {
        // Entries only exist once an observation folded in, so the
        // averages below are well-defined; skip rather than divide by
        // zero if that ever stops holding.
        if stats.record_count == 0 {
            continue;
        }
        render_state(&mut out, stats, tz);
    }

    out
}

fn render_state<Tz>(out: &mut String, stats: &StateStats, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let _ = writeln!(out, " -- State: {} --", stats.code);
    let _ = writeln!(out, "Number of Records: {}", stats.record_count);
    let _ = writeln!(out, "Average Humidity: {:.1}%", stats.average_humidity());
    let _ = writeln!(
        out,
        "Average Temperature: {:.1}F",
        stats.average_temperature()
    );
    let _ = writeln!(out, "Max Temperature: {:.1}F", stats.max_temperature);
    let _ = writeln!(
        out,
        "Max Temperature on: {}",
        format_time(stats.max_temperature_at, tz)
    );
    let _ = writeln!(out, "Min Temperature: {:.1}F", stats.min_temperature);
    let _ = writeln!(
        out,
        "Min Temperature on: {}",
        format_time(stats.min_temperature_at, tz)
    );
    let _ = writeln!(out, "Lightning Strikes: {}", stats.lightning_count);
    let _ = writeln!(out, "Records with Snow Cover: {}", stats.snow_count);
    let _ = writeln!(
        out,
        "Average Cloud Cover: {:.1}%",
        stats.average_cloud_cover()
    );
}

fn format_time<Tz>(timestamp: Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(timestamp, 0).earliest() {
        Some(datetime) => datetime.format(TIME_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}
