use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Parses a civil date in `YYYY-MM-DD` form.
pub fn parse_civil_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date format. Use YYYY-MM-DD."))
}

/// UTC offset of `tz` at the current instant, in fractional hours.
pub fn utc_offset_hours_now(tz: Tz) -> f64 {
    offset_hours(&Utc::now().with_timezone(&tz))
}

/// UTC offset of `tz` at the wall-clock midnight of `date`, in fractional
/// hours.
///
/// Ambiguous midnights (clocks rolled back over midnight) take the earlier
/// reading. A midnight skipped entirely by a spring-forward jump is read as
/// UTC instead, which lands on the offset in force around the transition.
pub fn utc_offset_hours_on(tz: Tz, date: NaiveDate) -> f64 {
    let midnight = date.and_time(NaiveTime::MIN);
    let local = tz
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight));

    offset_hours(&local)
}

fn offset_hours(instant: &DateTime<Tz>) -> f64 {
    f64::from(instant.offset().fix().local_minus_utc()) / 3600.0
}

/// Renders an offset with an explicit sign for non-negative values and at
/// least one fractional digit, e.g. `+5.5`, `+5.75`, `-5.0`, `+0.0`.
pub fn format_offset_hours(hours: f64) -> String {
    let sign = if hours < 0.0 { "-" } else { "+" };
    let magnitude = hours.abs();

    if magnitude.fract() == 0.0 {
        format!("{}{:.1}", sign, magnitude)
    } else {
        format!("{}{}", sign, magnitude)
    }
}
