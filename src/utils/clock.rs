use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Source of "now" for everything that compares against the current moment
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// True when the event instant lies strictly before now, both seen from the reference zone.
pub fn is_past(event_date: &DateTime<Utc>, clock: &dyn Clock, offset: &FixedOffset) -> bool {
    let event = event_date.with_timezone(offset);
    let now = clock.now().with_timezone(offset);
    event < now
}

/// Midnight of the current day in the reference zone
pub fn start_of_today(clock: &dyn Clock, offset: &FixedOffset) -> DateTime<Utc> {
    let today = clock.now().with_timezone(offset).date_naive();
    local_to_utc(today.and_time(NaiveTime::MIN), offset)
}

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse what a date input submits.
///
/// RFC 3339 values carry their own offset. `datetime-local` values
/// (`2026-10-19T18:30`) and bare dates are read as reference-zone wall time.
pub fn parse_event_date(input: &str, offset: &FixedOffset) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(local_to_utc(naive, offset));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| local_to_utc(date.and_time(NaiveTime::MIN), offset))
}

fn local_to_utc(naive: NaiveDateTime, offset: &FixedOffset) -> DateTime<Utc> {
    // a fixed offset maps every wall time to exactly one instant
    offset
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}
