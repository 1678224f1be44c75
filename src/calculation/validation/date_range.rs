use jiff::civil::{Date, DateTime, Time};
use jiff::fmt::temporal::Pieces;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

use crate::calculation::validation_report::DateRangeIssue;

const MIN_PERIOD: SignedDuration = SignedDuration::from_hours(24);

/// A parsed period bound.
struct Bound {
    at: Timestamp,
    /// The calendar date as written, in the bound's own offset.
    written_date: Date,
}

/// Checks that the billing period bounds describe a full, month-aligned period.
///
/// A missing bound or an unparseable one is reported alone, nothing else is checked then.
pub fn check(start: Option<&str>, end: Option<&str>) -> Vec<DateRangeIssue> {
    let (Some(start), Some(end)) = (non_empty(start), non_empty(end)) else {
        return vec![DateRangeIssue::MissingBounds];
    };

    let (start_bound, end_bound) = match (parse_bound(start), parse_bound(end)) {
        (Ok(start_bound), Ok(end_bound)) => (start_bound, end_bound),
        (Err(e), _) | (_, Err(e)) => return vec![DateRangeIssue::InvalidFormat(e.to_string())],
    };

    let mut issues = vec![];

    if end_bound.at <= start_bound.at {
        issues.push(DateRangeIssue::EndNotAfterStart {
            start: start.to_owned(),
            end: end.to_owned(),
        });
    }

    // Independent of the order check, so an inverted range reports a negative span.
    let span = end_bound.at.duration_since(start_bound.at);
    if span < MIN_PERIOD {
        issues.push(DateRangeIssue::TooShort {
            hours: span.as_secs_f64() / 3600.0,
        });
    }

    // Monthly analysis. Mid-month windows are flagged, not rejected.
    if start_bound.written_date.day() != 1 {
        issues.push(DateRangeIssue::NotMonthStart {
            start: start.to_owned(),
        });
    }

    issues
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// RFC 3339 with an offset, or a naive date/date-time read as UTC.
fn parse_bound(raw: &str) -> Result<Bound, jiff::Error> {
    if let Ok(at) = raw.parse::<Timestamp>() {
        let written_date = Pieces::parse(raw)?.date();

        return Ok(Bound { at, written_date });
    }

    let civil = match raw.parse::<DateTime>() {
        Ok(civil) => civil,
        Err(_) => raw.parse::<Date>()?.to_datetime(Time::midnight()),
    };

    Ok(Bound {
        at: civil.to_zoned(TimeZone::UTC)?.timestamp(),
        written_date: civil.date(),
    })
}
