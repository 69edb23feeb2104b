use regex::Regex;
use std::sync::LazyLock;

/// `YYYY-MM-DD` at the start of the string. Anything may follow.
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date prefix pattern"));

/// Fixed UTC offset the NVD timestamps are rendered in
const NVD_UTC_OFFSET: &str = "-08:00";

/// Length of the `YYYY-MM-DD` prefix
const DATE_PREFIX_LEN: usize = 10;

/// Calendar components sliced out of a date string at fixed offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts {
    year: i32,
    month: i32,
    day: i32,
}

impl DateParts {
    /// Slices positions 0..4, 5..7 and 8..10. No calendar check is made,
    /// so "2024-02-31" and "2024-13-01" both decompose.
    fn slice(value: &str) -> Option<Self> {
        if !DATE_PREFIX.is_match(value) {
            return None;
        }

        Some(Self {
            year: value[0..4].parse().ok()?,
            month: value[5..7].parse().ok()?,
            day: value[8..10].parse().ok()?,
        })
    }
}

/// Returns true when both strings start with `YYYY-MM-DD` and the span fits
/// the NVD lookback window.
///
/// The NVD API rejects `lastMod` ranges longer than 120 days. The check here
/// approximates that limit with month arithmetic rather than counting days:
///
/// - the end must be later on at least one of year, month or day, and
/// - either both dates share a year and the month delta is at most 2, or the
///   range crosses exactly one new year with a month delta of -10 or less
///   (e.g. November to January).
pub fn is_valid_range(start: &str, end: &str) -> bool {
    let (Some(s), Some(e)) = (DateParts::slice(start), DateParts::slice(end)) else {
        return false;
    };

    let moves_forward = e.year > s.year || e.month > s.month || e.day > s.day;
    let month_delta = e.month - s.month;
    let within_same_year = e.year == s.year && month_delta <= 2;
    let wraps_new_year = e.year - s.year == 1 && month_delta <= -10;

    moves_forward && (within_same_year || wraps_new_year)
}

/// DateRange value object holding a validated pair of `YYYY-MM-DD` dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: String,
}

impl DateRange {
    /// Builds a range when `is_valid_range` accepts the pair.
    ///
    /// Only the `YYYY-MM-DD` prefix of each input is kept, so trailing text
    /// the prefix match tolerated never reaches the query string.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        if !is_valid_range(start, end) {
            return None;
        }

        Some(Self {
            start: start[..DATE_PREFIX_LEN].to_string(),
            end: end[..DATE_PREFIX_LEN].to_string(),
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Start of the first day, e.g. `2024-01-01T00:00:00-08:00`
    pub fn last_mod_start_date(&self) -> String {
        format!("{}T00:00:00{}", self.start, NVD_UTC_OFFSET)
    }

    /// End of the last day, e.g. `2024-02-15T23:59:59-08:00`
    pub fn last_mod_end_date(&self) -> String {
        format!("{}T23:59:59{}", self.end, NVD_UTC_OFFSET)
    }
}
