//! Campaign name date prefix

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// An already applied `YYYYMMDD_` prefix, ASCII digits only
static DATE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}_").expect("invalid date prefix regex"));

/// Compose the campaign name for a newly selected (or cleared) delivery date.
///
/// Any leading `YYYYMMDD_` is stripped first, so picking a date twice
/// replaces the prefix instead of stacking it. With no date the stripped
/// remainder is returned.
pub fn apply_date(selected: Option<NaiveDate>, current: &str) -> String {
    let remainder = DATE_PREFIX_RE.replace(current, "");
    match selected {
        Some(date) => format!("{}_{}", date.format("%Y%m%d"), remainder),
        None => remainder.into_owned(),
    }
}
