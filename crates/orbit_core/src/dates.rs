use chrono::{DateTime, Datelike, Utc};

use crate::{Error, Result};

/// Month abbreviations of the fixed pt-BR display locale.
const MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Format a publication date as `"25 mar 2021"`.
///
/// A missing date is a data-quality problem and fails fast with
/// [`Error::InvalidArgument`]; callers showing unpublished records must guard
/// before formatting instead of expecting a placeholder.
pub fn format_publication_date(date: Option<DateTime<Utc>>) -> Result<String> {
    let date = date.ok_or_else(|| {
        Error::InvalidArgument("publication date is missing".to_string())
    })?;
    Ok(format!(
        "{:02} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    ))
}
