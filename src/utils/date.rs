//! Publish date formatting.

use anyhow::{Result, bail};
use chrono::{
    DateTime, Utc,
    format::{Item, StrftimeItems},
};

/// Check that `format` is a valid `strftime` pattern.
pub fn check_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("invalid date format `{format}`");
    }
    Ok(())
}

/// Format `date` with a `strftime` pattern, e.g. `%-m/%-d/%Y` → `3/7/2024`.
pub fn format_date(date: &DateTime<Utc>, format: &str) -> Result<String> {
    check_format(format)?;
    Ok(date.format_with_items(StrftimeItems::new(format)).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap()
    }

    #[test]
    fn test_format_date_default_pattern() {
        assert_eq!(format_date(&date(), "%-m/%-d/%Y").unwrap(), "3/7/2024");
    }

    #[test]
    fn test_format_date_iso_and_long() {
        assert_eq!(format_date(&date(), "%Y-%m-%d").unwrap(), "2024-03-07");
        assert_eq!(format_date(&date(), "%B %-d, %Y").unwrap(), "March 7, 2024");
    }

    #[test]
    fn test_invalid_format_is_error() {
        assert!(check_format("%Q").is_err());
        assert!(format_date(&date(), "%Y-%Q").is_err());
    }

    #[test]
    fn test_plain_text_format_is_valid() {
        assert!(check_format("published").is_ok());
    }
}
