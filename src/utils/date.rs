use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;
use crate::timeline::DayKey;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Parse user input into the zero-padded key used by the index
pub(crate) fn parse_day_key(s: &str) -> Result<DayKey, AppError> {
    parse_date(s).map(DayKey::from_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_formats() {
        let expected = DayKey::new("2024", "05", "07");
        assert_eq!(parse_day_key("2024-05-07").unwrap(), expected);
        assert_eq!(parse_day_key("20240507").unwrap(), expected);
        assert_eq!(parse_day_key(" 2024-05-07 ").unwrap(), expected);
    }

    #[test]
    fn rejects_invalid_dates() {
        for input in ["2024-02-30", "tomorrow", "2024/05/07", ""] {
            let err = parse_day_key(input).unwrap_err();
            assert!(matches!(err, AppError::InvalidDate { .. }), "{input}");
        }
    }
}
