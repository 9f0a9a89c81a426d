use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an ISO `YYYY-MM-DD` date argument.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error} (expected YYYY-MM-DD)"))
}

/// Parse an optional date argument, defaulting to `today`.
pub fn parse_date_or(
    raw: Option<&str>,
    field: &str,
    today: NaiveDate,
) -> anyhow::Result<NaiveDate> {
    raw.map_or(Ok(today), |value| parse_date(value, field))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{parse_date, parse_date_or, parse_enum};
    use crate::cli::OutputFormat;

    #[test]
    fn parses_snake_case_enum() {
        let format: OutputFormat = parse_enum("table", "format").expect("format should parse");
        assert_eq!(format, OutputFormat::Table);
    }

    #[test]
    fn enum_parsing_ignores_case() {
        let format: OutputFormat = parse_enum("JSON", "format").expect("format should parse");
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<OutputFormat>("xml", "format").expect_err("should fail");
        assert!(err.to_string().contains("invalid format 'xml'"));
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(
            parse_date("2025-03-09", "start").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
    }

    #[test]
    fn rejects_non_iso_date() {
        let err = parse_date("09/03/2025", "start").unwrap_err();
        assert!(err.to_string().contains("invalid start '09/03/2025'"));
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(parse_date_or(None, "on", today).unwrap(), today);
    }
}
