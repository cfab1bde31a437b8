use crate::utils::error::{CourseError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CourseError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CourseError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CourseError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CourseError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CourseError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses user-entered text as a finite, non-negative decimal.
pub fn parse_non_negative_decimal(field_name: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CourseError::invalid_input(field_name, input, "not a number"))?;

    if !value.is_finite() {
        return Err(CourseError::invalid_input(
            field_name,
            input,
            "value must be finite",
        ));
    }
    if value < 0.0 {
        return Err(CourseError::invalid_input(
            field_name,
            input,
            "value cannot be negative",
        ));
    }
    Ok(value)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CourseError::invalid_input(
            field_name,
            &value.to_string(),
            format!("value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://api.nasa.gov/").is_ok());
        assert!(validate_url("api.base_url", "http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("api.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_parse_non_negative_decimal() {
        assert_eq!(parse_non_negative_decimal("amount", " 11.56 ").unwrap(), 11.56);
        assert_eq!(parse_non_negative_decimal("amount", "0").unwrap(), 0.0);
        assert!(parse_non_negative_decimal("amount", "abc").is_err());
        assert!(parse_non_negative_decimal("amount", "").is_err());
        assert!(parse_non_negative_decimal("amount", "-1").is_err());
        assert!(parse_non_negative_decimal("amount", "NaN").is_err());
        assert!(parse_non_negative_decimal("amount", "inf").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("planet", 1usize, 1, 6).is_ok());
        assert!(validate_range("planet", 6usize, 1, 6).is_ok());
        assert!(validate_range("planet", 0usize, 1, 6).is_err());
        assert!(validate_range("planet", 7usize, 1, 6).is_err());
    }
}
