use crate::utils::error::{OrderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(OrderError::InvalidDimension {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(OrderError::InvalidDimension {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Menu choices are whole numbers; anything else yields `None`.
pub fn parse_choice(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

pub fn parse_dimension(field_name: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|e| OrderError::InvalidDimension {
            field: field_name.to_string(),
            value: trimmed.to_string(),
            reason: format!("Not a number: {}", e),
        })?;

    validate_positive_dimension(field_name, value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_dimension() {
        assert!(validate_positive_dimension("width", 1.5).is_ok());
        assert!(validate_positive_dimension("width", 0.0).is_err());
        assert!(validate_positive_dimension("width", -2.0).is_err());
        assert!(validate_positive_dimension("width", f64::NAN).is_err());
        assert!(validate_positive_dimension("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("material", 2, 1, 3).is_ok());
        assert!(validate_range("material", 0, 1, 3).is_err());
        assert!(validate_range("material", 4, 1, 3).is_err());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 2\n"), Some(2));
        assert_eq!(parse_choice("0"), Some(0));
        assert_eq!(parse_choice("two"), None);
        assert_eq!(parse_choice("1.0"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("width", "2.5\n").unwrap(), 2.5);
        assert_eq!(parse_dimension("height", "3").unwrap(), 3.0);
        assert!(parse_dimension("width", "wide").is_err());
        assert!(parse_dimension("width", "-1").is_err());
        assert!(parse_dimension("width", "inf").is_err());
    }
}
