use crate::utils::error::{RandomizerError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RandomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RandomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RandomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RandomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(RandomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 選項清單不可為空，也不可重複
pub fn validate_option_list<T>(field_name: &str, options: &[T]) -> Result<()>
where
    T: std::hash::Hash + Eq + std::fmt::Display,
{
    if options.is_empty() {
        return Err(RandomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one option is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option) {
            return Err(RandomizerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: option.to_string(),
                reason: "Duplicate option".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "randomizer.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("counts", 5, 1).is_ok());
        assert!(validate_positive_number("counts", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("digit_widths", 18u32, 1, 18).is_ok());
        assert!(validate_range("digit_widths", 19u32, 1, 18).is_err());
        assert!(validate_range("digit_widths", 0u32, 1, 18).is_err());
    }

    #[test]
    fn test_validate_option_list() {
        assert!(validate_option_list("counts", &[1usize, 3, 5, 10]).is_ok());
        assert!(validate_option_list::<usize>("counts", &[]).is_err());
        assert!(validate_option_list("counts", &[1usize, 3, 3]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("failure_prefix", "Conversion failed: ").is_ok());
        assert!(validate_non_empty_string("failure_prefix", "   ").is_err());
    }
}
