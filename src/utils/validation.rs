use crate::core::layout::MAX_SLIDER_MARKS;
use crate::utils::error::{DashError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(extension)) => Ok(()),
        Some(extension) => Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DashError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DashError::InvalidConfigValueError {
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
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Slider bounds must be finite, describe a non-empty interval, and the step
/// must divide it into at least one and at most `MAX_SLIDER_MARKS` ticks.
pub fn validate_slider(min: f64, max: f64, step: f64) -> Result<()> {
    for (field, value) in [("slider.min", min), ("slider.max", max), ("slider.step", step)] {
        if !value.is_finite() {
            return Err(DashError::InvalidConfigValueError {
                field: field.to_string(),
                value: value.to_string(),
                reason: "Value must be a finite number".to_string(),
            });
        }
    }
    validate_positive_number("slider.min", min, 0.0)?;
    if max <= min {
        return Err(DashError::InvalidConfigValueError {
            field: "slider.max".to_string(),
            value: max.to_string(),
            reason: format!("Value must be greater than slider.min ({})", min),
        });
    }
    validate_range("slider.step", step, f64::MIN_POSITIVE, max - min)?;

    let marks = ((max - min) / step).floor() + 1.0;
    if marks > MAX_SLIDER_MARKS as f64 {
        return Err(DashError::InvalidConfigValueError {
            field: "slider.step".to_string(),
            value: step.to_string(),
            reason: format!("Step yields {} marks; at most {} are allowed", marks, MAX_SLIDER_MARKS),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("dataset.path", "spacex_launch_dash.csv").is_ok());
        assert!(validate_path("dataset.path", "").is_err());
        assert!(validate_path("dataset.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server.port", 8059u16, 1).is_ok());
        assert!(validate_positive_number("server.port", 0u16, 1).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("dataset.path", "data/launches.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("dataset.path", "data/launches.CSV", &["csv"]).is_ok());
        assert!(validate_file_extension("dataset.path", "data/launches.txt", &["csv"]).is_err());
        assert!(validate_file_extension("dataset.path", "launches", &["csv"]).is_err());
    }

    #[test]
    fn test_validate_slider() {
        assert!(validate_slider(0.0, 10000.0, 1000.0).is_ok());
        assert!(validate_slider(5000.0, 5000.0, 1000.0).is_err());
        assert!(validate_slider(-1.0, 10000.0, 1000.0).is_err());
        assert!(validate_slider(0.0, 10000.0, 0.0).is_err());
        assert!(validate_slider(0.0, 1000.0, 2000.0).is_err());
    }

    #[test]
    fn test_validate_slider_rejects_non_finite_and_tiny_steps() {
        assert!(validate_slider(0.0, f64::INFINITY, 1000.0).is_err());
        assert!(validate_slider(f64::NAN, 10000.0, 1000.0).is_err());
        assert!(validate_slider(0.0, 10000.0, f64::NAN).is_err());
        assert!(matches!(
            validate_slider(0.0, 10000.0, 1e-9),
            Err(DashError::InvalidConfigValueError { ref field, .. }) if field == "slider.step"
        ));
        assert!(validate_slider(0.0, 10000.0, 100.0).is_ok());
        assert!(validate_slider(0.0, 10000.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("x".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("a", &present).unwrap(), "x");
        assert!(matches!(
            validate_required_field("a", &missing),
            Err(DashError::MissingConfigError { .. })
        ));
    }
}
