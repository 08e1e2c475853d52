//! Form validation rules, shared by field-level checks, submit gating, and
//! the CLI. Each rule lives here exactly once.

use crate::error::ValidationError;
use chrono::Datelike;

/// Current calendar year, the upper bound for Art.year.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Art title: required, non-blank after trimming. Returns the trimmed
/// title that goes into the payload.
pub fn art_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("title", "Название обязательно"));
    }
    Ok(trimmed.to_string())
}

/// Art year: required, an integer, and not in the future. `current_year`
/// is passed in so tests are not tied to the wall clock.
pub fn art_year(raw: &str, current_year: i32) -> Result<i32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("year", "Год обязателен"));
    }
    let year: i32 = trimmed
        .parse()
        .map_err(|_| ValidationError::new("year", "Год должен быть числом"))?;
    if year > current_year {
        return Err(ValidationError::new("year", "Год не может быть в будущем"));
    }
    Ok(year)
}

pub fn artist_first_name(raw: &str) -> Result<String, ValidationError> {
    required(raw, "firstName", "Имя обязательно")
}

pub fn artist_last_name(raw: &str) -> Result<String, ValidationError> {
    required(raw, "lastName", "Фамилия обязательна")
}

pub fn classification_name(raw: &str) -> Result<String, ValidationError> {
    required(raw, "name", "Название обязательно")
}

fn required(raw: &str, field: &'static str, message: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_required() {
        assert_eq!(art_title("  Starry Night ").unwrap(), "Starry Night");
        assert_eq!(
            art_title("   ").unwrap_err().message,
            "Название обязательно"
        );
    }

    #[test]
    fn year_rejects_future_values() {
        assert_eq!(art_year("1889", 2026).unwrap(), 1889);
        assert_eq!(art_year("2026", 2026).unwrap(), 2026);
        let err = art_year("2027", 2026).unwrap_err();
        assert_eq!(err.field, "year");
        assert_eq!(err.message, "Год не может быть в будущем");
    }

    #[test]
    fn year_rejects_blank_and_garbage() {
        assert!(art_year("", 2026).is_err());
        assert_eq!(
            art_year("MDCCCLXXXIX", 2026).unwrap_err().message,
            "Год должен быть числом"
        );
    }

    #[test]
    fn artist_names_required() {
        assert!(artist_first_name("Ada").is_ok());
        assert!(artist_first_name(" ").is_err());
        assert!(artist_last_name("").is_err());
    }
}
