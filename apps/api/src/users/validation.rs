use crate::errors::AppError;

const MAX_NAME_LEN: usize = 100;
const MAX_NOTE_LEN: usize = 500;

/// Trims a required name field. Empty or overlong values are rejected.
pub fn clean_name(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(value.to_string())
}

/// Trims and lowercases an email address so uniqueness checks are
/// case-insensitive. Only the basic `local@domain.tld` shape is checked.
pub fn clean_email(value: &str) -> Result<String, AppError> {
    let email = value.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::Validation(format!(
            "'{}' is not a valid email address",
            value.trim()
        )));
    }
    Ok(email)
}

/// Blank optional text becomes `None`.
pub fn clean_note(field: &str, value: Option<&str>) -> Result<Option<String>, AppError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > MAX_NOTE_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be at most {MAX_NOTE_LEN} characters"
        )));
    }
    Ok(Some(value.to_string()))
}
