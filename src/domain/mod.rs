use once_cell::sync::Lazy;
use regex::Regex;

pub use contact_submission::*;
pub use partnership_submission::*;
pub use submitter_email::*;
pub use submitter_name::*;

mod contact_submission;
mod partnership_submission;
mod submitter_email;
mod submitter_name;

/// Why a form submission was turned down before anything was sent.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The `{0}` field is missing or empty.")]
    MissingField(&'static str),
    #[error("`{0}` is not a valid email address.")]
    InvalidEmail(String),
}

/// Returns the trimmed value of a required text field.
pub fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

static LINE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("Invalid line break pattern"));

/// Collapses every run of carriage returns and line feeds into a single space,
/// so the value can be placed in a header line.
pub fn single_line(s: &str) -> String {
    LINE_BREAKS.replace_all(s, " ").into_owned()
}
