use crate::domain::{required_text, single_line, ValidationError};

/// A person's name as typed into a form, trimmed.
#[derive(Debug, Clone)]
pub struct SubmitterName(String);

impl SubmitterName {
    pub fn parse(field: &'static str, s: Option<String>) -> Result<SubmitterName, ValidationError> {
        required_text(field, s).map(Self)
    }

    /// The name with line breaks collapsed, safe to use in a subject line.
    pub fn for_header(&self) -> String {
        single_line(&self.0)
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
