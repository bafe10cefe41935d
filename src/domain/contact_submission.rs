use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;

/// A visitor joining through the contact form.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
}
