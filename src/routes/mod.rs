pub use contact::*;
pub use cors::*;
pub use form_error::*;
pub use health_check::*;
pub use partnership::*;

mod contact;
mod cors;
mod form_error;
mod health_check;
mod partnership;

/// Body of every successful form submission.
#[derive(serde::Serialize)]
pub struct Submitted {
    success: bool,
}

impl Submitted {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for Submitted {
    fn default() -> Self {
        Self::new()
    }
}
