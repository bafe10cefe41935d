use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;
use crate::domain::{required_text, single_line, ValidationError};

/// A sponsorship package as shown on the website, e.g. `Gold` for `$5,000`.
#[derive(Debug, Clone)]
pub struct Tier {
    name: String,
    price: String,
}

impl Tier {
    pub fn parse(name: Option<String>, price: Option<String>) -> Result<Tier, ValidationError> {
        Ok(Self {
            name: required_text("tierName", name)?,
            price: required_text("tierPrice", price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form display price.
    pub fn price(&self) -> &str {
        &self.price
    }

    /// `Gold – $5,000`
    pub fn label(&self) -> String {
        format!("{} – {}", self.name, self.price)
    }
}

/// A prospective sponsor asking about a tier.
#[derive(Debug, Clone)]
pub struct PartnershipSubmission {
    pub full_name: SubmitterName,
    pub company: String,
    pub email: SubmitterEmail,
    pub phone: Option<String>,
    pub tier: Tier,
}

impl PartnershipSubmission {
    /// `Grace Hopper – Gold ($5,000)`, without line breaks.
    pub fn lead_summary(&self) -> String {
        format!(
            "{} – {} ({})",
            self.full_name.for_header(),
            single_line(self.tier.name()),
            single_line(self.tier.price())
        )
    }
}

/// A blank phone number is the same as no phone number.
pub fn optional_phone(phone: Option<String>) -> Option<String> {
    phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}
