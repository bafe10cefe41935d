use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::domain::{
    optional_phone, required_text, PartnershipSubmission, SubmitterEmail, SubmitterName, Tier,
    ValidationError,
};
use crate::email_client::{send_both, MailRelay, Outbox};
use crate::routes::{FormError, Submitted};
use crate::templates::{format_submitted_at, partnership_confirmation, partnership_notification};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipForm {
    full_name: Option<String>,
    company: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    tier_name: Option<String>,
    tier_price: Option<String>,
}

impl TryFrom<PartnershipForm> for PartnershipSubmission {
    type Error = ValidationError;

    fn try_from(form: PartnershipForm) -> Result<Self, Self::Error> {
        let full_name = SubmitterName::parse("fullName", form.full_name)?;
        let company = required_text("company", form.company)?;
        let email = form
            .email
            .filter(|e| !e.is_empty())
            .ok_or(ValidationError::MissingField("email"))?;
        let tier = Tier::parse(form.tier_name, form.tier_price)?;
        let email = SubmitterEmail::parse(email)?;
        Ok(Self {
            full_name,
            company,
            email,
            phone: optional_phone(form.phone),
            tier,
        })
    }
}

#[tracing::instrument(
    name = "Handling a partnership request",
    skip(form, relay, outbox),
    fields(submitter_email = tracing::field::Empty, tier = tracing::field::Empty)
)]
pub async fn request_partnership(
    form: web::Json<PartnershipForm>,
    relay: web::Data<dyn MailRelay>,
    outbox: web::Data<Outbox>,
) -> Result<HttpResponse, FormError> {
    let submission: PartnershipSubmission = form.into_inner().try_into()?;
    let span = tracing::Span::current();
    span.record("submitter_email", &tracing::field::display(&submission.email));
    span.record("tier", &tracing::field::display(submission.tier.name()));

    let submitted_at = format_submitted_at(Utc::now());
    send_both(
        relay.get_ref(),
        partnership_confirmation(&outbox, &submission),
        partnership_notification(&outbox, &submission, &submitted_at),
    )
    .await
    .map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Email send error");
        FormError::Delivery(e)
    })?;

    Ok(HttpResponse::Ok().json(Submitted::new()))
}
