use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::domain::{ContactSubmission, SubmitterEmail, SubmitterName, ValidationError};
use crate::email_client::{send_both, MailRelay, Outbox};
use crate::routes::{FormError, Submitted};
use crate::templates::{contact_notification, contact_welcome, format_submitted_at};

// Every field is optional here so that a missing field is reported by our own
// validation rather than by the JSON extractor.
#[derive(serde::Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        // Both presence checks come before the shape check.
        let name = SubmitterName::parse("name", form.name)?;
        let email = form
            .email
            .filter(|e| !e.is_empty())
            .ok_or(ValidationError::MissingField("email"))?;
        let email = SubmitterEmail::parse(email)?;
        Ok(Self { name, email })
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, relay, outbox),
    fields(submitter_email = tracing::field::Empty)
)]
pub async fn contact(
    form: web::Json<ContactForm>,
    relay: web::Data<dyn MailRelay>,
    outbox: web::Data<Outbox>,
) -> Result<HttpResponse, FormError> {
    let submission: ContactSubmission = form.into_inner().try_into()?;
    tracing::Span::current().record(
        "submitter_email",
        &tracing::field::display(&submission.email),
    );

    let submitted_at = format_submitted_at(Utc::now());
    send_both(
        relay.get_ref(),
        contact_welcome(&outbox, &submission),
        contact_notification(&outbox, &submission, &submitted_at),
    )
    .await
    .map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Email send error");
        FormError::Delivery(e)
    })?;

    Ok(HttpResponse::Ok().json(Submitted::new()))
}
