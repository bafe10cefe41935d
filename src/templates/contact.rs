use crate::domain::ContactSubmission;
use crate::email_client::{EmailMessage, Outbox, ORGANIZATION_NAME};
use crate::templates::{mailto, notification_layout, submitter_layout, DetailRows, PINK};
use crate::utils::escape;

pub fn contact_welcome(outbox: &Outbox, submission: &ContactSubmission) -> EmailMessage {
    let name = escape(submission.name.as_ref());
    let content = format!(
        r#"<p style="margin:0 0 24px;font-size:16px;color:#e8d9ff;line-height:1.6;">
            Hey {name}, thanks for joining {ORGANIZATION_NAME}. We'll be in touch soon with updates on our next event.
          </p>"#
    );
    EmailMessage {
        from: outbox.organization_sender(),
        to: submission.email.as_ref().to_string(),
        reply_to: None,
        subject: format!("Welcome to {}! 🎉", ORGANIZATION_NAME),
        html_body: submitter_layout(
            &format!("Welcome to {}", ORGANIZATION_NAME),
            PINK,
            "You're in! 🎉",
            &content,
        ),
    }
}

/// Tells staff someone joined; replies go straight to the visitor.
pub fn contact_notification(
    outbox: &Outbox,
    submission: &ContactSubmission,
    submitted_at: &str,
) -> EmailMessage {
    let rows = DetailRows::default()
        .text("Name", submission.name.as_ref())
        .markup("Email", mailto(submission.email.as_ref()))
        .text("Submitted", submitted_at);
    EmailMessage {
        from: outbox.website_sender(),
        to: outbox.inbox(),
        reply_to: Some(submission.email.as_ref().to_string()),
        subject: format!("[New Contact] {}", submission.name.for_header()),
        html_body: notification_layout(
            "New Contact Submission",
            PINK,
            "Someone signed up via the website contact form.",
            &rows,
            "",
        ),
    }
}
