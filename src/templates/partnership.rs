use crate::domain::PartnershipSubmission;
use crate::email_client::{EmailMessage, Outbox, ORGANIZATION_NAME};
use crate::templates::{mailto, notification_layout, submitter_layout, DetailRows, SUMMARY_ROWS, VIOLET};
use crate::utils::escape;

pub fn partnership_confirmation(
    outbox: &Outbox,
    submission: &PartnershipSubmission,
) -> EmailMessage {
    let name = escape(submission.full_name.as_ref());
    let tier = escape(&submission.tier.label());
    let summary = summary_rows(submission, Audience::Submitter).render(&SUMMARY_ROWS);
    let content = format!(
        r#"<p style="margin:0 0 28px;font-size:16px;color:#e8d9ff;line-height:1.6;">
            Hey {name}, we received your request for the <strong style="color:#c8aef4;">{tier}</strong> tier. Our team will review it and reach out to you shortly.
          </p>
          <table width="100%" cellpadding="0" cellspacing="0" style="background:rgba(255,255,255,0.1);border-radius:12px;padding:24px;margin-bottom:28px;">
            <tr><td>
              <p style="margin:0 0 6px;font-size:12px;font-weight:700;color:#c8aef4;text-transform:uppercase;letter-spacing:1px;">Your submission</p>
              <table width="100%" cellpadding="4" cellspacing="0">
{summary}              </table>
            </td></tr>
          </table>
          <p style="margin:0 0 12px;font-size:14px;font-weight:700;color:#c8aef4;text-transform:uppercase;letter-spacing:1px;">What happens next</p>
          <ul style="margin:0 0 28px;padding-left:20px;color:#e8d9ff;font-size:15px;line-height:1.8;">
            <li>Our partnerships team will review your request</li>
            <li>We'll reach out within 2–3 business days to discuss details</li>
            <li>Questions in the meantime? Reply to this email</li>
          </ul>"#
    );
    EmailMessage {
        from: outbox.organization_sender(),
        to: submission.email.as_ref().to_string(),
        reply_to: None,
        subject: format!(
            "🚀 Your {} partnership request is in motion",
            ORGANIZATION_NAME
        ),
        html_body: submitter_layout(
            &format!("Your {} Partnership Request", ORGANIZATION_NAME),
            VIOLET,
            "🚀 Your partnership request is in motion",
            &content,
        ),
    }
}

/// The lead as staff see it, with the submission time appended.
pub fn partnership_notification(
    outbox: &Outbox,
    submission: &PartnershipSubmission,
    submitted_at: &str,
) -> EmailMessage {
    let rows = summary_rows(submission, Audience::Staff).text("Submitted", submitted_at);
    let closing = format!(
        r#"<p style="margin:24px 0 0;font-size:14px;color:#666;">Reply directly to {} to follow up.</p>"#,
        mailto(submission.email.as_ref())
    );
    EmailMessage {
        from: outbox.website_sender(),
        to: outbox.inbox(),
        reply_to: Some(submission.email.as_ref().to_string()),
        subject: format!("[New Lead] {}", submission.lead_summary()),
        html_body: notification_layout(
            "New Partnership Request",
            VIOLET,
            "A new sponsor application just came in via the website.",
            &rows,
            &closing,
        ),
    }
}

#[derive(Clone, Copy)]
enum Audience {
    Submitter,
    Staff,
}

// The phone row only exists when a phone number was given.
fn summary_rows(submission: &PartnershipSubmission, audience: Audience) -> DetailRows {
    let email = submission.email.as_ref();
    let rows = DetailRows::default()
        .text("Name", submission.full_name.as_ref())
        .text("Company", &submission.company);
    let rows = match audience {
        Audience::Submitter => rows.text("Email", email),
        Audience::Staff => rows.markup("Email", mailto(email)),
    };
    let rows = match &submission.phone {
        Some(phone) => rows.text("Phone", phone),
        None => rows,
    };
    let tier_label = match audience {
        Audience::Submitter => "Selected tier",
        Audience::Staff => "Tier",
    };
    rows.text(tier_label, &submission.tier.label())
}
