//! HTML bodies and envelopes for the emails each form triggers.
//!
//! Every user-supplied value goes through [`escape`] before it is placed in
//! markup, for both forms.

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Jerusalem;

use crate::email_client::ORGANIZATION_NAME;
use crate::utils::escape;

pub use contact::{contact_notification, contact_welcome};
pub use partnership::{partnership_confirmation, partnership_notification};

mod contact;
mod partnership;

const FOOTER_ADDRESS: &str = "info@dykeathon.com";
const PINK: &str = "#FF66E0";
const VIOLET: &str = "#8a5cf5";

/// Submission time as staff in Israel read it, e.g. `19/10/2026, 14:03:05 (IL)`.
pub fn format_submitted_at(at: DateTime<Utc>) -> String {
    at.with_timezone(&Jerusalem)
        .format("%d/%m/%Y, %H:%M:%S (IL)")
        .to_string()
}

/// Labelled rows of a details table.
#[derive(Default)]
struct DetailRows {
    rows: Vec<(&'static str, String)>,
}

impl DetailRows {
    /// Adds a row whose value is escaped.
    fn text(mut self, label: &'static str, value: &str) -> Self {
        self.rows.push((label, escape(value)));
        self
    }

    /// Adds a row whose value is already markup.
    fn markup(mut self, label: &'static str, html: String) -> Self {
        self.rows.push((label, html));
        self
    }

    fn render(&self, style: &RowStyle) -> String {
        let mut html = String::new();
        for (i, (label, value)) in self.rows.iter().enumerate() {
            let shade = if style.shaded && i % 2 == 0 {
                " style=\"background:#f5f0ff;\""
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<tr{shade}>
  <td style="{}">{label}</td>
  <td style="{}">{value}</td>
</tr>
"#,
                style.label, style.value
            ));
        }
        html
    }
}

struct RowStyle {
    label: &'static str,
    value: &'static str,
    shaded: bool,
}

const NOTIFICATION_ROWS: RowStyle = RowStyle {
    label: "font-size:13px;font-weight:700;color:#582c99;padding:10px 12px;width:130px;",
    value: "font-size:14px;color:#1a1a2e;padding:10px 12px;",
    shaded: true,
};

const SUMMARY_ROWS: RowStyle = RowStyle {
    label: "font-size:14px;color:#e8d9ff;width:110px;vertical-align:top;",
    value: "font-size:14px;color:#ffffff;font-weight:600;vertical-align:top;",
    shaded: false,
};

fn mailto(address: &str) -> String {
    let address = escape(address);
    format!(r#"<a href="mailto:{address}" style="color:{VIOLET};">{address}</a>"#)
}

/// The purple card sent to the person who filled in a form.
fn submitter_layout(title: &str, accent: &str, heading: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" dir="ltr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
</head>
<body style="margin:0;padding:0;background:#f5f0ff;font-family:'Helvetica Neue',Helvetica,Arial,sans-serif;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background:#f5f0ff;padding:40px 0;">
    <tr><td align="center">
      <table width="600" cellpadding="0" cellspacing="0" style="background:#582c99;border-radius:16px;overflow:hidden;max-width:600px;width:100%;">
        <tr><td style="background:{accent};padding:24px 40px;">
          <p style="margin:0;font-size:22px;font-weight:900;color:#ffffff;letter-spacing:0.5px;">{ORGANIZATION_NAME}</p>
        </td></tr>
        <tr><td style="padding:40px 40px 32px;">
          <h1 style="margin:0 0 16px;font-size:28px;font-weight:800;color:#ffffff;line-height:1.2;">{heading}</h1>
          {content}
          <p style="margin:0;font-size:15px;color:#e8d9ff;line-height:1.7;">
            With love &amp; power,<br/>
            <strong style="color:#ffffff;">The {ORGANIZATION_NAME} Team</strong>
          </p>
        </td></tr>
        <tr><td style="padding:20px 40px;border-top:1px solid rgba(255,255,255,0.15);">
          <p style="margin:0;font-size:12px;color:rgba(255,255,255,0.45);text-align:center;">{ORGANIZATION_NAME} · {FOOTER_ADDRESS}</p>
        </td></tr>
      </table>
    </td></tr>
  </table>
</body>
</html>"#
    )
}

/// The white card with a details table sent to the organization inbox.
fn notification_layout(
    title: &str,
    accent: &str,
    intro: &str,
    rows: &DetailRows,
    closing: &str,
) -> String {
    let rows = rows.render(&NOTIFICATION_ROWS);
    format!(
        r#"<!DOCTYPE html>
<html lang="en" dir="ltr">
<head><meta charset="UTF-8" /><title>{title}</title></head>
<body style="margin:0;padding:0;background:#f5f0ff;font-family:'Helvetica Neue',Helvetica,Arial,sans-serif;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background:#f5f0ff;padding:40px 0;">
    <tr><td align="center">
      <table width="600" cellpadding="0" cellspacing="0" style="background:#ffffff;border-radius:16px;overflow:hidden;max-width:600px;width:100%;border:2px solid {accent};">
        <tr><td style="background:{accent};padding:20px 36px;">
          <p style="margin:0;font-size:18px;font-weight:900;color:#fff;">🔔 {title}</p>
        </td></tr>
        <tr><td style="padding:32px 36px;">
          <p style="margin:0 0 20px;font-size:16px;color:#333;">{intro}</p>
          <table width="100%" cellpadding="6" cellspacing="0" style="border-collapse:collapse;">
{rows}          </table>
          {closing}
        </td></tr>
      </table>
    </td></tr>
  </table>
</body>
</html>"#
    )
}
