//! Subscriber digest rendering.
//!
//! The digest is one HTML email per subscriber listing the upcoming
//! events that matched their saved search terms. Manage and unsubscribe
//! links point at the external subscription surface, keyed by a URL-safe
//! base64 token of the subscriber's email address.

use crate::models::Email;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::NaiveDateTime;
use eyre::{Result, WrapErr};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

pub const DIGEST_SUBJECT: &str = "Your Weekly Event Updates";

const DIGEST_TEMPLATE: &str = r#"<h2>Your Weekly Event Updates</h2>
<p>Here are the upcoming events matching your search terms: {{terms}}</p>
<ul>
{{#each events}}
    <li>
        <strong>{{title}}</strong><br>
        {{when}}<br>
        Venue: {{venue}}<br>
        <a href="{{{link}}}">Event Link</a>
    </li>
{{/each}}
</ul>
<p>
    <a href="{{{base_url}}}/manage_subscription/{{token}}">Manage your subscription</a><br>
    <a href="{{{base_url}}}/unsubscribe/{{token}}">Unsubscribe</a>
</p>
"#;

/// One event row in the digest.
#[derive(Debug, Clone, Serialize)]
pub struct DigestEvent {
    pub title: String,
    /// Human-readable local start, e.g. "Friday March 14 at 08:30 PM"
    pub when: String,
    pub venue: String,
    pub link: String,
}

impl DigestEvent {
    /// Build a row from raw listing fields, formatting the start time the
    /// way the digest presents it.
    pub fn new(
        title: impl Into<String>,
        start: &NaiveDateTime,
        venue: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            when: start.format("%A %B %d at %I:%M %p").to_string(),
            venue: venue.into(),
            link: link.into(),
        }
    }
}

/// URL-safe token identifying a subscriber in manage/unsubscribe links.
pub fn email_token(email: &str) -> String {
    URL_SAFE_NO_PAD.encode(email.as_bytes())
}

/// Render the digest HTML body for one subscriber.
pub fn render_digest(
    recipient: &str,
    search_terms: &[String],
    events: &[DigestEvent],
    base_url: &str,
) -> Result<String> {
    let handlebars = Handlebars::new();
    let data = json!({
        "terms": search_terms.join(", "),
        "events": events,
        "token": email_token(recipient),
        "base_url": base_url.trim_end_matches('/'),
    });

    handlebars
        .render_template(DIGEST_TEMPLATE, &data)
        .wrap_err("Failed to render digest template")
}

/// Assemble the full digest email for one subscriber.
pub fn build_digest_email(
    recipient: &str,
    search_terms: &[String],
    events: &[DigestEvent],
    base_url: &str,
) -> Result<Email> {
    let body = render_digest(recipient, search_terms, events, base_url)?;
    Ok(Email::new(recipient, DIGEST_SUBJECT).with_html(body))
}
