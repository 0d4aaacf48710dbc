//! Contact form submission contract: validation, email rendering, replies.
//!
//! The handler is transport-agnostic. A host receives the POSTed JSON body,
//! calls [`handle_submission`] with an [`EmailProvider`], and writes the
//! returned status and JSON body back to the client.

use crate::error::{ContactError, ProviderError};
use serde::{Deserialize, Serialize};

/// Raw JSON body posted by the contact form. Every field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A request that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// `name`, `email` and `message` must be present and non-empty.
    pub fn validate(self) -> Result<ContactSubmission, ContactError> {
        let required = |v: Option<String>| v.filter(|s| !s.is_empty());
        match (
            required(self.name),
            required(self.email),
            required(self.message),
        ) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                company: self.company.filter(|c| !c.is_empty()),
                message,
            }),
            _ => Err(ContactError::MissingFields),
        }
    }
}

/// Sender and recipients for outgoing notifications.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSettings {
    pub from: String,
    pub to: Vec<String>,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            from: "Website Contact <onboarding@resend.dev>".to_string(),
            to: vec!["delivered@resend.dev".to_string()],
        }
    }
}

/// Email in the provider's JSON request shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

impl OutgoingEmail {
    pub fn render(submission: &ContactSubmission, settings: &ContactSettings) -> Self {
        let company = submission
            .company
            .as_deref()
            .map(html_escape)
            .unwrap_or_else(|| "Not provided".to_string());
        let message = html_escape(&submission.message).replace('\n', "<br>");
        let html = format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Company:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            html_escape(&submission.name),
            html_escape(&submission.email),
            company,
            message
        );
        Self {
            from: settings.from.clone(),
            to: settings.to.clone(),
            subject: format!("New Contact Form Submission from {}", submission.name),
            html,
            reply_to: submission.email.clone(),
        }
    }
}

/// Transactional email backend. Returns the provider-assigned message id.
pub trait EmailProvider {
    fn send(&self, email: &OutgoingEmail) -> Result<String, ProviderError>;
}

/// JSON reply body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Sent {
        success: bool,
        #[serde(rename = "messageId")]
        message_id: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactReply {
    pub status: u16,
    pub body: ContactResponse,
}

impl ContactReply {
    fn sent(message_id: String) -> Self {
        Self {
            status: 200,
            body: ContactResponse::Sent {
                success: true,
                message_id,
            },
        }
    }

    fn failed(err: ContactError) -> Self {
        Self {
            status: err.status(),
            body: ContactResponse::Failed {
                error: err.to_string(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}

pub fn handle_submission(
    body: &str,
    provider: &impl EmailProvider,
    settings: &ContactSettings,
) -> ContactReply {
    match submit(body, provider, settings) {
        Ok(id) => ContactReply::sent(id),
        Err(e) => {
            log::error!("[contact] submission failed: {}", e);
            ContactReply::failed(e)
        }
    }
}

fn submit(
    body: &str,
    provider: &impl EmailProvider,
    settings: &ContactSettings,
) -> Result<String, ContactError> {
    let request: ContactRequest =
        serde_json::from_str(body).map_err(|_| ContactError::InvalidJson)?;
    let submission = request.validate()?;
    let email = OutgoingEmail::render(&submission, settings);
    provider
        .send(&email)
        .map_err(|ProviderError(msg)| ContactError::Provider(msg))
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
