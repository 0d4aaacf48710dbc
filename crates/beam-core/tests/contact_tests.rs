// Contact submission: status codes, reply bodies and rendered email.

use beam_core::*;
use std::cell::RefCell;

#[derive(Default)]
struct FakeProvider {
    fail: bool,
    sent: RefCell<Vec<OutgoingEmail>>,
}

impl EmailProvider for FakeProvider {
    fn send(&self, email: &OutgoingEmail) -> Result<String, ProviderError> {
        if self.fail {
            return Err(ProviderError("provider rejected the message".to_string()));
        }
        self.sent.borrow_mut().push(email.clone());
        Ok(format!("msg-{}", self.sent.borrow().len()))
    }
}

fn settings() -> ContactSettings {
    ContactSettings {
        from: "Site <noreply@example.com>".to_string(),
        to: vec!["team@example.com".to_string()],
    }
}

#[test]
fn valid_submission_returns_200_with_message_id() {
    let provider = FakeProvider::default();
    let reply = handle_submission(
        r#"{"name":"A","email":"a@b.com","message":"hi"}"#,
        &provider,
        &settings(),
    );
    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.body,
        ContactResponse::Sent {
            success: true,
            message_id: "msg-1".to_string()
        }
    );
    let json: serde_json::Value = serde_json::from_str(&reply.to_json().unwrap()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["messageId"], "msg-1");
    assert_eq!(provider.sent.borrow().len(), 1);
}

#[test]
fn missing_fields_return_400() {
    let provider = FakeProvider::default();
    let reply = handle_submission(r#"{"name":"A"}"#, &provider, &settings());
    assert_eq!(reply.status, 400);
    assert_eq!(
        reply.body,
        ContactResponse::Failed {
            error: "Missing required fields".to_string()
        }
    );
    assert!(provider.sent.borrow().is_empty());
}

#[test]
fn empty_required_field_counts_as_missing() {
    let provider = FakeProvider::default();
    let reply = handle_submission(
        r#"{"name":"A","email":"","message":"hi"}"#,
        &provider,
        &settings(),
    );
    assert_eq!(reply.status, 400);
}

#[test]
fn provider_failure_returns_500() {
    let provider = FakeProvider {
        fail: true,
        ..Default::default()
    };
    let reply = handle_submission(
        r#"{"name":"A","email":"a@b.com","message":"hi"}"#,
        &provider,
        &settings(),
    );
    assert_eq!(reply.status, 500);
    match reply.body {
        ContactResponse::Failed { error } => assert!(error.contains("rejected")),
        other => panic!("expected an error body, got {other:?}"),
    }
}

#[test]
fn unparseable_body_returns_500() {
    let provider = FakeProvider::default();
    let reply = handle_submission("not json", &provider, &settings());
    assert_eq!(reply.status, 500);
}

#[test]
fn rendered_email_escapes_fields_and_sets_reply_to() {
    let submission = ContactRequest {
        name: Some("Ada <script>".to_string()),
        email: Some("ada@example.com".to_string()),
        company: None,
        message: Some("line one\nline & two".to_string()),
    }
    .validate()
    .unwrap();
    let email = OutgoingEmail::render(&submission, &settings());
    assert_eq!(email.to, vec!["team@example.com".to_string()]);
    assert_eq!(email.reply_to, "ada@example.com");
    assert_eq!(email.subject, "New Contact Form Submission from Ada <script>");
    assert!(email.html.contains("Ada &lt;script&gt;"));
    assert!(email.html.contains("line one<br>line &amp; two"));
    assert!(email.html.contains("Not provided"));

    let json = serde_json::to_value(&email).unwrap();
    assert_eq!(json["to"][0], "team@example.com");
    assert_eq!(json["reply_to"], "ada@example.com");
}

#[test]
fn company_is_optional_but_kept_when_given() {
    let submission = ContactRequest {
        name: Some("A".to_string()),
        email: Some("a@b.com".to_string()),
        company: Some("Windworks".to_string()),
        message: Some("hi".to_string()),
    }
    .validate()
    .unwrap();
    assert_eq!(submission.company.as_deref(), Some("Windworks"));
    let email = OutgoingEmail::render(&submission, &settings());
    assert!(email.html.contains("Windworks"));
}

#[test]
fn reply_bodies_round_trip_through_json() {
    let sent: ContactResponse =
        serde_json::from_str(r#"{"success":true,"messageId":"abc"}"#).unwrap();
    assert!(matches!(sent, ContactResponse::Sent { .. }));
    let failed: ContactResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
    assert_eq!(
        failed,
        ContactResponse::Failed {
            error: "boom".to_string()
        }
    );
}
