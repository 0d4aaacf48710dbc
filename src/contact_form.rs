use crate::constants::*;
use crate::dom;
use crate::notice::{self, NoticeKind};
use beam_core::{ContactRequest, ContactResponse};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Submit the contact form as JSON to [`CONTACT_ENDPOINT`] and report the
/// outcome inline.
pub fn wire(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let doc = document.clone();
    let form_for_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let request = read_request(&doc);
        let doc = doc.clone();
        let form = form_for_submit.clone();
        set_busy(&doc, true);
        spawn_local(async move {
            match submit(&request).await {
                Ok(message_id) => {
                    log::info!("[contact] sent, id {}", message_id);
                    form.reset();
                    notice::show(&doc, CONTACT_NOTICE_ID, NoticeKind::Success, NOTICE_SENT_TEXT);
                }
                Err(e) => {
                    log::error!("[contact] submit failed: {:?}", e);
                    notice::show(&doc, CONTACT_NOTICE_ID, NoticeKind::Error, NOTICE_FAILED_TEXT);
                }
            }
            set_busy(&doc, false);
        });
    }) as Box<dyn FnMut(web::Event)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn read_request(document: &web::Document) -> ContactRequest {
    ContactRequest {
        name: dom::field_value(document, CONTACT_NAME_ID),
        email: dom::field_value(document, CONTACT_EMAIL_ID),
        company: dom::field_value(document, CONTACT_COMPANY_ID),
        message: dom::field_value(document, CONTACT_MESSAGE_ID),
    }
}

fn set_busy(document: &web::Document, busy: bool) {
    if let Some(button) = document
        .get_element_by_id(CONTACT_SUBMIT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(busy);
    }
}

/// POST the request; returns the provider message id on success.
async fn submit(request: &ContactRequest) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let body = serde_json::to_string(request)?;

    let headers = web::Headers::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    let req = web::Request::new_with_str_and_init(CONTACT_ENDPOINT, &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_string()
        .unwrap_or_default();

    match serde_json::from_str::<ContactResponse>(&text) {
        Ok(ContactResponse::Sent {
            success: true,
            message_id,
        }) if resp.ok() => Ok(message_id),
        Ok(ContactResponse::Failed { error }) => {
            anyhow::bail!("HTTP {}: {}", resp.status(), error)
        }
        _ => anyhow::bail!("HTTP {}: unexpected reply {:?}", resp.status(), text),
    }
}
