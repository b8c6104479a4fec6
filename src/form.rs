use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement};

use crate::dom;

/// Fixed recipient for the contact handoff.
pub const CONTACT_RECIPIENT: &str = "payettekael@gmail.com";

const CLIENT_NOTICE: &str = "Opening your email client... Please send the message from there.";

/// Field values pulled out of the contact form on submit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Extract the named fields from a form. Missing fields read as empty.
    #[must_use]
    pub fn from_form(form: &HtmlFormElement) -> Self {
        let Ok(data) = FormData::new_with_form(form) else {
            return Self::default();
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }
}

/// Compose the plain-text body handed to the email client.
#[must_use]
pub fn message_body(fields: &ContactFields) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        fields.name, fields.email, fields.message
    )
}

/// Build the mailto deep link for the fixed recipient, with the subject and
/// body percent-encoded.
#[must_use]
pub fn mailto_link(fields: &ContactFields) -> String {
    format!(
        "mailto:{CONTACT_RECIPIENT}?subject={}&body={}",
        encode(&fields.subject),
        encode(&message_body(fields))
    )
}

fn encode(text: &str) -> String {
    js_sys::encode_uri_component(text).into()
}

/// Submit handler: hand the message off to the user's email client.
///
/// The notice is shown unconditionally; whether an email client is actually
/// installed cannot be observed from here.
pub fn handle_submit(event: &Event) {
    event.prevent_default();
    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let link = mailto_link(&ContactFields::from_form(&form));
    if let Some(win) = dom::window() {
        if let Err(err) = win.location().set_href(&link) {
            dom::console_error(&format!(
                "failed to open email client: {}",
                dom::js_error_message(&err)
            ));
        }
        let _ = win.alert_with_message(CLIENT_NOTICE);
    }
    form.reset();
}
