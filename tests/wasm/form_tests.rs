use portfolio_web::dom;
use portfolio_web::form::{CONTACT_RECIPIENT, ContactFields, mailto_link};
use wasm_bindgen_test::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

fn contact_form_fixture(name: &str, email: &str, subject: &str, message: &str) -> HtmlFormElement {
    let doc = dom::document().expect("document");
    let form: HtmlFormElement = doc
        .create_element("form")
        .expect("create form")
        .dyn_into()
        .expect("form element");

    for (field, value) in [("name", name), ("email", email), ("subject", subject)] {
        let input: HtmlInputElement = doc
            .create_element("input")
            .expect("create input")
            .dyn_into()
            .expect("input element");
        input.set_name(field);
        input.set_value(value);
        form.append_child(&input).expect("append input");
    }

    let textarea: HtmlTextAreaElement = doc
        .create_element("textarea")
        .expect("create textarea")
        .dyn_into()
        .expect("textarea element");
    textarea.set_name("message");
    textarea.set_value(message);
    form.append_child(&textarea).expect("append textarea");

    form
}

fn decode(segment: &str) -> String {
    js_sys::decode_uri_component(segment)
        .expect("decodable segment")
        .into()
}

#[wasm_bindgen_test]
fn fields_are_extracted_from_named_controls() {
    let form = contact_form_fixture("Jane", "j@x.com", "Hi", "Hello");
    let fields = ContactFields::from_form(&form);
    assert_eq!(
        fields,
        ContactFields {
            name: "Jane".into(),
            email: "j@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    );
}

#[wasm_bindgen_test]
fn missing_controls_read_as_empty_fields() {
    let doc = dom::document().expect("document");
    let form: HtmlFormElement = doc
        .create_element("form")
        .expect("create form")
        .dyn_into()
        .expect("form element");
    assert_eq!(ContactFields::from_form(&form), ContactFields::default());
}

#[wasm_bindgen_test]
fn link_segments_decode_back_to_the_submitted_values() {
    let form = contact_form_fixture("Jane", "j@x.com", "Hi", "Hello");
    let link = mailto_link(&ContactFields::from_form(&form));

    let prefix = format!("mailto:{CONTACT_RECIPIENT}?subject=");
    assert!(link.starts_with(&prefix), "unexpected link shape: {link}");

    let rest = &link[prefix.len()..];
    let (subject, body) = rest.split_once("&body=").expect("body parameter");
    assert_eq!(decode(subject), "Hi");

    let body = decode(body);
    let name_at = body.find("Jane").expect("name present");
    let email_at = body.find("j@x.com").expect("email present");
    let message_at = body.find("Hello").expect("message present");
    assert!(name_at < email_at && email_at < message_at);
}

#[wasm_bindgen_test]
fn subject_with_reserved_characters_survives_the_round_trip() {
    let fields = ContactFields {
        name: "A & B".into(),
        email: "a+b@x.com".into(),
        subject: "Hello & goodbye?".into(),
        message: "50% off\nnew line".into(),
    };
    let link = mailto_link(&fields);
    // Raw reserved characters would corrupt the query string.
    let query = link.split_once('?').expect("query string").1;
    assert!(!query.contains(' '));
    assert!(!query.contains('\n'));

    let (subject, body) = query
        .trim_start_matches("subject=")
        .split_once("&body=")
        .expect("body parameter");
    assert_eq!(decode(subject), "Hello & goodbye?");
    assert!(decode(body).contains("50% off\nnew line"));
}

#[wasm_bindgen_test]
fn reset_clears_every_field() {
    let form = contact_form_fixture("Jane", "j@x.com", "Hi", "Hello");
    form.reset();
    assert_eq!(ContactFields::from_form(&form), ContactFields::default());
}
