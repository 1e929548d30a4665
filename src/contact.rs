//! Contact form wiring and the EmailJS REST transport.

use crate::constants::*;
use crate::dom::{self, ScopedListener};
use folio_core::{
    ContactConfig, ContactError, ContactFields, ContactForm, EmailTransport, Notice, SendRequest,
};
use js_sys::{Object, Reflect, JSON};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Sends through the EmailJS `email/send` endpoint with `fetch`.
pub struct EmailJsTransport;

impl EmailTransport for EmailJsTransport {
    async fn send(&self, request: &SendRequest) -> Result<(), ContactError> {
        let window = web::window().ok_or_else(|| ContactError::Transport("no window".into()))?;
        let fetch_request = build_request(request).map_err(js_error)?;
        let value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_error)?;
        let response: web::Response = value.dyn_into().map_err(js_error)?;
        if response.ok() {
            return Ok(());
        }
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(ContactError::Rejected {
            status: response.status(),
            body,
        })
    }
}

fn js_error(e: JsValue) -> ContactError {
    ContactError::Transport(format!("{:?}", e))
}

fn build_request(request: &SendRequest) -> Result<web::Request, JsValue> {
    let params = Object::new();
    for (key, value) in request.template_params() {
        Reflect::set(&params, &key.into(), &value.into())?;
    }
    let payload = Object::new();
    Reflect::set(&payload, &"service_id".into(), &request.service_id.as_str().into())?;
    Reflect::set(&payload, &"template_id".into(), &request.template_id.as_str().into())?;
    Reflect::set(&payload, &"user_id".into(), &request.public_key.as_str().into())?;
    Reflect::set(&payload, &"template_params".into(), &params)?;
    let body = JSON::stringify(&payload)?;

    let headers = web::Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&body);
    web::Request::new_with_str_and_init(EMAILJS_SEND_URL, &init)
}

/// Credentials from the form's data attributes, falling back to the values
/// baked in at build time.
fn resolve_config(form: &web::Element) -> Option<ContactConfig> {
    let lookup = |key: &str| {
        form.get_attribute(&format!("data-{}", key.replace('_', "-")))
            .or_else(|| compiled_credential(key).map(String::from))
    };
    match ContactConfig::from_lookup(lookup) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("[contact] {}", e);
            None
        }
    }
}

fn compiled_credential(key: &str) -> Option<&'static str> {
    match key {
        "service_id" => option_env!("FOLIO_EMAILJS_SERVICE_ID"),
        "template_id" => option_env!("FOLIO_EMAILJS_TEMPLATE_ID"),
        "public_key" => option_env!("FOLIO_EMAILJS_PUBLIC_KEY"),
        _ => None,
    }
}

fn now_secs() -> f64 {
    instant::now() / 1000.0
}

struct FormView {
    form: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
    notice: Option<web::HtmlElement>,
}

impl FormView {
    fn read_fields(&self) -> ContactFields {
        ContactFields {
            message: self.field(FIELD_MESSAGE),
            email: self.field(FIELD_EMAIL),
            name: self.field(FIELD_NAME),
        }
    }

    fn field(&self, name: &str) -> String {
        let Ok(Some(el)) = self.form.query_selector(&format!("[name={}]", name)) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn write_fields(&self, fields: &ContactFields) {
        for (name, value) in [
            (FIELD_MESSAGE, &fields.message),
            (FIELD_EMAIL, &fields.email),
            (FIELD_NAME, &fields.name),
        ] {
            let Ok(Some(el)) = self.form.query_selector(&format!("[name={}]", name)) else {
                continue;
            };
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.set_value(value);
            } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
                area.set_value(value);
            }
        }
    }

    fn render(&self, model: &ContactForm) {
        if let Some(button) = &self.button {
            button.set_disabled(model.is_submitting());
            button.set_text_content(Some(model.button_label()));
        }
        if let Some(notice) = &self.notice {
            let current = model.notice();
            notice.set_text_content(current.map(|n| n.text()));
            dom::toggle_class(
                notice,
                NOTICE_SUCCESS_CLASS,
                current == Some(Notice::Success),
            );
            dom::toggle_class(
                notice,
                NOTICE_FAILURE_CLASS,
                current == Some(Notice::Failure),
            );
        }
    }
}

/// The mounted `#contact-form`.
pub struct ContactMount {
    view: Rc<FormView>,
    model: Rc<RefCell<ContactForm>>,
    _submit: ScopedListener,
}

impl ContactMount {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
            return Ok(None);
        };
        let form: web::HtmlFormElement = form
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("#{} is not a form: {:?}", CONTACT_FORM_ID, e))?;
        let button = form
            .query_selector(CONTACT_SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        let view = Rc::new(FormView {
            button,
            notice: document
                .get_element_by_id(CONTACT_NOTICE_ID)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
            form: form.clone(),
        });
        let model = Rc::new(RefCell::new(ContactForm::new()));
        view.render(&model.borrow());

        let submit_view = view.clone();
        let submit_model = model.clone();
        let submit = ScopedListener::new(&form, "submit", move |ev| {
            ev.prevent_default();
            let view = submit_view.clone();
            let model = submit_model.clone();
            let config = resolve_config(&view.form);
            let request = {
                let mut form = model.borrow_mut();
                if !form.is_submitting() {
                    form.fields = view.read_fields();
                }
                form.begin_submit(config.as_ref(), now_secs())
            };
            view.render(&model.borrow());
            let Ok(request) = request else {
                return;
            };
            spawn_local(async move {
                let outcome = EmailJsTransport.send(&request).await;
                let mut form = model.borrow_mut();
                form.finish(outcome, now_secs());
                view.write_fields(&form.fields);
                view.render(&form);
            });
        })?;

        log::info!("[mount] contact form");
        Ok(Some(Self {
            view,
            model,
            _submit: submit,
        }))
    }

    /// Dismiss an expired notice.
    pub fn tick(&self) {
        let Ok(mut form) = self.model.try_borrow_mut() else {
            return;
        };
        if form.tick(now_secs()) {
            self.view.render(&form);
        }
    }
}
