//! Contact form state and the hand-off to the transactional-email service.
//!
//! The form owns its field values and a status with auto-dismissing notices.
//! Sending goes through an [`EmailTransport`], so the browser uses `fetch`
//! while tests plug in a recording fake.

use crate::constants::NOTICE_SECS;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("email service is not configured: missing {0}")]
    MissingConfig(&'static str),
    #[error("a message is already being sent")]
    Busy,
    #[error("email transport failed: {0}")]
    Transport(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Credentials for the email service. All three are required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl ContactConfig {
    /// Build from a key lookup (`"service_id"`, `"template_id"`, `"public_key"`).
    /// Blank values count as missing.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ContactError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut take = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ContactError::MissingConfig(key))
        };
        Ok(Self {
            service_id: take("service_id")?,
            template_id: take("template_id")?,
            public_key: take("public_key")?,
        })
    }
}

/// Values typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub message: String,
    pub email: String,
    /// Optional sender name.
    pub name: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.email.is_empty() && self.name.is_empty()
    }
}

/// One send attempt, ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub fields: ContactFields,
}

impl SendRequest {
    /// Template variables expected by the email template.
    pub fn template_params(&self) -> [(&'static str, &str); 3] {
        [
            ("user_message", self.fields.message.as_str()),
            ("user_email", self.fields.email.as_str()),
            ("user_name", self.fields.name.as_str()),
        ]
    }
}

/// Something that can deliver a [`SendRequest`].
#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    async fn send(&self, request: &SendRequest) -> Result<(), ContactError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Sent { until: f64 },
    /// `until` is `None` for configuration errors, which stay up until the
    /// next submit.
    Failed {
        until: Option<f64>,
        reason: ContactError,
    },
}

/// User-visible line under the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Success => "Message sent successfully!",
            Notice::Failure => "Oops! Something went wrong. Please try again.",
        }
    }
}

/// Contact form model. Times are host-clock seconds.
#[derive(Clone, Debug)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.status {
            FormStatus::Sent { .. } => Some(Notice::Success),
            FormStatus::Failed { .. } => Some(Notice::Failure),
            _ => None,
        }
    }

    /// Label for the submit button.
    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Start a submission. Any visible notice is cleared first.
    ///
    /// Missing configuration fails immediately with no request produced, and
    /// its notice is not dismissed by [`tick`](Self::tick).
    pub fn begin_submit(
        &mut self,
        config: Option<&ContactConfig>,
        now: f64,
    ) -> Result<SendRequest, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::Busy);
        }
        self.status = FormStatus::Idle;
        let Some(config) = config else {
            let err = ContactError::MissingConfig("service credentials");
            log::error!("[contact] {} (at {:.1}s)", err, now);
            self.status = FormStatus::Failed {
                until: None,
                reason: err.clone(),
            };
            return Err(err);
        };
        self.status = FormStatus::Submitting;
        Ok(SendRequest {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            fields: self.fields.clone(),
        })
    }

    /// Record the outcome of the send started by [`begin_submit`](Self::begin_submit).
    pub fn finish(&mut self, outcome: Result<(), ContactError>, now: f64) {
        match outcome {
            Ok(()) => {
                log::info!("[contact] message sent");
                self.fields = ContactFields::default();
                self.status = FormStatus::Sent {
                    until: now + NOTICE_SECS,
                };
            }
            Err(err) => {
                log::error!("[contact] send failed: {}", err);
                self.status = FormStatus::Failed {
                    until: Some(now + NOTICE_SECS),
                    reason: err,
                };
            }
        }
    }

    /// Dismiss an expired notice. Returns true when the status changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let expired = match &self.status {
            FormStatus::Sent { until }
            | FormStatus::Failed {
                until: Some(until), ..
            } => now >= *until,
            _ => false,
        };
        if expired {
            self.status = FormStatus::Idle;
        }
        expired
    }
}

/// Run one full send cycle against `transport`.
///
/// The remote call is only made when configuration is present. `clock` is
/// read again once the send resolves, so notices time out from the reply.
/// Returns the notice left on the form, or `None` when a send was already in
/// flight.
pub async fn submit<T, C>(
    form: &mut ContactForm,
    config: Option<&ContactConfig>,
    transport: &T,
    clock: C,
) -> Option<Notice>
where
    T: EmailTransport,
    C: Fn() -> f64,
{
    if let Ok(request) = form.begin_submit(config, clock()) {
        let outcome = transport.send(&request).await;
        form.finish(outcome, clock());
    }
    form.notice()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ContactConfig {
        ContactConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "key".into(),
        }
    }

    #[test]
    fn config_requires_every_key() {
        let ok = ContactConfig::from_lookup(|k| Some(format!("{k}-value")));
        assert_eq!(ok.unwrap().template_id, "template_id-value");

        let missing = ContactConfig::from_lookup(|k| (k != "public_key").then(|| "x".to_string()));
        assert_eq!(missing, Err(ContactError::MissingConfig("public_key")));

        let blank = ContactConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(blank, Err(ContactError::MissingConfig("service_id")));
    }

    #[test]
    fn notices_expire_after_five_seconds() {
        let mut form = ContactForm::new();
        form.begin_submit(Some(&config()), 10.0).unwrap();
        assert_eq!(form.button_label(), "Sending...");
        form.finish(Ok(()), 10.0);
        assert_eq!(form.notice(), Some(Notice::Success));
        assert!(!form.tick(14.9));
        assert!(form.tick(15.0));
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn missing_config_notice_stays_until_next_submit() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit(None, 0.0).is_err());
        assert!(!form.tick(NOTICE_SECS * 100.0));
        assert_eq!(form.notice(), Some(Notice::Failure));

        form.begin_submit(Some(&config()), 1.0).unwrap();
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn send_failure_notice_expires() {
        let mut form = ContactForm::new();
        form.begin_submit(Some(&config()), 0.0).unwrap();
        form.finish(Err(ContactError::Transport("offline".into())), 2.0);
        assert!(!form.tick(6.9));
        assert!(form.tick(7.0));
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = ContactForm::new();
        form.begin_submit(Some(&config()), 0.0).unwrap();
        assert_eq!(form.begin_submit(Some(&config()), 0.1), Err(ContactError::Busy));
        assert!(form.is_submitting());
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = ContactForm::new();
        form.fields.message = "hello".into();
        form.begin_submit(Some(&config()), 0.0).unwrap();
        form.finish(Err(ContactError::Transport("offline".into())), 0.0);
        assert_eq!(form.notice(), Some(Notice::Failure));
        assert_eq!(form.fields.message, "hello");
    }

    #[test]
    fn template_params_use_form_field_names() {
        let mut form = ContactForm::new();
        form.fields = ContactFields {
            message: "hi".into(),
            email: "a@b.c".into(),
            name: String::new(),
        };
        let req = form.begin_submit(Some(&config()), 0.0).unwrap();
        let params = req.template_params();
        assert_eq!(params[0], ("user_message", "hi"));
        assert_eq!(params[1], ("user_email", "a@b.c"));
        assert_eq!(params[2], ("user_name", ""));
    }
}
