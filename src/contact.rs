use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const MESSAGE_REQUIRED: &str = "Message is required";

// Browser `\S`: the regex crate's Unicode `\S` disagrees on U+0085 and U+FEFF
const NON_SPACE: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// unanchored: only the overall shape is checked
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{NON_SPACE}+@{NON_SPACE}+\.{NON_SPACE}+"))
        .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Returns a new record with `field` replaced and the other two carried over.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> ContactForm {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Message => next.message = value,
        }
        next
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Per-field messages from the most recent validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs every rule against `form`. Rules are not short-circuited, so an empty
/// email ends up reported as invalid rather than required.
pub fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.name.is_empty() {
        errors.name = Some(NAME_REQUIRED.to_string());
    }
    if form.email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_string());
    }
    if !EMAIL_SHAPE.is_match(&form.email) {
        errors.email = Some(EMAIL_INVALID.to_string());
    }
    if form.message.is_empty() {
        errors.message = Some(MESSAGE_REQUIRED.to_string());
    }
    errors
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Couldn't encode message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Message was not delivered: {0}")]
    Rejected(String),
}

/// Whatever actually carries a valid message somewhere.
pub trait ContactSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), DeliveryError>;
}

/// Writes submissions to the log instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), DeliveryError> {
        let body = serde_json::to_string(form)?;
        log::info!("Form submitted: {body}");
        Ok(())
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Sent,
    Invalid(FormErrors),
    Failed(DeliveryError),
}

pub fn submit(form: &ContactForm, sink: &impl ContactSink) -> SubmitOutcome {
    let errors = validate(form);
    if !errors.is_empty() {
        log::debug!(
            "contact form rejected: {:?}",
            errors.fields().iter().map(|f| f.label()).collect::<Vec<_>>()
        );
        return SubmitOutcome::Invalid(errors);
    }
    match sink.deliver(form) {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

/// Everything the contact section remembers between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FormErrors,
    pub delivery_error: Option<String>,
}

impl ContactState {
    /// Replaces one field. Errors from the last submit are left as they are.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form = self.form.with_field(field, value);
    }

    pub fn submit(&mut self, sink: &impl ContactSink) {
        let outcome = submit(&self.form, sink);
        self.apply(outcome);
    }

    /// Field errors only change on `Invalid`; a delivery notice only survives
    /// until the next submit.
    pub fn apply(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Sent => self.delivery_error = None,
            SubmitOutcome::Invalid(errors) => {
                self.errors = errors;
                self.delivery_error = None;
            }
            SubmitOutcome::Failed(e) => {
                log::error!("contact delivery failed: {e}");
                self.delivery_error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<ContactForm>>,
    }

    impl ContactSink for RecordingSink {
        fn deliver(&self, form: &ContactForm) -> Result<(), DeliveryError> {
            self.sent.borrow_mut().push(form.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl ContactSink for FailingSink {
        fn deliver(&self, _form: &ContactForm) -> Result<(), DeliveryError> {
            Err(DeliveryError::Rejected("relay offline".to_string()))
        }
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_all_empty() {
        let errors = validate(&form("", "", ""));
        assert_eq!(
            errors,
            FormErrors {
                name: Some("Name is required".to_string()),
                email: Some("Email is invalid".to_string()),
                message: Some("Message is required".to_string()),
            }
        );
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&form("Dan", "dan@example.com", "Hi"));
        assert!(errors.is_empty());
        assert!(errors.fields().is_empty());
    }

    #[test]
    fn test_invalid_email_only() {
        let errors = validate(&form("Dan", "not-an-email", "Hi"));
        assert_eq!(errors.fields(), vec![Field::Email]);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_empty_email_reports_invalid_not_required() {
        let errors = validate(&form("Dan", "", "Hi"));
        assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
        assert_ne!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_email_shapes() {
        let bad = ["dan", "dan@", "dan@example", "@example.com", "dan@.com", "dan @example.com"];
        for email in bad {
            let errors = validate(&form("Dan", email, "Hi"));
            assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID), "{email}");
        }
        let good = ["a@b.c", "dan@mail.example.com", "first.last@example.co.uk", " x@y.z "];
        for email in good {
            let errors = validate(&form("Dan", email, "Hi"));
            assert_eq!(errors.get(Field::Email), None, "{email}");
        }
    }

    #[test]
    fn test_email_uses_browser_whitespace() {
        // U+FEFF splits the domain, U+0085 does not
        let errors = validate(&form("Dan", "a@b\u{FEFF}.c", "Hi"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        let errors = validate(&form("Dan", "a@b\u{85}x.c", "Hi"));
        assert_eq!(errors.get(Field::Email), None);
        let errors = validate(&form("Dan", "a@b\u{A0}.c", "Hi"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_no_trimming() {
        let errors = validate(&form(" ", "dan@example.com", "\n"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_name_and_message() {
        let errors = validate(&form("", "dan@example.com", ""));
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn test_with_field_replaces_one_field() {
        let start = form("Dan", "dan@example.com", "Hi");
        let next = start.with_field(Field::Email, "other@example.com");
        assert_eq!(next.name, "Dan");
        assert_eq!(next.email, "other@example.com");
        assert_eq!(next.message, "Hi");
        assert_eq!(start.email, "dan@example.com");

        let cleared = next.with_field(Field::Message, "");
        assert_eq!(cleared.get(Field::Message), "");
        assert_eq!(cleared.get(Field::Name), "Dan");
    }

    #[test]
    fn test_submit_valid_hands_off() {
        let sink = RecordingSink::default();
        let data = form("Dan", "dan@example.com", "Hi");
        assert!(matches!(submit(&data, &sink), SubmitOutcome::Sent));
        assert_eq!(*sink.sent.borrow(), vec![data]);
    }

    #[test]
    fn test_submit_invalid_does_not_hand_off() {
        let sink = RecordingSink::default();
        match submit(&form("Dan", "not-an-email", "Hi"), &sink) {
            SubmitOutcome::Invalid(errors) => assert_eq!(errors.fields(), vec![Field::Email]),
            other => panic!("expected invalid, got {other:?}"),
        }
        assert!(sink.sent.borrow().is_empty());
    }

    #[test]
    fn test_submit_delivery_failure() {
        let outcome = submit(&form("Dan", "dan@example.com", "Hi"), &FailingSink);
        match outcome {
            SubmitOutcome::Failed(e) => {
                assert_eq!(e.to_string(), "Message was not delivered: relay offline")
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_log_sink_accepts_valid_form() {
        let outcome = submit(&form("Dan", "dan@example.com", "Hi"), &LogSink);
        assert!(matches!(outcome, SubmitOutcome::Sent));
    }

    #[test]
    fn test_form_serializes_with_field_names() {
        let json = serde_json::to_value(form("Dan", "dan@example.com", "Hi")).unwrap();
        assert_eq!(json["name"], "Dan");
        assert_eq!(json["email"], "dan@example.com");
        assert_eq!(json["message"], "Hi");
    }

    #[test]
    fn test_edit_after_failed_submit_keeps_errors() {
        let mut state = ContactState::default();
        state.submit(&RecordingSink::default());
        let stale = state.errors.clone();
        assert_eq!(stale.len(), 3);

        state.edit(Field::Name, "Dan");
        state.edit(Field::Email, "dan@example.com");
        assert_eq!(state.form.name, "Dan");
        assert_eq!(state.form.email, "dan@example.com");
        assert_eq!(state.errors, stale);
    }

    #[test]
    fn test_sent_leaves_stale_errors() {
        let sink = RecordingSink::default();
        let mut state = ContactState::default();
        state.edit(Field::Name, "Dan");
        state.edit(Field::Message, "Hi");
        state.submit(&sink);
        assert_eq!(state.errors.fields(), vec![Field::Email]);

        state.edit(Field::Email, "dan@example.com");
        state.submit(&sink);
        assert_eq!(sink.sent.borrow().len(), 1);
        assert_eq!(state.errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(state.form, form("Dan", "dan@example.com", "Hi"));
    }

    #[test]
    fn test_delivery_notice_lifecycle() {
        let mut state = ContactState::default();
        state.form = form("Dan", "dan@example.com", "Hi");
        state.submit(&FailingSink);
        assert_eq!(
            state.delivery_error.as_deref(),
            Some("Message was not delivered: relay offline")
        );
        assert!(state.errors.is_empty());

        state.submit(&RecordingSink::default());
        assert_eq!(state.delivery_error, None);
    }

    #[test]
    fn test_invalid_submit_clears_delivery_notice() {
        let mut state = ContactState::default();
        state.form = form("Dan", "dan@example.com", "Hi");
        state.submit(&FailingSink);
        assert!(state.delivery_error.is_some());

        state.edit(Field::Message, "");
        state.submit(&FailingSink);
        assert_eq!(state.delivery_error, None);
        assert_eq!(state.errors.fields(), vec![Field::Message]);
    }
}
