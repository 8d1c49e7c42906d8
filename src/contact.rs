use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const ACKNOWLEDGEMENT: &str = "Message sent! (This is a demo)";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your@email.com",
            Field::Subject => "Subject of your message",
            Field::Message => "Your message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters.")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
}

/// At most one error per field.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("contact form has {} invalid field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Drop a field's error once its input has been corrected.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }
}

/// A message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The contact form's current input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Check a single field, e.g. to refresh its message while the user edits.
    pub fn check(&self, field: Field) -> Result<(), FieldError> {
        let value = self.get(field);
        match field {
            Field::Name if !min_chars(value, 2) => Err(FieldError::NameTooShort),
            Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
            Field::Subject if !min_chars(value, 5) => Err(FieldError::SubjectTooShort),
            Field::Message if !min_chars(value, 10) => Err(FieldError::MessageTooShort),
            _ => Ok(()),
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Err(err) = self.check(field) {
                errors.insert(field, err);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    /// Validate, log and clear the form. Nothing leaves the browser.
    ///
    /// On failure the input is kept so the user can fix it.
    pub fn submit(&mut self) -> Result<&'static str, FieldErrors> {
        let message = self.validate()?;
        match message.to_json() {
            Ok(json) => log::info!("contact form submitted: {json}"),
            Err(err) => log::warn!("couldn't serialize contact message: {err}"),
        }
        *self = Self::default();
        Ok(ACKNOWLEDGEMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hello there, Jo".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let message = filled().validate().expect("form should be valid");
        assert_eq!(message.name, "Jo");
        assert_eq!(message.email, "jo@example.com");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::NameTooShort));
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::Subject), Some(&FieldError::SubjectTooShort));
        assert_eq!(errors.get(Field::Message), Some(&FieldError::MessageTooShort));
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters."
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut form = filled();
        form.set(Field::Name, "J");
        assert_eq!(form.check(Field::Name), Err(FieldError::NameTooShort));
        // two characters, more than two bytes
        form.set(Field::Name, "Жо");
        assert_eq!(form.check(Field::Name), Ok(()));
        form.set(Field::Subject, "Hey!");
        assert_eq!(form.check(Field::Subject), Err(FieldError::SubjectTooShort));
        form.set(Field::Message, "123456789");
        assert_eq!(form.check(Field::Message), Err(FieldError::MessageTooShort));
        form.set(Field::Message, "1234567890");
        assert_eq!(form.check(Field::Message), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        let mut form = filled();
        for good in ["a@b.co", "first.last+tag@mail.example.org", "o'neil@x.io"] {
            form.set(Field::Email, good);
            assert_eq!(form.check(Field::Email), Ok(()), "{good}");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "a@b",
            "a@b.c",
            ".a@b.com",
            "a..b@c.com",
            "a b@c.com",
            "a@-b.com",
        ] {
            form.set(Field::Email, bad);
            assert_eq!(form.check(Field::Email), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_submit_resets_on_success() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(ACKNOWLEDGEMENT));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_failed_submit_keeps_input() {
        let mut form = filled();
        form.set(Field::Email, "nope");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), [Field::Email]);
        assert_eq!(form.email, "nope");
        assert_eq!(form.name, "Jo");

        form.set(Field::Email, "jo@example.com");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_message_json() {
        let json = filled().validate().unwrap().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"name":"Jo","email":"jo@example.com","subject":"Hello","message":"Hello there, Jo"}"#
        );
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(Field::Name);
        errors.clear(Field::Name);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), None);
    }
}
