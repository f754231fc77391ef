//! Contact form model and validation.
//!
//! There is no delivery endpoint. A submitted form is validated and turned into
//! an [`Enquiry`] that the UI logs and acknowledges.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Longest accepted value for single-line fields.
pub const MAX_FIELD_LEN: usize = 120;
/// Longest accepted message body.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Company,
    Industry,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Company,
        FormField::Industry,
        FormField::Message,
    ];

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::FirstName => "contact.first_name",
            Self::LastName => "contact.last_name",
            Self::Email => "contact.email",
            Self::Company => "contact.company",
            Self::Industry => "contact.industry",
            Self::Message => "contact.message",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john@company.com",
            Self::Company => "Your Company Inc.",
            Self::Industry => "",
            Self::Message => "Tell us about your project...",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Industry dropdown options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryOption {
    #[default]
    Unselected,
    Fintech,
    Maritime,
    Technology,
    Healthcare,
    Manufacturing,
    Other,
}

impl IndustryOption {
    pub const ALL: [IndustryOption; 7] = [
        IndustryOption::Unselected,
        IndustryOption::Fintech,
        IndustryOption::Maritime,
        IndustryOption::Technology,
        IndustryOption::Healthcare,
        IndustryOption::Manufacturing,
        IndustryOption::Other,
    ];

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Unselected => "contact.industries.none",
            Self::Fintech => "contact.industries.fintech",
            Self::Maritime => "contact.industries.maritime",
            Self::Technology => "contact.industries.technology",
            Self::Healthcare => "contact.industries.healthcare",
            Self::Manufacturing => "contact.industries.manufacturing",
            Self::Other => "contact.industries.other",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Required,
    InvalidEmail,
    TooLong { max: usize },
}

impl FieldProblem {
    /// Translation key for the problem. `contact.errors.too_long` contains a
    /// `{max}` placeholder.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Required => "contact.errors.required",
            Self::InvalidEmail => "contact.errors.invalid_email",
            Self::TooLong { .. } => "contact.errors.too_long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Required => write!(f, "{:?} is required", self.field),
            FieldProblem::InvalidEmail => write!(f, "{:?} is not a valid email address", self.field),
            FieldProblem::TooLong { max } => write!(f, "{:?} exceeds {max} characters", self.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid contact form: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<FieldError>),
}

impl ContactError {
    /// Fields that failed validation.
    #[must_use]
    pub fn fields(&self) -> Vec<FormField> {
        self.errors().iter().map(|e| e.field).collect()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Invalid(errors) => errors,
        }
    }
}

/// A validated submission
#[derive(Debug, Clone, Serialize)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub industry: IndustryOption,
    pub message: String,
    pub received_at: DateTime<Local>,
}

/// Editable contact form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub industry: IndustryOption,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field. The industry field renders its label key.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Industry => self.industry.label_key(),
            FormField::Message => &self.message,
        }
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    pub fn cycle_industry(&mut self) {
        self.industry = self.industry.next();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check every field, collecting all problems rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ContactError> {
        let mut errors = Vec::new();

        for (field, value, max) in [
            (FormField::FirstName, &self.first_name, MAX_FIELD_LEN),
            (FormField::LastName, &self.last_name, MAX_FIELD_LEN),
            (FormField::Email, &self.email, MAX_FIELD_LEN),
            (FormField::Message, &self.message, MAX_MESSAGE_LEN),
        ] {
            let value = value.trim();
            if value.is_empty() {
                errors.push(FieldError {
                    field,
                    problem: FieldProblem::Required,
                });
            } else if value.chars().count() > max {
                errors.push(FieldError {
                    field,
                    problem: FieldProblem::TooLong { max },
                });
            } else if field == FormField::Email && !is_valid_email(value) {
                errors.push(FieldError {
                    field,
                    problem: FieldProblem::InvalidEmail,
                });
            }
        }

        if self.company.trim().chars().count() > MAX_FIELD_LEN {
            errors.push(FieldError {
                field: FormField::Company,
                problem: FieldProblem::TooLong { max: MAX_FIELD_LEN },
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ContactError::Invalid(errors))
        }
    }

    /// Validate and produce an [`Enquiry`].
    pub fn submit(&self) -> Result<Enquiry, ContactError> {
        self.validate()?;

        let company = self.company.trim();
        Ok(Enquiry {
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            email: self.email.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            industry: self.industry,
            message: self.message.trim().to_string(),
            received_at: Local::now(),
        })
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::FirstName => Some(&mut self.first_name),
            FormField::LastName => Some(&mut self.last_name),
            FormField::Email => Some(&mut self.email),
            FormField::Company => Some(&mut self.company),
            FormField::Industry => None,
            FormField::Message => Some(&mut self.message),
        }
    }
}

/// Loose shape check: `local@domain.tld`, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2 && !host.starts_with('.') && !host.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("john@company.com"));
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email("john@company"));
        assert!(!is_valid_email("john@@company.com"));
        assert!(!is_valid_email("john @company.com"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@company.c"));
    }

    #[test]
    fn test_field_focus_cycle() {
        assert_eq!(FormField::Message.next(), FormField::FirstName);
        assert_eq!(FormField::FirstName.previous(), FormField::Message);
        assert_eq!(FormField::Company.next(), FormField::Industry);
    }

    #[test]
    fn test_industry_field_is_not_typed_into() {
        let mut form = ContactForm::new();
        form.push_char(FormField::Industry, 'x');
        assert_eq!(form.industry, IndustryOption::Unselected);
        form.cycle_industry();
        assert_eq!(form.value(FormField::Industry), "contact.industries.fintech");
    }
}
