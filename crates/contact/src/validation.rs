use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use validator::{Validate, ValidationError};

use crate::{Field, QueryType};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const QUERY_TYPE_MESSAGE: &str = "Please select a query type.";
pub const CONSENT_MESSAGE: &str = "To submit this form, please consent to being contacted.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-\.]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.starts_with('.') || email.contains("..") || !EMAIL_RE.is_match(email) {
        return Err(ValidationError::new("email").with_message(EMAIL_MESSAGE.into()));
    }

    Ok(())
}

fn validate_consent(consent: &bool) -> Result<(), ValidationError> {
    if !consent {
        return Err(ValidationError::new("consent").with_message(CONSENT_MESSAGE.into()));
    }

    Ok(())
}

/// Raw values as collected from the form, before any rule has run.
///
/// `query_type` has no derived rule: [`validate`] parses it into a
/// [`QueryType`] and reports the failure itself.
#[derive(Validate, Clone, Debug, Default, PartialEq)]
pub struct ContactFormInput {
    #[validate(length(min = 1, message = "This field is required."))]
    pub first_name: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub last_name: String,
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    pub query_type: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub message: String,
    #[validate(custom(function = "validate_consent"))]
    pub consent: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub query_type: QueryType,
    pub message: String,
    pub consent: bool,
}

/// One message per failing field, keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }

        Ok(())
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(value: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::default();

        for (name, field_errors) in value.field_errors() {
            let Some(field) = Field::from_attribute(&name) else {
                tracing::warn!(attribute = %name, "validation error on unknown attribute");
                continue;
            };

            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| REQUIRED_MESSAGE.to_owned());

            errors.insert(field, message);
        }

        errors
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Accepted(ContactRequest),
    Rejected(FieldErrors),
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<ContactRequest, FieldErrors> {
        match self {
            Self::Accepted(request) => Ok(request),
            Self::Rejected(errors) => Err(errors),
        }
    }
}

/// Runs every field rule in a single pass.
///
/// Fields are never short-circuited: a rejection carries the message of each
/// failing field so the page can show them all at once.
pub fn validate(input: &ContactFormInput) -> Validation {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => errors.into(),
    };

    let query_type = QueryType::from_str(&input.query_type).ok();
    if query_type.is_none() {
        errors.insert(Field::QueryType, QUERY_TYPE_MESSAGE);
    }

    match query_type {
        Some(query_type) if errors.is_empty() => Validation::Accepted(ContactRequest {
            first_name: input.first_name.to_owned(),
            last_name: input.last_name.to_owned(),
            email: input.email.to_owned(),
            query_type,
            message: input.message.to_owned(),
            consent: input.consent,
        }),
        _ => Validation::Rejected(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rule_follows_the_address_grammar() {
        for email in [
            "a@b.com",
            "john.doe@example.com",
            "first+tag@mail.example.co.uk",
            "o'brien@example.ie",
            "UPPER@EXAMPLE.ORG",
            "under_score@sub-domain.example.io",
        ] {
            assert!(validate_email_address(email).is_ok(), "{email} should pass");
        }

        for email in [
            "",
            "a@b",
            "not-an-email",
            "@example.com",
            "a@.com",
            "a@b.c",
            ".lead@example.com",
            "double..dot@example.com",
            "trailing.@example.com",
            "a b@example.com",
            "a@exa mple.com",
            "a@@example.com",
            "\u{212A}@example.com",
            "a@example.\u{17F}e",
            "a@b.co\u{212A}",
        ] {
            let err = validate_email_address(email).unwrap_err();
            assert_eq!(err.message.as_deref(), Some(EMAIL_MESSAGE), "{email}");
        }
    }

    #[test]
    fn consent_rule_requires_true() {
        assert!(validate_consent(&true).is_ok());

        let err = validate_consent(&false).unwrap_err();
        assert_eq!(err.message.as_deref(), Some(CONSENT_MESSAGE));
    }

    #[test]
    fn field_errors_keep_the_first_message_per_field() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Email, EMAIL_MESSAGE);
        errors.insert(Field::Email, REQUIRED_MESSAGE);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn field_errors_display_lists_fields_in_form_order() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Consent, CONSENT_MESSAGE);
        errors.insert(Field::FirstName, REQUIRED_MESSAGE);

        assert_eq!(
            errors.to_string(),
            format!("firstName: {REQUIRED_MESSAGE}, consent: {CONSENT_MESSAGE}")
        );
    }
}
