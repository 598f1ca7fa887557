use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contact_form_contact::{ContactFormInput, Error, Field, FieldErrors};
use serde::Deserialize;

use crate::{
    routes::AppState,
    template::{SERVER_ERROR_MESSAGE, SUCCESS_MESSAGE, Template, Toast},
};

#[derive(Default, Debug)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

impl FieldView {
    fn new(value: &str, field: Field, errors: &FieldErrors) -> Self {
        Self {
            value: value.to_owned(),
            error: errors.get(field).map(str::to_owned),
        }
    }
}

/// Current values of the form and the message shown under each field.
#[derive(Default, Debug)]
pub struct FormView {
    pub first_name: FieldView,
    pub last_name: FieldView,
    pub email: FieldView,
    pub query_type: FieldView,
    pub message: FieldView,
    pub consent: bool,
    pub consent_error: Option<String>,
}

impl FormView {
    pub fn new(input: &ContactFormInput, errors: &FieldErrors) -> Self {
        Self {
            first_name: FieldView::new(&input.first_name, Field::FirstName, errors),
            last_name: FieldView::new(&input.last_name, Field::LastName, errors),
            email: FieldView::new(&input.email, Field::Email, errors),
            query_type: FieldView::new(&input.query_type, Field::QueryType, errors),
            message: FieldView::new(&input.message, Field::Message, errors),
            consent: input.consent,
            consent_error: errors.get(Field::Consent).map(str::to_owned),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: FormView,
    pub toast: Option<Toast>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        form: FormView::default(),
        toast: None,
    })
}

/// Raw form body. Fields the browser leaves out decode as empty.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub query_type: String,
    pub message: String,
    pub consent: Option<String>,
}

impl From<ActionInput> for ContactFormInput {
    fn from(value: ActionInput) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            query_type: value.query_type,
            message: value.message,
            consent: matches!(value.consent.as_deref(), Some("on" | "true")),
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Response {
    let input = ContactFormInput::from(input);

    match app_state.command.submit_form(&input) {
        Ok(receipt) => {
            tracing::info!(receipt = %receipt.id, "contact form submitted");

            let toast = template.toast_success(SUCCESS_MESSAGE);
            template.render(ContactTemplate {
                form: FormView::default(),
                toast: Some(toast),
            })
        }
        Err(Error::Validate(errors)) => {
            tracing::debug!(%errors, "contact form rejected");

            let page = template.render(ContactTemplate {
                form: FormView::new(&input, &errors),
                toast: None,
            });

            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
        Err(err) => {
            tracing::error!("{err}");

            let toast = template.toast_error(SERVER_ERROR_MESSAGE);
            let page = template.render(ContactTemplate {
                form: FormView::new(&input, &FieldErrors::default()),
                toast: Some(toast),
            });

            (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_input(consent: Option<&str>) -> ActionInput {
        ActionInput {
            consent: consent.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn checkbox_counts_only_when_checked() {
        assert!(ContactFormInput::from(action_input(Some("on"))).consent);
        assert!(ContactFormInput::from(action_input(Some("true"))).consent);
        assert!(!ContactFormInput::from(action_input(Some("off"))).consent);
        assert!(!ContactFormInput::from(action_input(Some(""))).consent);
        assert!(!ContactFormInput::from(action_input(None)).consent);
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let input: ActionInput = serde_urlencoded::from_str("firstName=Ada").unwrap();

        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.query_type, "");
        assert_eq!(input.consent, None);
    }
}
