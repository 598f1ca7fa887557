use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::{ToastConfig, ToastPosition};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";
pub const SUCCESS_MESSAGE: &str = "Message sent. Thanks for filling the form!";

pub struct Template {
    toast: ToastConfig,
}

impl Template {
    pub fn new(toast: ToastConfig) -> Self {
        Self { toast }
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    pub fn toast_success(&self, message: impl Into<String>) -> Toast {
        Toast::new(ToastKind::Success, message, &self.toast)
    }

    pub fn toast_error(&self, message: impl Into<String>) -> Toast {
        Toast::new(ToastKind::Error, message, &self.toast)
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.config.toast.clone()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// A notification banner, closed by `/static/toast.js` according to its data attributes.
#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub auto_close_ms: u64,
    pub position: ToastPosition,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub hide_progress_bar: bool,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>, config: &ToastConfig) -> Self {
        Self {
            kind,
            message: message.into(),
            auto_close_ms: config.auto_close_ms,
            position: config.position,
            close_on_click: config.close_on_click,
            pause_on_hover: config.pause_on_hover,
            draggable: config.draggable,
            hide_progress_bar: config.hide_progress_bar,
        }
    }

    pub fn role(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "status",
            ToastKind::Error => "alert",
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate<'a> {
    pub toast: &'a Toast,
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
