use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use contact_form_contact::Command;

use crate::template::{NotFoundTemplate, Template};

pub mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: Command,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(contact::page))
        .route("/contact", get(contact::page).post(contact::action))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
