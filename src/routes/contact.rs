use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use boxline_contact::ContactInput;
use serde_json::{Value, json};

use crate::{
    error::ApiError,
    routes::AppState,
    template::{Site, Template},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub site: Site,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        site: template.site.clone(),
    })
}

/// POST /api/contact
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload?;

    app_state.contact_command.submit(input).await?;

    Ok(Json(json!({ "message": "Email sent successfully" })))
}
