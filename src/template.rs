use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::routes::AppState;

/// Values every page layout needs.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: String,
    pub contact_address: String,
    pub is_dev: bool,
}

pub struct Template {
    pub site: Site,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            site: Site {
                name: state.config.site.name.to_owned(),
                contact_address: state.config.email.contact_address.to_owned(),
                is_dev: cfg!(debug_assertions),
            },
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub site: Site,
}
