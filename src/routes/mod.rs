use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use boxline_shared::Mailer;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    stats::StatsCache,
    template::{NotFoundTemplate, Template},
};

mod about;
mod contact;
mod health;
mod index;
mod service_area;
mod stats;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: boxline_contact::Command<Arc<dyn Mailer>>,
    pub stats: StatsCache,
}

impl AppState {
    pub fn new(config: crate::config::Config, mailer: Arc<dyn Mailer>, stats: StatsCache) -> Self {
        let contact_command =
            boxline_contact::Command::new(mailer, config.email.contact_address.to_owned());

        Self {
            config,
            contact_command,
            stats,
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            site: template.site.clone(),
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/contact", get(contact::page))
        .route("/api/contact", post(contact::action))
        .route("/api/stats", get(stats::list))
        .route("/api/service-areas", get(service_area::list))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}

/// The router wrapped in the response middleware stack served by `boxline serve`.
pub fn app(app_state: AppState) -> Router {
    router(app_state)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
