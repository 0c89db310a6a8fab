use axum::{extract::State, response::IntoResponse};

use crate::{
    routes::AppState,
    stats::Stat,
    template::{Site, Template},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: Site,
    pub stats: Vec<Stat>,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    let stats = app_state.stats.get().await;

    template.render(IndexTemplate {
        site: template.site.clone(),
        stats: stats.to_vec(),
    })
}
