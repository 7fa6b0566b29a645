use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use maud::html;
use serde::Deserialize;

use crate::{
    views::{Copyrights, Footer, Page},
    AppState,
};

pub fn routes(app_state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(home))
        .route("/preview", get(preview))
        .route("/healthz", get(healthz))
        .with_state(app_state)
}

#[tracing::instrument(skip_all)]
async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let footer = Footer::from_html(state.copyrights.as_deref());

    Page::new(
        html! {
            h1 { "Copyright Footer" }
            p { "The footer below shows the configured copyright notice." }
        },
        footer,
    )
}

#[derive(Debug, Deserialize, Clone)]
struct PreviewParams {
    #[serde(default)]
    copyrights: String,
}

/// Shows the footer with visitor-supplied text. Query input is untrusted, so
/// it goes through the escaping constructor.
#[tracing::instrument(skip_all)]
async fn preview(Query(params): Query<PreviewParams>) -> impl IntoResponse {
    let footer = Footer::new(Copyrights::text(&params.copyrights));

    Page::new(
        html! {
            h1 { "Footer Preview" }
        },
        footer,
    )
}

async fn healthz() -> &'static str {
    "ok"
}
