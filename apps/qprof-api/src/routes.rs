use axum::{Router, http::StatusCode, routing::get};

use crate::{query_profile, state::AppState};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route(query_profile::PATH, get(query_profile::get_query_profile))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}
