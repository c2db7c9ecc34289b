//! `GET /query_profile?query_id=<id>`: renders one recorded query profile as an HTML page.
//!
//! The page is always header, then body, then footer. A missing or empty `query_id` adds an
//! inline warning but the registry is still consulted with the empty id, so such requests
//! end in the not-found body and `404 Not Found`.

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::Response,
};

use crate::state::AppState;
use qprof_registry::ProfileRegistry;
use qprof_web::{PageTemplate, escape_html};

pub const PATH: &str = "/query_profile";
pub const QUERY_ID_PARAM: &str = "query_id";

const MISSING_QUERY_ID_HTML: &str = "<p class=\"text-error\"> Must specify a query_id[]</p>";

pub async fn get_query_profile(
	State(state): State<AppState>,
	Query(params): Query<Vec<(String, String)>>,
) -> Response {
	let query_id = single_parameter(&params, QUERY_ID_PARAM);

	query_profile(state.registry.as_ref(), state.page.as_ref(), query_id)
}

pub fn query_profile(
	registry: &dyn ProfileRegistry,
	page: &dyn PageTemplate,
	query_id: Option<&str>,
) -> Response {
	let mut buffer = String::new();

	page.render_header(&mut buffer);

	let query_id = query_id.unwrap_or_default();

	if query_id.is_empty() {
		buffer.push_str(MISSING_QUERY_ID_HTML);
	}

	match registry.get_profile(query_id) {
		Some(profile) => {
			tracing::debug!(query_id, bytes = profile.len(), "Query profile found.");

			append_query_profile(&mut buffer, &profile);
			page.render_footer(&mut buffer);

			page.write_response(buffer, StatusCode::OK)
		},
		None => {
			tracing::debug!(query_id, "Query profile not found.");

			append_query_profile(&mut buffer, &format!("query id {query_id} not found."));
			page.render_footer(&mut buffer);

			page.write_response(buffer, StatusCode::NOT_FOUND)
		},
	}
}

/// First value of `name` in the decoded query string.
pub fn single_parameter<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
	params.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

fn append_query_profile(buffer: &mut String, text: &str) {
	buffer.push_str("<pre>");
	buffer.push_str(&escape_html(text));
	buffer.push_str("</pre>");
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	struct FakeRegistry(HashMap<&'static str, &'static str>);
	impl ProfileRegistry for FakeRegistry {
		fn get_profile(&self, query_id: &str) -> Option<String> {
			self.0.get(query_id).map(|text| text.to_string())
		}
	}

	fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
	}

	#[test]
	fn single_parameter_takes_the_first_value() {
		let params = params(&[("other", "x"), ("query_id", "q1"), ("query_id", "q2")]);

		assert_eq!(single_parameter(&params, "query_id"), Some("q1"));
		assert_eq!(single_parameter(&params, "missing"), None);
	}

	#[test]
	fn profile_text_is_escaped_inside_pre() {
		let mut buffer = String::new();

		append_query_profile(&mut buffer, "a < b && c");

		assert_eq!(buffer, "<pre>a &lt; b &amp;&amp; c</pre>");
	}

	#[test]
	fn status_follows_registry_result() {
		let registry = FakeRegistry(HashMap::from([("q1", "Fragment 0")]));
		let page = qprof_web::StandardPage::new("Query Profiles");

		assert_eq!(query_profile(&registry, &page, Some("q1")).status(), StatusCode::OK);
		assert_eq!(query_profile(&registry, &page, Some("q2")).status(), StatusCode::NOT_FOUND);
		assert_eq!(query_profile(&registry, &page, None).status(), StatusCode::NOT_FOUND);
		assert_eq!(query_profile(&registry, &page, Some("")).status(), StatusCode::NOT_FOUND);
	}
}
