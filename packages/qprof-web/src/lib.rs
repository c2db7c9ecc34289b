//! Shared page chrome for the HTML views.

use axum::{
	http::StatusCode,
	response::{Html, IntoResponse, Response},
};

/// Inline style sheet for every page. `.text-error` marks request errors in the body.
const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 20px; background: #f5f5f5; }
.container { max-width: 1400px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; }
h1 { color: #333; border-bottom: 3px solid #007bff; padding-bottom: 10px; }
nav a { margin-right: 20px; color: #007bff; text-decoration: none; }
pre { background: #f8f9fa; padding: 15px; border-radius: 4px; overflow-x: auto; }
.text-error { color: #dc3545; font-weight: 600; }
.footer { margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd; color: #666; font-size: 0.9em; }
";

/// Page chrome and response finalization shared by HTML endpoints.
pub trait PageTemplate
where
	Self: Send + Sync,
{
	fn render_header(&self, buffer: &mut String);

	fn render_footer(&self, buffer: &mut String);

	/// Sends the accumulated page with `status`.
	fn write_response(&self, buffer: String, status: StatusCode) -> Response {
		(status, Html(buffer)).into_response()
	}
}

#[derive(Clone, Debug)]
pub struct StandardPage {
	title: String,
}
impl StandardPage {
	pub fn new(title: impl Into<String>) -> Self {
		Self { title: title.into() }
	}
}

impl PageTemplate for StandardPage {
	fn render_header(&self, buffer: &mut String) {
		let title = escape_html(&self.title);

		buffer.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
		buffer.push_str("<meta charset=\"UTF-8\">\n");
		buffer.push_str(&format!("<title>{title}</title>\n"));
		buffer.push_str("<style>\n");
		buffer.push_str(STYLE);
		buffer.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
		buffer.push_str(&format!("<h1>{title}</h1>\n"));
		buffer.push_str("<nav><a href=\"/health\">health</a></nav>\n");
	}

	fn render_footer(&self, buffer: &mut String) {
		buffer.push_str("\n<div class=\"footer\">");
		buffer.push_str(&escape_html(&self.title));
		buffer.push_str("</div>\n</div>\n</body>\n</html>\n");
	}
}

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());

	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}

	out
}

#[cfg(test)]
mod tests {
	use axum::http::header;

	use super::*;

	#[test]
	fn escapes_markup_characters() {
		assert_eq!(escape_html("Fragment{...}"), "Fragment{...}");
		assert_eq!(
			escape_html("<b>\"a\" & 'b'</b>"),
			"&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
		);
	}

	#[test]
	fn header_and_footer_wrap_the_body() {
		let page = StandardPage::new("Query <Profiles>");
		let mut buffer = String::new();

		page.render_header(&mut buffer);
		buffer.push_str("BODY");
		page.render_footer(&mut buffer);

		let body_at = buffer.find("BODY").expect("Body must be present.");

		assert!(buffer.starts_with("<!DOCTYPE html>"));
		assert!(buffer[..body_at].contains("<h1>Query &lt;Profiles&gt;</h1>"));
		assert!(buffer[..body_at].contains(".text-error"));
		assert!(buffer[body_at..].trim_end().ends_with("</html>"));
	}

	#[test]
	fn write_response_sets_status_and_html_content_type() {
		let page = StandardPage::new("Query Profiles");
		let response = page.write_response("<p>x</p>".to_string(), StatusCode::NOT_FOUND);

		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		assert_eq!(
			response.headers().get(header::CONTENT_TYPE).and_then(|value| value.to_str().ok()),
			Some("text/html; charset=utf-8")
		);
	}
}
