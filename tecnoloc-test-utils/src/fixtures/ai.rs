//! Mock AI provider endpoints.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TEST_GEMINI_API_KEY, TEST_GENERATE_CONTENT_PATH},
    TestContext,
};

pub struct AiFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> AiFixtures<'a> {
    /// Create a mock `generateContent` endpoint answering with a single text part.
    ///
    /// The mock only matches requests carrying [`TEST_GEMINI_API_KEY`] and verifies it was
    /// called exactly `expected_requests` times.
    pub fn create_generate_content_endpoint(&mut self, text: &str, expected_requests: usize) -> Mock {
        let body = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        });

        self.setup
            .server
            .mock("POST", TEST_GENERATE_CONTENT_PATH)
            .match_header("x-goog-api-key", TEST_GEMINI_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `generateContent` endpoint that only matches when the request body
    /// contains `fragment`, e.g. a piece of the manual expected in the prompt.
    pub fn create_generate_content_endpoint_matching(
        &mut self,
        fragment: &str,
        text: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        });

        self.setup
            .server
            .mock("POST", TEST_GENERATE_CONTENT_PATH)
            .match_body(Matcher::Regex(regex_escape(fragment)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `generateContent` endpoint failing with the provider's error format.
    pub fn create_generate_content_error(
        &mut self,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "error": { "code": status, "message": message, "status": "INVALID_ARGUMENT" }
        });

        self.setup
            .server
            .mock("POST", TEST_GENERATE_CONTENT_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}

fn regex_escape(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
