//! Placeholder AI provider settings used by every test.

/// API key the mock provider expects in the `x-goog-api-key` header. Not a real credential.
pub static TEST_GEMINI_API_KEY: &str = "test-gemini-api-key";

/// Model name used to build the mock `generateContent` path.
pub static TEST_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Path of the mock `generateContent` endpoint for [`TEST_GEMINI_MODEL`].
pub static TEST_GENERATE_CONTENT_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
