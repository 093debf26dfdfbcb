//! Pure stages of the diagnosis pipeline.
//!
//! The server gathers manual and history context, then uses [`prompt::build_prompt`] to assemble
//! the request sent to the model and [`parse::parse_diagnosis`] to turn the model's text back
//! into a [`Diagnosis`](crate::model::diagnosis::Diagnosis). The web client reuses
//! [`form::validate_form`] and [`image::ImagePayload`] before submitting.

pub mod form;
pub mod image;
pub mod parse;
pub mod prompt;

pub use form::{validate_form, IncompleteForm};
pub use image::{ImagePayload, InvalidImage};
pub use parse::{parse_diagnosis, strip_code_fences, DiagnosisParseError};
pub use prompt::{build_prompt, format_past_cases, PastCase};
