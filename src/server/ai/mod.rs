//! Client for the hosted generative AI provider.

pub mod gemini;
