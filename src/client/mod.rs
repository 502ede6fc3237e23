pub mod gemini_client;
pub mod provider_error;
pub mod translate_client;
