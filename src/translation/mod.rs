mod client;
mod language;

pub use client::{DeeplClient, TranslateError, Translator, default_server_url};
pub use language::Language;
