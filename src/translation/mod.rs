mod backend;
mod google;
mod openai;
mod prompt;

pub use backend::{SOURCE_LANGUAGE, TARGET_LANGUAGE, TranslationBackend};
pub use google::{DEFAULT_GOOGLE_ENDPOINT, GoogleBackend};
pub use openai::OpenAiBackend;
