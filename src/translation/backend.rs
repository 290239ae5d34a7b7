use anyhow::Result;

/// Language the API serves descriptions in (ISO 639-1).
pub const SOURCE_LANGUAGE: &str = "es";

/// Language descriptions are translated to (ISO 639-1).
pub const TARGET_LANGUAGE: &str = "en";

/// A text translation service with a fixed Spanish to English pair.
///
/// One string in, one string out. Errors are reported to the caller, which
/// decides whether to fall back to the source text.
pub trait TranslationBackend {
    /// Short name used in logs and configuration output.
    fn name(&self) -> &str;

    fn translate(&self, text: &str) -> Result<String>;
}

impl<T: TranslationBackend + ?Sized> TranslationBackend for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn translate(&self, text: &str) -> Result<String> {
        (**self).translate(text)
    }
}
