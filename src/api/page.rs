use serde_json::Value;
use url::Url;

use super::error::FetchError;

/// Language every request is localized to.
pub const LANGUAGE: &str = "en";

/// Continuation link of a pagination envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the link against the page it came from and localizes it.
    pub fn resolve(&self, current: &Url) -> Result<Url, FetchError> {
        resolve_link(current, &self.0)
    }
}

/// A decoded collection response.
#[derive(Debug)]
pub enum Listing {
    /// `{ "items": [...], "links": { "next": ... } }`
    Page {
        items: Vec<Value>,
        next: Option<PageCursor>,
    },
    /// A plain JSON array holding the whole collection.
    Bare(Vec<Value>),
}

impl Listing {
    pub fn parse(url: &Url, body: Value) -> Result<Self, FetchError> {
        let shape_error = || FetchError::Shape {
            url: url.to_string(),
        };

        match body {
            Value::Array(items) => Ok(Self::Bare(items)),
            Value::Object(mut envelope) if envelope.contains_key("items") => {
                let items = match envelope.remove("items") {
                    Some(Value::Array(items)) => items,
                    Some(Value::Null) | None => Vec::new(),
                    Some(_) => return Err(shape_error()),
                };

                // The last page carries an empty string rather than null
                let next = envelope
                    .get("links")
                    .and_then(|links| links.get("next"))
                    .and_then(Value::as_str)
                    .filter(|next| !next.is_empty())
                    .map(|next| PageCursor(next.to_string()));

                Ok(Self::Page { items, next })
            }
            _ => Err(shape_error()),
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Page { items, .. } | Self::Bare(items) => items,
        }
    }
}

/// Appends `language=en` unless the URL already names a language.
pub fn with_language(url: &mut Url) {
    if !url.query_pairs().any(|(key, _)| key == "language") {
        url.query_pairs_mut().append_pair("language", LANGUAGE);
    }
}

/// Parses an absolute or `base`-relative link and localizes it.
pub fn resolve_link(base: &Url, link: &str) -> Result<Url, FetchError> {
    let mut url = base.join(link).map_err(|source| FetchError::InvalidUrl {
        url: link.to_string(),
        source,
    })?;
    with_language(&mut url);
    Ok(url)
}
