use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use super::context::FetchContext;
use super::error::FetchError;
use super::kind::ResourceKind;
use super::page::{Listing, resolve_link};
use super::record::{Character, Record, Resource, Transformation};
use super::transport::{HttpTransport, Transport};
use crate::cache::Translate;

/// Root of the public Dragon Ball API.
pub const DEFAULT_BASE_URL: &str = "https://dragonball-api.com/api/";

/// Read-only client for the resource collections of the API.
///
/// Every operation is a sequence of blocking requests issued in order. Hard
/// failures abort the operation; relation lookups degrade to empty results.
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl ApiClient<HttpTransport> {
    /// Client over HTTP with the given request timeout.
    pub fn connect(base_url: &str, timeout: Duration) -> Result<Self> {
        let transport = HttpTransport::new(timeout)?;
        Self::new(transport, base_url).with_context(|| format!("Invalid API base URL: {base_url}"))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str) -> Result<Self, FetchError> {
        // Without the trailing slash, joins would replace the last segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&normalized).map_err(|source| FetchError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            transport,
            base_url,
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// `<base>/<kind>s?language=en`
    pub fn collection_url(&self, kind: ResourceKind) -> Result<Url, FetchError> {
        resolve_link(&self.base_url, kind.endpoint())
    }

    /// `<base>/<kind>s/{id}?language=en`
    pub fn detail_url(&self, kind: ResourceKind, id: u64) -> Result<Url, FetchError> {
        resolve_link(&self.base_url, &format!("{}/{id}", kind.endpoint()))
    }

    /// `<base>/characters/{id}/transformations?language=en`
    pub fn transformations_url(&self, character_id: u64) -> Result<Url, FetchError> {
        resolve_link(
            &self.base_url,
            &format!(
                "{}/{character_id}/{}",
                ResourceKind::Character.endpoint(),
                ResourceKind::Transformation.endpoint()
            ),
        )
    }

    /// Fetches every record of `kind`, in API order.
    ///
    /// Links in `context` for this kind are fetched one by one instead of the
    /// collection. Descriptions go through `translator` once every record
    /// has been fetched and decoded.
    pub fn fetch_all<Tr: Translate + ?Sized>(
        &self,
        kind: ResourceKind,
        context: Option<&FetchContext>,
        translator: &mut Tr,
    ) -> Result<Vec<Resource>, FetchError> {
        let items = match context.and_then(|context| context.links_for(kind)) {
            Some(links) => self.fetch_links(kind, links)?,
            None => self.fetch_pages(self.collection_url(kind)?)?,
        };

        let records = items
            .into_iter()
            .map(|item| kind.decode(item))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Fetched {} {} records", records.len(), kind);

        Ok(records
            .into_iter()
            .map(|record| record.translated(translator))
            .collect())
    }

    fn fetch_links(&self, kind: ResourceKind, links: &[String]) -> Result<Vec<Value>, FetchError> {
        debug!("Fetching {} {} records from context links", links.len(), kind);

        links
            .iter()
            .map(|link| {
                let url = resolve_link(&self.base_url, link)?;
                self.transport.get_json(&url)
            })
            .collect()
    }

    /// Follows `links.next` from `first` until the cursor runs out.
    fn fetch_pages(&self, first: Url) -> Result<Vec<Value>, FetchError> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut url = first;

        loop {
            let body = self.transport.get_json(&url)?;

            match Listing::parse(&url, body)? {
                Listing::Bare(list) => {
                    items.extend(list);
                    break;
                }
                Listing::Page { items: page, next } => {
                    items.extend(page);

                    let Some(cursor) = next else { break };
                    visited.insert(url.clone());
                    let next_url = cursor.resolve(&url)?;
                    if visited.contains(&next_url) {
                        warn!("Pagination cycle at {next_url}, stopping");
                        break;
                    }
                    url = next_url;
                }
            }
        }

        Ok(items)
    }

    /// Fetches the full record of one resource by id.
    pub fn get<Tr: Translate + ?Sized>(
        &self,
        kind: ResourceKind,
        id: u64,
        translator: &mut Tr,
    ) -> Result<Resource, FetchError> {
        let url = self.detail_url(kind, id)?;
        let body = self.transport.get_json(&url)?;
        Ok(kind.decode(body)?.translated(translator))
    }

    /// Refetches `record` from its detail endpoint as a new record.
    pub fn get_details<Tr: Translate + ?Sized>(
        &self,
        record: &Resource,
        translator: &mut Tr,
    ) -> Result<Resource, FetchError> {
        self.get(record.kind(), record.id(), translator)
    }

    /// Transformations of `character`. Any failure yields an empty list.
    pub fn get_related(&self, character: &Character) -> Vec<Transformation> {
        self.get_transformations(character.id)
    }

    /// Transformations of the character with `character_id`. Any failure
    /// yields an empty list.
    pub fn get_transformations(&self, character_id: u64) -> Vec<Transformation> {
        match self.try_transformations(character_id) {
            Ok(transformations) => transformations,
            Err(e) => {
                warn!("Error fetching transformations for character #{character_id}: {e}");
                Vec::new()
            }
        }
    }

    fn try_transformations(&self, character_id: u64) -> Result<Vec<Transformation>, FetchError> {
        let url = self.transformations_url(character_id)?;
        let body = self.transport.get_json(&url)?;

        Listing::parse(&url, body)?
            .into_items()
            .into_iter()
            .map(Transformation::decode)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct NoTransport {
        requests: RefCell<Vec<String>>,
    }

    impl Transport for NoTransport {
        fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            Err(FetchError::transport(url.as_str(), "offline"))
        }
    }

    fn client(base_url: &str) -> ApiClient<NoTransport> {
        ApiClient::new(
            NoTransport {
                requests: RefCell::new(Vec::new()),
            },
            base_url,
        )
        .unwrap()
    }

    #[test]
    fn test_collection_url() {
        let client = client(DEFAULT_BASE_URL);
        assert_eq!(
            client.collection_url(ResourceKind::Saga).unwrap().as_str(),
            "https://dragonball-api.com/api/sagas?language=en"
        );
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let client = client("https://dragonball-api.com/api");
        assert_eq!(
            client.detail_url(ResourceKind::Planet, 4).unwrap().as_str(),
            "https://dragonball-api.com/api/planets/4?language=en"
        );
    }

    #[test]
    fn test_transformations_url() {
        let client = client(DEFAULT_BASE_URL);
        assert_eq!(
            client.transformations_url(1).unwrap().as_str(),
            "https://dragonball-api.com/api/characters/1/transformations?language=en"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(
            NoTransport {
                requests: RefCell::new(Vec::new()),
            },
            "dragonball api",
        );
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[test]
    fn test_transport_failure_is_fatal_for_fetch_all() {
        let client = client(DEFAULT_BASE_URL);
        let result = client.fetch_all(ResourceKind::Character, None, &mut crate::cache::Passthrough);

        assert!(matches!(result, Err(FetchError::Transport { .. })));
        assert_eq!(client.transport().requests.borrow().len(), 1);
    }

    #[test]
    fn test_transport_failure_is_swallowed_for_transformations() {
        let client = client(DEFAULT_BASE_URL);
        assert!(client.get_transformations(1).is_empty());
    }
}
