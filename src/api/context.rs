use std::collections::HashMap;

use super::kind::ResourceKind;

/// Pre-resolved resource links supplied by the caller.
///
/// When a kind has links here, [`ApiClient::fetch_all`](super::ApiClient::fetch_all)
/// fetches exactly those instead of walking the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchContext {
    links: HashMap<ResourceKind, Vec<String>>,
}

impl FetchContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_links<I, S>(mut self, kind: ResourceKind, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links
            .entry(kind)
            .or_default()
            .extend(links.into_iter().map(Into::into));
        self
    }

    /// Links for `kind`, or `None` when there are none.
    pub fn links_for(&self, kind: ResourceKind) -> Option<&[String]> {
        self.links
            .get(&kind)
            .filter(|links| !links.is_empty())
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.links.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let context = FetchContext::new();
        assert!(context.is_empty());
        assert!(context.links_for(ResourceKind::Character).is_none());
    }

    #[test]
    fn test_links_are_kept_per_kind_in_order() {
        let context = FetchContext::new()
            .with_links(ResourceKind::Character, ["b", "a"])
            .with_links(ResourceKind::Character, ["c"]);

        assert_eq!(
            context.links_for(ResourceKind::Character),
            Some(&["b".to_string(), "a".to_string(), "c".to_string()][..])
        );
        assert!(context.links_for(ResourceKind::Planet).is_none());
    }

    #[test]
    fn test_empty_list_counts_as_absent() {
        let context = FetchContext::new().with_links(ResourceKind::Saga, Vec::<String>::new());
        assert!(context.links_for(ResourceKind::Saga).is_none());
        assert!(context.is_empty());
    }
}
