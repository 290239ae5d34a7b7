//! Resource type registry.
//!
//! The closed set of resource kinds the API serves, with their endpoint
//! segments, menu aliases and decoders.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::error::FetchError;
use super::record::{Character, Episode, Planet, Record, Resource, Saga, Transformation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Character,
    Transformation,
    Planet,
    Saga,
    Episode,
}

/// A sub-resource reachable from one record of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationBinding {
    /// Menu key that opens the relation.
    pub key: char,
    /// Human readable label.
    pub label: &'static str,
    /// Kind of the related records.
    pub target: ResourceKind,
}

const CHARACTER_RELATIONS: &[RelationBinding] = &[RelationBinding {
    key: 't',
    label: "Transformations",
    target: ResourceKind::Transformation,
}];

impl ResourceKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Character,
        Self::Transformation,
        Self::Planet,
        Self::Saga,
        Self::Episode,
    ];

    /// Kind shown when the explorer starts.
    pub const DEFAULT: Self = Self::Character;

    pub const fn name(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Transformation => "transformation",
            Self::Planet => "planet",
            Self::Saga => "saga",
            Self::Episode => "episode",
        }
    }

    /// Collection endpoint segment: the lowercase name plus "s".
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Transformation => "transformations",
            Self::Planet => "planets",
            Self::Saga => "sagas",
            Self::Episode => "episodes",
        }
    }

    pub const fn alias(self) -> char {
        match self {
            Self::Character => 'c',
            Self::Transformation => 't',
            Self::Planet => 'p',
            Self::Saga => 's',
            Self::Episode => 'e',
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Character)
    }

    pub const fn relations(self) -> &'static [RelationBinding] {
        match self {
            Self::Character => CHARACTER_RELATIONS,
            _ => &[],
        }
    }

    /// Decodes one raw API item into the record variant of this kind.
    pub fn decode(self, value: Value) -> Result<Resource, FetchError> {
        match self {
            Self::Character => decode_as::<Character>(value),
            Self::Transformation => decode_as::<Transformation>(value),
            Self::Planet => decode_as::<Planet>(value),
            Self::Saga => decode_as::<Saga>(value),
            Self::Episode => decode_as::<Episode>(value),
        }
    }
}

fn decode_as<R: Record>(value: Value) -> Result<Resource, FetchError> {
    R::decode(value).map(Record::into_resource)
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    /// Accepts the name, the plural endpoint form or the one-letter alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                needle == kind.name()
                    || needle == kind.endpoint()
                    || needle.chars().eq(std::iter::once(kind.alias()))
            })
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("Unknown resource kind '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
