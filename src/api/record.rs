//! Typed records for each resource kind.
//!
//! Decoding is pure: it never translates. Translation is a separate step,
//! [`Resource::translated`], which consumes a record and returns a new one.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::error::FetchError;
use super::kind::ResourceKind;
use crate::cache::Translate;

/// A concrete record type bound to one [`ResourceKind`].
pub trait Record: DeserializeOwned {
    const KIND: ResourceKind;

    fn into_resource(self) -> Resource;

    fn decode(value: Value) -> Result<Self, FetchError> {
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            kind: Self::KIND,
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub ki: String,
    pub max_ki: String,
    pub race: String,
    pub gender: String,
    pub description: String,
    pub image: Option<Url>,
    pub affiliation: String,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub id: u64,
    pub name: String,
    pub image: Option<Url>,
    pub ki: String,
    // Absent from the nested transformation lists of character details
    #[serde(default)]
    pub character_id: Option<u64>,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_destroyed: Option<bool>,
    pub description: String,
    pub image: Option<Url>,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saga {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image: Option<Url>,
    pub chapters: Option<Vec<u32>>,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub chapter: u32,
    pub saga: String,
    pub deleted_at: Option<String>,
}

macro_rules! impl_record {
    ($($ty:ident),*) => {
        $(
            impl Record for $ty {
                const KIND: ResourceKind = ResourceKind::$ty;

                fn into_resource(self) -> Resource {
                    Resource::$ty(self)
                }
            }
        )*
    };
}

impl_record!(Character, Transformation, Planet, Saga, Episode);

/// Any record, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Character(Character),
    Transformation(Transformation),
    Planet(Planet),
    Saga(Saga),
    Episode(Episode),
}

impl Resource {
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Character(_) => ResourceKind::Character,
            Self::Transformation(_) => ResourceKind::Transformation,
            Self::Planet(_) => ResourceKind::Planet,
            Self::Saga(_) => ResourceKind::Saga,
            Self::Episode(_) => ResourceKind::Episode,
        }
    }

    pub const fn id(&self) -> u64 {
        match self {
            Self::Character(r) => r.id,
            Self::Transformation(r) => r.id,
            Self::Planet(r) => r.id,
            Self::Saga(r) => r.id,
            Self::Episode(r) => r.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Character(r) => &r.name,
            Self::Transformation(r) => &r.name,
            Self::Planet(r) => &r.name,
            Self::Saga(r) => &r.name,
            Self::Episode(r) => &r.name,
        }
    }

    /// `None` for kinds whose schema has no description.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Character(r) => Some(&r.description),
            Self::Planet(r) => Some(&r.description),
            Self::Saga(r) => Some(&r.description),
            Self::Episode(r) => Some(&r.description),
            Self::Transformation(_) => None,
        }
    }

    pub const fn image(&self) -> Option<&Url> {
        match self {
            Self::Character(r) => r.image.as_ref(),
            Self::Transformation(r) => r.image.as_ref(),
            Self::Planet(r) => r.image.as_ref(),
            Self::Saga(r) => r.image.as_ref(),
            Self::Episode(_) => None,
        }
    }

    pub fn deleted_at(&self) -> Option<&str> {
        match self {
            Self::Character(r) => r.deleted_at.as_deref(),
            Self::Transformation(r) => r.deleted_at.as_deref(),
            Self::Planet(r) => r.deleted_at.as_deref(),
            Self::Saga(r) => r.deleted_at.as_deref(),
            Self::Episode(r) => r.deleted_at.as_deref(),
        }
    }

    const fn description_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Character(r) => Some(&mut r.description),
            Self::Planet(r) => Some(&mut r.description),
            Self::Saga(r) => Some(&mut r.description),
            Self::Episode(r) => Some(&mut r.description),
            Self::Transformation(_) => None,
        }
    }

    /// Returns the record with its description passed through `translator`.
    ///
    /// Records without a description, or with an empty one, come back as-is.
    #[must_use]
    pub fn translated<T: Translate + ?Sized>(mut self, translator: &mut T) -> Self {
        if let Some(description) = self.description_mut()
            && !description.is_empty()
        {
            *description = translator.translate(description);
        }
        self
    }

    /// Kind-specific fields in display order, excluding id and name.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = match self {
            Self::Character(r) => vec![
                ("race", r.race.clone()),
                ("gender", r.gender.clone()),
                ("ki", r.ki.clone()),
                ("max ki", r.max_ki.clone()),
                ("affiliation", r.affiliation.clone()),
                ("description", r.description.clone()),
            ],
            Self::Transformation(r) => {
                let mut fields = vec![("ki", r.ki.clone())];
                if let Some(character_id) = r.character_id {
                    fields.push(("character", format!("#{character_id}")));
                }
                fields
            }
            Self::Planet(r) => {
                let mut fields = Vec::new();
                if let Some(destroyed) = r.is_destroyed {
                    let destroyed = if destroyed { "yes" } else { "no" };
                    fields.push(("destroyed", destroyed.to_string()));
                }
                fields.push(("description", r.description.clone()));
                fields
            }
            Self::Saga(r) => {
                let mut fields = Vec::new();
                if let Some(chapters) = &r.chapters {
                    let chapters: Vec<String> = chapters.iter().map(ToString::to_string).collect();
                    fields.push(("chapters", chapters.join(", ")));
                }
                fields.push(("description", r.description.clone()));
                fields
            }
            Self::Episode(r) => vec![
                ("saga", r.saga.clone()),
                ("chapter", r.chapter.to_string()),
                ("description", r.description.clone()),
            ],
        };

        if let Some(image) = self.image() {
            fields.push(("image", image.to_string()));
        }
        if let Some(deleted_at) = self.deleted_at() {
            fields.push(("deleted", deleted_at.to_string()));
        }

        fields
    }

    /// One-line label for menus, e.g. `#1 Goku (Saiyan)`.
    pub fn summary(&self) -> String {
        let detail = match self {
            Self::Character(r) => Some(r.race.as_str()),
            Self::Transformation(r) => Some(r.ki.as_str()),
            Self::Episode(r) => Some(r.saga.as_str()),
            Self::Planet(_) | Self::Saga(_) => None,
        };

        match detail {
            Some(detail) if !detail.is_empty() => {
                format!("#{} {} ({detail})", self.id(), self.name())
            }
            _ => format!("#{} {}", self.id(), self.name()),
        }
    }
}

impl From<Transformation> for Resource {
    fn from(value: Transformation) -> Self {
        Self::Transformation(value)
    }
}
