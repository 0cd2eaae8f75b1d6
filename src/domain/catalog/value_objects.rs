// src/domain/catalog/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The entity namespaces a URL token can resolve into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Trainer,
    Sport,
    Program,
}

impl EntityKind {
    pub const ALL: [Self; 3] = [Self::Trainer, Self::Sport, Self::Program];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trainer => "trainer",
            Self::Sport => "sport",
            Self::Program => "program",
        }
    }

    /// Path prefix of the canonical page for this kind.
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Trainer => "/trainers",
            Self::Sport => "/sports",
            Self::Program => "/programs",
        }
    }

    /// Payload fields holding image URLs, most preferred first.
    pub const fn image_fields(self) -> &'static [&'static str] {
        match self {
            Self::Trainer => &["avatar_url", "profile_image_url"],
            Self::Sport => &["image_url", "icon_url"],
            Self::Program => &["cover_image_url", "image_url"],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "trainer" => Ok(Self::Trainer),
            "sport" => Ok(Self::Sport),
            "program" => Ok(Self::Program),
            other => Err(DomainError::Validation(format!(
                "unknown entity kind: {other}"
            ))),
        }
    }
}

/// Opaque identifier assigned by the data service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("entity id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStatus {
    Draft,
    Active,
    Published,
    Archived,
}

impl ProgramStatus {
    /// Statuses under which a program is publicly reachable.
    pub const LISTED: [Self; 2] = [Self::Active, Self::Published];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}
