use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pagination::PageWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a path or body value; anything that is not a UUID yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Catalog entry. `price` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub image: String,
    pub description: String,
}

/// Catalog listing request: an optional case-insensitive name prefix and a page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub name_prefix: Option<String>,
    pub window: PageWindow,
}

impl ProductQuery {
    pub fn new(name_prefix: Option<String>, window: PageWindow) -> Self {
        let name_prefix = name_prefix
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        Self {
            name_prefix,
            window,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match &self.name_prefix {
            Some(prefix) => product
                .name
                .to_lowercase()
                .starts_with(&prefix.to_lowercase()),
            None => true,
        }
    }
}
