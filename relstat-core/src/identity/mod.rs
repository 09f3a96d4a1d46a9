//! Entity identities.
//!
//! The checking pipeline logs every object as a `(id, type)` pair. Ways and
//! relations are logged directly, but polygons are logged as `area` with a
//! composite id: areas built from a way get `2 * way_id`, areas built from a
//! relation get `2 * relation_id + 1`. Resolving undoes that encoding so the
//! same geometry always lands on the same statistics record.

mod resolve;


pub use resolve::resolve;

use serde::Serialize;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://www.openstreetmap.org";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Way,
    Relation,
    /// Type tag the resolver does not know. Kept verbatim so unexpected log
    /// input is still counted instead of dropped.
    Other(String),
}

impl EntityKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Way => "way",
            Self::Relation => "relation",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityIdentity {
    pub kind: EntityKind,
    pub numeric_id: i64,
}

impl EntityIdentity {
    pub fn way(numeric_id: i64) -> Self {
        Self {
            kind: EntityKind::Way,
            numeric_id,
        }
    }

    pub fn relation(numeric_id: i64) -> Self {
        Self {
            kind: EntityKind::Relation,
            numeric_id,
        }
    }

    /// Canonical key used at the reporting boundary,
    /// e.g. `https://www.openstreetmap.org/way/42`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.kind,
            self.numeric_id
        )
    }
}

impl fmt::Display for EntityIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.numeric_id)
    }
}
