use crate::identity::{EntityIdentity, EntityKind};

/// Maps a raw `(id, type)` pair from the log onto the entity it refers to.
///
/// `area` ids are split by parity: even ids are ways (`id / 2`), odd ids are
/// relations (`(id - 1) / 2`). Unknown type tags pass through as
/// [`EntityKind::Other`].
pub fn resolve(raw_id: i64, raw_type: &str) -> EntityIdentity {
    match raw_type {
        "way" => EntityIdentity::way(raw_id),
        "relation" => EntityIdentity::relation(raw_id),
        "area" => {
            if raw_id % 2 == 0 {
                EntityIdentity::way(raw_id / 2)
            } else {
                EntityIdentity::relation((raw_id - 1) / 2)
            }
        }
        other => EntityIdentity {
            kind: EntityKind::Other(other.to_string()),
            numeric_id: raw_id,
        },
    }
}
