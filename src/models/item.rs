use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize, Serializer};

/// One stationery record as stored in the `stationeries` table.
///
/// Columns are passed through as the store holds them: timestamps keep
/// SQLite's `YYYY-MM-DD HH:MM:SS` text and NULLs written outside the service
/// list as `null`. `in_use` goes out on the wire as `0`/`1`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Item {
    pub id: String,
    pub category: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(serialize_with = "flag_as_int")]
    pub in_use: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn flag_as_int<S: Serializer>(flag: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match flag {
        Some(flag) => serializer.serialize_u8(u8::from(*flag)),
        None => serializer.serialize_none(),
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /items`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewItem {
    pub category: String,
    pub name: String,
    pub location: String,
    pub in_use: bool,
    /// Clients may echo an `id`; the server always generates its own.
    #[serde(default, rename = "id")]
    client_id: Option<IgnoredAny>,
}

impl NewItem {
    #[cfg(test)]
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        in_use: bool,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            location: location.into(),
            in_use,
            client_id: None,
        }
    }

    pub fn had_client_id(&self) -> bool {
        self.client_id.is_some()
    }
}
