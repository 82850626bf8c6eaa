//! Customer record
//!
//! Zero values (`0`, `""`, `false`) double as "not provided": they are
//! omitted on the wire, filled in when a field is missing or `null`, and
//! skipped when a record is used as an update patch.

use serde::{Deserialize, Deserializer, Serialize};

/// A single customer record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Store-assigned identifier
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub role: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub phone: String,

    /// Whether the customer has been contacted
    #[serde(skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub contacted: bool,
}

impl Customer {
    /// Create an uncontacted customer with the given id
    pub fn new(
        id: i64,
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            email: email.into(),
            phone: phone.into(),
            contacted: false,
        }
    }

    /// Overwrite fields that are set in `patch`
    ///
    /// Text fields are taken only when non-empty and `contacted` only when
    /// `true`, so a patch can never clear a field. The patch id is ignored.
    pub fn apply_patch(&mut self, patch: &Customer) {
        if !patch.name.is_empty() {
            self.name.clone_from(&patch.name);
        }
        if !patch.role.is_empty() {
            self.role.clone_from(&patch.role);
        }
        if !patch.email.is_empty() {
            self.email.clone_from(&patch.email);
        }
        if !patch.phone.is_empty() {
            self.phone.clone_from(&patch.phone);
        }
        if patch.contacted {
            self.contacted = true;
        }
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

fn is_false(flag: &bool) -> bool {
    !*flag
}
