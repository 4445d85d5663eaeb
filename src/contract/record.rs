//! Record data model and wire formats

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::errors::{ContractError, ContractResult};

/// A keyed record. `email` is the key and never changes after creation.
///
/// Missing or `null` fields decode to their zero value; only a wrong type
/// is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub designation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        designation: impl Into<String>,
        mobile: i64,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            designation: designation.into(),
            mobile,
        }
    }

    /// Parses the record wire format.
    pub fn from_json(data: &str) -> ContractResult<Self> {
        serde_json::from_str(data)
            .map_err(|e| ContractError::serialization("failed while unmarshalling record data", e))
    }

    /// Parses stored bytes for `key`.
    pub fn from_stored(key: &str, bytes: &[u8]) -> ContractResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            ContractError::serialization(format!("stored record at {} is corrupt", key), e)
        })
    }

    /// Canonical bytes written to the ledger.
    pub fn to_bytes(&self) -> ContractResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| ContractError::serialization("failed while marshalling record", e))
    }
}

/// One version (or deletion) of a key, as returned by history reads.
///
/// `value` is `None` exactly when `is_delete` is true. On the wire the
/// boolean is written as the string `"true"` / `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "TxId")]
    pub tx_id: String,
    #[serde(rename = "Value")]
    pub value: Option<Record>,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "IsDelete", with = "bool_as_string")]
    pub is_delete: bool,
}

mod bool_as_string {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(other),
                &"\"true\" or \"false\"",
            )),
        }
    }
}
