//! API request parsing
//!
//! A request is one JSON object naming the operation in `op`:
//!
//! ```text
//! {"op":"create","data":"{\"name\":...}"}
//! {"op":"update","key":"a@b.com","name":"..","designation":"..","mobile":1}
//! {"op":"read","key":"a@b.com"}
//! {"op":"delete","key":"a@b.com"}
//! {"op":"get_history","key":"a@b.com"}
//! ```
//!
//! The function names of the earlier chaincode (`CreateEmployee`,
//! `GetHistoryForEmployee`, ...) are accepted as aliases.

use serde::Deserialize;

use crate::contract::Invocation;

use super::errors::{ApiError, ApiResult};

/// Raw request for parsing
#[derive(Debug, Clone, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    designation: Option<String>,
    #[serde(default)]
    mobile: Option<i64>,
}

/// Parses a JSON request into a contract invocation.
pub fn parse_request(json: &str) -> ApiResult<Invocation> {
    let raw: RawRequest = serde_json::from_str(json)
        .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

    match raw.op.as_str() {
        "create" | "CreateEmployee" => Ok(Invocation::Create {
            data: required(raw.data, "data")?,
        }),
        "update" | "UpdateEmployee" => Ok(Invocation::Update {
            key: required(raw.key, "key")?,
            name: required(raw.name, "name")?,
            designation: required(raw.designation, "designation")?,
            mobile: required(raw.mobile, "mobile")?,
        }),
        "read" | "ReadEmployee" => Ok(Invocation::Read {
            key: required(raw.key, "key")?,
        }),
        "delete" | "DeleteEmployee" => Ok(Invocation::Delete {
            key: required(raw.key, "key")?,
        }),
        "get_history" | "GetHistoryForEmployee" => Ok(Invocation::GetHistory {
            key: required(raw.key, "key")?,
        }),
        other => Err(ApiError::unknown_operation(other)),
    }
}

fn required<T>(field: Option<T>, name: &str) -> ApiResult<T> {
    field.ok_or_else(|| ApiError::invalid_request(format!("Missing {}", name)))
}
