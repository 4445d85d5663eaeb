//! Gateway: one request, one ledger transaction
//!
//! Flow per request:
//! 1. Parse the JSON envelope
//! 2. Begin a transaction on the ledger
//! 3. Invoke the contract
//! 4. Commit on success, abort on failure

use serde_json::Value;

use crate::contract::{Invocation, RecordContract};
use crate::ledger::{LedgerStub, MemoryLedger};
use crate::observability::ObservationScope;

use super::errors::{ApiError, ApiResult};
use super::request::parse_request;
use super::response::Response;

/// Drives the record contract against an in-memory ledger.
pub struct Gateway {
    ledger: MemoryLedger,
    contract: RecordContract,
    ledger_name: String,
}

impl Gateway {
    pub fn new(ledger: MemoryLedger, contract: RecordContract) -> Self {
        Self {
            ledger,
            contract,
            ledger_name: "default".to_string(),
        }
    }

    /// Sets the ledger name carried in log fields.
    pub fn with_ledger_name(mut self, name: impl Into<String>) -> Self {
        self.ledger_name = name.into();
        self
    }

    pub fn ledger(&self) -> &MemoryLedger {
        &self.ledger
    }

    pub fn contract(&self) -> &RecordContract {
        &self.contract
    }

    pub fn ledger_name(&self) -> &str {
        &self.ledger_name
    }

    /// Handles a raw JSON request string.
    pub fn handle(&mut self, json_request: &str) -> Response {
        let invocation = match parse_request(json_request) {
            Ok(invocation) => invocation,
            Err(e) => return Response::error(&e),
        };

        match self.execute(&invocation) {
            Ok((tx_id, data)) => Response::success(tx_id, data),
            Err(e) => Response::error(&e),
        }
    }

    /// Runs one invocation in its own transaction.
    ///
    /// Returns the transaction id and the operation's result. On failure the
    /// transaction is aborted and nothing it wrote is kept.
    pub fn execute(&mut self, invocation: &Invocation) -> ApiResult<(String, Value)> {
        let scope =
            ObservationScope::with_fields(invocation.name(), &self.scope_fields(invocation));

        let mut tx = self.ledger.begin();
        let tx_id = tx.tx_id().to_string();

        match self.contract.invoke(&mut tx, invocation) {
            Ok(data) => {
                tx.commit();
                scope.complete(&[("tx_id", tx_id.as_str())]);
                Ok((tx_id, data))
            }
            Err(e) => {
                tx.abort();
                scope.fail(e.code(), &e.to_string());
                Err(ApiError::from_contract_error(e))
            }
        }
    }

    /// Log fields for one invocation. Create carries its key inside the
    /// payload, so it has no `key` field.
    fn scope_fields<'a>(&'a self, invocation: &'a Invocation) -> Vec<(&'a str, &'a str)> {
        let mut fields = vec![("ledger", self.ledger_name.as_str())];
        if let Some(key) = invocation.key() {
            fields.push(("key", key));
        }
        fields
    }
}
