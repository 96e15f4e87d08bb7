//! # Horizon Documents
//!
//! Response bodies of the ledger's `POST /transactions` endpoint.
//!
//! Success:
//!
//! ```json
//! {"hash": "..", "ledger": 123, "envelope_xdr": "..", "result_xdr": "..", "result_meta_xdr": ".."}
//! ```
//!
//! Failure (problem document):
//!
//! ```json
//! {"type": "..", "title": "Transaction Failed", "status": 400, "detail": "..",
//!  "extras": {"envelope_xdr": "..", "result_xdr": "..",
//!             "result_codes": {"transaction": "tx_failed", "operations": ["op_underfunded"]}}}
//! ```

use super::errors::ProblemError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Confirmation record of a submitted transaction.
///
/// Every field defaults so a partial body still decodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSuccess {
    /// Transaction hash (hex).
    #[serde(default)]
    pub hash: String,
    /// Ledger sequence the transaction was included in.
    #[serde(default)]
    pub ledger: u64,
    /// Submitted envelope (base64 XDR).
    #[serde(default, rename = "envelope_xdr")]
    pub envelope: String,
    /// Transaction result (base64 XDR).
    #[serde(default, rename = "result_xdr")]
    pub result: String,
    /// Ledger meta (base64 XDR).
    #[serde(default, rename = "result_meta_xdr")]
    pub meta: String,
}

impl TransactionSuccess {
    /// True if no field carries data.
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
            && self.ledger == 0
            && self.envelope.is_empty()
            && self.result.is_empty()
            && self.meta.is_empty()
    }
}

/// Transaction-level and per-operation result codes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResultCodes {
    /// e.g. `tx_bad_seq`, `tx_bad_auth`, `tx_failed`.
    #[serde(rename = "transaction")]
    pub transaction_code: String,
    /// One entry per operation, e.g. `op_underfunded`.
    #[serde(default, rename = "operations")]
    pub operation_codes: Vec<String>,
}

impl fmt::Display for TransactionResultCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.transaction_code)?;
        if !self.operation_codes.is_empty() {
            write!(f, " [{}]", self.operation_codes.join(", "))?;
        }
        Ok(())
    }
}

/// Problem document returned for a failed request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizonProblem {
    /// Problem type URL.
    #[serde(default, rename = "type")]
    pub problem_type: String,
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// HTTP status.
    #[serde(default)]
    pub status: u16,
    /// Human-readable detail.
    #[serde(default)]
    pub detail: String,
    /// Endpoint-specific detail, kept raw so a malformed field only spoils
    /// that field.
    #[serde(default)]
    pub extras: Option<Value>,
}

impl HorizonProblem {
    fn extra(&self, field: &'static str) -> Result<&Value, ProblemError> {
        let extras = self
            .extras
            .as_ref()
            .and_then(Value::as_object)
            .ok_or(ProblemError::MissingExtras)?;
        extras.get(field).ok_or(ProblemError::MissingField(field))
    }

    /// Structured result codes from `extras.result_codes`.
    pub fn result_codes(&self) -> Result<TransactionResultCodes, ProblemError> {
        const FIELD: &str = "result_codes";
        let raw = self.extra(FIELD)?;
        TransactionResultCodes::deserialize(raw).map_err(|e| ProblemError::Malformed {
            field: FIELD,
            reason: e.to_string(),
        })
    }

    /// Result XDR string from `extras.result_xdr`.
    pub fn result_string(&self) -> Result<String, ProblemError> {
        const FIELD: &str = "result_xdr";
        match self.extra(FIELD)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(ProblemError::Malformed {
                field: FIELD,
                reason: format!("expected string, found {}", other),
            }),
        }
    }
}

impl fmt::Display for HorizonProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.title, self.status)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx_failed_problem() -> HorizonProblem {
        serde_json::from_value(json!({
            "type": "https://stellar.org/horizon-errors/transaction_failed",
            "title": "Transaction Failed",
            "status": 400,
            "detail": "The transaction failed when submitted to the stellar network.",
            "extras": {
                "envelope_xdr": "AAAA",
                "result_xdr": "AAAAAAAAAGT/////AAAAAQAAAAAAAAAB////+wAAAAA=",
                "result_codes": {
                    "transaction": "tx_failed",
                    "operations": ["op_underfunded"]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_success_decodes_partial_body() {
        let success: TransactionSuccess =
            serde_json::from_value(json!({"result_xdr": "AAAA"})).unwrap();
        assert_eq!(success.result, "AAAA");
        assert!(success.hash.is_empty());
        assert!(!success.is_empty());
    }

    #[test]
    fn test_success_full_body() {
        let success: TransactionSuccess = serde_json::from_value(json!({
            "hash": "ab12",
            "ledger": 77,
            "envelope_xdr": "E",
            "result_xdr": "R",
            "result_meta_xdr": "M"
        }))
        .unwrap();
        assert_eq!(success.ledger, 77);
        assert_eq!(success.meta, "M");
    }

    #[test]
    fn test_result_codes_extracted() {
        let codes = tx_failed_problem().result_codes().unwrap();
        assert_eq!(codes.transaction_code, "tx_failed");
        assert_eq!(codes.operation_codes, vec!["op_underfunded"]);
        assert_eq!(codes.to_string(), "tx_failed [op_underfunded]");
    }

    #[test]
    fn test_result_string_extracted() {
        assert!(tx_failed_problem().result_string().unwrap().starts_with("AAAA"));
    }

    #[test]
    fn test_missing_extras() {
        let problem = HorizonProblem::default();
        assert_eq!(problem.result_codes(), Err(ProblemError::MissingExtras));
        assert_eq!(problem.result_string(), Err(ProblemError::MissingExtras));
    }

    #[test]
    fn test_extras_not_an_object() {
        let problem = HorizonProblem {
            extras: Some(json!("oops")),
            ..Default::default()
        };
        assert_eq!(problem.result_codes(), Err(ProblemError::MissingExtras));
    }

    #[test]
    fn test_malformed_result_codes() {
        let problem = HorizonProblem {
            extras: Some(json!({"result_codes": 12, "result_xdr": ["x"]})),
            ..Default::default()
        };
        assert!(matches!(
            problem.result_codes(),
            Err(ProblemError::Malformed { field: "result_codes", .. })
        ));
        assert!(matches!(
            problem.result_string(),
            Err(ProblemError::Malformed { field: "result_xdr", .. })
        ));
    }

    #[test]
    fn test_problem_display() {
        assert_eq!(
            tx_failed_problem().to_string(),
            "Transaction Failed (status 400): The transaction failed when submitted to the stellar network."
        );
    }
}
