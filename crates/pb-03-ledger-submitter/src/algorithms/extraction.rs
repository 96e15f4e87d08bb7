//! # Result Extraction
//!
//! Best-effort recovery of result detail from a failed submission. Every
//! step may fail on its own; a failure is logged and the next step runs.
//!
//! | Detail | Sources, in priority order |
//! |--------|----------------------------|
//! | result codes | problem `extras.result_codes` |
//! | result string | problem `extras.result_xdr`, then the partial response's `result_xdr` |
//!
//! Codes and string are extracted independently: a problem whose codes are
//! malformed can still yield a string, and vice versa.

use crate::domain::classification::SubmissionDiagnostics;
use crate::domain::errors::LedgerError;
use crate::domain::horizon::{TransactionResultCodes, TransactionSuccess};
use tracing::{info, warn};

type StringSource = fn(&LedgerError, &TransactionSuccess) -> Option<String>;

const RESULT_STRING_SOURCES: [StringSource; 2] = [string_from_problem, string_from_response];

fn string_from_problem(error: &LedgerError, _: &TransactionSuccess) -> Option<String> {
    problem_result_string(error)
}

fn string_from_response(_: &LedgerError, response: &TransactionSuccess) -> Option<String> {
    response_result_string(response)
}

/// Result codes from the problem document, if any.
pub fn problem_result_codes(error: &LedgerError) -> Option<TransactionResultCodes> {
    let problem = error.problem()?;
    match problem.result_codes() {
        Ok(codes) => Some(codes),
        Err(e) => {
            warn!("[pb-03] Getting result codes from problem: {}", e);
            None
        }
    }
}

/// Non-empty result string from the problem document, if any.
pub fn problem_result_string(error: &LedgerError) -> Option<String> {
    let problem = error.problem()?;
    match problem.result_string() {
        Ok(s) if !s.is_empty() => Some(s),
        Ok(_) => None,
        Err(e) => {
            warn!("[pb-03] Extracting result string from problem: {}", e);
            None
        }
    }
}

/// Non-empty result string from the partial response.
pub fn response_result_string(response: &TransactionSuccess) -> Option<String> {
    Some(response.result.clone()).filter(|s| !s.is_empty())
}

/// Run the whole chain and log what was found.
pub fn extract_diagnostics(
    error: &LedgerError,
    response: &TransactionSuccess,
) -> SubmissionDiagnostics {
    let result_codes = problem_result_codes(error);
    let result_string = RESULT_STRING_SOURCES
        .iter()
        .find_map(|source| source(error, response));

    match &result_codes {
        Some(codes) => info!("[pb-03] Result codes: {}", codes),
        None => warn!("[pb-03] Cannot locate result codes from failed tx submission"),
    }
    match &result_string {
        Some(s) => info!("[pb-03] Result string: {}", s),
        None => warn!("[pb-03] Cannot locate result string from failed tx submission"),
    }

    SubmissionDiagnostics {
        result_codes,
        result_string,
    }
}
