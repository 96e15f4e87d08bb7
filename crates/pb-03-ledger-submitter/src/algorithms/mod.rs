//! Pure algorithms: signing and result extraction.

pub mod extraction;
pub mod signing;

pub use extraction::{
    extract_diagnostics, problem_result_codes, problem_result_string, response_result_string,
};
pub use signing::{parse_seeds, sign_envelope};
