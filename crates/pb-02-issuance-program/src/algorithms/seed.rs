//! # Contract Seeds
//!
//! The VM's domain-separated hash, used to derive a program's on-chain
//! identity.
//!
//! `vm_hash(f, x) = cSHAKE128(X = x, L = 256, N = "", S = "ChainVM." + f)`
//!
//! A contract created by the `contract` instruction from program `p` has
//! seed `vm_hash("ContractSeed", p)`.

use crate::domain::ProgramSeed;
use sha3::digest::{ExtendableOutput, Update};
use sha3::{CShake128, CShake128Core};

const VM_HASH_DOMAIN: &[u8] = b"ChainVM.";

/// Hash `data` under the named VM function domain.
pub fn vm_hash(function: &str, data: &[u8]) -> [u8; 32] {
    let customization = [VM_HASH_DOMAIN, function.as_bytes()].concat();

    let mut hasher = CShake128::from_core(CShake128Core::new(&customization));
    hasher.update(data);

    let mut hash = [0u8; 32];
    hasher.finalize_xof_into(&mut hash);
    hash
}

/// Seed of the contract created from `program`.
pub fn contract_seed(program: &[u8]) -> ProgramSeed {
    ProgramSeed::new(vm_hash("ContractSeed", program))
}
