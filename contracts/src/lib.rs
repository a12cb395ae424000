//! # Ledger Contracts
//!
//! Rule engines that decide whether a transaction is valid under a given
//! contract. Each engine is a pure function of a resolved
//! [`TransactionView`](ledger_protocol::transaction::TransactionView): it
//! never reads storage, never verifies signatures itself and never mutates
//! anything. It only answers accept or reject.
//!
//! - **Token Contract** — redeem validation for fungible token records:
//!   no outputs, only positive token inputs, and unanimous consent of every
//!   issuer and every current holder involved.
//!
//! ## Design Principles
//!
//! 1. Same inputs, same verdict, on every validator. Nothing here depends
//!    on time, randomness, hash-map order or the caller's identity.
//! 2. Rules run in a fixed order and the first failure is the verdict.
//! 3. Rejections are typed values carrying a stable reason string, never
//!    panics.

pub mod token_contract;

pub use token_contract::{
    validate_redeem, verify_redeem, RedeemError, RedeemRule, REDEEM_RULES,
};
