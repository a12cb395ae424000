// Copyright (c) 2026 Ledger Contracts Contributors. MIT License.
// See LICENSE for details.

//! # Ledger Protocol — Record Model
//!
//! The data every token contract reasons about: who the parties are, what a
//! token record holds, which commands a transaction carries and who signed
//! them.
//!
//! ## Architecture
//!
//! - **crypto** — Ed25519 keys and the hashes used for ids and test seeds.
//! - **identity** — Parties: X.500 names bound to owning keys.
//! - **state** — Token records and the opaque states of other contracts.
//! - **transaction** — Commands, signer sets, transaction views, builder.
//! - **logging** — `tracing` subscriber setup for embedding hosts.
//! - **config** — Protocol constants.
//!
//! ## Design Philosophy
//!
//! 1. Values, not behaviour. Types here carry data; rules live in contracts.
//! 2. Deterministic by construction. Sets are ordered, encodings canonical,
//!    so every validator sees the same bytes and the same order.
//! 3. Nothing here performs I/O or holds shared state.

pub mod config;
pub mod crypto;
pub mod identity;
pub mod logging;
pub mod state;
pub mod transaction;
