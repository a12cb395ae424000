//! # Transaction Module
//!
//! The read-only picture of a transaction that contracts verify.
//!
//! ## Architecture
//!
//! ```text
//! command.rs — TokenCommand intents, Command (intent + signers), SignerSet
//! view.rs    — TransactionView (resolved inputs, outputs, commands) and ids
//! builder.rs — Fluent TransactionBuilder for assembling views
//! ```
//!
//! ## Design Decisions
//!
//! - Inputs are resolved states, not references. Contracts never look
//!   anything up.
//! - Signers are plain public keys. Signature checking happens before a
//!   view is built.
//! - Transaction ids are BLAKE3 (derive-key mode) over the bincode encoding
//!   of the view. They exist to correlate log lines, not to address storage.

pub mod builder;
pub mod command;
pub mod view;

pub use builder::TransactionBuilder;
pub use command::{Command, SignerSet, TokenCommand};
pub use view::{TransactionId, TransactionView, ViewError};
