//! # Token Contract: Redeem Validation
//!
//! Decides whether a transaction may retire fungible token records. The
//! verdict is consensus-critical: every validator must reach the same answer
//! from the same [`TransactionView`], so everything here is a pure function
//! of its arguments. No clocks, no randomness, no lookups, no shared state.
//!
//! ## Rules
//!
//! Applied in the order of [`REDEEM_RULES`]; the first rule that does not
//! hold decides the rejection.
//!
//! 1. **Command**: exactly one token contract command, and it is `Redeem`.
//! 2. **No outputs**: redeeming destroys value and never recreates it.
//! 3. **Token inputs**: at least one input, and all of them token records.
//! 4. **Positive quantities**: every input quantity is above zero. Records
//!    produced by valid issuance or transfer always are, but inputs are
//!    re-checked here rather than trusted.
//! 5. **Issuers signed**: the owning key of every distinct input issuer is
//!    in the signer set.
//! 6. **Holders signed**: likewise for every distinct input holder.
//!
//! One key may satisfy both 5 and 6 when the same party is issuer of one
//! record and holder of another (or both on a single record).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, debug_span, Span};

use ledger_protocol::identity::Party;
use ledger_protocol::state::{LedgerState, TokenRecord};
use ledger_protocol::transaction::{SignerSet, TokenCommand, TransactionView};

// ---------------------------------------------------------------------------
// Rejection reasons
// ---------------------------------------------------------------------------

// External verification tooling matches on these strings. Do not reword.

/// Reason for [`RedeemError::MissingOrWrongCommand`].
pub const REASON_COMMAND: &str = "Required com.ledger.contracts.TokenContract.Commands command";
/// Reason for [`RedeemError::UnexpectedOutputs`].
pub const REASON_OUTPUTS: &str = "No tokens should be issued when redeeming.";
/// Reason for [`RedeemError::NoInputs`].
pub const REASON_INPUTS: &str = "There should be tokens to redeem.";
/// Reason for [`RedeemError::NonPositiveQuantity`].
pub const REASON_QUANTITY: &str = "All quantities must be above 0.";
/// Reason for [`RedeemError::MissingIssuerSignature`].
pub const REASON_ISSUERS: &str = "The issuers should sign.";
/// Reason for [`RedeemError::MissingHolderSignature`].
pub const REASON_HOLDERS: &str = "The current holders should sign.";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a redeem transaction was rejected.
///
/// One variant per rule. Rejections are final: resubmitting the same
/// transaction always yields the same error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedeemError {
    /// No token command, several of them, or one that is not `Redeem`.
    #[error("{}", REASON_COMMAND)]
    MissingOrWrongCommand,

    /// The transaction creates outputs.
    #[error("{}", REASON_OUTPUTS)]
    UnexpectedOutputs,

    /// No inputs, or an input that is not a token record.
    #[error("{}", REASON_INPUTS)]
    NoInputs,

    /// Some input has a quantity of zero or less.
    #[error("{}", REASON_QUANTITY)]
    NonPositiveQuantity,

    /// Some input issuer's key is absent from the signers.
    #[error("{}", REASON_ISSUERS)]
    MissingIssuerSignature,

    /// Some input holder's key is absent from the signers.
    #[error("{}", REASON_HOLDERS)]
    MissingHolderSignature,
}

impl RedeemError {
    /// The human-readable rejection reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingOrWrongCommand => REASON_COMMAND,
            Self::UnexpectedOutputs => REASON_OUTPUTS,
            Self::NoInputs => REASON_INPUTS,
            Self::NonPositiveQuantity => REASON_QUANTITY,
            Self::MissingIssuerSignature => REASON_ISSUERS,
            Self::MissingHolderSignature => REASON_HOLDERS,
        }
    }

    /// The rule that produced this rejection.
    pub fn rule(&self) -> RedeemRule {
        match self {
            Self::MissingOrWrongCommand => RedeemRule::SingleRedeemCommand,
            Self::UnexpectedOutputs => RedeemRule::NoOutputs,
            Self::NoInputs => RedeemRule::TokenInputs,
            Self::NonPositiveQuantity => RedeemRule::PositiveQuantities,
            Self::MissingIssuerSignature => RedeemRule::IssuersSigned,
            Self::MissingHolderSignature => RedeemRule::HoldersSigned,
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// One check of the redeem rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedeemRule {
    SingleRedeemCommand,
    NoOutputs,
    TokenInputs,
    PositiveQuantities,
    IssuersSigned,
    HoldersSigned,
}

/// The redeem rule set, in evaluation order.
pub const REDEEM_RULES: [RedeemRule; 6] = [
    RedeemRule::SingleRedeemCommand,
    RedeemRule::NoOutputs,
    RedeemRule::TokenInputs,
    RedeemRule::PositiveQuantities,
    RedeemRule::IssuersSigned,
    RedeemRule::HoldersSigned,
];

impl RedeemRule {
    /// The error reported when this rule does not hold.
    pub fn failure(self) -> RedeemError {
        match self {
            Self::SingleRedeemCommand => RedeemError::MissingOrWrongCommand,
            Self::NoOutputs => RedeemError::UnexpectedOutputs,
            Self::TokenInputs => RedeemError::NoInputs,
            Self::PositiveQuantities => RedeemError::NonPositiveQuantity,
            Self::IssuersSigned => RedeemError::MissingIssuerSignature,
            Self::HoldersSigned => RedeemError::MissingHolderSignature,
        }
    }

    /// The verbatim reason reported when this rule does not hold.
    pub fn reason(self) -> &'static str {
        self.failure().reason()
    }

    fn holds(self, check: &RedeemCheck<'_>) -> bool {
        match self {
            Self::SingleRedeemCommand => match check.command {
                Some(TokenCommand::Redeem) => true,
                Some(TokenCommand::Issue | TokenCommand::Transfer | TokenCommand::Unknown(_))
                | None => false,
            },
            Self::NoOutputs => check.outputs.is_empty(),
            Self::TokenInputs => {
                !check.inputs.is_empty() && check.inputs.iter().all(|s| s.as_token().is_some())
            }
            Self::PositiveQuantities => check.tokens().all(|t| t.quantity() > 0),
            Self::IssuersSigned => check.all_signed(check.tokens().map(TokenRecord::issuer)),
            Self::HoldersSigned => check.all_signed(check.tokens().map(TokenRecord::holder)),
        }
    }
}

/// Borrowed arguments of one validation call.
struct RedeemCheck<'a> {
    inputs: &'a [LedgerState],
    outputs: &'a [LedgerState],
    command: Option<&'a TokenCommand>,
    signers: &'a SignerSet,
}

impl<'a> RedeemCheck<'a> {
    fn tokens(&self) -> impl Iterator<Item = &'a TokenRecord> + 'a {
        let inputs: &'a [LedgerState] = self.inputs;
        inputs.iter().filter_map(LedgerState::as_token)
    }

    /// Deduplicates `parties` and checks every owning key was signed.
    fn all_signed(&self, parties: impl Iterator<Item = &'a Party>) -> bool {
        let distinct: BTreeSet<&Party> = parties.collect();
        self.signers.contains_all(distinct.into_iter().map(Party::owning_key))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a redeem from its parts.
///
/// `command` is the single token contract command of the transaction, or
/// `None` if it has none. `signers` are the keys that signed that command.
///
/// # Errors
///
/// Returns the [`RedeemError`] of the first rule in [`REDEEM_RULES`] that
/// does not hold. Later rules are not evaluated.
pub fn validate_redeem(
    inputs: &[LedgerState],
    outputs: &[LedgerState],
    command: Option<&TokenCommand>,
    signers: &SignerSet,
) -> Result<(), RedeemError> {
    let check = RedeemCheck {
        inputs,
        outputs,
        command,
        signers,
    };

    for rule in REDEEM_RULES {
        if !rule.holds(&check) {
            debug!(
                rule = ?rule,
                reason = rule.reason(),
                inputs = inputs.len(),
                outputs = outputs.len(),
                signers = signers.len(),
                "redeem rejected"
            );
            return Err(rule.failure());
        }
    }

    debug!(
        inputs = inputs.len(),
        signers = signers.len(),
        "redeem accepted"
    );
    Ok(())
}

/// Validate a whole transaction as a redeem.
///
/// Picks the transaction's single token contract command; commands of other
/// contracts are ignored. Zero or several token commands fail with
/// [`RedeemError::MissingOrWrongCommand`]. The chosen command's signers are
/// the signer set for rules 5 and 6.
///
/// Verdict events are emitted inside a `verify_redeem` span whose `tx` field
/// is the transaction id. The id is only computed when debug is enabled.
pub fn verify_redeem(tx: &TransactionView) -> Result<(), RedeemError> {
    let span = if tracing::enabled!(tracing::Level::DEBUG) {
        match tx.id() {
            Ok(id) => debug_span!("verify_redeem", tx = %id, commands = tx.commands.len()),
            Err(e) => {
                debug!(error = %e, "transaction id unavailable");
                debug_span!("verify_redeem", commands = tx.commands.len())
            }
        }
    } else {
        Span::none()
    };
    let _entered = span.enter();

    match tx.single_token_command() {
        Some(command) => validate_redeem(
            &tx.inputs,
            &tx.outputs,
            Some(&command.value),
            &command.signers,
        ),
        None => validate_redeem(&tx.inputs, &tx.outputs, None, &SignerSet::new()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
