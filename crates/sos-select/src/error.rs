//! Error types for preferred phone selection

use thiserror::Error;

/// Reasons a selection produced no radio
///
/// None of these are fatal: the caller falls back to the plain dial pad.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The device reports no radios at all
    #[error("no phone available")]
    NoRadiosAvailable,

    /// No radio has a promoted emergency number
    #[error("no promoted emergency number found")]
    NoPromotedNumbers,

    /// The default radio failed the sufficiency check
    ///
    /// Recoverable: selection continues with the call-capable radios.
    #[error("default phone account is insufficient for emergency call: {0}")]
    DefaultInsufficient(String),

    /// No call-capable radio passed the sufficiency check
    #[error("no phone account available for emergency call")]
    NoSufficientRadioFound,
}
