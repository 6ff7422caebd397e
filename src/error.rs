//! Unified error types for the beacon AMM library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers.  Every error is synchronous and aborts the whole operation
//! with no partial state change; nothing is retried internally.
//!
//! Errors are grouped into coarse categories via [`AmmError::kind`]:
//!
//! - [`ErrorKind::Validation`] — the caller supplied invalid arguments.
//! - [`ErrorKind::StateConflict`] — the requested creation conflicts with
//!   existing state.
//! - [`ErrorKind::Invariant`] — the operation would violate the economic
//!   invariant or leave reserves inconsistent.
//! - [`ErrorKind::Authorization`] — the caller lacks owner privilege.
//! - [`ErrorKind::Reentrancy`] — a reentrancy guard tripped.
//! - [`ErrorKind::Arithmetic`] — checked arithmetic overflowed.
//! - [`ErrorKind::Ledger`] — the token ledger rejected a transfer.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Unified error enum for every fallible operation in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmError {
    /// Both asset identifiers of a pair are the same.
    IdenticalAssets,
    /// A pool already exists for the requested unordered pair.
    PairExists,
    /// Protocol fee rate exceeds the 1000 bps (10%) cap.
    InvalidFeeRate,
    /// A swap requested zero output on both sides.
    InsufficientOutputAmount,
    /// Requested output exceeds the pool's current reserves.
    InsufficientLiquidity,
    /// A swap provided no input on either side.
    InsufficientInputAmount,
    /// A deposit is too small to mint any liquidity shares.
    InsufficientLiquidityMinted,
    /// A withdrawal is too small to return any of either asset.
    InsufficientLiquidityBurned,
    /// The first deposit does not cover the permanently locked minimum.
    InsufficientInitialLiquidity,
    /// The fee-adjusted reserve product would decrease.
    InvariantViolation,
    /// The caller is not the owner of the target component.
    Unauthorized,
    /// A guarded pool operation was re-entered before completing.
    Reentrant,
    /// The upgrade coordinator has not been bound to its beacons yet.
    BeaconsNotSet,
    /// The upgrade coordinator is already bound to different beacons.
    BeaconsAlreadySet,
    /// A ledger transfer or burn exceeds the source account's balance.
    InsufficientBalance,
    /// Checked arithmetic overflowed; the payload names the computation.
    Overflow(&'static str),
    /// Division by zero in pool math.
    DivisionByZero,
}

/// Coarse error category, mirroring the crate's error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid caller arguments, rejected before any state mutation.
    Validation,
    /// The requested creation conflicts with existing state.
    StateConflict,
    /// The economic invariant would be violated.
    Invariant,
    /// Missing owner privilege.
    Authorization,
    /// Reentrancy guard tripped.
    Reentrancy,
    /// Checked arithmetic failed.
    Arithmetic,
    /// The token ledger rejected an operation.
    Ledger,
}

impl AmmError {
    /// Returns the coarse category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IdenticalAssets
            | Self::InvalidFeeRate
            | Self::InsufficientOutputAmount
            | Self::BeaconsNotSet => ErrorKind::Validation,
            Self::PairExists | Self::BeaconsAlreadySet => ErrorKind::StateConflict,
            Self::InvariantViolation
            | Self::InsufficientLiquidity
            | Self::InsufficientInputAmount
            | Self::InsufficientLiquidityMinted
            | Self::InsufficientLiquidityBurned
            | Self::InsufficientInitialLiquidity => ErrorKind::Invariant,
            Self::Unauthorized => ErrorKind::Authorization,
            Self::Reentrant => ErrorKind::Reentrancy,
            Self::Overflow(_) | Self::DivisionByZero => ErrorKind::Arithmetic,
            Self::InsufficientBalance => ErrorKind::Ledger,
        }
    }
}

impl fmt::Display for AmmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdenticalAssets => write!(f, "pair requires two distinct asset identifiers"),
            Self::PairExists => write!(f, "a pool already exists for this pair"),
            Self::InvalidFeeRate => write!(f, "fee rate exceeds the 1000 bps cap"),
            Self::InsufficientOutputAmount => write!(f, "swap requested no output"),
            Self::InsufficientLiquidity => write!(f, "requested output exceeds reserves"),
            Self::InsufficientInputAmount => write!(f, "swap provided no input"),
            Self::InsufficientLiquidityMinted => {
                write!(f, "deposit too small to mint liquidity shares")
            }
            Self::InsufficientLiquidityBurned => {
                write!(f, "withdrawal too small to return any assets")
            }
            Self::InsufficientInitialLiquidity => {
                write!(f, "first deposit does not cover the locked minimum liquidity")
            }
            Self::InvariantViolation => {
                write!(f, "fee-adjusted reserve product would decrease")
            }
            Self::Unauthorized => write!(f, "caller is not the owner"),
            Self::Reentrant => write!(f, "reentrant call into a guarded pool operation"),
            Self::BeaconsNotSet => write!(f, "upgrade coordinator beacons are not configured"),
            Self::BeaconsAlreadySet => {
                write!(f, "upgrade coordinator is already bound to different beacons")
            }
            Self::InsufficientBalance => write!(f, "ledger balance too low"),
            Self::Overflow(context) => write!(f, "arithmetic overflow: {context}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for AmmError {}
