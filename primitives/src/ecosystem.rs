//! Ecosystem constants for the treasury.
//!
//! Pallet identifiers and default parameters shared by the balancer pallet and
//! every runtime that binds it.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used with `PalletId::into_account_truncating()` to derive the account that
/// holds the treasury's base asset and owns its lending positions.
pub mod pallet_ids {
  /// Reserve Balancer pallet ID (treasury account)
  pub const RESERVE_BALANCER_PALLET_ID: &[u8; 8] = b"py/rsvbl";
}

/// Default parameters of the balancing engine.
pub mod params {
  /// Base of every allocation percentage.
  pub const PERCENT_BASE: u32 = 100;

  /// Tolerance band in percentage points (5).
  ///
  /// A reserve whose current share trails its target by this much or less is
  /// left alone by the balancing pass.
  pub const DEFAULT_BALANCE_BUFFER_PERCENT: u8 = 5;

  /// Upper bound on registered reserves (16).
  ///
  /// Bounds the per-pass loop over swap and lending calls.
  pub const MAX_RESERVES: u32 = 16;
}
