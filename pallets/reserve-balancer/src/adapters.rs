//! Gateway traits for the venues the balancer drives.
//!
//! The pallet never touches a DEX or a lending market directly. The runtime
//! binds these traits to whatever venues it integrates, and `who` is always the
//! treasury account derived from the pallet id.

use frame::prelude::*;
use primitives::AssetKind;

/// Exact-input exchange of one asset for another.
pub trait SwapGateway<AccountId, Balance> {
  /// Spend exactly `amount_in` of `asset_in` held by `who` and return the
  /// amount of `asset_out` credited to `who`. No minimum output is enforced.
  fn swap_exact_input(
    who: &AccountId,
    asset_in: AssetKind,
    asset_out: AssetKind,
    amount_in: Balance,
  ) -> Result<Balance, DispatchError>;
}

/// Yield-bearing positions kept in an external lending venue.
///
/// Principal is always expressed in units of the underlying asset.
pub trait LendingGateway<AccountId, Balance> {
  /// Deposit `amount` of `asset` and return the new principal of `who`.
  fn deposit(who: &AccountId, asset: AssetKind, amount: Balance) -> Result<Balance, DispatchError>;

  /// Withdraw `amount` of principal back to the underlying asset.
  ///
  /// Returns the amount of underlying actually credited.
  fn withdraw(who: &AccountId, asset: AssetKind, amount: Balance)
  -> Result<Balance, DispatchError>;

  fn principal_balance(who: &AccountId, asset: AssetKind) -> Balance;

  /// Whether the venue accepts `asset` as a lending target.
  fn is_supported(asset: AssetKind) -> bool;
}

/// Venue-less configuration: every swap is rejected.
impl<AccountId, Balance> SwapGateway<AccountId, Balance> for () {
  fn swap_exact_input(
    _: &AccountId,
    _: AssetKind,
    _: AssetKind,
    _: Balance,
  ) -> Result<Balance, DispatchError> {
    Err(DispatchError::Unavailable)
  }
}

/// Venue-less configuration: nothing is supported and no principal exists.
impl<AccountId, Balance: Default> LendingGateway<AccountId, Balance> for () {
  fn deposit(_: &AccountId, _: AssetKind, _: Balance) -> Result<Balance, DispatchError> {
    Err(DispatchError::Unavailable)
  }

  fn withdraw(_: &AccountId, _: AssetKind, _: Balance) -> Result<Balance, DispatchError> {
    Err(DispatchError::Unavailable)
  }

  fn principal_balance(_: &AccountId, _: AssetKind) -> Balance {
    Balance::default()
  }

  fn is_supported(_: AssetKind) -> bool {
    false
  }
}
