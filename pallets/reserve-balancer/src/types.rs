use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

use alloc::vec::Vec;
pub use primitives::{AssetKind, Balance};

/// Scale-free share of the target allocation held by one reserve.
pub type TargetWeight = u32;

/// One registered reserve: an asset the treasury keeps in the lending venue.
#[derive(
  Clone, Copy, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub struct ReserveConfig {
  pub asset: AssetKind,
  pub target_weight: TargetWeight,
}

/// Record of one corrective reallocation made by a balancing pass.
#[derive(
  Clone, Copy, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub struct Correction {
  pub asset: AssetKind,
  /// Base asset spent on the swap
  pub amount_in: Balance,
  /// Underlying received and deposited into the lending venue
  pub amount_out: Balance,
}

/// Outcome of a wind-down over every registered reserve.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LiquidationReport {
  pub withdrawn: Vec<(AssetKind, Balance)>,
  pub failed: Vec<AssetKind>,
}

impl LiquidationReport {
  pub fn is_complete(&self) -> bool {
    self.failed.is_empty()
  }
}
