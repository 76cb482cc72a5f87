//! Allocation arithmetic.
//!
//! Pure functions over registry state and principal balances. Nothing here reads
//! storage or calls a venue; the pallet gathers the inputs and builds an
//! [`AllocationSnapshot`] once per pass.

use alloc::vec::Vec;
use primitives::{AssetKind, Balance, params::PERCENT_BASE};
use sp_arithmetic::{Rounding, helpers_128bit::multiply_by_rational_with_rounding};

use crate::types::{ReserveConfig, TargetWeight};

/// Share of `total_principal` held as `principal`, floored, in percent.
///
/// Zero when nothing is deposited anywhere yet.
pub fn current_percentage(principal: Balance, total_principal: Balance) -> u32 {
  if total_principal == 0 {
    return 0;
  }
  multiply_by_rational_with_rounding(
    principal,
    PERCENT_BASE as u128,
    total_principal,
    Rounding::Down,
  )
  .map(|p| p.min(u32::MAX as u128) as u32)
  .unwrap_or(PERCENT_BASE)
}

/// Desired share of a reserve, floored, in percent. `None` when no weight is set.
pub fn target_percentage(weight: TargetWeight, total_weight: u64) -> Option<u32> {
  if total_weight == 0 {
    return None;
  }
  let percent = (weight as u64).saturating_mul(PERCENT_BASE as u64) / total_weight;
  Some(percent.min(u32::MAX as u64) as u32)
}

/// Strictly below target by more than the buffer.
///
/// Reserves inside the band, on target or above it are never flagged.
pub fn is_under_allocated(current: u32, target: u32, buffer_percent: u8) -> bool {
  current < target.saturating_sub(buffer_percent as u32)
}

/// Allocation state of one reserve at snapshot time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveAllocation {
  pub asset: AssetKind,
  pub target_weight: TargetWeight,
  pub principal: Balance,
  pub current_percent: u32,
  pub target_percent: u32,
  pub under_allocated: bool,
}

/// Registry state joined with live principal, in registry order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationSnapshot {
  pub reserves: Vec<ReserveAllocation>,
  pub total_principal: Balance,
  pub total_weight: u64,
  pub buffer_percent: u8,
}

impl AllocationSnapshot {
  /// Build the snapshot, querying `principal_of` exactly once per reserve.
  ///
  /// Returns `None` when `total_weight` is zero, as target shares are undefined.
  pub fn build<F>(
    reserves: &[ReserveConfig],
    total_weight: u64,
    buffer_percent: u8,
    principal_of: F,
  ) -> Option<Self>
  where
    F: Fn(AssetKind) -> Balance,
  {
    if total_weight == 0 {
      return None;
    }
    let principals: Vec<Balance> = reserves.iter().map(|r| principal_of(r.asset)).collect();
    let total_principal = principals
      .iter()
      .fold(0u128, |acc, p| acc.saturating_add(*p));
    let mut entries = Vec::with_capacity(reserves.len());
    for (reserve, principal) in reserves.iter().zip(principals) {
      let current_percent = current_percentage(principal, total_principal);
      let target_percent = target_percentage(reserve.target_weight, total_weight)?;
      entries.push(ReserveAllocation {
        asset: reserve.asset,
        target_weight: reserve.target_weight,
        principal,
        current_percent,
        target_percent,
        under_allocated: is_under_allocated(current_percent, target_percent, buffer_percent),
      });
    }
    Some(Self {
      reserves: entries,
      total_principal,
      total_weight,
      buffer_percent,
    })
  }

  pub fn get(&self, asset: AssetKind) -> Option<&ReserveAllocation> {
    self.reserves.iter().find(|r| r.asset == asset)
  }

  /// Under-allocated reserves, preserving registry order.
  pub fn under_allocated(&self) -> impl Iterator<Item = &ReserveAllocation> {
    self.reserves.iter().filter(|r| r.under_allocated)
  }

  pub fn needs_balancing(&self) -> bool {
    self.reserves.iter().any(|r| r.under_allocated)
  }
}
