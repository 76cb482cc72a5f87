//! Reserve Balancer Pallet
//!
//! Keeps the treasury's holdings spread across several yield-bearing reserves at
//! governance-set target weights. A balancing pass spends the base asset that has
//! arrived since the last pass on the reserves trailing their target: each one gets
//! an equal slice, swapped into its underlying and deposited with the lending venue.
//! Over-allocated reserves are never drawn down automatically, so a large imbalance
//! converges over several passes driven by an external keeper.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod adapters;
pub mod allocation;
pub mod types;
pub mod weights;

pub use adapters::{LendingGateway, SwapGateway};
pub use allocation::AllocationSnapshot;
pub use types::*;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::reserve-balancer";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, Balance> {
  /// Distinct asset used as the `index`-th reserve.
  fn reserve_asset(index: u32) -> primitives::AssetKind;
  /// Create `asset` and have the lending venue accept it.
  fn prepare_reserve(asset: primitives::AssetKind) -> frame::deps::sp_runtime::DispatchResult;
  fn ensure_funded(
    who: &AccountId,
    asset: primitives::AssetKind,
    amount: Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use crate::{
    adapters::{LendingGateway, SwapGateway},
    allocation::{self, AllocationSnapshot},
    types::*,
  };
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        fungible::Inspect as NativeInspect,
        fungibles::Inspect as FungiblesInspect,
        tokens::{Fortitude, Preservation},
      },
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AssetKind, Balance, params::PERCENT_BASE};

  /// Configuration trait for the reserve balancer pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// The assets pallet, read when the base asset is a local or foreign token
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>;

    /// The native currency, read when the base asset is native
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>;

    /// Exchange used to turn base asset into a reserve's underlying
    type SwapGateway: SwapGateway<Self::AccountId, Balance>;

    /// Lending venue holding the yield-bearing positions
    type LendingGateway: LendingGateway<Self::AccountId, Balance>;

    /// Origin allowed to manage reserves and move treasury funds
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Origin allowed to trigger a balancing pass (the keeper)
    type BalancerOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// The pallet ID, used to derive the treasury account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Asset spent by corrective swaps
    #[pallet::constant]
    type BaseAsset: Get<AssetKind>;

    /// Maximum number of registered reserves
    #[pallet::constant]
    type MaxReserves: Get<u32>;

    /// Tolerance band used until governance sets one
    #[pallet::constant]
    type DefaultBalanceBufferPercent: Get<u8>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId, Balance>;
  }

  /// The pallet struct
  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Registered reserves in insertion order.
  ///
  /// The order is the iteration and correction order of every pass.
  #[pallet::storage]
  #[pallet::getter(fn reserves)]
  pub type Reserves<T: Config> =
    StorageValue<_, BoundedVec<ReserveConfig, T::MaxReserves>, ValueQuery>;

  /// Sum of all registered target weights
  #[pallet::storage]
  #[pallet::getter(fn total_target_weight)]
  pub type TotalTargetWeight<T: Config> = StorageValue<_, u64, ValueQuery>;

  /// Percentage points a reserve may trail its target before it is corrected
  #[pallet::storage]
  #[pallet::getter(fn balance_buffer_percent)]
  pub type BalanceBufferPercent<T: Config> =
    StorageValue<_, u8, ValueQuery, T::DefaultBalanceBufferPercent>;

  /// Set for the duration of a balancing pass
  #[pallet::storage]
  #[pallet::getter(fn pass_in_progress)]
  pub type PassInProgress<T: Config> = StorageValue<_, bool, ValueQuery>;

  /// Corrections made by the most recent pass that moved funds
  #[pallet::storage]
  #[pallet::getter(fn last_corrections)]
  pub type LastCorrections<T: Config> =
    StorageValue<_, BoundedVec<Correction, T::MaxReserves>, ValueQuery>;

  /// Events for the reserve balancer pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A reserve was registered
    ReserveAdded {
      asset: AssetKind,
      target_weight: TargetWeight,
    },
    /// A reserve was unregistered
    ReserveRemoved {
      asset: AssetKind,
      target_weight: TargetWeight,
    },
    /// A reserve's target weight changed
    TargetWeightUpdated {
      asset: AssetKind,
      old_weight: TargetWeight,
      new_weight: TargetWeight,
    },
    /// Tolerance band changed
    BalanceBufferUpdated { old_percent: u8, new_percent: u8 },
    /// Underlying deposited outside of a balancing pass
    DirectDeposit {
      asset: AssetKind,
      amount: Balance,
      principal: Balance,
    },
    /// A reserve's whole position was withdrawn to its underlying
    ReserveWithdrawn { asset: AssetKind, amount: Balance },
    /// Withdrawing a reserve failed during liquidation
    ReserveWithdrawFailed {
      asset: AssetKind,
      error: DispatchError,
    },
    /// Liquidation visited every reserve
    LiquidationCompleted { withdrawn: u32, failed: u32 },
    /// Base asset was moved into an under-allocated reserve
    ReserveCorrected {
      asset: AssetKind,
      amount_in: Balance,
      amount_out: Balance,
    },
    /// A balancing pass completed with at least one correction
    BalancingPassExecuted { corrections: u32, base_spent: Balance },
  }

  /// Errors for the reserve balancer pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Origin failed the admin or keeper check
    NotAuthorized,
    /// Asset is not a registered reserve
    UnknownReserve,
    /// Lending venue does not accept the asset
    UnsupportedAsset,
    /// Swap venue rejected a correction
    SwapFailed,
    /// Lending venue rejected a deposit or withdrawal
    LendingFailed,
    /// Total target weight is zero
    InvalidConfiguration,
    /// Asset is already a reserve
    ReserveAlreadyRegistered,
    /// Reserve bound reached
    TooManyReserves,
    /// Buffer percent above 100
    InvalidBufferPercent,
    /// A balancing pass is executing
    PassInProgress,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  /// Hooks for the reserve balancer pallet
  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::DefaultBalanceBufferPercent::get() as u32 <= PERCENT_BASE,
        "DefaultBalanceBufferPercent must not exceed 100"
      );
      assert!(T::MaxReserves::get() > 0, "MaxReserves must be non-zero");
    }

    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Register a reserve at the end of the ordered set (governance only)
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::add_reserve())]
    pub fn add_reserve(
      origin: OriginFor<T>,
      asset: AssetKind,
      target_weight: TargetWeight,
    ) -> DispatchResult {
      Self::ensure_admin(origin)?;
      Self::ensure_idle()?;
      ensure!(
        T::LendingGateway::is_supported(asset),
        Error::<T>::UnsupportedAsset
      );
      Self::do_add_reserve(asset, target_weight)?;
      Self::deposit_event(Event::ReserveAdded {
        asset,
        target_weight,
      });
      Ok(())
    }

    /// Unregister a reserve (governance only)
    ///
    /// Its principal stays with the lending venue and is no longer tracked.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::remove_reserve())]
    pub fn remove_reserve(origin: OriginFor<T>, asset: AssetKind) -> DispatchResult {
      Self::ensure_admin(origin)?;
      Self::ensure_idle()?;
      let mut reserves = Reserves::<T>::get();
      let index = reserves
        .iter()
        .position(|r| r.asset == asset)
        .ok_or(Error::<T>::UnknownReserve)?;
      let removed = reserves.remove(index);
      let new_total = TotalTargetWeight::<T>::get()
        .checked_sub(removed.target_weight.into())
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      Reserves::<T>::put(reserves);
      TotalTargetWeight::<T>::put(new_total);
      Self::deposit_event(Event::ReserveRemoved {
        asset,
        target_weight: removed.target_weight,
      });
      Ok(())
    }

    /// Replace a reserve's target weight (governance only)
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_target_weight())]
    pub fn set_target_weight(
      origin: OriginFor<T>,
      asset: AssetKind,
      new_weight: TargetWeight,
    ) -> DispatchResult {
      Self::ensure_admin(origin)?;
      Self::ensure_idle()?;
      let mut reserves = Reserves::<T>::get();
      let reserve = reserves
        .iter_mut()
        .find(|r| r.asset == asset)
        .ok_or(Error::<T>::UnknownReserve)?;
      let old_weight = reserve.target_weight;
      let new_total = TotalTargetWeight::<T>::get()
        .checked_sub(old_weight.into())
        .and_then(|total| total.checked_add(new_weight.into()))
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      reserve.target_weight = new_weight;
      Reserves::<T>::put(reserves);
      TotalTargetWeight::<T>::put(new_total);
      Self::deposit_event(Event::TargetWeightUpdated {
        asset,
        old_weight,
        new_weight,
      });
      Ok(())
    }

    /// Update the tolerance band (governance only)
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_balance_buffer_percent())]
    pub fn set_balance_buffer_percent(origin: OriginFor<T>, new_percent: u8) -> DispatchResult {
      Self::ensure_admin(origin)?;
      Self::ensure_idle()?;
      ensure!(
        new_percent as u32 <= PERCENT_BASE,
        Error::<T>::InvalidBufferPercent
      );
      let old_percent = BalanceBufferPercent::<T>::get();
      BalanceBufferPercent::<T>::put(new_percent);
      Self::deposit_event(Event::BalanceBufferUpdated {
        old_percent,
        new_percent,
      });
      Ok(())
    }

    /// Deposit treasury-held underlying straight into a reserve (governance only)
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::deposit_direct())]
    pub fn deposit_direct(origin: OriginFor<T>, asset: AssetKind, amount: Balance) -> DispatchResult {
      Self::ensure_admin(origin)?;
      Self::ensure_idle()?;
      Self::ensure_registered(asset)?;
      let principal = Self::lend(asset, amount)?;
      Self::deposit_event(Event::DirectDeposit {
        asset,
        amount,
        principal,
      });
      Ok(())
    }

    /// Withdraw a reserve's entire position back to its underlying (governance only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::withdraw_all())]
    pub fn withdraw_all(origin: OriginFor<T>, asset: AssetKind) -> DispatchResult {
      Self::ensure_admin(origin)?;
      Self::ensure_idle()?;
      Self::do_withdraw_all(asset).map(|_| ())
    }

    /// Withdraw every reserve, continuing past individual failures (governance only)
    ///
    /// Charged for `MaxReserves` up front and refunded down to the registry size.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::liquidate_all(T::MaxReserves::get()))]
    pub fn liquidate_all(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
      Self::ensure_admin(origin)?;
      Self::ensure_idle()?;
      let report = Self::do_liquidate_all();
      let reserves = report.withdrawn.len().saturating_add(report.failed.len()) as u32;
      Ok(Some(T::WeightInfo::liquidate_all(reserves)).into())
    }

    /// Run one balancing pass (keeper)
    ///
    /// Charged for `MaxReserves` up front and refunded down to the registry size.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::run_balancing_pass(T::MaxReserves::get()))]
    pub fn run_balancing_pass(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
      T::BalancerOrigin::ensure_origin(origin).map_err(|_| Error::<T>::NotAuthorized)?;
      let reserves = Reserves::<T>::decode_len().unwrap_or_default() as u32;
      Self::do_balancing_pass()?;
      Ok(Some(T::WeightInfo::run_balancing_pass(reserves)).into())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    pub fn list_reserves() -> Vec<ReserveConfig> {
      Reserves::<T>::get().into_inner()
    }

    pub fn reserve_weight(asset: AssetKind) -> Option<TargetWeight> {
      Reserves::<T>::get()
        .iter()
        .find(|r| r.asset == asset)
        .map(|r| r.target_weight)
    }

    /// Spendable base asset held by the treasury right now
    pub fn base_asset_available() -> Balance {
      let treasury = Self::account_id();
      match T::BaseAsset::get() {
        AssetKind::Native => {
          T::Currency::reducible_balance(&treasury, Preservation::Expendable, Fortitude::Polite)
        }
        AssetKind::Local(id) | AssetKind::Foreign(id) => T::Assets::reducible_balance(
          id,
          &treasury,
          Preservation::Expendable,
          Fortitude::Polite,
        ),
      }
    }

    /// Share of all tracked principal held by `asset`, floored, in percent
    pub fn current_percentage(asset: AssetKind) -> Result<u32, DispatchError> {
      Self::ensure_registered(asset)?;
      let treasury = Self::account_id();
      let mut own = Zero::zero();
      let mut total: Balance = Zero::zero();
      for reserve in Reserves::<T>::get() {
        let principal = T::LendingGateway::principal_balance(&treasury, reserve.asset);
        if reserve.asset == asset {
          own = principal;
        }
        total = total.saturating_add(principal);
      }
      Ok(allocation::current_percentage(own, total))
    }

    /// Desired share of `asset`, floored, in percent
    pub fn target_percentage(asset: AssetKind) -> Result<u32, DispatchError> {
      let weight = Self::reserve_weight(asset).ok_or(Error::<T>::UnknownReserve)?;
      allocation::target_percentage(weight, TotalTargetWeight::<T>::get())
        .ok_or_else(|| Error::<T>::InvalidConfiguration.into())
    }

    /// Registry state joined with live principal from the lending venue
    pub fn allocation_snapshot() -> Result<AllocationSnapshot, DispatchError> {
      let treasury = Self::account_id();
      let reserves = Reserves::<T>::get();
      AllocationSnapshot::build(
        &reserves,
        TotalTargetWeight::<T>::get(),
        BalanceBufferPercent::<T>::get(),
        |asset| T::LendingGateway::principal_balance(&treasury, asset),
      )
      .ok_or_else(|| Error::<T>::InvalidConfiguration.into())
    }

    /// Whether any reserve trails its target by more than the buffer.
    ///
    /// Keepers poll this before submitting `run_balancing_pass`.
    pub fn needs_balancing() -> bool {
      Self::allocation_snapshot()
        .map(|snapshot| snapshot.needs_balancing())
        .unwrap_or(false)
    }

    /// Execute one pass atomically and return its corrections in registry order.
    ///
    /// Any venue failure discards every write and event of the pass. An empty
    /// result means nothing was under-allocated or there was nothing to spend.
    pub fn do_balancing_pass() -> Result<Vec<Correction>, DispatchError> {
      Self::ensure_idle()?;
      with_storage_layer(|| {
        PassInProgress::<T>::put(true);
        let corrections = Self::execute_pass()?;
        PassInProgress::<T>::kill();
        Ok(corrections)
      })
    }

    fn execute_pass() -> Result<Vec<Correction>, DispatchError> {
      let snapshot = Self::allocation_snapshot()?;
      let targets: Vec<AssetKind> = snapshot.under_allocated().map(|r| r.asset).collect();
      if targets.is_empty() {
        log::debug!(target: LOG_TARGET, "all reserves within buffer, pass skipped");
        return Ok(Vec::new());
      }
      let available = Self::base_asset_available();
      // Remainder of the split stays on the treasury for the next pass
      let per_reserve = available / targets.len() as Balance;
      if per_reserve.is_zero() {
        log::debug!(
          target: LOG_TARGET,
          "{} base available for {} reserves, pass skipped",
          available,
          targets.len()
        );
        return Ok(Vec::new());
      }
      let mut corrections = Vec::with_capacity(targets.len());
      for asset in targets {
        let amount_out = Self::acquire(asset, per_reserve)?;
        Self::lend(asset, amount_out)?;
        log::info!(
          target: LOG_TARGET,
          "corrected {:?}: {} base in, {} underlying deposited",
          asset,
          per_reserve,
          amount_out
        );
        Self::deposit_event(Event::ReserveCorrected {
          asset,
          amount_in: per_reserve,
          amount_out,
        });
        corrections.push(Correction {
          asset,
          amount_in: per_reserve,
          amount_out,
        });
      }
      let base_spent = per_reserve.saturating_mul(corrections.len() as Balance);
      LastCorrections::<T>::put(BoundedVec::truncate_from(corrections.clone()));
      Self::deposit_event(Event::BalancingPassExecuted {
        corrections: corrections.len() as u32,
        base_spent,
      });
      log::info!(
        target: LOG_TARGET,
        "balancing pass spent {} over {} reserves",
        base_spent,
        corrections.len()
      );
      Ok(corrections)
    }

    /// Turn `amount_in` of base asset into the reserve's underlying
    fn acquire(asset: AssetKind, amount_in: Balance) -> Result<Balance, DispatchError> {
      let base = T::BaseAsset::get();
      if asset == base {
        return Ok(amount_in);
      }
      T::SwapGateway::swap_exact_input(&Self::account_id(), base, asset, amount_in).map_err(
        |error| {
          log::warn!(
            target: LOG_TARGET,
            "swap of {} {:?} into {:?} failed: {:?}",
            amount_in,
            base,
            asset,
            error
          );
          DispatchError::from(Error::<T>::SwapFailed)
        },
      )
    }

    /// Deposit underlying with the lending venue, returning the new principal
    fn lend(asset: AssetKind, amount: Balance) -> Result<Balance, DispatchError> {
      T::LendingGateway::deposit(&Self::account_id(), asset, amount).map_err(|error| {
        log::warn!(
          target: LOG_TARGET,
          "deposit of {} {:?} failed: {:?}",
          amount,
          asset,
          error
        );
        DispatchError::from(Error::<T>::LendingFailed)
      })
    }

    /// Withdraw the whole position of a registered reserve.
    ///
    /// Zero principal succeeds without calling the venue.
    pub fn do_withdraw_all(asset: AssetKind) -> Result<Balance, DispatchError> {
      Self::ensure_registered(asset)?;
      let treasury = Self::account_id();
      let principal = T::LendingGateway::principal_balance(&treasury, asset);
      if principal.is_zero() {
        return Ok(Zero::zero());
      }
      let amount = T::LendingGateway::withdraw(&treasury, asset, principal).map_err(|error| {
        log::warn!(
          target: LOG_TARGET,
          "withdrawal of {} {:?} failed: {:?}",
          principal,
          asset,
          error
        );
        DispatchError::from(Error::<T>::LendingFailed)
      })?;
      Self::deposit_event(Event::ReserveWithdrawn { asset, amount });
      Ok(amount)
    }

    /// Withdraw every reserve in registry order.
    ///
    /// Each withdrawal runs in its own storage layer, so a failed one is rolled
    /// back alone and the rest still proceed.
    pub fn do_liquidate_all() -> LiquidationReport {
      let mut report = LiquidationReport::default();
      for reserve in Reserves::<T>::get() {
        let asset = reserve.asset;
        match with_storage_layer(|| Self::do_withdraw_all(asset)) {
          Ok(amount) => report.withdrawn.push((asset, amount)),
          Err(error) => {
            log::warn!(
              target: LOG_TARGET,
              "liquidation of {:?} failed: {:?}",
              asset,
              error
            );
            Self::deposit_event(Event::ReserveWithdrawFailed { asset, error });
            report.failed.push(asset);
          }
        }
      }
      Self::deposit_event(Event::LiquidationCompleted {
        withdrawn: report.withdrawn.len() as u32,
        failed: report.failed.len() as u32,
      });
      report
    }

    pub(crate) fn do_add_reserve(asset: AssetKind, target_weight: TargetWeight) -> DispatchResult {
      let new_total = TotalTargetWeight::<T>::get()
        .checked_add(target_weight.into())
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      Reserves::<T>::try_mutate(|reserves| -> DispatchResult {
        ensure!(
          !reserves.iter().any(|r| r.asset == asset),
          Error::<T>::ReserveAlreadyRegistered
        );
        reserves
          .try_push(ReserveConfig {
            asset,
            target_weight,
          })
          .map_err(|_| Error::<T>::TooManyReserves)?;
        Ok(())
      })?;
      TotalTargetWeight::<T>::put(new_total);
      Ok(())
    }

    fn ensure_admin(origin: OriginFor<T>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin).map_err(|_| Error::<T>::NotAuthorized)?;
      Ok(())
    }

    fn ensure_idle() -> DispatchResult {
      ensure!(!PassInProgress::<T>::get(), Error::<T>::PassInProgress);
      Ok(())
    }

    fn ensure_registered(asset: AssetKind) -> DispatchResult {
      ensure!(
        Reserves::<T>::get().iter().any(|r| r.asset == asset),
        Error::<T>::UnknownReserve
      );
      Ok(())
    }

    /// Registry invariants: weight sum, unique ids, buffer bound, pass flag cleared
    pub fn do_try_state() -> Result<(), DispatchError> {
      let reserves = Reserves::<T>::get();
      let sum = reserves
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.target_weight.into()));
      ensure!(
        sum == TotalTargetWeight::<T>::get(),
        "total target weight diverged from registered reserves"
      );
      for (i, reserve) in reserves.iter().enumerate() {
        ensure!(
          !reserves.iter().skip(i + 1).any(|r| r.asset == reserve.asset),
          "reserve registered twice"
        );
      }
      ensure!(
        BalanceBufferPercent::<T>::get() as u32 <= PERCENT_BASE,
        "balance buffer above 100 percent"
      );
      ensure!(!PassInProgress::<T>::get(), "balancing pass flag left set");
      Ok(())
    }
  }

  /// Genesis configuration: initial reserves in order and an optional buffer
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub reserves: Vec<(AssetKind, TargetWeight)>,
    pub balance_buffer_percent: Option<u8>,
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Treasury account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
      if let Some(percent) = self.balance_buffer_percent {
        assert!(
          percent as u32 <= PERCENT_BASE,
          "genesis balance buffer exceeds 100 percent"
        );
        BalanceBufferPercent::<T>::put(percent);
      }
      for (asset, target_weight) in &self.reserves {
        Pallet::<T>::do_add_reserve(*asset, *target_weight)
          .expect("genesis reserves must be unique and within MaxReserves");
      }
    }
  }
}
