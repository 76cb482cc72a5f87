use crate::*;
use alloc::vec::Vec;
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::sp_runtime::traits::Zero;
use primitives::AssetKind;

const PRINCIPAL: u128 = 1_000_000_000_000;

/// Register `count` fresh reserves with equal weight and return them in order
fn setup_reserves<T: Config>(count: u32) -> Result<Vec<AssetKind>, BenchmarkError> {
  let mut assets = Vec::with_capacity(count as usize);
  for i in 0..count {
    let asset = T::BenchmarkHelper::reserve_asset(i);
    T::BenchmarkHelper::prepare_reserve(asset).map_err(|_| BenchmarkError::Weightless)?;
    Pallet::<T>::do_add_reserve(asset, 100).map_err(|_| BenchmarkError::Weightless)?;
    assets.push(asset);
  }
  Ok(assets)
}

/// Give the treasury principal in `asset` by depositing freshly minted underlying
fn seed_principal<T: Config>(asset: AssetKind, amount: u128) -> Result<(), BenchmarkError> {
  let treasury = Pallet::<T>::account_id();
  T::BenchmarkHelper::ensure_funded(&treasury, asset, amount)
    .map_err(|_| BenchmarkError::Weightless)?;
  T::LendingGateway::deposit(&treasury, asset, amount).map_err(|_| BenchmarkError::Weightless)?;
  Ok(())
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn add_reserve() -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let existing = T::MaxReserves::get().saturating_sub(1);
    setup_reserves::<T>(existing)?;
    let asset = T::BenchmarkHelper::reserve_asset(existing);
    T::BenchmarkHelper::prepare_reserve(asset).map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, asset, 100);

    assert_eq!(Pallet::<T>::reserve_weight(asset), Some(100));
    Ok(())
  }

  #[benchmark]
  fn remove_reserve() -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let assets = setup_reserves::<T>(T::MaxReserves::get())?;
    let first = assets[0];

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, first);

    assert_eq!(Pallet::<T>::reserve_weight(first), None);
    Ok(())
  }

  #[benchmark]
  fn set_target_weight() -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let assets = setup_reserves::<T>(T::MaxReserves::get())?;
    let last = assets[assets.len() - 1];

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, last, 250);

    assert_eq!(Pallet::<T>::reserve_weight(last), Some(250));
    Ok(())
  }

  #[benchmark]
  fn set_balance_buffer_percent() -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, 10);

    assert_eq!(BalanceBufferPercent::<T>::get(), 10);
    Ok(())
  }

  #[benchmark]
  fn deposit_direct() -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let assets = setup_reserves::<T>(1)?;
    let treasury = Pallet::<T>::account_id();
    T::BenchmarkHelper::ensure_funded(&treasury, assets[0], PRINCIPAL)
      .map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, assets[0], PRINCIPAL);

    assert_eq!(
      T::LendingGateway::principal_balance(&treasury, assets[0]),
      PRINCIPAL
    );
    Ok(())
  }

  #[benchmark]
  fn withdraw_all() -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let assets = setup_reserves::<T>(1)?;
    seed_principal::<T>(assets[0], PRINCIPAL)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, assets[0]);

    let treasury = Pallet::<T>::account_id();
    assert!(T::LendingGateway::principal_balance(&treasury, assets[0]).is_zero());
    Ok(())
  }

  #[benchmark]
  fn liquidate_all(r: Linear<1, { T::MaxReserves::get() }>) -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let assets = setup_reserves::<T>(r)?;
    for asset in &assets {
      seed_principal::<T>(*asset, PRINCIPAL)?;
    }

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin);

    let treasury = Pallet::<T>::account_id();
    for asset in assets {
      assert!(T::LendingGateway::principal_balance(&treasury, asset).is_zero());
    }
    Ok(())
  }

  #[benchmark]
  fn run_balancing_pass(r: Linear<1, { T::MaxReserves::get() }>) -> Result<(), BenchmarkError> {
    let origin =
      T::BalancerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    // Every reserve starts empty, so all `r` are under-allocated
    setup_reserves::<T>(r)?;
    let treasury = Pallet::<T>::account_id();
    let base = PRINCIPAL.saturating_mul(r as u128);
    T::BenchmarkHelper::ensure_funded(&treasury, T::BaseAsset::get(), base)
      .map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin);

    assert_eq!(LastCorrections::<T>::get().len(), r as usize);
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
