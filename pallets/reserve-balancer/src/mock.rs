extern crate alloc;

use crate as pallet_reserve_balancer;
use crate::{LendingGateway, SwapGateway};
use alloc::vec::Vec;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, ord_parameter_types, parameter_types,
  traits::{
    ConstU8, ConstU32, ConstU128,
    fungible::Mutate as NativeMutate,
    fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
    tokens::{Fortitude, Precision, Preservation},
  },
};
use polkadot_sdk::frame_system::{self, EnsureSigned, EnsureSignedBy};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  AssetInspector, AssetKind, TYPE_RECEIPT, make_id,
  params::{DEFAULT_BALANCE_BUFFER_PERCENT, MAX_RESERVES},
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

pub const OWNER: u64 = 1;
pub const KEEPER: u64 = 2;
pub const STRANGER: u64 = 3;

pub const A: AssetKind = AssetKind::Local(1);
pub const B: AssetKind = AssetKind::Local(2);
pub const C: AssetKind = AssetKind::Local(3);
pub const D: AssetKind = AssetKind::Local(4);
/// Never accepted by the mock lending venue
pub const X: AssetKind = AssetKind::Local(9);

/// Receipt the mock lending venue issues for native deposits
pub const NATIVE_RECEIPT: u32 = make_id(TYPE_RECEIPT, 0);

pub type ReentryHook = fn() -> DispatchResult;

// State containers for stateful mocks
thread_local! {
    // Assets the lending venue accepts
    pub static SUPPORTED: RefCell<BTreeSet<AssetKind>> = const { RefCell::new(BTreeSet::new()) };

    // Swap rate per output asset: amount_out = amount_in * num / den (1:1 when unset)
    pub static PRICES: RefCell<BTreeMap<AssetKind, (u128, u128)>> = const { RefCell::new(BTreeMap::new()) };

    // Injected venue failures, keyed by the asset involved
    pub static FAILING_SWAPS: RefCell<BTreeSet<AssetKind>> = const { RefCell::new(BTreeSet::new()) };
    pub static FAILING_DEPOSITS: RefCell<BTreeSet<AssetKind>> = const { RefCell::new(BTreeSet::new()) };
    pub static FAILING_WITHDRAWALS: RefCell<BTreeSet<AssetKind>> = const { RefCell::new(BTreeSet::new()) };

    // Venue call counters
    pub static SWAP_CALLS: RefCell<u32> = const { RefCell::new(0) };
    pub static DEPOSIT_CALLS: RefCell<u32> = const { RefCell::new(0) };
    pub static WITHDRAW_CALLS: RefCell<u32> = const { RefCell::new(0) };

    // Call made into the pallet from inside the swap venue, and what it returned
    pub static REENTRY: RefCell<Option<ReentryHook>> = const { RefCell::new(None) };
    pub static REENTRY_RESULTS: RefCell<Vec<DispatchResult>> = const { RefCell::new(Vec::new()) };
}

// Helper methods to setup state
pub fn set_supported(asset: AssetKind, supported: bool) {
  SUPPORTED.with(|s| {
    let mut s = s.borrow_mut();
    if supported {
      s.insert(asset);
    } else {
      s.remove(&asset);
    }
  });
}

pub fn set_price(asset_out: AssetKind, num: u128, den: u128) {
  PRICES.with(|p| p.borrow_mut().insert(asset_out, (num, den)));
}

pub fn fail_swaps_into(asset: AssetKind) {
  FAILING_SWAPS.with(|f| f.borrow_mut().insert(asset));
}

pub fn fail_deposits_of(asset: AssetKind) {
  FAILING_DEPOSITS.with(|f| f.borrow_mut().insert(asset));
}

pub fn fail_withdrawals_of(asset: AssetKind) {
  FAILING_WITHDRAWALS.with(|f| f.borrow_mut().insert(asset));
}

pub fn reenter_on_swap(hook: ReentryHook) {
  REENTRY.with(|r| *r.borrow_mut() = Some(hook));
}

pub fn reentry_results() -> Vec<DispatchResult> {
  REENTRY_RESULTS.with(|r| r.borrow().clone())
}

pub fn swap_calls() -> u32 {
  SWAP_CALLS.with(|c| *c.borrow())
}

pub fn deposit_calls() -> u32 {
  DEPOSIT_CALLS.with(|c| *c.borrow())
}

pub fn withdraw_calls() -> u32 {
  WITHDRAW_CALLS.with(|c| *c.borrow())
}

fn bump(counter: &'static std::thread::LocalKey<RefCell<u32>>) {
  counter.with(|c| *c.borrow_mut() += 1);
}

pub fn treasury() -> u64 {
  ReserveBalancer::account_id()
}

/// Credit base asset to the treasury, as collected fees would
pub fn fund_base(amount: u128) {
  fund(&treasury(), AssetKind::Native, amount);
}

/// Give the treasury `amount` of principal in `asset` without touching the underlying
pub fn set_principal(asset: AssetKind, amount: u128) {
  let receipt = receipt_of(asset).expect("asset has a receipt");
  fund(&treasury(), AssetKind::Local(receipt), amount);
}

pub fn principal(asset: AssetKind) -> u128 {
  MockLending::principal_balance(&treasury(), asset)
}

pub fn fund(who: &u64, asset: AssetKind, amount: u128) {
  mint(who, asset, amount).expect("mock mint succeeds");
}

pub fn balance_of(who: &u64, asset: AssetKind) -> u128 {
  match asset {
    AssetKind::Native => Balances::free_balance(who),
    AssetKind::Local(id) | AssetKind::Foreign(id) => Assets::balance(id, who),
  }
}

fn receipt_of(asset: AssetKind) -> Result<u32, DispatchError> {
  match asset {
    AssetKind::Native => Ok(NATIVE_RECEIPT),
    other => other
      .receipt()
      .and_then(|r| r.local_id())
      .ok_or(DispatchError::Other("no receipt for asset")),
  }
}

fn mint(who: &u64, asset: AssetKind, amount: u128) -> DispatchResult {
  if amount == 0 {
    return Ok(());
  }
  match asset {
    AssetKind::Native => {
      <Balances as NativeMutate<u64>>::mint_into(who, amount)?;
    }
    AssetKind::Local(id) | AssetKind::Foreign(id) => {
      <Assets as FungiblesMutate<u64>>::mint_into(id, who, amount)?;
    }
  }
  Ok(())
}

fn burn(who: &u64, asset: AssetKind, amount: u128) -> DispatchResult {
  if amount == 0 {
    return Ok(());
  }
  match asset {
    AssetKind::Native => {
      <Balances as NativeMutate<u64>>::burn_from(
        who,
        amount,
        Preservation::Expendable,
        Precision::Exact,
        Fortitude::Polite,
      )?;
    }
    AssetKind::Local(id) | AssetKind::Foreign(id) => {
      <Assets as FungiblesMutate<u64>>::burn_from(
        id,
        who,
        amount,
        Preservation::Expendable,
        Precision::Exact,
        Fortitude::Polite,
      )?;
    }
  }
  Ok(())
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    ReserveBalancer: pallet_reserve_balancer,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

/// Exchange pricing every output asset from `PRICES`.
///
/// Burns the input from `who` and mints the output, so balances move the way a
/// real pool would move them for the treasury.
pub struct MockSwap;
impl SwapGateway<u64, u128> for MockSwap {
  fn swap_exact_input(
    who: &u64,
    asset_in: AssetKind,
    asset_out: AssetKind,
    amount_in: u128,
  ) -> Result<u128, DispatchError> {
    bump(&SWAP_CALLS);
    if let Some(hook) = REENTRY.with(|r| *r.borrow()) {
      let result = hook();
      REENTRY_RESULTS.with(|r| r.borrow_mut().push(result));
    }
    if FAILING_SWAPS.with(|f| f.borrow().contains(&asset_out)) {
      return Err(DispatchError::Other("swap rejected"));
    }
    let (num, den) = PRICES.with(|p| p.borrow().get(&asset_out).copied().unwrap_or((1, 1)));
    let amount_out = amount_in.saturating_mul(num) / den;
    burn(who, asset_in, amount_in)?;
    mint(who, asset_out, amount_out)?;
    Ok(amount_out)
  }
}

/// Lending venue backed by receipt assets in pallet-assets.
///
/// A deposit burns the underlying and mints the same amount of receipt, so
/// principal is the receipt balance and rolls back with storage.
pub struct MockLending;
impl LendingGateway<u64, u128> for MockLending {
  fn deposit(who: &u64, asset: AssetKind, amount: u128) -> Result<u128, DispatchError> {
    bump(&DEPOSIT_CALLS);
    if FAILING_DEPOSITS.with(|f| f.borrow().contains(&asset)) {
      return Err(DispatchError::Other("deposit rejected"));
    }
    if !Self::is_supported(asset) {
      return Err(DispatchError::Other("unsupported asset"));
    }
    let receipt = receipt_of(asset)?;
    burn(who, asset, amount)?;
    mint(who, AssetKind::Local(receipt), amount)?;
    Ok(Self::principal_balance(who, asset))
  }

  fn withdraw(who: &u64, asset: AssetKind, amount: u128) -> Result<u128, DispatchError> {
    bump(&WITHDRAW_CALLS);
    if FAILING_WITHDRAWALS.with(|f| f.borrow().contains(&asset)) {
      return Err(DispatchError::Other("withdrawal rejected"));
    }
    let receipt = receipt_of(asset)?;
    burn(who, AssetKind::Local(receipt), amount)?;
    mint(who, asset, amount)?;
    Ok(amount)
  }

  fn principal_balance(who: &u64, asset: AssetKind) -> u128 {
    receipt_of(asset)
      .map(|id| <Assets as FungiblesInspect<u64>>::balance(id, who))
      .unwrap_or(0)
  }

  fn is_supported(asset: AssetKind) -> bool {
    SUPPORTED.with(|s| s.borrow().contains(&asset))
  }
}

parameter_types! {
  pub const ReserveBalancerPalletId: PalletId =
    PalletId(*primitives::ecosystem::pallet_ids::RESERVE_BALANCER_PALLET_ID);
  pub const BaseAsset: AssetKind = AssetKind::Native;
}

ord_parameter_types! {
  pub const Owner: u64 = OWNER;
}

impl pallet_reserve_balancer::Config for Test {
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ReserveBalancerBenchmarkHelper;
  type Assets = Assets;
  type Currency = Balances;
  type SwapGateway = MockSwap;
  type LendingGateway = MockLending;
  type AdminOrigin = EnsureSignedBy<Owner, u64>;
  type BalancerOrigin = EnsureSigned<u64>;
  type PalletId = ReserveBalancerPalletId;
  type BaseAsset = BaseAsset;
  type MaxReserves = ConstU32<{ MAX_RESERVES }>;
  type DefaultBalanceBufferPercent = ConstU8<{ DEFAULT_BALANCE_BUFFER_PERCENT }>;
  type WeightInfo = ();
}

#[cfg(feature = "runtime-benchmarks")]
pub struct ReserveBalancerBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64, u128> for ReserveBalancerBenchmarkHelper {
  fn reserve_asset(index: u32) -> AssetKind {
    AssetKind::Local(make_id(primitives::TYPE_STD, 100 + index))
  }

  fn prepare_reserve(asset: AssetKind) -> DispatchResult {
    let receipt = receipt_of(asset)?;
    if let AssetKind::Local(id) = asset {
      ensure_asset(id)?;
    }
    ensure_asset(receipt)?;
    set_supported(asset, true);
    Ok(())
  }

  fn ensure_funded(who: &u64, asset: AssetKind, amount: u128) -> DispatchResult {
    mint(who, asset, amount)
  }
}

/// Create `id` unless an earlier reserve already did
#[cfg(feature = "runtime-benchmarks")]
fn ensure_asset(id: u32) -> DispatchResult {
  if <Assets as FungiblesInspect<u64>>::asset_exists(id) {
    return Ok(());
  }
  Assets::force_create(frame_system::RawOrigin::Root.into(), id, OWNER, true, 1)
}

/// Genesis builder for the mock runtime.
///
/// Underlying assets A-D and their receipts always exist; A-D and native are
/// accepted by the lending venue.
#[derive(Default)]
pub struct ExtBuilder {
  reserves: Vec<(AssetKind, u32)>,
  balance_buffer_percent: Option<u8>,
}

impl ExtBuilder {
  pub fn with_reserves(mut self, reserves: &[(AssetKind, u32)]) -> Self {
    self.reserves = reserves.to_vec();
    self
  }

  /// The three-reserve layout used by most scenarios: A 50%, B 25%, C 25%
  pub fn with_default_reserves(self) -> Self {
    self.with_reserves(&[(A, 5000), (B, 2500), (C, 2500)])
  }

  pub fn with_buffer(mut self, percent: u8) -> Self {
    self.balance_buffer_percent = Some(percent);
    self
  }

  pub fn build(self) -> polkadot_sdk::sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default()
      .build_storage()
      .unwrap();

    let mut assets = alloc::vec![(NATIVE_RECEIPT, OWNER, true, 1)];
    for asset in [A, B, C, D] {
      let id = asset.local_id().unwrap();
      let receipt = receipt_of(asset).unwrap();
      assets.push((id, OWNER, true, 1)); // Underlying, owner 1, Sufficient, min_bal 1
      assets.push((receipt, OWNER, true, 1));
    }
    polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
      assets,
      metadata: alloc::vec![],
      accounts: alloc::vec![],
      reserves: alloc::vec![],
      next_asset_id: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_reserve_balancer::GenesisConfig::<Test> {
      reserves: self.reserves,
      balance_buffer_percent: self.balance_buffer_percent,
      _marker: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    // Reset State
    SUPPORTED.with(|s| *s.borrow_mut() = [AssetKind::Native, A, B, C, D].into_iter().collect());
    PRICES.with(|p| p.borrow_mut().clear());
    FAILING_SWAPS.with(|f| f.borrow_mut().clear());
    FAILING_DEPOSITS.with(|f| f.borrow_mut().clear());
    FAILING_WITHDRAWALS.with(|f| f.borrow_mut().clear());
    SWAP_CALLS.with(|c| *c.borrow_mut() = 0);
    DEPOSIT_CALLS.with(|c| *c.borrow_mut() = 0);
    WITHDRAW_CALLS.with(|c| *c.borrow_mut() = 0);
    REENTRY.with(|r| *r.borrow_mut() = None);
    REENTRY_RESULTS.with(|r| r.borrow_mut().clear());

    let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
    // Events are only recorded from block 1 onwards
    ext.execute_with(|| System::set_block_number(1));
    ext
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  ExtBuilder::default().build()
}
