#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn add_reserve() -> Weight;
	fn remove_reserve() -> Weight;
	fn set_target_weight() -> Weight;
	fn set_balance_buffer_percent() -> Weight;
	fn deposit_direct() -> Weight;
	fn withdraw_all() -> Weight;
	fn liquidate_all(r: u32, ) -> Weight;
	fn run_balancing_pass(r: u32, ) -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn add_reserve() -> Weight {
		Weight::from_parts(25_000_000, 2500)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn remove_reserve() -> Weight {
		Weight::from_parts(22_000_000, 2500)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_target_weight() -> Weight {
		Weight::from_parts(22_000_000, 2500)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_balance_buffer_percent() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn deposit_direct() -> Weight {
		Weight::from_parts(60_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	fn withdraw_all() -> Weight {
		Weight::from_parts(60_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	fn liquidate_all(r: u32, ) -> Weight {
		Weight::from_parts(15_000_000, 2500)
			.saturating_add(Weight::from_parts(60_000_000, 6000).saturating_mul(r.into()))
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(r.into())))
			.saturating_add(T::DbWeight::get().writes((4_u64).saturating_mul(r.into())))
	}
	fn run_balancing_pass(r: u32, ) -> Weight {
		Weight::from_parts(30_000_000, 3500)
			.saturating_add(Weight::from_parts(110_000_000, 9000).saturating_mul(r.into()))
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().reads((6_u64).saturating_mul(r.into())))
			.saturating_add(T::DbWeight::get().writes(3))
			.saturating_add(T::DbWeight::get().writes((6_u64).saturating_mul(r.into())))
	}
}

impl WeightInfo for () {
	fn add_reserve() -> Weight {
		Weight::from_parts(25_000_000, 2500)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn remove_reserve() -> Weight {
		Weight::from_parts(22_000_000, 2500)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn set_target_weight() -> Weight {
		Weight::from_parts(22_000_000, 2500)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn set_balance_buffer_percent() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn deposit_direct() -> Weight {
		Weight::from_parts(60_000_000, 6000)
	}
	fn withdraw_all() -> Weight {
		Weight::from_parts(60_000_000, 6000)
	}
	fn liquidate_all(r: u32, ) -> Weight {
		Weight::from_parts(15_000_000, 2500)
			.saturating_add(Weight::from_parts(60_000_000, 6000).saturating_mul(r.into()))
	}
	fn run_balancing_pass(r: u32, ) -> Weight {
		Weight::from_parts(30_000_000, 3500)
			.saturating_add(Weight::from_parts(110_000_000, 9000).saturating_mul(r.into()))
	}
}
