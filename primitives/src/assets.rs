use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Asset handle shared by the treasury, its reserves and the venues it talks to.
///
/// - `Native`: the system's native token (managed by pallet-balances).
/// - `Local(u32)`: assets managed by pallet-assets, classified by the id bitmask below.
/// - `Foreign(u32)`: pallet-assets entries that mirror an asset living on another chain.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum AssetKind {
  #[default]
  Native,
  Local(u32),
  Foreign(u32),
}

impl From<u32> for AssetKind {
  fn from(asset_id: u32) -> Self {
    AssetKind::Local(asset_id)
  }
}

// 32-bit ID Structure:
// [ 4 bits: Type ] [ 28 bits: Index ]
//
// 0x1... -> Standard Tokens
// 0x3... -> Yield receipts issued by a lending venue against a deposited underlying
// 0xF... -> Foreign/XCM Assets

pub const MASK_TYPE: u32 = 0xF000_0000;
pub const MASK_INDEX: u32 = 0x0FFF_FFFF;

pub const TYPE_STD: u32 = 0x1000_0000;
pub const TYPE_RECEIPT: u32 = 0x3000_0000;
pub const TYPE_FOREIGN: u32 = 0xF000_0000;

/// Helper trait to inspect AssetKind properties
pub trait AssetInspector {
  fn is_native(&self) -> bool;
  fn local_id(&self) -> Option<u32>;
  fn is_receipt(&self) -> bool;
  /// Receipt asset a lending venue issues for deposits of `self`.
  ///
  /// `None` for the native token and for assets that already are receipts.
  fn receipt(&self) -> Option<AssetKind>;
}

impl AssetInspector for AssetKind {
  fn is_native(&self) -> bool {
    matches!(self, AssetKind::Native)
  }

  fn local_id(&self) -> Option<u32> {
    match self {
      AssetKind::Local(id) | AssetKind::Foreign(id) => Some(*id),
      AssetKind::Native => None,
    }
  }

  fn is_receipt(&self) -> bool {
    match self {
      AssetKind::Local(id) => (id & MASK_TYPE) == TYPE_RECEIPT,
      _ => false,
    }
  }

  fn receipt(&self) -> Option<AssetKind> {
    if self.is_receipt() {
      return None;
    }
    let id = self.local_id()?;
    Some(AssetKind::Local(make_id(TYPE_RECEIPT, id)))
  }
}

/// Helper to construct compile-time IDs
pub const fn make_id(type_mask: u32, index: u32) -> u32 {
  type_mask | (index & MASK_INDEX)
}
