// Copyright (c) 2024-2026 The Plume Foundation

//! Opaque chain-allocated identifiers.
//!
//! Accounts, posts, licenses and assets are keyed by integers allocated
//! by the ledger. This crate treats them as opaque, totally ordered
//! values with no interpretation beyond equality and set membership.

use core::fmt;

#[cfg(feature = "prost")]
use prost::Message;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A chain-allocated account identifier.
///
/// Platforms are accounts too: a platform is identified by the uid of
/// the account that registered it.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "prost", derive(Message))]
#[cfg_attr(not(feature = "prost"), derive(Debug, Default))]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct AccountUid(
    #[cfg_attr(feature = "prost", prost(fixed64, required, tag = "1"))] pub u64,
);

/// A post identifier, unique within the scope of its platform.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "prost", derive(Message))]
#[cfg_attr(not(feature = "prost"), derive(Debug, Default))]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PostPid(
    #[cfg_attr(feature = "prost", prost(fixed64, required, tag = "1"))] pub u64,
);

/// A content-license identifier, unique within the scope of its
/// platform. Uniqueness is enforced by the ledger, not here.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "prost", derive(Message))]
#[cfg_attr(not(feature = "prost"), derive(Debug, Default))]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct LicenseLid(
    #[cfg_attr(feature = "prost", prost(fixed64, required, tag = "1"))] pub u64,
);

/// An asset identifier. Asset 0 is the core PLM asset.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "prost", derive(Message))]
#[cfg_attr(not(feature = "prost"), derive(Debug, Default))]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct AssetId(
    #[cfg_attr(feature = "prost", prost(fixed64, required, tag = "1"))] pub u64,
);

impl AssetId {
    /// The core PLM asset. Operation fees are denominated in it.
    pub const CORE: AssetId = AssetId(0);
}

macro_rules! impl_uid_conversions {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

impl_uid_conversions!(AccountUid);
impl_uid_conversions!(PostPid);
impl_uid_conversions!(LicenseLid);
impl_uid_conversions!(AssetId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uids_order_by_raw_value() {
        assert!(AccountUid(1) < AccountUid(2));
        assert_eq!(AccountUid::from(7), AccountUid(7));
        assert_eq!(u64::from(PostPid(9)), 9);
    }

    #[test]
    fn core_asset_is_zero() {
        assert_eq!(AssetId::CORE, AssetId(0));
    }
}
