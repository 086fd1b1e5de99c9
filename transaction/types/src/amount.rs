// Copyright (c) 2024-2026 The Plume Foundation

//! A quantity of some asset.

use crate::AssetId;
use core::fmt;

#[cfg(feature = "prost")]
use prost::Message;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value, in base units, together with the asset it is denominated
/// in. Negative amounts are unrepresentable by construction.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "prost", derive(Message))]
#[cfg_attr(not(feature = "prost"), derive(Debug, Default))]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Amount {
    /// The quantity, in the asset's smallest representable unit.
    #[cfg_attr(feature = "prost", prost(uint64, required, tag = "1"))]
    pub value: u64,

    /// The asset this amount is denominated in.
    #[cfg_attr(feature = "prost", prost(message, required, tag = "2"))]
    pub asset_id: AssetId,
}

impl Amount {
    /// Construct an amount of an arbitrary asset.
    pub fn new(value: u64, asset_id: AssetId) -> Self {
        Self { value, asset_id }
    }

    /// Construct an amount of the core asset.
    pub fn core(value: u64) -> Self {
        Self::new(value, AssetId::CORE)
    }

    /// Whether this amount is denominated in the core asset.
    pub fn is_core(&self) -> bool {
        self.asset_id == AssetId::CORE
    }

    /// Add two amounts of the same asset, saturating at `u64::MAX`.
    /// Returns `None` if the assets differ.
    pub fn saturating_add(&self, other: &Amount) -> Option<Amount> {
        if self.asset_id != other.asset_id {
            return None;
        }
        Some(Amount::new(
            self.value.saturating_add(other.value),
            self.asset_id,
        ))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (asset {})", self.value, self.asset_id)
    }
}
