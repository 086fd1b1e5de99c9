// Copyright (c) 2024-2026 The Plume Foundation

//! Leaf value types shared across the Plume operation protocol:
//! opaque chain-allocated identifiers, the asset `Amount` pair, and
//! chain-wide constants.
//!
//! These types carry no behavior beyond equality, ordering, and bounded
//! arithmetic. Every consensus-relevant semantic lives in
//! `plm-transaction-core`.

#![no_std]
#![deny(missing_docs)]

mod amount;
mod identifiers;

pub mod constants;

pub use amount::Amount;
pub use identifiers::{AccountUid, AssetId, LicenseLid, PostPid};
