// Copyright (c) 2024-2026 The Plume Foundation

//! Plume content-publishing operation protocol: the closed family of
//! ledger operations plus their structural validation, fee computation,
//! and required-signing-authority resolution.
//!
//! Every entry point in this crate is a pure function of an operation
//! value and, for fees, a schedule. Consensus requires every validating
//! node to compute byte-identical results, so there is no I/O, no
//! floating point, and overflowing fee arithmetic saturates instead of
//! wrapping. Signature verification, ledger state, and transport are
//! the caller's business.

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub mod authority;
pub mod fee_schedule;
pub mod operations;
pub mod validation;

pub use authority::{required_active_uid_authorities, required_secondary_uid_authorities};
pub use fee_schedule::{
    apply_fee_floor, Error as FeeScheduleError, FeeSchedule, FlatFeeParameters, VoteFeeParameters,
};
pub use operations::{
    BuyoutOperation, LicenseCreateOperation, Operation, OperationKind, PlatformCreateOperation,
    PlatformUpdateOperation, PlatformVoteUpdateOperation, PostExt, PostOperation, PostType,
    PostUpdateExt, PostUpdateOperation, ReceiptorParameter, RewardOperation, RewardProxyOperation,
    ScoreCreateOperation,
};
pub use validation::{validate, ValidationError, ValidationPolicy, ValidationResult};

// Re-export the leaf types crate so downstream callers need only one
// dependency.
pub use plm_transaction_types::{constants, AccountUid, Amount, AssetId, LicenseLid, PostPid};
