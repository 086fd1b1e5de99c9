// Copyright (c) 2024-2026 The Plume Foundation

//! Per-operation fee parameters and fee computation.
//!
//! The schedule itself is supplied by the ledger-parameters subsystem;
//! this module only defines its shape, checks it is well formed, and
//! turns a schedule plus an operation into a concrete fee. Fee math is
//! consensus-relevant: everything is integer arithmetic with u128
//! intermediates, saturating to `u64::MAX` instead of wrapping.

use crate::operations::{Operation, OperationKind, PlatformVoteUpdateOperation};
use displaydoc::Display;
use plm_transaction_types::{
    constants::{CHAIN_PRECISION, RATIO_SCALE_BPS},
    Amount,
};
use prost::Message;
use serde::{Deserialize, Serialize};

/// The size quantum of the size-proportional fee component: fees are
/// charged per started kilobyte of serialized operation.
pub const FEE_KBYTE: u64 = 1024;

/// Fee parameters for the size-proportional operation kinds.
#[derive(Clone, Copy, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct FlatFeeParameters {
    /// Flat base fee, in core base units.
    #[prost(uint64, tag = "1")]
    pub fee: u64,

    /// Lower clamp on the computed fee, in core base units.
    #[prost(uint64, tag = "2")]
    pub min_real_fee: u64,

    /// Floor percentage against an externally supplied reference real
    /// fee, in basis points.
    #[prost(uint32, tag = "3")]
    pub min_rf_percent: u32,

    /// Price per started kilobyte of serialized operation, in core
    /// base units.
    #[prost(uint64, tag = "4")]
    pub price_per_kbyte: u64,
}

/// Fee parameters for `PlatformVoteUpdate`, which prices the added
/// vote set instead of the serialized size.
#[derive(Clone, Copy, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct VoteFeeParameters {
    /// Flat base fee, in core base units.
    #[prost(uint64, tag = "1")]
    pub basic_fee: u64,

    /// Price per platform in the added vote set, in core base units.
    #[prost(uint64, tag = "2")]
    pub price_per_platform: u64,

    /// Lower clamp on the computed fee, in core base units.
    #[prost(uint64, tag = "3")]
    pub min_real_fee: u64,

    /// Floor percentage against an externally supplied reference real
    /// fee, in basis points.
    #[prost(uint32, tag = "4")]
    pub min_rf_percent: u32,
}

/// The full fee schedule: one parameter record per operation kind.
///
/// The per-kind shape is fixed at the type level, so a schedule can
/// never be missing a kind or carry the wrong record shape; the only
/// dynamic invariant is the basis-point range of each
/// `min_rf_percent`, checked by [`FeeSchedule::validate`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FeeSchedule {
    /// Parameters for `PlatformCreate`.
    pub platform_create: FlatFeeParameters,
    /// Parameters for `PlatformUpdate`.
    pub platform_update: FlatFeeParameters,
    /// Parameters for `PlatformVoteUpdate`.
    pub platform_vote_update: VoteFeeParameters,
    /// Parameters for `Post`.
    pub post: FlatFeeParameters,
    /// Parameters for `PostUpdate`.
    pub post_update: FlatFeeParameters,
    /// Parameters for `ScoreCreate`.
    pub score_create: FlatFeeParameters,
    /// Parameters for `Reward`.
    pub reward: FlatFeeParameters,
    /// Parameters for `RewardProxy`.
    pub reward_proxy: FlatFeeParameters,
    /// Parameters for `Buyout`.
    pub buyout: FlatFeeParameters,
    /// Parameters for `LicenseCreate`.
    pub license_create: FlatFeeParameters,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        let content = FlatFeeParameters {
            fee: CHAIN_PRECISION,
            min_real_fee: 0,
            min_rf_percent: 0,
            price_per_kbyte: 10 * CHAIN_PRECISION,
        };
        Self {
            platform_create: FlatFeeParameters {
                fee: 1000 * CHAIN_PRECISION,
                min_real_fee: 1000 * CHAIN_PRECISION,
                min_rf_percent: RATIO_SCALE_BPS,
                price_per_kbyte: 10 * CHAIN_PRECISION,
            },
            platform_update: FlatFeeParameters {
                fee: 10 * CHAIN_PRECISION,
                min_real_fee: 0,
                min_rf_percent: 0,
                price_per_kbyte: 10 * CHAIN_PRECISION,
            },
            platform_vote_update: VoteFeeParameters {
                basic_fee: CHAIN_PRECISION,
                price_per_platform: CHAIN_PRECISION,
                min_real_fee: 0,
                min_rf_percent: 0,
            },
            post: content,
            post_update: content,
            score_create: content,
            reward: content,
            reward_proxy: content,
            buyout: content,
            license_create: content,
        }
    }
}

impl FeeSchedule {
    /// Check the schedule's dynamic invariants: every `min_rf_percent`
    /// must be on the 10000 bps scale.
    pub fn validate(&self) -> Result<(), Error> {
        for (kind, min_rf_percent) in [
            (OperationKind::PlatformCreate, self.platform_create.min_rf_percent),
            (OperationKind::PlatformUpdate, self.platform_update.min_rf_percent),
            (
                OperationKind::PlatformVoteUpdate,
                self.platform_vote_update.min_rf_percent,
            ),
            (OperationKind::Post, self.post.min_rf_percent),
            (OperationKind::PostUpdate, self.post_update.min_rf_percent),
            (OperationKind::ScoreCreate, self.score_create.min_rf_percent),
            (OperationKind::Reward, self.reward.min_rf_percent),
            (OperationKind::RewardProxy, self.reward_proxy.min_rf_percent),
            (OperationKind::Buyout, self.buyout.min_rf_percent),
            (OperationKind::LicenseCreate, self.license_create.min_rf_percent),
        ] {
            if min_rf_percent > RATIO_SCALE_BPS {
                return Err(Error::MinRfPercentOutOfRange(kind, min_rf_percent));
            }
        }
        Ok(())
    }

    /// Compute the fee for an operation. Never fails; the result is
    /// denominated in the core asset and clamped below by the kind's
    /// `min_real_fee`.
    pub fn calculate_fee(&self, op: &Operation) -> Amount {
        let value = match op {
            Operation::PlatformCreate(_) => flat_fee(&self.platform_create, op.encoded_size()),
            Operation::PlatformUpdate(_) => flat_fee(&self.platform_update, op.encoded_size()),
            Operation::PlatformVoteUpdate(inner) => {
                vote_fee(&self.platform_vote_update, inner)
            }
            Operation::Post(_) => flat_fee(&self.post, op.encoded_size()),
            Operation::PostUpdate(_) => flat_fee(&self.post_update, op.encoded_size()),
            Operation::ScoreCreate(_) => flat_fee(&self.score_create, op.encoded_size()),
            Operation::Reward(_) => flat_fee(&self.reward, op.encoded_size()),
            Operation::RewardProxy(_) => flat_fee(&self.reward_proxy, op.encoded_size()),
            Operation::Buyout(_) => flat_fee(&self.buyout, op.encoded_size()),
            Operation::LicenseCreate(_) => flat_fee(&self.license_create, op.encoded_size()),
        };
        Amount::core(value)
    }

    /// Compute the fee for an operation and raise it to the
    /// `min_rf_percent` floor against the externally supplied
    /// reference real fee. The reference value's derivation is the
    /// ledger's business, not this crate's.
    pub fn fee_with_floor(&self, op: &Operation, reference_real_fee: u64) -> Amount {
        let computed = self.calculate_fee(op).value;
        let (min_real_fee, min_rf_percent) = match op.kind() {
            OperationKind::PlatformCreate => (
                self.platform_create.min_real_fee,
                self.platform_create.min_rf_percent,
            ),
            OperationKind::PlatformUpdate => (
                self.platform_update.min_real_fee,
                self.platform_update.min_rf_percent,
            ),
            OperationKind::PlatformVoteUpdate => (
                self.platform_vote_update.min_real_fee,
                self.platform_vote_update.min_rf_percent,
            ),
            OperationKind::Post => (self.post.min_real_fee, self.post.min_rf_percent),
            OperationKind::PostUpdate => {
                (self.post_update.min_real_fee, self.post_update.min_rf_percent)
            }
            OperationKind::ScoreCreate => (
                self.score_create.min_real_fee,
                self.score_create.min_rf_percent,
            ),
            OperationKind::Reward => (self.reward.min_real_fee, self.reward.min_rf_percent),
            OperationKind::RewardProxy => (
                self.reward_proxy.min_real_fee,
                self.reward_proxy.min_rf_percent,
            ),
            OperationKind::Buyout => (self.buyout.min_real_fee, self.buyout.min_rf_percent),
            OperationKind::LicenseCreate => (
                self.license_create.min_real_fee,
                self.license_create.min_rf_percent,
            ),
        };
        Amount::core(apply_fee_floor(
            computed,
            min_real_fee,
            min_rf_percent,
            reference_real_fee,
        ))
    }
}

/// `max(computed, min_real_fee, reference × min_rf_percent / 10000)`,
/// saturating. This is the floor-application function; the reference
/// real fee is an external input.
pub fn apply_fee_floor(
    computed: u64,
    min_real_fee: u64,
    min_rf_percent: u32,
    reference_real_fee: u64,
) -> u64 {
    let percent_floor =
        (reference_real_fee as u128 * min_rf_percent as u128) / RATIO_SCALE_BPS as u128;
    let percent_floor = u64::try_from(percent_floor).unwrap_or(u64::MAX);
    computed.max(min_real_fee).max(percent_floor)
}

/// Flat base plus price per started kilobyte of serialized size,
/// clamped below by `min_real_fee`.
fn flat_fee(params: &FlatFeeParameters, encoded_size: usize) -> u64 {
    let kbytes = (encoded_size as u64).div_ceil(FEE_KBYTE);
    let total = (params.fee as u128) + (kbytes as u128) * (params.price_per_kbyte as u128);
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    total.max(params.min_real_fee)
}

/// Basic fee plus a per-platform price on the added vote set, clamped
/// below by `min_real_fee`. Removal is free beyond the basic fee.
fn vote_fee(params: &VoteFeeParameters, op: &PlatformVoteUpdateOperation) -> u64 {
    let added = op.platform_to_add.len() as u128;
    let total = (params.basic_fee as u128) + added * (params.price_per_platform as u128);
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    total.max(params.min_real_fee)
}

/// Fee schedule error type.
#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Error {
    /// `{0}` has min_rf_percent {1}, above the 10000 bps scale
    MinRfPercentOutOfRange(OperationKind, u32),
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_schedule_is_valid() {
        assert_eq!(FeeSchedule::default().validate(), Ok(()));
    }

    #[test]
    fn out_of_scale_floor_percent_is_rejected() {
        let mut schedule = FeeSchedule::default();
        schedule.reward.min_rf_percent = RATIO_SCALE_BPS + 1;
        assert_eq!(
            schedule.validate(),
            Err(Error::MinRfPercentOutOfRange(
                OperationKind::Reward,
                RATIO_SCALE_BPS + 1
            )),
        );
    }

    #[test]
    fn default_platform_create_parameters() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.platform_create.fee, 1000 * CHAIN_PRECISION);
        assert_eq!(schedule.platform_create.min_real_fee, 1000 * CHAIN_PRECISION);
        assert_eq!(schedule.platform_create.min_rf_percent, RATIO_SCALE_BPS);
        assert_eq!(schedule.platform_vote_update.basic_fee, CHAIN_PRECISION);
        assert_eq!(schedule.post.fee, CHAIN_PRECISION);
    }

    #[test]
    fn fee_floor_takes_the_largest_component() {
        // Computed wins.
        assert_eq!(apply_fee_floor(100, 10, 0, 0), 100);
        // min_real_fee wins.
        assert_eq!(apply_fee_floor(5, 50, 0, 0), 50);
        // The percentage floor wins: 30% of 1000 = 300.
        assert_eq!(apply_fee_floor(5, 50, 3000, 1000), 300);
        // Full percentage passes the reference through.
        assert_eq!(apply_fee_floor(0, 0, 10_000, 777), 777);
    }

    #[test]
    fn fee_floor_saturates() {
        assert_eq!(apply_fee_floor(0, 0, 10_000, u64::MAX), u64::MAX);
        assert_eq!(apply_fee_floor(u64::MAX, u64::MAX, 10_000, u64::MAX), u64::MAX);
    }

    #[test]
    fn error_display() {
        let err = Error::MinRfPercentOutOfRange(OperationKind::Buyout, 10_001);
        assert!(err.to_string().contains("min_rf_percent"));
        assert!(err.to_string().contains("buyout"));
    }
}
