// Copyright (c) 2024-2026 The Plume Foundation

//! Structural validation of operations.
//!
//! Validation is pure: it inspects only the operation value and the
//! policy, mutates nothing, and is idempotent. It runs before fee and
//! authority computation and before any ledger mutation is attempted.

use super::error::{ValidationError, ValidationResult};
use crate::operations::{
    BuyoutOperation, LicenseCreateOperation, Operation, OperationKind, PlatformCreateOperation,
    PlatformUpdateOperation, PlatformVoteUpdateOperation, PostExt, PostOperation,
    PostUpdateOperation, RewardOperation, RewardProxyOperation, ScoreCreateOperation,
};
use alloc::{string::String, vec::Vec};
use plm_transaction_types::{
    constants::{
        MAX_BODY_LEN, MAX_EXTRA_DATA_LEN, MAX_HASH_VALUE_LEN, MAX_PLATFORM_NAME_LEN,
        MAX_PLATFORM_VOTES_PER_OP, MAX_RECEIPTORS_PER_POST, MAX_SCORE_MAGNITUDE, MAX_TITLE_LEN,
        MAX_URL_LEN, PERMISSION_ALL, RATIO_SCALE_BPS,
    },
    AssetId,
};
use serde::{Deserialize, Serialize};

/// Policy knobs that are uniform across a deployment but not fixed by
/// consensus at this layer.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationPolicy {
    /// When set, `extra_data` fields must parse as JSON documents.
    /// When unset (the default) they are opaque, length-bounded bytes.
    pub require_json_extra_data: bool,
}

/// Determines if the operation is structurally valid under the given
/// policy.
///
/// This checks field invariants only; whether the referenced accounts,
/// posts and licenses exist is the ledger's business.
pub fn validate(op: &Operation, policy: &ValidationPolicy) -> ValidationResult<()> {
    validate_fee_asset(op)?;

    match op {
        Operation::PlatformCreate(inner) => validate_platform_create(inner, policy),
        Operation::PlatformUpdate(inner) => validate_platform_update(inner, policy),
        Operation::PlatformVoteUpdate(inner) => validate_platform_vote_update(inner),
        Operation::Post(inner) => validate_post(inner, policy),
        Operation::PostUpdate(inner) => validate_post_update(inner, policy),
        Operation::ScoreCreate(inner) => validate_score_create(inner),
        Operation::Reward(inner) => validate_reward(inner),
        Operation::RewardProxy(inner) => validate_reward_proxy(inner),
        Operation::Buyout(inner) => validate_buyout(inner),
        Operation::LicenseCreate(inner) => validate_license_create(inner, policy),
    }
}

/// Fees must be denominated in the core asset.
pub fn validate_fee_asset(op: &Operation) -> ValidationResult<()> {
    if op.fee().asset_id != AssetId::CORE {
        return Err(ValidationError::NonCoreFeeAsset {
            kind: op.kind(),
            asset_id: op.fee().asset_id.0,
        });
    }
    Ok(())
}

/// Structural rules for `PlatformCreate`.
pub fn validate_platform_create(
    op: &PlatformCreateOperation,
    policy: &ValidationPolicy,
) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::PlatformCreate;

    check_string(KIND, "name", &op.name, MAX_PLATFORM_NAME_LEN, true)?;
    check_string(KIND, "url", &op.url, MAX_URL_LEN, true)?;
    check_extra_data(KIND, &op.extra_data, policy)?;
    check_extensions_empty(KIND, &op.extensions)?;
    Ok(())
}

/// Structural rules for `PlatformUpdate`: every field is optional, but
/// the operation must change something.
pub fn validate_platform_update(
    op: &PlatformUpdateOperation,
    policy: &ValidationPolicy,
) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::PlatformUpdate;

    if op.new_pledge.is_none()
        && op.new_name.is_none()
        && op.new_url.is_none()
        && op.new_extra_data.is_none()
    {
        return Err(ValidationError::NoFieldsUpdated { kind: KIND });
    }
    if let Some(new_name) = &op.new_name {
        check_string(KIND, "new_name", new_name, MAX_PLATFORM_NAME_LEN, true)?;
    }
    if let Some(new_url) = &op.new_url {
        check_string(KIND, "new_url", new_url, MAX_URL_LEN, true)?;
    }
    if let Some(new_extra_data) = &op.new_extra_data {
        check_extra_data(KIND, new_extra_data, policy)?;
    }
    check_extensions_empty(KIND, &op.extensions)?;
    Ok(())
}

/// Structural rules for `PlatformVoteUpdate`: both vote sets are
/// canonical (strictly ascending) flat sets, disjoint from each other,
/// bounded in combined size, and not both empty.
pub fn validate_platform_vote_update(
    op: &PlatformVoteUpdateOperation,
) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::PlatformVoteUpdate;

    check_vote_set(KIND, "platform_to_add", &op.platform_to_add)?;
    check_vote_set(KIND, "platform_to_remove", &op.platform_to_remove)?;

    if op.platform_to_add.is_empty() && op.platform_to_remove.is_empty() {
        return Err(ValidationError::EmptyVoteUpdate { kind: KIND });
    }

    let count = op.platform_to_add.len() + op.platform_to_remove.len();
    if count > MAX_PLATFORM_VOTES_PER_OP {
        return Err(ValidationError::TooManyVotes {
            kind: KIND,
            count,
            max: MAX_PLATFORM_VOTES_PER_OP,
        });
    }

    // Both sets are sorted, so overlap reduces to a binary search per
    // added uid.
    for uid in &op.platform_to_add {
        if op.platform_to_remove.binary_search(uid).is_ok() {
            return Err(ValidationError::OverlappingVoteSets { kind: KIND, uid: *uid });
        }
    }

    check_extensions_empty(KIND, &op.extensions)?;
    Ok(())
}

/// Structural rules for `Post`, including the origin field group rules
/// driven by the post type.
pub fn validate_post(op: &PostOperation, policy: &ValidationPolicy) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::Post;

    let post_type = match op.post_type() {
        Some(post_type) => post_type,
        None => {
            // op.ext must be present for the tag to be undecodable.
            let value = op.ext.as_ref().map(|ext| ext.post_type).unwrap_or(0);
            return Err(ValidationError::UnknownPostType { kind: KIND, value });
        }
    };

    let origin_fields = [
        ("origin_poster", op.origin_poster.is_some()),
        ("origin_post_pid", op.origin_post_pid.is_some()),
        ("origin_platform", op.origin_platform.is_some()),
    ];
    if post_type.requires_origin() {
        for (field, present) in origin_fields {
            if !present {
                return Err(ValidationError::MissingOriginField {
                    kind: KIND,
                    post_type,
                    field: String::from(field),
                });
            }
        }
    } else {
        for (field, present) in origin_fields {
            if present {
                return Err(ValidationError::UnexpectedOriginField {
                    kind: KIND,
                    post_type,
                    field: String::from(field),
                });
            }
        }
    }

    check_string(KIND, "hash_value", &op.hash_value, MAX_HASH_VALUE_LEN, true)?;
    check_string(KIND, "title", &op.title, MAX_TITLE_LEN, false)?;
    check_string(KIND, "body", &op.body, MAX_BODY_LEN, false)?;
    check_extra_data(KIND, &op.extra_data, policy)?;

    if let Some(ext) = &op.ext {
        validate_post_ext(ext)?;
    }
    Ok(())
}

/// Structural rules for a post's extension payload.
pub fn validate_post_ext(ext: &PostExt) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::Post;

    if let Some(flags) = ext.permission_flags {
        if flags > PERMISSION_ALL {
            return Err(ValidationError::PermissionFlagsOutOfRange { kind: KIND, value: flags });
        }
    }
    if ext.receiptors.len() > MAX_RECEIPTORS_PER_POST {
        return Err(ValidationError::TooManyReceiptors {
            kind: KIND,
            count: ext.receiptors.len(),
            max: MAX_RECEIPTORS_PER_POST,
        });
    }
    for parameter in ext.receiptors.values() {
        parameter.validate()?;
    }
    Ok(())
}

/// Structural rules for `PostUpdate`. A pure permission edit is legal;
/// the buyout trio must be internally consistent.
pub fn validate_post_update(
    op: &PostUpdateOperation,
    policy: &ValidationPolicy,
) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::PostUpdate;

    if let Some(hash_value) = &op.hash_value {
        check_string(KIND, "hash_value", hash_value, MAX_HASH_VALUE_LEN, true)?;
    }
    if let Some(title) = &op.title {
        check_string(KIND, "title", title, MAX_TITLE_LEN, false)?;
    }
    if let Some(body) = &op.body {
        check_string(KIND, "body", body, MAX_BODY_LEN, false)?;
    }
    if let Some(extra_data) = &op.extra_data {
        check_extra_data(KIND, extra_data, policy)?;
    }

    if let Some(ext) = &op.ext {
        if ext.buyout_ratio.is_some() && ext.to_buyout.is_none() {
            return Err(ValidationError::BuyoutRatioWithoutBuyout { kind: KIND });
        }
        if let Some(buyout_ratio) = ext.buyout_ratio {
            if buyout_ratio > RATIO_SCALE_BPS {
                return Err(ValidationError::RatioOutOfRange {
                    kind: KIND,
                    field: String::from("buyout_ratio"),
                    value: buyout_ratio,
                    scale: RATIO_SCALE_BPS,
                });
            }
        }
        if let Some(flags) = ext.permission_flags {
            if flags > PERMISSION_ALL {
                return Err(ValidationError::PermissionFlagsOutOfRange {
                    kind: KIND,
                    value: flags,
                });
            }
        }
    }
    Ok(())
}

/// Structural rules for `ScoreCreate`: bounded non-zero score carried
/// by a non-negative weight.
pub fn validate_score_create(op: &ScoreCreateOperation) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::ScoreCreate;

    if op.score == 0 {
        return Err(ValidationError::ZeroScore { kind: KIND });
    }
    if op.score < -MAX_SCORE_MAGNITUDE || op.score > MAX_SCORE_MAGNITUDE {
        return Err(ValidationError::ScoreOutOfRange {
            kind: KIND,
            score: op.score,
            max: MAX_SCORE_MAGNITUDE,
        });
    }
    if op.csaf < 0 {
        return Err(ValidationError::NegativeCsaf { kind: KIND, csaf: op.csaf });
    }
    check_extensions_empty(KIND, &op.extensions)?;
    Ok(())
}

/// Structural rules for `Reward`: the rewarded amount must be
/// positive.
pub fn validate_reward(op: &RewardOperation) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::Reward;

    if op.amount.value == 0 {
        return Err(ValidationError::ZeroAmount {
            kind: KIND,
            field: String::from("amount"),
        });
    }
    check_extensions_empty(KIND, &op.extensions)?;
    Ok(())
}

/// Structural rules for `RewardProxy`: the rewarded share count must
/// be positive.
pub fn validate_reward_proxy(op: &RewardProxyOperation) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::RewardProxy;

    if op.amount == 0 {
        return Err(ValidationError::ZeroAmount {
            kind: KIND,
            field: String::from("amount"),
        });
    }
    check_extensions_empty(KIND, &op.extensions)?;
    Ok(())
}

/// Structural rules for `Buyout`. The buyer may equal the receiptor;
/// everything beyond well-formed ids is resolved against ledger state
/// externally.
pub fn validate_buyout(op: &BuyoutOperation) -> ValidationResult<()> {
    check_extensions_empty(OperationKind::Buyout, &op.extensions)?;
    Ok(())
}

/// Structural rules for `LicenseCreate`.
pub fn validate_license_create(
    op: &LicenseCreateOperation,
    policy: &ValidationPolicy,
) -> ValidationResult<()> {
    const KIND: OperationKind = OperationKind::LicenseCreate;

    if op.license_type > u8::MAX as u32 {
        return Err(ValidationError::LicenseTypeOutOfRange {
            kind: KIND,
            value: op.license_type,
        });
    }
    check_string(KIND, "hash_value", &op.hash_value, MAX_HASH_VALUE_LEN, true)?;
    check_string(KIND, "title", &op.title, MAX_TITLE_LEN, true)?;
    check_string(KIND, "body", &op.body, MAX_BODY_LEN, false)?;
    check_extra_data(KIND, &op.extra_data, policy)?;
    check_extensions_empty(KIND, &op.extensions)?;
    Ok(())
}

fn check_string(
    kind: OperationKind,
    field: &str,
    value: &str,
    max: usize,
    required: bool,
) -> ValidationResult<()> {
    if required && value.is_empty() {
        return Err(ValidationError::EmptyField {
            kind,
            field: String::from(field),
        });
    }
    if value.len() > max {
        return Err(ValidationError::FieldTooLong {
            kind,
            field: String::from(field),
            len: value.len(),
            max,
        });
    }
    Ok(())
}

fn check_extra_data(
    kind: OperationKind,
    value: &str,
    policy: &ValidationPolicy,
) -> ValidationResult<()> {
    check_string(kind, "extra_data", value, MAX_EXTRA_DATA_LEN, false)?;
    if policy.require_json_extra_data
        && !value.is_empty()
        && serde_json::from_str::<serde_json::Value>(value).is_err()
    {
        return Err(ValidationError::InvalidJson {
            kind,
            field: String::from("extra_data"),
        });
    }
    Ok(())
}

fn check_extensions_empty(kind: OperationKind, extensions: &[Vec<u8>]) -> ValidationResult<()> {
    if !extensions.is_empty() {
        return Err(ValidationError::UnsupportedExtension { kind });
    }
    Ok(())
}

fn check_vote_set(kind: OperationKind, field: &str, uids: &[u64]) -> ValidationResult<()> {
    if !uids.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(ValidationError::UnsortedVoteSet {
            kind,
            field: String::from(field),
        });
    }
    Ok(())
}
