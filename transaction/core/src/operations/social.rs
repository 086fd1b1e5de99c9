// Copyright (c) 2024-2026 The Plume Foundation

//! Scoring, rewarding, and profit-buyout operations.

use alloc::vec::Vec;
use plm_transaction_types::{AccountUid, Amount, PostPid};
use prost::Message;
use serde::{Deserialize, Serialize};

/// Score a post. Paid by `from_account_uid`; spends `csaf` weight
/// accumulated by that account.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct ScoreCreateOperation {
    /// Operation fee, paid by `from_account_uid`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The scoring account.
    #[prost(message, required, tag = "2")]
    pub from_account_uid: AccountUid,

    /// The platform the post lives on.
    #[prost(message, required, tag = "3")]
    pub platform: AccountUid,

    /// The post's author.
    #[prost(message, required, tag = "4")]
    pub poster: AccountUid,

    /// The post's pid.
    #[prost(message, required, tag = "5")]
    pub post_pid: PostPid,

    /// The score, a signed value bounded by `MAX_SCORE_MAGNITUDE` and
    /// excluding zero.
    #[prost(sint32, tag = "6")]
    pub score: i32,

    /// The weight backing the score. Must be non-negative.
    #[prost(sint64, tag = "7")]
    pub csaf: i64,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "8")]
    pub extensions: Vec<Vec<u8>>,
}

/// Reward a post with an asset amount, paid directly by
/// `from_account_uid`.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct RewardOperation {
    /// Operation fee, paid by `from_account_uid`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The rewarding account.
    #[prost(message, required, tag = "2")]
    pub from_account_uid: AccountUid,

    /// The platform the post lives on.
    #[prost(message, required, tag = "3")]
    pub platform: AccountUid,

    /// The post's author.
    #[prost(message, required, tag = "4")]
    pub poster: AccountUid,

    /// The post's pid.
    #[prost(message, required, tag = "5")]
    pub post_pid: PostPid,

    /// The rewarded amount. Must be positive.
    #[prost(message, required, tag = "6")]
    pub amount: Amount,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "7")]
    pub extensions: Vec<Vec<u8>>,
}

/// Reward a post with shares, proxied through its platform. The
/// platform co-signs at the secondary tier.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct RewardProxyOperation {
    /// Operation fee, paid by `from_account_uid`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The rewarding account.
    #[prost(message, required, tag = "2")]
    pub from_account_uid: AccountUid,

    /// The platform proxying the reward.
    #[prost(message, required, tag = "3")]
    pub platform: AccountUid,

    /// The post's author.
    #[prost(message, required, tag = "4")]
    pub poster: AccountUid,

    /// The post's pid.
    #[prost(message, required, tag = "5")]
    pub post_pid: PostPid,

    /// The rewarded share count. Must be positive.
    #[prost(uint64, tag = "6")]
    pub amount: u64,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "7")]
    pub extensions: Vec<Vec<u8>>,
}

/// Buy out a receiptor's offered profit share in a post, at the terms
/// that receiptor published. Paid by `from_account_uid`.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct BuyoutOperation {
    /// Operation fee, paid by `from_account_uid`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The buying account.
    #[prost(message, required, tag = "2")]
    pub from_account_uid: AccountUid,

    /// The platform the post lives on.
    #[prost(message, required, tag = "3")]
    pub platform: AccountUid,

    /// The post's author.
    #[prost(message, required, tag = "4")]
    pub poster: AccountUid,

    /// The post's pid.
    #[prost(message, required, tag = "5")]
    pub post_pid: PostPid,

    /// The receiptor whose offered share is being bought.
    #[prost(message, required, tag = "6")]
    pub receiptor_account_uid: AccountUid,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "7")]
    pub extensions: Vec<Vec<u8>>,
}
