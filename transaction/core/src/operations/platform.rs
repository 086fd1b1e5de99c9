// Copyright (c) 2024-2026 The Plume Foundation

//! Platform registration, update, and voting operations.

use alloc::{string::String, vec::Vec};
use plm_transaction_types::{AccountUid, Amount};
use prost::Message;
use serde::{Deserialize, Serialize};

/// Register a platform on chain. Anyone can run a platform; the
/// operation locks a pledge behind it. Paid by `account`.
///
/// Field tags fix the consensus wire order; do not renumber.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct PlatformCreateOperation {
    /// Operation fee, paid by `account`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The account registering (and thereafter owning) the platform.
    #[prost(message, required, tag = "2")]
    pub account: AccountUid,

    /// Pledge locked for the lifetime of the platform.
    #[prost(message, required, tag = "3")]
    pub pledge: Amount,

    /// Platform display name.
    #[prost(string, tag = "4")]
    pub name: String,

    /// Platform main domain name.
    #[prost(string, tag = "5")]
    pub url: String,

    /// Free-form platform metadata (API endpoints, introduction, ...).
    /// Conventionally a JSON object; see `ValidationPolicy`.
    #[prost(string, tag = "6")]
    pub extra_data: String,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "7")]
    pub extensions: Vec<Vec<u8>>,
}

/// Update a platform's pledge, name, url, or extra data. Every field
/// is independently optional; absent fields are left untouched.
/// Paid by `account`.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct PlatformUpdateOperation {
    /// Operation fee, paid by `account`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The platform owner account.
    #[prost(message, required, tag = "2")]
    pub account: AccountUid,

    /// New pledge amount, if changing.
    #[prost(message, optional, tag = "3")]
    pub new_pledge: Option<Amount>,

    /// New display name, if changing.
    #[prost(string, optional, tag = "4")]
    pub new_name: Option<String>,

    /// New domain name, if changing.
    #[prost(string, optional, tag = "5")]
    pub new_url: Option<String>,

    /// New metadata, if changing.
    #[prost(string, optional, tag = "6")]
    pub new_extra_data: Option<String>,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "7")]
    pub extensions: Vec<Vec<u8>>,
}

/// Change or refresh an account's platform voting status. Paid by
/// `voter`, with a per-platform price on the added set.
///
/// The vote sets are canonical flat sets: strictly ascending uid lists.
/// Validation rejects unsorted or duplicated entries, since iteration
/// order feeds consensus-relevant hashing.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct PlatformVoteUpdateOperation {
    /// Operation fee, paid by `voter`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The voting account.
    #[prost(message, required, tag = "2")]
    pub voter: AccountUid,

    /// Platform uids to start voting for, strictly ascending.
    #[prost(fixed64, repeated, tag = "3")]
    pub platform_to_add: Vec<u64>,

    /// Platform uids to stop voting for, strictly ascending.
    #[prost(fixed64, repeated, tag = "4")]
    pub platform_to_remove: Vec<u64>,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "5")]
    pub extensions: Vec<Vec<u8>>,
}
