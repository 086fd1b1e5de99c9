// Copyright (c) 2024-2026 The Plume Foundation

//! License registration.

use alloc::{string::String, vec::Vec};
use plm_transaction_types::{AccountUid, Amount, LicenseLid};
use prost::Message;
use serde::{Deserialize, Serialize};

/// Register a content license under a platform. Posts on that platform
/// may then reference it by lid. Paid by `platform`; the lid must be
/// unique within the platform's scope, which the ledger enforces.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct LicenseCreateOperation {
    /// Operation fee, paid by `platform`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The license's lid, allocated by the platform.
    #[prost(message, required, tag = "2")]
    pub license_lid: LicenseLid,

    /// The platform registering the license.
    #[prost(message, required, tag = "3")]
    pub platform: AccountUid,

    /// License type tag, an opaque small integer classification.
    #[prost(uint32, tag = "4")]
    pub license_type: u32,

    /// Hash of the off-chain license text.
    #[prost(string, tag = "5")]
    pub hash_value: String,

    /// Free-form metadata. Conventionally a JSON object; see
    /// `ValidationPolicy`.
    #[prost(string, tag = "6")]
    pub extra_data: String,

    /// License title.
    #[prost(string, tag = "7")]
    pub title: String,

    /// License body or abstract.
    #[prost(string, tag = "8")]
    pub body: String,

    /// Reserved extension slot; must be empty at this protocol version.
    #[prost(bytes = "vec", repeated, tag = "9")]
    pub extensions: Vec<Vec<u8>>,
}
