// Copyright (c) 2024-2026 The Plume Foundation

//! Posting and post-update operations, with their per-kind extension
//! payloads and the receiptor profit-split parameter.

use crate::validation::{ValidationError, ValidationResult};
use alloc::{collections::BTreeMap, string::String};
use core::fmt;
use plm_transaction_types::{
    constants::{MAX_RECEIPTOR_RATIO_BPS, PERMISSION_ALL},
    AccountUid, Amount, LicenseLid, PostPid,
};
use prost::{Enumeration, Message};
use serde::{Deserialize, Serialize};

/// The closed classification of a post record. A post does not change
/// kind once created.
#[derive(
    Clone, Copy, Debug, Deserialize, Enumeration, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(i32)]
pub enum PostType {
    /// An original article.
    Post = 0,
    /// A reply to an existing post.
    Comment = 1,
    /// A verbatim forward of an origin post.
    Forward = 2,
    /// A forward that modifies the origin content, which requires a
    /// priced license from the origin.
    ForwardAndModify = 3,
}

impl PostType {
    /// Whether this kind references an origin post and therefore
    /// requires the full origin field group.
    pub fn requires_origin(&self) -> bool {
        matches!(self, PostType::Forward | PostType::ForwardAndModify)
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostType::Post => "post",
            PostType::Comment => "comment",
            PostType::Forward => "forward",
            PostType::ForwardAndModify => "forward_and_modify",
        };
        write!(f, "{name}")
    }
}

/// One receiptor's profit-split terms on a post, in basis points of
/// the post's profit.
#[derive(Clone, Copy, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct ReceiptorParameter {
    /// The receiptor's current profit ratio, in basis points.
    #[prost(uint32, tag = "1")]
    pub cur_ratio: u32,

    /// Whether part of this share is offered for buyout.
    #[prost(bool, tag = "2")]
    pub to_buyout: bool,

    /// The ratio offered for buyout, in basis points. Meaningful only
    /// when `to_buyout` is set; must not exceed `cur_ratio`.
    #[prost(uint32, tag = "3")]
    pub buyout_ratio: u32,

    /// The asking price for the offered ratio, in core base units.
    #[prost(uint64, tag = "4")]
    pub buyout_price: u64,
}

impl ReceiptorParameter {
    /// Check the ratio invariants: an offered buyout ratio may not
    /// exceed the held ratio, and the held ratio may not eat into the
    /// platform's reserved share.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.to_buyout && self.buyout_ratio > self.cur_ratio {
            return Err(ValidationError::RatioInvariant {
                field: String::from("buyout_ratio"),
                value: self.buyout_ratio,
                limit: self.cur_ratio,
            });
        }
        if self.cur_ratio > MAX_RECEIPTOR_RATIO_BPS {
            return Err(ValidationError::RatioInvariant {
                field: String::from("cur_ratio"),
                value: self.cur_ratio,
                limit: MAX_RECEIPTOR_RATIO_BPS,
            });
        }
        Ok(())
    }
}

/// The extension payload a `PostOperation` may carry. Presence of each
/// optional field toggles a specific behavior: a `forward_price` means
/// forwards of this post carry a priced reuse license, a receiptor map
/// redistributes future profit, a license reference binds the post to
/// platform license terms.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct PostExt {
    /// The post's kind tag. Drives the origin field group rules.
    #[prost(enumeration = "PostType", tag = "1")]
    pub post_type: i32,

    /// Price to forward this post, in core base units.
    #[prost(uint64, optional, tag = "2")]
    pub forward_price: Option<u64>,

    /// Profit-split terms per receiptor account uid. Empty means the
    /// poster keeps the entire non-platform share.
    #[prost(btree_map = "fixed64, message", tag = "3")]
    pub receiptors: BTreeMap<u64, ReceiptorParameter>,

    /// License this post is published under.
    #[prost(message, optional, tag = "4")]
    pub license_lid: Option<LicenseLid>,

    /// Permission bitmask. Absent means everything permitted.
    #[prost(uint32, optional, tag = "5")]
    pub permission_flags: Option<u32>,
}

impl PostExt {
    /// A payload of the given kind with no optional behavior toggled.
    pub fn new(post_type: PostType) -> Self {
        Self {
            post_type: post_type as i32,
            forward_price: None,
            receiptors: BTreeMap::new(),
            license_lid: None,
            permission_flags: None,
        }
    }

    /// The decoded post kind, or `None` if the tag is unknown. The
    /// generated `post_type()` getter falls back to the default
    /// variant for unknown tags, which validation must not do.
    pub fn decoded_post_type(&self) -> Option<PostType> {
        PostType::from_i32(self.post_type)
    }

    /// The effective permission bitmask: all bits set when absent.
    pub fn effective_permission_flags(&self) -> u32 {
        self.permission_flags.unwrap_or(PERMISSION_ALL)
    }
}

/// The extension payload a `PostUpdateOperation` may carry. Each field
/// updates the corresponding post attribute; `receiptor` scopes the
/// buyout trio to one receiptor's entry.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct PostUpdateExt {
    /// New forward price.
    #[prost(uint64, optional, tag = "1")]
    pub forward_price: Option<u64>,

    /// The receiptor whose terms this update touches. That account
    /// must co-sign the update.
    #[prost(message, optional, tag = "2")]
    pub receiptor: Option<AccountUid>,

    /// New buyout offer flag.
    #[prost(bool, optional, tag = "3")]
    pub to_buyout: Option<bool>,

    /// New offered buyout ratio, basis points. Only meaningful with
    /// `to_buyout`.
    #[prost(uint32, optional, tag = "4")]
    pub buyout_ratio: Option<u32>,

    /// New buyout asking price, core base units.
    #[prost(uint64, optional, tag = "5")]
    pub buyout_price: Option<u64>,

    /// New license reference.
    #[prost(message, optional, tag = "6")]
    pub license_lid: Option<LicenseLid>,

    /// New permission bitmask.
    #[prost(uint32, optional, tag = "7")]
    pub permission_flags: Option<u32>,
}

/// Publish an article, comment, or forward. Paid by `poster`.
///
/// The origin trio (`origin_poster`, `origin_post_pid`,
/// `origin_platform`) is an all-or-nothing group, present exactly for
/// the forward kinds.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct PostOperation {
    /// Operation fee, paid by `poster`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The post's pid, allocated by the platform.
    #[prost(message, required, tag = "2")]
    pub post_pid: PostPid,

    /// The platform the post is published on.
    #[prost(message, required, tag = "3")]
    pub platform: AccountUid,

    /// The authoring account.
    #[prost(message, required, tag = "4")]
    pub poster: AccountUid,

    /// Origin author, for forwards.
    #[prost(message, optional, tag = "5")]
    pub origin_poster: Option<AccountUid>,

    /// Origin post pid, for forwards.
    #[prost(message, optional, tag = "6")]
    pub origin_post_pid: Option<PostPid>,

    /// Origin platform, for forwards.
    #[prost(message, optional, tag = "7")]
    pub origin_platform: Option<AccountUid>,

    /// Hash of the off-chain content.
    #[prost(string, tag = "8")]
    pub hash_value: String,

    /// Free-form metadata: category, tags, and so on. Conventionally a
    /// JSON object; see `ValidationPolicy`.
    #[prost(string, tag = "9")]
    pub extra_data: String,

    /// Post title.
    #[prost(string, tag = "10")]
    pub title: String,

    /// Post body.
    #[prost(string, tag = "11")]
    pub body: String,

    /// Extension payload. Absent means a plain `PostType::Post` with
    /// default permissions.
    #[prost(message, optional, tag = "12")]
    pub ext: Option<PostExt>,
}

impl PostOperation {
    /// The decoded post kind: the extension's tag when present, plain
    /// `Post` otherwise. `None` if the tag is unknown.
    pub fn post_type(&self) -> Option<PostType> {
        match &self.ext {
            Some(ext) => ext.decoded_post_type(),
            None => Some(PostType::Post),
        }
    }
}

/// Update an existing post. Paid by `poster`.
///
/// A pure permission/extension edit does not require the poster's
/// signature; touching any content field does. See the authority
/// resolver.
#[derive(Clone, Deserialize, Eq, Message, PartialEq, Serialize)]
pub struct PostUpdateOperation {
    /// Operation fee, paid by `poster`.
    #[prost(message, required, tag = "1")]
    pub fee: Amount,

    /// The platform the post lives on.
    #[prost(message, required, tag = "2")]
    pub platform: AccountUid,

    /// The authoring account.
    #[prost(message, required, tag = "3")]
    pub poster: AccountUid,

    /// The post's pid.
    #[prost(message, required, tag = "4")]
    pub post_pid: PostPid,

    /// New content hash, if changing.
    #[prost(string, optional, tag = "5")]
    pub hash_value: Option<String>,

    /// New metadata, if changing.
    #[prost(string, optional, tag = "6")]
    pub extra_data: Option<String>,

    /// New title, if changing.
    #[prost(string, optional, tag = "7")]
    pub title: Option<String>,

    /// New body, if changing.
    #[prost(string, optional, tag = "8")]
    pub body: Option<String>,

    /// Extension payload, if updating permissions or profit terms.
    #[prost(message, optional, tag = "9")]
    pub ext: Option<PostUpdateExt>,
}

impl PostUpdateOperation {
    /// Whether any content field (hash, extra data, title, body) is
    /// set. Content edits require the poster's secondary authority.
    pub fn touches_content(&self) -> bool {
        self.hash_value.is_some()
            || self.extra_data.is_some()
            || self.title.is_some()
            || self.body.is_some()
    }
}
