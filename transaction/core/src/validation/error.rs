// Copyright (c) 2024-2026 The Plume Foundation

use crate::operations::{OperationKind, PostType};
use alloc::string::String;
use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// Type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons an operation fails structural validation. Every variant
/// names the offending kind, field, and value so the transaction layer
/// can reject with a precise diagnostic; a failure is a deterministic,
/// permanent rejection of the operation.
#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum ValidationError {
    /// {kind}: field `{field}` must not be empty
    EmptyField {
        /// The offending operation kind.
        kind: OperationKind,
        /// The offending field.
        field: String,
    },

    /// {kind}: field `{field}` length {len} exceeds maximum {max}
    FieldTooLong {
        /// The offending operation kind.
        kind: OperationKind,
        /// The offending field.
        field: String,
        /// The field's byte length.
        len: usize,
        /// The maximum allowed byte length.
        max: usize,
    },

    /// {kind}: field `{field}` must be a valid JSON document
    InvalidJson {
        /// The offending operation kind.
        kind: OperationKind,
        /// The offending field.
        field: String,
    },

    /// {kind}: the reserved extension slot must be empty
    UnsupportedExtension {
        /// The offending operation kind.
        kind: OperationKind,
    },

    /// {kind}: fees must be denominated in the core asset, got asset {asset_id}
    NonCoreFeeAsset {
        /// The offending operation kind.
        kind: OperationKind,
        /// The declared fee asset.
        asset_id: u64,
    },

    /// {kind}: field `{field}` must be a positive amount
    ZeroAmount {
        /// The offending operation kind.
        kind: OperationKind,
        /// The offending field.
        field: String,
    },

    /// {kind}: ratio field `{field}` = {value} exceeds the {scale} bps scale
    RatioOutOfRange {
        /// The offending operation kind.
        kind: OperationKind,
        /// The offending field.
        field: String,
        /// The out-of-scale value, in basis points.
        value: u32,
        /// The basis-point scale.
        scale: u32,
    },

    /// receiptor ratio invariant violated: `{field}` = {value} exceeds limit {limit}
    RatioInvariant {
        /// The offending ratio field.
        field: String,
        /// The offending value, in basis points.
        value: u32,
        /// The limit it exceeds, in basis points.
        limit: u32,
    },

    /// {kind}: platform {uid} appears in both the add and remove vote sets
    OverlappingVoteSets {
        /// The offending operation kind.
        kind: OperationKind,
        /// The platform uid present in both sets.
        uid: u64,
    },

    /// {kind}: vote set `{field}` must be strictly ascending
    UnsortedVoteSet {
        /// The offending operation kind.
        kind: OperationKind,
        /// The offending set field.
        field: String,
    },

    /// {kind}: both vote sets are empty, nothing to update
    EmptyVoteUpdate {
        /// The offending operation kind.
        kind: OperationKind,
    },

    /// {kind}: at most {max} platforms may be voted per operation, got {count}
    TooManyVotes {
        /// The offending operation kind.
        kind: OperationKind,
        /// The combined size of both vote sets.
        count: usize,
        /// The maximum allowed combined size.
        max: usize,
    },

    /// {kind}: post type {post_type} requires origin field `{field}`
    MissingOriginField {
        /// The offending operation kind.
        kind: OperationKind,
        /// The post type demanding the origin group.
        post_type: PostType,
        /// The absent origin field.
        field: String,
    },

    /// {kind}: post type {post_type} forbids origin field `{field}`
    UnexpectedOriginField {
        /// The offending operation kind.
        kind: OperationKind,
        /// The post type forbidding origin fields.
        post_type: PostType,
        /// The present origin field.
        field: String,
    },

    /// {kind}: unknown post type tag {value}
    UnknownPostType {
        /// The offending operation kind.
        kind: OperationKind,
        /// The undecodable tag.
        value: i32,
    },

    /// {kind}: permission flags {value} exceed the 16-bit mask
    PermissionFlagsOutOfRange {
        /// The offending operation kind.
        kind: OperationKind,
        /// The oversized flag value.
        value: u32,
    },

    /// {kind}: buyout_ratio is set but to_buyout is not
    BuyoutRatioWithoutBuyout {
        /// The offending operation kind.
        kind: OperationKind,
    },

    /// {kind}: at least one updatable field must be set
    NoFieldsUpdated {
        /// The offending operation kind.
        kind: OperationKind,
    },

    /// {kind}: score {score} is outside [-{max}, {max}]
    ScoreOutOfRange {
        /// The offending operation kind.
        kind: OperationKind,
        /// The out-of-range score.
        score: i32,
        /// The largest allowed magnitude.
        max: i32,
    },

    /// {kind}: score must be non-zero
    ZeroScore {
        /// The offending operation kind.
        kind: OperationKind,
    },

    /// {kind}: csaf weight {csaf} must be non-negative
    NegativeCsaf {
        /// The offending operation kind.
        kind: OperationKind,
        /// The negative weight.
        csaf: i64,
    },

    /// {kind}: at most {max} receiptors per post, got {count}
    TooManyReceiptors {
        /// The offending operation kind.
        kind: OperationKind,
        /// The receiptor map size.
        count: usize,
        /// The maximum allowed size.
        max: usize,
    },

    /// {kind}: license type tag {value} exceeds the u8 range
    LicenseTypeOutOfRange {
        /// The offending operation kind.
        kind: OperationKind,
        /// The oversized type tag.
        value: u32,
    },
}
