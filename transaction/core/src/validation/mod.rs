// Copyright (c) 2024-2026 The Plume Foundation

//! Validation routines for Plume operations.

mod error;
mod validate;

pub use self::{
    error::{ValidationError, ValidationResult},
    validate::{
        validate, validate_buyout, validate_fee_asset, validate_license_create,
        validate_platform_create, validate_platform_update, validate_platform_vote_update,
        validate_post, validate_post_ext, validate_post_update, validate_reward,
        validate_reward_proxy, validate_score_create, ValidationPolicy,
    },
};
