// Copyright (c) 2024-2026 The Plume Foundation

//! Required signing-authority resolution.
//!
//! Every operation deterministically names the account uids that must
//! sign it, split into two tiers: "active" is the strong tier used for
//! financial and ownership changes, "secondary" is the weaker tier
//! sufficient for social and content-permission mutations. The tiers
//! are resolved independently; signature verification against each
//! account's registered keys happens outside this crate.
//!
//! Both resolvers are pure and total: same operation in, same finite
//! sorted set out, never consulting external state.

use crate::operations::{Operation, PostUpdateOperation};
use alloc::collections::BTreeSet;
use plm_transaction_types::AccountUid;

/// The account uids whose active-tier authority must sign the
/// operation.
pub fn required_active_uid_authorities(op: &Operation) -> BTreeSet<AccountUid> {
    let mut uids = BTreeSet::new();
    match op {
        Operation::PlatformCreate(inner) => {
            uids.insert(inner.account);
        }
        Operation::PlatformUpdate(inner) => {
            uids.insert(inner.account);
        }
        Operation::PlatformVoteUpdate(inner) => {
            uids.insert(inner.voter);
        }
        Operation::Reward(inner) => {
            uids.insert(inner.from_account_uid);
        }
        Operation::LicenseCreate(inner) => {
            uids.insert(inner.platform);
        }
        // Content mutations sign at the secondary tier only.
        Operation::Post(_)
        | Operation::PostUpdate(_)
        | Operation::ScoreCreate(_)
        | Operation::RewardProxy(_)
        | Operation::Buyout(_) => {}
    }
    uids
}

/// The account uids whose secondary-tier authority must sign the
/// operation.
pub fn required_secondary_uid_authorities(op: &Operation) -> BTreeSet<AccountUid> {
    let mut uids = BTreeSet::new();
    match op {
        Operation::Post(inner) => {
            // Both parties consent to the permissions implied by
            // publishing.
            uids.insert(inner.poster);
            uids.insert(inner.platform);
        }
        Operation::PostUpdate(inner) => {
            return post_update_secondary_uids(inner);
        }
        Operation::ScoreCreate(inner) => {
            uids.insert(inner.from_account_uid);
            uids.insert(inner.platform);
        }
        Operation::RewardProxy(inner) => {
            uids.insert(inner.from_account_uid);
            uids.insert(inner.platform);
        }
        Operation::Buyout(inner) => {
            uids.insert(inner.from_account_uid);
            uids.insert(inner.platform);
        }
        // Financial/registration kinds sign at the active tier only.
        Operation::PlatformCreate(_)
        | Operation::PlatformUpdate(_)
        | Operation::PlatformVoteUpdate(_)
        | Operation::Reward(_)
        | Operation::LicenseCreate(_) => {}
    }
    uids
}

/// `PostUpdate` is the one kind whose signer set depends on which
/// fields are present: the platform always signs, the poster signs
/// only for content edits or a forward-price change, and a receiptor
/// named in the extension co-signs its own terms. Set union keeps each
/// uid at most once.
fn post_update_secondary_uids(op: &PostUpdateOperation) -> BTreeSet<AccountUid> {
    let mut uids = BTreeSet::new();
    uids.insert(op.platform);
    if op.touches_content() {
        uids.insert(op.poster);
    }
    if let Some(ext) = &op.ext {
        if ext.forward_price.is_some() {
            uids.insert(op.poster);
        }
        if let Some(receiptor) = ext.receiptor {
            uids.insert(receiptor);
        }
    }
    uids
}
