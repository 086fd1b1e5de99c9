// Copyright (c) 2024-2026 The Plume Foundation

//! The closed registry of Plume ledger operations.
//!
//! Each operation is a self-describing record: it can be structurally
//! validated, priced against a fee schedule, and asked for the set of
//! account uids that must sign it, without consulting ledger state.
//! The registry is the `Operation` enum; every per-kind rule is an
//! exhaustive match over it, so adding a kind is a compile error until
//! every component handles it.

mod license;
mod platform;
mod post;
mod social;

pub use license::LicenseCreateOperation;
pub use platform::{
    PlatformCreateOperation, PlatformUpdateOperation, PlatformVoteUpdateOperation,
};
pub use post::{
    PostExt, PostOperation, PostType, PostUpdateExt, PostUpdateOperation, ReceiptorParameter,
};
pub use social::{BuyoutOperation, RewardOperation, RewardProxyOperation, ScoreCreateOperation};

use crate::{
    authority, fee_schedule::FeeSchedule, validation, validation::ValidationPolicy,
    validation::ValidationResult,
};
use alloc::collections::BTreeSet;
use displaydoc::Display;
use plm_transaction_types::{AccountUid, Amount};
use prost::Message;
use serde::{Deserialize, Serialize};

/// Discriminant for each operation kind. Keys fee schedules and tags
/// validation diagnostics.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum OperationKind {
    /// platform_create
    PlatformCreate,
    /// platform_update
    PlatformUpdate,
    /// platform_vote_update
    PlatformVoteUpdate,
    /// post
    Post,
    /// post_update
    PostUpdate,
    /// score_create
    ScoreCreate,
    /// reward
    Reward,
    /// reward_proxy
    RewardProxy,
    /// buyout
    Buyout,
    /// license_create
    LicenseCreate,
}

impl OperationKind {
    /// Every operation kind, in registry order.
    pub const ALL: [OperationKind; 10] = [
        OperationKind::PlatformCreate,
        OperationKind::PlatformUpdate,
        OperationKind::PlatformVoteUpdate,
        OperationKind::Post,
        OperationKind::PostUpdate,
        OperationKind::ScoreCreate,
        OperationKind::Reward,
        OperationKind::RewardProxy,
        OperationKind::Buyout,
        OperationKind::LicenseCreate,
    ];
}

/// A single ledger operation: the closed tagged union over all ten
/// kinds.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Operation {
    /// Register a new platform.
    PlatformCreate(PlatformCreateOperation),
    /// Update an existing platform's pledge, name, url or extra data.
    PlatformUpdate(PlatformUpdateOperation),
    /// Change or refresh an account's platform votes.
    PlatformVoteUpdate(PlatformVoteUpdateOperation),
    /// Publish a post, comment, or forward.
    Post(PostOperation),
    /// Update an existing post's content, permissions or profit terms.
    PostUpdate(PostUpdateOperation),
    /// Score a post.
    ScoreCreate(ScoreCreateOperation),
    /// Reward a post with an asset amount.
    Reward(RewardOperation),
    /// Reward a post with shares, proxied through its platform.
    RewardProxy(RewardProxyOperation),
    /// Buy out a receiptor's profit share in a post.
    Buyout(BuyoutOperation),
    /// Register a content license under a platform.
    LicenseCreate(LicenseCreateOperation),
}

impl Operation {
    /// The kind discriminant of this operation.
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::PlatformCreate(_) => OperationKind::PlatformCreate,
            Operation::PlatformUpdate(_) => OperationKind::PlatformUpdate,
            Operation::PlatformVoteUpdate(_) => OperationKind::PlatformVoteUpdate,
            Operation::Post(_) => OperationKind::Post,
            Operation::PostUpdate(_) => OperationKind::PostUpdate,
            Operation::ScoreCreate(_) => OperationKind::ScoreCreate,
            Operation::Reward(_) => OperationKind::Reward,
            Operation::RewardProxy(_) => OperationKind::RewardProxy,
            Operation::Buyout(_) => OperationKind::Buyout,
            Operation::LicenseCreate(_) => OperationKind::LicenseCreate,
        }
    }

    /// The declared fee carried by this operation.
    pub fn fee(&self) -> &Amount {
        match self {
            Operation::PlatformCreate(inner) => &inner.fee,
            Operation::PlatformUpdate(inner) => &inner.fee,
            Operation::PlatformVoteUpdate(inner) => &inner.fee,
            Operation::Post(inner) => &inner.fee,
            Operation::PostUpdate(inner) => &inner.fee,
            Operation::ScoreCreate(inner) => &inner.fee,
            Operation::Reward(inner) => &inner.fee,
            Operation::RewardProxy(inner) => &inner.fee,
            Operation::Buyout(inner) => &inner.fee,
            Operation::LicenseCreate(inner) => &inner.fee,
        }
    }

    /// The account that pays this operation's fee, derived from the
    /// operation's primary account field.
    pub fn fee_payer_uid(&self) -> AccountUid {
        match self {
            Operation::PlatformCreate(inner) => inner.account,
            Operation::PlatformUpdate(inner) => inner.account,
            Operation::PlatformVoteUpdate(inner) => inner.voter,
            Operation::Post(inner) => inner.poster,
            Operation::PostUpdate(inner) => inner.poster,
            Operation::ScoreCreate(inner) => inner.from_account_uid,
            Operation::Reward(inner) => inner.from_account_uid,
            Operation::RewardProxy(inner) => inner.from_account_uid,
            Operation::Buyout(inner) => inner.from_account_uid,
            Operation::LicenseCreate(inner) => inner.platform,
        }
    }

    /// The operation's serialized size in bytes, as counted by the fee
    /// model's size-proportional component.
    pub fn encoded_size(&self) -> usize {
        match self {
            Operation::PlatformCreate(inner) => inner.encoded_len(),
            Operation::PlatformUpdate(inner) => inner.encoded_len(),
            Operation::PlatformVoteUpdate(inner) => inner.encoded_len(),
            Operation::Post(inner) => inner.encoded_len(),
            Operation::PostUpdate(inner) => inner.encoded_len(),
            Operation::ScoreCreate(inner) => inner.encoded_len(),
            Operation::Reward(inner) => inner.encoded_len(),
            Operation::RewardProxy(inner) => inner.encoded_len(),
            Operation::Buyout(inner) => inner.encoded_len(),
            Operation::LicenseCreate(inner) => inner.encoded_len(),
        }
    }

    /// Structurally validate this operation under the given policy.
    pub fn validate(&self, policy: &ValidationPolicy) -> ValidationResult<()> {
        validation::validate(self, policy)
    }

    /// Compute this operation's fee against the given schedule.
    pub fn calculate_fee(&self, schedule: &FeeSchedule) -> Amount {
        schedule.calculate_fee(self)
    }

    /// The account uids whose active-tier authority must sign this
    /// operation.
    pub fn required_active_uid_authorities(&self) -> BTreeSet<AccountUid> {
        authority::required_active_uid_authorities(self)
    }

    /// The account uids whose secondary-tier authority must sign this
    /// operation.
    pub fn required_secondary_uid_authorities(&self) -> BTreeSet<AccountUid> {
        authority::required_secondary_uid_authorities(self)
    }
}

macro_rules! impl_from_operation {
    ($variant:ident, $inner:ty) => {
        impl From<$inner> for Operation {
            fn from(op: $inner) -> Self {
                Operation::$variant(op)
            }
        }
    };
}

impl_from_operation!(PlatformCreate, PlatformCreateOperation);
impl_from_operation!(PlatformUpdate, PlatformUpdateOperation);
impl_from_operation!(PlatformVoteUpdate, PlatformVoteUpdateOperation);
impl_from_operation!(Post, PostOperation);
impl_from_operation!(PostUpdate, PostUpdateOperation);
impl_from_operation!(ScoreCreate, ScoreCreateOperation);
impl_from_operation!(Reward, RewardOperation);
impl_from_operation!(RewardProxy, RewardProxyOperation);
impl_from_operation!(Buyout, BuyoutOperation);
impl_from_operation!(LicenseCreate, LicenseCreateOperation);
