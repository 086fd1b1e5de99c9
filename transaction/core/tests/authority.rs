// Copyright (c) 2024-2026 The Plume Foundation

//! Tests of required signing-authority resolution.

use plm_transaction_core::{
    AccountUid, Amount, BuyoutOperation, LicenseCreateOperation, LicenseLid, Operation,
    PlatformCreateOperation, PlatformUpdateOperation, PlatformVoteUpdateOperation, PostOperation,
    PostPid, PostUpdateExt, PostUpdateOperation, RewardOperation, RewardProxyOperation,
    ScoreCreateOperation,
};
use std::collections::BTreeSet;

const PLATFORM: AccountUid = AccountUid(10);
const POSTER: AccountUid = AccountUid(20);
const SENDER: AccountUid = AccountUid(30);

fn uids<const N: usize>(uids: [AccountUid; N]) -> BTreeSet<AccountUid> {
    BTreeSet::from(uids)
}

fn post_update() -> PostUpdateOperation {
    PostUpdateOperation {
        fee: Amount::core(1),
        platform: PLATFORM,
        poster: POSTER,
        post_pid: PostPid(1),
        hash_value: None,
        extra_data: None,
        title: None,
        body: None,
        ext: None,
    }
}

#[test]
fn platform_registration_signs_at_the_active_tier() {
    let create = Operation::from(PlatformCreateOperation {
        fee: Amount::core(1),
        account: AccountUid(100),
        pledge: Amount::core(10_000),
        name: "example".into(),
        url: "https://example.net".into(),
        extra_data: String::new(),
        extensions: vec![],
    });
    assert_eq!(create.required_active_uid_authorities(), uids([AccountUid(100)]));
    assert_eq!(create.required_secondary_uid_authorities(), uids([]));
    assert_eq!(create.fee_payer_uid(), AccountUid(100));

    let update = Operation::from(PlatformUpdateOperation {
        fee: Amount::core(1),
        account: AccountUid(100),
        new_pledge: None,
        new_name: None,
        new_url: Some("https://example.org".into()),
        new_extra_data: None,
        extensions: vec![],
    });
    assert_eq!(update.required_active_uid_authorities(), uids([AccountUid(100)]));
    assert_eq!(update.required_secondary_uid_authorities(), uids([]));
}

#[test]
fn vote_update_requires_the_voter_active_authority() {
    let op = Operation::from(PlatformVoteUpdateOperation {
        fee: Amount::core(1),
        voter: AccountUid(1),
        platform_to_add: vec![10, 20],
        platform_to_remove: vec![],
        extensions: vec![],
    });
    assert_eq!(op.required_active_uid_authorities(), uids([AccountUid(1)]));
    assert_eq!(op.required_secondary_uid_authorities(), uids([]));
    assert_eq!(op.fee_payer_uid(), AccountUid(1));
}

#[test]
fn publishing_requires_poster_and_platform_secondary_authority() {
    let op = Operation::from(PostOperation {
        fee: Amount::core(1),
        post_pid: PostPid(1),
        platform: PLATFORM,
        poster: POSTER,
        origin_poster: None,
        origin_post_pid: None,
        origin_platform: None,
        hash_value: "abc123".into(),
        extra_data: String::new(),
        title: "title".into(),
        body: "body".into(),
        ext: None,
    });
    assert_eq!(op.required_active_uid_authorities(), uids([]));
    assert_eq!(op.required_secondary_uid_authorities(), uids([POSTER, PLATFORM]));
    assert_eq!(op.fee_payer_uid(), POSTER);
}

#[test]
fn content_edit_adds_the_poster_to_the_update_signers() {
    let op = Operation::from(PostUpdateOperation {
        title: Some("new title".into()),
        ..post_update()
    });
    assert_eq!(op.required_active_uid_authorities(), uids([]));
    assert_eq!(op.required_secondary_uid_authorities(), uids([PLATFORM, POSTER]));
}

#[test]
fn permission_only_update_needs_only_the_platform() {
    let op = Operation::from(PostUpdateOperation {
        ext: Some(PostUpdateExt {
            permission_flags: Some(0x0003),
            ..PostUpdateExt::default()
        }),
        ..post_update()
    });
    assert_eq!(op.required_secondary_uid_authorities(), uids([PLATFORM]));
}

#[test]
fn forward_price_change_needs_the_poster() {
    let op = Operation::from(PostUpdateOperation {
        ext: Some(PostUpdateExt {
            forward_price: Some(1_000),
            ..PostUpdateExt::default()
        }),
        ..post_update()
    });
    assert_eq!(op.required_secondary_uid_authorities(), uids([PLATFORM, POSTER]));
}

#[test]
fn named_receiptor_co_signs_its_terms() {
    let receiptor = AccountUid(40);
    let op = Operation::from(PostUpdateOperation {
        ext: Some(PostUpdateExt {
            receiptor: Some(receiptor),
            to_buyout: Some(true),
            buyout_ratio: Some(1_000),
            buyout_price: Some(500),
            ..PostUpdateExt::default()
        }),
        ..post_update()
    });
    assert_eq!(
        op.required_secondary_uid_authorities(),
        uids([PLATFORM, receiptor]),
    );
}

#[test]
fn coinciding_signers_collapse_into_one() {
    // The poster is also the named receiptor; the set holds it once.
    let op = Operation::from(PostUpdateOperation {
        title: Some("new title".into()),
        ext: Some(PostUpdateExt {
            receiptor: Some(POSTER),
            ..PostUpdateExt::default()
        }),
        ..post_update()
    });
    assert_eq!(op.required_secondary_uid_authorities(), uids([PLATFORM, POSTER]));
}

#[test]
fn social_kinds_require_sender_and_platform_secondary_authority() {
    let score = Operation::from(ScoreCreateOperation {
        fee: Amount::core(1),
        from_account_uid: SENDER,
        platform: PLATFORM,
        poster: POSTER,
        post_pid: PostPid(1),
        score: 3,
        csaf: 1000,
        extensions: vec![],
    });
    assert_eq!(score.required_active_uid_authorities(), uids([]));
    assert_eq!(score.required_secondary_uid_authorities(), uids([SENDER, PLATFORM]));
    assert_eq!(score.fee_payer_uid(), SENDER);

    let proxy = Operation::from(RewardProxyOperation {
        fee: Amount::core(1),
        from_account_uid: SENDER,
        platform: PLATFORM,
        poster: POSTER,
        post_pid: PostPid(1),
        amount: 100,
        extensions: vec![],
    });
    assert_eq!(proxy.required_active_uid_authorities(), uids([]));
    assert_eq!(proxy.required_secondary_uid_authorities(), uids([SENDER, PLATFORM]));

    let buyout = Operation::from(BuyoutOperation {
        fee: Amount::core(1),
        from_account_uid: SENDER,
        platform: PLATFORM,
        poster: POSTER,
        post_pid: PostPid(1),
        receiptor_account_uid: AccountUid(40),
        extensions: vec![],
    });
    assert_eq!(buyout.required_active_uid_authorities(), uids([]));
    assert_eq!(buyout.required_secondary_uid_authorities(), uids([SENDER, PLATFORM]));
}

#[test]
fn direct_reward_signs_at_the_active_tier() {
    let op = Operation::from(RewardOperation {
        fee: Amount::core(1),
        from_account_uid: SENDER,
        platform: PLATFORM,
        poster: POSTER,
        post_pid: PostPid(1),
        amount: Amount::core(500),
        extensions: vec![],
    });
    assert_eq!(op.required_active_uid_authorities(), uids([SENDER]));
    assert_eq!(op.required_secondary_uid_authorities(), uids([]));
    assert_eq!(op.fee_payer_uid(), SENDER);
}

#[test]
fn license_create_signs_as_the_platform() {
    let op = Operation::from(LicenseCreateOperation {
        fee: Amount::core(1),
        license_lid: LicenseLid(1),
        platform: PLATFORM,
        license_type: 1,
        hash_value: "abc123".into(),
        extra_data: String::new(),
        title: "CC-BY".into(),
        body: String::new(),
        extensions: vec![],
    });
    assert_eq!(op.required_active_uid_authorities(), uids([PLATFORM]));
    assert_eq!(op.required_secondary_uid_authorities(), uids([]));
    assert_eq!(op.fee_payer_uid(), PLATFORM);
}

#[test]
fn authority_resolution_is_deterministic_and_sorted() {
    let op = Operation::from(PostUpdateOperation {
        title: Some("new title".into()),
        ext: Some(PostUpdateExt {
            receiptor: Some(AccountUid(5)),
            ..PostUpdateExt::default()
        }),
        ..post_update()
    });
    let first = op.required_secondary_uid_authorities();
    let second = op.required_secondary_uid_authorities();
    assert_eq!(first, second);

    let ordered: Vec<_> = first.iter().copied().collect();
    assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ordered, vec![AccountUid(5), PLATFORM, POSTER]);
}
