#![cfg(feature = "test-sbf")]

use {
    anchor_lang::{AccountDeserialize as _, Space as _},
    crowdfund::{
        state::Contribution,
        test_utils::{
            deserialize_project, funded_contributor, TestFixture, ONE_DAY,
            TEST_CONTRIBUTOR_LAMPORTS,
        },
        ID as CROWDFUND_PROGRAM_ID,
    },
};

#[test]
fn test_contribute_success() {
    let mut fixture = TestFixture::new();
    let created = fixture.create_project(fixture.now() + ONE_DAY);

    let (contributor, contributor_account) = funded_contributor();
    let amount = 250_000_000;

    let accepted = fixture.contribute(
        contributor,
        contributor_account,
        created.address,
        created.project_account,
        amount,
    );

    // Project state advances by exactly one contribution
    let project = deserialize_project(&accepted.project_account);
    assert_eq!(project.amount_collected, amount);
    assert_eq!(project.contribution_id_counter, 1);
    assert_eq!(project.closed_at, None);

    // Custody balance carries the rent reserve plus the contribution
    assert_eq!(
        accepted.project_account.lamports,
        fixture.project_rent_reserve() + amount
    );

    // Contribution receipt
    assert_eq!(accepted.contribution_account.owner, CROWDFUND_PROGRAM_ID);
    let contribution =
        Contribution::try_deserialize(&mut accepted.contribution_account.data.as_slice())
            .expect("Failed to deserialize Contribution state");
    assert_eq!(contribution.contributor, contributor);
    assert_eq!(contribution.project, created.address);
    assert_eq!(contribution.amount, amount);
    assert_eq!(contribution.created_at, fixture.now());

    // Contributor pays the amount plus the receipt's rent
    let contribution_rent = fixture
        .mollusk
        .sysvars
        .rent
        .minimum_balance(8 + Contribution::INIT_SPACE);
    assert_eq!(
        accepted.contributor_account.lamports,
        TEST_CONTRIBUTOR_LAMPORTS - amount - contribution_rent
    );

    println!("✅ Contribution state validation passed");
}

#[test]
fn test_contributions_accumulate() {
    let mut fixture = TestFixture::new();
    let created = fixture.create_project(fixture.now() + ONE_DAY);

    let (contributor, contributor_account) = funded_contributor();

    let first = fixture.contribute(
        contributor,
        contributor_account,
        created.address,
        created.project_account,
        100_000_000,
    );
    let second = fixture.contribute(
        contributor,
        first.contributor_account,
        created.address,
        first.project_account,
        300_000_000,
    );

    // Two distinct receipts, even for the same contributor
    assert_ne!(first.address, second.address);

    let project = deserialize_project(&second.project_account);
    assert_eq!(project.amount_collected, 400_000_000);
    assert_eq!(project.contribution_id_counter, 2);

    println!("✅ Accumulation validation passed");
}
