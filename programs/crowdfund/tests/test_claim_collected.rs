#![cfg(feature = "test-sbf")]

use crowdfund::test_utils::{
    deserialize_project, funded_contributor, TestFixture, ONE_DAY, TEST_GOAL,
};

#[test]
fn test_claim_after_goal_reached() {
    let mut fixture = TestFixture::new();
    let created = fixture.create_project(fixture.now() + ONE_DAY);

    let (contributor, contributor_account) = funded_contributor();
    let accepted = fixture.contribute(
        contributor,
        contributor_account,
        created.address,
        created.project_account,
        TEST_GOAL,
    );

    let owner_lamports_before = created.owner_account.lamports;

    let outcome = fixture.claim(
        created.owner_account,
        created.address,
        accepted.project_account,
    );

    // Owner receives exactly the contributed lamports
    assert_eq!(
        outcome.owner_account.lamports,
        owner_lamports_before + TEST_GOAL
    );

    // Custody balance drops back to the rent reserve
    assert_eq!(
        outcome.project_account.lamports,
        fixture.project_rent_reserve()
    );

    // The project is closed but keeps its accounting history
    let project = deserialize_project(&outcome.project_account);
    assert_eq!(project.closed_at, Some(fixture.now()));
    assert_eq!(
        project.amount_collected, TEST_GOAL,
        "claiming must not touch amount_collected"
    );
    assert_eq!(project.contribution_id_counter, 1);

    println!("✅ Goal-reached claim validation passed");
}

#[test]
fn test_claim_after_deadline_with_partial_funding() {
    let mut fixture = TestFixture::new();
    let goal_expires_at = fixture.now() + ONE_DAY;
    let created = fixture.create_project(goal_expires_at);

    let partial = TEST_GOAL / 2;
    let (contributor, contributor_account) = funded_contributor();
    let accepted = fixture.contribute(
        contributor,
        contributor_account,
        created.address,
        created.project_account,
        partial,
    );

    // Deadline reached with the goal unmet: claim is still allowed
    fixture.warp_to(goal_expires_at);

    let owner_lamports_before = created.owner_account.lamports;
    let outcome = fixture.claim(
        created.owner_account,
        created.address,
        accepted.project_account,
    );

    assert_eq!(
        outcome.owner_account.lamports,
        owner_lamports_before + partial
    );

    let project = deserialize_project(&outcome.project_account);
    assert_eq!(project.closed_at, Some(goal_expires_at));
    assert_eq!(project.amount_collected, partial);

    println!("✅ Deadline claim validation passed");
}
