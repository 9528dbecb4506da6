#![cfg(feature = "test-sbf")]

use {
    crowdfund::{
        error::ErrorCode,
        sdk::instruction_builders::build_claim_collected_ix,
        test_utils::{funded_contributor, TestFixture, ONE_DAY, TEST_GOAL, TEST_OWNER_LAMPORTS},
    },
    mollusk_svm::{program::keyed_account_for_system_program, result::Check},
    solana_sdk::{
        account::Account as SolanaAccount, program_error::ProgramError, pubkey::Pubkey,
        system_program::ID as SYSTEM_PROGRAM_ID,
    },
};

#[test]
fn test_claim_by_non_owner_error() {
    let mut fixture = TestFixture::new();
    let created = fixture.create_project(fixture.now() + ONE_DAY);

    // Fully fund the project so the only failing guard is ownership
    let (contributor, contributor_account) = funded_contributor();
    let accepted = fixture.contribute(
        contributor,
        contributor_account,
        created.address,
        created.project_account,
        TEST_GOAL,
    );

    let intruder = Pubkey::new_unique();
    let (claim_ix, _, _) = build_claim_collected_ix(intruder, created.address)
        .expect("Failed to build claim_collected instruction");

    fixture.mollusk.process_and_validate_instruction(
        &claim_ix,
        &[
            keyed_account_for_system_program(),
            (
                intruder,
                SolanaAccount::new(TEST_OWNER_LAMPORTS, 0, &SYSTEM_PROGRAM_ID),
            ),
            (created.address, accepted.project_account),
        ],
        &[Check::err(ProgramError::Custom(
            u32::from(ErrorCode::Unauthorized),
        ))],
    );

    println!("✅ Unauthorized correctly triggered");
}
