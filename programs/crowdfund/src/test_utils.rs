#![cfg(feature = "testing")]

use {
    crate::{
        sdk::{
            address_finders::find_project_address,
            instruction_builders::{
                build_claim_collected_ix, build_contribute_ix, build_initialize_project_ix,
            },
        },
        state::Project,
        ID as CROWDFUND_PROGRAM_ID,
    },
    anchor_lang::{AccountDeserialize as _, Space as _},
    mollusk_svm::{program::keyed_account_for_system_program, result::Check, Mollusk},
    solana_sdk::{
        account::Account as SolanaAccount,
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        system_program::ID as SYSTEM_PROGRAM_ID,
    },
};

/// Standard test constants
pub const TEST_OWNER_LAMPORTS: u64 = 1_000_000_000; // 1 SOL
pub const TEST_CONTRIBUTOR_LAMPORTS: u64 = 5_000_000_000; // 5 SOL
pub const TEST_GOAL: u64 = 1_000_000_000; // 1 SOL
pub const TEST_CLOCK_START: i64 = 1_735_689_600; // 2025-01-01T00:00:00Z
pub const ONE_DAY: i64 = 86_400;

pub const TEST_TITLE: &str = "solar well";
pub const TEST_DESCRIPTION: &str = "A solar-powered water well for the village square.";

/// Test fixture containing common test setup
pub struct TestFixture {
    pub mollusk: Mollusk,
    pub owner_keypair: Keypair,
    pub owner_address: Pubkey,
}

impl TestFixture {
    /// Create a new test fixture with the ledger clock at a fixed, known
    /// timestamp so expiry arithmetic in tests is deterministic.
    pub fn new() -> Self {
        let mut mollusk = Mollusk::new(&CROWDFUND_PROGRAM_ID, "crowdfund");
        mollusk.sysvars.clock.unix_timestamp = TEST_CLOCK_START;

        let owner_keypair = Keypair::new();
        let owner_address = owner_keypair.pubkey();

        Self {
            mollusk,
            owner_keypair,
            owner_address,
        }
    }

    pub fn now(&self) -> i64 {
        self.mollusk.sysvars.clock.unix_timestamp
    }

    pub fn warp_to(&mut self, unix_timestamp: i64) {
        self.mollusk.sysvars.clock.unix_timestamp = unix_timestamp;
    }

    /// Rent-exempt reserve a Project account keeps forever.
    pub fn project_rent_reserve(&self) -> u64 {
        self.mollusk
            .sysvars
            .rent
            .minimum_balance(8 + Project::INIT_SPACE)
    }

    /// Initialize a project with the standard title/goal and return the
    /// resulting accounts.
    pub fn create_project(&mut self, goal_expires_at: i64) -> CreatedProject {
        self.create_project_with(
            TEST_TITLE.to_string(),
            TEST_DESCRIPTION.to_string(),
            TEST_GOAL,
            goal_expires_at,
        )
    }

    pub fn create_project_with(
        &mut self,
        title: String,
        description: String,
        amount_goal: u64,
        goal_expires_at: i64,
    ) -> CreatedProject {
        let (project_address, project_bump) = find_project_address(&self.owner_address, &title);

        let (initialize_project_ix, _, _) = build_initialize_project_ix(
            self.owner_address,
            title,
            description,
            amount_goal,
            goal_expires_at,
        )
        .expect("Failed to build initialize_project instruction");

        let keyed_account_for_owner = (
            self.owner_address,
            SolanaAccount::new(TEST_OWNER_LAMPORTS, 0, &SYSTEM_PROGRAM_ID),
        );

        let keyed_account_for_project = (
            project_address,
            SolanaAccount::new(0, 0, &SYSTEM_PROGRAM_ID),
        );

        let result = self.mollusk.process_and_validate_instruction(
            &initialize_project_ix,
            &[
                keyed_account_for_system_program(),
                keyed_account_for_owner,
                keyed_account_for_project,
            ],
            &[
                Check::success(), //
            ],
        );

        println!(
            "Project initialized - CU consumed: {}, execution time: {}",
            result.compute_units_consumed, result.execution_time
        );

        let owner_account = result
            .get_account(&self.owner_address)
            .expect("Owner account not found")
            .clone();

        let project_account = result
            .get_account(&project_address)
            .expect("Project account not found")
            .clone();

        CreatedProject {
            address: project_address,
            bump: project_bump,
            owner_account,
            project_account,
        }
    }

    /// Contribute to a project, reading the live counter out of the
    /// supplied project account before deriving the Contribution address.
    pub fn contribute(
        &mut self,
        contributor: Pubkey,
        contributor_account: SolanaAccount,
        project_address: Pubkey,
        project_account: SolanaAccount,
        amount: u64,
    ) -> AcceptedContribution {
        let project_state = deserialize_project(&project_account);

        let (contribute_ix, ix_accounts, _) = build_contribute_ix(
            contributor,
            project_address,
            amount,
            project_state.contribution_id_counter,
        )
        .expect("Failed to build contribute instruction");

        let result = self.mollusk.process_and_validate_instruction(
            &contribute_ix,
            &[
                keyed_account_for_system_program(),
                (contributor, contributor_account),
                (project_address, project_account),
                (
                    ix_accounts.contribution,
                    SolanaAccount::new(0, 0, &SYSTEM_PROGRAM_ID),
                ),
            ],
            &[
                Check::success(), //
            ],
        );

        println!(
            "Contribution accepted - CU consumed: {}, execution time: {}",
            result.compute_units_consumed, result.execution_time
        );

        AcceptedContribution {
            address: ix_accounts.contribution,
            contributor_account: result
                .get_account(&contributor)
                .expect("Contributor account not found")
                .clone(),
            project_account: result
                .get_account(&project_address)
                .expect("Project account not found")
                .clone(),
            contribution_account: result
                .get_account(&ix_accounts.contribution)
                .expect("Contribution account not found")
                .clone(),
        }
    }

    /// Claim with the fixture's owner and return the post-claim accounts.
    pub fn claim(
        &mut self,
        owner_account: SolanaAccount,
        project_address: Pubkey,
        project_account: SolanaAccount,
    ) -> ClaimOutcome {
        let (claim_ix, _, _) = build_claim_collected_ix(self.owner_address, project_address)
            .expect("Failed to build claim_collected instruction");

        let result = self.mollusk.process_and_validate_instruction(
            &claim_ix,
            &[
                keyed_account_for_system_program(),
                (self.owner_address, owner_account),
                (project_address, project_account),
            ],
            &[
                Check::success(), //
            ],
        );

        println!(
            "Claim processed - CU consumed: {}, execution time: {}",
            result.compute_units_consumed, result.execution_time
        );

        ClaimOutcome {
            owner_account: result
                .get_account(&self.owner_address)
                .expect("Owner account not found")
                .clone(),
            project_account: result
                .get_account(&project_address)
                .expect("Project account not found")
                .clone(),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of project initialization
pub struct CreatedProject {
    pub address: Pubkey,
    pub bump: u8,
    pub owner_account: SolanaAccount,
    pub project_account: SolanaAccount,
}

/// Result of an accepted contribution
pub struct AcceptedContribution {
    pub address: Pubkey,
    pub contributor_account: SolanaAccount,
    pub project_account: SolanaAccount,
    pub contribution_account: SolanaAccount,
}

/// Result of a successful claim
pub struct ClaimOutcome {
    pub owner_account: SolanaAccount,
    pub project_account: SolanaAccount,
}

pub fn deserialize_project(account: &SolanaAccount) -> Project {
    Project::try_deserialize(&mut account.data.as_slice())
        .expect("Failed to deserialize Project state")
}

/// A funded system account for use as a contributor.
pub fn funded_contributor() -> (Pubkey, SolanaAccount) {
    (
        Pubkey::new_unique(),
        SolanaAccount::new(TEST_CONTRIBUTOR_LAMPORTS, 0, &SYSTEM_PROGRAM_ID),
    )
}
