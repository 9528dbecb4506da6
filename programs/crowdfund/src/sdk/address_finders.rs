use anchor_lang::prelude::*;

use crate::{CONTRIBUTION_SEED_PREFIX, ID as CROWDFUND_PROGRAM_ID, PROJECT_SEED_PREFIX};

/// Derive the Project PDA for an owner/title pair. The same inputs always
/// produce the same address, so any party can recompute it.
pub fn find_project_address(owner: &Pubkey, title: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[title.as_bytes(), PROJECT_SEED_PREFIX, owner.as_ref()],
        &CROWDFUND_PROGRAM_ID,
    )
}

/// Derive the Contribution PDA. `contribution_id_counter` must be the
/// project's *current* counter value; deriving from a stale read yields an
/// address the program will reject.
pub fn find_contribution_address(
    contributor: &Pubkey,
    amount: u64,
    project: &Pubkey,
    contribution_id_counter: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CONTRIBUTION_SEED_PREFIX,
            contributor.as_ref(),
            amount.to_le_bytes().as_ref(),
            project.as_ref(),
            contribution_id_counter.to_le_bytes().as_ref(),
        ],
        &CROWDFUND_PROGRAM_ID,
    )
}
