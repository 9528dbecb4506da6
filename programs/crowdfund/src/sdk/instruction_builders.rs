use anchor_lang::solana_program::{
    instruction::Instruction, system_program::ID as SYSTEM_PROGRAM_ID,
};
use anchor_lang::{prelude::*, InstructionData as _};

use crate::sdk::address_finders::{find_contribution_address, find_project_address};
use crate::ID as CROWDFUND_PROGRAM_ID;

pub fn build_initialize_project_ix(
    owner: Pubkey,
    title: String,
    description: String,
    amount_goal: u64,
    goal_expires_at: i64,
) -> Result<(
    Instruction,
    crate::accounts::InitializeProject,
    crate::instruction::InitializeProject,
)> {
    let (project, _) = find_project_address(&owner, &title);

    let ix_accounts = crate::accounts::InitializeProject {
        owner,
        project,
        system_program: SYSTEM_PROGRAM_ID,
    };

    let ix_data = crate::instruction::InitializeProject {
        title,
        description,
        amount_goal,
        goal_expires_at,
    };

    let ix = Instruction {
        program_id: CROWDFUND_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

/// `contribution_id_counter` must come from a fresh read of the project
/// account, otherwise the derived Contribution address will not match.
pub fn build_contribute_ix(
    contributor: Pubkey,
    project: Pubkey,
    amount: u64,
    contribution_id_counter: u64,
) -> Result<(
    Instruction,
    crate::accounts::Contribute,
    crate::instruction::Contribute,
)> {
    let (contribution, _) =
        find_contribution_address(&contributor, amount, &project, contribution_id_counter);

    let ix_accounts = crate::accounts::Contribute {
        contributor,
        project,
        contribution,
        system_program: SYSTEM_PROGRAM_ID,
    };

    let ix_data = crate::instruction::Contribute { amount };

    let ix = Instruction {
        program_id: CROWDFUND_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_claim_collected_ix(
    owner: Pubkey,
    project: Pubkey,
) -> Result<(
    Instruction,
    crate::accounts::ClaimCollected,
    crate::instruction::ClaimCollected,
)> {
    let ix_accounts = crate::accounts::ClaimCollected {
        owner,
        project,
        system_program: SYSTEM_PROGRAM_ID,
    };

    let ix_data = crate::instruction::ClaimCollected {};

    let ix = Instruction {
        program_id: CROWDFUND_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}
