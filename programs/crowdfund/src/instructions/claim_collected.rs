use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::Project;

#[derive(Accounts)]
pub struct ClaimCollected<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ ErrorCode::Unauthorized,
    )]
    pub project: Account<'info, Project>,

    pub system_program: Program<'info, System>,
}

pub fn handle_claim_collected(ctx: Context<ClaimCollected>) -> Result<()> {
    let project = &mut ctx.accounts.project;
    let owner = &ctx.accounts.owner;

    require!(project.closed_at.is_none(), ErrorCode::AlreadyClosed);

    let now = Clock::get()?.unix_timestamp;
    require!(
        project.amount_collected >= project.amount_goal || now >= project.goal_expires_at,
        ErrorCode::TooEarlyToClaim
    );

    // Everything above the rent reserve is claimable; the reserve stays so
    // the closed project remains readable as a permanent record.
    let rent_reserve = Rent::get()?.minimum_balance(8 + Project::INIT_SPACE);
    let project_lamports = project.to_account_info().lamports();
    let claimable = project_lamports
        .checked_sub(rent_reserve)
        .ok_or(ErrorCode::InsufficientFundsToClaim)?;
    require!(claimable > 0, ErrorCode::InsufficientFundsToClaim);

    // The project PDA is program-owned, so lamports move by direct
    // mutation rather than a system program CPI.
    project.closed_at = Some(now);
    **project.to_account_info().try_borrow_mut_lamports()? -= claimable;
    **owner.to_account_info().try_borrow_mut_lamports()? += claimable;

    msg!(
        "Project {} closed: {} lamports claimed by {}",
        project.key(),
        claimable,
        owner.key()
    );

    Ok(())
}
