use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::CONTRIBUTION_SEED_PREFIX;
use crate::error::ErrorCode;
use crate::state::{Contribution, Project};

#[derive(Accounts)]
#[instruction(amount: u64)]
pub struct Contribute<'info> {
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(mut)]
    pub project: Account<'info, Project>,

    /// The per-contribution receipt PDA. Its seeds include the project's
    /// live contribution_id_counter, so a contributor racing another one
    /// derives a stale address and is rejected here by the seeds check
    /// before the handler runs.
    #[account(
        init,
        payer = contributor,
        space = 8 + Contribution::INIT_SPACE,
        seeds = [
            CONTRIBUTION_SEED_PREFIX,
            contributor.key().as_ref(),
            amount.to_le_bytes().as_ref(),
            project.key().as_ref(),
            project.contribution_id_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub contribution: Account<'info, Contribution>,

    pub system_program: Program<'info, System>,
}

pub fn handle_contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
    let project = &mut ctx.accounts.project;

    require!(project.closed_at.is_none(), ErrorCode::AlreadyClosed);
    require!(amount > 0, ErrorCode::AmountMustBeGreaterThanZero);

    let contribution = &mut ctx.accounts.contribution;
    contribution.set_inner(Contribution {
        contributor: ctx.accounts.contributor.key(),
        project: project.key(),
        amount,
        created_at: Clock::get()?.unix_timestamp,
        bump: ctx.bumps.contribution,
    });

    project.contribution_id_counter = project
        .contribution_id_counter
        .checked_add(1)
        .ok_or(ErrorCode::NumericOverflow)?;
    project.amount_collected = project
        .amount_collected
        .checked_add(amount)
        .ok_or(ErrorCode::NumericOverflow)?;

    // Move the contributed lamports into the project's custody balance.
    // The contributor is system-owned, so this has to go through a CPI.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.contributor.to_account_info(),
                to: project.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!(
        "Contribution {} accepted: {} lamports to project {}",
        project.contribution_id_counter - 1,
        amount,
        project.key()
    );

    Ok(())
}
