use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, PROJECT_SEED_PREFIX};
use crate::error::ErrorCode;
use crate::state::Project;

#[derive(Accounts)]
#[instruction(title: String)]
pub struct InitializeProject<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Project::INIT_SPACE,
        seeds = [
            title.as_bytes(),
            PROJECT_SEED_PREFIX,
            owner.key().as_ref(),
        ],
        bump
    )]
    pub project: Account<'info, Project>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_project(
    ctx: Context<InitializeProject>,
    title: String,
    description: String,
    amount_goal: u64,
    goal_expires_at: i64,
) -> Result<()> {
    require!(title.len() <= MAX_TITLE_LEN, ErrorCode::TitleTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        ErrorCode::DescriptionTooLong
    );
    require!(amount_goal > 0, ErrorCode::GoalMustBeGreaterThanZero);

    let now = Clock::get()?.unix_timestamp;
    require!(
        goal_expires_at > now,
        ErrorCode::ExpiresAtMustBeGreaterThanNow
    );

    let project = &mut ctx.accounts.project;
    project.set_inner(Project {
        owner: ctx.accounts.owner.key(),
        title,
        description,
        amount_goal,
        amount_collected: 0,
        goal_expires_at,
        closed_at: None,
        created_at: now,
        bump: ctx.bumps.project,
        contribution_id_counter: 0,
    });

    msg!("Project initialized: {}", project.key());

    Ok(())
}
