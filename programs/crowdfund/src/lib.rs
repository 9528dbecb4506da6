pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

#[cfg(any(feature = "sdk", test))]
pub mod sdk;

#[cfg(feature = "testing")]
pub mod test_utils;

pub use constants::{
    CONTRIBUTION_SEED_PREFIX, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, PROJECT_SEED_PREFIX,
};
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("3HdnM3GsSNkDnB5Xb87gPL8dQZFm5txyjmwSgCCeQamH");

#[program]
pub mod crowdfund {
    use super::instructions;
    use super::*;

    // owner
    pub fn initialize_project(
        ctx: Context<InitializeProject>,
        title: String,
        description: String,
        amount_goal: u64,
        goal_expires_at: i64,
    ) -> Result<()> {
        instructions::handle_initialize_project(ctx, title, description, amount_goal, goal_expires_at)
    }

    // contributor
    pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
        instructions::handle_contribute(ctx, amount)
    }

    // owner
    pub fn claim_collected(ctx: Context<ClaimCollected>) -> Result<()> {
        instructions::handle_claim_collected(ctx)
    }
}
