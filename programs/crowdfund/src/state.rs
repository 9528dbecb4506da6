use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

#[account] // seed [title, PROJECT_SEED_PREFIX, owner]
#[derive(InitSpace)]
pub struct Project {
    /// The owner (authority) pubkey for this project. Sole claimant.
    pub owner: Pubkey,

    /// Project title. Immutable; part of the Project PDA seeds.
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,

    /// Free-form project description. Immutable after creation.
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    /// Funding goal in lamports. Always > 0.
    pub amount_goal: u64,

    /// Sum of all accepted contributions in lamports. Never decremented;
    /// claiming leaves it in place as a historical record.
    pub amount_collected: u64,

    /// Unix timestamp after which the owner may claim regardless of the goal.
    pub goal_expires_at: i64,

    /// Set exactly once by claim_collected. Non-None means the project is
    /// closed and accepts no further contributions or claims.
    pub closed_at: Option<i64>,

    /// Unix timestamp of project creation, from the ledger clock.
    pub created_at: i64,

    /// Bump seed for the Project PDA.
    pub bump: u8,

    /// Incremented by 1 on every accepted contribution. Feeds the
    /// Contribution PDA seeds, which serializes concurrent contributors.
    pub contribution_id_counter: u64,
}

#[account] // seed [CONTRIBUTION_SEED_PREFIX, contributor, amount_le, project, counter_le]
#[derive(InitSpace)]
pub struct Contribution {
    /// The contributor who signed and funded this contribution.
    pub contributor: Pubkey,

    /// Pubkey of the Project this contribution was made to. Lookup-only
    /// back-reference.
    pub project: Pubkey,

    /// Contributed amount in lamports. Always > 0.
    pub amount: u64,

    /// Unix timestamp of when the contribution was accepted.
    pub created_at: i64,

    /// Bump seed for the Contribution PDA.
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Space as _;

    // The Contribution layout is fixed, so off-chain listing filters can
    // memcmp the project back-reference at a known offset.
    #[test]
    fn contribution_project_field_sits_after_contributor() {
        assert_eq!(std::mem::size_of::<Pubkey>(), 32);
        assert_eq!(Contribution::INIT_SPACE, 32 + 32 + 8 + 8 + 1);
    }

    #[test]
    fn project_space_accounts_for_bounded_strings() {
        // Pubkey + (len + title) + (len + description) + goal + collected
        // + expiry + Option<i64> + created_at + bump + counter
        let expected = 32 + (4 + 32) + (4 + 500) + 8 + 8 + 8 + (1 + 8) + 8 + 1 + 8;
        assert_eq!(Project::INIT_SPACE, expected);
    }
}
