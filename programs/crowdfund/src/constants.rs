use anchor_lang::prelude::*;

/// Seed prefixes for PDA derivation
#[constant]
pub const PROJECT_SEED_PREFIX: &[u8] = b"project";

#[constant]
pub const CONTRIBUTION_SEED_PREFIX: &[u8] = b"contribution";

/// Maximum byte length of a project title. The title doubles as a PDA seed,
/// so it must fit inside a single 32-byte seed component.
pub const MAX_TITLE_LEN: usize = 32;

/// Maximum byte length of a project description.
pub const MAX_DESCRIPTION_LEN: usize = 500;
