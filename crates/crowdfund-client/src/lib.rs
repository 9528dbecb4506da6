/*!
# Crowdfund Client

Read-side client for the crowdfund program. The on-chain program holds the
state transitions; this crate covers everything a listing front-end needs
from the outside:

- **Address derivation**: re-exported `find_project_address` /
  `find_contribution_address` so callers can derive accounts locally.
- **Instruction building**: re-exported builders producing ready-to-sign
  `Instruction`s.
- **Account fetches**: `Option`-returning getters plus whole-program
  enumeration for project and contribution listings.

Transaction signing, submission, and confirmation polling are deliberately
out of scope; callers bring their own wallet and submission flow.

## Usage

```rust,no_run
use crowdfund_client::{ClientResult, CrowdfundClient};
use solana_sdk::pubkey::Pubkey;

fn example(owner: Pubkey) -> ClientResult<()> {
    let client = CrowdfundClient::new("https://api.devnet.solana.com".to_string());

    if let Some(project) = client.get_project(&owner, "solar well")? {
        println!(
            "collected {} of {} lamports",
            project.amount_collected, project.amount_goal
        );
    }

    for (address, project) in client.list_projects()? {
        println!("{}: {}", address, project.title);
    }

    Ok(())
}
```
*/

pub mod client;
pub mod errors;

// Re-export main types for convenience
pub use client::{Contribution, CrowdfundClient, Project};
pub use errors::{ClientError, ClientResult};

// Re-export derivation and instruction building from the program SDK
pub use crowdfund::sdk::{
    build_claim_collected_ix, build_contribute_ix, build_initialize_project_ix,
    find_contribution_address, find_project_address,
};
