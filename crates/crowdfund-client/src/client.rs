/*!
# Crowdfund Client Implementation

Read-side client over a Solana RPC endpoint: fetch single accounts by derived
address and enumerate program accounts for listings.
*/

use crate::errors::{ClientError, ClientResult};
use anchor_lang::{AccountDeserialize, Discriminator};
use crowdfund::sdk::address_finders::find_project_address;
use crowdfund::ID as CROWDFUND_PROGRAM_ID;
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, RpcFilterType},
};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

// Re-export the program account types
pub use crowdfund::state::{Contribution, Project};

/// Byte offset of `Contribution.project` within the serialized account:
/// 8-byte discriminator, then the 32-byte contributor pubkey.
const CONTRIBUTION_PROJECT_OFFSET: usize = 8 + 32;

/// Read-only client for crowdfund program accounts
pub struct CrowdfundClient {
    rpc_client: RpcClient,
}

impl CrowdfundClient {
    /// Create new client with default commitment (confirmed)
    pub fn new(rpc_url: String) -> Self {
        Self::new_with_commitment(rpc_url, CommitmentConfig::confirmed())
    }

    /// Create new client with specific commitment level
    pub fn new_with_commitment(rpc_url: String, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_client: RpcClient::new_with_commitment(rpc_url, commitment),
        }
    }

    // ================================================================================================
    // Single-account fetches
    // ================================================================================================

    /// Get a project by its owner/title pair, deriving the address locally
    pub fn get_project(&self, owner: &Pubkey, title: &str) -> ClientResult<Option<Project>> {
        let (project_address, _) = find_project_address(owner, title);
        self.get_project_by_address(&project_address)
    }

    /// Get a project account by address
    pub fn get_project_by_address(&self, address: &Pubkey) -> ClientResult<Option<Project>> {
        match self.get_optional_account_data(address)? {
            Some(data) => Ok(Some(deserialize_account::<Project>(&data)?)),
            None => Ok(None),
        }
    }

    /// Get a contribution account by address
    pub fn get_contribution_by_address(
        &self,
        address: &Pubkey,
    ) -> ClientResult<Option<Contribution>> {
        match self.get_optional_account_data(address)? {
            Some(data) => Ok(Some(deserialize_account::<Contribution>(&data)?)),
            None => Ok(None),
        }
    }

    /// Current contribution_id_counter for a project, for deriving the next
    /// Contribution address. Returns `AccountNotFound` if the project does
    /// not exist.
    pub fn get_contribution_id_counter(&self, project_address: &Pubkey) -> ClientResult<u64> {
        let project = self
            .get_project_by_address(project_address)?
            .ok_or_else(|| ClientError::AccountNotFound(project_address.to_string()))?;
        Ok(project.contribution_id_counter)
    }

    // ================================================================================================
    // Listings
    // ================================================================================================

    /// Enumerate every project account, keyed by address
    pub fn list_projects(&self) -> ClientResult<Vec<(Pubkey, Project)>> {
        self.list_accounts::<Project>(vec![discriminator_filter(Project::DISCRIMINATOR)])
    }

    /// Enumerate every contribution account, keyed by address
    pub fn list_contributions(&self) -> ClientResult<Vec<(Pubkey, Contribution)>> {
        self.list_accounts::<Contribution>(vec![discriminator_filter(Contribution::DISCRIMINATOR)])
    }

    /// Enumerate the contributions recorded against one project
    pub fn list_contributions_for_project(
        &self,
        project: &Pubkey,
    ) -> ClientResult<Vec<(Pubkey, Contribution)>> {
        self.list_accounts::<Contribution>(vec![
            discriminator_filter(Contribution::DISCRIMINATOR),
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                CONTRIBUTION_PROJECT_OFFSET,
                project.as_ref(),
            )),
        ])
    }

    fn list_accounts<T: AccountDeserialize>(
        &self,
        filters: Vec<RpcFilterType>,
    ) -> ClientResult<Vec<(Pubkey, T)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(filters),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.rpc_client.commitment()),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };

        let accounts = self
            .rpc_client
            .get_program_accounts_with_config(&CROWDFUND_PROGRAM_ID, config)?;

        accounts
            .into_iter()
            .map(|(address, account)| Ok((address, deserialize_account::<T>(&account.data)?)))
            .collect()
    }

    fn get_optional_account_data(&self, address: &Pubkey) -> ClientResult<Option<Vec<u8>>> {
        match self.rpc_client.get_account_data(address) {
            Ok(data) => Ok(Some(data)),
            Err(solana_client::client_error::ClientError {
                kind:
                    solana_client::client_error::ClientErrorKind::RpcError(
                        solana_client::rpc_request::RpcError::RpcResponseError { .. }
                        | solana_client::rpc_request::RpcError::ForUser(_),
                    ),
                ..
            }) => Ok(None), // Account doesn't exist
            Err(e) => Err(ClientError::Rpc(e)),
        }
    }
}

fn discriminator_filter(discriminator: &[u8]) -> RpcFilterType {
    RpcFilterType::Memcmp(Memcmp::new_base58_encoded(0, discriminator))
}

fn deserialize_account<T: AccountDeserialize>(data: &[u8]) -> ClientResult<T> {
    if data.len() < 8 {
        return Err(ClientError::InvalidAccountData(
            "Account data too short for discriminator".to_string(),
        ));
    }

    T::try_deserialize(&mut &data[..])
        .map_err(|e| ClientError::InvalidAccountData(format!("Failed to deserialize: {}", e)))
}
