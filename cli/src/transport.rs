use std::thread::sleep;
use std::time::Duration;

use solana_client::client_error::ClientError;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

/// The network-facing surface the pipeline needs. One implementation wraps
/// the blocking [`RpcClient`]; tests substitute an in-memory ledger.
pub trait LedgerTransport {
    /// Fetches raw account state; `None` means the address has no account.
    fn fetch_account(&self, address: &Pubkey) -> Result<Option<Account>, ClientError>;

    fn balance(&self, address: &Pubkey) -> Result<u64, ClientError>;

    /// Rent-exempt minimum for an account of `space` bytes.
    fn minimum_balance(&self, space: usize) -> Result<u64, ClientError>;

    /// Airdrops `lamports` to `address` and waits for confirmation.
    fn request_funding(&self, address: &Pubkey, lamports: u64) -> Result<(), ClientError>;

    /// Signs a single transaction with `payer`, submits it and blocks until
    /// the network confirms or rejects it.
    fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
    ) -> Result<Signature, ClientError>;
}

impl LedgerTransport for RpcClient {
    fn fetch_account(&self, address: &Pubkey) -> Result<Option<Account>, ClientError> {
        Ok(self
            .get_account_with_commitment(address, self.commitment())?
            .value)
    }

    fn balance(&self, address: &Pubkey) -> Result<u64, ClientError> {
        self.get_balance(address)
    }

    fn minimum_balance(&self, space: usize) -> Result<u64, ClientError> {
        self.get_minimum_balance_for_rent_exemption(space)
    }

    fn request_funding(&self, address: &Pubkey, lamports: u64) -> Result<(), ClientError> {
        let signature = self.request_airdrop(address, lamports)?;
        while !self.confirm_transaction(&signature)? {
            sleep(Duration::from_millis(500));
        }
        Ok(())
    }

    fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
    ) -> Result<Signature, ClientError> {
        let blockhash = self.get_latest_blockhash()?;
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        self.send_and_confirm_transaction(&tx)
    }
}
