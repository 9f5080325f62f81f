mod args;
mod client;
mod error;
mod transport;

use anyhow::Result;
use clap::Parser;
use counter_api::prelude::*;
use log::{error, info};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    native_token::LAMPORTS_PER_SOL,
    signature::{read_keypair_file, Keypair, Signer},
};
use std::path::Path;

use crate::args::Args;
use crate::client::{CounterClient, Provision};
use crate::error::ConfigError;

fn load_keypair(path: &Path) -> Result<Keypair, ConfigError> {
    read_keypair_file(path).map_err(|err| ConfigError::Keypair {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let payer = load_keypair(&args.keypair)?;
    let program_id = load_keypair(&args.program_keypair)?.pubkey();
    info!("Targeting program {}", program_id);

    let rpc = RpcClient::new_with_commitment(args.rpc_url.clone(), CommitmentConfig::confirmed());
    info!("Connected to {} at confirmed commitment", args.rpc_url);

    let client = CounterClient::new(rpc, payer, program_id, args.seed.clone());
    info!("Operating identity {}", client.payer());

    let balance = client.ensure_funded(LAMPORTS_PER_SOL, 2 * LAMPORTS_PER_SOL)?;
    info!("Identity balance: {} lamports", balance);

    let address = client.counter_address()?;
    info!("Derived counter address {} from seed \"{}\"", address, args.seed);

    match client.ensure_account(&address, Counter::SIZE)? {
        Provision::Created => info!("Created counter account with {} bytes", Counter::SIZE),
        Provision::AlreadyExisted => info!("Counter account already exists, reusing it"),
    }

    // A rejected instruction is logged but does not abort the run: whatever
    // state the account holds is still worth reporting.
    let command = args.command.unwrap_or_default();
    match client.dispatch(command.instruction(), &address) {
        Ok(signature) => info!("Transaction confirmed: {}", signature),
        Err(err) => error!("{}", err),
    }

    let record = client.report(&address)?;
    info!("{} has been counted {} time(s)", address, record.count);

    Ok(())
}
