use std::path::PathBuf;

use clap::{Parser, Subcommand};
use counter_api::prelude::{CounterInstruction, COUNTER_SEED};

/// Seed counter client
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the payer keypair file (the operating identity).
    #[arg(short, long, env = "COUNTER_KEYPAIR")]
    pub keypair: PathBuf,

    /// Path to the deployed program's keypair file.
    #[arg(short, long, env = "COUNTER_PROGRAM_KEYPAIR")]
    pub program_keypair: PathBuf,

    #[arg(short, long, env = "RPC_URL", default_value = "http://localhost:8899")]
    pub rpc_url: String,

    /// Seed string for deriving the counter account address.
    #[arg(short, long, env = "COUNTER_SEED", default_value = COUNTER_SEED)]
    pub seed: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add one to the counter (the default).
    Increment,
    /// Subtract one from the counter.
    Decrement,
    /// Overwrite the counter with a value.
    Set { value: u32 },
}

impl Command {
    pub fn instruction(&self) -> CounterInstruction {
        match self {
            Command::Increment => CounterInstruction::Increment,
            Command::Decrement => CounterInstruction::Decrement,
            Command::Set { value } => CounterInstruction::Set(*value),
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Increment
    }
}
