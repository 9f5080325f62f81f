#![allow(unexpected_cfgs)]
mod decrement;
mod increment;
mod set;

use decrement::*;
use increment::*;
use set::*;

use counter_api::prelude::*;
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult, msg, pubkey::Pubkey,
};

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let ix = CounterInstruction::unpack(data)?;
    msg!("Instruction: {:?}", ix);
    match ix {
        CounterInstruction::Increment => process_increment(program_id, accounts)?,
        CounterInstruction::Decrement => process_decrement(program_id, accounts)?,
        CounterInstruction::Set(value) => process_set(program_id, accounts, value)?,
    }

    Ok(())
}
entrypoint!(process_instruction);
