use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::instruction::CounterInstruction;

/// Builds the single-account instruction invoking the counter program: the
/// data account is writable and never a signer.
pub fn counter_instruction(
    ix: CounterInstruction,
    counter_account: Pubkey,
    program_id: Pubkey,
) -> Instruction {
    Instruction {
        program_id,
        accounts: vec![AccountMeta::new(counter_account, false)],
        data: ix.pack(),
    }
}

pub fn increment(counter_account: Pubkey, program_id: Pubkey) -> Instruction {
    counter_instruction(CounterInstruction::Increment, counter_account, program_id)
}

pub fn decrement(counter_account: Pubkey, program_id: Pubkey) -> Instruction {
    counter_instruction(CounterInstruction::Decrement, counter_account, program_id)
}

pub fn set(value: u32, counter_account: Pubkey, program_id: Pubkey) -> Instruction {
    counter_instruction(CounterInstruction::Set(value), counter_account, program_id)
}
