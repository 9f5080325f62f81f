use counter_api::prelude::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

pub fn process_increment(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let counter_account = next_account_info(accounts_iter)?;

    if counter_account.owner != program_id {
        msg!("Counter account {} is not owned by this program", counter_account.key);
        return Err(ProgramError::IncorrectProgramId);
    }

    let mut record = Counter::try_from_bytes(&counter_account.data.borrow())?;
    record.count = record.count.wrapping_add(1);
    counter_account.data.borrow_mut()[..Counter::SIZE].copy_from_slice(&record.to_bytes());
    msg!("Counter {} is now {}", counter_account.key, record.count);

    Ok(())
}
