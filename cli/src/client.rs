use counter_api::prelude::*;
use log::info;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
};

use crate::error::{ConfigError, DispatchError, ProvisionError, ReportError};
use crate::transport::LedgerTransport;

/// Outcome of the idempotent ensure-exists step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Provision {
    Created,
    AlreadyExisted,
}

/// Drives the counter program through its lifecycle: derive the data-account
/// address, create it if absent, submit an instruction, read the record back.
pub struct CounterClient<T> {
    transport: T,
    payer: Keypair,
    program_id: Pubkey,
    seed: String,
}

impl<T: LedgerTransport> CounterClient<T> {
    pub fn new(transport: T, payer: Keypair, program_id: Pubkey, seed: String) -> Self {
        Self {
            transport,
            payer,
            program_id,
            seed,
        }
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Recomputes the data-account address from (payer, seed, program). No
    /// address is ever persisted locally; the same inputs find the same
    /// account on every run.
    pub fn counter_address(&self) -> Result<Pubkey, ConfigError> {
        Ok(counter_address(
            &self.payer.pubkey(),
            &self.seed,
            &self.program_id,
        )?)
    }

    /// Airdrops `airdrop` lamports to the payer when its balance is below
    /// `threshold`, waiting for confirmation. Returns the resulting balance.
    pub fn ensure_funded(&self, threshold: u64, airdrop: u64) -> Result<u64, ProvisionError> {
        let identity = self.payer.pubkey();
        let funding = |source| ProvisionError::Funding { identity, source };

        let balance = self.transport.balance(&identity).map_err(funding)?;
        if balance >= threshold {
            return Ok(balance);
        }
        info!("Requesting an airdrop of {} lamports", airdrop);
        self.transport
            .request_funding(&identity, airdrop)
            .map_err(funding)?;
        self.transport.balance(&identity).map_err(funding)
    }

    /// Creates the counter account if it does not exist yet; reuses it
    /// otherwise, so repeated runs degrade to a no-op.
    ///
    /// The existence check and the create submission are two separate network
    /// round trips: a second client racing on the same derived address can
    /// create the account in between, and that creation would then be
    /// rejected. Single-client usage is assumed.
    pub fn ensure_account(
        &self,
        address: &Pubkey,
        space: usize,
    ) -> Result<Provision, ProvisionError> {
        let existing = self
            .transport
            .fetch_account(address)
            .map_err(|source| ProvisionError::Lookup {
                address: *address,
                source,
            })?;
        if existing.is_some() {
            return Ok(Provision::AlreadyExisted);
        }

        let lamports = self
            .transport
            .minimum_balance(space)
            .map_err(|source| ProvisionError::Lookup {
                address: *address,
                source,
            })?;
        let ix = system_instruction::create_account_with_seed(
            &self.payer.pubkey(),
            address,
            &self.payer.pubkey(),
            &self.seed,
            lamports,
            space as u64,
            &self.program_id,
        );
        self.transport
            .send_and_confirm(&[ix], &self.payer)
            .map_err(ProvisionError::Rejected)?;
        Ok(Provision::Created)
    }

    /// Submits one instruction against the counter account and blocks until
    /// the network confirms or rejects it.
    pub fn dispatch(
        &self,
        ix: CounterInstruction,
        address: &Pubkey,
    ) -> Result<Signature, DispatchError> {
        let ix = counter_instruction(ix, *address, self.program_id);
        self.transport
            .send_and_confirm(&[ix], &self.payer)
            .map_err(DispatchError::Rejected)
    }

    /// Reads the account back and decodes the stored record. Never mutates;
    /// an absent account is a hard failure, not a zeroed record.
    pub fn report(&self, address: &Pubkey) -> Result<Counter, ReportError> {
        let account = self
            .transport
            .fetch_account(address)
            .map_err(|source| ReportError::Lookup {
                address: *address,
                source,
            })?
            .ok_or(ReportError::MissingAccount(*address))?;
        Ok(Counter::try_from_bytes(&account.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use solana_client::client_error::{ClientError, ClientErrorKind};
    use solana_sdk::account::Account;
    use solana_sdk::instruction::Instruction;
    use solana_sdk::system_instruction::SystemInstruction;
    use solana_sdk::system_program;

    /// In-memory ledger that executes the system create-with-seed path and
    /// the counter program's semantics, and counts creations.
    struct MockLedger {
        program_id: Pubkey,
        accounts: RefCell<HashMap<Pubkey, Account>>,
        create_calls: Cell<usize>,
        fail_next_send: Cell<bool>,
    }

    impl MockLedger {
        fn new(program_id: Pubkey) -> Self {
            Self {
                program_id,
                accounts: RefCell::new(HashMap::new()),
                create_calls: Cell::new(0),
                fail_next_send: Cell::new(false),
            }
        }

        fn rejection(message: &str) -> ClientError {
            ClientErrorKind::Custom(message.to_string()).into()
        }

        fn execute(&self, ix: &Instruction) -> Result<(), ClientError> {
            if ix.program_id == system_program::ID {
                let sys: SystemInstruction = bincode::deserialize(&ix.data)
                    .map_err(|_| Self::rejection("malformed system instruction"))?;
                match sys {
                    SystemInstruction::CreateAccountWithSeed { space, owner, .. } => {
                        self.create_calls.set(self.create_calls.get() + 1);
                        let address = ix.accounts[1].pubkey;
                        let mut accounts = self.accounts.borrow_mut();
                        if accounts.contains_key(&address) {
                            return Err(Self::rejection("account already in use"));
                        }
                        accounts.insert(
                            address,
                            Account {
                                lamports: 1,
                                data: vec![0; space as usize],
                                owner,
                                executable: false,
                                rent_epoch: 0,
                            },
                        );
                        Ok(())
                    }
                    _ => Err(Self::rejection("unsupported system instruction")),
                }
            } else if ix.program_id == self.program_id {
                let parsed = CounterInstruction::unpack(&ix.data)
                    .map_err(|_| Self::rejection("invalid instruction data"))?;
                let mut accounts = self.accounts.borrow_mut();
                let account = accounts
                    .get_mut(&ix.accounts[0].pubkey)
                    .filter(|account| account.owner == self.program_id)
                    .ok_or_else(|| Self::rejection("incorrect program id for account"))?;
                let mut record = Counter::try_from_bytes(&account.data)
                    .map_err(|_| Self::rejection("account data too small"))?;
                record.count = match parsed {
                    CounterInstruction::Increment => record.count.wrapping_add(1),
                    CounterInstruction::Decrement => record.count.wrapping_sub(1),
                    CounterInstruction::Set(value) => value,
                };
                account.data[..Counter::SIZE].copy_from_slice(&record.to_bytes());
                Ok(())
            } else {
                Err(Self::rejection("unknown program"))
            }
        }
    }

    impl LedgerTransport for MockLedger {
        fn fetch_account(&self, address: &Pubkey) -> Result<Option<Account>, ClientError> {
            Ok(self.accounts.borrow().get(address).cloned())
        }

        fn balance(&self, _address: &Pubkey) -> Result<u64, ClientError> {
            Ok(u64::MAX)
        }

        fn minimum_balance(&self, space: usize) -> Result<u64, ClientError> {
            Ok(space as u64 * 100)
        }

        fn request_funding(&self, _address: &Pubkey, _lamports: u64) -> Result<(), ClientError> {
            Ok(())
        }

        fn send_and_confirm(
            &self,
            instructions: &[Instruction],
            _payer: &Keypair,
        ) -> Result<Signature, ClientError> {
            if self.fail_next_send.take() {
                return Err(Self::rejection("transaction rejected"));
            }
            for ix in instructions {
                self.execute(ix)?;
            }
            Ok(Signature::default())
        }
    }

    fn test_client() -> CounterClient<MockLedger> {
        let program_id = Pubkey::new_unique();
        CounterClient::new(
            MockLedger::new(program_id),
            Keypair::new(),
            program_id,
            COUNTER_SEED.to_string(),
        )
    }

    #[test]
    fn provisioning_is_idempotent() {
        let client = test_client();
        let address = client.counter_address().unwrap();

        assert_eq!(
            client.ensure_account(&address, Counter::SIZE).unwrap(),
            Provision::Created
        );
        assert_eq!(client.transport.create_calls.get(), 1);

        assert_eq!(
            client.ensure_account(&address, Counter::SIZE).unwrap(),
            Provision::AlreadyExisted
        );
        assert_eq!(client.transport.create_calls.get(), 1);
    }

    #[test]
    fn created_account_has_requested_size_and_owner() {
        let client = test_client();
        let address = client.counter_address().unwrap();
        client.ensure_account(&address, Counter::SIZE).unwrap();

        let account = client.transport.fetch_account(&address).unwrap().unwrap();
        assert_eq!(account.data.len(), Counter::SIZE);
        assert_eq!(account.owner, client.program_id);
    }

    #[test]
    fn rejected_creation_is_fatal_and_leaves_account_absent() {
        let client = test_client();
        let address = client.counter_address().unwrap();

        client.transport.fail_next_send.set(true);
        assert!(matches!(
            client.ensure_account(&address, Counter::SIZE),
            Err(ProvisionError::Rejected(_))
        ));
        assert!(client.transport.fetch_account(&address).unwrap().is_none());
    }

    #[test]
    fn increments_accumulate_across_dispatches() {
        let client = test_client();
        let address = client.counter_address().unwrap();
        client.ensure_account(&address, Counter::SIZE).unwrap();

        client
            .dispatch(CounterInstruction::Increment, &address)
            .unwrap();
        assert_eq!(client.report(&address).unwrap().count, 1);

        for _ in 0..3 {
            client
                .dispatch(CounterInstruction::Increment, &address)
                .unwrap();
        }
        assert_eq!(client.report(&address).unwrap().count, 4);
    }

    #[test]
    fn set_and_decrement_mutate_the_record() {
        let client = test_client();
        let address = client.counter_address().unwrap();
        client.ensure_account(&address, Counter::SIZE).unwrap();

        client
            .dispatch(CounterInstruction::Set(100), &address)
            .unwrap();
        assert_eq!(client.report(&address).unwrap().count, 100);

        client
            .dispatch(CounterInstruction::Decrement, &address)
            .unwrap();
        assert_eq!(client.report(&address).unwrap().count, 99);
    }

    #[test]
    fn failed_dispatch_leaves_state_reportable() {
        let client = test_client();
        let address = client.counter_address().unwrap();
        client.ensure_account(&address, Counter::SIZE).unwrap();
        client
            .dispatch(CounterInstruction::Set(7), &address)
            .unwrap();

        client.transport.fail_next_send.set(true);
        assert!(matches!(
            client.dispatch(CounterInstruction::Increment, &address),
            Err(DispatchError::Rejected(_))
        ));

        // The report step still observes the last confirmed state.
        assert_eq!(client.report(&address).unwrap().count, 7);
    }

    #[test]
    fn report_fails_on_missing_account() {
        let client = test_client();
        let address = client.counter_address().unwrap();
        assert!(matches!(
            client.report(&address),
            Err(ReportError::MissingAccount(missing)) if missing == address
        ));
    }

    #[test]
    fn report_rejects_undersized_account() {
        let client = test_client();
        let address = client.counter_address().unwrap();
        client.transport.accounts.borrow_mut().insert(
            address,
            Account {
                lamports: 1,
                data: vec![0; Counter::SIZE - 1],
                owner: client.program_id,
                executable: false,
                rent_epoch: 0,
            },
        );
        assert!(matches!(
            client.report(&address),
            Err(ReportError::Codec(CodecError::TruncatedInput))
        ));
    }
}
