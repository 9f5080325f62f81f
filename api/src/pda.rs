use solana_program::pubkey::{Pubkey, PubkeyError};

/// Derive the counter data-account address from the owning identity, an
/// application-chosen seed string and the program that will own the account.
///
/// Deterministic: the same three inputs always yield the same address, which
/// is how the client relocates its account on every run without persisting
/// anything locally.
pub fn counter_address(
    base: &Pubkey,
    seed: &str,
    program_id: &Pubkey,
) -> Result<Pubkey, PubkeyError> {
    Pubkey::create_with_seed(base, seed, program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COUNTER_SEED;

    #[test]
    fn derivation_is_deterministic() {
        let base = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let first = counter_address(&base, COUNTER_SEED, &program_id).unwrap();
        let second = counter_address(&base, COUNTER_SEED, &program_id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn derivation_depends_on_every_input() {
        let base = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let addr = counter_address(&base, COUNTER_SEED, &program_id).unwrap();
        assert_ne!(
            addr,
            counter_address(&Pubkey::new_unique(), COUNTER_SEED, &program_id).unwrap()
        );
        assert_ne!(addr, counter_address(&base, "other", &program_id).unwrap());
        assert_ne!(
            addr,
            counter_address(&base, COUNTER_SEED, &Pubkey::new_unique()).unwrap()
        );
    }
}
