/// Default seed string for the per-user counter account.
///
/// Deliberately a fixed constant: the client re-derives the same address on
/// every run instead of persisting it locally.
pub const COUNTER_SEED: &str = "counter";
