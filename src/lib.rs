pub mod abstraction;
pub mod cards;
pub mod cfr;
pub mod decision;
pub mod equity;
pub mod error;
pub mod live;

/// dimensional analysis types
pub type Chips = i32;
pub type Equity = f32;
pub type Utility = f32;
pub type Probability = f32;

// heads-up game tree parameters, used by the abstract tree C5 trains against.
// a live hand's real stacks come from the `hand_start` event instead.
pub const N: usize = 2;
pub const STACK: Chips = 100;
pub const BIG_BLIND: Chips = 2;
pub const SMALL_BLIND: Chips = 1;
pub const MAX_RAISE_REPEATS: usize = 3;

// training parameters
pub const CFR_ITERATIONS: usize = 1_000_000;
pub const CHANCE_DATASET_SIZE: usize = 10_000;

// regret matching parameters
pub const REGRET_MIN: Utility = -3e5;
pub const POLICY_MIN: Probability = Probability::MIN_POSITIVE;

/// initialize logging from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}
