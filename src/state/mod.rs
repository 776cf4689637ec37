pub mod guard_state;

pub use guard_state::*;
