//! Error types

mod config;
mod hash;
mod key;
mod state;

pub use config::*;
pub use hash::*;
pub use key::*;
pub use state::*;
