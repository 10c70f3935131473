#![no_std]

extern crate alloc;

pub use engine::*;
pub use error::*;
pub use types::*;
pub use winner::*;

mod engine;
mod error;
mod types;
mod winner;
