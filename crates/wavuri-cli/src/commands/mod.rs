//! CLI command implementations

pub mod encode;
pub mod inspect;
pub mod tone;

mod output;
