pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePieceSeedError {
    #[display("piece seed must be 32 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    #[display("piece seed contains a non-hex digit")]
    InvalidDigit,
}
