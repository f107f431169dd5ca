#![allow(dead_code)]
pub mod builders;
pub mod mock_exchange;

pub use builders::*;
pub use mock_exchange::{MockDnsExchange, SequenceRootSelector};
