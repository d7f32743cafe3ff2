use alloy::primitives::{address, Address};

pub mod contract_tests;
pub mod exchange_tests;
pub mod status_tests;

pub const BUYBACK: Address = address!("1111111111111111111111111111111111111111");
pub const GOVERNOR: Address = address!("2222222222222222222222222222222222222222");
pub const TOKEN: Address = address!("3333333333333333333333333333333333333333");
pub const CORE: Address = address!("4444444444444444444444444444444444444444");
pub const USER: Address = address!("5555555555555555555555555555555555555555");
