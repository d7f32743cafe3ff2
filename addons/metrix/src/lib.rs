#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate hiro_system_kit;

pub mod constants;
pub mod rpc;


pub use rpc::MetrixRpc;
