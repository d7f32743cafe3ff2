#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate hiro_system_kit;

use hiro_system_kit::Logger;

pub mod abi;
pub mod codec;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod errors;
pub mod exchange;
pub mod network;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod status;
pub mod transaction;

#[cfg(test)]
mod tests;

pub use config::{MbrsxConfig, RpcConfig};
pub use contracts::{AutoGovernor, ContractClient, Mrc20, Mrc721, TokenBuyback};
pub use errors::{MbrsxError, MbrsxResult};
pub use network::Network;
pub use provider::{ConnectivityProvider, SendOptions, SentTransaction};
pub use registry::{ContractRole, Deployment, DeploymentRegistry, VersionSelector};
pub use resolver::{ResolvedClient, Resolver};
pub use transaction::{ContractEvent, Transaction, TransactionReceipt};

#[derive(Clone)]
pub struct Context {
    pub logger: Option<Logger>,
}

impl Context {
    pub fn empty() -> Context {
        Context { logger: None }
    }

    pub fn new(logger: Logger) -> Context {
        Context { logger: Some(logger) }
    }

    pub fn try_log<F>(&self, closure: F)
    where
        F: FnOnce(&Logger),
    {
        if let Some(ref logger) = self.logger {
            closure(logger)
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::empty()
    }
}
