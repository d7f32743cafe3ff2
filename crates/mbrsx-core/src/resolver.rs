use std::sync::Arc;

use alloy::hex;
use alloy::primitives::Address;
use error_stack::Report;

use crate::contracts::{AutoGovernor, ContractClient, TokenBuyback};
use crate::errors::{ConfigError, MbrsxError, MbrsxResult};
use crate::network::Network;
use crate::provider::ConnectivityProvider;
use crate::registry::{ContractRole, DeploymentRegistry, VersionSelector};
use crate::Context;

/// A client built for whichever role was asked for
#[derive(Clone, Debug)]
pub enum ResolvedClient {
    TokenBuyback(TokenBuyback),
    AutoGovernor(AutoGovernor),
}

impl ResolvedClient {
    pub fn role(&self) -> ContractRole {
        match self {
            ResolvedClient::TokenBuyback(_) => ContractRole::TokenBuyback,
            ResolvedClient::AutoGovernor(_) => ContractRole::AutoGovernor,
        }
    }

    pub fn client(&self) -> &ContractClient {
        match self {
            ResolvedClient::TokenBuyback(buyback) => buyback.client(),
            ResolvedClient::AutoGovernor(governor) => governor.client(),
        }
    }

    pub fn address(&self) -> Address {
        self.client().address()
    }

    pub fn as_token_buyback(&self) -> Option<&TokenBuyback> {
        match self {
            ResolvedClient::TokenBuyback(buyback) => Some(buyback),
            _ => None,
        }
    }

    pub fn as_auto_governor(&self) -> Option<&AutoGovernor> {
        match self {
            ResolvedClient::AutoGovernor(governor) => Some(governor),
            _ => None,
        }
    }
}

/// Turns (role, network, version) into addresses and ready-to-use clients.
/// `None` as version selects the latest contract set.
#[derive(Clone)]
pub struct Resolver {
    registry: DeploymentRegistry,
    ctx: Context,
}

impl Resolver {
    pub fn new(registry: DeploymentRegistry, ctx: Context) -> Self {
        Self { registry, ctx }
    }

    pub fn registry(&self) -> &DeploymentRegistry {
        &self.registry
    }

    pub fn resolve_address(
        &self,
        role: ContractRole,
        network: Network,
        version: Option<&VersionSelector>,
    ) -> MbrsxResult<Address> {
        let version = version.cloned().unwrap_or_default();
        match self.registry.lookup(&version, network, role) {
            Ok(address) => {
                self.ctx.try_log(|logger| {
                    debug!(
                        logger,
                        "{} {} on {} resolved to {}",
                        role,
                        version,
                        network,
                        hex::encode(address)
                    )
                });
                Ok(address)
            }
            Err(e) => {
                self.ctx.try_log(|logger| warn!(logger, "unable to resolve {}: {}", role, e));
                Err(e)
            }
        }
    }

    /// A client must talk to the network its address was resolved for
    fn check_provider_network(
        &self,
        network: Network,
        provider: &Arc<dyn ConnectivityProvider>,
    ) -> MbrsxResult<()> {
        let provider_network = provider.network();
        if provider_network == network {
            return Ok(());
        }
        self.ctx.try_log(|logger| {
            warn!(logger, "provider is bound to {}, refusing {} addresses", provider_network, network)
        });
        Err(Report::new(MbrsxError::Config(ConfigError::InvalidValue {
            field: "network".to_string(),
            value: format!("{} requested from a {} provider", network, provider_network),
        })))
    }

    pub fn resolve_client(
        &self,
        role: ContractRole,
        network: Network,
        provider: Arc<dyn ConnectivityProvider>,
        version: Option<&VersionSelector>,
    ) -> MbrsxResult<ResolvedClient> {
        self.check_provider_network(network, &provider)?;
        let address = self.resolve_address(role, network, version)?;
        let client = match role {
            ContractRole::TokenBuyback => {
                ResolvedClient::TokenBuyback(TokenBuyback::new(address, provider, self.ctx.clone())?)
            }
            ContractRole::AutoGovernor => {
                ResolvedClient::AutoGovernor(AutoGovernor::new(address, provider, self.ctx.clone())?)
            }
        };
        Ok(client)
    }

    pub fn token_buyback(
        &self,
        network: Network,
        provider: Arc<dyn ConnectivityProvider>,
        version: Option<&VersionSelector>,
    ) -> MbrsxResult<TokenBuyback> {
        self.check_provider_network(network, &provider)?;
        let address = self.token_buyback_address(network, version)?;
        TokenBuyback::new(address, provider, self.ctx.clone())
    }

    pub fn token_buyback_address(
        &self,
        network: Network,
        version: Option<&VersionSelector>,
    ) -> MbrsxResult<Address> {
        self.resolve_address(ContractRole::TokenBuyback, network, version)
    }

    pub fn auto_governor(
        &self,
        network: Network,
        provider: Arc<dyn ConnectivityProvider>,
        version: Option<&VersionSelector>,
    ) -> MbrsxResult<AutoGovernor> {
        self.check_provider_network(network, &provider)?;
        let address = self.auto_governor_address(network, version)?;
        AutoGovernor::new(address, provider, self.ctx.clone())
    }

    pub fn auto_governor_address(
        &self,
        network: Network,
        version: Option<&VersionSelector>,
    ) -> MbrsxResult<Address> {
        self.resolve_address(ContractRole::AutoGovernor, network, version)
    }
}
