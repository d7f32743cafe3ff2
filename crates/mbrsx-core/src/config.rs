use std::path::{Path, PathBuf};
use std::str::FromStr;

use error_stack::{Report, ResultExt};

use crate::constants::{DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE};
use crate::errors::{ConfigError, MbrsxError, MbrsxResult};
use crate::network::Network;
use crate::registry::{DeploymentRegistry, VersionSelector};
use crate::resolver::Resolver;
use crate::Context;

/// Client configuration, usually read from `mbrsx.toml`
///
/// ```toml
/// network = "TestNet"
/// version = "latest"
/// deployments = "deployments.toml"
///
/// [rpc]
/// url = "http://127.0.0.1:33841"
/// sender = "mdHpyX6C4ENKXBmdBp2kzxvWi4Rr6VLsKE"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbrsxConfig {
    pub network: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Deployment table overriding the bundled one. Relative paths are
    /// resolved against the directory of the configuration file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployments: Option<PathBuf>,
    pub rpc: RpcConfig,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    pub url: String,
    /// Address paying for sends; the node picks one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
    #[serde(default = "default_gas_price")]
    pub gas_price: u64,
}

fn default_gas_limit() -> u64 {
    DEFAULT_GAS_LIMIT
}

fn default_gas_price() -> u64 {
    DEFAULT_GAS_PRICE
}

impl RpcConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sender: None,
            gas_limit: DEFAULT_GAS_LIMIT,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }
}

impl MbrsxConfig {
    pub fn new(network: Network, rpc: RpcConfig) -> Self {
        Self { network, version: None, deployments: None, rpc, base_dir: None }
    }

    pub fn from_file(path: impl AsRef<Path>) -> MbrsxResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Report::new(MbrsxError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            }))
        })?;
        let mut config = Self::from_toml_str(&content)
            .attach_printable(format!("Loading configuration from {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> MbrsxResult<Self> {
        let config: MbrsxConfig = toml::from_str(content).map_err(|e| {
            Report::new(MbrsxError::Config(ConfigError::ParseFailed(e.to_string())))
        })?;
        config.version_selector()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> MbrsxResult<String> {
        toml::to_string(self).map_err(|e| {
            Report::new(MbrsxError::Config(ConfigError::ParseFailed(e.to_string())))
        })
    }

    /// Configured contract set, `latest` when unset
    pub fn version_selector(&self) -> MbrsxResult<VersionSelector> {
        match &self.version {
            Some(version) => VersionSelector::from_str(version),
            None => Ok(VersionSelector::Latest),
        }
    }

    pub fn deployments_path(&self) -> Option<PathBuf> {
        let path = self.deployments.as_ref()?;
        match &self.base_dir {
            Some(base_dir) if path.is_relative() => Some(base_dir.join(path)),
            _ => Some(path.clone()),
        }
    }

    pub fn load_registry(&self) -> MbrsxResult<DeploymentRegistry> {
        match self.deployments_path() {
            Some(path) => DeploymentRegistry::from_file(path),
            None => DeploymentRegistry::bundled(),
        }
    }

    pub fn resolver(&self, ctx: Context) -> MbrsxResult<Resolver> {
        Ok(Resolver::new(self.load_registry()?, ctx))
    }
}
