use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use alloy::primitives::Address;
use error_stack::{Report, ResultExt};
use semver::Version;

use crate::codec::string_to_address;
use crate::constants::{AUTO_GOVERNOR, LATEST_VERSION_ALIAS, TOKEN_BUYBACK};
use crate::errors::{ConfigError, MbrsxError, MbrsxResult};
use crate::network::Network;

const BUNDLED_DEPLOYMENTS: &str = include_str!("../deployments.toml");

/// Which of the two deployed contracts is being addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractRole {
    TokenBuyback,
    AutoGovernor,
}

impl ContractRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractRole::TokenBuyback => TOKEN_BUYBACK,
            ContractRole::AutoGovernor => AUTO_GOVERNOR,
        }
    }
}

impl fmt::Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named snapshot of contract addresses, or the newest one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionSelector {
    #[default]
    Latest,
    Exact(Version),
}

impl VersionSelector {
    pub fn exact(version: &str) -> MbrsxResult<Self> {
        parse_version(version).map(VersionSelector::Exact)
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSelector::Latest => f.write_str(LATEST_VERSION_ALIAS),
            VersionSelector::Exact(version) => write!(f, "{}", version),
        }
    }
}

impl FromStr for VersionSelector {
    type Err = Report<MbrsxError>;

    fn from_str(s: &str) -> MbrsxResult<Self> {
        if s.eq_ignore_ascii_case(LATEST_VERSION_ALIAS) {
            return Ok(VersionSelector::Latest);
        }
        VersionSelector::exact(s)
    }
}

impl From<Version> for VersionSelector {
    fn from(version: Version) -> Self {
        VersionSelector::Exact(version)
    }
}

fn parse_version(raw: &str) -> MbrsxResult<Version> {
    let trimmed = raw.trim().trim_start_matches('v');
    Version::parse(trimmed).map_err(|e| {
        Report::new(MbrsxError::Config(ConfigError::InvalidValue {
            field: "version".to_string(),
            value: format!("{}: {}", raw, e),
        }))
    })
}

/// Addresses of one contract set on one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub token_buyback: Address,
    pub auto_governor: Address,
}

impl Deployment {
    pub fn address(&self, role: ContractRole) -> Address {
        match role {
            ContractRole::TokenBuyback => self.token_buyback,
            ContractRole::AutoGovernor => self.auto_governor,
        }
    }

    /// Both roles must carry a non-zero address for the pair to be usable
    pub fn is_deployed(&self) -> bool {
        self.token_buyback != Address::ZERO && self.auto_governor != Address::ZERO
    }
}

#[derive(Deserialize)]
struct DeploymentTableFile {
    #[serde(default)]
    latest: Option<String>,
    #[serde(default)]
    versions: BTreeMap<String, BTreeMap<String, RawDeployment>>,
}

#[derive(Deserialize)]
struct RawDeployment {
    #[serde(rename = "TokenBuyback")]
    token_buyback: String,
    #[serde(rename = "AutoGovernor")]
    auto_governor: String,
}

/// Immutable mapping from (version, network) to deployed addresses.
///
/// Constructed explicitly and handed to whoever resolves contracts; there is
/// no process-wide table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentRegistry {
    deployments: BTreeMap<Version, BTreeMap<Network, Deployment>>,
    latest: Option<Version>,
}

impl DeploymentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The deployment table shipped with this crate
    pub fn bundled() -> MbrsxResult<Self> {
        Self::from_toml_str(BUNDLED_DEPLOYMENTS)
            .attach_printable("Loading bundled deployment table")
    }

    pub fn from_file(path: impl AsRef<Path>) -> MbrsxResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Report::new(MbrsxError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            }))
        })?;
        Self::from_toml_str(&content)
            .attach_printable(format!("Loading deployment table from {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> MbrsxResult<Self> {
        let file: DeploymentTableFile = toml::from_str(content).map_err(|e| {
            Report::new(MbrsxError::Config(ConfigError::ParseFailed(e.to_string())))
        })?;

        let mut registry = DeploymentRegistry::new();
        for (raw_version, networks) in file.versions.iter() {
            let version = parse_version(raw_version)?;
            for (raw_network, raw) in networks.iter() {
                let network = Network::from_str(raw_network)
                    .attach_printable(format!("In deployment table for v{}", version))?;
                let deployment = Deployment {
                    token_buyback: parse_table_address(
                        &version,
                        network,
                        TOKEN_BUYBACK,
                        &raw.token_buyback,
                    )?,
                    auto_governor: parse_table_address(
                        &version,
                        network,
                        AUTO_GOVERNOR,
                        &raw.auto_governor,
                    )?,
                };
                registry = registry.with_deployment(version.clone(), network, deployment);
            }
        }

        if let Some(latest) = file.latest {
            let latest = parse_version(&latest)?;
            if !registry.deployments.contains_key(&latest) {
                return Err(Report::new(MbrsxError::Config(ConfigError::UnknownVersion(
                    latest.to_string(),
                ))))
                .attach_printable("The `latest` pin must name a version present in the table");
            }
            registry.latest = Some(latest);
        }
        Ok(registry)
    }

    pub fn with_deployment(
        mut self,
        version: Version,
        network: Network,
        deployment: Deployment,
    ) -> Self {
        self.deployments.entry(version).or_default().insert(network, deployment);
        self
    }

    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.deployments.keys()
    }

    /// The pinned latest version, or the highest version in the table
    pub fn latest_version(&self) -> Option<&Version> {
        self.latest.as_ref().or_else(|| self.deployments.keys().next_back())
    }

    pub fn resolve_version(&self, selector: &VersionSelector) -> MbrsxResult<Version> {
        let version = match selector {
            VersionSelector::Latest => self.latest_version(),
            VersionSelector::Exact(version) => {
                self.deployments.get_key_value(version).map(|(key, _)| key)
            }
        };
        version.cloned().ok_or_else(|| {
            Report::new(MbrsxError::Config(ConfigError::UnknownVersion(selector.to_string())))
        })
    }

    /// Raw table entry, zero addresses included
    pub fn deployment(
        &self,
        selector: &VersionSelector,
        network: Network,
    ) -> MbrsxResult<Option<&Deployment>> {
        let version = self.resolve_version(selector)?;
        Ok(self.deployments.get(&version).and_then(|networks| networks.get(&network)))
    }

    /// Look up the address deployed for `role`, failing when the pair is undeployed
    pub fn lookup(
        &self,
        selector: &VersionSelector,
        network: Network,
        role: ContractRole,
    ) -> MbrsxResult<Address> {
        let version = self.resolve_version(selector)?;
        let deployment = self
            .deployments
            .get(&version)
            .and_then(|networks| networks.get(&network))
            .filter(|deployment| deployment.is_deployed());

        match deployment {
            Some(deployment) => Ok(deployment.address(role)),
            None => Err(Report::new(MbrsxError::Config(ConfigError::NotDeployed {
                version: version.to_string(),
                network: network.to_string(),
                role: role.to_string(),
            }))),
        }
    }
}

fn parse_table_address(
    version: &Version,
    network: Network,
    role: &str,
    raw: &str,
) -> MbrsxResult<Address> {
    string_to_address(raw).change_context(MbrsxError::Config(ConfigError::InvalidAddress {
        field: format!("versions.\"{}\".{}.{}", version, network, role),
        value: raw.to_string(),
    }))
}
