use std::fmt;
use std::str::FromStr;

use error_stack::Report;

use crate::constants::{MAINNET_EXPLORER_URL, TESTNET_EXPLORER_URL};
use crate::errors::{ConfigError, MbrsxError, MbrsxResult};

/// Deployment environment a contract set lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Network {
    MainNet,
    TestNet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::MainNet, Network::TestNet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::MainNet => "MainNet",
            Network::TestNet => "TestNet",
        }
    }

    pub fn explorer_url(&self) -> &'static str {
        match self {
            Network::MainNet => MAINNET_EXPLORER_URL,
            Network::TestNet => TESTNET_EXPLORER_URL,
        }
    }

    /// Block explorer page for a transaction id rendered without `0x`
    pub fn explorer_tx_url(&self, txid: &str) -> String {
        format!("{}/tx/{}", self.explorer_url(), txid.trim_start_matches("0x"))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Report<MbrsxError>;

    fn from_str(s: &str) -> MbrsxResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::MainNet),
            "testnet" => Ok(Network::TestNet),
            _ => Err(Report::new(MbrsxError::Config(ConfigError::InvalidValue {
                field: "network".to_string(),
                value: s.to_string(),
            }))
            .attach_printable("Expected one of: MainNet, TestNet")),
        }
    }
}
