use error_stack::Report;
use std::fmt;

pub type MbrsxResult<T> = Result<T, Report<MbrsxError>>;

/// Top level error raised by the contract layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MbrsxError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
    #[error("Exchange rejected: {0}")]
    Exchange(#[from] ExchangeError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The registry stores the zero address for this version and network
    #[error("No deployment found for v{version} on the {network}")]
    NotDeployed { version: String, network: String, role: String },
    #[error("Unknown contract set version: {0}")]
    UnknownVersion(String),
    #[error("Invalid address for {field}: {value}")]
    InvalidAddress { field: String, value: String },
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
    #[error("Invalid interface descriptor for {0}")]
    InvalidAbi(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Function '{0}' not found in interface descriptor")]
    FunctionNotFound(String),
    #[error("Expected {expected} arguments, got {got}")]
    ArgumentCountMismatch { expected: usize, got: usize },
    #[error("Cannot convert {value} to {target_type}")]
    InvalidValue { value: String, target_type: String },
    #[error("Invalid hex quantity: {0}")]
    InvalidQuantity(String),
    #[error("Unsupported ABI type: {0}")]
    UnsupportedAbiType(String),
    #[error("ABI encoding failed: {0}")]
    AbiEncodingFailed(String),
    #[error("ABI decoding failed: {0}")]
    AbiDecodingFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    #[error("Node error (code {code}): {message}")]
    NodeError { code: i64, message: String },
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("amount {amount} exceeds allowance {allowance}, check approvals")]
    ExceedsAllowance { amount: String, allowance: String },
    #[error("amount {amount} must be greater than or equal to {rate}")]
    BelowRate { amount: String, rate: String },
    #[error("amount must be greater than zero")]
    ZeroAmount,
}

/// Contract information attached to failed calls
#[derive(Debug, Clone)]
pub struct ContractInfo {
    pub name: String,
    pub address: String,
    pub method: Option<String>,
}

impl fmt::Display for ContractInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contract: {} at {}", self.name, self.address)?;
        if let Some(method) = &self.method {
            write!(f, " method: {}", method)?;
        }
        Ok(())
    }
}

/// Endpoint information attached to failed RPC requests
#[derive(Debug, Clone)]
pub struct RpcContext {
    pub endpoint: String,
    pub method: String,
    pub params: Option<String>,
}

impl fmt::Display for RpcContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPC {} -> {}", self.endpoint, self.method)?;
        if let Some(params) = &self.params {
            write!(f, " params: {}", params)?;
        }
        Ok(())
    }
}

pub trait MbrsxErrorExt {
    /// Attach contract information
    fn with_contract_info(
        self,
        name: impl Into<String>,
        address: impl Into<String>,
        method: Option<String>,
    ) -> Self;
}

impl<T> MbrsxErrorExt for MbrsxResult<T> {
    fn with_contract_info(
        self,
        name: impl Into<String>,
        address: impl Into<String>,
        method: Option<String>,
    ) -> Self {
        self.map_err(|e| {
            e.attach(ContractInfo { name: name.into(), address: address.into(), method })
        })
    }
}

/// Helper macro for creating errors with a printable attachment
#[macro_export]
macro_rules! mbrsx_error {
    ($error:expr, $($arg:tt)*) => {{
        error_stack::Report::new($crate::errors::MbrsxError::from($error))
            .attach_printable(format!($($arg)*))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_stack::ResultExt;

    #[test]
    fn test_not_deployed_message_names_version_and_network() {
        let error = ConfigError::NotDeployed {
            version: "1.0.0".to_string(),
            network: "TestNet".to_string(),
            role: "TokenBuyback".to_string(),
        };
        assert_eq!(error.to_string(), "No deployment found for v1.0.0 on the TestNet");

        let report = Report::new(MbrsxError::from(error));
        assert!(report.to_string().contains("v1.0.0 on the TestNet"));
    }

    #[test]
    fn test_error_with_contract_info() {
        let error = mbrsx_error!(
            CodecError::FunctionNotFound("rate()".to_string()),
            "Encoding call"
        );

        let result: MbrsxResult<()> = Err(error);
        let error = result
            .with_contract_info(
                "TokenBuyback",
                "1234567890123456789012345678901234567890",
                Some("rate()".to_string()),
            )
            .unwrap_err();

        let contract = error.downcast_ref::<ContractInfo>().unwrap();
        assert_eq!(contract.name, "TokenBuyback");
        assert_eq!(contract.method.as_deref(), Some("rate()"));
    }

    #[test]
    fn test_error_chain_keeps_inner_context() {
        fn parse_quantity(raw: &str) -> MbrsxResult<u64> {
            u64::from_str_radix(raw.trim_start_matches("0x"), 16).map_err(|e| {
                Report::new(MbrsxError::Codec(CodecError::InvalidQuantity(format!(
                    "{}: {}",
                    raw, e
                ))))
            })
        }

        fn read_rate(raw: &str) -> MbrsxResult<u64> {
            parse_quantity(raw)
                .change_context(MbrsxError::Rpc(RpcError::InvalidResponse(
                    "rate() output".to_string(),
                )))
                .attach_printable("Decoding rate")
        }

        let error = read_rate("0xzz").unwrap_err();
        let rendered = format!("{:?}", error);
        assert!(rendered.contains("Invalid response"));
        assert!(rendered.contains("Invalid hex quantity"));
    }
}
