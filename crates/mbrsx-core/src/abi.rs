use std::sync::Arc;

use alloy::json_abi::JsonAbi;
use error_stack::Report;

use crate::constants::{AUTO_GOVERNOR, MRC20, MRC721, TOKEN_BUYBACK};
use crate::errors::{ConfigError, MbrsxError, MbrsxResult};

lazy_static! {
    static ref TOKEN_BUYBACK_ABI: Result<Arc<JsonAbi>, String> =
        parse_abi(include_str!("../abi/TokenBuyback.json"));
    static ref AUTO_GOVERNOR_ABI: Result<Arc<JsonAbi>, String> =
        parse_abi(include_str!("../abi/AutoGovernor.json"));
    static ref MRC20_ABI: Result<Arc<JsonAbi>, String> =
        parse_abi(include_str!("../abi/MRC20.json"));
    static ref MRC721_ABI: Result<Arc<JsonAbi>, String> =
        parse_abi(include_str!("../abi/MRC721.json"));
}

fn parse_abi(json: &str) -> Result<Arc<JsonAbi>, String> {
    serde_json::from_str::<JsonAbi>(json).map(Arc::new).map_err(|e| e.to_string())
}

fn bundled(name: &str, abi: &Result<Arc<JsonAbi>, String>) -> MbrsxResult<Arc<JsonAbi>> {
    abi.clone().map_err(|e| {
        Report::new(MbrsxError::Config(ConfigError::InvalidAbi(name.to_string())))
            .attach_printable(e)
    })
}

pub fn token_buyback_abi() -> MbrsxResult<Arc<JsonAbi>> {
    bundled(TOKEN_BUYBACK, &TOKEN_BUYBACK_ABI)
}

pub fn auto_governor_abi() -> MbrsxResult<Arc<JsonAbi>> {
    bundled(AUTO_GOVERNOR, &AUTO_GOVERNOR_ABI)
}

pub fn mrc20_abi() -> MbrsxResult<Arc<JsonAbi>> {
    bundled(MRC20, &MRC20_ABI)
}

pub fn mrc721_abi() -> MbrsxResult<Arc<JsonAbi>> {
    bundled(MRC721, &MRC721_ABI)
}

/// Parse an interface descriptor supplied by the caller
pub fn abi_from_json(name: &str, json: &str) -> MbrsxResult<Arc<JsonAbi>> {
    bundled(name, &parse_abi(json))
}
