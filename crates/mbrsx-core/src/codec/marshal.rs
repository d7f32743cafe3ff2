// Argument marshalling shared by every contract client

use alloy::hex::{self, FromHex};
use alloy::primitives::{Address, U256};
use error_stack::{Report, ResultExt};
use serde_json::Value;

use crate::errors::{CodecError, MbrsxError, MbrsxResult};

/// Render a quantity as big-endian hex without leading zero padding (`0x3e8`)
pub fn to_hex_quantity(value: &U256) -> String {
    format!("0x{:x}", value)
}

/// Parse a hex quantity, with or without its `0x` marker
pub fn from_hex_quantity(raw: &str) -> MbrsxResult<U256> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    if digits.is_empty() {
        return Err(Report::new(MbrsxError::Codec(CodecError::InvalidQuantity(raw.to_string()))))
            .attach_printable("Hex quantity has no digits");
    }
    U256::from_str_radix(digits, 16).map_err(|e| {
        Report::new(MbrsxError::Codec(CodecError::InvalidQuantity(format!("{}: {}", raw, e))))
    })
}

/// Prefix a byte string with `0x` exactly once
pub fn ensure_hex_prefix(data: &str) -> String {
    if data.starts_with("0x") {
        data.to_string()
    } else {
        format!("0x{}", data)
    }
}

/// Convert a string to an address.
/// Handles both with and without 0x prefix, and 32-byte left padded words.
pub fn string_to_address(raw: &str) -> MbrsxResult<Address> {
    let mut address_str = raw.trim().trim_start_matches("0x").to_string();

    // 32-byte words carry the address in their last 20 bytes
    if address_str.len() == 64 {
        let split_pos = address_str
            .char_indices()
            .nth_back(39)
            .ok_or_else(|| {
                Report::new(MbrsxError::Codec(CodecError::InvalidValue {
                    value: raw.to_string(),
                    target_type: "address".to_string(),
                }))
            })?
            .0;
        address_str = address_str[split_pos..].to_string();
    }

    Address::from_hex(&address_str)
        .map_err(|e| {
            Report::new(MbrsxError::Codec(CodecError::InvalidValue {
                value: format!("{}: {}", raw, e),
                target_type: "address".to_string(),
            }))
        })
        .attach_printable(format!("Parsing address: {}", raw))
}

/// Addresses cross the provider seam as un-prefixed hex
pub fn address_arg(address: &Address) -> Value {
    Value::String(hex::encode(address))
}

pub fn quantity_arg(value: &U256) -> Value {
    Value::String(to_hex_quantity(value))
}

pub fn bytes_arg(data: &str) -> Value {
    Value::String(ensure_hex_prefix(data))
}

pub fn bool_arg(flag: bool) -> Value {
    Value::Bool(flag)
}

/// Render an integer amount with a fixed number of decimals (`150000000`, 8 -> `1.50000000`)
pub fn format_units(value: &U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    format!("{}.{}", whole, fraction)
}
