use std::str::FromStr;

use alloy::dyn_abi::{DynSolValue, EventExt, FunctionExt};
use alloy::hex;
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::{Address, LogData, B256, U256};
use error_stack::{Report, ResultExt};

use crate::codec::marshal::string_to_address;
use crate::constants::ZERO_SELECTOR;
use crate::errors::{CodecError, MbrsxError, MbrsxResult};
use crate::transaction::{ContractEvent, ReceiptLog};

/// Decoded output of a read call; `None` when the node returned nothing
pub type CallOutput = Option<Vec<DynSolValue>>;

pub fn decode_function_output(function: &Function, output: &[u8]) -> MbrsxResult<CallOutput> {
    if output.is_empty() {
        return Ok(None);
    }
    let values = function
        .abi_decode_output(output)
        .map_err(|e| Report::new(MbrsxError::Codec(CodecError::AbiDecodingFailed(e.to_string()))))
        .attach_printable(format!("Decoding output of '{}'", function.signature()))?;
    Ok(Some(values))
}

// Empty responses degrade to zero values. A genuine zero and a missing answer
// are indistinguishable past this point.

pub fn first_address(output: CallOutput) -> Address {
    match output.as_deref() {
        Some([DynSolValue::Address(address), ..]) => *address,
        _ => Address::ZERO,
    }
}

pub fn first_bool(output: CallOutput) -> bool {
    matches!(output.as_deref(), Some([DynSolValue::Bool(true), ..]))
}

pub fn first_uint(output: CallOutput) -> U256 {
    match output.as_deref() {
        Some([DynSolValue::Uint(value, _), ..]) => *value,
        _ => U256::ZERO,
    }
}

pub fn first_string(output: CallOutput) -> String {
    match output.as_deref() {
        Some([DynSolValue::String(value), ..]) => value.clone(),
        _ => String::new(),
    }
}

/// Four-byte selector as eight hex characters, all zero when absent
pub fn first_selector(output: CallOutput) -> String {
    match output.as_deref() {
        Some([DynSolValue::FixedBytes(word, size), ..]) if *size >= 4 => hex::encode(&word[..4]),
        _ => ZERO_SELECTOR.to_string(),
    }
}

/// Decode the logs emitted by `address` against the events of `abi`.
/// Logs from other contracts, and logs matching no known event, are skipped.
pub fn abi_decode_logs(
    abi: &JsonAbi,
    address: Address,
    logs: &[ReceiptLog],
) -> MbrsxResult<Vec<ContractEvent>> {
    let mut events = vec![];
    for log in logs.iter() {
        let log_address = string_to_address(&log.address)?;
        if log_address != address {
            continue;
        }

        let topics = log
            .topics
            .iter()
            .map(|topic| {
                B256::from_str(topic).map_err(|e| {
                    Report::new(MbrsxError::Codec(CodecError::AbiDecodingFailed(format!(
                        "invalid topic {}: {}",
                        topic, e
                    ))))
                })
            })
            .collect::<MbrsxResult<Vec<B256>>>()?;

        let Some(first_topic) = topics.first() else { continue };
        let Some(event) = abi.events().find(|event| event.selector() == *first_topic) else {
            continue;
        };

        let data = hex::decode(&log.data).map_err(|e| {
            Report::new(MbrsxError::Codec(CodecError::AbiDecodingFailed(format!(
                "invalid log data: {}",
                e
            ))))
        })?;

        let decoded = event
            .decode_log(&LogData::new_unchecked(topics.clone(), data.into()))
            .map_err(|e| {
                Report::new(MbrsxError::Codec(CodecError::AbiDecodingFailed(e.to_string())))
            })
            .attach_printable(format!("Decoding event '{}' at address {}", event.name, address))?;

        let mut indexed = decoded.indexed.into_iter();
        let mut body = decoded.body.into_iter();
        let mut params = vec![];
        for input in event.inputs.iter() {
            let value = if input.indexed { indexed.next() } else { body.next() };
            if let Some(value) = value {
                params.push((input.name.clone(), value));
            }
        }

        events.push(ContractEvent { name: event.name.clone(), address, params });
    }
    Ok(events)
}
