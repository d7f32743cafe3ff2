use alloy::dyn_abi::{DynSolValue, JsonAbiExt};
use alloy::hex;
use alloy::json_abi::{Function, JsonAbi, Param};
use alloy::primitives::{B256, U256};
use error_stack::{Report, ResultExt};
use serde_json::Value;

use crate::codec::marshal::{from_hex_quantity, string_to_address};
use crate::errors::{CodecError, MbrsxError, MbrsxResult};

/// Find a function by its canonical signature (`rate()`), or by bare name
pub fn find_function<'a>(abi: &'a JsonAbi, signature: &str) -> MbrsxResult<&'a Function> {
    let found = if signature.contains('(') {
        abi.functions().find(|function| function.signature() == signature)
    } else {
        abi.function(signature).and_then(|overloads| overloads.first())
    };

    found.ok_or_else(|| {
        let mut error = Report::new(MbrsxError::Codec(CodecError::FunctionNotFound(
            signature.to_string(),
        )));
        let available: Vec<String> = abi.functions().map(|f| f.signature()).collect();
        if !available.is_empty() {
            error = error.attach_printable(format!("Available functions: {}", available.join(", ")));
        }
        error
    })
}

/// ABI-encode a call, selector included
pub fn encode_function_call(
    abi: &JsonAbi,
    signature: &str,
    args: &[Value],
) -> MbrsxResult<(Function, Vec<u8>)> {
    let function = find_function(abi, signature)?;
    let values = json_args_to_sol_values(function, args)
        .attach_printable(format!("Encoding arguments for function '{}'", signature))?;
    let calldata = function.abi_encode_input(&values).map_err(|e| {
        Report::new(MbrsxError::Codec(CodecError::AbiEncodingFailed(e.to_string())))
    })?;
    Ok((function.clone(), calldata))
}

pub fn json_args_to_sol_values(function: &Function, args: &[Value]) -> MbrsxResult<Vec<DynSolValue>> {
    if args.len() != function.inputs.len() {
        let mut error = Report::new(MbrsxError::Codec(CodecError::ArgumentCountMismatch {
            expected: function.inputs.len(),
            got: args.len(),
        }));
        for (i, param) in function.inputs.iter().enumerate() {
            error = error.attach_printable(format!(
                "  [{}] {}: {}",
                i,
                if param.name.is_empty() { "arg" } else { &param.name },
                param.ty
            ));
        }
        return Err(error);
    }

    function
        .inputs
        .iter()
        .zip(args.iter())
        .enumerate()
        .map(|(i, (param, value))| {
            json_to_sol_value(value, param)
                .attach_printable(format!("Encoding parameter #{} ({})", i + 1, param.name))
        })
        .collect()
}

pub fn json_to_sol_value(value: &Value, param: &Param) -> MbrsxResult<DynSolValue> {
    let ty = param.ty.as_str();
    let invalid = || {
        Report::new(MbrsxError::Codec(CodecError::InvalidValue {
            value: value.to_string(),
            target_type: ty.to_string(),
        }))
    };

    if ty.ends_with(']') || ty.starts_with("tuple") {
        return Err(Report::new(MbrsxError::Codec(CodecError::UnsupportedAbiType(
            ty.to_string(),
        ))));
    }

    let sol_value = match ty {
        "address" => {
            let raw = value.as_str().ok_or_else(invalid)?;
            DynSolValue::Address(string_to_address(raw)?)
        }
        "bool" => match value {
            Value::Bool(flag) => DynSolValue::Bool(*flag),
            Value::String(s) if s == "true" || s == "false" => DynSolValue::Bool(s == "true"),
            _ => return Err(invalid()),
        },
        "string" => DynSolValue::String(value.as_str().ok_or_else(invalid)?.to_string()),
        "bytes" => {
            let raw = value.as_str().ok_or_else(invalid)?;
            DynSolValue::Bytes(hex::decode(raw).map_err(|_| invalid())?)
        }
        _ if ty.starts_with("uint") => {
            let bits = type_size(ty, "uint", 256).ok_or_else(invalid)?;
            let number = match value {
                Value::String(s) if s.starts_with("0x") => from_hex_quantity(s)?,
                Value::String(s) => U256::from_str_radix(s, 10).map_err(|_| invalid())?,
                Value::Number(n) => U256::from(n.as_u64().ok_or_else(invalid)?),
                _ => return Err(invalid()),
            };
            DynSolValue::Uint(number, bits)
        }
        _ if ty.starts_with("bytes") => {
            let size = type_size(ty, "bytes", 32).filter(|size| *size <= 32).ok_or_else(invalid)?;
            let raw = value.as_str().ok_or_else(invalid)?;
            let bytes = hex::decode(raw).map_err(|_| invalid())?;
            if bytes.len() > size {
                return Err(invalid())
                    .attach_printable(format!("{} bytes do not fit in {}", bytes.len(), ty));
            }
            DynSolValue::FixedBytes(B256::right_padding_from(&bytes), size)
        }
        _ => {
            return Err(Report::new(MbrsxError::Codec(CodecError::UnsupportedAbiType(
                ty.to_string(),
            ))))
        }
    };
    Ok(sol_value)
}

fn type_size(ty: &str, stem: &str, default: usize) -> Option<usize> {
    let suffix = ty.strip_prefix(stem)?;
    if suffix.is_empty() {
        Some(default)
    } else {
        suffix.parse().ok()
    }
}
