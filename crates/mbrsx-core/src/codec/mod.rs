// ABI encoding, decoding and argument marshalling

pub mod decoding;
pub mod encoding;
pub mod marshal;

pub use decoding::{
    abi_decode_logs, decode_function_output, first_address, first_bool, first_selector,
    first_string, first_uint, CallOutput,
};
pub use encoding::{encode_function_call, find_function, json_args_to_sol_values};
pub use marshal::{
    address_arg, bool_arg, bytes_arg, ensure_hex_prefix, format_units, from_hex_quantity,
    quantity_arg, string_to_address, to_hex_quantity,
};
