//! Protocol codec
//!
//! Encoding and decoding functions for the JSON wire format.
//!
//! Decoders always build a fresh value, so a failed decode leaves whatever
//! the caller was about to overwrite untouched.

use serde::Serialize;

use crate::error::{CrmError, Result};
use crate::store::Customer;

use super::{ErrorResponse, LoadRequest};

// =============================================================================
// Customer Encoding/Decoding
// =============================================================================

/// Encode a single customer
pub fn encode_customer(customer: &Customer) -> Result<Vec<u8>> {
    encode(customer)
}

/// Decode a single customer
///
/// Missing fields take their zero value; unknown fields are ignored.
pub fn decode_customer(bytes: &[u8]) -> Result<Customer> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a collection of customers as a JSON array
pub fn encode_customers(customers: &[Customer]) -> Result<Vec<u8>> {
    encode(customers)
}

/// Decode a JSON array of customers
pub fn decode_customers(bytes: &[u8]) -> Result<Vec<Customer>> {
    Ok(serde_json::from_slice(bytes)?)
}

// =============================================================================
// Other Payloads
// =============================================================================

/// Encode an error body carrying `message`
pub fn encode_error(message: &str) -> Result<Vec<u8>> {
    encode(&ErrorResponse::new(message))
}

/// Decode a bulk-load request, rejecting an empty path
pub fn decode_load_request(bytes: &[u8]) -> Result<LoadRequest> {
    let request: LoadRequest = serde_json::from_slice(bytes)?;
    if request.path.is_empty() {
        return Err(CrmError::Decode("missing path".to_string()));
    }
    Ok(request)
}

/// Serialize `value` followed by a newline
fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = serde_json::to_vec(value).map_err(|e| CrmError::Encode(e.to_string()))?;
    buffer.push(b'\n');
    Ok(buffer)
}
