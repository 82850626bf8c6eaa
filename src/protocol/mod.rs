//! Protocol Module
//!
//! Defines the JSON wire format shared by the server, the CLI and bulk loads.
//!
//! ## Record Format
//! ```text
//! {"id":5,"name":"Bianca Bruxner","role":"student","email":"...","phone":"...","contacted":true}
//! ```
//!
//! - Fields appear in the order above
//! - A field at its zero value (`0`, `""`, `false`) is left out
//! - A missing field decodes to its zero value
//! - Collections are a JSON array of records
//! - Every encoded document ends with a single newline
//!
//! ### Error Format
//! ```text
//! {"message":"unknown id 42"}
//! ```

mod command;
mod response;
mod codec;

pub use command::LoadRequest;
pub use response::ErrorResponse;
pub use codec::{
    decode_customer, decode_customers, decode_load_request, encode_customer, encode_customers,
    encode_error,
};
