//! Store Module
//!
//! In-memory table of customer records.
//!
//! ## Responsibilities
//! - Assign ids to new customers
//! - Lookup, partial update and removal by id
//! - Wholesale replacement from a serialized collection
//!
//! ## Data Structure Choice
//! A `Vec` wrapped in a `RwLock`:
//! - Insertion order is the listing order
//! - Removal shifts later records down, keeping their relative order
//! - Lookups are linear scans, fine at the record counts this serves

mod customer;
mod table;

pub use customer::Customer;
pub use table::CustomerStore;
