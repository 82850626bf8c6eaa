//! Customer table implementation
//!
//! Vec-backed table with RwLock for concurrency.

use std::fs;
use std::path::Path;

use parking_lot::RwLock;

use crate::error::{CrmError, Result};
use crate::protocol::decode_customers;

use super::Customer;

/// In-memory table of customers
///
/// ## Concurrency:
/// - `customers`: Protected by RwLock (many concurrent readers, exclusive writer)
/// - Every mutation holds the write lock for its whole duration, so the id
///   scan in `create` and the append that follows cannot interleave
/// - All methods use `&self`; share the store behind an `Arc`
pub struct CustomerStore {
    /// Records in listing order
    customers: RwLock<Vec<Customer>>,
}

impl CustomerStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(Vec::with_capacity(16)),
        }
    }

    // =========================================================================
    // Bulk Load
    // =========================================================================

    /// Replace the whole contents with the JSON array in `source`
    ///
    /// This is a replacement, not a merge. If `source` does not decode the
    /// current contents are left as they were.
    pub fn load_all(&self, source: &[u8]) -> Result<()> {
        let loaded = decode_customers(source)?;
        let count = loaded.len();

        *self.customers.write() = loaded;

        tracing::debug!("Loaded {} customers", count);
        Ok(())
    }

    /// Replace the whole contents with the JSON array stored at `path`
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = fs::read(path)?;

        self.load_all(&data).map_err(|e| match e {
            CrmError::Decode(msg) => CrmError::Decode(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get every customer in store order
    pub fn list_all(&self) -> Vec<Customer> {
        self.customers.read().clone()
    }

    /// Get the first customer with the given id
    pub fn get_by_id(&self, id: i64) -> Option<Customer> {
        self.customers.read().iter().find(|c| c.id == id).cloned()
    }

    /// Number of customers in the store
    pub fn count(&self) -> usize {
        self.customers.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.customers.read().is_empty()
    }

    /// The id the next `create` would assign
    pub fn next_id(&self) -> Result<i64> {
        Self::next_id_in(&self.customers.read())
    }

    /// One past the highest positive id present, or 1 when there is none
    ///
    /// Recomputed on every call, so once the highest record is deleted its
    /// id is handed out again. Fails once `i64::MAX` is taken.
    fn next_id_in(customers: &[Customer]) -> Result<i64> {
        customers
            .iter()
            .map(|c| c.id)
            .fold(0, i64::max)
            .checked_add(1)
            .ok_or(CrmError::IdsExhausted)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new, uncontacted customer and return it
    ///
    /// Only fails with `IdsExhausted` when a record already holds `i64::MAX`.
    pub fn create(&self, name: &str, role: &str, email: &str, phone: &str) -> Result<Customer> {
        let mut customers = self.customers.write();

        let customer = Customer::new(Self::next_id_in(&customers)?, name, role, email, phone);
        customers.push(customer.clone());

        tracing::debug!("Created customer {}", customer.id);
        Ok(customer)
    }

    /// Apply `patch` to the customer with the given id
    ///
    /// See [`Customer::apply_patch`] for which fields are taken.
    pub fn update_by_id(&self, id: i64, patch: &Customer) -> Result<Customer> {
        let mut customers = self.customers.write();

        let customer = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CrmError::NotFound(id))?;
        customer.apply_patch(patch);

        tracing::debug!("Updated customer {}", id);
        Ok(customer.clone())
    }

    /// Remove the customer with the given id and return it
    pub fn delete_by_id(&self, id: i64) -> Result<Customer> {
        let mut customers = self.customers.write();

        let index = customers
            .iter()
            .position(|c| c.id == id)
            .ok_or(CrmError::NotFound(id))?;
        let removed = customers.remove(index);

        tracing::debug!("Deleted customer {}", id);
        Ok(removed)
    }
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::new()
    }
}
