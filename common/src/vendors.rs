use crate::network::prefix::Prefix;

/// Defines the contract for resolving the organisation a prefix is registered to.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given prefix.
    ///
    /// # Returns
    /// * `Some(String)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown.
    fn get_vendor(&self, prefix: Prefix) -> Option<String>;
}
