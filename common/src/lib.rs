//! # Macgen Common
//!
//! Domain values shared by every crate in the workspace.
//!
//! * [`network::prefix::Prefix`]: a three byte vendor prefix (OUI).
//! * [`network::hypervisor::PrefixTable`]: the built-in hypervisor prefixes.
//! * [`error::MacgenError`]: failures surfaced to the user.
//! * [`config::Config`]: a single generation request.
//! * [`vendors::VendorRepository`]: resolves a prefix to its registered owner.

pub mod config;
pub mod error;
pub mod network;
pub mod vendors;
