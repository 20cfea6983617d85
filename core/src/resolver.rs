//! Turns user input into a [`Prefix`].
//!
//! Either a menu number typed at the prompt or a custom `XX:XX:XX` string.

use macgen_common::error::MacgenError;
use macgen_common::network::hypervisor::{Hypervisor, PrefixTable};
use macgen_common::network::prefix::Prefix;
use tracing::debug;

/// Maps a line typed at the menu prompt to a table entry.
///
/// The line must be a menu number of an existing entry, whitespace around it is ignored.
pub fn resolve_selection<'a>(
    table: &'a PrefixTable,
    input: &str,
) -> Result<&'a Hypervisor, MacgenError> {
    let invalid = || MacgenError::InvalidSelection { input: input.trim().to_string() };

    let number: usize = input.trim().parse().map_err(|_| invalid())?;
    let hypervisor = table.select(number).ok_or_else(invalid)?;

    debug!("Selected {} ({})", hypervisor.name, hypervisor.prefix);
    Ok(hypervisor)
}

pub fn resolve_custom(input: &str) -> Result<Prefix, MacgenError> {
    let prefix: Prefix = input.parse()?;
    debug!("Using custom prefix {prefix}");
    Ok(prefix)
}
