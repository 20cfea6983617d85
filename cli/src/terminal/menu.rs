//! Interactive hypervisor selection.

use std::io::BufRead;

use macgen_common::network::hypervisor::{Hypervisor, PrefixTable};
use macgen_core::resolver;

use crate::mprint;
use crate::terminal::print;

/// Shows the table, reads one line from `input` and resolves it. No retries.
pub fn select<'a, R: BufRead>(table: &'a PrefixTable, input: &mut R) -> anyhow::Result<&'a Hypervisor> {
    mprint!();
    print::print("Select the hypervisor for which to generate a MAC address:");
    for (idx, hypervisor) in table.iter().enumerate() {
        print::menu_entry(idx + 1, hypervisor.name, hypervisor.description);
    }

    mprint!();
    print::prompt("Enter the number of your choice: ")?;

    let line = read_choice(input)?;
    Ok(resolver::resolve_selection(table, &line)?)
}

/// Reads a single line. End of input yields an empty string.
///
/// Bytes that are not UTF-8 are replaced, so they fail as a bad selection
/// rather than as a read error.
fn read_choice<R: BufRead>(input: &mut R) -> std::io::Result<String> {
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}
