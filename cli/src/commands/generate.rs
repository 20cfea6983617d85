use std::io::BufRead;

use colored::*;
use pnet::util::MacAddr;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, enabled, Level};

use crate::mprint;
use crate::terminal::{menu, print};
use macgen_common::config::Config;
use macgen_common::network::hypervisor::PrefixTable;
use macgen_common::network::prefix::Prefix;
use macgen_common::vendors::VendorRepository;
use macgen_core::vendors::MacOuiRepo;
use macgen_core::{generator, persist, resolver};

/// Resolves the prefix, generates, prints and optionally saves.
///
/// Nothing is generated or printed past the menu if the prefix cannot be resolved.
pub fn generate<R: BufRead>(cfg: &Config, table: &PrefixTable, input: &mut R) -> anyhow::Result<Vec<MacAddr>> {
    let prefix: Prefix = match &cfg.custom {
        Some(raw) => resolver::resolve_custom(raw)?,
        None => menu::select(table, input)?.prefix,
    };

    if enabled!(Level::DEBUG) {
        if let Some(vendor) = MacOuiRepo.get_vendor(prefix) {
            debug!("Prefix {prefix} is registered to {vendor}");
        }
    }

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let addrs = generator::generate(prefix, cfg.count, &mut rng);

    for line in output_lines(&addrs, cfg.quiet) {
        print::print(&line);
    }

    if let Some(path) = &cfg.save {
        persist::save(path, &addrs)?;
        if cfg.quiet == 0 {
            mprint!();
            print::print(&format!(
                "{} '{}'.",
                "MAC addresses saved successfully to".green(),
                path.display()
            ));
        }
    }

    Ok(addrs)
}

const HEADER: &str = "Generated MAC Addresses:";

/// Console lines for `addrs`: a blank line, the header and its `=` rule,
/// then each address indented by two spaces. Quiet output is bare addresses.
fn output_lines(addrs: &[MacAddr], quiet: u8) -> Vec<String> {
    if quiet > 0 {
        return addrs.iter().map(MacAddr::to_string).collect();
    }

    let mut lines = vec![
        String::new(),
        HEADER.to_string(),
        "=".repeat(HEADER.len()),
    ];
    lines.extend(addrs.iter().map(|mac| format!("  {mac}")));
    lines
}
