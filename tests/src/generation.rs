#![cfg(test)]
use macgen_common::error::MacgenError;
use macgen_common::network::hypervisor::PrefixTable;
use macgen_common::network::prefix::Prefix;
use macgen_core::{generator, resolver};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_well_formed(mac: &str, prefix: &str) {
    let groups: Vec<&str> = mac.split(':').collect();
    assert_eq!(groups.len(), 6, "wrong group count in {mac}");
    for group in &groups {
        assert_eq!(group.len(), 2, "bad group in {mac}");
        assert!(
            group.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')),
            "not lowercase hex: {mac}"
        );
    }
    assert!(mac.starts_with(&format!("{prefix}:")), "{mac} does not start with {prefix}");

    let fourth = u8::from_str_radix(groups[3], 16).unwrap();
    assert!(fourth <= 0x7f, "fourth byte too large in {mac}");
}

/// `--custom 52:54:00 -c 3`
#[test]
fn custom_prefix_three_addresses() {
    let prefix = resolver::resolve_custom("52:54:00").unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let addrs = generator::generate(prefix, 3, &mut rng);

    assert_eq!(addrs.len(), 3);
    for mac in &addrs {
        assert_well_formed(&mac.to_string(), "52:54:00");
    }
}

/// `--custom ZZ:ZZ:ZZ`
#[test]
fn custom_prefix_rejected() {
    let result = resolver::resolve_custom("ZZ:ZZ:ZZ");
    assert!(matches!(result, Err(MacgenError::InvalidPrefix { .. })));
}

#[test]
fn every_table_entry_generates() {
    let table = PrefixTable::default();
    let mut rng = StdRng::seed_from_u64(99);

    let entries = table.iter().count();
    assert_eq!(entries, 5);

    for number in 1..=entries {
        let hypervisor = resolver::resolve_selection(&table, &number.to_string()).unwrap();
        for mac in generator::generate(hypervisor.prefix, 50, &mut rng) {
            assert_well_formed(&mac.to_string(), &hypervisor.prefix.to_string());
        }
    }
}

#[test]
fn selection_one_is_xen() {
    let table = PrefixTable::default();
    let hypervisor = resolver::resolve_selection(&table, "1").unwrap();

    assert_eq!(hypervisor.prefix, Prefix::new(0x00, 0x16, 0x3e));
}

#[test]
fn selection_past_table_end() {
    let table = PrefixTable::default();
    let result = resolver::resolve_selection(&table, "6");

    assert!(matches!(result, Err(MacgenError::InvalidSelection { .. })));
}

#[test]
fn unseeded_runs_respect_byte_ranges() {
    let prefix = Prefix::new(0x00, 0x15, 0x5d);

    for _ in 0..3 {
        let mut rng = StdRng::from_os_rng();
        for mac in generator::generate(prefix, 100, &mut rng) {
            assert_well_formed(&mac.to_string(), "00:15:5d");
        }
    }
}
