#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use macgen_common::network::prefix::Prefix;
use macgen_core::{generator, persist};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("macgen-it-{}-{name}", std::process::id()))
}

/// `-s out.txt -c 5`, twice.
#[test]
fn save_five_then_overwrite() {
    let path = temp_path("out.txt");
    let prefix = Prefix::new(0x00, 0x16, 0x3e);
    let mut rng = StdRng::seed_from_u64(5);

    let first = generator::generate(prefix, 5, &mut rng);
    persist::save(&path, &first).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    assert!(contents.ends_with('\n'));
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 5);
    for (line, mac) in lines.iter().zip(&first) {
        assert_eq!(*line, mac.to_string());
    }

    let second = generator::generate(prefix, 5, &mut rng);
    persist::save(&path, &second).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    assert_eq!(contents.lines().count(), 5);
    assert_eq!(contents, persist::render(&second));

    let _ = fs::remove_file(&path);
}

#[test]
fn save_zero_addresses_leaves_empty_file() {
    let path = temp_path("empty.txt");
    let prefix = Prefix::new(0x52, 0x54, 0x00);
    let addrs = generator::generate(prefix, 0, &mut StdRng::seed_from_u64(0));

    persist::save(&path, &addrs).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    let _ = fs::remove_file(&path);
}
