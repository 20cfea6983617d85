use macgen_common::network::prefix::Prefix;
use pnet::util::MacAddr;
use rand::Rng;
use tracing::debug;

/// Upper bound of the first random byte. Keeps the high bit of byte 4 clear.
pub(crate) const FIRST_SUFFIX_MAX: u8 = 0x7f;

/// Generates one address: the prefix followed by three random bytes.
pub fn random_mac<R: Rng>(prefix: Prefix, rng: &mut R) -> MacAddr {
    let suffix: [u8; 3] = [
        rng.random_range(0..=FIRST_SUFFIX_MAX),
        rng.random(),
        rng.random(),
    ];
    prefix.with_suffix(suffix)
}

/// Generates `count` addresses in order. Duplicates are possible and not filtered.
pub fn generate<R: Rng>(prefix: Prefix, count: usize, rng: &mut R) -> Vec<MacAddr> {
    debug!("Generating {count} addresses with prefix {prefix}");
    (0..count).map(|_| random_mac(prefix, rng)).collect()
}
