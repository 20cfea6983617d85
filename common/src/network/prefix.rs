//! # Vendor Prefix
//!
//! The first three bytes of a MAC address, also known as the OUI.
//!
//! Prefixes are written as `XX:XX:XX` where every `XX` is exactly two
//! hexadecimal digits. Upper and lower case are both accepted, output is
//! always lowercase.

use std::fmt;
use std::str::FromStr;

use pnet::util::MacAddr;

use crate::error::MacgenError;

pub const PREFIX_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix([u8; PREFIX_LEN]);

impl Prefix {
    pub const fn new(a: u8, b: u8, c: u8) -> Self {
        Self([a, b, c])
    }

    /// Builds a full address from this prefix and the three trailing bytes.
    pub fn with_suffix(&self, suffix: [u8; 3]) -> MacAddr {
        let [a, b, c] = self.0;
        let [d, e, f] = suffix;
        MacAddr::new(a, b, c, d, e, f)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}")
    }
}

impl FromStr for Prefix {
    type Err = MacgenError;

    /// Parses `XX:XX:XX`.
    ///
    /// Exactly three tokens, each exactly two hex digits. Whitespace around
    /// the whole string is ignored, whitespace inside it is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MacgenError::InvalidPrefix { input: s.trim().to_string() };

        let tokens: Vec<&str> = s.trim().split(':').collect();
        if tokens.len() != PREFIX_LEN {
            return Err(invalid());
        }

        let mut octets = [0u8; PREFIX_LEN];
        for (octet, token) in octets.iter_mut().zip(&tokens) {
            *octet = parse_octet(token).ok_or_else(invalid)?;
        }

        Ok(Self(octets))
    }
}

/// `u8::from_str_radix` alone would accept `+5` and `5`.
fn parse_octet(token: &str) -> Option<u8> {
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
