use std::path::PathBuf;

/// A single generation request, built from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of addresses to generate.
    pub count: usize,
    /// Where to write the generated addresses, if anywhere.
    pub save: Option<PathBuf>,
    /// Raw `XX:XX:XX` prefix. Skips the interactive menu when present.
    pub custom: Option<String>,
    /// Seeds the random source so runs can be reproduced.
    pub seed: Option<u64>,
    /// `0` prints everything. Any higher level prints bare addresses only,
    /// levels above `1` behave exactly like `1`.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 1,
            save: None,
            custom: None,
            seed: None,
            quiet: 0,
        }
    }
}
