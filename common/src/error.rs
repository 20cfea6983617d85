use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MacgenError {
    #[error("Invalid choice '{input}'. Please select a valid number from the menu.")]
    InvalidSelection { input: String },
    #[error("Invalid custom prefix '{input}'. Please enter a valid prefix in the format 'XX:XX:XX'.")]
    InvalidPrefix { input: String },
    #[error("Failed to save MAC addresses to '{}': {source}", path.display())]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
