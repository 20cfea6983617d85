use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use tracing::info;

/// Events with this target are written verbatim by the formatter.
pub const PRINT_TARGET: &str = "macgen::print";

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Writes `msg` without a newline so the cursor stays on the same line.
pub fn prompt(msg: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", msg.color(colors::TEXT_DEFAULT))?;
    stdout.flush()
}

pub fn menu_entry(idx: usize, name: &str, description: &str) {
    print(&format!(
        "  {}{} {} {} {}",
        idx.to_string().color(colors::ACCENT),
        ".".color(colors::SEPARATOR),
        name.color(colors::PRIMARY),
        "-".color(colors::SEPARATOR),
        description.color(colors::TEXT_DEFAULT)
    ));
}
