//! Clipboard writes through the OSC 52 terminal escape.

use std::io::{self, Write};

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Asks the terminal to place `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_payload_in_base64() {
        assert_eq!(osc52_sequence("intd_prod"), "\x1b]52;c;aW50ZF9wcm9k\x07");
    }
}
