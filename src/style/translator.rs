use crate::errors::{Error, Result};
use crate::extensions::string::CharPairs;
use crate::style::csi::ESC;
use crate::style::registry;

/// Restores the terminal's default rendition.
pub const RESET: &str = crate::csi!("0m");
/// Swaps the current foreground and background colors.
pub const SWAP: &str = crate::csi!("7m");

/// Translates a mnemonic code string into an ANSI SGR escape sequence.
///
/// A code is read as consecutive (category, attribute) character pairs:
/// `"tBfG"` selects bold text and a green foreground and yields
/// `"\x1b[1;32m"`. Parameters appear in the output in pair order, and a
/// repeated category is passed through rather than rejected.
///
/// Empty and odd-length codes fail with [`Error::MalformedCode`]; pair
/// lookups fail with [`Error::UnknownCategory`] or
/// [`Error::UnknownAttribute`].
pub fn translate(code: &str) -> Result<String> {
    let pairs = code
        .char_pairs()
        .filter(|pairs| !pairs.is_empty())
        .ok_or_else(|| Error::malformed(code))?;

    let table = registry::global();
    let mut params = Vec::with_capacity(pairs.len());
    for (category, attribute) in pairs {
        params.push(table.param(category, attribute)?);
    }

    Ok(format!("{ESC}[{}m", params.join(";")))
}

/// Wraps `text` in the sequence for `code` and a trailing [`RESET`].
pub fn styled(code: &str, text: &str) -> Result<String> {
    Ok(format!("{}{text}{RESET}", translate(code)?))
}
