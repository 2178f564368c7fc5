// Control characters and helpers for composing ANSI escape sequences.

/// ESC (escape) control character.
pub const ESC: &str = "\x1B";
/// ESC (escape) as a character value, for scanning styled text.
pub const ESC_CHAR: char = '\x1B';

/// Builds a CSI (Control Sequence Introducer) escape sequence from a
/// literal suffix at compile time.
///
/// `csi!("0m")` expands to the string `"\x1B[0m"`.
#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}
