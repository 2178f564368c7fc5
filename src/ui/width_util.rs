use terminal_size::{Width, terminal_size};

use crate::style::csi::ESC_CHAR;
type CharIter<'a> = std::iter::Peekable<std::str::Chars<'a>>;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    fn strip_csi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            if c == ESC_CHAR && Self::is_csi_start(chars.peek()) {
                Self::consume_csi(&mut chars);
                continue;
            }
            out.push(c);
        }
        out
    }

    fn is_csi_start(next: Option<&char>) -> bool {
        matches!(next, Some('['))
    }

    fn consume_csi(chars: &mut CharIter<'_>) {
        let _ = chars.next(); // skip '['
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }

    /// Character count of `s` with CSI escape sequences removed.
    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_csi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_csi_for_test(s: &str) -> String {
        Self::strip_csi(s)
    }

    /// Pads `s` with trailing spaces up to `width` visible characters.
    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            format!("{s}{}", " ".repeat(width - w))
        }
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        if let Some((Width(w), _)) = terminal_size() {
            w as usize
        } else {
            80
        }
    }

    /// Left padding to center content of `content_width` inside the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        let tw = self.terminal_width();
        tw.saturating_sub(content_width) / 2
    }
}
