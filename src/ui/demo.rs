// Demo table: renders a styled sample for every supported code combination.

use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::errors::Result;
use crate::style::translator::{RESET, SWAP, styled, translate};
use crate::style::types::{BaseColor, Category, TextEffect};
use crate::ui::width_util::WidthUtil;

/// Caller-visible outcome of a demo run. The table itself never
/// terminates the process; the caller decides what to do with `Exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCtrl {
    /// Caller should end the process with a success status.
    Exit,
    /// Caller keeps control.
    Continue,
}

const BANNER_INNER_WIDTH: usize = 46;

// Effects used in the multi-parameter sections. The full effect alphabet
// would blow those sections up to hundreds of near-identical rows.
const PAIRED_EFFECTS: [TextEffect; 3] =
    [TextEffect::Regular, TextEffect::Bold, TextEffect::Faint];

/// Prints one styled sample per code combination so the whole alphabet can
/// be inspected on a real terminal.
#[derive(Debug, Default, Clone)]
pub struct DemoTable {
    util: WidthUtil,
}

impl DemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the table to stdout and reports whether the caller should
    /// exit the process afterwards.
    pub fn print(&self, exit_after: bool) -> Result<DemoCtrl> {
        let mut stdout = io::stdout();
        self.run(&mut stdout, exit_after)
    }

    /// Renders the table into any writer (used by tests to capture
    /// output) and reports the follow-up action for the caller.
    pub fn run<W: Write>(&self, out: &mut W, exit_after: bool) -> Result<DemoCtrl> {
        self.render(out)?;
        Ok(if exit_after {
            DemoCtrl::Exit
        } else {
            DemoCtrl::Continue
        })
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        self.render_banner(out)?;
        self.render_intro(out)?;

        self.render_heading(out, "One-parameter examples:")?;
        self.render_single_rows(out, false)?;
        writeln!(out)?;

        self.render_heading(out, "One-parameter, swapped-color examples:")?;
        self.render_single_rows(out, true)?;
        writeln!(out)?;

        self.render_heading(out, "Two-parameter examples:")?;
        self.render_pair_rows(out, false)?;
        writeln!(out)?;

        self.render_heading(out, "Two-parameter, swapped-color examples:")?;
        self.render_pair_rows(out, true)?;
        writeln!(out)?;

        self.render_heading(out, "Three-parameter examples:")?;
        self.render_triple_rows(out, false)?;
        writeln!(out)?;

        self.render_heading(out, "Three-parameter, swapped-color examples:")?;
        self.render_triple_rows(out, true)?;

        Ok(())
    }

    fn render_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!("{}T I N C T{RESET} (v{version})", translate("tB")?);
        let subtitle = styled("tI", "Mnemonic codes for terminal styling")?;

        let pad = " ".repeat(self.util.center_pad(BANNER_INNER_WIDTH + 2));
        writeln!(out, "{pad}╭{}╮", "─".repeat(BANNER_INNER_WIDTH))?;
        writeln!(out, "{pad}│{}│", self.center_in_box(&title))?;
        writeln!(out, "{pad}│{}│", self.center_in_box(&subtitle))?;
        writeln!(out, "{pad}╰{}╯", "─".repeat(BANNER_INNER_WIDTH))?;
        writeln!(out)?;
        Ok(())
    }

    fn center_in_box(&self, content: &str) -> String {
        let width = self.util.visible_width(content);
        if width >= BANNER_INNER_WIDTH {
            return content.to_string();
        }
        let left = (BANNER_INNER_WIDTH - width) / 2;
        let right = BANNER_INNER_WIDTH - width - left;
        format!("{}{content}{}", " ".repeat(left), " ".repeat(right))
    }

    fn render_intro<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "The following list of parameter combinations is {} exhaustive.",
            styled("tBfR", "not")?
        )?;
        writeln!(
            out,
            "To restore the default rendition, use {}.",
            styled("tBfC", "RESET")?
        )?;
        writeln!(
            out,
            "To swap foreground and background colors, use {}.",
            styled("tBfC", "SWAP")?
        )?;
        writeln!(
            out,
            "{} that codes render differently from terminal to terminal, and some may not be supported at all.",
            styled("tBfR", "Remember")?
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn render_heading<W: Write>(&self, out: &mut W, title: &str) -> Result<()> {
        writeln!(out, "{}", styled("tU", title)?)?;
        writeln!(out)?;
        Ok(())
    }

    /// Writes one row of samples: each code rendered in its own styling,
    /// closed by a reset, padded to a common visible width.
    fn render_samples_row<W: Write>(
        &self,
        out: &mut W,
        codes: &[String],
        swap: bool,
    ) -> Result<()> {
        let width = codes.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let swap_seq = if swap { SWAP } else { "" };

        let mut cells = Vec::with_capacity(codes.len());
        for code in codes {
            let cell = format!("{}{swap_seq}{code}{RESET}", translate(code)?);
            cells.push(self.util.pad_visible(&cell, width));
        }

        writeln!(out, "{}", cells.join(" "))?;
        Ok(())
    }

    fn render_single_rows<W: Write>(&self, out: &mut W, swap: bool) -> Result<()> {
        for category in Category::iter() {
            let codes: Vec<String> = category
                .attributes()
                .into_iter()
                .map(|(attribute, _)| format!("{}{attribute}", category.code_char()))
                .collect();
            self.render_samples_row(out, &codes, swap)?;
        }
        Ok(())
    }

    fn render_pair_rows<W: Write>(&self, out: &mut W, swap: bool) -> Result<()> {
        // Swapped samples list the background pairings first.
        if swap {
            self.render_effect_color_rows(out, Category::Background, swap)?;
            self.render_effect_color_rows(out, Category::Foreground, swap)?;
        } else {
            self.render_effect_color_rows(out, Category::Foreground, swap)?;
            self.render_effect_color_rows(out, Category::Background, swap)?;
        }
        self.render_color_pair_rows(out, swap)
    }

    fn render_effect_color_rows<W: Write>(
        &self,
        out: &mut W,
        colors: Category,
        swap: bool,
    ) -> Result<()> {
        for effect in PAIRED_EFFECTS {
            let codes: Vec<String> = BaseColor::iter()
                .map(|color| {
                    format!(
                        "t{}{}{}",
                        effect.code_char(),
                        colors.code_char(),
                        color.code_char()
                    )
                })
                .collect();
            self.render_samples_row(out, &codes, swap)?;
        }
        Ok(())
    }

    fn render_color_pair_rows<W: Write>(&self, out: &mut W, swap: bool) -> Result<()> {
        for outer in BaseColor::iter() {
            let codes: Vec<String> = BaseColor::iter()
                .map(|inner| {
                    let (fg, bg) = if swap { (inner, outer) } else { (outer, inner) };
                    format!("f{}b{}", fg.code_char(), bg.code_char())
                })
                .collect();
            self.render_samples_row(out, &codes, swap)?;
        }
        Ok(())
    }

    fn render_triple_rows<W: Write>(&self, out: &mut W, swap: bool) -> Result<()> {
        for outer in BaseColor::iter() {
            for effect in PAIRED_EFFECTS {
                let codes: Vec<String> = BaseColor::iter()
                    .map(|inner| {
                        let (fg, bg) = if swap { (inner, outer) } else { (outer, inner) };
                        format!(
                            "t{}f{}b{}",
                            effect.code_char(),
                            fg.code_char(),
                            bg.code_char()
                        )
                    })
                    .collect();
                self.render_samples_row(out, &codes, swap)?;
            }
        }
        Ok(())
    }
}
