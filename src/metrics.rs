//! Advance widths of the glyphs in a subset.

use crate::engine::FontEngine;
use std::cell::RefCell;
use std::fmt::Write;

/// Runs of at least this many equal widths are written as a range.
const MIN_RUN: usize = 10;

/// Memoized advance widths in PDF text space, indexed by new glyph index.
///
/// The registry only ever grows, so the memo is extended with the widths of
/// glyphs registered since the last call instead of being rebuilt.
#[derive(Debug, Default)]
pub(crate) struct WidthTable {
    widths: RefCell<Vec<i32>>,
}

impl WidthTable {
    /// The widths of `glyphs`, which are indexed by new glyph index.
    pub fn get(&self, engine: &dyn FontEngine, glyphs: &[u16]) -> Vec<i32> {
        let mut widths = self.widths.borrow_mut();
        if widths.len() > glyphs.len() {
            widths.clear();
        }

        let upem = engine.units_per_em();
        for &glyph in &glyphs[widths.len()..] {
            let advance = engine.advance_width(glyph).unwrap_or_else(|| {
                log::warn!("glyph {glyph} has no metrics");
                0
            });
            widths.push(scale(advance, upem));
        }

        widths.clone()
    }

    /// Forget all memoized widths.
    pub fn reset(&self) {
        self.widths.borrow_mut().clear();
    }
}

/// Scale a width in font units to 1000 units per em.
fn scale(advance: u16, units_per_em: u16) -> i32 {
    if units_per_em == 0 {
        return i32::from(advance);
    }

    (f64::from(advance) * 1000.0 / f64::from(units_per_em)).round() as i32
}

/// Write the width specification of a CID font.
///
/// If all glyphs have the same width, only a default width is written.
/// Otherwise, widths are listed as `c [w1 w2 ...]`, except for runs of equal
/// widths that are long enough to be written as `c_first c_last w`.
pub(crate) fn width_array(widths: &[i32]) -> Vec<u8> {
    let mut out = String::new();

    if let Some(&first) = widths.first().filter(|&&w| widths.iter().all(|&v| v == w)) {
        write!(out, "/DW {first}").ok();
        return out.into_bytes();
    }

    out.push_str("/W [");
    let n = widths.len();
    let mut g = 0;
    while g < n {
        let start = g;
        let mut start_linear: Option<usize> = None;
        let mut w = widths[g];
        g += 1;

        while g < n {
            let next = widths[g];
            if next == w {
                start_linear.get_or_insert(g - 1);
            } else {
                if start_linear.is_some_and(|s| g - s >= MIN_RUN) {
                    break;
                }
                start_linear = None;
            }
            w = next;
            g += 1;
        }

        if start_linear.is_some_and(|s| g - s < MIN_RUN) {
            start_linear = None;
        }

        let end_nonlinear = start_linear.unwrap_or(g);
        if end_nonlinear > start {
            write!(out, "{start} [").ok();
            for (i, w) in widths[start..end_nonlinear].iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write!(out, "{w}").ok();
            }
            out.push_str("]\n");
        }

        if let Some(s) = start_linear {
            writeln!(out, "{s} {} {}", g - 1, widths[s]).ok();
        }
    }
    out.push(']');

    out.into_bytes()
}
