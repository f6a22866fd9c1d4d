use crate::engine::FontEngine;
use crate::metrics::{self, WidthTable};
use crate::remapper::GlyphRemapper;
use crate::standard::StandardFont;
use crate::type1::{Ledger, Source};
use crate::unicode::GlyphNames;
use crate::{pdf, truetype, Error, Result};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// The subset of one font in one document.
///
/// The context holds a shared reference to the font's engine for as long as
/// it lives. All glyph indices it hands out are new indices, i.e. indices
/// into the subset.
pub struct SubsetContext {
    engine: Arc<dyn FontEngine>,
    object_id: u32,
    remapper: GlyphRemapper,
    widths: WidthTable,
    names: GlyphNames,
    ledger: Ledger,
    standard_font: Option<StandardFont>,
    no_embed: bool,
}

impl SubsetContext {
    /// Create a context for a font that is written as the object with number
    /// `object_id`.
    ///
    /// The `.notdef` glyph is always part of the subset with new index 0.
    pub fn new(engine: Arc<dyn FontEngine>, object_id: u32) -> Self {
        let standard_font =
            engine.postscript_name().and_then(|name| StandardFont::from_postscript_name(&name));

        if let Some(font) = standard_font {
            log::debug!("object {object_id} uses the standard font {font}");
        }

        Self {
            engine,
            object_id,
            remapper: GlyphRemapper::new(),
            widths: WidthTable::default(),
            names: GlyphNames::default(),
            ledger: Ledger::default(),
            standard_font,
            no_embed: standard_font.is_some(),
        }
    }

    /// Register a glyph of the source font and return its new index.
    ///
    /// Registering the same glyph again returns the same index. The glyph
    /// must exist in the source font, see [`try_add_glyph`](Self::try_add_glyph)
    /// for a checked version.
    pub fn add_glyph(&mut self, glyph: u16) -> u16 {
        debug_assert!(
            glyph < self.engine.glyph_count(),
            "glyph {glyph} is out of range"
        );
        self.remapper.remap(glyph)
    }

    /// Register a glyph of the source font, checking that it exists.
    pub fn try_add_glyph(&mut self, glyph: u16) -> Result<u16> {
        let count = self.engine.glyph_count();
        if glyph >= count {
            return Err(Error::GlyphOutOfRange { glyph, count });
        }
        Ok(self.remapper.remap(glyph))
    }

    /// The number of glyphs in the subset, including `.notdef`.
    ///
    /// This never decreases. Writing a TrueType font can increase it, as
    /// composite glyphs pull their components into the subset.
    pub fn num_glyphs(&self) -> usize {
        self.remapper.num_gids()
    }

    /// The glyphs of the source font, indexed by new index.
    pub fn glyph_indices(&self) -> &[u16] {
        self.remapper.as_slice()
    }

    /// The number of the object the font is written as.
    pub fn object_id(&self) -> u32 {
        self.object_id
    }

    /// The font engine of the subset.
    pub fn engine(&self) -> &Arc<dyn FontEngine> {
        &self.engine
    }

    /// Whether the font program must not be embedded.
    pub fn no_embed(&self) -> bool {
        self.no_embed
    }

    /// Forbid or allow embedding the font program.
    ///
    /// Standard fonts can never be embedded.
    pub fn set_no_embed(&mut self, no_embed: bool) {
        self.no_embed = no_embed || self.standard_font.is_some();
    }

    /// The standard font the source font was matched to, if any.
    pub fn standard_font(&self) -> Option<StandardFont> {
        self.standard_font
    }

    /// Whether the source font is one of the 14 standard fonts.
    pub fn is_standard_font(&self) -> bool {
        self.standard_font.is_some()
    }

    /// The name the font program is defined with: a subset tag derived from
    /// the object number followed by the PostScript name of the source font.
    pub fn font_name(&self) -> String {
        let base: String = self
            .engine
            .postscript_name()
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_graphic() && !"()<>[]{}/%".contains(*c))
            .collect();

        let base = if base.is_empty() { format!("F{}", self.object_id) } else { base };
        format!("{}+{base}", subset_tag(self.object_id))
    }

    /// The advance widths of all glyphs in the subset, indexed by new index,
    /// in units of 1/1000 em.
    pub fn widths(&self) -> Vec<i32> {
        self.widths.get(self.engine.as_ref(), self.remapper.as_slice())
    }

    /// The `/W` or `/DW` entry of the font's CIDFont dictionary.
    pub fn width_array(&self) -> Vec<u8> {
        metrics::width_array(&self.widths())
    }

    /// Forget the memoized widths, for example after the engine's metrics
    /// changed.
    pub fn reset_metrics(&self) {
        self.widths.reset();
    }

    /// The code point of every glyph in the subset, indexed by new index.
    pub fn reverse_map(&self) -> Vec<Option<char>> {
        self.names.reverse_map(self.engine.as_ref(), self.remapper.as_slice())
    }

    /// The PostScript name of the glyph with new index `index`.
    ///
    /// These are the names the glyphs have in the Type 1 program.
    pub fn glyph_name(&self, index: u16) -> Option<String> {
        self.names.name(self.engine.as_ref(), self.remapper.as_slice(), usize::from(index))
    }

    /// The ToUnicode CMap of the subset.
    pub fn create_to_unicode_map(&self) -> Vec<u8> {
        self.names.with(self.engine.as_ref(), self.remapper.as_slice(), |reverse_map, _| {
            pdf::to_unicode_cmap(reverse_map)
        })
    }

    /// Write the subset as a TrueType font.
    ///
    /// Composite glyphs are written with their components, which are added
    /// to the subset if they weren't part of it yet.
    pub fn to_truetype(&mut self) -> Result<Vec<u8>> {
        self.check_embeddable()?;
        let before = self.remapper.num_gids();
        let font = truetype::write(self.engine.as_ref(), &mut self.remapper)?;
        let added = self.remapper.num_gids() - before;
        if added > 0 {
            log::debug!("composite glyphs added {added} glyphs to object {}", self.object_id);
        }
        Ok(font)
    }

    /// Write the subset as a Type 1 font program.
    ///
    /// The first call freezes the program: later calls return the same
    /// bytes, even if glyphs were registered in between. Those are written
    /// by [`type1_added_glyphs`](Self::type1_added_glyphs) instead.
    pub fn to_type1(&mut self) -> Result<Vec<u8>> {
        self.check_embeddable()?;
        let font_name = self.font_name();
        let engine = self.engine.as_ref();
        let glyphs = self.remapper.as_slice();
        let ledger = &mut self.ledger;
        Ok(self.names.with(engine, glyphs, |_, names| {
            ledger.program(&Source { engine, glyphs, names, font_name: &font_name })
        }))
    }

    /// The charstrings of the glyphs that were registered since the Type 1
    /// program was written, as PostScript code that adds them to the font.
    ///
    /// Each glyph is returned exactly once. The result is empty if there are
    /// no new glyphs or no program was written yet.
    pub fn type1_added_glyphs(&mut self) -> Vec<u8> {
        if self.no_embed {
            return vec![];
        }

        let font_name = self.font_name();
        let engine = self.engine.as_ref();
        let glyphs = self.remapper.as_slice();
        let ledger = &mut self.ledger;
        self.names.with(engine, glyphs, |_, names| {
            ledger.supplement(&Source { engine, glyphs, names, font_name: &font_name })
        })
    }

    fn check_embeddable(&self) -> Result<()> {
        if self.no_embed {
            return Err(Error::NotEmbeddable);
        }
        Ok(())
    }
}

/// Six uppercase letters that mark a font as a subset.
fn subset_tag(object_id: u32) -> String {
    let mut n = object_id;
    (0..6)
        .map(|_| {
            let letter = b'A' + (n % 26) as u8;
            n /= 26;
            char::from(letter)
        })
        .collect()
}

impl Debug for SubsetContext {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SubsetContext")
            .field("object_id", &self.object_id)
            .field("num_glyphs", &self.num_glyphs())
            .field("standard_font", &self.standard_font)
            .field("no_embed", &self.no_embed)
            .finish_non_exhaustive()
    }
}

impl Drop for SubsetContext {
    fn drop(&mut self) {
        log::debug!(
            "releasing font of object {} with {} glyphs",
            self.object_id,
            self.remapper.num_gids()
        );
    }
}
