use rustc_hash::FxHashMap;

/// Assigns compact, subset-local glyph indices to glyphs of a source font.
///
/// New indices are handed out in first-use order. For example, if we
/// register the glyphs 3, 39, 8, 3, 10, the remapper yields:
/// 0 -> 0 (The .notdef glyph is always included)
/// 3 -> 1
/// 39 -> 2
/// 8 -> 3
/// 10 -> 4
///
/// The mapping only ever grows: there is no way to remove a glyph, and an
/// index, once assigned, never changes. This is what allows a document to
/// start referencing glyphs by their new index before the font is written.
#[derive(Debug, Clone)]
pub struct GlyphRemapper {
    /// Maps old glyph indices to new ones.
    forward: FxHashMap<u16, u16>,
    /// Stores the "reverse" mapping: the value at index `i` is the old glyph
    /// that was assigned the new index `i`.
    backward: Vec<u16>,
}

impl GlyphRemapper {
    /// Create a new remapper that only contains the `.notdef` glyph.
    pub fn new() -> Self {
        let mut remapper = Self { forward: FxHashMap::default(), backward: Vec::new() };
        // .notdef must occupy slot 0 before anybody else can register a glyph,
        // so it is pushed unconditionally instead of going through `remap`.
        remapper.forward.insert(0, 0);
        remapper.backward.push(0);
        remapper
    }

    /// Create a remapper from a sequence of glyphs, registered in the given
    /// order.
    pub fn new_from_glyphs(glyphs: &[u16]) -> Self {
        let mut remapper = Self::new();
        for &glyph in glyphs {
            remapper.remap(glyph);
        }
        remapper
    }

    /// Remap a glyph, either returning the previously assigned index if it
    /// has been remapped before, or assigning the next free index.
    pub fn remap(&mut self, old: u16) -> u16 {
        if let Some(&new) = self.forward.get(&old) {
            return new;
        }

        // At most 65536 distinct u16 values exist, so the last index that
        // can ever be assigned is 65535.
        let new = self.backward.len() as u16;
        self.forward.insert(old, new);
        self.backward.push(old);
        log::trace!("remapped glyph {old} to {new}");
        new
    }

    /// Get the new index of a glyph, if it has been remapped before.
    pub fn get(&self, old: u16) -> Option<u16> {
        self.forward.get(&old).copied()
    }

    /// Get the old glyph that was assigned the new index `new`.
    pub fn native(&self, new: u16) -> Option<u16> {
        self.backward.get(usize::from(new)).copied()
    }

    /// The number of glyphs that have been remapped, including `.notdef`.
    pub fn num_gids(&self) -> usize {
        self.backward.len()
    }

    /// Return an iterator over the old glyphs, in the order of their new
    /// indices.
    pub fn remapped_gids(&self) -> impl Iterator<Item = u16> + '_ {
        self.backward.iter().copied()
    }

    /// The old glyphs, indexed by their new index.
    pub fn as_slice(&self) -> &[u16] {
        &self.backward
    }
}

impl Default for GlyphRemapper {
    fn default() -> Self {
        Self::new()
    }
}
