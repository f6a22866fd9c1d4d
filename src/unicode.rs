//! Mapping the glyphs of a subset back to Unicode and naming them.

use crate::agl::{AGL, SYMBOL};
use crate::engine::FontEngine;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;

/// Memoized code points and glyph names of a subset, indexed by new glyph
/// index.
///
/// The source font's cmap is inverted once, on first use. Like the registry,
/// both tables only ever grow: glyphs registered since the last call are
/// appended, and an entry never changes once it was handed out.
#[derive(Debug, Default)]
pub(crate) struct GlyphNames {
    state: RefCell<NameState>,
}

#[derive(Debug, Default)]
struct NameState {
    /// Smallest code point per native glyph.
    inverse: Option<FxHashMap<u16, u32>>,
    reverse_map: Vec<Option<char>>,
    names: Vec<String>,
    used: FxHashSet<String>,
}

impl GlyphNames {
    /// Call `f` with the reverse map and the glyph names of `glyphs`.
    pub fn with<T>(
        &self,
        engine: &dyn FontEngine,
        glyphs: &[u16],
        f: impl FnOnce(&[Option<char>], &[String]) -> T,
    ) -> T {
        let mut state = self.state.borrow_mut();
        if state.names.len() > glyphs.len() {
            *state = NameState::default();
        }

        state.extend(engine, glyphs);
        f(&state.reverse_map, &state.names)
    }

    /// The reverse map of `glyphs`: for every new index, the code point that
    /// maps to the glyph in the source font.
    pub fn reverse_map(&self, engine: &dyn FontEngine, glyphs: &[u16]) -> Vec<Option<char>> {
        self.with(engine, glyphs, |reverse_map, _| reverse_map.to_vec())
    }

    /// The name of the glyph with new index `index`.
    pub fn name(&self, engine: &dyn FontEngine, glyphs: &[u16], index: usize) -> Option<String> {
        self.with(engine, glyphs, |_, names| names.get(index).cloned())
    }
}

impl NameState {
    fn extend(&mut self, engine: &dyn FontEngine, glyphs: &[u16]) {
        let start = self.names.len();
        if start == glyphs.len() {
            return;
        }

        let inverse = self.inverse.get_or_insert_with(|| invert(engine));
        let symbolic = engine.is_symbolic();

        for (i, &native) in glyphs.iter().enumerate().skip(start) {
            let unicode = match i {
                0 => None,
                _ => inverse.get(&native).copied().and_then(char::from_u32),
            };

            // A name that is already taken by a glyph with a lower new index
            // is replaced by a synthetic one.
            let mut name = glyph_name(native, unicode, symbolic);
            if self.used.contains(&name) {
                name = format!("g{native}");
                let mut k = 1;
                while self.used.contains(&name) {
                    name = format!("g{native}.{k}");
                    k += 1;
                }
            }

            self.used.insert(name.clone());
            self.reverse_map.push(unicode);
            self.names.push(name);
        }
    }
}

/// Invert the cmap of a font. If several code points map to the same glyph,
/// the smallest one wins.
fn invert(engine: &dyn FontEngine) -> FxHashMap<u16, u32> {
    let mut inverse: FxHashMap<u16, u32> = FxHashMap::default();
    for (c, g) in engine.char_map() {
        inverse.entry(g).and_modify(|prev| *prev = (*prev).min(c)).or_insert(c);
    }
    log::debug!("inverted cmap with {} glyphs", inverse.len());
    inverse
}

/// The PostScript name of a glyph in the subset.
///
/// `native` is the glyph's index in the source font, `unicode` its entry in
/// the reverse map. Glyphs without a code point get the synthetic name
/// `g<native>`, which can't collide with a list name or a `uni` name.
pub(crate) fn glyph_name(native: u16, unicode: Option<char>, symbolic: bool) -> String {
    if native == 0 {
        return ".notdef".into();
    }

    match unicode {
        Some(c) => glyph_name_for(c, symbolic),
        None => format!("g{native}"),
    }
}

/// The PostScript name for a character.
///
/// This is the Adobe Glyph List name if there is one and a `uniXXXX` (or
/// `uXXXXX` outside of the Basic Multilingual Plane) name otherwise.
///
/// In symbolic fonts, character codes are bytes of the Symbol encoding,
/// either as is or offset into the private use area at U+F000.
pub fn glyph_name_for(unicode: char, symbolic: bool) -> String {
    let code = u32::from(unicode);

    if symbolic {
        let byte = match code {
            0..=0xFF => Some(code),
            0xF020..=0xF0FF => Some(code & 0xFF),
            _ => None,
        };

        if let Some(name) = byte.and_then(|b| SYMBOL.get(&b)) {
            return (*name).into();
        }
    }

    match AGL.get(&code) {
        Some(name) => (*name).into(),
        None if code <= 0xFFFF => format!("uni{code:04X}"),
        None => format!("u{code:04X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mock::MockEngine;

    #[test]
    fn names_from_glyph_list() {
        assert_eq!(glyph_name_for('A', false), "A");
        assert_eq!(glyph_name_for(' ', false), "space");
        assert_eq!(glyph_name_for('é', false), "eacute");
        assert_eq!(glyph_name_for('€', false), "Euro");
        assert_eq!(glyph_name_for('ς', false), "sigma1");
    }

    #[test]
    fn names_outside_glyph_list() {
        assert_eq!(glyph_name_for('\u{0416}', false), "uni0416");
        assert_eq!(glyph_name_for('\u{1F600}', false), "u1F600");
        assert_eq!(glyph_name_for('\u{00AD}', false), "uni00AD");
    }

    #[test]
    fn symbol_encoding() {
        assert_eq!(glyph_name_for('A', true), "Alpha");
        assert_eq!(glyph_name_for('\u{F061}', true), "alpha");
        assert_eq!(glyph_name_for('\u{F0E5}', true), "summation");
        // Not part of the Symbol encoding.
        assert_eq!(glyph_name_for('\u{F0F0}', true), "uniF0F0");
        assert_eq!(glyph_name_for('\u{0416}', true), "uni0416");
    }

    #[test]
    fn smallest_code_point_wins() {
        let mut engine = MockEngine::alphabet();
        engine.char_map.push((0x391, 65));
        engine.char_map.push((0x2000, 241));

        let map = GlyphNames::default().reverse_map(&engine, &[0, 65, 241, 200, 230]);
        assert_eq!(map, vec![None, Some('A'), Some('\u{2000}'), None, Some('\u{1F600}')]);
    }

    #[test]
    fn tables_grow_with_registry() {
        let mut engine = MockEngine::alphabet();
        let memo = GlyphNames::default();
        let mut glyphs = vec![0, 65];
        assert_eq!(memo.name(&engine, &glyphs, 1).as_deref(), Some("A"));
        assert_eq!(memo.name(&engine, &glyphs, 2), None);

        glyphs.extend([200, 233]);
        memo.with(&engine, &glyphs, |reverse_map, names| {
            assert_eq!(reverse_map, [None, Some('A'), None, Some('é')]);
            assert_eq!(names, [".notdef", "A", "g200", "eacute"]);
        });

        // The cmap is only inverted once.
        engine.char_map.push((0x20, 66));
        glyphs.push(66);
        assert_eq!(memo.name(&engine, &glyphs, 4).as_deref(), Some("B"));
    }

    #[test]
    fn duplicate_names_are_replaced() {
        let mut engine = MockEngine::alphabet();
        engine.symbolic = true;
        engine.char_map.push((0xF041, 200));

        // Both glyphs are named after Symbol code 0x41.
        let memo = GlyphNames::default();
        memo.with(&engine, &[0, 65, 200], |_, names| {
            assert_eq!(names, [".notdef", "Alpha", "g200"]);
        });
    }

    #[test]
    fn synthetic_names() {
        assert_eq!(glyph_name(0, Some('A'), false), ".notdef");
        assert_eq!(glyph_name(200, None, true), "g200");
        assert_eq!(glyph_name(65, Some('A'), false), "A");
        assert!(!AGL.values().any(|&name| name == "g200"));
    }
}
