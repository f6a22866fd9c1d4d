//! The seam between the subsetter and the font it reads glyphs from.
//!
//! A [`FontEngine`] is shared between all subset contexts that embed the same
//! font, so it only ever hands out read-only data. [`FontCache`] keeps engines
//! alive between documents.

#[cfg(test)]
pub(crate) mod mock;

use crate::Tag;
use kurbo::BezPath;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::Arc;

/// A source of glyph programs and metrics.
///
/// Engines are shared via [`Arc`] and may be read from several threads at
/// once, so all methods take `&self`.
pub trait FontEngine: Send + Sync {
    /// The number of glyphs in the font.
    fn glyph_count(&self) -> u16;

    /// The size of the em square in font units.
    fn units_per_em(&self) -> u16;

    /// The advance width of a glyph in font units.
    fn advance_width(&self, glyph: u16) -> Option<u16>;

    /// The left side bearing of a glyph in font units.
    fn left_side_bearing(&self, glyph: u16) -> Option<i16>;

    /// The raw `glyf` record of a glyph.
    ///
    /// An empty slice denotes a glyph without outline, `None` a glyph whose
    /// data could not be located.
    fn glyph_data(&self, glyph: u16) -> Option<&[u8]>;

    /// The raw data of a font table.
    fn table(&self, tag: Tag) -> Option<&[u8]>;

    /// All Unicode mappings of the font as `(code point, glyph)` pairs.
    fn char_map(&self) -> Vec<(u32, u16)>;

    /// The PostScript name of the font, if it has one.
    fn postscript_name(&self) -> Option<String> {
        None
    }

    /// Whether the font uses a symbol encoding instead of Unicode.
    fn is_symbolic(&self) -> bool {
        false
    }

    /// The outline of a glyph in font units.
    ///
    /// Composite glyphs are flattened into a single path.
    fn outline(&self, glyph: u16) -> Option<BezPath> {
        crate::outline::glyf_outline(&|g| self.glyph_data(g), glyph)
    }

    /// The smallest code point that maps to `glyph`.
    fn unicode_for_glyph(&self, glyph: u16) -> Option<char> {
        self.char_map()
            .into_iter()
            .filter(|&(_, g)| g == glyph)
            .map(|(c, _)| c)
            .min()
            .and_then(char::from_u32)
    }
}

/// A cache of shared font engines.
///
/// Every slot holds its own reference to the engine. An engine is therefore
/// torn down only once all subset contexts have released it *and* its cache
/// slot has been evicted.
pub struct FontCache<K> {
    slots: FxHashMap<K, Arc<dyn FontEngine>>,
}

impl<K: Hash + Eq> FontCache<K> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { slots: FxHashMap::default() }
    }

    /// Get the engine stored under `key`.
    pub fn get(&self, key: &K) -> Option<Arc<dyn FontEngine>> {
        self.slots.get(key).cloned()
    }

    /// Get the engine stored under `key` or load and store it.
    pub fn get_or_load<F>(&mut self, key: K, load: F) -> crate::Result<Arc<dyn FontEngine>>
    where
        F: FnOnce() -> crate::Result<Arc<dyn FontEngine>>,
    {
        if let Some(engine) = self.slots.get(&key) {
            return Ok(engine.clone());
        }

        let engine = load()?;
        self.slots.insert(key, engine.clone());
        Ok(engine)
    }

    /// Store an engine, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: K,
        engine: Arc<dyn FontEngine>,
    ) -> Option<Arc<dyn FontEngine>> {
        self.slots.insert(key, engine)
    }

    /// Remove the slot for `key`. Returns whether the engine was freed, i.e.
    /// whether no subset context still holds it.
    pub fn evict(&mut self, key: &K) -> bool {
        match self.slots.remove(key) {
            Some(engine) => Arc::strong_count(&engine) == 1,
            None => false,
        }
    }

    /// Evict every engine that is no longer used by any subset context and
    /// return how many were freed.
    pub fn purge(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, engine| Arc::strong_count(engine) > 1);
        let freed = before - self.slots.len();
        log::debug!("purged {freed} unused font engines");
        freed
    }

    /// Whether the cache holds a slot for the given engine.
    pub fn holds(&self, engine: &Arc<dyn FontEngine>) -> bool {
        self.slots.values().any(|e| Arc::ptr_eq(e, engine))
    }

    /// The number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K: Hash + Eq> Default for FontCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
