//! Reading the character map of a font and writing it for a subset.
//!
//! Only Unicode subtables (and the Windows symbol subtable, for symbol fonts)
//! are read. The subset gets freshly built subtables that map code points to
//! the new glyph indices.

use crate::cmap::subtable12::{build_subtable12, Subtable12};
use crate::cmap::subtable4::{build_subtable4, Subtable4};
use crate::stream::{Readable, Reader, Writeable, Writer};
use crate::truetype::Context;
use crate::Tag;
use rustc_hash::FxHashMap;

mod subtable12;
mod subtable4;

#[derive(Debug, Copy, Clone)]
struct EncodingRecord {
    platform_id: u16,
    encoding_id: u16,
    subtable_offset: u32,
}

impl EncodingRecord {
    fn is_unicode(&self) -> bool {
        self.platform_id == 0
            || (self.platform_id == 3 && [1, 10].contains(&self.encoding_id))
    }

    fn is_symbol(&self) -> bool {
        self.platform_id == 3 && self.encoding_id == 0
    }
}

impl Readable<'_> for EncodingRecord {
    const SIZE: usize = 8;

    fn read(r: &mut Reader) -> Option<Self> {
        let platform_id = r.read::<u16>()?;
        let encoding_id = r.read::<u16>()?;
        let subtable_offset = r.read::<u32>()?;

        Some(EncodingRecord { platform_id, encoding_id, subtable_offset })
    }
}

impl Writeable for EncodingRecord {
    fn write(&self, w: &mut Writer) {
        w.write::<u16>(self.platform_id);
        w.write::<u16>(self.encoding_id);
        w.write::<u32>(self.subtable_offset);
    }
}

/// The code point mappings of a font.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub(crate) struct CharMap {
    /// `(code point, glyph)` pairs, sorted by code point.
    pub mappings: Vec<(u32, u16)>,
    /// Whether the mappings come from a symbol subtable.
    pub symbolic: bool,
}

/// Read the mappings of all Unicode subtables of a `cmap` table.
///
/// If there is no Unicode subtable, the symbol subtable is used instead and
/// the font is considered symbolic.
pub(crate) fn read(cmap: &[u8]) -> Option<CharMap> {
    let mut r = Reader::new(cmap);
    r.read::<u16>()?; // version
    let num_tables = r.read::<u16>()?;
    let records = r.read_vector::<EncodingRecord>(usize::from(num_tables))?;

    let symbolic = !records.iter().any(EncodingRecord::is_unicode)
        && records.iter().any(EncodingRecord::is_symbol);

    let mut map = FxHashMap::default();
    for record in records {
        let wanted = if symbolic { record.is_symbol() } else { record.is_unicode() };
        if !wanted {
            continue;
        }

        let Some(data) = cmap.get(record.subtable_offset as usize..) else {
            log::warn!("cmap subtable offset {} is out of bounds", record.subtable_offset);
            continue;
        };

        let mut insert = |c: u32, g: Option<u16>| {
            if let Some(g) = g.filter(|&g| g != 0) {
                map.entry(c).or_insert(g);
            }
        };

        match u16::read_at(data, 0) {
            Some(4) => match Subtable4::parse(data) {
                Some(subtable) => subtable.codepoints(|c| insert(c, subtable.glyph_index(c))),
                None => log::warn!("skipping malformed format 4 cmap subtable"),
            },
            Some(12) => match Subtable12::parse(data) {
                Some(subtable) => subtable.codepoints(|c| insert(c, subtable.glyph_index(c))),
                None => log::warn!("skipping malformed format 12 cmap subtable"),
            },
            format => log::debug!("skipping cmap subtable with format {format:?}"),
        }
    }

    let mut mappings: Vec<_> = map.into_iter().collect();
    mappings.sort_unstable();
    Some(CharMap { mappings, symbolic })
}

/// Write a `cmap` table that maps code points to the glyphs of the subset.
pub(crate) fn subset(ctx: &mut Context) -> crate::Result<()> {
    let symbolic = ctx.engine.is_symbolic();

    // Create vector of pairs (c, g), where c is the codepoint and
    // g is the new gid.
    let mut mappings: Vec<(u32, u16)> = ctx
        .engine
        .char_map()
        .into_iter()
        .filter_map(|(c, g)| Some((c, ctx.remapper.get(g)?)))
        .collect();
    mappings.sort_unstable();
    mappings.dedup_by_key(|&mut (c, _)| c);

    let bmp: Vec<(u16, u16)> = mappings
        .iter()
        .filter_map(|&(c, g)| Some((u16::try_from(c).ok()?, g)))
        .collect();

    let mut subtables: Vec<(EncodingRecord, Vec<u8>)> = vec![];
    let record = |encoding_id| EncodingRecord {
        platform_id: 3,
        encoding_id,
        subtable_offset: 0,
    };

    let has_astral = bmp.len() < mappings.len();
    match build_subtable4(&bmp) {
        Some(data) => subtables.push((record(if symbolic { 0 } else { 1 }), data)),
        None => log::warn!("too many cmap segments, only writing a format 12 subtable"),
    }

    if !symbolic && (has_astral || subtables.is_empty()) {
        subtables.push((record(10), build_subtable12(&mappings)));
    }

    let mut sub_cmap = Writer::new();
    let mut data = Writer::new();
    let num_tables = subtables.len() as u16;

    let mut subtable_offset = (2 * 2 + num_tables as usize * EncodingRecord::SIZE) as u32;

    sub_cmap.write::<u16>(0);
    sub_cmap.write::<u16>(num_tables);

    for (mut record, subtable) in subtables {
        record.subtable_offset = subtable_offset;
        sub_cmap.write::<EncodingRecord>(record);
        data.extend(&subtable);
        subtable_offset += subtable.len() as u32;
    }

    sub_cmap.extend(&data.finish());

    ctx.push(Tag::CMAP, sub_cmap.finish());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmap_table(records: &[(u16, u16, Vec<u8>)]) -> Vec<u8> {
        let mut w = Writer::new();
        w.write::<u16>(0);
        w.write::<u16>(records.len() as u16);
        let mut offset = 4 + 8 * records.len() as u32;
        for (platform_id, encoding_id, data) in records {
            w.write(EncodingRecord {
                platform_id: *platform_id,
                encoding_id: *encoding_id,
                subtable_offset: offset,
            });
            offset += data.len() as u32;
        }
        for (_, _, data) in records {
            w.extend(data);
        }
        w.finish()
    }

    #[test]
    fn merges_unicode_subtables() {
        let table = cmap_table(&[
            (3, 1, build_subtable4(&[(65, 3), (66, 4)]).unwrap()),
            (3, 10, build_subtable12(&[(65, 9), (0x1F600, 7)])),
        ]);

        let map = read(&table).unwrap();
        assert!(!map.symbolic);
        assert_eq!(map.mappings, vec![(65, 3), (66, 4), (0x1F600, 7)]);
    }

    #[test]
    fn symbol_fonts_use_symbol_subtable() {
        let table = cmap_table(&[
            (1, 0, vec![0, 6]),
            (3, 0, build_subtable4(&[(0xF041, 5)]).unwrap()),
        ]);

        let map = read(&table).unwrap();
        assert!(map.symbolic);
        assert_eq!(map.mappings, vec![(0xF041, 5)]);
    }

    #[test]
    fn bad_offset_is_skipped() {
        let mut table = cmap_table(&[(3, 1, build_subtable4(&[(65, 3)]).unwrap())]);
        table[8..12].copy_from_slice(&1000u32.to_be_bytes());
        assert_eq!(read(&table), Some(CharMap::default()));
    }
}
