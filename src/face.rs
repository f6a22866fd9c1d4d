//! A font engine backed by in-memory OpenType data with TrueType outlines.

use crate::cmap::{self, CharMap};
use crate::engine::FontEngine;
use crate::stream::{Readable, Reader};
use crate::truetype::TableRecord;
use crate::{name, Error, Result, Tag};
use std::fmt::{self, Debug, Formatter};

/// What kind of contents the font has.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FontKind {
    /// TrueType outlines.
    TrueType,
    /// CFF outlines
    Cff,
    /// A font collection.
    Collection,
}

impl Readable<'_> for FontKind {
    const SIZE: usize = 4;

    fn read(r: &mut Reader) -> Option<Self> {
        match r.read::<u32>()? {
            0x00010000 | 0x74727565 => Some(FontKind::TrueType),
            0x4F54544F => Some(FontKind::Cff),
            0x74746366 => Some(FontKind::Collection),
            _ => None,
        }
    }
}

/// A parsed font face.
///
/// The face owns its data, so it can be shared between subset contexts
/// (and threads) without lifetimes.
pub struct Face {
    data: Vec<u8>,
    records: Vec<TableRecord>,
    num_glyphs: u16,
    units_per_em: u16,
    long_loca: bool,
    num_h_metrics: u16,
    char_map: CharMap,
    postscript_name: Option<String>,
}

impl Face {
    /// Parse a font face from OpenType data.
    ///
    /// `index` selects the font in a collection and must be zero for a
    /// single font.
    pub fn parse(data: Vec<u8>, index: u32) -> Result<Self> {
        let records = parse_records(&data, index)?;
        let mut face = Face {
            data,
            records,
            num_glyphs: 0,
            units_per_em: 0,
            long_loca: false,
            num_h_metrics: 0,
            char_map: CharMap::default(),
            postscript_name: None,
        };

        for tag in [Tag::GLYF, Tag::LOCA, Tag::HMTX] {
            face.table(tag).ok_or(Error::MissingTable(tag))?;
        }

        let head = face.table(Tag::HEAD).ok_or(Error::MissingTable(Tag::HEAD))?;
        let units_per_em = u16::read_at(head, 18).ok_or(Error::MalformedFont)?;
        let long_loca = i16::read_at(head, 50).ok_or(Error::MalformedFont)? != 0;

        let maxp = face.table(Tag::MAXP).ok_or(Error::MissingTable(Tag::MAXP))?;
        let num_glyphs = u16::read_at(maxp, 4).ok_or(Error::MalformedFont)?;

        let hhea = face.table(Tag::HHEA).ok_or(Error::MissingTable(Tag::HHEA))?;
        let num_h_metrics = u16::read_at(hhea, 34).ok_or(Error::MalformedFont)?;
        if num_h_metrics == 0 && num_glyphs != 0 {
            return Err(Error::MalformedFont);
        }

        let char_map = match face.table(Tag::CMAP) {
            Some(data) => cmap::read(data).unwrap_or_else(|| {
                log::warn!("font has a malformed cmap table");
                CharMap::default()
            }),
            None => CharMap::default(),
        };

        let postscript_name = face.table(Tag::NAME).and_then(name::postscript_name);

        log::debug!(
            "parsed font {:?} with {num_glyphs} glyphs and {} mappings",
            postscript_name,
            char_map.mappings.len()
        );

        face.units_per_em = units_per_em;
        face.long_loca = long_loca;
        face.num_glyphs = num_glyphs;
        face.num_h_metrics = num_h_metrics;
        face.char_map = char_map;
        face.postscript_name = postscript_name;
        Ok(face)
    }

    /// The raw data of the face.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn loca_entry(&self, loca: &[u8], glyph: u16) -> Option<usize> {
        if self.long_loca {
            u32::read_at(loca, 4 * usize::from(glyph)).map(|v| v as usize)
        } else {
            u16::read_at(loca, 2 * usize::from(glyph)).map(|v| 2 * usize::from(v))
        }
    }
}

/// Parse the table directory of the font at `index`.
fn parse_records(data: &[u8], index: u32) -> Result<Vec<TableRecord>> {
    let mut r = Reader::new(data);
    let mut kind = r.read::<FontKind>().ok_or(Error::UnknownKind)?;

    // Parse font collection header if necessary.
    if kind == FontKind::Collection {
        let num_fonts = u32::read_at(data, 8).ok_or(Error::MalformedFont)?;
        if index >= num_fonts {
            return Err(Error::MalformedFont);
        }

        let offset = u32::read_at(data, 12 + 4 * (index as usize)).ok_or(Error::MalformedFont)?;
        r = Reader::new_at(data, offset as usize);
        kind = r.read::<FontKind>().ok_or(Error::UnknownKind)?;
        if kind == FontKind::Collection {
            return Err(Error::UnknownKind);
        }
    } else if index != 0 {
        return Err(Error::MalformedFont);
    }

    if kind == FontKind::Cff {
        log::debug!("fonts with CFF outlines are not supported");
        return Err(Error::UnknownKind);
    }

    // Read number of table records.
    let count = r.read::<u16>().ok_or(Error::MalformedFont)?;
    r.skip_bytes(6).ok_or(Error::MalformedFont)?;

    // Read table records.
    let mut records = r
        .read_vector::<TableRecord>(usize::from(count))
        .ok_or(Error::MalformedFont)?;

    records.retain(|record| {
        let end = u64::from(record.offset) + u64::from(record.length);
        let valid = end <= data.len() as u64;
        if !valid {
            log::warn!("{} table lies outside of the font data", record.tag);
        }
        valid
    });

    // Some fonts have unsorted table directories.
    records.sort_by_key(|record| record.tag);

    Ok(records)
}

impl FontEngine for Face {
    fn glyph_count(&self) -> u16 {
        self.num_glyphs
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn advance_width(&self, glyph: u16) -> Option<u16> {
        if glyph >= self.num_glyphs {
            return None;
        }

        let hmtx = self.table(Tag::HMTX)?;
        let index = glyph.min(self.num_h_metrics.checked_sub(1)?);
        u16::read_at(hmtx, 4 * usize::from(index))
    }

    fn left_side_bearing(&self, glyph: u16) -> Option<i16> {
        if glyph >= self.num_glyphs {
            return None;
        }

        let hmtx = self.table(Tag::HMTX)?;
        let offset = if glyph < self.num_h_metrics {
            4 * usize::from(glyph) + 2
        } else {
            4 * usize::from(self.num_h_metrics) + 2 * usize::from(glyph - self.num_h_metrics)
        };
        i16::read_at(hmtx, offset)
    }

    fn glyph_data(&self, glyph: u16) -> Option<&[u8]> {
        if glyph >= self.num_glyphs {
            return None;
        }

        let loca = self.table(Tag::LOCA)?;
        let glyf = self.table(Tag::GLYF)?;
        let start = self.loca_entry(loca, glyph)?;
        let end = self.loca_entry(loca, glyph.checked_add(1)?)?;
        glyf.get(start..end)
    }

    fn table(&self, tag: Tag) -> Option<&[u8]> {
        let i = self.records.binary_search_by(|record| record.tag.cmp(&tag)).ok()?;
        let record = self.records.get(i)?;
        let start = record.offset as usize;
        let end = start + (record.length as usize);
        self.data.get(start..end)
    }

    fn char_map(&self) -> Vec<(u32, u16)> {
        self.char_map.mappings.clone()
    }

    fn postscript_name(&self) -> Option<String> {
        self.postscript_name.clone()
    }

    fn is_symbolic(&self) -> bool {
        self.char_map.symbolic
    }

    fn unicode_for_glyph(&self, glyph: u16) -> Option<char> {
        // Mappings are sorted by code point, so the first hit is the smallest.
        self.char_map
            .mappings
            .iter()
            .find(|&&(_, g)| g == glyph)
            .and_then(|&(c, _)| char::from_u32(c))
    }
}

impl Debug for Face {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Face")
            .field("postscript_name", &self.postscript_name)
            .field("num_glyphs", &self.num_glyphs)
            .field("units_per_em", &self.units_per_em)
            .finish_non_exhaustive()
    }
}
