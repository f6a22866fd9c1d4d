//! Assembly of a standalone TrueType font from the registered glyphs.
//!
//! The glyph walk has to happen before anything else: composite glyphs pull
//! their components into the subset, so the number of glyphs is only known
//! once `glyf` has been written. All other tables are derived from the final
//! glyph set.

use crate::engine::FontEngine;
use crate::remapper::GlyphRemapper;
use crate::stream::{Readable, Reader, Writeable, Writer};
use crate::{cmap, glyf, head, hhea, hmtx, maxp, name, post};
use crate::{Error, Result, Tag};
use std::borrow::Cow;

/// The sfnt version of fonts with TrueType outlines.
const TRUETYPE_VERSION: u32 = 0x00010000;

/// Tables that are carried over without modification if the source has them.
const VERBATIM_TABLES: [Tag; 5] = [Tag::CVT, Tag::FPGM, Tag::PREP, Tag::GASP, Tag::OS2];

/// Subsetting context.
pub(crate) struct Context<'a> {
    /// The source font.
    pub engine: &'a dyn FontEngine,
    /// The glyphs of the subset, which may grow while `glyf` is written.
    pub remapper: &'a mut GlyphRemapper,
    /// Subsetted tables.
    tables: Vec<(Tag, Cow<'a, [u8]>)>,
    /// Whether the long loca format was chosen.
    pub long_loca: bool,
    /// The union of the bounding boxes of all written glyphs.
    pub bbox: Option<[i16; 4]>,
}

impl<'a> Context<'a> {
    pub fn new(engine: &'a dyn FontEngine, remapper: &'a mut GlyphRemapper) -> Self {
        Self { engine, remapper, tables: vec![], long_loca: false, bbox: None }
    }

    /// Expect a table.
    pub fn expect_table(&self, tag: Tag) -> Result<&'a [u8]> {
        self.engine.table(tag).ok_or(Error::MissingTable(tag))
    }

    /// The number of glyphs in the subset.
    ///
    /// Only valid after the glyph count has been checked in [`write`].
    pub fn num_glyphs(&self) -> u16 {
        self.remapper.num_gids() as u16
    }

    /// Push a subsetted table.
    pub fn push(&mut self, tag: Tag, table: impl Into<Cow<'a, [u8]>>) {
        debug_assert!(
            !self.tables.iter().any(|&(prev, _)| prev == tag),
            "duplicate {tag} table"
        );
        self.tables.push((tag, table.into()));
    }

    /// Remove a pushed table again.
    #[cfg(test)]
    pub fn take(&mut self, tag: Tag) -> Option<Vec<u8>> {
        let i = self.tables.iter().position(|&(t, _)| t == tag)?;
        Some(self.tables.remove(i).1.into_owned())
    }
}

/// Write a TrueType font that contains the glyphs of `remapper` (and all
/// glyphs they reference) under their new indices.
pub(crate) fn write(engine: &dyn FontEngine, remapper: &mut GlyphRemapper) -> Result<Vec<u8>> {
    let mut ctx = Context::new(engine, remapper);

    // LOCA will be handled by GLYF.
    glyf::subset(&mut ctx)?;

    let count = ctx.remapper.num_gids();
    if count > usize::from(u16::MAX) {
        return Err(Error::TooManyGlyphs(count));
    }

    head::subset(&mut ctx)?;
    hhea::subset(&mut ctx)?;
    hmtx::subset(&mut ctx)?;
    maxp::subset(&mut ctx)?;
    cmap::subset(&mut ctx)?;
    name::subset(&mut ctx)?;
    post::subset(&mut ctx)?;

    for tag in VERBATIM_TABLES {
        if let Some(data) = engine.table(tag) {
            ctx.push(tag, data);
        }
    }

    Ok(construct(ctx))
}

/// Locates a table in the font file.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct TableRecord {
    pub tag: Tag,
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

impl Readable<'_> for TableRecord {
    const SIZE: usize = 16;

    fn read(r: &mut Reader) -> Option<Self> {
        Some(TableRecord {
            tag: r.read::<Tag>()?,
            checksum: r.read::<u32>()?,
            offset: r.read::<u32>()?,
            length: r.read::<u32>()?,
        })
    }
}

impl Writeable for TableRecord {
    fn write(&self, w: &mut Writer) {
        w.write::<Tag>(self.tag);
        w.write::<u32>(self.checksum);
        w.write::<u32>(self.offset);
        w.write::<u32>(self.length);
    }
}

/// Construct a brand new font.
fn construct(mut ctx: Context) -> Vec<u8> {
    let mut w = Writer::new();
    w.write::<u32>(TRUETYPE_VERSION);

    // Tables shall be sorted by tag.
    ctx.tables.sort_by_key(|&(tag, _)| tag);

    // Write table directory.
    let count = ctx.tables.len() as u16;
    let entry_selector = (u16::BITS - 1).saturating_sub(count.leading_zeros()) as u16;
    let search_range = 2u16.pow(u32::from(entry_selector)) * 16;
    let range_shift = count * 16 - search_range;
    w.write(count);
    w.write(search_range);
    w.write(entry_selector);
    w.write(range_shift);

    // This variable will hold the offset to the checksum adjustment field
    // in the head table, which we'll have to write in the end (after
    // checksumming the whole font).
    let mut checksum_adjustment_offset = None;

    // Write table records.
    let mut offset = 12 + ctx.tables.len() * TableRecord::SIZE;
    for (tag, data) in &mut ctx.tables {
        if *tag == Tag::HEAD {
            // Zero out checksum field in head table.
            data.to_mut()[8..12].fill(0);
            checksum_adjustment_offset = Some(offset + 8);
        }

        let len = data.len();
        w.write(TableRecord {
            tag: *tag,
            checksum: checksum(data),
            offset: offset as u32,
            length: len as u32,
        });

        log::debug!("{tag}: {len} bytes");

        // Increase offset, plus padding zeros to align to 4 bytes.
        offset += len;
        while offset % 4 != 0 {
            offset += 1;
        }
    }

    // Write tables.
    for (_, data) in &ctx.tables {
        // Write data plus padding zeros to align to 4 bytes.
        w.extend(data);
        w.align(4);
    }

    // Write checksum adjustment field in head table.
    let mut data = w.finish();
    if let Some(i) = checksum_adjustment_offset {
        let sum = checksum(&data);
        let val = 0xB1B0AFBA_u32.wrapping_sub(sum);
        data[i..i + 4].copy_from_slice(&val.to_be_bytes());
    }

    data
}

/// Calculate a checksum over the sliced data as a sum of u32s. If the data
/// length is not a multiple of four, it is treated as if padded with zero to a
/// length that is a multiple of four.
pub(crate) fn checksum(data: &[u8]) -> u32 {
    let mut sum = 0u32;
    for chunk in data.chunks(4) {
        let mut bytes = [0; 4];
        bytes[..chunk.len()].copy_from_slice(chunk);
        sum = sum.wrapping_add(u32::from_be_bytes(bytes));
    }
    sum
}
