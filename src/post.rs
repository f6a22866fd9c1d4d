//! Subset the `post` table. The `post` table contains name information for glyphs
//! needed for some PostScript printers. Only version 2 table contains actual custom names,
//! so this is the only version that we need to subset. All we need to do is to extract
//! the strings for all requested glyphs and write them into a new `post` table in the
//! given order. Other versions either use the standard Macintosh ordering, which
//! no longer matches after renumbering, or carry no names, so they become version 3.

use crate::stream::{LazyArray16, Reader, Writer};
use crate::truetype::Context;
use crate::{Error, Result, Tag};

pub(crate) fn subset(ctx: &mut Context) -> Result<()> {
    let Some(post) = ctx.engine.table(Tag::POST) else {
        return Ok(());
    };

    let mut r = Reader::new(post);
    let version = r.read::<u32>().ok_or(Error::MalformedFont)?;
    let header = post.get(..32).ok_or(Error::MalformedFont)?;

    let table = match Version2Table::parse(post) {
        Some(table) if version == 0x00020000 => table,
        _ => {
            let mut sub_post = Writer::with_capacity(32);
            sub_post.write::<u32>(0x00030000);
            sub_post.extend(&header[4..]);
            ctx.push(Tag::POST, sub_post.finish());
            return Ok(());
        }
    };

    let names = table.names().collect::<Vec<_>>();

    let mut sub_post = Writer::new();
    sub_post.extend(table.header);
    sub_post.write::<u16>(ctx.num_glyphs());

    let mut string_storage = Writer::new();
    let mut string_index = 0;

    for old_gid in ctx.remapper.remapped_gids() {
        // Glyphs past the index array have no name.
        let index = table.glyph_indexes.get(old_gid).unwrap_or(0);

        // IDs smaller than 258 refer to the names in the Macintosh TrueType file.
        if index <= 257 {
            sub_post.write::<u16>(index);
        } else {
            let index = index - 258;
            // Some fonts have broken name data. If a name cannot be fetched,
            // use an empty name instead.
            let name = names.get(usize::from(index)).copied().unwrap_or(&[][..]);
            let index = u16::try_from(string_index + 258).map_err(|_| Error::MalformedFont)?;
            sub_post.write::<u16>(index);

            string_storage.write::<u8>(name.len() as u8);
            string_storage.extend(name);
            string_index += 1;
        }
    }

    sub_post.extend(&string_storage.finish());

    ctx.push(Tag::POST, sub_post.finish());
    Ok(())
}

/// An iterator over glyph names.
///
/// The `post` table doesn't provide the glyph names count,
/// so we have to simply iterate over all of them to find it out.
#[derive(Clone, Copy, Default)]
struct Names<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.data.len() {
            return None;
        }

        let len = self.data[self.offset];
        self.offset += 1;

        // An empty name is an error.
        if len == 0 {
            return None;
        }

        let name = self.data.get(self.offset..self.offset + usize::from(len))?;
        self.offset += usize::from(len);
        Some(name)
    }
}

/// A version 2 `post` table.
#[derive(Clone, Debug)]
struct Version2Table<'a> {
    header: &'a [u8],
    glyph_indexes: LazyArray16<'a, u16>,
    names_data: &'a [u8],
}

impl<'a> Version2Table<'a> {
    /// Parse a version 2 table.
    fn parse(data: &'a [u8]) -> Option<Self> {
        // Do not check the exact length, because some fonts include
        // padding in table's length in table records, which is incorrect.
        if data.len() < 32 {
            return None;
        }

        let mut r = Reader::new(data);
        let header = r.read_bytes(32)?;

        let indexes_count = r.read::<u16>()?;
        let glyph_indexes = r.read_array16::<u16>(indexes_count)?;
        let names_data = r.tail()?;

        Some(Version2Table { header, glyph_indexes, names_data })
    }

    /// Returns an iterator over glyph names.
    ///
    /// Default/predefined names are not included. Just the one in the font file.
    fn names(&self) -> Names<'a> {
        Names { data: self.names_data, offset: 0 }
    }
}
