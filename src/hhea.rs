use crate::stream::Writer;
use crate::truetype::Context;
use crate::{Error, Result, Tag};

/// Rewrite `hhea` for a subset with one long metric per glyph.
pub(crate) fn subset(ctx: &mut Context) -> Result<()> {
    let hhea = ctx.expect_table(Tag::HHEA)?;
    if hhea.len() < 36 {
        return Err(Error::MalformedFont);
    }

    let engine = ctx.engine;
    let advance_width_max = ctx
        .remapper
        .remapped_gids()
        .filter_map(|g| engine.advance_width(g))
        .max()
        .unwrap_or(0);

    let mut sub_hhea = Writer::with_capacity(hhea.len());
    sub_hhea.extend(&hhea[..10]);
    sub_hhea.write::<u16>(advance_width_max);
    sub_hhea.extend(&hhea[12..34]);
    sub_hhea.write::<u16>(ctx.num_glyphs());

    ctx.push(Tag::HHEA, sub_hhea.finish());
    Ok(())
}
