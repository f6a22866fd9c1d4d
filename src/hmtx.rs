use crate::stream::Writer;
use crate::truetype::Context;
use crate::{Result, Tag};

/// Write the `hmtx` table.
///
/// Every glyph of the subset gets a full long metric, in new-index order.
/// Glyphs without metrics in the source font get zeros.
pub(crate) fn subset(ctx: &mut Context) -> Result<()> {
    let engine = ctx.engine;
    let mut sub_hmtx = Writer::with_capacity(4 * ctx.remapper.num_gids());

    for old_gid in ctx.remapper.remapped_gids() {
        sub_hmtx.write::<u16>(engine.advance_width(old_gid).unwrap_or(0));
        sub_hmtx.write::<i16>(engine.left_side_bearing(old_gid).unwrap_or(0));
    }

    ctx.push(Tag::HMTX, sub_hmtx.finish());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::engine::mock::MockEngine;
    use crate::remapper::GlyphRemapper;
    use crate::truetype::Context;
    use crate::Tag;

    #[test]
    fn metrics_in_new_order() {
        let engine = MockEngine::alphabet();
        let mut remapper = GlyphRemapper::new_from_glyphs(&[66, 65]);
        let mut ctx = Context::new(&engine, &mut remapper);
        super::subset(&mut ctx).unwrap();

        let hmtx = ctx.take(Tag::HMTX).unwrap();
        assert_eq!(hmtx, vec![1, 244, 0, 10, 2, 54, 0, 10, 2, 53, 0, 10]);
    }
}
