//! The `head` table mostly contains information that can be reused from the
//! old table, except for the bounding box and the `loca` format, which depend
//! on the glyphs of the subset. The checksum will be recalculated in the very
//! end.

use crate::stream::{Writeable, Writer};
use crate::truetype::Context;
use crate::{Error, Result, Tag};

pub(crate) fn subset(ctx: &mut Context) -> Result<()> {
    let mut head = ctx.expect_table(Tag::HEAD)?.to_vec();
    if head.len() < 54 {
        return Err(Error::MalformedFont);
    }

    let mut bbox = Writer::with_capacity(8);
    for v in ctx.bbox.unwrap_or_default() {
        v.write(&mut bbox);
    }
    head[36..44].copy_from_slice(&bbox.finish());

    let index_to_loc = &mut head[50..52];
    index_to_loc[0] = 0;
    index_to_loc[1] = ctx.long_loca as u8;

    ctx.push(Tag::HEAD, head);
    Ok(())
}
