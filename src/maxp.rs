use crate::stream::{Reader, Writer};
use crate::truetype::Context;
use crate::{Error, Result, Tag};

/// Replace the glyph count of `maxp`. The remaining maximums of the source
/// font stay valid upper bounds for any subset.
pub(crate) fn subset(ctx: &mut Context) -> Result<()> {
    let maxp = ctx.expect_table(Tag::MAXP)?;
    let mut r = Reader::new(maxp);
    let version = r.read::<u32>().ok_or(Error::MalformedFont)?;
    r.read::<u16>().ok_or(Error::MalformedFont)?; // num glyphs

    let mut sub_maxp = Writer::new();
    sub_maxp.write::<u32>(version);
    sub_maxp.write::<u16>(ctx.num_glyphs());

    if version == 0x00010000 {
        sub_maxp.extend(r.tail().ok_or(Error::MalformedFont)?);
    }

    ctx.push(Tag::MAXP, sub_maxp.finish());
    Ok(())
}
