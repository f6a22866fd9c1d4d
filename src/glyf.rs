//! The `glyf` table contains the main description of the glyphs. In order to
//! subset it, there are 4 things we need to do:
//! 1. We need to form the glyph closure. Glyphs can reference other glyphs, meaning that
//!    if a user for example requests the glyph 1, and this glyph references the glyph 2, then
//!    we need to include both of them in our subset. The registry itself serves as the
//!    work list: components are appended to it and visited once the walk reaches them.
//! 2. For component glyphs, we need to rewrite their description so that they reference
//!    the new glyph ID of the glyphs they reference.
//! 3. We need to calculate which format to use in the `loca` table.
//! 4. We need to write the `loca` table itself with the new offsets.

use crate::outline::components;
use crate::stream::{Readable, Writer};
use crate::truetype::Context;
use crate::{Result, Tag};
use std::borrow::Cow;

pub(crate) fn subset(ctx: &mut Context) -> Result<()> {
    let entries = subset_glyf_entries(ctx);

    let mut sub_glyf = Writer::new();
    let mut sub_loca = Writer::new();

    let long_loca = ctx.long_loca;
    let mut write_offset = |offset: usize| {
        if long_loca {
            sub_loca.write::<u32>(offset as u32);
        } else {
            sub_loca.write::<u16>((offset / 2) as u16);
        }
    };

    for entry in &entries {
        write_offset(sub_glyf.len());
        sub_glyf.extend(entry);
        sub_glyf.align(2);
    }

    // Write the final offset.
    write_offset(sub_glyf.len());

    ctx.push(Tag::LOCA, sub_loca.finish());
    ctx.push(Tag::GLYF, sub_glyf.finish());

    Ok(())
}

fn subset_glyf_entries<'a>(ctx: &mut Context<'a>) -> Vec<Cow<'a, [u8]>> {
    let mut size = 0;
    let mut glyf_entries = vec![];

    // The number of glyphs grows while we iterate.
    let mut i = 0;
    while i < ctx.remapper.num_gids() {
        let old_gid = ctx.remapper.as_slice()[i];
        let entry = glyph_entry(ctx, old_gid).unwrap_or_else(|| {
            log::warn!("glyph {old_gid} is malformed and was replaced by an empty glyph");
            Cow::Borrowed(&[])
        });

        if let Some(bbox) = entry.get(2..10) {
            let x_min = i16::read_at(bbox, 0).unwrap_or(0);
            let y_min = i16::read_at(bbox, 2).unwrap_or(0);
            let x_max = i16::read_at(bbox, 4).unwrap_or(0);
            let y_max = i16::read_at(bbox, 6).unwrap_or(0);
            ctx.bbox = Some(match ctx.bbox {
                Some([a, b, c, d]) => [a.min(x_min), b.min(y_min), c.max(x_max), d.max(y_max)],
                None => [x_min, y_min, x_max, y_max],
            });
        }

        let len = entry.len();
        size += len + len % 2;
        glyf_entries.push(entry);
        i += 1;
    }

    ctx.long_loca = size > 2 * (u16::MAX as usize);

    glyf_entries
}

/// The record of a single glyph with component references rewritten to new
/// indices, or `None` if it is malformed.
fn glyph_entry<'a>(ctx: &mut Context<'a>, old_gid: u16) -> Option<Cow<'a, [u8]>> {
    let engine = ctx.engine;
    let glyph_count = engine.glyph_count();
    if old_gid >= glyph_count {
        return None;
    }

    let data = engine.glyph_data(old_gid)?;
    if data.is_empty() {
        return Some(Cow::Borrowed(data));
    }

    // Number of contours + bounding box.
    let num_contours = i16::read_at(data, 0)?;
    if data.len() < 10 {
        return None;
    }

    if num_contours >= 0 {
        return Some(Cow::Borrowed(data));
    }

    let components = components(data)?;
    let mut data = data.to_vec();
    for component in components {
        if component.glyph >= glyph_count {
            log::warn!("glyph {old_gid} references nonexistent glyph {}", component.glyph);
            return None;
        }

        let new_gid = ctx.remapper.remap(component.glyph);
        let offset = component.glyph_offset;
        data[offset..offset + 2].copy_from_slice(&new_gid.to_be_bytes());
    }

    Some(Cow::Owned(data))
}
