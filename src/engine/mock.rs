//! An in-memory font engine for unit tests.

use super::FontEngine;
use crate::stream::Writer;
use crate::Tag;
use rustc_hash::FxHashMap;

pub(crate) struct MockGlyph {
    pub advance: u16,
    pub lsb: i16,
    pub data: Option<Vec<u8>>,
}

pub(crate) struct MockEngine {
    pub glyphs: Vec<MockGlyph>,
    pub char_map: Vec<(u32, u16)>,
    pub tables: FxHashMap<Tag, Vec<u8>>,
    pub units_per_em: u16,
    pub symbolic: bool,
    pub name: Option<String>,
}

impl MockEngine {
    /// A font with 256 glyphs.
    ///
    /// - Glyphs 33..=126 are triangles mapped to the ASCII character with the
    ///   same value, 32 is an empty space glyph.
    /// - 233 maps to 'é' and 230 to U+1F600.
    /// - 200, 240 and 241 are unmapped triangles.
    /// - 250 is a composite of 240 and 241, 251 a composite of 65 and 250.
    /// - 252 references the nonexistent glyph 999, 253 is truncated.
    pub fn alphabet() -> Self {
        let mut glyphs = vec![];
        for g in 0..256u16 {
            let data = match g {
                32 | 254 => Some(vec![]),
                250 => Some(composite_glyph(&[(240, 0, 0), (241, 300, 0)])),
                251 => Some(composite_glyph(&[(65, 0, 0), (250, 0, 500)])),
                252 => Some(composite_glyph(&[(999, 0, 0)])),
                253 => Some(vec![0xFF, 0xFF, 0, 0, 0]),
                _ => Some(triangle(g as i16)),
            };
            glyphs.push(MockGlyph { advance: 500 + g, lsb: 10, data });
        }

        let mut char_map: Vec<(u32, u16)> = (32..=126).map(|c| (c, c as u16)).collect();
        char_map.push((0xE9, 233));
        char_map.push((0x1F600, 230));

        let mut tables = FxHashMap::default();
        tables.insert(Tag::HEAD, head_table(1000));
        tables.insert(Tag::HHEA, hhea_table(256));
        tables.insert(Tag::MAXP, maxp_table(256));

        Self {
            glyphs,
            char_map,
            tables,
            units_per_em: 1000,
            symbolic: false,
            name: Some("Mock-Regular".into()),
        }
    }
}

impl FontEngine for MockEngine {
    fn glyph_count(&self) -> u16 {
        self.glyphs.len() as u16
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn advance_width(&self, glyph: u16) -> Option<u16> {
        self.glyphs.get(usize::from(glyph)).map(|g| g.advance)
    }

    fn left_side_bearing(&self, glyph: u16) -> Option<i16> {
        self.glyphs.get(usize::from(glyph)).map(|g| g.lsb)
    }

    fn glyph_data(&self, glyph: u16) -> Option<&[u8]> {
        self.glyphs.get(usize::from(glyph))?.data.as_deref()
    }

    fn table(&self, tag: Tag) -> Option<&[u8]> {
        self.tables.get(&tag).map(Vec::as_slice)
    }

    fn char_map(&self) -> Vec<(u32, u16)> {
        self.char_map.clone()
    }

    fn postscript_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn is_symbolic(&self) -> bool {
        self.symbolic
    }
}

fn triangle(size: i16) -> Vec<u8> {
    simple_glyph(&[&[(10, 0, true), (10 + size, 0, true), (10, size, true)]])
}

/// Encode a simple glyph without instructions.
pub(crate) fn simple_glyph(contours: &[&[(i16, i16, bool)]]) -> Vec<u8> {
    let points: Vec<_> = contours.iter().flat_map(|c| c.iter().copied()).collect();
    let x_min = points.iter().map(|p| p.0).min().unwrap_or(0);
    let y_min = points.iter().map(|p| p.1).min().unwrap_or(0);
    let x_max = points.iter().map(|p| p.0).max().unwrap_or(0);
    let y_max = points.iter().map(|p| p.1).max().unwrap_or(0);

    let mut w = Writer::new();
    w.write::<i16>(contours.len() as i16);
    w.write::<i16>(x_min);
    w.write::<i16>(y_min);
    w.write::<i16>(x_max);
    w.write::<i16>(y_max);

    let mut end = 0u16;
    for contour in contours {
        end += contour.len() as u16;
        w.write::<u16>(end - 1);
    }

    // No instructions.
    w.write::<u16>(0);

    for &(_, _, on_curve) in &points {
        w.write::<u8>(on_curve as u8);
    }

    let mut last = 0;
    for &(x, _, _) in &points {
        w.write::<i16>(x - last);
        last = x;
    }

    let mut last = 0;
    for &(_, y, _) in &points {
        w.write::<i16>(y - last);
        last = y;
    }

    w.finish()
}

/// Encode a composite glyph whose components are offset by `(dx, dy)`.
pub(crate) fn composite_glyph(components: &[(u16, i16, i16)]) -> Vec<u8> {
    let mut w = Writer::new();
    w.write::<i16>(-1);
    w.write::<[i16; 4]>([0, 0, 1000, 1000]);

    for (i, &(glyph, dx, dy)) in components.iter().enumerate() {
        // ARG_1_AND_2_ARE_WORDS | ARGS_ARE_XY_VALUES
        let mut flags = 0x0001 | 0x0002;
        if i + 1 < components.len() {
            flags |= 0x0020;
        }
        w.write::<u16>(flags);
        w.write::<u16>(glyph);
        w.write::<i16>(dx);
        w.write::<i16>(dy);
    }

    w.finish()
}

impl crate::stream::Writeable for [i16; 4] {
    fn write(&self, w: &mut Writer) {
        for v in self {
            w.write::<i16>(*v);
        }
    }
}

pub(crate) fn head_table(units_per_em: u16) -> Vec<u8> {
    let mut w = Writer::new();
    w.write::<u32>(0x00010000); // version
    w.write::<u32>(0x00010000); // font revision
    w.write::<u32>(0); // checksum adjustment
    w.write::<u32>(0x5F0F3CF5); // magic
    w.write::<u16>(0); // flags
    w.write::<u16>(units_per_em);
    w.write::<[u8; 16]>([0; 16]); // created + modified
    w.write::<[i16; 4]>([-100, -200, 1200, 1100]);
    w.write::<u16>(0); // mac style
    w.write::<u16>(8); // lowest rec ppem
    w.write::<i16>(2); // font direction hint
    w.write::<i16>(0); // index to loc format
    w.write::<i16>(0); // glyph data format
    w.finish()
}

pub(crate) fn hhea_table(num_h_metrics: u16) -> Vec<u8> {
    let mut w = Writer::new();
    w.write::<u32>(0x00010000);
    w.write::<i16>(800); // ascender
    w.write::<i16>(-200); // descender
    w.write::<i16>(0); // line gap
    w.write::<u16>(755); // advance width max
    w.write::<[i16; 4]>([0, 0, 0, 1]); // min lsb, min rsb, x max extent, caret rise
    w.write::<[i16; 4]>([0; 4]); // caret run, caret offset, reserved
    w.write::<[u8; 6]>([0; 6]); // reserved, metric data format
    w.write::<u16>(num_h_metrics);
    w.finish()
}

pub(crate) fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut w = Writer::new();
    w.write::<u32>(0x00010000);
    w.write::<u16>(num_glyphs);
    w.write::<[u8; 26]>([0; 26]);
    w.finish()
}
