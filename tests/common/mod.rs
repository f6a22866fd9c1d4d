//! Builds small TrueType fonts in memory.

#![allow(dead_code)]

/// Glyph IDs of the sample font.
pub mod gid {
    pub const NOTDEF: u16 = 0;
    pub const SPACE: u16 = 1;
    pub const A: u16 = 2;
    pub const B: u16 = 3;
    pub const A_SMALL: u16 = 4;
    pub const ACUTE: u16 = 5;
    pub const A_SMALL_ACUTE: u16 = 6;
    pub const A_DIAERESIS: u16 = 7;
    pub const UNMAPPED: u16 = 8;
    pub const GRINNING: u16 = 9;
    pub const ZERO: u16 = 10;
    pub const NINE: u16 = 19;
    pub const COUNT: u16 = 20;
}

type Contour<'a> = &'a [(i16, i16, bool)];

struct Glyph {
    data: Vec<u8>,
    advance: u16,
    lsb: i16,
    bbox: [i16; 4],
}

/// Assembles a TrueType font from glyphs and mappings.
pub struct FontBuilder {
    units_per_em: u16,
    glyphs: Vec<Glyph>,
    mappings: Vec<(u32, u16)>,
    postscript_name: Option<String>,
    os2: bool,
}

impl FontBuilder {
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            glyphs: vec![],
            mappings: vec![],
            postscript_name: None,
            os2: false,
        }
    }

    /// Add a glyph with the given contours.
    pub fn simple(&mut self, contours: &[Contour], advance: u16) -> u16 {
        let points: Vec<_> = contours.iter().flat_map(|c| c.iter().copied()).collect();
        let bbox = [
            points.iter().map(|p| p.0).min().unwrap_or(0),
            points.iter().map(|p| p.1).min().unwrap_or(0),
            points.iter().map(|p| p.0).max().unwrap_or(0),
            points.iter().map(|p| p.1).max().unwrap_or(0),
        ];

        let mut data = vec![];
        push_i16(&mut data, contours.len() as i16);
        bbox.iter().for_each(|&v| push_i16(&mut data, v));

        let mut end = 0;
        for contour in contours {
            end += contour.len() as u16;
            push_u16(&mut data, end - 1);
        }

        // No instructions.
        push_u16(&mut data, 0);

        data.extend(points.iter().map(|&(_, _, on_curve)| on_curve as u8));

        let mut last = 0;
        for &(x, _, _) in &points {
            push_i16(&mut data, x - last);
            last = x;
        }

        let mut last = 0;
        for &(_, y, _) in &points {
            push_i16(&mut data, y - last);
            last = y;
        }

        self.push(Glyph { data, advance, lsb: bbox[0], bbox })
    }

    /// Add a composite glyph whose components are offset by `(dx, dy)`.
    pub fn composite(&mut self, components: &[(u16, i16, i16)], advance: u16) -> u16 {
        let bbox = components
            .iter()
            .map(|&(g, dx, dy)| {
                let [x0, y0, x1, y1] = self.glyphs[usize::from(g)].bbox;
                [x0 + dx, y0 + dy, x1 + dx, y1 + dy]
            })
            .reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])])
            .unwrap_or_default();

        let mut data = vec![];
        push_i16(&mut data, -1);
        bbox.iter().for_each(|&v| push_i16(&mut data, v));

        for (i, &(glyph, dx, dy)) in components.iter().enumerate() {
            // ARG_1_AND_2_ARE_WORDS | ARGS_ARE_XY_VALUES
            let mut flags = 0x0001 | 0x0002;
            if i + 1 < components.len() {
                // MORE_COMPONENTS
                flags |= 0x0020;
            }
            push_u16(&mut data, flags);
            push_u16(&mut data, glyph);
            push_i16(&mut data, dx);
            push_i16(&mut data, dy);
        }

        self.push(Glyph { data, advance, lsb: bbox[0], bbox })
    }

    /// Add a glyph without outline.
    pub fn empty(&mut self, advance: u16) -> u16 {
        self.push(Glyph { data: vec![], advance, lsb: 0, bbox: [0; 4] })
    }

    pub fn map(&mut self, c: char, glyph: u16) -> &mut Self {
        self.mappings.push((u32::from(c), glyph));
        self
    }

    pub fn postscript_name(&mut self, name: &str) -> &mut Self {
        self.postscript_name = Some(name.into());
        self
    }

    pub fn with_os2(&mut self) -> &mut Self {
        self.os2 = true;
        self
    }

    fn push(&mut self, glyph: Glyph) -> u16 {
        self.glyphs.push(glyph);
        (self.glyphs.len() - 1) as u16
    }

    pub fn build(&self) -> Vec<u8> {
        let mut glyf = vec![];
        let mut loca = vec![];
        let mut hmtx = vec![];
        for glyph in &self.glyphs {
            push_u16(&mut loca, (glyf.len() / 2) as u16);
            glyf.extend(&glyph.data);
            if glyf.len() % 2 == 1 {
                glyf.push(0);
            }
            push_u16(&mut hmtx, glyph.advance);
            push_i16(&mut hmtx, glyph.lsb);
        }
        push_u16(&mut loca, (glyf.len() / 2) as u16);

        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"cmap", self.cmap()),
            (*b"glyf", glyf),
            (*b"head", self.head()),
            (*b"hhea", self.hhea()),
            (*b"hmtx", hmtx),
            (*b"loca", loca),
            (*b"maxp", self.maxp()),
            (*b"post", post()),
        ];

        if let Some(name) = &self.postscript_name {
            tables.push((*b"name", name_table(name)));
        }

        if self.os2 {
            tables.push((*b"OS/2", os2()));
        }

        tables.sort_by_key(|(tag, _)| *tag);
        assemble(&tables)
    }

    fn head(&self) -> Vec<u8> {
        let bbox = self
            .glyphs
            .iter()
            .filter(|g| !g.data.is_empty())
            .map(|g| g.bbox)
            .reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])])
            .unwrap_or_default();

        let mut w = vec![];
        push_u32(&mut w, 0x00010000); // version
        push_u32(&mut w, 0x00010000); // font revision
        push_u32(&mut w, 0); // checksum adjustment
        push_u32(&mut w, 0x5F0F3CF5); // magic
        push_u16(&mut w, 0); // flags
        push_u16(&mut w, self.units_per_em);
        w.extend([0; 16]); // created + modified
        bbox.iter().for_each(|&v| push_i16(&mut w, v));
        push_u16(&mut w, 0); // mac style
        push_u16(&mut w, 8); // lowest rec ppem
        push_i16(&mut w, 2); // font direction hint
        push_i16(&mut w, 0); // index to loc format
        push_i16(&mut w, 0); // glyph data format
        w
    }

    fn hhea(&self) -> Vec<u8> {
        let max = self.glyphs.iter().map(|g| g.advance).max().unwrap_or(0);
        let mut w = vec![];
        push_u32(&mut w, 0x00010000);
        push_i16(&mut w, 800); // ascender
        push_i16(&mut w, -200); // descender
        push_i16(&mut w, 90); // line gap
        push_u16(&mut w, max);
        w.extend([0; 6]); // min lsb, min rsb, x max extent
        push_i16(&mut w, 1); // caret slope rise
        w.extend([0; 14]); // caret slope run, caret offset, reserved, data format
        push_u16(&mut w, self.glyphs.len() as u16);
        w
    }

    fn maxp(&self) -> Vec<u8> {
        let mut w = vec![];
        push_u32(&mut w, 0x00010000);
        push_u16(&mut w, self.glyphs.len() as u16);
        w.extend([0; 26]);
        w
    }

    /// A Windows Unicode BMP subtable (format 4) and, if needed, a Windows
    /// Unicode full repertoire subtable (format 12).
    fn cmap(&self) -> Vec<u8> {
        let mut mappings = self.mappings.clone();
        mappings.sort();

        let bmp: Vec<_> = mappings.iter().filter(|(c, _)| *c < 0xFFFF).copied().collect();
        let format4 = format4(&bmp);
        let format12 = (bmp.len() < mappings.len()).then(|| format12(&mappings));

        let num_tables = 1 + format12.is_some() as u16;
        let mut w = vec![];
        push_u16(&mut w, 0);
        push_u16(&mut w, num_tables);

        let mut offset = 4 + 8 * u32::from(num_tables);
        push_u16(&mut w, 3);
        push_u16(&mut w, 1);
        push_u32(&mut w, offset);
        offset += format4.len() as u32;

        if format12.is_some() {
            push_u16(&mut w, 3);
            push_u16(&mut w, 10);
            push_u32(&mut w, offset);
        }

        w.extend(format4);
        w.extend(format12.unwrap_or_default());
        w
    }
}

/// One segment per mapping, plus the final segment.
fn format4(mappings: &[(u32, u16)]) -> Vec<u8> {
    let mut segments: Vec<(u16, u16, u16)> =
        mappings.iter().map(|&(c, g)| (c as u16, c as u16, g.wrapping_sub(c as u16))).collect();
    segments.push((0xFFFF, 0xFFFF, 1));

    let seg_count = segments.len() as u16;
    let entry_selector = 15 - seg_count.leading_zeros() as u16;
    let search_range = 2 * (1 << entry_selector);

    let mut w = vec![];
    push_u16(&mut w, 4);
    push_u16(&mut w, 16 + 8 * seg_count);
    push_u16(&mut w, 0);
    push_u16(&mut w, 2 * seg_count);
    push_u16(&mut w, search_range);
    push_u16(&mut w, entry_selector);
    push_u16(&mut w, 2 * seg_count - search_range);
    segments.iter().for_each(|s| push_u16(&mut w, s.1));
    push_u16(&mut w, 0);
    segments.iter().for_each(|s| push_u16(&mut w, s.0));
    segments.iter().for_each(|s| push_u16(&mut w, s.2));
    segments.iter().for_each(|_| push_u16(&mut w, 0));
    w
}

fn format12(mappings: &[(u32, u16)]) -> Vec<u8> {
    let mut w = vec![];
    push_u16(&mut w, 12);
    push_u16(&mut w, 0);
    push_u32(&mut w, 16 + 12 * mappings.len() as u32);
    push_u32(&mut w, 0);
    push_u32(&mut w, mappings.len() as u32);
    for &(c, g) in mappings {
        push_u32(&mut w, c);
        push_u32(&mut w, c);
        push_u32(&mut w, u32::from(g));
    }
    w
}

fn post() -> Vec<u8> {
    let mut w = vec![];
    push_u32(&mut w, 0x00030000);
    push_u32(&mut w, 0); // italic angle
    push_i16(&mut w, -100); // underline position
    push_i16(&mut w, 50); // underline thickness
    w.extend([0; 20]);
    w
}

fn name_table(postscript_name: &str) -> Vec<u8> {
    let records: [(u16, String); 2] = [
        (1, postscript_name.split('-').next().unwrap_or_default().to_string()),
        (6, postscript_name.to_string()),
    ];

    let mut w = vec![];
    let mut storage = vec![];
    push_u16(&mut w, 0);
    push_u16(&mut w, records.len() as u16);
    push_u16(&mut w, 6 + 12 * records.len() as u16);
    for (name_id, value) in &records {
        let bytes: Vec<u8> = value.encode_utf16().flat_map(u16::to_be_bytes).collect();
        push_u16(&mut w, 3);
        push_u16(&mut w, 1);
        push_u16(&mut w, 0x409);
        push_u16(&mut w, *name_id);
        push_u16(&mut w, bytes.len() as u16);
        push_u16(&mut w, storage.len() as u16);
        storage.extend(bytes);
    }
    w.extend(storage);
    w
}

fn os2() -> Vec<u8> {
    let mut w = vec![];
    push_u16(&mut w, 4); // version
    push_i16(&mut w, 500); // average char width
    push_u16(&mut w, 400); // weight class
    push_u16(&mut w, 5); // width class
    w.resize(96, 0);
    w
}

fn assemble(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let count = tables.len() as u16;
    let mut data = vec![];
    push_u32(&mut data, 0x00010000);
    push_u16(&mut data, count);
    data.extend([0; 6]);

    let mut offset = 12 + 16 * tables.len();
    for (tag, table) in tables {
        data.extend(tag);
        push_u32(&mut data, 0);
        push_u32(&mut data, offset as u32);
        push_u32(&mut data, table.len() as u32);
        offset += (table.len() + 3) / 4 * 4;
    }

    for (_, table) in tables {
        data.extend(table);
        while data.len() % 4 != 0 {
            data.push(0);
        }
    }

    data
}

fn push_u16(w: &mut Vec<u8>, v: u16) {
    w.extend(v.to_be_bytes());
}

fn push_i16(w: &mut Vec<u8>, v: i16) {
    w.extend(v.to_be_bytes());
}

fn push_u32(w: &mut Vec<u8>, v: u32) {
    w.extend(v.to_be_bytes());
}

fn rect(x0: i16, y0: i16, x1: i16, y1: i16) -> [(i16, i16, bool); 4] {
    [(x0, y0, true), (x1, y0, true), (x1, y1, true), (x0, y1, true)]
}

/// A font with a few Latin glyphs, two composites, an emoji and ten digits.
/// See [`gid`] for the glyph IDs.
pub fn sample_builder() -> FontBuilder {
    let mut b = FontBuilder::new(1000);
    b.simple(&[&rect(50, 0, 450, 700), &rect(100, 50, 400, 650)], 500);
    let space = b.empty(250);
    let a = b.simple(&[&[(10, 0, true), (600, 0, true), (300, 700, true)]], 620);
    let big_b = b.simple(
        &[&[(100, 0, true), (400, 0, true), (500, 350, false), (400, 700, true), (100, 700, true)]],
        560,
    );
    let small_a = b.simple(&[&rect(50, 0, 450, 450)], 500);
    let acute = b.simple(&[&[(100, 500, true), (300, 500, true), (250, 700, true)]], 0);
    let small_a_acute = b.composite(&[(small_a, 0, 0), (acute, 50, 0)], 500);
    let a_diaeresis = b.composite(&[(a, 0, 0), (acute, 100, 100)], 620);
    b.simple(&[&[(0, 0, true), (100, 0, true), (0, 100, true)]], 300);
    let grinning = b.simple(&[&rect(0, -100, 800, 700)], 1000);

    b.map(' ', space)
        .map('A', a)
        .map('B', big_b)
        .map('a', small_a)
        .map('\u{B4}', acute)
        .map('á', small_a_acute)
        .map('Ä', a_diaeresis)
        .map('😀', grinning);

    for (i, digit) in ('0'..='9').enumerate() {
        let x = 50 + 10 * i as i16;
        let glyph = b.simple(&[&rect(x, 0, x + 400, 700)], 556);
        b.map(digit, glyph);
    }

    b.postscript_name("Sample-Regular").with_os2();
    b
}

pub fn sample_font() -> Vec<u8> {
    sample_builder().build()
}
