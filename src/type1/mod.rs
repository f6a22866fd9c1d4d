//! Type 1 font programs.
//!
//! A Type 1 subset is written in two phases. The first call to
//! [`Ledger::program`] freezes the glyphs registered so far into a complete
//! font program. Glyphs registered afterwards can't be added to that program
//! anymore, as it may already have been written to the document. Instead,
//! [`Ledger::supplement`] emits them as a PostScript fragment that appends
//! their charstrings to the font's `/CharStrings` dictionary and assigns them
//! codes in its `/Encoding`. Both are left writable by the base program.

mod charstring;
mod crypt;

use self::charstring::Program;
use self::crypt::{encrypt, hex_lines, CHARSTRING_KEY, EEXEC_KEY, LEN_IV};
use crate::engine::FontEngine;
use crate::stream::Readable;
use crate::Tag;
use kurbo::Shape;
use std::fmt::Write;

/// Room for glyphs added after the cut in the `/CharStrings` dictionary.
const SPARE_CHARSTRINGS: usize = 256;

/// The glyphs of a subset, as seen by the Type 1 writer.
pub(crate) struct Source<'a> {
    pub engine: &'a dyn FontEngine,
    /// Native glyph indices, indexed by new index.
    pub glyphs: &'a [u16],
    /// Unique glyph names, indexed by new index.
    pub names: &'a [String],
    pub font_name: &'a str,
}

/// Tracks which glyphs have been written in which phase.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    /// The frozen base program.
    base: Option<Vec<u8>>,
    /// The number of glyphs in the base program.
    cut: usize,
    /// The number of glyphs written in the base program or any supplement.
    emitted: usize,
}

impl Ledger {
    /// The base program. Only the first call writes it, later calls return
    /// identical bytes.
    pub fn program(&mut self, src: &Source) -> Vec<u8> {
        if let Some(base) = &self.base {
            return base.clone();
        }

        let n = src.glyphs.len();
        let base = write_program(src);

        log::debug!("type 1 program of {} frozen at {n} glyphs", src.font_name);
        self.cut = n;
        self.emitted = n;
        self.base = Some(base.clone());
        base
    }

    /// The charstrings of all glyphs that were registered since the base
    /// program or the last supplement was written.
    pub fn supplement(&mut self, src: &Source) -> Vec<u8> {
        let n = src.glyphs.len();
        if self.base.is_none() || self.emitted >= n {
            return vec![];
        }

        let names = src.names;
        let mut out = format!("/{} findfont /CharStrings get begin\n", src.font_name).into_bytes();
        for i in self.emitted..n {
            let charstring = encrypted_charstring(src, i);
            out.extend(format!("/{} {} ", names[i], charstring.len()).bytes());
            out.extend(b"{string currentfile exch readstring pop} exec ");
            out.extend(&charstring);
            out.extend(b" noaccess def\n");
        }
        out.extend(b"end\n");

        // Only the first 256 glyphs have a code.
        if self.emitted < 256 {
            out.extend(format!("/{} findfont /Encoding get\n", src.font_name).bytes());
            for (i, name) in names.iter().enumerate().take(n.min(256)).skip(self.emitted) {
                out.extend(format!("dup {i} /{name} put\n").bytes());
            }
            out.extend(b"pop\n");
        }

        log::debug!(
            "type 1 supplement of {} with glyphs {}..{n}, cut at {}",
            src.font_name,
            self.emitted,
            self.cut
        );
        self.emitted = n;
        out
    }

    /// The number of glyphs in the base program, if it was written.
    #[cfg(test)]
    pub fn cut(&self) -> Option<usize> {
        self.base.as_ref().map(|_| self.cut)
    }
}

/// The charstring of the glyph with new index `i`, encrypted.
fn encrypted_charstring(src: &Source, i: usize) -> Vec<u8> {
    let native = src.glyphs[i];
    let path = src.engine.outline(native);
    if path.is_none() {
        log::warn!("glyph {native} is malformed and was replaced by an empty glyph");
    }

    let lsb = src.engine.left_side_bearing(native).unwrap_or(0);
    let advance = src.engine.advance_width(native).unwrap_or(0);
    let program = Program::build(path.as_ref(), lsb, advance);
    encrypt(&program.compile(), CHARSTRING_KEY, LEN_IV)
}

fn write_program(src: &Source) -> Vec<u8> {
    let mut out = clear_text(src).into_bytes();
    let private = private_part(src);
    out.extend(hex_lines(&encrypt(&private, EEXEC_KEY, 4)).bytes());

    // The trailer: 512 zeros and cleartomark.
    for _ in 0..8 {
        out.extend([b'0'; 64]);
        out.push(b'\n');
    }
    out.extend(b"cleartomark\n");
    out
}

fn clear_text(src: &Source) -> String {
    let name = src.font_name;
    let scale = 1.0 / f64::from(src.engine.units_per_em().max(1));
    let [x_min, y_min, x_max, y_max] = font_bbox(src);

    let mut out = String::new();
    write!(
        out,
        "%!PS-AdobeFont-1.0: {name} 001.000\n\
         11 dict begin\n\
         /FontName /{name} def\n\
         /FontInfo 2 dict dup begin\n\
         /FullName ({name}) readonly def\n\
         /isFixedPitch false def\n\
         end readonly def\n\
         /PaintType 0 def\n\
         /FontType 1 def\n\
         /FontMatrix [{scale} 0 0 {scale} 0 0] readonly def\n\
         /FontBBox {{{x_min} {y_min} {x_max} {y_max}}} readonly def\n\
         /Encoding 256 array\n\
         0 1 255 {{1 index exch /.notdef put}} for\n"
    )
    .ok();

    for (i, glyph_name) in src.names.iter().enumerate().take(256).skip(1) {
        writeln!(out, "dup {i} /{glyph_name} put").ok();
    }

    // Not readonly, supplements fill in codes of later glyphs.
    out.push_str("def\ncurrentdict end\ncurrentfile eexec\n");
    out
}

/// The bounding box from the `head` table or, if there is none, the union of
/// all outlines.
fn font_bbox(src: &Source) -> [i32; 4] {
    if let Some(bbox) = src.engine.table(Tag::HEAD).and_then(|head| head.get(36..44)) {
        let v = |i| i16::read_at(bbox, i).map(i32::from).unwrap_or(0);
        return [v(0), v(2), v(4), v(6)];
    }

    src.glyphs
        .iter()
        .filter_map(|&g| src.engine.outline(g))
        .filter(|path| !path.elements().is_empty())
        .map(|path| path.bounding_box())
        .reduce(|a, b| a.union(b))
        .map(|rect| {
            [
                rect.x0.floor() as i32,
                rect.y0.floor() as i32,
                rect.x1.ceil() as i32,
                rect.y1.ceil() as i32,
            ]
        })
        .unwrap_or_default()
}

/// The part of the program that is eexec-encrypted.
fn private_part(src: &Source) -> Vec<u8> {
    let mut out = format!(
        "dup /Private 8 dict dup begin\n\
         /RD {{string currentfile exch readstring pop}} executeonly def\n\
         /ND {{noaccess def}} executeonly def\n\
         /NP {{noaccess put}} executeonly def\n\
         /MinFeature {{16 16}} def\n\
         /password 5839 def\n\
         /lenIV {LEN_IV} def\n\
         /BlueValues [] def\n\
         /Subrs 0 array ND\n\
         2 index /CharStrings {} dict dup begin\n",
        src.names.len() + SPARE_CHARSTRINGS
    )
    .into_bytes();

    for (i, name) in src.names.iter().enumerate() {
        let charstring = encrypted_charstring(src, i);
        out.extend(format!("/{name} {} RD ", charstring.len()).bytes());
        out.extend(&charstring);
        out.extend(b" ND\n");
    }

    out.extend(
        b"end\n\
          end\n\
          put\n\
          noaccess put\n\
          dup /FontName get exch definefont pop\n\
          mark currentfile closefile\n",
    );
    out
}
