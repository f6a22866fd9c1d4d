/*!
Incremental font subsetting for embedding fonts into generated documents.

A [`SubsetContext`] is created once per font and document. While the document
is laid out, every glyph that gets drawn is registered with
[`SubsetContext::add_glyph`], which hands out new, compact glyph indices in
first-use order. When the document is written, the context produces either a
TrueType font or a PostScript Type 1 program containing only those glyphs,
together with the PDF width array and ToUnicode CMap that describe them.

# Example
```no_run
use std::sync::Arc;
use fontsubset::{Face, SubsetContext};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let data = std::fs::read("fonts/NotoSans-Regular.ttf")?;
let face = Arc::new(Face::parse(data, 0)?);

let mut ctx = SubsetContext::new(face, 7);
let a = ctx.add_glyph(36);
let b = ctx.add_glyph(37);
assert_eq!((a, b), (1, 2));

let font = ctx.to_truetype()?;
let widths = ctx.width_array();
let to_unicode = ctx.create_to_unicode_map();
# let _ = (font, widths, to_unicode);
# Ok(())
# }
```

Unlike a subsetter that keeps glyph IDs stable, the glyphs of the produced
font are renumbered: new index `0` is always `.notdef`, and new index `i` is
the `i`-th distinct glyph that was registered. Composite glyphs pull their
components into the subset while the TrueType font is written, so the
registry may grow during serialization.
*/

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod agl;
mod cmap;
mod context;
mod engine;
mod face;
mod glyf;
mod head;
mod hhea;
mod hmtx;
mod maxp;
mod metrics;
mod name;
mod outline;
mod pdf;
mod post;
mod remapper;
mod standard;
mod stream;
mod truetype;
mod type1;
mod unicode;

pub use crate::context::SubsetContext;
pub use crate::engine::{FontCache, FontEngine};
pub use crate::face::Face;
pub use crate::remapper::GlyphRemapper;
pub use crate::standard::StandardFont;
pub use crate::unicode::glyph_name_for;

use crate::stream::{Readable, Reader, Writeable, Writer};
use std::fmt::{self, Debug, Display, Formatter};

/// A 4-byte OpenType tag.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag(pub [u8; 4]);

#[allow(missing_docs)]
impl Tag {
    // General tables.
    pub const CMAP: Self = Self(*b"cmap");
    pub const HEAD: Self = Self(*b"head");
    pub const HHEA: Self = Self(*b"hhea");
    pub const HMTX: Self = Self(*b"hmtx");
    pub const MAXP: Self = Self(*b"maxp");
    pub const NAME: Self = Self(*b"name");
    pub const OS2: Self = Self(*b"OS/2");
    pub const POST: Self = Self(*b"post");

    // TrueType.
    pub const GLYF: Self = Self(*b"glyf");
    pub const LOCA: Self = Self(*b"loca");
    pub const PREP: Self = Self(*b"prep");
    pub const FPGM: Self = Self(*b"fpgm");
    pub const CVT: Self = Self(*b"cvt ");
    pub const GASP: Self = Self(*b"gasp");
}

impl Readable<'_> for Tag {
    const SIZE: usize = 4;

    fn read(r: &mut Reader) -> Option<Self> {
        r.read::<[u8; 4]>().map(Self)
    }
}

impl Writeable for Tag {
    fn write(&self, w: &mut Writer) {
        w.write::<[u8; 4]>(self.0)
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(std::str::from_utf8(&self.0).unwrap_or("..."))
    }
}

/// The result type for everything.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that occurred while reading a font or writing a subset.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The file contains an unknown kind of font.
    #[error("unknown font kind")]
    UnknownKind,
    /// The font is malformed in a way that prevents reading it at all.
    ///
    /// Malformed data of individual glyphs never results in this error; such
    /// glyphs are written as empty outlines instead.
    #[error("malformed font")]
    MalformedFont,
    /// A table that is needed to build the subset is missing.
    #[error("missing {0} table")]
    MissingTable(Tag),
    /// The subset contains more glyphs than the output format can address.
    #[error("subset contains {0} glyphs, but at most 65535 are allowed")]
    TooManyGlyphs(usize),
    /// A glyph index outside of the source font was registered.
    #[error("glyph {glyph} is out of range for a font with {count} glyphs")]
    GlyphOutOfRange {
        /// The offending glyph index.
        glyph: u16,
        /// The number of glyphs in the source font.
        count: u16,
    },
    /// The font must be referenced by name and cannot be embedded.
    #[error("font is not embeddable")]
    NotEmbeddable,
}
