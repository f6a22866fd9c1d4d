//! The 14 fonts every PDF reader provides.

use std::fmt::{self, Display, Formatter};

/// One of the 14 standard fonts.
///
/// Subsets of these fonts are never embedded; a document refers to them by
/// name instead.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StandardFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Symbol,
    ZapfDingbats,
}

impl StandardFont {
    /// All standard fonts.
    pub const ALL: [Self; 14] = [
        Self::Courier,
        Self::CourierBold,
        Self::CourierOblique,
        Self::CourierBoldOblique,
        Self::Helvetica,
        Self::HelveticaBold,
        Self::HelveticaOblique,
        Self::HelveticaBoldOblique,
        Self::TimesRoman,
        Self::TimesBold,
        Self::TimesItalic,
        Self::TimesBoldItalic,
        Self::Symbol,
        Self::ZapfDingbats,
    ];

    /// The PostScript name of the font.
    pub fn postscript_name(self) -> &'static str {
        match self {
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
            Self::CourierOblique => "Courier-Oblique",
            Self::CourierBoldOblique => "Courier-BoldOblique",
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
            Self::TimesBoldItalic => "Times-BoldItalic",
            Self::Symbol => "Symbol",
            Self::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Match a PostScript name against the standard fonts.
    ///
    /// Besides the canonical names, this accepts the names of the metric
    /// compatible fonts shipped with Windows, e.g. `Arial-BoldMT` or
    /// `TimesNewRomanPS-ItalicMT`, and `,Bold` style suffixes.
    pub fn from_postscript_name(name: &str) -> Option<Self> {
        if let Some(font) = Self::ALL.into_iter().find(|f| f.postscript_name() == name) {
            return Some(font);
        }

        let name = name.replace(',', "-");
        let (family, style) = name.split_once('-').unwrap_or((name.as_str(), ""));
        let style = style.trim_end_matches("MT");

        let bold = style.contains("Bold");
        let italic = style.contains("Italic") || style.contains("Oblique");

        let family = family.trim_end_matches("MT").trim_end_matches("PS");
        let font = match family {
            "Courier" | "CourierNew" | "CourierNewPS" => match (bold, italic) {
                (false, false) => Self::Courier,
                (true, false) => Self::CourierBold,
                (false, true) => Self::CourierOblique,
                (true, true) => Self::CourierBoldOblique,
            },
            "Helvetica" | "Arial" => match (bold, italic) {
                (false, false) => Self::Helvetica,
                (true, false) => Self::HelveticaBold,
                (false, true) => Self::HelveticaOblique,
                (true, true) => Self::HelveticaBoldOblique,
            },
            "Times" | "TimesNewRoman" | "TimesRoman" => match (bold, italic) {
                (false, false) => Self::TimesRoman,
                (true, false) => Self::TimesBold,
                (false, true) => Self::TimesItalic,
                (true, true) => Self::TimesBoldItalic,
            },
            "Symbol" | "SymbolMT" => Self::Symbol,
            "ZapfDingbats" | "ZapfDingbatsITC" | "Dingbats" => Self::ZapfDingbats,
            _ => return None,
        };

        Some(font)
    }
}

impl Display for StandardFont {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.postscript_name())
    }
}
