//! Glyph names for PostScript output.
//!
//! [`AGL`] is the part of the Adobe Glyph List for New Fonts that covers the
//! standard Latin, Greek and punctuation repertoire. [`SYMBOL`] is the
//! built-in encoding of the Adobe Symbol font, used to interpret the codes of
//! symbolic fonts.

use phf::phf_map;

/// Maps Unicode code points to their Adobe Glyph List name.
pub(crate) static AGL: phf::Map<u32, &'static str> = phf_map! {
    0x0020u32 => "space",
    0x0021u32 => "exclam",
    0x0022u32 => "quotedbl",
    0x0023u32 => "numbersign",
    0x0024u32 => "dollar",
    0x0025u32 => "percent",
    0x0026u32 => "ampersand",
    0x0027u32 => "quotesingle",
    0x0028u32 => "parenleft",
    0x0029u32 => "parenright",
    0x002Au32 => "asterisk",
    0x002Bu32 => "plus",
    0x002Cu32 => "comma",
    0x002Du32 => "hyphen",
    0x002Eu32 => "period",
    0x002Fu32 => "slash",
    0x0030u32 => "zero",
    0x0031u32 => "one",
    0x0032u32 => "two",
    0x0033u32 => "three",
    0x0034u32 => "four",
    0x0035u32 => "five",
    0x0036u32 => "six",
    0x0037u32 => "seven",
    0x0038u32 => "eight",
    0x0039u32 => "nine",
    0x003Au32 => "colon",
    0x003Bu32 => "semicolon",
    0x003Cu32 => "less",
    0x003Du32 => "equal",
    0x003Eu32 => "greater",
    0x003Fu32 => "question",
    0x0040u32 => "at",
    0x0041u32 => "A",
    0x0042u32 => "B",
    0x0043u32 => "C",
    0x0044u32 => "D",
    0x0045u32 => "E",
    0x0046u32 => "F",
    0x0047u32 => "G",
    0x0048u32 => "H",
    0x0049u32 => "I",
    0x004Au32 => "J",
    0x004Bu32 => "K",
    0x004Cu32 => "L",
    0x004Du32 => "M",
    0x004Eu32 => "N",
    0x004Fu32 => "O",
    0x0050u32 => "P",
    0x0051u32 => "Q",
    0x0052u32 => "R",
    0x0053u32 => "S",
    0x0054u32 => "T",
    0x0055u32 => "U",
    0x0056u32 => "V",
    0x0057u32 => "W",
    0x0058u32 => "X",
    0x0059u32 => "Y",
    0x005Au32 => "Z",
    0x005Bu32 => "bracketleft",
    0x005Cu32 => "backslash",
    0x005Du32 => "bracketright",
    0x005Eu32 => "asciicircum",
    0x005Fu32 => "underscore",
    0x0060u32 => "grave",
    0x0061u32 => "a",
    0x0062u32 => "b",
    0x0063u32 => "c",
    0x0064u32 => "d",
    0x0065u32 => "e",
    0x0066u32 => "f",
    0x0067u32 => "g",
    0x0068u32 => "h",
    0x0069u32 => "i",
    0x006Au32 => "j",
    0x006Bu32 => "k",
    0x006Cu32 => "l",
    0x006Du32 => "m",
    0x006Eu32 => "n",
    0x006Fu32 => "o",
    0x0070u32 => "p",
    0x0071u32 => "q",
    0x0072u32 => "r",
    0x0073u32 => "s",
    0x0074u32 => "t",
    0x0075u32 => "u",
    0x0076u32 => "v",
    0x0077u32 => "w",
    0x0078u32 => "x",
    0x0079u32 => "y",
    0x007Au32 => "z",
    0x007Bu32 => "braceleft",
    0x007Cu32 => "bar",
    0x007Du32 => "braceright",
    0x007Eu32 => "asciitilde",
    0x00A1u32 => "exclamdown",
    0x00A2u32 => "cent",
    0x00A3u32 => "sterling",
    0x00A4u32 => "currency",
    0x00A5u32 => "yen",
    0x00A6u32 => "brokenbar",
    0x00A7u32 => "section",
    0x00A8u32 => "dieresis",
    0x00A9u32 => "copyright",
    0x00AAu32 => "ordfeminine",
    0x00ABu32 => "guillemotleft",
    0x00ACu32 => "logicalnot",
    0x00AEu32 => "registered",
    0x00AFu32 => "macron",
    0x00B0u32 => "degree",
    0x00B1u32 => "plusminus",
    0x00B2u32 => "twosuperior",
    0x00B3u32 => "threesuperior",
    0x00B4u32 => "acute",
    0x00B5u32 => "mu",
    0x00B6u32 => "paragraph",
    0x00B7u32 => "periodcentered",
    0x00B8u32 => "cedilla",
    0x00B9u32 => "onesuperior",
    0x00BAu32 => "ordmasculine",
    0x00BBu32 => "guillemotright",
    0x00BCu32 => "onequarter",
    0x00BDu32 => "onehalf",
    0x00BEu32 => "threequarters",
    0x00BFu32 => "questiondown",
    0x00C0u32 => "Agrave",
    0x00C1u32 => "Aacute",
    0x00C2u32 => "Acircumflex",
    0x00C3u32 => "Atilde",
    0x00C4u32 => "Adieresis",
    0x00C5u32 => "Aring",
    0x00C6u32 => "AE",
    0x00C7u32 => "Ccedilla",
    0x00C8u32 => "Egrave",
    0x00C9u32 => "Eacute",
    0x00CAu32 => "Ecircumflex",
    0x00CBu32 => "Edieresis",
    0x00CCu32 => "Igrave",
    0x00CDu32 => "Iacute",
    0x00CEu32 => "Icircumflex",
    0x00CFu32 => "Idieresis",
    0x00D0u32 => "Eth",
    0x00D1u32 => "Ntilde",
    0x00D2u32 => "Ograve",
    0x00D3u32 => "Oacute",
    0x00D4u32 => "Ocircumflex",
    0x00D5u32 => "Otilde",
    0x00D6u32 => "Odieresis",
    0x00D7u32 => "multiply",
    0x00D8u32 => "Oslash",
    0x00D9u32 => "Ugrave",
    0x00DAu32 => "Uacute",
    0x00DBu32 => "Ucircumflex",
    0x00DCu32 => "Udieresis",
    0x00DDu32 => "Yacute",
    0x00DEu32 => "Thorn",
    0x00DFu32 => "germandbls",
    0x00E0u32 => "agrave",
    0x00E1u32 => "aacute",
    0x00E2u32 => "acircumflex",
    0x00E3u32 => "atilde",
    0x00E4u32 => "adieresis",
    0x00E5u32 => "aring",
    0x00E6u32 => "ae",
    0x00E7u32 => "ccedilla",
    0x00E8u32 => "egrave",
    0x00E9u32 => "eacute",
    0x00EAu32 => "ecircumflex",
    0x00EBu32 => "edieresis",
    0x00ECu32 => "igrave",
    0x00EDu32 => "iacute",
    0x00EEu32 => "icircumflex",
    0x00EFu32 => "idieresis",
    0x00F0u32 => "eth",
    0x00F1u32 => "ntilde",
    0x00F2u32 => "ograve",
    0x00F3u32 => "oacute",
    0x00F4u32 => "ocircumflex",
    0x00F5u32 => "otilde",
    0x00F6u32 => "odieresis",
    0x00F7u32 => "divide",
    0x00F8u32 => "oslash",
    0x00F9u32 => "ugrave",
    0x00FAu32 => "uacute",
    0x00FBu32 => "ucircumflex",
    0x00FCu32 => "udieresis",
    0x00FDu32 => "yacute",
    0x00FEu32 => "thorn",
    0x00FFu32 => "ydieresis",
    0x0131u32 => "dotlessi",
    0x0141u32 => "Lslash",
    0x0142u32 => "lslash",
    0x0152u32 => "OE",
    0x0153u32 => "oe",
    0x0160u32 => "Scaron",
    0x0161u32 => "scaron",
    0x0178u32 => "Ydieresis",
    0x017Du32 => "Zcaron",
    0x017Eu32 => "zcaron",
    0x0192u32 => "florin",
    0x02C6u32 => "circumflex",
    0x02C7u32 => "caron",
    0x02D8u32 => "breve",
    0x02D9u32 => "dotaccent",
    0x02DAu32 => "ring",
    0x02DBu32 => "ogonek",
    0x02DCu32 => "tilde",
    0x02DDu32 => "hungarumlaut",
    0x0391u32 => "Alpha",
    0x0392u32 => "Beta",
    0x0393u32 => "Gamma",
    0x0395u32 => "Epsilon",
    0x0396u32 => "Zeta",
    0x0397u32 => "Eta",
    0x0398u32 => "Theta",
    0x0399u32 => "Iota",
    0x039Au32 => "Kappa",
    0x039Bu32 => "Lambda",
    0x039Cu32 => "Mu",
    0x039Du32 => "Nu",
    0x039Eu32 => "Xi",
    0x039Fu32 => "Omicron",
    0x03A0u32 => "Pi",
    0x03A1u32 => "Rho",
    0x03A3u32 => "Sigma",
    0x03A4u32 => "Tau",
    0x03A5u32 => "Upsilon",
    0x03A6u32 => "Phi",
    0x03A7u32 => "Chi",
    0x03A8u32 => "Psi",
    0x03B1u32 => "alpha",
    0x03B2u32 => "beta",
    0x03B3u32 => "gamma",
    0x03B4u32 => "delta",
    0x03B5u32 => "epsilon",
    0x03B6u32 => "zeta",
    0x03B7u32 => "eta",
    0x03B8u32 => "theta",
    0x03B9u32 => "iota",
    0x03BAu32 => "kappa",
    0x03BBu32 => "lambda",
    0x03BDu32 => "nu",
    0x03BEu32 => "xi",
    0x03BFu32 => "omicron",
    0x03C0u32 => "pi",
    0x03C1u32 => "rho",
    0x03C2u32 => "sigma1",
    0x03C3u32 => "sigma",
    0x03C4u32 => "tau",
    0x03C5u32 => "upsilon",
    0x03C6u32 => "phi",
    0x03C7u32 => "chi",
    0x03C8u32 => "psi",
    0x03C9u32 => "omega",
    0x2013u32 => "endash",
    0x2014u32 => "emdash",
    0x2018u32 => "quoteleft",
    0x2019u32 => "quoteright",
    0x201Au32 => "quotesinglbase",
    0x201Cu32 => "quotedblleft",
    0x201Du32 => "quotedblright",
    0x201Eu32 => "quotedblbase",
    0x2020u32 => "dagger",
    0x2021u32 => "daggerdbl",
    0x2022u32 => "bullet",
    0x2026u32 => "ellipsis",
    0x2030u32 => "perthousand",
    0x2039u32 => "guilsinglleft",
    0x203Au32 => "guilsinglright",
    0x2044u32 => "fraction",
    0x20ACu32 => "Euro",
    0x2122u32 => "trademark",
    0x2126u32 => "Omega",
    0x2206u32 => "Delta",
    0x2212u32 => "minus",
    0xFB01u32 => "fi",
    0xFB02u32 => "fl",
};

/// Maps codes of the Adobe Symbol encoding to glyph names.
pub(crate) static SYMBOL: phf::Map<u32, &'static str> = phf_map! {
    0x0020u32 => "space",
    0x0021u32 => "exclam",
    0x0022u32 => "universal",
    0x0023u32 => "numbersign",
    0x0024u32 => "existential",
    0x0025u32 => "percent",
    0x0026u32 => "ampersand",
    0x0027u32 => "suchthat",
    0x0028u32 => "parenleft",
    0x0029u32 => "parenright",
    0x002Au32 => "asteriskmath",
    0x002Bu32 => "plus",
    0x002Cu32 => "comma",
    0x002Du32 => "minus",
    0x002Eu32 => "period",
    0x002Fu32 => "slash",
    0x0030u32 => "zero",
    0x0031u32 => "one",
    0x0032u32 => "two",
    0x0033u32 => "three",
    0x0034u32 => "four",
    0x0035u32 => "five",
    0x0036u32 => "six",
    0x0037u32 => "seven",
    0x0038u32 => "eight",
    0x0039u32 => "nine",
    0x003Au32 => "colon",
    0x003Bu32 => "semicolon",
    0x003Cu32 => "less",
    0x003Du32 => "equal",
    0x003Eu32 => "greater",
    0x003Fu32 => "question",
    0x0040u32 => "congruent",
    0x0041u32 => "Alpha",
    0x0042u32 => "Beta",
    0x0043u32 => "Chi",
    0x0044u32 => "Delta",
    0x0045u32 => "Epsilon",
    0x0046u32 => "Phi",
    0x0047u32 => "Gamma",
    0x0048u32 => "Eta",
    0x0049u32 => "Iota",
    0x004Au32 => "theta1",
    0x004Bu32 => "Kappa",
    0x004Cu32 => "Lambda",
    0x004Du32 => "Mu",
    0x004Eu32 => "Nu",
    0x004Fu32 => "Omicron",
    0x0050u32 => "Pi",
    0x0051u32 => "Theta",
    0x0052u32 => "Rho",
    0x0053u32 => "Sigma",
    0x0054u32 => "Tau",
    0x0055u32 => "Upsilon",
    0x0056u32 => "sigma1",
    0x0057u32 => "Omega",
    0x0058u32 => "Xi",
    0x0059u32 => "Psi",
    0x005Au32 => "Zeta",
    0x005Bu32 => "bracketleft",
    0x005Cu32 => "therefore",
    0x005Du32 => "bracketright",
    0x005Eu32 => "perpendicular",
    0x005Fu32 => "underscore",
    0x0060u32 => "radicalex",
    0x0061u32 => "alpha",
    0x0062u32 => "beta",
    0x0063u32 => "chi",
    0x0064u32 => "delta",
    0x0065u32 => "epsilon",
    0x0066u32 => "phi",
    0x0067u32 => "gamma",
    0x0068u32 => "eta",
    0x0069u32 => "iota",
    0x006Au32 => "phi1",
    0x006Bu32 => "kappa",
    0x006Cu32 => "lambda",
    0x006Du32 => "mu",
    0x006Eu32 => "nu",
    0x006Fu32 => "omicron",
    0x0070u32 => "pi",
    0x0071u32 => "theta",
    0x0072u32 => "rho",
    0x0073u32 => "sigma",
    0x0074u32 => "tau",
    0x0075u32 => "upsilon",
    0x0076u32 => "omega1",
    0x0077u32 => "omega",
    0x0078u32 => "xi",
    0x0079u32 => "psi",
    0x007Au32 => "zeta",
    0x007Bu32 => "braceleft",
    0x007Cu32 => "bar",
    0x007Du32 => "braceright",
    0x007Eu32 => "similar",
    0x00A0u32 => "Euro",
    0x00A1u32 => "Upsilon1",
    0x00A2u32 => "minute",
    0x00A3u32 => "lessequal",
    0x00A4u32 => "fraction",
    0x00A5u32 => "infinity",
    0x00A6u32 => "florin",
    0x00A7u32 => "club",
    0x00A8u32 => "diamond",
    0x00A9u32 => "heart",
    0x00AAu32 => "spade",
    0x00ABu32 => "arrowboth",
    0x00ACu32 => "arrowleft",
    0x00ADu32 => "arrowup",
    0x00AEu32 => "arrowright",
    0x00AFu32 => "arrowdown",
    0x00B0u32 => "degree",
    0x00B1u32 => "plusminus",
    0x00B2u32 => "second",
    0x00B3u32 => "greaterequal",
    0x00B4u32 => "multiply",
    0x00B5u32 => "proportional",
    0x00B6u32 => "partialdiff",
    0x00B7u32 => "bullet",
    0x00B8u32 => "divide",
    0x00B9u32 => "notequal",
    0x00BAu32 => "equivalence",
    0x00BBu32 => "approxequal",
    0x00BCu32 => "ellipsis",
    0x00BDu32 => "arrowvertex",
    0x00BEu32 => "arrowhorizex",
    0x00BFu32 => "carriagereturn",
    0x00C0u32 => "aleph",
    0x00C1u32 => "Ifraktur",
    0x00C2u32 => "Rfraktur",
    0x00C3u32 => "weierstrass",
    0x00C4u32 => "circlemultiply",
    0x00C5u32 => "circleplus",
    0x00C6u32 => "emptyset",
    0x00C7u32 => "intersection",
    0x00C8u32 => "union",
    0x00C9u32 => "propersuperset",
    0x00CAu32 => "reflexsuperset",
    0x00CBu32 => "notsubset",
    0x00CCu32 => "propersubset",
    0x00CDu32 => "reflexsubset",
    0x00CEu32 => "element",
    0x00CFu32 => "notelement",
    0x00D0u32 => "angle",
    0x00D1u32 => "gradient",
    0x00D2u32 => "registerserif",
    0x00D3u32 => "copyrightserif",
    0x00D4u32 => "trademarkserif",
    0x00D5u32 => "product",
    0x00D6u32 => "radical",
    0x00D7u32 => "dotmath",
    0x00D8u32 => "logicalnot",
    0x00D9u32 => "logicaland",
    0x00DAu32 => "logicalor",
    0x00DBu32 => "arrowdblboth",
    0x00DCu32 => "arrowdblleft",
    0x00DDu32 => "arrowdblup",
    0x00DEu32 => "arrowdblright",
    0x00DFu32 => "arrowdbldown",
    0x00E0u32 => "lozenge",
    0x00E1u32 => "angleleft",
    0x00E2u32 => "registersans",
    0x00E3u32 => "copyrightsans",
    0x00E4u32 => "trademarksans",
    0x00E5u32 => "summation",
    0x00E6u32 => "parenlefttp",
    0x00E7u32 => "parenleftex",
    0x00E8u32 => "parenleftbt",
    0x00E9u32 => "bracketlefttp",
    0x00EAu32 => "bracketleftex",
    0x00EBu32 => "bracketleftbt",
    0x00ECu32 => "bracelefttp",
    0x00EDu32 => "braceleftmid",
    0x00EEu32 => "braceleftbt",
    0x00EFu32 => "braceex",
    0x00F1u32 => "angleright",
    0x00F2u32 => "integral",
    0x00F3u32 => "integraltp",
    0x00F4u32 => "integralex",
    0x00F5u32 => "integralbt",
    0x00F6u32 => "parenrighttp",
    0x00F7u32 => "parenrightex",
    0x00F8u32 => "parenrightbt",
    0x00F9u32 => "bracketrighttp",
    0x00FAu32 => "bracketrightex",
    0x00FBu32 => "bracketrightbt",
    0x00FCu32 => "bracerighttp",
    0x00FDu32 => "bracerightmid",
    0x00FEu32 => "bracerightbt",
};
