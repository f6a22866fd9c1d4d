//! The ToUnicode CMap of a subset.
//!
//! New glyph indices serve as two-byte character codes in the document, so
//! the CMap maps each index to the text it represents. Indices with
//! consecutive code points are coalesced into range entries.

use std::fmt::Write;

/// Runs of at least this many consecutive code points are written as a
/// single range.
const MIN_RUN: usize = 10;

/// The maximum number of entries in one `beginbfrange` block.
const MAX_ENTRIES: usize = 100;

const HEADER: &str = "\
/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
";

const FOOTER: &str = "\
endcmap
CMapName currentdict /CMap defineresource pop
end
end
";

/// Write the CMap for a reverse map, which has one entry per new index.
pub(crate) fn to_unicode_cmap(reverse_map: &[Option<char>]) -> Vec<u8> {
    // `.notdef` maps to U+0000.
    let mut entries = vec![String::from("<0000> <0000> <0000>")];

    let n = reverse_map.len();
    let mut g = 1;
    while g < n {
        let Some(mut prev) = reverse_map[g] else {
            g += 1;
            continue;
        };

        let start = g;
        let mut start_linear: Option<usize> = None;
        g += 1;

        while g < n {
            let Some(c) = reverse_map[g] else { break };

            // The high byte of the code may not change within one range.
            if g >> 8 != start >> 8 {
                break;
            }

            if u32::from(c) == u32::from(prev) + 1 {
                start_linear.get_or_insert(g - 1);
            } else {
                if start_linear.is_some_and(|s| g - s >= MIN_RUN) {
                    break;
                }
                start_linear = None;
            }

            prev = c;
            g += 1;
        }

        if start_linear.is_some_and(|s| g - s < MIN_RUN) {
            start_linear = None;
        }

        let end_nonlinear = start_linear.unwrap_or(g);
        if end_nonlinear > start {
            let values: Vec<String> = reverse_map[start..end_nonlinear]
                .iter()
                .flatten()
                .map(|&c| format!("<{}>", utf16_hex(c)))
                .collect();

            let mut entry = format!("<{start:04X}> <{:04X}> ", end_nonlinear - 1);
            match values.as_slice() {
                [single] => entry.push_str(single),
                _ => {
                    write!(entry, "[{}]", values.join(" ")).ok();
                }
            }
            entries.push(entry);
        }

        if let Some(mut s) = start_linear {
            while s < g {
                let Some(first) = reverse_map[s] else { break };
                let first_code = u32::from(first);

                // The value's last byte is incremented over the range, so it
                // may not overflow either.
                let mut len = g - s;
                let last_code = first_code + len as u32 - 1;
                if last_code >> 8 != first_code >> 8 {
                    len = 256 - (first_code & 0xFF) as usize;
                }

                entries.push(format!("<{s:04X}> <{:04X}> <{}>", s + len - 1, utf16_hex(first)));
                s += len;
            }
        }
    }

    let mut out = String::from(HEADER);
    for block in entries.chunks(MAX_ENTRIES) {
        writeln!(out, "{} beginbfrange", block.len()).ok();
        for entry in block {
            out.push_str(entry);
            out.push('\n');
        }
        out.push_str("endbfrange\n");
    }
    out.push_str(FOOTER);

    out.into_bytes()
}

/// The UTF-16BE encoding of a character in hex.
fn utf16_hex(c: char) -> String {
    let mut buf = [0; 2];
    c.encode_utf16(&mut buf).iter().map(|unit| format!("{unit:04X}")).collect()
}
