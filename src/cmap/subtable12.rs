use crate::stream::{Readable, Reader, Writeable, Writer};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct SequentialMapGroupRecord {
    start_char_code: u32,
    end_char_code: u32,
    start_glyph_id: u32,
}

impl Readable<'_> for SequentialMapGroupRecord {
    const SIZE: usize = 12;

    fn read(r: &mut Reader<'_>) -> Option<Self> {
        let start_char_code = r.read::<u32>()?;
        let end_char_code = r.read::<u32>()?;
        let start_glyph_id = r.read::<u32>()?;

        Some(Self { start_char_code, end_char_code, start_glyph_id })
    }
}

impl Writeable for SequentialMapGroupRecord {
    fn write(&self, w: &mut Writer) {
        w.write::<u32>(self.start_char_code);
        w.write::<u32>(self.end_char_code);
        w.write::<u32>(self.start_glyph_id);
    }
}

/// A format 12 subtable.
pub(crate) struct Subtable12 {
    language: u32,
    groups: Vec<SequentialMapGroupRecord>,
}

/// Reading more groups than there are code points can only be garbage.
const MAX_GROUPS: u32 = 0x110000;

impl Subtable12 {
    pub fn parse(data: &[u8]) -> Option<Self> {
        let mut r = Reader::new(data);
        r.read::<u16>()?; // format
        r.read::<u16>()?; // reserved
        r.read::<u32>()?; // length
        let language = r.read::<u32>()?;
        let num_groups = r.read::<u32>()?.min(MAX_GROUPS);

        let groups = r.read_vector::<SequentialMapGroupRecord>(num_groups as usize)?;
        Some(Self { language, groups })
    }

    /// Returns a glyph index for a code point.
    pub fn glyph_index(&self, code_point: u32) -> Option<u16> {
        let index = self
            .groups
            .binary_search_by(|range| {
                use core::cmp::Ordering;

                if range.start_char_code > code_point {
                    Ordering::Greater
                } else if range.end_char_code < code_point {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()?;

        let group = &self.groups[index];

        let id = group
            .start_glyph_id
            .checked_add(code_point)?
            .checked_sub(group.start_char_code)?;
        u16::try_from(id).ok()
    }

    /// Calls `f` for each codepoint defined in this table.
    pub fn codepoints(&self, mut f: impl FnMut(u32)) {
        for group in &self.groups {
            // Groups past the last Unicode scalar value are malformed.
            let end = group.end_char_code.min(char::MAX as u32);
            for code_point in group.start_char_code..=end {
                f(code_point);
            }
        }
    }
}

impl Writeable for Subtable12 {
    fn write(&self, w: &mut Writer) {
        // format + reserved + length + language + num_groups + num_groups * (start_char,
        // end_char, start_glyph_id)
        let length = 2 + 2 + 4 + 4 + 4 + (4 + 4 + 4) * self.groups.len();

        w.write::<u16>(12);
        w.write::<u16>(0);
        w.write::<u32>(length as u32);
        w.write::<u32>(self.language);
        w.write::<u32>(self.groups.len() as u32);
        w.write_vector(&self.groups);
    }
}

/// Build a format 12 subtable from sorted `(code point, new glyph)` pairs.
pub(crate) fn build_subtable12(mappings: &[(u32, u16)]) -> Vec<u8> {
    let mut map_iter = mappings.iter().copied();
    let mut new_groups = vec![];

    if let Some(first) = map_iter.next() {
        let mut cur_start = first.0;
        let mut cur_gid = first.1;
        let mut cur_range = 0;

        for next in map_iter {
            if next.0 == cur_start + cur_range + 1
                && u32::from(next.1) == u32::from(cur_gid) + cur_range + 1
            {
                cur_range += 1;
                continue;
            }

            new_groups.push(SequentialMapGroupRecord {
                start_char_code: cur_start,
                end_char_code: cur_start + cur_range,
                start_glyph_id: u32::from(cur_gid),
            });

            cur_start = next.0;
            cur_gid = next.1;
            cur_range = 0;
        }

        new_groups.push(SequentialMapGroupRecord {
            start_char_code: cur_start,
            end_char_code: cur_start + cur_range,
            start_glyph_id: u32::from(cur_gid),
        });
    }

    let mut w = Writer::new();
    w.write::<Subtable12>(Subtable12 { language: 0, groups: new_groups });
    w.finish()
}
