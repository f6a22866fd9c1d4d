use crate::stream::{Reader, Writeable, Writer};

/// A Format 4 subtable.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Subtable4<'a> {
    language: u16,
    seg_count: u16,
    end_codes: Vec<u16>,
    start_codes: Vec<u16>,
    id_deltas: Vec<i16>,
    id_range_offsets: Vec<u16>,
    glyph_id_array: &'a [u8],
}

impl<'a> Subtable4<'a> {
    pub fn parse(data: &'a [u8]) -> Option<Self> {
        let mut r = Reader::new(data);
        r.skip_bytes(4)?; // format + length
        let language = r.read::<u16>()?;
        let seg_count_x2 = r.read::<u16>()?;

        if seg_count_x2 < 2 {
            return None;
        }

        let seg_count = seg_count_x2 / 2;
        r.skip_bytes(6)?; // search range + entry selector + range shift
        let end_codes = r.read_vector::<u16>(usize::from(seg_count))?;
        r.skip::<u16>()?; // reserved pad
        let start_codes = r.read_vector::<u16>(usize::from(seg_count))?;
        let id_deltas = r.read_vector::<i16>(usize::from(seg_count))?;

        let glyph_id_array = r.tail()?;
        let id_range_offsets = r.read_vector::<u16>(usize::from(seg_count))?;

        Some(Subtable4 {
            language,
            seg_count,
            end_codes,
            start_codes,
            id_deltas,
            id_range_offsets,
            glyph_id_array,
        })
    }

    /// Returns a glyph index for a code point.
    pub fn glyph_index(&self, code_point: u32) -> Option<u16> {
        // This subtable supports code points only in a u16 range.
        let code_point = u16::try_from(code_point).ok()?;

        // A custom binary search.
        let mut start = 0;
        let mut end = self.start_codes.len();
        while end > start {
            let index = (start + end) / 2;
            let end_value = *self.end_codes.get(index)?;
            if end_value >= code_point {
                let start_value = *self.start_codes.get(index)?;
                if start_value > code_point {
                    end = index;
                } else {
                    let id_range_offset = *self.id_range_offsets.get(index)?;
                    let id_delta = *self.id_deltas.get(index)?;
                    if id_range_offset == 0 {
                        return Some(code_point.wrapping_add(id_delta as u16));
                    } else if id_range_offset == 0xFFFF {
                        // Some malformed fonts have 0xFFFF as the last offset,
                        // which is invalid and should be ignored.
                        return None;
                    }

                    let delta = (u32::from(code_point) - u32::from(start_value)) * 2;
                    let delta = u16::try_from(delta).ok()?;

                    let id_range_offset_pos = (index * 2) as u16;
                    let pos = id_range_offset_pos.wrapping_add(delta);
                    let pos = pos.wrapping_add(id_range_offset);

                    let mut r = Reader::new_at(self.glyph_id_array, usize::from(pos));
                    let glyph_array_value = r.read::<u16>()?;

                    // 0 indicates missing glyph.
                    if glyph_array_value == 0 {
                        return None;
                    }

                    return Some(glyph_array_value.wrapping_add(id_delta as u16));
                }
            } else {
                start = index + 1;
            }
        }

        None
    }

    /// Calls `f` for each codepoint defined in this table.
    pub fn codepoints(&self, mut f: impl FnMut(u32)) {
        for (start, end) in self.start_codes.iter().zip(&self.end_codes) {
            // OxFFFF value is special and indicates codes end.
            if *start == *end && *start == 0xFFFF {
                break;
            }

            for code_point in *start..=*end {
                f(u32::from(code_point));
            }
        }
    }
}

impl Writeable for Subtable4<'_> {
    fn write(&self, w: &mut Writer) {
        w.write::<u16>(4); // format

        // (format + length + language + seg_count_x2 + search_range +
        // entry_selector + range_shift + reserved_pad) + seg_count *
        // (end_code + start_code + id_delta + id_range_offsets) + glyph ids
        let length = 2 * 8 + 2 * self.seg_count * 4 + self.glyph_id_array.len() as u16;
        w.write::<u16>(length);
        w.write::<u16>(self.language);

        let seg_count_x2 = 2 * self.seg_count;
        let floor_log_2 = (u16::BITS - self.seg_count.leading_zeros()) - 1;
        let search_range = 2 * 2u16.pow(floor_log_2);
        let entry_selector = floor_log_2 as u16;
        let range_shift = seg_count_x2 - search_range;

        w.write::<u16>(seg_count_x2);
        w.write::<u16>(search_range);
        w.write::<u16>(entry_selector);
        w.write::<u16>(range_shift);

        w.write_vector(&self.end_codes);
        w.write::<u16>(0); // reserved pad
        w.write_vector(&self.start_codes);
        w.write_vector(&self.id_deltas);
        w.write_vector(&self.id_range_offsets);
        w.extend(self.glyph_id_array);
    }
}

/// The largest number of segments whose table length still fits into the
/// 16-bit length field.
const MAX_SEGMENTS: usize = (u16::MAX as usize - 2 * 8) / 8;

/// Build a format 4 subtable from sorted `(code point, new glyph)` pairs.
///
/// Returns `None` if the mappings are too fragmented to be expressed within
/// the size limits of the format.
pub(crate) fn build_subtable4(mappings: &[(u16, u16)]) -> Option<Vec<u8>> {
    debug_assert!(mappings.windows(2).all(|w| w[0].0 < w[1].0));

    let delta = |pair: (u16, u16)| (i32::from(pair.1) - i32::from(pair.0)) as i16;

    let mut segments = vec![];
    let mut map_iter = mappings.iter().copied().filter(|&(c, _)| c != 0xFFFF);

    if let Some(first) = map_iter.next() {
        let mut cur_start = first.0;
        let mut cur_delta = delta(first);
        let mut cur_range = 0;

        for next in map_iter {
            if u32::from(next.0) == u32::from(cur_start) + cur_range + 1
                && delta(next) == cur_delta
            {
                cur_range += 1;
                continue;
            }

            segments.push((cur_start, cur_start + cur_range as u16, cur_delta));
            cur_start = next.0;
            cur_delta = delta(next);
            cur_range = 0;
        }

        // Don't forget the last range!
        segments.push((cur_start, cur_start + cur_range as u16, cur_delta));
    }

    // "For the search to terminate, the final start code and endCode values must
    // be 0xFFFF. This segment need not contain any valid mappings. (It can just map the
    // single character code 0xFFFF to missingGlyph). However, the segment must be present."
    segments.push((0xFFFF, 0xFFFF, 1));

    if segments.len() > MAX_SEGMENTS {
        return None;
    }

    let seg_count = segments.len() as u16;
    let subtable = Subtable4 {
        language: 0,
        seg_count,
        end_codes: segments.iter().map(|e| e.1).collect(),
        start_codes: segments.iter().map(|e| e.0).collect(),
        id_deltas: segments.iter().map(|e| e.2).collect(),
        id_range_offsets: vec![0; usize::from(seg_count)],
        glyph_id_array: &[],
    };

    let mut w = Writer::new();
    w.write::<Subtable4>(subtable);
    Some(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(data: &[u8], c: u32) -> Option<u16> {
        Subtable4::parse(data).unwrap().glyph_index(c)
    }

    #[test]
    fn consecutive_mappings_share_a_segment() {
        let data = build_subtable4(&[(65, 1), (66, 2), (67, 3), (97, 4)]).unwrap();
        let subtable = Subtable4::parse(&data).unwrap();
        assert_eq!(subtable.seg_count, 3);
        assert_eq!(subtable.start_codes, vec![65, 97, 0xFFFF]);
        assert_eq!(subtable.end_codes, vec![67, 97, 0xFFFF]);

        assert_eq!(lookup(&data, 66), Some(2));
        assert_eq!(lookup(&data, 97), Some(4));
        assert_eq!(lookup(&data, 68), None);
        assert_eq!(lookup(&data, 0x10000), None);
    }

    #[test]
    fn deltas_wrap_around() {
        let data = build_subtable4(&[(0xF041, 3)]).unwrap();
        assert_eq!(lookup(&data, 0xF041), Some(3));
    }

    #[test]
    fn empty_table_has_sentinel_segment() {
        let data = build_subtable4(&[]).unwrap();
        let subtable = Subtable4::parse(&data).unwrap();
        assert_eq!(subtable.seg_count, 1);
        assert_eq!(data.len(), 24);

        let mut count = 0;
        subtable.codepoints(|_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn too_fragmented() {
        let mappings: Vec<_> = (0..10000u16).map(|i| (i * 2, 1)).collect();
        assert_eq!(build_subtable4(&mappings), None);
    }
}
