use crate::stream::{Readable, Reader, Writeable, Writer};
use crate::truetype::Context;
use crate::{Error, Result, Tag};

struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    length: u16,
    string_offset: u16,
}

impl NameRecord {
    fn is_unicode(&self) -> bool {
        self.platform_id == 0
            || (self.platform_id == 3 && [0, 1, 10].contains(&self.encoding_id))
    }
}

impl Readable<'_> for NameRecord {
    const SIZE: usize = u16::SIZE * 6;

    fn read(r: &mut Reader<'_>) -> Option<Self> {
        let platform_id = r.read::<u16>()?;
        let encoding_id = r.read::<u16>()?;
        let language_id = r.read::<u16>()?;
        let name_id = r.read::<u16>()?;
        let length = r.read::<u16>()?;
        let string_offset = r.read::<u16>()?;

        Some(Self {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            length,
            string_offset,
        })
    }
}

impl Writeable for NameRecord {
    fn write(&self, w: &mut Writer) {
        w.write::<u16>(self.platform_id);
        w.write::<u16>(self.encoding_id);
        w.write::<u16>(self.language_id);
        w.write::<u16>(self.name_id);
        w.write::<u16>(self.length);
        w.write::<u16>(self.string_offset);
    }
}

/// Keep only the Unicode naming records a viewer might show.
pub(crate) fn subset(ctx: &mut Context) -> Result<()> {
    let Some(name) = ctx.engine.table(Tag::NAME) else {
        return Ok(());
    };

    let mut r = Reader::new(name);

    // Version 1 tables with language tags are rare, we add them as is.
    let version = r.read::<u16>().ok_or(Error::MalformedFont)?;
    if version != 0 {
        ctx.push(Tag::NAME, name);
        return Ok(());
    }

    let count = r.read::<u16>().ok_or(Error::MalformedFont)?;
    let storage_offset = r.read::<u16>().ok_or(Error::MalformedFont)?;
    let name_records = r
        .read_vector::<NameRecord>(usize::from(count))
        .ok_or(Error::MalformedFont)?;

    let storage = name.get(usize::from(storage_offset)..).ok_or(Error::MalformedFont)?;

    let mut pruned = prune_name_records(name_records);

    if pruned.is_empty() && count != 0 {
        // Only contains non-Unicode records, so we don't subset.
        ctx.push(Tag::NAME, name);
        return Ok(());
    }

    let mut sub_name = Writer::new();
    let mut new_storage = Writer::new();
    let mut cur_storage_offset = 0u16;

    let count = pruned.len() as u16;

    // version
    sub_name.write::<u16>(0);
    // count
    sub_name.write::<u16>(count);
    // storage offset
    sub_name.write::<u16>(2 * 3 + count * NameRecord::SIZE as u16);

    for record in &mut pruned {
        let start = usize::from(record.string_offset);
        let end = start + usize::from(record.length);
        new_storage.extend(storage.get(start..end).ok_or(Error::MalformedFont)?);
        record.string_offset = cur_storage_offset;
        record.write(&mut sub_name);
        let Some(next) = cur_storage_offset.checked_add(record.length) else {
            log::warn!("kept name records exceed 64 KiB, keeping the name table as is");
            ctx.push(Tag::NAME, name);
            return Ok(());
        };
        cur_storage_offset = next;
    }

    sub_name.extend(&new_storage.finish());

    ctx.push(Tag::NAME, sub_name.finish());
    Ok(())
}

/// The PostScript name (name ID 6) from a `name` table.
///
/// Windows Unicode records are decoded as UTF-16BE, Macintosh Roman records
/// as Latin-1, which agrees with Mac Roman for the printable ASCII characters
/// PostScript names are made of.
pub(crate) fn postscript_name(name: &[u8]) -> Option<String> {
    let mut r = Reader::new(name);
    r.read::<u16>()?; // version
    let count = r.read::<u16>()?;
    let storage_offset = r.read::<u16>()?;
    let records = r.read_vector::<NameRecord>(usize::from(count))?;
    let storage = name.get(usize::from(storage_offset)..)?;

    let string = |record: &NameRecord| {
        let start = usize::from(record.string_offset);
        storage.get(start..start + usize::from(record.length))
    };

    let unicode = records
        .iter()
        .filter(|record| record.name_id == 6 && record.is_unicode())
        .find_map(|record| {
            let data = string(record)?;
            let units: Vec<u16> = data
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect();
            String::from_utf16(&units).ok()
        });

    let name = unicode.or_else(|| {
        records
            .iter()
            .filter(|record| record.name_id == 6 && record.platform_id == 1)
            .find_map(|record| Some(string(record)?.iter().map(|&b| char::from(b)).collect()))
    })?;

    (!name.is_empty()).then_some(name)
}

fn prune_name_records(name_records: Vec<NameRecord>) -> Vec<NameRecord> {
    name_records
        .into_iter()
        .filter(|record| record.is_unicode() && record.name_id <= 6)
        .collect()
}
