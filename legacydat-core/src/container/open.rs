use std::path::Path;

use super::header::{DatFooter, DatFooterEntry, DatFooterEntryV2, DatFooterHeader, DatHeader, DatMasterIndex};
use super::types::{Entry, EntryList, TypeTag};
use crate::error::{CoreError, Result};

/// A loaded `.DAT` container. Owns the whole file's bytes and the parsed
/// entry lists; there is no process-wide container state, each open call
/// returns an independent handle.
pub struct Container {
    data: Vec<u8>,
    footer_offset: u32,
    footer_size: u16,
    lists: Vec<EntryList>,
}

impl Container {
    /// Opens a v1 container at `path`.
    pub fn open_v1<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        let header = read_header(&data)?;

        let footer_start = header.footer_offset as usize;
        let footer_bytes = data
            .get(footer_start..)
            .ok_or_else(|| CoreError::Container("footer offset beyond end of file".into()))?;
        let footer = DatFooter::from_bytes(footer_bytes)
            .ok_or_else(|| CoreError::Container("truncated v1 footer".into()))?;

        let mut entries = Vec::with_capacity(footer.entry_count as usize);
        let mut cursor = DatFooter::SIZE;
        for _ in 0..footer.entry_count {
            let rec_bytes = footer_bytes
                .get(cursor..)
                .ok_or_else(|| CoreError::Container("truncated v1 footer entry".into()))?;
            let rec = DatFooterEntry::from_bytes(rec_bytes)
                .ok_or_else(|| CoreError::Container("truncated v1 footer entry".into()))?;
            entries.push(Entry {
                id: rec.id,
                offset: rec.offset,
                size: rec.size,
                flags: [0, 0, 0],
            });
            cursor += DatFooterEntry::SIZE;
        }

        let lists = vec![EntryList {
            type_tag: TypeTag::Bin,
            entries,
        }];

        let container = Self {
            data,
            footer_offset: header.footer_offset,
            footer_size: header.footer_size,
            lists,
        };
        container.validate()?;
        Ok(container)
    }

    /// Opens a v2 container at `path`.
    pub fn open_v2<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        let header = read_header(&data)?;

        let master_index_start = header.footer_offset as usize;
        let master_bytes = data
            .get(master_index_start..)
            .ok_or_else(|| CoreError::Container("footer offset beyond end of file".into()))?;
        let master_index = DatMasterIndex::from_bytes(master_bytes)
            .ok_or_else(|| CoreError::Container("truncated v2 master index".into()))?;

        let mut lists = Vec::with_capacity(master_index.footer_count as usize);
        let mut cursor = DatMasterIndex::SIZE;
        for _ in 0..master_index.footer_count {
            let rec_bytes = master_bytes
                .get(cursor..)
                .ok_or_else(|| CoreError::Container("truncated v2 master index entry".into()))?;
            let footer_header = DatFooterHeader::from_bytes(rec_bytes)
                .ok_or_else(|| CoreError::Container("truncated v2 master index entry".into()))?;
            cursor += DatFooterHeader::SIZE;

            // footer_sub_offset is relative to the master index's own position.
            let footer_start = master_index_start + footer_header.footer_sub_offset as usize;
            let footer_bytes = data
                .get(footer_start..)
                .ok_or_else(|| CoreError::Container("v2 footer offset beyond end of file".into()))?;
            let footer = DatFooter::from_bytes(footer_bytes)
                .ok_or_else(|| CoreError::Container("truncated v2 footer".into()))?;

            let mut entries = Vec::with_capacity(footer.entry_count as usize);
            let mut entry_cursor = DatFooter::SIZE;
            for _ in 0..footer.entry_count {
                let e_bytes = footer_bytes
                    .get(entry_cursor..)
                    .ok_or_else(|| CoreError::Container("truncated v2 footer entry".into()))?;
                let rec = DatFooterEntryV2::from_bytes(e_bytes)
                    .ok_or_else(|| CoreError::Container("truncated v2 footer entry".into()))?;
                entries.push(Entry {
                    id: rec.id,
                    offset: rec.offset,
                    size: rec.size,
                    flags: rec.flags,
                });
                entry_cursor += DatFooterEntryV2::SIZE;
            }

            lists.push(EntryList {
                type_tag: TypeTag::from_magic(&footer_header.magic),
                entries,
            });
        }

        let container = Self {
            data,
            footer_offset: header.footer_offset,
            footer_size: header.footer_size,
            lists,
        };
        container.validate()?;
        Ok(container)
    }

    pub fn footer_offset(&self) -> u32 {
        self.footer_offset
    }

    pub fn footer_size(&self) -> u16 {
        self.footer_size
    }

    pub fn lists(&self) -> &[EntryList] {
        &self.lists
    }

    /// Validates the container invariant: every entry's payload (plus its
    /// one-byte checksum prefix) must fit before the footer region.
    fn validate(&self) -> Result<()> {
        for list in &self.lists {
            for entry in &list.entries {
                let end = (entry.offset as u64) + (entry.size as u64) + 1;
                if end > self.footer_offset as u64 {
                    return Err(CoreError::Container(format!(
                        "entry id={} offset={} size={} overruns footer_offset={}",
                        entry.id, entry.offset, entry.size, self.footer_offset
                    )));
                }
            }
        }
        Ok(())
    }

    /// Releases the container's buffers. Idempotent only insofar as the
    /// caller does not try to use the value afterward (it is consumed).
    pub fn close(self) {
        drop(self);
    }

    /// Loads one entry's payload by list index and entry index within that
    /// list. Returns the payload bytes (checksum byte excluded), the
    /// entry's id, and its flags.
    ///
    /// Reads a checksum byte preceding the payload and logs (does not fail)
    /// if `(checksum + sum(payload)) mod 256 != 0xFF`.
    pub fn load_entry(&self, list_idx: usize, entry_idx: usize) -> Result<(Vec<u8>, u16, [u8; 3])> {
        let list = self
            .lists
            .get(list_idx)
            .ok_or(CoreError::NotFound { type_tag: None, id: None })?;
        let entry = list
            .entries
            .get(entry_idx)
            .ok_or(CoreError::NotFound { type_tag: Some(list.type_tag), id: None })?;
        self.read_entry(entry, list.type_tag)
    }

    /// Loads one entry's payload by type tag and id (v2), or by id alone
    /// (v1, `type_tag` ignored as there is only the `Bin` list).
    pub fn load_entry_by_id(&self, type_tag: Option<TypeTag>, id: u16) -> Result<(Vec<u8>, u16, [u8; 3])> {
        for list in &self.lists {
            if let Some(t) = type_tag {
                if list.type_tag != t {
                    continue;
                }
            }
            if let Some((_, entry)) = list.find_by_id(id) {
                return self.read_entry(entry, list.type_tag);
            }
        }
        Err(CoreError::NotFound { type_tag, id: Some(id) })
    }

    fn read_entry(&self, entry: &Entry, type_tag: TypeTag) -> Result<(Vec<u8>, u16, [u8; 3])> {
        let start = entry.offset as usize;
        let checksum = *self
            .data
            .get(start)
            .ok_or_else(|| CoreError::Container("entry checksum byte out of range".into()))?;
        let payload_start = start + 1;
        let payload_end = payload_start + entry.size as usize;
        let payload = self
            .data
            .get(payload_start..payload_end)
            .ok_or_else(|| CoreError::Container("entry payload out of range".into()))?;

        let sum: u32 = payload.iter().map(|&b| b as u32).sum::<u32>() + checksum as u32;
        if (sum % 256) as u8 != 0xFF {
            tracing::warn!(
                type_tag = ?type_tag,
                id = entry.id,
                "entry checksum mismatch (not fatal)"
            );
        }

        Ok((payload.to_vec(), entry.id, entry.flags))
    }

    /// Sums `entry_count` across every list matching `type_tag`. For v1
    /// containers this is nonzero only for `TypeTag::Bin`.
    pub fn return_file_type_count(&self, type_tag: TypeTag) -> usize {
        self.lists
            .iter()
            .filter(|l| l.type_tag == type_tag)
            .map(|l| l.entries.len())
            .sum()
    }
}

fn read_header(data: &[u8]) -> Result<DatHeader> {
    let bytes = data
        .get(..DatHeader::SIZE)
        .ok_or_else(|| CoreError::Container("file too short for container header".into()))?;
    DatHeader::from_bytes(bytes).ok_or_else(|| CoreError::Container("malformed container header".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::header::{DatFooter, DatFooterEntry, DatHeader};

    fn build_v1_container(entries: &[(u16, &[u8])]) -> Vec<u8> {
        let mut payload = Vec::new();
        let mut footer_entries = Vec::new();
        for (id, bytes) in entries {
            let sum: u32 = bytes.iter().map(|&b| b as u32).sum();
            let checksum = (0xFFu32.wrapping_sub(sum) & 0xFF) as u8;
            let offset = DatHeader::SIZE as u32 + payload.len() as u32;
            payload.push(checksum);
            payload.extend_from_slice(bytes);
            footer_entries.push(DatFooterEntry {
                id: *id,
                offset,
                size: bytes.len() as u16,
            });
        }

        let footer_offset = DatHeader::SIZE as u32 + payload.len() as u32;
        let mut footer_bytes = DatFooter {
            entry_count: footer_entries.len() as u16,
        }
        .to_bytes()
        .to_vec();
        for e in &footer_entries {
            footer_bytes.extend_from_slice(&e.to_bytes());
        }

        let header = DatHeader {
            footer_offset,
            footer_size: footer_bytes.len() as u16,
        };

        let mut out = header.to_bytes().to_vec();
        out.extend_from_slice(&payload);
        out.extend_from_slice(&footer_bytes);
        out
    }

    #[test]
    fn opens_and_reads_v1_entries() {
        let data = build_v1_container(&[(10, &[1, 2, 3]), (20, &[0xAA, 0xBB])]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.dat");
        std::fs::write(&path, &data).unwrap();

        let c = Container::open_v1(&path).unwrap();
        assert_eq!(c.lists().len(), 1);
        assert_eq!(c.lists()[0].entries.len(), 2);

        let (payload, id, _) = c.load_entry(0, 0).unwrap();
        assert_eq!(id, 10);
        assert_eq!(payload, vec![1, 2, 3]);

        let (payload, id, _) = c.load_entry(0, 1).unwrap();
        assert_eq!(id, 20);
        assert_eq!(payload, vec![0xAA, 0xBB]);
    }

    #[test]
    fn rejects_entry_overrunning_footer() {
        let mut data = build_v1_container(&[(1, &[1, 2, 3])]);
        // Corrupt the footer entry's size to overrun the footer offset.
        let header = DatHeader::from_bytes(&data[..DatHeader::SIZE]).unwrap();
        let footer_start = header.footer_offset as usize + DatFooter::SIZE;
        data[footer_start + 6] = 0xFF;
        data[footer_start + 7] = 0xFF;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.dat");
        std::fs::write(&path, &data).unwrap();

        assert!(Container::open_v1(&path).is_err());
    }
}
