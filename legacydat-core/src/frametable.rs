//! `FrameArray.txt`: a diagnostic text dump of the POP2 frame table, a flat
//! array of 7-byte records packed into certain `Frame`-tagged entries.
//!
//! This is purely an extraction-side artifact - there is no assembler
//! counterpart, it only ever gets written, never read back.

use crate::error::{CoreError, Result};

/// One decoded frame-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRecord {
    pub image: i16,
    pub sword: i16,
    pub dx: i8,
    pub dy: i8,
    pub flags: u8,
}

impl FrameRecord {
    pub const SIZE: usize = 7;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            image: i16::from_le_bytes([bytes[0], bytes[1]]),
            sword: i16::from_le_bytes([bytes[2], bytes[3]]),
            dx: bytes[4] as i8,
            dy: bytes[5] as i8,
            flags: bytes[6],
        }
    }
}

/// Splits a raw frame-table payload into its fixed-size records. Errors if
/// the payload length is not a multiple of the 7-byte record size.
pub fn decode_records(data: &[u8]) -> Result<Vec<FrameRecord>> {
    if data.len() % FrameRecord::SIZE != 0 {
        return Err(CoreError::ImageDecode(format!(
            "frame table size {} is not a multiple of {}",
            data.len(),
            FrameRecord::SIZE
        )));
    }
    Ok(data.chunks_exact(FrameRecord::SIZE).map(FrameRecord::from_bytes).collect())
}

/// Renders `records` as the `FrameArray.txt` C-initializer listing, masking
/// `sword`'s low 6 bits and `flags`' low 5 bits out into their own hex
/// column (the same split the original tool's debug dump used).
pub fn format_frame_array(records: &[FrameRecord]) -> String {
    let mut out = format!("pop_frame_type frame_table_kid[{}] = {{\r\n", records.len());
    for r in records {
        let sword_hi = (r.sword as u16) & !0x3F;
        let sword_lo = (r.sword as u16) & 0x3F;
        let flags_hi = r.flags & !0x1F;
        let flags_lo = r.flags & 0x1F;
        out.push_str(&format!(
            "{{ {:4}, 0x{sword_hi:04X}|{sword_lo:2}, {:3}, {:3}, 0x{flags_hi:02X}|{flags_lo:2}}},\r\n",
            r.image, r.dx, r.dy
        ));
    }
    out.push_str("};");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_record() {
        let bytes = [0x09, 0x00, 0x45, 0x00, 0xFE, 0x03, 0x81];
        let records = decode_records(&bytes).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], FrameRecord { image: 9, sword: 0x45, dx: -2, dy: 3, flags: 0x81 });
    }

    #[test]
    fn rejects_size_not_a_multiple_of_seven() {
        assert!(decode_records(&[0u8; 6]).is_err());
    }

    #[test]
    fn formats_masked_hex_columns() {
        let records = vec![FrameRecord { image: 9, sword: 0x45, dx: -2, dy: 3, flags: 0x81 }];
        let text = format_frame_array(&records);
        assert_eq!(
            text,
            "pop_frame_type frame_table_kid[1] = {\r\n{    9, 0x0040| 5,  -2,   3, 0x80| 1},\r\n};"
        );
    }
}
