//! Rebuilds a v2 `sequence.dat` container from assembled animations: one
//! checksum byte + bytecode blob per animation, followed by a single-type
//! v2 footer (master index -> `SQES` footer header -> footer -> entries).

use super::asm::AssembledAnimation;
use crate::container::header::{DatFooter, DatFooterEntryV2, DatFooterHeader, DatHeader, DatMasterIndex};
use crate::container::TypeTag;

/// Computes the one-byte checksum stored ahead of each animation's
/// bytecode: `(0xFF - sum(bytecode)) mod 256`.
fn checksum(bytecode: &[u8]) -> u8 {
    let sum: u32 = bytecode.iter().map(|&b| b as u32).sum();
    (0xFFu32.wrapping_sub(sum) & 0xFF) as u8
}

/// Serializes `animations` into a complete `sequence.dat` byte buffer.
pub fn rewrite_sequence_container(animations: &[AssembledAnimation]) -> Vec<u8> {
    let count = animations.len();
    let payload_size: usize = animations.iter().map(|a| a.bytecode.len() + 1).sum();
    let footer_offset = DatHeader::SIZE + payload_size;
    let footer_size =
        DatMasterIndex::SIZE + DatFooterHeader::SIZE + DatFooter::SIZE + count * DatFooterEntryV2::SIZE;

    let mut out = Vec::with_capacity(footer_offset + footer_size);
    out.extend_from_slice(&DatHeader {
        footer_offset: footer_offset as u32,
        footer_size: footer_size as u16,
    }
    .to_bytes());

    let mut entries = Vec::with_capacity(count);
    let mut cursor = DatHeader::SIZE as u32;
    for anim in animations {
        out.push(checksum(&anim.bytecode));
        out.extend_from_slice(&anim.bytecode);
        entries.push(DatFooterEntryV2 {
            id: anim.id,
            offset: cursor,
            size: anim.bytecode.len() as u16,
            flags: [64, 0, 0],
        });
        cursor += anim.bytecode.len() as u32 + 1;
    }

    out.extend_from_slice(&DatMasterIndex { footer_count: 1 }.to_bytes());
    out.extend_from_slice(
        &DatFooterHeader {
            magic: TypeTag::Sequence.to_magic().expect("Sequence always has a fixed magic"),
            footer_sub_offset: (DatMasterIndex::SIZE + DatFooterHeader::SIZE) as u16,
        }
        .to_bytes(),
    );
    out.extend_from_slice(&DatFooter { entry_count: count as u16 }.to_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.to_bytes());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s6_scenario_produces_thirty_byte_container() {
        let animations = vec![AssembledAnimation {
            script_name: "POP2_009_Hang".to_string(),
            id: 9,
            bytecode: vec![9, 0],
        }];
        let bytes = rewrite_sequence_container(&animations);
        assert_eq!(bytes.len(), 30);

        let header = DatHeader::from_bytes(&bytes).unwrap();
        assert_eq!(header.footer_offset, 9);
        assert_eq!(header.footer_size, 21);

        assert_eq!(bytes[6], checksum(&[9, 0]));
        assert_eq!(&bytes[7..9], &[9, 0]);

        let footer_entry = DatFooterEntryV2::from_bytes(&bytes[19..30]).unwrap();
        assert_eq!(footer_entry.id, 9);
        assert_eq!(footer_entry.offset, 6);
        assert_eq!(footer_entry.size, 2);
        assert_eq!(footer_entry.flags, [64, 0, 0]);
    }

    #[test]
    fn checksum_matches_wrapped_formula() {
        assert_eq!(checksum(&[]), 0xFF);
        assert_eq!(checksum(&[1, 1]), 0xFD);
    }

    #[test]
    fn multiple_animations_accumulate_offsets() {
        let animations = vec![
            AssembledAnimation { script_name: "POP2_001_StartRun".to_string(), id: 1, bytecode: vec![1, 0] },
            AssembledAnimation { script_name: "POP2_002_Stand".to_string(), id: 2, bytecode: vec![2, 0, 3, 0] },
        ];
        let bytes = rewrite_sequence_container(&animations);
        let header = DatHeader::from_bytes(&bytes).unwrap();
        // 6 (header) + (2+1) + (4+1) = 14
        assert_eq!(header.footer_offset, 14);

        let entry0 = DatFooterEntryV2::from_bytes(&bytes[bytes.len() - 2 * 11..]).unwrap();
        assert_eq!(entry0.id, 1);
        assert_eq!(entry0.offset, 6);
        let entry1 = DatFooterEntryV2::from_bytes(&bytes[bytes.len() - 11..]).unwrap();
        assert_eq!(entry1.id, 2);
        assert_eq!(entry1.offset, 9);
    }
}
