//! MIDI detection for `Sound`-tagged v2 entries: the original game prefixes
//! embedded MIDI files with one extra byte ahead of the `MThd` chunk magic.

/// `true` if `payload` is a sound entry carrying an embedded MIDI file: a
/// one-byte prefix followed by the `MThd` chunk signature.
pub fn is_midi(payload: &[u8]) -> bool {
    payload.len() > 4 && &payload[1..5] == b"MThd"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_prefixed_mthd_signature() {
        let mut payload = vec![0x00];
        payload.extend_from_slice(b"MThd");
        payload.extend_from_slice(&[0, 0, 0, 6]);
        assert!(is_midi(&payload));
    }

    #[test]
    fn rejects_non_midi_payload() {
        assert!(!is_midi(&[0x00, b'R', b'I', b'F', b'F']));
        assert!(!is_midi(&[0x00]));
    }
}
