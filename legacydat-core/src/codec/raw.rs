use crate::error::{CoreError, Result};

/// Method 0: a verbatim copy of `dest.len()` bytes.
pub fn decode(src: &[u8], dest: &mut [u8]) -> Result<()> {
    if src.len() < dest.len() {
        return Err(CoreError::ImageDecode(format!(
            "raw codec: source has {} bytes, need {}",
            src.len(),
            dest.len()
        )));
    }
    dest.copy_from_slice(&src[..dest.len()]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_verbatim() {
        let src = [1, 2, 3, 4];
        let mut dest = [0u8; 4];
        decode(&src, &mut dest).unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn rejects_short_source() {
        let src = [1, 2];
        let mut dest = [0u8; 4];
        assert!(decode(&src, &mut dest).is_err());
    }
}
