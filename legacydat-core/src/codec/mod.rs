//! The five single-layer image codecs (raw, RLE/LZG in left-to-right and
//! column-major flavors), the second-generation two-layer codec, and the
//! sub-byte pixel-depth expander. None allocate beyond the destination
//! buffer and (where needed) a fixed 1024-byte sliding window.

mod column;
pub mod depth;
pub mod lzg;
pub mod raw;
pub mod rle;
pub mod two_layer;

/// The five single-layer compression methods named in an image header's
/// `info[1] & 0x0F` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressMethod {
    Raw,
    RleLr,
    RleUd,
    LzgLr,
    LzgUd,
}

impl CompressMethod {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Raw),
            1 => Some(Self::RleLr),
            2 => Some(Self::RleUd),
            3 => Some(Self::LzgLr),
            4 => Some(Self::LzgUd),
            _ => None,
        }
    }
}

/// Dispatches to the codec named by `method`, decoding `src` into `dest`.
/// `stride`/`height` are only consulted by the column-major variants.
pub fn decode(
    method: CompressMethod,
    src: &[u8],
    dest: &mut [u8],
    stride: usize,
    height: usize,
) -> crate::error::Result<()> {
    match method {
        CompressMethod::Raw => raw::decode(src, dest),
        CompressMethod::RleLr => rle::decode_lr(src, dest),
        CompressMethod::RleUd => rle::decode_ud(src, dest, stride, height),
        CompressMethod::LzgLr => lzg::decode_lr(src, dest),
        CompressMethod::LzgUd => lzg::decode_ud(src, dest, stride, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_raw_method() {
        let src = [1, 2, 3];
        let mut dest = [0u8; 3];
        decode(CompressMethod::Raw, &src, &mut dest, 3, 1).unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn unknown_method_code_is_none() {
        assert_eq!(CompressMethod::from_code(5), None);
    }
}
