use super::column::ColumnCursor;
use crate::error::{CoreError, Result};

/// Method 1: repeated `(count: i8)` blocks. `count >= 0` copies the next
/// `count+1` literal source bytes; `count < 0` repeats the next single
/// source byte `(-count)+1` times. Stops once `dest.len()` bytes are emitted.
pub fn decode_lr(src: &[u8], dest: &mut [u8]) -> Result<()> {
    let mut si = 0usize;
    let mut di = 0usize;
    let dest_len = dest.len();

    while di < dest_len {
        let count = read_i8(src, &mut si)?;
        if count >= 0 {
            let n = count as usize + 1;
            for _ in 0..n {
                if di >= dest_len {
                    break;
                }
                dest[di] = read_u8(src, &mut si)?;
                di += 1;
            }
        } else {
            let n = (-(count as i32)) as usize + 1;
            let byte = read_u8(src, &mut si)?;
            for _ in 0..n {
                if di >= dest_len {
                    break;
                }
                dest[di] = byte;
                di += 1;
            }
        }
    }
    Ok(())
}

/// Method 2: Method 1's token stream, but writing through a
/// [`ColumnCursor`] instead of sequentially.
pub fn decode_ud(src: &[u8], dest: &mut [u8], stride: usize, height: usize) -> Result<()> {
    let mut si = 0usize;
    let dest_len = dest.len();
    let mut cursor = ColumnCursor::new(stride, height, dest_len);

    while !cursor.done() {
        let count = read_i8(src, &mut si)?;
        if count >= 0 {
            let n = count as usize + 1;
            for _ in 0..n {
                if cursor.done() {
                    break;
                }
                let byte = read_u8(src, &mut si)?;
                cursor.put(dest, byte);
            }
        } else {
            let n = (-(count as i32)) as usize + 1;
            let byte = read_u8(src, &mut si)?;
            for _ in 0..n {
                if cursor.done() {
                    break;
                }
                cursor.put(dest, byte);
            }
        }
    }
    Ok(())
}

/// The second-layer RLE variant used inside the two-layer codec: each code
/// byte `b` either repeats the next source byte `(b & 0x7F) + 1` times
/// (when `b & 0x80`), or copies the next `b + 1` source bytes verbatim.
/// Decodes exactly one "line" from `src`, returning the number of output
/// bytes produced.
pub fn decode_line_c(src: &[u8], dest: &mut [u8]) -> Result<usize> {
    let mut si = 0usize;
    let mut di = 0usize;
    while si < src.len() && di < dest.len() {
        let b = src[si];
        si += 1;
        if b & 0x80 != 0 {
            let count = (b & 0x7F) as usize + 1;
            let byte = read_u8(src, &mut si)?;
            for _ in 0..count {
                if di >= dest.len() {
                    break;
                }
                dest[di] = byte;
                di += 1;
            }
        } else {
            let count = b as usize + 1;
            for _ in 0..count {
                if di >= dest.len() {
                    break;
                }
                dest[di] = read_u8(src, &mut si)?;
                di += 1;
            }
        }
    }
    Ok(di)
}

fn read_u8(src: &[u8], pos: &mut usize) -> Result<u8> {
    let b = *src
        .get(*pos)
        .ok_or_else(|| CoreError::ImageDecode("rle codec: source exhausted".into()))?;
    *pos += 1;
    Ok(b)
}

fn read_i8(src: &[u8], pos: &mut usize) -> Result<i8> {
    Ok(read_u8(src, pos)? as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_lr_literal_and_repeat_runs() {
        // S3: 0x02 0x41 0x42 0x43 0xFE 0x58 -> A B C X X X
        let src = [0x02, 0x41, 0x42, 0x43, 0xFE, 0x58];
        let mut dest = [0u8; 6];
        decode_lr(&src, &mut dest).unwrap();
        assert_eq!(&dest, b"ABCXXX");
    }

    #[test]
    fn repeat_token_produces_k_identical_bytes() {
        for k in 1u8..=128 {
            let count = -(k as i32 - 1) as i8;
            let src = [count as u8, 0x7A];
            let mut dest = vec![0u8; k as usize];
            decode_lr(&src, &mut dest).unwrap();
            assert!(dest.iter().all(|&b| b == 0x7A));
        }
    }

    #[test]
    fn decodes_ud_column_major() {
        // S4
        let src = [0x05, 1, 2, 3, 4, 5, 6];
        let mut dest = [0u8; 6];
        decode_ud(&src, &mut dest, 2, 3).unwrap();
        assert_eq!(dest, [1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn decodes_line_c_repeat_and_literal() {
        // repeat 0x05 three times, then 2 literal bytes 0x0A 0x0B
        let src = [0x82, 0x05, 0x01, 0x0A, 0x0B];
        let mut dest = [0u8; 5];
        let n = decode_line_c(&src, &mut dest).unwrap();
        assert_eq!(n, 5);
        assert_eq!(dest, [5, 5, 5, 0x0A, 0x0B]);
    }
}
