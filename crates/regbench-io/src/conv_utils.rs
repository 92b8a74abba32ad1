/// Utility function to convert 16-bit big endian `Vec<u8>` to `Vec<u16>`
pub fn convert_buf_u8_u16(buf: Vec<u8>) -> Vec<u16> {
    buf.chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

/// Removes the trailing alpha sample of every pixel in an interleaved byte buffer.
///
/// `channels` counts the color channels only, `bytes_per_sample` is 1 or 2.
pub fn drop_alpha_channel(buf: &[u8], channels: usize, bytes_per_sample: usize) -> Vec<u8> {
    let color_bytes = channels * bytes_per_sample;
    buf.chunks_exact(color_bytes + bytes_per_sample)
        .flat_map(|pixel| pixel[..color_bytes].iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    #[test]
    fn convert_big_endian() {
        let buf = vec![0x01, 0x02, 0xff, 0x00];
        assert_eq!(super::convert_buf_u8_u16(buf), vec![0x0102, 0xff00]);
    }

    #[test]
    fn drop_alpha() {
        let la8 = [1, 255, 2, 0, 3, 128];
        assert_eq!(super::drop_alpha_channel(&la8, 1, 1), vec![1, 2, 3]);

        let la16 = [0x01, 0x02, 0xff, 0xff, 0x03, 0x04, 0x00, 0x00];
        assert_eq!(
            super::drop_alpha_channel(&la16, 1, 2),
            vec![0x01, 0x02, 0x03, 0x04]
        );
    }
}
