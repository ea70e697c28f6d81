use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::{chunks::ihdr::IHDRChunk, filters::Filter};

/// Prefix every scanline with filter type 0 and deflate the result. A 16x16
/// flat-color icon gains nothing from fancier filters.
pub(crate) fn compress_data(data: &[u8], header: &IHDRChunk) -> Vec<u8> {
    let scanline_width = header.scanline_size() - 1;
    let mut filtered = Vec::with_capacity(data.len() + header.height as usize);
    for scanline in data.chunks(scanline_width) {
        filtered.push(Filter::None as u8);
        filtered.extend_from_slice(scanline);
    }
    compress_to_vec_zlib(&filtered, 9)
}

#[cfg(test)]
mod tests {
    use miniz_oxide::inflate::decompress_to_vec_zlib;

    use super::compress_data;
    use crate::chunks::ihdr::IHDRChunk;

    #[test]
    fn every_scanline_gets_a_filter_byte() {
        let header = IHDRChunk::truecolor(2, 3);
        let raw = [7u8; 18];
        let roundtripped = decompress_to_vec_zlib(&compress_data(&raw, &header)).unwrap();
        assert_eq!(roundtripped.len(), 3 * (1 + 2 * 3));
        for scanline in roundtripped.chunks(header.scanline_size()) {
            assert_eq!(scanline[0], 0);
            assert!(scanline[1..].iter().all(|&b| b == 7));
        }
    }
}
