use icon_png::{chunks, icon, parse_signature, PNG};

#[test]
fn generated_icon_is_a_well_formed_png() {
    let png = PNG::new(icon::WIDTH, icon::HEIGHT, icon::render()).unwrap();
    let bytes = png.encode();

    let (rest, _) = parse_signature(&bytes).unwrap();
    let mut chunk_types = Vec::new();
    for chunk in chunks::iter_chunks(rest) {
        match chunk.unwrap() {
            chunks::Chunk::IHDR(ihdr) => {
                assert_eq!(ihdr.width, 16);
                assert_eq!(ihdr.height, 16);
                assert_eq!(ihdr.bit_depth, 8);
                assert_eq!(ihdr.scanline_size(), 49);
                chunk_types.push("IHDR");
            }
            chunks::Chunk::IDAT(_) => chunk_types.push("IDAT"),
            chunks::Chunk::IEND => chunk_types.push("IEND"),
            chunks::Chunk::Unknown(raw) => panic!("unexpected chunk {}", raw.type_name()),
        }
    }
    assert_eq!(chunk_types, ["IHDR", "IDAT", "IEND"]);
}

#[test]
fn decompressed_image_data_matches_the_raster() {
    let png = PNG::new(icon::WIDTH, icon::HEIGHT, icon::render()).unwrap();
    let bytes = png.encode();

    let (rest, _) = parse_signature(&bytes).unwrap();
    let mut data = None;
    for chunk in chunks::iter_chunks(rest) {
        if let chunks::Chunk::IDAT(idat) = chunk.unwrap() {
            data = Some(idat.decode_data().unwrap());
        }
    }
    let data = data.expect("the encoder always writes an IDAT");

    // 16 scanlines of a filter byte plus 16 RGB pixels.
    assert_eq!(data.len(), 16 * 49);
    for scanline in data.chunks(49) {
        assert_eq!(scanline[0], 0);
    }

    let pixel_at = |x: usize, y: usize| {
        let offset = y * 49 + 1 + x * 3;
        [data[offset], data[offset + 1], data[offset + 2]]
    };
    assert_eq!(pixel_at(0, 0), [70, 130, 230]);
    assert_eq!(pixel_at(7, 7), [70, 130, 230]);
    assert_eq!(pixel_at(8, 7), [50, 70, 200]);
    assert_eq!(pixel_at(0, 8), [50, 70, 200]);
    assert_eq!(pixel_at(15, 15), [50, 70, 200]);
}

#[test]
fn truncated_files_report_an_error() {
    let png = PNG::new(icon::WIDTH, icon::HEIGHT, icon::render()).unwrap();
    let bytes = png.encode();

    let (rest, _) = parse_signature(&bytes[..bytes.len() - 4]).unwrap();
    let result: anyhow::Result<Vec<_>> = chunks::iter_chunks(rest).collect();
    assert!(result.is_err());
}
