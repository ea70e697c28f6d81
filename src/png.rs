use nom::{bytes::complete::tag, IResult};

use crate::{
    chunks::{idat::IDATChunk, iend::IENDChunk, ihdr::IHDRChunk, ParseableChunk},
    image_data::compress_data,
    pixel::Pixel,
};

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

pub struct PNG {
    header: IHDRChunk,
    pixels: Vec<Pixel>,
}

impl PNG {
    /// An 8-bit truecolor image from a row-major raster.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            pixels.len() == (width * height) as usize,
            "expected {} pixels for a {width}x{height} image, got {}",
            width * height,
            pixels.len(),
        );
        Ok(Self {
            header: IHDRChunk::truecolor(width, height),
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Serialize to a complete PNG file: signature, IHDR, one IDAT, IEND.
    pub fn encode(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            raw.extend(pixel.channels());
        }
        let compressed = compress_data(&raw, &self.header);
        log::debug!(
            "compressed {} bytes of scanline data down to {}",
            raw.len() + self.header.height as usize,
            compressed.len()
        );

        let mut output = SIGNATURE.to_vec();
        output.extend(self.header.to_bytes());
        output.extend(
            IDATChunk {
                data: &compressed[..],
            }
            .to_bytes(),
        );
        output.extend(IENDChunk.to_bytes());
        output
    }
}

pub fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(SIGNATURE.as_slice())(input)
}

#[cfg(test)]
mod tests {
    use super::{parse_signature, PNG, SIGNATURE};
    use crate::pixel::Pixel;

    #[test]
    fn pixel_count_must_match_dimensions() {
        let pixels = vec![Pixel::default(); 15];
        assert!(PNG::new(4, 4, pixels).is_err());
    }

    #[test]
    fn encoded_output_starts_with_the_signature() {
        let png = PNG::new(2, 2, vec![Pixel::new(1, 2, 3); 4]).unwrap();
        let bytes = png.encode();
        let (rest, sig) = parse_signature(&bytes).unwrap();
        assert_eq!(sig, SIGNATURE.as_slice());
        // IHDR follows immediately.
        assert_eq!(&rest[4..8], b"IHDR");
    }
}
