use anyhow::Context;
use miniz_oxide::inflate::decompress_to_vec_zlib;
use nom::IResult;

use super::{crc::calculate_crc, ParseableChunk};

#[derive(Debug)]
pub struct IDATChunk<'a> {
    pub(crate) data: &'a [u8],
}
impl IDATChunk<'_> {
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Inflate the zlib stream back into filtered scanlines.
    pub fn decode_data(&self) -> anyhow::Result<Vec<u8>> {
        decompress_to_vec_zlib(self.data).context("Failed to decompress image data.")
    }
}
impl<'a> ParseableChunk<'a> for IDATChunk<'a> {
    type Output = Vec<u8>;

    const HEADER: &'static [u8; 4] = b"IDAT";

    fn from_bytes(chunk_data: &'a [u8]) -> IResult<&'a [u8], Self> {
        Ok((&chunk_data[0..0], IDATChunk { data: chunk_data }))
    }

    fn to_bytes(&self) -> Self::Output {
        let len = self.data.len() as u32;
        let mut bytes = len.to_be_bytes().to_vec();
        bytes.extend(Self::HEADER);
        bytes.extend(self.data);
        let crc = calculate_crc(bytes[4..].iter().copied()).to_be_bytes();
        bytes.extend(crc);
        bytes
    }
}
