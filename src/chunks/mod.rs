use nom::{
    bytes::complete::{tag, take},
    combinator::map,
    multi::length_data,
    number::complete::be_u32,
    sequence::{terminated, tuple},
    IResult,
};

pub(crate) mod crc;
pub mod idat;
pub mod iend;
pub mod ihdr;

/// A chunk pulled off the wire. Anything the emitter never writes comes back
/// as `Unknown` so the report tool can still list it.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub enum Chunk<'a> {
    IHDR(ihdr::IHDRChunk),
    IDAT(idat::IDATChunk<'a>),
    IEND,
    Unknown(RawChunk<'a>),
}

/// Iterate the chunks following the PNG signature, stopping after IEND.
pub fn iter_chunks(source: &[u8]) -> ChunkIter {
    ChunkIter {
        source,
        finished: false,
    }
}

pub struct ChunkIter<'a> {
    source: &'a [u8],
    finished: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = anyhow::Result<Chunk<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match parse_chunk(self.source) {
            Ok((rest, chunk)) => {
                self.source = rest;
                if matches!(chunk, Chunk::IEND) {
                    self.finished = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e.to_owned().into()))
            }
        }
    }
}

fn parse_chunk(input: &[u8]) -> IResult<&[u8], Chunk<'_>> {
    let (rest, (chunk_type, chunk_data)) = valid_chunk(input)?;
    match chunk_type {
        ihdr::IHDRChunk::HEADER => Ok((
            rest,
            Chunk::IHDR(ihdr::IHDRChunk::from_bytes(chunk_data)?.1),
        )),
        idat::IDATChunk::HEADER => Ok((
            rest,
            Chunk::IDAT(idat::IDATChunk::from_bytes(chunk_data)?.1),
        )),
        iend::IENDChunk::HEADER => Ok((rest, Chunk::IEND)),
        _ => Ok((
            rest,
            Chunk::Unknown(RawChunk {
                chunk_type,
                chunk_data,
            }),
        )),
    }
}

#[derive(Debug)]
pub struct RawChunk<'a> {
    chunk_type: &'a [u8; 4],
    chunk_data: &'a [u8],
}
impl RawChunk<'_> {
    pub fn type_name(&self) -> String {
        String::from_utf8_lossy(self.chunk_type).into_owned()
    }

    pub fn data_len(&self) -> usize {
        self.chunk_data.len()
    }
}

/// Takes one length-framed chunk, checks its CRC, and yields the type bytes
/// and the data between them and the CRC.
fn valid_chunk<'a, Error: nom::error::ParseError<&'a [u8]>>(
    input: &'a [u8],
) -> IResult<&'a [u8], (&'a [u8; 4], &'a [u8]), Error> {
    let (type_length, crc_length) = (4, 4);
    let (input, framed) = length_data(map(be_u32, |v| v + type_length + crc_length))(input)?;
    let crc = crc::calculate_crc(
        framed[0..framed.len() - crc_length as usize]
            .iter()
            .copied(),
    )
    .to_be_bytes();
    let (_, parts) = tuple((
        map(take(type_length), |v: &[u8]| {
            v.try_into().expect("4 bytes should have been taken")
        }),
        terminated(
            take(framed.len() - (type_length + crc_length) as usize),
            tag(crc),
        ),
    ))(framed)?;
    Ok((input, parts))
}

pub trait ParseableChunk<'a>: Sized {
    type Output: AsRef<[u8]>;
    const HEADER: &'static [u8; 4];

    fn from_bytes(chunk_data: &'a [u8]) -> IResult<&'a [u8], Self>;
    fn to_bytes(&self) -> Self::Output;
}
