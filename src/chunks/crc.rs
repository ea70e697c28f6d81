//! CRC-32 as PNG frames it: reflected polynomial 0xedb88320, all-ones
//! initializer and final xor, computed over chunk type + data.

const CRC_TABLE: [u32; 256] = {
    let mut table = [0; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut i = 0;
        while i < 8 {
            if c & 1 != 0 {
                c = 0xedb88320 ^ (c >> 1);
            } else {
                c >>= 1;
            }
            i += 1;
        }
        table[n as usize] = c;
        n += 1;
    }
    table
};

pub(crate) fn calculate_crc<I: IntoIterator<Item = u8>>(data: I) -> u32 {
    let mut crc = 0xffffffff_u32;
    for b in data.into_iter() {
        let index = (crc ^ b as u32) & 0xff;
        crc = CRC_TABLE[index as usize] ^ (crc >> 8);
    }
    crc ^ 0xffffffff
}
