//! CRC64 sequence checksums.
//!
//! Implements the ISO-3309 CRC64 variant used by SWISS-PROT/UniProt and
//! TrEMBL flat files. The checksum is a cheap pre-filter for duplicate
//! detection: two records can only be duplicates when their sequence
//! checksums (and organisms) agree.

use std::sync::OnceLock;

/// Reversed ISO-3309 polynomial (x^64 + x^4 + x^3 + x + 1).
const POLY64REV: u64 = 0xd800_0000_0000_0000;

fn crc_table() -> &'static [u64; 256] {
    static TABLE: OnceLock<[u64; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0u64; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut part = i as u64;
            for _ in 0..8 {
                if part & 1 != 0 {
                    part = (part >> 1) ^ POLY64REV;
                } else {
                    part >>= 1;
                }
            }
            *entry = part;
        }
        table
    })
}

/// CRC64 of raw bytes.
pub fn crc64_bytes(data: &[u8]) -> u64 {
    let table = crc_table();
    let mut crc = 0u64;
    for &byte in data {
        let index = ((crc ^ byte as u64) & 0xff) as usize;
        crc = table[index] ^ (crc >> 8);
    }
    crc
}

/// CRC64 of a residue sequence, rendered as the 16-digit uppercase hex
/// string stored on protein records.
pub fn crc64(sequence: &str) -> String {
    format!("{:016X}", crc64_bytes(sequence.as_bytes()))
}
