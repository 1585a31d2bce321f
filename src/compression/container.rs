//! The compressed file format. All integers are little-endian.
//!
//! ```text
//! magic      4 bytes   "WZ1\0"
//! entries    u32       number of distinct words
//! entry      u32 byte length, UTF-8 word, u64 count   (ascending word order)
//! payload    u64 byte length, then the bytes of bit_number::bits_as_bytes
//! ```
//!
//! The table is stored instead of the codes. The tree builder is deterministic, so the
//! reader gets the very same code back from the counts.

use std::io::{self, Error, ErrorKind, Read, Write};

use binout::{read_int, write_int};

use crate::bitstream::bit_number::{bits_as_bytes, bytes_as_bits};
use crate::tools::freq_count::FreqTable;

pub const MAGIC: [u8; 4] = *b"WZ1\0";

/// Everything a compressed file holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub freqs: FreqTable,
    pub bits: String,
}

fn invalid(msg: String) -> Error {
    Error::new(ErrorKind::InvalidData, msg)
}

/// Read exactly `len` bytes without trusting `len` for the allocation.
fn read_vec<R: Read>(input: &mut R, len: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    input.by_ref().take(len).read_to_end(&mut buf)?;
    if (buf.len() as u64) < len {
        return Err(Error::new(ErrorKind::UnexpectedEof, "Unexpected End Of File"));
    }
    Ok(buf)
}

/// Write the word counts and the encoded bits. Returns the number of bytes written.
pub fn write_container<W: Write>(out: &mut W, freqs: &FreqTable, bits: &str) -> io::Result<usize> {
    let mut entries: Vec<(&String, &u64)> = freqs.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    let payload = bits_as_bytes(bits)?;

    let entry_count = u32::try_from(entries.len())
        .map_err(|_| Error::new(ErrorKind::InvalidInput, "too many distinct words"))?;

    out.write_all(&MAGIC)?;
    write_int!(out, entry_count)?;
    let mut written = MAGIC.len() + 4;
    for (word, count) in entries {
        let len = u32::try_from(word.len())
            .map_err(|_| Error::new(ErrorKind::InvalidInput, "word too long"))?;
        write_int!(out, len)?;
        out.write_all(word.as_bytes())?;
        write_int!(out, count)?;
        written += 4 + word.len() + 8;
    }
    write_int!(out, payload.len() as u64)?;
    out.write_all(&payload)?;
    written += 8 + payload.len();
    Ok(written)
}

/// Read a container written by [`write_container`].
pub fn read_container<R: Read>(input: &mut R) -> io::Result<Container> {
    read_next_container(input)?
        .ok_or_else(|| Error::new(ErrorKind::UnexpectedEof, "Unexpected End Of File"))
}

/// Read the next of several containers written back to back. Returns `None` when the
/// input ends cleanly before another container starts.
pub fn read_next_container<R: Read>(input: &mut R) -> io::Result<Option<Container>> {
    let mut magic = [0_u8; 4];
    let mut filled = 0;
    while filled < magic.len() {
        match input.read(&mut magic[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(Error::new(ErrorKind::UnexpectedEof, "Unexpected End Of File")),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    if magic != MAGIC {
        return Err(invalid("not a wordzip compressed file".to_string()));
    }

    let entry_count = read_int!(input, u32)?;
    let mut freqs = FreqTable::default();
    for _ in 0..entry_count {
        let len = read_int!(input, u32)?;
        let word = String::from_utf8(read_vec(input, len as u64)?)
            .map_err(|e| invalid(format!("word is not valid UTF-8: {}", e)))?;
        let count = read_int!(input, u64)?;
        if freqs.insert(word.clone(), count).is_some() {
            return Err(invalid(format!("word {:?} is stored twice", word)));
        }
    }

    let payload_len = read_int!(input, u64)?;
    let payload = read_vec(input, payload_len)?;
    let bits = bytes_as_bits(&payload)?;
    Ok(Some(Container { freqs, bits }))
}
