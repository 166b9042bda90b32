use std::io::{self, Read, Write};

/// Remote reads are issued in fixed 64 KiB chunks at increasing offsets.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Outcome of one chunk read. End of stream is data, not an error: the
/// protocol signals it either as a zero-length read or as an explicit
/// end-of-file status, and both land on `Eof` here.
#[derive(Debug, PartialEq, Eq)]
pub enum ChunkRead {
    Data(usize),
    Eof,
}

/// Issue one chunk read against `reader` into `buf`.
///
/// A zero-length read is the canonical termination signal; an end-of-file
/// error status from the transport is accepted as a synonym. Everything else
/// is fatal.
pub fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<ChunkRead> {
    loop {
        match reader.read(buf) {
            Ok(0) => return Ok(ChunkRead::Eof),
            Ok(n) => return Ok(ChunkRead::Data(n)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(ChunkRead::Eof),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Drain `reader` into `writer` chunk by chunk, returning the bytes copied.
pub fn copy_chunked<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<u64> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        match read_chunk(reader, &mut buf)? {
            ChunkRead::Data(n) => {
                writer.write_all(&buf[..n])?;
                total += n as u64;
            }
            ChunkRead::Eof => break,
        }
    }

    writer.flush()?;
    Ok(total)
}
