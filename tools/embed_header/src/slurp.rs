// Whole-File Reader
//
// Reads an entire input file into one heap buffer. The length comes from
// the open handle's metadata, not from reading until EOF, so it is a
// snapshot taken at open time. Exactly one read call is issued for that
// many bytes; any other count is fatal.
//
// The buffer is allocated as len + 1 and NUL-terminated, so the content can
// be handed to code expecting a C string. The terminator is not part of
// `bytes()`.
//
// File and buffer are owned by the function scope and released on every
// return path.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{EmbedError, EmbedResult};
use crate::log_debug;

/// File content read in one piece, followed by a NUL terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slurped {
    /// Content plus one trailing NUL; never empty
    buf: Vec<u8>,
}

impl Slurped {
    /// Content without the terminator
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    #[cfg(test)]
    fn with_nul(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read the whole file at `path`
pub fn slurp_file(path: &Path) -> EmbedResult<Slurped> {
    let file = File::open(path).map_err(EmbedError::Open)?;
    let len = file.metadata().map_err(EmbedError::Open)?.len();

    log_debug!("slurp", "{} reports {} bytes", path.display(), len);

    read_sized(file, len)
}

/// Read exactly `len` bytes from `src` with a single read call
pub fn read_sized<R: Read>(mut src: R, len: u64) -> EmbedResult<Slurped> {
    let len = usize::try_from(len).map_err(|_| EmbedError::Alloc)?;
    let capacity = len.checked_add(1).ok_or(EmbedError::Alloc)?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity).map_err(|_| EmbedError::Alloc)?;
    buf.resize(len, 0);

    let nread = src.read(&mut buf).map_err(|e| EmbedError::ShortRead {
        expected: len,
        actual: 0,
        source: Some(e),
    })?;
    if nread != len {
        log_debug!("slurp", "short read: wanted {} bytes, got {}", len, nread);
        return Err(EmbedError::ShortRead {
            expected: len,
            actual: nread,
            source: None,
        });
    }

    buf.push(0);
    Ok(Slurped { buf })
}
