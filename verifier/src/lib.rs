//! Byte-exact comparison of benchmark output artifacts.
//!
//! Two algorithm variants are expected to compute identical results; this crate checks that
//! the files they wrote are identical down to the byte. No content interpretation happens
//! here, it is a pure binary diff.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default comparison block size in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Compare two files byte for byte.
///
/// Both files are read in matched fixed-size blocks. The files are equal if and only if every
/// block pair compares byte-equal, which includes matching total length; two empty files are
/// equal. An unreadable or missing file is an error for the caller to handle, never an
/// inequality.
pub fn files_equal(path_a: &Path, path_b: &Path, block_size: usize) -> std::io::Result<bool> {
    let mut file_a = File::open(path_a)?;
    let mut file_b = File::open(path_b)?;

    // A zero block size would read nothing and call everything equal
    let block_size = block_size.max(1);
    let mut block_a = vec![0u8; block_size];
    let mut block_b = vec![0u8; block_size];

    loop {
        let len_a = read_block(&mut file_a, &mut block_a)?;
        let len_b = read_block(&mut file_b, &mut block_b)?;

        if len_a != len_b || block_a[..len_a] != block_b[..len_b] {
            return Ok(false);
        }
        if len_a == 0 {
            return Ok(true);
        }
    }
}

/// Read until the buffer is full or the stream ends, so both sides always compare blocks of
/// matched length even when the underlying reads come back short.
fn read_block(file: &mut File, block: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match file.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
