//! Utility functions for `md5` hash computation.
use md5::{Digest, Md5};

/// Compute the `md5` hash of some bytes.
///
/// The result is a hexadecimal string of 32 characters.
#[must_use]
pub fn compute(data: impl AsRef<[u8]>) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}
