//! Byte-length check for base names

use std::ffi::OsStr;
use std::path::Path;

/// Longest plaintext name eCryptfs can store once the encrypted name has to fit
/// in a 255-byte filesystem name.
pub const MAX_NAME_BYTES: usize = 143;

/// Encoded length of a base name in bytes.
///
/// Names are measured exactly as the filesystem returned them. No Unicode
/// normalization is applied, so an NFD name and its NFC form may measure
/// differently.
#[cfg(unix)]
pub fn name_len(name: &OsStr) -> usize {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().len()
}

#[cfg(not(unix))]
pub fn name_len(name: &OsStr) -> usize {
    name.to_string_lossy().len()
}

/// Check whether a base name is longer than [`MAX_NAME_BYTES`].
pub fn exceeds_limit(name: &OsStr) -> bool {
    name_len(name) > MAX_NAME_BYTES
}

/// Final segment of a path, or the whole path when it has none (`/`, `..`).
pub fn base_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or_else(|| path.as_os_str())
}
