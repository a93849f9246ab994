use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StashError, StashResult};

/// zstd compression level for snapshot files. Fixed fast setting; files
/// written by different invocations stay mutually compatible.
pub const COMPRESSION_LEVEL: i32 = 1;

/// Serialize `data` with bincode, compress it, and write it to `path`.
///
/// Creates or truncates the file. The encoded bytes are built fully in
/// memory before the file is touched, so a serialization failure leaves no
/// file behind. Concurrent writers to the same path are not synchronized
/// here; callers that need this must arrange their own exclusion (e.g.
/// distinct temp files plus rename).
pub fn write_data<T, P>(path: P, data: &T) -> StashResult<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let payload =
        bincode::serialize(data).map_err(|e| StashError::Serialization(e.to_string()))?;
    let compressed = zstd::encode_all(payload.as_slice(), COMPRESSION_LEVEL)
        .map_err(|e| StashError::Compression(e.to_string()))?;

    std::fs::write(path, &compressed)?;

    debug!(
        path = %path.display(),
        raw = payload.len(),
        compressed = compressed.len(),
        "snapshot written"
    );
    Ok(())
}

/// Read the file at `path`, decompress it, and deserialize the value.
///
/// The inverse of [`write_data`]: nested structures and scalar types come
/// back exactly as written.
pub fn read_data<T, P>(path: P) -> StashResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let compressed = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StashError::NotFound {
            path: path.to_path_buf(),
        },
        _ => StashError::Io(e),
    })?;

    let payload =
        zstd::decode_all(compressed.as_slice()).map_err(|e| StashError::Decompression {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let data = bincode::deserialize(&payload).map_err(|e| StashError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), bytes = payload.len(), "snapshot read");
    Ok(data)
}
