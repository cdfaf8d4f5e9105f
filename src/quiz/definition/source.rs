use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::DefinitionError;

/// Reads the whole quiz file as text. Files larger than `max_bytes` are
/// rejected rather than truncated.
pub fn read_source(path: &Path, max_bytes: u64) -> Result<String, DefinitionError> {
    let unavailable = |source: io::Error| DefinitionError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;

    // Read one byte past the limit so oversized files can be told apart from
    // files that exactly fill it.
    let mut bytes = Vec::new();
    file.take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(unavailable)?;
    if bytes.len() as u64 > max_bytes {
        return Err(DefinitionError::SourceTooLarge {
            path: path.to_path_buf(),
            limit: max_bytes,
        });
    }

    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|e| unavailable(io::Error::new(io::ErrorKind::InvalidData, e)))
}
