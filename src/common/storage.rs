use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::common::error::{KeygenError, Result};

/// Permission bits for exported key files.
#[cfg(unix)]
pub const KEY_FILE_MODE: u32 = 0o600;

/// Writes `key` to `path`, replacing any previous content, readable by the
/// owner only.
pub fn export_key_to_file(path: impl AsRef<Path>, key: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| KeygenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(KEY_FILE_MODE);
    }

    let mut file = options.open(path).map_err(io_err)?;

    // mode() only applies when the file is created; tighten an existing file
    // before any key material reaches it
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(KEY_FILE_MODE)).map_err(io_err)?;
    }

    file.write_all(key).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;

    info!(path = %path.display(), bytes = key.len(), "exported key");
    Ok(())
}

/// Reads the raw bytes of a key file without interpreting them.
pub fn import_key_from_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| KeygenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
