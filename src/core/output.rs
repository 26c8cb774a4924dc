use std::{fs, io, path::Path};

use crate::error::{Error, Result};

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    let to_error = |source: io::Error| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)
}
