use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::error::Result;

pub(crate) fn write_document_file<S: AsRef<str>, P: AsRef<path::Path>>(
    content: S,
    dest_file: P,
) -> Result<()> {
    write_document_file_internal(content.as_ref(), dest_file.as_ref())
}

fn write_document_file_internal(content: &str, dest_file: &path::Path) -> Result<()> {
    // create target directories if any exist
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    let mut file = fs::File::create(dest_file)
        .with_context(|| format!("Could not create {}", dest_file.display()))?;

    file.write_all(content.as_bytes())?;
    log::trace!("Wrote {}", dest_file.display());
    Ok(())
}
