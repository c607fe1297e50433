#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::Path;

use narthex::domain::drafts::ImageAttachment;

use crate::client::CliError;

/// Read a local file into an upload attachment.
pub fn read_attachment(path: &Path) -> Result<ImageAttachment, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::InputFile {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.bin")
        .to_string();
    Ok(ImageAttachment { file_name, bytes })
}

pub fn read_attachments(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageAttachment>, CliError> {
    paths
        .iter()
        .map(|path| read_attachment(path.as_ref()))
        .collect()
}
