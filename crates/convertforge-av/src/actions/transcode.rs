//! Whole-file transcoding through the ffmpeg CLI.

use std::path::Path;

use crate::{Error, Result, ToolCommand};

/// Run `<ffmpeg> -i <input> -y <output>`.
///
/// ffmpeg picks codecs from the output extension. A non-zero exit is returned
/// as [`Error::ToolFailed`] carrying ffmpeg's stderr.
pub fn transcode(ffmpeg: &Path, input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        return Err(Error::file_not_found(input));
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Transcoding {:?} -> {:?}", input, output);

    ToolCommand::new(ffmpeg.to_path_buf())
        .arg("-i")
        .arg(input)
        .arg("-y")
        .arg(output)
        .execute()?;
    Ok(())
}
