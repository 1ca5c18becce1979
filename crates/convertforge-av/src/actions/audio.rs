//! Audio encoding and audio extraction through the ffmpeg CLI.

use std::ffi::OsString;
use std::path::Path;

use crate::format::AudioEncoding;
use crate::{Error, Result, ToolCommand};

/// Build the ffmpeg argument list for writing the audio stream of `input`.
///
/// Video streams are always dropped (`-vn`), so the same arguments serve
/// plain audio conversion and extraction from a video container.
pub fn audio_args(input: &Path, output: &Path, encoding: &AudioEncoding) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-y".into(), "-i".into(), input.into(), "-vn".into()];

    if let Some(codec) = encoding.codec {
        args.push("-c:a".into());
        args.push(codec.into());
    }
    args.extend(encoding.parameters.iter().map(OsString::from));

    args.push("-f".into());
    args.push(encoding.container.into());
    args.push(output.into());
    args
}

/// Encode the audio stream of `input` to `output`.
pub fn encode_audio(
    ffmpeg: &Path,
    input: &Path,
    output: &Path,
    encoding: &AudioEncoding,
) -> Result<()> {
    if !input.exists() {
        return Err(Error::file_not_found(input));
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Encoding audio {:?} -> {:?} ({})",
        input,
        output,
        encoding.container
    );

    ToolCommand::new(ffmpeg.to_path_buf())
        .args(audio_args(input, output, encoding))
        .execute()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::AudioTarget;

    fn args_for(target: AudioTarget) -> Vec<String> {
        audio_args(
            Path::new("in.mkv"),
            Path::new("out.x"),
            &target.encoding(),
        )
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
    }

    #[test]
    fn test_flac_args() {
        assert_eq!(
            args_for(AudioTarget::Flac),
            [
                "-y", "-i", "in.mkv", "-vn", "-c:a", "flac", "-compression_level", "8", "-f",
                "flac", "out.x"
            ]
        );
    }

    #[test]
    fn test_aac_uses_adts_container() {
        let args = args_for(AudioTarget::Aac);
        assert!(args.windows(2).any(|w| w == ["-f", "adts"]));
        assert!(args.windows(2).any(|w| w == ["-c:a", "aac"]));
    }

    #[test]
    fn test_m4a_and_wma_containers() {
        let m4a = args_for(AudioTarget::M4a);
        assert!(m4a.windows(2).any(|w| w == ["-f", "ipod"]));

        let wma = args_for(AudioTarget::Wma);
        assert!(wma.windows(2).any(|w| w == ["-f", "asf"]));
        assert!(wma.windows(2).any(|w| w == ["-c:a", "wmav2"]));
    }

    #[test]
    fn test_plain_targets_let_ffmpeg_pick_codec() {
        let args = args_for(AudioTarget::Mp3);
        assert!(!args.iter().any(|a| a == "-c:a"));
        assert_eq!(args.last().map(String::as_str), Some("out.x"));
    }

    #[test]
    fn test_missing_input() {
        let err = encode_audio(
            Path::new("ffmpeg"),
            Path::new("/nonexistent/in.wav"),
            Path::new("/nonexistent/out.mp3"),
            &AudioTarget::Mp3.encoding(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
