//! Still image conversion with the `image` crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::backend::ConvertedOutput;
use crate::format::{ImageEncoding, ImageTarget, ICON_MAX_SIZE};
use crate::{Error, Result, ToolCommand, Workspace};

/// Decode `input` and encode it to `output` according to `encoding`.
///
/// HEIC/HEIF targets go through `heif_enc` when it is available. Without it the
/// image is written as PNG next to the requested path and the returned
/// [`ConvertedOutput`] reports `png` as the format actually written.
pub fn convert_image(
    input: &Path,
    output: &Path,
    encoding: &ImageEncoding,
    heif_enc: Option<&Path>,
) -> Result<ConvertedOutput> {
    if !input.exists() {
        return Err(Error::file_not_found(input));
    }

    let mut img = image::open(input)?;

    if encoding.flatten_alpha && img.color().has_alpha() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Flattening alpha channel of {:?}", input);
        img = DynamicImage::ImageRgb8(img.to_rgb8());
    }

    if encoding.fit_icon {
        img = fit_icon(img);
    }

    let target = encoding.target;

    if target.is_heif() {
        return match heif_enc {
            Some(tool) => {
                encode_heif(&img, output, tool)?;
                Ok(ConvertedOutput::new(output, target.extension()))
            }
            None => {
                let fallback = png_fallback_path(output);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "HEIF encoder unavailable, writing {:?} as PNG instead",
                    fallback
                );
                img.save_with_format(&fallback, ImageFormat::Png)?;
                Ok(ConvertedOutput::fallback(fallback, ImageTarget::Png.extension()))
            }
        };
    }

    if target == ImageTarget::Webp && encoding.lossless {
        encode_webp_lossless(&img, output)?;
    } else {
        let format = target.image_format().ok_or_else(|| {
            Error::InvalidInput(format!("no built-in encoder for {}", target.extension()))
        })?;
        img.save_with_format(output, format)?;
    }

    Ok(ConvertedOutput::new(output, target.extension()))
}

/// Shrink `img` so neither edge exceeds the largest icon size, keeping the aspect ratio.
fn fit_icon(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= ICON_MAX_SIZE && height <= ICON_MAX_SIZE {
        return img;
    }
    #[cfg(feature = "tracing")]
    tracing::debug!("Scaling {}x{} image down to icon size", width, height);
    img.resize(ICON_MAX_SIZE, ICON_MAX_SIZE, FilterType::Lanczos3)
}

/// Path used when a HEIF target has to fall back to PNG.
fn png_fallback_path(output: &Path) -> PathBuf {
    output.with_extension(ImageTarget::Png.extension())
}

fn encode_webp_lossless(img: &DynamicImage, output: &Path) -> Result<()> {
    // The encoder only takes 8-bit RGB(A).
    let img = if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    };

    let writer = BufWriter::new(File::create(output)?);
    img.write_with_encoder(WebPEncoder::new_lossless(writer))?;
    Ok(())
}

/// Write an intermediate PNG and let the external encoder produce the HEIF file.
fn encode_heif(img: &DynamicImage, output: &Path, tool: &Path) -> Result<()> {
    let workspace = Workspace::new()?;
    let intermediate = workspace.temp_file("intermediate.png");
    img.save_with_format(&intermediate, ImageFormat::Png)?;

    ToolCommand::new(tool.to_path_buf())
        .arg(&intermediate)
        .arg("-o")
        .arg(output)
        .execute()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{EncodePlan, TargetFormat};
    use image::{ColorType, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

    fn plan(target: ImageTarget) -> ImageEncoding {
        match EncodePlan::for_target(TargetFormat::Image(target)) {
            EncodePlan::Image(encoding) => encoding,
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    fn write_rgba_png(path: &Path) {
        let mut img = RgbaImage::new(4, 4);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([200, 10 * x as u8, 30, if x % 2 == 0 { 0 } else { 255 }]);
        }
        img.save(path).unwrap();
    }

    #[test]
    fn test_alpha_png_to_jpg_is_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("x.png");
        let output = dir.path().join("x.jpg");
        write_rgba_png(&input);

        let converted = convert_image(&input, &output, &plan(ImageTarget::Jpg), None).unwrap();
        assert_eq!(converted.path, output);
        assert_eq!(converted.format, "jpg");
        assert!(!converted.fell_back);

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn test_alpha_png_to_bmp_is_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("x.png");
        let output = dir.path().join("x.bmp");
        write_rgba_png(&input);

        convert_image(&input, &output, &plan(ImageTarget::Bmp), None).unwrap();
        let decoded = image::open(&output).unwrap();
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_webp_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        let output = dir.path().join("photo.webp");

        let mut img = RgbImage::new(8, 8);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([x as u8 * 31, y as u8 * 17, (x + y) as u8 * 7]);
        }
        img.save(&input).unwrap();

        convert_image(&input, &output, &plan(ImageTarget::Webp), None).unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(decoded.to_rgb8(), img);
    }

    #[test]
    fn test_large_image_to_ico_is_scaled() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        let output = dir.path().join("photo.ico");
        RgbImage::from_pixel(640, 480, Rgb([10, 120, 200]))
            .save(&input)
            .unwrap();

        let converted = convert_image(&input, &output, &plan(ImageTarget::Ico), None).unwrap();
        assert_eq!(converted.format, "ico");

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.dimensions(), (256, 192));
    }

    #[test]
    fn test_small_image_to_ico_keeps_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tiny.png");
        let output = dir.path().join("tiny.ico");
        RgbImage::new(16, 16).save(&input).unwrap();

        convert_image(&input, &output, &plan(ImageTarget::Ico), None).unwrap();
        assert_eq!(image::open(&output).unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn test_heic_without_encoder_falls_back_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("y.png");
        let out_dir = dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();
        let output = out_dir.join("y.heic");
        write_rgba_png(&input);

        let converted = convert_image(&input, &output, &plan(ImageTarget::Heic), None).unwrap();
        assert!(converted.fell_back);
        assert_eq!(converted.format, "png");
        assert_eq!(converted.path, out_dir.join("y.png"));
        assert!(converted.path.exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_image(
            &dir.path().join("gone.png"),
            &dir.path().join("gone.jpg"),
            &plan(ImageTarget::Jpg),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_undecodable_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"definitely not a png").unwrap();

        let err = convert_image(
            &input,
            &dir.path().join("broken.jpg"),
            &plan(ImageTarget::Jpg),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
