use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, ImageFormat};
use tracing::info;

use crate::error::{PrimeClockError, Result};
use crate::render::Frame;

/// What the output path's extension asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// A single frame in the given still-image format.
    Still(ImageFormat),
    /// A looping GIF.
    Animated,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let unsupported = || PrimeClockError::UnsupportedOutput {
            path: path.to_path_buf(),
        };
        match ImageFormat::from_path(path).map_err(|_| unsupported())? {
            ImageFormat::Gif => Ok(Self::Animated),
            format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp) => {
                Ok(Self::Still(format))
            }
            _ => Err(unsupported()),
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated)
    }
}

/// Writes one frame. The chart is opaque, so it is stored without alpha.
pub fn save_still(frame: &Frame, path: &Path, format: ImageFormat) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(frame.image.clone()).to_rgb8();
    rgb.save_with_format(path, format)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Writes frames as an endlessly looping GIF, `delay_ms` per frame.
pub fn save_animation(frames: &[Frame], path: &Path, delay_ms: u32) -> Result<()> {
    if frames.is_empty() {
        return Err(PrimeClockError::Render(
            "an animation needs at least one frame".to_string(),
        ));
    }

    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    encoder.encode_frames(frames.iter().map(|frame| {
        image::Frame::from_parts(
            frame.image.clone(),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }))?;

    info!(path = %path.display(), frames = frames.len(), "wrote animation");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn gif_selects_animation() {
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("clock.gif")).unwrap(),
            OutputFormat::Animated
        );
        assert!(OutputFormat::from_path(&PathBuf::from("CLOCK.GIF"))
            .unwrap()
            .is_animated());
    }

    #[test]
    fn still_formats() {
        for (name, format) in [
            ("a.png", ImageFormat::Png),
            ("a.jpg", ImageFormat::Jpeg),
            ("a.jpeg", ImageFormat::Jpeg),
            ("a.bmp", ImageFormat::Bmp),
        ] {
            assert_eq!(
                OutputFormat::from_path(&PathBuf::from(name)).unwrap(),
                OutputFormat::Still(format)
            );
        }
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        for name in ["a.txt", "a", "a.tiff"] {
            assert!(matches!(
                OutputFormat::from_path(&PathBuf::from(name)),
                Err(PrimeClockError::UnsupportedOutput { .. })
            ));
        }
    }

    #[test]
    fn empty_animation_is_an_error() {
        assert!(save_animation(&[], Path::new("unused.gif"), 1000).is_err());
    }
}
