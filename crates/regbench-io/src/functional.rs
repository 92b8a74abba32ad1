use std::{io::Cursor, path::Path};

use image::{ColorType, ImageFormat, ImageReader};
use regbench_image::{Image, ImageSize};

use crate::{error::IoError, png::decode_image_png};

/// A generic image type that can be any of the supported pixel layouts.
#[derive(Debug, Clone)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
    /// 16-bit grayscale image
    L16(Image<u16, 1>),
    /// 16-bit grayscale image with alpha channel
    La16(Image<u16, 2>),
    /// 16-bit RGB image
    Rgb16(Image<u16, 3>),
    /// 16-bit RGB image with alpha channel
    Rgba16(Image<u16, 4>),
}

impl GenericImage {
    /// Number of channels of the decoded image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(_) | GenericImage::L16(_) => 1,
            GenericImage::La8(_) | GenericImage::La16(_) => 2,
            GenericImage::Rgb8(_) | GenericImage::Rgb16(_) => 3,
            GenericImage::Rgba8(_) | GenericImage::Rgba16(_) => 4,
        }
    }

    /// Size of the decoded image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(img) => img.size(),
            GenericImage::La8(img) => img.size(),
            GenericImage::Rgb8(img) => img.size(),
            GenericImage::Rgba8(img) => img.size(),
            GenericImage::L16(img) => img.size(),
            GenericImage::La16(img) => img.size(),
            GenericImage::Rgb16(img) => img.size(),
            GenericImage::Rgba16(img) => img.size(),
        }
    }

    /// Short name of the pixel layout, e.g. `mono8` or `rgb16`.
    pub fn format_name(&self) -> &'static str {
        match self {
            GenericImage::L8(_) => "mono8",
            GenericImage::La8(_) => "mono-alpha8",
            GenericImage::Rgb8(_) => "rgb8",
            GenericImage::Rgba8(_) => "rgba8",
            GenericImage::L16(_) => "mono16",
            GenericImage::La16(_) => "mono-alpha16",
            GenericImage::Rgb16(_) => "rgb16",
            GenericImage::Rgba16(_) => "rgba16",
        }
    }
}

/// Reads an image from the given file path.
///
/// The format is guessed from the file content, not from its extension. PNG
/// files go through [`crate::png::decode_image_png`]; every other format
/// supported by the image crate (JPEG, TIFF) is decoded by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// The decoded image tagged with its pixel layout.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;

    let reader = ImageReader::new(Cursor::new(&bytes)).with_guessed_format()?;
    if reader.format() == Some(ImageFormat::Png) {
        return decode_image_png(&bytes);
    }

    let img = reader.decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        ColorType::L8 => GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?),
        ColorType::La8 => GenericImage::La8(Image::new(size, img.into_luma_alpha8().into_raw())?),
        ColorType::Rgb8 => GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?),
        ColorType::Rgba8 => GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?),
        ColorType::L16 => GenericImage::L16(Image::new(size, img.into_luma16().into_raw())?),
        ColorType::La16 => {
            GenericImage::La16(Image::new(size, img.into_luma_alpha16().into_raw())?)
        }
        ColorType::Rgb16 => GenericImage::Rgb16(Image::new(size, img.into_rgb16().into_raw())?),
        ColorType::Rgba16 => {
            GenericImage::Rgba16(Image::new(size, img.into_rgba16().into_raw())?)
        }
        other => return Err(IoError::UnsupportedImageFormat(format!("{other:?}"))),
    };

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::write_image_png_gray8;

    #[test]
    fn read_any_gray8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("IM1.png");

        let image = Image::<u8, 1>::new([2, 2].into(), vec![1, 2, 3, 4])?;
        write_image_png_gray8(&file_path, &image)?;

        let generic = read_image_any(&file_path)?;
        assert_eq!(generic.num_channels(), 1);
        assert_eq!(generic.format_name(), "mono8");
        assert!(matches!(generic, GenericImage::L8(ref img) if *img == image));

        Ok(())
    }

    #[test]
    fn read_any_png_without_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("IM1");

        let image = Image::<u8, 1>::new([3, 1].into(), vec![7, 8, 9])?;
        write_image_png_gray8(&file_path, &image)?;

        let generic = read_image_any(&file_path)?;
        assert!(matches!(generic, GenericImage::L8(ref img) if *img == image));

        Ok(())
    }

    #[test]
    fn read_any_tiff() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;

        let gray_path = tmp_dir.path().join("IM1.tif");
        let gray = vec![0u8, 64, 128, 192, 255, 1];
        image::save_buffer_with_format(
            &gray_path,
            &gray,
            3,
            2,
            image::ExtendedColorType::L8,
            ImageFormat::Tiff,
        )?;

        let generic = read_image_any(&gray_path)?;
        assert_eq!(generic.format_name(), "mono8");
        assert_eq!(generic.size().width, 3);
        assert_eq!(generic.size().height, 2);
        assert!(matches!(generic, GenericImage::L8(ref img) if img.as_slice() == gray.as_slice()));

        let rgb_path = tmp_dir.path().join("IM2.tiff");
        image::save_buffer_with_format(
            &rgb_path,
            &[10u8; 2 * 2 * 3],
            2,
            2,
            image::ExtendedColorType::Rgb8,
            ImageFormat::Tiff,
        )?;

        let generic = read_image_any(&rgb_path)?;
        assert_eq!(generic.format_name(), "rgb8");
        assert_eq!(generic.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn read_any_garbage() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("IM1.png");
        std::fs::write(&file_path, b"not an image at all")?;

        let res = read_image_any(&file_path);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));

        Ok(())
    }

    #[test]
    fn read_any_missing() {
        let res = read_image_any("missing/IM1.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
