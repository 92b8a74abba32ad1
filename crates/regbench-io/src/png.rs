use std::{fs, path::Path};

use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use regbench_image::{Image, ImageSize};

use crate::{
    conv_utils::{convert_buf_u8_u16, drop_alpha_channel},
    error::IoError,
    functional::GenericImage,
};

/// Read a PNG image keeping its native channel layout.
///
/// Palette and sub-byte images are expanded to 8 bits per sample.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// The decoded image tagged with its pixel layout.
pub fn read_image_png(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    match file_path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("png") => {}
        _ => return Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }

    let bytes = fs::read(file_path)?;
    decode_image_png(&bytes)
}

/// Read a PNG image with a single channel (mono8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
///
/// # Errors
///
/// If the file is not an 8-bit grayscale PNG.
pub fn read_image_png_mono8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    match read_image_png(file_path)? {
        GenericImage::L8(image) => Ok(image),
        other => Err(IoError::UnexpectedImageFormat {
            expected: "mono8",
            found: other.format_name(),
        }),
    }
}

/// Decodes a PNG image from raw bytes keeping its native channel layout.
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the png file
pub fn decode_image_png(bytes: &[u8]) -> Result<GenericImage, IoError> {
    let mut decoder = Decoder::new(bytes);
    decoder.set_transformations(Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    // color type as stored in the file, before EXPAND
    let stored_color_type = reader.info().color_type;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    // a tRNS chunk on a grayscale file is expanded into an alpha channel, drop it again
    let color_type = match (stored_color_type, info.color_type) {
        (ColorType::Grayscale, ColorType::GrayscaleAlpha) => {
            let bytes_per_sample = match info.bit_depth {
                BitDepth::Sixteen => 2,
                _ => 1,
            };
            buf = drop_alpha_channel(&buf, 1, bytes_per_sample);
            ColorType::Grayscale
        }
        (_, color_type) => color_type,
    };

    let image = match (color_type, info.bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => GenericImage::L8(Image::new(size, buf)?),
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => GenericImage::La8(Image::new(size, buf)?),
        (ColorType::Rgb, BitDepth::Eight) => GenericImage::Rgb8(Image::new(size, buf)?),
        (ColorType::Rgba, BitDepth::Eight) => GenericImage::Rgba8(Image::new(size, buf)?),
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            GenericImage::L16(Image::new(size, convert_buf_u8_u16(buf))?)
        }
        (ColorType::GrayscaleAlpha, BitDepth::Sixteen) => {
            GenericImage::La16(Image::new(size, convert_buf_u8_u16(buf))?)
        }
        (ColorType::Rgb, BitDepth::Sixteen) => {
            GenericImage::Rgb16(Image::new(size, convert_buf_u8_u16(buf))?)
        }
        (ColorType::Rgba, BitDepth::Sixteen) => {
            GenericImage::Rgba16(Image::new(size, convert_buf_u8_u16(buf))?)
        }
        (color_type, bit_depth) => {
            return Err(IoError::PngDecodeError(format!(
                "unsupported color type {color_type:?} with bit depth {bit_depth:?}"
            )))
        }
    };

    Ok(image)
}

/// Encodes the given _(grayscale 8-bit)_ image as PNG bytes.
///
/// Encoding the same image twice yields the same bytes.
///
/// # Arguments
///
/// - `image` - The image to encode.
pub fn encode_image_png_gray8(image: &Image<u8, 1>) -> Result<Vec<u8>, IoError> {
    encode_png_impl(
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Grayscale,
    )
}

/// Writes the given PNG _(grayscale 8-bit)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG image data.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    fs::write(file_path, encode_image_png_gray8(image)?)?;
    Ok(())
}

/// Writes the given PNG _(rgb8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG image data.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    let bytes = encode_png_impl(
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgb,
    )?;
    fs::write(file_path, bytes)?;
    Ok(())
}

fn encode_png_impl(
    image_data: &[u8],
    image_size: ImageSize,
    // Make sure you set `depth` correctly
    depth: BitDepth,
    color_type: ColorType,
) -> Result<Vec<u8>, IoError> {
    let mut bytes = Vec::new();

    {
        let mut encoder = Encoder::new(
            &mut bytes,
            image_size.width as u32,
            image_size.height as u32,
        );
        encoder.set_color(color_type);
        encoder.set_depth(depth);

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .write_image_data(image_data)
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    }

    Ok(bytes)
}
