//! `texfont-raster` loads the grid raster a font is drawn on and exposes it
//! as a [RasterSource].
//!
//! Only the font's foreground counts as ink: palette index 1 for indexed
//! and single-channel images, pure white for RGB images. Guide lines, baseline
//! markers, grid lines and the background all read as
//! [Pixel::Background], whatever their color.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageError, ImageFormat, RgbImage};
use texfont_core::{Pixel, RasterSource};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const BMP_SIGNATURE: &[u8] = b"BM";

/// Errors raised while loading a raster.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("raster not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported pixel format {color} in {}", path.display())]
    UnsupportedPixelFormat { path: PathBuf, color: String },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Png {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },

    #[error("failed to decode {}: {reason}", path.display())]
    Bmp { path: PathBuf, reason: String },
}

#[derive(Debug, Clone)]
enum Pixels {
    /// One palette index per pixel.
    Indexed(GrayImage),
    Rgb(RgbImage),
}

/// An immutable, decoded font raster.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: Pixels,
}

impl RasterImage {
    /// Palette index of the foreground in single-channel rasters.
    pub const INK_INDEX: u8 = 1;
    /// Foreground color in RGB rasters.
    pub const INK_RGB: [u8; 3] = [255, 255, 255];

    /// Load and decode the raster at `path`.
    ///
    /// Palette-based PNG and BMP files keep their raw palette indices, so the
    /// palette colors never affect classification. Anything else is decoded
    /// to pixels and must be single-channel or RGB.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => RasterError::Missing {
                path: path.to_owned(),
            },
            _ => RasterError::Io {
                path: path.to_owned(),
                source,
            },
        })?;

        let raster = Self::decode(path, &bytes)?;

        log::debug!(
            "Loaded raster {} ({}x{}, {})",
            path.display(),
            raster.width(),
            raster.height(),
            if raster.is_indexed() { "indexed" } else { "rgb" }
        );

        Ok(raster)
    }

    fn decode(path: &Path, bytes: &[u8]) -> Result<Self, RasterError> {
        let indices = if bytes.starts_with(PNG_SIGNATURE) {
            png_indices(path, bytes)?
        } else if bytes.starts_with(BMP_SIGNATURE) {
            bmp_indices(bytes).map_err(|reason| RasterError::Bmp {
                path: path.to_owned(),
                reason,
            })?
        } else {
            None
        };

        if let Some(buffer) = indices {
            return Ok(Self {
                pixels: Pixels::Indexed(buffer),
            });
        }

        let format = if bytes.starts_with(PNG_SIGNATURE) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(BMP_SIGNATURE) {
            Some(ImageFormat::Bmp)
        } else {
            None
        };

        let decoded = match format {
            Some(format) => image::load_from_memory_with_format(bytes, format),
            None => image::load_from_memory(bytes),
        };

        let image = decoded.map_err(|source| RasterError::Decode {
            path: path.to_owned(),
            source,
        })?;

        Self::from_image(image).map_err(|image| RasterError::UnsupportedPixelFormat {
            path: path.to_owned(),
            color: format!("{:?}", image.color()),
        })
    }

    /// Wrap an already decoded image, handing it back if its pixel layout is
    /// neither single-channel nor RGB.
    ///
    /// Single-channel samples are compared against [Self::INK_INDEX] as-is.
    pub fn from_image(image: DynamicImage) -> Result<Self, DynamicImage> {
        let pixels = match image {
            DynamicImage::ImageLuma8(buffer) => Pixels::Indexed(buffer),
            DynamicImage::ImageRgb8(buffer) => Pixels::Rgb(buffer),
            other => return Err(other),
        };

        Ok(Self { pixels })
    }

    /// Build a single-channel raster from row-major palette indices.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` bytes.
    pub fn from_indexed(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        GrayImage::from_raw(width, height, data).map(|buffer| Self {
            pixels: Pixels::Indexed(buffer),
        })
    }

    /// Build an RGB raster from row-major RGB triples.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height * 3` bytes.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, data).map(|buffer| Self {
            pixels: Pixels::Rgb(buffer),
        })
    }

    /// Are pixels classified by palette index rather than by color?
    pub fn is_indexed(&self) -> bool {
        matches!(self.pixels, Pixels::Indexed(_))
    }
}

/// Raw palette indices of an indexed PNG, or `None` for any other color type.
fn png_indices(path: &Path, bytes: &[u8]) -> Result<Option<GrayImage>, RasterError> {
    let png_error = |source: png::DecodingError| RasterError::Png {
        path: path.to_owned(),
        source,
    };

    let mut decoder = png::Decoder::new(bytes);
    // No palette expansion, no tRNS alpha, no bit depth scaling.
    decoder.set_transformations(png::Transformations::IDENTITY);

    let mut reader = decoder.read_info().map_err(png_error)?;
    if reader.info().color_type != png::ColorType::Indexed {
        return Ok(None);
    }

    let mut data = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data).map_err(png_error)?;
    let bits = frame.bit_depth as u8;

    unpack_indices(frame.width, frame.height, bits, frame.line_size, &data)
        .map(Some)
        .ok_or_else(|| RasterError::UnsupportedPixelFormat {
            path: path.to_owned(),
            color: format!("Indexed{}", bits),
        })
}

/// Raw palette indices of a 1, 4 or 8 bit BMP, or `None` for deeper ones.
fn bmp_indices(bytes: &[u8]) -> Result<Option<GrayImage>, String> {
    let bmp = tinybmp::RawBmp::from_slice(bytes).map_err(|err| format!("{:?}", err))?;
    let header = bmp.header();

    match header.bpp {
        tinybmp::Bpp::Bits1 | tinybmp::Bpp::Bits4 | tinybmp::Bpp::Bits8 => {}
        _ => return Ok(None),
    }

    let mut buffer = GrayImage::new(header.image_size.width, header.image_size.height);

    for pixel in bmp.pixels() {
        let (x, y) = (pixel.position.x, pixel.position.y);
        if x < 0 || y < 0 {
            continue;
        }

        let (x, y) = (x as u32, y as u32);
        if x < buffer.width() && y < buffer.height() {
            // Indices above 255 cannot occur at 8 bits per pixel or less.
            buffer.put_pixel(x, y, image::Luma([pixel.color as u8]));
        }
    }

    Ok(Some(buffer))
}

/// Split packed rows of `bits`-wide samples into one byte per pixel.
fn unpack_indices(
    width: u32,
    height: u32,
    bits: u8,
    stride: usize,
    data: &[u8],
) -> Option<GrayImage> {
    let bits = usize::from(bits);
    if stride == 0 || !matches!(bits, 1 | 2 | 4 | 8) {
        return None;
    }

    let mask = (1u16 << bits) - 1;
    let mut indices = Vec::with_capacity(width as usize * height as usize);

    for row in data.chunks(stride).take(height as usize) {
        for x in 0..width as usize {
            let bit = x * bits;
            let byte = u16::from(*row.get(bit / 8)?);
            let shift = 8 - bits - bit % 8;
            indices.push(((byte >> shift) & mask) as u8);
        }
    }

    GrayImage::from_raw(width, height, indices)
}

impl RasterSource for RasterImage {
    fn width(&self) -> u32 {
        match &self.pixels {
            Pixels::Indexed(buffer) => buffer.width(),
            Pixels::Rgb(buffer) => buffer.width(),
        }
    }

    fn height(&self) -> u32 {
        match &self.pixels {
            Pixels::Indexed(buffer) => buffer.height(),
            Pixels::Rgb(buffer) => buffer.height(),
        }
    }

    fn pixel_at(&self, x: i64, y: i64) -> Pixel {
        if !self.contains(x, y) {
            return Pixel::Background;
        }

        let (x, y) = (x as u32, y as u32);

        let ink = match &self.pixels {
            Pixels::Indexed(buffer) => buffer.get_pixel(x, y).0[0] == Self::INK_INDEX,
            Pixels::Rgb(buffer) => buffer.get_pixel(x, y).0 == Self::INK_RGB,
        };

        if ink { Pixel::Ink } else { Pixel::Background }
    }
}
