//! Background image embedding

use crate::{PdfError, Result};
use image::{DynamicImage, ImageReader};
use lopdf::{Dictionary, Stream};
use std::io::Cursor;

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// Image XObject for PDF embedding
///
/// JPEG data is embedded as-is with DCTDecode; PNG data is decoded, alpha is
/// blended against white, and the samples are re-compressed with FlateDecode.
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color space ("DeviceRGB", "DeviceGray")
    pub color_space: String,
    /// PDF filter ("DCTDecode" for JPEG, "FlateDecode" for PNG)
    pub filter: String,
    /// Compressed sample data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Create an XObject from raw image bytes, detecting the format.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if is_jpeg(data) {
            Self::from_jpeg(data)
        } else if is_png(data) {
            Self::from_png(data)
        } else {
            Err(PdfError::ImageError("unsupported image format".to_string()))
        }
    }

    /// Create an XObject from JPEG data (embedded directly, DCTDecode).
    pub fn from_jpeg(data: &[u8]) -> Result<Self> {
        let info = jpeg_info(data)?;

        let color_space = if info.num_components == 1 {
            "DeviceGray".to_string()
        } else {
            "DeviceRGB".to_string()
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            color_space,
            filter: "DCTDecode".to_string(),
            data: data.to_vec(),
        })
    }

    /// Create an XObject from PNG data (decoded, flattened, FlateDecode).
    pub fn from_png(data: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        let image = reader.decode()?;
        let (width, height) = (image.width(), image.height());

        let (raw, color_space) = match image {
            DynamicImage::ImageLuma8(gray) => (gray.into_raw(), "DeviceGray".to_string()),
            DynamicImage::ImageLumaA8(la) => {
                let mut gray = Vec::with_capacity((width * height) as usize);
                for pixel in la.pixels() {
                    let alpha = pixel[1] as f32 / 255.0;
                    gray.push((pixel[0] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
                }
                (gray, "DeviceGray".to_string())
            }
            DynamicImage::ImageRgba8(rgba) => {
                let mut rgb = Vec::with_capacity((width * height * 3) as usize);
                for pixel in rgba.pixels() {
                    let alpha = pixel[3] as f32 / 255.0;
                    for channel in 0..3 {
                        rgb.push((pixel[channel] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
                    }
                }
                (rgb, "DeviceRGB".to_string())
            }
            other => (other.to_rgb8().into_raw(), "DeviceRGB".to_string()),
        };

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        std::io::Write::write_all(&mut encoder, &raw)?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            color_space,
            filter: "FlateDecode".to_string(),
            data,
        })
    }

    /// Convert to a lopdf Stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();

        dict.set("Type", lopdf::Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", lopdf::Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set(
            "ColorSpace",
            lopdf::Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", 8);
        dict.set(
            "Filter",
            lopdf::Object::Name(self.filter.as_bytes().to_vec()),
        );
        dict.set("Length", self.data.len() as i64);

        Stream::new(dict, self.data.clone())
    }
}

fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF
}

fn is_png(data: &[u8]) -> bool {
    data.len() >= 8 && data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]
}

struct JpegInfo {
    width: u32,
    height: u32,
    num_components: u8,
}

/// Parse JPEG dimensions and component count from the SOF marker.
fn jpeg_info(data: &[u8]) -> Result<JpegInfo> {
    let mut i = 2;
    while i + 10 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        // SOF0..SOF15, excluding DHT/JPG/DAC
        if (0xC0..=0xCF).contains(&marker) && marker != 0xC4 && marker != 0xC8 && marker != 0xCC {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            return Ok(JpegInfo {
                width,
                height,
                num_components: data[i + 9],
            });
        }

        if i + 4 < data.len() {
            let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
            if length < 2 {
                break;
            }
            i += 2 + length;
        } else {
            break;
        }
    }

    Err(PdfError::ImageError(
        "could not parse JPEG header".to_string(),
    ))
}

/// Generate operators to draw an image stretched over a rectangle
///
/// # Arguments
/// * `image_name` - Image resource name (e.g., "Im1")
/// * `x`, `y` - Lower-left corner in PDF coordinates
/// * `width`, `height` - Display size in points
pub fn generate_image_operators(
    image_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{image_name} Do\nQ\n").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_jpeg() -> Vec<u8> {
        vec![
            0xFF, 0xD8, // SOI
            0xFF, 0xC0, // SOF0
            0x00, 0x11, // length
            0x08, // precision
            0x00, 0x64, // height 100
            0x00, 0xC8, // width 200
            0x03, // components
            0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01, 0xFF, 0xD9,
        ]
    }

    #[test]
    fn test_from_jpeg() {
        let xobject = ImageXObject::from_jpeg(&minimal_jpeg()).unwrap();
        assert_eq!(xobject.width, 200);
        assert_eq!(xobject.height, 100);
        assert_eq!(xobject.color_space, "DeviceRGB");
        assert_eq!(xobject.filter, "DCTDecode");
    }

    #[test]
    fn test_from_bytes_detects_jpeg() {
        let xobject = ImageXObject::from_bytes(&minimal_jpeg()).unwrap();
        assert_eq!(xobject.filter, "DCTDecode");
    }

    #[test]
    fn test_from_bytes_rejects_unknown() {
        assert!(ImageXObject::from_bytes(&[0u8; 16]).is_err());
    }

    #[test]
    fn test_from_png_roundtrip() {
        // Encode a tiny RGB image to PNG with the image crate, then embed it
        let img = image::RgbImage::from_pixel(4, 2, image::Rgb([255u8, 0, 0]));
        let mut png = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let xobject = ImageXObject::from_png(&png).unwrap();
        assert_eq!(xobject.width, 4);
        assert_eq!(xobject.height, 2);
        assert_eq!(xobject.filter, "FlateDecode");
        assert_eq!(xobject.color_space, "DeviceRGB");
    }

    #[test]
    fn test_to_pdf_stream() {
        let xobject = ImageXObject {
            width: 100,
            height: 50,
            color_space: "DeviceRGB".to_string(),
            filter: "DCTDecode".to_string(),
            data: vec![1, 2, 3, 4, 5],
        };

        let stream = xobject.to_pdf_stream();
        let dict = stream.dict;

        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Image");
        assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 100);
        assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 50);
        assert_eq!(
            dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"DCTDecode"
        );
        assert_eq!(stream.content, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_generate_image_operators() {
        let ops = generate_image_operators("Im1", 0.0, 0.0, 595.28, 841.89);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("595.28 0 0 841.89 0 0 cm"));
        assert!(ops_str.contains("/Im1 Do"));
    }

    #[test]
    fn test_jpeg_info_invalid() {
        assert!(jpeg_info(&[0xFF, 0xD8, 0xFF, 0x00, 0, 0, 0, 0]).is_err());
        assert!(jpeg_info(&[0xFF, 0xD8]).is_err());
    }
}
