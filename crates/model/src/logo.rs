//! Uploaded logo images.
//!
//! A logo travels as a self-contained `data:<mime>;base64,<bytes>` URI so the
//! preview and the export see exactly the same image.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::DynamicImage;
use qreatify_common::error::{QreatifyError, QreatifyResult};

/// An uploaded logo, encoded as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoData {
    data_uri: String,
    byte_len: usize,
}

impl LogoData {
    /// Wrap raw file bytes. Fails when the bytes are not a recognized
    /// image format.
    pub fn from_bytes(bytes: &[u8]) -> QreatifyResult<Self> {
        let format = image::guess_format(bytes)
            .map_err(|_| QreatifyError::invalid_logo("not a recognized image format"))?;
        let mime = format.to_mime_type();

        Ok(Self {
            data_uri: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
            byte_len: bytes.len(),
        })
    }

    /// Parse an existing data URI.
    pub fn parse(data_uri: &str) -> QreatifyResult<Self> {
        let bytes = decode_data_uri(data_uri)?;
        Ok(Self {
            data_uri: data_uri.to_string(),
            byte_len: bytes.len(),
        })
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Size of the original file in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// MIME type recorded in the URI header.
    pub fn mime_type(&self) -> &str {
        self.data_uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("application/octet-stream")
    }

    /// The original file bytes.
    pub fn bytes(&self) -> QreatifyResult<Vec<u8>> {
        decode_data_uri(&self.data_uri)
    }

    /// Decode into pixels.
    pub fn decode(&self) -> QreatifyResult<DynamicImage> {
        let bytes = self.bytes()?;
        image::load_from_memory(&bytes)
            .map_err(|e| QreatifyError::invalid_logo(format!("failed to decode image: {e}")))
    }
}

fn decode_data_uri(data_uri: &str) -> QreatifyResult<Vec<u8>> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| QreatifyError::invalid_logo("missing data: scheme"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| QreatifyError::invalid_logo("malformed data URI"))?;
    if !header.ends_with(";base64") {
        return Err(QreatifyError::invalid_logo("data URI is not base64 encoded"));
    }
    STANDARD
        .decode(payload)
        .map_err(|e| QreatifyError::invalid_logo(format!("invalid base64 payload: {e}")))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn png_becomes_png_data_uri() {
        let bytes = png_bytes();
        let logo = LogoData::from_bytes(&bytes).unwrap();
        assert!(logo.data_uri().starts_with("data:image/png;base64,"));
        assert_eq!(logo.mime_type(), "image/png");
        assert_eq!(logo.byte_len(), bytes.len());
        assert_eq!(logo.bytes().unwrap(), bytes);
    }

    #[test]
    fn decode_recovers_pixels() {
        let logo = LogoData::from_bytes(&png_bytes()).unwrap();
        let img = logo.decode().unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn unknown_bytes_are_rejected() {
        let err = LogoData::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, QreatifyError::InvalidLogo { .. }));
    }

    #[test]
    fn parse_round_trips_uri() {
        let logo = LogoData::from_bytes(&png_bytes()).unwrap();
        let parsed = LogoData::parse(logo.data_uri()).unwrap();
        assert_eq!(parsed, logo);
    }

    #[test]
    fn parse_rejects_malformed_uris() {
        assert!(LogoData::parse("image/png;base64,AAAA").is_err());
        assert!(LogoData::parse("data:image/png;base64").is_err());
        assert!(LogoData::parse("data:text/plain,hello").is_err());
        assert!(LogoData::parse("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn truncated_image_fails_to_decode() {
        let mut bytes = png_bytes();
        bytes.truncate(20);
        let logo = LogoData::from_bytes(&bytes).unwrap();
        assert!(matches!(
            logo.decode(),
            Err(QreatifyError::InvalidLogo { .. })
        ));
    }
}
