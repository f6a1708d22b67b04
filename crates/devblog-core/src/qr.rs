//! QR code widget for the certificates section.
//!
//! Rendering is a capability: the site either has a working renderer or it
//! does not. [`resolve_qr`] is the one place that decides what to show. If
//! the renderer is missing or fails, the widget falls back to a static image
//! served by a public QR service, and the failure is only logged.

use std::fmt;

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::error::{SiteError, SiteResult};

/// Public QR image service used when local rendering is not possible.
pub const FALLBACK_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Appearance of the rendered code.
#[derive(Debug, Clone, PartialEq)]
pub struct QrOptions {
    /// Edge length in pixels
    pub size: u32,
    pub dark: String,
    pub light: String,
    /// Surround the modules with a light quiet zone
    pub quiet_zone: bool,
    pub ec_level: EcLevel,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 150,
            dark: "#000000".to_string(),
            light: "#FFFFFF".to_string(),
            quiet_zone: true,
            ec_level: EcLevel::M,
        }
    }
}

impl QrOptions {
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

/// Something that can turn text into QR code markup.
pub trait QrRenderer: Send + Sync {
    /// Render `data` as SVG markup.
    fn render(&self, data: &str, options: &QrOptions) -> SiteResult<String>;
}

/// Local SVG renderer backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgQrRenderer;

impl QrRenderer for SvgQrRenderer {
    fn render(&self, data: &str, options: &QrOptions) -> SiteResult<String> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), options.ec_level)
            .map_err(|e| SiteError::QrRender(e.to_string()))?;

        let svg_string = code
            .render()
            .min_dimensions(options.size, options.size)
            .dark_color(svg::Color(&options.dark))
            .light_color(svg::Color(&options.light))
            .quiet_zone(options.quiet_zone)
            .build();

        Ok(svg_string)
    }
}

/// Whether QR rendering is available on this page.
pub enum QrCapability {
    Available(Box<dyn QrRenderer>),
    Unavailable,
}

impl QrCapability {
    /// The built-in SVG renderer.
    pub fn svg() -> Self {
        QrCapability::Available(Box::new(SvgQrRenderer))
    }
}

impl fmt::Debug for QrCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrCapability::Available(_) => f.write_str("QrCapability::Available"),
            QrCapability::Unavailable => f.write_str("QrCapability::Unavailable"),
        }
    }
}

/// What the widget displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrImage {
    /// Inline SVG markup from the local renderer
    Svg(String),
    /// Static image URL from the fallback service
    Remote(String),
}

impl QrImage {
    pub fn is_fallback(&self) -> bool {
        matches!(self, QrImage::Remote(_))
    }
}

/// Decide what the QR widget shows for `target`.
pub fn resolve_qr(capability: &QrCapability, target: &str, options: &QrOptions) -> QrImage {
    match capability {
        QrCapability::Available(renderer) => match renderer.render(target, options) {
            Ok(svg) => QrImage::Svg(svg),
            Err(e) => {
                tracing::error!("QR code generation error: {}", e);
                QrImage::Remote(fallback_image_url(target, options.size))
            }
        },
        QrCapability::Unavailable => {
            tracing::error!("QR renderer not available, using static image");
            QrImage::Remote(fallback_image_url(target, options.size))
        }
    }
}

/// Static image URL for `target` from the fallback service.
pub fn fallback_image_url(target: &str, size: u32) -> String {
    format!(
        "{}?size={}x{}&data={}",
        FALLBACK_SERVICE,
        size,
        size,
        encode_uri_component(target)
    )
}

/// Percent-encode everything except the characters a URI component may
/// carry verbatim (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenRenderer;

    impl QrRenderer for BrokenRenderer {
        fn render(&self, _data: &str, _options: &QrOptions) -> SiteResult<String> {
            Err(SiteError::QrRender("canvas unavailable".to_string()))
        }
    }

    const CREDLY: &str = "https://www.credly.com/users/2207-nguy-n-minh-nh-t";

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            encode_uri_component(CREDLY),
            "https%3A%2F%2Fwww.credly.com%2Fusers%2F2207-nguy-n-minh-nh-t"
        );
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("(it's)!~*"), "(it's)!~*");
        assert_eq!(encode_uri_component("đ"), "%C4%91");
    }

    #[test]
    fn fallback_url_shape() {
        assert_eq!(
            fallback_image_url("x y", 150),
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=x%20y"
        );
    }

    #[test]
    fn svg_renderer_produces_svg() {
        let image = resolve_qr(&QrCapability::svg(), CREDLY, &QrOptions::default());
        match image {
            QrImage::Svg(svg) => {
                assert!(svg.contains("<svg"));
                assert!(svg.contains("#000000"));
            }
            QrImage::Remote(url) => panic!("unexpected fallback: {}", url),
        }
    }

    #[test]
    fn unavailable_renderer_falls_back() {
        let image = resolve_qr(&QrCapability::Unavailable, CREDLY, &QrOptions::default());
        assert!(image.is_fallback());
        assert_eq!(image, QrImage::Remote(fallback_image_url(CREDLY, 150)));
    }

    #[test]
    fn failing_renderer_falls_back() {
        let capability = QrCapability::Available(Box::new(BrokenRenderer));
        let image = resolve_qr(&capability, CREDLY, &QrOptions::with_size(200));
        assert_eq!(image, QrImage::Remote(fallback_image_url(CREDLY, 200)));
    }

    #[test]
    fn oversized_data_fails_to_render() {
        let data = "x".repeat(5000);
        let result = SvgQrRenderer.render(&data, &QrOptions::default());
        assert!(matches!(result, Err(SiteError::QrRender(_))));
    }
}
