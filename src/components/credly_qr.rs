//! Credly QR Code Component
//!
//! QR code linking to the Credly certificates profile. Falls back to a
//! static image from a public QR service when local rendering fails.

use devblog_core::{resolve_qr, QrCapability, QrImage, QrOptions};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CredlyQrProps {
    /// URL encoded in the code and opened on click
    pub target: String,
    /// Edge length in pixels
    #[props(default = 150)]
    pub size: u32,
}

#[component]
pub fn CredlyQr(props: CredlyQrProps) -> Element {
    let href = props.target.clone();
    let image = use_memo(move || {
        resolve_qr(
            &QrCapability::svg(),
            &props.target,
            &QrOptions::with_size(props.size),
        )
    });

    rsx! {
        a {
            class: "qr-wrapper",
            href: "{href}",
            target: "_blank",
            title: "Click để mở link Credly",
            {match image() {
                QrImage::Svg(svg) => rsx! {
                    div { class: "qr-code", dangerous_inner_html: "{svg}" }
                },
                QrImage::Remote(url) => rsx! {
                    img {
                        class: "qr-fallback",
                        src: "{url}",
                        alt: "QR Code - Credly Certificates",
                        width: "{props.size}",
                        height: "{props.size}",
                    }
                },
            }}
        }
        p { class: "qr-caption", "Quét mã để xem chứng chỉ" }
    }
}
