//! Inlines SVG images into stylesheets as `data:image/svg+xml` URIs and recovers the
//! markup from such URIs.
//!
//! The encoding is the compact, mostly readable form used for CSS backgrounds rather
//! than base64: only the characters that break a `url()` token are percent-encoded.
//!
//! # Example
//!
//! ```rust
//! use svg_data_uri::{decode_svg, encode_svg, to_background_image};
//!
//! let svg = r#"<svg viewBox="0 0 1 1"><rect width="1" height="1"/></svg>"#;
//!
//! let encoded = encode_svg(svg);
//! assert!(encoded.starts_with("%3Csvg%20xmlns="));
//!
//! let declaration = to_background_image(svg);
//! assert_eq!(
//!   decode_svg(&declaration).unwrap(),
//!   r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1"><rect width="1" height="1"/></svg>"#
//! );
//! ```
mod css_url;
mod decode;
mod encode;
mod error;
mod namespace;

pub use css_url::{to_background_image, to_css_url, SVG_DATA_URI_PREFIX};
pub use decode::decode_svg;
pub use encode::encode_svg;
pub use error::DecodeError;
