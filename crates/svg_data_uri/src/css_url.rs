use crate::encode::encode_svg;

/// The scheme and media type every encoded SVG payload is prefixed with
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml,";

/// Builds a CSS `url()` value with the SVG inlined as a data URI.
///
/// The value is single-quoted. Encoding turns every single quote of the markup into a
/// double quote, so the payload cannot close the string early.
///
/// [`decode_svg`](crate::decode_svg) does not strip a bare `url(` prefix; pass it the
/// output of [`to_background_image`] instead.
pub fn to_css_url(svg: &str) -> String {
  format!("url('{}{}')", SVG_DATA_URI_PREFIX, encode_svg(svg))
}

/// Builds a complete `background-image` declaration for the SVG.
pub fn to_background_image(svg: &str) -> String {
  format!("background-image: {};", to_css_url(svg))
}
