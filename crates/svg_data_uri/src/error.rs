use thiserror::Error;

/// A percent-encoded SVG payload could not be decoded because of a malformed
/// encoding.
///
/// Every variant means the input was malformed; decoding never partially succeeds.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
  /// A `%` was not followed by two hexadecimal digits. `offset` is the byte offset of
  /// the `%` within the payload left after the CSS envelope was stripped.
  #[error("Malformed percent-encoding at offset {offset}: {sequence:?}")]
  MalformedEscape { offset: usize, sequence: String },

  #[error("Decoded SVG is not valid UTF-8: {0}")]
  InvalidUtf8(#[from] std::str::Utf8Error),
}
