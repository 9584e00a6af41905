use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::css_url::SVG_DATA_URI_PREFIX;
use crate::error::DecodeError;

static BACKGROUND_IMAGE_PREFIX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^background-image:\s*url\(").unwrap());

static DATA_URI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    r#"^["']?{}"#,
    regex::escape(SVG_DATA_URI_PREFIX)
  ))
  .unwrap()
});

static URL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["']*\);*$"#).unwrap());

/// Recovers SVG markup from an encoded data URI payload.
///
/// Accepts the bare payload as well as any part of the surrounding
/// `background-image: url("data:image/svg+xml,...");` declaration. The envelope is
/// stripped, then the remainder is percent-decoded.
#[tracing::instrument(level = "trace", skip_all, fields(len = data.len()))]
pub fn decode_svg(data: &str) -> Result<String, DecodeError> {
  let value = data.trim();
  let value = BACKGROUND_IMAGE_PREFIX.replace(value, "");
  let value = DATA_URI_PREFIX.replace(&value, "");
  let value = URL_SUFFIX.replace(&value, "");

  percent_decode(&value).map_err(|error| {
    tracing::debug!(%error, "Failed to decode SVG data URI");
    error
  })
}

fn percent_decode(payload: &str) -> Result<String, DecodeError> {
  // percent_decode_str passes invalid escapes through untouched
  let bytes = payload.as_bytes();
  for (offset, _) in payload.match_indices('%') {
    let is_valid = bytes
      .get(offset + 1..offset + 3)
      .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));

    if !is_valid {
      return Err(DecodeError::MalformedEscape {
        offset,
        sequence: payload[offset..].chars().take(3).collect(),
      });
    }
  }

  let decoded = percent_decode_str(payload).decode_utf8()?;

  Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use tracing_test::traced_test;

  use super::*;

  const SVG: &str = "<svg></svg>";

  #[test]
  fn decodes_bare_payload() {
    assert_eq!(decode_svg("%3Csvg%3E%3C/svg%3E"), Ok(String::from(SVG)));
  }

  #[test]
  fn decodes_data_uri() {
    assert_eq!(
      decode_svg("data:image/svg+xml,%3Csvg%3E%3C/svg%3E"),
      Ok(String::from(SVG))
    );
  }

  #[test]
  fn decodes_quoted_data_uri() {
    assert_eq!(
      decode_svg(r#""data:image/svg+xml,%3Csvg%3E%3C/svg%3E");"#),
      Ok(String::from(SVG))
    );
  }

  #[test]
  fn decodes_background_image_declaration() {
    assert_eq!(
      decode_svg("background-image: url('data:image/svg+xml,%3Csvg%3E%3C/svg%3E')"),
      Ok(String::from(SVG))
    );
    assert_eq!(
      decode_svg(r#"  background-image:url("data:image/svg+xml,%3Csvg%3E%3C/svg%3E");  "#),
      Ok(String::from(SVG))
    );
  }

  #[test]
  fn decodes_unquoted_url() {
    assert_eq!(
      decode_svg("background-image:   url(data:image/svg+xml,%3Csvg%3E%3C/svg%3E);;"),
      Ok(String::from(SVG))
    );
  }

  #[test]
  fn decodes_spaces_and_multibyte_characters() {
    assert_eq!(
      decode_svg("%3Ctext%3Eh%C3%A9llo%20%E2%9C%93%3C/text%3E"),
      Ok(String::from("<text>héllo ✓</text>"))
    );
  }

  #[test]
  fn decodes_empty_input() {
    assert_eq!(decode_svg(""), Ok(String::new()));
    assert_eq!(decode_svg("data:image/svg+xml,"), Ok(String::new()));
  }

  #[test]
  fn only_strips_envelope_at_the_edges() {
    assert_eq!(
      decode_svg("%3Ctext%3Edata:image/svg+xml,%3C/text%3E"),
      Ok(String::from("<text>data:image/svg+xml,</text>"))
    );
  }

  #[test]
  fn fails_on_trailing_percent_sign() {
    assert_eq!(
      decode_svg("data:image/svg+xml,%3Csvg%"),
      Err(DecodeError::MalformedEscape {
        offset: 6,
        sequence: String::from("%"),
      })
    );
  }

  #[test]
  fn fails_on_non_hex_escape() {
    assert_eq!(
      decode_svg("%zz%3C"),
      Err(DecodeError::MalformedEscape {
        offset: 0,
        sequence: String::from("%zz"),
      })
    );
    assert_eq!(
      decode_svg("%%41"),
      Err(DecodeError::MalformedEscape {
        offset: 0,
        sequence: String::from("%%4"),
      })
    );
  }

  #[test]
  fn fails_on_invalid_utf8() {
    assert!(matches!(
      decode_svg("%C3%28"),
      Err(DecodeError::InvalidUtf8(_))
    ));
  }

  #[test]
  #[traced_test]
  fn logs_decode_failures() {
    assert!(decode_svg("%3Csvg%").is_err());
    assert!(logs_contain("Failed to decode SVG data URI"));
  }
}
