use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::{Captures, Regex};

use crate::namespace::add_namespace;

static WHITESPACE_BETWEEN_TAGS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r">\s+<").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Characters that cannot appear raw inside a CSS `url()` token
static UNSAFE_CHARACTERS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[\r\n%#()<>?\[\\\]^`{|}]").unwrap());

/// Encodes SVG markup so it can be used as the payload of a
/// `url(data:image/svg+xml,...)` value in a stylesheet.
///
/// The steps run in a fixed order:
///
/// 1. the SVG namespace is declared on `<svg` tags if the document lacks it
/// 2. single quotes become double quotes
/// 3. whitespace between tags is removed
/// 4. remaining whitespace runs collapse to a single space
/// 5. `\r`, `\n`, `%`, `#`, `(`, `)`, `<`, `>`, `?`, `[`, `\`, `]`, `^`, `` ` ``,
///    `{`, `|` and `}` are percent-encoded
/// 6. spaces become `%20`
///
/// Every other character, including non-ASCII text, is kept as is. Encoding an already
/// encoded payload escapes its `%` signs again.
#[tracing::instrument(level = "trace", skip_all, fields(len = data.len()))]
pub fn encode_svg(data: &str) -> String {
  let data = add_namespace(data);
  let data = data.replace('\'', "\"");
  let data = WHITESPACE_BETWEEN_TAGS.replace_all(&data, "><");
  let data = WHITESPACE_RUN.replace_all(&data, " ");
  let data = UNSAFE_CHARACTERS.replace_all(&data, |captures: &Captures<'_>| {
    utf8_percent_encode(&captures[0], NON_ALPHANUMERIC).to_string()
  });

  data.replace(' ', "%20")
}
