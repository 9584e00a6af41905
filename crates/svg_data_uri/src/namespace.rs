use std::borrow::Cow;

pub(crate) const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const SVG_OPEN_TAG: &str = "<svg";
const SVG_OPEN_TAG_WITH_NAMESPACE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg""#;

/// Declares the SVG namespace on every `<svg` tag, unless the namespace URI already
/// appears somewhere in the markup.
///
/// The presence check looks at the whole document rather than the tag itself, so a
/// namespace URI inside a comment or an attribute value also suppresses the rewrite.
pub(crate) fn add_namespace(data: &str) -> Cow<'_, str> {
  if data.contains(SVG_NAMESPACE) || !data.contains(SVG_OPEN_TAG) {
    return Cow::Borrowed(data);
  }

  tracing::trace!(
    tags = data.matches(SVG_OPEN_TAG).count(),
    "Adding SVG namespace"
  );

  Cow::Owned(data.replace(SVG_OPEN_TAG, SVG_OPEN_TAG_WITH_NAMESPACE))
}
