use crate::Result;
use std::sync::LazyLock;
use url::{ParseError, Url};

/// Base used only to inspect the query of a relative reference
static PLACEHOLDER_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("placeholder base is a valid URL"));

/// Appends an already encoded `params` string to `url`.
///
/// The separator is `?` when `url` has no query (or an empty one) and `&` otherwise.
/// An empty `url` gives an empty string and empty `params` leave `url` unchanged.
/// `params` is copied verbatim, HTML entities such as `&amp;` are not unescaped.
pub fn append_query_params(url: &str, params: &str) -> Result<String> {
    if url.is_empty() {
        return Ok(String::new());
    }
    if params.is_empty() {
        return Ok(url.to_owned());
    }

    let parsed = match Url::parse(url) {
        Err(ParseError::RelativeUrlWithoutBase) => PLACEHOLDER_BASE.join(url),
        parsed => parsed,
    }?;
    let separator = if parsed.query().is_none_or(str::is_empty) { '?' } else { '&' };

    let mut output = String::with_capacity(url.len() + 1 + params.len());
    output.push_str(url);
    output.push(separator);
    output.push_str(params);
    Ok(output)
}
