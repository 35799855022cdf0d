mod authority;

use authority::scan_authority;

use crate::compat::{Cow, String};
use crate::error::Result;
use crate::helpers::split_at_byte;
use crate::scheme::{find_scheme_end, get_scheme_type};
use crate::url::Url;

/// Parse a raw URL string into its components.
///
/// Parsing is best-effort: no component is validated, and everything after
/// the authority is split on the first `#` and then the first `?`.
///
/// # Errors
///
/// Returns `ParseError::MissingScheme` if the input starts with `:`.
///
/// # Examples
///
/// ```
/// let url = rawurl::parse("HTTP://user@example.com:8080/a?b#c")?;
/// assert_eq!(url.scheme, "http");
/// assert_eq!(url.host, "example.com");
/// assert_eq!(url.port, "8080");
/// assert_eq!(url.to_string(), "http://user@example.com:8080/a?b#c");
/// # Ok::<(), rawurl::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<Url> {
    let mut url = Url::default();
    let mut rest = input;

    if let Some(end) = find_scheme_end(input)? {
        url.scheme = input[..end].to_ascii_lowercase();
        rest = &input[end + 1..];
    }
    let scheme_type = get_scheme_type(&url.scheme);
    let hostless = scheme_type.is_hostless();

    if !hostless {
        if let Some(after) = rest.strip_prefix("//") {
            url.slashes = true;
            rest = after;
        }
    }

    // Schemes outside the slashed set carry an authority without `//`,
    // and a leading bracket can only open an IPv6 literal
    let has_authority = !hostless
        && (url.slashes
            || (!url.scheme.is_empty() && !scheme_type.is_slashed())
            || (url.scheme.is_empty() && rest.starts_with('[')));

    let tail = if has_authority {
        let authority = scan_authority(rest);
        url.auth = String::from(authority.auth);
        url.host = String::from(authority.host);
        url.port = String::from(authority.port);
        url.ipv6 = authority.ipv6;
        authority.rest
    } else {
        Cow::Borrowed(rest)
    };

    let (rest, fragment) = split_at_byte(&tail, b'#');
    let (path, query) = split_at_byte(rest, b'?');
    url.path = String::from(path);
    url.raw_query = String::from(query);
    url.fragment = String::from(fragment);

    Ok(url)
}
