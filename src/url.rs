use crate::checkers::parse_port;
use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;

/// A URL split into its raw components.
///
/// Fields hold the input's bytes verbatim apart from the scheme, which is
/// lower-cased; nothing is percent-decoded. Fields may be reassigned freely
/// and the record re-serialized.
///
/// # Examples
///
/// ```
/// use rawurl::Url;
///
/// let mut url = Url::parse("https://example.com:8443/search?q=rust#top")?;
/// assert_eq!(url.port_number(), Some(8443));
///
/// url.host = String::from("mirror.example.org");
/// url.port.clear();
/// assert_eq!(url.to_string(), "https://mirror.example.org/search?q=rust#top");
/// # Ok::<(), rawurl::ParseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    /// Lower-cased scheme without the trailing `:`
    pub scheme: String,
    /// Whether `//` introduced the authority
    pub slashes: bool,
    /// Userinfo before the `@`
    pub auth: String,
    /// Hostname, or an IPv6 literal without its brackets
    pub host: String,
    pub port: String,
    pub path: String,
    /// Query without the leading `?`
    pub raw_query: String,
    /// Fragment without the leading `#`
    pub fragment: String,
    /// Whether the host was written as `[...]`
    pub ipv6: bool,
}

impl Url {
    /// Parse a raw URL string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingScheme` if the input starts with `:`.
    pub fn parse(input: &str) -> Result<Self> {
        crate::parser::parse(input)
    }

    /// Classify the scheme
    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(&self.scheme)
    }

    /// Port as a number. `None` when empty or out of range.
    pub fn port_number(&self) -> Option<u16> {
        parse_port(&self.port)
    }

    /// The serialized form as a fixed sequence of pieces, separators
    /// included only when their component is present.
    fn pieces(&self) -> [&str; 15] {
        let bracketed = self.ipv6 && !self.host.is_empty();
        [
            self.scheme.as_str(),
            if self.scheme.is_empty() { "" } else { ":" },
            if self.slashes { "//" } else { "" },
            self.auth.as_str(),
            if self.auth.is_empty() { "" } else { "@" },
            if bracketed { "[" } else { "" },
            self.host.as_str(),
            if bracketed { "]" } else { "" },
            if self.port.is_empty() { "" } else { ":" },
            self.port.as_str(),
            self.path.as_str(),
            if self.raw_query.is_empty() { "" } else { "?" },
            self.raw_query.as_str(),
            if self.fragment.is_empty() { "" } else { "#" },
            self.fragment.as_str(),
        ]
    }

    /// Exact length in bytes of the serialized URL
    pub fn serialized_len(&self) -> usize {
        self.pieces().iter().map(|piece| piece.len()).sum()
    }

    /// Reassemble the components into a URL string with a single allocation.
    /// An all-empty record yields an empty string.
    pub fn serialize(&self) -> String {
        let pieces = self.pieces();
        let mut buffer = String::with_capacity(pieces.iter().map(|piece| piece.len()).sum());
        for piece in pieces {
            buffer.push_str(piece);
        }
        buffer
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.pieces()
            .iter()
            .try_for_each(|piece| f.write_str(piece))
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
