/// URL scheme types the scanner treats differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ftp,
    Gopher,
    File,
    Javascript,
    /// Any other scheme, or none at all
    #[default]
    Other,
}

impl SchemeType {
    /// Check if this scheme always carries an authority, so one is only
    /// scanned after an explicit `//`
    pub fn is_slashed(self) -> bool {
        matches!(
            self,
            Self::Http | Self::Https | Self::Ftp | Self::Gopher | Self::File
        )
    }

    /// Check if the remainder after the scheme is never an authority
    pub fn is_hostless(self) -> bool {
        self == Self::Javascript
    }
}
