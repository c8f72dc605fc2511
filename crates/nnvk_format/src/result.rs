use core::fmt;

/// Format registry error
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Raw format identifier outside of the valid format range
    InvalidFormatIdentifier(i32),
    /// Name does not match any format
    UnknownFormatName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormatIdentifier(raw) => f.write_fmt(format_args!("Invalid format identifier: {raw}")),
            Error::UnknownFormatName(name)      => f.write_fmt(format_args!("Unknown format name: '{name}'")),
        }
    }
}

impl std::error::Error for Error {}

/// Format registry result
pub type Result<T> = core::result::Result<T, Error>;
