use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("the scheme {0:?} is empty or contains illegal characters")]
    InvalidScheme(String),
    #[error("the path must be empty or begin with a slash when an authority is present")]
    RelativePathWithAuthority,
    #[error("the path cannot begin with two slashes when no authority is present")]
    DoubleSlashWithoutAuthority,
    #[error("the desired item could not be found")]
    NotFound,
    #[error("one path component is not a directory")]
    NotADirectory,
    #[error("the path unexpectedly identifies a directory")]
    IsADirectory,
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound => io::Error::new(io::ErrorKind::NotFound, err),
            Error::NotADirectory => io::Error::new(io::ErrorKind::NotADirectory, err),
            Error::IsADirectory => io::Error::new(io::ErrorKind::IsADirectory, err),
            Error::InvalidScheme(_)
            | Error::RelativePathWithAuthority
            | Error::DoubleSlashWithoutAuthority => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
        }
    }
}
