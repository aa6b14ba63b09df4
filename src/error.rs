use thiserror::Error;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::InvalidIndex.to_string(), "the given index is invalid");
        assert_eq!(Error::EmptyList.to_string(), "the list is empty");
    }
}

/// # Summary
///
/// `Error` contains all the possible errors that a [`List`](crate::List)
/// operation might return.
///
/// # Error types
///
/// `InvalidIndex`: the index is negative, or outside of `[0, length)`.
/// `EmptyList`: the operation needs at least one element.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("the given index is invalid")]
    InvalidIndex,
    #[error("the list is empty")]
    EmptyList,
}

pub type Result<T> = std::result::Result<T, Error>;
