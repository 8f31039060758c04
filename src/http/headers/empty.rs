use indexmap::IndexSet;

use super::{HeaderError, Headers, Iter, ToHeaderValue};

/// Shared read only collection with no headers.
///
/// Use it wherever a collection is required but none is logically present.
pub static EMPTY_HEADERS: EmptyHeaders = EmptyHeaders { _priv: () };

/// Header collection that is always empty.
///
/// Every query reports no headers, every mutator fails with [`HeaderError::ReadOnly`] without
/// looking at its arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyHeaders {
    _priv: (),
}

impl EmptyHeaders {
    #[inline]
    pub const fn new() -> Self {
        Self { _priv: () }
    }
}

impl Headers for EmptyHeaders {
    #[inline]
    fn iter(&self) -> Iter<'_> {
        Iter::new(&[])
    }

    #[inline]
    fn get(&self, _: &str) -> Option<&str> {
        None
    }

    #[inline]
    fn get_all(&self, _: &str) -> Vec<&str> {
        Vec::new()
    }

    #[inline]
    fn contains(&self, _: &str) -> bool {
        false
    }

    #[inline]
    fn names(&self) -> IndexSet<&str> {
        IndexSet::new()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    fn add<V: ToHeaderValue>(&mut self, _: &str, _: V) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn add_values<I>(&mut self, _: &str, _: I) -> Result<&mut Self, HeaderError>
    where
        I: IntoIterator,
        I::Item: ToHeaderValue,
    {
        Err(HeaderError::ReadOnly)
    }

    fn add_int(&mut self, _: &str, _: i32) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn add_short(&mut self, _: &str, _: i16) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn add_headers(&mut self, _: &dyn Headers) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn set<V: ToHeaderValue>(&mut self, _: &str, _: V) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn set_values<I>(&mut self, _: &str, _: I) -> Result<&mut Self, HeaderError>
    where
        I: IntoIterator,
        I::Item: ToHeaderValue,
    {
        Err(HeaderError::ReadOnly)
    }

    fn set_int(&mut self, _: &str, _: i32) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn set_short(&mut self, _: &str, _: i16) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn set_headers(&mut self, _: &dyn Headers) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn set_all(&mut self, _: &dyn Headers) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn remove(&mut self, _: &str) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn clear(&mut self) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }
}
