use bytes::{BufMut, BytesMut};

use super::encode::encode_entry;
use super::{HeaderEntry, HeaderError, Headers, Iter, ToHeaderValue};

/// Growable header collection.
///
/// Entries are kept in a single vector in insertion order, lookups are linear scans.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    entries: Vec<HeaderEntry>,
}

impl HttpHeaders {
    /// Create new empty [`HttpHeaders`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create new empty [`HttpHeaders`] with room for at least `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries, counting every value of a repeated name.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries as a slice, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[HeaderEntry] {
        &self.entries
    }

    /// Returns the number of bytes [`encode`](super::encode) writes for this collection.
    pub fn encoded_len(&self) -> usize {
        self.entries
            .iter()
            .map(|e| ascii_len(e.name()) + ascii_len(e.value()) + 4)
            .sum()
    }

    /// Encode all entries into a new buffer of the exact required size.
    pub fn to_bytes(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut buf);
        buf
    }

    pub(crate) fn encode<B: BufMut + ?Sized>(&self, buf: &mut B) {
        for entry in &self.entries {
            encode_entry(entry.name(), entry.value(), buf);
        }
    }

    fn push_values<I>(&mut self, name: &str, values: I)
    where
        I: IntoIterator,
        I::Item: ToHeaderValue,
    {
        for value in values {
            let Some(value) = value.to_header_value() else {
                break;
            };
            self.entries.push(HeaderEntry::new(name, value));
        }
    }

    fn remove_all(&mut self, name: &str) {
        self.entries.retain(|e| !e.is_named(name));
    }
}

fn validate_name(name: &str) -> Result<(), HeaderError> {
    if name.trim().is_empty() {
        log::debug!("rejected empty header name {name:?}");
        return Err(HeaderError::EmptyName);
    }
    Ok(())
}

fn ascii_len(s: &str) -> usize {
    if s.is_ascii() { s.len() } else { s.chars().count() }
}

impl Headers for HttpHeaders {
    #[inline]
    fn iter(&self) -> Iter<'_> {
        Iter::new(&self.entries)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        HttpHeaders::is_empty(self)
    }

    #[inline]
    fn as_http_headers(&self) -> Option<&HttpHeaders> {
        Some(self)
    }

    fn add<V: ToHeaderValue>(&mut self, name: &str, value: V) -> Result<&mut Self, HeaderError> {
        validate_name(name)?;
        let value = value.to_header_value().ok_or(HeaderError::MissingValue)?;
        self.entries.push(HeaderEntry::new(name, value));
        Ok(self)
    }

    fn add_values<I>(&mut self, name: &str, values: I) -> Result<&mut Self, HeaderError>
    where
        I: IntoIterator,
        I::Item: ToHeaderValue,
    {
        validate_name(name)?;
        self.push_values(name, values);
        Ok(self)
    }

    fn set<V: ToHeaderValue>(&mut self, name: &str, value: V) -> Result<&mut Self, HeaderError> {
        validate_name(name)?;
        let value = value.to_header_value().ok_or(HeaderError::MissingValue)?;
        self.remove_all(name);
        self.entries.push(HeaderEntry::new(name, value));
        Ok(self)
    }

    fn set_values<I>(&mut self, name: &str, values: I) -> Result<&mut Self, HeaderError>
    where
        I: IntoIterator,
        I::Item: ToHeaderValue,
    {
        validate_name(name)?;
        self.remove_all(name);
        self.push_values(name, values);
        Ok(self)
    }

    fn remove(&mut self, name: &str) -> Result<&mut Self, HeaderError> {
        self.remove_all(name);
        Ok(self)
    }

    fn clear(&mut self) -> Result<&mut Self, HeaderError> {
        self.entries.clear();
        Ok(self)
    }
}

impl<'a> IntoIterator for &'a HttpHeaders {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for HttpHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
