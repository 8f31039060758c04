use std::iter::FusedIterator;

/// A single header name and value pair.
///
/// The name keeps the case it was inserted with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderEntry {
    name: String,
    value: String,
}

impl HeaderEntry {
    pub(crate) fn new(name: &str, value: String) -> Self {
        Self {
            name: name.to_owned(),
            value,
        }
    }

    /// Returns the header name as inserted.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Checks whether this entry's name is an ASCII case-insensitive match for `name`.
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Iterator over every header entry in insertion order.
///
/// Returned from [`Headers::iter`][super::Headers::iter].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, HeaderEntry>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(entries: &'a [HeaderEntry]) -> Self {
        Self {
            iter: entries.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| (e.name(), e.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|e| (e.name(), e.value()))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
