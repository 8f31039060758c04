//! HTTP headers abstraction for [`HttpRequest`](crate::http::request::HttpRequest) and
//! [`HttpResponse`](crate::http::response::HttpResponse)
//!
//! A header collection is an ordered multimap from header name to header value:
//!
//! - names are compared ASCII case-insensitively but stored and returned as inserted,
//! - one name may have several values, kept in insertion order,
//! - traversal yields every entry in insertion order, not grouped by name.
//!
//! The [`Headers`] trait carries the whole contract. Its query methods are dyn-compatible, so
//! `&dyn Headers` is the read only view bulk copies and the [`encode`] function consume.
//! Mutators are generic and return `&mut Self` for chaining, so they only exist on concrete
//! collections:
//!
//! - [`HttpHeaders`], the growable collection owned by messages,
//! - [`EmptyHeaders`], an always empty collection that rejects every mutation. A shared
//!   instance is available as [`EMPTY_HEADERS`].
//!
//! No validation is performed beyond rejecting empty names. Higher level types are responsible
//! for applying HTTP semantics.
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};

use crate::http::date;

mod map;
mod empty;
mod encode;
mod entry;
mod error;
mod value;

#[cfg(test)]
mod test;

pub use map::HttpHeaders;
pub use empty::{EMPTY_HEADERS, EmptyHeaders};
pub use encode::{encode, encode_ascii};
pub use entry::{HeaderEntry, Iter};
pub use error::HeaderError;
pub use value::ToHeaderValue;

/// Callback used by [`Headers::for_each_entry`].
///
/// Returns `Ok(true)` to continue the traversal and `Ok(false)` to stop it.
pub type EntryVisitor<'v, 'a> = dyn FnMut(&'a str, &'a str) -> Result<bool, HeaderError> + 'v;

/// Header collection contract.
pub trait Headers {
    // ===== Query =====

    /// Returns an iterator over all entries in insertion order.
    ///
    /// Each call starts a fresh traversal from the first entry.
    fn iter(&self) -> Iter<'_>;

    /// Returns the first value for `name`.
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Returns the first value for `name`, or `default` if there is none.
    fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Returns all values for `name` in insertion order.
    fn get_all(&self, name: &str) -> Vec<&str> {
        self.iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
            .collect()
    }

    /// Returns the first value for `name` parsed as a decimal `i32`.
    ///
    /// Missing and unparsable values are both reported as `None`.
    fn get_int(&self, name: &str) -> Option<i32> {
        coerce(name, self.get(name)?)
    }

    fn get_int_or(&self, name: &str, default: i32) -> i32 {
        self.get_int(name).unwrap_or(default)
    }

    /// Returns the first value for `name` parsed as a decimal `i16`.
    ///
    /// Missing and unparsable values are both reported as `None`.
    fn get_short(&self, name: &str) -> Option<i16> {
        coerce(name, self.get(name)?)
    }

    fn get_short_or(&self, name: &str, default: i16) -> i16 {
        self.get_short(name).unwrap_or(default)
    }

    /// Returns the first value for `name` parsed as an HTTP-date, in milliseconds since the
    /// Unix epoch.
    ///
    /// Missing and unparsable values are both reported as `None`.
    fn get_time_millis(&self, name: &str) -> Option<i64> {
        let value = self.get(name)?;
        match date::parse_millis(value) {
            Ok(millis) => Some(millis),
            Err(err) => {
                log::debug!("ignoring header {name}: {value:?} is not a date: {err}");
                None
            }
        }
    }

    fn get_time_millis_or(&self, name: &str, default: i64) -> i64 {
        self.get_time_millis(name).unwrap_or(default)
    }

    /// Returns `true` if there is at least one value for `name`.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns `true` if one of the values for `name` equals `value`.
    fn contains_value(&self, name: &str, value: &str, ignore_case: bool) -> bool {
        self.get_all(name).into_iter().any(|v| {
            if ignore_case {
                v.eq_ignore_ascii_case(value)
            } else {
                v == value
            }
        })
    }

    /// Returns the distinct header names.
    ///
    /// Names differing only in case are reported once, in the case they were first inserted
    /// with.
    fn names(&self) -> IndexSet<&str> {
        let mut names = IndexMap::new();
        for (name, _) in self.iter() {
            names.entry(name.to_ascii_lowercase()).or_insert(name);
        }
        names.into_values().collect()
    }

    /// Returns all entries in insertion order.
    fn entries(&self) -> Vec<(&str, &str)> {
        self.iter().collect()
    }

    fn is_empty(&self) -> bool {
        self.iter().len() == 0
    }

    /// Presents every entry to `visitor` in insertion order.
    ///
    /// Returns the entry the visitor stopped at, or `None` if the traversal ran to the end.
    ///
    /// # Errors
    ///
    /// An error returned by the visitor stops the traversal and is returned as is.
    fn for_each_entry<'a>(
        &'a self,
        visitor: &mut EntryVisitor<'_, 'a>,
    ) -> Result<Option<(&'a str, &'a str)>, HeaderError> {
        for (name, value) in self.iter() {
            if !visitor(name, value)? {
                return Ok(Some((name, value)));
            }
        }
        Ok(None)
    }

    /// Returns the concrete [`HttpHeaders`] behind this collection, if that is what it is.
    fn as_http_headers(&self) -> Option<&HttpHeaders> {
        None
    }

    // ===== Mutation =====

    /// Appends a header, keeping existing values for the same name.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or the value is absent.
    fn add<V: ToHeaderValue>(&mut self, name: &str, value: V) -> Result<&mut Self, HeaderError>
    where
        Self: Sized;

    /// Appends one header per value, in order.
    ///
    /// The first absent value ends the sequence; it and everything after it is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty.
    fn add_values<I>(&mut self, name: &str, values: I) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: ToHeaderValue;

    fn add_int(&mut self, name: &str, value: i32) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
    {
        self.add(name, value)
    }

    fn add_short(&mut self, name: &str, value: i16) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
    {
        self.add(name, value)
    }

    /// Appends every entry of `headers`, in order.
    fn add_headers(&mut self, headers: &dyn Headers) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
    {
        log::trace!("adding {} headers", headers.iter().len());
        headers.for_each_entry(&mut |name, value| {
            self.add(name, value)?;
            Ok(true)
        })?;
        Ok(self)
    }

    /// Removes every value for `name`, then appends `value`.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or the value is absent, the collection is left
    /// unchanged.
    fn set<V: ToHeaderValue>(&mut self, name: &str, value: V) -> Result<&mut Self, HeaderError>
    where
        Self: Sized;

    /// Removes every value for `name`, then appends `values` like
    /// [`add_values`](Headers::add_values).
    fn set_values<I>(&mut self, name: &str, values: I) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: ToHeaderValue;

    fn set_int(&mut self, name: &str, value: i32) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
    {
        self.set(name, value)
    }

    fn set_short(&mut self, name: &str, value: i16) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
    {
        self.set(name, value)
    }

    /// Replaces the whole collection with a copy of `headers`.
    fn set_headers(&mut self, headers: &dyn Headers) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
    {
        self.clear()?;
        if headers.is_empty() {
            return Ok(self);
        }
        log::trace!("copying {} headers", headers.iter().len());
        headers.for_each_entry(&mut |name, value| {
            self.add(name, value)?;
            Ok(true)
        })?;
        Ok(self)
    }

    /// Overrides, name by name, the headers present in `headers`.
    ///
    /// For every name in `headers`, the existing values are replaced by all of the values
    /// `headers` has for that name. Names only present in `self` are untouched.
    fn set_all(&mut self, headers: &dyn Headers) -> Result<&mut Self, HeaderError>
    where
        Self: Sized,
    {
        if headers.is_empty() {
            return Ok(self);
        }
        log::trace!("merging {} headers", headers.iter().len());
        let mut replaced: Vec<&str> = Vec::new();
        headers.for_each_entry(&mut |name, value| {
            if replaced.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                self.add(name, value)?;
            } else {
                self.set(name, value)?;
                replaced.push(name);
            }
            Ok(true)
        })?;
        Ok(self)
    }

    /// Removes every value for `name`.
    fn remove(&mut self, name: &str) -> Result<&mut Self, HeaderError>
    where
        Self: Sized;

    /// Removes all headers.
    fn clear(&mut self) -> Result<&mut Self, HeaderError>
    where
        Self: Sized;
}

fn coerce<T: FromStr>(name: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(ok) => Some(ok),
        Err(_) => {
            log::debug!("ignoring header {name}: {value:?} is not a {}", std::any::type_name::<T>());
            None
        }
    }
}
