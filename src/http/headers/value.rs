//! Conversion of caller values into header text.
use std::borrow::Cow;
use std::time::SystemTime;

use httpdate::HttpDate;

use crate::http::date;

/// A value that can be stored in a header collection.
///
/// Scalars are formatted with their natural string form, timestamps with the HTTP-date format.
///
/// `None` stands for an absent value. Sequence mutators such as
/// [`add_values`][super::Headers::add_values] stop at the first absent element, single value
/// mutators reject it with [`HeaderError::MissingValue`][super::HeaderError::MissingValue].
pub trait ToHeaderValue {
    /// Returns the header text, or `None` if the value is absent.
    fn to_header_value(&self) -> Option<String>;
}

impl ToHeaderValue for str {
    #[inline]
    fn to_header_value(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl ToHeaderValue for String {
    #[inline]
    fn to_header_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ToHeaderValue for Cow<'_, str> {
    #[inline]
    fn to_header_value(&self) -> Option<String> {
        Some(self.as_ref().to_owned())
    }
}

impl<T: ToHeaderValue + ?Sized> ToHeaderValue for &T {
    #[inline]
    fn to_header_value(&self) -> Option<String> {
        T::to_header_value(self)
    }
}

impl<T: ToHeaderValue> ToHeaderValue for Option<T> {
    #[inline]
    fn to_header_value(&self) -> Option<String> {
        self.as_ref().and_then(T::to_header_value)
    }
}

macro_rules! integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToHeaderValue for $ty {
                #[inline]
                fn to_header_value(&self) -> Option<String> {
                    Some(itoa::Buffer::new().format(*self).to_owned())
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! display_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToHeaderValue for $ty {
                #[inline]
                fn to_header_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_value!(f32, f64, bool, char, HttpDate);

impl ToHeaderValue for SystemTime {
    #[inline]
    fn to_header_value(&self) -> Option<String> {
        Some(date::format(*self))
    }
}
