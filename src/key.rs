//! Fallible ordering for tree keys.
//!
//! A [`Tree`](crate::tree::Tree) only ever compares keys through [`TryOrd`]. Every totally
//! ordered standard type implements it by deferring to [`Ord`], so those comparisons never fail.
//! [`Key`] is a dynamically typed key whose comparisons *can* fail: an integer and a piece of
//! text have no sensible ordering, and neither does NaN.
//!
//! # Examples
//!
//! ```
//! use dskit::key::{Key, TryOrd};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Key::Int(1).try_cmp(&Key::Float(2.5)), Ok(Ordering::Less));
//! assert!(Key::from("apple").try_cmp(&Key::Int(1)).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// Comparison that may fail when two values have no meaningful order.
///
/// By convention `self` is the key being inserted or searched for and `other` is a key already
/// stored in the collection. Errors name them that way round.
pub trait TryOrd {
    /// Compares `self` with `other`, or explains why they cannot be compared.
    fn try_cmp(&self, other: &Self) -> Result<Ordering>;
}

macro_rules! try_ord_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryOrd for $t {
                #[inline]
                fn try_cmp(&self, other: &Self) -> Result<Ordering> {
                    Ok(Ord::cmp(self, other))
                }
            }
        )*
    };
}

try_ord_via_ord!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
);

impl TryOrd for &str {
    #[inline]
    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        Ok(Ord::cmp(*self, *other))
    }
}

/// A key whose kind is only known at runtime.
///
/// Equality follows [`TryOrd::try_cmp`]: `Key::Int(2) == Key::Float(2.0)`, keys of different
/// kinds are never equal and NaN is not equal to anything.
#[derive(Clone, Debug)]
pub enum Key {
    /// A signed integer.
    Int(i64),
    /// A floating point number. Compares numerically with [`Key::Int`].
    Float(f64),
    /// Arbitrary text, ordered lexicographically.
    Text(String),
    /// A boolean, `false < true`.
    Bool(bool),
}

impl Key {
    /// Infers the kind of `s`: an integer, then a float, then `true`/`false`, otherwise text.
    ///
    /// ```
    /// use dskit::key::Key;
    ///
    /// assert_eq!(Key::parse("42"), Key::Int(42));
    /// assert_eq!(Key::parse("4.5"), Key::Float(4.5));
    /// assert_eq!(Key::parse("true"), Key::Bool(true));
    /// assert_eq!(Key::parse("pear"), Key::Text("pear".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        if let Ok(i) = s.parse::<i64>() {
            Self::Int(i)
        } else if let Ok(f) = s.parse::<f64>() {
            Self::Float(f)
        } else if let Ok(b) = s.parse::<bool>() {
            Self::Bool(b)
        } else {
            Self::Text(s.to_string())
        }
    }

    /// The name of this key's kind as it appears in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bool(_) => "bool",
        }
    }
}

fn cmp_floats(a: f64, b: f64) -> Result<Ordering> {
    a.partial_cmp(&b)
        .ok_or_else(|| Error::Incomparable("NaN".to_string()))
}

/// Orders an integer against a float without rounding the integer through `f64`.
fn cmp_int_float(i: i64, f: f64) -> Result<Ordering> {
    // 2^63, the first float past `i64::MAX`. `-2^63` is `i64::MIN` exactly.
    const OUT_OF_RANGE: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return Err(Error::Incomparable("NaN".to_string()));
    }
    if f >= OUT_OF_RANGE {
        return Ok(Ordering::Less);
    }
    if f < -OUT_OF_RANGE {
        return Ok(Ordering::Greater);
    }

    let whole = f.floor();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal if f > whole => Ok(Ordering::Less),
        ordering => Ok(ordering),
    }
}

impl TryOrd for Key {
    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Ok(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Ok(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => cmp_floats(*a, *b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            _ => Err(Error::TypeMismatch {
                stored: other.kind(),
                inserted: self.kind(),
            }),
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Equal))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Key {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
