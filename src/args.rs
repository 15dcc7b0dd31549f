use std::fmt;

use serde::{Deserialize, Serialize};

/// A value substituted into a message template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(n) => write!(f, "{n}"),
            Arg::Float(n) => write!(f, "{n}"),
            Arg::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_owned())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<f32> for Arg {
    fn from(n: f32) -> Self {
        Arg::Float(f64::from(n))
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Float(n)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(n: $t) -> Self {
                    Arg::Int(i64::from(n))
                }
            }
        )*
    };
}
impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Builds a `Vec<Arg>` from heterogeneous values, keeping their order.
///
/// ```
/// use message_key::{args, Arg};
///
/// let args = args!["Alice", 3, true];
/// assert_eq!(args, vec![Arg::from("Alice"), Arg::Int(3), Arg::Bool(true)]);
/// ```
#[macro_export]
macro_rules! args {
    ($($v:expr),* $(,)?) => {{
        ::std::vec![$($crate::Arg::from($v),)*]
    }};
}
