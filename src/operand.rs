use serde_json::{Number, Value};

/// A number carried as decimal text, the way precision-preserving JSON
/// decoders hand numbers over. Parsed with `str::parse::<f64>` when it is
/// turned into an [`Operand`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalText(pub String);

impl DecimalText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parsed value. Out-of-range text such as `1e400` is a parse
    /// failure; only spelled-out infinities parse to an infinite value.
    pub fn to_f64(&self) -> Option<f64> {
        let text = self.as_str();
        let n = text.parse::<f64>().ok()?;
        if n.is_infinite() && text.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(n)
    }
}

impl From<&Number> for DecimalText {
    fn from(n: &Number) -> Self {
        Self(n.to_string())
    }
}

/// The normalized shape of a dynamically typed value.
///
/// Every numeric kind collapses into `Number(f64)` at conversion time, so the
/// comparator only ever matches over these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Absent,
    Number(f64),
    Text(String),
    Bool(bool),
    Seq(Sequence),
    Unsupported,
}

/// The collection shapes accepted on the right of `in` / `not in`.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    /// Elements of arbitrary shape, e.g. a JSON array.
    Mixed(Vec<Operand>),
    /// Elements statically known to be numeric.
    Numbers(Vec<f64>),
    /// Elements statically known to be text.
    Texts(Vec<String>),
}

impl Operand {
    /// Builds a mixed sequence from anything convertible element-wise.
    pub fn mixed<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        Operand::Seq(Sequence::Mixed(items.into_iter().map(Into::into).collect()))
    }

    /// Short category name, used in trace output.
    pub fn category(&self) -> &'static str {
        match self {
            Operand::Absent => "absent",
            Operand::Number(_) => "number",
            Operand::Text(_) => "text",
            Operand::Bool(_) => "bool",
            Operand::Seq(_) => "sequence",
            Operand::Unsupported => "unsupported",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Operand::Absent)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Operand::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn number_to_f64(n: &Number) -> Option<f64> {
    n.as_f64().or_else(|| n.to_string().parse::<f64>().ok())
}

macro_rules! numeric_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Number(v as f64)
                }
            }

            impl From<&$t> for Operand {
                fn from(v: &$t) -> Self {
                    Operand::Number(*v as f64)
                }
            }

            impl From<Vec<$t>> for Operand {
                fn from(v: Vec<$t>) -> Self {
                    Operand::Seq(Sequence::Numbers(v.into_iter().map(|x| x as f64).collect()))
                }
            }

            impl From<&[$t]> for Operand {
                fn from(v: &[$t]) -> Self {
                    Operand::Seq(Sequence::Numbers(v.iter().map(|x| *x as f64).collect()))
                }
            }

            impl<const N: usize> From<[$t; N]> for Operand {
                fn from(v: [$t; N]) -> Self {
                    Operand::Seq(Sequence::Numbers(v.iter().map(|x| *x as f64).collect()))
                }
            }
        )*
    };
}

numeric_operand!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Operand::Bool(v)
    }
}

impl From<()> for Operand {
    fn from(_: ()) -> Self {
        Operand::Absent
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Operand::Text(v.to_string())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Operand::Text(v)
    }
}

impl From<&String> for Operand {
    fn from(v: &String) -> Self {
        Operand::Text(v.clone())
    }
}

impl From<Vec<String>> for Operand {
    fn from(v: Vec<String>) -> Self {
        Operand::Seq(Sequence::Texts(v))
    }
}

impl From<&[String]> for Operand {
    fn from(v: &[String]) -> Self {
        Operand::Seq(Sequence::Texts(v.to_vec()))
    }
}

impl<'a> From<Vec<&'a str>> for Operand {
    fn from(v: Vec<&'a str>) -> Self {
        Operand::Seq(Sequence::Texts(v.into_iter().map(str::to_string).collect()))
    }
}

impl<'a> From<&[&'a str]> for Operand {
    fn from(v: &[&'a str]) -> Self {
        Operand::Seq(Sequence::Texts(v.iter().map(|s| s.to_string()).collect()))
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Operand {
    fn from(v: [&'a str; N]) -> Self {
        Operand::Seq(Sequence::Texts(v.iter().map(|s| s.to_string()).collect()))
    }
}

impl From<DecimalText> for Operand {
    fn from(v: DecimalText) -> Self {
        v.to_f64().map_or(Operand::Unsupported, Operand::Number)
    }
}

// Unparsable elements are dropped; a scan would skip them anyway.
impl From<Vec<DecimalText>> for Operand {
    fn from(v: Vec<DecimalText>) -> Self {
        Operand::Seq(Sequence::Numbers(v.iter().filter_map(DecimalText::to_f64).collect()))
    }
}

impl From<&Number> for Operand {
    fn from(n: &Number) -> Self {
        number_to_f64(n).map_or(Operand::Unsupported, Operand::Number)
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::from(&n)
    }
}

impl From<&Value> for Operand {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => Operand::Absent,
            Value::Bool(b) => Operand::Bool(*b),
            Value::Number(n) => Operand::from(n),
            Value::String(s) => Operand::Text(s.clone()),
            Value::Array(items) => Operand::mixed(items),
            Value::Object(_) => Operand::Unsupported,
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Operand::Text(s),
            Value::Array(items) => Operand::mixed(items),
            other => Operand::from(&other),
        }
    }
}

impl From<Vec<Value>> for Operand {
    fn from(v: Vec<Value>) -> Self {
        Operand::mixed(v)
    }
}

impl From<&[Value]> for Operand {
    fn from(v: &[Value]) -> Self {
        Operand::mixed(v)
    }
}

impl From<Vec<Operand>> for Operand {
    fn from(v: Vec<Operand>) -> Self {
        Operand::Seq(Sequence::Mixed(v))
    }
}

impl From<Sequence> for Operand {
    fn from(v: Sequence) -> Self {
        Operand::Seq(v)
    }
}

impl From<&Operand> for Operand {
    fn from(v: &Operand) -> Self {
        v.clone()
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        v.map_or(Operand::Absent, Into::into)
    }
}
