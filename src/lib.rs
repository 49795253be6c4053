//! Compare values of unknown shape, such as decoded JSON, without casting
//! them to concrete types first.
//!
//! All integer and float kinds compare with each other, strings compare
//! lexicographically, booleans compare for equality, and `is_in` / `not_in`
//! look a scalar up in a sequence. Incompatible operands never error; the
//! comparison is simply false.
//!
//! ```
//! use json_value_compare as jvc;
//! use serde_json::json;
//!
//! let person = json!({"age": 22, "hobby": ["fishing", "cooking"]});
//! assert!(jvc::equal(&person["age"], 22u8));
//! assert!(jvc::is_in("cooking", &person["hobby"]));
//! assert!(!jvc::equal(&person["age"], "22"));
//! ```

pub mod errors;
pub mod operand;
pub mod operator;
mod comparison;

pub use errors::{CompareError, Result, Side};
pub use operand::{DecimalText, Operand, Sequence};
pub use operator::Operator;

/// Evaluate any operator on two operands.
pub fn compare(op: Operator, left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    op.eval(left, right)
}

/// `left == right`. Two absent values are equal.
pub fn equal(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::Equal, left, right)
}

/// `left != right`, for operands of the same category.
pub fn not_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::NotEqual, left, right)
}

pub fn less_than(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::LessThan, left, right)
}

pub fn greater_than(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::GreaterThan, left, right)
}

pub fn less_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::LessEqual, left, right)
}

pub fn greater_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::GreaterEqual, left, right)
}

/// True when the sequence `right` holds an element equal to `left`.
pub fn is_in(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::In, left, right)
}

/// True when `right` is a sequence `left` can be looked up in and no element
/// equals `left`. This is not `!is_in`: pairings with no lookup at all (a
/// boolean left, a scalar right) are false for both.
pub fn not_in(left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
    compare(Operator::NotIn, left, right)
}

/// Evaluate every operator on the same pair, in [`Operator::ALL`] order.
pub fn compare_all(left: impl Into<Operand>, right: impl Into<Operand>) -> Vec<(Operator, bool)> {
    let (left, right) = (left.into(), right.into());
    Operator::ALL
        .into_iter()
        .map(|op| (op, comparison::evaluate(op, &left, &right)))
        .collect()
}
