use tracing::trace;

use crate::operand::{Operand, Sequence};
use crate::operator::Operator;

/// Evaluate `op` on two normalized operands. Total over all inputs.
pub fn evaluate(op: Operator, left: &Operand, right: &Operand) -> bool {
    if op == Operator::Equal && left.is_absent() && right.is_absent() {
        return true;
    }
    if !matches!(left, Operand::Number(_) | Operand::Text(_) | Operand::Bool(_)) {
        trace!(%op, left = left.category(), "left operand not comparable");
        return false;
    }
    if !op.is_membership() {
        return relate_scalars(op, left, right);
    }
    // Without a scan both `in` and `not in` are false.
    scan(left, right) == Some(op == Operator::In)
}

fn relate_scalars(op: Operator, left: &Operand, right: &Operand) -> bool {
    match (left, right) {
        (Operand::Number(a), Operand::Number(b)) => relate(op, a, b),
        (Operand::Text(a), Operand::Text(b)) => relate(op, a.as_str(), b.as_str()),
        (Operand::Bool(a), Operand::Bool(b)) => match op {
            Operator::Equal => a == b,
            Operator::NotEqual => a != b,
            _ => {
                trace!(%op, "booleans only support equality");
                false
            }
        },
        _ => {
            trace!(
                %op,
                left = left.category(),
                right = right.category(),
                "incompatible operand categories"
            );
            false
        }
    }
}

// NaN never satisfies ==, <, >, <=, >= and always satisfies !=.
fn relate<T: PartialOrd + ?Sized>(op: Operator, a: &T, b: &T) -> bool {
    match op {
        Operator::Equal => a == b,
        Operator::NotEqual => a != b,
        Operator::LessThan => a < b,
        Operator::GreaterThan => a > b,
        Operator::LessEqual => a <= b,
        Operator::GreaterEqual => a >= b,
        Operator::In | Operator::NotIn => false,
    }
}

/// Scan `right` for an element equal to `left`.
///
/// `None` when the pairing has no membership scan at all (boolean left,
/// non-sequence right, typed sequence of the other element kind). Otherwise
/// `Some(found)`, stopping at the first match.
fn scan(left: &Operand, right: &Operand) -> Option<bool> {
    let Operand::Seq(seq) = right else {
        trace!(right = right.category(), "membership needs a sequence");
        return None;
    };
    match (left, seq) {
        (Operand::Number(n), Sequence::Mixed(items)) => {
            Some(items.iter().any(|item| item.as_number() == Some(*n)))
        }
        (Operand::Number(n), Sequence::Numbers(items)) => Some(items.iter().any(|item| item == n)),
        (Operand::Text(s), Sequence::Mixed(items)) => {
            Some(items.iter().any(|item| item.as_text() == Some(s.as_str())))
        }
        (Operand::Text(s), Sequence::Texts(items)) => Some(items.iter().any(|item| item == s)),
        _ => {
            trace!(left = left.category(), "no membership scan for this pairing");
            None
        }
    }
}
