use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CompareError;
use crate::operand::Operand;

/// The eight relational and membership operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    In,
    NotIn,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessEqual,
        Operator::GreaterEqual,
        Operator::In,
        Operator::NotIn,
    ];

    pub fn is_membership(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::In => "in",
            Operator::NotIn => "not in",
        }
    }

    /// Name as used by serde, e.g. `less_equal`.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::LessThan => "less_than",
            Operator::GreaterThan => "greater_than",
            Operator::LessEqual => "less_equal",
            Operator::GreaterEqual => "greater_equal",
            Operator::In => "in",
            Operator::NotIn => "not_in",
        }
    }

    /// Evaluate this operator on two operands.
    pub fn eval(self, left: impl Into<Operand>, right: impl Into<Operand>) -> bool {
        crate::comparison::evaluate(self, &left.into(), &right.into())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let op = match normalized.as_str() {
            "==" | "eq" | "equal" => Operator::Equal,
            "!=" | "ne" | "not_equal" => Operator::NotEqual,
            "<" | "lt" | "less_than" => Operator::LessThan,
            ">" | "gt" | "greater_than" => Operator::GreaterThan,
            "<=" | "le" | "less_equal" => Operator::LessEqual,
            ">=" | "ge" | "greater_equal" => Operator::GreaterEqual,
            "in" => Operator::In,
            "not_in" | "notin" | "not in" => Operator::NotIn,
            _ => return Err(CompareError::UnknownOperator(s.to_string())),
        };
        Ok(op)
    }
}
