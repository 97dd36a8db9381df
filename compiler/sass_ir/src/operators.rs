//! Binary operators used by pending binary expressions.
//!
//! All types are `Copy + Eq + Hash` so they participate directly in the
//! structural hash of a binary expression node.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Logical
    And,
    Or,

    // Comparison
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used when a delayed or interpolated expression is serialized back to
    /// text, and in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Returns the operator's name as reported by the inspector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Eq => "eq",
            Self::NotEq => "neq",
            Self::Gt => "gt",
            Self::GtEq => "gte",
            Self::Lt => "lt",
            Self::LtEq => "lte",
            Self::Add => "plus",
            Self::Sub => "minus",
            Self::Mul => "times",
            Self::Div => "div",
            Self::Mod => "mod",
        }
    }

    /// Whether this operator produces a boolean from two comparable operands.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Gt | Self::GtEq | Self::Lt | Self::LtEq
        )
    }

    /// Whether this operator is one of `and` / `or`.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

/// An operator together with the whitespace that surrounded it in source.
///
/// Whitespace matters when an operation degrades to string concatenation:
/// `a - b` and `a-b` serialize differently.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operand {
    pub op: BinaryOp,
    pub ws_before: bool,
    pub ws_after: bool,
}

impl Operand {
    /// Operator with whitespace on both sides (the common case).
    pub const fn new(op: BinaryOp) -> Self {
        Operand {
            op,
            ws_before: true,
            ws_after: true,
        }
    }

    /// Operator written without surrounding whitespace.
    pub const fn tight(op: BinaryOp) -> Self {
        Operand {
            op,
            ws_before: false,
            ws_after: false,
        }
    }

    /// Render the operator with its recorded whitespace.
    pub fn separator(self) -> String {
        let mut out = String::with_capacity(5);
        if self.ws_before {
            out.push(' ');
        }
        out.push_str(self.op.as_symbol());
        if self.ws_after {
            out.push(' ');
        }
        out
    }
}

impl From<BinaryOp> for Operand {
    fn from(op: BinaryOp) -> Self {
        Operand::new(op)
    }
}
