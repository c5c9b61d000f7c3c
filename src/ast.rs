use static_assertions::const_assert;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of five variants: three binary operations, one
/// unary operation, and a numeric leaf. Interior nodes own their operands
/// through [`Box`], so every tree is finite and acyclic by construction and
/// no node can reference itself. Trees are built once by the caller and never
/// mutated afterwards; evaluation traverses them read-only.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Addition of two sub-expressions (e.g. `1 + 2`).
    Addition {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Subtraction of two sub-expressions (e.g. `8 - 6`).
    Subtraction {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Division of two sub-expressions (e.g. `4 / 2`).
    ///
    /// Evaluation fails if the right operand evaluates to exactly zero.
    Division {
        /// Left operand (dividend).
        left:  Box<Self>,
        /// Right operand (divisor).
        right: Box<Self>,
    },
    /// Square root of a sub-expression (e.g. `sqrt(4)`).
    ///
    /// Evaluation fails if the operand evaluates to a negative value.
    SquareRoot {
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A numeric literal. Always evaluates to itself.
    Number {
        /// The constant value.
        value: f64,
    },
}

// Two boxed operands plus the discriminant.
const_assert!(std::mem::size_of::<Expr>() <= 24);

impl Expr {
    /// Creates a numeric leaf.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Expr;
    ///
    /// assert_eq!(Expr::number(4.0), Expr::Number { value: 4.0 });
    /// ```
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }
    /// Creates an addition node, boxing both operands.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{Expr, evaluate};
    ///
    /// let sum = Expr::addition(Expr::number(1.0), Expr::number(2.0));
    /// assert_eq!(evaluate(&sum).success(), Some(3.0));
    /// ```
    #[must_use]
    pub fn addition(left: Self, right: Self) -> Self {
        Self::Addition { left:  Box::new(left),
                         right: Box::new(right), }
    }
    /// Creates a subtraction node, boxing both operands.
    #[must_use]
    pub fn subtraction(left: Self, right: Self) -> Self {
        Self::Subtraction { left:  Box::new(left),
                            right: Box::new(right), }
    }
    /// Creates a division node, boxing both operands.
    #[must_use]
    pub fn division(left: Self, right: Self) -> Self {
        Self::Division { left:  Box::new(left),
                         right: Box::new(right), }
    }
    /// Creates a square root node, boxing the operand.
    #[must_use]
    pub fn square_root(operand: Self) -> Self {
        Self::SquareRoot { operand: Box::new(operand) }
    }
    /// Gets the depth of the tree rooted at `self`.
    ///
    /// The depth is the number of nodes on the longest path from this node to
    /// a leaf; a bare number has depth `1`. Evaluation recurses once per node
    /// on such a path, so callers embedding the evaluator in stack-limited
    /// contexts can use this to size up a tree before evaluating it.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Expr;
    ///
    /// let expr = Expr::square_root(Expr::addition(Expr::number(2.0),
    ///                                             Expr::number(2.0)));
    ///
    /// assert_eq!(expr.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Addition { left, right }
            | Self::Subtraction { left, right }
            | Self::Division { left, right } => 1 + left.depth().max(right.depth()),
            Self::SquareRoot { operand } => 1 + operand.depth(),
            Self::Number { .. } => 1,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number { value }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Addition { left, right } => write!(f, "({left} + {right})"),
            Self::Subtraction { left, right } => write!(f, "({left} - {right})"),
            Self::Division { left, right } => write!(f, "({left} / {right})"),
            Self::SquareRoot { operand } => write!(f, "sqrt({operand})"),
            Self::Number { value } => write!(f, "{value}"),
        }
    }
}
