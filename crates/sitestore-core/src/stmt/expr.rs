use super::Value;

/// A filter expression over the columns of a single table.
///
/// Column names are identifiers taken from a validated field model; every
/// value is bound as a parameter when serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// All of the expressions must hold
    And(Vec<Expr>),

    /// Any of the expressions must hold
    Or(Vec<Expr>),

    /// `column = value`
    Eq(String, Value),

    /// `column IS NULL`
    IsNull(String),

    /// `column LIKE pattern`, with `\` as the escape character
    Like(String, String),
}

impl Expr {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Expr {
        Expr::Eq(column.into(), value.into())
    }

    pub fn is_null(column: impl Into<String>) -> Expr {
        Expr::IsNull(column.into())
    }

    /// `column LIKE '%term%'`, with the wildcard characters of `term` escaped.
    pub fn contains(column: impl Into<String>, term: &str) -> Expr {
        let mut pattern = String::with_capacity(term.len() + 2);
        pattern.push('%');
        for ch in term.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        Expr::Like(column.into(), pattern)
    }

    /// Conjunction of two expressions, flattening nested `And`s.
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let mut operands = vec![];
        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Expr::And(nested) => operands.extend(nested),
                expr => operands.push(expr),
            }
        }
        Expr::And(operands)
    }

    /// Disjunction of every expression yielded by `exprs`. Returns `None` when
    /// the iterator is empty.
    pub fn or_from_iter(exprs: impl IntoIterator<Item = Expr>) -> Option<Expr> {
        let mut operands: Vec<Expr> = exprs.into_iter().collect();
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(Expr::Or(operands)),
        }
    }

    /// Conjunction of two optional expressions.
    pub fn and_opt(lhs: Option<Expr>, rhs: Option<Expr>) -> Option<Expr> {
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => Some(Expr::and(lhs, rhs)),
            (lhs, None) => lhs,
            (None, rhs) => rhs,
        }
    }
}
