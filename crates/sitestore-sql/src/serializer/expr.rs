use super::{Formatter, Ident, Params, ToSql};

use sitestore_core::stmt::Expr;

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Expr::And(operands) if operands.is_empty() => fmt!(f, "1 = 1"),
            Expr::And(operands) => {
                let mut s = "";
                for operand in operands {
                    fmt!(f, s operand);
                    s = " AND ";
                }
            }
            Expr::Or(operands) if operands.is_empty() => fmt!(f, "1 = 0"),
            Expr::Or(operands) => {
                let mut s = "(";
                for operand in operands {
                    fmt!(f, s operand);
                    s = " OR ";
                }
                fmt!(f, ")");
            }
            Expr::Eq(column, value) => fmt!(f, Ident(column) " = " value),
            Expr::IsNull(column) => fmt!(f, Ident(column) " IS NULL"),
            Expr::Like(column, pattern) => {
                let pattern = sitestore_core::stmt::Value::from(pattern);
                let pattern = &pattern;
                let escape = if f.serializer.is_mysql() {
                    " ESCAPE '\\\\'"
                } else {
                    " ESCAPE '\\'"
                };
                fmt!(f, Ident(column) " LIKE " pattern escape);
            }
        }
    }
}
