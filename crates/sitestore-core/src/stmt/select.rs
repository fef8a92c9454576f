use super::{Expr, Limit, OrderBy, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to read from
    pub table: String,

    /// Projected columns, in decode order
    pub columns: Vec<String>,

    /// WHERE
    pub filter: Option<Expr>,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    /// LIMIT / OFFSET
    pub limit: Option<Limit>,
}

impl Select {
    pub fn new<I, C>(table: impl Into<String>, columns: I) -> Select
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Select {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            filter: None,
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<Option<Expr>>) -> Select {
        self.filter = filter.into();
        self
    }

    pub fn order_by(mut self, order_by: impl Into<Option<OrderBy>>) -> Select {
        self.order_by = order_by.into();
        self
    }

    pub fn limit(mut self, limit: impl Into<Option<Limit>>) -> Select {
        self.limit = limit.into();
        self
    }
}

impl Statement {
    /// Attempts to return a reference to an inner [`Select`].
    pub fn as_query(&self) -> Option<&Select> {
        match self {
            Self::Query(select) => Some(select),
            _ => None,
        }
    }
}

impl From<Select> for Statement {
    fn from(src: Select) -> Self {
        Self::Query(src)
    }
}
