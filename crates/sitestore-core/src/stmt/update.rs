use super::{Expr, Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: String,

    /// SET, in binding order
    pub assignments: Vec<Assignment>,

    /// WHERE
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Update {
    pub fn new<I, C>(table: impl Into<String>, assignments: I) -> Update
    where
        I: IntoIterator<Item = (C, Value)>,
        C: Into<String>,
    {
        Update {
            table: table.into(),
            assignments: assignments
                .into_iter()
                .map(|(column, value)| Assignment {
                    column: column.into(),
                    value,
                })
                .collect(),
            filter: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<Option<Expr>>) -> Update {
        self.filter = filter.into();
        self
    }
}

impl Statement {
    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(..))
    }

    /// Attempts to return a reference to an inner [`Update`].
    pub fn as_update(&self) -> Option<&Update> {
        match self {
            Self::Update(update) => Some(update),
            _ => None,
        }
    }
}

impl From<Update> for Statement {
    fn from(src: Update) -> Self {
        Self::Update(src)
    }
}
