/// What a store supports, as far as the engine is concerned.
#[derive(Debug)]
pub struct Capability {
    /// The store understands `BEGIN` / `COMMIT` / `ROLLBACK` on a connection.
    pub transactions: bool,

    /// The store can return generated keys from an `INSERT ... RETURNING`.
    pub returning_from_insert: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        transactions: true,
        returning_from_insert: true,
    };

    /// PostgreSQL capabilities.
    pub const POSTGRESQL: Self = Self {
        transactions: true,
        returning_from_insert: true,
    };

    /// MySQL capabilities. Generated keys come from `LAST_INSERT_ID()`.
    pub const MYSQL: Self = Self {
        transactions: true,
        returning_from_insert: false,
    };
}
