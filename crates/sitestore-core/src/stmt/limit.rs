/// A bounded row window: `LIMIT limit OFFSET offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub limit: u64,
    pub offset: u64,
}

impl Limit {
    /// Largest bound a store accepts; SQL integers are signed 64-bit.
    pub const MAX: u64 = i64::MAX as u64;

    /// Window covering the zero-based rows `first..=last`.
    ///
    /// Both bounds are clamped to [`Limit::MAX`], so an open-ended window
    /// can be written as `inclusive(first, u64::MAX)`. Callers must ensure
    /// `first <= last`.
    pub fn inclusive(first: u64, last: u64) -> Limit {
        debug_assert!(first <= last, "first={first}; last={last}");

        let first = first.min(Limit::MAX);
        let last = last.min(Limit::MAX);

        Limit {
            limit: last
                .saturating_sub(first)
                .saturating_add(1)
                .min(Limit::MAX),
            offset: first,
        }
    }
}
