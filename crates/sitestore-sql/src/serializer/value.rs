use super::{Formatter, Params, ToSql};

use sitestore_core::stmt;

/// Every value is bound; nothing caller-supplied is spliced into the text.
impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}
