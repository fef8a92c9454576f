use super::{
    authorize,
    form::{self, stamp_autodates},
    Action, Decision, ExtractMode, Input, TenantContext, TenantPredicate,
};
use crate::Db;

use jiff::Timestamp;
use sitestore_core::{
    driver::{
        operation::{Operation, QuerySql, Transaction},
        Connection, Response,
    },
    err,
    schema::{FieldModel, FieldType, TableDef, PRIMARY_KEY, TENANT_COLUMN},
    stmt::{
        Delete, Direction, Expr, Insert, Limit, OrderBy, Record, Select, Statement, Type, Update,
    },
    Error, Result,
};

/// Search, ordering and row window of a [`Db::list`] call. Every part is
/// optional; the default lists every visible row ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    search: Option<String>,
    order_by: Option<(String, Direction)>,
    range: Option<(u64, u64)>,
}

impl ListQuery {
    pub fn new() -> ListQuery {
        ListQuery::default()
    }

    /// Matches rows where any text-like column contains `term`.
    pub fn search(mut self, term: impl Into<String>) -> ListQuery {
        self.search = Some(term.into());
        self
    }

    /// Orders by `column`, which must be `id` or a storage column.
    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> ListQuery {
        self.order_by = Some((column.into(), direction));
        self
    }

    /// Restricts the result to the zero-based rows `first..=last`. Pass
    /// `u64::MAX` as `last` for an open-ended window.
    pub fn range(mut self, first: u64, last: u64) -> ListQuery {
        self.range = Some((first, last));
        self
    }
}

impl Db {
    /// Inserts a row built from `input` and returns its generated key.
    pub async fn insert(&self, table: &str, cx: &TenantContext, input: &Input) -> Result<i64> {
        let table = self.table(table)?;
        let model = table.model();
        let scope = self.authorize(table, Action::Insert, cx)?;

        let mut record = form::extract(input, model, cx.role(), ExtractMode::Insert)?;
        stamp_autodates(model, &mut record, ExtractMode::Insert, Timestamp::now());

        if let Some(scope) = &scope {
            let (column, value) = scope.stamp();
            record.insert(column, value);
        }

        let mut conn = self.shared.connection.lock().await;

        if !conn.capability().returning_from_insert {
            return Err(Error::contract_violation(format!(
                "store cannot return generated keys; table={}",
                table.name()
            )));
        }

        let stmt = Insert::new(table.name(), record).returning(PRIMARY_KEY);
        let rows = exec(&mut **conn, stmt.into(), Some(vec![Type::I64]))
            .await?
            .rows
            .into_values()?;

        let key = rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .and_then(|value| value.as_i64())
            .ok_or_else(|| err!("insert returned no key; table={}", table.name()))?;

        tracing::debug!(table = table.name(), key, "inserted row");
        Ok(key)
    }

    /// Reads one row by key, `None` when it does not exist or is not visible
    /// to the caller.
    pub async fn get(&self, table: &str, cx: &TenantContext, key: i64) -> Result<Option<Record>> {
        check_key(key)?;

        let table = self.table(table)?;
        let scope = self.authorize(table, Action::Read, cx)?;

        let mut conn = self.shared.connection.lock().await;
        let mut rows = select(
            &mut **conn,
            table,
            Some(by_key(key, scope.as_ref())),
            None,
            None,
        )
        .await?;

        Ok(rows.pop())
    }

    /// Applies a partial update to the row `key`. Returns the number of rows
    /// changed, which is always 1.
    pub async fn update(
        &self,
        table: &str,
        cx: &TenantContext,
        key: i64,
        input: &Input,
    ) -> Result<u64> {
        check_key(key)?;

        let table = self.table(table)?;
        let model = table.model();
        let scope = self.authorize(table, Action::Update, cx)?;

        // Input is only looked at once the caller is known to own the row
        let build = || {
            let mut record = form::extract(input, model, cx.role(), ExtractMode::Update)?;
            stamp_autodates(model, &mut record, ExtractMode::Update, Timestamp::now());

            if let Some(scope) = &scope {
                let (column, value) = scope.stamp();
                record.insert(column, value);
            }

            if record.is_empty() {
                return Err(Error::contract_violation(format!(
                    "update has no columns to assign; table={}; key={key}",
                    table.name()
                )));
            }

            Ok(Update::new(table.name(), record)
                .filter(by_key(key, scope.as_ref()))
                .into())
        };

        self.write(table, cx, key, scope.as_ref(), build).await
    }

    /// Deletes the row `key`. Returns the number of rows removed, which is
    /// always 1.
    pub async fn delete(&self, table: &str, cx: &TenantContext, key: i64) -> Result<u64> {
        check_key(key)?;

        let table = self.table(table)?;
        let scope = self.authorize(table, Action::Delete, cx)?;

        let stmt = Delete::new(table.name(), by_key(key, scope.as_ref()));
        self.write(table, cx, key, scope.as_ref(), || Ok(stmt.into()))
            .await
    }

    /// Lists the rows visible to the caller.
    pub async fn list(
        &self,
        table: &str,
        cx: &TenantContext,
        query: &ListQuery,
    ) -> Result<Vec<Record>> {
        let table = self.table(table)?;
        let model = table.model();

        let order_by = match &query.order_by {
            Some((column, direction)) => {
                if !model.has_column(column) {
                    return Err(Error::contract_violation(format!(
                        "cannot order by unknown column; table={}; column={column}",
                        table.name()
                    )));
                }
                OrderBy {
                    column: column.clone(),
                    direction: *direction,
                }
            }
            None => OrderBy::asc(PRIMARY_KEY),
        };

        let limit = match query.range {
            Some((first, last)) if last < first => {
                return Err(Error::contract_violation(format!(
                    "row range is reversed; first={first}; last={last}"
                )));
            }
            Some((first, last)) => Some(Limit::inclusive(first, last)),
            None => None,
        };

        let scope = self.authorize(table, Action::Read, cx)?;

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(|term| search_filter(model, term));

        let filter = Expr::and_opt(scope.as_ref().map(TenantPredicate::filter), search);

        let mut conn = self.shared.connection.lock().await;
        select(&mut **conn, table, filter, Some(order_by), limit).await
    }

    /// Runs the scope decision for `action`, turning a denial into an error.
    fn authorize(
        &self,
        table: &TableDef,
        action: Action,
        cx: &TenantContext,
    ) -> Result<Option<TenantPredicate>> {
        match authorize(action, table.model(), cx) {
            Decision::AllowUnscoped => Ok(None),
            Decision::AllowScoped(predicate) => Ok(Some(predicate)),
            Decision::Deny(reason) => {
                tracing::warn!(
                    table = table.name(),
                    action = action.as_str(),
                    tenant = cx.tenant(),
                    reason = %reason,
                    "permission denied"
                );
                Err(Error::permission(reason))
            }
        }
    }

    /// Executes an update or delete of `key`. Scoped callers first have the
    /// target row's tenant checked against their own; `build` runs only
    /// after that check passes.
    async fn write(
        &self,
        table: &TableDef,
        cx: &TenantContext,
        key: i64,
        scope: Option<&TenantPredicate>,
        build: impl FnOnce() -> Result<Statement>,
    ) -> Result<u64> {
        let mut conn = self.shared.connection.lock().await;
        let conn: &mut dyn Connection = &mut **conn;

        let atomic = scope.is_some()
            && self.shared.transactional_ownership_check
            && conn.capability().transactions;

        if atomic {
            transaction(conn, Transaction::Start).await?;
        }

        let res = checked_write(conn, table, key, scope, build).await;

        if atomic {
            let end = if res.is_ok() {
                Transaction::Commit
            } else {
                Transaction::Rollback
            };

            if let Err(err) = transaction(conn, end).await {
                return Err(match res {
                    Ok(_) => err,
                    // Keep the failure that caused the rollback
                    Err(cause) => cause,
                });
            }
        }

        if let Err(err) = &res {
            if err.is_permission() {
                tracing::warn!(
                    table = table.name(),
                    key,
                    tenant = cx.tenant(),
                    "write to another tenant's row denied"
                );
            }
        }

        res
    }
}

async fn checked_write(
    conn: &mut dyn Connection,
    table: &TableDef,
    key: i64,
    scope: Option<&TenantPredicate>,
    build: impl FnOnce() -> Result<Statement>,
) -> Result<u64> {
    if let Some(scope) = scope {
        let filter = Expr::and(
            Expr::eq(PRIMARY_KEY, key),
            scope.filter_for(Action::Read),
        );
        let select = Select::new(table.name(), [TENANT_COLUMN]).filter(filter);

        let row = exec(conn, select.into(), Some(vec![Type::String]))
            .await?
            .rows
            .into_values()?
            .into_iter()
            .next();

        let Some(row) = row else {
            return Err(not_found(table, key));
        };

        let owner = row.into_iter().next().unwrap_or_default();
        if owner.as_str() != Some(scope.tenant()) {
            return Err(Error::permission(format!(
                "row belongs to another tenant; table={}; key={key}",
                table.name()
            )));
        }
    }

    let stmt = build()?;
    let count = exec(conn, stmt, None).await?.rows.into_count()?;
    if count == 0 {
        return Err(not_found(table, key));
    }

    Ok(count)
}

async fn select(
    conn: &mut dyn Connection,
    table: &TableDef,
    filter: Option<Expr>,
    order_by: Option<OrderBy>,
    limit: Option<Limit>,
) -> Result<Vec<Record>> {
    let model = table.model();
    let columns = model.select_columns();

    let stmt = Select::new(table.name(), columns.iter().copied())
        .filter(filter)
        .order_by(order_by)
        .limit(limit);

    let rows = exec(conn, stmt.into(), Some(model.select_types()))
        .await?
        .rows
        .into_values()?;

    Ok(rows
        .into_iter()
        .map(|row| Record::from_columns(columns.iter().copied(), row))
        .collect())
}

async fn exec(
    conn: &mut dyn Connection,
    stmt: Statement,
    ret: Option<Vec<Type>>,
) -> Result<Response> {
    run(conn, QuerySql { stmt, ret }.into()).await
}

async fn transaction(conn: &mut dyn Connection, op: Transaction) -> Result<()> {
    run(conn, op.into()).await?;
    Ok(())
}

/// Sends one operation to the store, logging store failures.
async fn run(conn: &mut dyn Connection, op: Operation) -> Result<Response> {
    conn.exec(op).await.map_err(|err| {
        tracing::error!(error = %err, "store operation failed");
        err
    })
}

fn check_key(key: i64) -> Result<()> {
    if key < 1 {
        return Err(Error::contract_violation(format!(
            "key must be positive; key={key}"
        )));
    }
    Ok(())
}

fn by_key(key: i64, scope: Option<&TenantPredicate>) -> Expr {
    let key = Expr::eq(PRIMARY_KEY, key);
    match scope {
        Some(scope) => Expr::and(key, scope.filter()),
        None => key,
    }
}

fn not_found(table: &TableDef, key: i64) -> Error {
    Error::record_not_found(format!("table={}; key={key}", table.name()))
}

/// OR of a substring match over every text-like column. A model without
/// such columns matches nothing.
fn search_filter(model: &FieldModel, term: &str) -> Expr {
    let matches = model
        .storage_fields()
        .filter(|field| {
            matches!(
                field.ty(),
                FieldType::Text | FieldType::TextArea | FieldType::Url | FieldType::Hidden
            )
        })
        .map(|field| Expr::contains(field.name(), term));

    Expr::or_from_iter(matches).unwrap_or(Expr::Or(vec![]))
}
