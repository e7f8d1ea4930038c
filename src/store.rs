use crate::error::FooStoreError;
use crate::filter::{FooListOptions, ListFilter};
use crate::model::Foo;
use crate::query_builder::{Page, Wheres, build_statement};
use crate::queryer::Queryer;
use crate::types::RowValues;

/// Base statement every list and get call extends.
pub const SELECT_FOO: &str = "SELECT id, value, timestamp FROM foo";

/// Reads and writes `foo` records through any [`Queryer`].
///
/// Statements are written with `?` placeholders and rebound for the backend just before they
/// run. Driver errors are returned unchanged.
#[derive(Debug, Clone)]
pub struct FooStore<Q> {
    db: Q,
}

impl<Q: Queryer> FooStore<Q> {
    pub fn new(db: Q) -> Self {
        Self { db }
    }

    pub fn queryer(&self) -> &Q {
        &self.db
    }

    /// Create the `foo` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the DDL fails.
    pub async fn create_table(&self) -> Result<(), FooStoreError> {
        let ddl = self.db.database_type().foo_table_ddl();
        self.db.exec(ddl, &[]).await?;
        tracing::debug!("foo table ready");
        Ok(())
    }

    /// Insert `value` stamped with the database's current time, returning the new id.
    ///
    /// # Errors
    ///
    /// Returns the backend's error, or `FooStoreError::ExecutionError` if no id came back.
    pub async fn insert(&self, value: &str) -> Result<i64, FooStoreError> {
        let sql = format!(
            "INSERT INTO foo (value, timestamp) VALUES (?, {}) RETURNING id",
            self.db.database_type().now_expr()
        );
        let rows = self
            .db
            .select(&self.db.rebind(&sql), &[RowValues::Text(value.to_string())])
            .await?;

        let id = rows
            .results
            .first()
            .and_then(|row| row.get("id"))
            .and_then(RowValues::as_int)
            .copied()
            .ok_or_else(|| {
                FooStoreError::ExecutionError("insert into foo returned no id".to_string())
            })?;
        tracing::debug!(id, "inserted foo record");
        Ok(id)
    }

    /// Records matching `opts`, paginated by `opts.page`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error or a row conversion error; no partial list is returned.
    pub async fn list(&self, opts: &FooListOptions) -> Result<Vec<Foo>, FooStoreError> {
        let filters: [&(dyn ListFilter + Sync); 1] = [opts];
        self.list_with(&filters, &opts.page).await
    }

    /// Every record, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// See [`FooStore::list`].
    pub async fn list_all(&self) -> Result<Vec<Foo>, FooStoreError> {
        self.list(&FooListOptions::default()).await
    }

    /// Records matching every filter in `filters`, applied in order, paginated by `page`.
    ///
    /// # Errors
    ///
    /// See [`FooStore::list`].
    pub async fn list_with(
        &self,
        filters: &[&(dyn ListFilter + Sync)],
        page: &Page,
    ) -> Result<Vec<Foo>, FooStoreError> {
        let mut wheres = Wheres::new();
        for filter in filters {
            filter.apply(&mut wheres);
        }
        let (conditions, params) = wheres.into_parts();
        let query = build_statement(SELECT_FOO, &conditions, &page.clause());
        self.fetch(&query, &params).await
    }

    /// The record with `id`, if there is one.
    ///
    /// # Errors
    ///
    /// See [`FooStore::list`].
    pub async fn get(&self, id: i64) -> Result<Option<Foo>, FooStoreError> {
        let mut wheres = Wheres::new();
        wheres.push_eq(FooListOptions::ID_COLUMN, RowValues::Int(id));
        let query = build_statement(SELECT_FOO, wheres.conditions(), "");
        Ok(self.fetch(&query, wheres.params()).await?.into_iter().next())
    }

    async fn fetch(&self, query: &str, params: &[RowValues]) -> Result<Vec<Foo>, FooStoreError> {
        let query = self.db.rebind(query);
        tracing::debug!(%query, params = params.len(), "selecting foo");
        let rows = self.db.select(&query, params).await?;
        rows.results.iter().map(Foo::from_row).collect()
    }
}
