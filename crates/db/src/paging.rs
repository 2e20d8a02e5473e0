//! Count-then-fetch execution of paginated list queries.
//!
//! [`fetch_page`] runs the two-phase protocol against any [`PageSource`]:
//!
//! 1. count the rows matching the predicate;
//! 2. if the requested page starts past the last row, return an empty page
//!    with no pagination metadata and skip the second query;
//! 3. otherwise fetch the page with `OFFSET`/`LIMIT` bound after the filter
//!    values.
//!
//! [`SqlPageSource`] is the PostgreSQL implementation. Errors from either
//! phase are returned unchanged.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use harmonia_core::pagination::Pagination;

use crate::filter::{bind_values, bind_values_scalar, Predicate};

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of results.
///
/// `pagination` is `None` when the requested page starts past the last
/// matching row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// An empty page with withheld pagination metadata.
    pub fn beyond_range() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Source trait + protocol
// ---------------------------------------------------------------------------

/// The two queries the paging protocol needs.
#[async_trait]
pub trait PageSource: Sync {
    type Item: Send;

    /// Number of rows matching the predicate.
    async fn count(&self) -> Result<i64, sqlx::Error>;

    /// Rows `offset..offset + limit` in primary key order.
    async fn fetch(&self, offset: i64, limit: i64) -> Result<Vec<Self::Item>, sqlx::Error>;
}

/// Run the count-then-fetch protocol for one page.
pub async fn fetch_page<S: PageSource>(
    source: &S,
    mut pagination: Pagination,
) -> Result<Page<S::Item>, sqlx::Error> {
    let total = source.count().await?;

    if pagination.is_beyond(total) {
        tracing::debug!(
            total,
            page = pagination.page,
            per_page = pagination.per_page,
            "Requested page starts past the last row"
        );
        return Ok(Page::beyond_range());
    }

    pagination.populate(total);
    let items = source
        .fetch(pagination.offset(), pagination.per_page)
        .await?;

    Ok(Page {
        items,
        pagination: Some(pagination),
    })
}

// ---------------------------------------------------------------------------
// SQL
// ---------------------------------------------------------------------------

/// The pieces of a list query that the count and fetch phases share.
#[derive(Debug, Clone, Copy)]
pub struct ListQuery<'a> {
    /// Select list for the fetch phase.
    pub columns: &'static str,
    /// `FROM` target including joins, without the keyword.
    pub from: &'static str,
    /// Primary key column used for deterministic ordering.
    pub order_by: &'static str,
    pub predicate: &'a Predicate,
}

impl ListQuery<'_> {
    pub fn count_sql(&self) -> String {
        format!(
            "SELECT COUNT(1) FROM {} WHERE {}",
            self.from,
            self.predicate.to_sql()
        )
    }

    /// Fetch SQL with `OFFSET`/`LIMIT` placeholders after the filter values.
    pub fn page_sql(&self) -> String {
        let offset_idx = self.predicate.next_index();
        format!(
            "{} OFFSET ${offset_idx} LIMIT ${}",
            self.all_sql(),
            offset_idx + 1
        )
    }

    /// Fetch SQL without page bounds.
    pub fn all_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} ORDER BY {} ASC",
            self.columns,
            self.from,
            self.predicate.to_sql(),
            self.order_by
        )
    }
}

/// [`PageSource`] backed by PostgreSQL.
///
/// Rows are read as `R` and assembled into `T` through `TryFrom`.
pub struct SqlPageSource<'a, R, T> {
    pool: &'a PgPool,
    query: ListQuery<'a>,
    _row: PhantomData<fn() -> (R, T)>,
}

impl<'a, R, T> SqlPageSource<'a, R, T> {
    pub fn new(pool: &'a PgPool, query: ListQuery<'a>) -> Self {
        Self {
            pool,
            query,
            _row: PhantomData,
        }
    }
}

#[async_trait]
impl<'a, R, T> PageSource for SqlPageSource<'a, R, T>
where
    R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    T: TryFrom<R, Error = sqlx::Error> + Send,
{
    type Item = T;

    async fn count(&self) -> Result<i64, sqlx::Error> {
        let sql = self.query.count_sql();
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&sql), self.query.predicate.values())
            .fetch_one(self.pool)
            .await
    }

    async fn fetch(&self, offset: i64, limit: i64) -> Result<Vec<T>, sqlx::Error> {
        let sql = self.query.page_sql();
        let rows = bind_values(sqlx::query_as::<_, R>(&sql), self.query.predicate.values())
            .bind(offset)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;
        rows.into_iter().map(T::try_from).collect()
    }
}

/// Run a paginated list query.
pub async fn list_page<R, T>(
    pool: &PgPool,
    query: ListQuery<'_>,
    pagination: Pagination,
) -> Result<Page<T>, sqlx::Error>
where
    R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    T: TryFrom<R, Error = sqlx::Error> + Send,
{
    fetch_page(&SqlPageSource::<R, T>::new(pool, query), pagination).await
}

/// Run a list query without page bounds.
pub async fn list_all<R, T>(pool: &PgPool, query: ListQuery<'_>) -> Result<Vec<T>, sqlx::Error>
where
    R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    T: TryFrom<R, Error = sqlx::Error>,
{
    let sql = query.all_sql();
    let rows = bind_values(sqlx::query_as::<_, R>(&sql), query.predicate.values())
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(T::try_from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
