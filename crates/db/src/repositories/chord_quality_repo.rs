//! Repository for the `chord_qualities` table.

use harmonia_core::pagination::Pagination;
use harmonia_core::types::DbId;
use sqlx::PgPool;

use crate::filter::{positive, Filter, FilterField, Predicate};
use crate::models::chord_quality::{ChordQuality, ChordQualityFilter, ChordQualityRow};
use crate::paging::{self, ListQuery, Page};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "q.id, q.name, q.number, q.cardinality, q.pitch_class_set, q.interval_pattern";

const FROM: &str = "chord_qualities q";

impl Filter for ChordQualityFilter {
    const FIELDS: &'static [FilterField<Self>] = &[
        FilterField {
            column: "q.number",
            value: |f| positive(f.number),
        },
        FilterField {
            column: "q.cardinality",
            value: |f| positive(f.cardinality),
        },
    ];
}

/// Provides read operations for chord qualities.
pub struct ChordQualityRepo;

impl ChordQualityRepo {
    /// List chord qualities matching `filter`, one page at a time.
    pub async fn list(
        pool: &PgPool,
        filter: &ChordQualityFilter,
        pagination: Pagination,
    ) -> Result<Page<ChordQuality>, sqlx::Error> {
        let predicate = Predicate::for_filter(filter);
        let query = ListQuery {
            columns: COLUMNS,
            from: FROM,
            order_by: "q.id",
            predicate: &predicate,
        };
        paging::list_page::<ChordQualityRow, ChordQuality>(pool, query, pagination).await
    }

    /// Find a chord quality by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ChordQuality>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE q.id = $1");
        sqlx::query_as::<_, ChordQualityRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(ChordQuality::try_from)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_number_then_cardinality() {
        let filter = ChordQualityFilter {
            number: 145,
            cardinality: 3,
        };
        assert_eq!(
            Predicate::for_filter(&filter).to_sql(),
            "q.number = $1 AND q.cardinality = $2"
        );
    }
}
