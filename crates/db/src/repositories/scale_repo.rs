//! Repository for the `scales` table.

use harmonia_core::pagination::Pagination;
use harmonia_core::types::DbId;
use sqlx::PgPool;

use crate::filter::{flag, non_negative, positive, Filter, FilterField, Predicate};
use crate::models::scale::{Scale, ScaleFilter, ScaleRow};
use crate::paging::{self, ListQuery, Page};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    s.id, s.name, s.cardinality, s.number, s.perfection, s.imperfection, \
    s.pitch_class_set, s.interval_pattern, s.rotational_symmetric, \
    s.rotational_symmetry_level, s.reflectional_symmetric, s.reflection_axes, \
    s.palindromic, s.balanced";

const FROM: &str = "scales s";

impl Filter for ScaleFilter {
    const FIELDS: &'static [FilterField<Self>] = &[
        FilterField {
            column: "s.number",
            value: |f| positive(f.number),
        },
        FilterField {
            column: "s.cardinality",
            value: |f| positive(f.cardinality),
        },
        FilterField {
            column: "s.perfection",
            value: |f| non_negative(f.perfection),
        },
        FilterField {
            column: "s.imperfection",
            value: |f| non_negative(f.imperfection),
        },
        FilterField {
            column: "s.balanced",
            value: |f| flag(f.balanced),
        },
        FilterField {
            column: "s.rotational_symmetric",
            value: |f| flag(f.rotational_symmetric),
        },
        FilterField {
            column: "s.rotational_symmetry_level",
            value: |f| positive(f.rotational_symmetry_level),
        },
        FilterField {
            column: "s.reflectional_symmetric",
            value: |f| flag(f.reflectional_symmetric),
        },
        FilterField {
            column: "s.palindromic",
            value: |f| flag(f.palindromic),
        },
    ];
}

/// Provides read operations for scales.
pub struct ScaleRepo;

impl ScaleRepo {
    /// List scales matching `filter`, one page at a time.
    pub async fn list(
        pool: &PgPool,
        filter: &ScaleFilter,
        pagination: Pagination,
    ) -> Result<Page<Scale>, sqlx::Error> {
        let predicate = Predicate::for_filter(filter);
        let query = ListQuery {
            columns: COLUMNS,
            from: FROM,
            order_by: "s.id",
            predicate: &predicate,
        };
        paging::list_page::<ScaleRow, Scale>(pool, query, pagination).await
    }

    /// Find a scale by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scale>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE s.id = $1");
        sqlx::query_as::<_, ScaleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Scale::try_from)
            .transpose()
    }
}
