//! Repository for the `chords` table and its join tables.
//!
//! Chords are always read joined with their quality (`q`) and root pitch
//! (`r`) so a single row assembles into a nested [`Chord`].

use harmonia_core::pagination::Pagination;
use harmonia_core::types::DbId;
use sqlx::PgPool;

use crate::filter::{positive, positive_id, Filter, FilterField, Predicate};
use crate::models::chord::{Chord, ChordDetail, ChordFilter, ChordRow};
use crate::paging::{self, ListQuery, Page};
use crate::repositories::PitchRepo;

/// Column list shared across queries, aliased to match [`ChordRow`].
const COLUMNS: &str = "\
    c.id, c.name, c.number, \
    q.id AS quality_id, q.name AS quality_name, q.number AS quality_number, \
    q.cardinality AS quality_cardinality, q.pitch_class_set AS quality_pitch_class_set, \
    q.interval_pattern AS quality_interval_pattern, \
    r.id AS root_id, r.name AS root_name, r.number AS root_number, \
    r.frequency AS root_frequency";

const FROM: &str = "\
    chords c \
    JOIN chord_qualities q ON q.id = c.chord_quality_id \
    JOIN pitches r ON r.id = c.root_id";

const FROM_KEY_CHORDS: &str = "\
    chords c \
    JOIN chord_qualities q ON q.id = c.chord_quality_id \
    JOIN pitches r ON r.id = c.root_id \
    JOIN key_chords kc ON kc.chord_id = c.id";

const FROM_CHORD_PITCHES: &str = "\
    chords c \
    JOIN chord_qualities q ON q.id = c.chord_quality_id \
    JOIN pitches r ON r.id = c.root_id \
    JOIN chord_pitches cp ON cp.chord_id = c.id";

impl Filter for ChordFilter {
    const FIELDS: &'static [FilterField<Self>] = &[
        FilterField {
            column: "c.root_id",
            value: |f| positive_id(f.root_id),
        },
        FilterField {
            column: "c.chord_quality_id",
            value: |f| positive_id(f.chord_quality_id),
        },
        FilterField {
            column: "c.number",
            value: |f| positive(f.number),
        },
        FilterField {
            column: "q.cardinality",
            value: |f| positive(f.cardinality),
        },
    ];
}

/// Provides read operations for chords.
pub struct ChordRepo;

impl ChordRepo {
    /// List chords matching `filter`, one page at a time.
    pub async fn list(
        pool: &PgPool,
        filter: &ChordFilter,
        pagination: Pagination,
    ) -> Result<Page<Chord>, sqlx::Error> {
        let predicate = Predicate::for_filter(filter);
        paging::list_page::<ChordRow, Chord>(pool, Self::query(FROM, &predicate), pagination).await
    }

    /// Find a chord by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE c.id = $1");
        sqlx::query_as::<_, ChordRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Chord::try_from)
            .transpose()
    }

    /// Find a chord by its ID together with its member pitches.
    ///
    /// Runs the chord query, then the member pitch query. Either failing
    /// fails the whole lookup.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ChordDetail>, sqlx::Error> {
        let Some(chord) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let pitches = PitchRepo::list_all_of_chord(pool, id).await?;
        Ok(Some(ChordDetail { chord, pitches }))
    }

    /// List the chords playable in a key.
    pub async fn list_of_key(
        pool: &PgPool,
        key_id: DbId,
        filter: &ChordFilter,
        pagination: Pagination,
    ) -> Result<Page<Chord>, sqlx::Error> {
        let predicate = Predicate::scoped("kc.key_id", key_id, filter);
        paging::list_page::<ChordRow, Chord>(
            pool,
            Self::query(FROM_KEY_CHORDS, &predicate),
            pagination,
        )
        .await
    }

    /// List the chords built on a quality.
    pub async fn list_of_quality(
        pool: &PgPool,
        quality_id: DbId,
        filter: &ChordFilter,
        pagination: Pagination,
    ) -> Result<Page<Chord>, sqlx::Error> {
        let predicate = Predicate::scoped("c.chord_quality_id", quality_id, filter);
        paging::list_page::<ChordRow, Chord>(pool, Self::query(FROM, &predicate), pagination).await
    }

    /// List the chords containing a pitch.
    pub async fn list_of_pitch(
        pool: &PgPool,
        pitch_id: DbId,
        filter: &ChordFilter,
        pagination: Pagination,
    ) -> Result<Page<Chord>, sqlx::Error> {
        let predicate = Predicate::scoped("cp.pitch_id", pitch_id, filter);
        paging::list_page::<ChordRow, Chord>(
            pool,
            Self::query(FROM_CHORD_PITCHES, &predicate),
            pagination,
        )
        .await
    }

    fn query<'a>(from: &'static str, predicate: &'a Predicate) -> ListQuery<'a> {
        ListQuery {
            columns: COLUMNS,
            from,
            order_by: "c.id",
            predicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::BindValue;

    #[test]
    fn cardinality_filter_targets_the_quality() {
        let filter = ChordFilter {
            cardinality: 4,
            ..Default::default()
        };
        let predicate = Predicate::for_filter(&filter);

        assert_eq!(predicate.to_sql(), "q.cardinality = $1");
        assert_eq!(predicate.values(), [BindValue::Int(4)]);
    }

    #[test]
    fn every_filter_in_declaration_order() {
        let filter = ChordFilter {
            root_id: 1,
            chord_quality_id: 2,
            number: 3,
            cardinality: 4,
        };
        assert_eq!(
            Predicate::for_filter(&filter).conditions(),
            [
                "c.root_id = $1",
                "c.chord_quality_id = $2",
                "c.number = $3",
                "q.cardinality = $4",
            ]
        );
    }

    #[test]
    fn key_scope_binds_before_filters_and_page_bounds() {
        let filter = ChordFilter {
            root_id: 7,
            ..Default::default()
        };
        let predicate = Predicate::scoped("kc.key_id", 3, &filter);
        let sql = ChordRepo::query(FROM_KEY_CHORDS, &predicate).page_sql();

        assert!(sql.contains("JOIN key_chords kc ON kc.chord_id = c.id"));
        assert!(sql.ends_with(
            "WHERE kc.key_id = $1 AND c.root_id = $2 ORDER BY c.id ASC OFFSET $3 LIMIT $4"
        ));
    }

    #[test]
    fn select_list_covers_the_nested_row() {
        for alias in [
            "quality_id",
            "quality_pitch_class_set",
            "quality_interval_pattern",
            "root_frequency",
        ] {
            assert!(COLUMNS.contains(&format!("AS {alias}")), "missing {alias}");
        }
    }
}
