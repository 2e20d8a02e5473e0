//! Repository for the `pitches` table and its join tables.

use harmonia_core::pagination::Pagination;
use harmonia_core::types::DbId;
use sqlx::PgPool;

use crate::filter::{positive, Filter, FilterField, Predicate};
use crate::models::pitch::{Pitch, PitchFilter, PitchRow};
use crate::paging::{self, ListQuery, Page};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id, p.name, p.number, p.frequency";

const FROM: &str = "pitches p";
const FROM_CHORD_PITCHES: &str = "pitches p JOIN chord_pitches cp ON cp.pitch_id = p.id";
const FROM_KEY_PITCHES: &str = "pitches p JOIN key_pitches kp ON kp.pitch_id = p.id";

impl Filter for PitchFilter {
    const FIELDS: &'static [FilterField<Self>] = &[FilterField {
        column: "p.number",
        value: |f| positive(f.number),
    }];
}

/// Provides read operations for pitches.
pub struct PitchRepo;

impl PitchRepo {
    /// List pitches matching `filter`, one page at a time.
    pub async fn list(
        pool: &PgPool,
        filter: &PitchFilter,
        pagination: Pagination,
    ) -> Result<Page<Pitch>, sqlx::Error> {
        let predicate = Predicate::for_filter(filter);
        paging::list_page::<PitchRow, Pitch>(pool, Self::query(FROM, &predicate), pagination).await
    }

    /// Find a pitch by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pitch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE p.id = $1");
        sqlx::query_as::<_, PitchRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Pitch::try_from)
            .transpose()
    }

    /// List the member pitches of a chord.
    pub async fn list_of_chord(
        pool: &PgPool,
        chord_id: DbId,
        filter: &PitchFilter,
        pagination: Pagination,
    ) -> Result<Page<Pitch>, sqlx::Error> {
        let predicate = Predicate::scoped("cp.chord_id", chord_id, filter);
        paging::list_page::<PitchRow, Pitch>(
            pool,
            Self::query(FROM_CHORD_PITCHES, &predicate),
            pagination,
        )
        .await
    }

    /// List the member pitches of a key.
    pub async fn list_of_key(
        pool: &PgPool,
        key_id: DbId,
        filter: &PitchFilter,
        pagination: Pagination,
    ) -> Result<Page<Pitch>, sqlx::Error> {
        let predicate = Predicate::scoped("kp.key_id", key_id, filter);
        paging::list_page::<PitchRow, Pitch>(
            pool,
            Self::query(FROM_KEY_PITCHES, &predicate),
            pagination,
        )
        .await
    }

    /// All member pitches of a chord, for the chord detail view.
    pub async fn list_all_of_chord(pool: &PgPool, chord_id: DbId) -> Result<Vec<Pitch>, sqlx::Error> {
        let predicate = Predicate::scoped("cp.chord_id", chord_id, &PitchFilter::default());
        paging::list_all::<PitchRow, Pitch>(pool, Self::query(FROM_CHORD_PITCHES, &predicate)).await
    }

    /// All member pitches of a key, for the key detail view.
    pub async fn list_all_of_key(pool: &PgPool, key_id: DbId) -> Result<Vec<Pitch>, sqlx::Error> {
        let predicate = Predicate::scoped("kp.key_id", key_id, &PitchFilter::default());
        paging::list_all::<PitchRow, Pitch>(pool, Self::query(FROM_KEY_PITCHES, &predicate)).await
    }

    fn query<'a>(from: &'static str, predicate: &'a Predicate) -> ListQuery<'a> {
        ListQuery {
            columns: COLUMNS,
            from,
            order_by: "p.id",
            predicate,
        }
    }
}
