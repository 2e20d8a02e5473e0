//! Repository for the `keys` table and its join tables.
//!
//! Keys are read joined with their tonic pitch (`t`) and their scale (`s`);
//! the scale join backs the `cardinality` filter.

use harmonia_core::pagination::Pagination;
use harmonia_core::types::DbId;
use sqlx::PgPool;

use crate::filter::{flag, positive, positive_id, BindValue, Filter, FilterField, Predicate};
use crate::models::key::{Key, KeyDetail, KeyFilter, KeyRow};
use crate::paging::{self, ListQuery, Page};
use crate::repositories::PitchRepo;

/// Column list shared across queries, aliased to match [`KeyRow`].
const COLUMNS: &str = "\
    k.id, k.scale_id, k.name, k.number, k.balanced, k.center_x, k.center_y, k.rotation, \
    t.id AS tonic_id, t.name AS tonic_name, t.number AS tonic_number, \
    t.frequency AS tonic_frequency";

const FROM: &str = "\
    keys k \
    JOIN pitches t ON t.id = k.tonic_id \
    JOIN scales s ON s.id = k.scale_id";

const FROM_KEY_CHORDS: &str = "\
    keys k \
    JOIN pitches t ON t.id = k.tonic_id \
    JOIN scales s ON s.id = k.scale_id \
    JOIN key_chords kc ON kc.key_id = k.id";

const FROM_KEY_PITCHES: &str = "\
    keys k \
    JOIN pitches t ON t.id = k.tonic_id \
    JOIN scales s ON s.id = k.scale_id \
    JOIN key_pitches kp ON kp.key_id = k.id";

impl Filter for KeyFilter {
    const FIELDS: &'static [FilterField<Self>] = &[
        FilterField {
            column: "k.scale_id",
            value: |f| positive_id(f.scale_id),
        },
        FilterField {
            column: "k.tonic_id",
            value: |f| positive_id(f.tonic_id),
        },
        FilterField {
            column: "k.number",
            value: |f| positive(f.number),
        },
        FilterField {
            column: "s.cardinality",
            value: |f| positive(f.cardinality),
        },
        FilterField {
            column: "k.balanced",
            value: |f| flag(f.balanced),
        },
    ];
}

/// Provides read operations for keys.
pub struct KeyRepo;

impl KeyRepo {
    /// List keys matching `filter`, one page at a time.
    pub async fn list(
        pool: &PgPool,
        filter: &KeyFilter,
        pagination: Pagination,
    ) -> Result<Page<Key>, sqlx::Error> {
        let predicate = Predicate::for_filter(filter);
        paging::list_page::<KeyRow, Key>(pool, Self::query(FROM, &predicate), pagination).await
    }

    /// Find a key by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Key>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE k.id = $1");
        sqlx::query_as::<_, KeyRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Key::try_from)
            .transpose()
    }

    /// Find a key by its ID together with its member pitches.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<KeyDetail>, sqlx::Error> {
        let Some(key) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let pitches = PitchRepo::list_all_of_key(pool, id).await?;
        Ok(Some(KeyDetail { key, pitches }))
    }

    /// List the keys built on a scale.
    pub async fn list_of_scale(
        pool: &PgPool,
        scale_id: DbId,
        filter: &KeyFilter,
        pagination: Pagination,
    ) -> Result<Page<Key>, sqlx::Error> {
        let predicate = Predicate::scoped("k.scale_id", scale_id, filter);
        paging::list_page::<KeyRow, Key>(pool, Self::query(FROM, &predicate), pagination).await
    }

    /// List the keys a chord is playable in.
    pub async fn list_of_chord(
        pool: &PgPool,
        chord_id: DbId,
        filter: &KeyFilter,
        pagination: Pagination,
    ) -> Result<Page<Key>, sqlx::Error> {
        let predicate = Predicate::scoped("kc.chord_id", chord_id, filter);
        paging::list_page::<KeyRow, Key>(
            pool,
            Self::query(FROM_KEY_CHORDS, &predicate),
            pagination,
        )
        .await
    }

    /// List the keys containing a pitch.
    pub async fn list_of_pitch(
        pool: &PgPool,
        pitch_id: DbId,
        filter: &KeyFilter,
        pagination: Pagination,
    ) -> Result<Page<Key>, sqlx::Error> {
        let predicate = Predicate::scoped("kp.pitch_id", pitch_id, filter);
        paging::list_page::<KeyRow, Key>(
            pool,
            Self::query(FROM_KEY_PITCHES, &predicate),
            pagination,
        )
        .await
    }

    /// List every key sharing the rotation class of `key_id`, the key itself
    /// included.
    ///
    /// Unpaginated: no count query and no page bounds.
    pub async fn list_modes(
        pool: &PgPool,
        key_id: DbId,
        filter: &KeyFilter,
    ) -> Result<Vec<Key>, sqlx::Error> {
        let predicate = Self::modes_predicate(key_id, filter);
        paging::list_all::<KeyRow, Key>(pool, Self::query(FROM, &predicate)).await
    }

    fn modes_predicate(key_id: DbId, filter: &KeyFilter) -> Predicate {
        let mut predicate = Predicate::new();
        predicate.push_with(
            |p| format!("k.rotation = (SELECT m.rotation FROM keys m WHERE m.id = {p})"),
            BindValue::BigInt(key_id),
        );
        predicate.apply(filter);
        predicate
    }

    fn query<'a>(from: &'static str, predicate: &'a Predicate) -> ListQuery<'a> {
        ListQuery {
            columns: COLUMNS,
            from,
            order_by: "k.id",
            predicate,
        }
    }
}
