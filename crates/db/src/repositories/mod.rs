//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. Paginated lists return a
//! [`Page`](crate::paging::Page); single-row lookups return `Ok(None)` when
//! no row matches.

pub mod chord_quality_repo;
pub mod chord_repo;
pub mod key_repo;
pub mod pitch_repo;
pub mod scale_repo;

pub use chord_quality_repo::ChordQualityRepo;
pub use chord_repo::ChordRepo;
pub use key_repo::KeyRepo;
pub use pitch_repo::PitchRepo;
pub use scale_repo::ScaleRepo;
