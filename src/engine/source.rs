use crate::model::{CastId, CastMember, FilmId};

/// Read-only catalog surface consumed by the engine.
///
/// Absent ids are not errors anywhere on this trait: unknown films have
/// empty rosters and unknown cast members have no films.
pub trait CatalogSource {
    /// Films whose average rating is at least `min_avg`.
    fn films_rated_at_least(&self, min_avg: f32) -> Vec<FilmId>;

    /// Cast roster of a film; empty when the film is unknown.
    fn cast_roster(&self, film: FilmId) -> Vec<CastMember>;

    /// Every film a cast member appeared in; empty when the member is
    /// unknown.
    fn films_for_cast(&self, cast: CastId) -> Vec<FilmId>;

    /// All distinct cast ids in the dataset, in first-appearance order.
    fn distinct_cast_ids(&self) -> Vec<CastId>;
}
