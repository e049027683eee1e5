use tracing::debug;

use super::{
    CatalogSource, CollaborationEngine, STAR_MIN_APPEARANCES, STAR_MIN_AVERAGE,
    SUPERSTAR_MIN_SHARED,
};
use crate::model::CastId;
use crate::primitives::IndexedStore;

impl<'a, S: CatalogSource> CollaborationEngine<'a, S> {
    /// Cast ids qualifying as stars, in discovery order.
    ///
    /// A star appears in at least one film with an average rating of
    /// [`STAR_MIN_AVERAGE`] or better AND has at least
    /// [`STAR_MIN_APPEARANCES`] appearances counted across the whole
    /// dataset, not only the highly-rated subset.
    pub fn find_stars(&self) -> Vec<CastId> {
        let qualifying = self.source.films_rated_at_least(STAR_MIN_AVERAGE);
        let mut rosters = Vec::with_capacity(qualifying.len());
        for film in qualifying {
            rosters.push(self.source.cast_roster(film));
        }

        let candidates: usize = rosters.iter().map(|roster| roster.len()).sum();
        let mut stars: IndexedStore<CastId, ()> = IndexedStore::with_capacity(candidates);
        for roster in &rosters {
            for member in roster {
                if stars.contains_key(member.id) {
                    continue;
                }
                if self.source.films_for_cast(member.id).len() >= STAR_MIN_APPEARANCES {
                    stars.put(member.id, ());
                }
            }
        }

        debug!(stars = stars.len(), "classify.stars");
        stars.keys().copied().collect()
    }

    /// Star cast ids that also share at least [`SUPERSTAR_MIN_SHARED`] films
    /// with some single other star.
    ///
    /// Builds a fresh shared-film graph whose node set is exactly the star
    /// set; each shared film adds one count per direction of the pair.
    pub fn find_superstars(&self) -> Vec<CastId> {
        let stars = self.find_stars();
        let graph = self.shared_film_graph(stars);
        let superstars: Vec<CastId> = graph
            .nodes_with_min_shared(SUPERSTAR_MIN_SHARED)
            .into_iter()
            .map(|position| graph.id_at(position))
            .collect();
        debug!(superstars = superstars.len(), "classify.superstars");
        superstars
    }
}
