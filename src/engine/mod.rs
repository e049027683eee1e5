//! Collaboration queries: star and superstar classification, distance.

mod distance;
mod source;
mod stars;


pub use source::CatalogSource;

use crate::graph::CollaborationGraph;
use crate::model::CastId;

/// Minimum per-film average rating for a film to count toward stardom.
pub const STAR_MIN_AVERAGE: f32 = 4.0;
/// Minimum number of appearances (across the whole dataset) for a star.
pub const STAR_MIN_APPEARANCES: usize = 3;
/// Shared-film count with a single other star that makes a superstar.
pub const SUPERSTAR_MIN_SHARED: u32 = 2;

/// Query engine over a read-only catalog source.
///
/// Every query rebuilds its collaboration graph from the source on each
/// call; nothing is cached between calls, so query cost scales with the
/// catalog on every invocation. The superstar graph is O(S²) in the star
/// count and the distance graph O(N²) in the distinct-cast count.
#[derive(Debug)]
pub struct CollaborationEngine<'a, S> {
    source: &'a S,
}

impl<'a, S: CatalogSource> CollaborationEngine<'a, S> {
    /// Creates an engine reading from `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Builds a symmetric shared-film graph over `ids`.
    ///
    /// For every node, every co-appearance in one of that node's films adds
    /// one count to the node's row; iterating all nodes covers both
    /// directions of each pair. Roster members outside `ids` are skipped.
    fn shared_film_graph(&self, ids: Vec<CastId>) -> CollaborationGraph {
        let mut graph = CollaborationGraph::new(ids);
        for position in 0..graph.len() {
            let id = graph.id_at(position);
            for film in self.source.films_for_cast(id) {
                for member in self.source.cast_roster(film) {
                    if member.id == id {
                        continue;
                    }
                    if let Some(other) = graph.index_of(member.id) {
                        graph.add_connection(position, other);
                    }
                }
            }
        }
        graph
    }
}
