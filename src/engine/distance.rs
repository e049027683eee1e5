use tracing::debug;

use super::{CatalogSource, CollaborationEngine};
use crate::model::CastId;

impl<'a, S: CatalogSource> CollaborationEngine<'a, S> {
    /// Shortest collaboration path from `a` to `b`.
    ///
    /// The result lists the cast ids after `a` along the path, ending with
    /// `b`; two direct co-stars yield `[b]`. Equal ids return `[b]` without
    /// building a graph. Unknown ids and unreachable pairs return an empty
    /// path. The graph spans the full distinct-cast universe and is rebuilt
    /// on every call.
    pub fn distance(&self, a: CastId, b: CastId) -> Vec<CastId> {
        if a == b {
            return vec![b];
        }

        let ids = self.source.distinct_cast_ids();
        if ids.is_empty() {
            return Vec::new();
        }
        debug!(nodes = ids.len(), "distance.universe");

        let graph = self.shared_film_graph(ids);
        let (Some(source), Some(target)) = (graph.index_of(a), graph.index_of(b)) else {
            return Vec::new();
        };

        let mut path = graph.shortest_path(source, target);
        if path.is_empty() {
            return Vec::new();
        }

        // The reconstructed path starts at the source itself; callers only
        // want the steps after it.
        path.pop_head();
        path.iter().map(|&position| graph.id_at(position)).collect()
    }
}
