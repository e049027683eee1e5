//! In-memory collaboration analytics over a film catalog.
//!
//! Cinegraph indexes films, cast and crew rosters, and user ratings, and
//! answers structural questions about collaboration between cast members:
//! which actors qualify as stars or superstars, and the shortest
//! co-appearance path between two actors.
//!
//! Every associative lookup runs through the crate's own containers
//! ([`primitives::IndexedStore`], [`primitives::Sequence`],
//! [`primitives::Queue`]); the collaboration graph is a dense
//! co-occurrence count matrix with BFS shortest paths. Classification and
//! distance queries rebuild their graphs from scratch on every call, and the
//! matrix is O(N²) in the number of nodes considered, which bounds the
//! practical dataset size. Nothing here persists or synchronizes: sharing a
//! store across threads requires external locking.

#![warn(missing_docs)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod graph;
pub mod model;
pub mod primitives;

pub use catalog::{Catalog, CreditStore, FilmStore, RatingStore};
pub use engine::{CatalogSource, CollaborationEngine};
pub use error::{EngineError, Result};
pub use graph::CollaborationGraph;
pub use model::{CastId, CastMember, CrewId, CrewMember, Film, FilmId, Rating, UserId};
pub use primitives::{IndexedStore, Queue, Sequence};
