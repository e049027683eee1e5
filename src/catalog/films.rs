//! Film metadata storage.

use time::Date;

use crate::model::{Film, FilmId};
use crate::primitives::IndexedStore;

/// Default bucket count for the film index.
const DEFAULT_FILM_BUCKETS: usize = 4096;

/// Keyed film metadata with release-range queries.
///
/// Range queries are exclusive on both bounds, matching the rating store's
/// timestamp ranges.
#[derive(Debug)]
pub struct FilmStore {
    films: IndexedStore<FilmId, Film>,
}

impl Default for FilmStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_FILM_BUCKETS)
    }
}

impl FilmStore {
    /// Creates an empty store with the default bucket count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            films: IndexedStore::with_capacity(capacity),
        }
    }

    /// Number of stored films.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// True when no film is stored.
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// True when `id` is stored.
    pub fn contains(&self, id: FilmId) -> bool {
        self.films.contains_key(id)
    }

    /// Stores a film. Returns false and keeps the existing record when the
    /// id is already present.
    pub fn add(&mut self, film: Film) -> bool {
        self.films.put(film.id, film)
    }

    /// Removes a film; reports whether one was removed.
    pub fn remove(&mut self, id: FilmId) -> bool {
        self.films.remove(id)
    }

    /// Stored film ids in insertion order.
    pub fn ids(&self) -> Vec<FilmId> {
        self.films.keys().copied().collect()
    }

    /// Full record of a film.
    pub fn get(&self, id: FilmId) -> Option<&Film> {
        self.films.get(id)
    }

    /// Title of a film.
    pub fn title(&self, id: FilmId) -> Option<&str> {
        self.films.get(id).map(|film| film.title.as_str())
    }

    /// Release date of a film.
    pub fn release(&self, id: FilmId) -> Option<Date> {
        self.films.get(id).map(|film| film.release)
    }

    /// Budget of a film.
    pub fn budget(&self, id: FilmId) -> Option<i64> {
        self.films.get(id).map(|film| film.budget)
    }

    /// Revenue of a film.
    pub fn revenue(&self, id: FilmId) -> Option<i64> {
        self.films.get(id).map(|film| film.revenue)
    }

    /// Runtime of a film in minutes.
    pub fn runtime(&self, id: FilmId) -> Option<f64> {
        self.films.get(id).map(|film| film.runtime)
    }

    /// Films released strictly between `start` and `end`, in insertion
    /// order.
    pub fn released_in_range(&self, start: Date, end: Date) -> Vec<FilmId> {
        let mut ids = Vec::new();
        for &id in self.films.keys() {
            if let Some(film) = self.films.get(id) {
                if film.release > start && film.release < end {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Films released strictly between `start` and `end` with a budget in
    /// `[min_budget, max_budget]`.
    pub fn released_in_range_with_budget(
        &self,
        start: Date,
        end: Date,
        min_budget: i64,
        max_budget: i64,
    ) -> Vec<FilmId> {
        let mut ids = Vec::new();
        for &id in self.films.keys() {
            if let Some(film) = self.films.get(id) {
                if film.release > start
                    && film.release < end
                    && film.budget >= min_budget
                    && film.budget <= max_budget
                {
                    ids.push(id);
                }
            }
        }
        ids
    }
}
