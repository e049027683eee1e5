//! Film → cast/crew roster storage.

use crate::model::{CastId, CastMember, CrewId, CrewMember, FilmId};
use crate::primitives::IndexedStore;

/// Default bucket count for the film index.
const DEFAULT_FILM_BUCKETS: usize = 4096;

/// Rosters credited to one film.
#[derive(Debug)]
struct FilmCredits {
    cast: IndexedStore<CastId, CastMember>,
    crew: IndexedStore<CrewId, CrewMember>,
}

impl FilmCredits {
    fn new(cast: Vec<CastMember>, crew: Vec<CrewMember>) -> Self {
        let mut cast_store = IndexedStore::with_capacity(cast.len());
        for member in cast {
            cast_store.put(member.id, member);
        }
        let mut crew_store = IndexedStore::with_capacity(crew.len());
        for member in crew {
            crew_store.put(member.id, member);
        }
        Self {
            cast: cast_store,
            crew: crew_store,
        }
    }
}

/// Credits for every film: who starred in it and who worked on it.
///
/// Rosters are deduplicated by member id on insertion and enumerate in
/// billing (insertion) order.
#[derive(Debug)]
pub struct CreditStore {
    films: IndexedStore<FilmId, FilmCredits>,
}

impl Default for CreditStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_FILM_BUCKETS)
    }
}

impl CreditStore {
    /// Creates an empty store with the default film bucket count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with `capacity` film buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            films: IndexedStore::with_capacity(capacity),
        }
    }

    /// Number of credited films.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// True when no film has credits.
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Records the rosters of a film. Returns false and keeps the existing
    /// credits when the film is already present.
    pub fn add(&mut self, film: FilmId, cast: Vec<CastMember>, crew: Vec<CrewMember>) -> bool {
        if self.films.contains_key(film) {
            return false;
        }
        self.films.put(film, FilmCredits::new(cast, crew))
    }

    /// Removes a film's credits; reports whether anything was removed.
    pub fn remove(&mut self, film: FilmId) -> bool {
        self.films.remove(film)
    }

    /// All credited film ids in insertion order.
    pub fn film_ids(&self) -> Vec<FilmId> {
        self.films.keys().copied().collect()
    }

    /// Films a cast member appeared in, in film insertion order.
    pub fn films_for_cast(&self, cast: CastId) -> Vec<FilmId> {
        let mut films = Vec::new();
        for &film in self.films.keys() {
            if let Some(credits) = self.films.get(film) {
                if credits.cast.contains_key(cast) {
                    films.push(film);
                }
            }
        }
        films
    }

    /// Films a crew member worked on, in film insertion order.
    pub fn films_for_crew(&self, crew: CrewId) -> Vec<FilmId> {
        let mut films = Vec::new();
        for &film in self.films.keys() {
            if let Some(credits) = self.films.get(film) {
                if credits.crew.contains_key(crew) {
                    films.push(film);
                }
            }
        }
        films
    }

    /// Cast roster of a film in billing order; `None` for unknown films.
    pub fn cast_roster(&self, film: FilmId) -> Option<Vec<CastMember>> {
        let credits = self.films.get(film)?;
        let mut roster = Vec::with_capacity(credits.cast.len());
        for &id in credits.cast.keys() {
            if let Some(member) = credits.cast.get(id) {
                roster.push(member.clone());
            }
        }
        Some(roster)
    }

    /// Crew roster of a film; `None` for unknown films.
    pub fn crew_roster(&self, film: FilmId) -> Option<Vec<CrewMember>> {
        let credits = self.films.get(film)?;
        let mut roster = Vec::with_capacity(credits.crew.len());
        for &id in credits.crew.keys() {
            if let Some(member) = credits.crew.get(id) {
                roster.push(member.clone());
            }
        }
        Some(roster)
    }

    /// Cast roster size of a film; `None` for unknown films.
    pub fn cast_size(&self, film: FilmId) -> Option<usize> {
        self.films.get(film).map(|credits| credits.cast.len())
    }

    /// Crew roster size of a film; `None` for unknown films.
    pub fn crew_size(&self, film: FilmId) -> Option<usize> {
        self.films.get(film).map(|credits| credits.crew.len())
    }

    /// Billed name of a cast member, from the first film crediting them.
    pub fn cast_name(&self, cast: CastId) -> Option<&str> {
        for &film in self.films.keys() {
            if let Some(member) = self.films.get(film).and_then(|credits| credits.cast.get(cast)) {
                return Some(member.name.as_str());
            }
        }
        None
    }

    /// Billed name of a crew member, from the first film crediting them.
    pub fn crew_name(&self, crew: CrewId) -> Option<&str> {
        for &film in self.films.keys() {
            if let Some(member) = self.films.get(film).and_then(|credits| credits.crew.get(crew)) {
                return Some(member.name.as_str());
            }
        }
        None
    }

    /// All distinct cast ids, in first-appearance order.
    pub fn distinct_cast_ids(&self) -> Vec<CastId> {
        let mut total = 0;
        for &film in self.films.keys() {
            total += self.cast_size(film).unwrap_or(0);
        }
        let mut seen: IndexedStore<CastId, ()> = IndexedStore::with_capacity(total);
        for &film in self.films.keys() {
            if let Some(credits) = self.films.get(film) {
                for &id in credits.cast.keys() {
                    seen.put(id, ());
                }
            }
        }
        seen.keys().copied().collect()
    }

    /// All distinct crew ids, in first-appearance order.
    pub fn distinct_crew_ids(&self) -> Vec<CrewId> {
        let mut total = 0;
        for &film in self.films.keys() {
            total += self.crew_size(film).unwrap_or(0);
        }
        let mut seen: IndexedStore<CrewId, ()> = IndexedStore::with_capacity(total);
        for &film in self.films.keys() {
            if let Some(credits) = self.films.get(film) {
                for &id in credits.crew.keys() {
                    seen.put(id, ());
                }
            }
        }
        seen.keys().copied().collect()
    }

    /// Cast members whose name contains `fragment`, deduplicated by id.
    pub fn find_cast(&self, fragment: &str) -> Vec<CastMember> {
        let mut seen: IndexedStore<CastId, ()> = IndexedStore::with_capacity(self.films.len());
        let mut matches = Vec::new();
        for &film in self.films.keys() {
            if let Some(credits) = self.films.get(film) {
                for &id in credits.cast.keys() {
                    if let Some(member) = credits.cast.get(id) {
                        if member.name.contains(fragment) && seen.put(id, ()) {
                            matches.push(member.clone());
                        }
                    }
                }
            }
        }
        matches
    }

    /// Crew members whose name contains `fragment`, deduplicated by id.
    pub fn find_crew(&self, fragment: &str) -> Vec<CrewMember> {
        let mut seen: IndexedStore<CrewId, ()> = IndexedStore::with_capacity(self.films.len());
        let mut matches = Vec::new();
        for &film in self.films.keys() {
            if let Some(credits) = self.films.get(film) {
                for &id in credits.crew.keys() {
                    if let Some(member) = credits.crew.get(id) {
                        if member.name.contains(fragment) && seen.put(id, ()) {
                            matches.push(member.clone());
                        }
                    }
                }
            }
        }
        matches
    }
}
