//! Round-trip contracts for both record store backends.

use cinelog::store::{CsvStore, JsonStore, MovieStore};
use cinelog::types::{Collection, MovieEntry};
use proptest::prelude::*;
use tempfile::TempDir;

fn collection_strategy() -> impl Strategy<Value = Collection> {
    let entry = (1887i32..=2100, 0u32..=100, proptest::option::of("[a-z:/.]{0,30}")).prop_map(
        |(year, tenths, poster)| MovieEntry {
            year,
            rating: tenths as f64 / 10.0,
            poster: poster.unwrap_or_default(),
        },
    );
    proptest::collection::btree_map("[A-Za-z0-9 ,.!?'-]{1,24}", entry, 0..12)
}

proptest! {
    #[test]
    fn json_store_round_trips(collection in collection_strategy()) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("movies.json"));
        store.save(&collection).unwrap();
        prop_assert_eq!(store.load().unwrap(), collection);
    }

    #[test]
    fn csv_store_round_trips(collection in collection_strategy()) {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("movies.csv"));
        store.save(&collection).unwrap();
        prop_assert_eq!(store.load().unwrap(), collection);
    }
}

#[test]
fn both_backends_agree_on_the_same_collection() {
    let dir = TempDir::new().unwrap();

    let mut movies = Collection::new();
    movies.insert(
        "Titanic".to_string(),
        MovieEntry {
            rating: 9.2,
            year: 1997,
            poster: "https://example.com/titanic.jpg".to_string(),
        },
    );
    movies.insert(
        "Heat".to_string(),
        MovieEntry {
            rating: 8.3,
            year: 1995,
            poster: String::new(),
        },
    );

    let json = JsonStore::new(dir.path().join("movies.json"));
    let csv = CsvStore::new(dir.path().join("movies.csv"));
    json.save(&movies).unwrap();
    csv.save(&movies).unwrap();

    assert_eq!(json.load().unwrap(), csv.load().unwrap());
}

#[test]
fn overwrite_replaces_previous_state() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("movies.json"));

    let mut first = Collection::new();
    first.insert(
        "Old".to_string(),
        MovieEntry {
            rating: 5.0,
            year: 1990,
            poster: String::new(),
        },
    );
    store.save(&first).unwrap();

    let mut second = Collection::new();
    second.insert(
        "New".to_string(),
        MovieEntry {
            rating: 7.0,
            year: 2010,
            poster: String::new(),
        },
    );
    store.save(&second).unwrap();

    assert_eq!(store.load().unwrap(), second);
}
