use std::io::Write as _;

use cinegraph::catalog::{load_credits, load_ratings, Catalog, ImportError};
use cinegraph::engine::{CatalogSource, CollaborationEngine};
use cinegraph::model::CastMember;
use time::macros::datetime;

#[test]
fn catalog_source_surface_matches_store_contents() {
    let mut catalog = Catalog::new();
    catalog.credits.add(
        10,
        vec![CastMember::new(1, "Ada Vale"), CastMember::new(2, "Ben Ito")],
        Vec::new(),
    );
    catalog.credits.add(20, vec![CastMember::new(2, "Ben Ito")], Vec::new());
    let when = datetime!(2024-02-02 0:00 UTC);
    catalog.ratings.add(500, 10, 4.5, when);
    catalog.ratings.add(501, 20, 3.0, when);

    assert_eq!(catalog.films_rated_at_least(4.0), vec![10]);
    assert_eq!(catalog.films_for_cast(2), vec![10, 20]);
    assert_eq!(catalog.distinct_cast_ids(), vec![1, 2]);

    let roster = catalog.cast_roster(10);
    assert_eq!(roster.len(), 2);
    assert!(catalog.cast_roster(999).is_empty());
}

#[test]
fn ratings_csv_loads_into_the_store() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "userId,movieId,rating,timestamp").expect("header");
    writeln!(file, "1,100,4.5,1700000000").expect("row");
    writeln!(file, "2,100,3.5,1700000100").expect("row");
    writeln!(file, "1,200,5.0,1700000200").expect("row");
    writeln!(file, "1,100,1.0,1700000300").expect("duplicate row");
    file.flush().expect("flush");

    let mut catalog = Catalog::new();
    let summary = load_ratings(file.path(), &mut catalog).expect("import");

    assert_eq!(summary.ratings_imported, 3);
    assert_eq!(catalog.ratings.len(), 3);
    assert_eq!(catalog.ratings.film_average(100), Some(4.0));
    assert_eq!(catalog.ratings.film_average(200), Some(5.0));
}

#[test]
fn credits_csv_accumulates_interleaved_rosters() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "movieId,castId,castName,crewId,crewName,crewRole").expect("header");
    writeln!(file, "100,1,Ada Vale,50,Cleo Marr,Director").expect("row");
    writeln!(file, "200,2,Ben Ito,,,").expect("row");
    writeln!(file, "100,2,Ben Ito,,,").expect("row");
    writeln!(file, "200,3,Cy Dunn,,,").expect("row");
    file.flush().expect("flush");

    let mut catalog = Catalog::new();
    let summary = load_credits(file.path(), &mut catalog).expect("import");

    assert_eq!(summary.films_credited, 2);
    assert_eq!(summary.cast_credited, 4);
    assert_eq!(summary.crew_credited, 1);

    let roster = catalog.credits.cast_roster(100).expect("film 100");
    let ids: Vec<i64> = roster.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(catalog.credits.crew_name(50), Some("Cleo Marr"));
    assert_eq!(catalog.credits.films_for_cast(2), vec![100, 200]);
}

#[test]
fn malformed_rows_abort_with_row_numbers() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "userId,movieId,rating,timestamp").expect("header");
    writeln!(file, "1,100,4.5,1700000000").expect("row");
    writeln!(file, "2,not-a-film,3.5,1700000100").expect("bad row");
    file.flush().expect("flush");

    let mut catalog = Catalog::new();
    let err = load_ratings(file.path(), &mut catalog).expect_err("must fail");
    match err {
        ImportError::Malformed { row, .. } => assert_eq!(row, 3),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn missing_columns_are_reported_by_name() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "userId,movieId,rating").expect("header");
    file.flush().expect("flush");

    let mut catalog = Catalog::new();
    let err = load_ratings(file.path(), &mut catalog).expect_err("must fail");
    assert!(matches!(err, ImportError::MissingColumn("timestamp")));
}

#[test]
fn imported_dataset_supports_end_to_end_queries() {
    let mut ratings = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(ratings, "userId,movieId,rating,timestamp").expect("header");
    for (user, film, score) in [
        (1, 10, 4.5),
        (2, 10, 4.5),
        (1, 20, 4.0),
        (1, 30, 4.5),
        (1, 40, 2.0),
    ] {
        writeln!(ratings, "{user},{film},{score},1700000000").expect("row");
    }
    ratings.flush().expect("flush");

    let mut credits = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(credits, "movieId,castId,castName").expect("header");
    for (film, cast, name) in [
        (10, 1, "Ada Vale"),
        (10, 2, "Ben Ito"),
        (20, 1, "Ada Vale"),
        (20, 2, "Ben Ito"),
        (30, 2, "Ben Ito"),
        (40, 1, "Ada Vale"),
    ] {
        writeln!(credits, "{film},{cast},{name}").expect("row");
    }
    credits.flush().expect("flush");

    let mut catalog = Catalog::new();
    load_ratings(ratings.path(), &mut catalog).expect("ratings");
    load_credits(credits.path(), &mut catalog).expect("credits");

    let engine = CollaborationEngine::new(&catalog);
    assert_eq!(engine.find_stars(), vec![1, 2]);
    assert_eq!(engine.find_superstars(), vec![1, 2]);
    assert_eq!(engine.distance(1, 2), vec![2]);
}
