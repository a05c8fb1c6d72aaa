use super::*;

#[test]
fn flat_data_row_counts() {
    let db = movies_db("01", "02");
    movies::insert_flat_data(&db).unwrap();

    let count = |table| db.select_single_row(&queries::count_rows(table)).unwrap();
    assert_eq!(count(MOVIES), Some(json!({ "count": 12 })));
    assert_eq!(count(GENRES), Some(json!({ "count": 6 })));
    assert_eq!(count(ACTORS), Some(json!({ "count": 8 })));
    assert_eq!(count(DIRECTORS), Some(json!({ "count": 5 })));
    assert_eq!(count(KEYWORDS), Some(json!({ "count": 8 })));
    assert_eq!(count(PRODUCTION_COMPANIES), Some(json!({ "count": 5 })));
}

#[test]
fn movie_rows_round_trip() {
    let db = movies_db("01", "02");
    movies::insert_flat_data(&db).unwrap();

    let row = db
        .select_single_row("SELECT id, original_title, runtime FROM movies WHERE id = 1")
        .unwrap();
    assert_eq!(
        row,
        Some(json!({ "id": 1, "original_title": "The Quiet Harbor", "runtime": 97 }))
    );
}
