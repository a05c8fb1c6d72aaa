use super::*;

#[test]
fn creates_all_catalog_tables() {
    let db = movies_db("00", "01");
    movies::create_tables(&db).unwrap();

    for table in ALL_MOVIE_TABLES {
        assert!(db.table_exists(table).unwrap(), "no table named '{table}'");
    }
}

#[test]
fn movies_has_correct_columns_and_types() {
    let db = movies_db("00", "01");
    movies::create_tables(&db).unwrap();

    assert_eq!(
        names_and_types(&db, MOVIES),
        pairs(&[
            ("id", "integer"),
            ("original_title", "text"),
            ("budget", "integer"),
            ("popularity", "real"),
            ("release_date", "text"),
            ("revenue", "integer"),
            ("runtime", "integer"),
            ("tagline", "text"),
            ("vote_average", "real"),
            ("vote_count", "integer"),
        ])
    );
}

#[test]
fn movies_keys_and_constraints() {
    let db = movies_db("00", "01");
    movies::create_tables(&db).unwrap();

    let columns = db.table_info(MOVIES).unwrap();
    let id = columns.iter().find(|c| c.name == "id").unwrap();
    assert!(id.is_primary_key());
    assert!(id.not_null);

    let tagline = columns.iter().find(|c| c.name == "tagline").unwrap();
    assert!(!tagline.is_primary_key());
    assert!(!tagline.not_null);
}

#[test]
fn lookup_tables_have_id_and_name_columns() {
    let db = movies_db("00", "01");
    movies::create_tables(&db).unwrap();

    assert_eq!(
        names_and_types(&db, GENRES),
        pairs(&[("id", "integer"), ("genre", "text")])
    );
    assert_eq!(
        names_and_types(&db, ACTORS),
        pairs(&[("id", "integer"), ("full_name", "text")])
    );
    assert_eq!(
        names_and_types(&db, DIRECTORS),
        pairs(&[("id", "integer"), ("full_name", "text")])
    );
    assert_eq!(
        names_and_types(&db, KEYWORDS),
        pairs(&[("id", "integer"), ("keyword", "text")])
    );
    assert_eq!(
        names_and_types(&db, PRODUCTION_COMPANIES),
        pairs(&[("id", "integer"), ("company_name", "text")])
    );
}
