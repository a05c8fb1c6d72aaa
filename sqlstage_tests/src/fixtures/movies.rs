//! Movies dataset: a small fully-deterministic catalog plus the five
//! many-to-many relationship tables the final stage creates.

use serde_json::{json, Value as JsonValue};
use sqlstage_core::{Database, Result};

pub const MOVIES: &str = "movies";
pub const GENRES: &str = "genres";
pub const ACTORS: &str = "actors";
pub const DIRECTORS: &str = "directors";
pub const KEYWORDS: &str = "keywords";
pub const PRODUCTION_COMPANIES: &str = "production_companies";

pub const MOVIE_GENRES: &str = "movie_genres";
pub const MOVIE_ACTORS: &str = "movie_actors";
pub const MOVIE_DIRECTORS: &str = "movie_directors";
pub const MOVIE_KEYWORDS: &str = "movie_keywords";
pub const MOVIE_PRODUCTION_COMPANIES: &str = "movie_production_companies";

pub const ALL_MOVIE_TABLES: [&str; 6] = [
    MOVIES,
    GENRES,
    ACTORS,
    DIRECTORS,
    KEYWORDS,
    PRODUCTION_COMPANIES,
];

pub const ALL_RELATIONSHIP_TABLES: [&str; 5] = [
    MOVIE_GENRES,
    MOVIE_ACTORS,
    MOVIE_DIRECTORS,
    MOVIE_KEYWORDS,
    MOVIE_PRODUCTION_COMPANIES,
];

const MOVIE_TITLES: [&str; 12] = [
    "The Quiet Harbor",
    "Signal Lost",
    "Paper Lanterns",
    "Northern Crossing",
    "The Last Rehearsal",
    "Glass Orchard",
    "Midnight Ledger",
    "A Minor Key",
    "The Cartographer",
    "Ashes of August",
    "Low Tide",
    "The Winter Room",
];

const GENRE_NAMES: [&str; 6] = [
    "Action",
    "Drama",
    "Comedy",
    "Thriller",
    "Science Fiction",
    "Romance",
];

const ACTOR_NAMES: [&str; 8] = [
    "Mara Ellison",
    "Tomas Reyes",
    "Ingrid Valo",
    "Desmond Clarke",
    "Yuki Tanabe",
    "Petra Lindqvist",
    "Samuel Okafor",
    "Claire Beaumont",
];

const DIRECTOR_NAMES: [&str; 5] = [
    "Helena Marsh",
    "Rafael Duarte",
    "Anya Petrova",
    "Julian Brecht",
    "Noor Haddad",
];

const KEYWORD_NAMES: [&str; 8] = [
    "heist",
    "small town",
    "redemption",
    "road trip",
    "conspiracy",
    "family",
    "time loop",
    "sea voyage",
];

const COMPANY_NAMES: [&str; 5] = [
    "Harborlight Pictures",
    "Meridian Films",
    "Stray Dog Studio",
    "Aurora Works",
    "Fifth Wall Productions",
];

const CREATE_MOVIES_TABLE: &str = "CREATE TABLE movies (
    id integer NOT NULL PRIMARY KEY,
    original_title text NOT NULL,
    budget integer NOT NULL,
    popularity real NOT NULL,
    release_date text NOT NULL,
    revenue integer NOT NULL,
    runtime integer NOT NULL,
    tagline text NULL,
    vote_average real NOT NULL,
    vote_count integer NOT NULL)";

const CREATE_GENRES_TABLE: &str = "CREATE TABLE genres (
    id integer NOT NULL PRIMARY KEY,
    genre text NOT NULL)";

const CREATE_ACTORS_TABLE: &str = "CREATE TABLE actors (
    id integer NOT NULL PRIMARY KEY,
    full_name text NOT NULL)";

const CREATE_DIRECTORS_TABLE: &str = "CREATE TABLE directors (
    id integer NOT NULL PRIMARY KEY,
    full_name text NOT NULL)";

const CREATE_KEYWORDS_TABLE: &str = "CREATE TABLE keywords (
    id integer NOT NULL PRIMARY KEY,
    keyword text NOT NULL)";

const CREATE_PRODUCTION_COMPANIES_TABLE: &str = "CREATE TABLE production_companies (
    id integer NOT NULL PRIMARY KEY,
    company_name text NOT NULL)";

const CREATE_MOVIE_GENRES_TABLE: &str = "CREATE TABLE movie_genres (
    movie_id integer NOT NULL REFERENCES movies(id),
    genre_id integer NOT NULL REFERENCES genres(id),
    PRIMARY KEY (movie_id, genre_id),
    FOREIGN KEY (movie_id) REFERENCES movies(id),
    FOREIGN KEY (genre_id) REFERENCES genres(id))";

const CREATE_MOVIE_ACTORS_TABLE: &str = "CREATE TABLE movie_actors (
    movie_id integer NOT NULL REFERENCES movies(id),
    actor_id integer NOT NULL REFERENCES actors(id),
    PRIMARY KEY (movie_id, actor_id),
    FOREIGN KEY (movie_id) REFERENCES movies(id),
    FOREIGN KEY (actor_id) REFERENCES actors(id))";

const CREATE_MOVIE_DIRECTORS_TABLE: &str = "CREATE TABLE movie_directors (
    movie_id integer NOT NULL REFERENCES movies(id),
    director_id integer NOT NULL REFERENCES directors(id),
    PRIMARY KEY (movie_id, director_id),
    FOREIGN KEY (movie_id) REFERENCES movies(id),
    FOREIGN KEY (director_id) REFERENCES directors(id))";

const CREATE_MOVIE_KEYWORDS_TABLE: &str = "CREATE TABLE movie_keywords (
    movie_id integer NOT NULL REFERENCES movies(id),
    keyword_id integer NOT NULL REFERENCES keywords(id),
    PRIMARY KEY (movie_id, keyword_id),
    FOREIGN KEY (movie_id) REFERENCES movies(id),
    FOREIGN KEY (keyword_id) REFERENCES keywords(id))";

const CREATE_MOVIE_PRODUCTION_COMPANIES_TABLE: &str = "CREATE TABLE movie_production_companies (
    movie_id integer NOT NULL REFERENCES movies(id),
    company_id integer NOT NULL REFERENCES production_companies(id),
    PRIMARY KEY (movie_id, company_id),
    FOREIGN KEY (movie_id) REFERENCES movies(id),
    FOREIGN KEY (company_id) REFERENCES production_companies(id))";

const CREATE_INDEX_MOVIES_RELEASE_DATE: &str =
    "CREATE INDEX movies_release_date_idx ON movies (release_date)";

const CREATE_INDEX_ACTORS_FULL_NAME: &str =
    "CREATE INDEX actors_full_name_idx ON actors (full_name)";

const CREATE_UNIQUE_INDEX_GENRES_GENRE: &str =
    "CREATE UNIQUE INDEX genres_genre_unq_idx ON genres (genre)";

/// Stage 01: create the flat catalog tables.
pub fn create_tables(db: &Database) -> Result<()> {
    for ddl in [
        CREATE_MOVIES_TABLE,
        CREATE_GENRES_TABLE,
        CREATE_ACTORS_TABLE,
        CREATE_DIRECTORS_TABLE,
        CREATE_KEYWORDS_TABLE,
        CREATE_PRODUCTION_COMPANIES_TABLE,
    ] {
        db.execute(ddl)?;
    }
    Ok(())
}

/// Stage 02: load the flat catalog.
pub fn insert_flat_data(db: &Database) -> Result<()> {
    let movies: Vec<Vec<JsonValue>> = MOVIE_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let id = (i + 1) as i64;
            let tagline = if id % 3 == 0 {
                json!(null)
            } else {
                json!(format!("Every story has a {}", KEYWORD_NAMES[i % 8]))
            };
            vec![
                json!(id),
                json!(title),
                json!(5_000_000 + id * 750_000),
                json!(10.0 + id as f64 * 1.5),
                json!(format!("2015-{:02}-{:02}", (id % 12) + 1, (id % 27) + 1)),
                json!(12_000_000 + id * 3_250_000),
                json!(90 + (id * 7) % 60),
                tagline,
                json!(5.0 + (id % 40) as f64 / 10.0),
                json!(200 + id * 55),
            ]
        })
        .collect();
    db.insert_many(
        "INSERT INTO movies (id, original_title, budget, popularity, release_date, \
         revenue, runtime, tagline, vote_average, vote_count) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        &movies,
    )?;

    insert_named(db, "INSERT INTO genres (id, genre) VALUES (?1, ?2)", &GENRE_NAMES)?;
    insert_named(db, "INSERT INTO actors (id, full_name) VALUES (?1, ?2)", &ACTOR_NAMES)?;
    insert_named(db, "INSERT INTO directors (id, full_name) VALUES (?1, ?2)", &DIRECTOR_NAMES)?;
    insert_named(db, "INSERT INTO keywords (id, keyword) VALUES (?1, ?2)", &KEYWORD_NAMES)?;
    insert_named(
        db,
        "INSERT INTO production_companies (id, company_name) VALUES (?1, ?2)",
        &COMPANY_NAMES,
    )?;
    Ok(())
}

fn insert_named(db: &Database, sql: &str, names: &[&str]) -> Result<()> {
    let rows: Vec<Vec<JsonValue>> = names
        .iter()
        .enumerate()
        .map(|(i, name)| vec![json!((i + 1) as i64), json!(name)])
        .collect();
    db.insert_many(sql, &rows)?;
    Ok(())
}

/// Stage 03: create the catalog indexes.
pub fn create_indexes(db: &Database) -> Result<()> {
    for ddl in [
        CREATE_INDEX_MOVIES_RELEASE_DATE,
        CREATE_INDEX_ACTORS_FULL_NAME,
        CREATE_UNIQUE_INDEX_GENRES_GENRE,
    ] {
        db.execute(ddl)?;
    }
    Ok(())
}

/// Stage 04: create the relationship tables and load the combined
/// link rows.
pub fn create_relationship_tables(db: &Database) -> Result<()> {
    for ddl in [
        CREATE_MOVIE_GENRES_TABLE,
        CREATE_MOVIE_ACTORS_TABLE,
        CREATE_MOVIE_DIRECTORS_TABLE,
        CREATE_MOVIE_KEYWORDS_TABLE,
        CREATE_MOVIE_PRODUCTION_COMPANIES_TABLE,
    ] {
        db.execute(ddl)?;
    }

    let movie_count = MOVIE_TITLES.len() as i64;
    let mut genres: Vec<Vec<JsonValue>> = Vec::new();
    let mut actors: Vec<Vec<JsonValue>> = Vec::new();
    let mut directors: Vec<Vec<JsonValue>> = Vec::new();
    let mut keywords: Vec<Vec<JsonValue>> = Vec::new();
    let mut companies: Vec<Vec<JsonValue>> = Vec::new();
    for m in 1..=movie_count {
        genres.push(vec![json!(m), json!(m % 6 + 1)]);
        genres.push(vec![json!(m), json!((m + 2) % 6 + 1)]);
        actors.push(vec![json!(m), json!(m % 8 + 1)]);
        actors.push(vec![json!(m), json!((m + 3) % 8 + 1)]);
        directors.push(vec![json!(m), json!(m % 5 + 1)]);
        keywords.push(vec![json!(m), json!(m % 8 + 1)]);
        keywords.push(vec![json!(m), json!((m + 4) % 8 + 1)]);
        companies.push(vec![json!(m), json!(m % 5 + 1)]);
    }

    db.insert_many("INSERT INTO movie_genres (movie_id, genre_id) VALUES (?1, ?2)", &genres)?;
    db.insert_many("INSERT INTO movie_actors (movie_id, actor_id) VALUES (?1, ?2)", &actors)?;
    db.insert_many(
        "INSERT INTO movie_directors (movie_id, director_id) VALUES (?1, ?2)",
        &directors,
    )?;
    db.insert_many(
        "INSERT INTO movie_keywords (movie_id, keyword_id) VALUES (?1, ?2)",
        &keywords,
    )?;
    db.insert_many(
        "INSERT INTO movie_production_companies (movie_id, company_id) VALUES (?1, ?2)",
        &companies,
    )?;
    Ok(())
}
