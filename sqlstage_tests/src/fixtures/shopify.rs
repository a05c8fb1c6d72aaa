//! Shopify app-store dataset.
//!
//! The seed data is synthesized deterministically so that every
//! aggregate the query stage asserts holds exactly, and the integrity
//! stage's specific ids exist with the required linkage.

use serde_json::{json, Value as JsonValue};
use sqlstage_core::{Database, Result};

pub const APPS: &str = "apps";
pub const CATEGORIES: &str = "categories";
pub const APPS_CATEGORIES: &str = "apps_categories";
pub const KEY_BENEFITS: &str = "key_benefits";
pub const PRICING_PLANS: &str = "pricing_plans";
pub const APPS_PRICING_PLANS: &str = "apps_pricing_plans";
pub const REVIEWS: &str = "reviews";

pub const ALL_SHOPIFY_TABLES: [&str; 7] = [
    APPS,
    CATEGORIES,
    APPS_CATEGORIES,
    KEY_BENEFITS,
    PRICING_PLANS,
    APPS_PRICING_PLANS,
    REVIEWS,
];

pub const APP_COUNT: i64 = 1500;

/// Category id -> number of linked apps. Store design (6), Sales and
/// conversion optimization (2) and Marketing (3) carry the counts the
/// query stage asserts.
const CATEGORY_LINKS: &[(i64, i64)] = &[
    (1, 120),
    (2, 723),
    (3, 629),
    (4, 80),
    (5, 40),
    (6, 1193),
];

/// (pricing plan id, first linked app id, number of linked apps).
/// Plans 1 and 13 are the free plans (1112 links combined); the
/// $9.99/$5/$10 plans carry the in-range frequency counts.
const PLAN_LINKS: &[(i64, i64, i64)] = &[
    (1, 1, 600),
    (13, 601, 512),
    (2, 1, 225),
    (3, 301, 135),
    (4, 501, 114),
    (5, 701, 50),
    (100, 801, 20),
];

/// Apps in this range get two reviews each.
const REVIEWED_APPS: std::ops::RangeInclusive<i64> = 240..=250;

/// Linked parent rows the integrity stage tries (and fails) to delete.
pub const LINKED_CATEGORY_ID: i64 = 6;
pub const LINKED_PRICING_PLAN_ID: i64 = 100;
pub const REVIEWED_APP_ID: i64 = 245;
/// An app with no reviews; the only delete the integrity stage expects
/// to land.
pub const REVIEW_FREE_APP_ID: i64 = 355;

const CREATE_APPS_TABLE: &str = "CREATE TABLE apps (
    id integer PRIMARY KEY NOT NULL,
    url text NOT NULL,
    title text NOT NULL,
    tagline text NOT NULL,
    developer text NOT NULL,
    developer_link text NOT NULL,
    icon text NOT NULL,
    rating real NOT NULL,
    reviews_count integer NOT NULL,
    description text NOT NULL,
    pricing_hint text NULL,
    FOREIGN KEY (id) REFERENCES reviews(app_id) ON DELETE RESTRICT)";

const CREATE_CATEGORIES_TABLE: &str = "CREATE TABLE categories (
    id integer NOT NULL PRIMARY KEY,
    title text NOT NULL)";

const CREATE_APPS_CATEGORIES_TABLE: &str = "CREATE TABLE apps_categories (
    app_id integer NOT NULL,
    category_id integer NOT NULL,
    PRIMARY KEY (app_id, category_id),
    FOREIGN KEY (app_id) REFERENCES apps(id) ON DELETE CASCADE,
    FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE RESTRICT)";

const CREATE_KEY_BENEFITS_TABLE: &str = "CREATE TABLE key_benefits (
    app_id integer NOT NULL,
    title text NOT NULL,
    description text NOT NULL,
    PRIMARY KEY (app_id, title),
    FOREIGN KEY (app_id) REFERENCES apps(id) ON DELETE CASCADE)";

const CREATE_PRICING_PLANS_TABLE: &str = "CREATE TABLE pricing_plans (
    id integer NOT NULL PRIMARY KEY,
    price text NOT NULL)";

const CREATE_APPS_PRICING_PLANS_TABLE: &str = "CREATE TABLE apps_pricing_plans (
    app_id integer NOT NULL,
    pricing_plan_id integer NOT NULL,
    PRIMARY KEY (app_id, pricing_plan_id),
    FOREIGN KEY (app_id) REFERENCES apps(id) ON DELETE CASCADE,
    FOREIGN KEY (pricing_plan_id) REFERENCES pricing_plans(id) ON DELETE RESTRICT)";

const CREATE_REVIEWS_TABLE: &str = "CREATE TABLE reviews (
    app_id integer NOT NULL,
    author text NOT NULL,
    body text NOT NULL,
    rating integer NOT NULL,
    helpful_count integer NOT NULL,
    date_created text NOT NULL,
    developer_reply text NULL,
    developer_reply_date text NULL)";

const CREATE_INDEX_PRICING_PLANS_PRICE: &str =
    "CREATE INDEX pricing_plans_price_idx ON pricing_plans (price)";

const CREATE_INDEX_REVIEWS_AUTHOR: &str =
    "CREATE INDEX reviews_author_idx ON reviews (author)";

const CREATE_UNIQUE_INDEX_APPS_ID: &str =
    "CREATE UNIQUE INDEX apps_id_unq_idx ON apps (id)";

/// Stage 01: create all tables and indexes.
pub fn create_tables(db: &Database) -> Result<()> {
    for ddl in [
        CREATE_APPS_TABLE,
        CREATE_CATEGORIES_TABLE,
        CREATE_APPS_CATEGORIES_TABLE,
        CREATE_KEY_BENEFITS_TABLE,
        CREATE_PRICING_PLANS_TABLE,
        CREATE_APPS_PRICING_PLANS_TABLE,
        CREATE_REVIEWS_TABLE,
        CREATE_INDEX_PRICING_PLANS_PRICE,
        CREATE_INDEX_REVIEWS_AUTHOR,
        CREATE_UNIQUE_INDEX_APPS_ID,
    ] {
        db.execute(ddl)?;
    }
    Ok(())
}

/// Stage 02: load the flat tables.
pub fn insert_flat_data(db: &Database) -> Result<()> {
    let apps: Vec<Vec<JsonValue>> = (1..=APP_COUNT)
        .map(|id| {
            let dev = (id % 97) + 1;
            let pricing_hint = if id % 2 == 0 {
                json!("Free plan available")
            } else {
                json!(null)
            };
            vec![
                json!(id),
                json!(format!("https://apps.shopify.com/app-{id}")),
                json!(format!("App {id}")),
                json!(format!("Tagline for app {id}")),
                json!(format!("Developer {dev}")),
                json!(format!("https://example.com/developers/{dev}")),
                json!(format!("https://cdn.example.com/icons/{id}.png")),
                json!(((id % 21) + 30) as f64 / 10.0),
                json!((id * 7) % 500),
                json!(format!("Description for app {id}")),
                pricing_hint,
            ]
        })
        .collect();
    db.insert_many(
        "INSERT INTO apps (id, url, title, tagline, developer, developer_link, icon, \
         rating, reviews_count, description, pricing_hint) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        &apps,
    )?;

    let categories: Vec<Vec<JsonValue>> = [
        (1, "Orders and shipping"),
        (2, "Sales and conversion optimization"),
        (3, "Marketing"),
        (4, "Customer support"),
        (5, "Reporting"),
        (6, "Store design"),
    ]
    .iter()
    .map(|(id, title)| vec![json!(id), json!(title)])
    .collect();
    db.insert_many("INSERT INTO categories (id, title) VALUES (?1, ?2)", &categories)?;

    let plans: Vec<Vec<JsonValue>> = [
        (1, "Free"),
        (2, "$9.99/month"),
        (3, "$5/month"),
        (4, "$10/month"),
        (5, "$7/month"),
        (13, "Free to install"),
        (100, "$15/month"),
    ]
    .iter()
    .map(|(id, price)| vec![json!(id), json!(price)])
    .collect();
    db.insert_many("INSERT INTO pricing_plans (id, price) VALUES (?1, ?2)", &plans)?;

    let mut reviews: Vec<Vec<JsonValue>> = Vec::new();
    for app_id in REVIEWED_APPS {
        for n in 1..=2 {
            let reply = if n == 1 {
                (json!("Thanks for the feedback!"), json!("2019-06-01"))
            } else {
                (json!(null), json!(null))
            };
            reviews.push(vec![
                json!(app_id),
                json!(format!("Reviewer {app_id}-{n}")),
                json!(format!("Review {n} for app {app_id}")),
                json!((app_id + n) % 5 + 1),
                json!((app_id * n) % 40),
                json!(format!("2019-05-{:02}", (app_id % 28) + 1)),
                reply.0,
                reply.1,
            ]);
        }
    }
    db.insert_many(
        "INSERT INTO reviews (app_id, author, body, rating, helpful_count, date_created, \
         developer_reply, developer_reply_date) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        &reviews,
    )?;

    Ok(())
}

/// Stage 03: load the relationship tables.
pub fn insert_combined_data(db: &Database) -> Result<()> {
    let mut links: Vec<Vec<JsonValue>> = Vec::new();
    for (category_id, count) in CATEGORY_LINKS {
        for app_id in 1..=*count {
            links.push(vec![json!(app_id), json!(category_id)]);
        }
    }
    db.insert_many(
        "INSERT INTO apps_categories (app_id, category_id) VALUES (?1, ?2)",
        &links,
    )?;

    let mut plan_links: Vec<Vec<JsonValue>> = Vec::new();
    for (plan_id, first_app, count) in PLAN_LINKS {
        for app_id in *first_app..first_app + count {
            plan_links.push(vec![json!(app_id), json!(plan_id)]);
        }
    }
    db.insert_many(
        "INSERT INTO apps_pricing_plans (app_id, pricing_plan_id) VALUES (?1, ?2)",
        &plan_links,
    )?;

    let benefits: Vec<Vec<JsonValue>> = (1..=5)
        .map(|app_id| {
            vec![
                json!(app_id),
                json!(format!("Benefit {app_id}")),
                json!(format!("Benefit description for app {app_id}")),
            ]
        })
        .collect();
    db.insert_many(
        "INSERT INTO key_benefits (app_id, title, description) VALUES (?1, ?2, ?3)",
        &benefits,
    )?;

    Ok(())
}
