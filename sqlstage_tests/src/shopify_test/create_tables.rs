use super::*;

#[test]
fn creates_all_tables() {
    let db = shopify_db("00", "01");
    shopify::create_tables(&db).unwrap();

    for table in ALL_SHOPIFY_TABLES {
        assert!(db.table_exists(table).unwrap(), "no table named '{table}'");
    }
}

#[test]
fn has_correct_columns_and_types() {
    let db = shopify_db("00", "01");
    shopify::create_tables(&db).unwrap();

    assert_eq!(
        names_and_types(&db, APPS),
        pairs(&[
            ("id", "integer"),
            ("url", "text"),
            ("title", "text"),
            ("tagline", "text"),
            ("developer", "text"),
            ("developer_link", "text"),
            ("icon", "text"),
            ("rating", "real"),
            ("reviews_count", "integer"),
            ("description", "text"),
            ("pricing_hint", "text"),
        ])
    );

    assert_eq!(
        names_and_types(&db, CATEGORIES),
        pairs(&[("id", "integer"), ("title", "text")])
    );

    assert_eq!(
        names_and_types(&db, APPS_CATEGORIES),
        pairs(&[("app_id", "integer"), ("category_id", "integer")])
    );

    assert_eq!(
        names_and_types(&db, KEY_BENEFITS),
        pairs(&[
            ("app_id", "integer"),
            ("title", "text"),
            ("description", "text"),
        ])
    );

    assert_eq!(
        names_and_types(&db, PRICING_PLANS),
        pairs(&[("id", "integer"), ("price", "text")])
    );

    assert_eq!(
        names_and_types(&db, APPS_PRICING_PLANS),
        pairs(&[("app_id", "integer"), ("pricing_plan_id", "integer")])
    );

    assert_eq!(
        names_and_types(&db, REVIEWS),
        pairs(&[
            ("app_id", "integer"),
            ("author", "text"),
            ("body", "text"),
            ("rating", "integer"),
            ("helpful_count", "integer"),
            ("date_created", "text"),
            ("developer_reply", "text"),
            ("developer_reply_date", "text"),
        ])
    );
}

#[test]
fn has_primary_keys() {
    let db = shopify_db("00", "01");
    shopify::create_tables(&db).unwrap();

    assert_eq!(
        primary_key_flags(&db, APPS),
        flags(&[
            ("id", true),
            ("url", false),
            ("title", false),
            ("tagline", false),
            ("developer", false),
            ("developer_link", false),
            ("icon", false),
            ("rating", false),
            ("reviews_count", false),
            ("description", false),
            ("pricing_hint", false),
        ])
    );

    assert_eq!(
        primary_key_flags(&db, CATEGORIES),
        flags(&[("id", true), ("title", false)])
    );

    assert_eq!(
        primary_key_flags(&db, APPS_CATEGORIES),
        flags(&[("app_id", true), ("category_id", true)])
    );

    assert_eq!(
        primary_key_flags(&db, KEY_BENEFITS),
        flags(&[("app_id", true), ("title", true), ("description", false)])
    );

    assert_eq!(
        primary_key_flags(&db, PRICING_PLANS),
        flags(&[("id", true), ("price", false)])
    );

    assert_eq!(
        primary_key_flags(&db, APPS_PRICING_PLANS),
        flags(&[("app_id", true), ("pricing_plan_id", true)])
    );

    assert_eq!(
        primary_key_flags(&db, REVIEWS),
        flags(&[
            ("app_id", false),
            ("author", false),
            ("body", false),
            ("rating", false),
            ("helpful_count", false),
            ("date_created", false),
            ("developer_reply", false),
            ("developer_reply_date", false),
        ])
    );
}

#[test]
fn has_not_null_constraints() {
    let db = shopify_db("00", "01");
    shopify::create_tables(&db).unwrap();

    assert_eq!(
        not_null_flags(&db, APPS),
        flags(&[
            ("id", true),
            ("url", true),
            ("title", true),
            ("tagline", true),
            ("developer", true),
            ("developer_link", true),
            ("icon", true),
            ("rating", true),
            ("reviews_count", true),
            ("description", true),
            ("pricing_hint", false),
        ])
    );

    assert_eq!(
        not_null_flags(&db, APPS_CATEGORIES),
        flags(&[("app_id", true), ("category_id", true)])
    );

    assert_eq!(
        not_null_flags(&db, KEY_BENEFITS),
        flags(&[("app_id", true), ("title", true), ("description", true)])
    );

    assert_eq!(
        not_null_flags(&db, APPS_PRICING_PLANS),
        flags(&[("app_id", true), ("pricing_plan_id", true)])
    );

    assert_eq!(
        not_null_flags(&db, REVIEWS),
        flags(&[
            ("app_id", true),
            ("author", true),
            ("body", true),
            ("rating", true),
            ("helpful_count", true),
            ("date_created", true),
            ("developer_reply", false),
            ("developer_reply_date", false),
        ])
    );
}

#[test]
fn has_indices() {
    let db = shopify_db("00", "01");
    shopify::create_tables(&db).unwrap();

    let pricing_plans: Vec<(String, bool)> = db
        .index_list(PRICING_PLANS)
        .unwrap()
        .into_iter()
        .map(|i| (i.name, i.unique))
        .collect();
    assert_eq!(pricing_plans, flags(&[("pricing_plans_price_idx", false)]));

    let reviews: Vec<(String, bool)> = db
        .index_list(REVIEWS)
        .unwrap()
        .into_iter()
        .map(|i| (i.name, i.unique))
        .collect();
    assert_eq!(reviews, flags(&[("reviews_author_idx", false)]));
}

#[test]
fn has_unique_index_on_apps() {
    let db = shopify_db("00", "01");
    shopify::create_tables(&db).unwrap();

    let unique: Vec<(String, bool)> = db
        .index_list(APPS)
        .unwrap()
        .into_iter()
        .filter(|i| i.unique)
        .map(|i| (i.name, i.unique))
        .collect();
    assert_eq!(unique, flags(&[("apps_id_unq_idx", true)]));
}
