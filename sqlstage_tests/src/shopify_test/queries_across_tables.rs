use super::*;

#[test]
fn counts_apps_with_free_pricing_plan() {
    let db = shopify_db("03", "04");

    let query = "SELECT COUNT(*) AS count
        FROM apps
        JOIN apps_pricing_plans ON apps_pricing_plans.app_id = apps.id
        WHERE apps_pricing_plans.pricing_plan_id IN (1, 13)";

    let result = db.select_single_row(query).unwrap();
    assert_eq!(result, Some(json!({ "count": 1112 })));
}

#[test]
fn selects_top_3_most_common_categories() {
    let db = shopify_db("03", "04");

    let query = "SELECT categories.title AS category, COUNT(apps_categories.category_id) AS count
        FROM apps_categories
        JOIN categories ON categories.id = apps_categories.category_id
        GROUP BY category
        ORDER BY count DESC
        LIMIT 3";

    let result = db.select_multiple_rows(query).unwrap();
    assert_eq!(
        result,
        vec![
            json!({ "category": "Store design", "count": 1193 }),
            json!({ "category": "Sales and conversion optimization", "count": 723 }),
            json!({ "category": "Marketing", "count": 629 }),
        ]
    );
}

#[test]
fn selects_top_3_prices_between_5_and_10_dollars() {
    let db = shopify_db("03", "04");

    let query = "SELECT price, CAST(REPLACE(price, '$', '') AS NUMERIC(10, 2)) AS casted_price,
        COUNT(apps_pricing_plans.app_id) AS count
        FROM pricing_plans
        JOIN apps_pricing_plans ON apps_pricing_plans.pricing_plan_id = pricing_plans.id
        WHERE casted_price BETWEEN 5 AND 10
        GROUP BY casted_price
        HAVING count > 1
        ORDER BY count DESC
        LIMIT 3";

    let result = db.select_multiple_rows(query).unwrap();
    assert_eq!(
        result,
        vec![
            json!({ "price": "$9.99/month", "casted_price": 9.99, "count": 225 }),
            json!({ "price": "$5/month", "casted_price": 5, "count": 135 }),
            json!({ "price": "$10/month", "casted_price": 10, "count": 114 }),
        ]
    );
}
