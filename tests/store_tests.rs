use reviewd::db::Store;

async fn memory_store() -> Store {
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("failed to open in-memory store")
}

#[tokio::test]
async fn test_insert_and_query_round_trip() {
    let store = memory_store().await;
    store.ping().await.unwrap();

    let id = store
        .insert_review("Widget", "A very convincing review.")
        .await
        .unwrap();
    assert!(id > 0);

    let rows = store.reviews_for_product("Widget").await.unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.product_name, "Widget");
    assert_eq!(row.review, "A very convincing review.");
    assert_eq!(row.overall_rating, "AI Generated");
    assert_eq!(row.review_title, "Generated Review");
    assert_eq!(row.author, "AI Model");
    assert_eq!(row.review_date, "2024-03-01");
    assert_eq!(row.rating, "5 stars");
}

#[tokio::test]
async fn test_query_is_exact_match_only() {
    let store = memory_store().await;
    store.insert_review("Foo", "body").await.unwrap();

    assert_eq!(store.reviews_for_product("Foo").await.unwrap().len(), 1);
    assert!(store.reviews_for_product("foo").await.unwrap().is_empty());
    assert!(store.reviews_for_product("Foo ").await.unwrap().is_empty());
    assert!(store.reviews_for_product("Fo").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rows_returned_in_insertion_order() {
    let store = memory_store().await;
    for i in 1..=3 {
        store
            .insert_review("Widget", &format!("review {i}"))
            .await
            .unwrap();
    }

    let rows = store.reviews_for_product("Widget").await.unwrap();
    let bodies: Vec<&str> = rows.iter().map(|r| r.review.as_str()).collect();
    assert_eq!(bodies, vec!["review 1", "review 2", "review 3"]);
}

#[tokio::test]
async fn test_arbitrary_strings_survive_storage() {
    let store = memory_store().await;
    let tricky = "it's \"great\" — 100%; DROP TABLE reviews; 日本語";
    store.insert_review("Tricky", tricky).await.unwrap();

    let rows = store.reviews_for_product("Tricky").await.unwrap();
    assert_eq!(rows[0].review, tricky);
}

#[tokio::test]
async fn test_file_backed_database_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("reviews.db");
    let db_url = format!("sqlite:{}", db_path.display());

    let store = Store::new(&db_url).await.unwrap();
    store.insert_review("Widget", "persisted").await.unwrap();
    assert!(db_path.exists());

    // Reopening is idempotent and sees the persisted row.
    drop(store);
    let store = Store::new(&db_url).await.unwrap();
    let rows = store.reviews_for_product("Widget").await.unwrap();
    assert_eq!(rows.len(), 1);
}
