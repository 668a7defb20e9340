use crate::helpers::spawn_app;

#[tokio::test]
async fn delete_returns_a_200_with_a_confirmation() {
    // arrange
    let app = spawn_app().await;
    let id = app.create_subscription("Delete Test", 5.99).await;

    // act
    let response = app.delete_subscription(id).await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("deleted successfully"));
}

#[tokio::test]
async fn a_deleted_subscription_is_kept_in_storage_as_inactive() {
    // arrange
    let mut app = spawn_app().await;
    let id = app.create_subscription("Delete Test", 5.99).await;

    // act
    app.delete_subscription(id).await;

    // assert
    let saved = app
        .stored_subscription(id)
        .expect("Soft delete must not remove the row.");
    assert!(!saved.is_active);
    assert_eq!(saved.name, "Delete Test");
    assert_eq!(app.stored_subscription_count(), 1);
}

#[tokio::test]
async fn delete_returns_a_404_for_an_unknown_subscription() {
    // arrange
    let mut app = spawn_app().await;

    // act
    let response = app.delete_subscription(7).await;

    // assert
    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Subscription not found");
    assert_eq!(app.audit_entry_count(), 0);
}

#[tokio::test]
async fn deleting_twice_succeeds_and_is_recorded_twice() {
    // arrange
    let mut app = spawn_app().await;
    let id = app.create_subscription("Delete Test", 5.99).await;

    // act
    let first = app.delete_subscription(id).await;
    let second = app.delete_subscription(id).await;

    // assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
    let actions: Vec<String> = app
        .audit_trail(id)
        .into_iter()
        .map(|entry| entry.action)
        .collect();
    assert_eq!(
        actions,
        vec![
            "CREATE_SUBSCRIPTION",
            "DELETE_SUBSCRIPTION",
            "DELETE_SUBSCRIPTION"
        ]
    );
}
