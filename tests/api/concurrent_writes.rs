use crate::helpers::spawn_app;
use serde_json::json;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_updates_to_one_subscription_all_succeed() {
    // arrange
    let mut app = spawn_app().await;
    let id = app.create_subscription("Netflix", 12.99).await;
    let url = format!("{}/api/subscriptions/{}", &app.address, id);

    // act
    let handles: Vec<_> = (0..40)
        .map(|i| {
            let client = app.api_client.clone();
            let url = url.clone();
            tokio::spawn(async move {
                let response = client
                    .put(&url)
                    .json(&json!({ "amount": i as f64 }))
                    .send()
                    .await
                    .expect("Failed to execute request.");
                let status = response.status().as_u16();
                (status, response.text().await.unwrap_or_default())
            })
        })
        .collect();

    // assert
    for handle in handles {
        let (status, body) = handle.await.expect("The request task panicked.");
        assert_eq!(
            200, status,
            "A concurrent update failed with body {}.",
            body
        );
    }
    let saved = app.stored_subscription(id).unwrap();
    assert!((0..40).any(|i| saved.amount == i as f64));
    assert_eq!(app.audit_trail(id).len(), 41);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_creates_all_succeed() {
    // arrange
    let mut app = spawn_app().await;
    let url = format!("{}/api/subscriptions", &app.address);

    // act
    let handles: Vec<_> = (0..20)
        .map(|i| {
            let client = app.api_client.clone();
            let url = url.clone();
            tokio::spawn(async move {
                client
                    .post(&url)
                    .json(&json!({
                        "name": format!("Service {}", i),
                        "amount": 5.0,
                        "period": "monthly",
                        "start_date": "2024-01-01"
                    }))
                    .send()
                    .await
                    .expect("Failed to execute request.")
                    .status()
                    .as_u16()
            })
        })
        .collect();

    // assert
    for handle in handles {
        assert_eq!(201, handle.await.expect("The request task panicked."));
    }
    assert_eq!(app.stored_subscription_count(), 20);
    assert_eq!(app.audit_entry_count(), 20);
}
