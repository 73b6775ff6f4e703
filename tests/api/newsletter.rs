use serde_json::Value;

use crate::helper::{spawn_app, spawn_failing_app};

#[tokio::test]
async fn newsletter_returns_201_and_persists_a_new_email() {
    let app = spawn_app().await;

    let response = app.post_newsletter(r#"{"email": "a@b.com"}"#).await;

    assert_eq!(201, response.status().as_u16());

    let envelope = response
        .json::<Value>()
        .await
        .expect("The body should be valid JSON.");
    assert_eq!(Some(true), envelope["success"].as_bool());
    assert_eq!(
        Some("Thanks for subscribing! You'll receive our latest updates."),
        envelope["message"].as_str()
    );
    assert_eq!(Some("a@b.com"), envelope["data"]["email"].as_str());

    let saved = app.storage.subscriptions();
    assert_eq!(1, saved.len());
    assert_eq!(saved[0].email, "a@b.com");
}

#[tokio::test]
async fn subscribing_twice_keeps_a_single_record() {
    let app = spawn_app().await;

    let first = app.post_newsletter(r#"{"email": "a@b.com"}"#).await;
    assert_eq!(201, first.status().as_u16());

    let second = app.post_newsletter(r#"{"email": "a@b.com"}"#).await;
    assert_eq!(200, second.status().as_u16());

    let envelope = second
        .json::<Value>()
        .await
        .expect("The body should be valid JSON.");
    assert_eq!(Some(true), envelope["success"].as_bool());
    assert_eq!(
        Some("You're already subscribed to our newsletter!"),
        envelope["message"].as_str()
    );
    assert!(envelope.get("data").is_none());

    assert_eq!(1, app.storage.subscriptions().len());
}

#[tokio::test]
async fn newsletter_returns_400_when_the_email_is_invalid() {
    let app = spawn_app().await;
    let test_cases = [
        (r#"{"email": ""}"#, "an empty email"),
        (r#"{"email": "definitely-not-an-email"}"#, "a malformed email"),
        (r#"{"email": "@domain.com"}"#, "an email missing its subject"),
        ("{}", "a missing email"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_newsletter(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload had {}.",
            description
        );

        let envelope = response
            .json::<Value>()
            .await
            .expect("The body should be valid JSON.");
        assert_eq!(Some(false), envelope["success"].as_bool());
        assert_eq!(
            Some("Please enter a valid email address"),
            envelope["message"].as_str()
        );
    }

    assert!(app.storage.subscriptions().is_empty());
}

#[tokio::test]
async fn newsletter_returns_500_when_storage_fails() {
    let app = spawn_failing_app().await;

    let response = app.post_newsletter(r#"{"email": "a@b.com"}"#).await;

    assert_eq!(500, response.status().as_u16());

    let envelope = response
        .json::<Value>()
        .await
        .expect("The body should be valid JSON.");
    assert_eq!(Some(false), envelope["success"].as_bool());
    assert_eq!(
        Some("Something went wrong. Please try again."),
        envelope["message"].as_str()
    );
}
