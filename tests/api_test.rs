//! End-to-end tests over a real listener.

use std::net::SocketAddr;

use serde_json::{json, Value};
use user_directory::User;

mod common;

#[tokio::test]
async fn test_seeded_listing_and_search() {
    let addr: SocketAddr = "127.0.0.1:28381".parse().unwrap();
    let shutdown = common::start_service(addr, |_| {}).await;
    let client = common::client();

    let users: Vec<User> = client
        .get(format!("http://{addr}/users"))
        .send()
        .await
        .expect("Service unreachable")
        .json()
        .await
        .unwrap();
    assert_eq!(users, user_directory::store::demo_users());

    let res = client
        .get(format!("http://{addr}/users/@.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let found: Vec<User> = res.json().await.unwrap();
    let emails: Vec<_> = found.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(
        emails,
        vec!["john@hotmail.com", "jane@gmail.com", "richard81@gmail.com"]
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_create_lookup_delete_cycle() {
    let addr: SocketAddr = "127.0.0.1:28382".parse().unwrap();
    let shutdown = common::start_service(addr, |_| {}).await;
    let client = common::client();

    // 1. Create
    let created: User = client
        .post(format!("http://{addr}/users"))
        .json(&json!({"email": "a@b.c", "phone": "+1", "password": "pw"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created, User::new("a@b.c", "+1", "pw"));

    // 2. Partial search now finds exactly the new record
    let found: Vec<User> = client
        .get(format!("http://{addr}/users/a@b.c"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found, vec![created.clone()]);

    // 3. Exact lookup
    let exact: User = client
        .get(format!("http://{addr}/users/a@b.c"))
        .query(&[("exact", "true")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(exact, created);

    // 4. Delete
    let remaining: Vec<User> = client
        .delete(format!("http://{addr}/users/a@b.c"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(remaining.len(), 5);
    assert!(remaining.iter().all(|u| u.email != "a@b.c"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_soft_failures_without_seed() {
    let addr: SocketAddr = "127.0.0.1:28383".parse().unwrap();
    let shutdown = common::start_service(addr, |config| {
        config.api.seed_demo_data = false;
    })
    .await;
    let client = common::client();

    let missing: Value = client
        .get(format!("http://{addr}/users/jane@gmail.com?exact=true"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(missing, json!({"email": "", "phone": "", "password": ""}));

    let res = client
        .post(format!("http://{addr}/users"))
        .body("not json at all")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let all: Vec<User> = client
        .get(format!("http://{addr}/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all, vec![User::default()]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_strict_mode_reports_errors() {
    let addr: SocketAddr = "127.0.0.1:28384".parse().unwrap();
    let shutdown = common::start_service(addr, |config| {
        config.api.strict_mode = true;
    })
    .await;
    let client = common::client();

    let res = client
        .post(format!("http://{addr}/users"))
        .body("{")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = client
        .delete(format!("http://{addr}/users/ghost@nowhere.net"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["status"], 404);

    shutdown.trigger();
}
