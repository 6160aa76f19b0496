//! Tests for the user directory handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use pagination::PageRequest;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockBreedQuery, MockUserDirectory};
use crate::domain::Username;
use crate::inbound::http::validation::json_config;

fn john() -> UserProfile {
    UserProfile::new("John", "Doe", Username::new("johndoe").expect("valid username"))
}

async fn send(users: MockUserDirectory, req: test::TestRequest) -> (StatusCode, Value) {
    let state = web::Data::new(HttpState::new(
        Arc::new(MockBreedQuery::new()),
        Arc::new(users),
    ));
    let app = test::init_service(
        App::new().app_data(state).app_data(json_config()).service(
            web::scope("/users")
                .service(list_users)
                .service(register_user)
                .service(login),
        ),
    )
    .await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[actix_web::test]
async fn register_returns_created_profile_without_password() {
    let mut users = MockUserDirectory::new();
    users
        .expect_register()
        .withf(|registration| {
            registration.name() == "John"
                && registration.lastname() == "Doe"
                && registration.password() == "1234"
        })
        .times(1)
        .returning(|_| Ok(john()));

    let (status, body) = send(
        users,
        test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({"name": "John", "lastname": "Doe", "password": "1234"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "John", "lastname": "Doe", "username": "johndoe"}));
}

#[rstest]
#[case(json!({"lastname": "Doe", "password": "1234"}), "name", "missing_field")]
#[case(json!({"name": " ", "lastname": "Doe", "password": "1234"}), "name", "empty_name")]
#[case(json!({"name": "John", "lastname": "", "password": "1234"}), "lastname", "empty_lastname")]
#[case(json!({"name": "John", "lastname": "Doe", "password": ""}), "password", "empty_password")]
#[actix_web::test]
async fn register_validates_body(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let (status, body) = send(
        MockUserDirectory::new(),
        test::TestRequest::post().uri("/users/").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[actix_web::test]
async fn malformed_json_uses_error_envelope() {
    let (status, body) = send(
        MockUserDirectory::new(),
        test::TestRequest::post()
            .uri("/users/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_body");
}

#[actix_web::test]
async fn login_returns_profile_for_matching_credentials() {
    let mut users = MockUserDirectory::new();
    users
        .expect_login()
        .withf(|credentials| credentials.username() == "johndoe" && credentials.password() == "1234")
        .times(1)
        .returning(|_| Ok(john()));

    let (status, body) = send(
        users,
        test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({"username": " johndoe ", "password": "1234"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "johndoe");
    assert!(body.get("password").is_none());
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let mut users = MockUserDirectory::new();
    users
        .expect_login()
        .return_once(|_| Err(Error::unauthorized("Invalid credentials")));

    let (status, body) = send(
        users,
        test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({"username": "johndoe", "password": "nope"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "unauthorized");
    assert_eq!(body["message"], "Invalid credentials");
}

#[rstest]
#[case(json!({"username": "   ", "password": "1234"}), "username", "empty_username")]
#[case(json!({"username": "johndoe"}), "password", "missing_field")]
#[actix_web::test]
async fn login_validates_body(#[case] payload: Value, #[case] field: &str, #[case] code: &str) {
    let (status, body) = send(
        MockUserDirectory::new(),
        test::TestRequest::post().uri("/users/login").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[actix_web::test]
async fn list_returns_window_with_null_links() {
    let mut users = MockUserDirectory::new();
    users
        .expect_list_users()
        .withf(|request| request.limit() == 10 && request.page() == 1)
        .times(1)
        .returning(|request: PageRequest| Ok(Paginated::without_links(vec![john()], request)));

    let (status, body) = send(
        users,
        test::TestRequest::get().uri("/users/?limit=10&page=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["username"], "johndoe");
    assert_eq!(body["limit"], 10);
    assert_eq!(body["page"], 1);
    assert_eq!(body["next"], Value::Null);
    assert_eq!(body["previous"], Value::Null);
}

#[actix_web::test]
async fn list_surfaces_store_outage() {
    let mut users = MockUserDirectory::new();
    users
        .expect_list_users()
        .return_once(|_| Err(Error::service_unavailable("user store unavailable")));

    let (status, body) = send(users, test::TestRequest::get().uri("/users/")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "service_unavailable");
}
