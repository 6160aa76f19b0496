//! User directory handlers.
//!
//! ```text
//! GET  /users/?limit=20&page=0
//! POST /users/       {"name":"John","lastname":"Doe","password":"1234"}
//! POST /users/login  {"username":"johndoe","password":"1234"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use pagination::Paginated;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, LoginCredentials, Registration, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, PageQuery, map_login_validation, map_user_validation, missing_field_error,
};

/// Registration body for `POST /users/`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "John")]
    pub name: Option<String>,
    #[schema(example = "Doe")]
    pub lastname: Option<String>,
    #[schema(example = "1234")]
    pub password: Option<String>,
}

impl TryFrom<&RegisterRequest> for Registration {
    type Error = Error;

    fn try_from(value: &RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            required(value.name.as_deref(), "name")?,
            required(value.lastname.as_deref(), "lastname")?,
            required(value.password.as_deref(), "password")?,
        )
        .map_err(map_user_validation)
    }
}

/// Login body for `POST /users/login`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "johndoe")]
    pub username: Option<String>,
    #[schema(example = "1234")]
    pub password: Option<String>,
}

impl TryFrom<&LoginRequest> for LoginCredentials {
    type Error = Error;

    fn try_from(value: &LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            required(value.username.as_deref(), "username")?,
            required(value.password.as_deref(), "password")?,
        )
        .map_err(map_login_validation)
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, Error> {
    value.ok_or_else(|| missing_field_error(FieldName::new(field)))
}

/// List registered users, passwords omitted.
///
/// `next` and `previous` are always `null` for this list.
#[utoipa::path(
    get,
    path = "/users/",
    params(
        ("limit" = Option<u32>, Query, description = "Items per page (default 20)"),
        ("page" = Option<u32>, Query, description = "Zero-based page index")
    ),
    responses(
        (status = 200, description = "Users", body = crate::inbound::http::schemas::UserPageSchema),
        (status = 400, description = "Invalid pagination", body = Error),
        (status = 503, description = "User store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paginated<UserProfile>>> {
    let request = query.resolve(state.page_bounds)?;
    let page = state.users.list_users(request).await?;
    Ok(web::Json(page))
}

/// Register a user under a generated username.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserProfile),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "User store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(&*payload)?;
    let profile = state.users.register(&registration).await?;
    Ok(HttpResponse::Created().json(profile))
}

/// Check a username and password pair.
#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials match", body = UserProfile),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 503, description = "User store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserProfile>> {
    let credentials = LoginCredentials::try_from(&*payload)?;
    let profile = state.users.login(&credentials).await?;
    Ok(web::Json(profile))
}

#[cfg(test)]
mod tests;
