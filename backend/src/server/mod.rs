//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use catapi_backend::Trace;
#[cfg(debug_assertions)]
use catapi_backend::doc::ApiDoc;
use catapi_backend::domain::{BreedQueryService, UserDirectoryService};
use catapi_backend::inbound::http::breeds::{get_breed, list_breeds, search_breeds};
use catapi_backend::inbound::http::health::{HealthState, live, ready};
use catapi_backend::inbound::http::state::HttpState;
use catapi_backend::inbound::http::users::{list_users, login, register_user};
use catapi_backend::inbound::http::validation::json_config;
use catapi_backend::outbound::hashing::Sha256PasswordHasher;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let breeds = BreedQueryService::new(Arc::clone(&config.catalog));
    let users = UserDirectoryService::new(
        Arc::clone(&config.user_store),
        Arc::new(Sha256PasswordHasher),
    );
    web::Data::new(
        HttpState::new(Arc::new(breeds), Arc::new(users)).with_page_bounds(config.page_bounds),
    )
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let breeds = web::scope("/breeds")
        .service(list_breeds)
        .service(search_breeds)
        .service(get_breed);
    let users = web::scope("/users")
        .service(list_users)
        .service(register_user)
        .service(login);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(breeds)
        .service(users)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness flips once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
