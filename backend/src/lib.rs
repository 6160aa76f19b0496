//! Cat breed catalog backend.
//!
//! A paginated HTTP proxy over TheCatAPI's breed catalog, plus a user
//! directory with generated usernames. Layout follows ports and adapters:
//! [`domain`] holds the model, services and ports; [`inbound`] and
//! [`outbound`] hold the actix-web, reqwest and Diesel adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
