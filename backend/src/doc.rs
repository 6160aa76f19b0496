//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (breeds,
//! users, health) together with the domain schemas they return. The document
//! backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Breed, BreedImage, BreedWeight, Error, ErrorCode, UserProfile};
use crate::inbound::http::schemas::{BreedPageSchema, UserPageSchema};
use crate::inbound::http::users::{LoginRequest, RegisterRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cat breed catalog API",
        description = "Paginated proxy over TheCatAPI breed catalog plus a small user directory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::breeds::list_breeds,
        crate::inbound::http::breeds::search_breeds,
        crate::inbound::http::breeds::get_breed,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Breed,
        BreedWeight,
        BreedImage,
        BreedPageSchema,
        UserProfile,
        UserPageSchema,
        RegisterRequest,
        LoginRequest,
        Error,
        ErrorCode
    )),
    tags(
        (name = "breeds", description = "Breed catalog lookups"),
        (name = "users", description = "User registration, login and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schema fields.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/breeds/")]
    #[case("/breeds/search")]
    #[case("/breeds/{id}")]
    #[case("/users/")]
    #[case("/users/login")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path));
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("UserProfile", &["name", "lastname", "username"])]
    #[case("BreedPage", &["results", "limit", "page", "next", "previous"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] expected: &[&str]) {
        let fields = schema_fields(name);
        for field in expected {
            assert!(fields.iter().any(|f| f == field), "{name} lacks {field}");
        }
    }

    #[test]
    fn user_profile_schema_never_mentions_password() {
        assert!(!schema_fields("UserProfile").iter().any(|f| f.contains("password")));
    }
}
