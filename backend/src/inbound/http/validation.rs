//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query strings arrive as raw text so malformed numbers surface through the
//! domain error envelope rather than actix's plain-text extractor errors.

use actix_web::web;
use pagination::{PageBounds, PageRequest, PageRequestError};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Error, LoginValidationError, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidInteger,
    OutOfRange,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

const LIMIT: FieldName = FieldName::new("limit");
const PAGE: FieldName = FieldName::new("page");

fn field_error(field: FieldName, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

fn field_value_error(
    field: FieldName,
    code: ErrorCode,
    message: impl Into<String>,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField.as_str(),
        format!("missing required field: {name}"),
    )
}

/// Blank values are reported as `empty_<field>`.
pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        &format!("empty_{name}"),
        format!("{name} must not be empty"),
    )
}

/// Require a present, non-blank query or body value, returning it trimmed.
pub(crate) fn require_text(value: Option<&str>, field: FieldName) -> Result<&str, Error> {
    let value = value.ok_or_else(|| missing_field_error(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty_field_error(field));
    }
    Ok(trimmed)
}

fn parse_u32(value: Option<&str>, field: FieldName) -> Result<Option<u32>, Error> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let name = field.as_str();
    let parsed: i64 = raw.trim().parse().map_err(|_| {
        field_value_error(
            field,
            ErrorCode::InvalidInteger,
            format!("{name} must be an integer"),
            raw,
        )
    })?;
    u32::try_from(parsed).map(Some).map_err(|_| {
        let message = if parsed < 0 {
            format!("{name} must be zero or greater")
        } else {
            format!("{name} must be at most {}", u32::MAX)
        };
        field_value_error(field, ErrorCode::OutOfRange, message, raw)
    })
}

fn page_request_error(err: PageRequestError, raw_limit: Option<&str>) -> Error {
    let value = raw_limit.unwrap_or_default();
    match err {
        PageRequestError::ZeroLimit | PageRequestError::LimitTooLarge { .. } => {
            field_value_error(LIMIT, ErrorCode::OutOfRange, err.to_string(), value)
        }
        PageRequestError::InvalidBounds { .. } => Error::internal(err.to_string()),
    }
}

/// Raw `limit`/`page` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    limit: Option<String>,
    page: Option<String>,
}

impl PageQuery {
    /// Validate against `bounds`, filling in the default limit and page zero.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` when either value is not an integer, is
    /// negative, or the limit falls outside `1..=max_limit`.
    pub fn resolve(&self, bounds: PageBounds) -> Result<PageRequest, Error> {
        let limit = parse_u32(self.limit.as_deref(), LIMIT)?;
        let page = parse_u32(self.page.as_deref(), PAGE)?;
        bounds
            .resolve(limit, page)
            .map_err(|err| page_request_error(err, self.limit.as_deref()))
    }
}

pub(crate) fn map_user_validation(err: UserValidationError) -> Error {
    let field = match err {
        UserValidationError::EmptyName => FieldName::new("name"),
        UserValidationError::EmptyLastname => FieldName::new("lastname"),
        UserValidationError::EmptyPassword => FieldName::new("password"),
        UserValidationError::EmptyUsername => FieldName::new("username"),
        UserValidationError::UsernameContainsWhitespace => {
            return Error::invalid_request(err.to_string())
                .with_details(json!({ "field": "username", "code": "invalid_username" }));
        }
    };
    empty_field_error(field)
}

pub(crate) fn map_login_validation(err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyUsername => FieldName::new("username"),
        LoginValidationError::EmptyPassword => FieldName::new("password"),
    };
    empty_field_error(field)
}

/// JSON extractor configuration reporting malformed bodies as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid JSON body: {err}"))
            .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
            .into()
    })
}
