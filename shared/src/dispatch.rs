use crate::error::HandlerError;
use lambda_http::http::Method;
use lambda_http::{Request, RequestExt};

/// What a request asks a handler to do, resolved once at entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
    Delete,
    Unsupported,
}

/// Query parameter names a handler needs before it will route a GET or DELETE.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub read_params: &'static [&'static str],
    pub delete_params: &'static [&'static str],
    /// A DELETE whose key parameters are present but empty is not routed.
    pub delete_needs_values: bool,
}

impl Operation {
    pub fn resolve(event: &Request, route: &Route) -> Self {
        let has_params = |names: &[&str], needs_values: bool| {
            let Some(params) = event.query_string_parameters_ref() else {
                return false;
            };
            !params.is_empty()
                && names.iter().all(|name| {
                    params
                        .first(name)
                        .is_some_and(|value| !needs_values || !value.is_empty())
                })
        };

        let method = event.method();
        if method == Method::GET && has_params(route.read_params, false) {
            Operation::Read
        } else if method == Method::POST && request_body(event).is_some() {
            Operation::Write
        } else if method == Method::DELETE && has_params(route.delete_params, route.delete_needs_values) {
            Operation::Delete
        } else {
            Operation::Unsupported
        }
    }
}

/// Returns the body bytes, treating an empty body as no body at all.
pub fn request_body(event: &Request) -> Option<&[u8]> {
    let body: &[u8] = event.body();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

/// Reads a query parameter that must be present and non-empty.
pub fn required_param<'a>(event: &'a Request, name: &str) -> Result<&'a str, HandlerError> {
    event
        .query_string_parameters_ref()
        .and_then(|params| params.first(name))
        .filter(|value| !value.is_empty())
        .ok_or_else(|| HandlerError::missing_field(name))
}
