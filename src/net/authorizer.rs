//! Request authorizer: attaches the stored token to outgoing requests.
//!
//! A pure transformation applied once per request before transport. It never
//! blocks, never mutates session state, and never inspects responses. The
//! header format is the server's token scheme, `Authorization: Token <value>`,
//! not `Bearer`.

use reqwest::header::AUTHORIZATION;

/// Attach `Authorization: Token <value>` when a token is present; forward
/// the request unmodified otherwise.
#[must_use]
pub fn attach_token(builder: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Token {token}")),
        None => builder,
    }
}

#[cfg(test)]
#[path = "authorizer_test.rs"]
mod tests;
