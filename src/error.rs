// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::json::Json;

/// `meta.code` of a successful response.
pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API reported a failure in the `meta` block of the envelope.
    #[error("{error_type} [code:{code}] {message} (RateLimitRemaining: {rate_limit_remaining})")]
    Api {
        error_type: String,
        code: i64,
        message: String,
        rate_limit_remaining: i64,
    },

    #[error("failed to build a request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("neither a client ID nor an access token is configured")]
    MissingCredentials,

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

/// Inspects the `meta` block of a response envelope.
///
/// Only a non-success code together with a non-empty `error_type` counts as
/// a failure: some endpoints omit `meta` entirely on success.
pub fn error_from_api(response: &Json, rate_limit_remaining: i64) -> Option<Error> {
    let meta = response.object("meta");
    let code = meta.int("code");
    if code == SUCCESS_CODE {
        return None;
    }

    let error_type = meta.string("error_type");
    if error_type.is_empty() {
        return None;
    }
    Some(Error::Api {
        error_type,
        code,
        message: meta.string("error_message"),
        rate_limit_remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::error_from_api;
    use crate::json::Json;

    #[test]
    fn success() {
        let response = Json::from_slice(br#"{"meta": {"code": 200}}"#);
        assert!(error_from_api(&response, 10).is_none());
        assert!(error_from_api(&Json::default(), 10).is_none());
    }

    #[test]
    fn failure_without_type_is_tolerated() {
        let response = Json::from_slice(br#"{"meta": {"code": 500}}"#);
        assert!(error_from_api(&response, 10).is_none());
    }

    #[test]
    fn failure() {
        let response = Json::from_slice(
            br#"{"meta": {"code": 400, "error_type": "OAuthException", "error_message": "bad token"}}"#,
        );
        let error = error_from_api(&response, 17).expect("an API error");
        assert!(error.is_api());

        let message = error.to_string();
        assert!(message.contains("OAuthException"));
        assert!(message.contains("400"));
        assert!(message.contains("bad token"));
        assert_eq!(message, "OAuthException [code:400] bad token (RateLimitRemaining: 17)");
    }
}
