// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use std::env;

/// Environment variable holding an OAuth access token.
pub const ACCESS_TOKEN_VAR: &str = "INSTAGRAM_ACCESS_TOKEN";
/// Environment variable holding an application client ID.
pub const CLIENT_ID_VAR: &str = "INSTAGRAM_CLIENT_ID";

/// Application or user credentials attached to every request.
///
/// A client ID identifies the calling application and is enough for public
/// endpoints. An access token (obtained elsewhere through OAuth) authorizes
/// requests on behalf of a user. If the token is non-empty the client ID is
/// ignored, even if the request then fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new_client_id<S: Into<String>>(client_id: S) -> Credentials {
        Credentials { client_id: client_id.into(), ..Credentials::default() }
    }

    pub fn new_access_token<S: Into<String>>(access_token: S) -> Credentials {
        Credentials { access_token: access_token.into(), ..Credentials::default() }
    }

    /// Reads [ACCESS_TOKEN_VAR] and [CLIENT_ID_VAR]. At least one must be set.
    pub fn from_env() -> crate::Result<Credentials> {
        let credentials = Credentials {
            client_id: env::var(CLIENT_ID_VAR).unwrap_or_default().trim().to_string(),
            access_token: env::var(ACCESS_TOKEN_VAR).unwrap_or_default().trim().to_string(),
        };
        if credentials.client_id.is_empty() && credentials.access_token.is_empty() {
            return Err(crate::Error::MissingCredentials);
        }
        Ok(credentials)
    }

    /// The query parameter which authenticates a request.
    pub fn query_param(&self) -> (&'static str, &str) {
        if self.access_token.is_empty() {
            ("client_id", &self.client_id)
        } else {
            ("access_token", &self.access_token)
        }
    }
}
