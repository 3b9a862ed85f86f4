// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::{
    client::{Client, Params},
    pagination::Response,
    user::{user_from_api, User},
    Result,
};

impl Client {
    /// Gets the users followed by `user_id`. Pass
    /// [next_cursor][crate::Pagination::next_cursor] as `cursor` to continue.
    pub fn user_follows(&self, user_id: &str, cursor: &str) -> Result<Response<Vec<User>>> {
        self.relationship_list(&["users", user_id, "follows"], cursor)
    }

    /// Gets the users following `user_id`.
    pub fn user_followers(&self, user_id: &str, cursor: &str) -> Result<Response<Vec<User>>> {
        self.relationship_list(&["users", user_id, "followed-by"], cursor)
    }

    fn relationship_list(&self, path: &[&str], cursor: &str) -> Result<Response<Vec<User>>> {
        let mut params = Params::new();
        if !cursor.is_empty() {
            params.insert("cursor".into(), cursor.into());
        }
        self.list_request(path, &params, user_from_api)
    }
}
