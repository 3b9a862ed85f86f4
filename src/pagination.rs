// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::json::Json;

/// Opaque cursors for the next or previous page. Only the fields relevant to
/// the producing endpoint are populated, the others are empty.
///
/// Feed `next_max_id` back as `before` to media listings, `next_max_tag_id`
/// to [tag_recent][crate::Client::tag_recent] and `next_cursor` to the
/// relationship listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pagination {
    pub next_max_tag_id: String,
    pub next_max_id: String,
    pub next_min_id: String,
    pub min_tag_id: String,
    pub next_url: String,
    pub next_cursor: String,
}

impl Pagination {
    /// Whether the server announced another page.
    pub fn has_next(&self) -> bool {
        !(self.next_url.is_empty()
            && self.next_max_id.is_empty()
            && self.next_max_tag_id.is_empty()
            && self.next_cursor.is_empty())
    }
}

pub fn pagination_from_api(pagination: &Json) -> Pagination {
    Pagination {
        next_max_tag_id: pagination.string("next_max_tag_id"),
        next_max_id: pagination.string("next_max_id"),
        next_min_id: pagination.string("next_min_id"),
        min_tag_id: pagination.string("min_tag_id"),
        next_url: pagination.string("next_url"),
        next_cursor: pagination.string("next_cursor"),
    }
}

/// Result of a single API call.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Response<T> {
    pub data: T,
    pub pagination: Pagination,
    /// Value of the rate-limit header returned with this response.
    pub rate_limit_remaining: i64,
}

impl<T> Response<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit_remaining: self.rate_limit_remaining,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}
