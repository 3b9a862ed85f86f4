// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::{
    client::{Client, Params},
    json::Json,
    media::{media_from_api, Media},
    pagination::Response,
    Result,
};

/// A tag and the number of media carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tag {
    name: String,
    media_count: i64,
}

pub fn tag_from_api(tag: &Json) -> Tag {
    Tag { name: tag.string("name"), media_count: tag.int("media_count") }
}

impl Client {
    /// Gets recent media with `tag` (without the leading `#`).
    ///
    /// Unlike other media listings, this endpoint paginates with tag cursors:
    /// pass [next_max_tag_id][crate::Pagination::next_max_tag_id] as `before`.
    pub fn tag_recent(
        &self,
        tag: &str,
        before: &str,
        after: &str,
        max: u32,
    ) -> Result<Response<Vec<Media>>> {
        let mut params = Params::new();
        if max > 0 {
            params.insert("count".into(), max.to_string());
        }
        if !before.is_empty() {
            params.insert("max_tag_id".into(), before.into());
        }
        if !after.is_empty() {
            params.insert("min_tag_id".into(), after.into());
        }
        self.list_request(&["tags", tag, "media", "recent"], &params, media_from_api)
    }

    /// Gets the total number of media with `tag`.
    pub fn tag_info(&self, tag: &str) -> Result<Response<Tag>> {
        self.object_request(&["tags", tag], &Params::new(), tag_from_api)
    }

    /// Searches for tags similar to `query`.
    pub fn tag_search(&self, query: &str) -> Result<Response<Vec<Tag>>> {
        let mut params = Params::new();
        params.insert("q".into(), query.into());
        self.list_request(&["tags", "search"], &params, tag_from_api)
    }
}

impl Tag {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn media_count(&self) -> i64 {
        self.media_count
    }
}
