// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::{
    client::{Client, Params},
    json::Json,
    media::Media,
    pagination::Response,
    Result,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    id: String,
    username: String,
    full_name: String,
    profile_picture: String,
    bio: String,
    website: String,
    total_media: i64,
    total_follows: i64,
    total_followers: i64,
}

pub fn user_from_api(data: &Json) -> User {
    let mut full_name = data.string("full_name");
    // Some responses split the name up.
    if full_name.is_empty() {
        full_name = format!("{} {}", data.string("first_name"), data.string("last_name"));
    }

    let counts = data.object("counts");
    User {
        id: data.string("id"),
        username: data.string("username"),
        full_name,
        profile_picture: data.string("profile_picture"),
        bio: data.string("bio"),
        website: data.string("website"),
        total_media: counts.int("media"),
        total_follows: counts.int("follows"),
        total_followers: counts.int("followed_by"),
    }
}

impl Client {
    /// Gets basic information about a user. `user_id` is the numeric ID (not
    /// the username), or `self` with an access token.
    pub fn user_detail(&self, user_id: &str) -> Result<Response<User>> {
        self.object_request(&["users", user_id], &Params::new(), user_from_api)
    }

    /// Searches users by name. A zero `max` leaves the count to the server.
    pub fn search_users(&self, query: &str, max: u32) -> Result<Response<Vec<User>>> {
        let mut params = Params::new();
        params.insert("q".into(), query.into());
        if max > 0 {
            params.insert("count".into(), max.to_string());
        }
        self.list_request(&["users", "search"], &params, user_from_api)
    }

    /// Gets the most recent media posted by a user. Requires an access token.
    pub fn recent_posts_by_user(
        &self,
        user_id: &str,
        max: u32,
        before: &str,
        after: &str,
    ) -> Result<Response<Vec<Media>>> {
        self.generic_media_list_request(&["users", user_id, "media", "recent"], before, after, max)
    }

    /// Gets the authenticated user's feed. Requires an access token.
    pub fn feed(&self, before: &str, after: &str, max: u32) -> Result<Response<Vec<Media>>> {
        self.generic_media_list_request(&["users", "self", "feed"], before, after, max)
    }

    /// Gets media liked by the authenticated user. Requires an access token.
    pub fn liked(&self, max: u32, before: &str) -> Result<Response<Vec<Media>>> {
        self.generic_media_list_request(&["users", "self", "media", "liked"], before, "", max)
    }
}

impl User {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn profile_picture(&self) -> &str {
        &self.profile_picture
    }
    pub fn bio(&self) -> &str {
        &self.bio
    }
    pub fn website(&self) -> &str {
        &self.website
    }
    pub fn total_media(&self) -> i64 {
        self.total_media
    }
    pub fn total_follows(&self) -> i64 {
        self.total_follows
    }
    pub fn total_followers(&self) -> i64 {
        self.total_followers
    }
}

#[cfg(test)]
mod tests {
    use super::user_from_api;
    use crate::json::Json;

    #[test]
    fn split_name() {
        let user = user_from_api(&Json::from_slice(br#"{"first_name": "Jane", "last_name": "Doe"}"#));
        assert_eq!(user.full_name(), "Jane Doe");

        let user = user_from_api(&Json::from_slice(br#"{"first_name": "Jane"}"#));
        assert_eq!(user.full_name(), "Jane ");
    }

    #[test]
    fn combined_name() {
        let user = user_from_api(&Json::from_slice(
            br#"{"full_name": "Jane Doe", "first_name": "Other", "last_name": "Name"}"#,
        ));
        assert_eq!(user.full_name(), "Jane Doe");
    }

    #[test]
    fn counts() {
        let user = user_from_api(&Json::from_slice(
            br#"{
                "id": "1574083",
                "username": "snoopdogg",
                "bio": "This is my bio",
                "website": "http://snoopdogg.com",
                "profile_picture": "http://distillery.s3.amazonaws.com/profiles/profile_1574083_75sq_1295469061.jpg",
                "counts": {"media": 1320, "follows": 420, "followed_by": 3410}
            }"#,
        ));
        assert_eq!(user.id(), "1574083");
        assert_eq!(user.username(), "snoopdogg");
        assert_eq!(user.bio(), "This is my bio");
        assert_eq!(user.website(), "http://snoopdogg.com");
        assert!(user.profile_picture().ends_with(".jpg"));
        assert_eq!(user.total_media(), 1320);
        assert_eq!(user.total_follows(), 420);
        assert_eq!(user.total_followers(), 3410);
        assert_eq!(user.full_name(), " ");
    }
}
