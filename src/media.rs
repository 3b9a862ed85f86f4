// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::{
    client::{Client, Params},
    json::Json,
    location::{location_from_api, Location},
    pagination::Response,
    Result,
};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MediaType {
    Image,
    Video,
    Carousel,
    Unknown(String),
}

impl Default for MediaType {
    fn default() -> MediaType {
        MediaType::Unknown(String::new())
    }
}

impl From<&str> for MediaType {
    fn from(kind: &str) -> MediaType {
        match kind {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            "carousel" => MediaType::Carousel,
            other => MediaType::Unknown(other.to_string()),
        }
    }
}

/// A post. Comments aren't included.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Media {
    id: String,
    link: String,
    media_type: MediaType,
    filter: String,
    tags: Vec<String>,
    caption: String,
    creation_time: DateTime<Utc>,
    likes: i64,
    comments: i64,
    // Owner.
    username: String,
    user_id: String,
    full_name: String,
    // Image variants.
    low_resolution: String,
    thumbnail: String,
    standard_resolution: String,
    // Only set for videos.
    video_low_bandwidth: String,
    video_low_resolution: String,
    video_standard_resolution: String,
    location: Location,
}

/// Converts a media object of an API response.
pub fn media_from_api(data: &Json) -> Media {
    let user = data.object("user");
    let images = data.object("images");
    let videos = data.object("videos");

    Media {
        id: data.string("id"),
        link: data.string("link"),
        media_type: MediaType::from(data.string("type").as_str()),
        filter: data.string("filter"),
        tags: data.string_array("tags"),
        caption: data.object("caption").string("text"),
        creation_time: parse_created_time(&data.string("created_time")),
        likes: data.object("likes").int("count"),
        comments: data.object("comments").int("count"),
        username: user.string("username"),
        user_id: user.string("id"),
        full_name: user.string("full_name"),
        low_resolution: images.object("low_resolution").string("url"),
        thumbnail: images.object("thumbnail").string("url"),
        standard_resolution: images.object("standard_resolution").string("url"),
        video_low_bandwidth: videos.object("low_bandwidth").string("url"),
        video_low_resolution: videos.object("low_resolution").string("url"),
        video_standard_resolution: videos.object("standard_resolution").string("url"),
        location: location_from_api(&data.object("location")),
    }
}

/// Epoch seconds as a decimal string. Anything unparsable is the epoch.
fn parse_created_time(seconds: &str) -> DateTime<Utc> {
    seconds
        .trim()
        .parse()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .unwrap_or_default()
}

impl Client {
    /// Gets details of the media with the given ID.
    pub fn media(&self, media_id: &str) -> Result<Response<Media>> {
        self.object_request(&["media", media_id], &Params::new(), media_from_api)
    }

    /// Gets media which is popular at the moment.
    pub fn popular(&self) -> Result<Response<Vec<Media>>> {
        self.generic_media_list_request(&["media", "popular"], "", "", 0)
    }

    /// Gets media recently posted near the coordinates. A non-positive
    /// `distance` (in meters) leaves the radius to the server.
    pub fn location_search(&self, lat: f64, lng: f64, distance: f64) -> Result<Response<Vec<Media>>> {
        let params = coordinates(lat, lng, distance);
        self.list_request(&["media", "search"], &params, media_from_api)
    }
}

/// Parameters of proximity searches.
pub(crate) fn coordinates(lat: f64, lng: f64, distance: f64) -> Params {
    let mut params = Params::new();
    if distance > 0.0 {
        params.insert("distance".into(), format!("{:.6}", distance));
    }
    params.insert("lat".into(), format!("{:.6}", lat));
    params.insert("lng".into(), format!("{:.6}", lng));
    params
}

impl Media {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn link(&self) -> &str {
        &self.link
    }
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }
    pub fn filter(&self) -> &str {
        &self.filter
    }
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
    pub fn caption(&self) -> &str {
        &self.caption
    }
    pub fn creation_time(&self) -> &DateTime<Utc> {
        &self.creation_time
    }
    pub fn likes(&self) -> i64 {
        self.likes
    }
    pub fn comments(&self) -> i64 {
        self.comments
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn low_resolution(&self) -> &str {
        &self.low_resolution
    }
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }
    pub fn standard_resolution(&self) -> &str {
        &self.standard_resolution
    }
    pub fn video_low_bandwidth(&self) -> &str {
        &self.video_low_bandwidth
    }
    pub fn video_low_resolution(&self) -> &str {
        &self.video_low_resolution
    }
    pub fn video_standard_resolution(&self) -> &str {
        &self.video_standard_resolution
    }
    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::{coordinates, media_from_api, MediaType};
    use crate::json::Json;
    use chrono::{DateTime, Utc};

    #[test]
    fn full_media() {
        let json = Json::from_slice(
            br#"{
                "id": "22699663_1",
                "type": "video",
                "filter": "Vesper",
                "link": "https://instagram.com/p/abc/",
                "tags": ["cats", "sea"],
                "created_time": "1296748524",
                "likes": {"count": 15},
                "comments": {"count": 2},
                "caption": {"text": "Hello"},
                "user": {"id": "7", "username": "kevin", "full_name": "Kevin S"},
                "images": {
                    "low_resolution": {"url": "https://i/low.jpg"},
                    "thumbnail": {"url": "https://i/thumb.jpg"},
                    "standard_resolution": {"url": "https://i/std.jpg"}
                },
                "videos": {
                    "low_bandwidth": {"url": "https://v/lb.mp4"},
                    "low_resolution": {"url": "https://v/low.mp4"},
                    "standard_resolution": {"url": "https://v/std.mp4"}
                },
                "location": {"id": "514276", "name": "HQ", "latitude": 37.5, "longitude": -122.1}
            }"#,
        );
        let media = media_from_api(&json);

        assert_eq!(media.id(), "22699663_1");
        assert_eq!(media.media_type(), &MediaType::Video);
        assert_eq!(media.filter(), "Vesper");
        assert_eq!(media.link(), "https://instagram.com/p/abc/");
        assert_eq!(media.tags(), ["cats", "sea"]);
        assert_eq!(media.creation_time().timestamp(), 1_296_748_524);
        assert_eq!(media.likes(), 15);
        assert_eq!(media.comments(), 2);
        assert_eq!(media.caption(), "Hello");
        assert_eq!(media.username(), "kevin");
        assert_eq!(media.user_id(), "7");
        assert_eq!(media.full_name(), "Kevin S");
        assert_eq!(media.thumbnail(), "https://i/thumb.jpg");
        assert_eq!(media.low_resolution(), "https://i/low.jpg");
        assert_eq!(media.standard_resolution(), "https://i/std.jpg");
        assert_eq!(media.video_low_bandwidth(), "https://v/lb.mp4");
        assert_eq!(media.video_low_resolution(), "https://v/low.mp4");
        assert_eq!(media.video_standard_resolution(), "https://v/std.mp4");
        assert_eq!(media.location().name(), "HQ");
        assert_eq!(media.location().longitude(), -122.1);
    }

    #[test]
    fn created_time_falls_back_to_epoch() {
        let epoch = DateTime::<Utc>::default();
        assert_eq!(epoch.timestamp(), 0);

        let zero = media_from_api(&Json::from_slice(br#"{"created_time": "0"}"#));
        assert_eq!(*zero.creation_time(), epoch);

        let garbage = media_from_api(&Json::from_slice(br#"{"created_time": "yesterday"}"#));
        assert_eq!(*garbage.creation_time(), epoch);

        let missing = media_from_api(&Json::default());
        assert_eq!(*missing.creation_time(), epoch);
        assert_eq!(missing.media_type(), &MediaType::Unknown(String::new()));
        assert!(missing.tags().is_empty());
    }

    #[test]
    fn media_type() {
        assert_eq!(MediaType::from("image"), MediaType::Image);
        assert_eq!(MediaType::from("carousel"), MediaType::Carousel);
        assert_eq!(MediaType::from("reel"), MediaType::Unknown("reel".into()));
    }

    #[test]
    fn coordinates_params() {
        let params = coordinates(40.7142, -74.0064, 0.0);
        assert_eq!(params.get("lat").map(String::as_str), Some("40.714200"));
        assert_eq!(params.get("lng").map(String::as_str), Some("-74.006400"));
        assert!(!params.contains_key("distance"));

        let params = coordinates(0.0, 0.0, 4500.0);
        assert_eq!(params.get("distance").map(String::as_str), Some("4500.000000"));
    }
}
