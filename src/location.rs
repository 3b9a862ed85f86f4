// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Named places such as bars, museums or offices.

use crate::{
    client::{Client, Params},
    json::Json,
    media::{coordinates, Media},
    pagination::Response,
    Result,
};

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
}

pub fn location_from_api(location: &Json) -> Location {
    Location {
        id: location.string("id"),
        name: location.string("name"),
        latitude: location.float("latitude"),
        longitude: location.float("longitude"),
    }
}

impl Client {
    pub fn location(&self, location_id: &str) -> Result<Response<Location>> {
        self.object_request(&["locations", location_id], &Params::new(), location_from_api)
    }

    /// Gets locations near the coordinates. A non-positive `distance` (in
    /// meters) leaves the radius to the server.
    pub fn locations_near(
        &self,
        lat: f64,
        lng: f64,
        distance: f64,
    ) -> Result<Response<Vec<Location>>> {
        let params = coordinates(lat, lng, distance);
        self.list_request(&["locations", "search"], &params, location_from_api)
    }

    /// Gets media recently posted at a location. `before` and `after` are
    /// media IDs.
    pub fn location_posts(
        &self,
        location_id: &str,
        before: &str,
        after: &str,
    ) -> Result<Response<Vec<Media>>> {
        let path = ["locations", location_id, "media", "recent"];
        self.generic_media_list_request(&path, before, after, 0)
    }
}

impl Location {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
    /// Degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
