// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Blocking client for the read-only part of the Instagram v1 REST API:
//! media, users, relationships, tags and locations.
//!
//! Every call performs one GET request and maps the `data` block of the
//! response envelope into typed values. Network and decoding failures
//! degrade to an empty result. Failures reported by the API in the `meta`
//! block are returned as [Error::Api].
//!
//! ```no_run
//! use instaview::{Client, Credentials};
//!
//! let client = Client::new(Credentials::new_client_id("CLIENT_ID"));
//! let page = client.tag_recent("sunset", "", "", 10)?;
//! for media in &page.data {
//!     println!("@{}: {}", media.username(), media.caption());
//! }
//! let _next = client.tag_recent("sunset", &page.pagination.next_max_tag_id, "", 10)?;
//! # Ok::<(), instaview::Error>(())
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod json;
pub mod location;
pub mod media;
pub mod pagination;
mod relationship;
pub mod tag;
pub mod user;

pub use crate::{
    auth::Credentials,
    client::{Client, Params, RawResponse},
    error::Error,
    json::Json,
    location::Location,
    media::{Media, MediaType},
    pagination::{Pagination, Response},
    tag::Tag,
    user::User,
};

/// Versioned root of the API. Endpoints are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://api.instagram.com/v1/";

pub type Result<T> = std::result::Result<T, Error>;
