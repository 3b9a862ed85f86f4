// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

mod config;
mod download;

use instaview::{Client, Location, Media, Pagination, Response, Tag, User};

use std::{
    fs,
    ffi::OsStr,
    path::{Path, PathBuf},
    process,
    sync::Arc,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about, author, version)]
#[clap(name = env!("CARGO_CRATE_NAME"))]
struct Cli {
    /// Application client ID (overrides the environment and config.txt)
    #[clap(long, global = true, value_name = "ID")]
    client_id: Option<String>,

    /// Print raw results as JSON
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search users and show details of the first match
    User { query: String },

    /// Search users and list followers and follows of the first match
    Relationship { query: String },

    /// Show tag information, recent media and similar tags
    Tag { tag: String },

    /// Show popular media and media posted near the coordinates
    Media {
        #[clap(long, allow_hyphen_values = true, default_value = "40.7142")]
        lat: f64,
        #[clap(long, allow_hyphen_values = true, default_value = "-74.0064")]
        lng: f64,
        /// Search radius in meters
        #[clap(long, default_value = "4500")]
        distance: f64,
    },

    /// Show recent posts of a location and locations near the coordinates
    Locations {
        #[clap(long, default_value = "514276")]
        id: String,
        #[clap(long, allow_hyphen_values = true, default_value = "48.858844")]
        lat: f64,
        #[clap(long, allow_hyphen_values = true, default_value = "2.294351")]
        lng: f64,
    },

    /// Download images of the recent media with a tag
    Download {
        tag: String,
        #[clap(long, default_value = "20")]
        max: u32,
        #[clap(parse(try_from_os_str = validate_output_dir))]
        dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let credentials = match config::load(cli.client_id.as_deref()) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Couldn't load credentials: {}", e);
            process::exit(1);
        }
    };
    let client = Client::new(credentials);
    let json = cli.json;

    run_or_exit(move || match cli.command {
        Command::User { query } => show_user(&client, &query, json),
        Command::Relationship { query } => show_relationship(&client, &query, json),
        Command::Tag { tag } => show_tag(&client, &tag, json),
        Command::Media { lat, lng, distance } => show_media(&client, lat, lng, distance, json),
        Command::Locations { id, lat, lng } => show_locations(&client, &id, lat, lng, json),
        Command::Download { tag, max, dir } => {
            download::download_tag(Arc::new(client), &tag, max, &dir)
        }
    });
}

fn show_user(client: &Client, query: &str, json: bool) -> Result<(), String> {
    let users = search_users(client, query, json)?;
    let first = match users.first() {
        Some(user) => user,
        None => return Ok(()),
    };

    println!("\nMore detail on @{}", first.username());
    let user = client
        .user_detail(first.id())
        .map_err(|e| format!("Couldn't retrieve the user: {}", e))?;
    if json {
        return print_json(&user);
    }
    let user = user.data;
    println!(
        "ID: {}\nUsername: {}\nFull name: {}\nBio: {}\nWebsite: {}\n\
        Follows: {}\nFollowers: {}\nMedia: {}",
        user.id(),
        user.username(),
        user.full_name(),
        user.bio(),
        user.website(),
        user.total_follows(),
        user.total_followers(),
        user.total_media(),
    );
    Ok(())
}

fn show_relationship(client: &Client, query: &str, json: bool) -> Result<(), String> {
    let users = search_users(client, query, json)?;
    let first = match users.first() {
        Some(user) => user,
        None => return Ok(()),
    };

    println!("\n@{} followers:", first.username());
    let followers = client
        .user_followers(first.id(), "")
        .map_err(|e| format!("Couldn't retrieve followers: {}", e))?;
    print_users(&followers, json)?;

    println!("\n@{} follows:", first.username());
    let follows = client
        .user_follows(first.id(), "")
        .map_err(|e| format!("Couldn't retrieve follows: {}", e))?;
    print_users(&follows, json)
}

fn search_users(client: &Client, query: &str, json: bool) -> Result<Vec<User>, String> {
    let users = client
        .search_users(query, 0)
        .map_err(|e| format!("Couldn't search users: {}", e))?;
    if users.data.is_empty() {
        println!("No results");
    }
    print_users(&users, json)?;
    Ok(users.data)
}

fn show_tag(client: &Client, tag: &str, json: bool) -> Result<(), String> {
    let info = client
        .tag_info(tag)
        .map_err(|e| format!("Couldn't retrieve the tag: {}", e))?;
    if json {
        print_json(&info)?;
    } else {
        print_tag(&info.data);
    }

    println!("\nRecent media:");
    let media = client
        .tag_recent(tag, "", "", 0)
        .map_err(|e| format!("Couldn't retrieve recent media: {}", e))?;
    print_media(&media, json)?;

    println!("\nSimilar tags:");
    let tags = client
        .tag_search(tag)
        .map_err(|e| format!("Couldn't search tags: {}", e))?;
    if json {
        return print_json(&tags);
    }
    tags.data.iter().for_each(print_tag);
    print_pagination(&tags.pagination);
    Ok(())
}

fn show_media(client: &Client, lat: f64, lng: f64, distance: f64, json: bool) -> Result<(), String> {
    println!("Popular at the moment:");
    let popular = client
        .popular()
        .map_err(|e| format!("Couldn't retrieve popular media: {}", e))?;
    print_media(&popular, json)?;

    println!("\nPosted near {}, {}:", lat, lng);
    let nearby = client
        .location_search(lat, lng, distance)
        .map_err(|e| format!("Couldn't search media: {}", e))?;
    print_media(&nearby, json)
}

fn show_locations(client: &Client, id: &str, lat: f64, lng: f64, json: bool) -> Result<(), String> {
    println!("Posts at location {}:", id);
    let posts = client
        .location_posts(id, "", "")
        .map_err(|e| format!("Couldn't retrieve location posts: {}", e))?;
    print_media(&posts, json)?;

    println!("\nLocations near {}, {}:", lat, lng);
    let locations = client
        .locations_near(lat, lng, 0.0)
        .map_err(|e| format!("Couldn't search locations: {}", e))?;
    if json {
        return print_json(&locations);
    }
    locations.data.iter().for_each(print_location);
    print_pagination(&locations.pagination);
    Ok(())
}

fn print_users(users: &Response<Vec<User>>, json: bool) -> Result<(), String> {
    if json {
        return print_json(users);
    }
    for user in &users.data {
        println!("Username: {} Full name: {}", user.username(), user.full_name());
    }
    print_pagination(&users.pagination);
    Ok(())
}

fn print_media(media: &Response<Vec<Media>>, json: bool) -> Result<(), String> {
    if json {
        return print_json(media);
    }
    for media in &media.data {
        let location = media.location();
        println!(
            "User: @{} Filter: {} Likes: {} Posted: {}",
            media.username(),
            media.filter(),
            media.likes(),
            media.creation_time().to_rfc2822(),
        );
        if !location.name().is_empty() {
            println!("  at {} ({}, {})", location.name(), location.latitude(), location.longitude());
        }
    }
    print_pagination(&media.pagination);
    Ok(())
}

fn print_tag(tag: &Tag) {
    println!("Tag: #{} Total: {}", tag.name(), tag.media_count());
}

fn print_location(location: &Location) {
    println!("Name: {} Coords: {} {}", location.name(), location.latitude(), location.longitude());
}

fn print_pagination(pagination: &Pagination) {
    if pagination.has_next() {
        println!("More results are available");
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

/// If `func` returns `Err`, prints an error message and terminates the current process.
fn run_or_exit<F: FnOnce() -> Result<(), String>>(func: F) {
    if let Err(message) = func() {
        eprintln!("{}", message);
        process::exit(1);
    }
}

/// If a directory exists, checks if it's writable, otherwise creates a new one.
fn validate_output_dir(path: &OsStr) -> Result<PathBuf, String> {
    let path = Path::new(path);
    if path.exists() {
        if path.is_file() {
            return Err("it's a file".into());
        }
        if let Err(e) = path.read_dir() {
            return Err(format!("unable to read directory ({})", e));
        }
    } else if let Err(e) = fs::create_dir_all(path) {
        return Err(format!("failed to create directory ({})", e));
    }
    Ok(path.to_path_buf())
}
