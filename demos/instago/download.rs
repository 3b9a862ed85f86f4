// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Downloads images of the recent media with a tag.

use instaview::{Client, Media};

use std::{path::Path, sync::Arc};
use threadpool::ThreadPool;

pub fn download_tag(client: Arc<Client>, tag: &str, max: u32, output_dir: &Path) -> Result<(), String> {
    println!("Gathering recent media with #{}...", tag);
    let media = match client.tag_recent(tag, "", "", max) {
        Ok(response) => response.data,
        Err(e) => return Err(format!("Couldn't gather the media: {}", e)),
    };
    if media.is_empty() {
        println!("No media found");
        return Ok(());
    }

    let pool = ThreadPool::new(num_cpus::get());
    for media in media {
        if media.standard_resolution().is_empty() {
            continue;
        }

        let client = Arc::clone(&client);
        let path = output_dir.join(filename(&media));
        pool.execute(move || {
            match client.download(media.standard_resolution(), &path) {
                Ok(bytes) => println!("{} ({} bytes)", path.display(), bytes),
                Err(e) => eprintln!("Failed to download media with ID {}: {}", media.id(), e),
            }
        });
    }
    pool.join();
    Ok(())
}

fn filename(media: &Media) -> String {
    format!(
        "{}_{}_{}.jpg",
        media.username(),
        media.id(),
        media.creation_time().format("%FT%H-%M-%S"),
    )
}
