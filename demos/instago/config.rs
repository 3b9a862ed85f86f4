// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Credentials lookup for the demo.

use instaview::Credentials;

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.txt";

/// Resolves credentials in order: `client_id` argument, environment,
/// `config.txt` in the working directory, then in the configuration directory.
pub fn load(client_id: Option<&str>) -> Result<Credentials, Box<dyn Error>> {
    if let Some(client_id) = client_id {
        return Ok(Credentials::new_client_id(client_id));
    }
    if let Ok(credentials) = Credentials::from_env() {
        return Ok(credentials);
    }

    for path in [PathBuf::from(FILE_NAME), path()] {
        if path.is_file() {
            return read(&path);
        }
    }
    Err(format!(
        "no credentials found (use --client-id, set {} or create {})",
        instaview::auth::CLIENT_ID_VAR,
        path().display(),
    ).into())
}

/// Reads a client ID stored as the only content of a text file.
pub fn read(path: &Path) -> Result<Credentials, Box<dyn Error>> {
    let client_id = fs::read_to_string(path)?;
    let client_id = client_id.trim();
    if client_id.is_empty() {
        return Err(format!("{} is empty", path.display()).into());
    }
    tracing::debug!(path = %path.display(), "loaded client ID");
    Ok(Credentials::new_client_id(client_id))
}

pub fn path() -> PathBuf {
    let path = Path::new(env!("CARGO_CRATE_NAME")).join(FILE_NAME);
    match dirs::config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
