//! File I/O operations for profiles.

use crate::data::profile::Profile;
use crate::error::Result;
use std::path::Path;

/// Load a profile from a RON file, or the built-in one when no path is given.
pub fn load_profile(path: Option<&Path>) -> Result<Profile> {
    match path {
        Some(path) => Profile::load(path),
        None => Ok(Profile::default()),
    }
}

/// Write a profile template, based on the built-in profile, to `path`.
pub fn create_template(path: &Path) -> Result<()> {
    Profile::default().save(path)
}
