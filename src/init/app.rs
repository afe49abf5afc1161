use std::path::Path;

use super::json;
use crate::{App, Result};

impl App {
    pub fn try_from_file<P: AsRef<Path>>(settings_file_path: P, dt: f32) -> Result<Self> {
        let settings = json::parse_settings(settings_file_path)?;
        Self::try_new(&settings, dt)
    }
}
