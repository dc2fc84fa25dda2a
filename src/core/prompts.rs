//! System prompt loading

use std::path::Path;
use tracing::{debug, warn};

/// Read the system prompt prepended to every chat request
///
/// Returns `None` when the file is missing, unreadable or blank.
pub async fn load_system_prompt<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                debug!("System prompt file {:?} is empty", path);
                None
            } else {
                debug!("Loaded system prompt from {:?}", path);
                Some(trimmed.to_string())
            }
        }
        Err(e) => {
            warn!("Could not read system prompt {:?}: {}", path, e);
            None
        }
    }
}
