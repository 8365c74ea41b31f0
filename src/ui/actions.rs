//! Link actions for the search UI.
//!
//! Provides operations that can be performed on a search result:
//! - Open the viewer, download or preview link in the system browser
//! - Copy a link to the clipboard
//!
//! Links from the server are usually origin-relative (`/pdf/...`) and are
//! resolved against the configured server before use.

use reqwest::Url;

use crate::api::HttpClient;
use crate::{NoteSeekError, Result};

/// Open a result link with the system browser.
///
/// # Arguments
/// * `client` - Client whose server origin relative links resolve against
/// * `href` - Link as returned by the server
///
/// # Errors
/// Returns error if the link doesn't resolve or no browser can be launched.
pub fn open_link(client: &HttpClient, href: &str) -> Result<Url> {
    let url = client.resolve(href)?;
    tracing::info!("Opening link: {}", url);

    opener::open_browser(url.as_str())
        .map_err(|e| NoteSeekError::Action(format!("Failed to open {}: {}", url, e)))?;

    Ok(url)
}

/// Copy the resolved link to the system clipboard.
///
/// # Errors
/// Returns error if the link doesn't resolve or clipboard access fails.
pub fn copy_link(client: &HttpClient, href: &str) -> Result<Url> {
    let url = client.resolve(href)?;
    tracing::info!("Copying link to clipboard: {}", url);

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| NoteSeekError::Action(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(url.to_string())
        .map_err(|e| NoteSeekError::Action(format!("Failed to set clipboard text: {}", e)))?;

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_unresolvable_link() {
        let client = HttpClient::new("http://127.0.0.1:5000").unwrap();
        // Fails during resolution, before any browser is launched
        assert!(matches!(
            open_link(&client, "http://[::1"),
            Err(NoteSeekError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_copy_unresolvable_link() {
        let client = HttpClient::new("http://127.0.0.1:5000").unwrap();
        assert!(matches!(
            copy_link(&client, "http://[::1"),
            Err(NoteSeekError::InvalidUrl(_))
        ));
    }

    // Note: Clipboard and browser tests are difficult to run in CI environments
    // as they require a desktop session
}
