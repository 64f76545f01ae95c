use thiserror::Error;
use tracing::info;
use types::WidgetId;

use crate::store::{PreferenceStore, StoreError};

#[derive(Debug, Error)]
pub enum ConfigureError {
    /// The host handed over no usable instance id, so there is no key to
    /// file the URL under.
    #[error("invalid widget instance id")]
    InvalidInstance,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Record the image URL for a newly placed widget instance.
///
/// The URL is stored verbatim: a malformed or unreachable URL is not an
/// error here, it just never produces a rendered image.
pub fn configure_widget<S: PreferenceStore>(
    store: &S,
    id: &WidgetId,
    url: &str,
) -> Result<(), ConfigureError> {
    if id.as_str().is_empty() {
        return Err(ConfigureError::InvalidInstance);
    }

    store.set(id, url)?;
    info!("Widget {} configured with {}", id, url);

    Ok(())
}
