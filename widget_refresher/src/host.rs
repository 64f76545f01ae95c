use image::DynamicImage;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use types::WidgetId;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to render image: {0}")]
    Render(#[from] image::ImageError),
}

/// The platform surface that owns the placed widget instances.
pub trait WidgetHost: Send + Sync {
    /// Ids of every currently placed instance. May be empty.
    fn list_instances(&self) -> Vec<WidgetId>;

    /// Push a decoded image into the display slot for `id`.
    fn render(&self, id: &WidgetId, image: &DynamicImage) -> Result<(), HostError>;
}

/// Filesystem-backed host: every subdirectory of `root` is one placed
/// widget instance, and rendering writes `<root>/<id>/image.png`.
///
/// Placement and removal (creating and deleting the subdirectories) belong
/// to whoever embeds the service, same as the widget surface they stand
/// in for.
pub struct DirectoryHost {
    root: PathBuf,
}

impl DirectoryHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WidgetHost for DirectoryHost {
    fn list_instances(&self) -> Vec<WidgetId> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to enumerate widget instances: {}", e);
                return Vec::new();
            }
        };

        let mut ids = Vec::new();
        for entry in entries.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                ids.push(WidgetId::from(name));
            }
        }
        ids
    }

    fn render(&self, id: &WidgetId, image: &DynamicImage) -> Result<(), HostError> {
        image.save(self.root.join(id.as_str()).join("image.png"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_host() -> DirectoryHost {
        let root = std::env::temp_dir()
            .join(format!("picframe-widgets-{}", uuid::Uuid::now_v7()));
        fs::create_dir_all(&root).unwrap();
        DirectoryHost::new(root)
    }

    #[test]
    fn test_instances_are_subdirectories_only() {
        let host = temp_host();
        fs::create_dir(host.root.join("11")).unwrap();
        fs::create_dir(host.root.join("12")).unwrap();
        fs::write(host.root.join("stray.txt"), b"not a widget").unwrap();

        let mut ids = host.list_instances();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        assert_eq!(ids, vec![WidgetId::from("11"), WidgetId::from("12")]);

        let _ = fs::remove_dir_all(&host.root);
    }

    #[test]
    fn test_missing_root_lists_nothing() {
        let host = DirectoryHost::new("/nonexistent/picframe-widgets");
        assert!(host.list_instances().is_empty());
    }

    #[test]
    fn test_render_writes_the_instance_image() {
        let host = temp_host();
        let id = WidgetId::from("11");
        fs::create_dir(host.root.join("11")).unwrap();

        let image = DynamicImage::new_rgba8(2, 2);
        host.render(&id, &image).unwrap();

        assert!(host.root.join("11/image.png").is_file());

        let _ = fs::remove_dir_all(&host.root);
    }

    #[test]
    fn test_render_fails_for_a_removed_instance() {
        let host = temp_host();
        let id = WidgetId::from("gone");

        let image = DynamicImage::new_rgba8(2, 2);
        assert!(host.render(&id, &image).is_err());

        let _ = fs::remove_dir_all(&host.root);
    }
}
