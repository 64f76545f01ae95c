use image::DynamicImage;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(reqwest::StatusCode),

    #[error("payload is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Downloads and decodes one configured image.
pub trait ImageFetcher: Send + Sync {
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<DynamicImage, FetchError>> + Send;
}

/// Fetcher that downloads over HTTP(S) and decodes with the `image`
/// crate's format sniffing.
#[derive(Clone, Default)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<DynamicImage, FetchError>> + Send {
        let request = self.client.get(url);

        async move {
            let response = request.send().await?;

            if !response.status().is_success() {
                return Err(FetchError::Status(response.status()));
            }

            let bytes = response.bytes().await?;
            decode_image(&bytes)
        }
    }
}

/// Decode a downloaded payload into an image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, FetchError> {
    Ok(image::load_from_memory(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;
    use std::io::Cursor;

    #[test]
    fn test_decode_accepts_a_valid_png() {
        let mut bytes = Vec::new();
        DynamicImage::new_rgba8(4, 4)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (4, 4));
    }

    #[test]
    fn test_decode_rejects_non_image_payloads() {
        let result = decode_image(b"<html>404 not found</html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_empty_payloads() {
        assert!(matches!(decode_image(&[]), Err(FetchError::Decode(_))));
    }
}
