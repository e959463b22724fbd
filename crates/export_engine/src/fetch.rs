//! Remote image fetching and decoding
//!
//! Each node's image is fetched independently: plain HTTP GET, no auth,
//! no retry, no caching, and deliberately no timeout (a hanging remote
//! stalls the export; accepted behavior, not patched here). Every
//! failure path collapses to `None` so a broken image can never abort an
//! export.

use image::GenericImageView;
use thiserror::Error;

/// A fetched image decoded to RGB8, ready for PDF embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedImage {
    /// Raw RGB8 pixel data, row-major
    pub pixels: Vec<u8>,
    /// Pixel width
    pub width_px: u32,
    /// Pixel height
    pub height_px: u32,
}

impl FetchedImage {
    /// Display size in points when constrained to `max_width`,
    /// preserving aspect ratio. Images narrower than the bound keep
    /// their natural size (1px = 1pt).
    pub fn scaled_to_width(&self, max_width: f32) -> (f32, f32) {
        let natural_w = self.width_px as f32;
        let natural_h = self.height_px as f32;
        if natural_w <= max_width {
            (natural_w, natural_h)
        } else {
            (max_width, max_width * natural_h / natural_w)
        }
    }
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Fetches remote images referenced by map nodes.
#[derive(Debug, Default)]
pub struct ImageFetcher {
    client: reqwest::Client,
}

impl ImageFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch and decode one image. Any failure is logged and swallowed;
    /// callers treat `None` as "skip the image block".
    pub async fn fetch(&self, url: &str) -> Option<FetchedImage> {
        match self.try_fetch(url).await {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::warn!(url, error = %err, "image fetch failed, skipping");
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<FetchedImage, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let decoded = image::load_from_memory(&bytes)?;
        let (width_px, height_px) = decoded.dimensions();
        Ok(FetchedImage {
            pixels: decoded.to_rgb8().into_raw(),
            width_px,
            height_px,
        })
    }
}
