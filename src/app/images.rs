//! Image loading methods
//!
//! Downloads go through the API service; decoding and protocol creation
//! run on the blocking pool and come back over `image_update_tx`. Every
//! settled thumbnail is also the completion signal for a pending
//! auto-scroll.

use crate::services::ApiRequest;
use crate::{App, ImageKey, ImagePreviewState, ImageUpdate};
use imgsearch::api::{ImageItem, ImageVariant, RequestError};

/// Images larger than this are not decoded
const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

impl App {
    /// Queue a download unless the image is already loading or loaded
    pub(crate) fn request_image(&mut self, item: &ImageItem, variant: ImageVariant) {
        if self.image_picker.is_none() {
            return;
        }

        let key: ImageKey = (item.id.clone(), variant);
        if self.image_state_map.contains_key(&key) {
            return;
        }

        self.image_state_map.insert(key, ImagePreviewState::Loading);
        self.send(ApiRequest::FetchImage {
            item_id: item.id.clone(),
            variant,
            url: item.url(variant).to_string(),
        });
    }

    /// Downloaded bytes (or a download failure) arrived from the API service
    pub(crate) fn handle_image_bytes(
        &mut self,
        item_id: String,
        variant: ImageVariant,
        bytes: Result<Vec<u8>, RequestError>,
    ) {
        let key: ImageKey = (item_id, variant);

        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(e) => {
                self.handle_image_update(ImageUpdate {
                    key,
                    state: ImagePreviewState::Failed {
                        reason: imgsearch::logic::errors::format_error_message(&e),
                    },
                });
                return;
            }
        };

        let Some(picker) = self.image_picker.clone() else {
            return;
        };

        let image_tx = self.image_update_tx.clone();
        tokio::spawn(async move {
            tracing::debug!(item_id = %key.0, ?variant, size = bytes.len(), "decoding image");
            let state = match Self::decode_image(bytes, picker).await {
                Ok((protocol, dimensions)) => ImagePreviewState::Ready { protocol, dimensions },
                Err(reason) => {
                    tracing::debug!(item_id = %key.0, %reason, "image decode failed");
                    ImagePreviewState::Failed { reason }
                }
            };
            let _ = image_tx.send(ImageUpdate { key, state });
        });
    }

    /// Store a decoded image and fire the auto-scroll if it was waiting on it
    pub(crate) fn handle_image_update(&mut self, update: ImageUpdate) {
        let ImageUpdate { key, state } = update;
        let (item_id, variant) = key.clone();

        self.image_state_map.insert(key, state);

        if variant == ImageVariant::Thumbnail {
            self.model.on_image_loaded(&item_id);
        }
    }

    /// Fire the pending auto-scroll right away if its image already settled
    pub(crate) fn check_pending_scroll(&mut self) {
        let previews_disabled = self.image_picker.is_none();
        let images = &self.image_state_map;

        self.model.settle_pending_scroll(|item_id| {
            previews_disabled
                || images
                    .get(&(item_id.to_string(), ImageVariant::Thumbnail))
                    .is_some_and(ImagePreviewState::is_settled)
        });
    }

    async fn decode_image(
        bytes: Vec<u8>,
        picker: ratatui_image::picker::Picker,
    ) -> Result<(ratatui_image::protocol::StatefulProtocol, (u32, u32)), String> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err("Too large".to_string());
        }

        let result = tokio::task::spawn_blocking(move || -> Result<_, String> {
            let img = image::load_from_memory(&bytes).map_err(|e| format!("Load error: {}", e))?;
            let dimensions = (img.width(), img.height());

            // Pre-downscale large images so protocol encoding stays cheap
            let font_size = picker.font_size();
            let max_width = 200 * font_size.0 as u32 * 5 / 4;
            let max_height = 60 * font_size.1 as u32 * 5 / 4;

            let img = if img.width() > max_width || img.height() > max_height {
                let scale_factor = (img.width() as f32 / max_width as f32)
                    .max(img.height() as f32 / max_height as f32);

                let filter = if scale_factor > 4.0 {
                    image::imageops::FilterType::Triangle
                } else if scale_factor > 2.0 {
                    image::imageops::FilterType::CatmullRom
                } else {
                    image::imageops::FilterType::Lanczos3
                };
                img.resize(max_width, max_height, filter)
            } else {
                img
            };

            Ok((picker.new_resize_protocol(img), dimensions))
        })
        .await;

        match result {
            Ok(inner) => inner,
            Err(e) => Err(format!("Task error: {}", e)),
        }
    }
}
