use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use log::{debug, warn};
use parking_lot::Mutex;

use crate::error::TextureLoadError;

/// Load state of one image URL.
enum ImageState {
    /// Requested, not finished. May stay here forever if the fetch never
    /// resolves; the shape keeps rendering as an empty box meanwhile.
    Pending,
    Ready(TextureHandle),
    Failed,
}

type Completion = (String, Result<ColorImage, TextureLoadError>);

/// URL-keyed cache of shape images.
///
/// The first request for a URL spawns a worker thread that fetches and
/// decodes it. Completions land in a shared queue, are drained at the start
/// of the next frame and uploaded as egui textures. The UI thread never
/// blocks on a load, and a failed URL is remembered so it is not refetched.
pub struct TextureStore {
    images: HashMap<String, ImageState>,
    completed: Arc<Mutex<Vec<Completion>>>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
            completed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain finished loads and upload them as textures. Call once at the
    /// start of each frame.
    pub fn begin_frame(&mut self, ctx: &Context) {
        let completions: Vec<Completion> = std::mem::take(&mut *self.completed.lock());
        for (url, result) in completions {
            match result {
                Ok(image) => {
                    debug!("image ready: {url}");
                    let handle = ctx.load_texture(&url, image, TextureOptions::LINEAR);
                    self.images.insert(url, ImageState::Ready(handle));
                }
                Err(err) => {
                    warn!("image load failed for {url}: {err}");
                    self.images.insert(url, ImageState::Failed);
                }
            }
        }
    }

    /// Texture for `url` if it has finished loading. The first call for an
    /// unseen URL kicks off a background fetch; while the load is pending
    /// or after it failed this returns `None`.
    pub fn texture_for(&mut self, ctx: &Context, url: &str) -> Option<TextureId> {
        match self.images.get(url) {
            Some(ImageState::Ready(handle)) => Some(handle.id()),
            Some(_) => None,
            None => {
                self.request(ctx, url);
                None
            }
        }
    }

    fn request(&mut self, ctx: &Context, url: &str) {
        debug!("requesting image {url}");
        self.images.insert(url.to_owned(), ImageState::Pending);

        let completed = Arc::clone(&self.completed);
        let ctx = ctx.clone();
        let url = url.to_owned();
        thread::spawn(move || {
            let result = fetch_and_decode(&url);
            completed.lock().push((url, result));
            // Wake the UI so the texture shows up without further input.
            ctx.request_repaint();
        });
    }

    #[cfg(test)]
    fn push_completion(&self, url: &str, result: Result<ColorImage, TextureLoadError>) {
        self.completed.lock().push((url.to_owned(), result));
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_and_decode(url: &str) -> Result<ColorImage, TextureLoadError> {
    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|err| TextureLoadError::Fetch(err.to_string()))?;
    let bytes = response
        .bytes()
        .map_err(|err| TextureLoadError::Fetch(err.to_string()))?;
    decode_image(&bytes)
}

/// Decode raw image bytes into an egui color image.
pub fn decode_image(data: &[u8]) -> Result<ColorImage, TextureLoadError> {
    let image =
        image::load_from_memory(data).map_err(|err| TextureLoadError::Decode(err.to_string()))?;
    let buffer = image.to_rgba8();
    let size = [buffer.width() as usize, buffer.height() as usize];
    let pixels = buffer.as_flat_samples();
    Ok(ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()))
}
