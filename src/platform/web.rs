//! Browser frame scheduler backed by `requestAnimationFrame`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::scheduler::{FrameHandle, FrameScheduler};
use crate::HostError;

/// Schedules frames on the window's animation-frame queue
pub struct WebScheduler {
    window: web_sys::Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl WebScheduler {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Ok(Self {
            window,
            callback: None,
        })
    }

    /// Install the closure every frame request will invoke
    pub fn set_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for WebScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| HostError::Schedule("no frame callback installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| HostError::Schedule(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, e);
        }
    }
}
