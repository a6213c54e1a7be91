//! Application state for easel.
//!
//! `Easel` is the single place the rest of the app mutates: input and the
//! GUI flip flags here, the backend asks it whether to keep looping.
//! Persisted settings are written through to the config store the moment
//! they change.

use tracing::info;

use crate::config::{ConfigStore, Settings};

pub struct Easel {
    store: ConfigStore,
    pub settings: Settings,
    quit: bool,
}

impl Easel {
    pub fn new(store: ConfigStore) -> Self {
        let settings = Settings::load(&store);
        info!(
            width = settings.window_width,
            height = settings.window_height,
            "state initialized"
        );
        Self {
            store,
            settings,
            quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn set_wireframe(&mut self, on: bool) {
        if self.settings.wireframe != on {
            self.settings.wireframe = on;
            self.store.set(Settings::KEY_WIREFRAME, on);
        }
    }

    pub fn toggle_wireframe(&mut self) {
        self.set_wireframe(!self.settings.wireframe);
    }

    pub fn set_show_properties(&mut self, on: bool) {
        if self.settings.show_properties != on {
            self.settings.show_properties = on;
            self.store.set(Settings::KEY_PROPERTIES, on);
        }
    }

    pub fn toggle_properties(&mut self) {
        self.set_show_properties(!self.settings.show_properties);
    }

    /// Record a new window size in physical pixels (the unit winit resize
    /// events carry, and the unit the window is rebuilt with at startup).
    /// Persists only on actual change; resize events arrive every frame
    /// while dragging.
    pub fn note_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if self.settings.window_width != width {
            self.settings.window_width = width;
            self.store.set(Settings::KEY_WIDTH, width);
        }
        if self.settings.window_height != height {
            self.settings.window_height = height;
            self.store.set(Settings::KEY_HEIGHT, height);
        }
    }
}
