//! Handles for embedded frames and page regions.

use shared::domain::FrameId;

/// An embedded frame the embedding page can size and navigate.
pub trait FrameHandle {
    fn id(&self) -> &FrameId;

    /// Current navigation target; `None` until the frame is first navigated.
    fn source(&self) -> Option<&str>;

    fn navigate(&mut self, source: String);

    fn set_height(&mut self, height_px: u32);

    /// Bottom edge of the rendered content, in CSS pixels.
    fn content_bottom(&self) -> f64;
}

/// A hideable region of the embedding page.
pub trait PageRegion {
    fn show(&mut self);
    fn is_visible(&self) -> bool;
}

/// In-memory frame used by tools and tests, and anywhere no browser is present.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessFrame {
    id: FrameId,
    source: Option<String>,
    height_px: Option<u32>,
    content_bottom: f64,
    navigations: usize,
}

impl HeadlessFrame {
    pub fn new(id: impl Into<FrameId>) -> Self {
        Self {
            id: id.into(),
            source: None,
            height_px: None,
            content_bottom: 0.0,
            navigations: 0,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_content_bottom(mut self, bottom: f64) -> Self {
        self.content_bottom = bottom;
        self
    }

    pub fn set_content_bottom(&mut self, bottom: f64) {
        self.content_bottom = bottom;
    }

    pub fn height_px(&self) -> Option<u32> {
        self.height_px
    }

    pub fn navigations(&self) -> usize {
        self.navigations
    }
}

impl FrameHandle for HeadlessFrame {
    fn id(&self) -> &FrameId {
        &self.id
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn navigate(&mut self, source: String) {
        self.source = Some(source);
        self.navigations += 1;
    }

    fn set_height(&mut self, height_px: u32) {
        self.height_px = Some(height_px);
    }

    fn content_bottom(&self) -> f64 {
        self.content_bottom
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessRegion {
    visible: bool,
}

impl HeadlessRegion {
    pub fn hidden() -> Self {
        Self { visible: false }
    }
}

impl PageRegion for HeadlessRegion {
    fn show(&mut self) {
        self.visible = true;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
