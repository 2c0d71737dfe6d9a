use std::collections::HashMap;

use shared::domain::FrameId;
use tracing::debug;

use crate::{error::PageError, frame::FrameHandle};

/// Frames of one page, indexed by id and kept in document order.
///
/// The set of frames is fixed at construction. When two frames share an id the
/// later one wins the lookup, while both are still resized.
pub struct FrameRegistry<F> {
    frames: Vec<F>,
    index: HashMap<FrameId, usize>,
}

impl<F: FrameHandle> FrameRegistry<F> {
    /// Registers `frames` in the order given and collapses each to zero height
    /// until its content is measured.
    pub fn from_frames(frames: impl IntoIterator<Item = F>) -> Self {
        let mut frames: Vec<F> = frames.into_iter().collect();
        let mut index = HashMap::with_capacity(frames.len());

        for (position, frame) in frames.iter_mut().enumerate() {
            frame.set_height(0);
            index.insert(frame.id().clone(), position);
        }
        debug!(frames = frames.len(), "frame registry initialized");

        Self { frames, index }
    }

    pub fn get(&self, id: &str) -> Result<&F, PageError> {
        self.index
            .get(id)
            .map(|&position| &self.frames[position])
            .ok_or_else(|| PageError::UnknownFrame(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut F, PageError> {
        match self.index.get(id) {
            Some(&position) => Ok(&mut self.frames[position]),
            None => Err(PageError::UnknownFrame(id.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.frames.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut F> {
        self.frames.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::HeadlessFrame;

    #[test]
    fn registers_frames_in_document_order_at_zero_height() {
        let registry = FrameRegistry::from_frames([
            HeadlessFrame::new("departing-runway"),
            HeadlessFrame::new("take-off"),
        ]);

        let ids: Vec<&str> = registry.iter().map(|frame| frame.id().as_str()).collect();
        assert_eq!(ids, ["departing-runway", "take-off"]);
        assert!(registry.iter().all(|frame| frame.height_px() == Some(0)));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut registry = FrameRegistry::from_frames([HeadlessFrame::new("landing")]);
        assert!(registry.get("landing").is_ok());
        assert_eq!(
            registry.get_mut("arrival-runway").err(),
            Some(PageError::UnknownFrame("arrival-runway".to_string()))
        );
    }

    #[test]
    fn duplicate_ids_resolve_to_the_later_frame() {
        let registry = FrameRegistry::from_frames([
            HeadlessFrame::new("landing").with_source("/first"),
            HeadlessFrame::new("landing").with_source("/second"),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("landing").expect("frame").source(),
            Some("/second")
        );
    }
}
