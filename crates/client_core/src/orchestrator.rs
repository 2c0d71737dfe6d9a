//! Embedding-page glue: owns the frames and turns collected records into
//! navigations of sibling frames.

use shared::{
    domain::{PerformanceAction, ARRIVAL_RUNWAY, DEPARTING_RUNWAY},
    protocol::ParentMessage,
    records::{PerformanceRequest, RunwaySelectionRecord},
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::{
    error::PageError,
    frame::{FrameHandle, PageRegion},
    registry::FrameRegistry,
    urls,
};

/// Which runway frame the next selection fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunwayRouting {
    AwaitingDeparture,
    AwaitingArrival,
}

impl RunwayRouting {
    /// Both fills land in `AwaitingArrival`; there is no way back within a
    /// page's lifetime, so later selections keep replacing the arrival.
    pub fn transition(self) -> Self {
        Self::AwaitingArrival
    }

    pub fn target(self) -> (&'static str, bool) {
        match self {
            Self::AwaitingDeparture => (DEPARTING_RUNWAY, true),
            Self::AwaitingArrival => (ARRIVAL_RUNWAY, false),
        }
    }
}

pub struct Orchestrator<F, R> {
    registry: FrameRegistry<F>,
    arrival_section: R,
    routing: RunwayRouting,
}

impl<F: FrameHandle, R: PageRegion> Orchestrator<F, R> {
    /// Takes ownership of the page's frames. Routing starts from what the
    /// departing frame shows: already navigated means it is filled.
    pub fn new(registry: FrameRegistry<F>, arrival_section: R) -> Self {
        let departing_filled = registry
            .get(DEPARTING_RUNWAY)
            .ok()
            .and_then(|frame| frame.source())
            .is_some_and(|source| !source.is_empty());
        let routing = if departing_filled {
            RunwayRouting::AwaitingArrival
        } else {
            RunwayRouting::AwaitingDeparture
        };

        Self {
            registry,
            arrival_section,
            routing,
        }
    }

    pub fn registry(&self) -> &FrameRegistry<F> {
        &self.registry
    }

    pub fn arrival_section(&self) -> &R {
        &self.arrival_section
    }

    pub fn routing(&self) -> RunwayRouting {
        self.routing
    }

    /// Sizes every frame to its content, recomputed on each call.
    pub fn resize_iframes(&mut self) {
        for frame in self.registry.iter_mut() {
            let bottom = frame.content_bottom().ceil().max(0.0);
            frame.set_height(bottom as u32);
        }
    }

    pub fn load_airport(&mut self, value: &str, target: &str) -> Result<(), PageError> {
        let frame = self.registry.get_mut(target)?;
        frame.navigate(urls::airport_path(value));
        debug!(frame = target, value, "airport frame navigated");
        Ok(())
    }

    pub fn load_runway(&mut self, record: &RunwaySelectionRecord) -> Result<(), PageError> {
        let (target, is_takeoff) = self.routing.target();
        let frame = self.registry.get_mut(target)?;
        if self.routing == RunwayRouting::AwaitingArrival && frame.source().is_some() {
            debug!(frame = target, "replacing the arrival runway");
        }

        let source = urls::runway_path(record, is_takeoff);
        info!(frame = target, %source, "runway frame navigated");
        frame.navigate(source);
        self.routing = self.routing.transition();
        Ok(())
    }

    pub fn load_performance(
        &mut self,
        action: PerformanceAction,
        request: &PerformanceRequest,
    ) -> Result<(), PageError> {
        let target = action.frame_id();
        let frame = self.registry.get_mut(target)?;
        let source = urls::performance_path(action, request);
        info!(frame = target, %source, "performance frame navigated");
        frame.navigate(source);
        self.arrival_section.show();
        Ok(())
    }

    pub fn handle(&mut self, message: ParentMessage) -> Result<(), PageError> {
        match message {
            ParentMessage::ResizeFrames => {
                self.resize_iframes();
                Ok(())
            }
            ParentMessage::LoadAirport { value, target } => {
                self.load_airport(&value, target.as_str())
            }
            ParentMessage::LoadRunway { record } => self.load_runway(&record),
            ParentMessage::LoadPerformance { action, request } => {
                self.load_performance(action, &request)
            }
        }
    }

    /// Handles messages in arrival order until every sender is gone. A failed
    /// message is logged and does not stop the loop.
    pub async fn run(mut self, mut inbox: UnboundedReceiver<ParentMessage>) -> Self {
        while let Some(message) = inbox.recv().await {
            let name = message.name();
            if let Err(error) = self.handle(message) {
                warn!(message = name, %error, "page message failed");
            }
        }
        debug!("page message channel closed");
        self
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
