//! Page-side glue for the runway planner: the runway form that collects a
//! selection and the embedding page that routes it into sibling frames.

pub mod collector;
pub mod error;
pub mod frame;
pub mod orchestrator;
pub mod registry;
pub mod urls;

pub use collector::{dataset_from_attributes, Collector, Dataset, MetarSelect, ParentLink};
pub use error::PageError;
pub use frame::{FrameHandle, HeadlessFrame, HeadlessRegion, PageRegion};
pub use orchestrator::{Orchestrator, RunwayRouting};
pub use registry::FrameRegistry;
