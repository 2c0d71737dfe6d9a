//! Runway form glue: folds control events into one [`RunwaySelectionRecord`]
//! and hands it to the embedding page once it is complete enough.

use std::collections::BTreeMap;

use shared::{protocol::ParentMessage, records::RunwaySelectionRecord};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

/// The `dataset` of one element: camelCase key to raw attribute value.
pub type Dataset = BTreeMap<String, String>;

/// Builds a dataset from raw attribute pairs. Only `data-*` attributes count;
/// `data-displaced-threshold` becomes `displacedThreshold`.
pub fn dataset_from_attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Dataset
where
    K: AsRef<str>,
    V: Into<String>,
{
    attributes
        .into_iter()
        .filter_map(|(name, value)| {
            let suffix = name.as_ref().strip_prefix("data-")?;
            Some((camel_case(suffix), value.into()))
        })
        .collect()
}

fn camel_case(dashed: &str) -> String {
    let mut out = String::with_capacity(dashed.len());
    let mut upper_next = false;
    for ch in dashed.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// The embedding page as seen from the form. Delivery is fire-and-forget:
/// `false` means nobody was listening.
pub trait ParentLink {
    fn post(&self, message: ParentMessage) -> bool;
}

impl ParentLink for UnboundedSender<ParentMessage> {
    fn post(&self, message: ParentMessage) -> bool {
        self.send(message).is_ok()
    }
}

/// Predefined METAR selector. Entry 0 is the default placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetarSelect {
    options: Vec<String>,
    selected: usize,
}

impl MetarSelect {
    pub fn new(reports: impl IntoIterator<Item = String>) -> Self {
        let options = std::iter::once(String::new()).chain(reports).collect();
        Self {
            options,
            selected: 0,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn value(&self) -> &str {
        &self.options[self.selected]
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn select(&mut self, index: usize) -> Option<&str> {
        let value = self.options.get(index)?;
        self.selected = index;
        Some(value)
    }

    fn reset(&mut self) {
        self.selected = 0;
    }
}

pub struct Collector<P> {
    parent: Option<P>,
    record: RunwaySelectionRecord,
    metar_select: MetarSelect,
    custom_metar: String,
    submissions: usize,
}

impl<P: ParentLink> Collector<P> {
    pub fn new(parent: Option<P>, metar_select: MetarSelect) -> Self {
        Self {
            parent,
            record: RunwaySelectionRecord::default(),
            metar_select,
            custom_metar: String::new(),
            submissions: 0,
        }
    }

    /// Document loaded: ask the embedding page to fit its frames.
    pub fn on_load(&mut self) {
        self.post(ParentMessage::ResizeFrames);
    }

    /// A predefined report was picked; the custom text is cleared.
    pub fn select_metar(&mut self, index: usize) {
        let Some(value) = self.metar_select.select(index).map(str::to_string) else {
            debug!(index, "ignoring selection outside the METAR list");
            return;
        };

        self.custom_metar.clear();
        self.record.set_metar(value);
        self.try_submit();
    }

    /// Custom text lost focus; the predefined selector returns to its default.
    pub fn enter_custom_metar(&mut self, text: impl Into<String>) {
        self.custom_metar = text.into();
        self.metar_select.reset();
        self.record.set_metar(self.custom_metar.clone());
        self.try_submit();
    }

    /// A runway radio changed. `row` holds the dataset of every cell in the
    /// runway's row, in order; later keys overwrite earlier ones.
    pub fn select_runway(&mut self, row: &[Dataset]) {
        for dataset in row {
            for (key, value) in dataset {
                self.record.merge_attribute(key, value);
            }
        }
        self.try_submit();
    }

    pub fn record(&self) -> &RunwaySelectionRecord {
        &self.record
    }

    pub fn metar_select(&self) -> &MetarSelect {
        &self.metar_select
    }

    pub fn custom_metar(&self) -> &str {
        &self.custom_metar
    }

    /// Number of records handed to the parent so far.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    fn try_submit(&mut self) {
        if !self.record.is_submittable() {
            trace!("runway record incomplete; holding");
            return;
        }

        if self.post(ParentMessage::LoadRunway {
            record: self.record.clone(),
        }) {
            self.submissions += 1;
        }
    }

    fn post(&self, message: ParentMessage) -> bool {
        let name = message.name();
        let Some(parent) = &self.parent else {
            trace!(message = name, "no parent page; skipped");
            return false;
        };

        let delivered = parent.post(message);
        if delivered {
            debug!(message = name, "posted to parent page");
        } else {
            trace!(message = name, "parent page stopped listening; skipped");
        }
        delivered
    }
}

#[cfg(test)]
#[path = "tests/collector_tests.rs"]
mod tests;
