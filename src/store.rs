//! Process-wide reactive state: two replay-latest channels (dataset and
//! config) plus the gate that holds rendering back until both inputs exist.

use tracing::debug;

use crate::config::ChartConfig;
use crate::core::YearGroups;

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Single-slot broadcast channel with replay-latest semantics.
///
/// Publishing replaces the held value and notifies subscribers synchronously
/// in subscription order. A late subscriber is immediately called with the
/// most recently published value, never with history; there is no buffering
/// beyond that single slot.
pub struct Channel<T> {
    latest: Option<T>,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self {
            latest: None,
            subscribers: Vec::new(),
        }
    }
}

impl<T> Channel<T> {
    pub fn publish(&mut self, value: T) {
        for subscriber in &mut self.subscribers {
            subscriber(&value);
        }
        self.latest = Some(value);
    }

    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&T) + 'static) {
        if let Some(latest) = &self.latest {
            subscriber(latest);
        }
        self.subscribers.push(Box::new(subscriber));
    }

    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Owns the grouped dataset and the active config for the process lifetime.
///
/// Values are published as immutable snapshots: `ChartConfig` is cloned per
/// publish, so no subscriber ever holds a reference into state that a later
/// resize mutates underneath it.
#[derive(Default)]
pub struct PlotStore {
    dataset: Channel<YearGroups>,
    config: Channel<ChartConfig>,
}

impl PlotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_dataset(&mut self, dataset: YearGroups) {
        debug!(year_count = dataset.len(), "publish dataset");
        self.dataset.publish(dataset);
    }

    pub fn publish_config(&mut self, config: ChartConfig) {
        debug!(
            width = config.width,
            height = config.height,
            small_screen = config.is_small_screen,
            "publish config"
        );
        self.config.publish(config);
    }

    pub fn subscribe_dataset(&mut self, subscriber: impl FnMut(&YearGroups) + 'static) {
        self.dataset.subscribe(subscriber);
    }

    pub fn subscribe_config(&mut self, subscriber: impl FnMut(&ChartConfig) + 'static) {
        self.config.subscribe(subscriber);
    }

    #[must_use]
    pub fn latest_dataset(&self) -> Option<&YearGroups> {
        self.dataset.latest()
    }

    #[must_use]
    pub fn latest_config(&self) -> Option<&ChartConfig> {
        self.config.latest()
    }
}

/// Combine-latest join of the year selector and the config channel.
///
/// Rendering is gated until both inputs have arrived at least once; the gate
/// re-enters `Ready` on every later update to either input, so a partial
/// render can never happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderGate {
    #[default]
    Uninitialized,
    /// Config has arrived, no year selected yet.
    AwaitingYear,
    /// A year is selected, no config published yet.
    AwaitingConfig,
    Ready,
}

impl RenderGate {
    #[must_use]
    pub fn on_year(self) -> Self {
        match self {
            Self::Uninitialized | Self::AwaitingConfig => Self::AwaitingConfig,
            Self::AwaitingYear | Self::Ready => Self::Ready,
        }
    }

    #[must_use]
    pub fn on_config(self) -> Self {
        match self {
            Self::Uninitialized | Self::AwaitingYear => Self::AwaitingYear,
            Self::AwaitingConfig | Self::Ready => Self::Ready,
        }
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}
