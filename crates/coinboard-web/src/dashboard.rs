use crate::chart::{self, ChartKind, Figure};
use crate::quiz::{self, Answer, InvestorLevel};
use coinboard_data::{PriceFrame, Window};
use serde::Serialize;
use tracing::trace;

/// A change of the dashboard's inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// Either dropdown changed.
    Chart {
        crypto: Option<&'a str>,
        kind: ChartKind,
    },
    /// Any of the three radio groups changed.
    Quiz {
        experience: Answer,
        strategy: Answer,
        volatility: Answer,
    },
}

/// What the page redraws in answer to an [`Event`].
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Output {
    Figure(Figure),
    InvestorLevel(InvestorLevel),
}

/// Immutable dashboard state: the price table loaded at startup and the
/// window it covers.
#[derive(Debug, Clone)]
pub struct Dashboard {
    frame: PriceFrame,
    window: Window,
}

impl Dashboard {
    pub fn new(frame: PriceFrame, window: Window) -> Self {
        Self { frame, window }
    }

    pub fn frame(&self) -> &PriceFrame {
        &self.frame
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Recompute the output an event drives.
    pub fn dispatch(&self, event: Event<'_>) -> Output {
        trace!("Dispatching {event:?}");
        match event {
            Event::Chart { crypto, kind } => Output::Figure(chart::select(&self.frame, crypto, kind)),
            Event::Quiz {
                experience,
                strategy,
                volatility,
            } => Output::InvestorLevel(quiz::classify(experience, strategy, volatility).into()),
        }
    }
}
