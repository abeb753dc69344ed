// src/selection/mod.rs

pub mod config;
pub mod events;
pub mod plugin;
pub mod report;
pub mod session;

pub use config::SelectionConfig;
pub use events::{
    FinishRequested, PointAdded, PointRejected, ResetRequested, SelectionClosed,
    SelectionRejected,
};
pub use plugin::{RoofSelection, RoofSelectionPlugin};
pub use report::{SelectionReport, SelectionStatus};
pub use session::{CloseOutcome, SelectionPhase, SelectionSession};
