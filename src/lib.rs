// ./src/lib.rs

// Eigene Module deklarieren
pub mod debug;
pub mod math;
pub mod selection;

pub mod prelude {
    pub use crate::debug::visualization::svg::{
        outline_document, save_outline_svg, session_document,
    };
    pub use crate::math::prelude::*;
    pub use crate::selection::{
        CloseOutcome, FinishRequested, PointAdded, PointRejected, ResetRequested, RoofSelection,
        RoofSelectionPlugin, SelectionClosed, SelectionConfig, SelectionPhase, SelectionRejected,
        SelectionReport, SelectionSession, SelectionStatus,
    };
}
