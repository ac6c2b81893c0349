pub mod measure;
pub mod position;
pub mod state;
pub mod tooltip;

pub use measure::{EstimatedMeasure, Measure};
pub use position::place;
pub use state::{Anchor, SaveIcon, TooltipNode, TooltipPhase};
pub use tooltip::TooltipController;
