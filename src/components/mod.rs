//! UI Components
//!
//! Scenes and the widgets they are built from.

mod analysis_panel;
mod card_slot;
mod guide_scene;
mod location_scene;
mod results_scene;
mod risk_scene;
mod stepper;

pub use analysis_panel::AnalysisPanel;
pub use card_slot::CardSlot;
pub use guide_scene::GuideScene;
pub use location_scene::LocationScene;
pub use results_scene::ResultsScene;
pub use risk_scene::RiskScene;
pub use stepper::Stepper;
