//! Trip-plan model, plan files and validation.

pub mod file;
pub mod model;
pub mod validate;

pub use file::{PlanFileError, PlanFormat, load_plan, parse_plan_str, render_plan};
pub use model::{
    DayPlan, GeneralInfo, GeneralTransport, PlanMode, Place, SuggestionInfo, TransportRecord,
    TripPlan,
};
pub use validate::{PlanWarning, validate_plan};
