//! Trip-plan data model.
//!
//! These types are what the form layer hands to the generator and what the
//! parser hands back. Field names serialize in camelCase so the same JSON or
//! TOML document can be shared with a browser form. Every field carries
//! `#[serde(default)]`: a half-filled form is a normal input, not an error.

use serde::{Deserialize, Serialize};

/// Root of a trip plan.
///
/// A plan is in exactly one of two modes. In standard mode `days` holds the
/// itinerary and `suggestion` is empty; in suggestion mode the reverse holds.
/// Use [`TripPlan::standard`] / [`TripPlan::suggestion`] to build one and
/// [`TripPlan::mode`] to read the active branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TripPlan {
    pub is_suggestion_mode: bool,
    pub general: GeneralInfo,
    pub days: Vec<DayPlan>,
    pub suggestion: SuggestionInfo,
}

/// Borrowed view of the active branch of a [`TripPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode<'a> {
    Standard(&'a [DayPlan]),
    Suggestion(&'a SuggestionInfo),
}

impl TripPlan {
    /// A day-by-day itinerary plan.
    pub fn standard(general: GeneralInfo, days: Vec<DayPlan>) -> Self {
        Self {
            general,
            days,
            suggestion: SuggestionInfo::default(),
            is_suggestion_mode: false,
        }
    }

    /// An open-ended "suggest a destination" request.
    pub fn suggestion(general: GeneralInfo, suggestion: SuggestionInfo) -> Self {
        Self {
            general,
            days: Vec::new(),
            suggestion,
            is_suggestion_mode: true,
        }
    }

    /// The active branch, selected by `is_suggestion_mode`.
    pub fn mode(&self) -> PlanMode<'_> {
        if self.is_suggestion_mode {
            PlanMode::Suggestion(&self.suggestion)
        } else {
            PlanMode::Standard(&self.days)
        }
    }
}

/// Trip-wide conditions shared by both modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralInfo {
    pub departure: String,
    pub members: String,
    pub theme: String,
    pub priority: String,
    pub transport: GeneralTransport,
}

/// Outbound and inbound legs of the whole trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralTransport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound: Option<TransportRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound: Option<TransportRecord>,
}

/// One day of a standard-mode itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPlan {
    /// ISO date, `YYYY-MM-DD`. Empty when unknown.
    pub date: String,
    /// Prefecture-level area name.
    pub area: String,
    /// Municipality inside `area`. Only meaningful when `area` is set.
    pub city: String,
    pub accommodation: String,
    pub is_day_trip: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportRecord>,
    /// Places in visiting order.
    pub places: Vec<Place>,
    pub do_eat: Vec<String>,
    pub notes: Vec<String>,
    /// The day's contents are left to the LLM.
    pub is_ai_suggestion: bool,
}

/// A place to visit, optionally with a reference URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub name: String,
    pub url: String,
}

impl Place {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One leg of travel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportRecord {
    /// Mode of travel, e.g. "飛行機", "バス", "列車".
    #[serde(rename = "type")]
    pub kind: String,
    /// Flight or train identifier.
    pub name: String,
    pub dep_location: String,
    /// `HH:mm`
    pub dep_time: String,
    pub arr_location: String,
    /// `HH:mm`
    pub arr_time: String,
}

impl TransportRecord {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        [
            &self.kind,
            &self.name,
            &self.dep_location,
            &self.dep_time,
            &self.arr_location,
            &self.arr_time,
        ]
        .iter()
        .all(|field| field.is_empty())
    }
}

/// Constraints for suggestion mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestionInfo {
    pub arrival_point: String,
    /// ISO date, `YYYY-MM-DD`.
    pub start_date: String,
    /// ISO date, `YYYY-MM-DD`.
    pub end_date: String,
    pub remarks: Vec<String>,
}
