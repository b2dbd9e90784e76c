//! Checks for plan data the Markdown format cannot carry.
//!
//! None of these stop generation. They point at fields that will come back
//! different (or not at all) after a generate/parse round trip. Markup
//! characters are not among them: the generator escapes free text that
//! would not read back as written.

use std::fmt;

use crate::markdown::calendar;

use super::model::{DayPlan, PlanMode, TransportRecord, TripPlan};

/// One problem found by [`validate_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanWarning {
    /// Dotted path of the offending field, e.g. `days[1].date`.
    pub field: String,
    pub message: String,
}

impl PlanWarning {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collect every warning for `plan`. Empty means the plan round-trips.
pub fn validate_plan(plan: &TripPlan) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();

    let general = &plan.general;
    for (name, value) in [
        ("departure", &general.departure),
        ("members", &general.members),
        ("theme", &general.theme),
        ("priority", &general.priority),
    ] {
        check_text(&mut warnings, &format!("general.{name}"), value);
    }

    let transport = &plan.general.transport;
    check_transport(&mut warnings, "general.transport.outbound", transport.outbound.as_ref());
    check_transport(&mut warnings, "general.transport.inbound", transport.inbound.as_ref());

    match plan.mode() {
        PlanMode::Standard(days) => {
            for (index, day) in days.iter().enumerate() {
                check_day(&mut warnings, &format!("days[{index}]"), day);
            }
        }
        PlanMode::Suggestion(info) => {
            let present =
                |record: &Option<TransportRecord>| record.as_ref().is_some_and(|r| !r.is_empty());
            if present(&transport.outbound) || present(&transport.inbound) {
                warnings.push(PlanWarning::new(
                    "general.transport",
                    "trip-wide transport is not part of a suggestion request",
                ));
            }
            let start = check_date(&mut warnings, "suggestion.startDate", &info.start_date);
            let end = check_date(&mut warnings, "suggestion.endDate", &info.end_date);
            if let (Some(start), Some(end)) = (start, end) {
                if end < start {
                    warnings.push(PlanWarning::new(
                        "suggestion.endDate",
                        "end date is before start date",
                    ));
                }
            }
            if info.start_date.is_empty() != info.end_date.is_empty() {
                warnings.push(PlanWarning::new(
                    "suggestion",
                    "duration needs both a start and an end date",
                ));
            }
            check_text(&mut warnings, "suggestion.arrivalPoint", &info.arrival_point);
            check_lines(&mut warnings, "suggestion.remarks", &info.remarks);
        }
    }

    warnings
}

fn check_day(warnings: &mut Vec<PlanWarning>, field: &str, day: &DayPlan) {
    check_date(warnings, &format!("{field}.date"), &day.date);

    check_text(warnings, &format!("{field}.area"), &day.area);
    check_text(warnings, &format!("{field}.city"), &day.city);
    check_text(warnings, &format!("{field}.accommodation"), &day.accommodation);

    if day.area.contains(['(', '（']) {
        warnings.push(PlanWarning::new(
            format!("{field}.area"),
            "area must not contain '(' or '（'; text after it is read back as the city",
        ));
    }
    if day.area.is_empty() && !day.city.is_empty() {
        warnings.push(PlanWarning::new(
            format!("{field}.city"),
            "city is set without an area",
        ));
    }
    if day.is_day_trip && !day.accommodation.is_empty() {
        warnings.push(PlanWarning::new(
            format!("{field}.accommodation"),
            "accommodation is dropped on a day trip",
        ));
    }
    if day.is_ai_suggestion
        && (!day.area.is_empty()
            || !day.places.is_empty()
            || !day.do_eat.is_empty()
            || !day.notes.is_empty())
    {
        warnings.push(PlanWarning::new(
            field,
            "area, places, do-eat and notes are dropped on an AI-delegated day",
        ));
    }

    check_transport(warnings, &format!("{field}.transport"), day.transport.as_ref());
    for (index, place) in day.places.iter().enumerate() {
        check_text(warnings, &format!("{field}.places[{index}].name"), &place.name);
        check_text(warnings, &format!("{field}.places[{index}].url"), &place.url);
    }
    check_lines(warnings, &format!("{field}.doEat"), &day.do_eat);
    check_lines(warnings, &format!("{field}.notes"), &day.notes);
}

/// Warn about a non-empty, unparseable date. Returns the parsed date.
fn check_date(
    warnings: &mut Vec<PlanWarning>,
    field: &str,
    value: &str,
) -> Option<chrono::NaiveDate> {
    if value.is_empty() {
        return None;
    }
    let date = calendar::parse_iso(value);
    if date.is_none() {
        warnings.push(PlanWarning::new(
            field,
            format!("{value:?} is not a YYYY-MM-DD date"),
        ));
    }
    date
}

fn check_transport(warnings: &mut Vec<PlanWarning>, field: &str, record: Option<&TransportRecord>) {
    let Some(record) = record.filter(|r| !r.is_empty()) else {
        return;
    };
    if record.kind.contains('（') || record.name.contains('（') {
        warnings.push(PlanWarning::new(
            field,
            "type and name must not contain '（'",
        ));
    }
    if record.kind.contains(' ') {
        warnings.push(PlanWarning::new(
            format!("{field}.type"),
            "type must be a single word; text after the first space is read back as the name",
        ));
    }
    if record.kind.is_empty() && !record.name.is_empty() {
        warnings.push(PlanWarning::new(
            format!("{field}.name"),
            "name without a type is read back as the type",
        ));
    }
    for (name, value) in [("depTime", &record.dep_time), ("arrTime", &record.arr_time)] {
        if value.contains(char::is_whitespace) {
            warnings.push(PlanWarning::new(
                format!("{field}.{name}"),
                "times must not contain spaces",
            ));
        }
    }
}

fn check_lines(warnings: &mut Vec<PlanWarning>, field: &str, lines: &[String]) {
    for (index, line) in lines.iter().enumerate() {
        check_text(warnings, &format!("{field}[{index}]"), line);
    }
}

/// One-line text the parser trims.
fn check_text(warnings: &mut Vec<PlanWarning>, field: &str, value: &str) {
    if value.contains(['\n', '\r']) {
        warnings.push(PlanWarning::new(field, "line breaks are not kept"));
    } else if value.trim() != value {
        warnings.push(PlanWarning::new(
            field,
            "leading and trailing whitespace is trimmed",
        ));
    }
}
