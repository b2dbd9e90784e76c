//! Standard-mode reader.
//!
//! A fold over the block stream. Depth-3 headings switch the current
//! section; lists are dispatched by the section they appear in.

use tracing::debug;

use crate::plan::{DayPlan, GeneralInfo, TransportRecord, TripPlan};

use super::calendar;
use super::grammar::{AI_DELEGATION_MATCH, DAY_MARKER, DayKey, GENERAL_SECTION, GeneralKey};
use super::lexer::{self, Block};
use super::parser::{KeyValue, split_area};

/// Where the fold currently is in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Section {
    /// Before the first depth-3 heading.
    #[default]
    None,
    General,
    /// Inside the last day in `StandardState::days`.
    Day,
    /// Any other depth-3 section, e.g. the instruction footer.
    Footer,
}

#[derive(Debug, Default)]
struct StandardState {
    section: Section,
    general: GeneralInfo,
    days: Vec<DayPlan>,
}

pub(crate) fn read(blocks: &[Block]) -> TripPlan {
    let state = blocks.iter().fold(StandardState::default(), step);
    TripPlan::standard(state.general, state.days)
}

fn step(mut state: StandardState, block: &Block) -> StandardState {
    match block {
        Block::Heading { depth: 3, inlines } => {
            let title = lexer::plain_text(inlines);
            state.section = enter_section(&title, &mut state.days);
        }
        Block::Heading { .. } => {}
        Block::List(items) => {
            for kv in items.iter().filter_map(KeyValue::from_item) {
                match state.section {
                    Section::General => apply_general(&mut state.general, &kv),
                    Section::Day => {
                        if let Some(day) = state.days.last_mut() {
                            apply_day(day, &kv);
                        }
                    }
                    Section::None | Section::Footer => {}
                }
            }
        }
    }
    state
}

fn enter_section(title: &str, days: &mut Vec<DayPlan>) -> Section {
    if title.contains(GENERAL_SECTION) {
        Section::General
    } else if title.contains(DAY_MARKER) {
        days.push(DayPlan {
            date: calendar::date_from_heading(title).unwrap_or_default(),
            // Cleared by an accommodation bullet.
            is_day_trip: true,
            ..DayPlan::default()
        });
        Section::Day
    } else {
        Section::Footer
    }
}

fn apply_general(general: &mut GeneralInfo, kv: &KeyValue<'_>) {
    let Some(key) = GeneralKey::lookup(&kv.key) else {
        debug!(key = %kv.key, "ignoring unknown general bullet");
        return;
    };
    match key {
        GeneralKey::Departure => general.departure = kv.value.clone(),
        GeneralKey::Members => general.members = kv.value.clone(),
        GeneralKey::Theme => general.theme = kv.value.clone(),
        GeneralKey::Priority => general.priority = kv.value.clone(),
        GeneralKey::Outbound => {
            general.transport.outbound = Some(TransportRecord::decode(&kv.value));
        }
        GeneralKey::Inbound => {
            general.transport.inbound = Some(TransportRecord::decode(&kv.value));
        }
    }
}

fn apply_day(day: &mut DayPlan, kv: &KeyValue<'_>) {
    let Some(key) = DayKey::lookup(&kv.key) else {
        debug!(key = %kv.key, "ignoring unknown day bullet");
        return;
    };
    match key {
        DayKey::Area => (day.area, day.city) = split_area(&kv.value),
        DayKey::Accommodation => {
            day.accommodation = kv.value.clone();
            day.is_day_trip = false;
        }
        DayKey::Transport => day.transport = Some(TransportRecord::decode(&kv.value)),
        DayKey::Places => day.places.extend(kv.sub_places()),
        DayKey::DoEat => day.do_eat.extend(kv.sub_texts()),
        DayKey::Notes => day.notes.extend(kv.sub_texts()),
        DayKey::Plan => {
            if kv.value.contains(AI_DELEGATION_MATCH) {
                day.is_ai_suggestion = true;
            }
        }
    }
}
