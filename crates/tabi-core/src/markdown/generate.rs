//! Markdown prompt generation.
//!
//! Renders a [`TripPlan`] into the prompt format understood by
//! [`super::parse_markdown`]. Generation is pure and never fails: missing
//! values render as empty segments.

use crate::plan::{DayPlan, GeneralInfo, PlanMode, SuggestionInfo, TransportRecord, TripPlan};

use super::calendar;
use super::escape;
use super::grammar::{
    AI_DELEGATION_PHRASE, DAY_MARKER, DayKey, GENERAL_SECTION, GeneralKey, NO_REMARKS,
    SUGGESTION_SECTION, SUGGESTION_SENTINEL, SuggestionKey,
};
use super::template::TemplateSet;

/// Renders trip plans with a fixed template set.
#[derive(Debug, Clone, Default)]
pub struct MarkdownGenerator {
    templates: TemplateSet,
    proactive_suggestions: bool,
}

impl MarkdownGenerator {
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates,
            proactive_suggestions: false,
        }
    }

    /// Ask the LLM to go beyond the given conditions (adds the template's
    /// `proactive` instructions to the footer).
    pub fn with_proactive_suggestions(mut self, enabled: bool) -> Self {
        self.proactive_suggestions = enabled;
        self
    }

    /// Render `plan` in the mode selected by `plan.is_suggestion_mode`.
    pub fn generate(&self, plan: &TripPlan) -> String {
        let mut out = String::with_capacity(2048);
        match plan.mode() {
            PlanMode::Standard(days) => self.render_standard(&mut out, &plan.general, days),
            PlanMode::Suggestion(info) => self.render_suggestion(&mut out, &plan.general, info),
        }
        self.render_footer(&mut out);
        out
    }

    // -----------------------------------------------------------------------
    // Standard mode
    // -----------------------------------------------------------------------

    fn render_standard(&self, out: &mut String, general: &GeneralInfo, days: &[DayPlan]) {
        let template = &self.templates.standard;
        out.push_str(&format!("# {}\n", template.title));
        push_paragraph(out, &template.intro);
        out.push('\n');

        out.push_str(&format!("### {GENERAL_SECTION}\n"));
        push_key_value(out, GeneralKey::Departure.label(), &general.departure);
        push_key_value(out, GeneralKey::Members.label(), &general.members);
        push_key_value(out, GeneralKey::Theme.label(), &general.theme);
        push_key_value(out, GeneralKey::Priority.label(), &general.priority);
        push_transport(out, GeneralKey::Outbound.label(), general.transport.outbound.as_ref());
        push_transport(out, GeneralKey::Inbound.label(), general.transport.inbound.as_ref());
        out.push('\n');

        for (index, day) in days.iter().enumerate() {
            render_day(out, index + 1, day);
            out.push('\n');
        }
    }

    // -----------------------------------------------------------------------
    // Suggestion mode
    // -----------------------------------------------------------------------

    fn render_suggestion(&self, out: &mut String, general: &GeneralInfo, info: &SuggestionInfo) {
        out.push_str(&format!("# {SUGGESTION_SENTINEL}\n"));
        push_paragraph(out, &self.templates.suggestion.intro);
        out.push('\n');

        out.push_str(&format!("### {SUGGESTION_SECTION}\n"));
        push_key_value(out, SuggestionKey::Departure.label(), &general.departure);
        push_key_value(out, SuggestionKey::ArrivalPoint.label(), &info.arrival_point);
        push_key_value(
            out,
            SuggestionKey::Duration.label(),
            &calendar::duration_text(&info.start_date, &info.end_date),
        );
        push_key_value(out, SuggestionKey::Members.label(), &general.members);
        push_key_value(out, SuggestionKey::Keywords.label(), &general.theme);
        push_key_value(out, SuggestionKey::Priority.label(), &general.priority);
        if info.remarks.is_empty() {
            push_key_value(out, SuggestionKey::Remarks.label(), NO_REMARKS);
        } else {
            push_key_value(out, SuggestionKey::Remarks.label(), "");
            push_nested(out, info.remarks.iter().map(|remark| escape::source_item(remark)));
        }
        out.push_str("\n---\n\n");
    }

    // -----------------------------------------------------------------------
    // Footer
    // -----------------------------------------------------------------------

    fn render_footer(&self, out: &mut String) {
        let footer = &self.templates.footer;
        out.push_str(&format!("### {}\n", footer.heading));
        let extra: &[String] = if self.proactive_suggestions {
            &footer.proactive
        } else {
            &[]
        };
        for line in footer.instructions.iter().chain(extra) {
            out.push_str(&format!("*   {line}\n"));
        }
        if !footer.closing.is_empty() {
            out.push('\n');
            push_paragraph(out, &footer.closing);
        }
    }
}

/// Render `plan` with the built-in template set.
pub fn generate_markdown(plan: &TripPlan) -> String {
    MarkdownGenerator::default().generate(plan)
}

fn render_day(out: &mut String, number: usize, day: &DayPlan) {
    match calendar::heading_date(&day.date) {
        Some(date) => out.push_str(&format!("### {number}{DAY_MARKER}（{date}）\n")),
        None => out.push_str(&format!("### {number}{DAY_MARKER}\n")),
    }

    if day.is_ai_suggestion {
        push_key_value(out, DayKey::Plan.label(), AI_DELEGATION_PHRASE);
    } else if !day.area.is_empty() || !day.city.is_empty() {
        push_key_value(out, DayKey::Area.label(), &area_text(&day.area, &day.city));
    }

    if !day.is_day_trip {
        push_key_value(out, DayKey::Accommodation.label(), &day.accommodation);
    }
    push_transport(out, DayKey::Transport.label(), day.transport.as_ref());

    if day.is_ai_suggestion {
        return;
    }

    if !day.places.is_empty() {
        push_key_value(out, DayKey::Places.label(), "");
        push_nested(
            out,
            day.places
                .iter()
                .map(|place| place_text(&place.name, &place.url)),
        );
    }
    if !day.do_eat.is_empty() {
        push_key_value(out, DayKey::DoEat.label(), "");
        push_nested(out, day.do_eat.iter().map(|item| escape::source_item(item)));
    }
    if !day.notes.is_empty() {
        push_key_value(out, DayKey::Notes.label(), "");
        push_nested(out, day.notes.iter().map(|note| escape::source_item(note)));
    }
}

/// `北海道 (苫小牧市)`, or just the area when there is no city. The city's
/// closing parenthesis is always the last character.
fn area_text(area: &str, city: &str) -> String {
    if city.is_empty() {
        area.to_owned()
    } else {
        format!("{area} ({city})").trim_start().to_owned()
    }
}

/// A Markdown link when the place has a URL, plain text otherwise.
fn place_text(name: &str, url: &str) -> String {
    if url.is_empty() {
        escape::plain_item(name).into_owned()
    } else {
        escape::link(name, url)
    }
}

fn push_key_value(out: &mut String, label: &str, value: &str) {
    let value = escape::source_item(value);
    out.push_str(&format!("*   **{label}**：{value}\n"));
}

fn push_transport(out: &mut String, label: &str, record: Option<&TransportRecord>) {
    if let Some(record) = record.filter(|r| !r.is_empty()) {
        push_key_value(out, label, &record.encode());
    }
}

fn push_nested<I>(out: &mut String, items: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for item in items {
        out.push_str(&format!("    *   {}\n", item.as_ref()));
    }
}

fn push_paragraph(out: &mut String, text: &str) {
    if !text.is_empty() {
        out.push_str(text);
        out.push('\n');
    }
}
