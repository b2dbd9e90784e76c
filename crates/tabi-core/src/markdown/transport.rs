//! Single-line transport strings.
//!
//! ```text
//! {type} {name}（{depLocation} {depTime}発 → {arrLocation} {arrTime}着）
//! ```
//!
//! The name and its separating space are omitted when the name is empty.
//! Decoding splits the string as follows:
//! - the head (type and name) ends at the first `（`, so neither may contain one;
//! - the type is the first space-delimited token of the head, the name is the rest;
//! - departure and arrival are split at the last `→`, which must follow `発`;
//! - each location/time block splits at its last space.

use tracing::debug;

use crate::plan::TransportRecord;

const OPEN: char = '（';
const ARROW: char = '→';
const DEPARTS: char = '発';
const ARRIVES_CLOSE: &str = "着）";

impl TransportRecord {
    /// Render this record as a transport string.
    pub fn encode(&self) -> String {
        let head = if self.name.is_empty() {
            self.kind.clone()
        } else {
            format!("{} {}", self.kind, self.name)
        };
        format!(
            "{head}（{} {}発 → {} {}着）",
            self.dep_location, self.dep_time, self.arr_location, self.arr_time
        )
    }

    /// Parse a transport string. Returns an empty record when the string does
    /// not have the transport shape.
    pub fn decode(value: &str) -> Self {
        match decode_parts(value.trim()) {
            Some(record) => record,
            None => {
                debug!(value, "transport string did not match, leaving record empty");
                Self::default()
            }
        }
    }
}

fn decode_parts(value: &str) -> Option<TransportRecord> {
    let body = value.strip_suffix(ARRIVES_CLOSE)?;
    let (head, legs) = body.split_once(OPEN)?;

    let arrow = legs.rfind(ARROW)?;
    let departure = legs[..arrow].trim_end().strip_suffix(DEPARTS)?;
    let arrival = &legs[arrow + ARROW.len_utf8()..];
    let arrival = arrival.strip_prefix(' ').unwrap_or(arrival);

    let (kind, name) = split_head(head.trim_end());
    let (dep_location, dep_time) = split_location_time(departure);
    let (arr_location, arr_time) = split_location_time(arrival);

    Some(TransportRecord {
        kind: kind.to_owned(),
        name: name.to_owned(),
        dep_location: dep_location.to_owned(),
        dep_time: dep_time.to_owned(),
        arr_location: arr_location.to_owned(),
        arr_time: arr_time.to_owned(),
    })
}

/// `"飛行機 ANA 123"` → `("飛行機", "ANA 123")`.
fn split_head(head: &str) -> (&str, &str) {
    match head.split_once(' ') {
        Some((kind, name)) => (kind, name.trim()),
        None => (head, ""),
    }
}

/// `"羽田空港 08:00"` → `("羽田空港", "08:00")`.
fn split_location_time(block: &str) -> (&str, &str) {
    match block.rsplit_once(' ') {
        Some((location, time)) => (location.trim(), time.trim()),
        None => (block.trim(), ""),
    }
}
