//! Suggestion-mode reader.

use tracing::debug;

use crate::plan::{GeneralInfo, SuggestionInfo, TripPlan};

use super::calendar;
use super::grammar::{NO_REMARKS, SUGGESTION_SECTION, SuggestionKey};
use super::lexer::{self, Block};
use super::parser::KeyValue;

/// Read the conditions section. Lists elsewhere in the document are ignored.
pub(crate) fn read(blocks: &[Block]) -> TripPlan {
    let mut general = GeneralInfo::default();
    let mut info = SuggestionInfo::default();
    let mut in_conditions = false;

    for block in blocks {
        match block {
            Block::Heading { depth: 3, inlines } => {
                in_conditions = lexer::plain_text(inlines).contains(SUGGESTION_SECTION);
            }
            Block::Heading { .. } => {}
            Block::List(items) if in_conditions => {
                for kv in items.iter().filter_map(KeyValue::from_item) {
                    apply(&mut general, &mut info, &kv);
                }
            }
            Block::List(_) => {}
        }
    }

    TripPlan::suggestion(general, info)
}

fn apply(general: &mut GeneralInfo, info: &mut SuggestionInfo, kv: &KeyValue<'_>) {
    let Some(key) = SuggestionKey::lookup(&kv.key) else {
        debug!(key = %kv.key, "ignoring unknown condition bullet");
        return;
    };
    match key {
        SuggestionKey::Departure => general.departure = kv.value.clone(),
        SuggestionKey::ArrivalPoint => info.arrival_point = kv.value.clone(),
        SuggestionKey::Duration => match calendar::dates_from_duration(&kv.value) {
            Some((start, end)) => {
                info.start_date = start;
                info.end_date = end;
            }
            None => debug!(value = %kv.value, "duration has no recognisable dates"),
        },
        SuggestionKey::Members => general.members = kv.value.clone(),
        SuggestionKey::Keywords => general.theme = kv.value.clone(),
        SuggestionKey::Priority => general.priority = kv.value.clone(),
        SuggestionKey::Remarks => info.remarks = remarks(kv),
    }
}

/// Nested bullets when present; otherwise the inline value unless it is the
/// "none" marker.
fn remarks(kv: &KeyValue<'_>) -> Vec<String> {
    let nested = kv.sub_texts();
    if !nested.is_empty() {
        return nested;
    }
    if kv.value.is_empty() || kv.value == NO_REMARKS {
        Vec::new()
    } else {
        vec![kv.value.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "# ★★★ 行先提案モード ★★★\n\
        あなたが行先も含めて、最高の旅行プランを提案してください。\n\
        \n\
        ### 旅行の基本条件\n\
        *   **出発地**：横浜\n\
        *   **到着空港・駅**：那覇空港\n\
        *   **旅行期間**：2泊3日 (2025-10-01 ～ 2025-10-03)\n\
        *   **メンバー構成・体力レベル**：家族4人\n\
        *   **旅のキーワード**：沖縄の自然を満喫\n\
        *   **最優先事項**：子供が楽しめる\n\
        *   **備考・その他の要望**：\n    \
            *   レンタカーを借りたい\n    \
            *   [美ら海水族館](https://example.com/aquarium)は必須\n\
        \n\
        ---\n\
        \n\
        ### AIへの特別指示\n\
        *   **出発地**：ここは無視される\n";

    fn read_str(markdown: &str) -> TripPlan {
        read(&lexer::lex(markdown))
    }

    #[test]
    fn reads_all_conditions() {
        let plan = read_str(PROMPT);
        assert!(plan.is_suggestion_mode);
        assert!(plan.days.is_empty());
        assert_eq!(plan.general.departure, "横浜");
        assert_eq!(plan.general.members, "家族4人");
        assert_eq!(plan.general.theme, "沖縄の自然を満喫");
        assert_eq!(plan.general.priority, "子供が楽しめる");
        assert_eq!(plan.suggestion.arrival_point, "那覇空港");
        assert_eq!(plan.suggestion.start_date, "2025-10-01");
        assert_eq!(plan.suggestion.end_date, "2025-10-03");
        assert_eq!(
            plan.suggestion.remarks,
            vec![
                "レンタカーを借りたい",
                "[美ら海水族館](https://example.com/aquarium)は必須",
            ]
        );
    }

    #[test]
    fn day_trip_duration() {
        let plan = read_str(
            "# ★★★ 行先提案モード ★★★\n### 旅行の基本条件\n*   **旅行期間**：日帰り (2025-10-01)\n",
        );
        assert_eq!(plan.suggestion.start_date, "2025-10-01");
        assert_eq!(plan.suggestion.end_date, "2025-10-01");
    }

    #[test]
    fn inline_remarks() {
        let none = read_str("### 旅行の基本条件\n*   **備考・その他の要望**：特になし\n");
        assert!(none.suggestion.remarks.is_empty());

        let one = read_str("### 旅行の基本条件\n*   **備考**：禁煙の部屋\n");
        assert_eq!(one.suggestion.remarks, vec!["禁煙の部屋"]);
    }

    #[test]
    fn theme_label_is_accepted_for_keywords() {
        let plan = read_str("### 旅行の基本条件\n*   **旅のテーマ・雰囲気**：温泉\n");
        assert_eq!(plan.general.theme, "温泉");
    }

    #[test]
    fn lists_before_conditions_are_ignored() {
        let plan = read_str("# ★★★ 行先提案モード ★★★\n*   **出発地**：大阪\n");
        assert_eq!(plan.general.departure, "");
    }
}
