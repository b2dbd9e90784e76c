//! Shared fixtures for tabi integration tests.
//!
//! Two kinds of fixture live here:
//! - sample [`TripPlan`] values, built so that every field survives a
//!   generate/parse round trip;
//! - reference prompts written by hand (not produced by the generator), in
//!   the shapes users actually paste back: full-width and half-width
//!   colons, loose spacing around `（`, headings directly after lists.

use std::path::{Path, PathBuf};

use tabi_core::plan::{
    DayPlan, GeneralInfo, GeneralTransport, Place, SuggestionInfo, TransportRecord, TripPlan,
};

// ---------------------------------------------------------------------------
// Sample plans
// ---------------------------------------------------------------------------

/// Build a transport record from its six fields, in encoding order.
pub fn transport(
    kind: &str,
    name: &str,
    dep_location: &str,
    dep_time: &str,
    arr_location: &str,
    arr_time: &str,
) -> TransportRecord {
    TransportRecord {
        kind: kind.to_owned(),
        name: name.to_owned(),
        dep_location: dep_location.to_owned(),
        dep_time: dep_time.to_owned(),
        arr_location: arr_location.to_owned(),
        arr_time: arr_time.to_owned(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// One-day plan from the museum scenario: 札幌 → 苫小牧.
pub fn tomakomai_plan() -> TripPlan {
    TripPlan::standard(
        GeneralInfo {
            departure: "札幌".to_owned(),
            ..GeneralInfo::default()
        },
        vec![DayPlan {
            date: "2025-08-02".to_owned(),
            area: "北海道".to_owned(),
            city: "苫小牧市".to_owned(),
            places: vec![Place::new("苫小牧市美術博物館", "https://example.com/museum")],
            do_eat: strings(&["ご当地名物を食べる"]),
            ..DayPlan::default()
        }],
    )
}

/// Three-day standard plan with every optional field populated: both
/// trip-wide transport legs, a day trip, an AI-delegated day, links in
/// places and notes, and a year boundary.
pub fn full_standard_plan() -> TripPlan {
    TripPlan::standard(
        GeneralInfo {
            departure: "東京".to_owned(),
            members: "30代夫婦、体力に自信あり".to_owned(),
            theme: "冬の北海道で温泉と美術館".to_owned(),
            priority: "移動は少なめに".to_owned(),
            transport: GeneralTransport {
                outbound: Some(transport(
                    "飛行機", "ANA 53", "羽田空港", "08:00", "新千歳空港", "09:30",
                )),
                inbound: Some(transport(
                    "飛行機", "", "新千歳空港", "18:00", "羽田空港", "19:40",
                )),
            },
        },
        vec![
            DayPlan {
                date: "2025-12-31".to_owned(),
                area: "北海道".to_owned(),
                city: "札幌市".to_owned(),
                accommodation: "札幌グランドホテル".to_owned(),
                transport: Some(transport(
                    "列車", "快速エアポート", "新千歳空港駅", "10:00", "札幌駅", "10:37",
                )),
                places: vec![
                    Place::new("札幌時計台", "https://example.com/sapporo-clock-tower"),
                    Place::new("大通公園", ""),
                ],
                do_eat: strings(&["スープカレー", "年越しそば"]),
                notes: strings(&["[地下鉄1日券](https://example.com/pass)を買う"]),
                ..DayPlan::default()
            },
            DayPlan {
                date: "2026-01-01".to_owned(),
                area: "北海道".to_owned(),
                city: "小樽市".to_owned(),
                is_day_trip: true,
                transport: Some(transport(
                    "バス", "", "札幌駅前（東急百貨店南口）", "09:00", "小樽駅前", "10:05",
                )),
                places: vec![Place::new("小樽運河", "https://example.com/otaru")],
                do_eat: strings(&["**寿司**を食べる"]),
                ..DayPlan::default()
            },
            DayPlan {
                date: "2026-01-02".to_owned(),
                accommodation: "定山渓の温泉宿".to_owned(),
                is_ai_suggestion: true,
                ..DayPlan::default()
            },
        ],
    )
}

/// Suggestion-mode request used across tests.
pub fn okinawa_suggestion() -> TripPlan {
    TripPlan::suggestion(
        GeneralInfo {
            departure: "横浜".to_owned(),
            members: "家族4人".to_owned(),
            theme: "沖縄の自然を満喫".to_owned(),
            priority: "美ら海水族館に行くこと".to_owned(),
            transport: GeneralTransport::default(),
        },
        SuggestionInfo {
            arrival_point: "那覇空港".to_owned(),
            start_date: "2025-10-01".to_owned(),
            end_date: "2025-10-03".to_owned(),
            remarks: strings(&["レンタカーを借りたい"]),
        },
    )
}

// ---------------------------------------------------------------------------
// Reference prompts
// ---------------------------------------------------------------------------

/// One general section and one day, full-width colons.
pub const BASIC_PROMPT: &str = "# 旅行プランの作成依頼
### 旅行全体の基本情報
*   **出発地**：札幌
*   **最優先事項**：美術館に行く

### 1日目（2025/8/2・土）
*   **主な活動エリア**：北海道 (苫小牧市)
*   **行きたい場所**：
    *   [苫小牧市美術博物館](https://example.com/museum)
*   **やりたいこと・食べたいもの**：
    *   ご当地名物を食べる
";

/// Half-width colons, an outbound leg, zero-padded heading date and a bus
/// line with a space before `（`.
pub const COMPLEX_PROMPT: &str = "# 旅行プランの作成依頼
### 旅行全体の基本情報
*   **出発地**: 東京
*   **メンバー構成・体力レベル**: 30代夫婦、体力に自信あり
*   **往路の交通情報**: 飛行機 ANA123（羽田空港 08:00発 → 新千歳空港 09:30着）
### 1日目（2025/09/01・月）
*   **主な活動エリア**: 北海道 (札幌市)
*   **この日の主な移動**: バス （札幌駅 10:00発 → 大通公園 10:15着）
*   **行きたい場所**:
    *   [札幌時計台](https://example.com/sapporo-clock-tower)
";

/// Two days across a year boundary, the second one AI-delegated.
pub const MULTI_DAY_PROMPT: &str = "# 旅行プランの作成依頼
### 旅行全体の基本情報
*   **出発地**：札幌

### 1日目（2025/12/31・水）
*   **主な活動エリア**：北海道（函館市）
*   **宿泊先／最終目的地**：ホテルA
*   **メモ・交通パスなど**：
    *   はこだて旅するパスポート

### 2日目（2026/1/1・木）
*   **プラン**：この日はAIにおまかせします
*   **宿泊先／最終目的地**：ホテルB

### AIへの特別指示
*   **宿泊先**：ここは指示なので無視される
";

/// Suggestion-mode prompt as pasted back by a user.
pub const SUGGESTION_PROMPT: &str = "# ★★★ 行先提案モード ★★★
あなたが行先も含めて、最高の旅行プランを提案してください.

### 旅行の基本条件
*   **出発地**: 横浜
*   **到着空港・駅**: 那覇空港
*   **旅行期間**: 2泊3日 (2025-10-01 ～ 2025-10-03)
*   **メンバー構成・体力レベル**: 家族4人
*   **旅のテーマ・雰囲気**: 沖縄の自然を満喫
*   **最優先事項**: 美ら海水族館に行くこと
*   **備考・その他の要望**:
    *   レンタカーを借りたい
";

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Write `content` to `dir/name` and return the path.
///
/// # Panics
///
/// Panics if the file cannot be written. Test-only helper.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    path
}
