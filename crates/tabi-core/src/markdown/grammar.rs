//! Fixed vocabulary of the prompt Markdown format.
//!
//! Everything the parser keys on lives here: the mode sentinel, section
//! headings and the bullet key tables. The generator writes the `label` of
//! each key and the parser accepts any bullet whose key contains one of its
//! `phrases`. Keys are matched in table order; the first hit wins.

/// Depth-1 heading that marks a suggestion-mode document.
pub const SUGGESTION_SENTINEL: &str = "★★★ 行先提案モード ★★★";

/// Depth-3 heading of the trip-wide section in standard mode.
pub const GENERAL_SECTION: &str = "旅行全体の基本情報";

/// Depth-3 heading of the conditions section in suggestion mode.
pub const SUGGESTION_SECTION: &str = "旅行の基本条件";

/// Marker that makes a depth-3 heading a day heading (`1日目（…）`).
pub const DAY_MARKER: &str = "日目";

/// Value written for an AI-delegated day.
pub const AI_DELEGATION_PHRASE: &str = "この日はAIにおまかせします";

/// Substring of a value that marks a day as AI-delegated.
pub const AI_DELEGATION_MATCH: &str = "AIにおまかせ";

/// Value written when there are no remarks.
pub const NO_REMARKS: &str = "特になし";

/// Bullet keys of the trip-wide section in standard mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralKey {
    Departure,
    Members,
    Theme,
    Priority,
    Outbound,
    Inbound,
}

impl GeneralKey {
    pub const ALL: [Self; 6] = [
        Self::Departure,
        Self::Members,
        Self::Theme,
        Self::Priority,
        Self::Outbound,
        Self::Inbound,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Departure => "出発地",
            Self::Members => "メンバー構成・体力レベル",
            Self::Theme => "旅のテーマ・雰囲気",
            Self::Priority => "最優先事項",
            Self::Outbound => "往路の交通情報",
            Self::Inbound => "復路の交通情報",
        }
    }

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Departure => &["出発地"],
            Self::Members => &["メンバー構成"],
            Self::Theme => &["旅のテーマ"],
            Self::Priority => &["最優先事項"],
            Self::Outbound => &["往路の交通情報"],
            Self::Inbound => &["復路の交通情報"],
        }
    }

    pub fn lookup(key: &str) -> Option<Self> {
        lookup(&Self::ALL, key, Self::phrases)
    }
}

/// Bullet keys of a day section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKey {
    Area,
    Accommodation,
    Transport,
    Places,
    DoEat,
    Notes,
    /// Carries [`AI_DELEGATION_PHRASE`] on AI-delegated days.
    Plan,
}

impl DayKey {
    pub const ALL: [Self; 7] = [
        Self::Area,
        Self::Accommodation,
        Self::Transport,
        Self::Places,
        Self::DoEat,
        Self::Notes,
        Self::Plan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Area => "主な活動エリア",
            Self::Accommodation => "宿泊先／最終目的地",
            Self::Transport => "この日の主な移動",
            Self::Places => "行きたい場所",
            Self::DoEat => "やりたいこと・食べたいもの",
            Self::Notes => "メモ・交通パスなど",
            Self::Plan => "プラン",
        }
    }

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Area => &["主な活動エリア"],
            Self::Accommodation => &["宿泊先"],
            Self::Transport => &["この日の主な移動"],
            Self::Places => &["行きたい場所"],
            Self::DoEat => &["やりたいこと"],
            Self::Notes => &["交通パス", "メモ"],
            Self::Plan => &["プラン"],
        }
    }

    pub fn lookup(key: &str) -> Option<Self> {
        lookup(&Self::ALL, key, Self::phrases)
    }
}

/// Bullet keys of the suggestion-mode conditions section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Departure,
    ArrivalPoint,
    Duration,
    Members,
    /// Keywords are stored in `GeneralInfo::theme`.
    Keywords,
    Priority,
    Remarks,
}

impl SuggestionKey {
    pub const ALL: [Self; 7] = [
        Self::Departure,
        Self::ArrivalPoint,
        Self::Duration,
        Self::Members,
        Self::Keywords,
        Self::Priority,
        Self::Remarks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Departure => "出発地",
            Self::ArrivalPoint => "到着空港・駅",
            Self::Duration => "旅行期間",
            Self::Members => "メンバー構成・体力レベル",
            Self::Keywords => "旅のキーワード",
            Self::Priority => "最優先事項",
            Self::Remarks => "備考・その他の要望",
        }
    }

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Departure => &["出発地"],
            Self::ArrivalPoint => &["到着空港・駅"],
            Self::Duration => &["旅行期間"],
            Self::Members => &["メンバー構成"],
            Self::Keywords => &["旅のキーワード", "旅のテーマ"],
            Self::Priority => &["最優先事項"],
            Self::Remarks => &["備考"],
        }
    }

    pub fn lookup(key: &str) -> Option<Self> {
        lookup(&Self::ALL, key, Self::phrases)
    }
}

fn lookup<K: Copy>(table: &[K], key: &str, phrases: fn(K) -> &'static [&'static str]) -> Option<K> {
    table
        .iter()
        .copied()
        .find(|candidate| phrases(*candidate).iter().any(|phrase| key.contains(phrase)))
}
