use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense 1-based level number, the sequencing key of a catalog.
pub type LevelId = u32;

/// Independent games shipped in the app. Each one owns its own catalog and
/// its own progress; they never share unlocks.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum GameVariant {
    Academy,
    BruteForceLab,
    DefenseOps,
}

impl GameVariant {
    pub const ALL: [GameVariant; 3] = [
        GameVariant::Academy,
        GameVariant::BruteForceLab,
        GameVariant::DefenseOps,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GameVariant::Academy => "Password Academy",
            GameVariant::BruteForceLab => "Brute Force Lab",
            GameVariant::DefenseOps => "Defense Ops",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            GameVariant::Academy => "Spot weak passwords and learn what makes them strong",
            GameVariant::BruteForceLab => "Find out how long an attacker really needs",
            GameVariant::DefenseOps => "Deploy defenses before the attack lands",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    Classification,
    ThresholdDemo,
    Simulation,
}

impl fmt::Display for LevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LevelKind::Classification => "classification",
            LevelKind::ThresholdDemo => "threshold demo",
            LevelKind::Simulation => "simulation",
        };
        f.write_str(name)
    }
}

/// Ground-truth verdict for a classification item.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Weak,
    Strong,
    Secure,
    Vulnerable,
}

impl Label {
    pub fn text(&self) -> &'static str {
        match self {
            Label::Weak => "Weak",
            Label::Strong => "Strong",
            Label::Secure => "Secure",
            Label::Vulnerable => "Vulnerable",
        }
    }
}

/// The two buttons offered for every item of a classification level.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LabelPair {
    #[default]
    WeakStrong,
    SecureVulnerable,
}

impl LabelPair {
    pub fn labels(&self) -> [Label; 2] {
        match self {
            LabelPair::WeakStrong => [Label::Weak, Label::Strong],
            LabelPair::SecureVulnerable => [Label::Secure, Label::Vulnerable],
        }
    }

    pub fn contains(&self, label: Label) -> bool {
        self.labels().contains(&label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassificationItem {
    pub text: String,
    pub answer: Label,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassificationPayload {
    #[serde(default)]
    pub labels: LabelPair,
    pub items: Vec<ClassificationItem>,
}

pub const DEFAULT_PARTIAL_SCORE: u8 = 40;
pub const DEFAULT_GUESSES_PER_SEC: f64 = 1.0e10;

fn default_partial_score() -> u8 {
    DEFAULT_PARTIAL_SCORE
}

fn default_guesses_per_sec() -> f64 {
    DEFAULT_GUESSES_PER_SEC
}

/// Single slider exercise: reach `target` to pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThresholdPayload {
    pub parameter: String,
    pub min: u32,
    pub max: u32,
    pub start: u32,
    pub target: u32,
    /// Score awarded when the target is not reached.
    #[serde(default = "default_partial_score")]
    pub partial_score: u8,
    /// Alphabet size used for the crack-time readout next to the slider.
    pub charset_size: u32,
    #[serde(default = "default_guesses_per_sec")]
    pub guesses_per_sec: f64,
}

pub const FLAG_HIT_POINTS: i32 = 20;
pub const FALSE_POSITIVE_POINTS: i32 = -10;
pub const MISS_POINTS: i32 = -15;
pub const ORDER_BONUS_POINTS: i32 = 10;

/// Point deltas of a simulation level. Catalogs may override any of them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationRules {
    pub base: i32,
    pub flag_hit: i32,
    pub false_positive: i32,
    pub miss: i32,
    pub order_bonus: i32,
}

impl Default for SimulationRules {
    fn default() -> Self {
        Self {
            base: 0,
            flag_hit: FLAG_HIT_POINTS,
            false_positive: FALSE_POSITIVE_POINTS,
            miss: MISS_POINTS,
            order_bonus: ORDER_BONUS_POINTS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimItem {
    pub label: String,
    pub vulnerable: bool,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationPayload {
    pub items: Vec<SimItem>,
    /// Attack progress reaches 100% at this tick.
    pub breach_ticks: u32,
    /// Item indices that earn the order bonus when flagged in this order.
    #[serde(default)]
    pub priority: Vec<usize>,
    #[serde(default)]
    pub rules: SimulationRules,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LevelPayload {
    Classification(ClassificationPayload),
    ThresholdDemo(ThresholdPayload),
    Simulation(SimulationPayload),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelDefinition {
    pub id: LevelId,
    pub title: String,
    #[serde(default)]
    pub briefing: String,
    pub passing_score: u8,
    #[serde(default)]
    pub time_limit_secs: u32,
    pub payload: LevelPayload,
}

impl LevelDefinition {
    pub fn kind(&self) -> LevelKind {
        match self.payload {
            LevelPayload::Classification(_) => LevelKind::Classification,
            LevelPayload::ThresholdDemo(_) => LevelKind::ThresholdDemo,
            LevelPayload::Simulation(_) => LevelKind::Simulation,
        }
    }

    pub fn has_timer(&self) -> bool {
        self.time_limit_secs > 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    VariantSelect,
    LevelMenu,
    Play,
    Completion,
}
