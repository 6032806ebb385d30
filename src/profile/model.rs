//! Investor profile data model.
//!
//! Serialized with camelCase field names and snake_case enum tags, the
//! same JSON shape the profile is persisted in.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How much the investor can stomach swings in portfolio value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.tag() == tag)
    }
}

impl Default for RiskTolerance {
    fn default() -> Self {
        Self::Moderate
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Self-reported investing experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.tag() == tag)
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Beginner
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// How long the money is meant to stay invested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentHorizon {
    Short,
    Medium,
    Long,
}

impl InvestmentHorizon {
    pub const ALL: [InvestmentHorizon; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "Short-term (< 3 years)",
            Self::Medium => "Medium-term (3-7 years)",
            Self::Long => "Long-term (> 7 years)",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.tag() == tag)
    }
}

impl Default for InvestmentHorizon {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for InvestmentHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl Default for GoalPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Category of a goal for the next one to three years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortTermGoalType {
    Trading,
    Saving,
    EmergencyFund,
    DebtPayoff,
    Other,
}

impl ShortTermGoalType {
    /// Categories the questionnaire offers as buttons. `Other` is never offered.
    pub const OFFERED: [ShortTermGoalType; 4] = [
        Self::Trading,
        Self::Saving,
        Self::EmergencyFund,
        Self::DebtPayoff,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Trading => "trading",
            Self::Saving => "saving",
            Self::EmergencyFund => "emergency_fund",
            Self::DebtPayoff => "debt_payoff",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Trading => "Active Trading",
            Self::Saving => "Saving for Purchase",
            Self::EmergencyFund => "Emergency Fund",
            Self::DebtPayoff => "Debt Payoff",
            Self::Other => "Other",
        }
    }

    /// Look up an offered category by tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::OFFERED.into_iter().find(|v| v.tag() == tag)
    }
}

impl std::fmt::Display for ShortTermGoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Category of a goal beyond three years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongTermGoalType {
    Retirement,
    Education,
    WealthBuilding,
    Property,
    FinancialIndependence,
    Other,
}

impl LongTermGoalType {
    /// Categories the questionnaire offers as buttons. `Other` is never offered.
    pub const OFFERED: [LongTermGoalType; 5] = [
        Self::Retirement,
        Self::Education,
        Self::WealthBuilding,
        Self::Property,
        Self::FinancialIndependence,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Retirement => "retirement",
            Self::Education => "education",
            Self::WealthBuilding => "wealth_building",
            Self::Property => "property",
            Self::FinancialIndependence => "financial_independence",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Retirement => "Retirement Planning",
            Self::Education => "Education Fund",
            Self::WealthBuilding => "Wealth Building",
            Self::Property => "Property Purchase",
            Self::FinancialIndependence => "Financial Independence",
            Self::Other => "Other",
        }
    }

    /// Look up an offered category by tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::OFFERED.into_iter().find(|v| v.tag() == tag)
    }
}

impl std::fmt::Display for LongTermGoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Generate a goal identifier: creation time plus a random component.
pub fn generate_goal_id() -> String {
    format!(
        "goal-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortTermGoal {
    pub id: String,
    #[serde(rename = "type")]
    pub goal_type: ShortTermGoalType,
    pub description: String,
    #[serde(
        default,
        with = "crate::profile::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    pub priority: GoalPriority,
}

impl ShortTermGoal {
    /// A fresh goal as the questionnaire creates it: new id, empty
    /// description, medium priority.
    pub fn new(goal_type: ShortTermGoalType) -> Self {
        Self {
            id: generate_goal_id(),
            goal_type,
            description: String::new(),
            target_amount: None,
            target_date: None,
            priority: GoalPriority::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongTermGoal {
    pub id: String,
    #[serde(rename = "type")]
    pub goal_type: LongTermGoalType,
    pub description: String,
    #[serde(
        default,
        with = "crate::profile::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    pub priority: GoalPriority,
}

impl LongTermGoal {
    pub fn new(goal_type: LongTermGoalType) -> Self {
        Self {
            id: generate_goal_id(),
            goal_type,
            description: String::new(),
            target_amount: None,
            target_date: None,
            priority: GoalPriority::default(),
        }
    }
}

/// Money the investor can put to work. No range checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentConstraints {
    #[serde(
        default,
        with = "crate::profile::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_contribution: Option<Decimal>,
    #[serde(
        default,
        with = "crate::profile::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_savings: Option<Decimal>,
    /// Percentage. Not collected by the questionnaire.
    #[serde(
        default,
        with = "crate::profile::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_drawdown_tolerance: Option<Decimal>,
    /// Not collected by the questionnaire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_needs: Option<String>,
}

/// Risk questions. Only `volatility_comfort` has a control; the rest stay
/// at their empty/false values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub market_drop_response: String,
    pub volatility_comfort: RiskTolerance,
    pub capital_preservation: bool,
    pub growth_priority: bool,
}

/// The finished profile handed back by the questionnaire.
///
/// Stored as JSON in the `settings` table under key `"investorProfile"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
    pub short_term_goals: Vec<ShortTermGoal>,
    pub long_term_goals: Vec<LongTermGoal>,
    pub constraints: InvestmentConstraints,
    pub risk_tolerance: RiskTolerance,
    pub experience_level: ExperienceLevel,
    pub investment_horizon: InvestmentHorizon,
    pub risk_assessment: RiskAssessment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvestorProfile {
    /// Render the profile summary shown once the questionnaire is done.
    pub fn to_summary(&self) -> String {
        let mut parts = vec!["# Your Investment Profile".to_string()];

        let short: Vec<String> = self
            .short_term_goals
            .iter()
            .map(|g| humanize_tag(g.goal_type.tag()))
            .collect();
        let long: Vec<String> = self
            .long_term_goals
            .iter()
            .map(|g| humanize_tag(g.goal_type.tag()))
            .collect();

        parts.push(format!("- Short-term goals: {}", short.join(", ")));
        parts.push(format!("- Long-term goals: {}", long.join(", ")));
        parts.push(format!("- Risk tolerance: {}", self.risk_tolerance));
        parts.push(format!("- Experience level: {}", self.experience_level));
        parts.push(format!("- Investment horizon: {}", self.investment_horizon));
        parts.push(String::new());
        parts.push("Type `edit` to retake the questionnaire.".to_string());

        parts.join("\n")
    }
}

/// Render a snake_case tag for display: underscores become spaces.
pub fn humanize_tag(tag: &str) -> String {
    tag.replace('_', " ")
}

/// The questionnaire's in-progress answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireFormData {
    pub short_term_goals: Vec<ShortTermGoal>,
    pub long_term_goals: Vec<LongTermGoal>,
    #[serde(
        default,
        with = "crate::profile::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_contribution: Option<Decimal>,
    #[serde(
        default,
        with = "crate::profile::amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_savings: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_drop_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility_comfort: Option<RiskTolerance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_horizon: Option<InvestmentHorizon>,
}

/// Settings keys used for profile persistence.
pub mod settings_keys {
    /// Key for the InvestorProfile JSON blob in the settings table.
    pub const INVESTOR_PROFILE: &str = "investorProfile";
    /// Default user ID (single-user system).
    pub const DEFAULT_USER: &str = "default";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> InvestorProfile {
        let now = Utc::now();
        InvestorProfile {
            short_term_goals: vec![ShortTermGoal::new(ShortTermGoalType::EmergencyFund)],
            long_term_goals: vec![
                LongTermGoal::new(LongTermGoalType::FinancialIndependence),
                LongTermGoal::new(LongTermGoalType::Retirement),
            ],
            constraints: InvestmentConstraints::default(),
            risk_tolerance: RiskTolerance::Conservative,
            experience_level: ExperienceLevel::Advanced,
            investment_horizon: InvestmentHorizon::Short,
            risk_assessment: RiskAssessment {
                market_drop_response: String::new(),
                volatility_comfort: RiskTolerance::Conservative,
                capital_preservation: false,
                growth_priority: false,
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn new_goal_has_medium_priority_and_empty_description() {
        let goal = ShortTermGoal::new(ShortTermGoalType::Saving);
        assert_eq!(goal.goal_type, ShortTermGoalType::Saving);
        assert_eq!(goal.priority, GoalPriority::Medium);
        assert!(goal.description.is_empty());
        assert!(goal.target_amount.is_none());
        assert!(goal.target_date.is_none());
        assert!(goal.id.starts_with("goal-"));
    }

    #[test]
    fn goal_ids_are_unique() {
        let a = LongTermGoal::new(LongTermGoalType::Property);
        let b = LongTermGoal::new(LongTermGoalType::Property);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn offered_categories_exclude_other() {
        assert!(!ShortTermGoalType::OFFERED.contains(&ShortTermGoalType::Other));
        assert!(!LongTermGoalType::OFFERED.contains(&LongTermGoalType::Other));
        assert_eq!(ShortTermGoalType::from_tag("other"), None);
        assert_eq!(
            LongTermGoalType::from_tag("wealth_building"),
            Some(LongTermGoalType::WealthBuilding)
        );
    }

    #[test]
    fn display_matches_serde() {
        for v in RiskTolerance::ALL {
            assert_eq!(format!("\"{v}\""), serde_json::to_string(&v).unwrap());
        }
        for v in ExperienceLevel::ALL {
            assert_eq!(format!("\"{v}\""), serde_json::to_string(&v).unwrap());
        }
        for v in InvestmentHorizon::ALL {
            assert_eq!(format!("\"{v}\""), serde_json::to_string(&v).unwrap());
        }
        for v in ShortTermGoalType::OFFERED {
            assert_eq!(format!("\"{v}\""), serde_json::to_string(&v).unwrap());
        }
        for v in LongTermGoalType::OFFERED {
            assert_eq!(format!("\"{v}\""), serde_json::to_string(&v).unwrap());
        }
    }

    #[test]
    fn profile_json_uses_camel_case_and_type_field() {
        let profile = sample_profile();
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json.get("shortTermGoals").is_some());
        assert_eq!(json["riskTolerance"], "conservative");
        assert_eq!(json["investmentHorizon"], "short");
        assert_eq!(json["shortTermGoals"][0]["type"], "emergency_fund");
        assert_eq!(json["shortTermGoals"][0]["priority"], "medium");
        assert_eq!(json["riskAssessment"]["capitalPreservation"], false);
        // Absent optionals are omitted, not null
        assert!(json["constraints"].get("monthlyContribution").is_none());
        assert!(json["shortTermGoals"][0].get("targetAmount").is_none());
    }

    #[test]
    fn profile_serde_roundtrip_keeps_timestamps() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: InvestorProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
        assert_eq!(parsed.created_at, profile.created_at);
    }

    #[test]
    fn summary_humanizes_goal_tags() {
        let summary = sample_profile().to_summary();
        assert!(summary.contains("emergency fund"));
        assert!(summary.contains("financial independence, retirement"));
        assert!(summary.contains("Risk tolerance: conservative"));
        assert!(summary.contains("Experience level: advanced"));
        assert!(summary.contains("Investment horizon: short"));
        assert!(summary.contains("edit"));
        assert!(!summary.contains('_'));
    }

    #[test]
    fn empty_draft_is_default() {
        let draft = QuestionnaireFormData::default();
        assert!(draft.short_term_goals.is_empty());
        assert!(draft.long_term_goals.is_empty());
        assert!(draft.monthly_contribution.is_none());
        assert!(draft.volatility_comfort.is_none());
    }
}
