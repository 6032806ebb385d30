//! Questionnaire step state machine — tracks which page the user is on.

use serde::{Deserialize, Serialize};

/// The four pages of the questionnaire.
///
/// Moves linearly in both directions: GoalsShortTerm ⇄ GoalsLongTerm ⇄
/// FinancialSituation ⇄ RiskAssessment. No skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    GoalsShortTerm,
    GoalsLongTerm,
    FinancialSituation,
    RiskAssessment,
}

impl QuestionnaireStep {
    pub const ALL: [QuestionnaireStep; 4] = [
        Self::GoalsShortTerm,
        Self::GoalsLongTerm,
        Self::FinancialSituation,
        Self::RiskAssessment,
    ];

    /// 1-based page number.
    pub fn number(&self) -> u8 {
        match self {
            Self::GoalsShortTerm => 1,
            Self::GoalsLongTerm => 2,
            Self::FinancialSituation => 3,
            Self::RiskAssessment => 4,
        }
    }

    /// Whether this is the last page (the one with the submit button).
    pub fn is_last(&self) -> bool {
        matches!(self, Self::RiskAssessment)
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Self::GoalsShortTerm)
    }

    /// The following page, if any.
    pub fn next(&self) -> Option<QuestionnaireStep> {
        use QuestionnaireStep::*;
        match self {
            GoalsShortTerm => Some(GoalsLongTerm),
            GoalsLongTerm => Some(FinancialSituation),
            FinancialSituation => Some(RiskAssessment),
            RiskAssessment => None,
        }
    }

    /// The preceding page, if any.
    pub fn previous(&self) -> Option<QuestionnaireStep> {
        use QuestionnaireStep::*;
        match self {
            GoalsShortTerm => None,
            GoalsLongTerm => Some(GoalsShortTerm),
            FinancialSituation => Some(GoalsLongTerm),
            RiskAssessment => Some(FinancialSituation),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::GoalsShortTerm => "Short-term Investment Goals",
            Self::GoalsLongTerm => "Long-term Investment Goals",
            Self::FinancialSituation => "Financial Situation",
            Self::RiskAssessment => "Risk Assessment",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Self::GoalsShortTerm => {
                "What are your goals for the next 1-3 years? Select all that apply."
            }
            Self::GoalsLongTerm => "What are your goals beyond 3 years? Select all that apply.",
            Self::FinancialSituation => "Help us understand your investment capacity.",
            Self::RiskAssessment => {
                "Let's understand your risk tolerance and investment experience."
            }
        }
    }
}

impl Default for QuestionnaireStep {
    fn default() -> Self {
        Self::GoalsShortTerm
    }
}

impl std::fmt::Display for QuestionnaireStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::GoalsShortTerm => "goals_short_term",
            Self::GoalsLongTerm => "goals_long_term",
            Self::FinancialSituation => "financial_situation",
            Self::RiskAssessment => "risk_assessment",
        };
        write!(f, "{s}")
    }
}
