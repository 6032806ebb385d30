//! Turn a questionnaire draft into a finished profile.

use chrono::{DateTime, Utc};

use super::model::{
    ExperienceLevel, InvestmentConstraints, InvestmentHorizon, InvestorProfile,
    QuestionnaireFormData, RiskAssessment, RiskTolerance,
};

/// Risk tolerance used when the draft never picked one.
pub const DEFAULT_RISK_TOLERANCE: RiskTolerance = RiskTolerance::Moderate;
/// Experience level used when the draft never picked one.
pub const DEFAULT_EXPERIENCE_LEVEL: ExperienceLevel = ExperienceLevel::Beginner;
/// Horizon used when the draft never picked one.
pub const DEFAULT_INVESTMENT_HORIZON: InvestmentHorizon = InvestmentHorizon::Medium;

/// Build the final profile from a draft.
///
/// Goal lists and the two numeric constraints are copied as-is. Missing
/// selections fall back to the `DEFAULT_*` constants, the market-drop answer
/// to an empty string, and both risk flags are `false`. `created_at` and
/// `updated_at` are both `now`.
pub fn finalize_profile(draft: &QuestionnaireFormData, now: DateTime<Utc>) -> InvestorProfile {
    let volatility_comfort = draft.volatility_comfort.unwrap_or(DEFAULT_RISK_TOLERANCE);

    InvestorProfile {
        short_term_goals: draft.short_term_goals.clone(),
        long_term_goals: draft.long_term_goals.clone(),
        constraints: InvestmentConstraints {
            monthly_contribution: draft.monthly_contribution,
            current_savings: draft.current_savings,
            ..Default::default()
        },
        risk_tolerance: volatility_comfort,
        experience_level: draft.experience_level.unwrap_or(DEFAULT_EXPERIENCE_LEVEL),
        investment_horizon: draft
            .investment_horizon
            .unwrap_or(DEFAULT_INVESTMENT_HORIZON),
        risk_assessment: RiskAssessment {
            market_drop_response: draft.market_drop_response.clone().unwrap_or_default(),
            volatility_comfort,
            capital_preservation: false,
            growth_priority: false,
        },
        created_at: now,
        updated_at: now,
    }
}
