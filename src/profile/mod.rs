//! Investor profile — the data the questionnaire collects and the pure
//! step that turns a draft into a finished profile.

pub mod amount;
pub mod finalize;
pub mod model;

pub use finalize::finalize_profile;
pub use model::{
    ExperienceLevel, GoalPriority, InvestmentConstraints, InvestmentHorizon, InvestorProfile,
    LongTermGoal, LongTermGoalType, QuestionnaireFormData, RiskAssessment, RiskTolerance,
    ShortTermGoal, ShortTermGoalType,
};
