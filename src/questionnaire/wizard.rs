//! The questionnaire component: four pages of answers accumulated into a
//! draft, finished into an `InvestorProfile` on submit.

use chrono::Utc;

use crate::profile::finalize_profile;
use crate::profile::model::{
    ExperienceLevel, InvestmentHorizon, InvestorProfile, LongTermGoal, LongTermGoalType,
    QuestionnaireFormData, RiskTolerance, ShortTermGoal, ShortTermGoalType,
};

use super::input::coerce_number;
use super::step::QuestionnaireStep;

/// A single user interaction with the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireEvent {
    Next,
    Back,
    AddShortTermGoal(ShortTermGoalType),
    AddLongTermGoal(LongTermGoalType),
    /// Raw text typed into the monthly contribution field.
    MonthlyContribution(String),
    /// Raw text typed into the current savings field.
    CurrentSavings(String),
    /// `None` is the blank "Select …" option.
    ExperienceLevel(Option<ExperienceLevel>),
    VolatilityComfort(Option<RiskTolerance>),
    InvestmentHorizon(Option<InvestmentHorizon>),
    Cancel,
    Submit,
}

/// How the questionnaire hands control back to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionnaireExit {
    /// The user submitted the last page.
    Completed(InvestorProfile),
    /// The user cancelled. Only produced when the owner allowed cancelling.
    Cancelled,
}

/// Questionnaire state: the current page and the draft answers.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    current_step: QuestionnaireStep,
    form_data: QuestionnaireFormData,
    cancellable: bool,
}

impl Questionnaire {
    /// A fresh questionnaire on page one with an empty draft.
    ///
    /// `cancellable` says whether the owner handles cancellation. Without it
    /// the cancel action does nothing.
    pub fn new(cancellable: bool) -> Self {
        Self {
            current_step: QuestionnaireStep::default(),
            form_data: QuestionnaireFormData::default(),
            cancellable,
        }
    }

    pub fn current_step(&self) -> QuestionnaireStep {
        self.current_step
    }

    pub fn form_data(&self) -> &QuestionnaireFormData {
        &self.form_data
    }

    pub fn is_cancellable(&self) -> bool {
        self.cancellable
    }

    /// Apply one event. Returns `Some` when the questionnaire is done and the
    /// owner should take over.
    pub fn handle(&mut self, event: QuestionnaireEvent) -> Option<QuestionnaireExit> {
        match event {
            QuestionnaireEvent::Next => self.advance(),
            QuestionnaireEvent::Back => self.retreat(),
            QuestionnaireEvent::AddShortTermGoal(goal_type) => self.add_short_term_goal(goal_type),
            QuestionnaireEvent::AddLongTermGoal(goal_type) => self.add_long_term_goal(goal_type),
            QuestionnaireEvent::MonthlyContribution(raw) => self.set_monthly_contribution(&raw),
            QuestionnaireEvent::CurrentSavings(raw) => self.set_current_savings(&raw),
            QuestionnaireEvent::ExperienceLevel(level) => self.set_experience_level(level),
            QuestionnaireEvent::VolatilityComfort(comfort) => self.set_volatility_comfort(comfort),
            QuestionnaireEvent::InvestmentHorizon(horizon) => self.set_investment_horizon(horizon),
            QuestionnaireEvent::Cancel => return self.cancel(),
            QuestionnaireEvent::Submit => return self.submit(),
        }
        None
    }

    /// Move to the next page. No-op on the last page.
    pub fn advance(&mut self) {
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
    }

    /// Move to the previous page. No-op on the first page.
    pub fn retreat(&mut self) {
        if let Some(previous) = self.current_step.previous() {
            self.current_step = previous;
        }
    }

    /// Append a short-term goal. Picking the same category again adds
    /// another goal.
    pub fn add_short_term_goal(&mut self, goal_type: ShortTermGoalType) {
        self.form_data
            .short_term_goals
            .push(ShortTermGoal::new(goal_type));
    }

    pub fn add_long_term_goal(&mut self, goal_type: LongTermGoalType) {
        self.form_data
            .long_term_goals
            .push(LongTermGoal::new(goal_type));
    }

    pub fn set_monthly_contribution(&mut self, raw: &str) {
        self.form_data.monthly_contribution = Some(coerce_number(raw));
    }

    pub fn set_current_savings(&mut self, raw: &str) {
        self.form_data.current_savings = Some(coerce_number(raw));
    }

    pub fn set_experience_level(&mut self, level: Option<ExperienceLevel>) {
        self.form_data.experience_level = level;
    }

    pub fn set_volatility_comfort(&mut self, comfort: Option<RiskTolerance>) {
        self.form_data.volatility_comfort = comfort;
    }

    pub fn set_investment_horizon(&mut self, horizon: Option<InvestmentHorizon>) {
        self.form_data.investment_horizon = horizon;
    }

    /// Leave without a profile, if the owner allows it.
    pub fn cancel(&self) -> Option<QuestionnaireExit> {
        self.cancellable.then_some(QuestionnaireExit::Cancelled)
    }

    /// Finish the questionnaire. Only possible from the last page; the draft
    /// is left as it is.
    pub fn submit(&self) -> Option<QuestionnaireExit> {
        if !self.current_step.is_last() {
            return None;
        }
        Some(QuestionnaireExit::Completed(finalize_profile(
            &self.form_data,
            Utc::now(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn at_last_step(q: &mut Questionnaire) {
        for _ in 0..3 {
            q.advance();
        }
        assert!(q.current_step().is_last());
    }

    #[test]
    fn starts_on_first_step_with_empty_draft() {
        let q = Questionnaire::new(true);
        assert_eq!(q.current_step(), QuestionnaireStep::GoalsShortTerm);
        assert_eq!(q.form_data(), &QuestionnaireFormData::default());
    }

    #[test]
    fn step_stays_in_range_for_any_navigation() {
        // Every Next/Back sequence of length 8, one bit per event
        const LEN: u32 = 8;
        for bits in 0..(1u32 << LEN) {
            let mut q = Questionnaire::new(false);
            let mut expected: u8 = 1;
            for i in 0..LEN {
                let event = if bits & (1 << i) != 0 {
                    expected = (expected + 1).min(4);
                    QuestionnaireEvent::Next
                } else {
                    expected = expected.saturating_sub(1).max(1);
                    QuestionnaireEvent::Back
                };
                assert!(q.handle(event).is_none());
                assert_eq!(
                    q.current_step().number(),
                    expected,
                    "sequence {bits:#010b} at event {i}"
                );
            }
        }
    }

    #[test]
    fn advance_at_last_and_retreat_at_first_are_noops() {
        let mut q = Questionnaire::new(false);
        q.retreat();
        assert_eq!(q.current_step(), QuestionnaireStep::GoalsShortTerm);

        at_last_step(&mut q);
        q.advance();
        assert_eq!(q.current_step(), QuestionnaireStep::RiskAssessment);
    }

    #[test]
    fn advance_needs_no_answers() {
        let mut q = Questionnaire::new(false);
        q.advance();
        assert_eq!(q.current_step(), QuestionnaireStep::GoalsLongTerm);
        assert!(q.form_data().short_term_goals.is_empty());
    }

    #[test]
    fn same_goal_twice_gives_two_records() {
        let mut q = Questionnaire::new(false);
        q.add_short_term_goal(ShortTermGoalType::Saving);
        q.add_short_term_goal(ShortTermGoalType::Saving);

        let goals = &q.form_data().short_term_goals;
        assert_eq!(goals.len(), 2);
        assert!(goals.iter().all(|g| g.goal_type == ShortTermGoalType::Saving));
        assert_ne!(goals[0].id, goals[1].id);
    }

    #[test]
    fn empty_numeric_input_stores_zero() {
        let mut q = Questionnaire::new(false);
        q.handle(QuestionnaireEvent::MonthlyContribution(String::new()));
        assert_eq!(q.form_data().monthly_contribution, Some(Decimal::ZERO));

        at_last_step(&mut q);
        let Some(QuestionnaireExit::Completed(profile)) = q.submit() else {
            panic!("expected a completed profile");
        };
        assert_eq!(profile.constraints.monthly_contribution, Some(Decimal::ZERO));
        assert_eq!(profile.constraints.current_savings, None);
    }

    #[test]
    fn blank_select_clears_a_choice() {
        let mut q = Questionnaire::new(false);
        q.set_experience_level(Some(ExperienceLevel::Advanced));
        q.set_experience_level(None);
        assert!(q.form_data().experience_level.is_none());
    }

    #[test]
    fn submit_only_on_last_step() {
        let mut q = Questionnaire::new(false);
        for _ in 0..3 {
            assert!(q.handle(QuestionnaireEvent::Submit).is_none());
            q.advance();
        }
        assert!(matches!(
            q.handle(QuestionnaireEvent::Submit),
            Some(QuestionnaireExit::Completed(_))
        ));
    }

    #[test]
    fn submit_with_no_selections_uses_defaults() {
        let mut q = Questionnaire::new(false);
        at_last_step(&mut q);
        let Some(QuestionnaireExit::Completed(profile)) = q.submit() else {
            panic!("expected a completed profile");
        };
        assert_eq!(profile.risk_tolerance, RiskTolerance::Moderate);
        assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
        assert_eq!(profile.investment_horizon, InvestmentHorizon::Medium);
    }

    #[test]
    fn submit_leaves_draft_in_place() {
        let mut q = Questionnaire::new(false);
        q.add_short_term_goal(ShortTermGoalType::Trading);
        at_last_step(&mut q);
        q.submit();
        assert_eq!(q.form_data().short_term_goals.len(), 1);
        assert!(q.current_step().is_last());
    }

    #[test]
    fn cancel_requires_cancellable_owner() {
        for pages in 0..4 {
            let mut with_handler = Questionnaire::new(true);
            let mut without_handler = Questionnaire::new(false);
            for _ in 0..pages {
                with_handler.advance();
                without_handler.advance();
            }
            with_handler.add_short_term_goal(ShortTermGoalType::Trading);
            let draft = with_handler.form_data().clone();

            assert_eq!(
                with_handler.handle(QuestionnaireEvent::Cancel),
                Some(QuestionnaireExit::Cancelled),
                "cancel on page {}",
                pages + 1
            );
            // Cancelling leaves page and draft alone
            assert_eq!(with_handler.current_step().number(), pages + 1);
            assert_eq!(with_handler.form_data(), &draft);

            assert!(without_handler.handle(QuestionnaireEvent::Cancel).is_none());
            assert_eq!(without_handler.current_step().number(), pages + 1);
        }
    }

    #[test]
    fn full_walkthrough() {
        let mut q = Questionnaire::new(true);
        let events = [
            QuestionnaireEvent::AddShortTermGoal(ShortTermGoalType::EmergencyFund),
            QuestionnaireEvent::Next,
            QuestionnaireEvent::AddLongTermGoal(LongTermGoalType::Retirement),
            QuestionnaireEvent::Next,
            QuestionnaireEvent::MonthlyContribution("500".to_string()),
            QuestionnaireEvent::CurrentSavings("2000".to_string()),
            QuestionnaireEvent::Next,
            QuestionnaireEvent::ExperienceLevel(Some(ExperienceLevel::Intermediate)),
            QuestionnaireEvent::VolatilityComfort(Some(RiskTolerance::Aggressive)),
            QuestionnaireEvent::InvestmentHorizon(Some(InvestmentHorizon::Long)),
        ];
        for event in events {
            assert!(q.handle(event).is_none());
        }

        let Some(QuestionnaireExit::Completed(profile)) = q.handle(QuestionnaireEvent::Submit)
        else {
            panic!("expected a completed profile");
        };

        assert_eq!(profile.short_term_goals.len(), 1);
        assert_eq!(profile.short_term_goals[0].goal_type, ShortTermGoalType::EmergencyFund);
        assert_eq!(profile.long_term_goals.len(), 1);
        assert_eq!(profile.long_term_goals[0].goal_type, LongTermGoalType::Retirement);
        assert_eq!(profile.constraints.monthly_contribution, Some(dec!(500)));
        assert_eq!(profile.constraints.current_savings, Some(dec!(2000)));
        assert_eq!(profile.risk_tolerance, RiskTolerance::Aggressive);
        assert_eq!(profile.experience_level, ExperienceLevel::Intermediate);
        assert_eq!(profile.investment_horizon, InvestmentHorizon::Long);
        assert_eq!(profile.risk_assessment.volatility_comfort, RiskTolerance::Aggressive);
        assert!(!profile.risk_assessment.capital_preservation);
        assert!(!profile.risk_assessment.growth_priority);
        assert_eq!(profile.created_at, profile.updated_at);
    }
}
