//! Text rendering of the questionnaire's current page.

use rust_decimal::Decimal;

use crate::profile::model::{
    ExperienceLevel, InvestmentHorizon, LongTermGoalType, RiskTolerance, ShortTermGoalType,
};

use super::step::QuestionnaireStep;
use super::wizard::Questionnaire;

/// Render the progress bar, the current page, and the navigation line.
pub fn render(q: &Questionnaire) -> String {
    let step = q.current_step();
    let data = q.form_data();
    let mut parts = vec![progress_bar(step), String::new()];

    parts.push(format!("## {}", step.title()));
    parts.push(step.prompt().to_string());
    parts.push(String::new());

    match step {
        QuestionnaireStep::GoalsShortTerm => {
            for goal in ShortTermGoalType::OFFERED {
                parts.push(format!("  add {:<24} {}", goal.tag(), goal.label()));
            }
            let selected: Vec<&str> = data
                .short_term_goals
                .iter()
                .map(|g| g.goal_type.tag())
                .collect();
            push_selected(&mut parts, &selected);
        }
        QuestionnaireStep::GoalsLongTerm => {
            for goal in LongTermGoalType::OFFERED {
                parts.push(format!("  add {:<24} {}", goal.tag(), goal.label()));
            }
            let selected: Vec<&str> = data
                .long_term_goals
                .iter()
                .map(|g| g.goal_type.tag())
                .collect();
            push_selected(&mut parts, &selected);
        }
        QuestionnaireStep::FinancialSituation => {
            parts.push(format!(
                "  monthly <amount>   Monthly Contribution Capacity: {}",
                field_value(data.monthly_contribution, "e.g., 1000")
            ));
            parts.push(format!(
                "  savings <amount>   Current Savings Available for Investment: {}",
                field_value(data.current_savings, "e.g., 10000")
            ));
        }
        QuestionnaireStep::RiskAssessment => {
            parts.push(format!(
                "  experience <level>   Investment Experience Level: {}",
                select_value(
                    data.experience_level.map(|v| v.label()),
                    "Select experience level"
                )
            ));
            parts.push(format!(
                "      {}",
                options(ExperienceLevel::ALL.iter().map(|v| (v.tag(), v.label())))
            ));
            parts.push(format!(
                "  risk <tolerance>     Risk Tolerance: {}",
                select_value(
                    data.volatility_comfort.map(|v| v.label()),
                    "Select risk tolerance"
                )
            ));
            parts.push(format!(
                "      {}",
                options(RiskTolerance::ALL.iter().map(|v| (v.tag(), v.label())))
            ));
            parts.push(format!(
                "  horizon <horizon>    Investment Horizon: {}",
                select_value(
                    data.investment_horizon.map(|v| v.label()),
                    "Select investment horizon"
                )
            ));
            parts.push(format!(
                "      {}",
                options(InvestmentHorizon::ALL.iter().map(|v| (v.tag(), v.label())))
            ));
        }
    }

    parts.push(String::new());
    parts.push(navigation(q));
    parts.join("\n")
}

/// Four segments, filled up to the current page, the current one bracketed.
fn progress_bar(current: QuestionnaireStep) -> String {
    QuestionnaireStep::ALL
        .iter()
        .map(|step| {
            let bar = if step.number() <= current.number() {
                "####"
            } else {
                "----"
            };
            if *step == current {
                format!("[{bar} Step {}]", step.number())
            } else {
                format!(" {bar} Step {} ", step.number())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_selected(parts: &mut Vec<String>, tags: &[&str]) {
    if tags.is_empty() {
        return;
    }
    parts.push(String::new());
    parts.push("Selected Goals:".to_string());
    for tag in tags {
        parts.push(format!("  * {}", tag.replace('_', " ").to_uppercase()));
    }
}

/// Numeric fields show blank for zero or unset, like an input bound to `value || ''`.
fn field_value(value: Option<Decimal>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_zero() => v.to_string(),
        _ => format!("({placeholder})"),
    }
}

fn select_value(label: Option<&str>, placeholder: &str) -> String {
    match label {
        Some(label) => label.to_string(),
        None => format!("({placeholder})"),
    }
}

fn options<'a>(choices: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    choices
        .map(|(tag, label)| format!("{tag} = {label}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn navigation(q: &Questionnaire) -> String {
    let step = q.current_step();
    let mut actions = Vec::new();
    if !step.is_first() {
        actions.push("back");
    }
    if q.is_cancellable() {
        actions.push("cancel");
    }
    if step.is_last() {
        actions.push("complete");
    } else {
        actions.push("next");
    }
    format!("Actions: {}", actions.join(" · "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_lists_short_term_options() {
        let q = Questionnaire::new(true);
        let out = render(&q);
        assert!(out.contains("Short-term Investment Goals"));
        assert!(out.contains("Active Trading"));
        assert!(out.contains("emergency_fund"));
        assert!(!out.contains("Selected Goals"));
        assert!(out.contains("[#### Step 1]"));
        assert!(out.contains(" ---- Step 4 "));
        assert!(out.contains("Actions: cancel · next"));
    }

    #[test]
    fn selected_goals_are_uppercased_without_underscores() {
        let mut q = Questionnaire::new(false);
        q.add_short_term_goal(ShortTermGoalType::DebtPayoff);
        let out = render(&q);
        assert!(out.contains("Selected Goals:"));
        assert!(out.contains("* DEBT PAYOFF"));
    }

    #[test]
    fn zero_amount_renders_blank() {
        let mut q = Questionnaire::new(false);
        q.advance();
        q.advance();
        q.set_monthly_contribution("");
        q.set_current_savings("2000");
        let out = render(&q);
        assert!(out.contains("Monthly Contribution Capacity: (e.g., 1000)"));
        assert!(out.contains("Current Savings Available for Investment: 2000"));
        assert!(out.contains("Actions: back · next"));
    }

    #[test]
    fn last_page_offers_complete() {
        let mut q = Questionnaire::new(true);
        for _ in 0..3 {
            q.advance();
        }
        q.set_investment_horizon(Some(InvestmentHorizon::Long));
        let out = render(&q);
        assert!(out.contains("Risk Assessment"));
        assert!(out.contains("(Select experience level)"));
        assert!(out.contains("Investment Horizon: Long-term (> 7 years)"));
        assert!(out.contains("Actions: back · cancel · complete"));
        assert!(out.contains("[#### Step 4]"));
    }
}
