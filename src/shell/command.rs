//! Parsing of shell input lines into app commands.

use crate::error::CommandError;
use crate::profile::model::{
    ExperienceLevel, InvestmentHorizon, LongTermGoalType, RiskTolerance, ShortTermGoalType,
};
use crate::questionnaire::{QuestionnaireEvent, QuestionnaireStep};

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Re-open the questionnaire from the summary.
    Edit,
    Questionnaire(QuestionnaireEvent),
}

/// Parse a line against what's on screen: `Some(step)` while the
/// questionnaire is shown, `None` on the summary.
///
/// Each questionnaire control is only accepted on the page that shows it.
pub fn parse_command(
    line: &str,
    step: Option<QuestionnaireStep>,
) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let name = name.to_ascii_lowercase();

    match name.as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "/quit" => return Ok(Command::Quit),
        _ => {}
    }

    let Some(step) = step else {
        return match name.as_str() {
            "edit" => Ok(Command::Edit),
            "next" | "back" | "add" | "monthly" | "savings" | "experience" | "risk"
            | "horizon" | "complete" | "cancel" => Err(CommandError::NotAvailable {
                command: name.clone(),
            }),
            _ => Err(CommandError::Unknown(name.clone())),
        };
    };

    use crate::questionnaire::QuestionnaireStep::*;
    let event = match (name.as_str(), step) {
        ("next", _) => QuestionnaireEvent::Next,
        ("back", _) => QuestionnaireEvent::Back,
        ("cancel", _) => QuestionnaireEvent::Cancel,
        ("add", GoalsShortTerm) => {
            let tag = required(&name, arg)?;
            let goal = ShortTermGoalType::from_tag(&tag.to_ascii_lowercase()).ok_or_else(|| {
                invalid(&name, tag, ShortTermGoalType::OFFERED.iter().map(|g| g.tag()))
            })?;
            QuestionnaireEvent::AddShortTermGoal(goal)
        }
        ("add", GoalsLongTerm) => {
            let tag = required(&name, arg)?;
            let goal = LongTermGoalType::from_tag(&tag.to_ascii_lowercase()).ok_or_else(|| {
                invalid(&name, tag, LongTermGoalType::OFFERED.iter().map(|g| g.tag()))
            })?;
            QuestionnaireEvent::AddLongTermGoal(goal)
        }
        ("monthly", FinancialSituation) => {
            QuestionnaireEvent::MonthlyContribution(arg.to_string())
        }
        ("savings", FinancialSituation) => QuestionnaireEvent::CurrentSavings(arg.to_string()),
        ("experience", RiskAssessment) => QuestionnaireEvent::ExperienceLevel(optional_choice(
            &name,
            arg,
            ExperienceLevel::from_tag,
            ExperienceLevel::ALL.iter().map(|v| v.tag()),
        )?),
        ("risk", RiskAssessment) => QuestionnaireEvent::VolatilityComfort(optional_choice(
            &name,
            arg,
            RiskTolerance::from_tag,
            RiskTolerance::ALL.iter().map(|v| v.tag()),
        )?),
        ("horizon", RiskAssessment) => QuestionnaireEvent::InvestmentHorizon(optional_choice(
            &name,
            arg,
            InvestmentHorizon::from_tag,
            InvestmentHorizon::ALL.iter().map(|v| v.tag()),
        )?),
        ("complete" | "submit", RiskAssessment) => QuestionnaireEvent::Submit,
        (
            "add" | "monthly" | "savings" | "experience" | "risk" | "horizon" | "complete"
            | "submit",
            _,
        ) => {
            return Err(CommandError::NotOnThisStep {
                command: name.clone(),
            });
        }
        ("edit", _) => {
            return Err(CommandError::NotAvailable {
                command: name.clone(),
            });
        }
        _ => return Err(CommandError::Unknown(name.clone())),
    };
    Ok(Command::Questionnaire(event))
}

fn required<'a>(command: &str, arg: &'a str) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument {
            command: command.to_string(),
        })
    } else {
        Ok(arg)
    }
}

/// An empty argument is the blank "Select …" option.
fn optional_choice<'a, T>(
    command: &str,
    arg: &str,
    from_tag: impl Fn(&str) -> Option<T>,
    expected: impl Iterator<Item = &'a str>,
) -> Result<Option<T>, CommandError> {
    if arg.is_empty() {
        return Ok(None);
    }
    from_tag(&arg.to_ascii_lowercase())
        .map(Some)
        .ok_or_else(|| invalid(command, arg, expected))
}

fn invalid<'a>(
    command: &str,
    value: &str,
    expected: impl Iterator<Item = &'a str>,
) -> CommandError {
    CommandError::InvalidValue {
        command: command.to_string(),
        value: value.to_string(),
        expected: expected.collect::<Vec<_>>().join(", "),
    }
}

/// Help text for the current screen.
pub fn help_text(step: Option<QuestionnaireStep>) -> String {
    let mut lines = vec!["Commands:".to_string()];
    match step {
        None => lines.push("  edit                     retake the questionnaire".to_string()),
        Some(step) => {
            match step {
                QuestionnaireStep::GoalsShortTerm | QuestionnaireStep::GoalsLongTerm => {
                    lines.push("  add <goal>               select a goal".to_string());
                }
                QuestionnaireStep::FinancialSituation => {
                    lines.push("  monthly <amount>         monthly contribution".to_string());
                    lines.push("  savings <amount>         current savings".to_string());
                }
                QuestionnaireStep::RiskAssessment => {
                    lines.push("  experience [level]       experience level".to_string());
                    lines.push("  risk [tolerance]         risk tolerance".to_string());
                    lines.push("  horizon [horizon]        investment horizon".to_string());
                    lines.push("  complete                 finish the questionnaire".to_string());
                }
            }
            lines.push("  next / back              change page".to_string());
            lines.push("  cancel                   leave the questionnaire".to_string());
        }
    }
    lines.push("  help / quit".to_string());
    lines.join("\n")
}
