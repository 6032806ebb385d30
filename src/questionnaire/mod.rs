//! Investor questionnaire — a four-page linear form.
//!
//! The user walks through short-term goals, long-term goals, financial
//! situation, and risk assessment. Answers accumulate in a draft that is
//! turned into an `InvestorProfile` when the last page is submitted.

pub mod input;
pub mod step;
pub mod view;
pub mod wizard;

pub use step::QuestionnaireStep;
pub use wizard::{Questionnaire, QuestionnaireEvent, QuestionnaireExit};
