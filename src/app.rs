//! ProfileStore — the root component. Decides whether the questionnaire or
//! the profile summary is on screen and persists finished profiles.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::DatabaseError;
use crate::profile::model::{InvestorProfile, settings_keys};
use crate::questionnaire::{Questionnaire, QuestionnaireEvent, QuestionnaireExit, view};
use crate::store::Database;

/// Which of the two root views is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Questionnaire,
    Summary,
}

/// Owns the current profile and the questionnaire while it is on screen.
pub struct ProfileStore {
    db: Arc<dyn Database>,
    user_id: String,
    show_questionnaire: bool,
    investor_profile: Option<InvestorProfile>,
    /// Mounted only while `screen()` is `Questionnaire`.
    questionnaire: Option<Questionnaire>,
}

impl ProfileStore {
    /// Start with no profile. The stored profile is not read back.
    pub fn new(db: Arc<dyn Database>, config: &AppConfig) -> Self {
        let mut store = Self {
            db,
            user_id: config.user_id.clone(),
            show_questionnaire: config.show_questionnaire_on_start,
            investor_profile: None,
            questionnaire: None,
        };
        store.sync_mount();
        store
    }

    /// The questionnaire is shown when requested or when there is no profile yet.
    pub fn screen(&self) -> Screen {
        if self.show_questionnaire || self.investor_profile.is_none() {
            Screen::Questionnaire
        } else {
            Screen::Summary
        }
    }

    pub fn profile(&self) -> Option<&InvestorProfile> {
        self.investor_profile.as_ref()
    }

    pub fn questionnaire(&self) -> Option<&Questionnaire> {
        self.questionnaire.as_ref()
    }

    pub fn is_questionnaire_requested(&self) -> bool {
        self.show_questionnaire
    }

    /// Re-open the questionnaire. It starts from an empty draft; the current
    /// profile is not used to pre-fill it.
    pub fn request_edit(&mut self) {
        self.show_questionnaire = true;
        self.sync_mount();
    }

    /// Forward an event to the mounted questionnaire and react to its exit.
    ///
    /// Does nothing when the summary is on screen. Fails only if persisting a
    /// completed profile fails.
    pub async fn handle_questionnaire_event(
        &mut self,
        event: QuestionnaireEvent,
    ) -> Result<(), DatabaseError> {
        let Some(questionnaire) = self.questionnaire.as_mut() else {
            return Ok(());
        };
        match questionnaire.handle(event) {
            Some(QuestionnaireExit::Completed(profile)) => self.on_complete(profile).await,
            Some(QuestionnaireExit::Cancelled) => {
                self.on_cancel();
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Keep the finished profile, hide the questionnaire, and write the
    /// profile to the settings store under `"investorProfile"`.
    ///
    /// State is updated before the write; a write failure is returned as-is.
    pub async fn on_complete(&mut self, profile: InvestorProfile) -> Result<(), DatabaseError> {
        self.investor_profile = Some(profile.clone());
        self.show_questionnaire = false;
        self.sync_mount();

        let value = serde_json::to_value(&profile)
            .map_err(|e| DatabaseError::Serialization(e.to_string()))?;
        self.db
            .set_setting(&self.user_id, settings_keys::INVESTOR_PROFILE, &value)
            .await?;

        tracing::info!(profile = %value, "Investor profile created");
        Ok(())
    }

    /// Hide the questionnaire; the profile is untouched.
    ///
    /// With no profile the questionnaire stays on screen, and since it is
    /// never unmounted it keeps its page and draft.
    pub fn on_cancel(&mut self) {
        self.show_questionnaire = false;
        self.sync_mount();
    }

    /// Render whichever screen is active.
    pub fn render(&self) -> String {
        match (&self.questionnaire, &self.investor_profile) {
            (Some(questionnaire), _) => view::render(questionnaire),
            (None, Some(profile)) => profile.to_summary(),
            (None, None) => String::new(),
        }
    }

    /// Mount a fresh questionnaire when it comes on screen, drop it when it
    /// leaves.
    fn sync_mount(&mut self) {
        match self.screen() {
            Screen::Questionnaire => {
                if self.questionnaire.is_none() {
                    self.questionnaire = Some(Questionnaire::new(true));
                }
            }
            Screen::Summary => {
                self.questionnaire = None;
            }
        }
    }
}
