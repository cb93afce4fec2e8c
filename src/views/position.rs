// src/views/position.rs
//! Employer view of a position: title, description, HR facts and FAQs,
//! each section with its own edit toggle

use anyhow::{Context, Result};
use tracing::{error, info};

use super::{Editable, Loadable};
use crate::core::portal_client::PortalClient;
use crate::types::{Faq, Position, PositionDetails, PositionInfo};

pub const POSITION_LOAD_ERROR: &str = "Failed to load position details";
pub const POSITION_NOT_FOUND: &str = "Position not found";
pub const POSITION_SAVE_ERROR: &str = "Failed to update position details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Position,
    Info,
    Faqs,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Position, Section::Info, Section::Faqs];

    pub fn label(self) -> &'static str {
        match self {
            Section::Position => "position",
            Section::Info => "position details",
            Section::Faqs => "FAQs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSections {
    pub position: Editable<Position>,
    pub info: Editable<Vec<PositionInfo>>,
    pub faqs: Editable<Vec<Faq>>,
}

impl PositionSections {
    fn new(details: PositionDetails) -> Self {
        Self {
            position: Editable::new(details.position),
            info: Editable::new(details.position_info),
            faqs: Editable::new(details.position_faqs),
        }
    }

    fn reset(&mut self, details: PositionDetails) {
        self.position.reset(details.position);
        self.info.reset(details.position_info);
        self.faqs.reset(details.position_faqs);
    }

    /// What the page shows: drafts where a section is being edited
    pub fn current(&self) -> PositionDetails {
        PositionDetails {
            position: self.position.current().clone(),
            position_faqs: self.faqs.current().clone(),
            position_info: self.info.current().clone(),
        }
    }

    fn is_editing(&self, section: Section) -> bool {
        match section {
            Section::Position => self.position.is_editing(),
            Section::Info => self.info.is_editing(),
            Section::Faqs => self.faqs.is_editing(),
        }
    }
}

pub struct PositionView {
    position_id: i64,
    state: Loadable<PositionSections>,
    error_banner: Option<String>,
}

impl PositionView {
    pub fn new(position_id: i64) -> Self {
        Self {
            position_id,
            state: Loadable::Loading,
            error_banner: None,
        }
    }

    pub fn position_id(&self) -> i64 {
        self.position_id
    }

    pub fn state(&self) -> &Loadable<PositionSections> {
        &self.state
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    /// Bundle as currently displayed, if loaded
    pub fn details(&self) -> Option<PositionDetails> {
        self.state.ready().map(PositionSections::current)
    }

    pub fn is_editing(&self, section: Section) -> bool {
        self.state
            .ready()
            .is_some_and(|sections| sections.is_editing(section))
    }

    pub fn is_any_editing(&self) -> bool {
        Section::ALL.iter().any(|&s| self.is_editing(s))
    }

    pub async fn load(&mut self, client: &PortalClient) {
        self.state = Loadable::Loading;
        self.error_banner = None;

        self.state = match fetch_details(client, self.position_id).await {
            Ok(Some(details)) => Loadable::Ready(PositionSections::new(details)),
            Ok(None) => {
                error!("Position {} has no stored revision", self.position_id);
                Loadable::Failed(POSITION_NOT_FOUND.to_string())
            }
            Err(e) => {
                error!("Failed to load position {}: {:#}", self.position_id, e);
                Loadable::Failed(POSITION_LOAD_ERROR.to_string())
            }
        };
    }

    pub fn begin_edit(&mut self, section: Section) -> Result<()> {
        let sections = self.sections_mut()?;
        match section {
            Section::Position => sections.position.begin_edit(),
            Section::Info => sections.info.begin_edit(),
            Section::Faqs => sections.faqs.begin_edit(),
        }
        Ok(())
    }

    /// Discard the section's draft, including added or removed items
    pub fn cancel(&mut self, section: Section) {
        if let Some(sections) = self.state.ready_mut() {
            cancel_section(sections, section);
        }
        if !self.is_any_editing() {
            self.error_banner = None;
        }
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.position_draft()?.position_title = title.to_string();
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<()> {
        self.position_draft()?.position_description = description.to_string();
        Ok(())
    }

    /// Append a blank fact and return its index
    pub fn add_info(&mut self) -> Result<usize> {
        let position_id = self.position_id;
        let draft = self.info_draft()?;
        let id = placeholder_id(draft.iter().map(|i| i.id));
        draft.push(PositionInfo::placeholder(id, position_id));
        Ok(draft.len() - 1)
    }

    pub fn update_info(
        &mut self,
        index: usize,
        subject: &str,
        answer: Option<&str>,
    ) -> Result<()> {
        let info = self
            .info_draft()?
            .get_mut(index)
            .with_context(|| format!("No position detail at index {}", index))?;
        info.subject = subject.to_string();
        info.answer = answer.map(str::to_string);
        Ok(())
    }

    pub fn remove_info(&mut self, index: usize) -> Result<PositionInfo> {
        let draft = self.info_draft()?;
        if index >= draft.len() {
            anyhow::bail!("No position detail at index {}", index);
        }
        Ok(draft.remove(index))
    }

    /// Append a blank FAQ and return its index
    pub fn add_faq(&mut self) -> Result<usize> {
        let position_id = self.position_id;
        let draft = self.faqs_draft()?;
        let id = placeholder_id(draft.iter().map(|f| f.id));
        draft.push(Faq::placeholder(id, position_id));
        Ok(draft.len() - 1)
    }

    pub fn update_faq(
        &mut self,
        index: usize,
        question: &str,
        response: Option<&str>,
    ) -> Result<()> {
        let faq = self
            .faqs_draft()?
            .get_mut(index)
            .with_context(|| format!("No FAQ at index {}", index))?;
        faq.question = question.to_string();
        faq.response = response.map(str::to_string);
        Ok(())
    }

    pub fn remove_faq(&mut self, index: usize) -> Result<Faq> {
        let draft = self.faqs_draft()?;
        if index >= draft.len() {
            anyhow::bail!("No FAQ at index {}", index);
        }
        Ok(draft.remove(index))
    }

    /// Submit the displayed bundle wholesale, then re-fetch.
    ///
    /// A rejected update keeps every draft and sets the error banner. After an
    /// accepted update the drafts are dropped even if the re-fetch fails.
    pub async fn save(&mut self, client: &PortalClient) -> Result<()> {
        if !self.is_any_editing() {
            anyhow::bail!("No section is being edited");
        }
        let details = self.details().context("Position is not loaded")?;

        if let Err(e) = client.update_position_details(self.position_id, &details).await {
            error!("Failed to save position {}: {:#}", self.position_id, e);
            self.error_banner = Some(POSITION_SAVE_ERROR.to_string());
            return Err(e);
        }
        info!("Saved position {}", self.position_id);

        let refreshed = fetch_details(client, self.position_id).await;
        let sections = self.sections_mut()?;
        match refreshed {
            Ok(Some(fresh)) => {
                sections.reset(fresh);
                self.error_banner = None;
                Ok(())
            }
            Ok(None) => {
                for section in Section::ALL {
                    cancel_section(sections, section);
                }
                self.error_banner = Some(POSITION_NOT_FOUND.to_string());
                anyhow::bail!("Position {} vanished after saving", self.position_id)
            }
            Err(e) => {
                for section in Section::ALL {
                    cancel_section(sections, section);
                }
                error!("Failed to reload position {}: {:#}", self.position_id, e);
                self.error_banner = Some(POSITION_LOAD_ERROR.to_string());
                Err(e.context("Saved, but failed to reload position"))
            }
        }
    }

    fn sections_mut(&mut self) -> Result<&mut PositionSections> {
        self.state.ready_mut().context("Position is not loaded")
    }

    fn position_draft(&mut self) -> Result<&mut Position> {
        self.sections_mut()?
            .position
            .draft_mut()
            .context("Position section is not being edited")
    }

    fn info_draft(&mut self) -> Result<&mut Vec<PositionInfo>> {
        self.sections_mut()?
            .info
            .draft_mut()
            .context("Position details section is not being edited")
    }

    fn faqs_draft(&mut self) -> Result<&mut Vec<Faq>> {
        self.sections_mut()?
            .faqs
            .draft_mut()
            .context("FAQ section is not being edited")
    }
}

fn cancel_section(sections: &mut PositionSections, section: Section) {
    match section {
        Section::Position => sections.position.cancel(),
        Section::Info => sections.info.cancel(),
        Section::Faqs => sections.faqs.cancel(),
    }
}

/// Temporary identities are negative so they never collide with server IDs
fn placeholder_id(existing: impl Iterator<Item = i64>) -> i64 {
    existing.min().unwrap_or(0).min(0) - 1
}

/// Latest revision of everything in the position bundle
pub(crate) async fn fetch_details(
    client: &PortalClient,
    position_id: i64,
) -> Result<Option<PositionDetails>> {
    let bundle = client.get_position_versions(position_id).await?;
    Ok(bundle.into_latest())
}
