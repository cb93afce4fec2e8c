// src/views/jobs.rs
use anyhow::Result;
use tracing::{error, info, warn};

use super::Loadable;
use crate::core::portal_client::{is_not_found, PortalClient};
use crate::types::Job;

pub const JOBS_LOAD_ERROR: &str = "Failed to load jobs";

/// Company job table
pub struct JobsView {
    company_id: i64,
    state: Loadable<Vec<Job>>,
}

impl JobsView {
    pub fn new(company_id: i64) -> Self {
        Self {
            company_id,
            state: Loadable::Loading,
        }
    }

    pub fn company_id(&self) -> i64 {
        self.company_id
    }

    pub fn state(&self) -> &Loadable<Vec<Job>> {
        &self.state
    }

    /// Rows to display; empty unless the last load succeeded
    pub fn jobs(&self) -> &[Job] {
        self.state.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub async fn load(&mut self, client: &PortalClient) {
        self.state = Loadable::Loading;

        self.state = match fetch_jobs(client, self.company_id).await {
            Ok(jobs) => {
                info!("Loaded {} jobs for company {}", jobs.len(), self.company_id);
                Loadable::Ready(jobs)
            }
            Err(e) => {
                error!("Failed to load jobs for company {}: {:#}", self.company_id, e);
                Loadable::Failed(JOBS_LOAD_ERROR.to_string())
            }
        };
    }
}

/// Prefer the jobs endpoint; project positions into rows where it does not exist
async fn fetch_jobs(client: &PortalClient, company_id: i64) -> Result<Vec<Job>> {
    match client.list_company_jobs(company_id).await {
        Ok(jobs) => Ok(jobs),
        Err(e) if is_not_found(&e) => {
            warn!(
                "Jobs endpoint unavailable for company {}, projecting positions",
                company_id
            );
            let bundles = client.list_company_positions(company_id).await?;
            Ok(bundles.into_iter().filter_map(Job::from_bundle).collect())
        }
        Err(e) => Err(e),
    }
}
