// src/render.rs
//! Plain-text rendering of the portal views

use std::fmt;

use crate::types::{Faq, Job, PositionDetails, PositionInfo};
use crate::utils::{format_timestamp, text_or};
use crate::views::{
    CandidateView, ChatState, JobsView, Loadable, PositionView, Section, MAX_QUESTION_LENGTH,
};

const NOT_ANSWERED: &str = "Not answered yet";
const NOT_AVAILABLE: &str = "Information not available";

/// Job listing table
pub struct JobsPage<'a>(pub &'a JobsView);

/// Employer page of one position
pub struct PositionPage<'a>(pub &'a PositionView);

/// Candidate page with the question form
pub struct CandidatePage<'a>(pub &'a CandidateView);

pub fn render_jobs(view: &JobsView) -> String {
    JobsPage(view).to_string()
}

pub fn render_position(view: &PositionView) -> String {
    PositionPage(view).to_string()
}

pub fn render_candidate(view: &CandidateView) -> String {
    CandidatePage(view).to_string()
}

impl fmt::Display for JobsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "Jobs (company {})", view.company_id())?;

        match view.state() {
            Loadable::Loading => writeln!(f, "Loading jobs..."),
            Loadable::Failed(message) => writeln!(f, "{}", message),
            Loadable::Ready(jobs) if jobs.is_empty() => writeln!(f, "No jobs found"),
            Loadable::Ready(jobs) => {
                writeln!(
                    f,
                    "{:<8} {:<40} {:>5} {:>6} {:<20} {:<8} {:<12}",
                    "ID", "Job title", "New", "Total", "Location", "Status", "Created on"
                )?;
                writeln!(f, "{}", "-".repeat(105))?;
                for job in jobs {
                    writeln!(f, "{}", job_row(job))?;
                }
                Ok(())
            }
        }
    }
}

fn job_row(job: &Job) -> String {
    let title = match job.remote {
        Some(true) => format!("{} (remote)", job.title),
        _ => job.title.clone(),
    };
    format!(
        "{:<8} {:<40} {:>5} {:>6} {:<20} {:<8} {:<12}",
        job.id,
        title,
        job.new_candidates,
        job.total_candidates,
        job.location,
        job.status,
        job.created_on
    )
}

impl fmt::Display for PositionPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let details = match view.state() {
            Loadable::Loading => return writeln!(f, "Loading position details..."),
            Loadable::Failed(message) => return writeln!(f, "{}", message),
            Loadable::Ready(_) => match view.details() {
                Some(details) => details,
                None => return Ok(()),
            },
        };

        if let Some(banner) = view.error_banner() {
            writeln!(f, "!! {}", banner)?;
        }

        let position = &details.position;
        writeln!(f, "== Position Information{} ==", editing_tag(view, Section::Position))?;
        writeln!(f, "Title:       {}", position.position_title)?;
        writeln!(
            f,
            "Version:     {} (last updated {})",
            position.version,
            format_timestamp(position.modified_at(), &position.timestamp)
        )?;
        writeln!(f, "Description:")?;
        for line in position.position_description.lines() {
            writeln!(f, "  {}", line)?;
        }

        writeln!(f)?;
        writeln!(f, "== Position Details{} ==", editing_tag(view, Section::Info))?;
        if details.position_info.is_empty() {
            writeln!(f, "No position details available")?;
        }
        for (index, info) in details.position_info.iter().enumerate() {
            write!(f, "{}", info_block(index, info))?;
        }

        writeln!(f)?;
        writeln!(f, "== Frequently Asked Questions{} ==", editing_tag(view, Section::Faqs))?;
        if details.position_faqs.is_empty() {
            writeln!(f, "No FAQs available")?;
        }
        for (index, faq) in details.position_faqs.iter().enumerate() {
            write!(f, "{}", faq_block(index, faq))?;
        }

        Ok(())
    }
}

fn editing_tag(view: &PositionView, section: Section) -> &'static str {
    if view.is_editing(section) {
        " [editing]"
    } else {
        ""
    }
}

fn info_block(index: usize, info: &PositionInfo) -> String {
    format!(
        "[{}] {}\n    {}\n    Version: {}  Last updated: {}\n",
        index,
        info.subject,
        text_or(info.answer.as_deref(), NOT_ANSWERED),
        info.version,
        format_timestamp(info.modified_at(), &info.timestamp)
    )
}

fn faq_block(index: usize, faq: &Faq) -> String {
    let mut flags = Vec::new();
    if faq.generated_by_user {
        flags.push("User Generated");
    }
    if faq.answered_by_hr {
        flags.push("HR Answered");
    }

    let mut block = format!(
        "[{}] {}\n    {}\n    Version: {}  Times Asked: {}  Last updated: {}\n",
        index,
        faq.question,
        text_or(faq.response.as_deref(), NOT_ANSWERED),
        faq.version,
        faq.times_asked,
        format_timestamp(faq.modified_at(), &faq.timestamp)
    );
    if !flags.is_empty() {
        block.push_str(&format!("    ({})\n", flags.join(", ")));
    }
    block
}

impl fmt::Display for CandidatePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        match view.state() {
            Loadable::Loading => writeln!(f, "Loading position details...")?,
            Loadable::Failed(message) => writeln!(f, "{}", message)?,
            Loadable::Ready(details) => write_candidate_details(f, details)?,
        }

        let question = view.question();
        if question.is_empty() && view.chat() == &ChatState::Idle {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "== Ask About This Position ==")?;
        writeln!(f, "Your question: {}", question)?;
        writeln!(
            f,
            "{}/{} characters",
            question.chars().count(),
            MAX_QUESTION_LENGTH
        )?;
        match view.chat() {
            ChatState::Idle => Ok(()),
            ChatState::Rejected => writeln!(f, "Please enter a question before submitting."),
            ChatState::Answered(answer) => writeln!(f, "Response: {}", answer),
            ChatState::Failed(message) => writeln!(f, "{}", message),
        }
    }
}

fn write_candidate_details(f: &mut fmt::Formatter<'_>, details: &PositionDetails) -> fmt::Result {
    writeln!(f, "== {} ==", details.position.position_title)?;
    for line in details.position.position_description.lines() {
        writeln!(f, "{}", line)?;
    }

    if !details.position_info.is_empty() {
        writeln!(f)?;
        writeln!(f, "== Position Details ==")?;
        for info in &details.position_info {
            writeln!(f, "* {}", info.subject)?;
            writeln!(f, "  {}", text_or(info.answer.as_deref(), NOT_AVAILABLE))?;
        }
    }

    Ok(())
}
