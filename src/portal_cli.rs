// src/portal_cli.rs
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::{ConfigManager, PortalClient};
use crate::render::{render_candidate, render_jobs, render_position};
use crate::utils::parse_key_value;
use crate::views::{CandidateView, ChatState, JobsView, Loadable, PositionView, Section};

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Browse job openings, curate position Q&A and ask questions as a candidate")]
pub struct PortalCli {
    #[command(subcommand)]
    pub command: PortalCommand,

    /// YAML file with `local` and `production` profiles
    #[arg(long, global = true, default_value = "portal.yaml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum PortalCommand {
    /// List the company's job openings
    Jobs {
        /// Company to list; defaults to the configured company
        #[arg(long)]
        company: Option<i64>,
    },
    /// Employer view of a position with its details and FAQs
    Position { position_id: i64 },
    /// Candidate view of a position
    Candidate { position_id: i64 },
    /// Ask a question about a position as a candidate
    Ask { position_id: i64, question: String },
    /// Edit a position and save it
    Edit(EditArgs),
}

#[derive(Args)]
pub struct EditArgs {
    pub position_id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// New position detail as SUBJECT=ANSWER
    #[arg(long = "add-info", value_parser = parse_key_value)]
    pub add_info: Vec<(String, String)>,

    /// Index of a position detail to remove, as listed by `portal position`
    #[arg(long = "remove-info")]
    pub remove_info: Vec<usize>,

    /// New FAQ question
    #[arg(long = "add-faq")]
    pub add_faq: Vec<String>,

    /// Index of a FAQ to remove, as listed by `portal position`
    #[arg(long = "remove-faq")]
    pub remove_faq: Vec<usize>,

    /// Show the edited position, then discard the changes
    #[arg(long)]
    pub dry_run: bool,
}

impl EditArgs {
    fn sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();
        if self.title.is_some() || self.description.is_some() {
            sections.push(Section::Position);
        }
        if !self.add_info.is_empty() || !self.remove_info.is_empty() {
            sections.push(Section::Info);
        }
        if !self.add_faq.is_empty() || !self.remove_faq.is_empty() {
            sections.push(Section::Faqs);
        }
        sections
    }
}

pub async fn handle_portal_command(
    command: PortalCommand,
    config: &ConfigManager,
    client: &PortalClient,
) -> Result<()> {
    match command {
        PortalCommand::Jobs { company } => {
            let company_id = company.unwrap_or(config.company_id);
            let mut view = JobsView::new(company_id);
            view.load(client).await;
            print!("{}", render_jobs(&view));
            if view.state().error().is_some() {
                anyhow::bail!("Jobs for company {} are unavailable", company_id);
            }
        }

        PortalCommand::Position { position_id } => {
            let mut view = PositionView::new(position_id);
            view.load(client).await;
            print!("{}", render_position(&view));
            if view.state().error().is_some() {
                anyhow::bail!("Position {} is unavailable", position_id);
            }
        }

        PortalCommand::Candidate { position_id } => {
            let mut view = CandidateView::new(position_id);
            view.load(client).await;
            print!("{}", render_candidate(&view));
            if view.state().error().is_some() {
                anyhow::bail!("Position {} is unavailable", position_id);
            }
        }

        PortalCommand::Ask {
            position_id,
            question,
        } => {
            let mut view = CandidateView::new(position_id);
            view.load(client).await;
            if view.state().error().is_some() {
                print!("{}", render_candidate(&view));
                anyhow::bail!("Position {} is unavailable, question not sent", position_id);
            }

            view.set_question(&question);
            let outcome = view.submit(client).await.clone();
            print!("{}", render_candidate(&view));
            match outcome {
                ChatState::Rejected => anyhow::bail!("Question is empty, nothing was sent"),
                ChatState::Failed(_) => anyhow::bail!("No answer for position {}", position_id),
                ChatState::Idle | ChatState::Answered(_) => {}
            }
        }

        PortalCommand::Edit(args) => edit_position(args, client).await?,
    }

    Ok(())
}

async fn edit_position(args: EditArgs, client: &PortalClient) -> Result<()> {
    let sections = args.sections();
    if sections.is_empty() {
        anyhow::bail!("Nothing to edit: pass at least one change");
    }

    let mut view = PositionView::new(args.position_id);
    view.load(client).await;
    if let Loadable::Failed(message) = view.state() {
        anyhow::bail!("{}", message);
    }

    for &section in &sections {
        view.begin_edit(section)?;
        info!("Editing {} of position {}", section.label(), args.position_id);
    }

    if let Some(title) = &args.title {
        view.set_title(title)?;
    }
    if let Some(description) = &args.description {
        view.set_description(description)?;
    }

    // Highest index first so the remaining indices still match the listing
    let mut remove_info = args.remove_info.clone();
    remove_info.sort_unstable_by(|a, b| b.cmp(a));
    remove_info.dedup();
    for index in remove_info {
        view.remove_info(index)?;
    }

    let mut remove_faq = args.remove_faq.clone();
    remove_faq.sort_unstable_by(|a, b| b.cmp(a));
    remove_faq.dedup();
    for index in remove_faq {
        view.remove_faq(index)?;
    }

    for (subject, answer) in &args.add_info {
        let index = view.add_info()?;
        view.update_info(index, subject, Some(answer.as_str()))?;
    }
    for question in &args.add_faq {
        let index = view.add_faq()?;
        view.update_faq(index, question, None)?;
    }

    if args.dry_run {
        print!("{}", render_position(&view));
        for section in sections {
            view.cancel(section);
        }
        println!("Dry run: changes discarded");
        return Ok(());
    }

    let saved = view.save(client).await;
    print!("{}", render_position(&view));
    saved
}
