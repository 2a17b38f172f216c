//! Listing service for project cards.

use std::cmp::Ordering;

use rayon::prelude::*;

use super::types::{PortfolioTotals, ProjectCard, ProjectLedger, ProjectListEntry};
use crate::summary::SummaryService;

/// Service ordering projects and computing their card totals.
pub struct ListingService;

impl ListingService {
    /// Display order of two projects.
    ///
    /// Pinned projects come first by ascending `order`; the rest follow
    /// newest first. Remaining ties fall back to creation time, then ID.
    #[must_use]
    pub fn compare_projects(a: &ProjectCard, b: &ProjectCard) -> Ordering {
        let primary = match (a.order, b.order) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        primary
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Sorts projects into display order.
    pub fn sort_projects(projects: &mut [ProjectCard]) {
        projects.sort_by(Self::compare_projects);
    }

    /// Computes card totals for each project and returns them in display order.
    #[must_use]
    pub fn build_entries(ledgers: &[ProjectLedger]) -> Vec<ProjectListEntry> {
        let mut entries: Vec<ProjectListEntry> = ledgers
            .par_iter()
            .map(|ledger| {
                let totals = SummaryService::summarize_for_list(&ledger.expenses);
                let remaining = SummaryService::remaining(ledger.project.budget, totals.total_spent);
                ProjectListEntry {
                    project: ledger.project.clone(),
                    totals,
                    remaining,
                }
            })
            .collect();

        entries.sort_by(|a, b| Self::compare_projects(&a.project, &b.project));
        entries
    }

    /// Sums card totals across projects.
    #[must_use]
    pub fn portfolio_totals(entries: &[ProjectListEntry]) -> PortfolioTotals {
        entries
            .iter()
            .fold(PortfolioTotals::default(), |mut portfolio, entry| {
                portfolio.project_count += 1;
                if let Some(budget) = entry.project.budget {
                    portfolio.budgeted_project_count += 1;
                    portfolio.total_budget += budget;
                }
                portfolio.totals.merge(&entry.totals);
                portfolio
            })
    }
}
