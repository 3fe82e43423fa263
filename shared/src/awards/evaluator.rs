//! Award evaluation
//!
//! The evaluator never records anything itself. The `satisfied_by_*` methods
//! return the ids whose rules hold; the `check_*` methods additionally offer
//! each of those ids to an [`UnlockSink`] and report only the ones the sink
//! accepted as new. Both walk definitions in catalog order and return ids in
//! that order.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::{AwardCatalog, AwardDefinition, AwardKind, AwardRule, Difficulty, Metric};
use crate::calculations::{aggregate, AggregateStats};
use crate::models::{Entry, Settings, UnlockRecord};
use crate::streaks::current_streak_on;

/// Highest progress shown for an award that is not unlocked yet
pub const MAX_LOCKED_PROGRESS: f64 = 0.99;

/// Receiver for unlock events
///
/// Implementations must be idempotent: return `true` only the first time an
/// id is unlocked and `false` for every later call with the same id. Any
/// persistence happens before returning.
pub trait UnlockSink {
    fn unlock(&mut self, award_id: &str, date: NaiveDate) -> bool;
}

impl<F> UnlockSink for F
where
    F: FnMut(&str, NaiveDate) -> bool,
{
    fn unlock(&mut self, award_id: &str, date: NaiveDate) -> bool {
        self(award_id, date)
    }
}

/// One award merged with the user's unlock state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardStatus {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub kind: AwardKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub achieved: bool,
    /// Fraction of the threshold reached, capped at [`MAX_LOCKED_PROGRESS`];
    /// only set for locked cumulative awards when totals were supplied
    pub progress: Option<f64>,
    pub current_value: Option<f64>,
    pub date: Option<NaiveDate>,
    pub viewed: bool,
    pub difficulty: Difficulty,
}

/// Unlocked vs. available award totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwardCount {
    pub unlocked: usize,
    pub total: usize,
}

/// Ids newly unlocked by a full history evaluation, per family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub entry: Vec<&'static str>,
    pub streak: Vec<&'static str>,
    pub cumulative: Vec<&'static str>,
}

impl EvaluationReport {
    /// All newly unlocked ids: entry, then streak, then cumulative
    pub fn all(&self) -> Vec<&'static str> {
        self.entry
            .iter()
            .chain(&self.streak)
            .chain(&self.cumulative)
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entry.len() + self.streak.len() + self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluates award rules against a catalog
#[derive(Debug, Clone, Copy)]
pub struct AwardEvaluator<'c> {
    catalog: &'c AwardCatalog,
}

impl Default for AwardEvaluator<'static> {
    fn default() -> Self {
        Self::new(AwardCatalog::standard())
    }
}

impl<'c> AwardEvaluator<'c> {
    pub fn new(catalog: &'c AwardCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c AwardCatalog {
        self.catalog
    }

    /// Look up a definition by id
    pub fn find(&self, id: &str) -> Option<&'c AwardDefinition> {
        self.catalog.find(id)
    }

    // ------------------------------------------------------------------------
    // Rule satisfaction
    // ------------------------------------------------------------------------

    /// Entry awards whose predicate holds for this entry
    pub fn satisfied_by_entry(&self, entry: &Entry, settings: &Settings) -> Vec<&'static str> {
        self.catalog
            .entry_awards()
            .iter()
            .filter(|def| match def.rule {
                AwardRule::Entry(rule) => rule.matches(entry, settings),
                _ => false,
            })
            .map(|def| def.id)
            .collect()
    }

    /// Streak awards reached by a streak of `streak` days
    pub fn satisfied_by_streak(&self, streak: u32) -> Vec<&'static str> {
        self.catalog
            .streak_awards()
            .iter()
            .filter(|def| matches!(def.rule, AwardRule::Streak { days } if streak >= days))
            .map(|def| def.id)
            .collect()
    }

    /// Cumulative awards whose metric total meets the threshold
    pub fn satisfied_by_totals(&self, stats: &AggregateStats) -> Vec<&'static str> {
        self.catalog
            .cumulative_awards()
            .iter()
            .filter(|def| match def.rule {
                AwardRule::Cumulative { metric, threshold } => metric.value_in(stats) >= threshold,
                _ => false,
            })
            .map(|def| def.id)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Unlocking
    // ------------------------------------------------------------------------

    /// Offer every entry award the entry satisfies to the sink, stamped with
    /// the entry's date
    pub fn check_entry<S>(&self, entry: &Entry, settings: &Settings, sink: &mut S) -> Vec<&'static str>
    where
        S: UnlockSink + ?Sized,
    {
        unlock_each(self.satisfied_by_entry(entry, settings), entry.date, sink)
    }

    /// Offer every streak award reached to the sink, stamped with `today`
    pub fn check_streak<S>(&self, streak: u32, today: NaiveDate, sink: &mut S) -> Vec<&'static str>
    where
        S: UnlockSink + ?Sized,
    {
        unlock_each(self.satisfied_by_streak(streak), today, sink)
    }

    /// Offer every cumulative award reached to the sink, stamped with `today`
    pub fn check_cumulative<S>(&self, stats: &AggregateStats, today: NaiveDate, sink: &mut S) -> Vec<&'static str>
    where
        S: UnlockSink + ?Sized,
    {
        unlock_each(self.satisfied_by_totals(stats), today, sink)
    }

    /// Evaluate a whole history: every entry oldest first, then the current
    /// streak, then lifetime totals
    ///
    /// Run after loading data so awards added to the catalog later are
    /// credited for activity that already happened.
    pub fn evaluate_history<S>(
        &self,
        entries: &[Entry],
        settings: &Settings,
        today: NaiveDate,
        sink: &mut S,
    ) -> EvaluationReport
    where
        S: UnlockSink + ?Sized,
    {
        let mut chronological: Vec<&Entry> = entries.iter().collect();
        chronological.sort_by_key(|e| e.date);

        let mut report = EvaluationReport::default();
        for entry in chronological {
            report.entry.extend(self.check_entry(entry, settings, sink));
        }

        let streak = current_streak_on(entries, settings.daily_step_goal, settings.include_weekends, today);
        report.streak = self.check_streak(streak, today, sink);

        let stats = aggregate(entries);
        report.cumulative = self.check_cumulative(&stats, today, sink);

        debug!(
            entries = entries.len(),
            streak,
            newly_unlocked = report.len(),
            "award history evaluated"
        );
        report
    }

    // ------------------------------------------------------------------------
    // Status views
    // ------------------------------------------------------------------------

    /// Every award with achieved flag, unlock date, difficulty and, for
    /// locked cumulative awards when `stats` is given, progress
    pub fn status_for_all(&self, unlocked: &[UnlockRecord], stats: Option<&AggregateStats>) -> Vec<AwardStatus> {
        let by_id: HashMap<&str, &UnlockRecord> =
            unlocked.iter().map(|r| (r.award_id.as_str(), r)).collect();

        self.catalog
            .iter()
            .map(|def| {
                let record = by_id.get(def.id).copied();
                let achieved = record.is_some();

                let (progress, current_value) = match (achieved, stats, def.rule) {
                    (false, Some(stats), AwardRule::Cumulative { metric, threshold }) if threshold > 0.0 => {
                        let value = metric.value_in(stats);
                        (Some((value / threshold).min(MAX_LOCKED_PROGRESS)), Some(value))
                    }
                    _ => (None, None),
                };

                AwardStatus {
                    id: def.id,
                    title: def.title,
                    description: def.description,
                    icon: def.icon,
                    kind: def.kind(),
                    metric: def.metric(),
                    threshold: def.threshold(),
                    achieved,
                    progress,
                    current_value,
                    date: record.map(|r| r.date_unlocked),
                    viewed: record.map_or(false, |r| r.viewed),
                    difficulty: def.difficulty(),
                }
            })
            .collect()
    }

    /// How many awards are unlocked out of the catalog total
    ///
    /// Trusts `unlocked` to hold one record per id.
    pub fn count(&self, unlocked: &[UnlockRecord]) -> AwardCount {
        AwardCount {
            unlocked: unlocked.len(),
            total: self.catalog.len(),
        }
    }
}

fn unlock_each<S>(ids: Vec<&'static str>, date: NaiveDate, sink: &mut S) -> Vec<&'static str>
where
    S: UnlockSink + ?Sized,
{
    ids.into_iter()
        .filter(|id| {
            let is_new = sink.unlock(id, date);
            if is_new {
                debug!(award_id = id, %date, "award unlocked");
            }
            is_new
        })
        .collect()
}
