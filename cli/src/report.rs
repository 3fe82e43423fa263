//! Plain-text rendering of statistics and awards

use chrono::NaiveDate;
use std::fmt;

use step_awards_shared::calculations::{goal_percentage, week_bounds};
use step_awards_shared::{
    aggregate, entries_in_range, streak_summary, AggregateStats, AwardCount, AwardEvaluator, AwardStatus, Difficulty,
    PersonalRecords, Settings, StreakSummary, TrackerData, UnitSystem,
};

/// Everything the `summary` command prints
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub today: NaiveDate,
    pub today_steps: u32,
    pub goal: u32,
    pub lifetime: AggregateStats,
    pub this_week: AggregateStats,
    pub week: (NaiveDate, NaiveDate),
    pub streaks: StreakSummary,
    pub records: PersonalRecords,
    pub awards: AwardCount,
    pub units: UnitSystem,
}

impl Summary {
    pub fn build(data: &TrackerData, settings: &Settings, today: NaiveDate) -> Self {
        let week = week_bounds(today);

        let mut records = data.records;
        for entry in &data.entries {
            records.update(entry);
        }

        Self {
            today,
            today_steps: data.entries.iter().find(|e| e.date == today).map_or(0, |e| e.steps),
            goal: settings.effective_goal(),
            lifetime: aggregate(&data.entries),
            this_week: aggregate(&entries_in_range(&data.entries, week.0, week.1)),
            week,
            streaks: streak_summary(&data.entries, settings, today),
            records,
            awards: AwardEvaluator::default().count(&data.awards),
            units: settings.units,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Today ({}): {} steps, {}% of {} goal",
            self.today,
            format_number(u64::from(self.today_steps)),
            goal_percentage(u64::from(self.today_steps), self.goal),
            format_number(u64::from(self.goal)),
        )?;
        writeln!(f)?;
        writeln!(f, "This week ({} to {})", self.week.0, self.week.1)?;
        write_stats(f, &self.this_week, self.units)?;
        writeln!(f)?;
        writeln!(f, "Lifetime")?;
        write_stats(f, &self.lifetime, self.units)?;
        writeln!(f)?;
        writeln!(f, "Current streak: {} days (best {})", self.streaks.current, self.streaks.best)?;
        writeln!(
            f,
            "Records: {} steps, {}, {}",
            format_number(u64::from(self.records.most_steps_day)),
            format_duration(u64::from(self.records.longest_session_minutes)),
            self.units.format_distance(self.records.longest_distance_km),
        )?;
        write!(f, "Awards: {} of {} unlocked", self.awards.unlocked, self.awards.total)
    }
}

fn write_stats(f: &mut fmt::Formatter<'_>, stats: &AggregateStats, units: UnitSystem) -> fmt::Result {
    writeln!(
        f,
        "  {} steps over {} days (avg {})",
        format_number(stats.total_steps),
        stats.days_count,
        format_number(stats.average_steps),
    )?;
    writeln!(
        f,
        "  {}, {} kcal, {} active",
        units.format_distance(stats.total_distance_km),
        format_number(stats.total_calories),
        format_duration(stats.total_time_minutes),
    )?;
    if let Some(best) = &stats.best_day {
        writeln!(f, "  Best day: {} with {} steps", best.date, format_number(u64::from(best.steps)))?;
    }
    Ok(())
}

/// Award list grouped by difficulty, easiest first
pub fn render_awards(statuses: &[AwardStatus], only: Option<Difficulty>) -> String {
    let mut out = String::new();

    for level in Difficulty::ALL.into_iter().filter(|d| only.map_or(true, |o| o == *d)) {
        let group: Vec<&AwardStatus> = statuses.iter().filter(|s| s.difficulty == level).collect();
        if group.is_empty() {
            continue;
        }
        let achieved = group.iter().filter(|s| s.achieved).count();

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("== {} ({}/{}) ==\n", level, achieved, group.len()));
        for status in group {
            out.push_str(&award_line(status));
            out.push('\n');
        }
    }

    out
}

fn award_line(status: &AwardStatus) -> String {
    let mark = if status.achieved { "[x]" } else { "[ ]" };
    let detail = match (status.date, status.progress) {
        (Some(date), _) => format!("  unlocked {}", date),
        (None, Some(progress)) => format!("  {}%", (progress * 100.0).floor() as u32),
        (None, None) => String::new(),
    };
    format!("  {} {} {}: {}{}", mark, status.icon, status.title, status.description, detail)
}

/// Lines announcing newly unlocked awards
pub fn render_unlocked(ids: &[&str]) -> String {
    if ids.is_empty() {
        return "No new awards.\n".to_string();
    }

    let evaluator = AwardEvaluator::default();
    let mut out = format!("{} new award{} unlocked:\n", ids.len(), if ids.len() == 1 { "" } else { "s" });
    for id in ids {
        match evaluator.find(id) {
            Some(def) => out.push_str(&format!("  {} {} ({})\n", def.icon, def.title, def.difficulty())),
            None => out.push_str(&format!("  {}\n", id)),
        }
    }
    out
}

/// Group digits with commas: 1234567 -> "1,234,567"
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Minutes as `Xh Ym`, or `Ym` under an hour
pub fn format_duration(minutes: u64) -> String {
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
