//! Human-readable feedback derived from [`ShiftMetrics`].
//!
//! Two independent outputs come from the same metrics:
//!
//! - [`empathy_messages`]: every applicable encouragement, in rule order.
//! - [`badge_message`]: the single most severe status, or a positive tier.
//!
//! ## Badge evaluation
//!
//! ```text
//! recorded ≤ 7   ──▶ "no shifts recorded yet" | "just started recording"
//! recorded ≤ 14  ──▶ "still gathering data"
//! otherwise      ──▶ issues = [balance, streak, afternoon→morning, nights]
//!                    issues empty? ──▶ balance tier
//!                    else          ──▶ stable sort by severity desc, take first
//! ```

use crate::libs::messages::Message;
use crate::libs::metrics::ShiftMetrics;

/// How urgently a badge issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

/// A candidate badge with its severity.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub severity: Severity,
    pub message: Message,
}

impl Issue {
    fn new(severity: Severity, message: Message) -> Self {
        Issue { severity, message }
    }
}

/// Collects every applicable encouragement message in rule order.
///
/// `recorded_total` counts every shift ever recorded. With an empty history
/// only the default thanks is returned; an empty window over a non-empty
/// history still reports its low balance.
pub fn empathy_messages(metrics: &ShiftMetrics, period_text: &str, recorded_total: usize) -> Vec<String> {
    if recorded_total == 0 {
        return vec![Message::EmpathyThanks.to_string()];
    }

    let mut messages = Vec::new();

    if metrics.afternoon_to_morning_count > 0 {
        messages.push(Message::EmpathyAfternoonToMorning {
            period_text: period_text.to_string(),
            count: metrics.afternoon_to_morning_count,
        });
    }

    if metrics.night_shift_count as f64 > metrics.total_shifts as f64 * 0.3 {
        messages.push(Message::EmpathyFrequentNights);
    }

    if metrics.consecutive_work_days > 7 {
        messages.push(Message::EmpathyLongStreak(metrics.consecutive_work_days));
    }

    if metrics.work_life_balance < 20 {
        messages.push(Message::EmpathyLowBalance(metrics.work_life_balance));
    }

    if messages.is_empty() {
        messages.push(Message::EmpathyThanks);
    }

    messages.into_iter().map(|message| message.to_string()).collect()
}

/// Evaluates badge issues in fixed order. Earlier entries win severity ties.
pub fn collect_issues(metrics: &ShiftMetrics) -> Vec<Issue> {
    let mut issues = Vec::new();

    if metrics.work_life_balance < 20 {
        issues.push(Issue::new(Severity::Severe, Message::BadgeUrgentRest));
    } else if metrics.work_life_balance < 30 {
        issues.push(Issue::new(Severity::Moderate, Message::BadgeMoreRest));
    }

    if metrics.consecutive_work_days > 10 {
        issues.push(Issue::new(Severity::Severe, Message::BadgeTakeBreakSoon));
    } else if metrics.consecutive_work_days > 7 {
        issues.push(Issue::new(Severity::Moderate, Message::BadgeLongStreak));
    } else if metrics.consecutive_work_days > 5 {
        issues.push(Issue::new(Severity::Mild, Message::BadgeNearStreakLimit));
    }

    if metrics.afternoon_to_morning_count > 2 {
        issues.push(Issue::new(Severity::Severe, Message::BadgeTooManyAfternoonToMorning));
    } else if metrics.afternoon_to_morning_count > 0 {
        issues.push(Issue::new(Severity::Moderate, Message::BadgeAfternoonToMorning));
    }

    if metrics.total_shifts > 0 {
        let night_percentage = metrics.night_shift_count as f64 / metrics.total_shifts as f64 * 100.0;
        if night_percentage > 40.0 {
            issues.push(Issue::new(Severity::Severe, Message::BadgeTooManyNights));
        } else if night_percentage > 30.0 {
            issues.push(Issue::new(Severity::Moderate, Message::BadgeManyNights));
        }
    }

    issues
}

/// Picks the status badge.
///
/// `recorded_total` is the number of shifts ever recorded and only gates
/// how much data there is; the metrics describe the filtered window.
pub fn badge_message(metrics: &ShiftMetrics, recorded_total: usize) -> String {
    badge(metrics, recorded_total).to_string()
}

/// Same as [`badge_message`], before rendering.
pub fn badge(metrics: &ShiftMetrics, recorded_total: usize) -> Message {
    if recorded_total <= 7 {
        return if metrics.total_shifts == 0 {
            Message::BadgeNoShifts
        } else {
            Message::BadgeJustStarted
        };
    }

    if recorded_total <= 14 {
        return Message::BadgeGatheringData;
    }

    let mut issues = collect_issues(metrics);
    issues.sort_by(|a, b| b.severity.cmp(&a.severity));

    match issues.into_iter().next() {
        Some(issue) => issue.message,
        None if metrics.work_life_balance > 40 => Message::BadgeBalanceExcellent,
        None if metrics.work_life_balance > 30 => Message::BadgeBalanceGood,
        None => Message::BadgeBalanceNormal,
    }
}
