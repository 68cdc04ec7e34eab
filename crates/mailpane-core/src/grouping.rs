//! Recency bucketing for the message list.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::message::Message;

/// A named time-range group used to visually cluster the message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecencyBucket {
    /// Same calendar day as now.
    Today,
    /// The calendar day immediately preceding today.
    Yesterday,
    /// Within the 7 days before today, excluding today and yesterday.
    LastSevenDays,
    /// Same calendar year, not already bucketed above.
    EarlierThisYear,
    /// Everything else.
    Older,
}

impl RecencyBucket {
    /// Buckets in display order.
    pub const ORDER: [Self; 5] = [
        Self::Today,
        Self::Yesterday,
        Self::LastSevenDays,
        Self::EarlierThisYear,
        Self::Older,
    ];

    /// Section heading shown above the bucket.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastSevenDays => "Last 7 days",
            Self::EarlierThisYear => "Earlier this year",
            Self::Older => "Older",
        }
    }
}

/// Partitions messages into recency buckets evaluated against the current
/// time.
///
/// The input is expected to be already filtered and already sorted (most
/// recent first); relative order within a bucket follows the input. Buckets
/// come out in display order with empty buckets omitted. Every input message
/// lands in exactly one bucket.
#[must_use]
pub fn group_by_recency(messages: &[Message]) -> Vec<(RecencyBucket, Vec<Message>)> {
    group_by_recency_at(messages, Utc::now())
}

/// [`group_by_recency`] with an explicit "now", for deterministic callers.
#[must_use]
pub fn group_by_recency_at(
    messages: &[Message],
    now: DateTime<Utc>,
) -> Vec<(RecencyBucket, Vec<Message>)> {
    let today = now.date_naive();
    let mut grouped: Vec<(RecencyBucket, Vec<Message>)> = RecencyBucket::ORDER
        .iter()
        .map(|bucket| (*bucket, Vec::new()))
        .collect();

    for message in messages {
        let bucket = bucket_for(message.sent_at.date_naive(), today);
        if let Some((_, entries)) = grouped.iter_mut().find(|(b, _)| *b == bucket) {
            entries.push(message.clone());
        }
    }

    grouped.retain(|(_, entries)| !entries.is_empty());
    grouped
}

fn bucket_for(day: NaiveDate, today: NaiveDate) -> RecencyBucket {
    let yesterday = today.checked_sub_days(Days::new(1));
    let week_floor = today.checked_sub_days(Days::new(7));

    if day == today {
        RecencyBucket::Today
    } else if Some(day) == yesterday {
        RecencyBucket::Yesterday
    } else if week_floor.is_some_and(|floor| day >= floor && day < today) {
        RecencyBucket::LastSevenDays
    } else if day.year() == today.year() && day < today {
        RecencyBucket::EarlierThisYear
    } else {
        RecencyBucket::Older
    }
}
