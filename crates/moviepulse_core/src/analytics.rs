//! crates/moviepulse_core/src/analytics.rs
//!
//! Opinion-store roll-ups as pure functions over an opinion slice. The
//! Postgres adapter computes the same shapes in SQL; the in-memory store
//! delegates here.
//!
//! Calendar bucketing is parameterised by time zone. The service buckets in
//! the deployment-local zone; tests pass UTC.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::domain::{
    AnalyticsReport, BucketCount, CategoryDayKey, DayKey, Opinion, OpinionCategory, Sentiment,
};

/// How far the daily trend windows reach back.
const TREND_WINDOW_DAYS: i64 = 30;

/// How many rows the top-N roll-ups keep.
const TOP_N: usize = 10;

/// The full roll-up, bucketing calendar days in the deployment-local zone.
pub fn summarize(opinions: &[Opinion], now: DateTime<Utc>) -> AnalyticsReport {
    summarize_in(opinions, now, &chrono::Local)
}

/// The full roll-up with an explicit bucketing zone.
pub fn summarize_in<Tz: TimeZone>(
    opinions: &[Opinion],
    now: DateTime<Utc>,
    tz: &Tz,
) -> AnalyticsReport {
    let since = now - Duration::days(TREND_WINDOW_DAYS);

    AnalyticsReport {
        total_opinions: opinions.len() as u64,
        category_breakdown: label_counts(opinions, &OpinionCategory::ALL, |o| o.category),
        sentiment_analysis: label_counts(opinions, &Sentiment::ALL, |o| o.sentiment),
        regional_distribution: top_regions(opinions),
        time_data: daily_counts(opinions, since, tz),
        category_trends: category_daily_counts(opinions, since, tz),
    }
}

/// Top-10 tags by frequency, tags expanded one-per-row before grouping.
pub fn trending_tags(opinions: &[Opinion]) -> Vec<BucketCount<String>> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for opinion in opinions {
        for tag in &opinion.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    top_n(counts)
}

/// Grouped counts over a closed label set; labels nothing matched are
/// dropped, as the database grouping would drop them.
fn label_counts<T: Copy + PartialEq>(
    opinions: &[Opinion],
    labels: &[T],
    key: impl Fn(&Opinion) -> T,
) -> Vec<BucketCount<T>> {
    labels
        .iter()
        .filter_map(|&label| {
            let count = opinions.iter().filter(|o| key(o) == label).count() as u64;
            (count > 0).then_some(BucketCount { id: label, count })
        })
        .collect()
}

fn top_regions(opinions: &[Opinion]) -> Vec<BucketCount<String>> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for opinion in opinions {
        if let Some(region) = opinion.demographics.region.as_deref() {
            *counts.entry(region).or_default() += 1;
        }
    }
    top_n(counts)
}

/// Descending by count, capped at `TOP_N`. Ties settle alphabetically so
/// repeated calls agree.
fn top_n(counts: HashMap<&str, u64>) -> Vec<BucketCount<String>> {
    let mut rows: Vec<(&str, u64)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows.truncate(TOP_N);
    rows.into_iter()
        .map(|(id, count)| BucketCount {
            id: id.to_owned(),
            count,
        })
        .collect()
}

fn day_key<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> DayKey {
    let local = timestamp.with_timezone(tz);
    DayKey {
        year: local.year(),
        month: local.month(),
        day: local.day(),
    }
}

fn daily_counts<Tz: TimeZone>(
    opinions: &[Opinion],
    since: DateTime<Utc>,
    tz: &Tz,
) -> Vec<BucketCount<DayKey>> {
    let mut buckets: BTreeMap<DayKey, u64> = BTreeMap::new();
    for opinion in opinions.iter().filter(|o| o.created_at >= since) {
        *buckets.entry(day_key(&opinion.created_at, tz)).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(id, count)| BucketCount { id, count })
        .collect()
}

fn category_daily_counts<Tz: TimeZone>(
    opinions: &[Opinion],
    since: DateTime<Utc>,
    tz: &Tz,
) -> Vec<BucketCount<CategoryDayKey>> {
    // Keyed by (day, category label) so rows come out chronologically, with
    // same-day ties in label order, the same sort the SQL adapter produces.
    let mut buckets: BTreeMap<(DayKey, &'static str), (OpinionCategory, u64)> = BTreeMap::new();
    for opinion in opinions.iter().filter(|o| o.created_at >= since) {
        let day = day_key(&opinion.created_at, tz);
        let entry = buckets
            .entry((day, opinion.category.as_str()))
            .or_insert((opinion.category, 0));
        entry.1 += 1;
    }
    buckets
        .into_iter()
        .map(|((day, _), (category, count))| BucketCount {
            id: CategoryDayKey {
                category,
                year: day.year,
                month: day.month,
                day: day.day,
            },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Demographics;
    use chrono::TimeZone as _;
    use uuid::Uuid;

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
    }

    fn opinion(category: OpinionCategory, created_at: DateTime<Utc>) -> Opinion {
        Opinion {
            id: Uuid::new_v4(),
            category,
            question: "Favourite release this year?".to_owned(),
            answer: "No strong feelings".to_owned(),
            user_id: "viewer-1".to_owned(),
            demographics: Demographics::default(),
            sentiment: Sentiment::Neutral,
            impact: 1,
            created_at,
            tags: Vec::new(),
        }
    }

    #[test]
    fn category_breakdown_matches_as_a_set() {
        let now = at(2024, 3, 30);
        let opinions = vec![
            opinion(OpinionCategory::Film, at(2024, 3, 10)),
            opinion(OpinionCategory::Film, at(2024, 3, 11)),
            opinion(OpinionCategory::Television, at(2024, 3, 12)),
        ];
        let report = summarize_in(&opinions, now, &Utc);

        assert_eq!(report.total_opinions, 3);
        let mut breakdown = report.category_breakdown;
        breakdown.sort_by_key(|row| row.id.as_str());
        assert_eq!(
            breakdown,
            vec![
                BucketCount {
                    id: OpinionCategory::Film,
                    count: 2
                },
                BucketCount {
                    id: OpinionCategory::Television,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn regions_exclude_missing_and_rank_descending() {
        let now = at(2024, 3, 30);
        let mut opinions = Vec::new();
        for (region, copies) in [("Midwest", 3), ("South", 1)] {
            for _ in 0..copies {
                let mut o = opinion(OpinionCategory::Film, at(2024, 3, 10));
                o.demographics = Demographics {
                    region: Some(region.to_owned()),
                    ..Demographics::default()
                };
                opinions.push(o);
            }
        }
        opinions.push(opinion(OpinionCategory::Film, at(2024, 3, 10)));

        let report = summarize_in(&opinions, now, &Utc);
        let regions: Vec<(String, u64)> = report
            .regional_distribution
            .into_iter()
            .map(|row| (row.id, row.count))
            .collect();
        assert_eq!(
            regions,
            vec![("Midwest".to_owned(), 3), ("South".to_owned(), 1)]
        );
    }

    #[test]
    fn daily_trend_is_windowed_and_chronological() {
        let now = at(2024, 3, 30);
        let opinions = vec![
            opinion(OpinionCategory::Film, at(2024, 1, 1)), // outside the window
            opinion(OpinionCategory::Film, at(2024, 3, 20)),
            opinion(OpinionCategory::Film, at(2024, 3, 5)),
            opinion(OpinionCategory::Film, at(2024, 3, 5)),
        ];
        let report = summarize_in(&opinions, now, &Utc);

        let days: Vec<(u32, u64)> = report
            .time_data
            .iter()
            .map(|row| (row.id.day, row.count))
            .collect();
        assert_eq!(days, vec![(5, 2), (20, 1)]);
    }

    #[test]
    fn category_trends_bucket_per_category_per_day() {
        let now = at(2024, 3, 30);
        let opinions = vec![
            opinion(OpinionCategory::Film, at(2024, 3, 5)),
            opinion(OpinionCategory::Television, at(2024, 3, 5)),
            opinion(OpinionCategory::Film, at(2024, 3, 5)),
        ];
        let report = summarize_in(&opinions, now, &Utc);

        assert_eq!(report.category_trends.len(), 2);
        assert_eq!(report.category_trends[0].id.category, OpinionCategory::Film);
        assert_eq!(report.category_trends[0].count, 2);
        assert_eq!(
            report.category_trends[1].id.category,
            OpinionCategory::Television
        );
    }

    #[test]
    fn trending_expands_tags_and_caps_at_ten() {
        let now = at(2024, 3, 10);
        let mut opinions = Vec::new();
        for i in 0..12 {
            let mut o = opinion(OpinionCategory::YouTube, now);
            o.tags = vec![format!("tag-{i:02}"), "shared".to_owned()];
            opinions.push(o);
        }

        let trending = trending_tags(&opinions);
        assert_eq!(trending.len(), 10);
        assert_eq!(trending[0].id, "shared");
        assert_eq!(trending[0].count, 12);
    }

    #[test]
    fn empty_store_summarizes_to_empty_report() {
        let report = summarize_in(&[], at(2024, 3, 10), &Utc);
        assert_eq!(report.total_opinions, 0);
        assert!(report.category_breakdown.is_empty());
        assert!(report.time_data.is_empty());
    }
}
