use crate::models::{CategoryCount, DashboardStats, DayPoint, Task, WeeklyBasis, CATEGORIES};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const RECENT_LIMIT: usize = 7;
const TRAILING_DAYS: i64 = 7;

pub fn build_stats(tasks: &[Task], basis: WeeklyBasis) -> DashboardStats {
    build_stats_at(Local::now(), tasks, basis)
}

/// Computes every dashboard figure from one snapshot of the task list.
///
/// Day boundaries are taken in `now`'s time zone.
pub fn build_stats_at<Tz: TimeZone>(
    now: DateTime<Tz>,
    tasks: &[Task],
    basis: WeeklyBasis,
) -> DashboardStats {
    let tz = now.timezone();
    let today = now.date_naive();
    let now_ms = now.timestamp_millis();

    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();

    let today_start = start_of_day(&tz, today);
    let today_count = tasks
        .iter()
        .filter(|task| task.id >= today_start && task.id <= now_ms)
        .count();

    let mut recent = tasks.to_vec();
    recent.sort_by(|a, b| b.id.cmp(&a.id));
    recent.truncate(RECENT_LIMIT);

    let categories = CATEGORIES
        .iter()
        .map(|category| CategoryCount {
            category: category.to_string(),
            count: tasks.iter().filter(|task| task.category == *category).count(),
        })
        .collect();

    let mut last_7_days = Vec::with_capacity(TRAILING_DAYS as usize);
    for offset in (0..TRAILING_DAYS).rev() {
        let date = today - Duration::days(offset);
        let start = start_of_day(&tz, date);
        let end = start + DAY_MS - 1;
        let count = tasks
            .iter()
            .filter(|task| task.completed)
            .filter(|task| {
                let at = completion_key(task, basis);
                at >= start && at <= end
            })
            .count();
        last_7_days.push(DayPoint {
            date: date.format("%Y-%m-%d").to_string(),
            label: date.format("%a").to_string(),
            completed: count,
        });
    }

    DashboardStats {
        total,
        completed,
        pending: total - completed,
        today: today_count,
        completion_pct: completion_pct(completed, total),
        recent,
        categories,
        last_7_days,
        weekly_basis: basis,
    }
}

/// `round(completed / total * 100)`, or 0 for an empty list.
pub fn completion_pct(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u8
}

// No completion time is recorded under `Created`, so creation day stands in.
fn completion_key(task: &Task, basis: WeeklyBasis) -> i64 {
    match basis {
        WeeklyBasis::Created => task.id,
        WeeklyBasis::Completion => task.completed_at.unwrap_or(task.id),
    }
}

/// First instant of `date` in `tz`, in epoch milliseconds.
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return start.timestamp_millis();
    }
    // Midnight skipped by a DST jump: use the first valid quarter hour.
    (1..=96)
        .find_map(|quarter| {
            tz.from_local_datetime(&(midnight + Duration::minutes(15 * quarter)))
                .earliest()
        })
        .map(|start| start.timestamp_millis())
        .unwrap_or_else(|| midnight.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
    }

    fn task(id: i64, category: &str, completed: bool) -> Task {
        let mut task = Task::new(id, format!("task {id}"), category);
        task.completed = completed;
        task
    }

    #[test]
    fn two_task_scenario() {
        let tasks = vec![task(1000, "Work", true), task(2000, "Study", false)];
        let stats = build_stats_at(at(2026, 1, 5, 12, 0), &tasks, WeeklyBasis::Created);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completion_pct, 50);
        let counts: Vec<(&str, usize)> = stats
            .categories
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect();
        assert_eq!(
            counts,
            vec![("Work", 1), ("Study", 1), ("Personal", 0), ("General", 0)]
        );
    }

    #[test]
    fn empty_store_scenario() {
        let stats = build_stats_at(at(2026, 1, 5, 12, 0), &[], WeeklyBasis::Created);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.today, 0);
        assert_eq!(stats.completion_pct, 0);
        assert!(stats.recent.is_empty());
        assert_eq!(stats.last_7_days.len(), 7);
        assert!(stats.last_7_days.iter().all(|day| day.completed == 0));
    }

    #[test]
    fn completion_pct_rounds_and_stays_in_range() {
        assert_eq!(completion_pct(0, 0), 0);
        assert_eq!(completion_pct(1, 3), 33);
        assert_eq!(completion_pct(2, 3), 67);
        assert_eq!(completion_pct(1, 8), 13);
        assert_eq!(completion_pct(5, 5), 100);
        for total in 1..50 {
            for completed in 0..=total {
                assert!(completion_pct(completed, total) <= 100);
            }
        }
    }

    #[test]
    fn unknown_categories_fall_outside_every_bucket() {
        let tasks = vec![task(1, "Work", false), task(2, "Errands", false)];
        let stats = build_stats_at(at(2026, 1, 5, 12, 0), &tasks, WeeklyBasis::Created);
        let bucketed: usize = stats.categories.iter().map(|c| c.count).sum();
        assert_eq!(bucketed, 1);
        assert!(bucketed < stats.total);
    }

    #[test]
    fn today_counts_from_midnight_to_now() {
        let now = at(2026, 1, 5, 12, 0);
        let tasks = vec![
            task(at(2026, 1, 5, 0, 0).timestamp_millis(), "Work", false),
            task(at(2026, 1, 5, 11, 59).timestamp_millis(), "Work", false),
            task(at(2026, 1, 4, 23, 59).timestamp_millis(), "Work", false),
            task(at(2026, 1, 5, 12, 1).timestamp_millis(), "Work", false),
        ];
        let stats = build_stats_at(now, &tasks, WeeklyBasis::Created);
        assert_eq!(stats.today, 2);
    }

    #[test]
    fn day_boundaries_follow_local_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        // 01:30 on Jan 5 at UTC+2, still Jan 4 in UTC.
        let created = at(2026, 1, 4, 23, 30).timestamp_millis();
        let stats = build_stats_at(now, &[task(created, "Work", true)], WeeklyBasis::Created);

        assert_eq!(stats.today, 1);
        let last = stats.last_7_days.last().unwrap();
        assert_eq!(last.date, "2026-01-05");
        assert_eq!(last.completed, 1);
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let tasks: Vec<Task> = (1..=10).map(|id| task(id, "Work", false)).collect();
        let stats = build_stats_at(at(2026, 1, 5, 12, 0), &tasks, WeeklyBasis::Created);
        let ids: Vec<i64> = stats.recent.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn recent_keeps_insertion_order_for_equal_ids() {
        let mut first = task(5, "Work", false);
        first.text = "first".into();
        let mut second = task(5, "Work", false);
        second.text = "second".into();
        let stats = build_stats_at(
            at(2026, 1, 5, 12, 0),
            &[first, second],
            WeeklyBasis::Created,
        );
        assert_eq!(stats.recent[0].text, "first");
        assert_eq!(stats.recent[1].text, "second");
    }

    #[test]
    fn trailing_week_counts_completed_by_creation_day() {
        let now = at(2026, 1, 5, 12, 0);
        let tasks = vec![
            task(at(2026, 1, 3, 8, 0).timestamp_millis(), "Work", true),
            task(at(2026, 1, 3, 23, 59).timestamp_millis(), "Study", true),
            task(at(2026, 1, 3, 9, 0).timestamp_millis(), "Study", false),
            task(at(2025, 12, 29, 10, 0).timestamp_millis(), "Work", true),
            task(at(2025, 12, 28, 10, 0).timestamp_millis(), "Work", true),
        ];
        let stats = build_stats_at(now, &tasks, WeeklyBasis::Created);

        let dates: Vec<&str> = stats.last_7_days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2025-12-30",
                "2025-12-31",
                "2026-01-01",
                "2026-01-02",
                "2026-01-03",
                "2026-01-04",
                "2026-01-05"
            ]
        );
        let counts: Vec<usize> = stats.last_7_days.iter().map(|d| d.completed).collect();
        assert_eq!(counts, vec![0, 0, 0, 0, 2, 0, 0]);
        assert_eq!(stats.last_7_days[6].label, "Mon");
    }

    #[test]
    fn completion_basis_uses_completed_at_with_creation_fallback() {
        let now = at(2026, 1, 5, 12, 0);
        let mut stamped = task(at(2026, 1, 1, 8, 0).timestamp_millis(), "Work", true);
        stamped.completed_at = Some(at(2026, 1, 4, 18, 0).timestamp_millis());
        let unstamped = task(at(2026, 1, 2, 8, 0).timestamp_millis(), "Work", true);
        let tasks = vec![stamped, unstamped];

        let created = build_stats_at(now, &tasks, WeeklyBasis::Created);
        let counts: Vec<usize> = created.last_7_days.iter().map(|d| d.completed).collect();
        assert_eq!(counts, vec![0, 0, 1, 1, 0, 0, 0]);

        let completion = build_stats_at(now, &tasks, WeeklyBasis::Completion);
        let counts: Vec<usize> = completion.last_7_days.iter().map(|d| d.completed).collect();
        assert_eq!(counts, vec![0, 0, 0, 1, 0, 1, 0]);
        assert_eq!(completion.weekly_basis, WeeklyBasis::Completion);
    }

    #[test]
    fn skipped_midnight_starts_at_first_valid_instant() {
        use chrono_tz::America::Sao_Paulo;

        // Clocks jumped from 00:00 to 01:00 (-02:00) on this date.
        let date = NaiveDate::from_ymd_opt(2018, 11, 4).unwrap();
        let expected = at(2018, 11, 4, 3, 0).timestamp_millis();
        assert_eq!(start_of_day(&Sao_Paulo, date), expected);
        assert_eq!(expected, 1_541_300_400_000);

        let now = Sao_Paulo.with_ymd_and_hms(2018, 11, 4, 12, 0, 0).unwrap();
        let tasks = vec![
            task(expected - 1, "Work", true),
            task(expected, "Work", true),
        ];
        let stats = build_stats_at(now, &tasks, WeeklyBasis::Created);
        assert_eq!(stats.today, 1);
        let counts: Vec<usize> = stats.last_7_days.iter().map(|d| d.completed).collect();
        assert_eq!(counts, vec![0, 0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn counts_always_balance() {
        let tasks: Vec<Task> = (0..9).map(|id| task(id, "Work", id % 3 == 0)).collect();
        let stats = build_stats_at(at(2026, 1, 5, 12, 0), &tasks, WeeklyBasis::Created);
        assert_eq!(stats.completed + stats.pending, stats.total);
        assert_eq!(stats.completion_pct, 33);
    }
}
