use chrono::{Datelike, TimeZone, Timelike, Utc, Weekday};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::domain::PostFrequency;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// 2025-06-02 is a Monday.
fn monday() -> DateTime<Utc> {
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    assert_eq!(start.weekday(), Weekday::Mon);
    start
}

fn blueprint(duration: u32, post_frequency: PostFrequency) -> CampaignBlueprint {
    CampaignBlueprint {
        name: "Summer Push".to_string(),
        duration,
        post_frequency,
        ..Default::default()
    }
}

fn structure(len: usize) -> Vec<ContentTemplate> {
    (0..len)
        .map(|i| ContentTemplate {
            content_type: Some("post".to_string()),
            theme: format!("T{}", i + 1),
            primary_message: format!("message {}", i + 1),
            ..Default::default()
        })
        .collect()
}

#[test]
fn daily_frequency_fills_every_day() {
    let generator = CalendarGenerator::new();

    for duration in [7u32, 14, 30, 90] {
        let bp = blueprint(duration, PostFrequency::Daily);
        let calendar = generator.generate_calendar(&bp, monday(), &mut rng());
        assert_eq!(calendar.len(), duration as usize);
    }
}

#[test]
fn unrecognized_duration_considers_fourteen_days() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(21, PostFrequency::Daily);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());
    assert_eq!(calendar.len(), 14);
}

#[test]
fn weekly_frequency_posts_once_per_week_on_monday() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(30, PostFrequency::Weekly);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    // Mondays at day offsets 0, 7, 14, 21, 28.
    assert_eq!(calendar.len(), 5);
    for entry in &calendar {
        assert_eq!(entry.date.weekday(), Weekday::Mon);
    }
}

#[test]
fn thrice_weekly_over_two_weeks_from_monday_yields_six_entries() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(14, PostFrequency::ThriceWeekly);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    assert_eq!(calendar.len(), 6);
    for entry in &calendar {
        assert!(matches!(
            entry.date.weekday(),
            Weekday::Mon | Weekday::Wed | Weekday::Fri
        ));
    }
}

#[test]
fn entries_are_strictly_increasing_by_date() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(30, PostFrequency::WeekdaysOnly);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    for pair in calendar.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn round_robin_uses_raw_day_offset() {
    let generator = CalendarGenerator::new();
    let mut bp = blueprint(7, PostFrequency::Daily);
    bp.content_structure = structure(3);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    assert_eq!(calendar.len(), 7);
    for (day, entry) in calendar.iter().enumerate() {
        assert_eq!(entry.theme, format!("T{}", day % 3 + 1));
    }
}

#[test]
fn round_robin_advances_over_skipped_days() {
    let generator = CalendarGenerator::new();
    let mut bp = blueprint(14, PostFrequency::TwiceWeekly);
    bp.content_structure = structure(2);

    // Posting days from a Monday start are offsets 0, 3, 7, 10; the
    // rotation follows the offsets, not the emission count.
    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    let themes: Vec<&str> = calendar.iter().map(|e| e.theme.as_str()).collect();
    assert_eq!(themes, ["T1", "T2", "T2", "T1"]);
}

#[test]
fn weekly_blueprint_with_two_templates_end_to_end() {
    let generator = CalendarGenerator::new();
    let mut bp = blueprint(7, PostFrequency::Weekly);
    bp.content_structure = structure(2);

    let start = monday();
    let calendar = generator.generate_calendar(&bp, start, &mut rng());

    assert_eq!(calendar.len(), 1);
    assert_eq!(calendar[0].date, start);
    // Day 0 mod 2 selects the first template.
    assert_eq!(calendar[0].theme, "T1");
}

#[test]
fn template_entries_default_type_and_hashtag_group() {
    let generator = CalendarGenerator::new();
    let mut bp = blueprint(7, PostFrequency::Daily);
    bp.content_structure = vec![ContentTemplate {
        theme: "bare".to_string(),
        ..Default::default()
    }];

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    assert_eq!(calendar[0].content_type, "post");
    assert_eq!(calendar[0].hashtag_group, "general");
}

#[test]
fn posting_times_follow_the_weekday_table() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(7, PostFrequency::Daily);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    let times: Vec<&str> = calendar.iter().map(|e| e.time_of_day.as_str()).collect();
    // Monday through Sunday.
    assert_eq!(
        times,
        ["12:00", "17:00", "12:00", "17:00", "12:00", "11:00", "15:00"]
    );
}

#[test]
fn stages_are_monotonic_within_one_generation() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(90, PostFrequency::Daily);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    for pair in calendar.windows(2) {
        assert!(pair[0].stage <= pair[1].stage);
    }
    assert_eq!(calendar.first().unwrap().stage, CampaignStage::Awareness);
    assert_eq!(calendar.last().unwrap().stage, CampaignStage::Retention);
}

#[test]
fn default_entries_fall_back_to_post_and_stock_caption() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(7, PostFrequency::Daily);

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    for (day, entry) in calendar.iter().enumerate() {
        assert_eq!(entry.content_type, "post");
        assert_eq!(entry.theme, "Summer Push");
        assert_eq!(entry.primary_message, format!("Summer Push - Day {}", day + 1));
        assert_eq!(entry.caption_template, FALLBACK_CAPTION);
        assert_eq!(entry.hashtag_group, "general");
        assert!(entry.visual_elements.is_empty());
    }
}

#[test]
fn default_entries_draw_from_blueprint_pools() {
    let generator = CalendarGenerator::new();
    let mut bp = blueprint(14, PostFrequency::Daily);
    bp.content_types = vec!["story".to_string(), "reel".to_string()];
    bp.caption_templates = vec!["caption A".to_string(), "caption B".to_string()];

    let calendar = generator.generate_calendar(&bp, monday(), &mut rng());

    for entry in &calendar {
        assert!(bp.content_types.contains(&entry.content_type));
        assert!(bp.caption_templates.contains(&entry.caption_template));
    }
}

#[test]
fn seeded_generation_is_deterministic() {
    let generator = CalendarGenerator::new();
    let mut bp = blueprint(30, PostFrequency::Daily);
    bp.content_types = vec!["post".to_string(), "story".to_string(), "reel".to_string()];
    bp.caption_templates = vec!["A".to_string(), "B".to_string()];

    let first = generator.generate_calendar(&bp, monday(), &mut rng());
    let second = generator.generate_calendar(&bp, monday(), &mut rng());

    assert_eq!(first, second);
}

#[test]
fn start_time_of_day_is_preserved_on_entry_dates() {
    let generator = CalendarGenerator::new();
    let bp = blueprint(7, PostFrequency::Daily);

    let start = monday();
    let calendar = generator.generate_calendar(&bp, start, &mut rng());

    // Day arithmetic shifts whole days; the weekday test ignores the
    // time-of-day component.
    assert_eq!(calendar[0].date.hour(), start.hour());
}

#[test]
fn create_campaign_applies_overrides_over_blueprint_defaults() {
    let generator = CalendarGenerator::new();
    let mut bp = blueprint(14, PostFrequency::Daily);
    bp.id = Some(Uuid::new_v4());
    bp.kpis = vec!["Reach".to_string()];

    let overrides = CampaignOverrides {
        name: Some("Override Name".to_string()),
        budget: Some(500.0),
        platforms: Some(vec!["tiktok".to_string()]),
        ..Default::default()
    };

    let user_id = Uuid::new_v4();
    let campaign = generator.create_campaign(&bp, user_id, monday(), overrides, &mut rng());

    assert_eq!(campaign.name, "Override Name");
    assert_eq!(campaign.budget, 500.0);
    assert_eq!(campaign.platforms, vec!["tiktok".to_string()]);
    // Unset overrides fall back to the blueprint.
    assert_eq!(campaign.kpis, vec!["Reach".to_string()]);
    assert_eq!(campaign.currency, "USD");
    assert_eq!(campaign.status, CampaignStatus::Planning);
    assert_eq!(campaign.user_id, user_id);
    assert_eq!(campaign.blueprint_id, bp.id);
    assert_eq!(campaign.content_calendar.len(), 14);
}

#[test]
fn create_campaign_end_date_uses_raw_duration() {
    let generator = CalendarGenerator::new();
    // 21 is not a recognized duration: the calendar covers 14 days but
    // the campaign window keeps the literal 21-day length.
    let bp = blueprint(21, PostFrequency::Daily);

    let start = monday();
    let campaign =
        generator.create_campaign(&bp, Uuid::new_v4(), start, Default::default(), &mut rng());

    assert_eq!(campaign.end_date, start + TimeDelta::days(21));
    assert_eq!(campaign.content_calendar.len(), 14);
}
