//! Edge case tests for wicket-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use serde_json::json;
use wicket_engine::{
    active_innings, aggregate, record_match, should_show_summary, summary_interval, Error,
    Innings, InningNumber, Match, MatchPerformance, MatchStatus, MemoryPlayerStore,
    RosterPlayer, StatLine, StatsBatch, StoreSnapshot, SuperOver, Team,
};

fn team(prefix: &str) -> Team {
    let players = (1..=11)
        .map(|i| RosterPlayer::new(format!("{}{}", prefix, i), format!("{} player {}", prefix, i)))
        .collect();
    Team::new(prefix, players)
}

fn innings_at(total_overs: u32, current_overs: u32, current_over_balls: u32) -> Innings {
    let mut innings = Innings::new(&team("a"), &team("b"), total_overs);
    innings.current_overs = current_overs;
    innings.current_over_balls = current_over_balls;
    innings
}

fn live_match() -> Match {
    let mut m = Match::new(innings_at(20, 0, 0));
    m.match_status = MatchStatus::Live;
    m
}

// ============================================================================
// Match State Edge Cases
// ============================================================================

#[test]
fn second_innings_selected() {
    let mut m = live_match();
    let mut second = innings_at(20, 0, 0);
    second.total_runs = 42;
    m.inning2 = Some(second);
    m.current_inning = InningNumber::Second;

    assert_eq!(active_innings(Some(&m)).unwrap().unwrap().total_runs, 42);
}

#[test]
fn super_over_first_innings_selected() {
    let mut m = live_match();
    let mut so = innings_at(1, 0, 0);
    so.total_runs = 13;
    m.is_super_over = true;
    m.super_over = Some(SuperOver {
        current_inning: InningNumber::First,
        inning1: Some(so),
        inning2: None,
    });

    assert_eq!(active_innings(Some(&m)).unwrap().unwrap().total_runs, 13);
}

#[test]
fn super_over_state_ignored_when_flag_unset() {
    let mut m = live_match();
    m.super_over = Some(SuperOver::new());

    let active = active_innings(Some(&m)).unwrap().unwrap();
    assert_eq!(active.total_overs, 20);
}

#[test]
fn out_of_range_inning_rejected_on_load() {
    let result = serde_json::from_value::<Match>(json!({
        "currentInning": 0,
        "isSuperOver": false
    }));
    assert!(result.is_err());

    let result = serde_json::from_value::<Match>(json!({
        "currentInning": 1,
        "isSuperOver": true,
        "superOver": {"currentInning": 5}
    }));
    assert!(result.is_err());
}

#[test]
fn match_json_roundtrip() {
    let mut m = live_match();
    m.is_super_over = true;
    m.super_over = Some(SuperOver::new());

    let json = serde_json::to_string(&m).unwrap();
    let parsed: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(m, parsed);
}

// ============================================================================
// Summary Edge Cases
// ============================================================================

#[test]
fn completed_match_never_summarises() {
    let mut m = live_match();
    m.match_status = MatchStatus::Completed;

    for overs in 1..20 {
        let innings = innings_at(20, overs, 0);
        assert_eq!(should_show_summary(Some(&m), Some(&innings)), Ok(false));
    }
}

#[test]
fn t20_summaries_every_five_overs() {
    let m = live_match();
    let shown: Vec<u32> = (0..=20)
        .filter(|&o| should_show_summary(Some(&m), Some(&innings_at(20, o, 0))).unwrap())
        .collect();
    assert_eq!(shown, vec![5, 10, 15]);
}

#[test]
fn odi_summaries_every_ten_overs() {
    let m = live_match();
    let shown: Vec<u32> = (0..=50)
        .filter(|&o| should_show_summary(Some(&m), Some(&innings_at(50, o, 0))).unwrap())
        .collect();
    assert_eq!(shown, vec![10, 20, 30, 40]);
}

#[test]
fn six_over_game_every_three_overs() {
    let m = live_match();
    assert_eq!(summary_interval(6), 3);
    assert_eq!(should_show_summary(Some(&m), Some(&innings_at(6, 3, 0))), Ok(true));
    assert_eq!(should_show_summary(Some(&m), Some(&innings_at(6, 6, 0))), Ok(false));
}

#[test]
fn zero_over_innings() {
    let m = live_match();
    assert_eq!(should_show_summary(Some(&m), Some(&innings_at(0, 0, 0))), Ok(false));
    assert_eq!(
        should_show_summary(Some(&m), Some(&innings_at(0, 3, 0))),
        Err(Error::ZeroSummaryInterval { total_overs: 0 })
    );
}

// ============================================================================
// Aggregation Edge Cases
// ============================================================================

#[test]
fn null_player_id_resolves_to_none() {
    let perfs: Vec<MatchPerformance> =
        serde_json::from_value(json!([{"playerId": null, "runs": 10}])).unwrap();
    assert_eq!(aggregate(&perfs, Some("t1")), None);
}

#[test]
fn all_fields_missing_but_id() {
    let perfs: Vec<MatchPerformance> = serde_json::from_value(json!([{"playerId": "p1"}])).unwrap();
    let batch = aggregate(&perfs, Some("t1")).unwrap();

    assert!(batch.upserts[0].career.is_zero());
    assert_eq!(batch.upserts[0].name, None);
}

#[tokio::test]
async fn duplicate_entries_for_one_player_both_count() {
    let perfs = vec![
        MatchPerformance::new("p1", "Ann").batting(10, 5, 1, 0),
        MatchPerformance::new("p1", "Ann").batting(5, 5, 0, 0),
    ];
    let mut store = MemoryPlayerStore::new();
    let ack = record_match(&mut store, &perfs, None).await.unwrap().unwrap();

    assert_eq!(ack.applied, 2);
    assert_eq!(ack.created_players.len(), 1);
    assert_eq!(store.get("p1").unwrap().career_stats.runs, 15);
    assert_eq!(store.get("p1").unwrap().career_stats.matches, 2);
}

#[test]
fn large_counters_saturate() {
    let mut store = MemoryPlayerStore::new();
    let mut big = StatLine::zero();
    big.runs = u64::MAX;

    let batch = StatsBatch {
        tournament_id: None,
        upserts: vec![
            wicket_engine::PlayerUpsert::new("p1", None, big),
            wicket_engine::PlayerUpsert::new("p1", None, big),
        ],
    };
    store.apply_batch(&batch).unwrap();

    assert_eq!(store.get("p1").unwrap().career_stats.runs, u64::MAX);
}

// ============================================================================
// ID Edge Cases
// ============================================================================

#[tokio::test]
async fn ids_with_special_characters() {
    let ids = ["player/with/slashes", "player.with.dots", "日本語", "🏏", "a b c"];
    let perfs: Vec<_> = ids
        .iter()
        .map(|id| MatchPerformance::new(*id, "x").batting(1, 1, 0, 0))
        .collect();

    let mut store = MemoryPlayerStore::new();
    record_match(&mut store, &perfs, Some("cup.2026/final"))
        .await
        .unwrap();

    for id in ids {
        let record = store.get(id).unwrap();
        assert_eq!(record.tournament("cup.2026/final").unwrap().runs, 1);
    }
}

// ============================================================================
// Snapshot Edge Cases
// ============================================================================

#[test]
fn snapshot_empty_store() {
    let store = MemoryPlayerStore::new();
    let snapshot = store.export_state();
    assert_eq!(snapshot.player_count(), 0);

    let json = snapshot.to_json().unwrap();
    let restored = StoreSnapshot::from_json(&json).unwrap();
    assert_eq!(restored.player_count(), 0);
}

#[test]
fn snapshot_invalid_json() {
    let result = StoreSnapshot::from_json("{not json");
    assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
}
