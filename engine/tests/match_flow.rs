//! End-to-end: score a short match, then fold it into player records.

use wicket_engine::{
    new_innings, record_match, should_show_summary, BallOutcome, BattingLine, BowlingLine,
    InningNumber, Innings, Match, MatchPerformance, MatchStatus, MemoryPlayerStore, RosterPlayer,
    StatLine, SuperOver, Team, BALLS_PER_OVER,
};

fn team(id: &str, names: &[&str]) -> Team {
    let players = names
        .iter()
        .enumerate()
        .map(|(i, n)| RosterPlayer::new(format!("{}-{}", id, i + 1), *n))
        .collect();
    Team::new(id.to_uppercase(), players).with_id(id)
}

fn lions() -> Team {
    team("lions", &["Asha", "Ravi", "Mina"])
}

fn tigers() -> Team {
    team("tigers", &["Omar", "Lena", "Kai"])
}

fn performances(innings: &Innings) -> Vec<MatchPerformance> {
    let mut perfs: Vec<MatchPerformance> = innings
        .batting_team
        .playing11
        .iter()
        .map(|p| {
            let mut perf = MatchPerformance::new(p.player_id.clone(), p.name.clone()).batting(
                p.stats.runs,
                p.stats.balls,
                p.stats.fours,
                p.stats.sixes,
            );
            if p.stats.is_out {
                perf = perf.out();
            }
            perf
        })
        .collect();

    perfs.extend(innings.bowling_team.playing11.iter().map(|p| {
        MatchPerformance::new(p.player_id.clone(), p.name.clone()).bowling(
            p.stats.wickets,
            p.stats.overs * BALLS_PER_OVER + p.stats.balls,
            p.stats.runs_conceded,
        )
    }));
    perfs
}

#[test]
fn score_overs_and_trigger_summaries() {
    let first = new_innings(
        &lions(),
        &tigers(),
        &BattingLine::default(),
        &BowlingLine::default(),
        6,
    );
    let mut m = Match::new(first);
    m.match_status = MatchStatus::Live;

    let mut summaries = Vec::new();
    let mut highlights = 0;

    for over in 0..6 {
        for ball in 0..BALLS_PER_OVER {
            let outcome = match (over, ball) {
                (0, 0) => BallOutcome::runs(4).four(),
                (2, 5) => BallOutcome::runs(6).six(),
                (4, 3) => BallOutcome::wicket(),
                _ => BallOutcome::runs(1),
            };
            if outcome.is_highlight() {
                highlights += 1;
            }

            let innings = m.active_innings_mut().unwrap().unwrap();
            innings.record_delivery(&outcome);

            let innings = m.active_innings().unwrap();
            if should_show_summary(Some(&m), innings).unwrap() {
                summaries.push(innings.unwrap().current_overs);
            }
        }
    }

    assert_eq!(highlights, 3);
    // six-over innings summarise every three overs, but not at the end
    assert_eq!(summaries, vec![3]);

    let innings = m.active_innings().unwrap().unwrap();
    assert!(innings.is_complete());
    assert_eq!(innings.wickets, 1);
    assert_eq!(innings.total_runs, 4 + 6 + 33);
}

#[test]
fn super_over_is_scored_separately() {
    let mut m = Match::new(Innings::new(&lions(), &tigers(), 20));
    m.inning2 = Some(Innings::new(&tigers(), &lions(), 20));
    m.current_inning = InningNumber::Second;
    m.match_status = MatchStatus::Live;

    m.is_super_over = true;
    m.super_over = Some(SuperOver {
        current_inning: InningNumber::First,
        inning1: Some(Innings::new(&lions(), &tigers(), 1)),
        inning2: Some(Innings::new(&tigers(), &lions(), 1)),
    });

    m.active_innings_mut()
        .unwrap()
        .unwrap()
        .record_delivery(&BallOutcome::runs(6).six());

    assert_eq!(m.inning2.as_ref().unwrap().total_runs, 0);
    let so = m.super_over.as_ref().unwrap();
    assert_eq!(so.inning1.as_ref().unwrap().total_runs, 6);

    m.super_over.as_mut().unwrap().current_inning = InningNumber::Second;
    let active = m.active_innings().unwrap().unwrap();
    assert_eq!(active.batting_team.name, "TIGERS");
}

#[tokio::test]
async fn two_tournaments_keep_independent_bags() {
    let mut store = MemoryPlayerStore::new();

    let mut cup = Innings::new(&lions(), &tigers(), 20);
    {
        let asha = cup.batter_mut("lions-1").unwrap();
        asha.runs = 40;
        asha.balls = 30;
        asha.fours = 5;
        asha.is_out = true;
        let omar = cup.bowler_mut("tigers-1").unwrap();
        omar.overs = 4;
        omar.wickets = 1;
        omar.runs_conceded = 28;
    }

    let mut league = Innings::new(&lions(), &tigers(), 20);
    {
        let asha = league.batter_mut("lions-1").unwrap();
        asha.runs = 12;
        asha.balls = 9;
        asha.sixes = 1;
    }

    record_match(&mut store, &performances(&cup), Some("cup"))
        .await
        .unwrap();
    record_match(&mut store, &performances(&league), Some("league"))
        .await
        .unwrap();

    let asha = store.get("lions-1").unwrap();
    let cup_bag = asha.tournament("cup").unwrap();
    let league_bag = asha.tournament("league").unwrap();

    assert_eq!(cup_bag.runs, 40);
    assert_eq!(cup_bag.matches, 1);
    assert_eq!(cup_bag.dismissals, 1);
    assert_eq!(league_bag.runs, 12);
    assert_eq!(league_bag.sixes, 1);
    assert_eq!(league_bag.dismissals, 0);
    assert_eq!(asha.career_stats, *cup_bag + *league_bag);

    let omar = store.get("tigers-1").unwrap();
    assert_eq!(omar.career_stats.balls_bowled, 24);
    assert_eq!(omar.career_stats.wickets, 1);
    assert_eq!(omar.career_stats.matches, 2);
    assert_eq!(omar.tournament("league").unwrap().wickets, 0);

    assert_eq!(store.len(), 6);
}

#[tokio::test]
async fn career_only_without_tournament() {
    let mut store = MemoryPlayerStore::new();
    let perfs = vec![MatchPerformance::new("p1", "Asha").batting(9, 9, 1, 0)];

    record_match(&mut store, &perfs, None).await.unwrap();

    let record = store.get("p1").unwrap();
    assert!(record.tournament_stats.is_empty());
    assert_eq!(
        record.career_stats,
        StatLine {
            matches: 1,
            runs: 9,
            balls_faced: 9,
            fours: 1,
            ..StatLine::zero()
        }
    );
}
