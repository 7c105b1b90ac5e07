//! Statistics and scoreboard throughput over full-length games.
//!
//! Run with: cargo bench -p sb_core

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sb_core::stats::{batting_lines, team_batting};
use sb_core::{
    AtBat, GameInfo, GameRules, GameState, HitResult, Player, Scoreboard, ScoresheetResponse,
    Team,
};

const CYCLE: [HitResult; 8] = [
    HitResult::CenterHit,
    HitResult::Strikeout,
    HitResult::Walk,
    HitResult::GroundOutShort,
    HitResult::Double,
    HitResult::FlyOutLeft,
    HitResult::SacrificeFly,
    HitResult::HomeRun,
];

fn roster(prefix: &str) -> Vec<Player> {
    (1..=12).map(|n| Player::new(format!("{prefix} {n}")).with_id(format!("{prefix}{n}"))).collect()
}

/// A game with `per_team` at-bats on each side spread over seven innings.
fn build_game(per_team: usize) -> GameState {
    let home = Team::new("Home", roster("h")).with_id("home");
    let away = Team::new("Away", roster("a")).with_id("away");
    let date = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap_or_default();
    let mut game = GameState::new(home, away, GameInfo::new(date));

    for i in 0..per_team {
        let inning = (i * 7 / per_team.max(1)) as u32 + 1;
        let result = CYCLE[i % CYCLE.len()];
        let rbi = if result == HitResult::HomeRun { 2 } else { 0 };
        let slot = i % 12 + 1;
        game.home_team.at_bats.push(AtBat::new(format!("h{slot}"), inning, result).with_rbi(rbi));
        game.away_team.at_bats.push(AtBat::new(format!("a{slot}"), inning, result).with_rbi(rbi));
    }
    game
}

fn bench_batting(c: &mut Criterion) {
    let mut group = c.benchmark_group("batting");
    for size in [30usize, 120, 500] {
        let game = build_game(size);
        group.bench_with_input(BenchmarkId::new("lines", size), &game, |b, game| {
            b.iter(|| batting_lines(black_box(&game.home_team)))
        });
        group.bench_with_input(BenchmarkId::new("team_totals", size), &game, |b, game| {
            b.iter(|| team_batting(black_box(&game.away_team)))
        });
    }
    group.finish();
}

fn bench_scoreboard(c: &mut Criterion) {
    let game = build_game(60);
    let rules = GameRules::default();
    c.bench_function("scoreboard_7_innings", |b| {
        b.iter(|| Scoreboard::for_game(black_box(&game), &rules))
    });
    c.bench_function("scoresheet_response", |b| {
        b.iter(|| ScoresheetResponse::build(black_box(&game), &rules))
    });
}

criterion_group!(benches, bench_batting, bench_scoreboard);
criterion_main!(benches);
