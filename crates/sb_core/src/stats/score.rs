use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::GameRules;
use crate::models::{GameState, HitResult, RunEvent, Team, TeamSide};

/// RBI across the team's at-bats plus run events from its batting half.
///
/// `is_away_team` selects the half: run events with `is_top == true` belong to
/// the away club, the rest to the home club.
pub fn total_score(team: &Team, run_events: &[RunEvent], is_away_team: bool) -> u32 {
    let batted: u32 = team.at_bats.iter().map(|ab| ab.rbi).sum();
    let extra: u32 =
        run_events.iter().filter(|e| e.is_top == is_away_team).map(|e| e.run_count).sum();
    batted + extra
}

pub fn inning_score(team: &Team, run_events: &[RunEvent], inning: u32, is_away_team: bool) -> u32 {
    let batted: u32 =
        team.at_bats.iter().filter(|ab| ab.inning == inning).map(|ab| ab.rbi).sum();
    let extra: u32 = run_events
        .iter()
        .filter(|e| e.is_top == is_away_team && e.inning == inning)
        .map(|e| e.run_count)
        .sum();
    batted + extra
}

pub fn hits(team: &Team) -> u32 {
    team.at_bats.iter().filter(|ab| ab.result.is_hit()).count() as u32
}

/// At-bats on which the team reached on an error.
pub fn errors(team: &Team) -> u32 {
    team.at_bats.iter().filter(|ab| ab.result == HitResult::Error).count() as u32
}

/// One team's row of the line score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineScore {
    pub team: String,
    /// Runs per inning; `None` for a half that has not started.
    pub innings: Vec<Option<u32>>,
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scoreboard {
    pub away: LineScore,
    pub home: LineScore,
}

impl Scoreboard {
    pub fn for_game(game: &GameState, rules: &GameRules) -> Self {
        let pending = current_half_pending(game, rules);
        let columns = last_inning(game, pending).max(rules.regulation_innings);
        Self {
            away: line_score(game, TeamSide::Away, columns, pending),
            home: line_score(game, TeamSide::Home, columns, pending),
        }
    }

    pub fn leader(&self) -> Option<TeamSide> {
        match self.away.runs.cmp(&self.home.runs) {
            std::cmp::Ordering::Greater => Some(TeamSide::Away),
            std::cmp::Ordering::Less => Some(TeamSide::Home),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// The game has ended and the half it rests on was never batted.
fn current_half_pending(game: &GameState, rules: &GameRules) -> bool {
    rules.is_game_end(game.current_inning, game.is_top)
        && !half_has_play(game, game.current_inning, game.is_top)
}

fn half_has_play(game: &GameState, inning: u32, is_top: bool) -> bool {
    let batting = game.team(TeamSide::batting(is_top));
    batting.at_bats.iter().any(|ab| ab.inning == inning)
        || game.run_events.iter().any(|e| e.inning == inning && e.is_top == is_top)
        || game.out_events.iter().any(|e| e.inning == inning && e.is_top == is_top)
}

fn last_inning(game: &GameState, pending: bool) -> u32 {
    let at_bats = game.home_team.at_bats.iter().chain(&game.away_team.at_bats).map(|ab| ab.inning);
    let runs = game.run_events.iter().map(|e| e.inning);
    let outs = game.out_events.iter().map(|e| e.inning);
    let current = if pending { 0 } else { game.current_inning };
    at_bats.chain(runs).chain(outs).fold(current, u32::max)
}

fn half_started(game: &GameState, side: TeamSide, inning: u32, pending: bool) -> bool {
    let reached = match side {
        TeamSide::Away => inning <= game.current_inning,
        TeamSide::Home => {
            inning < game.current_inning || (inning == game.current_inning && !game.is_top)
        }
    };
    reached && !(pending && inning == game.current_inning && side == game.batting_side())
}

fn line_score(game: &GameState, side: TeamSide, columns: u32, pending: bool) -> LineScore {
    let team = game.team(side);
    let is_away = side.is_away();
    let innings = (1..=columns)
        .map(|inning| {
            let runs = inning_score(team, &game.run_events, inning, is_away);
            if runs > 0 || half_started(game, side, inning, pending) {
                Some(runs)
            } else {
                None
            }
        })
        .collect();

    LineScore {
        team: team.name.clone(),
        innings,
        runs: total_score(team, &game.run_events, is_away),
        hits: hits(team),
        errors: errors(team),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InningState;
    use crate::models::{AtBat, GameInfo, OutEvent, OutType, Player, RunType, RunnerState};
    use crate::state::{AtBatInput, GameSession};
    use chrono::NaiveDate;

    fn game() -> GameState {
        let home = Team::new("Hawks", vec![Player::new("H").with_id("h1")]).with_id("home");
        let away = Team::new("Owls", vec![Player::new("A").with_id("a1")]).with_id("away");
        GameState::new(home, away, GameInfo::new(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()))
    }

    #[test]
    fn test_total_score_uses_half_convention() {
        let mut g = game();
        g.away_team.at_bats.push(AtBat::new("a1", 1, HitResult::HomeRun).with_rbi(2));
        g.home_team.at_bats.push(AtBat::new("h1", 1, HitResult::Double).with_rbi(1));
        g.run_events.push(RunEvent::new(1, true, RunType::WildPitch, 1));
        g.run_events.push(RunEvent::new(2, false, RunType::StolenBase, 2));

        assert_eq!(total_score(&g.away_team, &g.run_events, true), 3);
        assert_eq!(total_score(&g.home_team, &g.run_events, false), 3);
        assert_eq!(inning_score(&g.home_team, &g.run_events, 1, false), 1);
        assert_eq!(inning_score(&g.home_team, &g.run_events, 2, false), 2);
        assert_eq!(inning_score(&g.away_team, &g.run_events, 2, true), 0);
    }

    #[test]
    fn test_hits_and_errors() {
        let mut team = Team::new("T", vec![]);
        for r in [HitResult::RightHit, HitResult::Error, HitResult::Walk, HitResult::Triple] {
            team.at_bats.push(AtBat::new("x", 1, r));
        }
        assert_eq!(hits(&team), 2);
        assert_eq!(errors(&team), 1);
    }

    #[test]
    fn test_scoreboard_marks_unplayed_halves() {
        let mut g = game();
        g.current_inning = 2;
        g.is_top = true;
        g.away_team.at_bats.push(AtBat::new("a1", 1, HitResult::HomeRun).with_rbi(1));
        let board = Scoreboard::for_game(&g, &GameRules::default());

        assert_eq!(board.away.innings.len(), 7);
        assert_eq!(board.away.innings[0], Some(1));
        assert_eq!(board.away.innings[1], Some(0));
        assert_eq!(board.away.innings[2], None);
        assert_eq!(board.home.innings[0], Some(0));
        assert_eq!(board.home.innings[1], None);
        assert_eq!(board.away.runs, 1);
        assert_eq!(board.away.hits, 1);
        assert_eq!(board.leader(), Some(TeamSide::Away));
    }

    #[test]
    fn test_scoreboard_grows_for_extra_innings() {
        let mut g = game();
        g.current_inning = 9;
        g.away_team.at_bats.push(AtBat::new("a1", 9, HitResult::Walk));
        let board = Scoreboard::for_game(&g, &GameRules::default());
        assert_eq!(board.home.innings.len(), 9);
        assert_eq!(board.away.innings[8], Some(0));
        assert_eq!(board.home.innings[8], None);
        assert_eq!(board.leader(), None);
    }

    #[test]
    fn test_final_line_score_after_bottom_of_seventh() {
        let mut g = game();
        g.set_situation(InningState::new(7, false, 2, RunnerState::default()));
        let mut session = GameSession::open(g).unwrap();
        session.record_at_bat(AtBatInput::new("h1", HitResult::Strikeout)).unwrap();
        assert!(session.is_game_over());

        let board = session.scoreboard();
        assert_eq!(board.away.innings.len(), 7);
        assert_eq!(board.home.innings.len(), 7);
        assert_eq!(board.away.innings[6], Some(0));
        assert_eq!(board.home.innings[6], Some(0));
    }

    #[test]
    fn test_unbatted_bottom_half_stays_blank() {
        let mut g = game();
        g.current_inning = 7;
        g.is_top = false;
        g.home_team.at_bats.push(AtBat::new("h1", 3, HitResult::HomeRun).with_rbi(1));
        let board = Scoreboard::for_game(&g, &GameRules::default());

        assert_eq!(board.home.innings.len(), 7);
        assert_eq!(board.home.innings[5], Some(0));
        assert_eq!(board.home.innings[6], None);
        assert_eq!(board.away.innings[6], Some(0));

        // Once the half has a play it shows on the board.
        g.out_events.push(OutEvent::new(7, false, OutType::PickOff));
        let board = Scoreboard::for_game(&g, &GameRules::default());
        assert_eq!(board.home.innings[6], Some(0));
    }
}
