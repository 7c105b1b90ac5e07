use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{AtBat, HitResult, Team};

/// Counting stats over a set of plate appearances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BattingCounts {
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub strikeouts: u32,
    pub sacrifices: u32,
    pub rbi: u32,
    pub total_bases: u32,
}

impl BattingCounts {
    pub fn tally<'a, I>(at_bats: I) -> Self
    where
        I: IntoIterator<Item = &'a AtBat>,
    {
        let mut counts = Self::default();
        for at_bat in at_bats {
            counts.add(at_bat);
        }
        counts
    }

    pub fn add(&mut self, at_bat: &AtBat) {
        let result = at_bat.result;
        self.plate_appearances += 1;
        self.rbi += at_bat.rbi;
        if result.is_official_at_bat() {
            self.at_bats += 1;
        }
        if result.is_hit() {
            self.hits += 1;
            self.total_bases += result.total_bases();
        }
        match result {
            HitResult::Double => self.doubles += 1,
            HitResult::Triple => self.triples += 1,
            HitResult::HomeRun => self.home_runs += 1,
            HitResult::Walk => self.walks += 1,
            HitResult::HitByPitch => self.hit_by_pitch += 1,
            HitResult::Strikeout => self.strikeouts += 1,
            HitResult::SacrificeBunt | HitResult::SacrificeFly => self.sacrifices += 1,
            _ => {}
        }
    }

    pub fn batting_average(&self) -> f64 {
        ratio(self.hits, self.at_bats)
    }

    pub fn on_base_percentage(&self) -> f64 {
        ratio(self.hits + self.walks + self.hit_by_pitch, self.plate_appearances)
    }

    pub fn slugging_percentage(&self) -> f64 {
        ratio(self.total_bases, self.at_bats)
    }

    pub fn ops(&self) -> f64 {
        self.on_base_percentage() + self.slugging_percentage()
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Hits over official at-bats (BB, HBP, SAC, SF excluded); 0 with no at-bats.
pub fn batting_average<'a, I>(at_bats: I) -> f64
where
    I: IntoIterator<Item = &'a AtBat>,
{
    BattingCounts::tally(at_bats).batting_average()
}

/// Hits plus walks and HBP over all plate appearances; 0 with none.
pub fn on_base_percentage<'a, I>(at_bats: I) -> f64
where
    I: IntoIterator<Item = &'a AtBat>,
{
    BattingCounts::tally(at_bats).on_base_percentage()
}

/// Total bases over official at-bats; 0 with no at-bats.
pub fn slugging_percentage<'a, I>(at_bats: I) -> f64
where
    I: IntoIterator<Item = &'a AtBat>,
{
    BattingCounts::tally(at_bats).slugging_percentage()
}

pub fn ops<'a, I>(at_bats: I) -> f64
where
    I: IntoIterator<Item = &'a AtBat>,
{
    BattingCounts::tally(at_bats).ops()
}

/// One row of a team's batting table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BattingLine {
    pub player_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u16>,
    pub counts: BattingCounts,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub ops: f64,
}

impl BattingLine {
    fn new(player_id: &str, name: &str, number: Option<u16>, counts: BattingCounts) -> Self {
        Self {
            player_id: player_id.to_string(),
            name: name.to_string(),
            number,
            counts,
            avg: counts.batting_average(),
            obp: counts.on_base_percentage(),
            slg: counts.slugging_percentage(),
            ops: counts.ops(),
        }
    }
}

/// Per-player batting lines in roster order. At-bats credited to ids missing
/// from the roster get their own line, named by id, after the roster.
pub fn batting_lines(team: &Team) -> Vec<BattingLine> {
    let mut lines: Vec<BattingLine> = team
        .players
        .iter()
        .map(|p| {
            let counts = BattingCounts::tally(team.at_bats_for(&p.id));
            BattingLine::new(&p.id, &p.name, p.number, counts)
        })
        .collect();

    let mut unknown: Vec<&str> = Vec::new();
    for at_bat in &team.at_bats {
        let id = at_bat.player_id.as_str();
        if !team.has_player(id) && !unknown.contains(&id) {
            unknown.push(id);
        }
    }
    for id in unknown {
        let counts = BattingCounts::tally(team.at_bats_for(id));
        lines.push(BattingLine::new(id, id, None, counts));
    }

    lines
}

/// Team-wide totals over every recorded at-bat.
pub fn team_batting(team: &Team) -> BattingCounts {
    BattingCounts::tally(&team.at_bats)
}
