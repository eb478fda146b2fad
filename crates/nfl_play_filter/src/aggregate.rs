//! Team-game rollups over the same play records the attempt filter reads,
//! joined with schedule results for the season-to-date standings.

use crate::schema::{Division, PlayRecord, ScheduleGame};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamGameTotals {
	pub season: u16,
	pub week: u8,
	pub game_id: String,
	pub team: String,
	/// Interceptions thrown plus fumbles lost.
	pub turnovers: u32,
	/// Yards gained on rushing and dropback plays, sacks included.
	pub offensive_yards: i64,
}

/// One side of a played regular-season game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamGameResult {
	pub season: u16,
	pub week: u8,
	pub game_id: String,
	pub team: String,
	pub opponent: String,
	pub points_for: i32,
	pub points_against: i32,
	/// Ties are not wins.
	pub is_win: bool,
	pub is_division_game: bool,
}

/// Season-to-date line for one team.
///
/// The record columns (`wins` through `made_playoffs`) are only filled when a
/// schedule was supplied, see [`season_standings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSeasonTotals {
	pub season: u16,
	pub team: String,
	pub division: Option<Division>,
	pub through_week: u8,
	pub games: u32,
	pub wins: Option<u32>,
	pub losses: Option<u32>,
	pub point_differential: Option<i64>,
	pub division_wins: Option<u32>,
	pub turnovers: u32,
	pub offensive_yards: i64,
	pub made_playoffs: Option<bool>,
}

impl TeamSeasonTotals {
	fn empty(season: u16, team: &str, through_week: u8) -> Self {
		Self {
			season,
			team: team.to_string(),
			division: Division::for_team(team),
			through_week,
			games: 0,
			wins: None,
			losses: None,
			point_differential: None,
			division_wins: None,
			turnovers: 0,
			offensive_yards: 0,
			made_playoffs: None,
		}
	}
}

/// Per-game turnovers and offensive yards for every possessing team.
///
/// Only regular-season plays with a possession team count. Output is ordered by
/// season, week, game and team.
#[must_use]
pub fn team_game_totals(plays: &[PlayRecord]) -> Vec<TeamGameTotals> {
	let mut games: BTreeMap<(u16, u8, &str, &str), (u32, i64)> = BTreeMap::new();

	for play in plays.iter().filter(|play| play.is_regular_season()) {
		let Some(team) = play.possession_team() else {
			continue;
		};
		let key = (play.season, play.week, play.game_id.as_deref().unwrap_or_default(), team);
		let (turnovers, yards) = games.entry(key).or_default();

		*turnovers += u32::from(play.interception) + u32::from(play.fumble_lost);
		if play.rush || play.pass {
			*yards += i64::from(play.yards_gained.unwrap_or_default());
		}
	}

	games
		.into_iter()
		.map(|((season, week, game_id, team), (turnovers, offensive_yards))| TeamGameTotals {
			season,
			week,
			game_id: game_id.to_string(),
			team: team.to_string(),
			turnovers,
			offensive_yards,
		})
		.collect()
}

/// Sums weeks `1..=through_week` for each season and team.
///
/// Play-by-play only: the record columns stay empty.
#[must_use]
pub fn season_to_date(totals: &[TeamGameTotals], through_week: u8) -> Vec<TeamSeasonTotals> {
	let mut seasons: BTreeMap<(u16, &str), TeamSeasonTotals> = BTreeMap::new();

	for game in totals.iter().filter(|game| (1..=through_week).contains(&game.week)) {
		let entry = seasons
			.entry((game.season, game.team.as_str()))
			.or_insert_with(|| TeamSeasonTotals::empty(game.season, &game.team, through_week));
		entry.games += 1;
		entry.turnovers += game.turnovers;
		entry.offensive_yards += game.offensive_yards;
	}

	seasons.into_values().collect()
}

/// Splits every played regular-season game into a home row and an away row.
///
/// Games without a final score are left out. A game is a division game when
/// both teams map to the same division.
#[must_use]
pub fn team_game_results(schedule: &[ScheduleGame]) -> Vec<TeamGameResult> {
	let mut results = Vec::with_capacity(schedule.len() * 2);

	for game in schedule.iter().filter(|game| game.is_regular_season()) {
		let Some((home_score, away_score)) = game.final_score() else {
			tracing::debug!(game_id = %game.game_id, "no final score, game left out of standings");
			continue;
		};
		if game.home_team.is_empty() || game.away_team.is_empty() {
			tracing::warn!(game_id = %game.game_id, "schedule row is missing a team");
			continue;
		}

		let home_division = Division::for_team(&game.home_team);
		let is_division_game = home_division.is_some() && home_division == Division::for_team(&game.away_team);
		let side = |team: &str, opponent: &str, points_for: i32, points_against: i32| TeamGameResult {
			season: game.season,
			week: game.week,
			game_id: game.game_id.clone(),
			team: team.to_string(),
			opponent: opponent.to_string(),
			points_for,
			points_against,
			is_win: points_for > points_against,
			is_division_game,
		};

		results.push(side(&game.home_team, &game.away_team, home_score, away_score));
		results.push(side(&game.away_team, &game.home_team, away_score, home_score));
	}

	results.sort_by(|a, b| {
		a.season
			.cmp(&b.season)
			.then(a.week.cmp(&b.week))
			.then_with(|| a.game_id.cmp(&b.game_id))
			.then_with(|| a.team.cmp(&b.team))
	});
	results
}

/// `(season, team)` pairs that appear in any postseason game.
#[must_use]
pub fn playoff_teams(schedule: &[ScheduleGame]) -> BTreeSet<(u16, &str)> {
	schedule
		.iter()
		.filter(|game| !game.is_regular_season())
		.flat_map(|game| game.teams().map(move |team| (game.season, team)))
		.collect()
}

/// Weeks `1..=through_week` standings with play-by-play totals joined in.
///
/// Every team with a played regular-season game in the window gets one row.
/// Turnovers and offensive yards are looked up per team-game, and a game the
/// play-by-play does not cover contributes zero. Play-by-play games that are
/// not on the schedule are ignored. Losses are games minus wins, so ties count
/// as losses.
#[must_use]
pub fn season_standings(schedule: &[ScheduleGame], totals: &[TeamGameTotals], through_week: u8) -> Vec<TeamSeasonTotals> {
	let by_game: BTreeMap<(u16, u8, &str, &str), &TeamGameTotals> = totals
		.iter()
		.map(|game| ((game.season, game.week, game.game_id.as_str(), game.team.as_str()), game))
		.collect();
	let playoffs = playoff_teams(schedule);
	let results = team_game_results(schedule);

	let mut seasons: BTreeMap<(u16, &str), TeamSeasonTotals> = BTreeMap::new();
	for result in results.iter().filter(|result| (1..=through_week).contains(&result.week)) {
		let entry = seasons.entry((result.season, result.team.as_str())).or_insert_with(|| TeamSeasonTotals {
			wins: Some(0),
			losses: Some(0),
			point_differential: Some(0),
			division_wins: Some(0),
			made_playoffs: Some(playoffs.contains(&(result.season, result.team.as_str()))),
			..TeamSeasonTotals::empty(result.season, &result.team, through_week)
		});

		entry.games += 1;
		let won = u32::from(result.is_win);
		entry.wins = entry.wins.map(|wins| wins + won);
		entry.losses = entry.losses.map(|losses| losses + 1 - won);
		entry.point_differential = entry.point_differential.map(|diff| diff + i64::from(result.points_for) - i64::from(result.points_against));
		entry.division_wins = entry.division_wins.map(|wins| wins + u32::from(result.is_win && result.is_division_game));

		if let Some(game) = by_game.get(&(result.season, result.week, result.game_id.as_str(), result.team.as_str())) {
			entry.turnovers += game.turnovers;
			entry.offensive_yards += game.offensive_yards;
		}
	}

	seasons.into_values().collect()
}
