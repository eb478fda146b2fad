use crate::schema::play_record::{de_opt_text, de_team, parse_yards};
use serde::{Deserialize, Deserializer, Serialize};

/// One scheduled game from an nflverse-style schedule export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGame {
	pub season: u16,
	pub week: u8,
	pub game_id: String,
	/// `REG`, `WC`, `DIV`, `CON` or `SB`. Absent reads as regular season.
	#[serde(default, deserialize_with = "de_opt_text")]
	pub game_type: Option<String>,
	#[serde(deserialize_with = "de_team")]
	pub home_team: String,
	#[serde(deserialize_with = "de_team")]
	pub away_team: String,
	/// `None` until the game has been played.
	#[serde(default, deserialize_with = "de_opt_score")]
	pub home_score: Option<i32>,
	#[serde(default, deserialize_with = "de_opt_score")]
	pub away_score: Option<i32>,
}

impl ScheduleGame {
	#[must_use]
	pub fn is_regular_season(&self) -> bool {
		!matches!(self.game_type.as_deref(), Some(kind) if kind != "REG")
	}

	#[must_use]
	pub const fn final_score(&self) -> Option<(i32, i32)> {
		match (self.home_score, self.away_score) {
			(Some(home), Some(away)) => Some((home, away)),
			_ => None,
		}
	}

	/// Both participants, home side first. Blank team cells are left out.
	pub fn teams(&self) -> impl Iterator<Item = &str> {
		[self.home_team.as_str(), self.away_team.as_str()].into_iter().filter(|team| !team.is_empty())
	}
}

fn de_opt_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
	let raw: Option<String> = Option::deserialize(deserializer)?;
	raw.map_or(Ok(None), |text| parse_yards(&text).map_err(serde::de::Error::custom))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn game(game_type: Option<&str>) -> ScheduleGame {
		ScheduleGame {
			season: 2023,
			week: 1,
			game_id: "2023_01_BUF_NYJ".to_string(),
			game_type: game_type.map(str::to_string),
			home_team: "NYJ".to_string(),
			away_team: "BUF".to_string(),
			home_score: Some(22),
			away_score: Some(16),
		}
	}

	#[test]
	fn test_regular_season_game_type() {
		assert!(game(Some("REG")).is_regular_season());
		assert!(game(None).is_regular_season());
		assert!(!game(Some("WC")).is_regular_season());
		assert!(!game(Some("SB")).is_regular_season());
	}

	#[test]
	fn test_final_score_needs_both_sides() {
		assert_eq!(game(None).final_score(), Some((22, 16)));

		let unplayed = ScheduleGame { away_score: None, ..game(None) };
		assert_eq!(unplayed.final_score(), None);
	}

	#[test]
	fn test_teams_lists_home_then_away() {
		assert_eq!(game(None).teams().collect::<Vec<_>>(), vec!["NYJ", "BUF"]);

		let missing_away = ScheduleGame { away_team: String::new(), ..game(None) };
		assert_eq!(missing_away.teams().collect::<Vec<_>>(), vec!["NYJ"]);
	}
}
