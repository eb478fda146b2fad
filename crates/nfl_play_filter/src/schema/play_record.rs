use crate::error::FlagError;
use crate::schema::PenaltyType;
use serde::{Deserialize, Deserializer, Serialize};

/// One offensive play as delivered by a play-by-play provider.
///
/// Column names follow nflfastR. Unknown columns are ignored and absent flags
/// read as `false`, so partial exports load without preprocessing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
	#[serde(default, deserialize_with = "de_opt_text")]
	pub game_id: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub play_id: Option<String>,
	pub season: u16,
	pub week: u8,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub season_type: Option<String>,
	/// Possessing team. Timeouts and quarter breaks carry none and read as empty.
	#[serde(alias = "team", deserialize_with = "de_team")]
	pub posteam: String,

	/// Passer of record.
	#[serde(default, deserialize_with = "de_opt_text")]
	pub passer_player_name: Option<String>,
	/// Dropback player. Only consulted when no passer of record exists.
	#[serde(default, deserialize_with = "de_opt_text")]
	pub passer: Option<String>,

	/// `None` when the provider left the column blank; such plays cannot be classified.
	#[serde(default, deserialize_with = "de_opt_flag")]
	pub pass_attempt: Option<bool>,
	#[serde(default, deserialize_with = "de_flag")]
	pub two_point_attempt: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub qb_spike: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub throwaway: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub is_throw_away: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub sack: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub complete_pass: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub incomplete_pass: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub interception: bool,

	#[serde(default, deserialize_with = "de_flag")]
	pub penalty: bool,
	#[serde(default)]
	pub penalty_type: PenaltyType,
	#[serde(default, alias = "offsetting", deserialize_with = "de_flag")]
	pub offsetting_penalty: bool,
	#[serde(default, deserialize_with = "de_flag")]
	pub no_play: bool,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub play_type: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub desc: Option<String>,

	#[serde(default, deserialize_with = "de_flag")]
	pub rush: bool,
	/// Dropback indicator. Wider than `pass_attempt`: scrambles and sacks set it too.
	#[serde(default, deserialize_with = "de_flag")]
	pub pass: bool,
	#[serde(default, deserialize_with = "de_opt_yards")]
	pub yards_gained: Option<i32>,
	#[serde(default, deserialize_with = "de_flag")]
	pub fumble_lost: bool,
}

impl PlayRecord {
	/// Passer of record, falling back to the dropback player when the provider left it blank.
	#[must_use]
	pub fn passer_of_record(&self) -> Option<&str> {
		self.passer_player_name.as_deref().or(self.passer.as_deref())
	}

	/// Both legacy throwaway columns collapse into one flag.
	#[must_use]
	pub const fn is_throwaway(&self) -> bool {
		self.throwaway || self.is_throw_away
	}

	#[must_use]
	pub fn is_no_play(&self) -> bool {
		self.no_play || self.play_type.as_deref() == Some("no_play")
	}

	#[must_use]
	pub fn is_offsetting(&self) -> bool {
		self.offsetting_penalty || self.desc.as_deref().is_some_and(|desc| desc.to_ascii_lowercase().contains("offsetting"))
	}

	#[must_use]
	pub const fn is_designated_pass(&self) -> bool {
		matches!(self.pass_attempt, Some(true))
	}

	/// True when the ball was thrown but neither caught nor intercepted.
	#[must_use]
	pub const fn is_otherwise_incomplete(&self) -> bool {
		self.incomplete_pass || !(self.complete_pass || self.interception || self.sack)
	}

	#[must_use]
	pub fn is_regular_season(&self) -> bool {
		!matches!(self.season_type.as_deref(), Some(kind) if kind != "REG")
	}

	#[must_use]
	pub fn possession_team(&self) -> Option<&str> {
		Some(self.posteam.as_str()).filter(|team| !team.is_empty() && *team != "NA")
	}

	/// Provider play key, present only when both game and play ids were supplied.
	#[must_use]
	pub fn play_key(&self) -> Option<(&str, &str)> {
		Some((self.game_id.as_deref()?, self.play_id.as_deref()?))
	}
}

/// Reads a provider flag. Blank and `NA` cells carry no value.
///
/// # Errors
///
/// Returns [`FlagError::InvalidFlag`] for text that is neither a boolean nor a 0/1 number.
pub fn parse_flag(input: &str) -> Result<Option<bool>, FlagError> {
	match input.trim() {
		"" | "NA" | "na" | "NaN" | "nan" | "null" | "None" => Ok(None),
		"1" | "1.0" | "true" | "TRUE" | "True" | "yes" | "Y" => Ok(Some(true)),
		"0" | "0.0" | "false" | "FALSE" | "False" | "no" | "N" => Ok(Some(false)),
		_ => Err(FlagError::invalid_flag(input)),
	}
}

/// Reads a yardage cell. Providers write integers as `7` or `7.0`.
///
/// # Errors
///
/// Returns [`FlagError::InvalidNumber`] when the text is not a whole number.
pub fn parse_yards(input: &str) -> Result<Option<i32>, FlagError> {
	let trimmed = input.trim();
	if matches!(trimmed, "" | "NA" | "na" | "NaN" | "nan") {
		return Ok(None);
	}
	if let Ok(value) = trimmed.parse::<i32>() {
		return Ok(Some(value));
	}
	match trimmed.split_once('.') {
		Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole.parse::<i32>().map(Some).map_err(|_| FlagError::invalid_number(input)),
		_ => Err(FlagError::invalid_number(input)),
	}
}

fn de_opt_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
	let raw: Option<String> = Option::deserialize(deserializer)?;
	raw.map_or(Ok(None), |text| parse_flag(&text).map_err(serde::de::Error::custom))
}

fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
	de_opt_flag(deserializer).map(Option::unwrap_or_default)
}

fn de_opt_yards<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
	let raw: Option<String> = Option::deserialize(deserializer)?;
	raw.map_or(Ok(None), |text| parse_yards(&text).map_err(serde::de::Error::custom))
}

pub(crate) fn de_opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
	let raw: Option<String> = Option::deserialize(deserializer)?;
	Ok(raw.map(|text| text.trim().to_string()).filter(|text| !text.is_empty() && text != "NA"))
}

pub(crate) fn de_team<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	de_opt_text(deserializer).map(Option::unwrap_or_default)
}
