use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Penalty called on a play, as far as pass-attempt scoring cares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PenaltyType {
	DefensivePassInterference,
	IllegalContact,
	DefensiveHolding,
	/// Any other foul, offensive fouls included. Keeps the provider's label.
	Other(String),
	#[default]
	None,
}

impl PenaltyType {
	/// Parses a provider label. Never fails: unrecognised labels become `Other`.
	#[must_use]
	pub fn parse(input: &str) -> Self {
		let trimmed = input.trim();
		let normalized: String = trimmed
			.chars()
			.filter(char::is_ascii_alphanumeric)
			.collect::<String>()
			.to_lowercase();

		match normalized.as_str() {
			"" | "na" | "none" | "null" => Self::None,
			"defensivepassinterference" | "dpi" => Self::DefensivePassInterference,
			"illegalcontact" => Self::IllegalContact,
			"defensiveholding" => Self::DefensiveHolding,
			_ => Self::Other(trimmed.to_string()),
		}
	}

	/// Defensive fouls that can turn a thrown ball into a charted incompletion.
	#[must_use]
	pub const fn is_defensive_pass_penalty(&self) -> bool {
		matches!(self, Self::DefensivePassInterference | Self::IllegalContact | Self::DefensiveHolding)
	}

	#[must_use]
	pub const fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}
}

impl fmt::Display for PenaltyType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DefensivePassInterference => f.write_str("Defensive Pass Interference"),
			Self::IllegalContact => f.write_str("Illegal Contact"),
			Self::DefensiveHolding => f.write_str("Defensive Holding"),
			Self::Other(label) => f.write_str(label),
			Self::None => Ok(()),
		}
	}
}

impl From<&str> for PenaltyType {
	fn from(value: &str) -> Self {
		Self::parse(value)
	}
}

impl Serialize for PenaltyType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for PenaltyType {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw: Option<String> = Option::deserialize(deserializer)?;
		Ok(raw.as_deref().map_or(Self::None, Self::parse))
	}
}
