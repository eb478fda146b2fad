use crate::error::TeamAbbreviationError;
use serde::Serialize;
use std::fmt;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamAbbreviation {
	ARI, // Arizona Cardinals
	ATL, // Atlanta Falcons
	BAL, // Baltimore Ravens
	BUF, // Buffalo Bills
	CAR, // Carolina Panthers
	CHI, // Chicago Bears
	CIN, // Cincinnati Bengals
	CLE, // Cleveland Browns
	DAL, // Dallas Cowboys
	DEN, // Denver Broncos
	DET, // Detroit Lions
	GB,  // Green Bay Packers
	HOU, // Houston Texans
	IND, // Indianapolis Colts
	JAX, // Jacksonville Jaguars
	KC,  // Kansas City Chiefs
	LV,  // Las Vegas Raiders
	LAC, // Los Angeles Chargers
	LAR, // Los Angeles Rams
	MIA, // Miami Dolphins
	MIN, // Minnesota Vikings
	NE,  // New England Patriots
	NO,  // New Orleans Saints
	NYG, // New York Giants
	NYJ, // New York Jets
	PHI, // Philadelphia Eagles
	PIT, // Pittsburgh Steelers
	SEA, // Seattle Seahawks
	SF,  // San Francisco 49ers
	TB,  // Tampa Bay Buccaneers
	TEN, // Tennessee Titans
	WAS, // Washington Commanders
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Division {
	#[serde(rename = "AFC East")]
	AfcEast,
	#[serde(rename = "AFC North")]
	AfcNorth,
	#[serde(rename = "AFC South")]
	AfcSouth,
	#[serde(rename = "AFC West")]
	AfcWest,
	#[serde(rename = "NFC East")]
	NfcEast,
	#[serde(rename = "NFC North")]
	NfcNorth,
	#[serde(rename = "NFC South")]
	NfcSouth,
	#[serde(rename = "NFC West")]
	NfcWest,
}

impl TeamAbbreviation {
	/// Divisions have been stable since the 2002 realignment.
	#[must_use]
	pub const fn division(self) -> Division {
		match self {
			Self::BUF | Self::MIA | Self::NE | Self::NYJ => Division::AfcEast,
			Self::BAL | Self::CIN | Self::CLE | Self::PIT => Division::AfcNorth,
			Self::HOU | Self::IND | Self::JAX | Self::TEN => Division::AfcSouth,
			Self::DEN | Self::KC | Self::LAC | Self::LV => Division::AfcWest,
			Self::DAL | Self::NYG | Self::PHI | Self::WAS => Division::NfcEast,
			Self::CHI | Self::DET | Self::GB | Self::MIN => Division::NfcNorth,
			Self::ATL | Self::CAR | Self::NO | Self::TB => Division::NfcSouth,
			Self::ARI | Self::LAR | Self::SEA | Self::SF => Division::NfcWest,
		}
	}
}

impl std::str::FromStr for TeamAbbreviation {
	type Err = TeamAbbreviationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"ARI" => Ok(Self::ARI),
			"ATL" => Ok(Self::ATL),
			"BAL" => Ok(Self::BAL),
			"BUF" => Ok(Self::BUF),
			"CAR" => Ok(Self::CAR),
			"CHI" => Ok(Self::CHI),
			"CIN" => Ok(Self::CIN),
			"CLE" => Ok(Self::CLE),
			"DAL" => Ok(Self::DAL),
			"DEN" => Ok(Self::DEN),
			"DET" => Ok(Self::DET),
			"GB" => Ok(Self::GB),
			"HOU" => Ok(Self::HOU),
			"IND" => Ok(Self::IND),
			"JAX" | "JAC" => Ok(Self::JAX),
			"KC" => Ok(Self::KC),
			// Relocated franchises keep their division.
			"LV" | "OAK" => Ok(Self::LV),
			"LAC" | "SD" => Ok(Self::LAC),
			"LAR" | "LA" | "STL" => Ok(Self::LAR),
			"MIA" => Ok(Self::MIA),
			"MIN" => Ok(Self::MIN),
			"NE" => Ok(Self::NE),
			"NO" => Ok(Self::NO),
			"NYG" => Ok(Self::NYG),
			"NYJ" => Ok(Self::NYJ),
			"PHI" => Ok(Self::PHI),
			"PIT" => Ok(Self::PIT),
			"SEA" => Ok(Self::SEA),
			"SF" => Ok(Self::SF),
			"TB" => Ok(Self::TB),
			"TEN" => Ok(Self::TEN),
			"WAS" | "WSH" => Ok(Self::WAS),
			other => Err(TeamAbbreviationError::InvalidTeamAbbreviation(other.to_string())),
		}
	}
}

impl Division {
	/// Division for a provider team code, `None` for codes outside the league map.
	#[must_use]
	pub fn for_team(code: &str) -> Option<Self> {
		code.parse::<TeamAbbreviation>().ok().map(TeamAbbreviation::division)
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::AfcEast => "AFC East",
			Self::AfcNorth => "AFC North",
			Self::AfcSouth => "AFC South",
			Self::AfcWest => "AFC West",
			Self::NfcEast => "NFC East",
			Self::NfcNorth => "NFC North",
			Self::NfcSouth => "NFC South",
			Self::NfcWest => "NFC West",
		}
	}
}

impl fmt::Display for Division {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
