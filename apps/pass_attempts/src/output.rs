use anyhow::Context;
use nfl_play_filter::filter::Classification;
use nfl_play_filter::schema::PenaltyType;
use nfl_play_filter::{AttemptSummary, PlayRecord, ScopedPlay};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;

/// Qualifying play as written out, with the throwaway columns merged.
#[derive(Debug, Serialize)]
pub struct AttemptRow<'a> {
	pub game_id: Option<&'a str>,
	pub play_id: Option<&'a str>,
	pub season: u16,
	pub week: u8,
	pub posteam: &'a str,
	pub passer_player_name: Option<&'a str>,
	pub complete_pass: bool,
	pub interception: bool,
	pub throwaway: bool,
	pub qb_spike: bool,
	pub penalty_type: &'a PenaltyType,
	pub yards_gained: Option<i32>,
	pub desc: Option<&'a str>,
}

impl<'a> From<&'a PlayRecord> for AttemptRow<'a> {
	fn from(play: &'a PlayRecord) -> Self {
		Self {
			game_id: play.game_id.as_deref(),
			play_id: play.play_id.as_deref(),
			season: play.season,
			week: play.week,
			posteam: &play.posteam,
			passer_player_name: play.passer_of_record(),
			complete_pass: play.complete_pass,
			interception: play.interception,
			throwaway: play.is_throwaway(),
			qb_spike: play.qb_spike,
			penalty_type: &play.penalty_type,
			yards_gained: play.yards_gained,
			desc: play.desc.as_deref(),
		}
	}
}

/// `count --json` output. Qualifying plays ride along unless they go to a CSV file.
#[derive(Debug, Serialize)]
pub struct CountDocument<'a> {
	#[serde(flatten)]
	pub summary: &'a AttemptSummary,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub plays: Option<&'a [AttemptRow<'a>]>,
}

/// Writes serializable rows as CSV to `path`, or to stdout when no path is given.
pub fn write_rows<T, I>(rows: I, path: Option<&Path>) -> anyhow::Result<()>
where
	T: Serialize,
	I: IntoIterator<Item = T>,
{
	let sink: Box<dyn io::Write> = match path {
		Some(path) => Box::new(File::create(path).with_context(|| format!("could not create {}", path.display()))?),
		None => Box::new(io::stdout().lock()),
	};

	let mut writer = csv::Writer::from_writer(sink);
	for row in rows {
		writer.serialize(row)?;
	}
	writer.flush()?;

	if let Some(path) = path {
		tracing::info!(path = %path.display(), "wrote csv");
	}
	Ok(())
}

pub fn describe_scoped(entry: &ScopedPlay<'_>) -> String {
	let verdict = match entry.classification() {
		Some(Classification::Attempt) => "ATTEMPT".to_string(),
		Some(Classification::Excluded(rule)) => format!("excluded ({rule})"),
		None => "duplicate (first record used)".to_string(),
	};
	let play = entry.play();

	format!("{:>6}  {:<40}  {}", play.play_id.as_deref().unwrap_or("-"), verdict, play.desc.as_deref().unwrap_or_default())
}
