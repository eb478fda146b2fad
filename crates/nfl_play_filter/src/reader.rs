use crate::error::ReadError;
use crate::schema::{PlayRecord, ScheduleGame};
use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;

/// A row the reader could not decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
	pub line: Option<u64>,
	pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedPlays {
	pub plays: Vec<PlayRecord>,
	pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSchedule {
	pub games: Vec<ScheduleGame>,
	pub skipped: Vec<SkippedRow>,
}

/// Loads a play-by-play CSV export from disk.
///
/// # Errors
///
/// Fails when the file cannot be opened or its header row cannot be read.
/// Individual bad rows are skipped and listed in [`LoadedPlays::skipped`].
pub fn read_plays(path: impl AsRef<Path>) -> Result<LoadedPlays, ReadError> {
	let path = path.as_ref();
	let reader = builder().from_path(path).map_err(|e| ReadError::open(path, e))?;
	tracing::debug!(path = %path.display(), "reading play-by-play export");
	let (plays, skipped) = collect(reader, "play")?;
	Ok(LoadedPlays { plays, skipped })
}

/// Same as [`read_plays`] for any byte source.
///
/// # Errors
///
/// Fails on I/O errors or an unreadable header row.
pub fn read_plays_from<R: io::Read>(source: R) -> Result<LoadedPlays, ReadError> {
	let (plays, skipped) = collect(builder().from_reader(source), "play")?;
	Ok(LoadedPlays { plays, skipped })
}

/// Loads a season schedule export (one row per game, scores blank until played).
///
/// # Errors
///
/// Fails when the file cannot be opened or its header row cannot be read.
/// Bad rows are skipped and listed in [`LoadedSchedule::skipped`].
pub fn read_schedule(path: impl AsRef<Path>) -> Result<LoadedSchedule, ReadError> {
	let path = path.as_ref();
	let reader = builder().from_path(path).map_err(|e| ReadError::open(path, e))?;
	tracing::debug!(path = %path.display(), "reading schedule export");
	let (games, skipped) = collect(reader, "schedule")?;
	Ok(LoadedSchedule { games, skipped })
}

/// Same as [`read_schedule`] for any byte source.
///
/// # Errors
///
/// Fails on I/O errors or an unreadable header row.
pub fn read_schedule_from<R: io::Read>(source: R) -> Result<LoadedSchedule, ReadError> {
	let (games, skipped) = collect(builder().from_reader(source), "schedule")?;
	Ok(LoadedSchedule { games, skipped })
}

fn builder() -> csv::ReaderBuilder {
	let mut builder = csv::ReaderBuilder::new();
	builder.flexible(true).trim(csv::Trim::All);
	builder
}

fn is_row_error(error: &csv::Error) -> bool {
	matches!(error.kind(), csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::Utf8 { .. } | csv::ErrorKind::UnequalLengths { .. })
}

fn collect<T: DeserializeOwned, R: io::Read>(mut reader: csv::Reader<R>, kind: &'static str) -> Result<(Vec<T>, Vec<SkippedRow>), ReadError> {
	reader.headers().map_err(ReadError::Header)?;

	let mut rows = Vec::new();
	let mut skipped = Vec::new();
	for row in reader.deserialize::<T>() {
		match row {
			Ok(record) => rows.push(record),
			Err(e) if is_row_error(&e) => {
				let line = e.position().map(csv::Position::line);
				tracing::warn!(kind, ?line, error = %e, "skipping malformed row");
				skipped.push(SkippedRow { line, reason: e.to_string() });
			}
			Err(e) => return Err(e.into()),
		}
	}

	tracing::info!(kind, rows = rows.len(), skipped = skipped.len(), "loaded export rows");
	Ok((rows, skipped))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::PenaltyType;

	#[test]
	fn test_reads_nflfastr_style_columns() {
		let data = "\
game_id,play_id,season,week,season_type,posteam,passer_player_name,pass_attempt,complete_pass,penalty,penalty_type,play_type,extra_col
2022_01_BUF_LA,77,2022,1,REG,BUF,J.Allen,1,1,0,NA,pass,ignored
2022_01_BUF_LA,102,2022,1,REG,BUF,J.Allen,1.0,0,1,Defensive Pass Interference,pass,ignored
";
		let loaded = read_plays_from(data.as_bytes()).unwrap();

		assert!(loaded.skipped.is_empty());
		assert_eq!(loaded.plays.len(), 2);
		assert_eq!(loaded.plays[0].passer_player_name.as_deref(), Some("J.Allen"));
		assert_eq!(loaded.plays[0].pass_attempt, Some(true));
		assert!(loaded.plays[0].complete_pass);
		assert_eq!(loaded.plays[0].penalty_type, PenaltyType::None);
		assert_eq!(loaded.plays[1].penalty_type, PenaltyType::DefensivePassInterference);
		assert!(!loaded.plays[1].qb_spike);
	}

	#[test]
	fn test_blank_pass_attempt_is_kept_as_unknown() {
		let data = "season,week,posteam,passer_player_name,pass_attempt\n2022,1,BUF,J.Allen,NA\n";
		let loaded = read_plays_from(data.as_bytes()).unwrap();

		assert_eq!(loaded.plays.len(), 1);
		assert_eq!(loaded.plays[0].pass_attempt, None);
	}

	#[test]
	fn test_skips_malformed_rows_and_continues() {
		let data = "\
season,week,posteam,passer_player_name,pass_attempt
2022,1,BUF,J.Allen,1
NA,1,BUF,J.Allen,1
2022,1,BUF,J.Allen,maybe
2022,1,BUF,J.Allen,0
";
		let loaded = read_plays_from(data.as_bytes()).unwrap();

		assert_eq!(loaded.plays.len(), 2);
		assert_eq!(loaded.skipped.len(), 2);
		assert_eq!(loaded.skipped[0].line, Some(3));
		assert_eq!(loaded.skipped[1].line, Some(4));
	}

	#[test]
	fn test_posteam_placeholder_reads_as_empty() {
		let data = "season,week,posteam,rush,yards_gained\n2022,1,NA,0,0\n2022,1,,0,0\n2022,1,BUF,1,4\n";
		let loaded = read_plays_from(data.as_bytes()).unwrap();

		let teams: Vec<&str> = loaded.plays.iter().map(|play| play.posteam.as_str()).collect();
		assert_eq!(teams, vec!["", "", "BUF"]);
	}

	#[test]
	fn test_reads_schedule_rows() {
		let data = "\
game_id,season,game_type,week,gameday,away_team,away_score,home_team,home_score,result
2023_01_BUF_NYJ,2023,REG,1,2023-09-11,BUF,16,NYJ,22,6
2023_18_BUF_MIA,2023,REG,18,2024-01-07,BUF,21.0,MIA,14.0,-7
2023_19_PIT_BUF,2023,WC,19,2024-01-15,PIT,NA,BUF,NA,NA
2023_02_LV_BUF,2023,REG,two,2023-09-17,LV,10,BUF,38,28
";
		let loaded = read_schedule_from(data.as_bytes()).unwrap();

		assert_eq!(loaded.games.len(), 3);
		assert_eq!(loaded.skipped.len(), 1);
		assert_eq!(loaded.skipped[0].line, Some(5));

		assert_eq!(loaded.games[0].home_team, "NYJ");
		assert_eq!(loaded.games[0].final_score(), Some((22, 16)));
		assert_eq!(loaded.games[1].away_score, Some(21));
		assert!(!loaded.games[2].is_regular_season());
		assert_eq!(loaded.games[2].final_score(), None);
	}

	#[test]
	fn test_missing_file_is_an_error() {
		let result = read_plays("/definitely/not/here/pbp.csv");
		assert!(matches!(result, Err(ReadError::Open { .. })));
		assert!(matches!(read_schedule("/definitely/not/here/games.csv"), Err(ReadError::Open { .. })));
	}
}
