mod config;
mod output;

use anyhow::Context;
use clap::Parser;
use nfl_play_filter::aggregate::{season_standings, season_to_date, team_game_results, team_game_totals};
use nfl_play_filter::filter::DataWarning;
use nfl_play_filter::{count_attempts, debug_report, read_plays, read_schedule, Detail, PlayRecord, Scope};
use std::path::Path;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

use crate::config::{Command, Config};
use crate::output::{describe_scoped, write_rows, AttemptRow, CountDocument};

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let loaded = read_plays(&config.input).with_context(|| format!("could not load {}", config.input.display()))?;
	if !loaded.skipped.is_empty() {
		tracing::warn!(skipped = loaded.skipped.len(), "some play rows could not be read and were left out");
	}

	match &config.command {
		Command::Count { scope, details, output, json } => run_count(&loaded.plays, &scope.to_scope(), Detail::from(*details), output.as_deref(), *json),
		Command::Debug { scope } => {
			run_debug(&loaded.plays, &scope.to_scope());
			Ok(())
		}
		Command::TeamTotals {
			through_week,
			schedule,
			per_game,
			output,
		} => run_team_totals(&loaded.plays, schedule.as_deref(), *through_week, *per_game, output.as_deref()),
	}
}

fn run_count(plays: &[PlayRecord], scope: &Scope, detail: Detail, output: Option<&Path>, json: bool) -> anyhow::Result<()> {
	let report = count_attempts(plays, scope, detail);
	let summary = report.summary();
	let rows: Option<Vec<AttemptRow>> = report.plays().map(|plays| plays.iter().copied().map(AttemptRow::from).collect());
	// stdout carries one format only
	let embed_rows = json && output.is_none();

	if json {
		let document = CountDocument {
			summary,
			plays: rows.as_deref().filter(|_| embed_rows),
		};
		println!("{}", serde_json::to_string_pretty(&document)?);
	} else if summary.is_scope_empty() {
		println!("{} {} {} week {}: no plays matched, check the passer and team codes", scope.passer, scope.team, scope.season, scope.week);
	} else {
		println!(
			"{} {} {} week {}: {} attempts ({} plays in scope, {} excluded)",
			scope.passer,
			scope.team,
			scope.season,
			scope.week,
			summary.attempts,
			summary.scope_matches.plays(),
			summary.excluded
		);
		print_warnings(&summary.warnings);
	}

	match rows {
		Some(rows) if !embed_rows => write_rows(rows, output),
		_ => Ok(()),
	}
}

fn run_debug(plays: &[PlayRecord], scope: &Scope) {
	let report = debug_report(plays, scope);
	if report.summary.is_scope_empty() {
		println!("no plays matched {} {} {} week {}", scope.passer, scope.team, scope.season, scope.week);
		return;
	}

	for entry in &report.entries {
		println!("{}", describe_scoped(entry));
	}

	println!("-- {} attempts of {} scoped plays", report.summary.attempts, report.summary.scope_matches.plays());
	print_warnings(&report.summary.warnings);
}

fn run_team_totals(plays: &[PlayRecord], schedule: Option<&Path>, through_week: u8, per_game: bool, output: Option<&Path>) -> anyhow::Result<()> {
	let games = team_game_totals(plays);
	let Some(schedule) = schedule else {
		return if per_game {
			write_rows(games.iter().filter(|game| game.week <= through_week), output)
		} else {
			write_rows(season_to_date(&games, through_week), output)
		};
	};

	let loaded = read_schedule(schedule).with_context(|| format!("could not load {}", schedule.display()))?;
	if !loaded.skipped.is_empty() {
		tracing::warn!(skipped = loaded.skipped.len(), "some schedule rows could not be read and were left out");
	}

	if per_game {
		write_rows(team_game_results(&loaded.games).iter().filter(|result| result.week <= through_week), output)
	} else {
		write_rows(season_standings(&loaded.games, &games, through_week), output)
	}
}

fn print_warnings(warnings: &[DataWarning]) {
	for warning in warnings {
		match warning {
			DataWarning::AmbiguousAttribution { game_id, play_id } => {
				println!("warning: play {play_id} in {game_id} appears more than once, first record used");
			}
		}
	}
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
	use tracing_subscriber::layer::SubscriberExt;

	let filter = match config.rust_log.as_deref() {
		Some(directives) => EnvFilter::try_new(directives).with_context(|| format!("invalid RUST_LOG directives: {directives}"))?,
		None => EnvFilter::new("warn"),
	};

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_writer(std::io::stderr)
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_writer(std::io::stderr)
					.with_filter(filter),
			)
		})
		.try_init()?;
	Ok(())
}
