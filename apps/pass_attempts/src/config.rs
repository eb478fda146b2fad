use clap::{Args, Parser, Subcommand};
use nfl_play_filter::Scope;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Official pass attempt counts from play-by-play exports", long_about = None)]
pub struct Config {
	/// Play-by-play CSV export (nflfastR columns)
	#[arg(long, env = "PBP_FILE", value_name = "FILE")]
	pub input: PathBuf,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ScopeArgs {
	#[arg(long)]
	pub season: u16,

	#[arg(long)]
	pub week: u8,

	/// Passer as charted, e.g. J.Allen
	#[arg(long)]
	pub passer: String,

	/// Possession team code, e.g. BUF
	#[arg(long)]
	pub team: String,
}

impl ScopeArgs {
	pub fn to_scope(&self) -> Scope {
		Scope::new(self.season, self.week, self.passer.as_str(), self.team.as_str())
	}
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Count qualifying pass attempts for one player-game
	Count {
		#[command(flatten)]
		scope: ScopeArgs,

		/// Also emit the qualifying plays
		#[arg(long)]
		details: bool,

		/// Write qualifying plays to this CSV instead of stdout
		#[arg(long, value_name = "FILE", requires = "details")]
		output: Option<PathBuf>,

		/// Print the summary as JSON. Without --output the qualifying plays are embedded in it
		#[arg(long)]
		json: bool,
	},
	/// List every scoped play with the rule that excluded it
	Debug {
		#[command(flatten)]
		scope: ScopeArgs,
	},
	/// Turnovers and offensive yards per team, weeks 1 through N, with the win-loss record when a schedule is given
	TeamTotals {
		#[arg(long, default_value_t = 6)]
		through_week: u8,

		/// Season schedule CSV (game_type, home_team, away_team, home_score, away_score)
		#[arg(long, env = "SCHEDULE_FILE", value_name = "FILE")]
		schedule: Option<PathBuf>,

		/// Emit one row per team-game instead of the season rollup
		#[arg(long)]
		per_game: bool,

		#[arg(long, value_name = "FILE")]
		output: Option<PathBuf>,
	},
}
