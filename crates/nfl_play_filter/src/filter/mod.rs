pub mod rules;

pub use rules::{ExclusionRule, RuleSet};

use crate::schema::PlayRecord;
use serde::Serialize;
use std::collections::HashSet;

/// One player-game: every field must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Scope {
	pub season: u16,
	pub week: u8,
	pub passer: String,
	pub team: String,
}

impl Scope {
	#[must_use]
	pub fn new(season: u16, week: u8, passer: impl Into<String>, team: impl Into<String>) -> Self {
		Self {
			season,
			week,
			passer: passer.into(),
			team: team.into(),
		}
	}

	#[must_use]
	pub fn contains(&self, play: &PlayRecord) -> bool {
		play.season == self.season && play.week == self.week && play.posteam == self.team && self.attributes(play)
	}

	/// Whether the play's passer of record is the scoped passer.
	#[must_use]
	pub fn attributes(&self, play: &PlayRecord) -> bool {
		play.passer_of_record() == Some(self.passer.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rule", rename_all = "snake_case")]
pub enum Classification {
	Attempt,
	Excluded(ExclusionRule),
}

impl Classification {
	#[must_use]
	pub const fn is_attempt(self) -> bool {
		matches!(self, Self::Attempt)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedPlay<'a> {
	pub play: &'a PlayRecord,
	pub classification: Classification,
}

/// Data-integrity problems found while scanning a scope. None of them stop the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataWarning {
	/// More than one scoped record claims the same provider play. The first one seen is used.
	AmbiguousAttribution { game_id: String, play_id: String },
}

/// How many raw records matched the scope before any rule ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "plays", rename_all = "snake_case")]
pub enum ScopeMatch {
	NoMatches,
	Matched(usize),
}

impl ScopeMatch {
	const fn from_count(count: usize) -> Self {
		if count == 0 {
			Self::NoMatches
		} else {
			Self::Matched(count)
		}
	}

	#[must_use]
	pub const fn plays(self) -> usize {
		match self {
			Self::NoMatches => 0,
			Self::Matched(count) => count,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptSummary {
	pub scope_matches: ScopeMatch,
	pub attempts: usize,
	pub excluded: usize,
	pub warnings: Vec<DataWarning>,
}

impl AttemptSummary {
	/// True when the scope itself found nothing, as opposed to zero qualifying attempts.
	#[must_use]
	pub const fn is_scope_empty(&self) -> bool {
		matches!(self.scope_matches, ScopeMatch::NoMatches)
	}
}

/// Whether the qualifying plays travel with the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Detail {
	#[default]
	CountOnly,
	WithPlays,
}

impl From<bool> for Detail {
	fn from(with_plays: bool) -> Self {
		if with_plays {
			Self::WithPlays
		} else {
			Self::CountOnly
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptReport<'a> {
	Count(AttemptSummary),
	Detailed { summary: AttemptSummary, plays: Vec<&'a PlayRecord> },
}

impl<'a> AttemptReport<'a> {
	#[must_use]
	pub const fn summary(&self) -> &AttemptSummary {
		match self {
			Self::Count(summary) | Self::Detailed { summary, .. } => summary,
		}
	}

	#[must_use]
	pub const fn attempts(&self) -> usize {
		self.summary().attempts
	}

	#[must_use]
	pub const fn is_scope_empty(&self) -> bool {
		self.summary().is_scope_empty()
	}

	/// Qualifying plays in source order, when they were requested.
	#[must_use]
	pub fn plays(&self) -> Option<&[&'a PlayRecord]> {
		match self {
			Self::Count(_) => None,
			Self::Detailed { plays, .. } => Some(plays.as_slice()),
		}
	}
}

/// Side-by-side view for diffing what the filter dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchView<'a> {
	pub qualifying: Vec<&'a PlayRecord>,
	/// Every record in scope, duplicates included, in source order.
	pub scoped: Vec<&'a PlayRecord>,
}

/// A scoped record as the scan saw it, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopedPlay<'a> {
	Classified(ClassifiedPlay<'a>),
	/// Repeats a provider play already seen in this scope. Never classified.
	Duplicate(&'a PlayRecord),
}

impl<'a> ScopedPlay<'a> {
	#[must_use]
	pub const fn play(&self) -> &'a PlayRecord {
		match self {
			Self::Classified(entry) => entry.play,
			Self::Duplicate(play) => *play,
		}
	}

	#[must_use]
	pub const fn classification(&self) -> Option<Classification> {
		match self {
			Self::Classified(entry) => Some(entry.classification),
			Self::Duplicate(_) => None,
		}
	}

	const fn is_attempt(&self) -> bool {
		matches!(self.classification(), Some(Classification::Attempt))
	}
}

/// Everything one scan knows: each scoped record with its verdict, plus the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugReport<'a> {
	pub entries: Vec<ScopedPlay<'a>>,
	pub summary: AttemptSummary,
}

struct Scan<'a> {
	entries: Vec<ScopedPlay<'a>>,
	warnings: Vec<DataWarning>,
}

impl<'a> Scan<'a> {
	fn qualifying(&self) -> Vec<&'a PlayRecord> {
		self.entries.iter().filter(|entry| entry.is_attempt()).map(ScopedPlay::play).collect()
	}

	fn finish(self) -> (Vec<ScopedPlay<'a>>, AttemptSummary) {
		let classified = self.entries.iter().filter(|entry| entry.classification().is_some()).count();
		let attempts = self.entries.iter().filter(|entry| entry.is_attempt()).count();
		let summary = AttemptSummary {
			scope_matches: ScopeMatch::from_count(self.entries.len()),
			attempts,
			excluded: classified - attempts,
			warnings: self.warnings,
		};
		(self.entries, summary)
	}
}

/// Pass-attempt counter over an ordered rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptFilter {
	rules: RuleSet,
}

impl AttemptFilter {
	#[must_use]
	pub const fn new(rules: RuleSet) -> Self {
		Self { rules }
	}

	#[must_use]
	pub const fn rules(&self) -> &RuleSet {
		&self.rules
	}

	#[must_use]
	pub fn classify(&self, play: &PlayRecord, scope: &Scope) -> Classification {
		self.rules.first_violation(play, scope).map_or(Classification::Attempt, Classification::Excluded)
	}

	fn scan<'a>(&self, plays: &'a [PlayRecord], scope: &Scope) -> Scan<'a> {
		let mut seen = HashSet::new();
		let mut scan = Scan {
			entries: Vec::new(),
			warnings: Vec::new(),
		};

		for play in plays.iter().filter(|play| scope.contains(play)) {
			if let Some((game_id, play_id)) = play.play_key() {
				if !seen.insert((game_id, play_id)) {
					tracing::warn!(game_id, play_id, passer = %scope.passer, "duplicate play in scope, keeping first-seen record");
					scan.warnings.push(DataWarning::AmbiguousAttribution {
						game_id: game_id.to_string(),
						play_id: play_id.to_string(),
					});
					scan.entries.push(ScopedPlay::Duplicate(play));
					continue;
				}
			}

			let classification = self.classify(play, scope);
			if let Classification::Excluded(rule) = classification {
				tracing::debug!(game_id = ?play.game_id, play_id = ?play.play_id, %rule, "play excluded from attempt count");
			}
			scan.entries.push(ScopedPlay::Classified(ClassifiedPlay { play, classification }));
		}

		scan
	}

	/// Every scoped play paired with the reason it counted or not. Duplicates are left out.
	#[must_use]
	pub fn explain<'a>(&self, plays: &'a [PlayRecord], scope: &Scope) -> Vec<ClassifiedPlay<'a>> {
		self.scan(plays, scope)
			.entries
			.into_iter()
			.filter_map(|entry| match entry {
				ScopedPlay::Classified(classified) => Some(classified),
				ScopedPlay::Duplicate(_) => None,
			})
			.collect()
	}

	#[must_use]
	pub fn count_attempts<'a>(&self, plays: &'a [PlayRecord], scope: &Scope, detail: Detail) -> AttemptReport<'a> {
		let scan = self.scan(plays, scope);
		let qualifying = scan.qualifying();
		let (_, summary) = scan.finish();

		if summary.is_scope_empty() {
			tracing::info!(season = scope.season, week = scope.week, passer = %scope.passer, team = %scope.team, "no plays matched scope");
		}

		match detail {
			Detail::CountOnly => AttemptReport::Count(summary),
			Detail::WithPlays => AttemptReport::Detailed { summary, plays: qualifying },
		}
	}

	#[must_use]
	pub fn debug_mismatch<'a>(&self, plays: &'a [PlayRecord], scope: &Scope) -> MismatchView<'a> {
		let scan = self.scan(plays, scope);
		MismatchView {
			qualifying: scan.qualifying(),
			scoped: scan.entries.iter().map(ScopedPlay::play).collect(),
		}
	}

	/// Single-pass listing of every scoped record, duplicates in place, with the summary.
	#[must_use]
	pub fn debug_report<'a>(&self, plays: &'a [PlayRecord], scope: &Scope) -> DebugReport<'a> {
		let (entries, summary) = self.scan(plays, scope).finish();
		DebugReport { entries, summary }
	}
}

/// Counts official pass attempts for one player-game.
#[must_use]
pub fn count_attempts<'a>(plays: &'a [PlayRecord], scope: &Scope, detail: Detail) -> AttemptReport<'a> {
	AttemptFilter::default().count_attempts(plays, scope, detail)
}

#[must_use]
pub fn debug_mismatch<'a>(plays: &'a [PlayRecord], scope: &Scope) -> MismatchView<'a> {
	AttemptFilter::default().debug_mismatch(plays, scope)
}

#[must_use]
pub fn explain<'a>(plays: &'a [PlayRecord], scope: &Scope) -> Vec<ClassifiedPlay<'a>> {
	AttemptFilter::default().explain(plays, scope)
}

#[must_use]
pub fn debug_report<'a>(plays: &'a [PlayRecord], scope: &Scope) -> DebugReport<'a> {
	AttemptFilter::default().debug_report(plays, scope)
}
