use crate::filter::Scope;
use crate::schema::PlayRecord;
use serde::Serialize;
use std::fmt;

/// A single official-scoring rule that can knock a scoped play out of the attempt count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionRule {
	/// The provider never said whether this was a pass attempt.
	MalformedRecord,
	/// Conversions are tracked in their own statistic.
	TwoPointAttempt,
	OffsettingPenalty,
	NoPlay,
	/// DPI, illegal contact or defensive holding on a ball that fell incomplete.
	DefensivePenaltyIncompletion,
	Sack,
	/// Spike charted to someone other than the requested passer.
	MisattributedSpike,
	NotPassPlay,
}

impl ExclusionRule {
	#[must_use]
	pub fn excludes(self, play: &PlayRecord, scope: &Scope) -> bool {
		match self {
			Self::MalformedRecord => play.pass_attempt.is_none() && !play.qb_spike,
			Self::TwoPointAttempt => play.two_point_attempt,
			Self::OffsettingPenalty => play.is_offsetting(),
			Self::NoPlay => play.is_no_play(),
			Self::DefensivePenaltyIncompletion => play.penalty && play.penalty_type.is_defensive_pass_penalty() && play.is_otherwise_incomplete(),
			Self::Sack => play.sack,
			Self::MisattributedSpike => play.qb_spike && !scope.attributes(play),
			Self::NotPassPlay => !(play.is_designated_pass() || play.qb_spike),
		}
	}

	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::MalformedRecord => "malformed_record",
			Self::TwoPointAttempt => "two_point_attempt",
			Self::OffsettingPenalty => "offsetting_penalty",
			Self::NoPlay => "no_play",
			Self::DefensivePenaltyIncompletion => "defensive_penalty_incompletion",
			Self::Sack => "sack",
			Self::MisattributedSpike => "misattributed_spike",
			Self::NotPassPlay => "not_pass_play",
		}
	}
}

impl fmt::Display for ExclusionRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Ordered list of exclusion rules. The first rule that fires names the exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
	rules: Vec<ExclusionRule>,
}

impl RuleSet {
	/// The rules behind official passing attempts.
	#[must_use]
	pub fn official() -> Self {
		Self::new(vec![
			ExclusionRule::MalformedRecord,
			ExclusionRule::TwoPointAttempt,
			ExclusionRule::OffsettingPenalty,
			ExclusionRule::NoPlay,
			ExclusionRule::DefensivePenaltyIncompletion,
			ExclusionRule::Sack,
			ExclusionRule::MisattributedSpike,
			ExclusionRule::NotPassPlay,
		])
	}

	#[must_use]
	pub fn new(rules: Vec<ExclusionRule>) -> Self {
		let mut deduped = Vec::with_capacity(rules.len());
		for rule in rules {
			if !deduped.contains(&rule) {
				deduped.push(rule);
			}
		}
		Self { rules: deduped }
	}

	/// Drops one rule, keeping the order of the rest.
	#[must_use]
	pub fn without(mut self, rule: ExclusionRule) -> Self {
		self.rules.retain(|existing| *existing != rule);
		self
	}

	#[must_use]
	pub fn rules(&self) -> &[ExclusionRule] {
		&self.rules
	}

	#[must_use]
	pub fn first_violation(&self, play: &PlayRecord, scope: &Scope) -> Option<ExclusionRule> {
		self.rules.iter().copied().find(|rule| rule.excludes(play, scope))
	}
}

impl Default for RuleSet {
	fn default() -> Self {
		Self::official()
	}
}
