#[cfg(test)]
mod attempt_filter_tests {
	use nfl_play_filter::filter::{Classification, ExclusionRule};
	use nfl_play_filter::schema::PenaltyType;
	use nfl_play_filter::*;

	// ========================================================================
	// Helper Functions
	// ========================================================================

	fn allen_week_one() -> Scope {
		Scope::new(2022, 1, "J.Allen", "BUF")
	}

	fn allen_pass(play_id: u32) -> PlayRecord {
		PlayRecord {
			game_id: Some("2022_01_BUF_LA".to_string()),
			play_id: Some(play_id.to_string()),
			season: 2022,
			week: 1,
			season_type: Some("REG".to_string()),
			posteam: "BUF".to_string(),
			passer_player_name: Some("J.Allen".to_string()),
			pass_attempt: Some(true),
			pass: true,
			play_type: Some("pass".to_string()),
			..PlayRecord::default()
		}
	}

	/// Completion, two-point try, no-play, DPI incompletion, throwaway.
	fn five_play_game() -> Vec<PlayRecord> {
		vec![
			PlayRecord {
				complete_pass: true,
				yards_gained: Some(14),
				..allen_pass(68)
			},
			PlayRecord {
				two_point_attempt: true,
				complete_pass: true,
				..allen_pass(411)
			},
			PlayRecord {
				no_play: true,
				play_type: Some("no_play".to_string()),
				penalty: true,
				penalty_type: PenaltyType::parse("False Start"),
				..allen_pass(590)
			},
			PlayRecord {
				penalty: true,
				penalty_type: PenaltyType::DefensivePassInterference,
				..allen_pass(802)
			},
			PlayRecord {
				is_throw_away: true,
				incomplete_pass: true,
				..allen_pass(1130)
			},
		]
	}

	fn other_games() -> Vec<PlayRecord> {
		vec![
			PlayRecord {
				complete_pass: true,
				week: 2,
				game_id: Some("2022_02_TEN_BUF".to_string()),
				..allen_pass(40)
			},
			PlayRecord {
				complete_pass: true,
				posteam: "LA".to_string(),
				passer_player_name: Some("M.Stafford".to_string()),
				..allen_pass(55)
			},
		]
	}

	fn with_noise(mut plays: Vec<PlayRecord>) -> Vec<PlayRecord> {
		let mut all = other_games();
		all.append(&mut plays);
		all.extend(other_games());
		all
	}

	// ========================================================================
	// Scenarios
	// ========================================================================

	#[test]
	fn test_five_play_scenario_counts_completion_and_throwaway() {
		let plays = with_noise(five_play_game());
		let report = count_attempts(&plays, &allen_week_one(), Detail::WithPlays);

		assert_eq!(report.attempts(), 2);
		assert_eq!(report.summary().scope_matches, ScopeMatch::Matched(5));
		assert_eq!(report.summary().excluded, 3);
		assert!(report.summary().warnings.is_empty());

		let kept: Vec<&str> = report.plays().unwrap().iter().filter_map(|play| play.play_id.as_deref()).collect();
		assert_eq!(kept, vec!["68", "1130"]);
	}

	#[test]
	fn test_empty_scope_is_distinct_from_zero_attempts() {
		let plays = with_noise(five_play_game());

		let missing = count_attempts(&plays, &Scope::new(2022, 1, "J.Allen", "MIA"), Detail::WithPlays);
		assert_eq!(missing.attempts(), 0);
		assert!(missing.is_scope_empty());
		assert_eq!(missing.summary().scope_matches, ScopeMatch::NoMatches);
		assert_eq!(missing.plays(), Some(&[][..]));

		let only_two_point = vec![PlayRecord {
			two_point_attempt: true,
			..allen_pass(411)
		}];
		let zero = count_attempts(&only_two_point, &allen_week_one(), Detail::CountOnly);
		assert_eq!(zero.attempts(), 0);
		assert!(!zero.is_scope_empty());
		assert_eq!(zero.summary().scope_matches.plays(), 1);
	}

	#[test]
	fn test_misattributed_spike_is_not_counted() {
		let spike = PlayRecord {
			qb_spike: true,
			pass_attempt: Some(true),
			incomplete_pass: true,
			passer_player_name: Some("M.Trubisky".to_string()),
			..allen_pass(1999)
		};
		let plays = vec![spike.clone()];
		let report = count_attempts(&plays, &allen_week_one(), Detail::CountOnly);
		assert_eq!(report.attempts(), 0);

		let scope = allen_week_one();
		let filter = AttemptFilter::default();
		assert_eq!(filter.classify(&spike, &scope), Classification::Excluded(ExclusionRule::MisattributedSpike));

		let attributed = PlayRecord {
			passer_player_name: Some("J.Allen".to_string()),
			..spike
		};
		assert_eq!(filter.classify(&attributed, &scope), Classification::Attempt);
	}

	// ========================================================================
	// Properties
	// ========================================================================

	#[test]
	fn test_repeated_calls_are_identical() {
		let plays = with_noise(five_play_game());
		let first = count_attempts(&plays, &allen_week_one(), Detail::WithPlays);
		let second = count_attempts(&plays, &allen_week_one(), Detail::WithPlays);

		assert_eq!(first, second);
	}

	#[test]
	fn test_details_are_an_ordered_subset_of_scope() {
		let plays = with_noise(five_play_game());
		let scope = allen_week_one();
		let view = debug_mismatch(&plays, &scope);

		assert_eq!(view.scoped.len(), 5);
		assert!(view.scoped.iter().all(|play| scope.contains(play)));

		let mut cursor = view.scoped.iter();
		for kept in &view.qualifying {
			assert!(cursor.any(|scoped| std::ptr::eq(*scoped, *kept)), "qualifying play out of scope order");
		}

		let report = count_attempts(&plays, &scope, Detail::WithPlays);
		assert_eq!(report.plays().unwrap(), view.qualifying.as_slice());
	}

	#[test]
	fn test_two_point_attempt_never_counts() {
		let variants = vec![
			PlayRecord { complete_pass: true, ..allen_pass(1) },
			PlayRecord { is_throw_away: true, ..allen_pass(2) },
			PlayRecord { qb_spike: true, ..allen_pass(3) },
			PlayRecord {
				penalty: true,
				penalty_type: PenaltyType::DefensiveHolding,
				complete_pass: true,
				..allen_pass(4)
			},
		];
		let plays: Vec<PlayRecord> = variants.into_iter().map(|play| PlayRecord { two_point_attempt: true, ..play }).collect();

		let report = count_attempts(&plays, &allen_week_one(), Detail::WithPlays);
		assert_eq!(report.attempts(), 0);
		assert!(report.plays().unwrap().is_empty());
	}

	#[test]
	fn test_defensive_pass_interference_depends_on_result() {
		let incomplete = PlayRecord {
			penalty: true,
			penalty_type: PenaltyType::DefensivePassInterference,
			..allen_pass(10)
		};
		let complete = PlayRecord {
			penalty: true,
			penalty_type: PenaltyType::DefensivePassInterference,
			complete_pass: true,
			..allen_pass(11)
		};
		let plays = vec![incomplete, complete];

		let classified = explain(&plays, &allen_week_one());
		assert_eq!(classified.len(), 2);
		assert_eq!(classified[0].classification, Classification::Excluded(ExclusionRule::DefensivePenaltyIncompletion));
		assert_eq!(classified[1].classification, Classification::Attempt);

		let report = count_attempts(&plays, &allen_week_one(), Detail::CountOnly);
		assert_eq!(report.attempts(), 1);
		assert!(report.summary().warnings.is_empty());
	}

	#[test]
	fn test_illegal_contact_and_holding_follow_the_same_rule() {
		for penalty_type in [PenaltyType::IllegalContact, PenaltyType::DefensiveHolding] {
			let plays = vec![PlayRecord {
				penalty: true,
				penalty_type,
				..allen_pass(12)
			}];
			assert_eq!(count_attempts(&plays, &allen_week_one(), Detail::CountOnly).attempts(), 0);
		}
	}

	#[test]
	fn test_throwaway_counts_under_either_column() {
		let plays = vec![
			PlayRecord {
				throwaway: true,
				incomplete_pass: true,
				..allen_pass(20)
			},
			PlayRecord {
				is_throw_away: true,
				incomplete_pass: true,
				..allen_pass(21)
			},
		];

		let report = count_attempts(&plays, &allen_week_one(), Detail::WithPlays);
		assert_eq!(report.attempts(), 2);
		assert!(report.plays().unwrap().iter().all(|play| play.is_throwaway()));
	}

	#[test]
	fn test_offsetting_penalty_and_sack_are_excluded() {
		let plays = vec![
			PlayRecord {
				penalty: true,
				offsetting_penalty: true,
				complete_pass: true,
				..allen_pass(30)
			},
			PlayRecord {
				sack: true,
				yards_gained: Some(-7),
				..allen_pass(31)
			},
		];

		let classified = explain(&plays, &allen_week_one());
		assert_eq!(classified[0].classification, Classification::Excluded(ExclusionRule::OffsettingPenalty));
		assert_eq!(classified[1].classification, Classification::Excluded(ExclusionRule::Sack));
	}

	#[test]
	fn test_malformed_record_is_skipped_not_fatal() {
		let plays = vec![
			PlayRecord {
				pass_attempt: None,
				..allen_pass(40)
			},
			PlayRecord {
				complete_pass: true,
				..allen_pass(41)
			},
		];

		let report = count_attempts(&plays, &allen_week_one(), Detail::CountOnly);
		assert_eq!(report.attempts(), 1);
		assert_eq!(report.summary().excluded, 1);
		assert_eq!(explain(&plays, &allen_week_one())[0].classification, Classification::Excluded(ExclusionRule::MalformedRecord));
	}

	#[test]
	fn test_every_scoped_play_has_exactly_one_classification() {
		let plays = with_noise(five_play_game());
		let classified = explain(&plays, &allen_week_one());
		let report = count_attempts(&plays, &allen_week_one(), Detail::CountOnly);

		let attempts = classified.iter().filter(|entry| entry.classification.is_attempt()).count();
		assert_eq!(classified.len(), 5);
		assert_eq!(attempts, report.attempts());
		assert_eq!(classified.len() - attempts, report.summary().excluded);
	}
}
