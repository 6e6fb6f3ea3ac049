use pantheon_tournament::prelude::*;
use tracing::{Level, Metadata};
use tracing_subscriber::{
    fmt,
    layer::{Context, Filter, SubscriberExt},
    Layer, Registry,
};

struct CustomLevelFilter;
impl<S> Filter<S> for CustomLevelFilter {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        meta.level() <= &Level::DEBUG
    }
}

fn init_debug_logger() {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    let reg = Registry::default().with(
        fmt::layer()
            .with_test_writer()
            .event_format(format)
            .with_filter(CustomLevelFilter),
    );

    let _ = tracing::subscriber::set_global_default(reg);
}

fn achille_vs_hector() -> Match {
    Match::new(
        Player::new("Achille", ["Zeus", "Athena", "Hades", "Ares", "Poseidon"]),
        Player::new("Hector", ["Ares", "Zeus", "Hades", "Athena", "Athena"]),
    )
}

#[test]
fn fixture_match() {
    init_debug_logger();

    let report = Evaluator::new(Configuration::new())
        .unwrap()
        .evaluate(&achille_vs_hector())
        .unwrap();

    let result = &report.result;
    assert_eq!(result.total_rounds, 5);
    assert_eq!(result.player_one_wins, 3);
    assert_eq!(result.player_two_wins, 1);
    assert_eq!(result.draws, 1);
    assert_eq!(result.winner, "Achille");
    assert_eq!(result.verdict, Verdict::PlayerOne);
    assert_eq!(result.player_one_win_rate, 60.0);
    assert_eq!(result.player_two_win_rate, 20.0);

    let stats = &report.statistics;
    assert_eq!(
        stats.longest_player_one_streak,
        WinStreak {
            length: 2,
            start_round: 1,
            end_round: 2
        }
    );
    assert_eq!(
        stats.longest_player_two_streak,
        WinStreak {
            length: 1,
            start_round: 4,
            end_round: 4
        }
    );
    let winners: Vec<_> = stats
        .round_history
        .iter()
        .map(|round| round.winner.as_str())
        .collect();
    assert_eq!(winners, vec!["Achille", "Achille", DRAW_LABEL, "Hector", "Achille"]);
}

#[test]
fn truncated_match() {
    init_debug_logger();

    let m = Match::new(
        Player::new("Achille", ["Zeus", "Zeus", "Zeus", "Hades", "Hades"]),
        Player::new("Hector", ["Ares", "Athena", "Zeus"]),
    );
    let report = Evaluator::new(Configuration::new().with_verbose(false))
        .unwrap()
        .evaluate(&m)
        .unwrap();

    assert_eq!(report.result.total_rounds, 3);
    assert_eq!(report.result.player_one_usage.get("Hades"), None);
    assert_eq!(report.statistics.round_history.len(), 3);
    assert_eq!(report.statistics.player_one_god_stats.len(), 1);
    assert_eq!(report.statistics.player_one_god_stats[0].usage_rate, 100.0);
}

#[test]
fn empty_match() {
    let m = Match::new(
        Player::new("Achille", Vec::<String>::new()),
        Player::new("Hector", ["Zeus"]),
    );
    let report = Evaluator::new(Configuration::new().with_verbose(false))
        .unwrap()
        .evaluate(&m)
        .unwrap();

    assert_eq!(report.result.winner, DRAW_LABEL);
    assert_eq!(report.result.player_one_win_rate, 0.0);
    assert_eq!(report.result.player_two_win_rate, 0.0);
    assert!(report.statistics.round_history.is_empty());
    assert!(report.statistics.head_to_head_matchups.is_empty());
    assert_eq!(report.statistics.longest_player_one_streak, WinStreak::default());
    assert!(report.player_one_top_factions.is_empty());
}

#[test]
fn unrecognized_moves_degrade_silently() {
    let m = Match::new(
        Player::new("Achille", ["Zeus", "Zeus", "Hermes", "Zeus"]),
        Player::new("Hector", ["Ares", "Ares", "Ares", "Ares"]),
    );
    let report = Evaluator::new(Configuration::new().with_verbose(false))
        .unwrap()
        .evaluate(&m)
        .unwrap();

    assert_eq!(report.result.player_one_wins, 3);
    assert_eq!(report.result.draws, 0);
    assert_eq!(report.result.unscored_rounds, 1);
    assert_eq!(report.result.player_one_usage.get("Hermes"), Some(1));

    let round = &report.statistics.round_history[2];
    assert_eq!(round.outcome, RoundWinner::Unscored);
    assert_eq!(round.winner, DRAW_LABEL);

    // the unscored round splits the streak
    assert_eq!(report.statistics.longest_player_one_streak.length, 2);
    assert_eq!(
        report.statistics.head_to_head_matchups[1],
        ("Hermes vs Ares".to_owned(), 1)
    );
}

#[test]
fn match_payload_from_json() {
    let json = r#"[
        {
            "player_one": { "name": "Achille", "moves": ["Zeus", "Athena", "Hades", "Ares", "Poseidon"] },
            "player_two": { "name": "Hector", "moves": ["Ares", "Zeus", "Hades", "Athena", "Athena"] }
        },
        {
            "player_one": { "name": "Ajax", "moves": ["Artemis"] },
            "player_two": { "name": "Paris", "moves": ["Zeus"] }
        }
    ]"#;
    let matches: Vec<Match> = serde_json::from_str(json).unwrap();
    assert_eq!(matches[0], achille_vs_hector());

    let reports = Evaluator::new(Configuration::new().with_verbose(false))
        .unwrap()
        .evaluate_all(&matches)
        .unwrap();
    assert_eq!(reports[0].result.winner, "Achille");
    // Artemis and Zeus do not dominate each other
    assert_eq!(reports[1].result.draws, 1);
    assert_eq!(reports[1].result.winner, DRAW_LABEL);
}

#[test]
fn custom_rules() {
    let mut table = pantheon_tournament::dominance::STANDARD_TABLE;
    table.reverse();
    let relation = DominanceRelation::from_table(&table).unwrap();

    let evaluator = Evaluator::with_relation(Configuration::new().with_verbose(false), relation)
        .unwrap();
    let report = evaluator.evaluate(&achille_vs_hector()).unwrap();
    // row order does not change the rules
    assert_eq!(report.result.player_one_wins, 3);

    let mut broken = pantheon_tournament::dominance::STANDARD_TABLE;
    broken[0] = (Faction::Zeus, [Faction::Athena, Faction::Ares]);
    assert!(DominanceRelation::from_table(&broken).is_err());
}

#[test]
fn report_with_repeated_usage_entry_is_rejected() {
    let report = Evaluator::new(Configuration::new().with_verbose(false))
        .unwrap()
        .evaluate(&achille_vs_hector())
        .unwrap();

    let mut json = serde_json::to_value(&report).unwrap();
    let parsed: MatchReport = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(parsed, report);

    json["result"]["player_one_usage"] = serde_json::json!([["Zeus", u32::MAX], ["Zeus", 1]]);
    assert!(serde_json::from_value::<MatchReport>(json).is_err());
}
