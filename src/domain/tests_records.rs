//! Serialization contract tests: JSON encoding, per-version snapshots, and
//! rejection of records that break structural invariants.

use serde_json::json;

use crate::domain::game::Game;
use crate::domain::records::{GameRecord, RoundRecord, RoundResultRecord, SessionRecord};
use crate::domain::round::Round;
use crate::domain::round_result::RoundResult;
use crate::domain::session::Session;
use crate::domain::team::Team;
use crate::errors::domain::DomainError;

fn decided_game_record() -> GameRecord {
    GameRecord {
        goal: 3,
        rounds: vec![RoundResultRecord {
            points: 3,
            winner: Team::Us,
        }],
        current_round: None,
    }
}

#[test]
fn round_record_json_round_trip() {
    let mut round = Round::fresh(7, 11).unwrap();
    round.raise(Team::Them);

    let encoded = serde_json::to_value(round.to_record()).unwrap();
    let decoded: RoundRecord = serde_json::from_value(encoded).unwrap();
    let restored = Round::from_record(decoded).unwrap();
    assert_eq!(restored.to_record(), round.to_record());
}

#[test]
fn session_record_json_round_trip() {
    let mut session = Session::fresh();
    session.set_goal(3).unwrap();
    session.another_game().unwrap();
    session.declare_winner(Team::Us).unwrap();
    session.declare_winner(Team::Us).unwrap(); // finishes game 1
    session.another_game().unwrap();
    session.raise(Team::Them).unwrap();

    let encoded = serde_json::to_string(&session.to_record()).unwrap();
    let decoded: SessionRecord = serde_json::from_str(&encoded).unwrap();
    let restored = Session::from_record(decoded).unwrap();
    assert_eq!(restored.to_record(), session.to_record());
}

#[test]
fn unpersisted_session_omits_the_id_field() {
    let encoded = serde_json::to_value(Session::fresh().to_record()).unwrap();
    assert!(encoded.get("id").is_none());
}

// Schema snapshots: one pinned JSON document per historical version. These
// documents must keep loading forever; the schema only evolves additively.

#[test]
fn schema_v1_session_without_id_still_loads() {
    let v1 = json!({
        "goal": 11,
        "us_team": "we",
        "them_team": "they",
        "games": [{
            "goal": 11,
            "rounds": [
                {"points": 9, "winner": "Us"},
                {"points": 2, "winner": "Us"}
            ],
            "current_round": null
        }],
        "current_game": {
            "goal": 11,
            "rounds": [],
            "current_round": {
                "points": 4,
                "raised_last": "Them",
                "winner": null,
                "us_limit": 11,
                "them_limit": 11
            }
        }
    });

    let record: SessionRecord = serde_json::from_value(v1).unwrap();
    assert_eq!(record.id, None);

    let session = Session::from_record(record).unwrap();
    assert_eq!(session.games().len(), 1);
    let result = session.result().unwrap();
    assert_eq!(result.them_points, 2); // tailor win charged to the loser
    assert_eq!(
        session.current_game().unwrap().current_round().unwrap().points(),
        4
    );
}

#[test]
fn schema_v2_session_with_id_loads() {
    let v2 = json!({
        "id": 17,
        "goal": 11,
        "us_team": "",
        "them_team": "",
        "games": [],
        "current_game": null
    });

    let session = Session::from_record(serde_json::from_value(v2).unwrap()).unwrap();
    assert_eq!(session.id(), Some(17));
}

#[test]
fn wrong_primitive_shape_fails_at_the_serde_boundary() {
    let err = serde_json::from_value::<RoundRecord>(json!({
        "points": "two",
        "raised_last": null,
        "winner": null,
        "us_limit": 11,
        "them_limit": 11
    }))
    .unwrap_err();
    assert!(err.to_string().contains("invalid type"));

    let err = serde_json::from_value::<RoundRecord>(json!({
        "raised_last": null,
        "winner": null,
        "us_limit": 11,
        "them_limit": 11
    }))
    .unwrap_err();
    assert!(err.to_string().contains("missing field `points`"));

    // Negative values cannot sneak into unsigned fields.
    assert!(serde_json::from_value::<RoundResultRecord>(json!({
        "points": -3,
        "winner": "Us"
    }))
    .is_err());
}

#[test]
fn range_violations_name_the_field() {
    assert_eq!(
        RoundResult::from_record(RoundResultRecord {
            points: 1,
            winner: Team::Us,
        })
        .unwrap_err(),
        DomainError::OutOfRange {
            field: "points",
            constraint: "must be at least 2",
        }
    );

    let mut record = Game::fresh(11).unwrap().to_record();
    record.goal = 0;
    assert!(matches!(
        Game::from_record(record).unwrap_err(),
        DomainError::OutOfRange { field: "goal", .. }
    ));

    let mut record = Session::fresh().to_record();
    record.goal = 0;
    assert!(matches!(
        Session::from_record(record).unwrap_err(),
        DomainError::OutOfRange { field: "goal", .. }
    ));
}

#[test]
fn session_history_must_not_contain_a_live_round() {
    // A past game whose embedded current_round is non-null must be
    // rejected, never silently dropped.
    let mut past_game = decided_game_record();
    past_game.current_round = Some(Round::fresh(11, 11).unwrap().to_record());

    let record = SessionRecord {
        id: None,
        goal: 11,
        us_team: String::new(),
        them_team: String::new(),
        games: vec![past_game],
        current_game: None,
    };
    assert_eq!(
        Session::from_record(record).unwrap_err(),
        DomainError::UnexpectedCurrentRound
    );
}

#[test]
fn session_history_must_not_contain_an_unfinished_game() {
    let record = SessionRecord {
        id: None,
        goal: 11,
        us_team: String::new(),
        them_team: String::new(),
        games: vec![Game::fresh(11).unwrap().to_record()],
        current_game: None,
    };
    assert_eq!(
        Session::from_record(record).unwrap_err(),
        DomainError::UnfinishedPastGame
    );
}

#[test]
fn session_current_game_must_be_undecided() {
    let record = SessionRecord {
        id: None,
        goal: 11,
        us_team: String::new(),
        them_team: String::new(),
        games: vec![],
        current_game: Some(decided_game_record()),
    };
    assert_eq!(
        Session::from_record(record).unwrap_err(),
        DomainError::FinishedCurrentGame
    );
}
