//! Property tests for the raising state machine (pure domain).
//!
//! Contract under test:
//! - Points never decrease, and each successful raise adds exactly one.
//! - After a successful raise by X, only the other team may raise until it
//!   does or the round ends.
//! - Raising at or past one's own cap ends the round in the opponent's
//!   favor without touching the points.
//! - Ineligible raises change nothing.

use proptest::prelude::*;

use crate::domain::round::Round;
use crate::domain::team::Team;
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Points are monotone and raise eligibility alternates.
    #[test]
    fn prop_points_monotone_and_eligibility_alternates(
        (us_limit, them_limit) in test_gens::limits(),
        attempts in test_gens::raise_sequence(),
    ) {
        let mut round = Round::fresh(us_limit, them_limit).unwrap();
        for team in attempts {
            let eligible = round.can_raise(team);
            let points_before = round.points();
            let at_cap = points_before >= round.limit(team);

            round.raise(team);

            prop_assert!(round.points() >= points_before, "points must never decrease");
            match (eligible, at_cap) {
                (false, _) => {
                    // Out-of-turn or decided: nothing may change.
                    prop_assert_eq!(round.points(), points_before);
                }
                (true, true) => {
                    // Forfeit: opponent wins on the spot, stake untouched.
                    prop_assert_eq!(round.winner(), Some(team.other()));
                    prop_assert_eq!(round.points(), points_before);
                }
                (true, false) => {
                    prop_assert_eq!(round.points(), points_before + 1);
                    prop_assert!(!round.can_raise(team));
                    prop_assert!(round.can_raise(team.other()));
                }
            }
        }
    }

    /// Any sequence of raises ends once a side is forced past its cap, and
    /// the loser is always the team that attempted that raise.
    #[test]
    fn prop_forfeit_blames_the_raiser(
        (us_limit, them_limit) in test_gens::limits(),
        first in test_gens::team(),
    ) {
        let mut round = Round::fresh(us_limit, them_limit).unwrap();
        let mut turn = first;
        // Alternate strictly; a bounded cap guarantees termination.
        for _ in 0..(us_limit + them_limit + 2) {
            if round.decided() {
                break;
            }
            let at_cap = round.points() >= round.limit(turn);
            round.raise(turn);
            if at_cap {
                prop_assert_eq!(round.winner(), Some(turn.other()));
            }
            turn = turn.other();
        }
        prop_assert!(round.decided(), "alternating raises must hit a cap");
    }

    /// Round-trip law: a restored round is behaviorally indistinguishable.
    #[test]
    fn prop_round_record_round_trip(
        (us_limit, them_limit) in test_gens::limits(),
        attempts in test_gens::raise_sequence(),
    ) {
        let mut round = Round::fresh(us_limit, them_limit).unwrap();
        for team in attempts {
            round.raise(team);
        }

        let restored = Round::from_record(round.to_record()).unwrap();
        prop_assert_eq!(restored.points(), round.points());
        prop_assert_eq!(restored.winner(), round.winner());
        prop_assert_eq!(restored.can_raise(Team::Us), round.can_raise(Team::Us));
        prop_assert_eq!(restored.can_raise(Team::Them), round.can_raise(Team::Them));
        prop_assert_eq!(restored.to_record(), round.to_record());
    }
}
