//! Event generator.
//!
//! Pairs a fixture's roster with the action catalogue. Actor `i` is paired
//! with action `i mod m`, so a roster longer than the catalogue wraps around
//! to the first action and a shorter one leaves the tail of the catalogue
//! unused. Output order follows the roster.

use std::collections::HashSet;

use kickoff_core::provider::Actor;

use crate::domain::actions::ActionKind;
use crate::domain::fixture::Event;

/// Builds the event name for an actor/action pairing.
#[must_use]
pub fn event_name(actor: &Actor, action: ActionKind) -> String {
    format!("{} {}", actor.name, action.description())
}

/// Pairs each actor with an action, cycling through `actions`.
///
/// Returns an empty list if either input is empty.
#[must_use]
pub fn pair_actors_with_actions<'a>(
    actors: &'a [Actor],
    actions: &[ActionKind],
) -> Vec<(&'a Actor, ActionKind)> {
    if actions.is_empty() {
        return Vec::new();
    }
    actors
        .iter()
        .enumerate()
        .map(|(index, actor)| (actor, actions[index % actions.len()]))
        .collect()
}

/// Returns the event names that `generate_events` would produce.
#[must_use]
pub fn match_actors_to_actions(actors: &[Actor], actions: &[ActionKind]) -> Vec<String> {
    pair_actors_with_actions(actors, actions)
        .into_iter()
        .map(|(actor, action)| event_name(actor, action))
        .collect()
}

/// Generates the predicted events for a fixture.
///
/// An event is flagged as occurred when its name is in `occurred_event_names`.
#[must_use]
pub fn generate_events(
    actors: &[Actor],
    actions: &[ActionKind],
    occurred_event_names: &HashSet<String>,
) -> Vec<Event> {
    pair_actors_with_actions(actors, actions)
        .into_iter()
        .map(|(actor, action)| {
            let name = event_name(actor, action);
            let has_occured = occurred_event_names.contains(&name);
            Event {
                name,
                points: action.points(),
                image_url: actor.image_url.clone(),
                has_occured,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use kickoff_test_support::actor;

    use super::*;
    use crate::domain::actions::{ActionCatalogue, ActionKind};

    const SCORES: ActionKind = ActionKind::ScoresAGoal;
    const TACKLES: ActionKind = ActionKind::MakesATackle;

    fn no_occurrences() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn test_match_returns_nothing_without_actors_or_actions() {
        assert!(match_actors_to_actions(&[], &[]).is_empty());
    }

    #[test]
    fn test_match_returns_nothing_without_actors() {
        assert!(match_actors_to_actions(&[], &[SCORES]).is_empty());
    }

    #[test]
    fn test_match_returns_nothing_without_actions() {
        assert!(match_actors_to_actions(&[actor("Kaka")], &[]).is_empty());
    }

    #[test]
    fn test_match_pairs_equal_actors_and_actions_in_order() {
        let actors = [actor("Kaka"), actor("Zidane")];

        let names = match_actors_to_actions(&actors, &[SCORES, TACKLES]);

        assert_eq!(names, vec!["Kaka scores a goal", "Zidane makes a tackle"]);
    }

    #[test]
    fn test_match_wraps_around_when_more_actors_than_actions() {
        let actors = [actor("Kaka"), actor("Zidane"), actor("Figo")];

        let names = match_actors_to_actions(&actors, &[SCORES, TACKLES]);

        assert_eq!(
            names,
            vec![
                "Kaka scores a goal",
                "Zidane makes a tackle",
                "Figo scores a goal"
            ]
        );
    }

    #[test]
    fn test_match_leaves_catalogue_tail_unused_when_fewer_actors() {
        let names = match_actors_to_actions(&[actor("Kaka")], &[SCORES, TACKLES]);

        assert_eq!(names, vec!["Kaka scores a goal"]);
    }

    #[test]
    fn test_generate_events_builds_scored_events() {
        // Arrange
        let kaka = actor("Kaka");

        // Act
        let events = generate_events(std::slice::from_ref(&kaka), &[SCORES], &no_occurrences());

        // Assert
        assert_eq!(
            events,
            vec![Event {
                name: "Kaka scores a goal".to_owned(),
                points: 8,
                image_url: kaka.image_url,
                has_occured: false,
            }]
        );
    }

    #[test]
    fn test_generate_events_marks_occurred_events() {
        // Arrange
        let actors = [actor("Kaka"), actor("Zidane")];
        let occurred: HashSet<String> = ["Kaka scores a goal".to_owned()].into();

        // Act
        let events = generate_events(&actors, &[SCORES], &occurred);

        // Assert
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "Kaka scores a goal");
        assert!(events[0].has_occured);
        assert_eq!(events[1].name, "Zidane scores a goal");
        assert!(!events[1].has_occured);
    }

    #[test]
    fn test_generate_events_ignores_occurrences_not_in_roster() {
        let occurred: HashSet<String> = ["Ronaldo scores a goal".to_owned()].into();

        let events = generate_events(&[actor("Kaka")], &[SCORES], &occurred);

        assert!(!events[0].has_occured);
    }

    #[test]
    fn test_generate_events_is_empty_for_empty_catalogue() {
        let actors = [actor("Kaka"), actor("Zidane")];

        assert!(generate_events(&actors, &[], &no_occurrences()).is_empty());
    }

    #[test]
    fn test_generate_events_has_one_event_per_actor_across_roster_sizes() {
        let catalogue = ActionCatalogue::standard();
        for size in [0, 1, 11, 22, 23, 50] {
            let actors: Vec<Actor> = (0..size).map(|i| actor(&format!("Player {i}"))).collect();

            let events = generate_events(&actors, catalogue.actions(), &no_occurrences());

            assert_eq!(events.len(), size);
            for (i, event) in events.iter().enumerate() {
                let action = catalogue.actions()[i % catalogue.len()];
                assert_eq!(event.name, format!("Player {i} {action}"));
                assert_eq!(event.points, action.points());
            }
        }
    }

    #[test]
    fn test_generate_events_is_deterministic() {
        let actors = [actor("Kaka"), actor("Zidane"), actor("Figo")];
        let catalogue = ActionCatalogue::standard();
        let occurred: HashSet<String> = ["Zidane concedes a penalty".to_owned()].into();

        let first = generate_events(&actors, catalogue.actions(), &occurred);
        let second = generate_events(&actors, catalogue.actions(), &occurred);

        assert_eq!(first, second);
        assert!(first[1].has_occured);
    }
}
