//! Query handlers for the Leaderboard context.
//!
//! Leaderboards are computed on demand from a fixture's generated events
//! and the selections recorded for it; nothing here is stored.

use kickoff_core::error::DomainError;
use kickoff_core::ids::{FixtureId, UserId};
use kickoff_core::repository::SelectionRepository;
use kickoff_fixture::domain::fixture::Event;
use serde::Serialize;
use tracing::debug;

use crate::domain::scoring::{rank, score};

/// A user's standing in a fixture.
#[derive(Debug, Serialize)]
pub struct LeaderboardView {
    /// One plus the number of players with more points.
    pub user_rank: usize,
    /// Number of users with at least one selection for the fixture.
    pub number_of_users_playing_fixture: usize,
    /// The user's points for the fixture.
    pub user_points: u32,
}

/// One row of the full standings table.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StandingView {
    /// Shared rank; tied users have the same rank.
    pub rank: usize,
    /// The user.
    pub user_id: UserId,
    /// Points scored.
    pub points: u32,
}

async fn scores_by_user(
    fixture_id: &FixtureId,
    events: &[Event],
    repo: &dyn SelectionRepository,
) -> Result<Vec<(UserId, u32)>, DomainError> {
    let players = repo.get_users_playing_fixture(fixture_id).await?;
    let mut scores = Vec::with_capacity(players.len());
    for user_id in players {
        let selections = repo.get_selected_events(&user_id, fixture_id).await?;
        let points = score(events, &selections);
        scores.push((user_id, points));
    }
    Ok(scores)
}

/// Computes a user's rank among everyone playing the fixture.
///
/// A user who has not selected anything scores zero and is ranked against
/// the players, but is not counted as playing.
///
/// # Errors
///
/// Returns the repository error if the store fails.
pub async fn get_leaderboard(
    fixture_id: &FixtureId,
    user_id: &UserId,
    events: &[Event],
    repo: &dyn SelectionRepository,
) -> Result<LeaderboardView, DomainError> {
    let scores = scores_by_user(fixture_id, events, repo).await?;

    let user_points = match scores.iter().find(|(player, _)| player == user_id) {
        Some((_, points)) => *points,
        None => score(events, &repo.get_selected_events(user_id, fixture_id).await?),
    };
    let user_rank = rank(
        user_points,
        scores
            .iter()
            .filter(|(player, _)| player != user_id)
            .map(|(_, points)| *points),
    );

    debug!(%fixture_id, %user_id, user_points, user_rank, "computed leaderboard");

    Ok(LeaderboardView {
        user_rank,
        number_of_users_playing_fixture: scores.len(),
        user_points,
    })
}

/// Computes the full standings for a fixture, best first. Ties share a rank
/// and are ordered by user id.
///
/// # Errors
///
/// Returns the repository error if the store fails.
pub async fn get_standings(
    fixture_id: &FixtureId,
    events: &[Event],
    repo: &dyn SelectionRepository,
) -> Result<Vec<StandingView>, DomainError> {
    let scores = scores_by_user(fixture_id, events, repo).await?;
    let all_points: Vec<u32> = scores.iter().map(|(_, points)| *points).collect();

    let mut standings: Vec<StandingView> = scores
        .into_iter()
        .map(|(user_id, points)| StandingView {
            rank: rank(points, all_points.iter().copied()),
            user_id,
            points,
        })
        .collect();
    standings.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.user_id.cmp(&b.user_id)));
    Ok(standings)
}

#[cfg(test)]
mod tests {
    use kickoff_core::error::DomainError;
    use kickoff_core::ids::{FixtureId, UserId};
    use kickoff_fixture::domain::fixture::Event;
    use kickoff_test_support::{FailingSelectionRepository, RecordingSelectionRepository};

    use crate::application::query_handlers::{StandingView, get_leaderboard, get_standings};

    fn event(name: &str, points: u32, has_occured: bool) -> Event {
        Event {
            name: name.to_owned(),
            points,
            image_url: String::new(),
            has_occured,
        }
    }

    fn events() -> Vec<Event> {
        vec![
            event("Kaka scores a goal", 8, true),
            event("Zidane makes a tackle", 2, true),
            event("Figo scores a goal", 8, false),
        ]
    }

    fn fixture() -> FixtureId {
        FixtureId::new("593320")
    }

    fn repo() -> RecordingSelectionRepository {
        RecordingSelectionRepository::new()
            .with_selections("alice", "593320", &["Kaka scores a goal", "Figo scores a goal"])
            .with_selections("bob", "593320", &["Zidane makes a tackle"])
            .with_selections("carol", "593320", &["Kaka scores a goal"])
            .with_selections("dave", "other", &["Kaka scores a goal", "Zidane makes a tackle"])
    }

    #[tokio::test]
    async fn test_get_leaderboard_ranks_user_among_players() {
        // Act
        let view = get_leaderboard(&fixture(), &UserId::new("bob"), &events(), &repo())
            .await
            .unwrap();

        // Assert
        assert_eq!(view.user_points, 2);
        assert_eq!(view.user_rank, 3);
        assert_eq!(view.number_of_users_playing_fixture, 3);
    }

    #[tokio::test]
    async fn test_get_leaderboard_ties_share_first_place() {
        let view = get_leaderboard(&fixture(), &UserId::new("carol"), &events(), &repo())
            .await
            .unwrap();

        assert_eq!(view.user_points, 8);
        assert_eq!(view.user_rank, 1);
    }

    #[tokio::test]
    async fn test_get_leaderboard_for_user_without_selections() {
        let view = get_leaderboard(&fixture(), &UserId::new("erin"), &events(), &repo())
            .await
            .unwrap();

        assert_eq!(view.user_points, 0);
        assert_eq!(view.user_rank, 4);
        assert_eq!(view.number_of_users_playing_fixture, 3);
    }

    #[tokio::test]
    async fn test_get_leaderboard_for_empty_fixture() {
        let view = get_leaderboard(
            &FixtureId::new("empty"),
            &UserId::new("alice"),
            &events(),
            &repo(),
        )
        .await
        .unwrap();

        assert_eq!(view.user_rank, 1);
        assert_eq!(view.number_of_users_playing_fixture, 0);
        assert_eq!(view.user_points, 0);
    }

    #[tokio::test]
    async fn test_get_standings_orders_by_rank_then_user() {
        // Act
        let standings = get_standings(&fixture(), &events(), &repo()).await.unwrap();

        // Assert
        assert_eq!(
            standings,
            vec![
                StandingView {
                    rank: 1,
                    user_id: UserId::new("alice"),
                    points: 8,
                },
                StandingView {
                    rank: 1,
                    user_id: UserId::new("carol"),
                    points: 8,
                },
                StandingView {
                    rank: 3,
                    user_id: UserId::new("bob"),
                    points: 2,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_get_leaderboard_propagates_repository_failure() {
        let result = get_leaderboard(
            &fixture(),
            &UserId::new("alice"),
            &events(),
            &FailingSelectionRepository,
        )
        .await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
