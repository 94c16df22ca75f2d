//! Query handlers for the Selection context.

use kickoff_core::error::DomainError;
use kickoff_core::ids::{FixtureId, UserId};
use kickoff_core::repository::SelectionRepository;
use serde::Serialize;

/// Read-only view of one user's selections for a fixture.
#[derive(Debug, Serialize)]
pub struct SelectionsView {
    /// The fixture the selections belong to.
    pub fixture_id: FixtureId,
    /// The selecting user.
    pub user_id: UserId,
    /// Selected event names, in selection order.
    pub event_names: Vec<String>,
}

/// Read-only view of who is playing a fixture.
#[derive(Debug, Serialize)]
pub struct PlayersView {
    /// The fixture.
    pub fixture_id: FixtureId,
    /// Users with at least one selection, sorted.
    pub user_ids: Vec<UserId>,
}

/// Retrieves a user's selections for a fixture. A user who has selected
/// nothing gets an empty list.
///
/// # Errors
///
/// Returns the repository error if the store fails.
pub async fn get_selections(
    user_id: &UserId,
    fixture_id: &FixtureId,
    repo: &dyn SelectionRepository,
) -> Result<SelectionsView, DomainError> {
    let event_names = repo.get_selected_events(user_id, fixture_id).await?;
    Ok(SelectionsView {
        fixture_id: fixture_id.clone(),
        user_id: user_id.clone(),
        event_names,
    })
}

/// Retrieves every user playing a fixture.
///
/// # Errors
///
/// Returns the repository error if the store fails.
pub async fn get_players(
    fixture_id: &FixtureId,
    repo: &dyn SelectionRepository,
) -> Result<PlayersView, DomainError> {
    let user_ids = repo
        .get_users_playing_fixture(fixture_id)
        .await?
        .into_iter()
        .collect();
    Ok(PlayersView {
        fixture_id: fixture_id.clone(),
        user_ids,
    })
}

#[cfg(test)]
mod tests {
    use kickoff_core::error::DomainError;
    use kickoff_core::ids::{FixtureId, UserId};
    use kickoff_test_support::{FailingSelectionRepository, RecordingSelectionRepository};

    use crate::application::query_handlers::{get_players, get_selections};

    #[tokio::test]
    async fn test_get_selections_returns_view_with_event_names() {
        // Arrange
        let repo = RecordingSelectionRepository::new().with_selections(
            "kaka",
            "593320",
            &["Figo scores a goal", "Zidane makes a tackle"],
        );

        // Act
        let view = get_selections(&UserId::new("kaka"), &FixtureId::new("593320"), &repo)
            .await
            .unwrap();

        // Assert
        assert_eq!(view.user_id, UserId::new("kaka"));
        assert_eq!(view.fixture_id, FixtureId::new("593320"));
        assert_eq!(
            view.event_names,
            vec!["Figo scores a goal", "Zidane makes a tackle"]
        );
    }

    #[tokio::test]
    async fn test_get_selections_is_empty_for_new_user() {
        let repo = RecordingSelectionRepository::new();

        let view = get_selections(&UserId::new("new"), &FixtureId::new("593320"), &repo)
            .await
            .unwrap();

        assert!(view.event_names.is_empty());
    }

    #[tokio::test]
    async fn test_get_players_lists_users_of_fixture_only() {
        // Arrange
        let repo = RecordingSelectionRepository::new()
            .with_selections("zidane", "593320", &["a"])
            .with_selections("kaka", "593320", &["b"])
            .with_selections("figo", "other", &["c"]);

        // Act
        let view = get_players(&FixtureId::new("593320"), &repo).await.unwrap();

        // Assert
        assert_eq!(view.user_ids, vec![UserId::new("kaka"), UserId::new("zidane")]);
    }

    #[tokio::test]
    async fn test_get_players_propagates_repository_failure() {
        let result = get_players(&FixtureId::new("593320"), &FailingSelectionRepository).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
