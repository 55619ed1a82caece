//! User use cases

use std::sync::Arc;

use crate::domain::{
    CreateUserInput, DomainError, OrganisationRepository, UpdateUserInput, User, UserFilter,
    UserRepository,
};

/// List users, optionally scoped to one organisation.
pub struct ListUsers {
    users: Arc<dyn UserRepository>,
}

impl ListUsers {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, filter: UserFilter) -> Result<Vec<User>, DomainError> {
        self.users.list(filter).await
    }
}

/// Fetch a single user by id.
pub struct GetUser {
    users: Arc<dyn UserRepository>,
}

impl GetUser {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, id: i32) -> Result<User, DomainError> {
        self.users.get(id).await
    }
}

/// Create a user. A referenced organisation must exist before the user
/// is persisted; nothing is written when the reference is dangling.
pub struct CreateUser {
    users: Arc<dyn UserRepository>,
    organisations: Arc<dyn OrganisationRepository>,
}

impl CreateUser {
    pub fn new(
        users: Arc<dyn UserRepository>,
        organisations: Arc<dyn OrganisationRepository>,
    ) -> Self {
        Self {
            users,
            organisations,
        }
    }

    pub async fn execute(&self, input: CreateUserInput) -> Result<User, DomainError> {
        input.validate()?;

        if let Some(organisation_id) = input.organisation_id {
            self.organisations.get(organisation_id).await?;
        }

        self.users.create(input).await
    }
}

/// Apply partial changes to an existing user.
pub struct UpdateUser {
    users: Arc<dyn UserRepository>,
    organisations: Arc<dyn OrganisationRepository>,
}

impl UpdateUser {
    pub fn new(
        users: Arc<dyn UserRepository>,
        organisations: Arc<dyn OrganisationRepository>,
    ) -> Self {
        Self {
            users,
            organisations,
        }
    }

    pub async fn execute(&self, id: i32, changes: UpdateUserInput) -> Result<User, DomainError> {
        changes.validate()?;

        // Moving a user into an organisation requires it to exist;
        // clearing the membership (Some(None)) does not.
        if let Some(Some(organisation_id)) = changes.organisation_id {
            self.organisations.get(organisation_id).await?;
        }

        self.users.update(id, changes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{InMemoryOrganisationRepository, InMemoryUserRepository};

    fn repos() -> (Arc<InMemoryUserRepository>, Arc<InMemoryOrganisationRepository>) {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryOrganisationRepository::new()),
        )
    }

    #[tokio::test]
    async fn create_user_generates_id_and_round_trips() {
        let (users, organisations) = repos();

        let created = CreateUser::new(users.clone(), organisations)
            .execute(CreateUserInput {
                username: "bob".to_string(),
                email: "bob@example.org".to_string(),
                organisation_id: None,
            })
            .await
            .unwrap();

        assert!(created.id > 0);

        let fetched = GetUser::new(users.clone()).execute(created.id).await.unwrap();
        assert_eq!(fetched, created);

        // get is idempotent on an unmodified entity
        let again = GetUser::new(users).execute(created.id).await.unwrap();
        assert_eq!(again, fetched);
    }

    #[tokio::test]
    async fn create_user_rejects_missing_fields() {
        let (users, organisations) = repos();

        let err = CreateUser::new(users, organisations)
            .execute(CreateUserInput {
                username: "".to_string(),
                email: "bob@example.org".to_string(),
                organisation_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn create_user_with_unknown_organisation_persists_nothing() {
        let (users, organisations) = repos();

        let err = CreateUser::new(users.clone(), organisations)
            .execute(CreateUserInput {
                username: "bob".to_string(),
                email: "bob@example.org".to_string(),
                organisation_id: Some(42),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound));

        let listed = ListUsers::new(users)
            .execute(UserFilter::default())
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn create_user_duplicate_username_conflicts() {
        let (users, organisations) = repos();

        let input = CreateUserInput {
            username: "bob".to_string(),
            email: "bob@example.org".to_string(),
            organisation_id: None,
        };

        CreateUser::new(users.clone(), organisations.clone())
            .execute(input.clone())
            .await
            .unwrap();

        let err = CreateUser::new(users, organisations)
            .execute(input)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found_and_creates_nothing() {
        let (users, organisations) = repos();

        let err = UpdateUser::new(users.clone(), organisations)
            .execute(
                999,
                UpdateUserInput {
                    username: Some("ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound));

        let listed = ListUsers::new(users)
            .execute(UserFilter::default())
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn update_user_applies_partial_changes() {
        let (users, organisations) = repos();

        let created = CreateUser::new(users.clone(), organisations.clone())
            .execute(CreateUserInput {
                username: "bob".to_string(),
                email: "bob@example.org".to_string(),
                organisation_id: None,
            })
            .await
            .unwrap();

        let updated = UpdateUser::new(users, organisations)
            .execute(
                created.id,
                UpdateUserInput {
                    email: Some("bob@acme.example".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.username, "bob");
        assert_eq!(updated.email, "bob@acme.example");
    }

    #[tokio::test]
    async fn list_users_filters_by_organisation() {
        let (users, organisations) = repos();
        let org = organisations.seed("Acme");

        CreateUser::new(users.clone(), organisations.clone())
            .execute(CreateUserInput {
                username: "alice".to_string(),
                email: "alice@example.org".to_string(),
                organisation_id: Some(org.id),
            })
            .await
            .unwrap();
        CreateUser::new(users.clone(), organisations)
            .execute(CreateUserInput {
                username: "bob".to_string(),
                email: "bob@example.org".to_string(),
                organisation_id: None,
            })
            .await
            .unwrap();

        let members = ListUsers::new(users)
            .execute(UserFilter {
                organisation_id: Some(org.id),
            })
            .await
            .unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].username, "alice");
    }
}
