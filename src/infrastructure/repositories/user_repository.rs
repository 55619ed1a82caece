//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    CreateUserInput, DomainError, UpdateUserInput, User, UserFilter, UserRepository,
};
use crate::models::user::{ActiveModel, Column, Entity as UserEntity, Model};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_entity(model: Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        organisation_id: model.organisation_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get(&self, id: i32) -> Result<User, DomainError> {
        let user = UserEntity::find_by_id(id).one(&self.db).await?;

        user.map(to_entity).ok_or(DomainError::NotFound)
    }

    async fn list(&self, filter: UserFilter) -> Result<Vec<User>, DomainError> {
        let mut query = UserEntity::find();

        if let Some(organisation_id) = filter.organisation_id {
            query = query.filter(Column::OrganisationId.eq(organisation_id));
        }

        let users = query.order_by_asc(Column::Id).all(&self.db).await?;

        Ok(users.into_iter().map(to_entity).collect())
    }

    async fn create(&self, input: CreateUserInput) -> Result<User, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let user = ActiveModel {
            username: Set(input.username),
            email: Set(input.email),
            organisation_id: Set(input.organisation_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = user.insert(&self.db).await?;

        Ok(to_entity(model))
    }

    async fn update(&self, id: i32, changes: UpdateUserInput) -> Result<User, DomainError> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut user: ActiveModel = model.into();

        if let Some(username) = changes.username {
            user.username = Set(username);
        }
        if let Some(email) = changes.email {
            user.email = Set(email);
        }
        if let Some(organisation_id) = changes.organisation_id {
            user.organisation_id = Set(organisation_id);
        }
        user.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let model = user.update(&self.db).await?;

        Ok(to_entity(model))
    }
}
