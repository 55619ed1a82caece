//! SeaORM implementation of OrganisationRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{
    CreateOrganisationInput, DomainError, Organisation, OrganisationRepository,
    UpdateOrganisationInput,
};
use crate::models::organisation::{ActiveModel, Column, Entity as OrganisationEntity, Model};

/// SeaORM-based implementation of OrganisationRepository
pub struct SeaOrmOrganisationRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrganisationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_entity(model: Model) -> Organisation {
    Organisation {
        id: model.id,
        name: model.name,
        description: model.description,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl OrganisationRepository for SeaOrmOrganisationRepository {
    async fn get(&self, id: i32) -> Result<Organisation, DomainError> {
        let organisation = OrganisationEntity::find_by_id(id).one(&self.db).await?;

        organisation.map(to_entity).ok_or(DomainError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Organisation>, DomainError> {
        let organisations = OrganisationEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(organisations.into_iter().map(to_entity).collect())
    }

    async fn create(&self, input: CreateOrganisationInput) -> Result<Organisation, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let organisation = ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = organisation.insert(&self.db).await?;

        Ok(to_entity(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: UpdateOrganisationInput,
    ) -> Result<Organisation, DomainError> {
        let model = OrganisationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut organisation: ActiveModel = model.into();

        if let Some(name) = changes.name {
            organisation.name = Set(name);
        }
        if let Some(description) = changes.description {
            organisation.description = Set(description);
        }
        organisation.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let model = organisation.update(&self.db).await?;

        Ok(to_entity(model))
    }
}
