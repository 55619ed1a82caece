//! SeaORM implementation of DomainRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    CreateDomainInput, Domain, DomainError, DomainFilter, DomainRepository, UpdateDomainInput,
};
use crate::models::domain::{ActiveModel, Column, Entity as DomainEntity, Model};

/// SeaORM-based implementation of DomainRepository
pub struct SeaOrmDomainRepository {
    db: DatabaseConnection,
}

impl SeaOrmDomainRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_entity(model: Model) -> Domain {
    Domain {
        id: model.id,
        name: model.name,
        description: model.description,
        organisation_id: model.organisation_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl DomainRepository for SeaOrmDomainRepository {
    async fn get(&self, id: i32) -> Result<Domain, DomainError> {
        let domain = DomainEntity::find_by_id(id).one(&self.db).await?;

        domain.map(to_entity).ok_or(DomainError::NotFound)
    }

    async fn list(&self, filter: DomainFilter) -> Result<Vec<Domain>, DomainError> {
        let mut query = DomainEntity::find();

        if let Some(organisation_id) = filter.organisation_id {
            query = query.filter(Column::OrganisationId.eq(organisation_id));
        }

        let domains = query.order_by_asc(Column::Id).all(&self.db).await?;

        Ok(domains.into_iter().map(to_entity).collect())
    }

    async fn create(&self, input: CreateDomainInput) -> Result<Domain, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let domain = ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            organisation_id: Set(input.organisation_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = domain.insert(&self.db).await?;

        Ok(to_entity(model))
    }

    async fn update(&self, id: i32, changes: UpdateDomainInput) -> Result<Domain, DomainError> {
        let model = DomainEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut domain: ActiveModel = model.into();

        if let Some(name) = changes.name {
            domain.name = Set(name);
        }
        if let Some(description) = changes.description {
            domain.description = Set(description);
        }
        domain.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let model = domain.update(&self.db).await?;

        Ok(to_entity(model))
    }
}
