//! Profile data repository. Profiles are addressed by slug.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::profile::{Profile, SaveProfileParam};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every profile in creation order.
    pub async fn get_all(&self) -> Result<Vec<Profile>, DbErr> {
        let entities = entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Profile::from_entity).collect())
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Profile>, DbErr> {
        let entity = find_entity_by_slug(self.db, slug).await?;
        Ok(entity.map(Profile::from_entity))
    }

    /// Checks whether `slug` is used by a profile other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Profile::find().filter(entity::profile::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::profile::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, param: SaveProfileParam) -> Result<Profile, DbErr> {
        let now = Utc::now();

        let entity = entity::profile::ActiveModel {
            slug: ActiveValue::Set(param.slug),
            display_name: ActiveValue::Set(param.display_name),
            nickname: ActiveValue::Set(param.nickname),
            bio: ActiveValue::Set(param.bio),
            avatar_url: ActiveValue::Set(param.avatar_url),
            birthday: ActiveValue::Set(param.birthday),
            quote: ActiveValue::Set(param.quote),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    /// Updates the profile currently at `slug`; the param may carry a new slug.
    pub async fn update(
        &self,
        slug: &str,
        param: SaveProfileParam,
    ) -> Result<Option<Profile>, DbErr> {
        let Some(existing) = find_entity_by_slug(self.db, slug).await? else {
            return Ok(None);
        };

        let mut active: entity::profile::ActiveModel = existing.into();
        active.slug = ActiveValue::Set(param.slug);
        active.display_name = ActiveValue::Set(param.display_name);
        active.nickname = ActiveValue::Set(param.nickname);
        active.bio = ActiveValue::Set(param.bio);
        active.avatar_url = ActiveValue::Set(param.avatar_url);
        active.birthday = ActiveValue::Set(param.birthday);
        active.quote = ActiveValue::Set(param.quote);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Profile::from_entity(entity)))
    }

    pub async fn delete_by_slug(&self, slug: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Profile::delete_many()
            .filter(entity::profile::Column::Slug.eq(slug))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Profile::find().count(self.db).await
    }

    /// Slugs and last-modified timestamps of every profile, for the sitemap.
    pub async fn get_all_lastmod(&self) -> Result<Vec<(String, DateTime<Utc>)>, DbErr> {
        entity::prelude::Profile::find()
            .select_only()
            .column(entity::profile::Column::Slug)
            .column(entity::profile::Column::UpdatedAt)
            .order_by_asc(entity::profile::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }
}

async fn find_entity_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<entity::profile::Model>, DbErr> {
    entity::prelude::Profile::find()
        .filter(entity::profile::Column::Slug.eq(slug))
        .one(db)
        .await
}
