//! Guestbook service: signing, moderation and change broadcasting.

pub mod feed;

use entity::guestbook_entry::GuestbookStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::guestbook::GuestbookRepository,
    error::AppError,
    model::{
        guestbook::{GuestbookEntry, GuestbookEvent, GuestbookEventKind, SignGuestbookParam},
        page::{Page, PageParam},
    },
    service::guestbook::feed::GuestbookFeed,
};

pub struct GuestbookService<'a> {
    db: &'a DatabaseConnection,
    feed: &'a GuestbookFeed,
}

impl<'a> GuestbookService<'a> {
    pub fn new(db: &'a DatabaseConnection, feed: &'a GuestbookFeed) -> Self {
        Self { db, feed }
    }

    /// Approved entries for public display, newest first.
    pub async fn get_approved(&self, page: PageParam) -> Result<Page<GuestbookEntry>, AppError> {
        let repo = GuestbookRepository::new(self.db);
        let entries = repo
            .get_paginated(Some(GuestbookStatus::Approved), page)
            .await?;
        Ok(entries)
    }

    /// Entries of any (or one) status for moderation.
    pub async fn get_all(
        &self,
        status: Option<GuestbookStatus>,
        page: PageParam,
    ) -> Result<Page<GuestbookEntry>, AppError> {
        let repo = GuestbookRepository::new(self.db);
        let entries = repo.get_paginated(status, page).await?;
        Ok(entries)
    }

    /// Stores a pending entry and announces it on the admin feed.
    pub async fn sign(&self, param: SignGuestbookParam) -> Result<GuestbookEntry, AppError> {
        let repo = GuestbookRepository::new(self.db);
        let entry = repo.create(param).await?;

        tracing::info!("Guestbook entry {} submitted for moderation", entry.id);

        self.feed.publish(GuestbookEvent {
            kind: GuestbookEventKind::Submitted,
            entry: entry.clone(),
        });

        Ok(entry)
    }

    /// Sets an entry's status and publishes the change.
    ///
    /// Un-approving an entry publishes a public `Withdrawn` event so open pages drop it.
    ///
    /// # Returns
    /// - `Ok(GuestbookEntry)` - The moderated entry
    /// - `Err(AppError::NotFound)` - No entry with that id
    pub async fn moderate(
        &self,
        id: i32,
        status: GuestbookStatus,
    ) -> Result<GuestbookEntry, AppError> {
        let repo = GuestbookRepository::new(self.db);
        let Some(previous) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Guestbook entry not found".to_string()));
        };
        let Some(entry) = repo.set_status(id, status).await? else {
            return Err(AppError::NotFound("Guestbook entry not found".to_string()));
        };

        tracing::info!(
            "Guestbook entry {} moderated from {:?} to {:?}",
            entry.id,
            previous.status,
            entry.status
        );

        self.feed
            .publish(GuestbookEvent::moderation(previous.status, entry.clone()));

        Ok(entry)
    }

    /// Deletes an entry and publishes the deletion.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GuestbookRepository::new(self.db);
        let Some(entry) = repo.delete(id).await? else {
            return Err(AppError::NotFound("Guestbook entry not found".to_string()));
        };

        tracing::info!("Guestbook entry {} deleted", entry.id);

        self.feed.publish(GuestbookEvent {
            kind: GuestbookEventKind::Deleted,
            entry,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn sign_param() -> SignGuestbookParam {
        SignGuestbookParam {
            name: "Neighbor".to_string(),
            message: "Best wishes!".to_string(),
        }
    }

    #[tokio::test]
    async fn signing_publishes_private_event() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuestbookEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let feed = GuestbookFeed::default();
        let mut events = feed.subscribe();

        let entry = GuestbookService::new(db, &feed).sign(sign_param()).await?;

        let event = events.recv().await.unwrap();
        assert_eq!(event.kind, GuestbookEventKind::Submitted);
        assert_eq!(event.entry.id, entry.id);
        assert!(!event.is_public());

        Ok(())
    }

    #[tokio::test]
    async fn approval_publishes_public_event() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuestbookEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let feed = GuestbookFeed::default();

        let pending = factory::create_guestbook_entry(db).await?;
        let mut events = feed.subscribe();

        let service = GuestbookService::new(db, &feed);
        let approved = service
            .moderate(pending.id, GuestbookStatus::Approved)
            .await?;

        assert!(approved.moderated_at.is_some());
        let event = events.recv().await.unwrap();
        assert_eq!(event.kind, GuestbookEventKind::Moderated);
        assert!(event.is_public());

        let page = service
            .get_approved(PageParam {
                page: 0,
                per_page: 10,
            })
            .await?;
        assert_eq!(page.total, 1);

        Ok(())
    }

    /// Tests rejecting a previously approved entry.
    ///
    /// Expected: a public Withdrawn event carrying the rejected entry
    #[tokio::test]
    async fn unapproving_publishes_public_withdrawal() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuestbookEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let feed = GuestbookFeed::default();

        let pending = factory::create_guestbook_entry(db).await?;
        let service = GuestbookService::new(db, &feed);
        service
            .moderate(pending.id, GuestbookStatus::Approved)
            .await?;

        let mut events = feed.subscribe();
        service
            .moderate(pending.id, GuestbookStatus::Rejected)
            .await?;

        let event = events.recv().await.unwrap();
        assert_eq!(event.kind, GuestbookEventKind::Withdrawn);
        assert_eq!(event.entry.id, pending.id);
        assert_eq!(event.entry.status, GuestbookStatus::Rejected);
        assert!(event.is_public());

        Ok(())
    }

    #[tokio::test]
    async fn moderating_missing_entry_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuestbookEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let feed = GuestbookFeed::default();

        let result = GuestbookService::new(db, &feed)
            .moderate(3, GuestbookStatus::Rejected)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn deleting_approved_entry_publishes_public_event() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuestbookEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let feed = GuestbookFeed::default();

        let approved = factory::guestbook_entry::create_guestbook_entry_with_status(
            db,
            GuestbookStatus::Approved,
        )
        .await?;
        let mut events = feed.subscribe();

        GuestbookService::new(db, &feed).delete(approved.id).await?;

        let event = events.recv().await.unwrap();
        assert_eq!(event.kind, GuestbookEventKind::Deleted);
        assert!(event.is_public());

        Ok(())
    }
}
