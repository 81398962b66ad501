use super::*;

const FIRST_PAGE: PageParam = PageParam {
    page: 0,
    per_page: 10,
};

/// Tests drafts are hidden unless explicitly included.
///
/// Expected: 1 item without drafts, 2 with drafts
#[tokio::test]
async fn excludes_drafts_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let published = factory::create_news(db).await?;
    factory::news::NewsFactory::new(db)
        .published(false)
        .build()
        .await?;

    let repo = NewsRepository::new(db);

    let public = repo.get_paginated(&NewsFilter::default(), FIRST_PAGE).await?;
    assert_eq!(public.total, 1);
    assert_eq!(public.items[0].id, published.id);

    let all = repo
        .get_paginated(
            &NewsFilter {
                include_drafts: true,
                ..Default::default()
            },
            FIRST_PAGE,
        )
        .await?;
    assert_eq!(all.total, 2);

    Ok(())
}

/// Tests news are ordered newest date first and filtered by category.
///
/// Expected: only `event` items, newest first
#[tokio::test]
async fn filters_by_category_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::news::NewsFactory::new(db)
        .category("event")
        .date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        .build()
        .await?;
    let newer = factory::news::NewsFactory::new(db)
        .category("event")
        .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .build()
        .await?;
    factory::news::NewsFactory::new(db)
        .category("update")
        .build()
        .await?;

    let repo = NewsRepository::new(db);
    let page = repo
        .get_paginated(
            &NewsFilter {
                category: Some("event".to_string()),
                include_drafts: false,
            },
            FIRST_PAGE,
        )
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
