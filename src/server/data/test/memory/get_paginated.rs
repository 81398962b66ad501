use super::*;

fn first_page(per_page: u64) -> PageParam {
    PageParam { page: 0, per_page }
}

/// Tests memories are ordered by date descending, then id descending.
///
/// Expected: newest date first; same-date memories newest id first
#[tokio::test]
async fn orders_by_date_then_id_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::memory::MemoryFactory::new(db)
        .date(date(2020, 1, 1))
        .build()
        .await?;
    let same_day_a = factory::memory::MemoryFactory::new(db)
        .date(date(2022, 5, 5))
        .build()
        .await?;
    let same_day_b = factory::memory::MemoryFactory::new(db)
        .date(date(2022, 5, 5))
        .build()
        .await?;

    let repo = MemoryRepository::new(db);
    let page = repo
        .get_paginated(&MemoryFilter::default(), first_page(10))
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![same_day_b.id, same_day_a.id, old.id]);
    assert_eq!(page.total, 3);

    Ok(())
}

/// Tests pagination splits results across pages.
///
/// Expected: 2 + 2 + 1 items with total 5 and 3 pages
#[tokio::test]
async fn paginates_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::memory::create_memory(db).await?;
    }

    let repo = MemoryRepository::new(db);
    let filter = MemoryFilter::default();

    let page0 = repo.get_paginated(&filter, PageParam { page: 0, per_page: 2 }).await?;
    let page2 = repo.get_paginated(&filter, PageParam { page: 2, per_page: 2 }).await?;

    assert_eq!(page0.items.len(), 2);
    assert_eq!(page2.items.len(), 1);
    assert_eq!(page0.total, 5);
    assert_eq!(page0.total_pages(), 3);

    Ok(())
}

/// Tests category and mood filters are exact matches.
///
/// Expected: only the memory matching both filters
#[tokio::test]
async fn filters_by_category_and_mood() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = factory::memory::MemoryFactory::new(db)
        .category("trip")
        .mood("happy")
        .build()
        .await?;
    factory::memory::MemoryFactory::new(db)
        .category("trip")
        .mood("calm")
        .build()
        .await?;
    factory::memory::MemoryFactory::new(db)
        .category("trips")
        .mood("happy")
        .build()
        .await?;

    let repo = MemoryRepository::new(db);
    let page = repo
        .get_paginated(
            &MemoryFilter {
                category: Some("trip".to_string()),
                mood: Some("happy".to_string()),
                tag: None,
            },
            first_page(10),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, wanted.id);

    Ok(())
}

/// Tests the tag filter normalizes its input and matches whole tags only.
///
/// Verifies that `" Beach "` matches a memory tagged `beach` but not one tagged
/// `beaches`.
///
/// Expected: only the memory with the exact tag
#[tokio::test]
async fn filters_by_normalized_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tagged = factory::memory::MemoryFactory::new(db)
        .tags(&["beach", "sunset"])
        .build()
        .await?;
    factory::memory::MemoryFactory::new(db)
        .tags(&["beaches"])
        .build()
        .await?;

    let repo = MemoryRepository::new(db);
    let page = repo
        .get_paginated(
            &MemoryFilter {
                tag: Some(" Beach ".to_string()),
                ..Default::default()
            },
            first_page(10),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, tagged.id);
    assert_eq!(page.items[0].tags, vec!["beach", "sunset"]);

    Ok(())
}

/// Tests `LIKE` wildcards and backslashes in the tag filter match literally.
///
/// Verifies that `b_ach` and `%` match nothing while tags that really contain `%`, `_`
/// or `\` are still found.
///
/// Expected: 0 results for wildcard-only filters, 1 for each literal tag
#[tokio::test]
async fn tag_filter_treats_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::memory::MemoryFactory::new(db)
        .tags(&["beach"])
        .build()
        .await?;
    let discount = factory::memory::MemoryFactory::new(db)
        .tags(&["50%_off"])
        .build()
        .await?;
    let path = factory::memory::MemoryFactory::new(db)
        .tags(&["back\\slash"])
        .build()
        .await?;

    let repo = MemoryRepository::new(db);
    let by_tag = |tag: &str| MemoryFilter {
        tag: Some(tag.to_string()),
        ..Default::default()
    };

    assert_eq!(repo.get_paginated(&by_tag("b_ach"), first_page(10)).await?.total, 0);
    assert_eq!(repo.get_paginated(&by_tag("%"), first_page(10)).await?.total, 0);
    assert_eq!(repo.get_paginated(&by_tag("_"), first_page(10)).await?.total, 0);

    let page = repo.get_paginated(&by_tag("50%_off"), first_page(10)).await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, discount.id);

    let page = repo.get_paginated(&by_tag("back\\slash"), first_page(10)).await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, path.id);

    Ok(())
}

/// Tests each listed memory carries its own images.
///
/// Expected: images grouped under their memory
#[tokio::test]
async fn attaches_images_to_each_memory() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_memory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_images, _) = factory::helpers::create_memory_with_images(db, 2).await?;
    let without_images = factory::memory::create_memory(db).await?;

    let repo = MemoryRepository::new(db);
    let page = repo
        .get_paginated(&MemoryFilter::default(), first_page(10))
        .await?;

    let find = |id: i32| page.items.iter().find(|m| m.id == id).unwrap();
    assert_eq!(find(with_images.id).images.len(), 2);
    assert!(find(without_images.id).images.is_empty());

    Ok(())
}
