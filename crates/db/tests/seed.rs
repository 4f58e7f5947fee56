//! Seeding behaviour against the in-memory store.

use heritage_db::seed::{seed_if_empty, SeedReport};
use heritage_db::store::{HeritageStore, MemoryStore};

#[tokio::test]
async fn seeds_empty_store_once() {
    let store = MemoryStore::new();

    let report = seed_if_empty(&store).await.unwrap();
    assert_eq!(
        report,
        Some(SeedReport {
            pillars: 3,
            timeline_eras: 5,
            gallery_items: 12,
        })
    );

    // Second run is a no-op.
    assert_eq!(seed_if_empty(&store).await.unwrap(), None);
    assert_eq!(store.list_gallery_items().await.unwrap().len(), 12);
}

#[tokio::test]
async fn skips_when_pillars_exist() {
    let store = MemoryStore::new();
    let pillar = heritage_db::seed::pillars().remove(0);
    store.create_pillar(&pillar).await.unwrap();

    assert_eq!(seed_if_empty(&store).await.unwrap(), None);
    assert!(store.list_timeline_eras().await.unwrap().is_empty());
}

#[tokio::test]
async fn seeded_search_for_holi_finds_the_festival() {
    let store = MemoryStore::new();
    seed_if_empty(&store).await.unwrap();

    let hits = store.search_gallery_items("holi").await.unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().any(|item| item.slug == "holi"));
    for item in &hits {
        let matches = [
            Some(item.title.as_str()),
            Some(item.category.as_str()),
            Some(item.description.as_str()),
            item.region.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains("holi"));
        assert!(matches, "{} should not match", item.slug);
    }
}

#[tokio::test]
async fn seeded_stats_match_dataset() {
    let store = MemoryStore::new();
    seed_if_empty(&store).await.unwrap();

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.total_pillars, 3);
    assert_eq!(stats.total_timeline_eras, 5);
    assert_eq!(stats.total_gallery_items, 12);
    assert_eq!(
        stats.gallery_categories,
        [
            "Festivals",
            "Performing Arts",
            "Visual Arts",
            "Architecture",
            "Heritage Sites",
            "Crafts",
        ]
    );
    assert_eq!(stats.regions.len(), 9);
    assert_eq!(stats.regions[0], "North India");
}
