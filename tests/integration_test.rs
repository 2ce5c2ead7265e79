use magazine_catalog::lifecycle::Catalog;
use magazine_catalog::model::{Article, MagazineUpdate};
use magazine_catalog::validation::ValidationError;
use std::collections::HashSet;

/// Full end-to-end test of an isolated catalog.
/// Covers construction, registration and every relationship query.
#[test]
fn test_full_catalog_integration() {
    let catalog = Catalog::new();

    let sam = catalog.author("Sam").expect("Failed to create author");
    let bo = catalog.author("Bo").expect("Failed to create author");
    let vogue = catalog
        .magazine("Vogue", "Fashion")
        .expect("Failed to create magazine");
    let wired = catalog
        .magazine("Wired", "Technology")
        .expect("Failed to create magazine");

    // Publish through both entry points
    let first = Article::new(&sam, &vogue, "Spring Lines").expect("Failed to publish");
    let second = sam.add_article(&vogue, "Summer Lines").expect("Failed to publish");
    let third = sam.add_article(&wired, "Chips and Dips").expect("Failed to publish");
    let fourth = bo.add_article(&vogue, "Runway Notes").expect("Failed to publish");

    assert_eq!(
        catalog.articles(),
        vec![first.clone(), second.clone(), third.clone(), fourth.clone()]
    );
    assert_eq!(catalog.magazines(), vec![vogue.clone(), wired.clone()]);

    // Author side
    assert_eq!(sam.articles(), vec![first.clone(), second.clone(), third]);
    assert_eq!(sam.magazines(), HashSet::from([vogue.clone(), wired.clone()]));
    assert_eq!(
        sam.topic_areas(),
        Some(HashSet::from(["Fashion".to_string(), "Technology".to_string()]))
    );
    assert_eq!(bo.topic_areas(), Some(HashSet::from(["Fashion".to_string()])));

    // Magazine side
    assert_eq!(vogue.articles(), vec![first, second, fourth]);
    assert_eq!(vogue.contributors(), HashSet::from([sam.clone(), bo.clone()]));
    assert_eq!(
        vogue.article_titles(),
        Some(vec![
            "Spring Lines".to_string(),
            "Summer Lines".to_string(),
            "Runway Notes".to_string(),
        ])
    );
    assert_eq!(vogue.contributing_authors(), None);

    // A third Vogue article makes Sam a contributing author
    sam.add_article(&vogue, "Autumn Lines").expect("Failed to publish");
    assert_eq!(vogue.contributing_authors(), Some(HashSet::from([sam.clone()])));

    // Rejected article leaves everything untouched
    let before = catalog.article_count();
    let result = bo.add_article(&wired, "Hi");
    assert!(matches!(result, Err(ValidationError::TitleLength { length: 2, .. })));
    assert_eq!(catalog.article_count(), before);
    assert!(wired.contributors().contains(&sam));
    assert!(!wired.contributors().contains(&bo));
}

/// "Sam" with exactly two articles is not a contributing author; with three, Sam qualifies.
#[test]
fn test_contributing_author_scenario() {
    let catalog = Catalog::new();
    let sam = catalog.author("Sam").unwrap();
    let vogue = catalog.magazine("Vogue", "Fashion").unwrap();

    sam.add_article(&vogue, "Spring Lines").unwrap();
    sam.add_article(&vogue, "Summer Lines").unwrap();
    assert_eq!(vogue.contributing_authors(), None);

    sam.add_article(&vogue, "Autumn Lines").unwrap();
    let contributors = vogue.contributing_authors().expect("Sam should qualify");
    assert_eq!(contributors.len(), 1);
    assert!(contributors.contains(&sam));
}

#[test]
fn test_title_length_boundaries() {
    let catalog = Catalog::new();
    let sam = catalog.author("Sam").unwrap();
    let vogue = catalog.magazine("Vogue", "Fashion").unwrap();

    for length in [0, 1, 4, 51, 80] {
        let result = sam.add_article(&vogue, "t".repeat(length));
        assert!(result.is_err(), "title of length {} should fail", length);
    }
    assert_eq!(catalog.article_count(), 0);

    for length in [5, 6, 49, 50] {
        let result = sam.add_article(&vogue, "t".repeat(length));
        assert!(result.is_ok(), "title of length {} should succeed", length);
    }
    assert_eq!(catalog.article_count(), 4);
    assert_eq!(sam.articles().len(), 4);
}

#[test]
fn test_magazine_name_boundaries() {
    let catalog = Catalog::new();

    for name in ["", "V", "Seventeen Letters"] {
        assert!(
            catalog.magazine(name, "Fashion").is_err(),
            "{:?} should fail",
            name
        );
    }
    for name in ["GQ", "Sixteen  Letters"] {
        assert!(
            catalog.magazine(name, "Fashion").is_ok(),
            "{:?} should succeed",
            name
        );
    }
    assert_eq!(catalog.magazine_count(), 2);
}

#[test]
fn test_magazine_update_validation() {
    let catalog = Catalog::new();
    let vogue = catalog.magazine("Vogue", "Fashion").unwrap();

    assert!(matches!(
        vogue.set_name("A name that is far too long"),
        Err(ValidationError::MagazineNameLength { .. })
    ));
    assert_eq!(vogue.set_category("   "), Err(ValidationError::EmptyCategory));
    assert_eq!(vogue.name(), "Vogue");
    assert_eq!(vogue.category(), "Fashion");

    vogue
        .update(MagazineUpdate {
            category: Some("Style".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(vogue.name(), "Vogue");
    assert_eq!(vogue.category(), "Style");
}

#[test]
fn test_catalogs_are_isolated() {
    let first = Catalog::new();
    let second = Catalog::new();

    // Same names, separate identities
    let sam_a = first.author("Sam").unwrap();
    let sam_b = second.author("Sam").unwrap();
    assert_eq!(sam_a.id(), sam_b.id());
    assert_ne!(sam_a, sam_b);

    let vogue_a = first.magazine("Vogue", "Fashion").unwrap();
    let vogue_b = second.magazine("Vogue", "Fashion").unwrap();

    sam_a.add_article(&vogue_a, "Spring Lines").unwrap();
    assert!(sam_b.articles().is_empty());
    assert_eq!(vogue_b.article_titles(), None);

    let mismatch = sam_a.add_article(&vogue_b, "Crossed Wires");
    assert!(matches!(mismatch, Err(ValidationError::CatalogMismatch { .. })));
    assert_eq!(first.article_count(), 1);
    assert_eq!(second.article_count(), 0);
}

/// Writers publish from several threads while scanning the same magazine.
/// Every article must land exactly once and be visible to every query.
#[test]
fn test_concurrent_publishing_and_scans() {
    const WRITERS: usize = 8;
    const ARTICLES_PER_WRITER: usize = 50;

    let catalog = Catalog::new();
    let vogue = catalog.magazine("Vogue", "Fashion").unwrap();
    let authors: Vec<_> = (0..WRITERS)
        .map(|n| catalog.author(format!("Writer {}", n)).unwrap())
        .collect();

    let handles: Vec<_> = authors
        .iter()
        .cloned()
        .map(|author| {
            let vogue = vogue.clone();
            std::thread::spawn(move || {
                for n in 0..ARTICLES_PER_WRITER {
                    author
                        .add_article(&vogue, format!("Column number {}", n))
                        .expect("Failed to publish");
                    let seen = vogue
                        .articles()
                        .iter()
                        .filter(|a| a.author() == &author)
                        .count();
                    assert_eq!(seen, n + 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Writer thread panicked");
    }

    assert_eq!(catalog.article_count(), WRITERS * ARTICLES_PER_WRITER);
    assert_eq!(vogue.articles().len(), WRITERS * ARTICLES_PER_WRITER);
    for author in &authors {
        assert_eq!(author.articles().len(), ARTICLES_PER_WRITER);
    }
    let contributing = vogue.contributing_authors().expect("All writers qualify");
    assert_eq!(contributing.len(), WRITERS);
}
