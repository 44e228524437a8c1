//! Registry-wide properties of the embedded content.

use folio::content::{resolve, ContentStore, Language, ProjectRegistry};

mod fixtures;
use fixtures::{content, test_project};

#[test]
fn test_every_field_resolves_in_every_language() {
    let store = content();

    for project in store.registry().list() {
        for lang in Language::ALL {
            let content = resolve(&project.content, lang);
            let study = &content.case_study;
            let context = format!("{} [{}]", project.id, lang);

            for (field, value) in [
                ("title", &content.title),
                ("category", &content.category),
                ("description", &content.description),
                ("role", &study.role),
                ("timeline", &study.timeline),
                ("overview", &study.overview),
                ("problem", &study.problem),
                ("solution", &study.solution),
                ("results", &study.results),
            ] {
                assert!(!value.trim().is_empty(), "{context}: empty {field}");
            }

            assert!(!content.tags.is_empty(), "{context}: no tags");
            assert!(!study.tools.is_empty(), "{context}: no tools");
            assert!(!study.process.is_empty(), "{context}: no process steps");
            assert!(
                content.tags.iter().all(|t| !t.trim().is_empty()),
                "{context}: empty tag"
            );
        }
    }
}

#[test]
fn test_site_labels_resolve_in_every_language() {
    let store = content();
    let labels = &store.site().labels;

    for lang in Language::ALL {
        for label in [
            &labels.nav.work,
            &labels.nav.about,
            &labels.nav.contact,
            &labels.hero.title_prefix,
            &labels.case_study.overview,
            &labels.case_study.close,
            &labels.page.back_home,
            &labels.not_found.title,
        ] {
            assert!(!resolve(label, lang).is_empty());
        }
    }
}

#[test]
fn test_list_order_is_stable() {
    let store = content();
    let first: Vec<String> = store.registry().list().iter().map(|p| p.id.clone()).collect();
    let second: Vec<String> = store.registry().list().iter().map(|p| p.id.clone()).collect();

    assert_eq!(first, second);
    assert_eq!(first, ["vegwam", "navitime", "relaxon"]);

    // A fresh load yields the same order
    let reloaded: Vec<String> = content().registry().list().iter().map(|p| p.id.clone()).collect();
    assert_eq!(first, reloaded);
}

#[test]
fn test_find_is_idempotent() {
    let store = content();
    for project in store.registry().list() {
        let once = store.registry().find(&project.id).unwrap();
        let twice = store.registry().find(&project.id).unwrap();
        assert!(std::ptr::eq(once, twice));
        assert_eq!(once.id, project.id);
    }
}

#[test]
fn test_find_rejects_near_misses() {
    let store = content();
    let registry = store.registry();

    for id in ["", "VegWam", "VEGWAM", " vegwam", "vegwam ", "does-not-exist"] {
        assert!(registry.find(id).is_none(), "'{id}' should not resolve");
    }
}

#[test]
fn test_custom_registry_through_store() {
    let site = content().site().clone();
    let store =
        ContentStore::from_parts(site, vec![test_project("alpha"), test_project("beta")]).unwrap();

    let beta = store.registry().find("beta").unwrap();
    assert_eq!(beta.content_for(Language::Ua).title, "beta (ua)");

    let neighbors = store.registry().neighbors("alpha").unwrap();
    assert!(neighbors.previous.is_none());
    assert_eq!(neighbors.next.map(|p| p.id.as_str()), Some("beta"));
}

#[test]
fn test_duplicate_ids_rejected() {
    let site = content().site().clone();
    let err = ContentStore::from_parts(site, vec![test_project("alpha"), test_project("alpha")])
        .unwrap_err();
    assert!(err.to_string().contains("Content validation failed"));

    let err = ProjectRegistry::new(vec![test_project("alpha"), test_project("alpha")]).unwrap_err();
    assert!(err.to_string().contains("Duplicate project id 'alpha'"));
}
