use std::sync::{Arc, Mutex};

use pf_app::{LoadCatalog, ProjectCatalogController};
use pf_core::ports::ViewObserverPort;
use pf_core::view::CatalogView;
use pf_infra::{reference_layout, ReferenceCatalogSource};

const SEARCHES: &[&str] = &[
    "",
    "health",
    "HEALTH",
    "  app ",
    "a",
    "mobile",
    "full-stack",
    "c/c++",
    "zzz-no-match",
    "i",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn build_controller() -> ProjectCatalogController {
    init_tracing();
    let catalog = LoadCatalog::new(Arc::new(ReferenceCatalogSource))
        .execute(reference_layout())
        .expect("load reference catalog");
    ProjectCatalogController::new(catalog)
}

fn catalog_titles(controller: &ProjectCatalogController) -> Vec<String> {
    controller
        .catalog()
        .records()
        .iter()
        .map(|r| r.title.clone())
        .collect()
}

/// Returns true when `subset` appears in `full` in the same relative order.
fn is_ordered_subsequence(subset: &[&str], full: &[String]) -> bool {
    let mut remaining = full.iter();
    subset
        .iter()
        .all(|wanted| remaining.any(|candidate| candidate == wanted))
}

#[test]
fn catalog_controller_default_view_is_curated_subset() {
    let controller = build_controller();
    let view = controller.view();

    assert_eq!(
        view.titles(),
        vec!["Brody Cafe App", "SoleSense", "PlatePal", "SRT Controller"]
    );
    assert_eq!(view.len(), 4);
    assert!(!view.is_filtering);
    assert_eq!(
        view.toggle.as_ref().map(|t| t.label.as_str()),
        Some("Show All Projects")
    );
}

#[test]
fn catalog_controller_expansion_shows_full_catalog() {
    let mut controller = build_controller();

    let view = controller.toggle_expanded();
    assert_eq!(view.len(), 8);
    assert_eq!(view.toggle.as_ref().map(|t| t.label.as_str()), Some("Show Less"));

    let titles = catalog_titles(&controller);
    assert_eq!(controller.view().titles(), titles);

    assert_eq!(controller.toggle_expanded().len(), 4);
}

#[test]
fn catalog_controller_health_search_bypasses_expansion() {
    let mut controller = build_controller();
    let expected = vec!["SoleSense", "MindMatch", "InFluo", "iMEDS"];

    assert_eq!(controller.set_search_text("health").titles(), expected);
    assert!(controller.is_filtering());
    assert!(controller.view().toggle.is_none());

    assert_eq!(controller.toggle_expanded().titles(), expected);
    assert_eq!(controller.toggle_expanded().titles(), expected);
}

#[test]
fn catalog_controller_no_match_is_empty_and_filtering() {
    let mut controller = build_controller();
    let view = controller.set_search_text("zzz-no-match");

    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert!(view.is_filtering);
    assert!(view.toggle.is_none());
}

#[test]
fn catalog_controller_search_results_are_ordered_subsets() {
    let mut controller = build_controller();
    let all = catalog_titles(&controller);

    for search in SEARCHES {
        for expanded in [false, true] {
            if controller.expanded() != expanded {
                controller.toggle_expanded();
            }
            let view = controller.set_search_text(*search);
            assert!(
                is_ordered_subsequence(&view.titles(), &all),
                "search {search:?} expanded {expanded}: {:?}",
                view.titles()
            );
        }
    }
}

#[test]
fn catalog_controller_selected_tags_are_conjunctive_and_monotone() {
    let mut controller = build_controller();
    let vocabulary: Vec<String> = controller.vocabulary().iter().map(str::to_string).collect();

    let mut previous = controller.matched_projects().len();
    for tag in vocabulary.iter().take(3) {
        controller.toggle_tag(tag.as_str());

        let matched = controller.matched_projects();
        assert!(matched.len() <= previous, "adding {tag} grew the match set");
        for record in &matched {
            for selected in controller.state().selected_tags() {
                assert!(record.has_tag(selected), "{} lacks {selected}", record.title);
            }
        }
        previous = matched.len();
    }
}

#[test]
fn catalog_controller_tag_toggle_twice_restores_selection() {
    let mut controller = build_controller();
    controller.toggle_tag("Healthcare");
    let before = controller.state().selected_tags().clone();
    let view_before = controller.view().clone();

    controller.toggle_tag("Mobile");
    assert_eq!(controller.view().titles(), vec!["iMEDS"]);
    controller.toggle_tag("Mobile");

    assert_eq!(controller.state().selected_tags(), &before);
    assert_eq!(controller.view(), &view_before);
}

#[test]
fn catalog_controller_toggle_hidden_while_filtering_by_tag() {
    let mut controller = build_controller();
    let view = controller.toggle_tag("Full-Stack");

    assert!(view.matched_count > 0);
    assert!(view.is_filtering);
    assert!(view.toggle.is_none());
    assert_eq!(view.titles(), vec!["Brody Cafe App", "PlatePal", "TerraVision"]);
}

#[derive(Default)]
struct RecordingObserver {
    lengths: Mutex<Vec<usize>>,
}

impl ViewObserverPort for RecordingObserver {
    fn on_view_changed(&self, view: &CatalogView) {
        self.lengths.lock().unwrap().push(view.len());
    }
}

#[test]
fn catalog_controller_observer_sees_consistent_views() {
    let mut controller = build_controller();
    let observer = Arc::new(RecordingObserver::default());
    controller.subscribe(observer.clone());

    controller.toggle_expanded();
    controller.set_search_text("health");
    controller.set_search_text("");
    controller.toggle_expanded();

    assert_eq!(*observer.lengths.lock().unwrap(), vec![4, 8, 4, 8, 4]);
}
