use dealer_core::{
    catalog::{Catalog, ColorOption, VehicleOption},
    config::SiteConfig,
    selection::{evictions, select_color, toggle_option, SelectionState},
};
use std::collections::BTreeSet;

fn option(name: &str, incompatible_with: &[&str]) -> VehicleOption {
    VehicleOption {
        name:                name.into(),
        monthly_delta:       1_000,
        is_default_selected: false,
        category:            None,
        incompatible_with:   incompatible_with.iter().map(|s| s.to_string()).collect(),
    }
}

fn a_excludes_b() -> Catalog {
    Catalog {
        vehicle_id: "pair".into(),
        label:      "Pair".into(),
        base_price: 10_000,
        colors: vec![
            ColorOption { name: "Grey".into(), monthly_delta: 0,   swatch: "#808080".into() },
            ColorOption { name: "Teal".into(), monthly_delta: 300, swatch: "#008080".into() },
        ],
        options: vec![option("A", &["B"]), option("B", &[])],
    }
}

fn names(s: &SelectionState) -> BTreeSet<&str> {
    s.selected_options.iter().map(String::as_str).collect()
}

#[test]
fn initial_state_uses_first_color_and_defaults() {
    let config = SiteConfig::default_test();
    let catalog = config.vehicle("compact").unwrap();
    let s = SelectionState::initial(catalog);
    assert_eq!(s.selected_color, "Pearl White");
    assert_eq!(names(&s), BTreeSet::from(["Floor Mat"]));
}

#[test]
fn selecting_constrained_option_evicts_its_conflicts() {
    let catalog = a_excludes_b();
    let s = SelectionState::initial(&catalog);

    let s = toggle_option(&s, &catalog, "B");
    let s = toggle_option(&s, &catalog, "A");

    assert_eq!(names(&s), BTreeSet::from(["A"]));
}

#[test]
fn selecting_unconstrained_option_never_evicts() {
    // Directional rule: B carries no list of its own, so selecting it
    // keeps A even though A lists B as incompatible.
    let catalog = a_excludes_b();
    let s = SelectionState::initial(&catalog);

    let s = toggle_option(&s, &catalog, "A");
    let s = toggle_option(&s, &catalog, "B");

    assert_eq!(names(&s), BTreeSet::from(["A", "B"]));
}

#[test]
fn toggling_selected_constrained_option_just_removes_it() {
    let catalog = a_excludes_b();
    let s = toggle_option(&SelectionState::initial(&catalog), &catalog, "A");
    let s = toggle_option(&s, &catalog, "A");
    assert!(s.selected_options.is_empty());
}

#[test]
fn double_toggle_is_identity_for_unconstrained_options() {
    let config = SiteConfig::default_test();
    let catalog = config.vehicle("compact").unwrap();
    let start = SelectionState::initial(catalog);

    for o in &catalog.options {
        let twice = toggle_option(&toggle_option(&start, catalog, &o.name), catalog, &o.name);
        assert_eq!(twice, start, "double toggle of {} changed state", o.name);
    }
}

#[test]
fn minivan_captain_seats_replace_bench() {
    let config = SiteConfig::default_test();
    let catalog = config.vehicle("minivan").unwrap();
    let s = SelectionState::initial(catalog);
    assert!(s.is_selected("Bench Seat"));

    assert_eq!(evictions(&s, catalog, "Captain Seats"), vec!["Bench Seat".to_string()]);

    let s = toggle_option(&s, catalog, "Captain Seats");
    assert_eq!(names(&s), BTreeSet::from(["Captain Seats"]));

    // Re-selecting the bench does not evict the captain seats.
    let s = toggle_option(&s, catalog, "Bench Seat");
    assert_eq!(names(&s), BTreeSet::from(["Bench Seat", "Captain Seats"]));
}

#[test]
fn unknown_option_leaves_state_unchanged() {
    let catalog = a_excludes_b();
    let s = SelectionState::initial(&catalog);
    assert_eq!(toggle_option(&s, &catalog, "Sunroof"), s);
    assert!(evictions(&s, &catalog, "Sunroof").is_empty());
}

#[test]
fn select_color_overwrites_known_colors_only() {
    let catalog = a_excludes_b();
    let s = SelectionState::initial(&catalog);

    let teal = select_color(&s, &catalog, "Teal");
    assert_eq!(teal.selected_color, "Teal");
    assert_eq!(teal.selected_options, s.selected_options);

    let unchanged = select_color(&teal, &catalog, "Gold");
    assert_eq!(unchanged.selected_color, "Teal");
}

#[test]
fn stale_selected_name_can_be_toggled_off() {
    let catalog = a_excludes_b();
    let s = SelectionState {
        selected_color:   "Grey".into(),
        selected_options: ["A".to_string(), "Sunroof".to_string()].into(),
    };

    let s = toggle_option(&s, &catalog, "Sunroof");
    assert_eq!(names(&s), BTreeSet::from(["A"]));

    // Unknown and unselected stays a no-op.
    assert_eq!(toggle_option(&s, &catalog, "Sunroof"), s);
}
