use skit_domain::{AreaStyle, StateSnapshot, WidgetWidth};
use skit_kernel::registry::Registration;
use skit_kernel::requirement::Requirement;
use skit_kernel::resolver::NoDismissals;
use skit_kernel::{Component, Props};
use skit_widgets::{WidgetAreaSpec, WidgetError, WidgetSpec, WidgetsStore};

fn component() -> Component {
    Component::new(|_: &Props| String::from("Hello test."))
}

#[test]
fn register_widget_defaults() {
    let store = WidgetsStore::new();
    assert_eq!(store.register_widget("TestWidget", WidgetSpec::new(component())).unwrap(), Registration::Added);

    let widget = store.widget("TestWidget").unwrap();
    assert_eq!(widget.priority, 10);
    assert_eq!(widget.widths, vec![WidgetWidth::Quarter]);
    assert!(widget.wrap_widget);
    assert!(widget.modules.is_empty());
}

#[test]
fn register_widget_validates_input() {
    let store = WidgetsStore::new();

    let err = store.register_widget("NoComponent", WidgetSpec::default()).unwrap_err();
    assert_eq!(err.to_string(), "Component is required to register a widget.");

    let err = store.register_widget("Wide", WidgetSpec::new(component()).width("enormous")).unwrap_err();
    assert!(matches!(err, WidgetError::Validation { .. }));
    assert_eq!(
        err.to_string(),
        "Widget width should be one of: quarter, half, full, but \"enormous\" was provided."
    );

    let err = store.register_widget("", WidgetSpec::new(component())).unwrap_err();
    assert!(matches!(err, WidgetError::Registry { .. }));
    assert!(store.widgets().is_empty());
}

#[test]
fn duplicate_widget_keeps_original() {
    let store = WidgetsStore::new();
    store.register_widget("W", WidgetSpec::new(component()).priority(1)).unwrap();
    let outcome = store.register_widget("W", WidgetSpec::new(component()).priority(2)).unwrap();
    assert_eq!(outcome, Registration::Duplicate);
    assert_eq!(store.widget("W").unwrap().priority, 1);
}

#[test]
fn widget_areas_by_context_and_priority() {
    let store = WidgetsStore::new();
    store
        .register_widget_area("traffic", WidgetAreaSpec::titled("Traffic").priority(2).style(AreaStyle::Composite))
        .unwrap();
    store
        .register_widget_area("overview", WidgetAreaSpec::titled("Overview").subtitle("At a glance").priority(1))
        .unwrap();
    store.assign_widget_area("traffic", ["dashboard", "entity"]).unwrap();
    store.assign_widget_area("overview", ["dashboard"]).unwrap();

    let dashboard: Vec<_> = store.widget_areas("dashboard").into_iter().map(|(slug, _)| slug.to_string()).collect();
    assert_eq!(dashboard, ["overview", "traffic"]);
    assert_eq!(store.widget_areas("entity").len(), 1);
    assert_eq!(store.widget_area("traffic").unwrap().style, AreaStyle::Composite);
    assert_eq!(store.widget_area("overview").unwrap().subtitle.as_deref(), Some("At a glance"));
}

#[test]
fn eligible_widgets_filter_and_sort() {
    let store = WidgetsStore::new();
    store.register_widget_area("area", WidgetAreaSpec::titled("Area")).unwrap();
    store.assign_widget_area("area", ["ctx"]).unwrap();

    store.register_widget("late", WidgetSpec::new(component()).priority(20)).unwrap();
    store.register_widget("early", WidgetSpec::new(component()).priority(5)).unwrap();
    store
        .register_widget(
            "hidden",
            WidgetSpec::new(component()).requirement(Requirement::from_state(|s| s.user.authenticated)),
        )
        .unwrap();
    for slug in ["late", "early", "hidden", "unregistered"] {
        store.assign_widget(slug, ["area"]).unwrap();
    }

    let resolution = store.eligible_widgets("area", "ctx", &StateSnapshot::default(), &NoDismissals);
    assert_eq!(resolution.ids().unwrap(), ["early", "late"]);
    assert!(store.eligible_widgets("area", "elsewhere", &StateSnapshot::default(), &NoDismissals)
        .ids()
        .unwrap()
        .is_empty());
    assert_eq!(store.widgets_in_area("area").len(), 3);
}

#[test]
fn reset_empties_the_store() {
    let store = WidgetsStore::new();
    store.register_widget_area("area", WidgetAreaSpec::titled("Area")).unwrap();
    store.register_widget("W", WidgetSpec::new(component())).unwrap();
    store.assign_widget("W", ["area"]).unwrap();

    store.reset();
    assert!(!store.is_widget_registered("W"));
    assert!(!store.is_widget_area_registered("area"));
    assert!(store.widgets_in_area("area").is_empty());
}
