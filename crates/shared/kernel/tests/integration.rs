pub mod fixtures;

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use skit_kernel::domain::StateSnapshot;
    use skit_kernel::prelude::*;
    use std::collections::HashSet;

    const AREA: &str = "notification-area-banners-above-nav";
    const CTX: &str = "mainDashboard";

    #[test]
    fn duplicate_registration_warns_once_and_keeps_first() {
        let registry = Registry::new("notification");
        let (outcomes, warnings) = capture_warnings(|| {
            let first = registry.register("gathering-data", Entry::with_priority(1)).unwrap();
            let second = registry.register("gathering-data", Entry::with_priority(99)).unwrap();
            (first, second)
        });

        assert_eq!(outcomes, (Registration::Added, Registration::Duplicate));
        assert_eq!(registry.get("gathering-data").unwrap().priority, 1);
        assert_eq!(
            warnings,
            vec![
                "Could not register notification with ID \"gathering-data\". \
                 Notification \"gathering-data\" is already registered."
                    .to_string()
            ]
        );
    }

    #[test]
    fn orders_by_priority_then_registration() {
        let (registry, graph) = setup(AREA, CTX);
        add(&registry, &graph, "b", AREA, Entry::with_priority(20));
        add(&registry, &graph, "a", AREA, Entry::with_priority(10));
        add(&registry, &graph, "c", AREA, Entry::with_priority(10));

        let resolution = Resolver::new(&registry, &graph).resolve(AREA, CTX);
        assert_eq!(resolution.ids().unwrap(), ["a", "c", "b"]);
        assert_eq!(resolution.first().unwrap(), "a");
    }

    #[test]
    fn skips_entities_outside_their_view_contexts() {
        let (registry, graph) = setup(AREA, CTX);
        graph.assign_area_to_context(AREA, "settings").unwrap();
        add(&registry, &graph, "dash-only", AREA, Entry::default().only_in(&[CTX]));

        let resolver = Resolver::new(&registry, &graph);
        assert_eq!(resolver.resolve(AREA, CTX).ids().unwrap().len(), 1);
        assert!(resolver.resolve(AREA, "settings").ids().unwrap().is_empty());
    }

    #[test]
    fn unknown_dismissal_status_is_pending() {
        let (registry, graph) = setup(AREA, CTX);
        add(&registry, &graph, "plain", AREA, Entry::default());
        add(&registry, &graph, "banner", AREA, Entry::default().dismissible());

        let unknown = |_: &str| -> Option<bool> { None };
        let resolution = Resolver::new(&registry, &graph).dismissals(&unknown).resolve(AREA, CTX);
        assert!(resolution.is_pending());
        assert_eq!(resolution, Resolution::Pending { waiting_on: vec![EntityId::new("banner").unwrap()] });
        assert_eq!(resolution.first(), None);
    }

    #[test]
    fn dismissed_entities_are_excluded() {
        let (registry, graph) = setup(AREA, CTX);
        add(&registry, &graph, "kept", AREA, Entry::with_priority(5).dismissible());
        add(&registry, &graph, "gone", AREA, Entry::with_priority(1).dismissible());

        let dismissed: HashSet<&str> = HashSet::from(["gone"]);
        let lookup = |key: &str| Some(dismissed.contains(key));
        let resolution = Resolver::new(&registry, &graph).dismissals(&lookup).resolve(AREA, CTX);
        assert_eq!(resolution.ids().unwrap(), ["kept"]);
    }

    #[test]
    fn failing_requirement_excludes_only_that_entry() {
        let (registry, graph) = setup(AREA, CTX);
        let broken = Requirement::new(|_| Err(RequirementError::unresolved("module list")));
        add(&registry, &graph, "broken", AREA, Entry::with_priority(1).requiring(broken));
        add(&registry, &graph, "fine", AREA, Entry::with_priority(2));

        let state = StateSnapshot::default();
        let (resolution, warnings) = capture_warnings(|| {
            Resolver::new(&registry, &graph).state(&state).resolve(AREA, CTX)
        });
        assert_eq!(resolution.ids().unwrap(), ["fine"]);
        assert_eq!(warnings, vec!["Requirement check failed".to_string()]);
    }

    #[test]
    fn requirements_see_the_snapshot() {
        let (registry, graph) = setup(AREA, CTX);
        let needs_auth = Requirement::from_state(|s| s.user.authenticated);
        add(&registry, &graph, "auth", AREA, Entry::default().requiring(needs_auth));

        let mut state = StateSnapshot::default();
        assert!(Resolver::new(&registry, &graph).state(&state).resolve(AREA, CTX).ids().unwrap().is_empty());

        state.user.authenticated = true;
        assert_eq!(Resolver::new(&registry, &graph).state(&state).resolve(AREA, CTX).ids().unwrap(), ["auth"]);
    }

    #[test]
    fn assigned_but_unregistered_ids_are_ignored() {
        let (registry, graph) = setup(AREA, CTX);
        graph.assign_entity_to_area("ghost", AREA).unwrap();
        assert!(Resolver::new(&registry, &graph).resolve(AREA, CTX).ids().unwrap().is_empty());
    }
}
