//! Unit tests for the tracery-engine crate.
#![expect(
    clippy::expect_used,
    reason = "tests fail loudly on malformed fixtures"
)]

mod support;


mod guard_tests {
    use std::sync::Arc;

    use crate::guard::SingleFlight;
    use crate::request::RequestKey;

    fn key(symbol: &str) -> RequestKey {
        RequestKey::new(symbol, "/src/a.c", 10)
    }

    #[test]
    fn the_permit_is_released_on_drop() {
        let flights = SingleFlight::new();

        let permit = flights.try_acquire(&key("foo")).expect("first acquire");
        assert_eq!(flights.in_flight(), Some(key("foo")));

        drop(permit);
        assert_eq!(flights.in_flight(), None);
        assert!(flights.try_acquire(&key("foo")).is_some());
    }

    #[test]
    fn a_second_acquire_is_rejected_not_queued() {
        let flights = SingleFlight::new();

        let _permit = flights.try_acquire(&key("foo")).expect("first acquire");
        assert!(flights.try_acquire(&key("bar")).is_none());
        // Even the same key is rejected while in flight.
        assert!(flights.try_acquire(&key("foo")).is_none());
    }

    #[test]
    fn another_thread_is_rejected_while_a_permit_is_held() {
        let flights = Arc::new(SingleFlight::new());
        let permit = flights.try_acquire(&key("foo")).expect("first acquire");

        let contender = Arc::clone(&flights);
        let rejected = std::thread::spawn(move || contender.try_acquire(&key("bar")).is_none())
            .join()
            .expect("contender thread must not panic");

        assert!(rejected);
        drop(permit);
        assert!(flights.try_acquire(&key("bar")).is_some());
    }
}

mod ledger_tests {
    use crate::ledger::ViewLedger;
    use crate::request::RequestKey;

    #[test]
    fn views_track_identities_independently() {
        let mut ledger = ViewLedger::new();
        let shown = RequestKey::new("foo", "/src/a.c", 10);

        ledger.record("panel", shown.clone());

        assert!(ledger.is_current("panel", &shown));
        assert!(!ledger.is_current("sidebar", &shown));
        assert_eq!(ledger.shown_in("panel"), Some(&shown));
    }

    #[test]
    fn clearing_a_view_forgets_its_identity() {
        let mut ledger = ViewLedger::new();
        let shown = RequestKey::new("foo", "/src/a.c", 10);
        ledger.record("panel", shown.clone());

        ledger.clear("panel");

        assert!(!ledger.is_current("panel", &shown));
        assert_eq!(ledger.shown_in("panel"), None);
    }
}

mod render_tests {
    use tracery_graph::{Direction, RelationNode};
    use tracery_refs::{GroupKind, ReferenceGroup, ReferenceTable};

    use super::support::{call_from, item};
    use crate::outcome::HierarchyOutcome;
    use crate::render::{render_hierarchy, render_references};

    #[test]
    fn hierarchy_rendering_indents_and_lists_call_sites() {
        let leaf = RelationNode::leaf(&item("outer", "/src/c.c", 20), vec![23]);
        let call = call_from(item("caller", "/src/b.c", 4), &[4, 6]);
        let caller = RelationNode::from_item(&call.from, vec![5, 7], vec![leaf]);
        let outcome = HierarchyOutcome::new("foo", Direction::Incoming, vec![caller]);

        let text = render_hierarchy(&outcome);

        assert_eq!(
            text,
            "foo (incoming)\n\
             - caller (/src/b.c:5) [at L5, L7]\n\
             \x20\x20- outer (/src/c.c:21) [at L23]\n"
        );
    }

    #[test]
    fn reference_rendering_lists_one_group_per_line() {
        let mut alpha = ReferenceGroup::new(GroupKind::Function, "alpha", "/src/a.c");
        alpha.push(7, "/src/a.c");
        let mut by_file = ReferenceGroup::new(GroupKind::File, "types.h", "/src/types.h");
        by_file.push(21, "/src/types.h");
        let table = ReferenceTable::new("count", vec![alpha, by_file]);

        let text = render_references(&table);

        assert_eq!(
            text,
            "count (references)\n\
             - alpha (/src/a.c) [at L7]\n\
             - types.h (/src/types.h) [at L21]\n"
        );
    }
}

mod report_tests {
    use serde_json::json;

    use tracery_graph::{Direction, RelationNode};

    use super::support::item;
    use crate::outcome::HierarchyOutcome;
    use crate::report::hierarchy_report;

    #[test]
    fn incoming_reports_nest_callers_under_called_by() {
        let caller = RelationNode::from_item(&item("caller", "/src/b.c", 4), vec![5, 7], vec![]);
        let outcome = HierarchyOutcome::new("foo", Direction::Incoming, vec![caller]);

        let report = hierarchy_report(&outcome);

        assert_eq!(
            report,
            json!({
                "caller": "foo",
                "direction": "incoming",
                "calledBy": [{
                    "caller": "caller",
                    "file": "/src/b.c",
                    "line": 5,
                    "callSites": [5, 7]
                }]
            })
        );
    }

    #[test]
    fn outgoing_reports_nest_callees_under_calls_to() {
        let callee = RelationNode::from_item(&item("helper", "/src/h.c", 30), vec![8], vec![]);
        let outcome = HierarchyOutcome::new("main", Direction::Outgoing, vec![callee]);

        let report = hierarchy_report(&outcome);

        assert_eq!(
            report,
            json!({
                "callee": "main",
                "direction": "outgoing",
                "callsTo": [{
                    "callee": "helper",
                    "file": "/src/h.c",
                    "line": 31,
                    "callSites": [8]
                }]
            })
        );
    }

    #[test]
    fn parenthesised_argument_lists_are_stripped_from_names() {
        let caller =
            RelationNode::from_item(&item("handle(int, char *)", "/src/b.c", 4), vec![5], vec![]);
        let outcome = HierarchyOutcome::new("foo(void)", Direction::Incoming, vec![caller]);

        let report = hierarchy_report(&outcome);

        assert_eq!(report.get("caller"), Some(&json!("foo")));
        let nested = report
            .get("calledBy")
            .and_then(|calls| calls.get(0))
            .and_then(|node| node.get("caller"));
        assert_eq!(nested, Some(&json!("handle")));
    }
}
