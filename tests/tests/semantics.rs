//! Path semantics, closing columns, direction, labels and configuration.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use varlen_expand::{expand, HashJoin, Seed};
use varlen_tests::prelude::*;

mod repetition {
    use super::*;
    use pretty_assertions::assert_eq;

    /// `a -e1-> b`, `a -e3-> b`, `b -e2-> a`.
    pub fn scenario() -> Scenario {
        let fixture = GraphFixture::new()
            .edge("e1", "a", "b")
            .edge("e2", "b", "a")
            .edge("e3", "a", "b");
        Scenario::new("repetition", fixture)
            .seed(&[], &["a"])
            .hops(1, 3)
    }

    #[test]
    fn test_simple_path_never_revisits_a_node() {
        let outcome = scenario().run().unwrap();
        assert_eq!(outcome.paths(), vec!["[[a, e1], b]", "[[a, e3], b]"]);
    }

    #[test]
    fn test_trail_revisits_nodes_but_not_edges() {
        let outcome = scenario().semantics(PathSemantics::Trail).run().unwrap();
        assert_eq!(
            outcome.paths(),
            vec![
                "[[a, e1, b, e2, a, e3], b]",
                "[[a, e1, b, e2], a]",
                "[[a, e1], b]",
                "[[a, e3, b, e2, a, e1], b]",
                "[[a, e3, b, e2], a]",
                "[[a, e3], b]",
            ]
        );
    }

    #[test]
    fn test_walk_repeats_edges() {
        let outcome = scenario()
            .semantics(PathSemantics::Walk)
            .hops(3, 3)
            .run()
            .unwrap();
        assert!(outcome.paths().contains(&"[[a, e1, b, e2, a, e1], b]"));
        assert_eq!(outcome.paths.len(), 4);
    }

    #[test]
    fn test_trail_respects_edges_in_the_base() {
        let fixture = GraphFixture::new()
            .edge("e1", "a", "b")
            .edge("e2", "b", "c");
        let outcome = Scenario::new("trail_base", fixture)
            .seed(&["e2"], &["a"])
            .semantics(PathSemantics::Trail)
            .hops(1, 2)
            .run()
            .unwrap();
        assert_eq!(outcome.paths(), vec!["[e2, [a, e1], b]"]);
    }
}

mod closing {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Triangle `a -> b -> c -> a` with a chord `b -> a`.
    pub fn fixture() -> GraphFixture {
        GraphFixture::new()
            .edge("e1", "a", "b")
            .edge("e2", "b", "c")
            .edge("e3", "c", "a")
            .edge("e4", "b", "a")
    }

    #[test]
    fn test_cycles_back_to_the_start() {
        let outcome = Scenario::new("cycles", fixture())
            .seed_column(&["a"], 0)
            .closing_column(0)
            .unbounded(1)
            .run()
            .unwrap();
        assert_eq!(
            outcome.paths(),
            vec!["[a, [a, e1, b, e2, c, e3], a]", "[a, [a, e1, b, e4], a]"]
        );
    }

    #[test]
    fn test_closing_hop_ends_trails_and_walks() {
        for semantics in [PathSemantics::Trail, PathSemantics::Walk] {
            let outcome = Scenario::new("closing_trail_walk", fixture())
                .seed_column(&["a"], 0)
                .closing_column(0)
                .semantics(semantics)
                .hops(1, 4)
                .run()
                .unwrap();
            assert_eq!(
                outcome.paths(),
                vec!["[a, [a, e1, b, e2, c, e3], a]", "[a, [a, e1, b, e4], a]"]
            );
            assert_eq!(outcome.round_count(), 3);
        }
    }

    #[test]
    fn test_closing_column_out_of_range_is_fatal() {
        let err = Scenario::new("bad_closing", fixture())
            .seed_column(&["a"], 0)
            .closing_column(3)
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Expansion {
                source: ExpandError::Configuration { .. },
                ..
            }
        ));
    }
}

mod distinct_columns {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        let fixture = GraphFixture::new()
            .node("x")
            .edge("e1", "n1", "n2")
            .edge("e2", "n2", "n3");
        Scenario::new("distinct_columns", fixture)
            .seed(&["x", "n2"], &["n1"])
            .hops(1, 2)
    }

    #[test]
    fn test_base_nodes_are_excluded_by_default() {
        let outcome = scenario().run().unwrap();
        assert!(outcome.paths.is_empty());
    }

    #[test]
    fn test_only_listed_columns_are_checked() {
        let outcome = scenario().distinct_columns(&[0]).run().unwrap();
        assert_eq!(
            outcome.paths(),
            vec!["[x, n2, [n1, e1, n2, e2], n3]", "[x, n2, [n1, e1], n2]"]
        );
    }

    #[test]
    fn test_out_of_range_column_is_fatal() {
        let err = scenario().distinct_columns(&[5]).run().unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Expansion {
                source: ExpandError::Configuration { .. },
                ..
            }
        ));
    }
}

mod direction_and_labels {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn fixture() -> GraphFixture {
        GraphFixture::new()
            .labelled_edge("e1", "knows", "n1", "n2")
            .labelled_edge("e2", "likes", "n1", "n3")
            .labelled_edge("e3", "knows", "n2", "n4")
    }

    #[test]
    fn test_incoming_walks_edges_backwards() {
        let outcome = Scenario::new("incoming", fixture())
            .seed(&[], &["n4"])
            .direction(ExpandDirection::Incoming)
            .hops(1, 2)
            .run()
            .unwrap();
        assert_eq!(
            outcome.paths(),
            vec!["[[n4, e3, n2, e1], n1]", "[[n4, e3], n2]"]
        );
    }

    #[test]
    fn test_label_filter() {
        let outcome = Scenario::new("labels", fixture())
            .seed(&[], &["n1"])
            .labels(&["knows"])
            .hops(1, 2)
            .run()
            .unwrap();
        assert_eq!(
            outcome.paths(),
            vec!["[[n1, e1, n2, e3], n4]", "[[n1, e1], n2]"]
        );
    }

    #[test]
    fn test_edge_embeddings_as_candidates() {
        let named = fixture();
        let graph = named.graph().unwrap();
        let tuples = graph
            .edge_embeddings(Some("knows"))
            .iter()
            .map(|e| EdgeWithTiePoint::from_embedding(e, ExpandDirection::Outgoing))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let base = Arc::new(Embedding::new());
        let seeds = vec![Seed::new(base, named.ids(["n1"]).unwrap())];
        let config = ExpandConfig::new().with_hops(1, 2);
        let output = expand(config, HashJoin, &tuples, seeds).unwrap();
        let mut paths: Vec<String> = output.results.iter().map(|e| named.render(e)).collect();
        paths.sort();

        let scanned = Scenario::new("labels", fixture())
            .seed(&[], &["n1"])
            .labels(&["knows"])
            .hops(1, 2)
            .run()
            .unwrap();
        assert_eq!(paths, scanned.paths);
    }
}

mod configuration {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture() -> GraphFixture {
        GraphFixture::new()
            .edge("e1", "a", "b")
            .edge("e2", "b", "a")
    }

    #[test]
    fn test_config_from_json() {
        let config =
            ExpandConfig::from_json(r#"{"min_hops": 2, "max_hops": 2, "semantics": "trail"}"#)
                .unwrap();
        let outcome = Scenario::new("json", fixture())
            .seed(&[], &["a"])
            .config(config)
            .run()
            .unwrap();
        assert_eq!(outcome.paths(), vec!["[[a, e1, b, e2], a]"]);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = ExpandConfig::from_json(r#"{"min_hops": 1, "depth": 3}"#).unwrap_err();
        assert!(matches!(err, ExpandError::Configuration { .. }));
    }

    #[test]
    fn test_unbounded_walk_is_rejected_before_expanding() {
        let config =
            ExpandConfig::from_json(r#"{"max_hops": null, "semantics": "walk"}"#).unwrap();
        let err = Scenario::new("unbounded_walk", fixture())
            .seed(&[], &["a"])
            .config(config)
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Expansion {
                source: ExpandError::Configuration { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_min_above_max_is_rejected() {
        let err = Scenario::new("min_above_max", fixture())
            .seed(&[], &["a"])
            .hops(3, 2)
            .run()
            .unwrap_err();
        assert!(matches!(err, FixtureError::Expansion { .. }));
    }
}
