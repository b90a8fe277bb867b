//! Tests for in-page search highlighting.

use numerix_site::dom::{Document, NodeId};
use numerix_site::highlight::{Highlighter, HIGHLIGHT_ATTR};

/// Helper function to parse a page and locate its main content root.
fn page(markup: &str) -> (Document, NodeId) {
    let doc = Document::parse_html(markup).expect("Failed to parse page");
    let main = doc
        .find_first_element(doc.root(), "main")
        .expect("Page has no <main>");
    (doc, main)
}

fn marked_texts(doc: &Document, highlighter: &Highlighter, root: NodeId) -> Vec<String> {
    highlighter
        .markers(doc, Some(root))
        .into_iter()
        .map(|m| doc.text_content(m))
        .collect()
}

const ABOUT_PAGE: &str = "<main>\
    <section><h1>Über uns</h1>\
    <p>Numerix GmbH ist ein Beratungsunternehmen in <b>Zürich</b>.</p>\
    <p>Wir begleiten KMU in Zürich und der ganzen Schweiz.</p></section>\
    <section><h2>Dienstleistungen</h2><ul><li>Buchhaltung</li><li>Steuern</li></ul></section>\
    </main>";

mod scenarios {
    use super::*;

    #[test]
    fn test_two_matches_preserve_casing() {
        let (mut doc, main) = page("<main><p>Welcome to Numerix. Numerix is great.</p></main>");
        let highlighter = Highlighter::new();

        let count = highlighter.highlight(&mut doc, Some(main), "numerix");

        assert_eq!(count, 2);
        assert_eq!(marked_texts(&doc, &highlighter, main), vec!["Numerix", "Numerix"]);
        for marker in highlighter.markers(&doc, Some(main)) {
            assert_eq!(doc.tag_name(marker), Some("mark"));
            assert_eq!(doc.attribute(marker, HIGHLIGHT_ATTR), Some(""));
        }
    }

    #[test]
    fn test_script_text_is_never_wrapped() {
        let (mut doc, main) =
            page("<main><p>numerix</p><script>var numerix = true;</script><style>.numerix{}</style></main>");
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "numerix"), 1);
        let script = doc.find_first_element(main, "script").unwrap();
        assert!(highlighter.markers(&doc, Some(script)).is_empty());
        assert_eq!(doc.text_content(script), "var numerix = true;");
    }

    #[test]
    fn test_case_insensitive_queries_agree() {
        let (mut doc, main) = page("<main><p>Office in Zurich</p></main>");
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "ZURICH"), 1);
        let upper = doc.inner_html(main);
        assert_eq!(highlighter.highlight(&mut doc, Some(main), "zurich"), 1);
        assert_eq!(doc.inner_html(main), upper);
    }

    #[test]
    fn test_non_overlapping_matches() {
        let (mut doc, main) = page("<main><p>aaa</p></main>");
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "aa"), 1);
        let p = doc.find_first_element(main, "p").unwrap();
        assert_eq!(
            doc.inner_html(p),
            "<mark data-search-highlight=\"\">aa</mark>a"
        );
    }

    #[test]
    fn test_matches_do_not_cross_elements() {
        let (mut doc, main) = page("<main><p>Nume<b>rix</b></p></main>");
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight(&mut doc, Some(main), "numerix"), 0);
    }

    #[test]
    fn test_query_longer_than_text() {
        let (mut doc, main) = page("<main><p>Kurz</p></main>");
        let before = doc.to_html(doc.root());
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight(&mut doc, Some(main), "eine sehr lange Suchanfrage"), 0);
        assert_eq!(doc.to_html(doc.root()), before);
    }

    #[test]
    fn test_matches_in_document_order() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "zürich"), 2);
        let markers = highlighter.markers(&doc, Some(main));
        let first_parent = doc.parent(markers[0]).unwrap();
        assert_eq!(doc.tag_name(first_parent), Some("b"));
        assert_eq!(highlighter.first_marker(&doc, Some(main)), Some(markers[0]));
    }

    #[test]
    fn test_less_than_in_text_is_searchable() {
        let (mut doc, main) = page("<main><p>Preis < 100 CHF bei Numerix</p></main>");
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "numerix"), 1);
        assert_eq!(highlighter.highlight(&mut doc, Some(main), "< 100"), 1);
        assert_eq!(marked_texts(&doc, &highlighter, main), vec!["< 100"]);
        assert_eq!(doc.text_content(main), "Preis < 100 CHF bei Numerix");

        highlighter.clear(&mut doc, Some(main));
        assert_eq!(doc.inner_html(main), "<p>Preis &lt; 100 CHF bei Numerix</p>");
    }

    #[test]
    fn test_script_with_less_than_is_untouched() {
        let (mut doc, main) = page("<main><script>if (a < b) { x = 'numerix'; }</script><p>numerix</p></main>");
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "numerix"), 1);
        let script = doc.find_first_element(main, "script").unwrap();
        assert_eq!(doc.inner_html(script), "if (a < b) { x = 'numerix'; }");
        let p = doc.find_first_element(main, "p").unwrap();
        assert_eq!(doc.inner_html(p), "<mark data-search-highlight=\"\">numerix</mark>");
    }

    #[test]
    fn test_greek_final_sigma() {
        let (mut doc, main) = page("<main><p>Die ΟΔΟΣ und die οδος</p></main>");
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight(&mut doc, Some(main), "ΟΔΟΣ"), 2);
        assert_eq!(marked_texts(&doc, &highlighter, main), vec!["ΟΔΟΣ", "οδος"]);
    }

    #[test]
    fn test_outside_root_is_untouched() {
        let (mut doc, main) = page("<header>Numerix</header><main><p>Numerix</p></main>");
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "numerix"), 1);
        let header = doc.find_first_element(doc.root(), "header").unwrap();
        assert!(highlighter.markers(&doc, Some(header)).is_empty());
    }
}

mod degenerate_input {
    use super::*;

    #[test]
    fn test_blank_queries_return_zero() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();

        for query in ["", "   ", "\t\n"] {
            assert_eq!(highlighter.highlight(&mut doc, Some(main), query), 0);
            assert!(highlighter.markers(&doc, None).is_empty());
        }
    }

    #[test]
    fn test_blank_query_clears_previous_markers() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();

        assert!(highlighter.highlight(&mut doc, Some(main), "Zürich") > 0);
        assert_eq!(highlighter.highlight(&mut doc, Some(main), "  "), 0);
        assert!(highlighter.markers(&doc, None).is_empty());
    }

    #[test]
    fn test_missing_root_returns_zero() {
        let (mut doc, _) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight(&mut doc, None, "Zürich"), 0);
        assert!(highlighter.markers(&doc, None).is_empty());
    }

    #[test]
    fn test_missing_root_still_clears_document() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();
        highlighter.highlight(&mut doc, Some(main), "Zürich");
        assert_eq!(highlighter.highlight(&mut doc, None, "Zürich"), 0);
        assert!(highlighter.markers(&doc, None).is_empty());
    }

    #[test]
    fn test_foreign_node_id_returns_zero() {
        let (mut doc, _) = page("<main><p>Numerix</p></main>");
        let other = {
            let mut big = Document::new();
            for _ in 0..100 {
                big.create_text("x");
            }
            big.create_element("main")
        };
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight(&mut doc, Some(other), "numerix"), 0);
    }
}

mod restoration {
    use super::*;

    #[test]
    fn test_clear_restores_markup_exactly() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let original = doc.to_html(doc.root());
        let highlighter = Highlighter::new();

        assert!(highlighter.highlight(&mut doc, Some(main), "u") > 0);
        assert_ne!(doc.to_html(doc.root()), original);

        highlighter.clear(&mut doc, Some(main));
        assert_eq!(doc.to_html(doc.root()), original);
    }

    #[test]
    fn test_clear_merges_split_text_nodes() {
        let (mut doc, main) = page("<main><p>Numerix Numerix Numerix</p></main>");
        let highlighter = Highlighter::new();
        let p = doc.find_first_element(main, "p").unwrap();

        highlighter.highlight(&mut doc, Some(main), "numerix");
        assert_eq!(doc.children(p).len(), 5);

        highlighter.clear(&mut doc, Some(main));
        assert_eq!(doc.children(p).len(), 1);
        assert_eq!(doc.text(doc.children(p)[0]), Some("Numerix Numerix Numerix"));
    }

    #[test]
    fn test_clear_without_markers_is_noop() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let before = doc.to_html(doc.root());
        let node_count = doc.node_count();
        let highlighter = Highlighter::new();

        highlighter.clear(&mut doc, Some(main));
        highlighter.clear(&mut doc, None);

        assert_eq!(doc.to_html(doc.root()), before);
        assert_eq!(doc.node_count(), node_count);
    }

    #[test]
    fn test_second_query_replaces_first() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "Zürich"), 2);
        assert_eq!(highlighter.highlight(&mut doc, Some(main), "steuern"), 1);
        assert_eq!(marked_texts(&doc, &highlighter, main), vec!["Steuern"]);
    }

    #[test]
    fn test_count_equals_marker_count() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();
        for query in ["e", "un", "Numerix", "ß", "x"] {
            let count = highlighter.highlight(&mut doc, Some(main), query);
            assert_eq!(count, highlighter.markers(&doc, Some(main)).len(), "query {:?}", query);
        }
    }

    #[test]
    fn test_clear_whole_document_by_default() {
        let (mut doc, main) = page(ABOUT_PAGE);
        let highlighter = Highlighter::new();
        highlighter.highlight(&mut doc, Some(main), "Zürich");
        highlighter.clear(&mut doc, None);
        assert!(highlighter.markers(&doc, None).is_empty());
    }
}

mod deep_nesting {
    use super::*;

    const DEPTH: usize = 100_000;

    /// `<main>` holding `DEPTH` nested spans around one text node.
    fn nested_page(text: &str) -> (Document, NodeId) {
        let mut doc = Document::new();
        let mut inner = doc.create_text(text);
        for _ in 0..DEPTH {
            let span = doc.create_element("span");
            doc.append_child(span, inner).unwrap();
            inner = span;
        }
        let root = doc.root();
        let main = doc.create_element("main");
        doc.append_child(root, main).unwrap();
        doc.append_child(main, inner).unwrap();
        (doc, main)
    }

    #[test]
    fn test_highlight_and_clear_deep_tree() {
        let (mut doc, main) = nested_page("Beratung bei Numerix");
        let original = doc.to_html(main);
        let highlighter = Highlighter::new();

        assert_eq!(highlighter.highlight(&mut doc, Some(main), "numerix"), 1);
        let marked = doc.to_html(main);
        assert!(marked.contains("Beratung bei <mark data-search-highlight=\"\">Numerix</mark>"));

        highlighter.clear(&mut doc, Some(main));
        assert_eq!(doc.to_html(main), original);
        assert_eq!(doc.text_content(main), "Beratung bei Numerix");
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn build(paragraphs: &[String]) -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let main = doc.create_element("main");
        doc.append_child(root, main).unwrap();
        for text in paragraphs {
            let p = doc.create_element("p");
            let t = doc.create_text(text.as_str());
            doc.append_child(main, p).unwrap();
            doc.append_child(p, t).unwrap();
        }
        (doc, main)
    }

    proptest! {
        #[test]
        fn prop_highlight_then_clear_restores_text(
            paragraphs in prop::collection::vec("[a-zA-ZäöüÄÖÜ .]{0,40}", 1..6),
            query in "[a-zA-Zäö ]{1,4}",
        ) {
            let (mut doc, main) = build(&paragraphs);
            let before_text = doc.text_content(main);
            let before_html = doc.to_html(main);
            let highlighter = Highlighter::new();

            let count = highlighter.highlight(&mut doc, Some(main), &query);
            prop_assert_eq!(count, highlighter.markers(&doc, Some(main)).len());
            prop_assert_eq!(doc.text_content(main), before_text.clone());

            highlighter.clear(&mut doc, Some(main));
            prop_assert_eq!(doc.text_content(main), before_text);
            prop_assert_eq!(doc.to_html(main), before_html);
            prop_assert!(highlighter.markers(&doc, None).is_empty());
        }

        #[test]
        fn prop_clear_is_idempotent(
            paragraphs in prop::collection::vec("[a-z ]{0,30}", 1..5),
        ) {
            let (mut doc, main) = build(&paragraphs);
            let highlighter = Highlighter::new();
            highlighter.clear(&mut doc, Some(main));
            let once = doc.to_html(main);
            highlighter.clear(&mut doc, Some(main));
            prop_assert_eq!(doc.to_html(main), once);
        }

        #[test]
        fn prop_repeated_highlight_leaves_only_latest(
            paragraphs in prop::collection::vec("[a-c ]{0,30}", 1..5),
            first in "[a-c]{1,2}",
            second in "[a-c]{1,2}",
        ) {
            let (mut doc, main) = build(&paragraphs);
            let highlighter = Highlighter::new();
            highlighter.highlight(&mut doc, Some(main), &first);
            let count = highlighter.highlight(&mut doc, Some(main), &second);

            let (mut fresh, fresh_main) = build(&paragraphs);
            let fresh_count = highlighter.highlight(&mut fresh, Some(fresh_main), &second);
            prop_assert_eq!(count, fresh_count);
            prop_assert_eq!(doc.to_html(main), fresh.to_html(fresh_main));
        }
    }
}
