//! Search dialog behavior from the site header.

use crate::dom::{Document, NodeId};
use crate::highlight::Highlighter;
use crate::i18n::{LanguageContext, Notice};

/// Tag name of the page's main content region.
pub const CONTENT_ROOT_TAG: &str = "main";

/// Result of submitting a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The page has no `<main>` element; nothing was searched.
    NoContentRoot,
    /// At least one match was highlighted.
    Found {
        /// Number of matches
        count: usize,
        /// First marker, to scroll into view
        first: NodeId,
        /// Notice to show
        notice: Notice,
    },
    /// The query matched nothing (or was blank).
    NotFound {
        /// Notice to show
        notice: Notice,
    },
}

impl SearchOutcome {
    /// Number of highlighted matches.
    pub fn count(&self) -> usize {
        match self {
            SearchOutcome::Found { count, .. } => *count,
            _ => 0,
        }
    }

    /// Notice to display, if any.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            SearchOutcome::Found { notice, .. } | SearchOutcome::NotFound { notice } => Some(notice),
            SearchOutcome::NoContentRoot => None,
        }
    }
}

/// Localized labels of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLabels {
    /// Caption above the input
    pub title: &'static str,
    /// Input placeholder
    pub placeholder: &'static str,
    /// Submit button
    pub submit: &'static str,
}

/// Open/closed search dialog driving the highlighter.
#[derive(Debug, Clone, Default)]
pub struct SearchDialog {
    open: bool,
    highlighter: Highlighter,
}

impl SearchDialog {
    /// Create a closed dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a closed dialog using a specific highlighter.
    pub fn with_highlighter(highlighter: Highlighter) -> Self {
        Self {
            open: false,
            highlighter,
        }
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the dialog. Closing clears all highlights in the document.
    pub fn set_open(&mut self, doc: &mut Document, open: bool) {
        if !open {
            self.highlighter.clear(doc, None);
        }
        self.open = open;
    }

    /// Labels for the selected language.
    pub fn labels(ctx: &LanguageContext) -> DialogLabels {
        DialogLabels {
            title: ctx.pick("Suche", "Search"),
            placeholder: ctx.pick("Begriff eingeben...", "Type to search..."),
            submit: ctx.pick("Suchen", "Search"),
        }
    }

    /// Highlight `query` in the page's main content and report the result.
    ///
    /// On a hit the dialog closes; on a miss it stays open so the visitor can
    /// try another term. The highlights themselves stay in place until the
    /// next search or until the dialog is closed again.
    pub fn submit(&mut self, doc: &mut Document, query: &str, ctx: &LanguageContext) -> SearchOutcome {
        let Some(main) = doc.find_first_element(doc.root(), CONTENT_ROOT_TAG) else {
            log::debug!("No <{}> element to search", CONTENT_ROOT_TAG);
            return SearchOutcome::NoContentRoot;
        };

        let count = self.highlighter.highlight(doc, Some(main), query);
        let first = self.highlighter.first_marker(doc, Some(main));

        match first {
            Some(first) if count > 0 => {
                self.open = false;
                SearchOutcome::Found {
                    count,
                    first,
                    notice: Notice::new(
                        ctx.pick("Suche", "Search"),
                        format!("{} {}", count, ctx.pick("Treffer", "matches")),
                    ),
                }
            },
            _ => SearchOutcome::NotFound {
                notice: Notice::new(
                    ctx.pick("Keine Treffer", "No matches"),
                    ctx.pick("Bitte einen anderen Begriff versuchen.", "Try another term."),
                ),
            },
        }
    }
}
