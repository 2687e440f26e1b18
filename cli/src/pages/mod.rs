//! Page components for the terminal frontend
//!
//! Each navigable path maps to a [`Page`]: a title plus the text shown when
//! the shell lands on it. The home page is part of the table itself; the
//! other four are built on first navigation and reused afterwards.

use docqa_core::router::{PageLoader, RouteTable, RouterResult};

/// A renderable page: a title and its body text
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub body: String,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Chat landing page
pub fn home_page() -> Page {
    Page::new(
        "Ask me anything",
        "Type a question and I will search the web for an answer.\n\
         Navigate with /docs, /faqs, /sort or /sort2; `back` returns to the\n\
         previous page and `quit` leaves the shell.",
    )
}

/// Document management page
pub fn docs_page() -> Page {
    Page::new(
        "Your documents",
        "Commands on this page:\n\
         \x20 list               show the stored documents\n\
         \x20 rm <id>            remove a document\n\
         \x20 ask <id> <query>   ask a question about one document",
    )
}

/// Frequently asked questions page
pub fn faqs_page() -> Page {
    Page::new(
        "Frequently asked questions",
        "Type `list` to fetch the current FAQ entries from the server.",
    )
}

/// Ranked answers demo page
pub fn sort_page() -> Page {
    Page::new(
        "Ranked answers",
        "Answers come back ordered by confidence; the first entry is the\n\
         one the service believes in most. Ask something on the home page\n\
         to see the full ranking.",
    )
}

/// Second ranking demo page, using the per-document scores
pub fn sort2_page() -> Page {
    Page::new(
        "Ranked answers (per document)",
        "Like /sort, but the ranking uses the per-document reading scores\n\
         returned by `ask` instead of the web-search confidence.",
    )
}

/// The route table for the frontend: `/` is loaded eagerly with the table,
/// the other four pages on first navigation.
pub fn route_table() -> RouterResult<RouteTable<Page>> {
    RouteTable::builder()
        .route("/", "home", PageLoader::eager(home_page()))
        .route("/docs", "docs", PageLoader::lazy(|| async { Ok(docs_page()) }))
        .route("/faqs", "faqs", PageLoader::lazy(|| async { Ok(faqs_page()) }))
        .route("/sort", "Sort", PageLoader::lazy(|| async { Ok(sort_page()) }))
        .route("/sort2", "Sort2", PageLoader::lazy(|| async { Ok(sort2_page()) }))
        .build()
}
