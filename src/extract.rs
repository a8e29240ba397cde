//! Book entries on a search-results page.
//!
//! Entries are `schema.org/Book` microdata rows. Each one carries a title,
//! an author and a rating somewhere beneath it; an entry only counts as a
//! book when all three are present.

use scraper::node::Element;
use scraper::{ElementRef, Html};

/// How an element is recognised, beyond its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    AttrEquals {
        name: &'static str,
        value: &'static str,
    },
    HasClass(&'static str),
}

/// A tag name plus a predicate on the element's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub tag: &'static str,
    pub predicate: Predicate,
}

impl Marker {
    pub fn matches(&self, element: &Element) -> bool {
        if element.name() != self.tag {
            return false;
        }
        match self.predicate {
            Predicate::AttrEquals { name, value } => element.attr(name) == Some(value),
            Predicate::HasClass(class) => element.classes().any(|c| c == class),
        }
    }

    /// Matching descendants of `scope` in document order, `scope` itself excluded.
    pub fn find_all<'a>(self, scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
        scope
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(move |el| self.matches(el.value()))
    }

    pub fn find_first<'a>(self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.find_all(scope).next()
    }
}

pub const BOOK: Marker = Marker {
    tag: "tr",
    predicate: Predicate::AttrEquals {
        name: "itemtype",
        value: "http://schema.org/Book",
    },
};

pub const TITLE: Marker = Marker {
    tag: "span",
    predicate: Predicate::AttrEquals {
        name: "itemprop",
        value: "name",
    },
};

pub const AUTHOR: Marker = Marker {
    tag: "span",
    predicate: Predicate::AttrEquals {
        name: "itemprop",
        value: "author",
    },
};

pub const RATING: Marker = Marker {
    tag: "span",
    predicate: Predicate::HasClass("minirating"),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub rating: String,
}

/// A complete entry together with its 1-based position among all entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBook {
    pub index: usize,
    pub book: Book,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstEntry {
    Complete(Book),
    /// The first entry exists but lacks at least one field.
    Incomplete,
    /// The page has no book entries at all.
    Missing,
}

pub struct SearchResultPage {
    document: Html,
}

impl SearchResultPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Every book entry in document order. Each call starts a new scan.
    pub fn entries(&self) -> impl Iterator<Item = BookEntry<'_>> {
        BOOK.find_all(self.document.root_element())
            .map(|element| BookEntry { element })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BookEntry<'a> {
    element: ElementRef<'a>,
}

impl BookEntry<'_> {
    pub fn title(&self) -> Option<String> {
        self.field(TITLE)
    }

    pub fn author(&self) -> Option<String> {
        self.field(AUTHOR)
    }

    pub fn rating(&self) -> Option<String> {
        self.field(RATING)
    }

    pub fn book(&self) -> Option<Book> {
        Some(Book {
            title: self.title()?,
            author: self.author()?,
            rating: self.rating()?,
        })
    }

    fn field(&self, marker: Marker) -> Option<String> {
        marker.find_first(self.element).map(text_of)
    }
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

pub fn extract_first(page: &SearchResultPage) -> FirstEntry {
    let Some(entry) = page.entries().next() else {
        tracing::debug!("no book entries on page");
        return FirstEntry::Missing;
    };

    match entry.book() {
        Some(book) => FirstEntry::Complete(book),
        None => {
            tracing::debug!(
                has_title = entry.title().is_some(),
                has_author = entry.author().is_some(),
                has_rating = entry.rating().is_some(),
                "first book entry is incomplete"
            );
            FirstEntry::Incomplete
        }
    }
}

pub fn extract_all(page: &SearchResultPage) -> Vec<IndexedBook> {
    let mut books = Vec::new();
    let mut scanned = 0usize;

    for (i, entry) in page.entries().enumerate() {
        let index = i + 1;
        scanned = index;
        match entry.book() {
            Some(book) => books.push(IndexedBook { index, book }),
            None => tracing::debug!(index, "skipping incomplete book entry"),
        }
    }

    tracing::debug!(scanned, emitted = books.len(), "extracted book entries");
    books
}
