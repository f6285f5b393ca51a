//! Catalog records and the search page's client-side logic: filtering, the
//! checkout selection, and the star-rating scale.

use serde::{Deserialize, Deserializer, Serialize};

use crate::AppError;

/// Number of slots on the rating scale.
pub const RATING_SLOTS: usize = 5;

/// Shown on checkout when nothing is selected or nobody is logged in.
pub const CHECKOUT_PRECONDITION_MESSAGE: &str = "Please select books and ensure you're logged in";

/// A catalog record as returned by `/get-books-with-status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub cover_filename: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub borrowed: bool,
}

impl Book {
    /// Case-insensitive substring match against name, author, genre and
    /// description. `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.author, &self.genre, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Envelope of `/get-books-with-status`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogResponse {
    #[serde(default)]
    pub books: Vec<Book>,
}

/// Books matching `query`, in catalog order. An empty query keeps everything.
pub fn filter_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return books.iter().collect();
    }
    books
        .iter()
        .filter(|book| book.matches_lowercase(&needle))
        .collect()
}

/// Book ids chosen for checkout, in the order they were picked.
///
/// A borrowed book can never enter the set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `book`. Returns `false` (and changes nothing) when the
    /// book is already borrowed.
    pub fn toggle(&mut self, book: &Book) -> bool {
        if book.borrowed {
            return false;
        }
        if let Some(pos) = self.ids.iter().position(|id| id == &book.id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(book.id.clone());
        }
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Body of `POST /borrow-books`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub username: String,
    #[serde(rename = "bookIds")]
    pub book_ids: Vec<String>,
}

impl CheckoutRequest {
    /// Build the checkout body, or a precondition error when the selection is
    /// empty or no user is known.
    pub fn prepare(selection: &SelectionSet, username: Option<&str>) -> Result<Self, AppError> {
        match username.filter(|u| !u.is_empty()) {
            Some(user) if !selection.is_empty() => Ok(Self {
                username: user.to_string(),
                book_ids: selection.ids().to_vec(),
            }),
            _ => Err(AppError::precondition(CHECKOUT_PRECONDITION_MESSAGE)),
        }
    }
}

/// One slot on the rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn glyph(&self) -> &'static str {
        match self {
            Star::Full => "★",
            Star::Half => "½",
            Star::Empty => "☆",
        }
    }
}

/// A numeric rating laid out on the five-slot scale.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRating {
    pub value: f64,
    pub stars: [Star; RATING_SLOTS],
}

impl StarRating {
    /// Whole stars for the integer part, a half symbol in the next slot when
    /// the fractional part is at least 0.5, empty symbols for the rest.
    pub fn new(rating: f64) -> Self {
        let value = if rating.is_finite() {
            rating.clamp(0.0, RATING_SLOTS as f64)
        } else {
            0.0
        };
        let full = value.floor() as usize;
        let has_half = value.fract() >= 0.5;

        let mut stars = [Star::Empty; RATING_SLOTS];
        for (i, slot) in stars.iter_mut().enumerate() {
            *slot = if i < full {
                Star::Full
            } else if i == full && has_half {
                Star::Half
            } else {
                Star::Empty
            };
        }
        Self { value, stars }
    }

    pub fn count(&self, kind: Star) -> usize {
        self.stars.iter().filter(|s| **s == kind).count()
    }

    /// Numeric label, e.g. `(3.5)`.
    pub fn label(&self) -> String {
        format!("({:.1})", self.value)
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
