//! Text projection for ranked search.
//!
//! A ranked search asks a caller-supplied projector for the text of each
//! item. The projector may yield one field or several (a name plus aliases,
//! a title plus tags); [`TextFields`] carries either shape, and the search
//! keeps the best-scoring field per item.

use std::borrow::Cow;

/// One or more candidate text fields projected from a single item.
///
/// Usually built through one of the `From` conversions, so a projector can
/// end in `.into()`:
///
/// ```
/// use fuzzyrank::TextFields;
///
/// struct City { name: String, aliases: Vec<String> }
///
/// let city = City { name: "Москва".into(), aliases: vec!["Moscow".into()] };
///
/// let single: TextFields<'_> = city.name.as_str().into();
/// assert_eq!(single.len(), 1);
///
/// let many: TextFields<'_> = city.aliases.as_slice().into();
/// assert_eq!(many.iter().collect::<Vec<_>>(), vec!["Moscow"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFields<'a> {
    /// Exactly one field.
    Single(Cow<'a, str>),
    /// Zero or more fields, evaluated independently.
    Multiple(Vec<Cow<'a, str>>),
}

impl TextFields<'_> {
    /// Iterate over every field as a `&str`, in projection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (single, multiple) = match self {
            TextFields::Single(s) => (Some(&**s), &[][..]),
            TextFields::Multiple(v) => (None, v.as_slice()),
        };
        single.into_iter().chain(multiple.iter().map(|s| &**s))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        match self {
            TextFields::Single(_) => 1,
            TextFields::Multiple(v) => v.len(),
        }
    }

    /// Whether there are no fields at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for TextFields<'a> {
    fn from(s: &'a str) -> Self {
        TextFields::Single(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for TextFields<'a> {
    fn from(s: &'a String) -> Self {
        TextFields::Single(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for TextFields<'_> {
    fn from(s: String) -> Self {
        TextFields::Single(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for TextFields<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        TextFields::Single(s)
    }
}

impl<'a> From<Vec<&'a str>> for TextFields<'a> {
    fn from(v: Vec<&'a str>) -> Self {
        TextFields::Multiple(v.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for TextFields<'_> {
    fn from(v: Vec<String>) -> Self {
        TextFields::Multiple(v.into_iter().map(Cow::Owned).collect())
    }
}

impl<'a> From<&'a [String]> for TextFields<'a> {
    fn from(v: &'a [String]) -> Self {
        TextFields::Multiple(v.iter().map(|s| Cow::Borrowed(s.as_str())).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for TextFields<'a> {
    fn from(v: [&'a str; N]) -> Self {
        TextFields::Multiple(v.into_iter().map(Cow::Borrowed).collect())
    }
}
