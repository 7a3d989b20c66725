//! Selectors for enumerating a catalog.

/// What a catalog enumeration produces.
///
/// A selector is usually parsed from the option string accepted by
/// [`Rank::all`](crate::Rank::all) and [`Suit::all`](crate::Suit::all):
///
/// ```
/// use trumpy::Selector;
///
/// assert_eq!(Selector::parse("n", ("rank", "r")), Some(Selector::Name));
/// assert_eq!(Selector::parse("r", ("rank", "r")), Some(Selector::Instances));
/// assert_eq!(Selector::parse("s", ("rank", "r")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    /// Every value instance.
    #[default]
    Instances,
    /// Every raw id.
    Id,
    /// Every canonical name.
    Name,
    /// Every display label.
    Label,
}

impl Selector {
    /// Parses an option string.
    ///
    /// `own` holds the long and short option names that select instances of
    /// the enumerated type, e.g. `("suit", "s")`. Matching is case-sensitive.
    #[must_use]
    pub fn parse(option: &str, own: (&str, &str)) -> Option<Self> {
        match option {
            "id" | "i" => Some(Self::Id),
            "name" | "n" => Some(Self::Name),
            "label" | "l" => Some(Self::Label),
            _ if option == own.0 || option == own.1 => Some(Self::Instances),
            _ => None,
        }
    }
}
