// SPDX-License-Identifier: MPL-2.0
//! The fixed font catalog offered by the font picker.
//!
//! The catalog is closed: a [`FontChoice`] is always a valid selection, so
//! the store never has to validate a typed value. String identifiers only
//! enter through [`FontChoice::from_name`], which rejects anything outside
//! the catalog.

use iced::Font;
use std::fmt;

/// One of the selectable font families, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontChoice {
    #[default]
    Arial,
    Helvetica,
    TimesNewRoman,
    CourierNew,
    Georgia,
}

impl FontChoice {
    /// Every catalog entry, in the order the picker lists them.
    pub const ALL: [FontChoice; 5] = [
        FontChoice::Arial,
        FontChoice::Helvetica,
        FontChoice::TimesNewRoman,
        FontChoice::CourierNew,
        FontChoice::Georgia,
    ];

    /// The system family name, also the display label and the string
    /// identifier accepted by [`FontChoice::from_name`].
    pub const fn family_name(self) -> &'static str {
        match self {
            FontChoice::Arial => "Arial",
            FontChoice::Helvetica => "Helvetica",
            FontChoice::TimesNewRoman => "Times New Roman",
            FontChoice::CourierNew => "Courier New",
            FontChoice::Georgia => "Georgia",
        }
    }

    /// Looks up a catalog entry by its family name. Returns `None` for
    /// anything not in the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.family_name() == name)
    }

    /// The `iced` font used to render text in this family.
    pub fn font(self) -> Font {
        Font::with_name(self.family_name())
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_catalog_entry() {
        assert_eq!(FontChoice::default(), FontChoice::ALL[0]);
        assert_eq!(FontChoice::default(), FontChoice::Arial);
    }

    #[test]
    fn from_name_resolves_every_catalog_entry() {
        for choice in FontChoice::ALL {
            assert_eq!(FontChoice::from_name(choice.family_name()), Some(choice));
        }
    }

    #[test]
    fn from_name_rejects_unknown_families() {
        assert_eq!(FontChoice::from_name("Comic Sans MS"), None);
        assert_eq!(FontChoice::from_name(""), None);
        // Lookup is exact, not case-insensitive.
        assert_eq!(FontChoice::from_name("arial"), None);
    }

    #[test]
    fn display_matches_family_name() {
        assert_eq!(FontChoice::TimesNewRoman.to_string(), "Times New Roman");
        assert_eq!(FontChoice::Georgia.to_string(), "Georgia");
    }
}
