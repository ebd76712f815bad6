use serde::{Deserialize, Serialize};

/// Language used to render alert and recommendation messages
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English: singular / plural
    #[default]
    En,
    /// Russian: one / few (2-4) / many (5+, 11-14)
    Ru,
}

/// Grammatical number category selected for a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    One,
    Few,
    Many,
}

impl Locale {
    /// Picks the noun form that agrees with `count` in this locale.
    #[must_use]
    pub const fn plural_form(self, count: i64) -> PluralForm {
        let n = count.unsigned_abs();
        match self {
            Self::En => {
                if n == 1 {
                    PluralForm::One
                } else {
                    PluralForm::Many
                }
            }
            Self::Ru => {
                let last = n % 10;
                let last_two = n % 100;
                if last == 1 && last_two != 11 {
                    PluralForm::One
                } else if last >= 2 && last <= 4 && !(last_two >= 12 && last_two <= 14) {
                    PluralForm::Few
                } else {
                    PluralForm::Many
                }
            }
        }
    }

    /// Chooses between the three noun forms for `count`.
    ///
    /// Locales without a distinct "few" form fall back to `many`.
    #[must_use]
    pub const fn pluralize<'a>(self, count: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
        match self.plural_form(count) {
            PluralForm::One => one,
            PluralForm::Few => few,
            PluralForm::Many => many,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ru => write!(f, "ru"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(format!("unknown locale '{other}', expected one of: en, ru")),
        }
    }
}
