use serde::{Deserialize, Serialize};
use strum::Display;

/// Sex encoded by the sentinel digit. Odd sentinels are male, even are
/// female; sentinel 9 (foreign citizens) carries no gender at all.
#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub(crate) fn from_sentinel(sentinel: u8) -> Option<Gender> {
        match sentinel {
            1 | 3 | 5 | 7 => Some(Gender::Male),
            2 | 4 | 6 | 8 => Some(Gender::Female),
            _ => None,
        }
    }

    /// Picks the caller's label for this gender.
    pub(crate) fn label<'a>(&self, male: &'a str, female: &'a str) -> &'a str {
        match self {
            Gender::Male => male,
            Gender::Female => female,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn odd_sentinels_are_male_even_are_female() {
        for sentinel in [1, 3, 5, 7] {
            assert_eq!(Gender::from_sentinel(sentinel), Some(Gender::Male));
        }
        for sentinel in [2, 4, 6, 8] {
            assert_eq!(Gender::from_sentinel(sentinel), Some(Gender::Female));
        }
    }

    #[test]
    fn foreign_citizen_sentinel_has_no_gender() {
        assert_eq!(Gender::from_sentinel(9), None);
    }

    #[test]
    fn displays_and_serializes_lowercase() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::from_str::<Gender>("\"female\"").unwrap(),
            Gender::Female
        );
    }

    #[test]
    fn labels_use_the_callers_strings() {
        assert_eq!(Gender::Male.label("M", "F"), "M");
        assert_eq!(Gender::Female.label("M", "F"), "F");
    }
}
