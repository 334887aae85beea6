use serde::{Deserialize, Serialize};

/// Derive a whole-year age from a free-text display string.
///
/// The leading integer of the string is the year count. Strings that mention
/// "month" (any case) and strings without a leading integer derive age 0, so
/// they compare as the least-senior band. The month check runs first:
/// "18 months" is 0, not 18.
pub fn parse_age_years(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.to_ascii_lowercase().contains("month") {
        return 0;
    }

    let digits: String = trimmed
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Life-stage bucket derived from the numeric age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    PuppyKitten,
    Young,
    Adult,
    Senior,
}

impl AgeBand {
    /// Band for an age display string. Exactly one band matches any string.
    pub fn of(text: &str) -> Self {
        match parse_age_years(text) {
            0 => AgeBand::PuppyKitten,
            1..=2 => AgeBand::Young,
            3..=6 => AgeBand::Adult,
            _ => AgeBand::Senior,
        }
    }

    pub fn matches(self, text: &str) -> bool {
        AgeBand::of(text) == self
    }

    pub const fn label(self) -> &'static str {
        match self {
            AgeBand::PuppyKitten => "Puppy/Kitten",
            AgeBand::Young => "Young",
            AgeBand::Adult => "Adult",
            AgeBand::Senior => "Senior",
        }
    }

    /// Lenient parser for query parameters and CLI flags.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "puppy" | "kitten" | "puppy/kitten" | "puppy_kitten" => Some(AgeBand::PuppyKitten),
            "young" => Some(AgeBand::Young),
            "adult" => Some(AgeBand::Adult),
            "senior" => Some(AgeBand::Senior),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_is_the_year_count() {
        assert_eq!(parse_age_years("3 years"), 3);
        assert_eq!(parse_age_years("12 years old"), 12);
        assert_eq!(parse_age_years(" 7yrs "), 7);
    }

    #[test]
    fn month_strings_and_garbage_derive_zero() {
        assert_eq!(parse_age_years("8 months"), 0);
        assert_eq!(parse_age_years("18 Months"), 0);
        assert_eq!(parse_age_years("unknown"), 0);
        assert_eq!(parse_age_years(""), 0);
    }

    #[test]
    fn bands_partition_the_age_axis() {
        assert_eq!(AgeBand::of("8 months"), AgeBand::PuppyKitten);
        assert_eq!(AgeBand::of("1 year"), AgeBand::Young);
        assert_eq!(AgeBand::of("2 years"), AgeBand::Young);
        assert_eq!(AgeBand::of("3 years"), AgeBand::Adult);
        assert_eq!(AgeBand::of("6 years"), AgeBand::Adult);
        assert_eq!(AgeBand::of("7 years"), AgeBand::Senior);
    }

    #[test]
    fn boundary_ages_match_exactly_one_band() {
        for text in ["8 months", "1 year", "3 years", "7 years"] {
            let matching = [
                AgeBand::PuppyKitten,
                AgeBand::Young,
                AgeBand::Adult,
                AgeBand::Senior,
            ]
            .into_iter()
            .filter(|band| band.matches(text))
            .count();
            assert_eq!(matching, 1, "{text} should match exactly one band");
        }
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(AgeBand::parse("Puppy"), Some(AgeBand::PuppyKitten));
        assert_eq!(AgeBand::parse("kitten"), Some(AgeBand::PuppyKitten));
        assert_eq!(AgeBand::parse("SENIOR"), Some(AgeBand::Senior));
        assert_eq!(AgeBand::parse("elderly"), None);
    }
}
