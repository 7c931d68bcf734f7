//! Classifying passwords as weak, medium or strong.
//!
//! The rubric is a plain checklist: length of at least eight, an uppercase letter, a lowercase
//! letter, a digit, and an ASCII punctuation symbol. Each criterion met counts one point; nothing
//! is weighted.

use std::fmt;

/// Minimum number of characters for the length criterion.
pub const MIN_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the rubric's criteria a password meets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Criteria {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_punctuation: bool,
}

impl Criteria {
    pub fn evaluate(password: &str) -> Criteria {
        let mut criteria = Criteria {
            long_enough: password.chars().count() >= MIN_LENGTH,
            ..Criteria::default()
        };
        for c in password.chars() {
            criteria.has_uppercase |= c.is_uppercase();
            criteria.has_lowercase |= c.is_lowercase();
            criteria.has_digit |= c.is_ascii_digit();
            criteria.has_punctuation |= c.is_ascii_punctuation();
        }
        criteria
    }

    /// Number of criteria met, from 0 to 5.
    pub fn count(&self) -> usize {
        [
            self.long_enough,
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_punctuation,
        ]
        .into_iter()
        .filter(|met| *met)
        .count()
    }

    pub fn strength(&self) -> Strength {
        match self.count() {
            5 => Strength::Strong,
            3 | 4 => Strength::Medium,
            _ => Strength::Weak,
        }
    }

    /// Human-readable descriptions of the criteria that aren't met.
    pub fn unmet(&self) -> Vec<&'static str> {
        let mut unmet = Vec::new();
        if !self.long_enough {
            unmet.push("at least 8 characters");
        }
        if !self.has_uppercase {
            unmet.push("an uppercase letter");
        }
        if !self.has_lowercase {
            unmet.push("a lowercase letter");
        }
        if !self.has_digit {
            unmet.push("a digit");
        }
        if !self.has_punctuation {
            unmet.push("a punctuation symbol");
        }
        unmet
    }
}

pub fn score(password: &str) -> Strength {
    Criteria::evaluate(password).strength()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_weak() {
        let criteria = Criteria::evaluate("");
        assert_eq!(criteria.count(), 0);
        assert_eq!(score(""), Strength::Weak);
        assert_eq!(criteria.unmet().len(), 5);
    }

    #[test]
    fn test_rubric_examples() {
        assert_eq!(score("abcdefgh"), Strength::Weak);
        assert_eq!(score("Abcdefg1"), Strength::Medium);
        assert_eq!(score("Abcdef1!"), Strength::Strong);
    }

    #[test]
    fn test_thresholds() {
        // Two criteria: lowercase and punctuation.
        assert_eq!(Criteria::evaluate("a!").count(), 2);
        assert_eq!(score("a!"), Strength::Weak);
        // Three: upper, lower, digit.
        assert_eq!(Criteria::evaluate("Ab1").count(), 3);
        assert_eq!(score("Ab1"), Strength::Medium);
        // Four: everything but length.
        assert_eq!(Criteria::evaluate("Ab1!").count(), 4);
        assert_eq!(score("Ab1!"), Strength::Medium);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Seven characters, but more than eight bytes.
        assert!(!Criteria::evaluate("ééééééé").long_enough);
        assert!(Criteria::evaluate("éééééééé").long_enough);
    }

    #[test]
    fn test_non_ascii_symbols_are_not_punctuation() {
        let criteria = Criteria::evaluate("Abcdefg1€");
        assert!(!criteria.has_punctuation);
        assert_eq!(criteria.strength(), Strength::Medium);
    }

    #[test]
    fn test_only_decimal_digits_count_as_digits() {
        assert!(!Criteria::evaluate("Ab½").has_digit);
        assert_eq!(score("Ab½"), Strength::Weak);
        assert_eq!(score("AbⅫ"), Strength::Weak);
        assert_eq!(score("Ab〇"), Strength::Weak);
        assert_eq!(score("Ab7"), Strength::Medium);
    }

    #[test]
    fn test_unmet_lists_missing_criteria() {
        assert_eq!(
            Criteria::evaluate("Abcdefg1").unmet(),
            vec!["a punctuation symbol"]
        );
        assert!(Criteria::evaluate("Abcdef1!").unmet().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Medium.to_string(), "Medium");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
