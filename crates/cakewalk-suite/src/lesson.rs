use crate::{Error, Result};

/// A lesson card as displayed in the landing page's lesson group.
///
/// Exactly four fields in fixed top-to-bottom display order. Instances are
/// built fresh per check from scraped card text and compared whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCard {
    pub name: String,
    pub description: String,
    pub button_label: String,
    pub incentive: String,
}

impl LessonCard {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        button_label: impl Into<String>,
        incentive: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            button_label: button_label.into(),
            incentive: incentive.into(),
        }
    }

    /// Build a card from scraped multi-line element text.
    ///
    /// The card renders its fields as one line each, in fixed order; lines
    /// past the fourth are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 4 {
            return Err(Error::LessonCardShape(lines.len()));
        }

        Ok(Self::new(
            lines[0].trim(),
            lines[1].trim(),
            lines[2].trim(),
            lines[3].trim(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_line_card() {
        let card = LessonCard::parse(
            "DeFiChain\nNative Decentralized Finance enabled on Bitcoin\nEARN DFI\nEarn $1 in DFI",
        )
        .unwrap();

        assert_eq!(card.name, "DeFiChain");
        assert_eq!(
            card.description,
            "Native Decentralized Finance enabled on Bitcoin"
        );
        assert_eq!(card.button_label, "EARN DFI");
        assert_eq!(card.incentive, "Earn $1 in DFI");
    }

    #[test]
    fn test_parse_ignores_trailing_lines() {
        let card = LessonCard::parse("Bitcoin\ndesc\nEARN BTC-DFI\nincentive\nCompleted").unwrap();

        assert_eq!(card.name, "Bitcoin");
        assert_eq!(card.incentive, "incentive");
    }

    #[test]
    fn test_parse_trims_field_whitespace() {
        let card = LessonCard::parse("  Ethereum \ndesc\t\nEarn ETH-DFI\nincentive").unwrap();

        assert_eq!(card.name, "Ethereum");
        assert_eq!(card.description, "desc");
    }

    #[test]
    fn test_parse_rejects_short_text() {
        let result = LessonCard::parse("DeFiChain\nonly two lines");

        assert!(matches!(result, Err(Error::LessonCardShape(2))));
    }

    #[test]
    fn test_cards_compare_on_all_fields() {
        let a = LessonCard::new("Bitcoin", "desc", "EARN BTC-DFI", "incentive");
        let b = LessonCard::new("Bitcoin", "desc", "EARN BTC-DFI", "other incentive");

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
