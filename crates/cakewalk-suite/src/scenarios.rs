use crate::lesson::LessonCard;
use crate::pages::MainPage;
use crate::{Error, Result};

/// Every label the nav bar is expected to show, in display order.
pub const EXPECTED_NAV_LABELS: [&str; 7] = [
    "Get Started",
    "Earn",
    "Borrow",
    "Learn",
    "Community",
    "Support",
    "Company",
];

fn defichain_card() -> LessonCard {
    LessonCard::new(
        "DeFiChain",
        "Native Decentralized Finance enabled on Bitcoin",
        "EARN DFI",
        "Earn $1 in DFI",
    )
}

fn bitcoin_card() -> LessonCard {
    LessonCard::new(
        "Bitcoin",
        "Decentralized, scarce digital currency",
        "EARN BTC-DFI",
        "Earn $1 in BTC-DFI tokens",
    )
}

fn ethereum_card() -> LessonCard {
    LessonCard::new(
        "Ethereum",
        "Programmable blockchain with smart contract functionality",
        "Earn ETH-DFI",
        "Earn $1 in ETH-DFI tokens",
    )
}

/// The header logo is displayed.
pub async fn user_sees_logo(page: MainPage) -> Result<()> {
    let logo = page.logo().await?;

    if !logo.is_displayed().await? {
        return Err(Error::Check("header logo is not displayed".to_string()));
    }
    Ok(())
}

/// The nav bar shows exactly the expected labels, in any order.
pub async fn nav_bar_lists_expected_items(page: MainPage) -> Result<()> {
    let mut expected: Vec<String> = EXPECTED_NAV_LABELS.iter().map(|s| s.to_string()).collect();
    let mut actual = page.nav_button_names().await?;

    if expected.len() != actual.len() {
        return Err(Error::Check(format!(
            "expected {} nav items, found {}: {:?}",
            expected.len(),
            actual.len(),
            actual
        )));
    }

    expected.sort();
    actual.sort();
    if expected != actual {
        return Err(Error::Check(format!(
            "expected nav items {:?}, found {:?}",
            expected, actual
        )));
    }
    Ok(())
}

/// The DeFiChain lesson card is available for learning, with all four of its
/// displayed fields intact.
pub async fn lesson_card_defichain_is_available(page: MainPage) -> Result<()> {
    let expected = defichain_card();

    page.browse_through_lessons().await?;

    let text = page.lesson_card("DeFiChain").await?.text().await?;
    let actual = LessonCard::parse(&text)?;

    if actual != expected {
        return Err(Error::Check(format!(
            "expected lesson card {:?}, found {:?}",
            expected, actual
        )));
    }
    Ok(())
}

/// DeFiChain, Bitcoin and Ethereum are all available for learning.
pub async fn all_lessons_are_browsable(page: MainPage) -> Result<()> {
    let expected = [defichain_card(), bitcoin_card(), ethereum_card()];

    page.browse_through_lessons().await?;

    let mut cards = Vec::new();
    for card in page.lesson_cards().await? {
        cards.push(LessonCard::parse(&card.text().await?)?);
    }

    for want in &expected {
        match cards.iter().find(|card| card.name == want.name) {
            None => {
                return Err(Error::Check(format!(
                    "lesson card '{}' not present, saw {:?}",
                    want.name,
                    cards.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
                )));
            }
            Some(actual) if actual != want => {
                return Err(Error::Check(format!(
                    "expected lesson card {:?}, found {:?}",
                    want, actual
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}
