// Keyword intent classifier for incoming chat messages

const OFFER_PHRASES: &[&str] = &[
    "hva tilbyr",
    "hva tilbyr dere",
    "hva selger",
    "hva selger dere",
    "hva kan jeg kjøpe",
    "hvilke produkter",
    "produktutvalg",
    "what do you sell",
    "what do you offer",
];

const FARMS_PHRASES: &[&str] = &[
    "partnering farms",
    "partnering farm",
    "partnergård",
    "gård",
    "farms",
    "farm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "What do you sell / offer?"
    Offer,
    /// Questions about the partner farms.
    Farms,
    /// Anything else; goes to the model.
    General,
}

/// Lower-case and trim, the only normalization the rules need.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Classify a raw message. Offer is checked before Farms.
pub fn classify(message: &str) -> Intent {
    let text = normalize(message);
    let mentions = |phrases: &[&str]| phrases.iter().any(|p| text.contains(p));

    if mentions(OFFER_PHRASES) {
        Intent::Offer
    } else if mentions(FARMS_PHRASES) {
        Intent::Farms
    } else {
        Intent::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offer_phrase_classifies_as_offer() {
        for phrase in OFFER_PHRASES {
            let message = format!("  Hei! {}?  ", phrase.to_uppercase());
            assert_eq!(classify(&message), Intent::Offer, "phrase: {phrase}");
        }
    }

    #[test]
    fn every_farms_phrase_classifies_as_farms() {
        for phrase in FARMS_PHRASES {
            let message = format!("Fortell om {}", phrase.to_uppercase());
            assert_eq!(classify(&message), Intent::Farms, "phrase: {phrase}");
        }
    }

    #[test]
    fn offer_wins_over_farms() {
        assert_eq!(classify("Hva selger dere fra gården?"), Intent::Offer);
    }

    #[test]
    fn norwegian_letters_are_lowercased() {
        assert_eq!(classify("Hvor ligger GÅRDEN?"), Intent::Farms);
    }

    #[test]
    fn unrelated_question_is_general() {
        assert_eq!(classify("Hva er kapitalen i Norge?"), Intent::General);
        assert_eq!(classify("   "), Intent::General);
    }
}
