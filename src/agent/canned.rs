// Fixed replies returned without consulting the model

pub const OFFER_ANSWER: &str = "Vi tilbyr hjemlevering av sesongbaserte dagligvarer fra lokale samarbeidsgårder 🍎🥕 \
På testsiden finner du for eksempel oats (havre), red onions (rødløk), garlic (hvitløk), \
potato (poteter) og carrots (gulrøtter). Utvalget kan variere med sesong.\n\n\
Partnergård i demoen: Braastad Gaard, Oppdalslinna 242, 2740 Roa, Norway.\n\n\
Vil du at jeg skal foreslå hva som passer best til middag, eller er du ute etter noe spesifikt?";

pub const FARMS_ANSWER: &str = "Vi samarbeider med lokale gårder. På testsiden er eksempelgården vår Braastad Gaard (Roa).\n\n\
Adresse: Oppdalslinna 242, 2740 Roa, Norway.\n\n\
Du kan også se kartet på produktsiden – vil du at jeg skal vise deg hvor du finner det?";

const SAFETY_DISCLAIMER: &str =
    "Bare så det er sagt: FRAM her er en test-nettbutikk for dagligvarer (ikke transport 😅).";

const DEMO_MODE_APOLOGY: &str = "Akkurat nå kjører chatten i en enkel demo-modus, \
men jeg kan fortsatt hjelpe med det som står på nettsiden 😊";

/// The model said something off-topic or nothing at all.
pub fn safety_fallback() -> String {
    format!("{SAFETY_DISCLAIMER}\n\n{OFFER_ANSWER}")
}

/// The model could not be reached.
pub fn error_fallback() -> String {
    format!("{DEMO_MODE_APOLOGY}\n\n{OFFER_ANSWER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_answer_keeps_line_breaks() {
        assert!(OFFER_ANSWER.starts_with("Vi tilbyr hjemlevering"));
        assert!(OFFER_ANSWER.contains("🍎🥕 På testsiden"));
        assert!(OFFER_ANSWER.contains("sesong.\n\nPartnergård"));
    }

    #[test]
    fn fallbacks_end_with_the_offer() {
        assert!(safety_fallback().ends_with(OFFER_ANSWER));
        assert!(safety_fallback().contains("ikke transport"));
        assert!(error_fallback().ends_with(OFFER_ANSWER));
        assert!(error_fallback().contains("demo-modus"));
    }
}
