// Post-hoc check on model output.
//
// "FRAM" is also the name of a public transit operator, and the model's
// background knowledge leaks through despite the system prompt. Any reply
// that mentions transit vocabulary is discarded. The list is a heuristic and
// will miss paraphrases.

use super::intent::normalize;

const TRANSIT_TERMS: &[&str] = &[
    "kollektiv",
    "kollektivtransport",
    "agder",
    "buss",
    "busser",
    "ferge",
    "ferger",
    "ruter",
    "rutetider",
    "billett",
    "billetter",
    "pendler",
    "reise",
    "reisende",
    "trafikk",
];

/// First denylisted term found in `reply`, case-insensitive substring match.
pub fn transit_term(reply: &str) -> Option<&'static str> {
    let text = normalize(reply);
    TRANSIT_TERMS.iter().copied().find(|term| text.contains(term))
}

/// Whether a model reply may be shown to the user.
pub fn is_acceptable(reply: &str) -> bool {
    !reply.trim().is_empty() && transit_term(reply).is_none()
}
