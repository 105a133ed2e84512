// System instruction for knowledge-grounded answers

use crate::knowledge::KnowledgeDocument;

/// Sentence the model must use when the document has no answer.
pub const UNKNOWN_ANSWER: &str = "Det vet jeg ikke sikkert ennå. Vil du at jeg skal sjekke med teamet?";

pub const CHAT_TEMPERATURE: f32 = 0.2;
pub const CHAT_MAX_OUTPUT_TOKENS: u32 = 240;

pub const PROBE_INPUT: &str = "Svar med kun ordet: OK";
pub const PROBE_MAX_OUTPUT_TOKENS: u32 = 16;

/// Whole document stuffed into the instruction; no retrieval.
pub fn system_prompt(knowledge: &KnowledgeDocument) -> String {
    format!(
        r#"DU ER IKKE EN GENERELL ASSISTENT.

ABSOLUTTE REGLER:
- IGNORER all ekstern kunnskap om navnet "FRAM" (inkl. kollektivtransport).
- Svar KUN basert på FRAM KUNNSKAP under.
- Hvis svaret ikke finnes: si "{UNKNOWN_ANSWER}" og still ett oppfølgingsspørsmål.
- Aldri nevn buss/tog/ferge/ruter/billetter.

FRAM KUNNSKAP (ENESTE KILDE):
{}"#,
        knowledge.text()
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_ends_with_knowledge_document() {
        let doc = KnowledgeDocument::from_text("k.txt", "Braastad Gaard selger poteter.\n");
        let prompt = system_prompt(&doc);

        assert!(prompt.starts_with("DU ER IKKE EN GENERELL ASSISTENT."));
        assert!(prompt.contains(UNKNOWN_ANSWER));
        assert!(prompt.ends_with("FRAM KUNNSKAP (ENESTE KILDE):\nBraastad Gaard selger poteter."));
    }
}
