// ── Keyword Interception ───────────────────────────────────────────────────
// Classify a user message against the fixed keyword categories and, on a hit,
// answer locally with the category's canned text — no network call is made.
// Keyword heuristics only: fast, deterministic, no model required.

use super::persona;

/// Category of a locally answered question, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Role,
    Contact,
    Skills,
    Career,
}

/// First-match-wins lookup: role > contact > skills > career.
/// Returns the canned answer for the first category whose keyword set hits
/// the lower-cased message, or `None` when the turn must go to the gateway.
pub fn intercept(message: &str) -> Option<(Category, &'static str)> {
    let q = message.to_lowercase();

    if contains_any(&q, persona::ROLE_KEYWORDS) {
        return Some((Category::Role, persona::ROLE_ANSWER));
    }
    if contains_any(&q, persona::CONTACT_KEYWORDS) {
        return Some((Category::Contact, persona::CONTACT_ANSWER));
    }
    if contains_any(&q, persona::SKILL_KEYWORDS) {
        return Some((Category::Skills, persona::SKILL_ANSWER));
    }
    if contains_any(&q, persona::CAREER_KEYWORDS) {
        return Some((Category::Career, persona::CAREER_ANSWER));
    }

    None
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_question_is_intercepted() {
        let hit = intercept("Em que setor ele trabalha hoje?");
        assert_eq!(hit, Some((Category::Role, persona::ROLE_ANSWER)));
    }

    #[test]
    fn test_contact_question_is_intercepted() {
        let hit = intercept("Qual o email de contato?");
        assert_eq!(hit, Some((Category::Contact, persona::CONTACT_ANSWER)));
    }

    #[test]
    fn test_skills_question_is_intercepted() {
        let hit = intercept("quais tecnologias ele domina?");
        assert_eq!(hit, Some((Category::Skills, persona::SKILL_ANSWER)));
    }

    #[test]
    fn test_career_question_is_intercepted() {
        let hit = intercept("Como foi a carreira dele?");
        assert_eq!(hit, Some((Category::Career, persona::CAREER_ANSWER)));
    }

    #[test]
    fn test_priority_role_beats_career() {
        // "atua" (role) and "carreira" (career) in the same question: role wins.
        let hit = intercept("onde ele atua na carreira atual?");
        assert_eq!(hit.map(|(c, _)| c), Some(Category::Role));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(intercept("QUAL O CARGO DELE?").is_some());
    }

    #[test]
    fn test_open_question_passes_through() {
        assert_eq!(intercept("Me conte sobre o projeto RoboZap"), None);
    }
}
