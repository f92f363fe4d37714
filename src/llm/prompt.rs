//! Fixed system instructions for the three completion steps.
//!
//! Each translate action runs [`Task::Translate`], [`Task::Explain`] and
//! [`Task::GrammarCheck`] in that order.  The instructions are sent verbatim as
//! the system message; the user message is either the submitted text or, for
//! the explanation step, the translation produced by the first step.

const TRANSLATE_INSTRUCTION: &str =
    "Translate the following text between Korean and Vietnamese.";

const EXPLAIN_INSTRUCTION: &str = "For the following translated text, provide explanations for key terms in both Korean and Vietnamese, and offer similar example sentences in both languages.";

const GRAMMAR_INSTRUCTION: &str =
    "Check the following text for grammatical errors and suggest improvements.";

/// One of the three completion steps of a translate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Translate,
    Explain,
    GrammarCheck,
}

impl Task {
    /// All steps in execution order.
    pub const SEQUENCE: [Task; 3] = [Task::Translate, Task::Explain, Task::GrammarCheck];

    pub fn system_instruction(self) -> &'static str {
        match self {
            Task::Translate => TRANSLATE_INSTRUCTION,
            Task::Explain => EXPLAIN_INSTRUCTION,
            Task::GrammarCheck => GRAMMAR_INSTRUCTION,
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Task::Translate => "translate",
            Task::Explain => "explain",
            Task::GrammarCheck => "grammar-check",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_are_exact() {
        assert_eq!(
            Task::Translate.system_instruction(),
            "Translate the following text between Korean and Vietnamese."
        );
        assert_eq!(
            Task::Explain.system_instruction(),
            "For the following translated text, provide explanations for key terms in both \
             Korean and Vietnamese, and offer similar example sentences in both languages."
        );
        assert_eq!(
            Task::GrammarCheck.system_instruction(),
            "Check the following text for grammatical errors and suggest improvements."
        );
    }

    #[test]
    fn sequence_order() {
        assert_eq!(
            Task::SEQUENCE,
            [Task::Translate, Task::Explain, Task::GrammarCheck]
        );
    }
}
