//! Interaction records and the append-only session log.

// ---------------------------------------------------------------------------
// InteractionRecord
// ---------------------------------------------------------------------------

/// One submitted text and everything derived from it.
///
/// `translation` is always present; the other two fields stay `None` until
/// their step has produced a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    pub input: String,
    pub translation: String,
    pub explanation: Option<String>,
    pub grammar_notes: Option<String>,
}

impl InteractionRecord {
    /// Start a record from a finished translation.
    pub fn new(input: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            translation: translation.into(),
            explanation: None,
            grammar_notes: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_grammar_notes(mut self, notes: impl Into<String>) -> Self {
        self.grammar_notes = Some(notes.into());
        self
    }

    /// `true` once every derived field is populated.
    pub fn is_complete(&self) -> bool {
        self.explanation.is_some() && self.grammar_notes.is_some()
    }
}

// ---------------------------------------------------------------------------
// SessionLog
// ---------------------------------------------------------------------------

/// Ordered interaction history for one session.
///
/// Insertion order is display order and export order.  No cap, no
/// deduplication, nothing is written to disk.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    records: Vec<InteractionRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn all(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&InteractionRecord> {
        self.records.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_derived_fields() {
        let rec = InteractionRecord::new("안녕하세요", "Xin chào");
        assert_eq!(rec.input, "안녕하세요");
        assert_eq!(rec.translation, "Xin chào");
        assert!(rec.explanation.is_none());
        assert!(rec.grammar_notes.is_none());
        assert!(!rec.is_complete());
    }

    #[test]
    fn builders_fill_in_order() {
        let rec = InteractionRecord::new("a", "b")
            .with_explanation("c")
            .with_grammar_notes("d");
        assert_eq!(rec.explanation.as_deref(), Some("c"));
        assert_eq!(rec.grammar_notes.as_deref(), Some("d"));
        assert!(rec.is_complete());
    }

    #[test]
    fn log_keeps_insertion_order() {
        let mut log = SessionLog::new();
        for i in 0..5 {
            log.append(InteractionRecord::new(format!("in{i}"), format!("out{i}")));
        }
        assert_eq!(log.len(), 5);
        let inputs: Vec<_> = log.all().iter().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, ["in0", "in1", "in2", "in3", "in4"]);
        assert_eq!(log.last().map(|r| r.input.as_str()), Some("in4"));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut log = SessionLog::new();
        log.append(InteractionRecord::new("same", "x"));
        log.append(InteractionRecord::new("same", "x"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn clear_empties_any_size() {
        let mut log = SessionLog::new();
        log.clear();
        assert!(log.is_empty());

        for _ in 0..100 {
            log.append(InteractionRecord::new("t", "u"));
        }
        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }
}
