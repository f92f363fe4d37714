//! Progress state of the current user action.
//!
//! ```text
//! Idle ──translate──▶ Translating ──▶ Explaining ──▶ CheckingGrammar ──▶ Idle
//! Idle ──download───▶ Exporting ──▶ Idle
//! any failure ──▶ Idle (with an error notice in the view)
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    /// No command is running.
    #[default]
    Idle,
    /// First completion: the translation itself.
    Translating,
    /// Second completion: key terms and example sentences.
    Explaining,
    /// Third completion: grammar check of the original input.
    CheckingGrammar,
    /// Writing `translation_history.txt`.
    Exporting,
}

impl ActionState {
    /// Returns `true` while a command is in flight.
    ///
    /// The UI disables the action buttons while busy so commands never overlap.
    ///
    /// ```
    /// use ko_vi_tutor::pipeline::ActionState;
    ///
    /// assert!(!ActionState::Idle.is_busy());
    /// assert!(ActionState::Translating.is_busy());
    /// assert!(ActionState::Exporting.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        !matches!(self, ActionState::Idle)
    }

    /// Status line shown next to the spinner.
    pub fn label(&self) -> &'static str {
        match self {
            ActionState::Idle => "",
            ActionState::Translating => "번역 중...",
            ActionState::Explaining => "주요 단어 설명 생성 중...",
            ActionState::CheckingGrammar => "문법 검사 중...",
            ActionState::Exporting => "대화 기록 저장 중...",
        }
    }
}
