use std::path::PathBuf;

use advisor_core::{
    parse_dropped_paths, parse_typed_path, AppViewModel, DocumentSlot, Msg, PdfDocument,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::keymap::KeyMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Position,
    Transcript,
    Resume,
    GithubProfile,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Position,
        Focus::Transcript,
        Focus::Resume,
        Focus::GithubProfile,
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn slot(self) -> Option<DocumentSlot> {
        match self {
            Focus::Transcript => Some(DocumentSlot::Transcript),
            Focus::Resume => Some(DocumentSlot::Resume),
            _ => None,
        }
    }
}

/// Terminal-only state: focus and the half-typed drop-zone paths. Form values
/// themselves live in `AppState` and are read back from the view.
#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    transcript_path: String,
    resume_path: String,
    pub should_quit: bool,
}

impl UiState {
    pub fn path_input(&self, slot: DocumentSlot) -> &str {
        match slot {
            DocumentSlot::Transcript => &self.transcript_path,
            DocumentSlot::Resume => &self.resume_path,
        }
    }

    fn path_input_mut(&mut self, slot: DocumentSlot) -> &mut String {
        match slot {
            DocumentSlot::Transcript => &mut self.transcript_path,
            DocumentSlot::Resume => &mut self.resume_path,
        }
    }

    pub fn handle_key(&mut self, view: &AppViewModel, key: KeyEvent) -> Vec<Msg> {
        let KeyEvent {
            code, modifiers, ..
        } = key;

        if KeyMap::is_quit(code, modifiers) {
            self.should_quit = true;
            return Vec::new();
        }
        if KeyMap::is_submit(code, modifiers) {
            return vec![Msg::SubmitClicked];
        }
        if KeyMap::is_next_field(code) {
            self.focus = self.focus.next();
            return Vec::new();
        }
        if KeyMap::is_prev_field(code) {
            self.focus = self.focus.prev();
            return Vec::new();
        }

        match (self.focus, code) {
            (Focus::Submit, KeyCode::Enter | KeyCode::Char(' ')) => vec![Msg::SubmitClicked],
            (Focus::Transcript | Focus::Resume, KeyCode::Enter) => {
                let slot = self.focus.slot().unwrap_or(DocumentSlot::Transcript);
                let typed = std::mem::take(self.path_input_mut(slot));
                drop_paths(slot, parse_typed_path(&typed))
            }
            (Focus::Transcript | Focus::Resume, KeyCode::Backspace) => {
                if let Some(slot) = self.focus.slot() {
                    self.path_input_mut(slot).pop();
                }
                Vec::new()
            }
            (Focus::Transcript | Focus::Resume, KeyCode::Char(ch))
                if !modifiers.contains(KeyModifiers::CONTROL) =>
            {
                if let Some(slot) = self.focus.slot() {
                    self.path_input_mut(slot).push(ch);
                }
                Vec::new()
            }
            (Focus::Position | Focus::GithubProfile, KeyCode::Enter) => {
                self.focus = self.focus.next();
                Vec::new()
            }
            (Focus::Position | Focus::GithubProfile, KeyCode::Backspace) => {
                let mut text = self.text_value(view);
                text.pop();
                vec![self.text_msg(text)]
            }
            (Focus::Position | Focus::GithubProfile, KeyCode::Char(ch))
                if !modifiers.contains(KeyModifiers::CONTROL) =>
            {
                let mut text = self.text_value(view);
                text.push(ch);
                vec![self.text_msg(text)]
            }
            _ => Vec::new(),
        }
    }

    /// Bracketed paste. Dragging files onto the terminal arrives here.
    pub fn handle_paste(&mut self, view: &AppViewModel, pasted: &str) -> Vec<Msg> {
        match self.focus {
            Focus::Transcript | Focus::Resume => match self.focus.slot() {
                Some(slot) => {
                    self.path_input_mut(slot).clear();
                    drop_paths(slot, parse_dropped_paths(pasted))
                }
                None => Vec::new(),
            },
            Focus::Position | Focus::GithubProfile => {
                let mut text = self.text_value(view);
                text.extend(pasted.chars().filter(|ch| *ch != '\n' && *ch != '\r'));
                vec![self.text_msg(text)]
            }
            Focus::Submit => Vec::new(),
        }
    }

    fn text_value(&self, view: &AppViewModel) -> String {
        match self.focus {
            Focus::GithubProfile => view.github_profile.clone(),
            _ => view.position.clone(),
        }
    }

    fn text_msg(&self, text: String) -> Msg {
        match self.focus {
            Focus::GithubProfile => Msg::GithubProfileChanged(text),
            _ => Msg::PositionChanged(text),
        }
    }
}

fn drop_paths(slot: DocumentSlot, paths: Vec<PathBuf>) -> Vec<Msg> {
    let files: Vec<PdfDocument> = paths
        .into_iter()
        .map(PdfDocument::from_path)
        .collect();
    if files.is_empty() {
        return Vec::new();
    }
    vec![Msg::FilesDropped { slot, files }]
}
