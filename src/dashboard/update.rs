//! Dashboard reducer.
//!
//! ```text
//! DashboardState × DashboardEvent → (DashboardState, Vec<DashboardEffect>)
//! ```
//!
//! Generic input events (`CursorUp`, `Activate`, `Back`, `Edit`, `Paste`) are
//! routed by modal precedence: upload prompt first, then the profile
//! dropdown, then whichever pane has focus.

use chrono::{DateTime, Local};

use super::{
    CaseOption, DashboardState, DashboardView, Focus, ProfileMenuItem, SidebarItem, UploadedFile,
    EXPLORE_SHORTCUTS,
};
use crate::catalog::CASES;
use crate::text_input::{TextEdit, TextInput};
use crate::ui::ToastLevel;

/// Everything that can happen on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    // Navigation
    SelectCase(String),
    ChooseOption(CaseOption),
    OpenAdminAnalytics,
    SelectChat(u32),
    GoHome,
    GoToOptions,
    /// Jump from the explore view to one of its shortcut targets.
    Shortcut(DashboardView),

    // Files
    FileSelected(Option<UploadedFile>),
    FileDropped(Option<UploadedFile>),
    OpenUploadPrompt,
    ConfirmUpload(DateTime<Local>),
    CancelUpload,

    ToggleQuestion(usize),
    ToggleSidebar,
    ToggleProfileMenu,
    SignOut,
    SendMessage,

    // Keyboard plumbing
    ToggleFocus,
    CursorUp,
    CursorDown,
    Activate,
    Back,
    Edit(TextEdit),
    Paste { text: String, at: DateTime<Local> },
}

/// Side effects for the caller to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEffect {
    Notify { level: ToastLevel, message: String },
    Logout,
}

/// Apply one event to the dashboard state.
pub fn transition(
    state: &DashboardState,
    event: DashboardEvent,
) -> (DashboardState, Vec<DashboardEffect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();
    next.apply(event, &mut effects);
    next.clamp_cursors();
    (next, effects)
}

impl DashboardState {
    fn apply(&mut self, event: DashboardEvent, effects: &mut Vec<DashboardEffect>) {
        match event {
            DashboardEvent::SelectCase(title) => {
                if title.trim().is_empty() {
                    return;
                }
                tracing::info!(case = %title, "case selected");
                self.selected_case = title;
                self.set_view(DashboardView::CaseSelection);
            }
            DashboardEvent::ChooseOption(option) => {
                if self.view == DashboardView::CaseSelection {
                    self.set_view(option.target());
                }
            }
            DashboardEvent::OpenAdminAnalytics => self.set_view(DashboardView::AdminAnalytics),
            DashboardEvent::SelectChat(id) => self.select_chat(id),
            DashboardEvent::GoHome => self.set_view(DashboardView::Main),
            DashboardEvent::GoToOptions => {
                if self.view.is_case_view() {
                    self.set_view(DashboardView::CaseSelection);
                }
            }
            DashboardEvent::Shortcut(target) => {
                if self.view == DashboardView::ExploreCases
                    && EXPLORE_SHORTCUTS.iter().any(|&(_, view)| view == target)
                {
                    self.set_view(target);
                }
            }

            DashboardEvent::FileSelected(file) => self.attach_file(file, "uploaded", effects),
            DashboardEvent::FileDropped(file) => self.attach_file(file, "dropped", effects),
            DashboardEvent::OpenUploadPrompt => {
                self.profile_menu = None;
                self.upload_prompt = Some(TextInput::new());
            }
            DashboardEvent::ConfirmUpload(at) => {
                if let Some(prompt) = self.upload_prompt.take() {
                    let file = UploadedFile::from_path(prompt.value(), at);
                    self.attach_file(file, "uploaded", effects);
                }
            }
            DashboardEvent::CancelUpload => self.upload_prompt = None,

            DashboardEvent::ToggleQuestion(index) => {
                if !self.expanded_questions.remove(&index) {
                    self.expanded_questions.insert(index);
                }
            }
            DashboardEvent::ToggleSidebar => self.sidebar_expanded = !self.sidebar_expanded,
            DashboardEvent::ToggleProfileMenu => {
                if self.upload_prompt.is_some() {
                    return;
                }
                self.profile_menu = match self.profile_menu {
                    Some(_) => None,
                    None => Some(0),
                };
            }
            DashboardEvent::SignOut => {
                self.profile_menu = None;
                effects.push(DashboardEffect::Logout);
            }
            DashboardEvent::SendMessage => {
                if self.view.has_composer() && !self.chat_message.value().trim().is_empty() {
                    tracing::debug!(message = %self.chat_message.value(), "chat message discarded");
                    self.chat_message.clear();
                    effects.push(DashboardEffect::Notify {
                        level: ToastLevel::Info,
                        message: "AI replies are not available in this preview".to_string(),
                    });
                }
            }

            DashboardEvent::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Content => Focus::Sidebar,
                    Focus::Sidebar => Focus::Content,
                };
            }
            DashboardEvent::CursorUp => self.move_cursor(false),
            DashboardEvent::CursorDown => self.move_cursor(true),
            DashboardEvent::Activate => self.activate(effects),
            DashboardEvent::Back => self.back(),
            DashboardEvent::Edit(edit) => {
                if let Some(prompt) = self.upload_prompt.as_mut() {
                    prompt.apply(edit);
                } else if self.view.has_composer() {
                    self.chat_message.apply(edit);
                }
            }
            DashboardEvent::Paste { text, at } => self.paste(&text, at, effects),
        }
    }

    fn set_view(&mut self, view: DashboardView) {
        if self.view != view {
            tracing::debug!(from = ?self.view, to = ?view, "dashboard view changed");
        }
        self.view = view;
        self.content_cursor = 0;
    }

    /// Switching chats always returns to `Main`, whatever the current view.
    fn select_chat(&mut self, id: u32) {
        if self.chat(id).is_none() {
            tracing::warn!(chat = id, "ignoring selection of unknown chat");
            return;
        }
        tracing::info!(chat = id, "chat selected");
        self.active_chat = id;
        self.set_view(DashboardView::Main);
        if self.focus == Focus::Sidebar && !self.chats_visible() {
            self.sidebar_cursor = 1;
        }
    }

    fn attach_file(
        &mut self,
        file: Option<UploadedFile>,
        how: &str,
        effects: &mut Vec<DashboardEffect>,
    ) {
        let Some(file) = file else {
            return;
        };
        let active = self.active_chat;
        let Some(chat) = self.chats.iter_mut().find(|c| c.id == active) else {
            return;
        };
        tracing::info!(chat = active, file = %file.name, "file {how} to chat");

        if !file.has_suggested_extension() {
            effects.push(DashboardEffect::Notify {
                level: ToastLevel::Warning,
                message: format!("{} is not a .pdf, .doc or .docx file", file.name),
            });
        }
        effects.push(DashboardEffect::Notify {
            level: ToastLevel::Success,
            message: format!("Uploaded {} to {}", file.name, chat.name),
        });
        chat.uploaded_file = Some(file);
        if self.view == DashboardView::Main {
            self.content_cursor = 0;
        }
    }

    fn paste(&mut self, text: &str, at: DateTime<Local>, effects: &mut Vec<DashboardEffect>) {
        if let Some(prompt) = self.upload_prompt.as_mut() {
            prompt.insert_str(text);
        } else if self.profile_menu.is_some() {
            tracing::debug!("paste ignored while profile menu is open");
        } else if self.view == DashboardView::Main && self.current_file().is_none() {
            // A file dropped on a terminal arrives as its pasted path.
            self.attach_file(UploadedFile::from_path(text, at), "dropped", effects);
        } else if self.view.has_composer() {
            self.chat_message.insert_str(text);
        }
    }

    fn move_cursor(&mut self, down: bool) {
        if let Some(selected) = self.profile_menu.as_mut() {
            *selected = step(*selected, ProfileMenuItem::ALL.len(), down);
            return;
        }
        if self.upload_prompt.is_some() {
            return;
        }
        match self.focus {
            Focus::Content => {
                self.content_cursor = step(self.content_cursor, self.content_len(), down);
            }
            Focus::Sidebar => {
                self.sidebar_cursor = step(self.sidebar_cursor, self.sidebar_items().len(), down);
            }
        }
    }

    fn activate(&mut self, effects: &mut Vec<DashboardEffect>) {
        if self.upload_prompt.is_some() {
            return;
        }
        if let Some(selected) = self.profile_menu {
            match ProfileMenuItem::ALL.get(selected) {
                Some(ProfileMenuItem::SignOut) => self.apply(DashboardEvent::SignOut, effects),
                Some(item) => {
                    tracing::debug!(item = item.label(), "profile menu entry has no action");
                    self.profile_menu = None;
                }
                None => self.profile_menu = None,
            }
            return;
        }

        let event = match self.focus {
            Focus::Sidebar => match self.sidebar_items().get(self.sidebar_cursor) {
                Some(SidebarItem::AdminAnalytics) => DashboardEvent::OpenAdminAnalytics,
                Some(SidebarItem::RecentChatsToggle) => DashboardEvent::ToggleSidebar,
                Some(SidebarItem::Chat(id)) => DashboardEvent::SelectChat(*id),
                Some(SidebarItem::Profile) => DashboardEvent::ToggleProfileMenu,
                None => return,
            },
            Focus::Content => match self.content_event() {
                Some(event) => event,
                None => return,
            },
        };
        self.apply(event, effects);
    }

    /// What `Enter` does on the highlighted content row.
    fn content_event(&self) -> Option<DashboardEvent> {
        let cursor = self.content_cursor;
        match self.view {
            DashboardView::Main if self.current_file().is_some() => CASES
                .get(cursor)
                .map(|case| DashboardEvent::SelectCase(case.title.to_string())),
            DashboardView::Main => Some(DashboardEvent::OpenUploadPrompt),
            DashboardView::CaseSelection => {
                CaseOption::ALL.get(cursor).copied().map(DashboardEvent::ChooseOption)
            }
            DashboardView::GenerateMcqs => Some(DashboardEvent::ToggleQuestion(cursor)),
            DashboardView::ExploreCases if !self.chat_message.value().trim().is_empty() => {
                Some(DashboardEvent::SendMessage)
            }
            DashboardView::ExploreCases => EXPLORE_SHORTCUTS
                .get(cursor)
                .map(|&(_, view)| DashboardEvent::Shortcut(view)),
            DashboardView::IdentifyConcepts => Some(DashboardEvent::SendMessage),
            DashboardView::AdminAnalytics | DashboardView::GenerateCases => None,
        }
    }

    /// `Esc`: close the topmost overlay, otherwise go up one breadcrumb.
    fn back(&mut self) {
        if self.upload_prompt.take().is_some() {
            return;
        }
        if self.profile_menu.take().is_some() {
            return;
        }
        let parent = self.view.parent();
        self.set_view(parent);
    }

    fn clamp_cursors(&mut self) {
        self.content_cursor = self.content_cursor.min(self.content_len().saturating_sub(1));
        self.sidebar_cursor = self.sidebar_cursor.min(self.sidebar_items().len().saturating_sub(1));
    }
}

/// Move a list highlight one row, stopping at either end.
fn step(current: usize, len: usize, down: bool) -> usize {
    if down {
        (current + 1).min(len.saturating_sub(1))
    } else {
        current.saturating_sub(1)
    }
}
