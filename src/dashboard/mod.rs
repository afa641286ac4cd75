//! Dashboard navigator state.
//!
//! Everything the dashboard shows is derived from [`DashboardState`]. The
//! state only changes through [`update::transition`].

mod update;

pub use update::{transition, DashboardEffect, DashboardEvent};

use std::collections::BTreeSet;

use chrono::{DateTime, Local};

use crate::catalog::{self, CaseSummary, CASES, CONCEPTS, QUESTIONS, SEED_CHATS, SUGGESTED_EXTENSIONS};
use crate::text_input::TextInput;

/// Screen shown in the dashboard content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Main,
    AdminAnalytics,
    GenerateCases,
    CaseSelection,
    GenerateMcqs,
    ExploreCases,
    IdentifyConcepts,
}

impl DashboardView {
    /// Returns the breadcrumb label for this view.
    pub const fn label(&self) -> &'static str {
        match self {
            DashboardView::Main => "home",
            DashboardView::AdminAnalytics => "Admin Analytics",
            DashboardView::GenerateCases => "Generate Cases",
            DashboardView::CaseSelection => "Cases",
            DashboardView::GenerateMcqs => "Generate MCQs",
            DashboardView::ExploreCases => "Explore Cases",
            DashboardView::IdentifyConcepts => "Identify Concepts",
        }
    }

    /// The view one breadcrumb up.
    pub const fn parent(&self) -> DashboardView {
        match self {
            DashboardView::GenerateMcqs
            | DashboardView::ExploreCases
            | DashboardView::IdentifyConcepts => DashboardView::CaseSelection,
            DashboardView::Main
            | DashboardView::AdminAnalytics
            | DashboardView::GenerateCases
            | DashboardView::CaseSelection => DashboardView::Main,
        }
    }

    /// Views that work on the selected case.
    pub const fn is_case_view(&self) -> bool {
        matches!(
            self,
            DashboardView::CaseSelection
                | DashboardView::GenerateMcqs
                | DashboardView::ExploreCases
                | DashboardView::IdentifyConcepts
        )
    }

    /// Views with the "Type something here!" composer.
    pub const fn has_composer(&self) -> bool {
        matches!(self, DashboardView::ExploreCases | DashboardView::IdentifyConcepts)
    }
}

/// How to proceed once a case is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOption {
    GenerateMcqs,
    IdentifyConcepts,
    ExploreCase,
}

impl CaseOption {
    pub const ALL: [CaseOption; 3] = [
        CaseOption::GenerateMcqs,
        CaseOption::IdentifyConcepts,
        CaseOption::ExploreCase,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            CaseOption::GenerateMcqs => "A) Generate MCQs",
            CaseOption::IdentifyConcepts => "B) Identify Concepts",
            CaseOption::ExploreCase => "C) Explore Case",
        }
    }

    pub const fn target(&self) -> DashboardView {
        match self {
            CaseOption::GenerateMcqs => DashboardView::GenerateMcqs,
            CaseOption::IdentifyConcepts => DashboardView::IdentifyConcepts,
            CaseOption::ExploreCase => DashboardView::ExploreCases,
        }
    }
}

/// Buttons under the explore composer.
pub const EXPLORE_SHORTCUTS: [(&str, DashboardView); 2] = [
    ("Generate MCQs", DashboardView::GenerateMcqs),
    ("Identify Concepts", DashboardView::IdentifyConcepts),
];

/// A file attached to a chat. Only the name is kept; content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub uploaded_at: DateTime<Local>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, uploaded_at: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            uploaded_at,
        }
    }

    /// Build from a typed or pasted path, keeping the last path component.
    ///
    /// Handles the forms terminals use when a file is dropped on them:
    /// quoted paths, `file://` URLs and backslash-escaped spaces.
    /// Returns `None` when nothing usable remains.
    pub fn from_path(raw: &str, uploaded_at: DateTime<Local>) -> Option<Self> {
        let trimmed = raw.trim();
        let unquoted = trimmed
            .strip_prefix('\'')
            .and_then(|s| s.strip_suffix('\''))
            .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
            .unwrap_or(trimmed);
        let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
        let path = path.replace("\\ ", " ");

        let name = path
            .rsplit(['/', '\\'])
            .find(|part| !part.trim().is_empty())?
            .trim();
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, uploaded_at))
    }

    /// Lowercased extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Whether the name carries one of the suggested document extensions.
    pub fn has_suggested_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| SUGGESTED_EXTENSIONS.contains(&ext.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: u32,
    pub name: String,
    pub uploaded_file: Option<UploadedFile>,
}

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Content,
    Sidebar,
}

/// Selectable rows in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    AdminAnalytics,
    RecentChatsToggle,
    Chat(u32),
    Profile,
}

/// Entries of the profile dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuItem {
    ProfileSettings,
    Notifications,
    SignOut,
}

impl ProfileMenuItem {
    pub const ALL: [ProfileMenuItem; 3] = [
        ProfileMenuItem::ProfileSettings,
        ProfileMenuItem::Notifications,
        ProfileMenuItem::SignOut,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            ProfileMenuItem::ProfileSettings => "Profile Settings",
            ProfileMenuItem::Notifications => "Notifications",
            ProfileMenuItem::SignOut => "Sign Out",
        }
    }
}

/// Complete dashboard state for one logged-in session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub view: DashboardView,
    /// Title copied from the case list; display only.
    pub selected_case: String,
    pub sidebar_expanded: bool,
    /// Always the id of an entry in `chats`.
    pub active_chat: u32,
    pub expanded_questions: BTreeSet<usize>,
    pub chat_message: TextInput,
    pub chats: Vec<Chat>,
    /// Highlighted entry while the profile dropdown is open.
    pub profile_menu: Option<usize>,
    /// Path being typed while the upload prompt is open.
    pub upload_prompt: Option<TextInput>,
    pub focus: Focus,
    pub content_cursor: usize,
    pub sidebar_cursor: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Fresh state on dashboard entry: main view, first chat active.
    pub fn new() -> Self {
        let chats: Vec<Chat> = SEED_CHATS
            .iter()
            .map(|&(id, name)| Chat {
                id,
                name: name.to_string(),
                uploaded_file: None,
            })
            .collect();
        let active_chat = chats.first().map(|c| c.id).unwrap_or(1);

        Self {
            view: DashboardView::Main,
            selected_case: String::new(),
            sidebar_expanded: false,
            active_chat,
            expanded_questions: BTreeSet::new(),
            chat_message: TextInput::new(),
            chats,
            profile_menu: None,
            upload_prompt: None,
            focus: Focus::Content,
            content_cursor: 0,
            sidebar_cursor: 0,
        }
    }

    pub fn chat(&self, id: u32) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub fn active(&self) -> Option<&Chat> {
        self.chat(self.active_chat)
    }

    /// File on the active chat. Drives whether `Main` shows the upload
    /// prompt or the case list.
    pub fn current_file(&self) -> Option<&UploadedFile> {
        self.active().and_then(|c| c.uploaded_file.as_ref())
    }

    /// The "Recent Chats" list is shown when expanded or away from `Main`.
    pub fn chats_visible(&self) -> bool {
        self.sidebar_expanded || self.view != DashboardView::Main
    }

    pub fn selected_case_summary(&self) -> Option<&'static CaseSummary> {
        catalog::find_case(&self.selected_case)
    }

    pub fn is_question_expanded(&self, index: usize) -> bool {
        self.expanded_questions.contains(&index)
    }

    /// Rows in the sidebar, top to bottom.
    pub fn sidebar_items(&self) -> Vec<SidebarItem> {
        let mut items = vec![SidebarItem::AdminAnalytics, SidebarItem::RecentChatsToggle];
        if self.chats_visible() {
            items.extend(self.chats.iter().map(|c| SidebarItem::Chat(c.id)));
        }
        items.push(SidebarItem::Profile);
        items
    }

    /// Number of selectable rows in the content area.
    pub fn content_len(&self) -> usize {
        match self.view {
            DashboardView::Main if self.current_file().is_some() => CASES.len(),
            DashboardView::Main => 1,
            DashboardView::CaseSelection => CaseOption::ALL.len(),
            DashboardView::GenerateMcqs => QUESTIONS.len(),
            DashboardView::ExploreCases => EXPLORE_SHORTCUTS.len(),
            DashboardView::IdentifyConcepts => CONCEPTS.len(),
            DashboardView::AdminAnalytics | DashboardView::GenerateCases => 0,
        }
    }

    /// Breadcrumb trail for the current view.
    pub fn breadcrumbs(&self) -> Vec<String> {
        let mut crumbs = vec![DashboardView::Main.label().to_string()];
        match self.view {
            DashboardView::Main => {}
            DashboardView::AdminAnalytics | DashboardView::GenerateCases => {
                crumbs.push(self.view.label().to_string());
            }
            DashboardView::CaseSelection => {
                crumbs.push(catalog::CASE_SOURCE_NAME.to_string());
                crumbs.push(self.selected_case.clone());
            }
            DashboardView::GenerateMcqs
            | DashboardView::ExploreCases
            | DashboardView::IdentifyConcepts => {
                crumbs.push(catalog::CASE_SOURCE_NAME.to_string());
                crumbs.push(self.selected_case.clone());
                crumbs.push(self.view.label().to_string());
            }
        }
        crumbs
    }
}
