//! Hard-coded content shown by the dashboard.
//!
//! Nothing here is generated: the "generated" cases, questions and concepts
//! are fixed tables, and the analytics rows are sample data.

/// Difficulty badge attached to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    /// Returns the badge label.
    pub const fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A case the user can pick from the generated case list.
#[derive(Debug, Clone, Copy)]
pub struct CaseSummary {
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
}

/// One row of the admin analytics table.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsRow {
    pub user: &'static str,
    pub time_spent: &'static str,
    pub cases_uploaded: u32,
    pub mcq_attempted: u32,
    pub most_questions_type: Difficulty,
}

pub const CASES: &[CaseSummary] = &[
    CaseSummary {
        title: "Chest Pain in a Middle-Aged Man",
        difficulty: Difficulty::Moderate,
        description: "patient has chest pain since yesterday night...",
    },
    CaseSummary {
        title: "Persistent Cough in a smoker",
        difficulty: Difficulty::Easy,
        description: "patient has chest pain since yesterday night...",
    },
    CaseSummary {
        title: "Shortness of breath in pregnancy",
        difficulty: Difficulty::Easy,
        description: "patient has chest pain since yesterday night...",
    },
    CaseSummary {
        title: "Diabetes Management in an elderly patient",
        difficulty: Difficulty::Moderate,
        description: "patient has chest pain since yesterday night...",
    },
    CaseSummary {
        title: "Chest Pain in a young man",
        difficulty: Difficulty::Hard,
        description: "patient has chest pain since yesterday night...",
    },
];

pub const QUESTIONS: &[&str] = &[
    "Most specific marker of myocardial infarction?",
    "First-line management for STEMI?",
    "ECG finding in pericarditis vs MI?",
    "ECG status in pericarditis vs MI?",
    "First-line management for STEMI?",
    "ECG finding in pericarditis vs MI?",
    "First-line management for STEMI?",
    "Most specific marker of myocardial infarction?",
];

/// Placeholder body shown under an expanded question.
pub const QUESTION_DETAILS: &str = "Question details and options would appear here...";

pub const CONCEPTS: &[&str] = &[
    "Pathophysiology of myocardial infarction.",
    "Differential diagnosis of chest pain.",
    "ST elevation vs non-ST elevation. Get to know more about the here.",
];

pub const ANALYTICS: &[AnalyticsRow] = &[
    AnalyticsRow {
        user: "Student A",
        time_spent: "10 mins",
        cases_uploaded: 10,
        mcq_attempted: 2,
        most_questions_type: Difficulty::Easy,
    },
    AnalyticsRow {
        user: "Student B",
        time_spent: "20mins",
        cases_uploaded: 1,
        mcq_attempted: 5,
        most_questions_type: Difficulty::Hard,
    },
    AnalyticsRow {
        user: "Student C",
        time_spent: "50 mins",
        cases_uploaded: 12,
        mcq_attempted: 10,
        most_questions_type: Difficulty::Easy,
    },
    AnalyticsRow {
        user: "Student D",
        time_spent: "2 hours",
        cases_uploaded: 12,
        mcq_attempted: 20,
        most_questions_type: Difficulty::Hard,
    },
    AnalyticsRow {
        user: "Student E",
        time_spent: "10 mins",
        cases_uploaded: 4,
        mcq_attempted: 10,
        most_questions_type: Difficulty::Hard,
    },
];

/// Chats seeded into every new dashboard session, as `(id, name)`.
pub const SEED_CHATS: &[(u32, &str)] = &[
    (1, "Chat 01"),
    (2, "Chat 02 lorem"),
    (3, "Chat lorem 03"),
    (4, "Lorem Chat 04"),
    (5, "Chat 05 lorem"),
];

/// File extensions the upload surface suggests. Advisory only.
pub const SUGGESTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Document name shown in case breadcrumbs.
pub const CASE_SOURCE_NAME: &str = "cases.pdf";

/// Look up a case by title.
pub fn find_case(title: &str) -> Option<&'static CaseSummary> {
    CASES.iter().find(|c| c.title == title)
}
