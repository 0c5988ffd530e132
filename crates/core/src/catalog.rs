//! Static keyword catalogue.
//!
//! Responsibilities:
//! - Define the closed set of keyword records and their categories.
//! - Provide grouped, per-category, and filtered read-only views.
//! - Hold the per-category display metadata (titles, glyphs, tint colours).
//!
//! Does NOT handle:
//! - Selection state (see `composer`).
//! - Rendering (see the TUI and CLI crates).
//!
//! Invariants:
//! - Record ids are unique.
//! - Catalogue order is the display order; grouping never reorders records
//!   inside a category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KeywordError;

/// Keyword category, used for grouping and display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Thinking,
    Tools,
    Search,
    Output,
    Reasoning,
}

/// How many records of a category the guided form lets the user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one record (the form offers a "None" choice).
    Single,
    /// Any number of records.
    Multiple,
}

/// Display metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    /// Section heading in list views.
    pub section_title: &'static str,
    /// Heading in the guided form.
    pub form_title: &'static str,
    /// One-line hint under the form heading.
    pub form_hint: &'static str,
    /// Single-cell glyph drawn in terminals.
    pub glyph: char,
    /// Tint colour as `(r, g, b)`.
    pub rgb: (u8, u8, u8),
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Thinking,
        Category::Tools,
        Category::Search,
        Category::Output,
        Category::Reasoning,
    ];

    /// Lower-case name, as used on the command line and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thinking => "thinking",
            Self::Tools => "tools",
            Self::Search => "search",
            Self::Output => "output",
            Self::Reasoning => "reasoning",
        }
    }

    pub fn meta(self) -> CategoryMeta {
        match self {
            Self::Thinking => CategoryMeta {
                section_title: "Thinking",
                form_title: "Thinking & Reasoning",
                form_hint: "Choose a thinking mode",
                glyph: '◆',
                rgb: (0xFF, 0x6B, 0x6B),
            },
            Self::Tools => CategoryMeta {
                section_title: "Tools",
                form_title: "Tool Usage",
                form_hint: "Control how Claude uses tools",
                glyph: '⚒',
                rgb: (0x4E, 0xCD, 0xC4),
            },
            Self::Search => CategoryMeta {
                section_title: "Search",
                form_title: "Search",
                form_hint: "Enable search capabilities",
                glyph: '⌕',
                rgb: (0x45, 0xB7, 0xD1),
            },
            Self::Output => CategoryMeta {
                section_title: "Output",
                form_title: "Output Control",
                form_hint: "Control response format and detail",
                glyph: '▤',
                rgb: (0x96, 0xCE, 0xB4),
            },
            Self::Reasoning => CategoryMeta {
                section_title: "Reasoning",
                form_title: "Reasoning Modes",
                form_hint: "Advanced reasoning approaches (multiple selections allowed)",
                glyph: '✱',
                rgb: (0xFF, 0xEA, 0xA7),
            },
        }
    }

    pub fn selection_mode(self) -> SelectionMode {
        match self {
            Self::Reasoning => SelectionMode::Multiple,
            _ => SelectionMode::Single,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| KeywordError::UnknownCategory(s.to_string()))
    }
}

/// A predefined instruction snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Literal text inserted into the composed prompt.
    pub keyword: &'static str,
    pub category: Category,
}

impl KeywordRecord {
    /// Label used by pickers: title padded to 25 columns, then the description.
    pub fn option_label(&self) -> String {
        format!("{:<25} - {}", self.title, self.description)
    }

    /// Case-insensitive match against title, description and keyword text.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [self.title, self.description, self.keyword]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

static CATALOGUE: [KeywordRecord; 12] = [
    KeywordRecord {
        id: "think-basic",
        title: "Think",
        description: "Basic thinking mode for standard reasoning",
        keyword: "think",
        category: Category::Thinking,
    },
    KeywordRecord {
        id: "think-hard",
        title: "Think Hard",
        description: "Enhanced thinking mode for complex problems",
        keyword: "think hard",
        category: Category::Thinking,
    },
    KeywordRecord {
        id: "think-ultra",
        title: "Ultrathink",
        description: "Maximum thinking mode for very complex analysis",
        keyword: "ultrathink",
        category: Category::Thinking,
    },
    KeywordRecord {
        id: "tool-parallel",
        title: "Parallel Tool Calls",
        description: "Enable parallel tool execution",
        keyword: "Use tools in parallel when possible to optimize performance.",
        category: Category::Tools,
    },
    KeywordRecord {
        id: "tool-web-search",
        title: "Web Search",
        description: "Enable web search capabilities",
        keyword: "Please search the web for current information on this topic.",
        category: Category::Search,
    },
    KeywordRecord {
        id: "tool-chain",
        title: "Tool Chaining",
        description: "Chain multiple tools together",
        keyword: "Chain multiple tools together as needed to complete this task thoroughly.",
        category: Category::Tools,
    },
    KeywordRecord {
        id: "output-concise",
        title: "Concise Output",
        description: "Request concise, direct responses",
        keyword: "Please be concise and direct in your response.",
        category: Category::Output,
    },
    KeywordRecord {
        id: "output-detailed",
        title: "Detailed Output",
        description: "Request detailed, comprehensive responses",
        keyword: "Please provide a detailed and comprehensive response.",
        category: Category::Output,
    },
    KeywordRecord {
        id: "output-code-only",
        title: "Code Only",
        description: "Return only code without explanations",
        keyword: "Return only the code without explanations or comments.",
        category: Category::Output,
    },
    KeywordRecord {
        id: "reason-step-by-step",
        title: "Step-by-Step Reasoning",
        description: "Break down complex problems step by step",
        keyword: "Please break this down step by step and show your reasoning.",
        category: Category::Reasoning,
    },
    KeywordRecord {
        id: "reason-multiple-approaches",
        title: "Multiple Approaches",
        description: "Consider multiple approaches to the problem",
        keyword: "Please consider multiple approaches and compare their trade-offs.",
        category: Category::Reasoning,
    },
    KeywordRecord {
        id: "reason-verify",
        title: "Verify Results",
        description: "Double-check and verify the results",
        keyword: "Please verify your results and double-check your work.",
        category: Category::Reasoning,
    },
];

/// The whole catalogue in display order.
pub fn all() -> &'static [KeywordRecord] {
    &CATALOGUE
}

/// Looks up a record by id.
pub fn find(id: &str) -> Option<&'static KeywordRecord> {
    CATALOGUE.iter().find(|k| k.id == id)
}

/// Looks up a record by id, failing for ids outside the catalogue.
pub fn require(id: &str) -> Result<&'static KeywordRecord, KeywordError> {
    find(id).ok_or_else(|| KeywordError::UnknownKeyword(id.to_string()))
}

/// Records of one category, in catalogue order.
pub fn in_category(category: Category) -> Vec<&'static KeywordRecord> {
    CATALOGUE.iter().filter(|k| k.category == category).collect()
}

/// Records grouped by category.
///
/// Groups appear in order of their first record in the catalogue.
pub fn grouped() -> Vec<(Category, Vec<&'static KeywordRecord>)> {
    group(CATALOGUE.iter())
}

/// Grouped view restricted to records matching `query`.
///
/// Groups without a match are omitted. A blank query matches everything.
pub fn filter(query: &str) -> Vec<(Category, Vec<&'static KeywordRecord>)> {
    group(CATALOGUE.iter().filter(|k| k.matches(query)))
}

fn group<'a>(
    records: impl Iterator<Item = &'a KeywordRecord>,
) -> Vec<(Category, Vec<&'a KeywordRecord>)> {
    let mut groups: Vec<(Category, Vec<&KeywordRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.category, vec![record])),
        }
    }
    groups
}
