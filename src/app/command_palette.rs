use super::action::Action;
use crate::domain::mode::DashboardMode;
use serde::{Deserialize, Serialize};

/// Number of entries shown before the user types anything.
pub const DEFAULT_RESULT_LIMIT: usize = 8;
/// Upper bound on search matches.
pub const SEARCH_RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandGroup {
    #[default]
    Navigation,
    Create,
    Action,
    Search,
}

impl CommandGroup {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CommandGroup::Navigation => "Navigation",
            CommandGroup::Create => "Create",
            CommandGroup::Action => "Actions",
            CommandGroup::Search => "Search",
        }
    }

    /// Lowercase tag the filter matches against.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            CommandGroup::Navigation => "navigation",
            CommandGroup::Create => "create",
            CommandGroup::Action => "action",
            CommandGroup::Search => "search",
        }
    }
}

/// What running a command does. Exactly one per entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandAction {
    NavigateTo(String),
    Invoke(Action),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    pub id: String,
    pub group: CommandGroup,
    pub label: String,
    pub description: Option<String>,
    pub shortcut: Option<String>,
    pub action: CommandAction,
}

impl CommandEntry {
    pub fn navigate(
        id: impl Into<String>,
        group: CommandGroup,
        label: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group,
            label: label.into(),
            description: None,
            shortcut: None,
            action: CommandAction::NavigateTo(path.into()),
        }
    }

    pub fn invoke(
        id: impl Into<String>,
        group: CommandGroup,
        label: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            id: id.into(),
            group,
            label: label.into(),
            description: None,
            shortcut: None,
            action: CommandAction::Invoke(action),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// `query_lower` must already be lowercased.
    fn matches(&self, query_lower: &str) -> bool {
        self.label.to_lowercase().contains(query_lower)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(query_lower))
            || self.group.key().contains(query_lower)
    }
}

/// Immutable set of commands offered by the palette. Ids are unique; rebuild
/// the registry to change it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Later entries replace earlier ones with the same id, keeping the
    /// earlier position.
    #[must_use]
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        let mut merged: Vec<CommandEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(existing) = merged.iter_mut().find(|e| e.id == entry.id) {
                *existing = entry;
            } else {
                merged.push(entry);
            }
        }
        Self { entries: merged }
    }

    /// Built-in commands followed by `custom`.
    #[must_use]
    pub fn with_custom(custom: Vec<CommandEntry>) -> Self {
        let mut entries = default_commands();
        entries.extend(custom);
        Self::new(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registry indices matching `query`, in registry order.
    ///
    /// A blank query browses the first [`DEFAULT_RESULT_LIMIT`] entries.
    /// Otherwise an entry matches when the query is a case-insensitive
    /// substring of its label, description or group, capped at
    /// [`SEARCH_RESULT_LIMIT`].
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..self.entries.len().min(DEFAULT_RESULT_LIMIT)).collect();
        }

        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.matches(&query_lower))
            .map(|(i, _)| i)
            .take(SEARCH_RESULT_LIMIT)
            .collect()
    }

    /// Partition `matches` by group, first-seen group first, keeping the
    /// relative order of members.
    #[must_use]
    pub fn group(&self, matches: &[usize]) -> Vec<(CommandGroup, Vec<usize>)> {
        let mut groups: Vec<(CommandGroup, Vec<usize>)> = Vec::new();
        for &idx in matches {
            let Some(entry) = self.entries.get(idx) else {
                continue;
            };
            match groups.iter_mut().find(|(g, _)| *g == entry.group) {
                Some((_, members)) => members.push(idx),
                None => groups.push((entry.group, vec![idx])),
            }
        }
        groups
    }

    /// Filtered results flattened in display order: groups in order, then
    /// members. This is the index space of the palette cursor.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<usize> {
        self.group(&self.filter(query))
            .into_iter()
            .flat_map(|(_, members)| members)
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_custom(Vec::new())
    }
}

#[must_use]
pub fn default_commands() -> Vec<CommandEntry> {
    use CommandGroup::{Action as Act, Create, Navigation, Search};

    vec![
        // Navigation
        CommandEntry::navigate("nav-dashboard", Navigation, "Go to Dashboard", "/dashboard")
            .with_shortcut("G D"),
        CommandEntry::navigate("nav-campaign", Navigation, "Go to Campaign", "/campaign")
            .with_shortcut("G C"),
        CommandEntry::navigate("nav-academy", Navigation, "Go to Academy", "/academy")
            .with_shortcut("G A"),
        CommandEntry::navigate("nav-settings", Navigation, "Go to Settings", "/settings")
            .with_shortcut("G S"),
        // Create
        CommandEntry::invoke(
            "create-session",
            Create,
            "New Session",
            Action::Notify("Session draft created".to_string()),
        )
        .with_description("Create a session")
        .with_shortcut("N S"),
        CommandEntry::invoke(
            "create-npc",
            Create,
            "New NPC",
            Action::Notify("NPC draft created".to_string()),
        )
        .with_description("Add a character to your world")
        .with_shortcut("N N"),
        CommandEntry::invoke(
            "create-location",
            Create,
            "New Location",
            Action::Notify("Location draft created".to_string()),
        )
        .with_description("Map a new place")
        .with_shortcut("N L"),
        CommandEntry::invoke(
            "create-encounter",
            Create,
            "New Encounter",
            Action::Notify("Encounter draft created".to_string()),
        )
        .with_description("Build a combat or social encounter")
        .with_shortcut("N E"),
        // Actions
        CommandEntry::invoke(
            "action-prep",
            Act,
            "Enter Prep Mode",
            Action::SetDashboardMode(DashboardMode::Prep),
        )
        .with_description("Focus on session preparation"),
        CommandEntry::invoke(
            "action-training",
            Act,
            "Start Training",
            Action::SetDashboardMode(DashboardMode::Training),
        )
        .with_description("Continue your training journey"),
        CommandEntry::invoke(
            "action-quick-npc",
            Act,
            "Quick NPC Generator",
            Action::Notify("Rolled a random NPC".to_string()),
        )
        .with_description("Generate a random NPC"),
        CommandEntry::invoke(
            "action-cycle-mode",
            Act,
            "Cycle Dashboard Mode",
            Action::CycleDashboardMode,
        )
        .with_description("Switch to the next layout")
        .with_shortcut("Tab"),
        CommandEntry::invoke("action-help", Act, "Show Help", Action::ToggleHelp)
            .with_description("List keyboard shortcuts")
            .with_shortcut("?"),
        CommandEntry::invoke("action-quit", Act, "Quit", Action::Quit)
            .with_description("Leave the dashboard")
            .with_shortcut("Ctrl+C"),
        // Search
        CommandEntry::navigate("search-world", Search, "Search World", "/app/world")
            .with_description("Find NPCs, locations and lore"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(registry: &CommandRegistry, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| registry.entries()[i].label.clone())
            .collect()
    }

    #[test]
    fn test_blank_query_browses_defaults() {
        let registry = CommandRegistry::default();
        let results = registry.filter("");
        assert_eq!(results, (0..DEFAULT_RESULT_LIMIT).collect::<Vec<_>>());
        assert_eq!(registry.filter("   "), results);
    }

    #[test]
    fn test_substring_match_on_label_and_description() {
        let registry = CommandRegistry::default();
        let results = labels(&registry, &registry.filter("sess"));
        assert!(results.contains(&"New Session".to_string()));
        // "Focus on session preparation"
        assert!(results.contains(&"Enter Prep Mode".to_string()));

        assert!(registry.filter("zzz").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let registry = CommandRegistry::default();
        assert_eq!(registry.filter("NEW NPC"), registry.filter("new npc"));
        assert_eq!(labels(&registry, &registry.filter("NEW NPC")), vec!["New NPC"]);
    }

    #[test]
    fn test_group_tag_matches() {
        let registry = CommandRegistry::default();
        let results = labels(&registry, &registry.filter("create"));
        assert_eq!(
            results,
            vec!["New Session", "New NPC", "New Location", "New Encounter"]
        );
    }

    #[test]
    fn test_search_is_capped() {
        let registry = CommandRegistry::default();
        // Well over ten defaults contain an "e".
        assert_eq!(registry.filter("e").len(), SEARCH_RESULT_LIMIT);
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let registry = CommandRegistry::new(vec![
            CommandEntry::navigate("a", CommandGroup::Navigation, "Alpha", "/a"),
            CommandEntry::invoke("b", CommandGroup::Action, "Beta", Action::Quit),
            CommandEntry::navigate("c", CommandGroup::Navigation, "Gamma", "/c"),
        ]);
        let groups = registry.group(&[0, 1, 2]);
        assert_eq!(
            groups,
            vec![
                (CommandGroup::Navigation, vec![0, 2]),
                (CommandGroup::Action, vec![1]),
            ]
        );
        assert_eq!(registry.search("a"), vec![0, 2, 1]);
    }

    #[test]
    fn test_custom_commands_merge() {
        let registry = CommandRegistry::with_custom(vec![
            CommandEntry::navigate("nav-campaign", CommandGroup::Navigation, "Open Campaign", "/app/campaign"),
            CommandEntry::navigate("nav-library", CommandGroup::Navigation, "Go to Library", "/app/library"),
        ]);
        assert_eq!(registry.len(), default_commands().len() + 1);
        assert_eq!(registry.entries()[1].label, "Open Campaign");
        assert_eq!(
            registry.entries().last().map(|e| e.id.as_str()),
            Some("nav-library")
        );
    }

    #[test]
    fn test_default_ids_are_unique() {
        let commands = default_commands();
        let mut ids: Vec<_> = commands.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), commands.len());
    }
}
