//! Selectable, fuzzy-filterable list of repositories.
//!
//! Entries keep the order the listing delivered them in; the filter only hides
//! entries, it never re-ranks them. Selection is an index into the visible
//! (filtered) entries.

use crate::app::keys::{is_ctrl, plain_char};
use crate::app::modes::FilterState;
use crate::app::text_input::TextInput;
use crate::domain::RepositoryEntry;
use crossterm::event::{KeyCode, KeyEvent};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeSet;
use std::ops::Range;

/// Terminal rows taken by one list item (name, clone URL, spacing).
pub const ITEM_HEIGHT: usize = 3;

/// Rows of the browse screen not available to list items.
///
/// Header (title + count line + spacing) and footer (spacing + help line).
pub const CHROME_ROWS: usize = 5;

const QUERY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoList {
    entries: Vec<RepositoryEntry>,
    visible: Vec<usize>,
    selected: usize,
    filter: FilterState,
    query: TextInput,
    page_size: usize,
}

impl Default for RepoList {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            visible: Vec::new(),
            selected: 0,
            filter: FilterState::Unfiltered,
            query: TextInput::new("", QUERY_LIMIT),
            page_size: 1,
        }
    }
}

impl RepoList {
    /// Replaces all entries, clearing any filter and selecting the first entry.
    pub fn replace(&mut self, entries: Vec<RepositoryEntry>) {
        self.entries = entries;
        self.filter = FilterState::Unfiltered;
        self.query.clear();
        self.selected = 0;
        self.refilter();
    }

    /// Sets the page size used by PgUp/PgDn from the list's row budget.
    pub fn set_height(&mut self, rows: usize) {
        self.page_size = (rows.saturating_sub(CHROME_ROWS) / ITEM_HEIGHT).max(1);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries passing the filter.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Entries passing the filter, in listing order.
    pub fn visible(&self) -> impl Iterator<Item = &RepositoryEntry> {
        self.visible.iter().map(|&i| &self.entries[i])
    }

    /// Selected position among visible entries, `None` when nothing is visible.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.visible.len()).then_some(self.selected)
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&RepositoryEntry> {
        self.visible.get(self.selected).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub const fn filter_state(&self) -> FilterState {
        self.filter
    }

    #[must_use]
    pub const fn is_filtering(&self) -> bool {
        matches!(self.filter, FilterState::Filtering)
    }

    #[must_use]
    pub const fn query(&self) -> &TextInput {
        &self.query
    }

    /// Applies a list key. Returns whether the list changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.is_filtering() {
            self.handle_filter_key(key)
        } else {
            self.handle_navigation_key(key)
        }
    }

    fn handle_filter_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.filter = if self.query.value().trim().is_empty() {
                    self.query.clear();
                    FilterState::Unfiltered
                } else {
                    FilterState::Applied
                };
                self.refilter();
                true
            }
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Backspace if self.query.is_empty() => {
                self.filter = FilterState::Unfiltered;
                true
            }
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char(_) if is_ctrl(key, 'p') => self.move_up(),
            KeyCode::Char(_) if is_ctrl(key, 'n') => self.move_down(),
            _ => {
                if self.query.handle_key(key) {
                    self.selected = 0;
                    self.refilter();
                    true
                } else {
                    false
                }
            }
        }
    }

    fn handle_navigation_key(&mut self, key: &KeyEvent) -> bool {
        match (key.code, plain_char(key)) {
            (KeyCode::Up, _) | (_, Some('k')) => self.move_up(),
            (KeyCode::Down, _) | (_, Some('j')) => self.move_down(),
            (KeyCode::Char(_), None) if is_ctrl(key, 'p') => self.move_up(),
            (KeyCode::Char(_), None) if is_ctrl(key, 'n') => self.move_down(),
            (KeyCode::PageUp | KeyCode::Left, _) | (_, Some('h')) => self.page_up(),
            (KeyCode::PageDown | KeyCode::Right, _) | (_, Some('l')) => self.page_down(),
            (KeyCode::Home, _) | (_, Some('g')) => self.select(0),
            (KeyCode::End, _) | (_, Some('G')) => self.select(self.visible.len().saturating_sub(1)),
            (_, Some('/')) if !self.entries.is_empty() => {
                self.filter = FilterState::Filtering;
                true
            }
            (KeyCode::Esc, _) if self.filter == FilterState::Applied => self.clear_filter(),
            _ => false,
        }
    }

    fn clear_filter(&mut self) -> bool {
        self.filter = FilterState::Unfiltered;
        self.query.clear();
        self.refilter();
        true
    }

    fn move_up(&mut self) -> bool {
        if self.visible.is_empty() {
            return false;
        }
        self.selected = if self.selected == 0 {
            self.visible.len() - 1
        } else {
            self.selected - 1
        };
        true
    }

    fn move_down(&mut self) -> bool {
        if self.visible.is_empty() {
            return false;
        }
        self.selected = (self.selected + 1) % self.visible.len();
        true
    }

    fn page_up(&mut self) -> bool {
        self.select(self.selected.saturating_sub(self.page_size))
    }

    fn page_down(&mut self) -> bool {
        self.select(self.selected + self.page_size)
    }

    fn select(&mut self, index: usize) -> bool {
        if self.visible.is_empty() {
            return false;
        }
        let index = index.min(self.visible.len() - 1);
        let changed = index != self.selected;
        self.selected = index;
        changed
    }

    /// Whitespace-separated query tokens; every token must fuzzy-match a name.
    fn tokens(&self) -> Vec<String> {
        self.query.value().split_whitespace().map(String::from).collect()
    }

    fn refilter(&mut self) {
        let tokens = self.tokens();
        let _span = tracing::debug_span!(
            "refilter",
            total = self.entries.len(),
            tokens = tokens.len()
        )
        .entered();

        if tokens.is_empty() {
            self.visible = (0..self.entries.len()).collect();
        } else {
            let matcher = matcher();
            self.visible = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| {
                    tokens.iter().all(|t| matcher.fuzzy_match(&entry.name, t).is_some())
                })
                .map(|(i, _)| i)
                .collect();
        }

        self.selected = if self.visible.is_empty() {
            0
        } else {
            self.selected.min(self.visible.len() - 1)
        };

        tracing::debug!(visible = self.visible.len(), "filter applied");
    }

    /// Range of visible positions to draw when `capacity` items fit, centred on
    /// the selection where possible.
    #[must_use]
    pub fn window(&self, capacity: usize) -> Range<usize> {
        let len = self.visible.len();
        let mut start = self.selected.saturating_sub(capacity / 2);
        let end = (start + capacity).min(len);
        if end - start < capacity && len >= capacity {
            start = end.saturating_sub(capacity);
        }
        start..end
    }

    /// Character ranges of `name` matched by the filter query, coalesced.
    #[must_use]
    pub fn highlight_ranges(&self, name: &str) -> Vec<(usize, usize)> {
        let tokens = self.tokens();
        if tokens.is_empty() {
            return Vec::new();
        }

        let matcher = matcher();
        let indices: BTreeSet<usize> = tokens
            .iter()
            .filter_map(|t| matcher.fuzzy_indices(name, t))
            .flat_map(|(_, indices)| indices)
            .collect();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }
}

fn matcher() -> SkimMatcherV2 {
    SkimMatcherV2::default().ignore_case()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn list(names: &[&str]) -> RepoList {
        let mut list = RepoList::default();
        list.replace(
            names
                .iter()
                .map(|n| RepositoryEntry::new(*n, format!("https://github.com/u/{n}.git")))
                .collect(),
        );
        list
    }

    fn names(list: &RepoList) -> Vec<&str> {
        list.visible().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn replace_selects_first_entry() {
        let list = list(&["a", "b"]);
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(list.selected_entry().map(|e| e.name.as_str()), Some("a"));

        let empty = RepoList::default();
        assert_eq!(empty.selected_index(), None);
        assert!(empty.selected_entry().is_none());
    }

    #[test]
    fn vertical_navigation_wraps() {
        let mut list = list(&["a", "b", "c"]);
        list.handle_key(&key(KeyCode::Up));
        assert_eq!(list.selected_index(), Some(2));
        list.handle_key(&key(KeyCode::Char('j')));
        assert_eq!(list.selected_index(), Some(0));
        list.handle_key(&key(KeyCode::Char('k')));
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn paging_and_jumps_clamp() {
        let mut list = list(&["a", "b", "c", "d", "e", "f", "g"]);
        list.set_height(CHROME_ROWS + 2 * ITEM_HEIGHT);

        list.handle_key(&key(KeyCode::PageDown));
        assert_eq!(list.selected_index(), Some(2));
        list.handle_key(&key(KeyCode::Char('G')));
        assert_eq!(list.selected_index(), Some(6));
        assert!(!list.handle_key(&key(KeyCode::PageDown)));
        list.handle_key(&key(KeyCode::PageUp));
        assert_eq!(list.selected_index(), Some(4));
        list.handle_key(&key(KeyCode::Home));
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn filter_typing_hides_non_matches_in_order() {
        let mut list = list(&["ghcloner", "dotfiles", "go-cli", "website"]);
        list.handle_key(&key(KeyCode::Char('/')));
        assert!(list.is_filtering());

        for c in "gc".chars() {
            list.handle_key(&key(KeyCode::Char(c)));
        }
        assert_eq!(names(&list), ["ghcloner", "go-cli"]);

        list.handle_key(&key(KeyCode::Enter));
        assert_eq!(list.filter_state(), FilterState::Applied);

        // Navigation keys drive the list again once the filter is applied.
        list.handle_key(&key(KeyCode::Char('j')));
        assert_eq!(list.selected_entry().map(|e| e.name.as_str()), Some("go-cli"));

        list.handle_key(&key(KeyCode::Esc));
        assert_eq!(list.filter_state(), FilterState::Unfiltered);
        assert_eq!(list.visible_len(), 4);
    }

    #[test]
    fn esc_while_typing_clears_filter() {
        let mut list = list(&["alpha", "beta"]);
        list.handle_key(&key(KeyCode::Char('/')));
        list.handle_key(&key(KeyCode::Char('z')));
        assert_eq!(list.visible_len(), 0);
        assert_eq!(list.selected_index(), None);

        list.handle_key(&key(KeyCode::Esc));
        assert_eq!(list.visible_len(), 2);
        assert!(list.query().is_empty());
    }

    #[test]
    fn accepting_blank_filter_returns_to_unfiltered() {
        let mut list = list(&["alpha"]);
        list.handle_key(&key(KeyCode::Char('/')));
        list.handle_key(&key(KeyCode::Char(' ')));
        list.handle_key(&key(KeyCode::Enter));
        assert_eq!(list.filter_state(), FilterState::Unfiltered);
    }

    #[test]
    fn highlight_ranges_coalesce_adjacent_matches() {
        let mut list = list(&["ghcloner"]);
        list.handle_key(&key(KeyCode::Char('/')));
        for c in "ghc".chars() {
            list.handle_key(&key(KeyCode::Char(c)));
        }
        assert_eq!(list.highlight_ranges("ghcloner"), vec![(0, 3)]);
        assert!(RepoList::default().highlight_ranges("ghcloner").is_empty());
    }

    #[test]
    fn window_centres_on_selection() {
        let mut list = list(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        assert_eq!(list.window(4), 0..4);

        list.handle_key(&key(KeyCode::Char('G')));
        assert_eq!(list.window(4), 6..10);

        for _ in 0..4 {
            list.handle_key(&key(KeyCode::Up));
        }
        assert_eq!(list.window(4), 3..7);
        assert_eq!(list.window(20), 0..10);
    }
}
