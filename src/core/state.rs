use uuid::Uuid;

use super::task::{DraftError, Task};

/// User-facing notice set by the explicit search action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNotice {
    EmptyQuery,
    NoMatches,
}

/// Every transient piece of UI state in one place: form drafts, the edit
/// target, raw and committed search text, messages, and the single
/// expanded row. Mutated only by the transition methods below.
#[derive(Debug, Default, Clone)]
pub struct ViewState {
    pub title_input: String,
    pub description_input: String,
    pub editing: Option<Uuid>,
    pub search_input: String,
    pub search_query: String,
    pub error: Option<DraftError>,
    pub search_notice: Option<SearchNotice>,
    pub expanded_task: Option<Uuid>,
}

impl ViewState {
    /// Enter edit mode for a task, copying its current text into the drafts.
    /// Only a successful submit leaves edit mode again.
    pub fn start_edit(&mut self, task: &Task) {
        self.editing = Some(task.id);
        self.title_input = task.title.clone();
        self.description_input = task.description.clone();
    }

    /// After a successful add/update everything resets except the expanded
    /// row.
    pub fn reset_after_submit(&mut self) {
        self.title_input.clear();
        self.description_input.clear();
        self.editing = None;
        self.search_input.clear();
        self.search_query.clear();
        self.error = None;
        self.search_notice = None;
    }

    /// At most one row is expanded: toggling it collapses it, toggling
    /// another row moves the expansion there.
    pub fn toggle_expanded(&mut self, id: Uuid) {
        if self.expanded_task == Some(id) {
            self.expanded_task = None;
        } else {
            self.expanded_task = Some(id);
        }
    }

    /// Live keystroke in the search box: the committed query only changes
    /// when the box empties out.
    pub fn search_input_changed(&mut self, value: String) {
        self.search_notice = None;
        if value.is_empty() {
            self.search_query.clear();
        }
        self.search_input = value;
    }

    /// Explicit search action. An empty box clears the committed query and
    /// asks for input; otherwise the trimmed text becomes the query and the
    /// no-matches notice reflects the actual result count.
    pub fn commit_search(&mut self, has_matches: bool) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            self.search_query.clear();
            self.search_notice = Some(SearchNotice::EmptyQuery);
        } else {
            self.search_query = query;
            self.search_notice = (!has_matches).then_some(SearchNotice::NoMatches);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskDraft;

    fn task(title: &str, description: &str) -> Task {
        Task::new(TaskDraft::parse(title, description).unwrap())
    }

    #[test]
    fn toggling_same_row_collapses_it() {
        let mut view = ViewState::default();
        let id = Uuid::new_v4();
        view.toggle_expanded(id);
        assert_eq!(view.expanded_task, Some(id));
        view.toggle_expanded(id);
        assert_eq!(view.expanded_task, None);
    }

    #[test]
    fn toggling_another_row_moves_the_expansion() {
        let mut view = ViewState::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        view.toggle_expanded(a);
        view.toggle_expanded(b);
        assert_eq!(view.expanded_task, Some(b));
    }

    #[test]
    fn start_edit_copies_the_task_text() {
        let mut view = ViewState::default();
        let t = task("Buy milk", "Two liters");
        view.start_edit(&t);
        assert_eq!(view.editing, Some(t.id));
        assert_eq!(view.title_input, "Buy milk");
        assert_eq!(view.description_input, "Two liters");
    }

    #[test]
    fn reset_clears_everything_but_the_expanded_row() {
        let mut view = ViewState::default();
        let t = task("Buy milk", "Two liters");
        let expanded = Uuid::new_v4();
        view.start_edit(&t);
        view.search_input = "milk".into();
        view.search_query = "milk".into();
        view.error = Some(DraftError::Empty);
        view.search_notice = Some(SearchNotice::NoMatches);
        view.expanded_task = Some(expanded);

        view.reset_after_submit();

        assert!(view.title_input.is_empty());
        assert!(view.description_input.is_empty());
        assert_eq!(view.editing, None);
        assert!(view.search_input.is_empty());
        assert!(view.search_query.is_empty());
        assert_eq!(view.error, None);
        assert_eq!(view.search_notice, None);
        assert_eq!(view.expanded_task, Some(expanded));
    }

    #[test]
    fn typing_clears_the_notice_and_emptying_clears_the_query() {
        let mut view = ViewState::default();
        view.search_query = "milk".into();
        view.search_notice = Some(SearchNotice::NoMatches);

        view.search_input_changed("m".into());
        assert_eq!(view.search_notice, None);
        assert_eq!(view.search_query, "milk");

        view.search_input_changed(String::new());
        assert!(view.search_query.is_empty());
    }

    #[test]
    fn committing_an_empty_box_clears_the_query_and_prompts() {
        let mut view = ViewState::default();
        view.search_query = "milk".into();
        view.search_input = "   ".into();
        view.commit_search(true);
        assert!(view.search_query.is_empty());
        assert_eq!(view.search_notice, Some(SearchNotice::EmptyQuery));
    }

    // The no-matches notice tracks the real result count, never firing on
    // a search that does have hits.
    #[test]
    fn commit_search_notices_only_real_misses() {
        let mut view = ViewState::default();

        view.search_input = " milk ".into();
        view.commit_search(true);
        assert_eq!(view.search_query, "milk");
        assert_eq!(view.search_notice, None);

        view.search_input = "zzz".into();
        view.commit_search(false);
        assert_eq!(view.search_query, "zzz");
        assert_eq!(view.search_notice, Some(SearchNotice::NoMatches));
    }
}
