use cosmic::app::{Core, Task as CosmicTask};
use cosmic::widget::text;
use cosmic::{Application, Element, executor};

use crate::config::TaskpadConfig;
use crate::core::filter;
use crate::core::seed;
use crate::core::state::ViewState;
use crate::core::store::TaskStore;
use crate::core::task::TaskDraft;
use crate::message::Message;
use crate::pages;

pub struct Taskpad {
    core: Core,
    store: TaskStore,
    view: ViewState,
}

pub struct Flags {
    pub config: TaskpadConfig,
    pub initial_search: Option<String>,
}

impl Application for Taskpad {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.taskpad.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;

        if let Err(e) = config.ensure_files() {
            log::error!("Failed to create data directory: {}", e);
        }

        // One explicit seed read before the first render; a failed read is
        // an operator problem, the session just starts empty.
        let store = match seed::load(&config.tasks_path()) {
            Ok(tasks) => {
                log::info!(
                    "Seeded {} tasks from {}",
                    tasks.len(),
                    config.tasks_path().display()
                );
                TaskStore::from_tasks(tasks)
            }
            Err(e) => {
                log::error!("Failed to load seed document: {}", e);
                TaskStore::default()
            }
        };

        let mut view = ViewState::default();
        if let Some(query) = flags.initial_search {
            view.search_input = query.clone();
            view.search_query = query;
        }

        (Self { core, store, view }, CosmicTask::none())
    }

    fn header_center(&self) -> Vec<Element<'_, Message>> {
        vec![text::title4(crate::fl!("app-title")).into()]
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::TitleInputChanged(value) => {
                self.view.title_input = value;
            }

            Message::DescriptionInputChanged(value) => {
                self.view.description_input = value;
            }

            Message::FormSubmit => {
                match TaskDraft::parse(&self.view.title_input, &self.view.description_input) {
                    Ok(draft) => {
                        match self.view.editing {
                            Some(id) => {
                                // The edit target can be deleted out from
                                // under a pending edit; the form resets
                                // either way.
                                if !self.store.update(id, draft) {
                                    log::warn!("Edited task {} no longer exists", id);
                                }
                            }
                            None => {
                                self.store.add(draft);
                            }
                        }
                        self.view.reset_after_submit();
                    }
                    Err(e) => {
                        self.view.error = Some(e);
                    }
                }
            }

            Message::EditTask(id) => {
                if let Some(task) = self.store.get(id) {
                    self.view.start_edit(task);
                }
            }

            Message::DeleteTask(id) => {
                self.store.remove(id);
            }

            Message::ToggleTaskDone(id) => {
                self.store.toggle_done(id);
            }

            Message::ToggleTaskExpand(id) => {
                self.view.toggle_expanded(id);
            }

            Message::SearchInputChanged(value) => {
                self.view.search_input_changed(value);
            }

            Message::SearchSubmit => {
                let query = self.view.search_input.trim();
                let has_matches = !filter::filter_tasks(self.store.tasks(), query).is_empty();
                self.view.commit_search(has_matches);
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        pages::tasks::tasks_view(self.store.tasks(), &self.view)
    }
}
