use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum Message {
    // Task form
    TitleInputChanged(String),
    DescriptionInputChanged(String),
    FormSubmit,

    // Task CRUD
    EditTask(Uuid),
    DeleteTask(Uuid),
    ToggleTaskDone(Uuid),
    ToggleTaskExpand(Uuid),

    // Search
    SearchInputChanged(String),
    SearchSubmit,
}
