use uuid::Uuid;

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::{Element, theme};

use crate::core::task::Task;
use crate::fl;
use crate::message::Message;

// Column widths for consistent alignment
const COL_CHECK: f32 = 28.0;
const COL_CONTROL: f32 = 40.0;

/// Overlay each character with a combining long stroke so a completed
/// title reads as struck through in a plain text run.
fn struck(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        out.push(c);
        out.push('\u{0336}');
    }
    out
}

// --- Fixed-width column helpers ---

fn col(width: f32, content: impl Into<Element<'static, Message>>) -> Element<'static, Message> {
    container(content).width(Length::Fixed(width)).into()
}

fn col_fill(content: impl Into<Element<'static, Message>>) -> Element<'static, Message> {
    container(content).width(Length::Fill).into()
}

/// Build the task rows, in store order. At most one row shows its detail
/// panel, keyed by `expanded_task`.
pub fn task_list<'a>(
    tasks: impl Iterator<Item = &'a Task>,
    expanded_task: Option<Uuid>,
) -> Element<'static, Message> {
    let mut content = column().spacing(4).width(Length::Fill);

    for task in tasks {
        content = content.push(task_row(task, expanded_task == Some(task.id)));
    }

    content.into()
}

fn task_row(task: &Task, expanded: bool) -> Element<'static, Message> {
    let id = task.id;

    // 1. Completion checkbox
    let check: Element<'static, Message> = col(
        COL_CHECK,
        checkbox("", task.completed).on_toggle(move |_| Message::ToggleTaskDone(id)),
    );

    // 2. Title (clickable to expand/collapse the detail panel)
    let title_label = if task.completed {
        struck(&task.title)
    } else {
        task.title.clone()
    };
    let title: Element<'static, Message> = col_fill(
        button::custom(text::body(title_label))
            .padding([0, 0])
            .class(theme::Button::Text)
            .on_press(Message::ToggleTaskExpand(id)),
    );

    // 3. Edit / delete / expand controls
    let edit: Element<'static, Message> = col(
        COL_CONTROL,
        button::icon(icon::from_name("document-edit-symbolic")).on_press(Message::EditTask(id)),
    );

    let delete: Element<'static, Message> = col(
        COL_CONTROL,
        button::icon(icon::from_name("edit-delete-symbolic")).on_press(Message::DeleteTask(id)),
    );

    let expand_icon = if expanded {
        "list-remove-symbolic"
    } else {
        "list-add-symbolic"
    };
    let expand: Element<'static, Message> = col(
        COL_CONTROL,
        button::icon(icon::from_name(expand_icon)).on_press(Message::ToggleTaskExpand(id)),
    );

    let data_row: Element<'static, Message> = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(check)
        .push(title)
        .push(edit)
        .push(delete)
        .push(expand)
        .width(Length::Fill)
        .into();

    // If this task is expanded, show the detail panel below the row
    if expanded {
        let description = if task.completed {
            struck(&task.description)
        } else {
            task.description.clone()
        };

        let detail = column()
            .spacing(4)
            .padding([4, 0, 4, 36])
            .push(text::body(description))
            .push(text::caption(fl!("task-updated", when = task.display_updated())));

        column()
            .push(data_row)
            .push(detail)
            .width(Length::Fill)
            .into()
    } else {
        data_row
    }
}
