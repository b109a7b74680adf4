use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, scrollable, text, text_input};
use cosmic::Element;

use crate::components::task_row::task_list;
use crate::core::filter::filter_tasks;
use crate::core::state::{SearchNotice, ViewState};
use crate::core::task::Task;
use crate::fl;
use crate::message::Message;

/// The single page: task form, search bar, messages, and the row list.
pub fn tasks_view<'a>(tasks: &'a [Task], view: &'a ViewState) -> Element<'a, Message> {
    let title_input = text_input::text_input(fl!("title-placeholder"), view.title_input.clone())
        .on_input(Message::TitleInputChanged)
        .on_submit(|_| Message::FormSubmit)
        .width(Length::Fill);

    let description_input =
        text_input::text_input(fl!("description-placeholder"), view.description_input.clone())
            .on_input(Message::DescriptionInputChanged)
            .on_submit(|_| Message::FormSubmit)
            .width(Length::Fill);

    let submit_label = if view.editing.is_some() {
        fl!("form-update")
    } else {
        fl!("form-add")
    };

    let form_row = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(title_input)
        .push(description_input)
        .push(button::suggested(submit_label).on_press(Message::FormSubmit));

    let search_input = text_input::text_input(fl!("search-placeholder"), view.search_input.clone())
        .on_input(Message::SearchInputChanged)
        .on_submit(|_| Message::SearchSubmit)
        .width(Length::Fill);

    let search_row = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(search_input)
        .push(
            button::icon(icon::from_name("system-search-symbolic"))
                .on_press(Message::SearchSubmit),
        );

    let mut content = column().spacing(8).push(form_row).push(search_row);

    // Validation error stays visible until a successful submit clears it
    if let Some(error) = view.error {
        content = content.push(text::body(error.to_string()));
    }

    if let Some(notice) = view.search_notice {
        let message = match notice {
            SearchNotice::EmptyQuery => fl!("search-empty-query"),
            SearchNotice::NoMatches => fl!("search-no-matches"),
        };
        content = content.push(text::body(message));
    }

    // The placeholder is keyed off the unfiltered store; a search with no
    // hits renders an empty list instead.
    if tasks.is_empty() {
        content = content.push(
            container(text::body(fl!("tasks-empty")))
                .padding(32)
                .center_x(Length::Fill),
        );
    } else {
        let filtered = filter_tasks(tasks, &view.search_query);
        content = content.push(task_list(filtered.into_iter(), view.expanded_task));
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
