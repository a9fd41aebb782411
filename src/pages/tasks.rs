use cosmic::iced::{Alignment, Length};
use cosmic::widget::{
    button, checkbox, column, container, icon, row, scrollable, text, text_input,
};
use cosmic::Element;

use crate::core::task::Task;
use crate::core::task_list::{Filter, TaskList, VisibleRow};
use crate::fl;
use crate::message::Message;

fn filter_label(filter: Filter) -> String {
    match filter {
        Filter::All => fl!("filter-all"),
        Filter::Unfinished => fl!("filter-unfinished"),
        Filter::Finished => fl!("filter-finished"),
    }
}

fn task_row(row_pos: VisibleRow, task: &Task) -> Element<'static, Message> {
    let check = checkbox("", task.completed).on_toggle(move |_| Message::ToggleCompleted(row_pos));

    // Finished tasks keep their text but recede visually.
    let title: Element<'static, Message> = if task.completed {
        text::caption(task.text.clone()).into()
    } else {
        text::body(task.text.clone()).into()
    };

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(check)
        .push(container(title).width(Length::Fill))
        .push(
            button::icon(icon::from_name("document-edit-symbolic"))
                .on_press(Message::BeginEdit(row_pos)),
        )
        .push(button::icon(icon::from_name("go-up-symbolic")).on_press(Message::MoveUp(row_pos)))
        .push(
            button::icon(icon::from_name("go-down-symbolic")).on_press(Message::MoveDown(row_pos)),
        )
        .push(
            button::icon(icon::from_name("edit-delete-symbolic"))
                .on_press(Message::RequestDelete(row_pos)),
        )
        .into()
}

pub fn tasks_view(list: &TaskList) -> Element<'static, Message> {
    let mut content = column().spacing(12);

    // Draft input; the submit icon flips while a task is being rewritten.
    let input = text_input::text_input(fl!("draft-placeholder"), list.draft().to_string())
        .on_input(Message::DraftChanged)
        .on_submit(|_| Message::DraftSubmit)
        .width(Length::Fill);

    let submit_icon = if list.is_editing() {
        "document-edit-symbolic"
    } else {
        "list-add-symbolic"
    };

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(input)
            .push(button::icon(icon::from_name(submit_icon)).on_press(Message::DraftSubmit)),
    );

    let mut filters = row().spacing(4);
    for filter in Filter::ALL {
        let btn = if list.filter() == *filter {
            button::suggested(filter_label(*filter))
        } else {
            button::standard(filter_label(*filter))
        }
        .on_press(Message::SetFilter(*filter));
        filters = filters.push(btn);
    }
    content = content.push(filters);

    let mut shown = 0;
    let mut items = column().spacing(4);
    for (idx, task) in list.visible().enumerate() {
        items = items.push(task_row(VisibleRow(idx), task));
        shown += 1;
    }

    if shown == 0 {
        content = content.push(
            container(text::body(fl!("tasks-empty")))
                .padding(32)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    } else {
        content = content.push(items);
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
