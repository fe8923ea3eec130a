use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, pick_list, row, scrollable, text, text_input},
};

use crate::{
    core::Intent,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{country_card, country_details, person_entry, section},
    },
    models::{Category, DraftField},
};

/// Cards per row in the results grid.
const CARDS_PER_ROW: usize = 2;

#[derive(Debug, Clone)]
pub struct ExplorerPageScreen;

impl Screen for ExplorerPageScreen {
    type Message = Intent;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let explorer = &state.explorer;

        let mut content = Column::new()
            .spacing(24)
            .padding(24)
            .push(header(explorer.dark_mode()))
            .push(counter(explorer.counter()))
            .push(search(&explorer.criteria().query, explorer.criteria().category))
            .push(results(state));

        if let Some(country) = explorer.selected_country() {
            content = content.push(country_details(country));
        }

        content = content.push(person_form(state));
        if !explorer.persons().is_empty() {
            content = content.push(person_list(state));
        }

        let page: Element<'a, Intent> = scrollable(content).height(Length::Fill).into();
        page.map(ScreenMessage::ScreenMessage)
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        state.explorer.handle(message);
        Task::none()
    }
}

fn header<'a>(dark_mode: bool) -> Element<'a, Intent> {
    row![
        container(text("Country Explorer").size(32)).width(Length::Fill),
        button(if dark_mode { "Light Mode" } else { "Dark Mode" }).on_press(Intent::ToggleDarkMode),
    ]
    .align_y(Center)
    .into()
}

fn counter<'a>(value: i64) -> Element<'a, Intent> {
    section(
        "Counter",
        column![
            text("Use the buttons below to increment or decrement the counter"),
            row![
                button("-").on_press(Intent::DecrementCounter),
                text(value.to_string()).size(24),
                button("+").on_press(Intent::IncrementCounter),
            ]
            .spacing(24)
            .align_y(Center),
        ]
        .spacing(12)
        .align_x(Center),
    )
}

fn search<'a>(query: &'a str, category: Category) -> Element<'a, Intent> {
    section(
        "Search Countries",
        row![
            column![
                text("Search by Name"),
                text_input("Enter country name...", query).on_input(Intent::SetQuery),
            ]
            .spacing(8)
            .width(Length::Fill),
            column![
                text("Filter by Continent"),
                pick_list(Category::ALL, Some(category), Intent::SelectCategory),
            ]
            .spacing(8)
            .width(Length::Fill),
        ]
        .spacing(24),
    )
}

fn results<'a>(state: &'a AppState) -> Element<'a, Intent> {
    let page = state.explorer.page();

    let mut grid = Column::new().spacing(16);
    for chunk in page.shown.chunks(CARDS_PER_ROW) {
        let cards = chunk.iter().map(|country| -> Element<'a, Intent> {
            container(country_card(*country))
                .width(Length::FillPortion(1))
                .into()
        });
        grid = grid.push(iced::widget::Row::with_children(cards).spacing(16));
    }

    let mut body = column![text(page.heading()).size(22), grid].spacing(16);
    if let Some(notice) = page.overflow_notice() {
        body = body.push(container(text(notice)).center_x(Length::Fill));
    }
    if page.is_empty() {
        body = body.push(
            container(text("No countries found matching your criteria.").size(20))
                .center_x(Length::Fill)
                .padding(32),
        );
    }
    body.into()
}

fn person_form<'a>(state: &'a AppState) -> Element<'a, Intent> {
    let draft = state.explorer.draft();
    let selected = (!draft.country_name.is_empty()).then(|| draft.country_name.clone());

    let input = move |label: &'a str, placeholder: &'a str, field: DraftField| {
        column![
            text(label),
            text_input(placeholder, draft.get(field))
                .on_input(move |value| Intent::EditDraft(field, value))
                .on_submit(Intent::SubmitDraft),
        ]
        .spacing(8)
        .width(Length::Fill)
    };

    section(
        "Add Person Details",
        column![
            row![
                input("Full Name *", "Enter full name", DraftField::FullName),
                input("Email *", "Enter email address", DraftField::Email),
            ]
            .spacing(24),
            row![
                input("Phone Number", "Enter phone number", DraftField::Phone),
                input("City", "Enter city", DraftField::City),
            ]
            .spacing(24),
            column![
                text("Country *"),
                pick_list(state.explorer.country_names(), selected, |name| {
                    Intent::EditDraft(DraftField::Country, name)
                })
                .placeholder("Select country"),
            ]
            .spacing(8),
            button(text("Add Person"))
                .on_press(Intent::SubmitDraft)
                .width(Length::Fill),
        ]
        .spacing(16),
    )
}

fn person_list<'a>(state: &'a AppState) -> Element<'a, Intent> {
    let persons = state.explorer.persons();
    let entries = persons.iter().map(person_entry);
    section(
        format!("Added Persons ({})", persons.len()),
        Column::with_children(entries).spacing(12),
    )
}
