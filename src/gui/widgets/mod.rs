use iced::{
    Alignment::Center,
    Element, Length, Theme, border,
    widget::{button, column, container, container::Style, mouse_area, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{Intent, format},
    models::{Country, Person},
};

fn card_style(theme: &Theme) -> Style {
    bordered_box(theme).border(border::rounded(8).width(1))
}

/// A titled, bordered block of the page.
pub fn section<'a, Message: 'a>(
    title: impl Into<String>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(column![text(title.into()).size(24), content.into()].spacing(16))
        .style(card_style)
        .padding(24)
        .width(Length::Fill)
        .into()
}

fn labelled<'a>(label: &'a str, value: impl Into<String>) -> Element<'a, Intent> {
    row![text(label), text(value.into())].spacing(8).into()
}

/// Summary card of a country; clicking it opens the detail view.
pub fn country_card(country: &Country) -> Element<'_, Intent> {
    let card = container(
        column![
            text(country.common_name()).size(20),
            labelled("Capital:", format::capital(country)),
            labelled("Currency:", format::currency_code(country.currencies.as_ref())),
            labelled("Continent:", country.region.as_str()),
            labelled("Languages:", format::languages_short(country.languages.as_ref())),
        ]
        .spacing(6),
    )
    .style(card_style)
    .padding(16)
    .width(Length::Fill);

    mouse_area(card)
        .on_press(Intent::OpenDetails(country.code().to_string()))
        .into()
}

fn stat(label: &str, value: String) -> Element<'_, Intent> {
    container(column![text(label), text(value).size(22)].spacing(6))
        .style(card_style)
        .padding(16)
        .width(Length::FillPortion(1))
        .into()
}

pub fn country_details(country: &Country) -> Element<'_, Intent> {
    let title = row![
        container(text(country.common_name()).size(28)).width(Length::Fill),
        button("Close").on_press(Intent::CloseDetails),
    ]
    .align_y(Center);

    section(
        "Country Details",
        column![
            title,
            labelled("Flag:", country.flag_url()),
            labelled("Official Name:", country.official_name()),
            labelled("Capital:", format::capital(country)),
            labelled("Region:", format::region_line(country)),
            row![
                stat("Population", format::population(country.population)),
                stat("Area", format::area(country.area)),
            ]
            .spacing(16),
            row![
                stat("Currencies", format::currency_detail(country.currencies.as_ref())),
                stat("Languages", format::languages_full(country.languages.as_ref())),
            ]
            .spacing(16),
        ]
        .spacing(12),
    )
}

pub fn person_entry(person: &Person) -> Element<'_, Intent> {
    let mut details = row![
        text(format!("Email: {}", person.email)),
        text(format!("Country: {}", person.country_name)),
    ]
    .spacing(16);
    if let Some(phone) = &person.phone {
        details = details.push(text(format!("Phone: {phone}")));
    }
    if let Some(city) = &person.city {
        details = details.push(text(format!("City: {city}")));
    }

    container(
        row![
            container(column![text(person.full_name.as_str()).size(20), details].spacing(6))
                .width(Length::Fill),
            button("Delete").on_press(Intent::RemovePerson(person.id)),
        ]
        .align_y(Center),
    )
    .style(card_style)
    .padding(16)
    .width(Length::Fill)
    .into()
}
