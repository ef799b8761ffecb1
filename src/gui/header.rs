use iced::{
    font::Font,
    widget::{Button, PickList, Row, Text, TextInput, Toggler},
    Alignment, Element, Length,
};

use super::{FontChoice, Message};

pub fn header(choice: FontChoice, dark: bool) -> Element<'static, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(16)
        .push(Text::new("Wordbook").size(24).width(Length::Fill))
        .push(PickList::new(
            FontChoice::ALL,
            Some(choice),
            Message::FontPicked,
        ))
        .push(Toggler::new(dark).label("Dark").on_toggle(Message::ModeToggled))
        .into()
}

pub fn search_box(query: &str, font: Font) -> Element<'_, Message> {
    Row::new()
        .spacing(8)
        .push(
            TextInput::new("Search for any word...", query)
                .on_input(Message::QueryChanged)
                .on_submit(Message::Submitted)
                .padding(10)
                .size(20)
                .font(font),
        )
        .push(Button::new(Text::new("Search")).on_press(Message::Submitted))
        .into()
}
