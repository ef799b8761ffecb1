use iced::{
    font::Font,
    widget::{text::Shaping, Button, Column, Row, Text},
    Element,
};

use crate::dictionary::{
    self,
    entry::{Entry, Meaning},
};

use super::Message;

const SYNONYM_LIMIT: usize = 3;

/// Word detail, meanings, and source panels for a non-empty result list;
/// renders nothing when no lookup has succeeded yet.
pub fn results(entries: &[Entry], font: Font) -> Element<'_, Message> {
    let Some(first) = entries.first() else {
        return Column::new().into();
    };

    let mut column = Column::new().spacing(24).push(word_details(first, font));

    if let Some(entry) = dictionary::best_entry(entries) {
        column = column.push(meanings(entry, font));
    }

    if let Some(url) = first.source_urls.first() {
        column = column.push(source(url, font));
    }

    column.into()
}

pub fn loader(font: Font) -> Element<'static, Message> {
    Text::new("Loading...").size(20).font(font).into()
}

pub fn error_panel(font: Font) -> Element<'static, Message> {
    Column::new()
        .spacing(16)
        .push(Text::new("🥺").size(48).shaping(Shaping::Advanced))
        .push(Text::new("No Definitions Found").size(24).font(font))
        .push(
            Text::new(
                "Sorry pal, we couldn't find definitions for the word you were \
                 looking for. You can try the search again at later time or \
                 head to the web instead.",
            )
            .size(14)
            .font(font),
        )
        .into()
}

fn word_details(entry: &Entry, font: Font) -> Element<'_, Message> {
    let phonetic = entry
        .phonetic
        .as_deref()
        .map(|phonetic| Text::new(phonetic).size(20).shaping(Shaping::Advanced));

    Column::new()
        .spacing(4)
        .push(Text::new(&entry.word).size(48).font(font))
        .push_maybe(phonetic)
        .into()
}

fn meanings(entry: &Entry, font: Font) -> Element<'_, Message> {
    let mut column = Column::new().spacing(24);
    for meaning in &entry.meanings {
        column = column.push(meaning_block(meaning, font));
    }
    column.into()
}

fn meaning_block(meaning: &Meaning, font: Font) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(8)
        .push(Text::new(&meaning.part_of_speech).size(20).font(font))
        .push(Text::new("Meaning").size(14).font(font));

    for definition in &meaning.definitions {
        column = column.push(
            Text::new(&definition.definition)
                .size(16)
                .font(font)
                .shaping(Shaping::Advanced),
        );
    }

    let synonyms = if meaning.synonyms.is_empty() {
        None
    } else {
        let limit = meaning.synonyms.len().min(SYNONYM_LIMIT);
        Some(
            Row::new()
                .spacing(8)
                .push(Text::new("Synonyms:").size(14).font(font))
                .push(Text::new(meaning.synonyms[..limit].join(", ")).size(14).font(font)),
        )
    };

    column.push_maybe(synonyms).into()
}

fn source(url: &str, font: Font) -> Element<'_, Message> {
    Row::new()
        .spacing(8)
        .push(Text::new("Source:").size(14).font(font))
        .push(
            Button::new(Text::new(url).size(14).font(font))
                .padding(0)
                .on_press(Message::OpenSource(url.to_owned())),
        )
        .into()
}
