use core::fmt;

use iced::{
    alignment::Horizontal,
    font::{self, Font},
    widget::{Column, Container, Scrollable, Text},
    Element, Length, Task, Theme,
};

use crate::dictionary::{self, entry::Entry};

mod header;
mod output;

const MAX_CONTENT_WIDTH: f32 = 600.0;

pub fn run() -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .run()
}

pub struct App {
    client: reqwest::Client,
    query: String,
    entries: Vec<Entry>,
    error: Option<String>,
    // Monotonic submission counter; only the completion carrying the
    // latest value is allowed to touch state.
    seq: u64,
    in_flight: Option<u64>,
    dark: bool,
    font: FontChoice,
    empty_prompt: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submitted,
    LookupFinished {
        seq: u64,
        result: Result<Vec<Entry>, String>,
    },
    FontPicked(FontChoice),
    ModeToggled(bool),
    OpenSource(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    SansSerif,
    Serif,
    Mono,
}

impl FontChoice {
    pub const ALL: [FontChoice; 3] = [FontChoice::SansSerif, FontChoice::Serif, FontChoice::Mono];

    pub fn font(self) -> Font {
        match self {
            FontChoice::SansSerif => Font::DEFAULT,
            FontChoice::Serif => Font {
                family: font::Family::Serif,
                ..Font::DEFAULT
            },
            FontChoice::Mono => Font::MONOSPACE,
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FontChoice::SansSerif => write!(f, "Sans Serif"),
            FontChoice::Serif => write!(f, "Serif"),
            FontChoice::Mono => write!(f, "Mono"),
        }
    }
}

impl App {
    fn title(&self) -> String {
        String::from("Wordbook")
    }

    fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(value) => {
                self.query = value;
                self.empty_prompt = false;
                Task::none()
            }
            Message::Submitted => {
                if self.query.trim().is_empty() {
                    self.empty_prompt = true;
                    return Task::none();
                }

                self.empty_prompt = false;
                self.error = None;
                self.seq += 1;
                let seq = self.seq;
                self.in_flight = Some(seq);

                let word = std::mem::take(&mut self.query);
                let client = self.client.clone();
                Task::perform(dictionary::lookup(client, word), move |result| {
                    Message::LookupFinished {
                        seq,
                        result: result.map_err(|e| e.to_string()),
                    }
                })
            }
            Message::LookupFinished { seq, result } => {
                if self.in_flight != Some(seq) {
                    // superseded by a newer submission
                    return Task::none();
                }
                self.in_flight = None;

                match result {
                    Ok(entries) => {
                        self.entries = entries;
                        self.error = None;
                    }
                    Err(message) => {
                        tracing::warn!("lookup failed: {message}");
                        self.error = Some(message);
                    }
                }
                Task::none()
            }
            Message::FontPicked(choice) => {
                self.font = choice;
                Task::none()
            }
            Message::ModeToggled(dark) => {
                self.dark = dark;
                Task::none()
            }
            Message::OpenSource(url) => {
                if let Err(e) = webbrowser::open(&url) {
                    tracing::warn!("could not open source url: {e}");
                }
                Task::none()
            }
        }
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let font = self.font.font();

        let prompt = if self.empty_prompt {
            Some(Text::new("Search cannot be empty").size(14).font(font))
        } else {
            None
        };

        let body: Element<'_, Message> = if self.loading() {
            output::loader(font)
        } else if self.error.is_some() {
            output::error_panel(font)
        } else {
            output::results(&self.entries, font)
        };

        let column = Column::new()
            .max_width(MAX_CONTENT_WIDTH)
            .padding(20)
            .spacing(16)
            .push(header::header(self.font, self.dark))
            .push(header::search_box(&self.query, font))
            .push_maybe(prompt)
            .push(Scrollable::new(body).height(Length::Fill));

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }
}

impl Default for App {
    fn default() -> Self {
        App {
            client: dictionary::client(),
            query: String::new(),
            entries: Vec::new(),
            error: None,
            seq: 0,
            in_flight: None,
            dark: false,
            font: FontChoice::SansSerif,
            empty_prompt: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::entry::{Definition, Meaning};

    fn entry(word: &str, meanings: usize) -> Entry {
        Entry {
            word: word.to_owned(),
            phonetic: Some(String::from("/wɜːd/")),
            meanings: (0..meanings)
                .map(|_| Meaning {
                    part_of_speech: String::from("noun"),
                    definitions: vec![Definition {
                        definition: String::from("a definition"),
                        example: None,
                    }],
                    synonyms: Vec::new(),
                })
                .collect(),
            source_urls: vec![String::from("https://en.wiktionary.org/wiki/word")],
        }
    }

    #[test]
    fn submit_starts_lookup_and_clears_input() {
        let mut app = App::default();
        app.query = String::from("hello");

        let _ = app.update(Message::Submitted);

        assert!(app.loading());
        assert!(app.query.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn empty_submit_only_shows_prompt() {
        let mut app = App::default();
        app.query = String::from("   ");
        app.entries = vec![entry("kept", 1)];

        let _ = app.update(Message::Submitted);

        assert!(app.empty_prompt);
        assert!(!app.loading());
        assert_eq!(app.entries.len(), 1);
        assert!(app.error.is_none());
    }

    #[test]
    fn typing_clears_the_prompt() {
        let mut app = App::default();
        app.empty_prompt = true;

        let _ = app.update(Message::QueryChanged(String::from("h")));

        assert!(!app.empty_prompt);
        assert_eq!(app.query, "h");
    }

    #[test]
    fn success_stores_entries_and_clears_error() {
        let mut app = App::default();
        app.query = String::from("hello");
        app.error = Some(String::from("old error"));

        let _ = app.update(Message::Submitted);
        let _ = app.update(Message::LookupFinished {
            seq: app.seq,
            result: Ok(vec![entry("hello", 2)]),
        });

        assert!(!app.loading());
        assert!(app.error.is_none());
        assert_eq!(app.entries[0].word, "hello");
    }

    #[test]
    fn failure_keeps_previous_entries() {
        let mut app = App::default();
        app.entries = vec![entry("hello", 2)];
        app.query = String::from("zzxyqq");

        let _ = app.update(Message::Submitted);
        let _ = app.update(Message::LookupFinished {
            seq: app.seq,
            result: Err(String::from("no definitions found (404 Not Found)")),
        });

        assert!(!app.loading());
        assert!(app.error.is_some());
        assert_eq!(app.entries[0].word, "hello");
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut app = App::default();
        app.query = String::from("first");
        let _ = app.update(Message::Submitted);
        let first_seq = app.seq;

        app.query = String::from("second");
        let _ = app.update(Message::Submitted);

        let _ = app.update(Message::LookupFinished {
            seq: first_seq,
            result: Ok(vec![entry("first", 1)]),
        });

        // the newer submission is still outstanding
        assert!(app.loading());
        assert!(app.entries.is_empty());
    }

    #[test]
    fn mode_toggle_changes_only_the_flag() {
        let mut app = App::default();
        app.entries = vec![entry("hello", 2)];
        app.error = Some(String::from("stale error"));

        let _ = app.update(Message::ModeToggled(true));

        assert!(app.dark);
        assert_eq!(app.entries.len(), 1);
        assert_eq!(app.error.as_deref(), Some("stale error"));
    }

    #[test]
    fn font_selection_covers_three_options() {
        assert_eq!(FontChoice::ALL.len(), 3);
        assert_eq!(FontChoice::SansSerif.to_string(), "Sans Serif");
        assert_eq!(FontChoice::Serif.to_string(), "Serif");
        assert_eq!(FontChoice::Mono.to_string(), "Mono");
    }
}
