#![windows_subsystem = "windows"]
#![allow(dead_code)]

mod dictionary;
mod error;
mod gui;

fn main() {
    tracing_subscriber::fmt().init();

    gui::run().unwrap();
}
