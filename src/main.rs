mod app;
mod config;
mod deck;
mod library;
mod notify;
mod picker;
mod runtime;
mod ui;
mod waveform;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
