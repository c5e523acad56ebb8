use iced::event::{self, Event};
use iced::widget::{column, container, row, text};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod format;
mod net;
mod state;
mod ui;

use net::fetch::{self, FetchError};
use net::upload::{self, UploadError, UploadInfo, UploadLimits};
use state::catalog;
use state::uploader::{Outcome, Uploader};
use state::viewer::Viewer;

/// Main application state
struct AnimalBoard {
    config: config::Config,
    /// Current radio selection, if any
    selected: Option<&'static str>,
    /// Selector widget state machine
    viewer: Viewer,
    /// Uploader widget state machine
    uploader: Uploader,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked an animal in the radio list
    AnimalPicked(&'static str),
    /// Background picture fetch completed
    FetchDone {
        seq: u64,
        result: Result<Vec<u8>, FetchError>,
    },
    /// User clicked the drop zone
    BrowseRequested,
    /// A file is hovering over the window
    DragEntered,
    /// The hover left the window without dropping
    DragLeft,
    /// A file was dropped on the window
    FileDropped(PathBuf),
    /// Background upload completed
    UploadFinished {
        filename: String,
        result: Result<UploadInfo, UploadError>,
    },
}

impl AnimalBoard {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::Config::load_or_default();
        tracing::info!("upload endpoint: {}", config.endpoint);

        (
            AnimalBoard {
                config,
                selected: None,
                viewer: Viewer::default(),
                uploader: Uploader::default(),
                status: String::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimalPicked(key) => {
                self.selected = Some(key);

                let Some(entry) = catalog::lookup(key) else {
                    tracing::warn!("no catalog entry for {key:?}");
                    self.status = format!("No picture for \"{key}\"");
                    return Task::none();
                };
                self.status.clear();

                let seq = self.viewer.begin(entry);
                let url = entry.image_url.to_string();
                let timeout = self.config.image_timeout();
                Task::perform(fetch::fetch_image(url, timeout), move |result| {
                    Message::FetchDone { seq, result }
                })
            }
            Message::FetchDone { seq, result } => {
                if !self.viewer.resolve(seq, result) {
                    tracing::debug!("ignoring stale fetch completion (seq {seq})");
                }
                Task::none()
            }
            Message::BrowseRequested => {
                if self.uploader.is_busy() {
                    self.status = "An upload is already in progress".to_string();
                    return Task::none();
                }

                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a file to upload")
                    .pick_file();

                match file {
                    Some(path) => self.start_upload(path),
                    None => Task::none(),
                }
            }
            Message::DragEntered => {
                self.uploader.drag_entered();
                Task::none()
            }
            Message::DragLeft => {
                self.uploader.drag_left();
                Task::none()
            }
            Message::FileDropped(path) => {
                self.uploader.drag_left();
                self.start_upload(path)
            }
            Message::UploadFinished { filename, result } => {
                let outcome = match result {
                    Ok(info) => {
                        tracing::info!("uploaded {filename} ({} bytes)", info.filesize);
                        Outcome::Success(info)
                    }
                    Err(e) => {
                        tracing::warn!("upload of {filename} failed: {e}");
                        Outcome::Error(e.to_string())
                    }
                };
                self.uploader.finish(filename, outcome);
                Task::none()
            }
        }
    }

    /// Kick off an upload for a picked or dropped file.
    /// Refused with a status message while an attempt is in flight.
    fn start_upload(&mut self, path: PathBuf) -> Task<Message> {
        let filename = upload::display_name(&path);
        if !self.uploader.begin(filename.clone()) {
            self.status = format!("Still uploading; {filename} was not queued");
            return Task::none();
        }
        self.status.clear();

        let endpoint = self.config.endpoint.clone();
        let limits = UploadLimits {
            max_bytes: self.config.max_upload_bytes,
            allowed_extensions: self.config.allowed_extensions.clone(),
        };

        Task::perform(upload::upload_file(endpoint, path, limits), move |result| {
            Message::UploadFinished {
                filename: filename.clone(),
                result,
            }
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content = column![
            text("Animal Board").size(32),
            row![
                ui::gallery::panel(self.selected, self.viewer.display()),
                ui::uploader::panel(&self.uploader),
            ]
            .spacing(32),
        ]
        .spacing(20)
        .padding(32)
        .align_x(Alignment::Center);

        if !self.status.is_empty() {
            content = content.push(text(self.status.as_str()).size(14));
        }

        container(content)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Map window file-drop events into widget messages
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application("Animal Board", AnimalBoard::update, AnimalBoard::view)
        .subscription(AnimalBoard::subscription)
        .theme(AnimalBoard::theme)
        .centered()
        .run_with(AnimalBoard::new)
}
