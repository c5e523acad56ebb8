/// Uploader widget view
///
/// The clickable drop zone, the success / error cards for the last attempt
/// (mutually exclusive), and the session history rows. The zone border picks
/// up the accent color while a file hovers over the window.

use iced::widget::container::Style;
use iced::widget::{column, container, mouse_area, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::format::format_file_size;
use crate::state::uploader::{DropZone, Outcome, Uploader};
use crate::Message;

pub fn panel(uploader: &Uploader) -> Element<'_, Message> {
    let mut panel = column![text("Upload a file").size(20), drop_zone(uploader)].spacing(16);

    if let Some(outcome) = uploader.last_outcome() {
        panel = panel.push(outcome_card(outcome));
    }
    if !uploader.history().is_empty() {
        panel = panel.push(history_list(uploader));
    }

    panel.width(Length::Fixed(420.0)).into()
}

fn drop_zone(uploader: &Uploader) -> Element<'_, Message> {
    let content = match uploader.zone() {
        DropZone::Uploading { filename } => column![
            text("⏳").size(40),
            text(format!("Uploading {filename}...")),
            text("Please wait while we process your file").size(13),
        ],
        // Idle and drag-over share the resting prompt; only the border changes
        _ => column![
            text("⬆").size(40),
            text("Click to upload or drag and drop"),
            text("Supports: TXT, PDF, Images, Documents, Archives").size(13),
        ],
    }
    .spacing(8)
    .align_x(Alignment::Center);

    let engaged = *uploader.zone() == DropZone::DragOver;

    mouse_area(
        container(content)
            .width(Length::Fill)
            .padding(28)
            .style(move |theme: &Theme| zone_style(theme, engaged)),
    )
    .on_press(Message::BrowseRequested)
    .into()
}

fn outcome_card(outcome: &Outcome) -> Element<'_, Message> {
    match outcome {
        Outcome::Success(info) => container(
            column![
                text("✅ File uploaded successfully!").size(16),
                text(format!("Filename: {}", info.filename)).size(14),
                text(format!("Size: {}", format_file_size(info.filesize))).size(14),
                text(format!("Type: {}", info.filetype)).size(14),
            ]
            .spacing(4),
        )
        .width(Length::Fill)
        .padding(12)
        .style(success_style)
        .into(),
        Outcome::Error(message) => container(
            column![
                text("❌ Upload error").size(16),
                text(message.as_str()).size(14),
            ]
            .spacing(4),
        )
        .width(Length::Fill)
        .padding(12)
        .style(error_style)
        .into(),
    }
}

fn history_list(uploader: &Uploader) -> Element<'_, Message> {
    let mut rows = column![text("Recent uploads").size(16)].spacing(4);
    for record in uploader.history() {
        let mark = match &record.outcome {
            Outcome::Success(_) => "✅",
            Outcome::Error(_) => "❌",
        };
        rows = rows.push(
            text(format!(
                "{}  {}  {}",
                record.at.format("%H:%M:%S"),
                mark,
                record.filename
            ))
            .size(13),
        );
    }
    rows.into()
}

fn zone_style(theme: &Theme, engaged: bool) -> Style {
    let palette = theme.extended_palette();
    let accent = if engaged {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: accent,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..Style::default()
    }
}

fn success_style(theme: &Theme) -> Style {
    let palette = theme.extended_palette();
    Style {
        background: Some(palette.success.weak.color.into()),
        text_color: Some(palette.success.weak.text),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..Style::default()
    }
}

fn error_style(theme: &Theme) -> Style {
    let palette = theme.extended_palette();
    Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..Style::default()
    }
}
