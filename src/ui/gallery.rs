/// Selector widget view
///
/// Radio list over the catalog plus the display region, which renders
/// whichever stage the viewer state machine is in.

use iced::widget::{column, container, image, radio, text, tooltip};
use iced::{Alignment, Element, Length};

use crate::state::catalog::ANIMALS;
use crate::state::viewer::Display;
use crate::Message;

pub fn panel<'a>(selected: Option<&'static str>, display: &'a Display) -> Element<'a, Message> {
    let mut choices = column![text("Pick an animal").size(20)].spacing(10);
    for entry in &ANIMALS {
        choices = choices.push(radio(
            entry.display_name,
            entry.key,
            selected,
            Message::AnimalPicked,
        ));
    }

    column![choices, display_region(display)]
        .spacing(20)
        .into()
}

fn display_region(display: &Display) -> Element<'_, Message> {
    let content: Element<'_, Message> = match display {
        Display::Idle => placeholder("🐾", "Select an animal to see its picture"),
        Display::Loading { name, .. } => placeholder("⏳", &format!("Loading {name}...")),
        Display::Image { name, alt, handle } => column![
            tooltip(
                image(handle.clone()).width(Length::Fixed(400.0)),
                container(text(alt.as_str()).size(13))
                    .padding(6)
                    .style(container::rounded_box),
                tooltip::Position::Bottom,
            ),
            text(name.as_str()).size(24),
            text(format!("Beautiful {} image", name.to_lowercase())).size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
        Display::Fallback { name, emoji } => column![
            text(*emoji).size(96),
            text(name.as_str()).size(24),
            text(format!("Beautiful {}", name.to_lowercase())).size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
    };

    container(content)
        .center_x(Length::Fixed(420.0))
        .center_y(Length::Fixed(360.0))
        .into()
}

fn placeholder(icon: &str, caption: &str) -> Element<'static, Message> {
    column![text(icon.to_string()).size(64), text(caption.to_string())]
        .spacing(12)
        .align_x(Alignment::Center)
        .into()
}
