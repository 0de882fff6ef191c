use folio_core::{
    Category, Gallery, RevealScheduler, RevealTicket, Visibility, wait_for_reveal,
};
use iced::widget::{Row, button, column, container, row, text};
use iced::{Color, Element, Length, Task};

const CARD_WIDTH: f32 = 240.0;
const CARD_HEIGHT: f32 = 160.0;

// Faded text while a card waits for its staggered reveal
const REVEALING_TEXT: Color = Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 0.5,
};

#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(Category),
    PrevPage,
    NextPage,
    GoToPage(usize),
    Revealed(Option<RevealTicket>),
}

pub struct AppState {
    gallery: Gallery,
    reveals: RevealScheduler,
}

pub fn initialize(mut gallery: Gallery) -> (AppState, Task<Message>) {
    let tickets = gallery.take_pending_reveals();
    let mut state = AppState {
        gallery,
        reveals: RevealScheduler::new(),
    };
    let task = schedule_reveals(&mut state, tickets);
    (state, task)
}

/// Start the fade-in timers for a fresh page; earlier timers are cancelled
fn schedule_reveals(state: &mut AppState, tickets: Vec<RevealTicket>) -> Task<Message> {
    let token = state.reveals.restart();
    Task::batch(tickets.into_iter().map(|ticket| {
        Task::perform(wait_for_reveal(ticket, token.clone()), Message::Revealed)
    }))
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    let generation = state.gallery.generation();
    let tickets = match message {
        Message::SelectCategory(category) => state.gallery.select_category(category),
        Message::PrevPage => state.gallery.previous(),
        Message::NextPage => state.gallery.next(),
        Message::GoToPage(page) => state.gallery.go_to(page),
        Message::Revealed(Some(ticket)) => {
            if !state.gallery.complete_reveal(ticket) {
                log::debug!("Dropped stale reveal for item {}", ticket.item);
            }
            return Task::none();
        }
        Message::Revealed(None) => return Task::none(),
    };
    // Ignored actions leave the pending reveals current
    if state.gallery.generation() == generation {
        return Task::none();
    }
    schedule_reveals(state, tickets)
}

fn filter_bar(gallery: &Gallery) -> Element<Message> {
    let mut bar = Row::new().spacing(10);
    for category in Category::all() {
        let style = if gallery.is_active(category) {
            button::primary
        } else {
            button::secondary
        };
        bar = bar.push(
            button(text(category.display_name()).size(14))
                .on_press(Message::SelectCategory(category))
                .style(style)
                .padding([6, 14]),
        );
    }
    bar.into()
}

fn project_grid(gallery: &Gallery) -> Element<Message> {
    if gallery.placeholder_visible() {
        if let Some(placeholder) = gallery.placeholder() {
            return container(
                column![
                    text(placeholder.title).size(20),
                    text(placeholder.detail).size(14),
                ]
                .spacing(8)
                .align_x(iced::Alignment::Center),
            )
            .padding(32)
            .center_x(Length::Fill)
            .into();
        }
    }

    let mut grid = Row::new().spacing(16);
    for index in gallery.displayed_items() {
        let Some(item) = gallery.catalog().get(index) else {
            continue;
        };
        let revealing = gallery.visibility(index) == Visibility::Revealing;

        let mut title = text(item.title.as_str()).size(16);
        let mut summary = text(item.summary.as_str()).size(12);
        if revealing {
            title = title.color(REVEALING_TEXT);
            summary = summary.color(REVEALING_TEXT);
        }
        let images = match item.images.len() {
            0 => String::new(),
            1 => "1 image".to_string(),
            n => format!("{} images", n),
        };

        grid = grid.push(
            container(column![title, summary, text(images).size(11)].spacing(6))
                .padding(12)
                .width(Length::Fixed(CARD_WIDTH))
                .height(Length::Fixed(CARD_HEIGHT))
                .style(container::rounded_box),
        );
    }
    grid.into()
}

fn pagination_bar(gallery: &Gallery) -> Element<Message> {
    let controls = gallery.controls();
    if !controls.visible {
        return row![].into();
    }

    let mut bar = Row::new()
        .spacing(6)
        .align_y(iced::Alignment::Center)
        .push(
            button("‹")
                .on_press_maybe(controls.previous.is_enabled().then_some(Message::PrevPage))
                .padding([4, 10]),
        );
    for marker in gallery.markers() {
        bar = bar.push(
            button(text(if marker.current { "●" } else { "○" }).size(14))
                .on_press(Message::GoToPage(marker.page))
                .style(button::text)
                .padding(2),
        );
    }
    bar.push(
        button("›")
            .on_press_maybe(controls.next.is_enabled().then_some(Message::NextPage))
            .padding([4, 10]),
    )
    .into()
}

pub fn view(state: &AppState) -> Element<Message> {
    let gallery = &state.gallery;
    let record = gallery.active_record();
    let status = if record.is_empty() {
        format!("{}: no projects", gallery.active_category().display_name())
    } else {
        format!(
            "{}: page {} of {}",
            gallery.active_category().display_name(),
            record.current_page + 1,
            record.total_pages
        )
    };

    container(
        column![
            text("Projects").size(28),
            filter_bar(gallery),
            project_grid(gallery),
            pagination_bar(gallery),
            text(status).size(12),
        ]
        .spacing(20)
        .align_x(iced::Alignment::Center),
    )
    .padding(24)
    .center_x(Length::Fill)
    .into()
}
