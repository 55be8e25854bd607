use super::keys::{KeyAction, key_action};
use crate::config::PickerConfig;
use crate::discovery::find_images;
use crate::layout::{GridSpec, Layout, LayoutParams, compute_layout};
use crate::process::SystemRunner;
use crate::theme::{ThemeDispatcher, ThemeReport};
use crate::thumbnail::load_square;
use iced::{
    keyboard::Key, widget::{button, column, container, image, mouse_area, row, text, tooltip, Space}, window, Background, Border, Color, Element, Length, Pixels, Point, Size,
    Task,
    Theme,
};
use log::{debug, info, warn};
use std::path::PathBuf;

macro_rules! themes {
    ($($variant:ident),*) => {
        fn string_to_theme(theme_str: &str) -> Theme {
            match theme_str {
                $(stringify!($variant) => Theme::$variant,)*
                _ => Theme::Dark,
            }
        }
    };
}

themes!(
    Dark,
    Light,
    Dracula,
    Nord,
    GruvboxDark,
    CatppuccinMocha,
    TokyoNight,
    KanagawaWave,
    Oxocarbon
);

#[derive(Debug, Clone)]
pub enum Message {
    WindowOpened(Option<window::Id>),
    MonitorSized(Option<Size>),
    Refresh,
    ImagesLoaded(u64, Vec<PathBuf>),
    ThumbnailReady(u64, usize, Option<image::Handle>),
    ImageSelected(PathBuf),
    ThemeApplied(ThemeReport),
    ImageHovered(usize),
    ImageUnhovered,
    KeyPressed(Key),
}

enum Thumbnail {
    Pending,
    Ready(image::Handle),
    /// Decoding failed; the cell stays clickable but shows no picture.
    Blank,
}

struct Entry {
    path: PathBuf,
    thumbnail: Thumbnail,
}

pub struct WallPicker {
    config: PickerConfig,
    window: Option<window::Id>,
    side: u32,
    /// Bumped on every refresh so late thumbnails from an older scan are dropped.
    generation: u64,
    entries: Vec<Entry>,
    layout: Option<Layout>,
    hovered_image: Option<usize>,
}

impl WallPicker {
    pub fn new(config: PickerConfig) -> (Self, Task<Message>) {
        let app = Self {
            side: config.window_side,
            config,
            window: None,
            generation: 0,
            entries: Vec::new(),
            layout: None,
            hovered_image: None,
        };

        (app, window::get_oldest().map(Message::WindowOpened))
    }

    fn params(&self) -> LayoutParams {
        LayoutParams {
            margin: self.config.margin,
            spacing: self.config.spacing,
        }
    }

    fn refresh(&mut self) -> Task<Message> {
        self.generation += 1;
        self.hovered_image = None;

        let generation = self.generation;
        let folder = self.config.image_dir.clone();
        let extensions = self.config.supported_extensions.clone();

        Task::future(async move {
            match tokio::task::spawn_blocking(move || find_images(&folder, &extensions)).await {
                Ok(images) => images,
                Err(e) => {
                    warn!("Image discovery task failed: {}", e);
                    Vec::new()
                }
            }
        })
        .map(move |images| Message::ImagesLoaded(generation, images))
    }

    fn generate_single_thumbnail(
        generation: u64,
        index: usize,
        image_path: PathBuf,
        side: u32,
    ) -> Task<Message> {
        Task::future(async move {
            let img_path = image_path.clone();

            match tokio::task::spawn_blocking(move || match load_square(&img_path, side) {
                Ok(square) => {
                    let (width, height) = square.dimensions();
                    Some(image::Handle::from_rgba(width, height, square.into_raw()))
                }
                Err(e) => {
                    warn!("Failed to load thumbnail for {}: {}", img_path.display(), e);
                    None
                }
            })
            .await
            {
                Ok(result) => result,
                Err(e) => {
                    warn!(
                        "Thumbnail task for {} failed: {}",
                        image_path.display(),
                        e
                    );
                    None
                }
            }
        })
        .map(move |handle| Message::ThumbnailReady(generation, index, handle))
    }

    fn apply_theme(&self, path: PathBuf) -> Task<Message> {
        let dispatcher = ThemeDispatcher::new(self.config.clone(), SystemRunner);

        Task::future(async move {
            match tokio::task::spawn_blocking(move || dispatcher.apply(&path)).await {
                Ok(report) => report,
                Err(e) => {
                    warn!("Theme task failed: {}", e);
                    ThemeReport::default()
                }
            }
        })
        .map(Message::ThemeApplied)
    }

    fn do_update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(Some(id)) => {
                self.window = Some(id);
                window::monitor_size(id).map(Message::MonitorSized)
            }
            Message::WindowOpened(None) => self.refresh(),
            Message::MonitorSized(Some(monitor)) => {
                let side = (monitor.width.min(monitor.height) * 0.5) as u32;
                if side == 0 {
                    return self.refresh();
                }
                self.side = side;

                let mut tasks = vec![self.refresh()];
                if let Some(id) = self.window {
                    let side = side as f32;
                    tasks.push(window::resize(id, Size::new(side, side)));
                    tasks.push(window::move_to(
                        id,
                        Point::new(
                            (monitor.width - side) / 2.0,
                            (monitor.height - side) / 2.0,
                        ),
                    ));
                }
                Task::batch(tasks)
            }
            Message::MonitorSized(None) => {
                debug!("Monitor size unknown, keeping {}px window", self.side);
                self.refresh()
            }
            Message::Refresh => self.refresh(),
            Message::ImagesLoaded(generation, images) => {
                if generation != self.generation {
                    return Task::none();
                }

                let layout = compute_layout(images.len(), self.side, self.side, self.params());
                info!("Found {} images in {}", images.len(), self.config.image_dir.display());
                self.layout = Some(layout);

                let thumb_side = layout.grid().map_or(0, |spec| spec.thumb_side);
                self.entries = images
                    .into_iter()
                    .map(|path| Entry {
                        path,
                        thumbnail: if thumb_side == 0 {
                            Thumbnail::Blank
                        } else {
                            Thumbnail::Pending
                        },
                    })
                    .collect();

                if thumb_side == 0 {
                    return Task::none();
                }

                let thumbnail_tasks: Vec<Task<Message>> = self
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        Self::generate_single_thumbnail(
                            generation,
                            index,
                            entry.path.clone(),
                            thumb_side,
                        )
                    })
                    .collect();

                Task::batch(thumbnail_tasks)
            }
            Message::ThumbnailReady(generation, index, handle) => {
                if generation == self.generation {
                    if let Some(entry) = self.entries.get_mut(index) {
                        entry.thumbnail = match handle {
                            Some(handle) => Thumbnail::Ready(handle),
                            None => Thumbnail::Blank,
                        };
                    }
                }
                Task::none()
            }
            Message::ImageSelected(path) => {
                info!("Selected wallpaper: {}", path.display());
                self.apply_theme(path)
            }
            Message::ThemeApplied(report) => {
                debug!("Theme applied: {:?}", report);
                if self.config.close_on_select {
                    iced::exit()
                } else {
                    Task::none()
                }
            }
            Message::ImageHovered(index) => {
                self.hovered_image = Some(index);
                Task::none()
            }
            Message::ImageUnhovered => {
                self.hovered_image = None;
                Task::none()
            }
            Message::KeyPressed(key) => {
                let cols = self.layout.and_then(|l| l.grid().map(|s| s.cols)).unwrap_or(0);

                match key_action(&key, self.hovered_image, cols, self.entries.len()) {
                    KeyAction::Close => iced::exit(),
                    KeyAction::Refresh => self.do_update(Message::Refresh),
                    KeyAction::Highlight(idx) => self.do_update(Message::ImageHovered(idx)),
                    KeyAction::Select(idx) => {
                        match self.entries.get(idx).map(|entry| entry.path.clone()) {
                            Some(path) => self.do_update(Message::ImageSelected(path)),
                            None => Task::none(),
                        }
                    }
                    KeyAction::Ignore => Task::none(),
                }
            }
        }
    }

    fn create_grid_view(&self, spec: GridSpec) -> Element<'_, Message> {
        let side = spec.thumb_side as f32;
        let spacing = Pixels(self.config.spacing as f32);

        let mut rows: Vec<Element<'_, Message>> = Vec::new();

        for (row_index, chunk) in self.entries.chunks(spec.cols).enumerate() {
            let mut row_elements = Vec::new();

            for (i, entry) in chunk.iter().enumerate() {
                let global_index = row_index * spec.cols + i;
                row_elements.push(self.create_cell(global_index, entry, side));
            }

            rows.push(row(row_elements).spacing(spacing).into());
        }

        column(rows).spacing(spacing).into()
    }

    fn create_cell(&self, index: usize, entry: &Entry, side: f32) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &entry.thumbnail {
            Thumbnail::Ready(handle) => image(handle.clone()).width(side).height(side).into(),
            Thumbnail::Pending | Thumbnail::Blank => Space::new(side, side).into(),
        };

        let highlighted = self.hovered_image == Some(index);
        let cell = button(content)
            .padding(0)
            .width(side)
            .height(side)
            .on_press(Message::ImageSelected(entry.path.clone()))
            .style(move |theme: &Theme, status| cell_style(theme, status, highlighted));

        let name = entry
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tip = tooltip(cell, text(name), tooltip::Position::Bottom)
            .style(container::rounded_box);

        mouse_area(tip)
            .on_enter(Message::ImageHovered(index))
            .on_exit(Message::ImageUnhovered)
            .into()
    }

    fn theme(&self) -> Theme {
        string_to_theme(&self.config.theme)
    }
}

fn cell_style(theme: &Theme, status: button::Status, highlighted: bool) -> button::Style {
    let active = highlighted || matches!(status, button::Status::Hovered | button::Status::Pressed);

    button::Style {
        background: Some(Background::Color(if active {
            Color::from_rgb8(0x33, 0x33, 0x33)
        } else {
            Color::from_rgb8(0x22, 0x22, 0x22)
        })),
        border: Border {
            width: if highlighted { 3.0 } else { 1.0 },
            color: if active {
                theme.palette().primary
            } else {
                Color::from_rgb8(0x44, 0x44, 0x44)
            },
            radius: 4.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn run_wallpaper_picker(config: PickerConfig) -> iced::Result {
    let side = config.window_side as f32;

    iced::application("WallPicker", update, view)
        .theme(|app: &WallPicker| app.theme())
        .subscription(subscription)
        .window(window::Settings {
            size: Size::new(side, side),
            position: window::Position::Centered,
            resizable: false,
            level: window::Level::AlwaysOnTop,
            ..window::Settings::default()
        })
        .run_with(move || WallPicker::new(config))
}

fn subscription(_app: &WallPicker) -> iced::Subscription<Message> {
    iced::keyboard::on_key_press(|key, _modifiers| Some(Message::KeyPressed(key)))
}

fn update(app: &mut WallPicker, message: Message) -> Task<Message> {
    app.do_update(message)
}

fn view(app: &WallPicker) -> Element<'_, Message> {
    let content: Element<'_, Message> = match app.layout {
        None => container(text("Loading images..."))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        Some(Layout::Placeholder) => button(
            container(text(format!(
                "No images found\n{}",
                app.config.image_dir.display()
            )))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        Some(Layout::Grid(spec)) => app.create_grid_view(spec),
    };

    container(content)
        .padding(u16::try_from(app.config.margin).unwrap_or(u16::MAX))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb8(0x11, 0x11, 0x11))),
            border: Border::default()
                .width(2)
                .color(Color::from_rgb8(0x33, 0x33, 0x33))
                .rounded(8),
            ..Default::default()
        })
        .into()
}
