use crate::{
    image::{Image, BLACK},
    scan::Coordinate,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, Borders, Paragraph,
    },
    Terminal,
};
use std::{io, sync::Arc};
use tokio::sync::{watch, Mutex};

pub struct PreviewState {
    pub source: String,
    pub threshold: u8,
    pub match_count: usize,
    pub original: Image,
    pub marked: Image,
    pub highlight: bool,
}

impl PreviewState {
    pub fn new(source: String, threshold: u8, image: Image, matches: &[Coordinate]) -> Self {
        let mut marked = image.clone();
        marked.mark(matches, BLACK);
        Self {
            source,
            threshold,
            match_count: matches.len(),
            original: image,
            marked,
            highlight: true,
        }
    }

    pub fn shown(&self) -> &Image {
        if self.highlight {
            &self.marked
        } else {
            &self.original
        }
    }
}

pub struct UI {
    state: Arc<Mutex<PreviewState>>,
    tx: watch::Sender<()>,
}

impl UI {
    pub fn new(state: PreviewState) -> Self {
        let (tx, _) = watch::channel(());
        UI {
            state: Arc::new(Mutex::new(state)),
            tx,
        }
    }

    pub async fn run(&self) -> Result<(), io::Error> {
        // stdout carries the report
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        let terminal = Arc::new(Mutex::new(Terminal::new(backend)?));

        let mut rx = self.tx.subscribe();
        let state_clone = Arc::clone(&self.state);
        let terminal_clone = Arc::clone(&terminal);

        let _ = self.tx.send(());

        let redraw = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let state = state_clone.lock().await;
                let mut terminal = terminal_clone.lock().await;
                if let Err(e) = terminal.draw(|f| UI::draw_ui(f, &state)) {
                    error!("Error drawing terminal: {}", e);
                }
            }
        });

        let result = self.event_loop().await;
        redraw.abort();

        disable_raw_mode()?;
        let mut terminal = terminal.lock().await;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(&self) -> Result<(), io::Error> {
        loop {
            // crossterm blocks; yield so the redraw task gets a turn first
            tokio::task::yield_now().await;
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press && self.handle_input(key_event.code).await
                {
                    return Ok(());
                }
            }
        }
    }

    fn draw_ui(f: &mut ratatui::Frame, state: &PreviewState) {
        let size = f.area();
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(size);

        let image_and_info_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(vertical_chunks[0]);

        UI::draw_image_with_colors(f, image_and_info_chunks[0], state.shown());

        let info_display = format!(
            "Source: {}\nSize: {}x{}\nThreshold: {}\nGreen pixels: {}\nHighlight: {}",
            state.source,
            state.original.width,
            state.original.height,
            state.threshold,
            state.match_count,
            if state.highlight { "on" } else { "off" },
        );
        let info_paragraph = Paragraph::new(info_display)
            .block(Block::default().borders(Borders::ALL).title("Scan"))
            .style(Style::default());
        f.render_widget(info_paragraph, image_and_info_chunks[1]);

        let help = Paragraph::new("m: toggle highlight   q/Esc: quit")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, vertical_chunks[1]);
    }

    fn draw_image_with_colors(f: &mut ratatui::Frame, area: ratatui::layout::Rect, img: &Image) {
        if img.width == 0 || img.height == 0 {
            let empty_paragraph = Paragraph::new("Empty image")
                .block(Block::default().borders(Borders::ALL).title("Image"));
            f.render_widget(empty_paragraph, area);
            return;
        }

        let (target_width, target_height) = (area.width as usize, area.height as usize);

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Image"))
            .paint(|ctx| {
                for y in 0..target_height {
                    for x in 0..target_width {
                        let src_x = x * (img.width as usize) / target_width;
                        let src_y = y * (img.height as usize) / target_height;

                        let (r, g, b) = img.pixel(src_x as u32, src_y as u32);
                        let color = Color::Rgb(r, g, b);

                        ctx.draw(&Rectangle {
                            x: x as f64,
                            y: (target_height - 1 - y) as f64,
                            width: 1.0,
                            height: 1.0,
                            color,
                        });
                    }
                }
            })
            .x_bounds([0.0, target_width as f64])
            .y_bounds([0.0, target_height as f64]);

        f.render_widget(canvas, area);
    }

    async fn handle_input(&self, key: KeyCode) -> bool {
        let mut state = self.state.lock().await;
        match key {
            KeyCode::Char('m') => {
                state.highlight = !state.highlight;
                let _ = self.tx.send(());
            }
            KeyCode::Char('q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }
}
