use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::playback::controller::{ReaderView, Screen};
use crate::render::status::{progress_bar, status_line};
use crate::render::{RenderOptions, render_word};

#[derive(Clone, Copy, Debug)]
pub struct DisplayOptions {
    pub render: RenderOptions,
    pub focal_color: Color,
    pub context: bool,
}

/// The whole reader screen for one tick: glyph block, progress bar, status.
pub struct ReaderWidget<'a> {
    view: &'a ReaderView<'a>,
    options: &'a DisplayOptions,
}

impl<'a> ReaderWidget<'a> {
    pub fn new(view: &'a ReaderView<'a>, options: &'a DisplayOptions) -> Self {
        Self { view, options }
    }

    fn render_context(&self, text: &str, area: Rect, row: usize, buf: &mut Buffer) {
        if row >= area.height as usize {
            return;
        }
        let line_area = Rect {
            y: area.y + row as u16,
            height: 1,
            ..area
        };
        Paragraph::new(Line::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(line_area, buf);
    }
}

impl Widget for ReaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [word_area, bar_area, status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let view = self.view;
        let frame = render_word(
            view.word().as_str(),
            word_area.width as usize,
            word_area.height as usize,
            self.options.render,
        );

        let focal_style = Style::default().fg(self.options.focal_color);
        let lines: Vec<Line> = (0..frame.rows.len())
            .map(|row| {
                let (before, focal, after) = frame.split_row(row);
                Line::from(vec![
                    Span::raw(before),
                    Span::styled(focal, focal_style),
                    Span::raw(after),
                ])
            })
            .collect();
        Paragraph::new(lines).render(word_area, buf);

        if self.options.context {
            let prev = view.index.checked_sub(1).map(|i| &view.words[i]);
            if let (Some(prev), Some(row)) = (prev, frame.top_padding.checked_sub(1)) {
                self.render_context(prev.as_str(), word_area, row, buf);
            }
            if let Some(next) = view.words.get(view.index + 1) {
                let row = frame.top_padding + frame.glyph_rows().len();
                self.render_context(next.as_str(), word_area, row, buf);
            }
        }

        let bar = progress_bar(bar_area.width as usize, view.index + 1, view.words.len());
        Paragraph::new(bar).render(bar_area, buf);

        let status = status_line(view.wpm, view.remaining(), view.paused);
        Paragraph::new(status).render(status_area, buf);
    }
}

/// Owns the ratatui terminal and is the only thing that paints it.
pub struct Compositor<B: Backend> {
    terminal: Terminal<B>,
    options: DisplayOptions,
}

impl<B> Compositor<B>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(backend: B, options: DisplayOptions) -> Result<Self> {
        let mut terminal = Terminal::new(backend).context("failed to initialise terminal")?;
        terminal.clear().context("failed to clear terminal")?;
        Ok(Self { terminal, options })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B> Screen for Compositor<B>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    fn draw(&mut self, view: &ReaderView<'_>) -> Result<()> {
        let options = &self.options;
        self.terminal
            .draw(|frame| frame.render_widget(ReaderWidget::new(view, options), frame.area()))
            .context("failed to draw frame")?;
        Ok(())
    }
}
