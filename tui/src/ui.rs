//! Ratatui view functions for the browser.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;

use crate::app::App;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;

fn header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

fn selected_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan)
}

/// Draw one frame of whichever view is active.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(Paragraph::new("Terminal too small"), area);
        return;
    }

    if app.show_detail {
        draw_detail(frame, app);
    } else {
        draw_main(frame, app);
    }

    // Help is an overlay above whichever view is underneath.
    if app.show_help {
        draw_help(frame);
    }
}

fn draw_main(frame: &mut Frame, app: &App) {
    let area = frame.area();

    draw_bar(frame, row(area, 0), " Claude Code Extensions ", true);
    draw_tabs(frame, row(area, 1), app);
    frame.render_widget(
        Paragraph::new("-".repeat(area.width as usize)),
        row(area, 2),
    );

    draw_items(frame, app);

    draw_bar(
        frame,
        row(area, area.height - 1),
        " q:Quit  ?:Help  Enter:Details  Tab:Next Section  Arrows:Navigate ",
        false,
    );
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, (title, count)) in app.section_tabs().into_iter().enumerate() {
        let text = format!(" [{}] {title} ({count}) ", i + 1);
        let style = if i == app.current_section {
            selected_style().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(text, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_items(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let list_top = 3;
    let list_height = area.height.saturating_sub(list_top + 1) as usize;
    let width = area.width as usize;

    let lines = item_lines(app, width);
    if lines.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("(no items)", Style::default().fg(Color::DarkGray))),
            Rect::new(2, list_top, area.width.saturating_sub(2), 1),
        );
        return;
    }

    for (display_idx, (idx, text, style)) in lines
        .into_iter()
        .skip(app.scroll_offset)
        .enumerate()
        .take(list_height)
    {
        let style = if idx == app.current_item {
            selected_style()
        } else {
            style
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)),
            row(area, list_top + display_idx as u16),
        );
    }
}

/// One display line per item of the focused section, with its resting
/// style.
fn item_lines(app: &App, width: usize) -> Vec<(usize, String, Style)> {
    let plain = Style::default();

    match app.current_section {
        0 => app
            .snapshot
            .skills
            .iter()
            .enumerate()
            .map(|(i, s)| (i, entry_line(&s.name, &s.description, width), plain))
            .collect(),
        1 => app
            .snapshot
            .commands
            .iter()
            .enumerate()
            .map(|(i, c)| {
                (
                    i,
                    entry_line(&format!("/{}", c.name), &c.description, width),
                    plain,
                )
            })
            .collect(),
        _ => app
            .snapshot
            .hooks
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let status = if h.enabled { "[ON] " } else { "[OFF]" };
                let style = if h.enabled {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                let text = truncate(&format!("  {status} {} ({})", h.name, h.event), width);
                (i, text, style)
            })
            .collect(),
    }
}

fn entry_line(name: &str, description: &str, width: usize) -> String {
    let mut text = format!("  {name}");
    if !description.is_empty() {
        text.push_str(" - ");
        text.push_str(description);
    }
    truncate(&text, width)
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width.saturating_sub(2)).collect()
}

fn draw_detail(frame: &mut Frame, app: &App) {
    let area = frame.area();

    draw_bar(frame, row(area, 0), " Item Details ", true);

    if let Some(lines) = app.detail_lines(area.width as usize) {
        for (i, line) in lines
            .into_iter()
            .take(area.height.saturating_sub(3) as usize)
            .enumerate()
        {
            frame.render_widget(
                Paragraph::new(truncate(&line, area.width as usize - 2)),
                Rect::new(2, 2 + i as u16, area.width.saturating_sub(4), 1),
            );
        }
    }

    draw_bar(
        frame,
        row(area, area.height - 1),
        " b/Left/ESC:Back  q:Quit ",
        false,
    );
}

fn draw_help(frame: &mut Frame) {
    let help_lines = [
        "KEYBOARD SHORTCUTS",
        "",
        "Navigation:",
        "  Up/k       Move up",
        "  Down/j     Move down",
        "  Left/h     Previous section",
        "  Right/l    Next section",
        "  Tab        Cycle sections",
        "  1/2/3      Jump to section",
        "",
        "Actions:",
        "  Enter      Show details",
        "  b/ESC      Back from details",
        "  ?          Show this help",
        "  q          Quit",
        "",
        "Press any key to close help...",
    ];

    let area = frame.area();
    let box_width = (help_lines.iter().map(|l| l.len()).max().unwrap_or(0) + 6) as u16;
    let box_height = (help_lines.len() + 4) as u16;
    let popup = Rect::new(
        area.width.saturating_sub(box_width) / 2,
        area.height.saturating_sub(box_height) / 2,
        box_width.min(area.width),
        box_height.min(area.height),
    );

    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::raw(""); 2];
    for text in help_lines {
        lines.push(Line::raw(format!("   {text}")));
    }
    frame.render_widget(Paragraph::new(lines).style(header_style()), popup);
}

fn draw_bar(frame: &mut Frame, area: Rect, text: &str, bold: bool) {
    let style = if bold {
        header_style()
    } else {
        header_style().remove_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(style)
            .centered(),
        area,
    );
}

fn row(area: Rect, y: u16) -> Rect {
    Rect::new(area.x, area.y + y, area.width, 1)
}
