use newsletter_composer_engine::models::{Block, BlockKind, Category, DocumentSettings};
use newsletter_composer_engine::store::Store;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::app::{App, EditTarget, Mode, category_at};

pub fn draw<S: Store>(f: &mut Frame, app: &App<S>) {
    let snapshot = app.snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    // Block list
    let items: Vec<ListItem> = snapshot
        .rows
        .iter()
        .map(|row| ListItem::new(Line::from(block_summary(&row.block))))
        .collect();
    let list_title = if snapshot.unsaved_changes {
        format!("{} *", snapshot.settings.title)
    } else {
        snapshot.settings.title.clone()
    };
    let list = List::new(items)
        .block(Panel::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    let mut list_state =
        ListState::default().with_selected(snapshot.rows.iter().position(|row| row.is_selected));
    f.render_stateful_widget(list, columns[0], &mut list_state);

    // Details of the selection, or the document when nothing is selected
    let (details_title, details) = match snapshot.selected_row() {
        Some(row) => (
            format!("{} block", row.block.block_type()),
            block_details(&row.block),
        ),
        None if snapshot.is_empty() => (
            "Newsletter".to_string(),
            vec!["Empty newsletter. Press 'a' to add the first block.".to_string()],
        ),
        None => ("Newsletter".to_string(), settings_details(&snapshot.settings)),
    };
    let details = Paragraph::new(details.into_iter().map(Line::from).collect::<Vec<_>>())
        .block(Panel::default().borders(Borders::ALL).title(details_title))
        .wrap(Wrap { trim: false });
    f.render_widget(details, columns[1]);

    f.render_widget(status_line(app), rows[1]);

    if let Mode::Selector { category, entry } = app.mode() {
        draw_selector(f, *category, *entry);
    }
}

fn draw_selector(f: &mut Frame, category: usize, entry: usize) {
    let area = centered(f.area(), 60, 14);
    f.render_widget(Clear, area);

    let frame = Panel::default().borders(Borders::ALL).title("Add a block");
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new(Category::ALL.iter().map(|c| c.label()))
        .select(category)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow));
    f.render_widget(tabs, parts[0]);

    let items: Vec<ListItem> = category_at(category)
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  {}", entry.description)),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    let mut state = ListState::default().with_selected(Some(entry));
    f.render_stateful_widget(list, parts[1], &mut state);
}

fn status_line<S: Store>(app: &App<S>) -> Paragraph<'static> {
    let line = match app.mode() {
        Mode::Editing { target, buffer } => {
            let label = match target {
                EditTarget::Title => "Title",
                EditTarget::Block(_, field) => field.label(),
            };
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("{buffer}_")),
                Span::raw("   Enter: Apply | Esc: Cancel"),
            ])
        }
        Mode::Selector { .. } => Line::from("h/l: Category | j/k: Entry | Enter: Insert | Esc: Close"),
        Mode::Browse => match app.status() {
            Some(notification) => {
                let color = if notification.is_error() {
                    Color::Red
                } else {
                    Color::Green
                };
                Line::from(Span::styled(
                    notification.message().to_string(),
                    Style::default().fg(color),
                ))
            }
            None => Line::from(
                "q: Quit | j/k: Select | a/A: Add | J/K: Move | d: Delete | l: Align | Enter: Edit | t: Title | s: Save | e: Export",
            ),
        },
    };

    Paragraph::new(vec![line]).block(Panel::default().borders(Borders::TOP))
}

/// One-line description of a block for the list
pub fn block_summary(block: &Block) -> String {
    match &block.kind {
        BlockKind::Heading {
            content,
            heading_level,
        } => format!("H{heading_level} {content}"),
        BlockKind::Paragraph { content } => format!("¶ {content}"),
        BlockKind::Image { image_url } => match image_url {
            Some(url) => format!("[image] {url}"),
            None => "[image] (no url)".to_string(),
        },
        BlockKind::Button {
            button_text,
            button_url,
        } => format!("[{button_text}] → {button_url}"),
        BlockKind::Divider => "────────".to_string(),
        BlockKind::Spacer { height } => format!("[spacer {height}px]"),
        BlockKind::ShapeSquare(_) | BlockKind::ShapeCircle(_) | BlockKind::ShapeTriangle(_) => {
            match block.kind.shape() {
                Some((kind, style)) => {
                    format!("[{}] {}px {}", kind.as_str(), style.shape_size, style.shape_color)
                }
                None => "[shape]".to_string(),
            }
        }
        BlockKind::FullArticle { title, .. } => format!("[article] {title}"),
        BlockKind::CustomHtml { html } => match html {
            Some(markup) => format!("[html] {} chars", markup.len()),
            None => "[html] empty".to_string(),
        },
    }
}

fn block_details(block: &Block) -> Vec<String> {
    let mut lines = vec![format!("Alignment: {}", block.alignment.as_str())];
    match &block.kind {
        BlockKind::Heading {
            content,
            heading_level,
        } => {
            lines.push(format!("Level: {heading_level}"));
            lines.push(format!("Text: {content}"));
        }
        BlockKind::Paragraph { content } => lines.push(format!("Text: {content}")),
        BlockKind::Image { image_url } => {
            lines.push(format!("Image URL: {}", image_url.as_deref().unwrap_or("-")));
        }
        BlockKind::Button {
            button_text,
            button_url,
        } => {
            lines.push(format!("Button text: {button_text}"));
            lines.push(format!("Button URL: {button_url}"));
        }
        BlockKind::Divider => {}
        BlockKind::Spacer { height } => lines.push(format!("Height: {height}px")),
        BlockKind::ShapeSquare(_) | BlockKind::ShapeCircle(_) | BlockKind::ShapeTriangle(_) => {
            if let Some((kind, style)) = block.kind.shape() {
                lines.push(format!("Shape: {}", kind.as_str()));
                lines.push(format!("Size: {}px", style.shape_size));
                lines.push(format!("Color: {}", style.shape_color));
                if let Some(radius) = &style.border_radius {
                    lines.push(format!("Corner radius: {radius}"));
                }
            }
        }
        BlockKind::FullArticle {
            title,
            content,
            image_url,
            video_url,
            show_image,
            show_video,
        } => {
            lines.push(format!("Title: {title}"));
            lines.push(format!("Content: {content}"));
            if *show_image {
                lines.push(format!("Image URL: {}", image_url.as_deref().unwrap_or("-")));
            }
            if *show_video {
                lines.push(format!("Video URL: {}", video_url.as_deref().unwrap_or("-")));
            }
        }
        BlockKind::CustomHtml { html } => {
            lines.push("HTML:".to_string());
            lines.extend(html.as_deref().unwrap_or_default().lines().map(str::to_string));
        }
    }
    lines
}

fn settings_details(settings: &DocumentSettings) -> Vec<String> {
    vec![
        format!("Title: {}", settings.title),
        format!("Header color: {}", settings.header_color),
        format!("Background color: {}", settings.body_color),
        format!("Text color: {}", settings.text_color),
        format!("Accent color: {}", settings.accent_color),
        format!("Font: {}", settings.font_family),
        format!("Width: {}px", settings.width),
    ]
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use newsletter_composer_engine::editing::Composer;
    use newsletter_composer_engine::models::{BlockType, OwnerId};
    use newsletter_composer_engine::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use tempfile::TempDir;

    fn screen<S: Store>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_screen_shows_settings_hint() {
        let store = MemoryStore::new();
        let dir = TempDir::new().unwrap();
        let app = App::new(
            Composer::new(OwnerId::from("ada")),
            &store,
            dir.path().join("out.html"),
        );

        let text = screen(&app);
        assert!(text.contains("My Newsletter"));
        assert!(text.contains("Press 'a' to add"));
        assert!(text.contains("q: Quit"));
    }

    #[test]
    fn test_selector_overlay_lists_category_entries() {
        let store = MemoryStore::new();
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            Composer::new(OwnerId::from("ada")),
            &store,
            dir.path().join("out.html"),
        );
        app.handle_key(KeyCode::Char('a'));

        let text = screen(&app);
        assert!(text.contains("Add a block"));
        assert!(text.contains("Heading 1"));
        assert!(!text.contains("Shape - Circle"));
    }

    #[test]
    fn test_selected_block_details() {
        let store = MemoryStore::new();
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            Composer::new(OwnerId::from("ada")),
            &store,
            dir.path().join("out.html"),
        );
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Enter);

        let text = screen(&app);
        assert!(text.contains("H1 New Heading"));
        assert!(text.contains("Level: 1"));
        assert!(text.contains("My Newsletter *"));
    }

    #[test]
    fn test_block_summaries() {
        assert_eq!(
            block_summary(&Block::new(BlockType::Spacer, 0)),
            "[spacer 20px]"
        );
        assert_eq!(
            block_summary(&Block::new(BlockType::ShapeSquare, 0)),
            "[square] 100px #3b82f6"
        );
        assert_eq!(
            block_summary(&Block::new(BlockType::Button, 0)),
            "[Click Here] → #"
        );
        assert_eq!(
            block_summary(&Block::new(BlockType::Image, 0)),
            "[image] (no url)"
        );
    }
}
