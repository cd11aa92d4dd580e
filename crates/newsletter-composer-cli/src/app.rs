use crossterm::event::KeyCode;
use newsletter_composer_engine::editing::{
    BlockPatch, Cmd, Composer, Direction, Position, SettingsPatch, Snapshot,
};
use newsletter_composer_engine::models::{Alignment, Block, BlockId, BlockKind, Category};
use newsletter_composer_engine::notify::{Notification, Notifier, RecordingNotifier};
use newsletter_composer_engine::render::render_template;
use newsletter_composer_engine::store::Store;
use std::fs;
use std::path::PathBuf;

/// What the next key press acts on
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    Selector { category: usize, entry: usize },
    Editing { target: EditTarget, buffer: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditTarget {
    Block(BlockId, Field),
    Title,
}

/// The single field `Enter` edits for each block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Content,
    ButtonText,
    ImageUrl,
    Height,
    ShapeSize,
    ArticleTitle,
    Html,
}

impl Field {
    /// `None` for dividers, which have nothing to type
    pub fn for_block(block: &Block) -> Option<Self> {
        let field = match &block.kind {
            BlockKind::Heading { .. } | BlockKind::Paragraph { .. } => Field::Content,
            BlockKind::Image { .. } => Field::ImageUrl,
            BlockKind::Button { .. } => Field::ButtonText,
            BlockKind::Divider => return None,
            BlockKind::Spacer { .. } => Field::Height,
            BlockKind::ShapeSquare(_) | BlockKind::ShapeCircle(_) | BlockKind::ShapeTriangle(_) => {
                Field::ShapeSize
            }
            BlockKind::FullArticle { .. } => Field::ArticleTitle,
            BlockKind::CustomHtml { .. } => Field::Html,
        };
        Some(field)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Content => "Text",
            Field::ButtonText => "Button text",
            Field::ImageUrl => "Image URL",
            Field::Height => "Spacer height",
            Field::ShapeSize => "Shape size",
            Field::ArticleTitle => "Article title",
            Field::Html => "HTML",
        }
    }

    pub fn current(self, block: &Block) -> String {
        match (self, &block.kind) {
            (Field::Content, kind) => kind.content().unwrap_or_default().to_string(),
            (Field::ButtonText, BlockKind::Button { button_text, .. }) => button_text.clone(),
            (Field::ImageUrl, BlockKind::Image { image_url }) => {
                image_url.clone().unwrap_or_default()
            }
            (Field::Height, BlockKind::Spacer { height }) => height.to_string(),
            (Field::ShapeSize, kind) => kind
                .shape()
                .map(|(_, style)| style.shape_size.to_string())
                .unwrap_or_default(),
            (Field::ArticleTitle, BlockKind::FullArticle { title, .. }) => title.clone(),
            (Field::Html, BlockKind::CustomHtml { html }) => html.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Patch setting this field to `input`; `None` when a number does not parse
    pub fn patch(self, input: &str) -> Option<BlockPatch> {
        let text = Some(input.to_string());
        let patch = match self {
            Field::Content => BlockPatch::content(input),
            Field::ButtonText => BlockPatch {
                button_text: text,
                ..BlockPatch::default()
            },
            Field::ImageUrl => BlockPatch {
                image_url: text,
                ..BlockPatch::default()
            },
            Field::Height => BlockPatch::height(input.trim().parse().ok()?),
            Field::ShapeSize => BlockPatch::shape_size(input.trim().parse().ok()?),
            Field::ArticleTitle => BlockPatch {
                title: text,
                ..BlockPatch::default()
            },
            Field::Html => BlockPatch {
                html: text,
                ..BlockPatch::default()
            },
        };
        Some(patch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal editing session over one composer
pub struct App<S: Store> {
    composer: Composer,
    store: S,
    notifier: RecordingNotifier,
    mode: Mode,
    export_path: PathBuf,
}

impl<S: Store> App<S> {
    pub fn new(composer: Composer, store: S, export_path: PathBuf) -> Self {
        let mut app = Self {
            composer,
            store,
            notifier: RecordingNotifier::new(),
            mode: Mode::Browse,
            export_path,
        };

        if let Err(e) = app.composer.load(&app.store) {
            log::warn!("Starting from an empty newsletter: {e}");
        }

        app
    }

    pub fn snapshot(&self) -> Snapshot {
        self.composer.snapshot()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Most recent notification, shown on the status line
    pub fn status(&self) -> Option<Notification> {
        self.notifier.last()
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        match self.mode.clone() {
            Mode::Browse => return self.browse_key(code),
            Mode::Selector { category, entry } => self.selector_key(code, category, entry),
            Mode::Editing { target, buffer } => self.editing_key(code, target, buffer),
        }
        Flow::Continue
    }

    fn browse_key(&mut self, code: KeyCode) -> Flow {
        match code {
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(true),
            KeyCode::Up | KeyCode::Char('k') => self.select_next(false),
            KeyCode::Esc => self.apply(Cmd::Select { id: None }),
            KeyCode::Char('a') => {
                let position = self
                    .selected_index()
                    .map_or(Position::Bottom, Position::After);
                self.open_selector(position);
            }
            KeyCode::Char('A') => self.open_selector(Position::Top),
            KeyCode::Char('J') => self.move_selected(Direction::Down),
            KeyCode::Char('K') => self.move_selected(Direction::Up),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.composer.selected() {
                    self.apply(Cmd::DeleteBlock { id });
                }
            }
            KeyCode::Char('l') => self.cycle_alignment(),
            KeyCode::Enter => self.start_block_edit(),
            KeyCode::Char('t') => {
                self.mode = Mode::Editing {
                    target: EditTarget::Title,
                    buffer: self.composer.settings().title.clone(),
                };
            }
            KeyCode::Char('s') => {
                // Outcome is reported through the notifier
                let _ = self.composer.save(&self.store, &self.notifier);
            }
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
        Flow::Continue
    }

    fn selector_key(&mut self, code: KeyCode, category: usize, entry: usize) {
        let categories = Category::ALL.len();
        let entries = category_at(category).entries();

        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.apply(Cmd::CloseSelector);
                self.mode = Mode::Browse;
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.mode = Mode::Selector {
                    category: (category + 1) % categories,
                    entry: 0,
                };
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.mode = Mode::Selector {
                    category: (category + categories - 1) % categories,
                    entry: 0,
                };
            }
            KeyCode::Down | KeyCode::Char('j') if !entries.is_empty() => {
                self.mode = Mode::Selector {
                    category,
                    entry: (entry + 1) % entries.len(),
                };
            }
            KeyCode::Up | KeyCode::Char('k') if !entries.is_empty() => {
                self.mode = Mode::Selector {
                    category,
                    entry: (entry + entries.len() - 1) % entries.len(),
                };
            }
            KeyCode::Enter => {
                if let Some(chosen) = entries.get(entry) {
                    let position = self.composer.selector().unwrap_or(Position::Bottom);
                    self.apply(Cmd::AddBlock {
                        block_type: chosen.block_type,
                        heading_level: chosen.heading_level,
                        position,
                    });
                    self.mode = Mode::Browse;
                }
            }
            _ => {}
        }
    }

    fn editing_key(&mut self, code: KeyCode, target: EditTarget, mut buffer: String) {
        match code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => {
                self.mode = Mode::Browse;
                self.commit_edit(target, &buffer);
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::Editing { target, buffer };
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.mode = Mode::Editing { target, buffer };
            }
            _ => {}
        }
    }

    fn commit_edit(&mut self, target: EditTarget, input: &str) {
        match target {
            EditTarget::Title => self.apply(Cmd::UpdateSettings {
                patch: SettingsPatch {
                    title: Some(input.to_string()),
                    ..SettingsPatch::default()
                },
            }),
            EditTarget::Block(id, field) => match field.patch(input) {
                Some(patch) => self.apply(Cmd::UpdateBlock { id, patch }),
                None => self
                    .notifier
                    .error(&format!("{} must be a whole number", field.label())),
            },
        }
    }

    fn apply(&mut self, cmd: Cmd) {
        if let Err(e) = self.composer.apply(cmd) {
            log::warn!("Edit rejected: {e}");
            self.notifier.error(&e.to_string());
        }
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.composer.selected()?;
        self.composer.blocks().iter().position(|block| block.id == id)
    }

    /// Wraps around at either end
    fn select_next(&mut self, forward: bool) {
        let len = self.composer.blocks().len();
        if len == 0 {
            return;
        }
        let next = match (self.selected_index(), forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
        };
        let id = self.composer.blocks().get(next).map(|block| block.id);
        self.apply(Cmd::Select { id });
    }

    fn open_selector(&mut self, position: Position) {
        self.apply(Cmd::OpenSelector { position });
        self.mode = Mode::Selector {
            category: 0,
            entry: 0,
        };
    }

    fn move_selected(&mut self, direction: Direction) {
        if let Some(id) = self.composer.selected() {
            self.apply(Cmd::MoveBlock { id, direction });
        }
    }

    fn cycle_alignment(&mut self) {
        let Some(block) = self.composer.selected_block() else {
            return;
        };
        let current = Alignment::ALL
            .iter()
            .position(|alignment| *alignment == block.alignment)
            .unwrap_or(0);
        let next = Alignment::ALL[(current + 1) % Alignment::ALL.len()];
        let id = block.id;
        self.apply(Cmd::UpdateBlock {
            id,
            patch: BlockPatch::alignment(next),
        });
    }

    fn start_block_edit(&mut self) {
        let Some(block) = self.composer.selected_block() else {
            return;
        };
        if let Some(field) = Field::for_block(block) {
            self.mode = Mode::Editing {
                target: EditTarget::Block(block.id, field),
                buffer: field.current(block),
            };
        }
    }

    fn export(&mut self) {
        let html = render_template(self.composer.settings(), self.composer.blocks());
        match fs::write(&self.export_path, html) {
            Ok(()) => {
                log::info!("Exported newsletter to {}", self.export_path.display());
                self.notifier
                    .success(&format!("Exported to {}", self.export_path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.notifier.error(&format!("Failed to export: {e}"));
            }
        }
    }
}

pub fn category_at(index: usize) -> Category {
    Category::ALL.get(index).copied().unwrap_or_default()
}
