mod highlighter;
mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use prosaic_config::Config;
use prosaic_engine::{
    AnnotationSink, Annotator, AnnotatorOptions, Dictionary, DocumentStats, Heading, Highlight,
    HighlightMap, WordList,
    parsing::{parse_rope, rope::rope_lines},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{
    borrow::Cow,
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use xi_rope::Rope;

use highlighter::base_highlights;
use theme::Palette;

/// What the status bar, outline and editor panes currently show.
#[derive(Default)]
struct View {
    stats: DocumentStats,
    outline: Vec<Heading>,
    highlights: HighlightMap,
}

impl AnnotationSink for View {
    fn update_stats(&mut self, stats: DocumentStats) {
        self.stats = stats;
    }

    fn update_outline(&mut self, headings: &[Heading]) {
        self.outline = headings.to_vec();
    }

    fn update_highlights(&mut self, highlights: &HighlightMap) {
        self.highlights = highlights.clone();
    }
}

struct App<'d> {
    path: PathBuf,
    display_name: String,
    rope: Rope,
    lines: Vec<Cow<'static, str>>,
    annotator: Annotator<'d>,
    palette: Palette,
    view: View,
    show_outline: bool,
    scroll: u16,
}

impl<'d> App<'d> {
    fn new(path: PathBuf, config: &Config, dictionary: Option<&'d dyn Dictionary>) -> Result<Self> {
        let annotator = Annotator::new(dictionary).with_options(AnnotatorOptions {
            include_spaces: config.count_spaces,
        });

        let mut app = Self {
            display_name: display_name(&path, &config.workspace_dir),
            show_outline: config.shows_outline(&path),
            path,
            rope: Rope::from(""),
            lines: Vec::new(),
            annotator,
            palette: Palette::new(config.theme),
            view: View::default(),
            scroll: 0,
        };
        app.reload()?;
        Ok(app)
    }

    fn reload(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;
        self.rope = Rope::from(content);
        self.lines = rope_lines(&self.rope);
        self.scroll = self.scroll.min(self.max_scroll());
        self.annotate();
        Ok(())
    }

    fn annotate(&mut self) {
        let base = base_highlights(&parse_rope(&self.rope));
        let annotated = self.annotator.annotate_rope(&self.rope, &base);
        self.annotator.publish(&annotated, &mut self.view);
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn toggle_outline(&mut self) {
        self.show_outline = !self.show_outline;
    }

    fn status_text(&self) -> String {
        format!(
            "{} · {} words · {} chars",
            self.display_name,
            thousands(self.view.stats.words),
            thousands(self.view.stats.characters)
        )
    }
}

/// Workspace-relative name for files inside the workspace, file name otherwise.
fn display_name(path: &Path, workspace: &Path) -> String {
    path.strip_prefix(workspace)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .map(|rel| rel.to_string())
        .or_else(|| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Paints highlights over a line in order, so later spans win where they
/// overlap earlier ones.
fn styled_line<'a>(line: &'a str, highlights: &[Highlight], palette: &Palette) -> Line<'a> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut cells = vec![palette.base(); line.len()];
    for h in highlights {
        let end = h.end.min(line.len());
        let style = palette.category(&h.category);
        for cell in cells.iter_mut().take(end).skip(h.start) {
            *cell = cell.patch(style);
        }
    }

    let mut spans = Vec::new();
    let mut start = 0;
    for i in 1..=line.len() {
        if i == line.len() || (line.is_char_boundary(i) && cells[i] != cells[start]) {
            spans.push(Span::styled(&line[start..i], cells[start]));
            start = i;
        }
    }
    Line::from(spans)
}

fn init_logging() -> Result<()> {
    let log_path = Config::log_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PROSAIC_LOG", "warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_dictionary(config: &Config) -> Option<WordList> {
    let path = config.dictionary()?;
    match WordList::load(path) {
        Ok(words) => Some(words.ignore_case()),
        Err(e) => {
            log::warn!("Spell check disabled: {e}");
            None
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let mut config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };

    let path = match args.len() {
        2 => PathBuf::from(&args[1]),
        1 => {
            if let Err(e) = config.ensure_workspace() {
                eprintln!(
                    "Error: Could not set up workspace '{}': {e}",
                    config.workspace_dir.display()
                );
                process::exit(1);
            }
            config
                .last_file()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config.notes_path())
        }
        _ => {
            eprintln!("Usage: {} [FILE]", args[0]);
            process::exit(1);
        }
    };

    if !path.is_file() {
        eprintln!("Error: '{}' is not a readable file", path.display());
        eprintln!("Usage: {} [FILE]", args[0]);
        process::exit(1);
    }

    if config.set_last_file(&path)
        && let Err(e) = config.save()
    {
        log::warn!("Failed to remember last file: {e}");
    }

    let dictionary = load_dictionary(&config);
    let mut app = App::new(
        path,
        &config,
        dictionary.as_ref().map(|d| d as &dyn Dictionary),
    )?;
    log::info!("Opened {}", app.path.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Char('o') => app.toggle_outline(),
                KeyCode::Char('r') => {
                    if let Err(e) = app.reload() {
                        log::warn!("Reload of {} failed: {e}", app.path.display());
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let body = if app.show_outline {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(rows[0])
    };

    let palette = &app.palette;
    if app.show_outline {
        let items: Vec<ListItem> = app
            .view
            .outline
            .iter()
            .map(|h| {
                let indent = "  ".repeat(usize::from(h.level.saturating_sub(1)));
                ListItem::new(format!("{indent}{}", h.text))
            })
            .collect();
        let outline = List::new(items)
            .style(palette.base())
            .block(Block::default().borders(Borders::ALL).title("Outline"));
        f.render_widget(outline, body[0]);
    }

    let text: Vec<Line> = app
        .lines
        .iter()
        .enumerate()
        .map(|(row, line)| styled_line(line, app.view.highlights.get(row), palette))
        .collect();
    let editor = Paragraph::new(text)
        .style(palette.base())
        .scroll((app.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(Line::styled(
            app.display_name.as_str(),
            palette.accent(),
        )));
    f.render_widget(editor, body[body.len() - 1]);

    let status = Line::from(vec![
        Span::styled(app.status_text(), palette.muted()),
        Span::styled("  q: Quit | j/k: Scroll | o: Outline | r: Reload", Style::default()),
    ]);
    f.render_widget(Paragraph::new(status).style(palette.muted()), rows[1]);
}
