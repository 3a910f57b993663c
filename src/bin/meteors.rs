use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use wordfall::charts;
use wordfall::clean::{clean_records, Meteorite};
use wordfall::record::load_records;
use wordfall::report::{render_text, Report};

const HISTOGRAM_BINS: usize = 12;

/// meteorite-landings data explorer: cleaning, aggregates, and terminal charts
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// path to the meteorite-landings CSV
    csv: PathBuf,

    /// how many rows the top-N queries return
    #[clap(short = 't', long, default_value_t = 10)]
    top: usize,

    /// emit the report as pretty-printed JSON instead of text
    #[clap(long)]
    json: bool,

    /// open the interactive chart viewer after printing the report
    #[clap(long)]
    charts: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum ChartTab {
    #[strum(serialize = "Mass distribution (kg, log buckets)")]
    MassHistogram,
    #[strum(serialize = "Fell vs Found")]
    FallCounts,
    #[strum(serialize = "Most common classifications")]
    Classifications,
    #[strum(serialize = "Geographic spread")]
    GeoScatter,
}

impl ChartTab {
    const ALL: [ChartTab; 4] = [
        ChartTab::MassHistogram,
        ChartTab::FallCounts,
        ChartTab::Classifications,
        ChartTab::GeoScatter,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> ChartTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> ChartTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Everything the viewer needs, computed once up front.
struct ChartData {
    histogram: Vec<(String, u64)>,
    fall_counts: Vec<(String, u64)>,
    class_counts: Vec<(String, u64)>,
    fell_points: Vec<(f64, f64)>,
    other_points: Vec<(f64, f64)>,
    lon_bounds: (f64, f64),
    lat_bounds: (f64, f64),
}

impl ChartData {
    fn build(records: &[Meteorite], top: usize) -> Self {
        let (fell_points, other_points) = charts::scatter_split(records);
        let all_points: Vec<(f64, f64)> = fell_points
            .iter()
            .chain(other_points.iter())
            .cloned()
            .collect();
        let (lon_bounds, lat_bounds) = charts::geo_bounds(&all_points);

        Self {
            histogram: charts::log_mass_histogram(records, HISTOGRAM_BINS),
            fall_counts: wordfall::report::fall_counts(records)
                .into_iter()
                .map(|(k, v)| (k, v as u64))
                .collect(),
            class_counts: wordfall::report::classification_counts(records, top)
                .into_iter()
                .map(|(k, v)| (k, v as u64))
                .collect(),
            fell_points,
            other_points,
            lon_bounds,
            lat_bounds,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = load_records(&cli.csv)?;
    let cleaned = clean_records(&raw);
    let report = Report::build(&cleaned, cli.top);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_text(&report, io::stdout().lock())?;
    }

    if cli.charts {
        run_chart_viewer(&cleaned, cli.top)?;
    }

    Ok(())
}

fn run_chart_viewer(records: &[Meteorite], top: usize) -> Result<(), Box<dyn Error>> {
    let data = ChartData::build(records, top);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = chart_loop(&mut terminal, &data);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn chart_loop<B: Backend>(terminal: &mut Terminal<B>, data: &ChartData) -> Result<(), Box<dyn Error>> {
    let mut tab = ChartTab::MassHistogram;

    loop {
        terminal.draw(|f| draw_chart(f, data, tab))?;

        match event::read()? {
            Event::Key(key) => match handle_key(key, tab) {
                Some(next_tab) => tab = next_tab,
                None => break,
            },
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    Ok(())
}

/// Returns the tab to show next, or `None` to quit the viewer.
fn handle_key(key: KeyEvent, tab: ChartTab) -> Option<ChartTab> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => None,
        KeyCode::Left => Some(tab.prev()),
        KeyCode::Right | KeyCode::Tab => Some(tab.next()),
        KeyCode::Char('1') => Some(ChartTab::MassHistogram),
        KeyCode::Char('2') => Some(ChartTab::FallCounts),
        KeyCode::Char('3') => Some(ChartTab::Classifications),
        KeyCode::Char('4') => Some(ChartTab::GeoScatter),
        _ => Some(tab),
    }
}

fn draw_chart(f: &mut Frame, data: &ChartData, tab: ChartTab) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!(
        "{} ({}/{})",
        tab,
        tab.index() + 1,
        ChartTab::ALL.len()
    ))
    .block(Block::default().borders(Borders::ALL).title("Meteorites"))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    match tab {
        ChartTab::MassHistogram => render_bars(f, chunks[1], &data.histogram, Color::Blue),
        ChartTab::FallCounts => render_bars(f, chunks[1], &data.fall_counts, Color::Green),
        ChartTab::Classifications => render_bars(f, chunks[1], &data.class_counts, Color::Magenta),
        ChartTab::GeoScatter => render_scatter(f, chunks[1], data),
    }

    let instructions =
        Paragraph::new("(1-4) pick chart | \u{2190}/\u{2192} or Tab cycle | (q)uit (esc)ape")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[2]);
}

fn render_bars(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    bars: &[(String, u64)],
    color: Color,
) {
    if bars.is_empty() {
        let empty = Paragraph::new("No data to chart.")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let labeled: Vec<(&str, u64)> = bars.iter().map(|(l, c)| (l.as_str(), *c)).collect();
    let bar_width = (area.width.saturating_sub(2) / labeled.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(3, 12);

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL))
        .data(&labeled)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color));

    f.render_widget(chart, area);
}

fn render_scatter(f: &mut Frame, area: ratatui::layout::Rect, data: &ChartData) {
    let datasets = vec![
        Dataset::default()
            .name("Fell")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&data.fell_points),
        Dataset::default()
            .name("Found")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&data.other_points),
    ];

    let (lon_lo, lon_hi) = data.lon_bounds;
    let (lat_lo, lat_hi) = data.lat_bounds;

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Longitude")
                .bounds([lon_lo, lon_hi])
                .labels([
                    Line::from(format!("{lon_lo:.0}")),
                    Line::from(format!("{lon_hi:.0}")),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Latitude")
                .bounds([lat_lo, lat_hi])
                .labels([
                    Line::from(format!("{lat_lo:.0}")),
                    Line::from(format!("{lat_hi:.0}")),
                ]),
        );

    f.render_widget(chart, area);
}
