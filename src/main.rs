//! Plotterm - a terminal calculator and function plotter.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plotterm::app::App;
use plotterm::config::{AppConfig, DEFAULT_MAX_SAMPLES};
use plotterm::history::DEFAULT_HISTORY_CAPACITY;
use plotterm::sampling::{DEFAULT_RANGE_TEXT, DEFAULT_STEP_TEXT};
use plotterm::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "plotterm")]
#[command(about = "A terminal calculator that evaluates and plots expressions", long_about = None)]
struct Args {
    /// Evaluate an expression, print the result and exit (repeatable)
    #[arg(long = "eval", value_name = "EXPR")]
    eval: Vec<String>,

    /// Plot an expression of x, print the samples and exit
    #[arg(long, value_name = "EXPR")]
    plot: Option<String>,

    /// Plotting range as start,end
    #[arg(long, default_value = DEFAULT_RANGE_TEXT, allow_hyphen_values = true)]
    range: String,

    /// Distance between samples
    #[arg(long, default_value = DEFAULT_STEP_TEXT, allow_hyphen_values = true)]
    step: String,

    /// Number of evaluations kept in the history panel
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history: usize,

    /// Largest number of samples a single plot may take
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLES)]
    max_samples: usize,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log filter used with --log (RUST_LOG takes precedence)
    #[arg(long, default_value = "debug")]
    log_level: String,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            history_capacity: self.history,
            max_samples: self.max_samples,
            ..AppConfig::default()
        }
    }

    fn is_batch(&self) -> bool {
        !self.eval.is_empty() || self.plot.is_some()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter =
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Plotterm");
    }

    if args.is_batch() {
        let ok = run_batch(&args);
        tracing::info!("Plotterm exited");
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.config());
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Plotterm exited");

    Ok(())
}

/// Evaluate and plot from the command line. Returns false on any failure.
fn run_batch(args: &Args) -> bool {
    let mut app = App::new(args.config());
    let mut ok = true;

    for expression in &args.eval {
        let blank = expression.trim().is_empty();
        app.expression_input = expression.clone();
        app.calculate_expression();
        if blank {
            eprintln!("{}", app.output);
            ok = false;
        } else {
            println!("{}", app.output);
        }
    }

    if let Some(expression) = &args.plot {
        app.polynomial_input = expression.clone();
        app.range_input = args.range.clone();
        app.step_input = args.step.clone();

        let series = app
            .plot_expression()
            .and_then(|handle| app.plots.series().iter().find(|s| s.handle() == handle));
        match series {
            Some(series) => {
                for point in series.points() {
                    println!("{}\t{}", point.x, point.y);
                }
            },
            None => {
                eprintln!("{}", app.output);
                ok = false;
            },
        }
    }

    ok
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        return Ok(())
                    },

                    // Field navigation
                    (_, KeyCode::Tab) => app.focus_next(),
                    (_, KeyCode::BackTab) => app.focus_prev(),

                    // Submit
                    (_, KeyCode::Enter) => app.submit(),

                    // Plot management
                    (_, KeyCode::F(2)) => app.remove_oldest_plot(),
                    (_, KeyCode::F(3)) => app.remove_all_plots(),
                    (_, KeyCode::F(4)) => app.toggle_markers(),

                    // Features
                    (_, KeyCode::F(5)) => app.copy_history(),
                    (_, KeyCode::F(6)) => app.cycle_theme(),

                    // Editing
                    (_, KeyCode::Backspace) => app.backspace(),
                    (KeyModifiers::NONE, KeyCode::Char(c))
                    | (KeyModifiers::SHIFT, KeyCode::Char(c)) => app.input(c),

                    _ => {},
                }
            }
        }
    }
}
