use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::logging;
use crate::model::ActiveFilter;
use crate::palette_service::{PaletteService, ServiceError};
use crate::state::PaletteEvent;
use crate::transport::handle_json;
use crate::view::{PaletteView, ResultsBody};

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Service(ServiceError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
    pub fixture_path: Option<PathBuf>,
    pub query: Option<String>,
    pub filter: ActiveFilter,
    pub stdio: bool,
}

pub fn parse_cli_args(args: &[String]) -> Result<RuntimeOptions, String> {
    let mut options = RuntimeOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                options.config_path = Some(PathBuf::from(required_value(&mut iter, arg)?));
            }
            "--fixture" => {
                options.fixture_path = Some(PathBuf::from(required_value(&mut iter, arg)?));
            }
            "--query" => options.query = Some(required_value(&mut iter, arg)?.to_string()),
            "--filter" => {
                let raw = required_value(&mut iter, arg)?;
                options.filter = ActiveFilter::parse(raw).ok_or_else(|| {
                    format!("unknown filter '{raw}'. Use All, Files, People, Chats, or Lists.")
                })?;
            }
            "--stdio" => options.stdio = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    if options.stdio && options.query.is_some() {
        return Err("--stdio and --query cannot be combined".to_string());
    }
    if options.query.is_none() {
        options.stdio = true;
    }

    Ok(options)
}

fn required_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

pub fn run_with_options(options: RuntimeOptions) -> Result<(), RuntimeError> {
    match logging::init(&logging::default_dir()) {
        Ok(path) => logging::info(&format!("log file {}", path.display())),
        Err(error) => eprintln!("[quickfind-core] logging disabled: {error}"),
    }

    let mut config = config::load(options.config_path.as_deref()).map_err(|error| {
        logging::error(&format!("config load failed: {error}"));
        RuntimeError::from(error)
    })?;
    if options.fixture_path.is_some() {
        config.fixture_path = options.fixture_path.clone();
    }

    let mut service = PaletteService::new(config).map_err(|error| {
        logging::error(&format!("item load failed: {error}"));
        RuntimeError::from(error)
    })?;
    logging::info(&format!(
        "startup items={} config_path={}",
        service.items().len(),
        service.config().config_path.display()
    ));

    match options.query {
        Some(query) => {
            service.dispatch(&PaletteEvent::QueryChanged { query });
            let view = service.dispatch(&PaletteEvent::SelectFilter {
                filter: options.filter,
            });
            print!("{}", render_text(&view));
            Ok(())
        }
        None => run_stdio(&mut service),
    }
}

/// One JSON request per input line, one JSON response per output line.
fn run_stdio(service: &mut PaletteService) -> Result<(), RuntimeError> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_json(service, &line);
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    logging::info("stdin closed; exiting");
    Ok(())
}

/// Plain-text rendering for one-shot queries. A just-cleared palette prints
/// nothing, tabs included.
pub fn render_text(view: &PaletteView) -> String {
    if view.body == ResultsBody::Hidden {
        return String::new();
    }

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|tab| {
            let marker = if tab.selected { "*" } else { "" };
            format!("{marker}{} ({})", tab.label, tab.count)
        })
        .collect();

    let mut out = format!("{}\n", tabs.join("  "));
    match view.body {
        ResultsBody::Hidden => {}
        ResultsBody::Results => {
            for item in &view.results {
                out.push_str(&format!("{:>4}  {}  [{}]", item.id, item.name, item.kind));
                if let Some(details) = &item.details {
                    out.push_str(&format!("  {details}"));
                }
                out.push('\n');
            }
        }
        ResultsBody::NoResults => out.push_str("No results found\n"),
        ResultsBody::TypeSomething => out.push_str("Type something to get started\n"),
    }
    out
}
