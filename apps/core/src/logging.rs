use std::fmt::{Display, Formatter};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

const ACTIVE_LOG: &str = "quickfind.log";
const ROTATE_AT_BYTES: u64 = 1_000_000;
const KEPT_ARCHIVES: usize = 5;

static SINK: OnceLock<Mutex<File>> = OnceLock::new();
static PANIC_HOOK: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.pad(tag)
    }
}

pub fn default_dir() -> PathBuf {
    crate::config::stable_app_data_dir().join("logs")
}

/// Opens `<dir>/quickfind.log` for appending, rotating it first when it has
/// grown past the size limit. Returns the active log path. Later calls keep
/// the first sink.
pub fn init(dir: &Path) -> Result<PathBuf, std::io::Error> {
    fs::create_dir_all(dir)?;
    let active = dir.join(ACTIVE_LOG);
    rotate_if_needed(dir, ROTATE_AT_BYTES)?;

    let file = OpenOptions::new().create(true).append(true).open(&active)?;
    let _ = SINK.set(Mutex::new(file));

    install_panic_hook();
    Ok(active)
}

pub fn info(message: &str) {
    record(Level::Info, message);
}

pub fn warn(message: &str) {
    record(Level::Warn, message);
}

pub fn error(message: &str) {
    record(Level::Error, message);
}

fn record(level: Level, message: &str) {
    let Some(sink) = SINK.get() else {
        return;
    };
    let Ok(mut file) = sink.lock() else {
        return;
    };
    let _ = file.write_all(format_line(unix_secs(), level, message).as_bytes());
    let _ = file.flush();
}

fn format_line(secs: u64, level: Level, message: &str) -> String {
    // One event per line; embedded newlines would split it.
    let flat = message.replace(['\r', '\n'], " ");
    format!("{secs} {level:<5} {flat}\n")
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

fn archive_path(dir: &Path, slot: usize) -> PathBuf {
    dir.join(format!("quickfind.{slot}.log"))
}

/// Shifts `quickfind.N.log` up by one slot, dropping the oldest, and moves
/// the active log into slot 1.
fn rotate_if_needed(dir: &Path, limit: u64) -> Result<(), std::io::Error> {
    let active = dir.join(ACTIVE_LOG);
    let size = match fs::metadata(&active) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };
    if size < limit {
        return Ok(());
    }

    let oldest = archive_path(dir, KEPT_ARCHIVES);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for slot in (1..KEPT_ARCHIVES).rev() {
        let from = archive_path(dir, slot);
        if from.exists() {
            fs::rename(&from, archive_path(dir, slot + 1))?;
        }
    }
    fs::rename(&active, archive_path(dir, 1))
}

fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .map(str::to_string)
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            match info.location() {
                Some(at) => error(&format!("panic {}:{} {payload}", at.file(), at.line())),
                None => error(&format!("panic {payload}")),
            }
            previous(info);
        }));
    });
}
