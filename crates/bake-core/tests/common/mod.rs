//! Shared fixtures: throwaway site source folders.
#![allow(dead_code)]

use bake_core::config::{ConfigLoader, EnvironmentLayer};
use bake_core::EffectiveConfiguration;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// `bake.properties` of the sample site.
pub const SITE_PROPERTIES: &str = "\
site.host=http://www.jbake.org
site.about=Bake a site café style
template.masterindex.file=index.ftl
markdown.extensions=HARDWRAPS,AUTOLINKS,FENCED_CODE_BLOCKS,DEFINITIONS
";

/// Source folder containing `bake.properties` and the usual folders.
pub fn sample_site() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("bake.properties"), SITE_PROPERTIES).expect("write bake.properties");
    for folder in ["assets", "templates", "content"] {
        fs::create_dir_all(dir.path().join(folder)).expect("create folder");
    }
    dir
}

/// Load with an empty environment so the host environment cannot leak in.
pub fn load(source: &Path) -> EffectiveConfiguration {
    ConfigLoader::new()
        .with_environment(EnvironmentLayer::empty())
        .load(source)
        .expect("load config")
}

/// In-memory log sink shared by every writer the subscriber makes.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber and return its result plus
/// everything logged at warn or above.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs.contents())
}
