// Project folders on disk.
//
// Every project gets a fixed hierarchy under `<root>/<year>/`. Time entries may
// point at a source file below the same root. Removal only ever touches paths
// that canonicalise to somewhere inside the root.
//
// Callers treat every operation here as a best-effort side effect: failures are
// returned so they can be logged, never to fail the surrounding request.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

pub const FOLDER_TEMPLATE: &[&str] = &[
    "01_Projektmanagement/01_Abklärung",
    "01_Projektmanagement/02_Anfragen/01_Eingehende_Offerten",
    "01_Projektmanagement/02_Anfragen/02_Eigene_Anfragen",
    "01_Projektmanagement/03_Angebot",
    "01_Projektmanagement/04_Bestellungen",
    "01_Projektmanagement/05_Lieferscheine",
    "01_Projektmanagement/06_Auftrag/01_Offerten",
    "01_Projektmanagement/06_Auftrag/02_Bestellung",
    "01_Projektmanagement/06_Auftrag/03_Vertrag",
    "01_Projektmanagement/07_Terminplan",
    "01_Projektmanagement/08_Korrespondenz",
    "01_Projektmanagement/09_Besprechungen/01_Protokolle",
    "01_Projektmanagement/10_Fotos",
    "02_Technik/01_Mechanik_CAD/01_SolidWorks",
    "02_Technik/01_Mechanik_CAD/02_Fertigung/01_Extern",
    "02_Technik/01_Mechanik_CAD/02_Fertigung/02_Intern",
    "02_Technik/01_Mechanik_CAD/03_Berechnungen",
    "02_Technik/02_Automation_Software/01_Elektroplanung/01_Schemas",
    "02_Technik/02_Automation_Software/01_Elektroplanung/02_Klemmenplaene_Stuecklisten",
    "02_Technik/02_Automation_Software/02_Software/01_SPS",
    "02_Technik/02_Automation_Software/02_Software/02_HMI_SCADA",
    "02_Technik/02_Automation_Software/02_Software/03_Antriebe",
    "02_Technik/02_Automation_Software/02_Software/04_Skripte_Tools",
    "03_Kaufmännisch/03_Rechnungen/01_Eingang",
    "03_Kaufmännisch/03_Rechnungen/02_Ausgang",
    "99_Archiv",
];

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid slug pattern"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("valid separator pattern"));

#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is outside the projects root", .0.display())]
    OutsideRoot(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> FilesystemError + '_ {
    move |source| FilesystemError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// `"Neue Steuerung V2.0"` -> `"Neue_Steuerung_V20"`.
pub fn slugify(text: &str) -> String {
    let cleaned = DISALLOWED.replace_all(text.trim(), "");
    SEPARATORS.replace_all(&cleaned, "_").into_owned()
}

/// Sequence number encoded in a folder name ending in `_<year><NNN>`.
fn folder_sequence(name: &str, year: i32) -> Option<u32> {
    let code = name.rsplit('_').next()?;
    let sequence = code.strip_prefix(&year.to_string())?;
    if sequence.len() < 3 || !sequence.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    sequence.parse().ok()
}

#[derive(Debug, Clone)]
pub struct ProjectFiles {
    root: PathBuf,
    // Held from the sequence scan until the project root exists.
    sequence_lock: Arc<Mutex<()>>,
}

impl ProjectFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sequence_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates `<root>/<year>/<Title>_<projectId>_<Firm>_<year><NNN>` and the
    /// template below it. `NNN` continues after the highest sequence of the year.
    pub async fn provision_project_folders(
        &self,
        customer_firm: &str,
        project_id: i64,
        project_title: &str,
        year: i32,
    ) -> Result<PathBuf, FilesystemError> {
        let year_dir = self.root.join(year.to_string());
        fs::create_dir_all(&year_dir)
            .await
            .map_err(io_error(&year_dir))?;

        let project_root = {
            let _sequence = self.sequence_lock.lock().await;
            let sequence = self.highest_sequence(&year_dir, year).await? + 1;
            let folder_name = format!(
                "{}_{}_{}_{}{:03}",
                slugify(project_title),
                project_id,
                slugify(customer_firm),
                year,
                sequence
            );
            let project_root = year_dir.join(folder_name);
            fs::create_dir(&project_root)
                .await
                .map_err(io_error(&project_root))?;
            project_root
        };

        for relative in FOLDER_TEMPLATE {
            let folder = project_root.join(relative);
            fs::create_dir_all(&folder)
                .await
                .map_err(io_error(&folder))?;
        }
        Ok(project_root)
    }

    async fn highest_sequence(&self, year_dir: &Path, year: i32) -> Result<u32, FilesystemError> {
        let mut highest = 0;
        let mut entries = fs::read_dir(year_dir).await.map_err(io_error(year_dir))?;
        while let Some(entry) = entries.next_entry().await.map_err(io_error(year_dir))? {
            let is_dir = entry
                .file_type()
                .await
                .map_err(io_error(&entry.path()))?
                .is_dir();
            if !is_dir {
                continue;
            }
            if let Some(sequence) = entry.file_name().to_str().and_then(|name| folder_sequence(name, year)) {
                highest = highest.max(sequence);
            }
        }
        Ok(highest)
    }

    /// Removes a time entry's source file. Returns whether a file was deleted.
    pub async fn remove_source_file(&self, path: &str) -> Result<bool, FilesystemError> {
        let Some(resolved) = self.resolve_inside_root(path).await? else {
            return Ok(false);
        };
        let metadata = fs::metadata(&resolved).await.map_err(io_error(&resolved))?;
        if !metadata.is_file() {
            return Ok(false);
        }
        fs::remove_file(&resolved)
            .await
            .map_err(io_error(&resolved))?;
        Ok(true)
    }

    /// Removes a project's folder tree. Returns whether a folder was deleted.
    pub async fn remove_project_folder(&self, path: &str) -> Result<bool, FilesystemError> {
        let Some(resolved) = self.resolve_inside_root(path).await? else {
            return Ok(false);
        };
        let metadata = fs::metadata(&resolved).await.map_err(io_error(&resolved))?;
        if !metadata.is_dir() {
            return Ok(false);
        }
        fs::remove_dir_all(&resolved)
            .await
            .map_err(io_error(&resolved))?;
        Ok(true)
    }

    /// Canonical form of `path` (relative paths hang off the root), or `None`
    /// when it does not exist.
    async fn resolve_inside_root(&self, path: &str) -> Result<Option<PathBuf>, FilesystemError> {
        let root = match fs::canonicalize(&self.root).await {
            Ok(root) => root,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&self.root)(err)),
        };

        let candidate = Path::new(path);
        let candidate = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            root.join(candidate)
        };
        let resolved = match fs::canonicalize(&candidate).await {
            Ok(resolved) => resolved,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&candidate)(err)),
        };

        if resolved == root || !resolved.starts_with(&root) {
            return Err(FilesystemError::OutsideRoot(resolved));
        }
        Ok(Some(resolved))
    }
}
