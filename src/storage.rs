use crate::model::{Roster, WeekRotation};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub trait Storage {
    /// Charge un roster depuis un support.
    fn load(&self) -> Result<Roster>;
    /// Sauvegarde de manière atomique.
    fn save(&self, roster: &Roster) -> Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Roster vide si le fichier n'existe pas encore ; une erreur de lecture reste une erreur.
    pub fn load_or_default(&self) -> Result<Roster> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no roster file yet");
            return Ok(Roster::default());
        }
        self.load()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Roster> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let roster: Roster =
            serde_json::from_slice(&data).with_context(|| "parsing roster.json")?;
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        write_json_atomic(&self.path, roster)
    }
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct WeekInfo {
    pub week_start: NaiveDate,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

/// Rotations hebdomadaires persistées sur disque, un fichier `<lundi>.json` par semaine.
#[derive(Debug, Clone)]
pub struct WeekStore {
    base_dir: PathBuf,
}

impl WeekStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            base_dir: dir.as_ref().to_path_buf(),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("creating rotation directory {}", self.base_dir.display()))
    }

    fn path_for(&self, week_start: NaiveDate) -> PathBuf {
        self.base_dir.join(format!("{week_start}.json"))
    }

    pub fn exists(&self, week_start: NaiveDate) -> bool {
        self.path_for(week_start).exists()
    }

    /// Crée ou remplace la semaine. En cas de remplacement, `created_at` d'origine est conservé.
    pub fn save(&self, week: &WeekRotation) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.path_for(week.week_start);
        let mut stored = week.clone();
        if path.exists() {
            match self.load(week.week_start) {
                Ok(previous) => stored.created_at = previous.created_at,
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        err = %format!("{err:#}"),
                        "replacing unreadable rotation file"
                    );
                }
            }
        }
        stored.updated_at = Utc::now();
        write_json_atomic(&path, &stored)
            .with_context(|| format!("writing rotation {}", path.display()))?;
        Ok(path)
    }

    pub fn load(&self, week_start: NaiveDate) -> Result<WeekRotation> {
        let path = self.path_for(week_start);
        let data =
            fs::read(&path).with_context(|| format!("reading rotation {}", path.display()))?;
        let week: WeekRotation = serde_json::from_slice(&data)
            .with_context(|| format!("parsing rotation {}", path.display()))?;
        Ok(week)
    }

    pub fn list(&self) -> Result<Vec<WeekInfo>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }
        let mut infos = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read(&path)?;
            let week: WeekRotation = match serde_json::from_slice(&data) {
                Ok(w) => w,
                Err(err) => {
                    warn!(path = %path.display(), %err, "could not parse rotation file");
                    continue;
                }
            };
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            infos.push(WeekInfo {
                week_start: week.week_start,
                path,
                modified,
            });
        }
        infos.sort_by_key(|info| info.week_start);
        Ok(infos)
    }

    /// Supprime la semaine ; `false` si elle n'existait pas.
    pub fn delete(&self, week_start: NaiveDate) -> Result<bool> {
        let path = self.path_for(week_start);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("deleting rotation {}", path.display()))?;
        Ok(true)
    }
}
