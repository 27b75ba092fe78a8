// In-memory fleet of motos mirrored to a JSON blob on disk
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use thiserror::Error;

use super::models::{FleetSummary, Moto, MotoPatch, STATUS_ATIVA};
use super::storage::{read_fleet, write_fleet};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A moto with id {0} already exists")]
    DuplicateId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

struct Inner {
    motos: Vec<Moto>,
    // Gate for persistence writes: mutations that land before the initial
    // load has read the blob must not clobber it with a partial collection.
    loaded: bool,
}

/// Authoritative collection of motos. Mutations update memory synchronously
/// and hand a snapshot to a detached writer thread; callers never wait on
/// disk. Memory remains the source of truth if a write fails.
pub struct FleetStore {
    inner: Arc<Mutex<Inner>>,
    path: PathBuf,
}

impl Clone for FleetStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            path: self.path.clone(),
        }
    }
}

impl FleetStore {
    /// Create a store bound to a blob path. Empty and not loaded until
    /// `load` runs.
    pub fn open(path: PathBuf) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                motos: Vec::new(),
                loaded: false,
            })),
            path,
        }
    }

    /// One-time initialization: decode the persisted blob, or seed the two
    /// sample records and write them out on first run. Storage failures are
    /// logged and absorbed; the store always comes up loaded and usable
    /// (empty on an unreadable blob, which the next mutation overwrites).
    pub fn load(&self) {
        let motos = match read_fleet(&self.path) {
            Ok(Some(motos)) => motos,
            Ok(None) => {
                let seeded = sample_fleet();
                if let Err(e) = write_fleet(&self.path, &seeded) {
                    log::error!(
                        "Failed to write seed fleet to {}: {}",
                        self.path.display(),
                        e
                    );
                }
                seeded
            }
            Err(e) => {
                log::error!("Failed to read fleet from {}: {}", self.path.display(), e);
                Vec::new()
            }
        };

        let mut inner = self.inner.lock().unwrap();
        inner.motos = motos;
        inner.loaded = true;
        log::info!("Fleet loaded: {} motos", inner.motos.len());
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.lock().unwrap().loaded
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a moto. The id must not already be present.
    pub fn add(&self, moto: Moto) -> StoreResult<()> {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.motos.iter().any(|m| m.id == moto.id) {
                return Err(StoreError::DuplicateId(moto.id));
            }
            inner.motos.push(moto);
        }
        self.schedule_persist();
        Ok(())
    }

    /// Merge the patch over the stored record with the same id and stamp
    /// `dataAtualizacao`. Returns the updated record, or `None` (and leaves
    /// the collection untouched) when the id is absent.
    pub fn update(&self, patch: MotoPatch) -> Option<Moto> {
        let updated = {
            let mut inner = self.inner.lock().unwrap();
            let moto = inner.motos.iter_mut().find(|m| m.id == patch.id)?;
            if let Some(placa) = patch.placa {
                moto.placa = placa;
            }
            if let Some(zona) = patch.zona {
                moto.zona = zona;
            }
            if let Some(status) = patch.status {
                moto.status = status;
            }
            if let Some(observacoes) = patch.observacoes {
                moto.observacoes = Some(observacoes);
            }
            moto.data_atualizacao = Some(Utc::now().to_rfc3339());
            moto.clone()
        };
        self.schedule_persist();
        Some(updated)
    }

    /// Remove the moto with the given id; no-op when absent.
    pub fn remove(&self, id: &str) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.motos.retain(|m| m.id != id);
        }
        self.schedule_persist();
    }

    /// First record with a matching id, if any. Read-only.
    pub fn get(&self, id: &str) -> Option<Moto> {
        let inner = self.inner.lock().unwrap();
        inner.motos.iter().find(|m| m.id == id).cloned()
    }

    /// Snapshot of the collection in insertion order.
    pub fn all(&self) -> Vec<Moto> {
        self.inner.lock().unwrap().motos.clone()
    }

    /// Drop every record (settings screen "Limpar Dados").
    pub fn clear(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.motos.clear();
        }
        self.schedule_persist();
    }

    /// Counts for the home screen stat cards.
    pub fn summary(&self) -> FleetSummary {
        let inner = self.inner.lock().unwrap();
        FleetSummary {
            total: inner.motos.len(),
            ativas: inner
                .motos
                .iter()
                .filter(|m| m.status == STATUS_ATIVA)
                .count(),
        }
    }

    /// Fire-and-forget rewrite of the full collection. Each write carries
    /// the snapshot taken at schedule time; racing completions resolve as
    /// last write wins. Failures are logged, never surfaced.
    fn schedule_persist(&self) {
        let snapshot = {
            let inner = self.inner.lock().unwrap();
            if !inner.loaded {
                return;
            }
            inner.motos.clone()
        };
        let path = self.path.clone();
        thread::spawn(move || {
            if let Err(e) = write_fleet(&path, &snapshot) {
                log::warn!("Failed to persist fleet to {}: {}", path.display(), e);
            }
        });
    }
}

/// The two fixed records seeded on first run.
pub fn sample_fleet() -> Vec<Moto> {
    let now = Utc::now().to_rfc3339();
    vec![
        Moto {
            id: "1".to_string(),
            placa: "ABC1D23".to_string(),
            zona: "A1".to_string(),
            status: "Ativa".to_string(),
            observacoes: Some("Moto em perfeito estado".to_string()),
            data_registro: Some(now.clone()),
            data_atualizacao: None,
        },
        Moto {
            id: "2".to_string(),
            placa: "XYZ9F87".to_string(),
            zona: "B2".to_string(),
            status: "Em Manutenção".to_string(),
            observacoes: Some("Necessita revisão no motor".to_string()),
            data_registro: Some(now),
            data_atualizacao: None,
        },
    ]
}
