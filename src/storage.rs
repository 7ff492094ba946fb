// src/storage.rs
//
// Almacén clave-valor local. Cada entrada es un documento JSON.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STATS_KEY: &str = "stats";
pub const EXAM_KEY: &str = "exam";

/// Variable de entorno para cambiar la carpeta de datos
pub const DATA_DIR_ENV: &str = "EXAM_TRAINER_DATA_DIR";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("error de E/S en {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no se pudo serializar la entrada {key}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Serializa y guarda. Un fallo de escritura se registra y se ignora:
/// el estado sigue en memoria hasta la próxima carga.
pub fn persist<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(|source| StorageError::Json {
            key: key.to_string(),
            source,
        })
        .and_then(|json| store.set_string(key, json));
    if let Err(e) = result {
        log::warn!("could not persist '{key}': {e}");
    }
}

/// Interpreta una entrada guardada como objeto JSON; si no lo es, `None`
pub(crate) fn json_object(text: &str, entry: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(_) => {
            log::warn!("stored {entry} is not a JSON object, using defaults");
            None
        }
        Err(e) => {
            log::warn!("could not parse stored {entry}, using defaults: {e}");
            None
        }
    }
}

/// Lee un campo de la entrada; ausente o mal formado -> `None`
pub(crate) fn json_field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    entry: &str,
    key: &str,
) -> Option<T> {
    let value = obj.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("stored {entry} field '{key}' is malformed, using default: {e}");
            None
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Guarda cada clave en `<dir>/<clave>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                None
            }
        }
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        // Escribe a un temporal y renombra, para no dejar un JSON a medias
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| io_error(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_error(&path, e))?;
        Ok(())
    }
}

/// Almacén en memoria (tests, o cuando no hay carpeta de datos)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Carpeta de datos: `$EXAM_TRAINER_DATA_DIR` o `<data_dir>/exam_trainer`
pub fn default_data_dir() -> Option<PathBuf> {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|d| d.join("exam_trainer")))
}

/// Almacén por defecto de la aplicación
pub fn open_default_store() -> Box<dyn KeyValueStore> {
    match default_data_dir() {
        Some(dir) => {
            log::info!("storing progress in {}", dir.display());
            Box::new(FileStore::new(dir))
        }
        None => {
            log::warn!("no data directory available, progress will not survive a restart");
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_reports_missing_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get_string(STATS_KEY), None);

        store
            .set_string(STATS_KEY, "{\"totalAnswered\":3}".into())
            .expect("write ok");
        assert_eq!(
            store.get_string(STATS_KEY).as_deref(),
            Some("{\"totalAnswered\":3}")
        );
        assert!(dir.path().join("nested").join("stats.json").exists());
        assert!(!dir.path().join("nested").join("stats.json.tmp").exists());
    }

    #[test]
    fn persist_writes_json() {
        let mut store = MemoryStore::default();
        persist(&mut store, EXAM_KEY, &vec![1, 2, 3]);
        assert_eq!(store.get_string(EXAM_KEY).as_deref(), Some("[1,2,3]"));
    }
}
