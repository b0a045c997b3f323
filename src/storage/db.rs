// Database - Abstraction RocksDB
use rocksdb::{Options, DB};
use std::path::Path;
use std::sync::Arc;

/// Wrapper autour de RocksDB
pub struct Database {
    db: Arc<DB>,
}

impl Database {
    /// Ouvre ou crée une base de données
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        // Limiter l'accumulation de fichiers pour éviter "Too many open files"
        opts.set_keep_log_file_num(5);
        opts.set_max_manifest_file_size(64 * 1024 * 1024);
        opts.set_max_background_jobs(2);

        let db = DB::open(&opts, path).map_err(|e| DatabaseError::OpenFailed(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Lit une valeur
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, DatabaseError> {
        self.db
            .get(key)
            .map_err(|e| DatabaseError::ReadFailed(e.to_string()))
    }

    /// Écrit une valeur
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<(), DatabaseError> {
        self.db
            .put(key, value)
            .map_err(|e| DatabaseError::WriteFailed(e.to_string()))
    }

    /// Vérifie si une clé existe
    pub fn exists(&self, key: &[u8]) -> Result<bool, DatabaseError> {
        Ok(self.get(key)?.is_some())
    }

    /// Itère en ordre croissant sur toutes les clés avec un préfixe donné,
    /// returning Result for each item so the caller handles read errors explicitly.
    /// The iterator is a plain Rust iterator: dropping it releases the cursor
    /// on every exit path, including early return.
    pub fn prefix_iterator<'a>(
        &'a self,
        prefix: &'a [u8],
    ) -> impl Iterator<Item = Result<(Vec<u8>, Vec<u8>), DatabaseError>> + 'a {
        let iter = self.db.prefix_iterator(prefix);
        iter.map(|item| {
            item.map(|(key, value)| (key.to_vec(), value.to_vec()))
                .map_err(|e| DatabaseError::ReadFailed(e.to_string()))
        })
        .take_while(move |result| match result {
            Ok((key, _)) => key.starts_with(prefix),
            // Continue iteration on error to let caller handle it
            Err(_) => true,
        })
    }
}

/// Erreurs de base de données
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Échec d'ouverture de la DB: {0}")]
    OpenFailed(String),

    #[error("Échec de lecture: {0}")]
    ReadFailed(String),

    #[error("Échec d'écriture: {0}")]
    WriteFailed(String),
}
