use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// Contract of the keyed store the book persists through. The engine behind
/// it is a black box; the book only relies on get/put by key and an explicit
/// flush. Absence of a key is a normal result, not an error. Writes become
/// durable only on flush.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

const STORE_MAGIC: u32 = 0x4b42_5848;
const STORE_VERSION: u16 = 1;

/// File-backed store. All records are loaded at open and held in memory;
/// flush rewrites the file through a temp file and rename, then syncs.
pub struct DiskStore {
    path: PathBuf,
    records: HashMap<Vec<u8>, Vec<u8>>,
    dirty: bool,
}

impl DiskStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let records = if path.exists() {
            Self::read_records(&path)?
        } else {
            // Initialize the file right away so an unusable location fails
            // at open rather than at the first flush.
            let records = HashMap::new();
            Self::write_records(&path, &records)?;
            records
        };

        Ok(Self {
            path,
            records,
            dirty: false,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn read_records(path: &Path) -> Result<HashMap<Vec<u8>, Vec<u8>>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open store file {:?}", path))?;
        let mut reader = BufReader::new(file);

        let magic = reader.read_u32::<LittleEndian>()?;
        if magic != STORE_MAGIC {
            bail!("Not a book store file: {:?}", path);
        }
        let version = reader.read_u16::<LittleEndian>()?;
        if version != STORE_VERSION {
            bail!("Unsupported store version {} in {:?}", version, path);
        }

        let num_records = reader.read_u32::<LittleEndian>()? as usize;
        let mut records = HashMap::with_capacity(num_records);

        for _ in 0..num_records {
            let key_len = reader.read_u16::<LittleEndian>()? as usize;
            let mut key = vec![0; key_len];
            reader.read_exact(&mut key)?;

            let value_len = reader.read_u32::<LittleEndian>()? as usize;
            let mut value = vec![0; value_len];
            reader.read_exact(&mut value)?;

            records.insert(key, value);
        }

        Ok(records)
    }

    fn write_records(path: &Path, records: &HashMap<Vec<u8>, Vec<u8>>) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create store file {:?}", path))?;
        let mut writer = BufWriter::new(file);

        writer.write_u32::<LittleEndian>(STORE_MAGIC)?;
        writer.write_u16::<LittleEndian>(STORE_VERSION)?;
        writer.write_u32::<LittleEndian>(records.len() as u32)?;

        for (key, value) in records {
            writer.write_u16::<LittleEndian>(key.len() as u16)?;
            writer.write_all(key)?;
            writer.write_u32::<LittleEndian>(value.len() as u32)?;
            writer.write_all(value)?;
        }

        writer.flush()?;
        let file = writer.into_inner().map_err(|err| err.into_error())?;
        file.sync_all()?;

        Ok(())
    }
}

impl KvStore for DiskStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.records.insert(key.to_vec(), value.to_vec());
        self.dirty = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let tmp_path = self.path.with_extension("tmp");
        Self::write_records(&tmp_path, &self.records)?;

        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace store file {:?}", self.path))?;
        self.dirty = false;

        Ok(())
    }
}

/// Map-backed store with no persistence. Flush is a no-op.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.records.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("book-store-{}-{}.db", name, std::process::id()));
        path
    }

    #[test]
    fn test_memory_store_get_put() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(b"missing").unwrap(), None);

        store.put(b"key", b"value").unwrap();
        assert_eq!(store.get(b"key").unwrap(), Some(b"value".to_vec()));

        store.put(b"key", b"updated").unwrap();
        assert_eq!(store.get(b"key").unwrap(), Some(b"updated".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_disk_store_round_trip() {
        let path = temp_store_path("round-trip");
        let _ = fs::remove_file(&path);

        {
            let mut store = DiskStore::open(&path).unwrap();
            assert!(store.is_empty());
            store.put(b"alpha", &[1, 2, 3]).unwrap();
            store.put(&42u64.to_le_bytes(), &[4, 5]).unwrap();
            store.flush().unwrap();
        }

        let store = DiskStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b"alpha").unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.get(&42u64.to_le_bytes()).unwrap(), Some(vec![4, 5]));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_disk_store_unflushed_writes_are_not_durable() {
        let path = temp_store_path("unflushed");
        let _ = fs::remove_file(&path);

        {
            let mut store = DiskStore::open(&path).unwrap();
            store.put(b"key", b"value").unwrap();
        }

        let store = DiskStore::open(&path).unwrap();
        assert_eq!(store.get(b"key").unwrap(), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_disk_store_rejects_foreign_file() {
        let path = temp_store_path("foreign");
        fs::write(&path, b"not a store").unwrap();

        assert!(DiskStore::open(&path).is_err());

        let _ = fs::remove_file(&path);
    }
}
