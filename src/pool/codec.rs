// ABOUTME: Versioned binary on-disk format for the number pool
//
// Layout, all scalars little-endian i32:
//   header:  [version][count][capacity]
//   record:  [number: 12 bytes, NUL-padded][state][owner, -1 = none]
//            [assigned_at: 20 bytes, NUL-padded]
//
// Field widths are explicit so the file does not depend on compiler struct
// layout. Load fails closed on a version mismatch; there is no migration.

use super::{PhoneResource, PhoneState, ResourcePool, INITIAL_CAPACITY};
use crate::binfile::{self, CodecError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Version written to and required from the file header
pub const FORMAT_VERSION: i32 = 1;

/// Width of the number field: 11 digits plus trailing NUL
const NUMBER_FIELD: usize = 12;

/// Width of the assignment-stamp field: `YYYY-MM-DD HH:MM:SS` plus NUL
const STAMP_FIELD: usize = 20;

/// Header bytes: three i32 scalars
const HEADER_SIZE: u64 = 12;

/// Record bytes: number field, state, owner, stamp field
const RECORD_SIZE: u64 = (NUMBER_FIELD + 4 + 4 + STAMP_FIELD) as u64;

/// Serialize the pool to `path`, overwriting any existing file.
///
/// Success means every record was fully written; on failure the file is not
/// guaranteed to be valid.
pub fn save(pool: &ResourcePool, path: &Path) -> Result<(), CodecError> {
    let mut w = BufWriter::new(File::create(path)?);

    binfile::write_i32(&mut w, FORMAT_VERSION)?;
    binfile::write_i32(&mut w, pool.len() as i32)?;
    binfile::write_i32(&mut w, pool.capacity() as i32)?;

    for entry in pool.entries() {
        binfile::write_str_field(&mut w, &entry.number, NUMBER_FIELD)?;
        binfile::write_i32(&mut w, entry.state.code())?;
        binfile::write_i32(&mut w, entry.owner.unwrap_or(-1))?;
        binfile::write_str_field(&mut w, entry.assigned_at.as_deref().unwrap_or(""), STAMP_FIELD)?;
    }

    w.flush()?;
    tracing::info!(path = %path.display(), count = pool.len(), "pool saved");
    Ok(())
}

/// Load `path` into `pool`, replacing its contents.
///
/// Destructive: meant for loading into an empty pool at startup, not for
/// merging. Grows the pool when the stored capacity exceeds the current one.
/// A missing file surfaces as an `Io` error the caller maps to defaults.
pub fn load(pool: &mut ResourcePool, path: &Path) -> Result<(), CodecError> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();
    let mut r = BufReader::new(file);

    let version = binfile::read_i32(&mut r)?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let count = binfile::read_i32(&mut r)?;
    let capacity = binfile::read_i32(&mut r)?;
    if count < 0 || capacity < count {
        return Err(CodecError::Corrupt("header count/capacity out of range"));
    }
    let count = count as usize;

    // The header is untrusted input. Before any allocation sized from it,
    // check that the file actually holds that many records, and that the
    // stored capacity is one doubling could have produced for this count.
    if file_len < HEADER_SIZE + count as u64 * RECORD_SIZE {
        return Err(CodecError::Corrupt("record count exceeds file size"));
    }
    if capacity as usize > INITIAL_CAPACITY.max(count.saturating_mul(2)) {
        return Err(CodecError::Corrupt("header capacity out of range for count"));
    }

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(read_record(&mut r)?);
    }

    pool.grow_to(capacity as usize);
    let slots = pool.entries_mut();
    slots.clear();
    slots.extend(entries);
    pool.set_capacity(pool.capacity().max(capacity as usize));
    tracing::info!(path = %path.display(), count, "pool loaded");
    Ok(())
}

fn read_record<R: std::io::Read>(r: &mut R) -> Result<PhoneResource, CodecError> {
    let number = binfile::read_str_field(r, NUMBER_FIELD)?;
    let state_code = binfile::read_i32(r)?;
    let owner = binfile::read_i32(r)?;
    let stamp = binfile::read_str_field(r, STAMP_FIELD)?;

    let state =
        PhoneState::from_code(state_code).ok_or(CodecError::Corrupt("unknown state code"))?;

    // The owner/stamp fields are meaningful only for ASSIGNED records
    let (owner, assigned_at) = if state == PhoneState::Assigned {
        if owner < 0 {
            return Err(CodecError::Corrupt("assigned record without an owner"));
        }
        (Some(owner), Some(stamp).filter(|s| !s.is_empty()))
    } else {
        (None, None)
    };

    Ok(PhoneResource {
        number,
        state,
        owner,
        assigned_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phoneData.dat");

        let mut pool = ResourcePool::new();
        pool.batch_generate(&["138", "139"], 30);
        pool.bind(3, "13800000002").unwrap();
        pool.bind(7, "13900000010").unwrap();
        save(&pool, &path).unwrap();

        let mut loaded = ResourcePool::new();
        load(&mut loaded, &path).unwrap();

        assert_eq!(loaded.len(), pool.len());
        assert_eq!(loaded.capacity(), pool.capacity());
        for (a, b) in pool.entries().iter().zip(loaded.entries()) {
            assert_eq!(a, b);
        }
        assert_eq!(loaded.count_for(3), 1);
        assert_eq!(loaded.list_for(7), vec!["13900000010"]);
    }

    #[test]
    fn test_empty_pool_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phoneData.dat");

        let pool = ResourcePool::new();
        save(&pool, &path).unwrap();

        let mut loaded = ResourcePool::new();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded.len(), 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let mut pool = ResourcePool::new();
        let err = load(&mut pool, &dir.path().join("absent.dat")).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }

    #[test]
    fn test_version_mismatch_fails_closed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phoneData.dat");

        let mut pool = ResourcePool::new();
        pool.generate_segment("138", 3).unwrap();
        save(&pool, &path).unwrap();

        // Stamp a bogus version over the header
        let mut bytes = std::fs::read(&path).unwrap();
        bytes[..4].copy_from_slice(&9i32.to_le_bytes());
        std::fs::write(&path, bytes).unwrap();

        let mut loaded = ResourcePool::new();
        let err = load(&mut loaded, &path).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnsupportedVersion {
                found: 9,
                expected: FORMAT_VERSION
            }
        ));
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_truncated_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phoneData.dat");

        let mut pool = ResourcePool::new();
        pool.generate_segment("138", 5).unwrap();
        save(&pool, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 10]).unwrap();

        let mut loaded = ResourcePool::new();
        assert!(load(&mut loaded, &path).is_err());
    }

    #[test]
    fn test_absurd_count_header_is_rejected_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phoneData.dat");

        // A 12-byte file claiming billions of records must come back as an
        // error, never as an allocation the process cannot survive
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&(i32::MAX - 1).to_le_bytes());
        bytes.extend_from_slice(&i32::MAX.to_le_bytes());
        std::fs::write(&path, bytes).unwrap();

        let mut pool = ResourcePool::new();
        assert!(matches!(
            load(&mut pool, &path),
            Err(CodecError::Corrupt("record count exceeds file size"))
        ));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_absurd_capacity_header_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phoneData.dat");

        let mut pool = ResourcePool::new();
        pool.generate_segment("138", 3).unwrap();
        save(&pool, &path).unwrap();

        // Record bytes are all present; only the capacity field is hostile
        let mut bytes = std::fs::read(&path).unwrap();
        bytes[8..12].copy_from_slice(&i32::MAX.to_le_bytes());
        std::fs::write(&path, bytes).unwrap();

        let mut loaded = ResourcePool::new();
        assert!(matches!(
            load(&mut loaded, &path),
            Err(CodecError::Corrupt("header capacity out of range for count"))
        ));
    }

    #[test]
    fn test_load_grows_capacity_but_never_shrinks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phoneData.dat");

        let mut pool = ResourcePool::new();
        pool.generate_segment("138", 500).unwrap();
        save(&pool, &path).unwrap();

        let mut loaded = ResourcePool::new();
        load(&mut loaded, &path).unwrap();
        assert!(loaded.capacity() >= 500);

        // Loading a small file into a big pool keeps the big capacity
        let small = ResourcePool::new();
        let small_path = dir.path().join("small.dat");
        save(&small, &small_path).unwrap();
        let big_capacity = loaded.capacity();
        load(&mut loaded, &small_path).unwrap();
        assert_eq!(loaded.capacity(), big_capacity);
        assert!(loaded.is_empty());
    }
}
