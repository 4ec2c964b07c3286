// ABOUTME: Versioned binary on-disk format for subscriber records
//
// Same conventions as the pool codec: little-endian i32 scalars, fixed-width
// NUL-padded string fields. Each record carries its slot index so subscriber
// ids survive a reload intact even when earlier slots are vacant; the number
// pool persists those ids as owners.
//
// Layout:
//   header:  [version][count]
//   record:  [slot][name: 32][gender: 8][age][id_card: 19][job: 32][address: 64]

use super::{Subscriber, SubscriberStore, MAX_SUBSCRIBERS};
use crate::binfile::{self, CodecError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Version written to and required from the file header
pub const FORMAT_VERSION: i32 = 1;

const NAME_FIELD: usize = 32;
const GENDER_FIELD: usize = 8;
const ID_CARD_FIELD: usize = 19;
const JOB_FIELD: usize = 32;
const ADDRESS_FIELD: usize = 64;

/// Serialize every active record to `path`, overwriting any existing file
pub fn save(store: &SubscriberStore, path: &Path) -> Result<(), CodecError> {
    let mut w = BufWriter::new(File::create(path)?);

    binfile::write_i32(&mut w, FORMAT_VERSION)?;
    binfile::write_i32(&mut w, store.len() as i32)?;

    for (id, subscriber) in store.iter() {
        binfile::write_i32(&mut w, id)?;
        binfile::write_str_field(&mut w, &subscriber.name, NAME_FIELD)?;
        binfile::write_str_field(&mut w, &subscriber.gender, GENDER_FIELD)?;
        binfile::write_i32(&mut w, subscriber.age)?;
        binfile::write_str_field(&mut w, &subscriber.id_card, ID_CARD_FIELD)?;
        binfile::write_str_field(&mut w, &subscriber.job, JOB_FIELD)?;
        binfile::write_str_field(&mut w, &subscriber.address, ADDRESS_FIELD)?;
    }

    w.flush()?;
    tracing::info!(path = %path.display(), count = store.len(), "subscribers saved");
    Ok(())
}

/// Load `path` into `store`, replacing its contents. Fails closed on a
/// version mismatch.
pub fn load(store: &mut SubscriberStore, path: &Path) -> Result<(), CodecError> {
    let mut r = BufReader::new(File::open(path)?);

    let version = binfile::read_i32(&mut r)?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let count = binfile::read_i32(&mut r)?;
    if count < 0 {
        return Err(CodecError::Corrupt("negative record count"));
    }
    // Untrusted header; the store never holds more than MAX_SUBSCRIBERS, so a
    // larger count can only be garbage. Reject it before allocating from it.
    if count as usize > MAX_SUBSCRIBERS {
        return Err(CodecError::Corrupt("record count beyond store bounds"));
    }

    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let slot = binfile::read_i32(&mut r)?;
        let subscriber = Subscriber {
            name: binfile::read_str_field(&mut r, NAME_FIELD)?,
            gender: binfile::read_str_field(&mut r, GENDER_FIELD)?,
            age: binfile::read_i32(&mut r)?,
            id_card: binfile::read_str_field(&mut r, ID_CARD_FIELD)?,
            job: binfile::read_str_field(&mut r, JOB_FIELD)?,
            address: binfile::read_str_field(&mut r, ADDRESS_FIELD)?,
        };
        let slot = usize::try_from(slot).map_err(|_| CodecError::Corrupt("negative slot index"))?;
        records.push((slot, subscriber));
    }

    store.clear();
    for (slot, subscriber) in records {
        if !store.place(slot, subscriber) {
            return Err(CodecError::Corrupt("slot index beyond store bounds"));
        }
    }
    tracing::info!(path = %path.display(), count, "subscribers loaded");
    Ok(())
}
