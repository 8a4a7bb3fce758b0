use std::{
    collections::HashMap,
    io::{self, BufRead, Cursor, Read, Seek, SeekFrom},
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::{
    foundation::error::{BadgeError, BadgeResult},
    render::badge::BadgeRenderer,
    status::catalog::BadgeStatus,
};

/// Produces the serialized badge for a status.
///
/// Implementations must be deterministic: the cache calls them at most once per status and
/// serves the result for the rest of the process lifetime.
pub trait BadgeSource: Send + Sync {
    /// Write the complete document for `status` into `out`.
    fn write_badge(&self, status: BadgeStatus, out: &mut dyn io::Write) -> io::Result<()>;
}

impl BadgeSource for BadgeRenderer {
    fn write_badge(&self, status: BadgeStatus, out: &mut dyn io::Write) -> io::Result<()> {
        self.render_status(status).write_svg(out)
    }
}

/// Independent reader over one cached badge.
///
/// Every stream starts at offset zero and owns its cursor, so reading or seeking one stream never
/// affects another stream over the same badge.
#[derive(Clone, Debug)]
pub struct BadgeStream {
    cursor: Cursor<Arc<[u8]>>,
}

impl BadgeStream {
    fn new(bytes: Arc<[u8]>) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    /// Complete document, regardless of the cursor position.
    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    /// Shared handle to the complete document.
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(self.cursor.get_ref())
    }

    /// Document length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Current read offset.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }
}

impl Read for BadgeStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for BadgeStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt)
    }
}

impl Seek for BadgeStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

#[derive(Default)]
struct Slot {
    bytes: Mutex<Option<Arc<[u8]>>>,
    renders: AtomicU64,
}

/// Process-lifetime cache of rendered badges keyed by status.
///
/// The first `get` for a status renders and commits an immutable byte buffer; later calls hand
/// out fresh [`BadgeStream`]s over that buffer. Concurrent first-time callers for the same status
/// wait on that status' slot, so the source runs once. A failed render commits nothing.
pub struct BadgeCache {
    source: Arc<dyn BadgeSource>,
    slots: Mutex<HashMap<BadgeStatus, Arc<Slot>>>,
}

impl std::fmt::Debug for BadgeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeCache")
            .field("entries", &self.len())
            .finish()
    }
}

impl BadgeCache {
    /// Empty cache rendering through `source`.
    pub fn new(source: Arc<dyn BadgeSource>) -> Self {
        Self {
            source,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Stream over the badge for `status`, rendering it on first use.
    pub fn get(&self, status: BadgeStatus) -> BadgeResult<BadgeStream> {
        let slot = self.slot(status);
        let mut bytes = lock(&slot.bytes);
        if let Some(bytes) = bytes.as_ref() {
            tracing::debug!(%status, "badge cache hit");
            return Ok(BadgeStream::new(Arc::clone(bytes)));
        }

        tracing::debug!(%status, "badge cache miss, rendering");
        let rendered = self.render(status, &slot)?;
        *bytes = Some(Arc::clone(&rendered));
        Ok(BadgeStream::new(rendered))
    }

    /// Number of renders attempted for `status`, failed ones included.
    pub fn render_count(&self, status: BadgeStatus) -> u64 {
        lock(&self.slots)
            .get(&status)
            .map(|slot| slot.renders.load(Ordering::Acquire))
            .unwrap_or(0)
    }

    /// Whether a rendered badge is committed for `status`.
    pub fn contains(&self, status: BadgeStatus) -> bool {
        self.committed().any(|s| s == status)
    }

    /// Number of committed badges.
    pub fn len(&self) -> usize {
        self.committed().count()
    }

    /// Whether no badge is committed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[tracing::instrument(skip(self, slot))]
    fn render(&self, status: BadgeStatus, slot: &Slot) -> BadgeResult<Arc<[u8]>> {
        slot.renders.fetch_add(1, Ordering::AcqRel);
        let mut buf = Vec::new();
        self.source
            .write_badge(status, &mut buf)
            .map_err(BadgeError::serialization)?;
        tracing::debug!(len = buf.len(), "badge rendered");
        Ok(Arc::from(buf))
    }

    fn slot(&self, status: BadgeStatus) -> Arc<Slot> {
        Arc::clone(lock(&self.slots).entry(status).or_default())
    }

    fn committed(&self) -> impl Iterator<Item = BadgeStatus> {
        let slots: Vec<(BadgeStatus, Arc<Slot>)> = lock(&self.slots)
            .iter()
            .map(|(status, slot)| (*status, Arc::clone(slot)))
            .collect();
        slots
            .into_iter()
            .filter(|(_, slot)| lock(&slot.bytes).is_some())
            .map(|(status, _)| status)
    }
}

// Guarded values are only ever absent or fully committed, so a poisoned lock is still consistent.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/cache/store.rs"]
mod tests;
