use std::fmt;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::check::check_failed;
use crate::{engine_bail, engine_trace, function_name, pedantic, unreachable_path};

const SOURCE: &str = "galaxy3d::IndexPool";

/// Occupancy of an [`IndexPool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// No free index: the next acquire fails
    Empty,
    /// Some indices free, some outstanding
    Partial,
    /// Every vendable index is free
    Full,
}

/// Fixed-capacity pool of free `u32` indices.
///
/// Vends unique indices from `[0, capacity)` and takes them back, in O(1) and
/// without touching the heap after construction. Used for descriptor slots,
/// frame-in-flight indices and any array-of-structures that needs small,
/// stable integer handles.
///
/// The free indices live in a ring buffer. `head == tail` means the ring is
/// empty, so one slot always stays unused as a gap and at most
/// `capacity - 1` indices can be outstanding at once. The initial fill leaves
/// index `capacity - 1` outside the ring, so it is not vended unless
/// something releases it.
///
/// Reuse is FIFO over the release order.
///
/// # Example
///
/// ```
/// use galaxy_3d_core::galaxy3d::utils::IndexPool;
///
/// let mut pool = IndexPool::new(4)?;
/// assert_eq!(pool.acquire(), Some(0));
/// assert_eq!(pool.acquire(), Some(1));
/// assert_eq!(pool.acquire(), Some(2));
/// assert_eq!(pool.acquire(), None);   // exhausted
///
/// pool.release(1);
/// assert_eq!(pool.acquire(), Some(1));
/// # Ok::<(), galaxy_3d_core::galaxy3d::Error>(())
/// ```
pub struct IndexPool {
    storage: Box<[u32]>,
    // Invariant: head == tail iff the ring is empty.
    // Invariant: [head, tail) (mod capacity) holds distinct free indices.
    head: usize,
    tail: usize,
}

impl IndexPool {
    /// Create a pool over `[0, capacity)`, with `capacity - 1` indices
    /// available to acquire
    ///
    /// # Errors
    ///
    /// Returns [`Galaxy3dError::InvalidCapacity`] if `capacity` is zero, or if
    /// `capacity - 1` does not fit in a `u32`.
    pub fn new(capacity: usize) -> Galaxy3dResult<Self> {
        if capacity == 0 || u32::try_from(capacity - 1).is_err() {
            engine_bail!(SOURCE, Galaxy3dError::InvalidCapacity(capacity));
        }

        // capacity - 1 fits in u32, so every position does too
        let storage: Box<[u32]> = (0..capacity).map(|index| index as u32).collect();

        engine_trace!(SOURCE, "Created index pool with capacity {}", capacity);

        Ok(Self {
            storage,
            head: 0,
            tail: capacity - 1,
        })
    }

    /// Take one free index out of the pool
    ///
    /// Returns `None` when the pool is exhausted; the pool is left unchanged.
    #[inline]
    pub fn acquire(&mut self) -> Option<u32> {
        if self.head == self.tail {
            return None;
        }

        let index = match self.storage.get(self.head) {
            Some(&index) => index,
            None => unreachable_path!(),
        };
        self.head = self.advance(self.head);
        Some(index)
    }

    /// Give back an index obtained from [`acquire`](Self::acquire)
    ///
    /// Only release outstanding indices, and each one once. Anything else
    /// corrupts the pool: pedantic builds stop with a fatal check on an
    /// out-of-range index or a release into a full ring, release builds do
    /// not check at all. Use [`try_release`](Self::try_release) for indices
    /// of uncertain origin.
    #[inline]
    pub fn release(&mut self, index: u32) {
        if pedantic!(index as usize >= self.capacity()) {
            check_failed(file!(), line!(), function_name!(), "released index out of range");
        }
        if pedantic!(self.advance(self.tail) == self.head) {
            check_failed(file!(), line!(), function_name!(), "release into a full ring");
        }

        self.push(index);
    }

    /// Checked [`release`](Self::release)
    ///
    /// # Errors
    ///
    /// - [`Galaxy3dError::IndexOutOfRange`] if `index >= capacity`
    /// - [`Galaxy3dError::PoolFull`] if every vendable index is already free
    ///
    /// The pool is unchanged on error. A double release that does not fill
    /// the ring cannot be detected.
    pub fn try_release(&mut self, index: u32) -> Galaxy3dResult<()> {
        let capacity = self.capacity();
        if index as usize >= capacity {
            engine_bail!(SOURCE, Galaxy3dError::IndexOutOfRange { index, capacity });
        }
        if self.advance(self.tail) == self.head {
            engine_bail!(SOURCE, Galaxy3dError::PoolFull { capacity });
        }

        self.push(index);
        Ok(())
    }

    /// Size of the index universe `[0, capacity)`
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of indices that can be acquired right now
    #[inline]
    pub fn available(&self) -> usize {
        if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.capacity() - self.head + self.tail
        }
    }

    /// Number of acquired indices not yet released
    #[inline]
    pub fn outstanding(&self) -> usize {
        self.capacity() - 1 - self.available()
    }

    /// Whether the next acquire fails
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Whether every vendable index is free
    #[inline]
    pub fn is_full(&self) -> bool {
        self.advance(self.tail) == self.head
    }

    /// Current occupancy
    ///
    /// A capacity-1 pool can never vend anything and always reports `Empty`.
    pub fn state(&self) -> PoolState {
        if self.is_empty() {
            PoolState::Empty
        } else if self.is_full() {
            PoolState::Full
        } else {
            PoolState::Partial
        }
    }

    #[inline]
    fn advance(&self, position: usize) -> usize {
        (position + 1) % self.capacity()
    }

    #[inline]
    fn push(&mut self, index: u32) {
        match self.storage.get_mut(self.tail) {
            Some(slot) => *slot = index,
            None => unreachable_path!(),
        }
        self.tail = self.advance(self.tail);
    }
}

impl fmt::Debug for IndexPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexPool")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("available", &self.available())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "index_pool_tests.rs"]
mod tests;
