use crate::error::Galaxy3dResult;
use crate::{check, engine_trace};
use super::index_pool::IndexPool;

/// Fixed-capacity array of values addressed by [`IndexPool`] indices
///
/// The typical consumer of the pool: per-slot data for descriptor slots or
/// frames in flight, stored contiguously and addressed by a small `u32`.
/// Removing a value hands its index back to the pool, so slot reuse follows
/// the pool's FIFO order.
///
/// Unlike a bare pool, the table knows which slots are occupied, so removing
/// an index twice is harmless.
///
/// # Example
///
/// ```
/// use galaxy_3d_core::galaxy3d::utils::SlotTable;
///
/// let mut frames: SlotTable<&str> = SlotTable::new(3)?;
/// let a = frames.insert("frame A").unwrap();
/// let b = frames.insert("frame B").unwrap();
/// assert!(frames.insert("frame C").is_err()); // 2 usable slots
///
/// assert_eq!(frames.remove(a), Some("frame A"));
/// assert_eq!(frames.get(b), Some(&"frame B"));
/// # Ok::<(), galaxy_3d_core::galaxy3d::Error>(())
/// ```
pub struct SlotTable<T> {
    pool: IndexPool,
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> SlotTable<T> {
    /// Create a table over slots `[0, capacity)`
    ///
    /// # Errors
    ///
    /// Same as [`IndexPool::new`].
    pub fn new(capacity: usize) -> Galaxy3dResult<Self> {
        let pool = IndexPool::new(capacity)?;
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();

        engine_trace!("galaxy3d::SlotTable", "Created slot table with capacity {}", capacity);

        Ok(Self { pool, slots, len: 0 })
    }

    /// Store a value in a free slot and return its index
    ///
    /// Hands the value back when every slot is taken.
    pub fn insert(&mut self, value: T) -> Result<u32, T> {
        let Some(index) = self.pool.acquire() else {
            return Err(value);
        };

        let slot = &mut self.slots[index as usize];
        check!(slot.is_none(), "slot {} vended while occupied", index);
        *slot = Some(value);
        self.len += 1;
        Ok(index)
    }

    /// Take the value out of a slot and free the slot
    ///
    /// Returns `None` for vacant or out-of-range indices.
    pub fn remove(&mut self, index: u32) -> Option<T> {
        let value = self.slots.get_mut(index as usize)?.take()?;
        self.pool.release(index);
        self.len -= 1;
        Some(value)
    }

    /// Get the value stored at `index`
    pub fn get(&self, index: u32) -> Option<&T> {
        self.slots.get(index as usize)?.as_ref()
    }

    /// Get a mutable reference to the value stored at `index`
    pub fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.slots.get_mut(index as usize)?.as_mut()
    }

    /// Whether `index` currently holds a value
    pub fn contains(&self, index: u32) -> bool {
        self.get(index).is_some()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the slot universe (one more than the usable slot count)
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Iterate over occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index as u32, value)))
    }
}

#[cfg(test)]
#[path = "slot_table_tests.rs"]
mod tests;
