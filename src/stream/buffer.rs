use log::debug;
use crate::stream::error::{is_valid_label, StreamError};
use crate::stream::sample::Sample;
/// Fixed-capacity, append-only run of samples for one named channel.
///
/// Storage is allocated once at construction and never grows. Appends past
/// capacity are rejected, never overwritten.
#[derive(Debug)]
pub struct DataStream<T: Sample> {
    name: String,
    samples: Box<[T]>,
    count: usize,
}
impl<T: Sample> DataStream<T> {
    pub fn new(name: impl Into<String>, capacity: usize) -> Result<Self, StreamError> {
        let name = name.into();
        if !is_valid_label(&name) {
            return Err(StreamError::InvalidLabel(name));
        }
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(capacity)
            .map_err(|_| StreamError::AllocationFailed(capacity))?;
        samples.resize(capacity, T::default());
        Ok(Self {
            name,
            samples: samples.into_boxed_slice(),
            count: 0,
        })
    }
    /// Same as [`DataStream::new`] for capacities coming from signed sources
    /// such as config files. Negative values, and values that do not fit in
    /// `usize`, are rejected.
    pub fn with_signed_capacity(
        name: impl Into<String>,
        capacity: i64,
    ) -> Result<Self, StreamError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| StreamError::InvalidCapacity(capacity))?;
        Self::new(name, capacity)
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Maximum number of samples the stream can hold.
    pub fn size(&self) -> usize {
        self.samples.len()
    }
    /// Number of samples added since creation or the last reset.
    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    pub fn is_full(&self) -> bool {
        self.count == self.samples.len()
    }
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.count
    }
    pub fn data(&self) -> &[T] {
        &self.samples[..self.count]
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data().iter()
    }
    /// Stores `value` in the next free slot. Returns false, leaving the stream
    /// untouched, once every slot is taken.
    pub fn append(&mut self, value: T) -> bool {
        self.try_append(value).is_ok()
    }
    /// Like [`DataStream::append`] but hands the rejected value back.
    pub fn try_append(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            debug!(
                "stream {} is full ({} samples), dropping value",
                self.name,
                self.samples.len()
            );
            return Err(value);
        }
        self.samples[self.count] = value;
        self.count += 1;
        Ok(())
    }
    /// Appends from `values` until the stream fills up. Returns how many were accepted.
    pub fn append_all(&mut self, values: impl IntoIterator<Item = T>) -> usize {
        let mut accepted = 0;
        for value in values {
            if !self.append(value) {
                break;
            }
            accepted += 1;
        }
        accepted
    }
    /// Logically empties the stream. Slot contents are left as they are and
    /// get overwritten by later appends.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}
impl<T: Sample> Clone for DataStream<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            samples: self.samples.clone(),
            count: self.count,
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.name.clone_from(&source.name);
        if self.samples.len() == source.samples.len() {
            self.samples.copy_from_slice(&source.samples);
        } else {
            self.samples = source.samples.clone();
        }
        self.count = source.count;
    }
}
