use std::{
    cell::Cell,
    collections::{vec_deque, VecDeque},
};

use log::{debug, trace};
use num_traits::{Num, Zero};

use crate::{config::WindowConfig, Error, Result};

/// Numeric types a [`MovingAverage`] can hold: the primitive integers up to 64
/// bits and both floats.
///
/// Samples are summed in [`Accumulator`](Self::Accumulator), which is wide
/// enough that a window of in-range samples never overflows.
pub trait Sample: Copy + Num {
    type Accumulator: Copy + Num;

    fn widen(self) -> Self::Accumulator;

    /// Converts a mean back to the sample type. The mean of in-range samples is
    /// always in range.
    fn narrow(mean: Self::Accumulator) -> Self;

    fn window_len(len: usize) -> Self::Accumulator;
}

macro_rules! impl_sample {
    ($acc:ty => $($t:ty),*) => {
        $(
            impl Sample for $t {
                type Accumulator = $acc;

                #[inline]
                fn widen(self) -> $acc {
                    self as $acc
                }

                #[inline]
                fn narrow(mean: $acc) -> Self {
                    mean as $t
                }

                #[inline]
                fn window_len(len: usize) -> $acc {
                    len as $acc
                }
            }
        )*
    };
}

impl_sample!(i128 => i8, i16, i32, i64, isize);
impl_sample!(u128 => u8, u16, u32, u64, usize);
impl_sample!(f64 => f32, f64);

/// Sliding window over the last `max_length` samples.
///
/// The mean is computed lazily: pushes only mark the cached value stale and the
/// next call to [`value`](Self::value) sums the window once.
#[derive(Debug, Clone)]
pub struct MovingAverage<T: Copy> {
    queue: VecDeque<T>,
    max_length: usize,
    /// `None` while dirty.
    cached: Cell<Option<T>>,
}

impl<T> MovingAverage<T>
where
    T: Sample,
{
    /// Creates an empty window holding at most `max_length` samples.
    ///
    /// # Panics
    ///
    /// Panics if `max_length` is zero. Use [`try_new`](Self::try_new) to handle those cases.
    pub fn new(max_length: usize) -> Self {
        match Self::try_new(max_length) {
            Ok(average) => average,
            Err(e) => panic!("invalid moving average window: {e}"),
        }
    }

    pub fn try_new(max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::ZeroCapacity);
        }

        debug!("Created moving average window of {max_length} samples");

        Ok(Self {
            queue: VecDeque::new(),
            max_length,
            cached: Cell::new(Some(T::zero())),
        })
    }

    pub fn from_config(config: WindowConfig) -> Result<Self> {
        Self::try_new(config.max_length)
    }

    /// Appends a sample, evicting the oldest one when the window is full.
    pub fn push(&mut self, value: T) {
        if self.queue.len() >= self.max_length {
            self.queue.pop_front();
            trace!("Window full at {} samples, evicted oldest", self.max_length);
        }
        self.queue.push_back(value);
        self.cached.set(None);
    }

    /// Mean of the current window, or zero when nothing has been pushed.
    ///
    /// Integer means truncate toward zero.
    pub fn value(&self) -> T {
        if let Some(value) = self.cached.get() {
            value
        } else {
            let sum = self
                .queue
                .iter()
                .fold(<T::Accumulator as Zero>::zero(), |sum, &v| sum + v.widen());
            let value = T::narrow(sum / T::window_len(self.queue.len()));
            debug!("Recomputed moving average over {} samples", self.queue.len());
            self.cached.set(Some(value));
            value
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() == self.max_length
    }

    pub fn max_len(&self) -> usize {
        self.max_length
    }

    /// Oldest sample, the next one to be evicted.
    pub fn front(&self) -> Result<T> {
        self.queue.front().copied().ok_or(Error::QueueEmpty)
    }

    /// Most recently pushed sample.
    pub fn back(&self) -> Result<T> {
        self.queue.back().copied().ok_or(Error::QueueEmpty)
    }

    /// Copy of the window contents, oldest first.
    pub fn queue(&self) -> Vec<T> {
        self.queue.iter().copied().collect()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.queue.iter()
    }

    /// Drops every sample, leaving the window as freshly constructed.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cached.set(Some(T::zero()));
    }
}

impl<T> Extend<T> for MovingAverage<T>
where
    T: Sample,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a MovingAverage<T>
where
    T: Copy,
{
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.queue.iter()
    }
}
