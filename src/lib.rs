//! A fixed-capacity sliding window that keeps the most recent samples and
//! reports their arithmetic mean.
//!
//! ```
//! use moving_average::MovingAverage;
//!
//! let mut average = MovingAverage::<i32>::new(3);
//! average.extend([2, 4, 6]);
//! assert_eq!(average.value(), 4);
//!
//! average.push(8);
//! assert_eq!(average.queue(), vec![4, 6, 8]);
//! assert_eq!(average.value(), 6);
//! ```
//!
//! Integer samples use truncating division, floats use true division.

mod config;
mod error;
mod moving_average;

pub use config::WindowConfig;
pub use error::{Error, Result};
pub use moving_average::{MovingAverage, Sample};
