//! The secret-word pool for Ruse.
//!
//! A [`WordPool`] is loaded once at startup from a newline-delimited
//! word list and never grows afterwards. Each round draws one word;
//! a drawn word is consumed for the rest of the process lifetime.
//! When every word has been drawn, further draws fail with
//! [`PoolError::Exhausted`] and the operator needs a bigger list.

mod error;
mod pool;

pub use error::PoolError;
pub use pool::WordPool;
