//! Effects with an accumulated log.
//!
//! - [`Writer`]: a payload paired with a monoid log, combined left to right
//!   by every chained step
//! - [`LogOnly`]: the log-only shape, built by [`tell`]
//! - [`WriterKind`]: the brand that makes Writer a
//!   [`Monad`](crate::typeclass::Monad)
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::{exec_writer, tell, writer};
//!
//! let audit = tell(vec!["Starting computation...".to_string()])
//!     .then_with(|| writer(3, vec!["Got number: 3".to_string()]));
//!
//! assert_eq!(
//!     exec_writer(audit),
//!     vec!["Starting computation...", "Got number: 3"]
//! );
//! ```

mod writer;

pub use writer::{
    LogOnly, Logged, Writer, WriterKind, exec_writer, run_writer, tell, writer,
};
