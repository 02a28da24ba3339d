//! Work distribution.
//!
//! The image list is cut into `N` contiguous chunks by [`partition`], and
//! [`Dispatcher`] runs one worker per chunk:
//!
//! ```text
//!   [img0 img1 img2 img3 img4 img5 img6]
//!        │ partition (N = 3)
//!        ▼
//!   [img0 img1] [img2 img3] [img4 img5 img6]
//!        │           │            │
//!        ▼           ▼            ▼
//!    worker 0    worker 1     worker 2      (spawn_blocking)
//!        └───────────┴────────────┘
//!                    │ join
//!                    ▼
//!             DispatchSummary
//! ```

mod dispatcher;
mod partition;

pub use dispatcher::{
    guard_panics, host_parallelism, run_worker, DispatchSummary, Dispatcher, WorkerReport,
};
pub use partition::partition;
