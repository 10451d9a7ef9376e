//! The scheduling disciplines.
//!
//! The non-preemptive ones (FCFS, SJF, Priority) are computed in closed form
//! by default and can also be stepped tick by tick. STCF and Round Robin are
//! always stepped.
//!
mod closed_form;
mod stepped;

mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::Sjf;

mod priority;
pub use priority::Priority;

mod stcf;
pub use stcf::Stcf;

mod round_robin;
pub use round_robin::RoundRobin;
