use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// The dispatch discipline of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First come, first served.
    Fcfs,
    /// Shortest job first, non-preemptive.
    Sjf,
    /// Lowest priority value first, non-preemptive.
    Priority,
    /// Shortest time to completion first (preemptive SJF).
    Stcf,
    /// Fixed quantum, arrival order.
    RoundRobin,
}

impl Policy {
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::Stcf,
        Policy::RoundRobin,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::Stcf => "stcf",
            Self::RoundRobin => "round_robin",
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS Scheduling"),
            Self::Sjf => write!(f, "SJF Scheduling"),
            Self::Priority => write!(f, "Priority Scheduling"),
            Self::Stcf => write!(f, "STCF Scheduling"),
            Self::RoundRobin => write!(f, "RR Scheduling"),
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    /// Accepts the policy names and the numeric selectors `0` to `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "fcfs" => Ok(Self::Fcfs),
            "1" | "sjf" => Ok(Self::Sjf),
            "2" | "priority" | "prio" => Ok(Self::Priority),
            "3" | "stcf" | "srtf" => Ok(Self::Stcf),
            "4" | "round_robin" | "roundrobin" | "round-robin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: fcfs, sjf, priority, stcf, round_robin (or 0-4)",
                s
            )),
        }
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
