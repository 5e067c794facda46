//! Banner, summary, and the recommendation picked from the probe outcomes

use crate::probe::ProbeKind;
use std::io::{self, Write};

/// Printed in the banner when no library version can be determined.
pub const NOT_IMPORTED: &str = "Not imported";

/// Pass/fail per probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcomes {
    pub local: bool,
    pub remote: bool,
    pub alternate: bool,
}

impl Outcomes {
    pub fn new(local: bool, remote: bool, alternate: bool) -> Self {
        Self {
            local,
            remote,
            alternate,
        }
    }

    pub fn get(&self, kind: ProbeKind) -> bool {
        match kind {
            ProbeKind::Local => self.local,
            ProbeKind::Remote => self.remote,
            ProbeKind::Alternate => self.alternate,
        }
    }

    pub fn set(&mut self, kind: ProbeKind, success: bool) {
        match kind {
            ProbeKind::Local => self.local = success,
            ProbeKind::Remote => self.remote = success,
            ProbeKind::Alternate => self.alternate = success,
        }
    }

    pub fn all_failed(&self) -> bool {
        !(self.local || self.remote || self.alternate)
    }
}

/// Which configuration path to use, first match wins: local, remote, alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Local,
    Remote,
    Alternate,
    ReviewInstallation,
}

impl Recommendation {
    pub fn select(outcomes: &Outcomes) -> Self {
        if outcomes.local {
            Recommendation::Local
        } else if outcomes.remote {
            Recommendation::Remote
        } else if outcomes.alternate {
            Recommendation::Alternate
        } else {
            Recommendation::ReviewInstallation
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Local => {
                "Use the local segment implementation for direct access"
            }
            Recommendation::Remote => {
                "Make sure the vector store server is running and use the HTTP client"
            }
            Recommendation::Alternate => "Use the REST implementation with proper host configuration",
            Recommendation::ReviewInstallation => {
                "Review the vector store installation and configuration"
            }
        }
    }
}

/// Print the tool title, library version and runtime.
pub fn print_banner(out: &mut dyn Write, library_version: Option<&str>) -> io::Result<()> {
    writeln!(out, "Vector Store Diagnostic Tool")?;
    writeln!(
        out,
        "Client library version: {}",
        library_version.unwrap_or(NOT_IMPORTED)
    )?;
    writeln!(
        out,
        "Runtime: {} {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH,
        std::env::consts::FAMILY
    )
}

/// Print one line per probe, then the recommendation.
pub fn print_summary(out: &mut dyn Write, outcomes: &Outcomes) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Summary ---")?;
    for kind in ProbeKind::ALL {
        let status = if outcomes.get(kind) {
            "✅ Success"
        } else {
            "❌ Failed"
        };
        writeln!(out, "{}: {}", kind.label(), status)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "RECOMMENDATION: {}",
        Recommendation::select(outcomes).message()
    )
}
