use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status of the langgen binary.
///
/// - `Success` (0): dictionaries were written or the command finished cleanly
/// - `Failure` (1): the command ran but refused to act, e.g. `init` over an existing config
/// - `Error` (2): the run was aborted (missing scan root, unreadable dictionary, I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
