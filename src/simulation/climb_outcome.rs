use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClimbOutcome {
    TargetReached,
    StepLimitReached,
}

impl fmt::Display for ClimbOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClimbOutcome::TargetReached => write!(f, "Target altitude reached"),
            ClimbOutcome::StepLimitReached => write!(f, "Step limit reached below target"),
        }
    }
}
