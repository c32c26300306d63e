//! Run-level lifecycle notifications

use crate::error::Result;

/// Listener for the start and termination of a whole segmentation run
///
/// Both notifications default to doing nothing, so implementors only
/// override what they need.
pub trait ProgramStateListener {
    /// Called once before the first input line is processed
    fn on_program_start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once after the last input line has been processed
    fn on_program_end(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl ProgramStateListener for Silent {}

    #[test]
    fn test_default_notifications_succeed() {
        let mut listener = Silent;
        assert!(listener.on_program_start().is_ok());
        assert!(listener.on_program_end().is_ok());
    }
}
