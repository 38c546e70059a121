//! Protokoll der ausgeführten Commands: Gesamtzähler plus die jüngsten Einträge.

use std::collections::VecDeque;

use super::AppCommand;

/// Zählt alle ausgeführten Commands und behält die letzten `RECENT_CAPACITY`.
#[derive(Debug, Default)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    total: usize,
}

impl CommandLog {
    /// Anzahl der aufbewahrten jüngsten Commands.
    pub const RECENT_CAPACITY: usize = 1000;

    /// Leeres Protokoll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen ausgeführten Command.
    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == Self::RECENT_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl aller jemals ausgeführten Commands (wird nie gekürzt).
    pub fn total(&self) -> usize {
        self.total
    }

    /// `true`, solange noch kein Command ausgeführt wurde.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_keeps_counting_past_capacity() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::RECENT_CAPACITY {
            log.record(&AppCommand::FollowOrigin);
        }
        log.record(&AppCommand::ClearMeasurement);

        assert_eq!(log.total(), CommandLog::RECENT_CAPACITY + 1);
        assert_eq!(log.recent.len(), CommandLog::RECENT_CAPACITY);
        assert!(matches!(log.last(), Some(AppCommand::ClearMeasurement)));
    }

    #[test]
    fn test_empty_log() {
        let log = CommandLog::new();
        assert!(log.is_empty());
        assert_eq!(log.total(), 0);
        assert!(log.last().is_none());
    }
}
