//! Greeting formatting and pacing for the greeting service.
//!
//! The formatted strings are part of the service contract and are covered by
//! exact-format tests; change them only together with their tests.

use std::time::Duration;

use tracing::debug;

/// Number of messages GreetManyTimes emits.
pub const GREETING_ROUNDS: usize = 10;

/// Number of simulated work increments in GreetWithDeadline.
pub const WORK_INCREMENTS: u32 = 3;

/// Tunable durations for the paced demonstrations.
///
/// The defaults reproduce the original ~1s pacing; tests scale these down.
#[derive(Debug, Clone)]
pub struct GreeterSettings {
    /// Delay between consecutive GreetManyTimes messages.
    pub pace: Duration,

    /// Duration of one GreetWithDeadline work increment.
    pub work_increment: Duration,
}

impl Default for GreeterSettings {
    fn default() -> Self {
        Self {
            pace: Duration::from_secs(1),
            work_increment: Duration::from_secs(1),
        }
    }
}

/// Greeting formatting operations.
#[derive(Clone, Default)]
pub struct Service {
    settings: GreeterSettings,
}

impl Service {
    pub fn new(settings: GreeterSettings) -> Self {
        Self { settings }
    }

    /// Delay between consecutive paced messages.
    pub fn pace(&self) -> Duration {
        self.settings.pace
    }

    /// Duration of one simulated work increment.
    pub fn work_increment(&self) -> Duration {
        self.settings.work_increment
    }

    /// The plain greeting.
    pub fn greet(&self, first_name: &str) -> String {
        debug!(first_name, "formatting greeting");
        format!("Hello {first_name}")
    }

    /// One of the ten numbered greetings, `round` counted from 0.
    pub fn numbered_greeting(&self, first_name: &str, round: usize) -> String {
        format!("Hello {first_name} number {round}")
    }

    /// One fragment of the combined LongGreet response.
    ///
    /// No space between first and last name, trailing ", " included.
    pub fn long_greet_fragment(&self, first_name: &str, last_name: &str) -> String {
        format!("Hello {first_name}{last_name}, ")
    }

    /// The per-message GreetEveryone reply.
    pub fn stream_greeting(&self, first_name: &str) -> String {
        format!("Hello {first_name}!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_formats_first_name_only() {
        let service = Service::default();
        assert_eq!(service.greet("Ada"), "Hello Ada");
    }

    #[test]
    fn numbered_greeting_counts_from_zero() {
        let service = Service::default();
        assert_eq!(service.numbered_greeting("Ada", 0), "Hello Ada number 0");
        assert_eq!(service.numbered_greeting("Ada", 9), "Hello Ada number 9");
    }

    #[test]
    fn long_greet_fragment_has_no_space_between_names() {
        let service = Service::default();
        assert_eq!(service.long_greet_fragment("A", "B"), "Hello AB, ");
    }

    #[test]
    fn long_greet_fragments_concatenate_exactly() {
        let service = Service::default();
        let mut result = String::new();
        result.push_str(&service.long_greet_fragment("A", "B"));
        result.push_str(&service.long_greet_fragment("C", "D"));
        assert_eq!(result, "Hello AB, Hello CD, ");
    }

    #[test]
    fn stream_greeting_ends_with_exclamation() {
        let service = Service::default();
        assert_eq!(service.stream_greeting("Grace"), "Hello Grace!");
    }
}
