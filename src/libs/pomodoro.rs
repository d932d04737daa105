//! Focus/break countdown driven by one-second ticks.

use crate::libs::messages::Message;
use crate::libs::preferences::FocusMode;

const SECS_PER_MINUTE: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focus,
    Break,
}

/// A countdown reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroEvent {
    FocusFinished,
    BreakFinished,
}

impl PomodoroEvent {
    pub fn message(self) -> Message {
        match self {
            PomodoroEvent::FocusFinished => Message::PomodoroFinished,
            PomodoroEvent::BreakFinished => Message::BreakFinished,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    focus_minutes: u32,
    break_minutes: u32,
    phase: Phase,
    remaining: u64,
    running: bool,
}

impl Pomodoro {
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes,
            break_minutes,
            phase: Phase::Focus,
            remaining: u64::from(focus_minutes) * SECS_PER_MINUTE,
            running: false,
        }
    }

    pub fn from_focus_mode(focus: &FocusMode) -> Self {
        Self::new(focus.pomodoro_duration, focus.break_duration)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left in the current phase.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn phase_minutes(&self) -> u32 {
        match self.phase {
            Phase::Focus => self.focus_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    fn phase_secs(&self) -> u64 {
        u64::from(self.phase_minutes()) * SECS_PER_MINUTE
    }

    /// Starts or pauses; returns the message to show.
    pub fn toggle(&mut self) -> Message {
        self.running = !self.running;
        match (self.running, self.phase) {
            (false, _) => Message::PomodoroPaused,
            (true, Phase::Focus) => Message::PomodoroStarted(self.focus_minutes),
            (true, Phase::Break) => Message::BreakStarted(self.break_minutes),
        }
    }

    /// Stops and starts over with a full focus block, even from a break.
    pub fn reset(&mut self) {
        self.phase = Phase::Focus;
        self.rewind();
    }

    /// Jumps to the other phase, stopped and rewound.
    pub fn switch_phase(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        };
        self.rewind();
        self.phase
    }

    fn rewind(&mut self) {
        self.running = false;
        self.remaining = self.phase_secs();
    }

    /// Advances one second. At zero the timer stops and reports which
    /// phase ended; the phase itself is left for the caller to switch.
    pub fn tick(&mut self) -> Option<PomodoroEvent> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }
        self.running = false;
        Some(match self.phase {
            Phase::Focus => PomodoroEvent::FocusFinished,
            Phase::Break => PomodoroEvent::BreakFinished,
        })
    }

    /// Picks up new durations. A stopped timer is rewound to the new length.
    pub fn apply_settings(&mut self, focus: &FocusMode) {
        self.focus_minutes = focus.pomodoro_duration;
        self.break_minutes = focus.break_duration;
        if !self.running {
            self.remaining = self.phase_secs();
        }
    }

    /// `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format!("{:02}:{:02}", self.remaining / SECS_PER_MINUTE, self.remaining % SECS_PER_MINUTE)
    }
}
