#[cfg(test)]
mod tests {
    use taskminder::libs::messages::Message;
    use taskminder::libs::pomodoro::{Phase, Pomodoro, PomodoroEvent};
    use taskminder::libs::preferences::FocusMode;

    #[test]
    fn test_starts_stopped_in_focus() {
        let timer = Pomodoro::new(25, 5);
        assert_eq!(timer.phase(), Phase::Focus);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 25 * 60);
        assert_eq!(timer.format_remaining(), "25:00");
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut timer = Pomodoro::new(1, 1);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining(), 60);

        assert_eq!(timer.toggle(), Message::PomodoroStarted(1));
        timer.tick();
        assert_eq!(timer.format_remaining(), "00:59");

        assert_eq!(timer.toggle(), Message::PomodoroPaused);
        timer.tick();
        assert_eq!(timer.remaining(), 59);
    }

    #[test]
    fn test_focus_runs_out() {
        let mut timer = Pomodoro::new(1, 1);
        timer.toggle();
        let events: Vec<_> = (0..60).filter_map(|_| timer.tick()).collect();
        assert_eq!(events, vec![PomodoroEvent::FocusFinished]);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(PomodoroEvent::FocusFinished.message(), Message::PomodoroFinished);
    }

    #[test]
    fn test_break_phase() {
        let mut timer = Pomodoro::new(25, 5);
        timer.toggle();
        timer.tick();
        assert_eq!(timer.switch_phase(), Phase::Break);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 5 * 60);
        assert_eq!(timer.toggle(), Message::BreakStarted(5));

        for _ in 0..299 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.tick(), Some(PomodoroEvent::BreakFinished));
        assert_eq!(timer.switch_phase(), Phase::Focus);
        assert_eq!(timer.remaining(), 25 * 60);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut timer = Pomodoro::new(2, 1);
        timer.toggle();
        timer.tick();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 120);
    }

    #[test]
    fn test_reset_during_break_returns_to_focus() {
        let mut timer = Pomodoro::new(25, 5);
        timer.switch_phase();
        timer.toggle();
        timer.tick();

        timer.reset();
        assert_eq!(timer.phase(), Phase::Focus);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 25 * 60);
    }

    #[test]
    fn test_apply_settings() {
        let mut timer = Pomodoro::from_focus_mode(&FocusMode::default());
        let focus = FocusMode {
            pomodoro_duration: 50,
            break_duration: 10,
            ..FocusMode::default()
        };
        timer.apply_settings(&focus);
        assert_eq!(timer.remaining(), 50 * 60);

        timer.toggle();
        timer.tick();
        timer.apply_settings(&FocusMode::default());
        assert_eq!(timer.remaining(), 50 * 60 - 1);
        assert_eq!(timer.phase_minutes(), 25);
    }
}
