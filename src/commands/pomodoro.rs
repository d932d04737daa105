use crate::{
    db::kv::KvStore,
    libs::{
        messages::Message,
        notify::{ConsoleSink, Level, Notification, NotificationSink},
        pomodoro::Pomodoro,
        preferences::Preferences,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

#[derive(Debug, Args)]
pub struct PomodoroArgs {
    /// Focus minutes, defaults to the focus mode preference
    #[arg(short, long)]
    focus: Option<u32>,
    /// Break minutes, defaults to the focus mode preference
    #[arg(short = 'b', long = "break")]
    break_minutes: Option<u32>,
    /// Start with the break instead of a focus block
    #[arg(long)]
    rest: bool,
}

pub async fn cmd(args: PomodoroArgs) -> Result<()> {
    let preferences = Preferences::load(&KvStore::new()?)?;
    let mut focus = preferences.focus_mode.clone();
    if let Some(minutes) = args.focus {
        focus.pomodoro_duration = minutes;
    }
    if let Some(minutes) = args.break_minutes {
        focus.break_duration = minutes;
    }

    let mut timer = Pomodoro::from_focus_mode(&focus);
    if args.rest {
        timer.switch_phase();
    }
    run(&mut timer, &ConsoleSink).await;
    Ok(())
}

/// Counts the current phase down to zero, or until Ctrl+C.
pub async fn run<S: NotificationSink>(timer: &mut Pomodoro, sink: &S) {
    sink.notify(Notification::new(Level::Info, timer.toggle()));

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = timer.tick() {
                    sink.notify(Notification::new(Level::Success, event.message()));
                    return;
                }
                if timer.remaining() % 60 == 0 {
                    msg_print!(Message::PomodoroRemaining(timer.format_remaining()));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                sink.notify(Notification::new(Level::Info, timer.toggle()));
                return;
            }
        }
    }
}
