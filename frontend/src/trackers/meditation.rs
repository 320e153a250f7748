use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

pub enum TimerAction {
    Start,
    Pause,
    Reset,
    /// One second elapsed.
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeditationTimer {
    pub remaining: u32,
    pub phase: TimerPhase,
    /// Bumped once per finished session; the component alerts on change.
    pub completed_sessions: u32,
}

impl Default for MeditationTimer {
    fn default() -> Self {
        MeditationTimer {
            remaining: config::MEDITATION_SECONDS,
            phase: TimerPhase::Idle,
            completed_sessions: 0,
        }
    }
}

impl MeditationTimer {
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn apply(&mut self, action: TimerAction) -> Option<TimerEvent> {
        match action {
            TimerAction::Start => {
                if !self.is_running() {
                    self.phase = TimerPhase::Running;
                }
                None
            }
            TimerAction::Pause => {
                if self.is_running() {
                    self.phase = TimerPhase::Paused;
                }
                None
            }
            TimerAction::Reset => {
                self.phase = TimerPhase::Idle;
                self.remaining = config::MEDITATION_SECONDS;
                None
            }
            TimerAction::Tick => {
                if !self.is_running() {
                    return None;
                }
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.phase = TimerPhase::Idle;
                    self.remaining = config::MEDITATION_SECONDS;
                    self.completed_sessions += 1;
                    return Some(TimerEvent::Completed);
                }
                None
            }
        }
    }

    /// `m:ss`
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Reducible for MeditationTimer {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(MeditationTimerWidget)]
pub fn meditation_timer_widget() -> Html {
    let timer = use_reducer(MeditationTimer::default);

    {
        let timer = timer.clone();
        let period = if timer.is_running() { config::MEDITATION_TICK_MS } else { 0 };
        use_interval(move || timer.dispatch(TimerAction::Tick), period);
    }

    {
        use_effect_with_deps(
            move |completed: &u32| {
                if *completed > 0 {
                    info!("Meditation session {} complete", completed);
                    browser::alert("Meditation session complete! Great job!");
                }
                || ()
            },
            timer.completed_sessions,
        );
    }

    let dispatch = |action: fn() -> TimerAction| {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| timer.dispatch(action()))
    };

    let running = timer.is_running();

    html! {
        <div class="meditation-timer">
            <div id="breathingCircle" class={classes!("breathing-circle", running.then(|| "breathing"))}>
                <span id="timerDisplay">{timer.display()}</span>
            </div>
            <div class="timer-controls">
                { if running {
                    html! { <button id="pauseMeditation" class="btn btn-secondary" onclick={dispatch(|| TimerAction::Pause)}>{"Pause"}</button> }
                } else {
                    html! { <button id="startMeditation" class="btn btn-primary" onclick={dispatch(|| TimerAction::Start)}>{"Start"}</button> }
                } }
                <button id="resetMeditation" class="btn btn-outline" onclick={dispatch(|| TimerAction::Reset)}>{"Reset"}</button>
            </div>
            <style>
                {r#"
                @keyframes breathe {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.2); }
                }
                .breathing-circle {
                    width: 180px;
                    height: 180px;
                    margin: 1rem auto 2rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--accent-soft);
                    border: 3px solid var(--accent);
                    font-size: 2rem;
                    font-weight: 600;
                }
                .breathing-circle.breathing { animation: breathe 4s infinite; }
                .timer-controls { display: flex; gap: 0.75rem; justify-content: center; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(timer: &mut MeditationTimer, n: u32) -> Vec<TimerEvent> {
        (0..n).filter_map(|_| timer.apply(TimerAction::Tick)).collect()
    }

    #[test]
    fn test_full_session_completes_once() {
        let mut timer = MeditationTimer::default();
        timer.apply(TimerAction::Start);
        let events = tick(&mut timer, 300);
        assert_eq!(events, vec![TimerEvent::Completed]);
        assert_eq!(timer.phase, TimerPhase::Idle);
        assert_eq!(timer.remaining, 300);
        assert_eq!(timer.completed_sessions, 1);

        // Idle timers ignore stray ticks.
        assert!(tick(&mut timer, 10).is_empty());
        assert_eq!(timer.remaining, 300);
    }

    #[test]
    fn test_pause_and_resume_keeps_remaining_time() {
        let mut timer = MeditationTimer::default();
        timer.apply(TimerAction::Start);
        tick(&mut timer, 100);
        timer.apply(TimerAction::Pause);
        assert_eq!(timer.phase, TimerPhase::Paused);

        tick(&mut timer, 50);
        assert_eq!(timer.remaining, 200);

        timer.apply(TimerAction::Start);
        assert_eq!(timer.phase, TimerPhase::Running);
        assert_eq!(timer.remaining, 200);
        let events = tick(&mut timer, 200);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut timer = MeditationTimer::default();
        timer.apply(TimerAction::Start);
        tick(&mut timer, 42);
        timer.apply(TimerAction::Reset);
        assert_eq!(timer, MeditationTimer::default());

        timer.apply(TimerAction::Start);
        tick(&mut timer, 5);
        timer.apply(TimerAction::Pause);
        timer.apply(TimerAction::Reset);
        assert_eq!(timer.phase, TimerPhase::Idle);
        assert_eq!(timer.remaining, 300);
    }

    #[test]
    fn test_double_start_does_not_change_state() {
        let mut timer = MeditationTimer::default();
        timer.apply(TimerAction::Start);
        tick(&mut timer, 3);
        timer.apply(TimerAction::Start);
        assert_eq!(timer.remaining, 297);
        assert!(timer.is_running());
    }

    #[test]
    fn test_display_format() {
        let mut timer = MeditationTimer::default();
        assert_eq!(timer.display(), "5:00");
        timer.apply(TimerAction::Start);
        tick(&mut timer, 1);
        assert_eq!(timer.display(), "4:59");
        tick(&mut timer, 290);
        assert_eq!(timer.display(), "0:09");
    }
}
