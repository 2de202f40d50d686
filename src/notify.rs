use std::rc::Rc;

use yew::prelude::*;

/// Delay between mounting the toast and adding the `visible` class, so the
/// CSS transition plays instead of the toast popping in.
pub const ENTER_DELAY_MS: u32 = 50;
/// How long the toast stays fully visible.
pub const DISPLAY_MS: u32 = 3_000;
/// Matches the CSS fade-out transition duration; the toast stays mounted
/// this long after losing the `visible` class.
pub const EXIT_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Unmounted,
    Mounting,
    Visible,
    Fading,
}

/// Transient notification state. A lifecycle walks
/// `Unmounted → Mounting → Visible → Fading → Unmounted`; each externally
/// initiated transition bumps `generation` so timers scheduled for a
/// superseded lifecycle can never advance a newer one.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub stage: Stage,
    pub message: AttrValue,
    pub kind: NoticeKind,
    pub generation: u64,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            stage: Stage::Unmounted,
            message: AttrValue::Static(""),
            kind: NoticeKind::Info,
            generation: 0,
        }
    }
}

pub enum ToastAction {
    /// Start a new lifecycle, replacing whatever is in flight.
    Show { message: AttrValue, kind: NoticeKind },
    /// Timer expiry for the given lifecycle; stale generations are ignored.
    Step { generation: u64 },
    /// Manual close: skip the remaining display window and fade out.
    Dismiss,
}

impl Toast {
    pub fn mounted(&self) -> bool {
        self.stage != Stage::Unmounted
    }

    pub fn visible(&self) -> bool {
        self.stage == Stage::Visible
    }

    /// How long the current stage lasts before the next [`ToastAction::Step`]
    /// should fire, if the stage is timed at all.
    pub fn step_delay_ms(&self) -> Option<u32> {
        match self.stage {
            Stage::Unmounted => None,
            Stage::Mounting => Some(ENTER_DELAY_MS),
            Stage::Visible => Some(DISPLAY_MS),
            Stage::Fading => Some(EXIT_DELAY_MS),
        }
    }
}

impl Reducible for Toast {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Show { message, kind } => Rc::new(Self {
                stage: Stage::Mounting,
                message,
                kind,
                generation: self.generation + 1,
            }),
            ToastAction::Step { generation } => {
                if generation != self.generation {
                    return self;
                }
                let next = match self.stage {
                    Stage::Unmounted => return self,
                    Stage::Mounting => Stage::Visible,
                    Stage::Visible => Stage::Fading,
                    Stage::Fading => Stage::Unmounted,
                };
                Rc::new(Self {
                    stage: next,
                    ..(*self).clone()
                })
            }
            ToastAction::Dismiss => match self.stage {
                Stage::Mounting | Stage::Visible => Rc::new(Self {
                    stage: Stage::Fading,
                    generation: self.generation + 1,
                    ..(*self).clone()
                }),
                Stage::Fading | Stage::Unmounted => self,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(toast: Toast, message: &'static str, kind: NoticeKind) -> Toast {
        Rc::new(toast)
            .reduce(ToastAction::Show {
                message: AttrValue::Static(message),
                kind,
            })
            .as_ref()
            .clone()
    }

    fn step(toast: Toast, generation: u64) -> Toast {
        Rc::new(toast)
            .reduce(ToastAction::Step { generation })
            .as_ref()
            .clone()
    }

    fn dismiss(toast: Toast) -> Toast {
        Rc::new(toast).reduce(ToastAction::Dismiss).as_ref().clone()
    }

    #[test]
    fn starts_unmounted_and_invisible() {
        let toast = Toast::default();
        assert!(!toast.mounted());
        assert!(!toast.visible());
        assert_eq!(toast.step_delay_ms(), None);
    }

    #[test]
    fn lifecycle_walks_stages_in_order() {
        let toast = show(Toast::default(), "Saved", NoticeKind::Success);
        assert_eq!(toast.stage, Stage::Mounting);
        assert!(toast.mounted());
        assert!(!toast.visible());
        assert_eq!(toast.step_delay_ms(), Some(ENTER_DELAY_MS));

        let generation = toast.generation;
        let toast = step(toast, generation);
        assert_eq!(toast.stage, Stage::Visible);
        assert!(toast.visible());
        assert_eq!(toast.step_delay_ms(), Some(DISPLAY_MS));

        let toast = step(toast, generation);
        assert_eq!(toast.stage, Stage::Fading);
        assert!(toast.mounted());
        assert!(!toast.visible());
        assert_eq!(toast.step_delay_ms(), Some(EXIT_DELAY_MS));

        let toast = step(toast, generation);
        assert_eq!(toast.stage, Stage::Unmounted);
        assert!(!toast.mounted());
    }

    #[test]
    fn visible_implies_mounted_at_every_stage() {
        let mut toast = show(Toast::default(), "hello", NoticeKind::Info);
        let generation = toast.generation;
        for _ in 0..4 {
            assert!(!toast.visible() || toast.mounted());
            toast = step(toast, generation);
        }
    }

    #[test]
    fn total_lifecycle_duration_is_deterministic() {
        let mut toast = show(Toast::default(), "hello", NoticeKind::Info);
        let generation = toast.generation;
        let mut elapsed = 0u32;
        while let Some(delay) = toast.step_delay_ms() {
            elapsed += delay;
            toast = step(toast, generation);
        }
        assert_eq!(elapsed, 3_550);
    }

    #[test]
    fn retrigger_restarts_with_latest_message() {
        let toast = show(Toast::default(), "first", NoticeKind::Success);
        let stale = toast.generation;
        let toast = step(toast, stale);
        assert!(toast.visible());

        let toast = show(toast, "second", NoticeKind::Info);
        assert_eq!(toast.stage, Stage::Mounting);
        assert_eq!(toast.message.as_str(), "second");
        assert_eq!(toast.kind, NoticeKind::Info);

        // The superseded lifecycle's display-window timer fires late and
        // must not touch the new toast.
        let toast = step(toast, stale);
        assert_eq!(toast.stage, Stage::Mounting);
        assert_eq!(toast.message.as_str(), "second");
    }

    #[test]
    fn dismiss_short_circuits_to_fading() {
        let toast = show(Toast::default(), "bye", NoticeKind::Success);
        let stale = toast.generation;
        let toast = step(toast, stale);
        let toast = dismiss(toast);
        assert_eq!(toast.stage, Stage::Fading);
        assert_ne!(toast.generation, stale);

        // The orphaned display-window timer is a no-op...
        let toast = step(toast, stale);
        assert_eq!(toast.stage, Stage::Fading);
        // ...while the fade-out timer for the new generation unmounts.
        let generation = toast.generation;
        let toast = step(toast, generation);
        assert_eq!(toast.stage, Stage::Unmounted);
    }

    #[test]
    fn dismiss_is_inert_once_fading_or_unmounted() {
        let toast = dismiss(Toast::default());
        assert_eq!(toast.stage, Stage::Unmounted);

        let toast = show(Toast::default(), "bye", NoticeKind::Info);
        let generation = toast.generation;
        let toast = step(step(toast, generation), generation);
        assert_eq!(toast.stage, Stage::Fading);
        let fading_generation = toast.generation;
        let toast = dismiss(toast);
        assert_eq!(toast.stage, Stage::Fading);
        assert_eq!(toast.generation, fading_generation);
    }

    #[test]
    fn stray_steps_on_unmounted_toast_do_nothing() {
        let toast = step(Toast::default(), 0);
        assert_eq!(toast.stage, Stage::Unmounted);
    }
}
