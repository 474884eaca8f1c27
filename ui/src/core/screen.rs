//! Everything the analysis screen owns besides the input text: the active tab
//! and the submission state. Tab switches never reach the submission state,
//! so a held result survives a trip through About or Github.

use dioxus::prelude::{Signal, Writable};

use super::classification::ClassificationResult;
use super::route::ActiveRoute;
use super::session::{AnalysisState, StateCell};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    route: ActiveRoute,
    analysis: AnalysisState,
}

/// Enablement of the input area for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputControls {
    pub input_disabled: bool,
    pub trigger_disabled: bool,
    pub busy: bool,
}

impl ScreenState {
    pub fn route(&self) -> ActiveRoute {
        self.route
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    /// Switch tabs. Returns `false`, leaving everything as it was, when
    /// `next` is already active.
    pub fn select_route(&mut self, next: ActiveRoute) -> bool {
        if self.route == next {
            return false;
        }
        self.route = next;
        true
    }

    pub fn controls(&self) -> InputControls {
        let locked = !self.analysis.is_interactive();
        InputControls {
            input_disabled: locked,
            trigger_disabled: locked,
            busy: self.analysis.is_loading(),
        }
    }

    /// The result panel content, only on the App tab.
    pub fn visible_result(&self) -> Option<&ClassificationResult> {
        match self.route {
            ActiveRoute::App => self.analysis.result(),
            ActiveRoute::About | ActiveRoute::Github => None,
        }
    }
}

impl StateCell for Signal<ScreenState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut AnalysisState) -> R) -> R {
        self.with_mut(|screen| f(&mut screen.analysis))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::classifier::{ClassifyError, Classifier, SimulatedClassifier};
    use crate::core::session::{self, Phase};

    struct SharedScreen(Rc<RefCell<ScreenState>>);

    impl StateCell for SharedScreen {
        fn update<R>(&mut self, f: impl FnOnce(&mut AnalysisState) -> R) -> R {
            f(&mut self.0.borrow_mut().analysis)
        }
    }

    #[derive(Default)]
    struct CountingClassifier {
        calls: Cell<usize>,
    }

    impl Classifier for CountingClassifier {
        fn classify(
            &self,
            _text: String,
        ) -> LocalBoxFuture<'static, Result<ClassificationResult, ClassifyError>> {
            self.calls.set(self.calls.get() + 1);
            Box::pin(async { Ok(SimulatedClassifier::payload()) })
        }
    }

    #[test]
    fn retapping_the_active_tab_changes_nothing() {
        let mut screen = ScreenState::default();
        let before = screen.clone();
        assert!(!screen.select_route(ActiveRoute::App));
        assert_eq!(screen, before);

        assert!(screen.select_route(ActiveRoute::Github));
        let before = screen.clone();
        assert!(!screen.select_route(ActiveRoute::Github));
        assert_eq!(screen, before);
    }

    #[test]
    fn controls_are_disabled_only_while_loading() {
        let screen = Rc::new(RefCell::new(ScreenState::default()));
        let idle = screen.borrow().controls();
        assert!(!idle.input_disabled && !idle.trigger_disabled && !idle.busy);

        let mut cell = SharedScreen(screen.clone());
        cell.update(|state| state.begin("some text", 500)).unwrap();
        let loading = screen.borrow().controls();
        assert_eq!(
            loading,
            InputControls {
                input_disabled: true,
                trigger_disabled: true,
                busy: true,
            }
        );

        cell.update(|state| state.settle(Ok(SimulatedClassifier::payload())));
        assert_eq!(screen.borrow().controls(), idle);
    }

    #[tokio::test]
    async fn result_survives_a_tab_round_trip_without_resubmitting() {
        let screen = Rc::new(RefCell::new(ScreenState::default()));
        let classifier = Rc::new(CountingClassifier::default());

        let pending = session::submit(
            classifier.clone(),
            SharedScreen(screen.clone()),
            "patient shows mild memory lapses",
            500,
        )
        .unwrap();
        pending.await.unwrap();
        let held = screen.borrow().visible_result().cloned();
        assert!(held.is_some());

        assert!(screen.borrow_mut().select_route(ActiveRoute::About));
        assert_eq!(screen.borrow().visible_result(), None);
        assert_eq!(screen.borrow().analysis().phase(), Phase::Result);

        assert!(screen.borrow_mut().select_route(ActiveRoute::App));
        assert_eq!(screen.borrow().visible_result().cloned(), held);
        assert_eq!(classifier.calls.get(), 1);
    }

    #[tokio::test]
    async fn switching_tabs_while_loading_keeps_the_submission() {
        let screen = Rc::new(RefCell::new(ScreenState::default()));
        let pending = session::submit(
            Rc::new(CountingClassifier::default()),
            SharedScreen(screen.clone()),
            "text",
            500,
        )
        .unwrap();

        screen.borrow_mut().select_route(ActiveRoute::Github);
        assert!(screen.borrow().controls().busy);

        pending.await.unwrap();
        screen.borrow_mut().select_route(ActiveRoute::App);
        assert_eq!(
            screen.borrow().visible_result(),
            Some(&SimulatedClassifier::payload())
        );
    }
}
