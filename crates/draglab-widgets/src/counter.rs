//! Click counter button.

use draglab_core::ClickCounter;
use egui::{Response, Ui, Widget};

/// Button wrapping a [`ClickCounter`]; each click increments it.
pub struct CounterButton<'a> {
    counter: &'a mut ClickCounter,
}

impl<'a> CounterButton<'a> {
    pub fn new(counter: &'a mut ClickCounter) -> Self {
        Self { counter }
    }
}

impl Widget for CounterButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.button(format!("I am clicked {} times", self.counter.count()));
        if response.clicked() {
            self.counter.increment();
        }
        response
    }
}
