//! Structured-flavor gallery: one widget struct with a method per
//! section, the retained-composition counterpart of the immediate
//! flavor. Same roster, same state, different idiom.

use draglab_widgets::{CounterButton, DragBox, DragBoxEvent, Grip};
use egui::{Align2, Ui, vec2};

use super::{BOX_GAP, GalleryState, PEN_CONTENT, PEN_VIEWPORT, track};

/// The gallery as a widget struct borrowing the shared state.
pub struct StructuredGallery<'a> {
    state: &'a mut GalleryState,
}

impl<'a> StructuredGallery<'a> {
    pub fn new(state: &'a mut GalleryState) -> Self {
        Self { state }
    }

    /// Render the whole gallery.
    pub fn show(mut self, ui: &mut Ui) {
        self.state.sync_controlled();

        self.header(ui);
        self.free_box(ui);
        self.axis_boxes(ui);
        self.locked_box(ui);
        self.delta_box(ui);
        self.grip_boxes(ui);
        self.grid_boxes(ui);
        self.bounded_box(ui);
        self.pen_boxes(ui);
        self.body_box(ui);
        self.offset_box(ui);
        self.controlled_boxes(ui);
        self.floating_box(ui);
    }

    /// The shared start/stop handler pair.
    fn on_drag_handlers(&mut self, event: Option<DragBoxEvent>) {
        track(&mut self.state.tracker, event);
    }

    fn header(&mut self, ui: &mut Ui) {
        ui.heading("DragLab (structured)");
        ui.label(format!(
            "Active drags: {}",
            self.state.tracker.active_drags()
        ));
        ui.hyperlink_to("Built with egui", "https://github.com/emilk/egui");
        ui.add_space(BOX_GAP);
    }

    fn free_box(&mut self, ui: &mut Ui) {
        let result = DragBox::new("free", &mut self.state.free).show(ui, |ui| {
            ui.label("I can be dragged anywhere");
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn axis_boxes(&mut self, ui: &mut Ui) {
        let counter = &mut self.state.counters.axis_x;
        let result = DragBox::new("axis_x", &mut self.state.axis_x).show(ui, |ui| {
            ui.label("I can only be dragged horizontally (x axis)");
            ui.add(CounterButton::new(counter));
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);

        let counter = &mut self.state.counters.axis_y;
        let result = DragBox::new("axis_y", &mut self.state.axis_y).show(ui, |ui| {
            ui.label("I can only be dragged vertically (y axis)");
            ui.add(CounterButton::new(counter));
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn locked_box(&mut self, ui: &mut Ui) {
        DragBox::new("locked", &mut self.state.locked).show(ui, |ui| {
            ui.label("I don't want to be dragged");
        });
        ui.add_space(BOX_GAP);
    }

    fn delta_box(&mut self, ui: &mut Ui) {
        let delta = self.state.tracker.delta();
        let counter = &mut self.state.counters.delta;
        let result = DragBox::new("delta", &mut self.state.delta).show(ui, |ui| {
            ui.label("I track my deltas");
            ui.label(format!("x: {:.0}, y: {:.0}", delta.x, delta.y));
            ui.add(CounterButton::new(counter));
        });
        if let Some(DragBoxEvent::Dragged(data)) = result.event {
            self.state.tracker.accumulate(data.delta);
        }
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn grip_boxes(&mut self, ui: &mut Ui) {
        let counter = &mut self.state.counters.handle;
        let result = DragBox::new("handle", &mut self.state.handle)
            .with_grip(Grip::Handle, "Drag here")
            .show(ui, |ui| {
                ui.label("You must click my handle to drag me");
                ui.add(CounterButton::new(counter));
            });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);

        let counter = &mut self.state.counters.cancel;
        let result = DragBox::new("cancel", &mut self.state.cancel)
            .with_grip(Grip::Cancel, "Can't drag here")
            .show(ui, |ui| {
                ui.label("Dragging here works");
                ui.add(CounterButton::new(counter));
            });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn grid_boxes(&mut self, ui: &mut Ui) {
        let result = DragBox::new("grid25", &mut self.state.grid25).show(ui, |ui| {
            ui.label("I snap to a 25 x 25 grid");
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);

        let result = DragBox::new("grid50", &mut self.state.grid50).show(ui, |ui| {
            ui.label("I snap to a 50 x 50 grid");
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn bounded_box(&mut self, ui: &mut Ui) {
        let result = DragBox::new("bounded", &mut self.state.bounded).show(ui, |ui| {
            ui.label("I can only be moved 100px in any direction.");
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn pen_boxes(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            egui::ScrollArea::both()
                .id_salt("pen")
                .max_width(PEN_VIEWPORT)
                .max_height(PEN_VIEWPORT)
                .show(ui, |ui| {
                    ui.allocate_ui(vec2(PEN_CONTENT, PEN_CONTENT), |ui| {
                        ui.set_min_size(vec2(PEN_CONTENT, PEN_CONTENT));

                        let result =
                            DragBox::new("penned_a", &mut self.state.penned_a).show(ui, |ui| {
                                ui.label("I can only be moved within my bounded parent.");
                            });
                        track(&mut self.state.tracker, result.event);
                        ui.add_space(BOX_GAP);

                        let result =
                            DragBox::new("penned_b", &mut self.state.penned_b).show(ui, |ui| {
                                ui.label("I also can only be moved within my bounded parent.");
                            });
                        track(&mut self.state.tracker, result.event);
                    });
                });
        });
        ui.add_space(BOX_GAP);
    }

    fn body_box(&mut self, ui: &mut Ui) {
        let counter = &mut self.state.counters.body;
        let result = DragBox::new("body", &mut self.state.body).show(ui, |ui| {
            ui.label("I can only be moved within the confines of the window.");
            ui.add(CounterButton::new(counter));
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn offset_box(&mut self, ui: &mut Ui) {
        let counter = &mut self.state.counters.offset;
        let result = DragBox::new("offset", &mut self.state.offset).show(ui, |ui| {
            ui.label("I have a default position of {x: 25, y: 25}, so I'm slightly offset.");
            ui.add(CounterButton::new(counter));
        });
        self.on_drag_handlers(result.event);
        ui.add_space(BOX_GAP);
    }

    fn controlled_boxes(&mut self, ui: &mut Ui) {
        let controlled = self.state.tracker.controlled();

        let links = &mut self.state.tracker;
        let result =
            DragBox::new("synced_on_drag", &mut self.state.synced_on_drag).show(ui, |ui| {
                ui.label("My position can be changed programmatically.");
                ui.label("I have a drag handler to sync state.");
                if ui.link(format!("Adjust x ({:.0})", controlled.x)).clicked() {
                    links.nudge_x();
                }
                if ui.link(format!("Adjust y ({:.0})", controlled.y)).clicked() {
                    links.nudge_y();
                }
            });
        match result.event {
            Some(DragBoxEvent::Started) => self.state.tracker.drag_started(),
            Some(DragBoxEvent::Dragged(data)) => self.state.tracker.set_controlled(data.position),
            Some(DragBoxEvent::Released(_)) => self.state.tracker.drag_stopped(),
            _ => {}
        }
        ui.add_space(BOX_GAP);

        let controlled = self.state.tracker.controlled();
        let links = &mut self.state.tracker;
        let result =
            DragBox::new("synced_on_stop", &mut self.state.synced_on_stop).show(ui, |ui| {
                ui.label("My position can be changed programmatically.");
                ui.label("I have a drag-stop handler to sync state.");
                if ui.link(format!("Adjust x ({:.0})", controlled.x)).clicked() {
                    links.nudge_x();
                }
                if ui.link(format!("Adjust y ({:.0})", controlled.y)).clicked() {
                    links.nudge_y();
                }
            });
        match result.event {
            Some(DragBoxEvent::Started) => self.state.tracker.drag_started(),
            Some(DragBoxEvent::Released(data)) => {
                self.state.tracker.controlled_drag_stopped(data.position);
            }
            _ => {}
        }
        ui.add_space(BOX_GAP);
    }

    fn floating_box(&mut self, ui: &mut Ui) {
        let counter = &mut self.state.counters.floating;
        let session = &mut self.state.floating;
        let tracker = &mut self.state.tracker;
        egui::Area::new(egui::Id::new("floating_box"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-100.0, -100.0))
            .show(ui.ctx(), |ui| {
                let result = DragBox::new("floating", session).show(ui, |ui| {
                    ui.label("I already have an absolute position.");
                    ui.add(CounterButton::new(counter));
                });
                track(tracker, result.event);
            });
    }
}
