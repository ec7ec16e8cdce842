//! Immediate-flavor gallery: free functions over the shared state.
//!
//! Renders the same roster as the structured gallery; only the
//! composition idiom differs.

use draglab_widgets::{CounterButton, DragBox, DragBoxEvent, Grip};
use egui::{Align2, Ui, vec2};

use super::{BOX_GAP, GalleryState, PEN_CONTENT, PEN_VIEWPORT, track};

/// Render the whole gallery.
pub fn show(state: &mut GalleryState, ui: &mut Ui) {
    state.sync_controlled();

    header(state, ui);
    free_box(state, ui);
    axis_x_box(state, ui);
    axis_y_box(state, ui);
    locked_box(state, ui);
    delta_box(state, ui);
    handle_box(state, ui);
    cancel_box(state, ui);
    grid_boxes(state, ui);
    bounded_box(state, ui);
    pen_boxes(state, ui);
    body_box(state, ui);
    offset_box(state, ui);
    synced_on_drag_box(state, ui);
    synced_on_stop_box(state, ui);
    floating_box(state, ui);
}

fn header(state: &GalleryState, ui: &mut Ui) {
    ui.heading("DragLab (immediate)");
    ui.label(format!("Active drags: {}", state.tracker.active_drags()));
    ui.hyperlink_to("Built with egui", "https://github.com/emilk/egui");
    ui.add_space(BOX_GAP);
}

fn free_box(state: &mut GalleryState, ui: &mut Ui) {
    let result = DragBox::new("free", &mut state.free).show(ui, |ui| {
        ui.label("I can be dragged anywhere");
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn axis_x_box(state: &mut GalleryState, ui: &mut Ui) {
    let counter = &mut state.counters.axis_x;
    let result = DragBox::new("axis_x", &mut state.axis_x).show(ui, |ui| {
        ui.label("I can only be dragged horizontally (x axis)");
        ui.add(CounterButton::new(counter));
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn axis_y_box(state: &mut GalleryState, ui: &mut Ui) {
    let counter = &mut state.counters.axis_y;
    let result = DragBox::new("axis_y", &mut state.axis_y).show(ui, |ui| {
        ui.label("I can only be dragged vertically (y axis)");
        ui.add(CounterButton::new(counter));
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn locked_box(state: &mut GalleryState, ui: &mut Ui) {
    DragBox::new("locked", &mut state.locked).show(ui, |ui| {
        ui.label("I don't want to be dragged");
    });
    ui.add_space(BOX_GAP);
}

fn delta_box(state: &mut GalleryState, ui: &mut Ui) {
    let delta = state.tracker.delta();
    let counter = &mut state.counters.delta;
    let result = DragBox::new("delta", &mut state.delta).show(ui, |ui| {
        ui.label("I track my deltas");
        ui.label(format!("x: {:.0}, y: {:.0}", delta.x, delta.y));
        ui.add(CounterButton::new(counter));
    });
    if let Some(DragBoxEvent::Dragged(data)) = result.event {
        state.tracker.accumulate(data.delta);
    }
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn handle_box(state: &mut GalleryState, ui: &mut Ui) {
    let counter = &mut state.counters.handle;
    let result = DragBox::new("handle", &mut state.handle)
        .with_grip(Grip::Handle, "Drag here")
        .show(ui, |ui| {
            ui.label("You must click my handle to drag me");
            ui.add(CounterButton::new(counter));
        });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn cancel_box(state: &mut GalleryState, ui: &mut Ui) {
    let counter = &mut state.counters.cancel;
    let result = DragBox::new("cancel", &mut state.cancel)
        .with_grip(Grip::Cancel, "Can't drag here")
        .show(ui, |ui| {
            ui.label("Dragging here works");
            ui.add(CounterButton::new(counter));
        });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn grid_boxes(state: &mut GalleryState, ui: &mut Ui) {
    let result = DragBox::new("grid25", &mut state.grid25).show(ui, |ui| {
        ui.label("I snap to a 25 x 25 grid");
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);

    let result = DragBox::new("grid50", &mut state.grid50).show(ui, |ui| {
        ui.label("I snap to a 50 x 50 grid");
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn bounded_box(state: &mut GalleryState, ui: &mut Ui) {
    let result = DragBox::new("bounded", &mut state.bounded).show(ui, |ui| {
        ui.label("I can only be moved 100px in any direction.");
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn pen_boxes(state: &mut GalleryState, ui: &mut Ui) {
    ui.group(|ui| {
        egui::ScrollArea::both()
            .id_salt("pen")
            .max_width(PEN_VIEWPORT)
            .max_height(PEN_VIEWPORT)
            .show(ui, |ui| {
                ui.allocate_ui(vec2(PEN_CONTENT, PEN_CONTENT), |ui| {
                    ui.set_min_size(vec2(PEN_CONTENT, PEN_CONTENT));

                    let result = DragBox::new("penned_a", &mut state.penned_a).show(ui, |ui| {
                        ui.label("I can only be moved within my bounded parent.");
                    });
                    track(&mut state.tracker, result.event);
                    ui.add_space(BOX_GAP);

                    let result = DragBox::new("penned_b", &mut state.penned_b).show(ui, |ui| {
                        ui.label("I also can only be moved within my bounded parent.");
                    });
                    track(&mut state.tracker, result.event);
                });
            });
    });
    ui.add_space(BOX_GAP);
}

fn body_box(state: &mut GalleryState, ui: &mut Ui) {
    let counter = &mut state.counters.body;
    let result = DragBox::new("body", &mut state.body).show(ui, |ui| {
        ui.label("I can only be moved within the confines of the window.");
        ui.add(CounterButton::new(counter));
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn offset_box(state: &mut GalleryState, ui: &mut Ui) {
    let counter = &mut state.counters.offset;
    let result = DragBox::new("offset", &mut state.offset).show(ui, |ui| {
        ui.label("I have a default position of {x: 25, y: 25}, so I'm slightly offset.");
        ui.add(CounterButton::new(counter));
    });
    track(&mut state.tracker, result.event);
    ui.add_space(BOX_GAP);
}

fn synced_on_drag_box(state: &mut GalleryState, ui: &mut Ui) {
    let controlled = state.tracker.controlled();
    let links = &mut state.tracker;
    let result = DragBox::new("synced_on_drag", &mut state.synced_on_drag).show(ui, |ui| {
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
        Some(DragBoxEvent::Started) => state.tracker.drag_started(),
        Some(DragBoxEvent::Dragged(data)) => state.tracker.set_controlled(data.position),
        Some(DragBoxEvent::Released(_)) => state.tracker.drag_stopped(),
        _ => {}
    }
    ui.add_space(BOX_GAP);
}

fn synced_on_stop_box(state: &mut GalleryState, ui: &mut Ui) {
    let controlled = state.tracker.controlled();
    let links = &mut state.tracker;
    let result = DragBox::new("synced_on_stop", &mut state.synced_on_stop).show(ui, |ui| {
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
        Some(DragBoxEvent::Started) => state.tracker.drag_started(),
        Some(DragBoxEvent::Released(data)) => {
            state.tracker.controlled_drag_stopped(data.position);
        }
        _ => {}
    }
    ui.add_space(BOX_GAP);
}

fn floating_box(state: &mut GalleryState, ui: &mut Ui) {
    let counter = &mut state.counters.floating;
    let session = &mut state.floating;
    let tracker = &mut state.tracker;
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
