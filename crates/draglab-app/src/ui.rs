//! Page chrome: flavor selector and the gallery panels.

use egui::{ComboBox, Context};

use crate::gallery::{GalleryState, immediate, structured::StructuredGallery};

/// Which gallery implementation is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFlavor {
    /// One widget struct with a method per section.
    #[default]
    Structured,
    /// Free functions over the shared state.
    Immediate,
}

impl GalleryFlavor {
    pub const ALL: [GalleryFlavor; 2] = [GalleryFlavor::Structured, GalleryFlavor::Immediate];

    pub fn label(self) -> &'static str {
        match self {
            GalleryFlavor::Structured => "draglab-structured",
            GalleryFlavor::Immediate => "draglab-immediate",
        }
    }
}

/// UI-side state that survives gallery rebuilds.
#[derive(Debug, Default)]
pub struct UiState {
    pub flavor: GalleryFlavor,
}

/// Render the page.
///
/// Switching flavor rebuilds the gallery state: every position, delta,
/// and count resets, like swapping out the example being displayed.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState, gallery: &mut GalleryState) {
    egui::TopBottomPanel::top("flavor_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Choose an example:");
            let previous = ui_state.flavor;
            ComboBox::from_id_salt("gallery_flavor")
                .selected_text(ui_state.flavor.label())
                .show_ui(ui, |ui| {
                    for flavor in GalleryFlavor::ALL {
                        ui.selectable_value(&mut ui_state.flavor, flavor, flavor.label());
                    }
                });
            if ui_state.flavor != previous {
                log::info!("switching gallery to {}", ui_state.flavor.label());
                *gallery = GalleryState::new();
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(ui_state.flavor.label())
            .show(ui, |ui| match ui_state.flavor {
                GalleryFlavor::Structured => StructuredGallery::new(gallery).show(ui),
                GalleryFlavor::Immediate => immediate::show(gallery, ui),
            });
    });
}
