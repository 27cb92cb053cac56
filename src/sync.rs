//! Keeping the six input surfaces in step.
//!
//! The [`Controller`] owns the model and a [`View`]. A user edit on one surface goes to the model,
//! and the resulting snapshot is written into every other surface that shows something the edit
//! changed. Writing into a toolkit widget usually makes it fire its own change notification, which
//! would come straight back in as a new edit and bounce between the fields forever. While a
//! snapshot is being written the controller is `updating`, and anything that arrives in that window
//! is dropped.

use std::fmt;

use crate::entry::EntryError;
use crate::model::ColorSyncModel;
use crate::snapshot::Snapshot;

/// One of the picker's input surfaces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The hue wheel.
    Wheel,
    /// The saturation slider and its number box.
    Saturation,
    /// The lightness slider and its number box.
    Lightness,
    /// The hex text field.
    Hex,
    /// The RGB text field.
    Rgb,
    /// The CMYK text field.
    Cmyk,
}

impl Surface {
    /// Every surface, in the order a full repaint writes them.
    pub const ALL: [Surface; 6] = [
        Surface::Wheel,
        Surface::Saturation,
        Surface::Lightness,
        Surface::Hex,
        Surface::Rgb,
        Surface::Cmyk,
    ];

    /// The surfaces that need rewriting after an edit on `self`. The wheel and sliders only change
    /// one component, which the text fields all show; a text field changes everything, so the
    /// sliders, the wheel and the other two fields all follow. The edited surface is never in its
    /// own list: it already shows what the user entered.
    pub fn refreshed_by(self) -> &'static [Surface] {
        use self::Surface::*;
        match self {
            Wheel | Saturation | Lightness => &[Hex, Rgb, Cmyk],
            Hex => &[Saturation, Lightness, Wheel, Rgb, Cmyk],
            Rgb => &[Saturation, Lightness, Wheel, Hex, Cmyk],
            Cmyk => &[Saturation, Lightness, Wheel, Hex, Rgb],
        }
    }

    /// Whether this surface is one of the three text fields.
    pub fn is_text_field(self) -> bool {
        match self {
            Surface::Hex | Surface::Rgb | Surface::Cmyk => true,
            Surface::Wheel | Surface::Saturation | Surface::Lightness => false,
        }
    }

    /// The text or number this surface displays for `snapshot`.
    pub fn display_text(self, snapshot: &Snapshot) -> String {
        match self {
            Surface::Wheel => snapshot.hue.to_string(),
            Surface::Saturation => snapshot.saturation.to_string(),
            Surface::Lightness => snapshot.lightness.to_string(),
            Surface::Hex => snapshot.hex_text().to_string(),
            Surface::Rgb => snapshot.rgb_text(),
            Surface::Cmyk => snapshot.cmyk_text(),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Surface::Wheel => "wheel",
            Surface::Saturation => "saturation",
            Surface::Lightness => "lightness",
            Surface::Hex => "hex",
            Surface::Rgb => "rgb",
            Surface::Cmyk => "cmyk",
        };
        f.write_str(name)
    }
}

/// A user edit on one surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit {
    /// The wheel moved to an angle, in the wheel's convention.
    WheelAngle(i32),
    /// The saturation slider moved to a percentage.
    Saturation(i32),
    /// The lightness slider moved to a percentage.
    Lightness(i32),
    /// The hex field's text changed.
    Hex(String),
    /// The RGB field's text changed.
    Rgb(String),
    /// The CMYK field's text changed.
    Cmyk(String),
}

impl Edit {
    /// The surface the edit came from.
    pub fn surface(&self) -> Surface {
        match *self {
            Edit::WheelAngle(_) => Surface::Wheel,
            Edit::Saturation(_) => Surface::Saturation,
            Edit::Lightness(_) => Surface::Lightness,
            Edit::Hex(_) => Surface::Hex,
            Edit::Rgb(_) => Surface::Rgb,
            Edit::Cmyk(_) => Surface::Cmyk,
        }
    }
}

/// Something that displays the picker: a set of widgets, a terminal, a test double.
pub trait View {
    /// Writes what `surface` shows of `snapshot` into that surface. If the write makes the widget
    /// raise a change notification, as most toolkit widgets do for programmatic writes too, return
    /// it: the controller routes it back through [`Controller::handle`], where it is suppressed.
    fn show(&mut self, surface: Surface, snapshot: &Snapshot) -> Option<Edit>;
}

/// Owns the model and the view, and moves edits and snapshots between them.
#[derive(Debug)]
pub struct Controller<V> {
    model: ColorSyncModel,
    view: V,
    updating: bool,
    suppressed: usize,
}

impl<V: View> Controller<V> {
    /// A controller over `model`, drawing into `view`. Nothing is drawn until the first edit or
    /// [`render_all`](Controller::render_all).
    pub fn new(model: ColorSyncModel, view: V) -> Controller<V> {
        Controller {
            model,
            view,
            updating: false,
            suppressed: 0,
        }
    }

    /// The model.
    pub fn model(&self) -> &ColorSyncModel {
        &self.model
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably, for front-end state that lives in it (e.g. the wheel widget).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Whether a snapshot is being written right now.
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// How many echoed notifications have been dropped so far.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Writes the current snapshot into every surface, e.g. for the first paint.
    pub fn render_all(&mut self) -> Snapshot {
        let snapshot = self.model.snapshot();
        self.apply_snapshot(&Surface::ALL, &snapshot);
        snapshot
    }

    /// Applies a user edit and writes the result into the surfaces it affects.
    ///
    /// Returns `Ok(None)` without touching anything when called while a snapshot is being written,
    /// which is what stops a widget's echo from turning into another update.
    ///
    /// # Errors
    /// The [`EntryError`] from the model when a text field holds something that is not (yet) a
    /// color. The model and every surface are left as they were.
    pub fn handle(&mut self, edit: Edit) -> Result<Option<Snapshot>, EntryError> {
        if self.updating {
            self.suppressed += 1;
            trace!("suppressed {:?} while updating", edit);
            return Ok(None);
        }
        let source = edit.surface();
        let snapshot = match edit {
            Edit::WheelAngle(angle) => self.model.set_from_wheel_angle(angle),
            Edit::Saturation(percent) => self.model.set_from_saturation(percent),
            Edit::Lightness(percent) => self.model.set_from_lightness(percent),
            Edit::Hex(ref text) => self.model.set_from_hex(text)?,
            Edit::Rgb(ref text) => self.model.set_from_rgb(text)?,
            Edit::Cmyk(ref text) => self.model.set_from_cmyk(text)?,
        };
        self.apply_snapshot(source.refreshed_by(), &snapshot);
        Ok(Some(snapshot))
    }

    fn apply_snapshot(&mut self, targets: &[Surface], snapshot: &Snapshot) {
        self.updating = true;
        for &surface in targets {
            if let Some(echo) = self.view.show(surface, snapshot) {
                // still updating, so this only counts the echo
                let _ = self.handle(echo);
            }
        }
        self.updating = false;
        debug!("applied {} to {} surfaces", snapshot.hex, targets.len());
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    /// Records every write and echoes a fixed edit back, like a widget that fires its change
    /// signal on programmatic writes.
    #[derive(Debug, Default)]
    struct EchoingView {
        shown: Vec<(Surface, String)>,
        echo: Option<Edit>,
    }

    impl View for EchoingView {
        fn show(&mut self, surface: Surface, snapshot: &Snapshot) -> Option<Edit> {
            self.shown.push((surface, surface.display_text(snapshot)));
            self.echo.clone()
        }
    }

    fn surfaces(view: &EchoingView) -> Vec<Surface> {
        view.shown.iter().map(|&(surface, _)| surface).collect()
    }

    #[test]
    fn test_hex_edit_refreshes_everything_else() {
        let mut controller = Controller::new(ColorSyncModel::new(), EchoingView::default());
        let snapshot = controller
            .handle(Edit::Hex("#00FF00".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.hue, 120);
        assert_eq!(
            surfaces(controller.view()),
            vec![
                Surface::Saturation,
                Surface::Lightness,
                Surface::Wheel,
                Surface::Rgb,
                Surface::Cmyk
            ]
        );
        assert!(controller
            .view()
            .shown
            .contains(&(Surface::Rgb, "0, 255, 0".to_string())));
    }

    #[test]
    fn test_wheel_edit_refreshes_text_fields() {
        let mut controller = Controller::new(ColorSyncModel::new(), EchoingView::default());
        controller.handle(Edit::WheelAngle(90)).unwrap();
        assert_eq!(
            controller.view().shown,
            vec![
                (Surface::Hex, "#8000FF".to_string()),
                (Surface::Rgb, "128, 0, 255".to_string()),
                (Surface::Cmyk, "50, 100, 0, 0".to_string()),
            ]
        );
    }

    #[test]
    fn test_echoes_are_suppressed() {
        // every write echoes an RGB edit for blue; if any got through, the color would be blue
        let view = EchoingView {
            shown: vec![],
            echo: Some(Edit::Rgb("0, 0, 255".to_string())),
        };
        let mut controller = Controller::new(ColorSyncModel::new(), view);
        controller.handle(Edit::Hex("#00FF00".to_string())).unwrap();
        assert_eq!(controller.model().color().hue, 120);
        assert_eq!(controller.suppressed(), 5);
        assert!(!controller.is_updating());
        assert_eq!(controller.view().shown.len(), 5);

        // the guard is released afterwards: the next real edit goes through
        controller.handle(Edit::Saturation(0)).unwrap();
        assert_eq!(controller.model().color().saturation, 0);
        assert_eq!(controller.suppressed(), 8);
    }

    #[test]
    fn test_invalid_text_touches_nothing() {
        let mut controller = Controller::new(ColorSyncModel::new(), EchoingView::default());
        assert_eq!(
            controller.handle(Edit::Rgb("12, 34".to_string())),
            Err(EntryError::SeparatorCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            controller.handle(Edit::Hex("#12".to_string())),
            Err(EntryError::InvalidHex)
        );
        assert!(controller.view().shown.is_empty());
        assert_eq!(controller.model(), &ColorSyncModel::new());
    }

    #[test]
    fn test_render_all() {
        let mut controller = Controller::new(ColorSyncModel::new(), EchoingView::default());
        let snapshot = controller.render_all();
        assert_eq!(snapshot.hex, "#FF0000");
        assert_eq!(surfaces(controller.view()), Surface::ALL.to_vec());
        assert_eq!(controller.view().shown[0], (Surface::Wheel, "0".to_string()));
    }

    #[test]
    fn test_refresh_lists() {
        for &source in Surface::ALL.iter() {
            let targets = source.refreshed_by();
            assert!(!targets.contains(&source));
            if source.is_text_field() {
                assert_eq!(targets.len(), 5);
            } else {
                assert!(targets.iter().all(|t| t.is_text_field()));
            }
        }
        assert_eq!(Edit::Cmyk(String::new()).surface(), Surface::Cmyk);
        assert_eq!(Surface::Lightness.to_string(), "lightness");
    }
}
