//! Labelled value controls.

use egui::{Color32, RichText, Ui};
use std::ops::RangeInclusive;

use crate::{sizing, theme};

/// Clamp `value` into `range` and round it to the nearest multiple of `step`
/// counted from the range start.
pub fn snap_to_step(value: f64, range: RangeInclusive<f64>, step: f64) -> f64 {
    let (min, max) = (*range.start(), *range.end());
    let clamped = value.clamp(min, max);
    if step <= 0.0 {
        return clamped;
    }
    let snapped = min + ((clamped - min) / step).round() * step;
    snapped.min(max)
}

fn row_label(ui: &mut Ui, label: &str) {
    ui.add_sized(
        [sizing::LABEL_WIDTH, 18.0],
        egui::Label::new(RichText::new(label).size(11.0).color(theme::TEXT_MUTED)),
    );
}

/// `label  [slider] value` row. Returns true when `value` changed.
///
/// Values coming in outside the range are shown clamped but only written
/// back once the user moves the slider.
pub fn range_slider_row(
    ui: &mut Ui,
    label: &str,
    value: &mut f64,
    range: RangeInclusive<f64>,
    step: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        row_label(ui, label);
        let mut edited = snap_to_step(*value, range.clone(), step);
        let slider = egui::Slider::new(&mut edited, range.clone())
            .step_by(step)
            .integer()
            .show_value(true);
        if ui.add(slider).changed() {
            *value = snap_to_step(edited, range, step);
            changed = true;
        }
    });
    changed
}

/// `label  value` row for read-only numbers.
pub fn readout_row(ui: &mut Ui, label: &str, value: f64) {
    ui.horizontal(|ui| {
        row_label(ui, label);
        ui.label(RichText::new(format!("{value:.0}")).size(12.0).color(Color32::from_gray(60)));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_clamps() {
        assert!((snap_to_step(0.0, 1.0..=500.0, 1.0) - 1.0).abs() < f64::EPSILON);
        assert!((snap_to_step(900.0, 5.0..=250.0, 1.0) - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_rounds_to_step() {
        assert!((snap_to_step(42.4, 1.0..=500.0, 1.0) - 42.0).abs() < f64::EPSILON);
        assert!((snap_to_step(42.6, 1.0..=500.0, 1.0) - 43.0).abs() < f64::EPSILON);
        assert!((snap_to_step(12.0, 5.0..=250.0, 5.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_without_step() {
        assert!((snap_to_step(42.4, 1.0..=500.0, 0.0) - 42.4).abs() < f64::EPSILON);
    }
}
