use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::EntryForm;
use workout_tracker_lib::workout::WorkoutKind;
use workout_tracker_lib::workout_form::WorkoutFormData;
use yew::prelude::*;

/// Handle to the entry form's DOM. The view binds the node refs once;
/// showing, reading and resetting all go through the refs so typed values
/// survive re-renders untouched.
pub struct FormHandle {
    form: NodeRef,
    kind: NodeRef,
    distance: NodeRef,
    duration: NodeRef,
    cadence: NodeRef,
    cadence_row: NodeRef,
    elevation: NodeRef,
    elevation_row: NodeRef,
}

impl FormHandle {
    pub fn new() -> Self {
        Self {
            form: NodeRef::default(),
            kind: NodeRef::default(),
            distance: NodeRef::default(),
            duration: NodeRef::default(),
            cadence: NodeRef::default(),
            cadence_row: NodeRef::default(),
            elevation: NodeRef::default(),
            elevation_row: NodeRef::default(),
        }
    }

    /// Flips the cadence and elevation rows to match the selected kind.
    /// Purely cosmetic, the hidden field is ignored when parsing anyway.
    pub fn toggle_kind_rows(&self) {
        for row in [&self.cadence_row, &self.elevation_row] {
            if let Some(row) = row.cast::<HtmlElement>() {
                let _ = row.class_list().toggle("form-row-hidden");
            }
        }
    }

    pub fn render(&self, onsubmit: Callback<SubmitEvent>, onchange: Callback<Event>) -> Html {
        html! {
            <form class="entry-form hidden" ref={self.form.clone()} {onsubmit}>
                <div class="form-row">
                    <label>{"Type"}</label>
                    <select ref={self.kind.clone()} {onchange}>
                        <option value="running">{"Running"}</option>
                        <option value="cycling">{"Cycling"}</option>
                    </select>
                </div>
                <div class="form-row">
                    <label>{"Distance"}</label>
                    <input ref={self.distance.clone()} placeholder="km" />
                </div>
                <div class="form-row">
                    <label>{"Duration"}</label>
                    <input ref={self.duration.clone()} placeholder="min" />
                </div>
                <div class="form-row" ref={self.cadence_row.clone()}>
                    <label>{"Cadence"}</label>
                    <input ref={self.cadence.clone()} placeholder="step/min" />
                </div>
                <div class="form-row form-row-hidden" ref={self.elevation_row.clone()}>
                    <label>{"Elev Gain"}</label>
                    <input ref={self.elevation.clone()} placeholder="meters" />
                </div>
                <button type="submit" class="form-btn">{"OK"}</button>
            </form>
        }
    }

    fn input_value(&self, field: &NodeRef) -> String {
        field
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }
}

impl EntryForm for FormHandle {
    fn show(&mut self) {
        if let Some(form) = self.form.cast::<HtmlElement>() {
            let _ = form.class_list().remove_1("hidden");
        }
        if let Some(distance) = self.distance.cast::<HtmlInputElement>() {
            let _ = distance.focus();
        }
    }

    fn values(&self) -> WorkoutFormData {
        let kind = self
            .kind
            .cast::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default()
            .parse()
            .unwrap_or(WorkoutKind::Running);

        WorkoutFormData {
            kind,
            distance_km: self.input_value(&self.distance),
            duration_min: self.input_value(&self.duration),
            cadence_spm: self.input_value(&self.cadence),
            elevation_gain_m: self.input_value(&self.elevation),
        }
    }

    fn clear_and_hide(&mut self) {
        for field in [&self.distance, &self.duration, &self.cadence, &self.elevation] {
            if let Some(input) = field.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
        if let Some(form) = self.form.cast::<HtmlElement>() {
            let _ = form.class_list().add_1("hidden");
        }
    }
}
