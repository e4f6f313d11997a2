use crate::components::{entry_form::FormHandle, map_view::LeafletMap, workout_list::WorkoutList};
use gloo_console::info;
use workout_tracker_lib::WorkoutLog;
use workout_tracker_lib::geo_point::GeoPoint;
use yew::prelude::*;

mod components;
mod geolocate;

enum MainMsg {
    LocationFound(GeoPoint),
    LocationFailed,
    MapClicked(GeoPoint),
    KindChanged,
    Submitted,
}

struct Model {
    log: WorkoutLog<LeafletMap, FormHandle>,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();

        geolocate::request_position(
            link.callback(MainMsg::LocationFound),
            link.callback(|()| MainMsg::LocationFailed),
        );

        let map = LeafletMap::new(link.callback(MainMsg::MapClicked));

        Self {
            log: WorkoutLog::new(map, FormHandle::new()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::LocationFound(position) => {
                self.log.location_found(position);
                false
            }
            MainMsg::LocationFailed => {
                self.log.location_failed();
                alert("Could not get your position");
                false
            }
            MainMsg::MapClicked(point) => {
                self.log.map_clicked(point);
                false
            }
            MainMsg::KindChanged => {
                self.log.form().toggle_kind_rows();
                false
            }
            MainMsg::Submitted => match self.log.log_workout() {
                Ok(workout) => {
                    info!(format!("Logged {}", workout.label()));
                    true
                }
                Err(invalid) => {
                    alert(&invalid.to_string());
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link().clone();

        let onsubmit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            MainMsg::Submitted
        });
        let onchange = link.callback(|_: Event| MainMsg::KindChanged);

        html! { <>
            <div class="sidebar">
                { self.log.form().render(onsubmit, onchange) }
                <WorkoutList workouts={self.log.workouts().to_vec()} />
            </div>
            { self.log.map().html() }
        </> }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
