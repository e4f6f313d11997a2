use workout_tracker_lib::workout::{Workout, WorkoutDetails};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub workouts: Vec<Workout>,
}

/// The sidebar list, newest entry last, mirroring the order markers were
/// placed in.
#[function_component]
pub fn WorkoutList(props: &Props) -> Html {
    if props.workouts.is_empty() {
        return html! {
            <p class="workouts-hint">{"Click the map to log a workout"}</p>
        };
    }

    html! {
        <ul class="workouts">
            { for props.workouts.iter().map(workout_item) }
        </ul>
    }
}

fn workout_item(workout: &Workout) -> Html {
    let (metric, extra) = match workout.details() {
        WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km,
        } => (
            format!("{pace_min_per_km:.1} min/km"),
            format!("{cadence_spm} spm"),
        ),
        WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_h,
        } => (
            format!("{speed_km_h:.1} km/h"),
            format!("{elevation_gain_m} m"),
        ),
    };

    html! {
        <li
            class={format!("workout workout-{}", workout.kind())}
            key={workout.workout_id().to_string()}
        >
            <h3>{ workout.label() }</h3>
            <div class="workout-details">
                <span>{ format!("{} km", workout.distance_km()) }</span>
                <span>{ format!("{} min", workout.duration_min()) }</span>
                <span>{ metric }</span>
                <span>{ extra }</span>
            </div>
        </li>
    }
}
