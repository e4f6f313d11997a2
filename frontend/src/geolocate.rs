use gloo_utils::window;
use wasm_bindgen::{JsCast, prelude::Closure};
use workout_tracker_lib::geo_point::GeoPoint;
use yew::Callback;

/// Asks the browser for the current position. Exactly one of the two
/// callbacks fires, once; there is no retry and no timeout.
pub fn request_position(found: Callback<GeoPoint>, failed: Callback<()>) {
    let Ok(geolocation) = window().navigator().geolocation() else {
        failed.emit(());
        return;
    };

    let on_found =
        Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
            let coords = position.coords();
            found.emit(GeoPoint::new(coords.latitude(), coords.longitude()));
        });

    let on_error = {
        let failed = failed.clone();
        Closure::<dyn FnMut(web_sys::PositionError)>::new(move |_: web_sys::PositionError| {
            failed.emit(());
        })
    };

    if geolocation
        .get_current_position_with_error_callback(
            on_found.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .is_err()
    {
        failed.emit(());
    }

    // The browser holds these until the single callback fires.
    on_found.forget();
    on_error.forget();
}
