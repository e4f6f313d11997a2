use gloo_utils::document;
use leaflet::{
    LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions,
};
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{Element, HtmlElement, Node};
use workout_tracker_lib::WorkoutMap;
use workout_tracker_lib::geo_point::GeoPoint;
use workout_tracker_lib::workout::Workout;
use yew::prelude::*;

const TILE_URL: &str = "https://tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const START_ZOOM: f64 = 16.0;

/// Owns the leaflet map and its detached container div. The view mounts the
/// container right away; the map itself is only created once the starting
/// position is known.
pub struct LeafletMap {
    container: HtmlElement,
    map: Option<Map>,
    on_click: Callback<GeoPoint>,
}

impl LeafletMap {
    pub fn new(on_click: Callback<GeoPoint>) -> Self {
        let container: Element = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_class_name("map");

        Self {
            container,
            map: None,
            on_click,
        }
    }

    /// The container div for the yew view to mount.
    pub fn html(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl WorkoutMap for LeafletMap {
    fn render(&mut self, center: GeoPoint) {
        let map = Map::new_with_element(&self.container, &MapOptions::default());
        map.set_view(&LatLng::new(center.latitude, center.longitude), START_ZOOM);
        add_tile_layer(&map);

        let on_click = self.on_click.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let lat_lng = event.lat_lng();
            on_click.emit(GeoPoint::new(lat_lng.lat(), lat_lng.lng()));
        });
        map.on("click", closure.as_ref());
        // The map keeps the handler for its whole life.
        closure.forget();

        self.map = Some(map);
    }

    fn place_marker(&mut self, workout: &Workout) {
        let Some(map) = &self.map else {
            return;
        };

        let position = workout.location();
        let marker = Marker::new(&LatLng::new(position.latitude, position.longitude));
        marker.add_to(map);

        let popup_opts = PopupOptions::default();
        popup_opts.set_max_width(250.0);
        popup_opts.set_min_width(100.0);
        popup_opts.set_auto_close(false);
        popup_opts.set_close_on_click(false);
        popup_opts.set_class_name(format!("{}-popup", workout.kind()));

        let popup = Popup::new(&popup_opts, None);
        popup.set_content(&workout.label().into());

        marker.bind_popup(&popup);
        marker.open_popup();
    }
}

fn add_tile_layer(map: &Map) {
    let opts = TileLayerOptions::new();
    opts.set_attribution(TILE_ATTRIBUTION.into());
    TileLayer::new_options(TILE_URL, &opts).add_to(map);
}
