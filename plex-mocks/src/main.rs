use plex_mocks::App;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
