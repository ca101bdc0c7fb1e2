fn main() {
    newsdesk::app::startup::startup();
}
